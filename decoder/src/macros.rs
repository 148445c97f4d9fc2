// Licensed under the Apache-2.0 license

//! Macro text assembly: the append-only string builder plus the per-pad
//! rendering context with its platform-neutral field formatters.

use crate::register::{Register, MAX_DW_NUM, PAD_CFG_DW0, PAD_CFG_DW1};

/// IOSSTATE value that keeps TX disabled and RX enabled in standby.
pub(crate) const STANDBY_TXD_RXE: u8 = 0x9;
/// IOSSTATE value that exempts the pin from standby control entirely.
pub(crate) const STANDBY_IGNORE: u8 = 0xf;

/// Which software entity owns run-time control of a pad.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ownership {
    Acpi,
    Driver,
}

/// Accumulates the macro text for one pad.
#[derive(Debug, Default)]
pub struct MacroBuilder {
    text: String,
}

impl MacroBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, s: &str) {
        self.text.push_str(s);
    }

    /// Replace the whole text. Used when a shape starts over (no-connect,
    /// bidirectional, the generic struct form).
    pub fn set(&mut self, s: &str) {
        self.text.clear();
        self.text.push_str(s);
    }

    pub fn get(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }

    /// Append `", "` unless the text ends in `(` (first argument) or `_`
    /// (the middle of a macro-name suffix).
    pub fn separator(&mut self) {
        match self.text.chars().last() {
            Some('(') | Some('_') | None => {}
            _ => self.text.push_str(", "),
        }
    }
}

/// Per-invocation rendering state for one pad: identifier, both
/// configuration registers, ownership, and the output builder. Nothing here
/// outlives the rendering call, so pads can be rendered in parallel without
/// coordination.
pub(crate) struct Context {
    id: String,
    regs: [Register; MAX_DW_NUM],
    ownership: Ownership,
    pub(crate) out: MacroBuilder,
}

impl Context {
    pub(crate) fn new(
        id: &str,
        dw0: u32,
        dw1: u32,
        readonly: [u32; MAX_DW_NUM],
        ownership: Ownership,
    ) -> Self {
        Self {
            id: id.to_string(),
            regs: [
                Register::new(dw0, readonly[PAD_CFG_DW0]),
                Register::new(dw1, readonly[PAD_CFG_DW1]),
            ],
            ownership,
            out: MacroBuilder::new(),
        }
    }

    pub(crate) fn pad_id(&self) -> &str {
        &self.id
    }

    pub(crate) fn dw0(&mut self) -> &mut Register {
        &mut self.regs[PAD_CFG_DW0]
    }

    pub(crate) fn dw1(&mut self) -> &mut Register {
        &mut self.regs[PAD_CFG_DW1]
    }

    pub(crate) fn is_ownership_driver(&self) -> bool {
        self.ownership == Ownership::Driver
    }

    pub(crate) fn add(&mut self, s: &str) {
        self.out.add(s);
    }

    pub(crate) fn set(&mut self, s: &str) {
        self.out.set(s);
    }

    /// Append `s` as a new macro argument.
    pub(crate) fn arg(&mut self, s: &str) {
        self.out.separator();
        self.out.add(s);
    }

    /// Append the pad identifier. No separator: the id is always the first
    /// argument, directly after the opening parenthesis.
    pub(crate) fn id(&mut self) {
        self.out.add(&self.id);
    }

    /// GPO level argument from the GPIO TX state bit.
    pub(crate) fn val(&mut self) {
        let v = self.dw0().tx_state();
        self.arg(if v != 0 { "1" } else { "0" });
    }

    /// Trigger argument from RX Level/Edge Configuration.
    pub(crate) fn trig(&mut self) {
        let name = match self.dw0().rx_level_edge_config() {
            0x0 => "LEVEL",
            0x1 => "EDGE_SINGLE",
            0x2 => "OFF",
            _ => "EDGE_BOTH",
        };
        self.arg(name);
    }

    /// Polarity inversion argument from RXINV.
    pub(crate) fn invert(&mut self) {
        let name = if self.dw0().rx_invert() {
            "INVERT"
        } else {
            "NONE"
        };
        self.arg(name);
    }

    /// Buffer state argument from the RX/TX disable field.
    pub(crate) fn bufdis(&mut self) {
        let name = match self.dw0().rx_tx_disable() {
            0x0 => "NO_DISABLE",
            0x1 => "TX_DISABLE",
            0x2 => "RX_DISABLE",
            _ => "TX_RX_DISABLE",
        };
        self.arg(name);
    }

    /// Host software ownership argument.
    pub(crate) fn own(&mut self) {
        let name = if self.is_ownership_driver() {
            "DRIVER"
        } else {
            "ACPI"
        };
        self.arg(name);
    }

    /// Pad function argument from PMODE: `NFn` for a native function, the
    /// literal `GPIO` (without separator, only ever used inside
    /// `PAD_FUNC(`) otherwise.
    pub(crate) fn padfn(&mut self) {
        let nf = self.dw0().pad_mode();
        if nf != 0 {
            self.arg(&format!("NF{}", nf));
        } else {
            self.add("GPIO");
        }
    }

    /// IO standby state argument from IOSSTATE. Reserved encodings degrade
    /// to IGNORE rather than failing.
    pub(crate) fn iosstate(&mut self) {
        let name = match self.dw1().io_standby_state() {
            0x0 => "TxLASTRxE",
            0x1 => "Tx0RxDCRx0",
            0x2 => "Tx0RxDCRx1",
            0x3 => "Tx1RxDCRx0",
            0x4 => "Tx1RxDCRx1",
            0x5 => "Tx0RxE",
            0x6 => "Tx1RxE",
            0x7 => "HIZCRx0",
            0x8 => "HIZCRx1",
            0x9 => "TxDRxE",
            _ => "IGNORE",
        };
        self.arg(name);
    }

    /// IO standby termination argument from IOSTERM.
    pub(crate) fn iosterm(&mut self) {
        let name = match self.dw1().io_standby_termination() {
            0x0 => "SAME",
            0x1 => "DISPUPD",
            0x2 => "ENPD",
            _ => "ENPU",
        };
        self.arg(name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separator_rules() {
        let mut b = MacroBuilder::new();
        b.add("PAD_CFG_GPI(");
        b.separator();
        assert_eq!(b.get(), "PAD_CFG_GPI("); // nothing after an open paren

        b.add("GPP_A7");
        b.separator();
        assert_eq!(b.get(), "PAD_CFG_GPI(GPP_A7, ");

        let mut b = MacroBuilder::new();
        b.add("PAD_CFG0_TRIG_");
        b.separator();
        assert_eq!(b.get(), "PAD_CFG0_TRIG_"); // suffix continues the name
    }

    #[test]
    fn test_set_replaces_text() {
        let mut b = MacroBuilder::new();
        b.add("PAD_CFG_GPO(GPP_B2");
        b.set("PAD_NC(");
        assert_eq!(b.get(), "PAD_NC(");
    }

    fn ctx(dw0: u32, dw1: u32, own: Ownership) -> Context {
        Context::new("GPP_A0", dw0, dw1, [0, 0], own)
    }

    #[test]
    fn test_trig_names() {
        for (raw, name) in [
            (0u32, "LEVEL"),
            (1, "EDGE_SINGLE"),
            (2, "OFF"),
            (3, "EDGE_BOTH"),
        ] {
            let mut c = ctx(raw << 25, 0, Ownership::Acpi);
            c.add("M(");
            c.trig();
            assert_eq!(c.out.get(), format!("M({}", name));
        }
    }

    #[test]
    fn test_padfn_gpio_has_no_separator() {
        let mut c = ctx(0, 0, Ownership::Acpi);
        c.add("PAD_FUNC(");
        c.padfn();
        assert_eq!(c.out.get(), "PAD_FUNC(GPIO");

        let mut c = ctx(2 << 10, 0, Ownership::Acpi);
        c.add("M(x");
        c.padfn();
        assert_eq!(c.out.get(), "M(x, NF2");
    }

    #[test]
    fn test_iosstate_reserved_degrades_to_ignore() {
        for raw in [0xau32, 0xb, 0xe, 0xf] {
            let mut c = ctx(0, raw << 14, Ownership::Acpi);
            c.add("M(x");
            c.iosstate();
            assert_eq!(c.out.get(), "M(x, IGNORE");
        }
    }

    #[test]
    fn test_ownership_argument() {
        let mut c = ctx(0, 0, Ownership::Driver);
        c.add("M(x");
        c.own();
        assert_eq!(c.out.get(), "M(x, DRIVER");
    }
}
