// Licensed under the Apache-2.0 license

//! PAD_CFG_DW0/DW1 bit-field access with consumed-mask tracking.
//!
//! Every field read goes through [`Register::field`], which both extracts the
//! masked value and records the mask in the register's consumed set. After a
//! macro has been rendered, [`Register::is_fully_covered`] tells whether the
//! chosen macro shape accounted for every configuration bit that is actually
//! set, which is what drives the fallback to the generic struct form.

/// Index of the PAD_CFG_DW0 register in a pad's register pair.
pub const PAD_CFG_DW0: usize = 0;
/// Index of the PAD_CFG_DW1 register in a pad's register pair.
pub const PAD_CFG_DW1: usize = 1;
/// Number of configuration registers per pad.
pub const MAX_DW_NUM: usize = 2;

// PAD_CFG_DW0 fields
const PAD_RST_CFG_SHIFT: u32 = 30;
const PAD_RST_CFG_MASK: u32 = 0x3 << PAD_RST_CFG_SHIFT;

const RX_PAD_STATE_SELECT_SHIFT: u32 = 29;
const RX_PAD_STATE_SELECT_MASK: u32 = 0x1 << RX_PAD_STATE_SELECT_SHIFT;

const RX_RAW_OVERRIDE_SHIFT: u32 = 28;
const RX_RAW_OVERRIDE_MASK: u32 = 0x1 << RX_RAW_OVERRIDE_SHIFT;

const RX_LEVEL_EDGE_CFG_SHIFT: u32 = 25;
const RX_LEVEL_EDGE_CFG_MASK: u32 = 0x3 << RX_LEVEL_EDGE_CFG_SHIFT;

const RX_INVERT_SHIFT: u32 = 23;
const RX_INVERT_MASK: u32 = 0x1 << RX_INVERT_SHIFT;

const RXTX_ENABLE_CFG_SHIFT: u32 = 21;
const RXTX_ENABLE_CFG_MASK: u32 = 0x3 << RXTX_ENABLE_CFG_SHIFT;

const ROUTE_IOXAPIC_SHIFT: u32 = 20;
const ROUTE_IOXAPIC_MASK: u32 = 0x1 << ROUTE_IOXAPIC_SHIFT;

const ROUTE_SCI_SHIFT: u32 = 19;
const ROUTE_SCI_MASK: u32 = 0x1 << ROUTE_SCI_SHIFT;

const ROUTE_SMI_SHIFT: u32 = 18;
const ROUTE_SMI_MASK: u32 = 0x1 << ROUTE_SMI_SHIFT;

const ROUTE_NMI_SHIFT: u32 = 17;
const ROUTE_NMI_MASK: u32 = 0x1 << ROUTE_NMI_SHIFT;

const PAD_MODE_SHIFT: u32 = 10;
const PAD_MODE_MASK: u32 = 0x7 << PAD_MODE_SHIFT;

const RXTX_DISABLE_SHIFT: u32 = 8;
const RXTX_DISABLE_MASK: u32 = 0x3 << RXTX_DISABLE_SHIFT;

const RX_STATE_SHIFT: u32 = 1;
const RX_STATE_MASK: u32 = 0x1 << RX_STATE_SHIFT;

const TX_STATE_MASK: u32 = 0x1;

// PAD_CFG_DW1 fields
const IO_STANDBY_STATE_SHIFT: u32 = 14;
const IO_STANDBY_STATE_MASK: u32 = 0xF << IO_STANDBY_STATE_SHIFT;

const TERM_SHIFT: u32 = 10;
const TERM_MASK: u32 = 0xF << TERM_SHIFT;

const IO_STANDBY_TERM_SHIFT: u32 = 8;
const IO_STANDBY_TERM_MASK: u32 = 0x3 << IO_STANDBY_TERM_SHIFT;

const INTERRUPT_SELECT_MASK: u32 = 0xFF;

/// One pad configuration register (DW0 or DW1) together with the set of bits
/// that have been consumed by field reads and the set of bits the hardware
/// defines as read-only for macro-generation purposes.
#[derive(Clone, Copy, Debug)]
pub struct Register {
    value: u32,
    consumed: u32,
    readonly: u32,
}

impl Register {
    pub fn new(value: u32, readonly: u32) -> Self {
        Self {
            value,
            consumed: 0,
            readonly,
        }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn consumed_mask(&self) -> u32 {
        self.consumed
    }

    pub fn readonly_mask(&self) -> u32 {
        self.readonly
    }

    /// Extract `(value & mask) >> shift` and record `mask` as consumed.
    ///
    /// The side effect is the point: each read doubles as a declaration that
    /// the macro being built represents that bit range, so the coverage check
    /// needs no explicit field list from the selection logic.
    fn field(&mut self, mask: u32, shift: u32) -> u8 {
        self.consumed |= mask;
        ((self.value & mask) >> shift) as u8
    }

    /// True when every set bit is either consumed by a field read or
    /// read-only: `value & !(consumed | readonly) == 0`.
    pub fn is_fully_covered(&self) -> bool {
        self.value & !(self.consumed | self.readonly) == 0
    }

    /// Drop the consumed set so that the coverage check fails for any
    /// register with writable bits set. Used to force the generic form.
    pub fn clear_consumed(&mut self) {
        self.consumed = 0;
    }

    /// Mark the Pad Reset Config field as consumed without reading it.
    ///
    /// Some macro shapes hard-code the reset source in hardware, so the
    /// generator never reads the field yet must not fail coverage on it.
    pub fn fix_reset_mask(&mut self) {
        self.consumed |= PAD_RST_CFG_MASK;
    }

    /// Mark the RX Level/Edge Configuration field as consumed without
    /// reading it. See the reset-mask fixup above; GPO and no-connect shapes
    /// imply a fixed trigger.
    pub fn fix_trig_mask(&mut self) {
        self.consumed |= RX_LEVEL_EDGE_CFG_MASK;
    }

    /// Pad Reset Config (PADRSTCFG), DW0 bits 31:30. Selects which reset
    /// event resets the pad's configuration registers.
    pub fn reset_config(&mut self) -> u8 {
        self.field(PAD_RST_CFG_MASK, PAD_RST_CFG_SHIFT)
    }

    /// RX Pad State Select (RXPADSTSEL), DW0 bit 29.
    /// 0 = raw RX pad state from the buffer, 1 = internal RX pad state.
    pub fn rx_pad_state_select(&mut self) -> u8 {
        self.field(RX_PAD_STATE_SELECT_MASK, RX_PAD_STATE_SELECT_SHIFT)
    }

    /// RX Raw Override to '1' (RXRAW1), DW0 bit 28. When set, the internal
    /// pad state is driven to 1 regardless of the buffer.
    pub fn rx_raw_override(&mut self) -> u8 {
        self.field(RX_RAW_OVERRIDE_MASK, RX_RAW_OVERRIDE_SHIFT)
    }

    /// RX Level/Edge Configuration (RXEVCFG), DW0 bits 26:25.
    /// 0 = level, 1 = edge, 2 = drive '0', 3 = reserved.
    pub fn rx_level_edge_config(&mut self) -> u8 {
        self.field(RX_LEVEL_EDGE_CFG_MASK, RX_LEVEL_EDGE_CFG_SHIFT)
    }

    /// RX Invert (RXINV), DW0 bit 23. Routes the pad state through the
    /// polarity inversion stage before the IRQ/SCI/SMI/NMI logic.
    pub fn rx_invert(&mut self) -> bool {
        self.field(RX_INVERT_MASK, RX_INVERT_SHIFT) != 0
    }

    /// RX/TX Enable Config (RXTXENCFG), DW0 bits 22:21. Overrides how the
    /// native function controls the buffer enables.
    pub fn rx_tx_enable_config(&mut self) -> u8 {
        self.field(RXTX_ENABLE_CFG_MASK, RXTX_ENABLE_CFG_SHIFT)
    }

    /// GPIO Input Route IOxAPIC (GPIROUTIOXAPIC), DW0 bit 20.
    pub fn route_ioxapic(&mut self) -> bool {
        self.field(ROUTE_IOXAPIC_MASK, ROUTE_IOXAPIC_SHIFT) != 0
    }

    /// GPIO Input Route SCI (GPIROUTSCI), DW0 bit 19.
    pub fn route_sci(&mut self) -> bool {
        self.field(ROUTE_SCI_MASK, ROUTE_SCI_SHIFT) != 0
    }

    /// GPIO Input Route SMI (GPIROUTSMI), DW0 bit 18.
    pub fn route_smi(&mut self) -> bool {
        self.field(ROUTE_SMI_MASK, ROUTE_SMI_SHIFT) != 0
    }

    /// GPIO Input Route NMI (GPIROUTNMI), DW0 bit 17.
    pub fn route_nmi(&mut self) -> bool {
        self.field(ROUTE_NMI_MASK, ROUTE_NMI_SHIFT) != 0
    }

    /// Pad Mode (PMODE), DW0 bits 12:10. 0 = GPIO controls the pad,
    /// 1..=n = native function n controls the pad.
    pub fn pad_mode(&mut self) -> u8 {
        self.field(PAD_MODE_MASK, PAD_MODE_SHIFT)
    }

    /// GPIO RX/TX buffer disable (GPIORXDIS | GPIOTXDIS), DW0 bits 9:8.
    /// 0 = both enabled, 1 = TX disabled, 2 = RX disabled, 3 = both disabled.
    pub fn rx_tx_disable(&mut self) -> u8 {
        self.field(RXTX_DISABLE_MASK, RXTX_DISABLE_SHIFT)
    }

    /// GPIO RX State (GPIORXSTATE), DW0 bit 1. Current internal RX state.
    pub fn rx_state(&mut self) -> u8 {
        self.field(RX_STATE_MASK, RX_STATE_SHIFT)
    }

    /// GPIO TX State (GPIOTXSTATE), DW0 bit 0. Level driven on the TX pad.
    pub fn tx_state(&mut self) -> u8 {
        self.field(TX_STATE_MASK, 0)
    }

    /// IO Standby State (IOSSTATE), DW1 bits 17:14. Pad behavior while the
    /// platform is in a low-power standby state; 0xf means standby is
    /// ignored for this pin.
    pub fn io_standby_state(&mut self) -> u8 {
        self.field(IO_STANDBY_STATE_MASK, IO_STANDBY_STATE_SHIFT)
    }

    /// Termination (TERM), DW1 bits 13:10. Weak pull-up/pull-down setting;
    /// 0xf hands termination control to the native controller.
    pub fn termination(&mut self) -> u8 {
        self.field(TERM_MASK, TERM_SHIFT)
    }

    /// IO Standby Termination (IOSTERM), DW1 bits 9:8.
    /// 0 = same as functional mode, 1 = disable pulls, 2 = pull-down,
    /// 3 = pull-up.
    pub fn io_standby_termination(&mut self) -> u8 {
        self.field(IO_STANDBY_TERM_MASK, IO_STANDBY_TERM_SHIFT)
    }

    /// Interrupt Select (INTSEL), DW1 bits 7:0. Which interrupt line the
    /// GPIO controller toggles for this pad.
    pub fn interrupt_select(&mut self) -> u8 {
        self.field(INTERRUPT_SELECT_MASK, 0)
    }
}
