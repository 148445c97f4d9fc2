// Licensed under the Apache-2.0 license

//! Apollo Lake SoC macro shapes.
//!
//! The SoC exposes IO-standby control per pad, so most shapes grow `_IOS`
//! variants, and the coreboot macro set carries an ownership argument in
//! places the PCHs do not (bidirectional, driver-owned hi-Z and GPO).

use log::warn;

use super::{gpio_input_routes, PlatformOps};
use crate::macros::{Context, STANDBY_IGNORE, STANDBY_TXD_RXE};

const PAD_CFG_DW0_RO_FIELDS: u32 = (0x1 << 27) | (0x1 << 24) | (0x3 << 21) | (0xf << 16) | 0xfe;
const PAD_CFG_DW1_RO_FIELDS: u32 = 0xfffc_000f;

pub(crate) struct Apollo;

/// True when either IO-standby field is programmed, which selects the `_IOS`
/// macro variants.
fn io_standby_used(ctx: &mut Context) -> bool {
    ctx.dw1().io_standby_state() != 0 || ctx.dw1().io_standby_termination() != 0
}

impl PlatformOps for Apollo {
    fn dw0_readonly(&self) -> u32 {
        PAD_CFG_DW0_RO_FIELDS
    }

    fn dw1_readonly(&self) -> u32 {
        PAD_CFG_DW1_RO_FIELDS
    }

    fn reset_source(&self, ctx: &mut Context) {
        let name = match ctx.dw0().reset_config() {
            0x0 => "PWROK",
            0x1 => "DEEP",
            0x2 => "PLTRST",
            _ => "RESERVED",
        };
        ctx.arg(name);
    }

    fn pull(&self, ctx: &mut Context) {
        let term = ctx.dw1().termination();
        let name = match term {
            0x0 => "NONE",
            0x2 => "DN_5K",
            0x4 => "DN_20K",
            0x9 => "UP_1K",
            0xa => "UP_5K",
            0xb => "UP_2K",
            0xc => "UP_20K",
            0xd => "UP_667",
            0xf => "NATIVE",
            _ => {
                warn!("{}: invalid TERM value {:#x}", ctx.pad_id(), term);
                "INVALID"
            }
        };
        ctx.arg(name);
    }

    fn gpi(&self, ctx: &mut Context) {
        let is_edge = ctx.dw0().rx_level_edge_config();
        ctx.add("_GPI");
        if ctx.dw0().route_nmi() {
            // e.g. PAD_CFG_GPI_NMI(GPIO_24, UP_20K, DEEP, LEVEL, INVERT),
            ctx.add("_NMI(");
            ctx.id();
            self.pull(ctx);
            self.reset_source(ctx);
            ctx.trig();
            ctx.invert();
        } else if ctx.dw0().route_ioxapic() {
            ctx.add("_APIC");
            if io_standby_used(ctx) {
                // e.g. H1_PCH_INT_ODL:
                // PAD_CFG_GPI_APIC_IOS(GPIO_63, NONE, DEEP, LEVEL, INVERT,
                //                      TxDRxE, DISPUPD),
                ctx.add("_IOS(");
                ctx.id();
                self.pull(ctx);
                self.reset_source(ctx);
                ctx.trig();
                ctx.invert();
                ctx.iosstate();
                ctx.iosterm();
            } else {
                if ctx.dw0().rx_invert() {
                    ctx.add("_INVERT");
                }
                // e.g. PAD_CFG_GPI_APIC(GPP_C5, DN_20K, DEEP),
                ctx.add("(");
                ctx.id();
                self.pull(ctx);
                self.reset_source(ctx);
            }
        } else if ctx.dw0().route_sci() {
            if io_standby_used(ctx) {
                // PAD_CFG_GPI_SCI_IOS(GPIO_141, NONE, DEEP, EDGE_SINGLE,
                //                     INVERT, IGNORE, DISPUPD),
                ctx.add("_SCI_IOS(");
                ctx.id();
                self.pull(ctx);
                self.reset_source(ctx);
                ctx.trig();
                ctx.invert();
                ctx.iosstate();
                ctx.iosterm();
            } else if is_edge & 0x1 != 0 {
                ctx.add("_ACPI_SCI(");
                ctx.id();
                self.pull(ctx);
                self.reset_source(ctx);
                ctx.invert();
            } else {
                ctx.add("_SCI(");
                ctx.id();
                self.pull(ctx);
                self.reset_source(ctx);
                ctx.trig();
                ctx.invert();
            }
        } else if ctx.dw0().route_smi() {
            if io_standby_used(ctx) {
                // PAD_CFG_GPI_SMI_IOS(GPIO_41, UP_20K, DEEP, EDGE_SINGLE,
                //                     NONE, IGNORE, SAME),
                ctx.add("_SMI_IOS(");
                ctx.id();
                self.pull(ctx);
                self.reset_source(ctx);
                ctx.trig();
                ctx.invert();
                ctx.iosstate();
                ctx.iosterm();
            } else if is_edge & 0x1 != 0 {
                ctx.add("_ACPI_SMI(");
                ctx.id();
                self.pull(ctx);
                self.reset_source(ctx);
                ctx.invert();
            } else {
                ctx.add("_SMI(");
                ctx.id();
                self.pull(ctx);
                self.reset_source(ctx);
                ctx.trig();
                ctx.invert();
            }
        } else {
            // PAD_CFG_GPI_TRIG_OWN(pad, pull, rst, trig, own)
            ctx.add("_TRIG_OWN(");
            ctx.id();
            self.pull(ctx);
            self.reset_source(ctx);
            ctx.trig();
            ctx.own();
        }
        ctx.add("),");
    }

    fn gpo(&self, ctx: &mut Context) {
        let term = ctx.dw1().termination();
        if io_standby_used(ctx) {
            if ctx.is_ownership_driver() {
                // PAD_CFG_GPO_GPIO_DRIVER(pad, val, rst, pull)
                ctx.add("_GPO_GPIO_DRIVER(");
                ctx.id();
                ctx.val();
                self.reset_source(ctx);
                self.pull(ctx);
            } else {
                // PAD_CFG_GPO_IOSSTATE_IOSTERM(GPIO_91, 0, DEEP, NONE,
                //                              Tx0RxDCRx0, DISPUPD),
                ctx.add("_GPO_IOSSTATE_IOSTERM(");
                ctx.id();
                ctx.val();
                self.reset_source(ctx);
                self.pull(ctx);
                ctx.iosstate();
                ctx.iosterm();
            }
        } else {
            if term != 0 {
                // e.g. PAD_CFG_TERM_GPO(GPP_B23, 1, DN_20K, DEEP),
                ctx.add("_TERM");
            }
            ctx.add("_GPO(");
            ctx.id();
            ctx.val();
            if term != 0 {
                self.pull(ctx);
            }
            self.reset_source(ctx);
        }
        ctx.add("),");

        // GPO macros hard-code PAD_TRIG(OFF).
        ctx.dw0().fix_trig_mask();
    }

    fn native_function(&self, ctx: &mut Context) {
        let state_used = ctx.dw1().io_standby_state() != 0;
        let term_used = ctx.dw1().io_standby_termination() != 0;
        ctx.add("_NF");
        if state_used && !term_used {
            if ctx.dw1().io_standby_state() == STANDBY_IGNORE {
                // PAD_CFG_NF_IOSTANDBY_IGNORE(PMU_SLP_S0_B, NONE, DEEP, NF1),
                ctx.add("_IOSTANDBY_IGNORE(");
                ctx.id();
                self.pull(ctx);
                self.reset_source(ctx);
                ctx.padfn();
            } else {
                // PAD_CFG_NF_IOSSTATE(GPIO_22, UP_20K, DEEP, NF2, TxDRxE),
                ctx.add("_IOSSTATE(");
                ctx.id();
                self.pull(ctx);
                self.reset_source(ctx);
                ctx.padfn();
                ctx.iosstate();
            }
        } else if term_used {
            // PAD_CFG_NF_IOSSTATE_IOSTERM(GPIO_103, NATIVE, DEEP, NF1,
            //                             MASK, SAME),
            ctx.add("_IOSSTATE_IOSTERM(");
            ctx.id();
            self.pull(ctx);
            self.reset_source(ctx);
            ctx.padfn();
            ctx.iosstate();
            ctx.iosterm();
        } else {
            // e.g. PAD_CFG_NF(GPP_D23, NONE, DEEP, NF1),
            ctx.add("(");
            ctx.id();
            self.pull(ctx);
            self.reset_source(ctx);
            ctx.padfn();
        }
        ctx.add("),");
    }

    fn no_connect(&self, ctx: &mut Context) {
        if ctx.dw1().io_standby_state() == STANDBY_TXD_RXE {
            // PAD_NC(OSC_CLK_OUT_1, DN_20K),
            ctx.set("PAD_NC(");
            ctx.id();
            self.pull(ctx);
        } else {
            // PAD_CFG_GPIO_HI_Z(GPIO_81, UP_20K, DEEP, HIZCRx0, DISPUPD),
            ctx.set("PAD_CFG_GPIO_");
            if ctx.is_ownership_driver() {
                // PAD_CFG_GPIO_DRIVER_HI_Z(GPIO_55, UP_20K, DEEP, HIZCRx1,
                //                          ENPU),
                ctx.add("DRIVER_");
            }
            ctx.add("HI_Z(");
            ctx.id();
            self.pull(ctx);
            self.reset_source(ctx);
            ctx.iosstate();
            ctx.iosterm();
        }
        ctx.add("),");
        // Reset and trigger are hard-coded for unconnected pads.
        ctx.dw0().fix_reset_mask();
        ctx.dw0().fix_trig_mask();
    }

    fn bidirection(&self, ctx: &mut Context) {
        let ios = io_standby_used(ctx);
        ctx.set("PAD_CFG_GPIO_BIDIRECT");
        if ios {
            ctx.add("_IOS");
        }
        // PAD_CFG_GPIO_BIDIRECT(pad, val, pull, rst, trig, own)
        ctx.add("(");
        ctx.id();
        ctx.val();
        self.pull(ctx);
        self.reset_source(ctx);
        ctx.trig();
        if ios {
            // PAD_CFG_GPIO_BIDIRECT_IOS(pad, val, pull, rst, trig, iosstate,
            //                           iosterm, own)
            ctx.iosstate();
            ctx.iosterm();
        }
        ctx.own();
        ctx.add("),");
    }

    fn advanced(&self, ctx: &mut Context) {
        let routes = gpio_input_routes(ctx);
        ctx.set("_PAD_CFG_STRUCT(");
        ctx.id();
        ctx.add(",\n\t\tPAD_FUNC(");
        ctx.padfn();
        ctx.add(") | PAD_RESET(");
        self.reset_source(ctx);
        ctx.add(") |\n\t\t");
        if let Some(route) = routes.first() {
            ctx.add("PAD_IRQ_CFG(");
            ctx.add(route.label());
            ctx.trig();
            ctx.invert();
            ctx.add(")");
        } else {
            ctx.add("PAD_CFG0_TRIG_");
            ctx.trig();
            ctx.add(" | PAD_CFG0_RX_POL_");
            ctx.invert();
        }
        ctx.add(" |\n\t\tPAD_BUF(");
        ctx.bufdis();
        ctx.add(")");
        if ctx.dw0().rx_tx_enable_config() != 0 {
            ctx.add(" | (1 << 21)");
        }
        if ctx.dw0().tx_state() != 0 {
            ctx.add(" | 1");
        }
        ctx.add(",\n\t\tPAD_CFG_OWN_GPIO(");
        ctx.own();
        ctx.add(") | PAD_PULL(");
        self.pull(ctx);
        ctx.add(") |\n\t\tPAD_IOSSTATE(");
        ctx.iosstate();
        ctx.add(") | PAD_IOSTERM(");
        ctx.iosterm();
        ctx.add(")),");
    }
}
