// Licensed under the Apache-2.0 license

//! Sunrise Point (Skylake/Kaby Lake PCH) macro shapes.

use log::warn;

use super::{gpio_input_routes, PlatformOps, Route};
use crate::macros::Context;

const PAD_CFG_DW0_RO_FIELDS: u32 = (0x1 << 27) | (0x1 << 24) | (0x3 << 21) | (0xf << 16) | 0xfe;
const PAD_CFG_DW1_RO_FIELDS: u32 = 0xffff_fc3f;

pub(crate) struct Sunrise;

impl Sunrise {
    /// One asserted route: the classic single-route GPI shapes.
    fn gpi_single_route(&self, ctx: &mut Context, route: Route, is_edge: u8) {
        match route {
            Route::Nmi => {
                // e.g. PAD_CFG_GPI_NMI(GPIO_24, UP_20K, DEEP, LEVEL, INVERT),
                ctx.add("_NMI(");
                ctx.id();
                self.pull(ctx);
                self.reset_source(ctx);
                ctx.trig();
                ctx.invert();
            }
            Route::IoApic => {
                ctx.add("_APIC");
                if is_edge == 0 {
                    if ctx.dw0().rx_invert() {
                        // e.g. PAD_CFG_GPI_APIC_INVERT(GPP_C5, DN_20K, DEEP),
                        ctx.add("_INVERT");
                    }
                    ctx.add("(");
                    ctx.id();
                    self.pull(ctx);
                    self.reset_source(ctx);
                } else {
                    // The _IOS spelling is the only APIC shape that can carry
                    // explicit trig/invert arguments. IO-standby is ignored
                    // on this PCH, so the last two arguments are don't-cares.
                    ctx.add("_IOS(");
                    ctx.id();
                    self.pull(ctx);
                    self.reset_source(ctx);
                    ctx.trig();
                    ctx.invert();
                    ctx.add(", TxDRxE, DISPUPD");
                }
            }
            Route::Sci => {
                if is_edge & 0x1 != 0 {
                    // e.g. PAD_CFG_GPI_ACPI_SCI(GPP_G2, NONE, DEEP, INVERT),
                    // edge triggering is implied by the name
                    ctx.add("_ACPI");
                }
                ctx.add("_SCI(");
                ctx.id();
                self.pull(ctx);
                self.reset_source(ctx);
                if is_edge & 0x1 == 0 {
                    ctx.trig();
                }
                ctx.invert();
            }
            Route::Smi => {
                if is_edge & 0x1 != 0 {
                    // e.g. PAD_CFG_GPI_ACPI_SMI(GPP_I3, NONE, DEEP, INVERT),
                    ctx.add("_ACPI");
                }
                ctx.add("_SMI(");
                ctx.id();
                self.pull(ctx);
                self.reset_source(ctx);
                if is_edge & 0x1 == 0 {
                    ctx.trig();
                }
                ctx.invert();
            }
        }
    }
}

impl PlatformOps for Sunrise {
    fn dw0_readonly(&self) -> u32 {
        PAD_CFG_DW0_RO_FIELDS
    }

    fn dw1_readonly(&self) -> u32 {
        PAD_CFG_DW1_RO_FIELDS
    }

    fn reset_source(&self, ctx: &mut Context) {
        let reset = ctx.dw0().reset_config();
        // Pads in the GPD group use their own PADRSTCFG map: 0h means PWROK
        // and 3h means RSMRST, the reverse of every other group.
        let name = if ctx.pad_id().contains("GPD") {
            match reset {
                0x0 => "PWROK",
                0x1 => "DEEP",
                0x2 => "PLTRST",
                _ => "RSMRST",
            }
        } else {
            match reset {
                0x0 => "RSMRST",
                0x1 => "DEEP",
                0x2 => "PLTRST",
                _ => "RESERVED",
            }
        };
        ctx.arg(name);
    }

    fn pull(&self, ctx: &mut Context) {
        let term = ctx.dw1().termination();
        let name = match term {
            0x0 => "NONE",
            0x2 => "5K_PD",
            0x4 => "20K_PD",
            0x9 => "1K_PU",
            0xa => "5K_PU",
            0xb => "2K_PU",
            0xc => "20K_PU",
            0xd => "667_PU",
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
        let routes = gpio_input_routes(ctx);
        ctx.add("_GPI");
        match routes.as_slice() {
            [] => {
                if is_edge != 0 || ctx.is_ownership_driver() {
                    // PAD_CFG_GPI_TRIG_OWN(pad, pull, rst, trig, own)
                    ctx.add("_TRIG_OWN(");
                    ctx.id();
                    self.pull(ctx);
                    self.reset_source(ctx);
                    ctx.trig();
                    ctx.own();
                } else {
                    // e.g. PAD_CFG_GPI(GPP_A7, NONE, DEEP),
                    ctx.add("(");
                    ctx.id();
                    self.pull(ctx);
                    self.reset_source(ctx);
                }
            }
            [route] => self.gpi_single_route(ctx, *route, is_edge),
            [first, second] => {
                // PAD_CFG_GPI_DUAL_ROUTE(pad, pull, rst, trig, inv, r1, r2)
                ctx.add("_DUAL_ROUTE(");
                ctx.id();
                self.pull(ctx);
                self.reset_source(ctx);
                ctx.trig();
                ctx.invert();
                ctx.arg(first.label());
                ctx.arg(second.label());
            }
            _ => {
                // Three or more simultaneous routes never happen on sane
                // hardware; treat like a coverage failure.
                warn!(
                    "pad {}: {} input routes asserted at once, using raw pad config",
                    ctx.pad_id(),
                    routes.len()
                );
                self.advanced(ctx);
                return;
            }
        }
        ctx.add("),");
    }

    fn gpo(&self, ctx: &mut Context) {
        let term = ctx.dw1().termination();
        if term != 0 {
            // e.g. PAD_CFG_TERM_GPO(GPP_B23, 1, DN_20K, DEEP),
            ctx.add("_TERM");
        }
        ctx.add("_GPO");
        if ctx.is_ownership_driver() {
            // PAD_CFG_GPO_GPIO_DRIVER(pad, val, rst, pull)
            ctx.add("_GPIO_DRIVER");
        }
        ctx.add("(");
        ctx.id();
        ctx.val();
        if term != 0 {
            self.pull(ctx);
        }
        self.reset_source(ctx);
        if ctx.is_ownership_driver() {
            self.pull(ctx);
        }
        ctx.add("),");

        // The GPO macros hard-code PAD_TRIG(OFF), so account for the RXEVCFG
        // field even though it is never read here.
        ctx.dw0().fix_trig_mask();
    }

    fn native_function(&self, ctx: &mut Context) {
        let is_edge = ctx.dw0().rx_level_edge_config() != 0;
        let is_buf_dis = ctx.dw0().rx_tx_disable() != 0;
        ctx.add("_NF");
        if is_edge || is_buf_dis {
            // e.g. PCHHOT#:
            // PAD_CFG_NF_BUF_TRIG(GPP_B23, 20K_PD, PLTRST, NF2, RX_DIS, OFF),
            ctx.add("_BUF_TRIG");
        }
        ctx.add("(");
        ctx.id();
        self.pull(ctx);
        self.reset_source(ctx);
        ctx.padfn();
        if is_edge || is_buf_dis {
            ctx.bufdis();
            ctx.trig();
        }
        ctx.add("),");
    }

    fn no_connect(&self, ctx: &mut Context) {
        ctx.set("PAD_NC(");
        ctx.id();
        self.pull(ctx);
        ctx.add("),");
        // The NC state hard-codes reset and trigger in hardware; no need to
        // check those fields.
        ctx.dw0().fix_reset_mask();
        ctx.dw0().fix_trig_mask();
    }

    fn bidirection(&self, ctx: &mut Context) {
        // Both buffers enabled has no named macro on this PCH.
        warn!(
            "pad {}: both buffers enabled, using raw pad config",
            ctx.pad_id()
        );
        self.advanced(ctx);
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
        match routes.as_slice() {
            [] => {
                ctx.add("PAD_CFG0_TRIG_");
                ctx.trig();
                ctx.add(" | PAD_CFG0_RX_POL_");
                ctx.invert();
            }
            [route] => {
                ctx.add("PAD_IRQ_CFG(");
                ctx.add(route.label());
                ctx.trig();
                ctx.invert();
                ctx.add(")");
            }
            [first, second] => {
                ctx.add("PAD_IRQ_CFG_DUAL_ROUTE(");
                ctx.add(first.label());
                ctx.arg(second.label());
                ctx.trig();
                ctx.invert();
                ctx.add(")");
            }
            _ => {
                for (i, route) in routes.iter().enumerate() {
                    if i != 0 {
                        ctx.add(" | ");
                    }
                    ctx.add("PAD_IRQ_CFG(");
                    ctx.add(route.label());
                    ctx.add(")");
                }
                ctx.add(" | PAD_TRIG(");
                ctx.trig();
                ctx.add(")");
                if ctx.dw0().rx_invert() {
                    ctx.add(" | PAD_RX_POL(");
                    ctx.invert();
                    ctx.add(")");
                }
            }
        }
        ctx.add(" |\n\t\tPAD_BUF(");
        ctx.bufdis();
        ctx.add(")");
        if ctx.dw0().rx_pad_state_select() != 0 {
            ctx.add(" | (1 << 29)");
        }
        if ctx.dw0().rx_raw_override() != 0 {
            ctx.add(" | (1 << 28)");
        }
        if ctx.dw0().tx_state() != 0 {
            ctx.add(" | 1");
        }
        ctx.add(",\n\t\tPAD_CFG_OWN_GPIO(");
        ctx.own();
        ctx.add(") | PAD_PULL(");
        self.pull(ctx);
        ctx.add(")),");
    }
}
