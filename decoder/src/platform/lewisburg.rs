// Licensed under the Apache-2.0 license

//! Lewisburg PCH (Xeon-SP) macro shapes.
//!
//! Close to Sunrise Point, but kept as its own rule table: the server PCH
//! has no GPD group, no dual-route GPI macro, and a wider writable region in
//! DW1. Do not fold this back into the Sunrise rules.

use log::warn;

use super::{gpio_input_routes, PlatformOps, Route};
use crate::macros::Context;

const PAD_CFG_DW0_RO_FIELDS: u32 = (0x1 << 27) | (0x1 << 24) | (0x3 << 21) | (0xf << 16) | 0xfe;
const PAD_CFG_DW1_RO_FIELDS: u32 = 0xffff_c3ff;

pub(crate) struct Lewisburg;

impl Lewisburg {
    fn gpi_single_route(&self, ctx: &mut Context, route: Route, is_edge: u8) {
        match route {
            Route::Nmi => {
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
                        ctx.add("_INVERT");
                    }
                    ctx.add("(");
                    ctx.id();
                    self.pull(ctx);
                    self.reset_source(ctx);
                } else {
                    // IO-standby arguments are don't-cares here, same as on
                    // Sunrise Point.
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

impl PlatformOps for Lewisburg {
    fn dw0_readonly(&self) -> u32 {
        PAD_CFG_DW0_RO_FIELDS
    }

    fn dw1_readonly(&self) -> u32 {
        PAD_CFG_DW1_RO_FIELDS
    }

    fn reset_source(&self, ctx: &mut Context) {
        let name = match ctx.dw0().reset_config() {
            0x0 => "RSMRST",
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
                    ctx.add("_TRIG_OWN(");
                    ctx.id();
                    self.pull(ctx);
                    self.reset_source(ctx);
                    ctx.trig();
                    ctx.own();
                } else {
                    ctx.add("(");
                    ctx.id();
                    self.pull(ctx);
                    self.reset_source(ctx);
                }
            }
            [route] => self.gpi_single_route(ctx, *route, is_edge),
            _ => {
                // No dual-route macro on this PCH; anything with more than
                // one route goes to the raw pad config.
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
            ctx.add("_TERM");
        }
        ctx.add("_GPO");
        if ctx.is_ownership_driver() {
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

        // GPO macros hard-code PAD_TRIG(OFF).
        ctx.dw0().fix_trig_mask();
    }

    fn native_function(&self, ctx: &mut Context) {
        let is_edge = ctx.dw0().rx_level_edge_config() != 0;
        let is_buf_dis = ctx.dw0().rx_tx_disable() != 0;
        ctx.add("_NF");
        if is_edge || is_buf_dis {
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
        ctx.dw0().fix_reset_mask();
        ctx.dw0().fix_trig_mask();
    }

    fn bidirection(&self, ctx: &mut Context) {
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
