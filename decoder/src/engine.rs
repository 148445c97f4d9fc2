// Licensed under the Apache-2.0 license

//! Macro shape selection.
//!
//! The decision tree is small and identical for every chipset: pad mode
//! splits GPIO from native function, the buffer-disable pattern splits
//! input/output/no-connect/bidirectional, and everything else is delegated
//! to the platform rules. After a named shape has been rendered, the DW0
//! coverage check decides whether it actually represents the register value;
//! if not, the pad is regenerated with the platform's generic struct form,
//! which is always accepted.

use log::warn;

use crate::macros::{Context, Ownership};
use crate::platform::{apollo::Apollo, lewisburg::Lewisburg, sunrise::Sunrise, PlatformOps};

const TX_DISABLE: u8 = 0x1;
const RX_DISABLE: u8 = 0x2;

/// Supported chipset targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    Sunrise,
    Lewisburg,
    ApolloLake,
}

impl Platform {
    fn ops(self) -> &'static dyn PlatformOps {
        match self {
            Platform::Sunrise => &Sunrise,
            Platform::Lewisburg => &Lewisburg,
            Platform::ApolloLake => &Apollo,
        }
    }
}

/// Generation switches, mirroring the command-line flags.
#[derive(Clone, Copy, Debug, Default)]
pub struct Options {
    /// Always emit the generic struct form, even when a named macro would
    /// cover the register value.
    pub force_advanced: bool,
    /// Keep whatever named shape was selected without checking coverage.
    pub skip_check: bool,
}

/// Decode one pad's DW0/DW1 pair into a coreboot `pad_config` macro.
///
/// Never fails: every register value produces syntactically valid macro
/// text, degrading to the generic struct form when no named shape fits.
pub fn render_pad_macro(
    platform: Platform,
    pad_id: &str,
    dw0: u32,
    dw1: u32,
    ownership: Ownership,
) -> String {
    generate(platform, pad_id, dw0, dw1, ownership, &Options::default())
}

/// [`render_pad_macro`] with explicit generation switches.
pub fn generate(
    platform: Platform,
    pad_id: &str,
    dw0: u32,
    dw1: u32,
    ownership: Ownership,
    opts: &Options,
) -> String {
    let ops = platform.ops();
    let mut ctx = Context::new(
        pad_id,
        dw0,
        dw1,
        [ops.dw0_readonly(), ops.dw1_readonly()],
        ownership,
    );

    ctx.set("PAD_CFG");
    if ctx.dw0().pad_mode() == 0 {
        match ctx.dw0().rx_tx_disable() {
            TX_DISABLE => ops.gpi(&mut ctx),
            RX_DISABLE => ops.gpo(&mut ctx),
            x if x == RX_DISABLE | TX_DISABLE => ops.no_connect(&mut ctx),
            _ => ops.bidirection(&mut ctx),
        }
    } else {
        ops.native_function(&mut ctx);
    }

    if opts.force_advanced {
        ctx.dw0().clear_consumed();
    }
    if opts.skip_check {
        return ctx.out.into_text();
    }

    if !ctx.dw0().is_fully_covered() {
        let rejected = ctx.out.get().to_string();
        ops.advanced(&mut ctx);
        warn!(
            "pad {}: macro does not cover DW0 {:#010x}; replaced {:?} with {:?}",
            ctx.pad_id(),
            dw0,
            rejected,
            ctx.out.get()
        );
    }
    ctx.out.into_text()
}
