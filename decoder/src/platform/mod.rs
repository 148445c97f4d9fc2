// Licensed under the Apache-2.0 license

//! Chipset-specific macro shape rules.
//!
//! The three supported chipsets share the register accessor, the builder and
//! the coverage check, but differ in reset-source encodings, pull-resistor
//! labels and the set of macro shapes they can emit. Each variant implements
//! [`PlatformOps`] and is consumed polymorphically by the selection engine.

use crate::macros::Context;

pub(crate) mod apollo;
pub(crate) mod lewisburg;
pub(crate) mod sunrise;

/// Platform-specific hooks used by the selection engine. One implementation
/// per chipset; the methods render into the context's builder and consume
/// register fields as a side effect.
pub(crate) trait PlatformOps {
    /// Read-only bit mask for PAD_CFG_DW0 on this chipset.
    fn dw0_readonly(&self) -> u32;
    /// Read-only bit mask for PAD_CFG_DW1 on this chipset.
    fn dw1_readonly(&self) -> u32;

    /// Append the reset-source argument (PADRSTCFG).
    fn reset_source(&self, ctx: &mut Context);
    /// Append the pull-resistor argument (TERM).
    fn pull(&self, ctx: &mut Context);

    /// Render the GPIO-input shape (TX buffer disabled).
    fn gpi(&self, ctx: &mut Context);
    /// Render the GPIO-output shape (RX buffer disabled).
    fn gpo(&self, ctx: &mut Context);
    /// Render the native-function shape (PMODE != 0).
    fn native_function(&self, ctx: &mut Context);
    /// Render the no-connect shape (both buffers disabled).
    fn no_connect(&self, ctx: &mut Context);
    /// Render the shape for a pad with both buffers enabled.
    fn bidirection(&self, ctx: &mut Context);
    /// Render the generic struct form. Reads every field it encodes, so the
    /// result is covered by construction and accepted unconditionally.
    fn advanced(&self, ctx: &mut Context);
}

/// GPIO input routes a pad can assert in DW0.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Route {
    IoApic,
    Sci,
    Smi,
    Nmi,
}

impl Route {
    pub(crate) fn label(self) -> &'static str {
        match self {
            Route::IoApic => "IOAPIC",
            Route::Sci => "SCI",
            Route::Smi => "SMI",
            Route::Nmi => "NMI",
        }
    }
}

/// Read all four input-route bits (consuming their masks) and return the
/// asserted routes in a fixed order, so that multi-route macro arguments come
/// out deterministically.
pub(crate) fn gpio_input_routes(ctx: &mut Context) -> Vec<Route> {
    let mut routes = Vec::new();
    if ctx.dw0().route_ioxapic() {
        routes.push(Route::IoApic);
    }
    if ctx.dw0().route_sci() {
        routes.push(Route::Sci);
    }
    if ctx.dw0().route_smi() {
        routes.push(Route::Smi);
    }
    if ctx.dw0().route_nmi() {
        routes.push(Route::Nmi);
    }
    routes
}
