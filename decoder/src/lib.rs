// Licensed under the Apache-2.0 license

//! Intel PCH/SoC GPIO pad configuration decoder.
//!
//! This crate turns the two 32-bit pad configuration registers (PAD_CFG_DW0
//! and PAD_CFG_DW1) captured from a register dump into the coreboot
//! `pad_config` macro that reproduces them, picking the most specific named
//! macro the chipset's header provides and falling back to the raw
//! `_PAD_CFG_STRUCT` form when no named shape covers every configured bit.
//!
//! ## Usage
//!
//! ```
//! use padcfg_decoder::{render_pad_macro, Ownership, Platform};
//!
//! let line = render_pad_macro(
//!     Platform::Sunrise,
//!     "GPP_B12",
//!     0x4400_0200,
//!     0x0000_0000,
//!     Ownership::Acpi,
//! );
//! assert_eq!(line, "PAD_CFG_GPO(GPP_B12, 0, DEEP),");
//! ```
//!
//! ## Module Organization
//!
//! - [`register`]: DW0/DW1 bit-field access with consumed-mask tracking
//! - [`macros`]: the macro text builder and per-field formatters
//! - [`engine`]: shape selection, coverage check and fallback
//! - `platform`: per-chipset shape rules (Sunrise, Lewisburg, Apollo Lake)
//!
//! Diagnostics (unmappable field values, coverage fallbacks) go through the
//! [`log`] facade and never affect the returned text.

pub mod engine;
pub mod macros;
pub mod register;

mod platform;

pub use engine::{generate, render_pad_macro, Options, Platform};
pub use macros::Ownership;
