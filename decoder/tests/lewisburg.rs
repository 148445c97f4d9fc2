// Licensed under the Apache-2.0 license

//! Lewisburg shape selection: shares the Sunrise shape set but not its
//! GPD remap or dual-route macro.

use padcfg_decoder::{render_pad_macro, Ownership, Platform};

fn lbg(id: &str, dw0: u32, dw1: u32) -> String {
    render_pad_macro(Platform::Lewisburg, id, dw0, dw1, Ownership::Acpi)
}

#[test]
fn test_gpo() {
    assert_eq!(
        lbg("GPP_B12", 0x4400_0200, 0x0000_0000),
        "PAD_CFG_GPO(GPP_B12, 0, DEEP),"
    );
}

#[test]
fn test_gpi_single_route_matches_sunrise_shapes() {
    assert_eq!(
        lbg("GPP_B18", 0x0008_0100, 0x0000_0000),
        "PAD_CFG_GPI_SCI(GPP_B18, NONE, RSMRST, LEVEL, NONE),"
    );
    assert_eq!(
        lbg("GPP_B3", 0x0010_0100, 0x0000_0000),
        "PAD_CFG_GPI_APIC(GPP_B3, NONE, RSMRST),"
    );
}

#[test]
fn test_no_gpd_reset_remap() {
    // PADRSTCFG = 3h stays reserved even for a GPD-named pad.
    assert_eq!(
        lbg("GPD3", 0xC000_0100, 0x0000_0000),
        "PAD_CFG_GPI(GPD3, NONE, RESERVED),"
    );
}

#[test]
fn test_two_routes_fall_back_to_struct_form() {
    let out = lbg("GPP_B3", 0x0018_0100, 0x0000_0000);
    assert!(out.starts_with("_PAD_CFG_STRUCT(GPP_B3,"), "got {out}");
    assert!(
        out.contains("PAD_IRQ_CFG(IOAPIC) | PAD_IRQ_CFG(SCI) | PAD_TRIG(LEVEL)"),
        "got {out}"
    );
}

#[test]
fn test_no_connect() {
    assert_eq!(
        lbg("GPP_A1", 0x0000_0300, 0x0000_0000),
        "PAD_NC(GPP_A1, NONE),"
    );
}
