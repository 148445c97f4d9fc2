// Licensed under the Apache-2.0 license

//! Sunrise Point shape selection, driven through the public API with
//! register values taken from real inteltool dumps where possible.

use padcfg_decoder::{render_pad_macro, Ownership, Platform};

fn snr(id: &str, dw0: u32, dw1: u32) -> String {
    render_pad_macro(Platform::Sunrise, id, dw0, dw1, Ownership::Acpi)
}

fn snr_driver(id: &str, dw0: u32, dw1: u32) -> String {
    render_pad_macro(Platform::Sunrise, id, dw0, dw1, Ownership::Driver)
}

#[test]
fn test_gpo_without_pull_argument() {
    assert_eq!(
        snr("GPP_B12", 0x4400_0200, 0x0000_0000),
        "PAD_CFG_GPO(GPP_B12, 0, DEEP),"
    );
}

#[test]
fn test_gpo_with_termination() {
    assert_eq!(
        snr("GPP_B23", 0x8400_0201, 0x0000_2800),
        "PAD_CFG_TERM_GPO(GPP_B23, 1, 5K_PU, PLTRST),"
    );
}

#[test]
fn test_gpo_driver_owned() {
    assert_eq!(
        snr_driver("GPP_B23", 0x8400_0201, 0x0000_0000),
        "PAD_CFG_GPO_GPIO_DRIVER(GPP_B23, 1, PLTRST, NONE),"
    );
}

#[test]
fn test_native_function_buf_trig() {
    // GPP_F1 SATAXPCIE4 from an inteltool dump: NF1 with the RX buffer
    // disabled and triggering parked off.
    assert_eq!(
        snr("GPP_F1", 0x8400_0502, 0x0000_3026),
        "PAD_CFG_NF_BUF_TRIG(GPP_F1, 20K_PU, PLTRST, NF1, TX_DISABLE, OFF),"
    );
    // GPP_B12 SLP_S0#
    assert_eq!(
        snr("GPP_B12", 0x4400_0600, 0x0000_003c),
        "PAD_CFG_NF_BUF_TRIG(GPP_B12, NONE, DEEP, NF1, RX_DISABLE, OFF),"
    );
}

#[test]
fn test_native_function_plain() {
    assert_eq!(
        snr("GPP_D23", 0x8000_0400, 0x0000_0000),
        "PAD_CFG_NF(GPP_D23, NONE, PLTRST, NF1),"
    );
}

#[test]
fn test_gpi_plain() {
    assert_eq!(
        snr("GPP_A7", 0x0000_0100, 0x0000_0000),
        "PAD_CFG_GPI(GPP_A7, NONE, RSMRST),"
    );
}

#[test]
fn test_gpi_trig_own_on_edge() {
    assert_eq!(
        snr("GPP_D9", 0x0200_0100, 0x0000_0000),
        "PAD_CFG_GPI_TRIG_OWN(GPP_D9, NONE, RSMRST, EDGE_SINGLE, ACPI),"
    );
}

#[test]
fn test_gpi_trig_own_on_driver_ownership() {
    assert_eq!(
        snr_driver("GPP_D9", 0x0000_0100, 0x0000_0000),
        "PAD_CFG_GPI_TRIG_OWN(GPP_D9, NONE, RSMRST, LEVEL, DRIVER),"
    );
}

#[test]
fn test_gpi_acpi_sci_omits_trigger_argument() {
    let out = snr("GPP_G2", 0x0208_0100, 0x0000_0000);
    assert_eq!(out, "PAD_CFG_GPI_ACPI_SCI(GPP_G2, NONE, RSMRST, NONE),");
    assert!(!out.contains("EDGE"), "edge is implied by the macro name");
}

#[test]
fn test_gpi_sci_level_keeps_trigger_argument() {
    assert_eq!(
        snr("GPP_B18", 0x0008_0100, 0x0000_0000),
        "PAD_CFG_GPI_SCI(GPP_B18, NONE, RSMRST, LEVEL, NONE),"
    );
}

#[test]
fn test_gpi_acpi_smi() {
    assert_eq!(
        snr("GPP_I3", 0x0204_0100, 0x0000_0000),
        "PAD_CFG_GPI_ACPI_SMI(GPP_I3, NONE, RSMRST, NONE),"
    );
}

#[test]
fn test_gpi_smi_level() {
    assert_eq!(
        snr("GPP_E7", 0x0004_0100, 0x0000_0000),
        "PAD_CFG_GPI_SMI(GPP_E7, NONE, RSMRST, LEVEL, NONE),"
    );
}

#[test]
fn test_gpi_apic_level() {
    assert_eq!(
        snr("GPP_B3", 0x0010_0100, 0x0000_0000),
        "PAD_CFG_GPI_APIC(GPP_B3, NONE, RSMRST),"
    );
}

#[test]
fn test_gpi_apic_invert() {
    assert_eq!(
        snr("GPP_C5", 0x0090_0100, 0x0000_0000),
        "PAD_CFG_GPI_APIC_INVERT(GPP_C5, NONE, RSMRST),"
    );
}

#[test]
fn test_gpi_apic_edge_uses_ios_spelling() {
    assert_eq!(
        snr("GPP_C20", 0x0210_0100, 0x0000_0000),
        "PAD_CFG_GPI_APIC_IOS(GPP_C20, NONE, RSMRST, EDGE_SINGLE, NONE, TxDRxE, DISPUPD),"
    );
}

#[test]
fn test_gpi_nmi() {
    assert_eq!(
        snr("GPIO_24", 0x0002_0100, 0x0000_0000),
        "PAD_CFG_GPI_NMI(GPIO_24, NONE, RSMRST, LEVEL, NONE),"
    );
}

#[test]
fn test_gpi_dual_route_fixed_argument_order() {
    assert_eq!(
        snr("GPP_B3", 0x0018_0100, 0x0000_0000),
        "PAD_CFG_GPI_DUAL_ROUTE(GPP_B3, NONE, RSMRST, LEVEL, NONE, IOAPIC, SCI),"
    );
}

#[test]
fn test_gpi_triple_route_falls_back_to_struct_form() {
    let out = snr("GPP_E7", 0x001C_0100, 0x0000_0000);
    assert!(out.starts_with("_PAD_CFG_STRUCT(GPP_E7,"), "got {out}");
    assert!(
        out.contains("PAD_IRQ_CFG(IOAPIC) | PAD_IRQ_CFG(SCI) | PAD_IRQ_CFG(SMI) | PAD_TRIG(LEVEL)"),
        "got {out}"
    );
}

#[test]
fn test_no_connect() {
    assert_eq!(
        snr("GPP_A1", 0x0000_0300, 0x0000_0000),
        "PAD_NC(GPP_A1, NONE),"
    );
}

#[test]
fn test_gpd_group_reset_source_remap() {
    // PADRSTCFG = 3h: RSMRST on GPD pads, reserved everywhere else.
    assert_eq!(
        snr("GPD3", 0xC000_0100, 0x0000_0000),
        "PAD_CFG_GPI(GPD3, NONE, RSMRST),"
    );
    assert_eq!(
        snr("GPP_A7", 0xC000_0100, 0x0000_0000),
        "PAD_CFG_GPI(GPP_A7, NONE, RESERVED),"
    );
}

#[test]
fn test_invalid_termination_renders_sentinel() {
    // TERM = 0x3 is a reserved encoding.
    assert_eq!(
        snr("GPP_A1", 0x0000_0300, 0x0000_0C00),
        "PAD_NC(GPP_A1, INVALID),"
    );
}

#[test]
fn test_coverage_failure_regenerates_struct_form() {
    // A plain GPO with RXRAW1 set on top: no named shape reads bit 28, so
    // the whole pad is regenerated in the raw form.
    assert_eq!(
        snr("GPP_B12", 0x5400_0200, 0x0000_0000),
        "_PAD_CFG_STRUCT(GPP_B12,\n\t\t\
         PAD_FUNC(GPIO) | PAD_RESET(DEEP) |\n\t\t\
         PAD_CFG0_TRIG_OFF | PAD_CFG0_RX_POL_NONE |\n\t\t\
         PAD_BUF(RX_DISABLE) | (1 << 28),\n\t\t\
         PAD_CFG_OWN_GPIO(ACPI) | PAD_PULL(NONE)),"
    );
}
