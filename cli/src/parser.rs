// Licensed under the Apache-2.0 license

//! Register-dump log parsing.
//!
//! Reads inteltool-style logs line by line and collects pad entries. A pad
//! line carries the register offset, the 64-bit DW1:DW0 dump word, the pad
//! id and its function:
//!
//! ```text
//! 0x0520: 0x0000003c44000600 GPP_B12  SLP_S0#
//! 0x0438: 0xffffffffffffffff GPP_C7   RESERVED
//! ```
//!
//! Community and group banners become title entries, and the per-group
//! `HOSTSW_OWN_GPP_*` registers are folded into an ownership bitmask that
//! marks individual pads as driver-owned.

use std::collections::HashMap;
use std::io::BufRead;

use anyhow::{Context, Result};
use log::{debug, warn};
use padcfg_decoder::{Ownership, Platform};

/// One entry from the dump: a pad, a reserved slot, or a section title.
#[derive(Clone, Debug)]
pub struct PadInfo {
    pub id: String,
    pub function: String,
    pub dw0: u32,
    pub dw1: u32,
    pub ownership: Ownership,
}

impl PadInfo {
    /// Section titles are stored as entries with no register value.
    pub fn is_title(&self) -> bool {
        self.dw0 == 0
    }

    /// Pads the chipset reports as reserved read back all-ones.
    pub fn is_reserved(&self) -> bool {
        self.dw0 == 0xffff_ffff
    }
}

pub struct LogParser {
    platform: Platform,
    ownership: HashMap<String, u32>,
    pads: Vec<PadInfo>,
}

impl LogParser {
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            ownership: HashMap::new(),
            pads: Vec::new(),
        }
    }

    pub fn parse<R: BufRead>(&mut self, reader: R) -> Result<()> {
        for line in reader.lines() {
            let line = line.context("failed to read log line")?;
            self.parse_line(&line);
        }
        Ok(())
    }

    pub fn into_pads(self) -> Vec<PadInfo> {
        self.pads
    }

    fn parse_line(&mut self, line: &str) {
        if line.contains("GPIO Community") || line.contains("GPIO Group") {
            self.pads.push(PadInfo {
                id: String::new(),
                function: line.trim().to_string(),
                dw0: 0,
                dw1: 0,
                ownership: Ownership::Acpi,
            });
            return;
        }
        if self.extract_ownership(line) {
            return;
        }
        if !self.keyword_match(line) {
            return;
        }
        match parse_pad_line(line) {
            Some((offset, value, id, function)) => {
                debug!("pad {id} at offset {offset:#06x}");
                let ownership = self.ownership_for(&id);
                self.pads.push(PadInfo {
                    id,
                    function,
                    dw0: (value & 0xffff_ffff) as u32,
                    dw1: (value >> 32) as u32,
                    ownership,
                });
            }
            None => warn!("unrecognized pad entry: {line:?}"),
        }
    }

    /// Lines worth parsing as pads. The PCH dumps name every pad after its
    /// group; Apollo Lake pad names are free-form, so any dump-shaped line
    /// qualifies there.
    fn keyword_match(&self, line: &str) -> bool {
        match self.platform {
            Platform::Sunrise | Platform::Lewisburg => {
                line.contains("GPP_") || line.contains("GPD")
            }
            Platform::ApolloLake => looks_like_dump_line(line),
        }
    }

    /// Fold a `HOSTSW_OWN_GPP_*` register into the per-group ownership map.
    /// Returns true when the line was consumed.
    fn extract_ownership(&mut self, line: &str) -> bool {
        if self.platform == Platform::ApolloLake {
            return false;
        }
        if !line.contains("HOSTSW_OWN_GPP_") {
            return false;
        }
        let Some((offset, value, name)) = parse_register_line(line) else {
            warn!("unrecognized ownership register: {line:?}");
            return true;
        };
        let Some(group) = name.split("HOSTSW_OWN_").nth(1) else {
            return true;
        };
        debug!("ownership: [offset {offset:#x}] {name} = {value:#010x}");
        self.ownership.insert(group.to_string(), value);
        true
    }

    fn ownership_for(&self, id: &str) -> Ownership {
        if let Some((group, index)) = split_group_index(id) {
            if index < 32 {
                if let Some(mask) = self.ownership.get(group) {
                    if mask & (1 << index) != 0 {
                        return Ownership::Driver;
                    }
                }
            }
        }
        Ownership::Acpi
    }
}

/// Parse a hex token, tolerating the `:` suffix on offsets.
fn hex_value(token: &str) -> Option<u64> {
    let token = token.trim_end_matches(':');
    let token = token.strip_prefix("0x")?;
    u64::from_str_radix(token, 16).ok()
}

/// `0x0520: 0x0000003c44000600 GPP_B12 SLP_S0#` → offset, value, id,
/// function. The function column is optional.
fn parse_pad_line(line: &str) -> Option<(u16, u64, String, String)> {
    let mut parts = line.split_whitespace();
    let offset = hex_value(parts.next()?)?;
    let value = hex_value(parts.next()?)?;
    let id = parts.next()?.to_string();
    let function = parts.next().unwrap_or_default().to_string();
    Some((offset as u16, value, id, function))
}

/// `0x00b0: 0x00001000 HOSTSW_OWN_GPP_B` → offset, value, register name.
fn parse_register_line(line: &str) -> Option<(u32, u32, String)> {
    let mut parts = line.split_whitespace();
    let offset = hex_value(parts.next()?)? as u32;
    let value = hex_value(parts.next()?)? as u32;
    let name = parts
        .next()?
        .trim_matches(|c| c == '(' || c == ')')
        .to_string();
    Some((offset, value, name))
}

fn looks_like_dump_line(line: &str) -> bool {
    let mut parts = line.split_whitespace();
    matches!(
        (parts.next(), parts.next()),
        (Some(offset), Some(value))
            if offset.starts_with("0x")
                && offset.ends_with(':')
                && value.starts_with("0x")
                && value.len() == 18
    )
}

/// Split a pad id into its group prefix and pad index:
/// `GPP_A12` → (`GPP_A`, 12), `GPD3` → (`GPD`, 3).
fn split_group_index(id: &str) -> Option<(&str, u32)> {
    let digits = id.chars().rev().take_while(|c| c.is_ascii_digit()).count();
    if digits == 0 || digits == id.len() {
        return None;
    }
    let (group, index) = id.split_at(id.len() - digits);
    index.parse().ok().map(|index| (group, index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_pad_line() {
        let (offset, value, id, function) =
            parse_pad_line("0x0520: 0x0000003c44000600 GPP_B12  SLP_S0#").unwrap();
        assert_eq!(offset, 0x0520);
        assert_eq!(value, 0x0000_003c_4400_0600);
        assert_eq!(id, "GPP_B12");
        assert_eq!(function, "SLP_S0#");
    }

    #[test]
    fn test_split_group_index() {
        assert_eq!(split_group_index("GPP_A12"), Some(("GPP_A", 12)));
        assert_eq!(split_group_index("GPD3"), Some(("GPD", 3)));
        assert_eq!(split_group_index("GPP_E"), None);
    }

    #[test]
    fn test_dw_word_split() {
        let mut parser = LogParser::new(Platform::Sunrise);
        parser
            .parse(Cursor::new("0x0520: 0x0000003c44000600 GPP_B12 SLP_S0#\n"))
            .unwrap();
        let pads = parser.into_pads();
        assert_eq!(pads.len(), 1);
        assert_eq!(pads[0].dw0, 0x4400_0600);
        assert_eq!(pads[0].dw1, 0x0000_003c);
    }

    #[test]
    fn test_titles_and_reserved_pads() {
        let log = "\
------- GPIO Group GPP_C -------
0x0438: 0xffffffffffffffff GPP_C7   RESERVED
";
        let mut parser = LogParser::new(Platform::Sunrise);
        parser.parse(Cursor::new(log)).unwrap();
        let pads = parser.into_pads();
        assert_eq!(pads.len(), 2);
        assert!(pads[0].is_title());
        assert_eq!(pads[0].function, "------- GPIO Group GPP_C -------");
        assert!(pads[1].is_reserved());
        assert_eq!(pads[1].id, "GPP_C7");
    }

    #[test]
    fn test_ownership_bitmask_marks_driver_pads() {
        let log = "\
0x00b0: 0x00001000 HOSTSW_OWN_GPP_B
0x0510: 0x0000000044000100 GPP_B12 TESTPAD
0x0508: 0x0000000044000100 GPP_B11 TESTPAD
";
        let mut parser = LogParser::new(Platform::Sunrise);
        parser.parse(Cursor::new(log)).unwrap();
        let pads = parser.into_pads();
        assert_eq!(pads.len(), 2);
        assert_eq!(pads[0].id, "GPP_B12");
        assert_eq!(pads[0].ownership, Ownership::Driver);
        assert_eq!(pads[1].ownership, Ownership::Acpi);
    }

    #[test]
    fn test_ownership_ignored_on_apollo() {
        let log = "\
0x00b0: 0xffffffff HOSTSW_OWN_GPP_B
0x0510: 0x0000000044000100 GPIO_37 TESTPAD
";
        let mut parser = LogParser::new(Platform::ApolloLake);
        parser.parse(Cursor::new(log)).unwrap();
        let pads = parser.into_pads();
        assert_eq!(pads.len(), 1);
        assert_eq!(pads[0].ownership, Ownership::Acpi);
    }

    #[test]
    fn test_unrelated_lines_are_skipped() {
        let log = "\
inteltool -- dump Intel registers
0x0000: 0x12345678 SOME_OTHER_REG
";
        let mut parser = LogParser::new(Platform::Sunrise);
        parser.parse(Cursor::new(log)).unwrap();
        assert!(parser.into_pads().is_empty());
    }
}
