//! Hexadecimal rendering of frames for tracing and display.

use std::fmt;

/// Lazily formats a byte slice as space-separated lowercase hex, so log
/// statements only pay for formatting when the record is emitted.
#[derive(Debug, Clone, Copy)]
pub struct HexSlice<'a>(pub &'a [u8]);

impl fmt::Display for HexSlice<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, b) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str(" ")?;
            }
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

/// Convert a byte slice to a lowercase hex string without separators.
///
/// Example: `&[0x90, 0xf5]` -> `"90f5"`
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Convert a byte slice to a lowercase hex string with a single space between
/// each byte.
///
/// Example: `&[0x91, 0x00]` -> `"91 00"`
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    HexSlice(bytes).to_string()
}
