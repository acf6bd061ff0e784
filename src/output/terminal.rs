//! Terminal output utilities.
//!
//! Provides formatting helpers for terminal output.

use crate::models::OCTET_BITS;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// Lay out a 32-bit binary string with two spaces between octets and `| `
/// after the last mask bit.
///
/// The mask marker takes the place of the octet gap when both fall on the
/// same bit.
pub fn binary_with_boundary(bits: &str, prefix: u32) -> String {
    let mut out = String::with_capacity(bits.len() + 12);
    for (i, bit) in bits.chars().enumerate() {
        out.push(bit);
        let position = i + 1;
        if position == prefix as usize {
            out.push_str("| ");
        } else if position % OCTET_BITS == 0 {
            out.push_str("  ");
        }
    }
    out.trim_end().to_string()
}

/// Pad a label with dots, `Network . . . . :` style.
pub fn dotted_label(label: &str, width: usize) -> String {
    let mut out = format!("{label} ");
    while out.len() + 2 < width {
        out.push_str(". ");
    }
    out.push(':');
    out
}
