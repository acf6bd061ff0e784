//! Octet conversions and bitwise operations over 8-character binary strings.
//!
//! Binary octets are `String`s of exactly [`OCTET_BITS`] `'0'`/`'1'` characters,
//! most significant bit first. Every binary value starts life in
//! [`decimal_to_binary`], which pads to full width, so the bitwise helpers can
//! assume both operands are 8 characters long.

/// Number of bits in one address segment.
pub const OCTET_BITS: usize = 8;

/// Convert an octet to its 8-character binary form.
///
/// # Examples
/// ```
/// use subnet_planner::models::decimal_to_binary;
/// assert_eq!(decimal_to_binary(192), "11000000");
/// assert_eq!(decimal_to_binary(5), "00000101");
/// ```
pub fn decimal_to_binary(n: u8) -> String {
    let mut reversed = Vec::with_capacity(OCTET_BITS);
    let mut quotient = n;
    while quotient > 0 {
        reversed.push(if quotient % 2 == 1 { '1' } else { '0' });
        quotient /= 2;
    }
    // left pad
    while reversed.len() < OCTET_BITS {
        reversed.push('0');
    }
    reversed.iter().rev().collect()
}

/// Decode an 8-character binary octet, MSB weight 128.
pub fn binary_to_decimal(binary: &str) -> u8 {
    let weights = (0..OCTET_BITS as u32).rev();
    let sum: u64 = binary
        .chars()
        .zip(weights)
        .filter(|(bit, _)| *bit == '1')
        .map(|(_, weight)| power(2, weight))
        .sum();
    sum as u8
}

/// Bitwise AND of two binary octets.
pub fn and_octet(a: &str, b: &str) -> String {
    a.chars()
        .zip(b.chars())
        .map(|(x, y)| if x == '1' && y == '1' { '1' } else { '0' })
        .collect()
}

/// Bitwise OR of two binary octets.
pub fn or_octet(a: &str, b: &str) -> String {
    a.chars()
        .zip(b.chars())
        .map(|(x, y)| if x == '0' && y == '0' { '0' } else { '1' })
        .collect()
}

/// Bitwise complement of a binary octet.
pub fn not_octet(a: &str) -> String {
    a.chars()
        .map(|bit| if bit == '1' { '0' } else { '1' })
        .collect()
}

/// Rebuild a decimal number from its digit characters, most significant first.
///
/// Callers check that every character is an ASCII digit. The result saturates
/// instead of overflowing, which still fails every later range check.
pub fn char_digits_to_integer(digits: &[char]) -> u64 {
    digits
        .iter()
        .rev()
        .enumerate()
        .fold(0u64, |acc, (position, c)| {
            let digit = u64::from(c.to_digit(10).unwrap_or(0));
            acc.saturating_add(digit.saturating_mul(power(10, position as u32)))
        })
}

/// `base` raised to `exponent`, by squaring. Saturates at `u64::MAX`.
pub fn power(base: u64, exponent: u32) -> u64 {
    match exponent {
        0 => 1,
        1 => base,
        _ => {
            let half = power(base, exponent / 2);
            let squared = half.saturating_mul(half);
            if exponent % 2 == 0 {
                squared
            } else {
                squared.saturating_mul(base)
            }
        }
    }
}
