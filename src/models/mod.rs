//! Addressing data model.
//!
//! Layers, leaves first:
//! - [`number_system`] - octet conversions and binary AND/OR/NOT
//! - [`Segment`] - one octet of an address and its mask, with memoized derived values
//! - [`Address`] - four segments, parsing, network/broadcast/capacity

mod address;
pub mod number_system;
mod segment;

// Re-export public types
pub use address::{
    parse_cidr, parse_dotted, prefix_to_mask_octets, Address, MaskCheck, MaskNotation,
    ADDRESS_BITS, MAX_CIDR_PREFIX, SEGMENT_COUNT, SEGMENT_DIGITS, SEPARATOR,
};
pub use number_system::{
    and_octet, binary_to_decimal, char_digits_to_integer, decimal_to_binary, not_octet, or_octet,
    power, OCTET_BITS,
};
pub use segment::Segment;
