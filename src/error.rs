//! Error types for address parsing and subnet planning.

use std::fmt;
use std::net::Ipv4Addr;

/// Guidance attached to an out-of-range CIDR prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskHint {
    TooShort,
    TooLong,
}

impl MaskHint {
    /// Prefixes up to /16 are reported as too short, anything above as too long.
    pub fn from_prefix(prefix: u64) -> MaskHint {
        if prefix <= 16 {
            MaskHint::TooShort
        } else {
            MaskHint::TooLong
        }
    }
}

impl fmt::Display for MaskHint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MaskHint::TooShort => write!(f, "too short"),
            MaskHint::TooLong => write!(f, "too long"),
        }
    }
}

/// Rejected address or mask input.
///
/// A failed parse never touches the values already held by the [`Address`](crate::models::Address),
/// so the caller can simply ask for that one field again.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("input is empty")]
    Empty,
    #[error("unexpected character {character:?}, only digits and '.' are allowed")]
    UnexpectedCharacter { character: char },
    #[error("expected 4 segments separated by '.', found {found}")]
    SegmentCount { found: usize },
    #[error("segment {index} has {length} digits, expected 1 to 3")]
    SegmentLength { index: usize, length: usize },
    #[error("segment {index} has value {value}, expected 0 to 255")]
    SegmentRange { index: usize, value: u64 },
    #[error("mask /{prefix} is {hint}, expected /0 to /30")]
    MaskRange { prefix: u64, hint: MaskHint },
    #[error("mask {mask} does not have contiguous leading one-bits")]
    NonContiguousMask { mask: Ipv4Addr },
}

/// Rejected subnet planning operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    #[error("a subnet must hold at least one host")]
    ZeroHosts,
    #[error("{requested} hosts need a block of {block} addresses, only {left} left")]
    Capacity { requested: u64, block: u64, left: u64 },
    #[error("subnet index {index} is out of range, {len} subnet(s) requested")]
    Index { index: usize, len: usize },
    #[error("network hasn't been divided, no subnets requested")]
    NoRequests,
    #[error("next network after {base} with offset {offset} is outside the address space")]
    Overflow { base: Ipv4Addr, offset: u64 },
}
