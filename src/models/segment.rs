//! One octet of an address together with the matching octet of its mask.

use super::number_system::{and_octet, binary_to_decimal, decimal_to_binary, not_octet, or_octet};
use std::cell::OnceCell;
use std::fmt;

/// A derived octet, kept in both notations.
#[derive(Debug, Clone, PartialEq, Eq)]
struct DerivedOctet {
    value: u8,
    binary: String,
}

impl DerivedOctet {
    fn from_binary(binary: String) -> DerivedOctet {
        DerivedOctet {
            value: binary_to_decimal(&binary),
            binary,
        }
    }
}

/// Memoized values derived from `value` and `mask_value`.
///
/// Filled lazily on first access and dropped as a whole by
/// [`Segment::invalidate`] whenever either input changes.
#[derive(Debug, Clone, Default)]
struct SegmentCache {
    binary: OnceCell<String>,
    mask_binary: OnceCell<String>,
    not_mask: OnceCell<DerivedOctet>,
    network: OnceCell<DerivedOctet>,
    broadcast: OnceCell<DerivedOctet>,
}

/// One 8-bit segment of an IPv4 address and its mask.
#[derive(Debug, Clone, Default)]
pub struct Segment {
    value: u8,
    mask_value: u8,
    cache: SegmentCache,
}

impl Segment {
    pub fn new(value: u8, mask_value: u8) -> Segment {
        Segment {
            value,
            mask_value,
            cache: SegmentCache::default(),
        }
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn mask_value(&self) -> u8 {
        self.mask_value
    }

    pub fn set_value(&mut self, value: u8) {
        self.value = value;
        self.invalidate();
    }

    pub fn set_mask_value(&mut self, mask_value: u8) {
        self.mask_value = mask_value;
        self.invalidate();
    }

    /// Assign the mask from an already computed binary octet, seeding the cache with it.
    pub fn set_mask_binary(&mut self, mask_binary: String) {
        self.mask_value = binary_to_decimal(&mask_binary);
        self.cache = SegmentCache {
            mask_binary: OnceCell::from(mask_binary),
            ..SegmentCache::default()
        };
    }

    /// Drop every derived value.
    pub fn invalidate(&mut self) {
        self.cache = SegmentCache::default();
    }

    pub fn binary(&self) -> &str {
        self.cache
            .binary
            .get_or_init(|| decimal_to_binary(self.value))
    }

    pub fn mask_binary(&self) -> &str {
        self.cache
            .mask_binary
            .get_or_init(|| decimal_to_binary(self.mask_value))
    }

    fn not_mask(&self) -> &DerivedOctet {
        self.cache
            .not_mask
            .get_or_init(|| DerivedOctet::from_binary(not_octet(self.mask_binary())))
    }

    pub fn not_mask_value(&self) -> u8 {
        self.not_mask().value
    }

    pub fn not_mask_binary(&self) -> &str {
        &self.not_mask().binary
    }

    fn network(&self) -> &DerivedOctet {
        self.cache.network.get_or_init(|| {
            if self.mask_value == u8::MAX {
                DerivedOctet {
                    value: self.value,
                    binary: self.binary().to_string(),
                }
            } else {
                DerivedOctet::from_binary(and_octet(self.binary(), self.mask_binary()))
            }
        })
    }

    /// Address octet AND mask octet.
    pub fn network_value(&self) -> u8 {
        self.network().value
    }

    pub fn network_binary(&self) -> &str {
        &self.network().binary
    }

    fn broadcast(&self) -> &DerivedOctet {
        self.cache.broadcast.get_or_init(|| {
            if self.mask_value == u8::MAX {
                DerivedOctet {
                    value: self.value,
                    binary: self.binary().to_string(),
                }
            } else {
                DerivedOctet::from_binary(or_octet(
                    self.network_binary(),
                    self.not_mask_binary(),
                ))
            }
        })
    }

    /// Network octet OR the complemented mask octet.
    pub fn broadcast_value(&self) -> u8 {
        self.broadcast().value
    }

    pub fn broadcast_binary(&self) -> &str {
        &self.broadcast().binary
    }

    /// Number of one-bits in the mask octet.
    pub fn mask_bits(&self) -> u32 {
        self.mask_binary().chars().filter(|bit| *bit == '1').count() as u32
    }
}

impl PartialEq for Segment {
    fn eq(&self, other: &Segment) -> bool {
        self.value == other.value && self.mask_value == other.mask_value
    }
}

impl Eq for Segment {}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
