//! IPv4 address and subnet mask built from four [`Segment`]s.
//!
//! An [`Address`] starts out as `0.0.0.0/0` and is filled by two independent
//! steps, [`Address::parse_address`] and [`Address::parse_mask`]. Either step
//! can fail and be retried on its own; a failure never changes the segments.

use super::number_system::{char_digits_to_integer, decimal_to_binary, power, OCTET_BITS};
use super::segment::Segment;
use crate::error::{MaskHint, ParseError};
use itertools::Itertools;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Segments in an IPv4 address.
pub const SEGMENT_COUNT: usize = 4;
/// Longest decimal run accepted for one segment.
pub const SEGMENT_DIGITS: usize = 3;
/// Bits in an IPv4 address.
pub const ADDRESS_BITS: u32 = 32;
/// Longest prefix accepted in CIDR notation; keeps at least two host addresses.
pub const MAX_CIDR_PREFIX: u64 = 30;
/// Separator between segments in dotted-decimal notation.
pub const SEPARATOR: char = '.';

/// Whether dotted masks must have contiguous leading one-bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MaskCheck {
    /// Reject masks such as `255.0.255.0`.
    #[default]
    Strict,
    /// Accept any four octets; the prefix length is then the count of one-bits.
    Permissive,
}

/// Notation of a mask input, resolved once before validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskNotation<'a> {
    /// Prefix digits, without the leading `/`.
    Cidr(&'a str),
    Dotted(&'a str),
}

impl<'a> MaskNotation<'a> {
    /// `/N` is CIDR, and so is a bare run of up to 5 characters without `.` or `/`.
    pub fn detect(text: &'a str) -> MaskNotation<'a> {
        if let Some(digits) = text.strip_prefix('/') {
            if !text.contains(SEPARATOR) {
                return MaskNotation::Cidr(digits);
            }
        } else if text.chars().count() <= 5 && !text.contains('/') && !text.contains(SEPARATOR) {
            return MaskNotation::Cidr(text);
        }
        MaskNotation::Dotted(text)
    }
}

/// Validate dotted-decimal input and decode its four segment values.
///
/// Checks run in order: segment count, run lengths, characters, value range.
pub fn parse_dotted(text: &str) -> Result<[u8; SEGMENT_COUNT], ParseError> {
    if text.is_empty() {
        return Err(ParseError::Empty);
    }
    let runs: Vec<Vec<char>> = text
        .split(SEPARATOR)
        .map(|run| run.chars().collect())
        .collect();

    if runs.len() != SEGMENT_COUNT {
        return Err(ParseError::SegmentCount { found: runs.len() });
    }
    for (i, run) in runs.iter().enumerate() {
        if run.is_empty() || run.len() > SEGMENT_DIGITS {
            return Err(ParseError::SegmentLength {
                index: i + 1,
                length: run.len(),
            });
        }
    }
    for run in &runs {
        if let Some(character) = run.iter().find(|c| !c.is_ascii_digit()) {
            return Err(ParseError::UnexpectedCharacter {
                character: *character,
            });
        }
    }

    let decoded: Vec<u64> = runs.iter().map(|run| char_digits_to_integer(run)).collect();
    let mut values = [0u8; SEGMENT_COUNT];
    for (i, value) in decoded.into_iter().enumerate() {
        values[i] = u8::try_from(value).map_err(|_| ParseError::SegmentRange {
            index: i + 1,
            value,
        })?;
    }
    Ok(values)
}

/// Validate the digits of a CIDR prefix, `0..=30`.
pub fn parse_cidr(digits: &str) -> Result<u32, ParseError> {
    let digits: Vec<char> = digits.chars().collect();
    if digits.is_empty() {
        return Err(ParseError::Empty);
    }
    if let Some(character) = digits.iter().find(|c| !c.is_ascii_digit()) {
        return Err(ParseError::UnexpectedCharacter {
            character: *character,
        });
    }
    let prefix = char_digits_to_integer(&digits);
    if prefix > MAX_CIDR_PREFIX {
        return Err(ParseError::MaskRange {
            prefix,
            hint: MaskHint::from_prefix(prefix),
        });
    }
    Ok(prefix as u32)
}

/// Split a prefix length into the four binary mask octets.
pub fn prefix_to_mask_octets(prefix: u32) -> Vec<String> {
    let ones = prefix.min(ADDRESS_BITS) as usize;
    let bits: Vec<char> = std::iter::repeat('1')
        .take(ones)
        .chain(std::iter::repeat('0'))
        .take(ADDRESS_BITS as usize)
        .collect();
    bits.chunks(OCTET_BITS)
        .map(|octet| octet.iter().collect())
        .collect()
}

fn dotted<I: IntoIterator<Item = u8>>(octets: I) -> String {
    octets.into_iter().join(".")
}

/// An IPv4 address together with its subnet mask.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Address {
    segments: [Segment; SEGMENT_COUNT],
}

impl Address {
    /// Empty address, `0.0.0.0` with mask `0.0.0.0`.
    pub fn new() -> Address {
        Address::default()
    }

    /// Build an address from separate address and mask input.
    pub fn from_parts(address: &str, mask: &str) -> Result<Address, ParseError> {
        let mut result = Address::new();
        result.parse_address(address)?;
        result.parse_mask(mask)?;
        Ok(result)
    }

    /// Validate dotted-decimal input and assign it to the segments.
    pub fn parse_address(&mut self, text: &str) -> Result<(), ParseError> {
        let values = parse_dotted(text.trim())?;
        self.set_octets(Ipv4Addr::from(values));
        log::debug!("Address {} is valid", self.address());
        Ok(())
    }

    /// Parse a mask in CIDR or dotted notation, rejecting non-contiguous dotted masks.
    pub fn parse_mask(&mut self, text: &str) -> Result<(), ParseError> {
        self.parse_mask_with(text, MaskCheck::Strict)
    }

    pub fn parse_mask_with(&mut self, text: &str, check: MaskCheck) -> Result<(), ParseError> {
        match MaskNotation::detect(text.trim()) {
            MaskNotation::Cidr(digits) => {
                let prefix = parse_cidr(digits)?;
                self.set_prefix_length(prefix);
            }
            MaskNotation::Dotted(text) => {
                let values = parse_dotted(text)?;
                let bits: String = values.iter().map(|v| decimal_to_binary(*v)).collect();
                if check == MaskCheck::Strict && bits.contains("01") {
                    return Err(ParseError::NonContiguousMask {
                        mask: Ipv4Addr::from(values),
                    });
                }
                for (segment, value) in self.segments.iter_mut().zip(values) {
                    segment.set_mask_value(value);
                }
            }
        }
        log::debug!("Subnet mask {} is valid", self.mask());
        Ok(())
    }

    /// Assign the mask from a bit count. Not limited to /30; values above 32 are clamped.
    pub fn set_prefix_length(&mut self, prefix: u32) {
        for (segment, octet) in self.segments.iter_mut().zip(prefix_to_mask_octets(prefix)) {
            segment.set_mask_binary(octet);
        }
    }

    /// Assign the four address octets, keeping the mask.
    pub fn set_octets(&mut self, addr: Ipv4Addr) {
        for (segment, value) in self.segments.iter_mut().zip(addr.octets()) {
            segment.set_value(value);
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Force computation of every segment's network and broadcast values.
    pub fn configure(&self) {
        for segment in &self.segments {
            segment.network_value();
            segment.broadcast_value();
        }
    }

    /// Count of one-bits across the four mask octets.
    pub fn prefix_length(&self) -> u32 {
        self.segments.iter().map(|s| s.mask_bits()).sum()
    }

    /// Total addresses in the block, network and broadcast included.
    pub fn capacity(&self) -> u64 {
        power(2, ADDRESS_BITS - self.prefix_length())
    }

    /// Addresses left for hosts once network and broadcast are reserved.
    pub fn usable_hosts(&self) -> u64 {
        self.capacity().saturating_sub(2)
    }

    pub fn address(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.octets(Segment::value))
    }

    pub fn mask(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.octets(Segment::mask_value))
    }

    pub fn not_mask(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.octets(Segment::not_mask_value))
    }

    pub fn network(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.octets(Segment::network_value))
    }

    pub fn broadcast(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.octets(Segment::broadcast_value))
    }

    /// First usable host, `None` for /31 and /32 blocks.
    pub fn first_host(&self) -> Option<Ipv4Addr> {
        (self.usable_hosts() > 0)
            .then(|| Ipv4Addr::from(u32::from(self.network()) + 1))
    }

    /// Last usable host, `None` for /31 and /32 blocks.
    pub fn last_host(&self) -> Option<Ipv4Addr> {
        (self.usable_hosts() > 0)
            .then(|| Ipv4Addr::from(u32::from(self.broadcast()) - 1))
    }

    pub fn network_address(&self) -> String {
        dotted(self.octets(Segment::network_value))
    }

    pub fn broadcast_address(&self) -> String {
        dotted(self.octets(Segment::broadcast_value))
    }

    pub fn mask_address(&self) -> String {
        dotted(self.octets(Segment::mask_value))
    }

    pub fn not_mask_address(&self) -> String {
        dotted(self.octets(Segment::not_mask_value))
    }

    pub fn binary_address(&self) -> String {
        self.segments.iter().map(|s| s.binary()).collect()
    }

    pub fn binary_mask(&self) -> String {
        self.segments.iter().map(|s| s.mask_binary()).collect()
    }

    pub fn binary_not_mask(&self) -> String {
        self.segments.iter().map(|s| s.not_mask_binary()).collect()
    }

    pub fn binary_network(&self) -> String {
        self.segments.iter().map(|s| s.network_binary()).collect()
    }

    pub fn binary_broadcast(&self) -> String {
        self.segments.iter().map(|s| s.broadcast_binary()).collect()
    }

    /// Address of the block that starts `offset` addresses after this one.
    ///
    /// The offset is added to the last octet and carried leftwards. Returns
    /// `None` when the carry runs past the first octet.
    pub fn follow(&self, offset: u64) -> Option<Ipv4Addr> {
        let values = self.octets(Segment::value).map(u64::from);
        let last = SEGMENT_COUNT - 1;
        let mut addition = [0u64; SEGMENT_COUNT];
        addition[last] = offset;
        if offset >= 255 {
            // Carry into the next octet is taken modulo 255, not 256. Blocks of
            // 65536 addresses or more land one octet short of the real boundary.
            if offset >= 1 << 16 {
                log::warn!(
                    "follow({}, {offset}) uses base-255 carry, result is not the next /{} boundary",
                    self.address(),
                    ADDRESS_BITS.saturating_sub(offset.ilog2())
                );
            }
            addition[last] = offset % 256;
            addition[last - 1] = offset % 255;
        }

        let mut next = [0u8; SEGMENT_COUNT];
        for i in (0..SEGMENT_COUNT).rev() {
            let sum = values[i] + addition[i];
            if sum > 255 {
                if i == 0 {
                    return None;
                }
                addition[i - 1] += 1;
                next[i] = u8::try_from(sum - 256).ok()?;
            } else {
                next[i] = sum as u8;
            }
        }
        Some(Ipv4Addr::from(next))
    }

    fn octets(&self, part: fn(&Segment) -> u8) -> [u8; SEGMENT_COUNT] {
        let mut octets = [0u8; SEGMENT_COUNT];
        for (octet, segment) in octets.iter_mut().zip(&self.segments) {
            *octet = part(segment);
        }
        octets
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}/{}",
            dotted(self.octets(Segment::value)),
            self.prefix_length()
        )
    }
}

impl FromStr for Address {
    type Err = ParseError;

    /// Parse `a.b.c.d/N`.
    fn from_str(s: &str) -> Result<Address, ParseError> {
        let (address, prefix) = s.trim().split_once('/').ok_or(ParseError::Empty)?;
        let mut result = Address::new();
        result.parse_address(address)?;
        result.set_prefix_length(parse_cidr(prefix.trim())?);
        Ok(result)
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Address, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Address::from_str(&s).map_err(|e| de::Error::custom(format!("invalid address {s}: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address(addr: &str, mask: &str) -> Address {
        Address::from_parts(addr, mask).unwrap()
    }

    #[test]
    fn test_parse_address() {
        let mut a = Address::new();
        a.parse_address("192.168.1.10").unwrap();
        assert_eq!(a.address(), Ipv4Addr::new(192, 168, 1, 10));
        a.parse_address(" 010.0.0.001 ").unwrap();
        assert_eq!(a.address(), Ipv4Addr::new(10, 0, 0, 1));
    }

    #[test]
    fn test_parse_address_errors() {
        let mut a = Address::new();
        assert_eq!(a.parse_address(""), Err(ParseError::Empty));
        assert_eq!(
            a.parse_address("192.168.1"),
            Err(ParseError::SegmentCount { found: 3 })
        );
        assert_eq!(
            a.parse_address("192.168.1.1."),
            Err(ParseError::SegmentCount { found: 5 })
        );
        assert_eq!(
            a.parse_address("192..1.1"),
            Err(ParseError::SegmentLength {
                index: 2,
                length: 0
            })
        );
        assert_eq!(
            a.parse_address("192.168.1.1231"),
            Err(ParseError::SegmentLength {
                index: 4,
                length: 4
            })
        );
        assert_eq!(
            a.parse_address("192.16a.1.1"),
            Err(ParseError::UnexpectedCharacter { character: 'a' })
        );
        assert_eq!(
            a.parse_address("192.168.256.1"),
            Err(ParseError::SegmentRange {
                index: 3,
                value: 256
            })
        );
    }

    #[test]
    fn test_failed_parse_keeps_previous_values() {
        let mut a = address("10.1.2.3", "/16");
        assert!(a.parse_address("10.1.2.999").is_err());
        assert!(a.parse_mask("/31").is_err());
        assert_eq!(a.address(), Ipv4Addr::new(10, 1, 2, 3));
        assert_eq!(a.prefix_length(), 16);
    }

    #[test]
    fn test_dotted_round_trip() {
        for text in ["0.0.0.0", "1.2.3.4", "192.168.100.255", "255.255.255.255"] {
            let a = address(text, "/30");
            assert_eq!(dotted(a.address().octets()), text);
        }
    }

    #[test]
    fn test_mask_notation_detect() {
        assert_eq!(MaskNotation::detect("/24"), MaskNotation::Cidr("24"));
        assert_eq!(MaskNotation::detect("24"), MaskNotation::Cidr("24"));
        assert_eq!(MaskNotation::detect("12345"), MaskNotation::Cidr("12345"));
        assert_eq!(
            MaskNotation::detect("123456"),
            MaskNotation::Dotted("123456")
        );
        assert_eq!(
            MaskNotation::detect("255.255.0.0"),
            MaskNotation::Dotted("255.255.0.0")
        );
        assert_eq!(MaskNotation::detect("/2.4"), MaskNotation::Dotted("/2.4"));
        assert_eq!(MaskNotation::detect("24/"), MaskNotation::Dotted("24/"));
    }

    #[test]
    fn test_parse_cidr_mask() {
        let a = address("192.168.1.77", "/26");
        assert_eq!(a.mask_address(), "255.255.255.192");
        assert_eq!(a.binary_mask(), format!("{}{}", "1".repeat(26), "0".repeat(6)));
        assert_eq!(a.prefix_length(), 26);

        let a = address("192.168.1.77", "20");
        assert_eq!(a.mask_address(), "255.255.240.0");
        assert_eq!(a.prefix_length(), 20);

        let a = address("192.168.1.77", "0");
        assert_eq!(a.mask_address(), "0.0.0.0");
        assert_eq!(a.capacity(), 4294967296);
    }

    #[test]
    fn test_parse_cidr_mask_errors() {
        let mut a = Address::new();
        assert_eq!(
            a.parse_mask("/31"),
            Err(ParseError::MaskRange {
                prefix: 31,
                hint: MaskHint::TooLong
            })
        );
        assert_eq!(
            a.parse_mask("99999"),
            Err(ParseError::MaskRange {
                prefix: 99999,
                hint: MaskHint::TooLong
            })
        );
        assert_eq!(a.parse_mask("/"), Err(ParseError::Empty));
        assert_eq!(a.parse_mask(""), Err(ParseError::Empty));
        assert_eq!(
            a.parse_mask("/-4"),
            Err(ParseError::UnexpectedCharacter { character: '-' })
        );
    }

    #[test]
    fn test_parse_dotted_mask() {
        let a = address("172.16.5.4", "255.255.252.0");
        assert_eq!(a.prefix_length(), 22);
        assert_eq!(a.network_address(), "172.16.4.0");
        assert_eq!(a.broadcast_address(), "172.16.7.255");

        let a = address("172.16.5.4", "255.255.255.255");
        assert_eq!(a.prefix_length(), 32);
        assert_eq!(a.capacity(), 1);
        assert_eq!(a.usable_hosts(), 0);
    }

    #[test]
    fn test_non_contiguous_mask() {
        let mut a = address("10.20.30.40", "/8");
        assert_eq!(
            a.parse_mask("255.0.255.0"),
            Err(ParseError::NonContiguousMask {
                mask: Ipv4Addr::new(255, 0, 255, 0)
            })
        );
        assert_eq!(a.prefix_length(), 8, "strict rejection keeps the old mask");

        a.parse_mask_with("255.0.255.0", MaskCheck::Permissive).unwrap();
        assert_eq!(a.mask_address(), "255.0.255.0");
        assert_eq!(a.prefix_length(), 16);
        assert_eq!(a.network_address(), "10.0.30.0");
        assert_eq!(a.broadcast_address(), "10.255.30.255");
    }

    #[test]
    fn test_capacity_for_all_cidr_prefixes() {
        let mut a = Address::new();
        for prefix in 0..=30u32 {
            a.parse_mask(&format!("/{prefix}")).unwrap();
            assert_eq!(a.prefix_length(), prefix);
            assert_eq!(a.capacity(), 1u64 << (32 - prefix), "capacity of /{prefix}");
        }
    }

    #[test]
    fn test_network_broadcast_hosts() {
        let a = address("192.168.1.130", "/25");
        assert_eq!(a.network_address(), "192.168.1.128");
        assert_eq!(a.broadcast_address(), "192.168.1.255");
        assert_eq!(a.not_mask_address(), "0.0.0.127");
        assert_eq!(a.first_host(), Some(Ipv4Addr::new(192, 168, 1, 129)));
        assert_eq!(a.last_host(), Some(Ipv4Addr::new(192, 168, 1, 254)));
        assert_eq!(a.usable_hosts(), 126);
        assert_eq!(a.to_string(), "192.168.1.130/25");
    }

    #[test]
    fn test_no_host_range_without_usable_hosts() {
        let a = address("10.0.0.5", "255.255.255.255");
        assert_eq!(a.prefix_length(), 32);
        assert_eq!(a.network_address(), "10.0.0.5");
        assert_eq!(a.broadcast_address(), "10.0.0.5");
        assert_eq!(a.first_host(), None);
        assert_eq!(a.last_host(), None);

        let a = address("10.0.0.4", "255.255.255.254");
        assert_eq!(a.prefix_length(), 31);
        assert_eq!(a.broadcast_address(), "10.0.0.5");
        assert_eq!(a.usable_hosts(), 0);
        assert_eq!(a.first_host(), None);
        assert_eq!(a.last_host(), None);

        let a = address("10.0.0.4", "/30");
        assert_eq!(a.first_host(), Some(Ipv4Addr::new(10, 0, 0, 5)));
        assert_eq!(a.last_host(), Some(Ipv4Addr::new(10, 0, 0, 6)));
    }

    #[test]
    fn test_network_broadcast_match_integer_math() {
        let samples = ["10.11.12.13", "192.168.77.200", "172.31.255.1", "8.8.4.4"];
        for text in samples {
            for prefix in 0..=30u32 {
                let a = address(text, &format!("/{prefix}"));
                let addr = u32::from(a.address());
                let mask = if prefix == 0 { 0 } else { u32::MAX << (32 - prefix) };
                assert_eq!(u32::from(a.network()), addr & mask, "{text}/{prefix}");
                assert_eq!(u32::from(a.broadcast()), (addr & mask) | !mask);
                assert_eq!(u32::from(a.network()) & mask, u32::from(a.network()));
                assert_eq!(u32::from(a.broadcast()) | !mask, u32::from(a.broadcast()));
            }
        }
    }

    #[test]
    fn test_binary_views() {
        let a = address("192.168.1.5", "/24");
        assert_eq!(a.binary_address(), "11000000101010000000000100000101");
        assert_eq!(a.binary_not_mask(), format!("{}{}", "0".repeat(24), "1".repeat(8)));
        assert_eq!(a.binary_network(), "11000000101010000000000100000000");
        assert_eq!(a.binary_broadcast(), "11000000101010000000000111111111");
    }

    #[test]
    fn test_mask_change_invalidates_derived_values() {
        let mut a = address("10.0.5.9", "/24");
        a.configure();
        assert_eq!(a.network_address(), "10.0.5.0");
        a.parse_mask("/16").unwrap();
        assert_eq!(a.network_address(), "10.0.0.0");
        a.parse_address("10.9.5.9").unwrap();
        assert_eq!(a.broadcast_address(), "10.9.255.255");
    }

    #[test]
    fn test_follow() {
        let a = address("192.168.1.0", "/26");
        assert_eq!(a.follow(64), Some(Ipv4Addr::new(192, 168, 1, 64)));
        let a = address("192.168.1.192", "/26");
        assert_eq!(a.follow(64), Some(Ipv4Addr::new(192, 168, 2, 0)));
        let a = address("10.0.0.0", "/24");
        assert_eq!(a.follow(256), Some(Ipv4Addr::new(10, 0, 1, 0)));
        let a = address("10.0.255.0", "/24");
        assert_eq!(a.follow(256), Some(Ipv4Addr::new(10, 1, 0, 0)));
        let a = address("10.0.0.0", "/22");
        assert_eq!(a.follow(1024), Some(Ipv4Addr::new(10, 0, 4, 0)));
        let a = address("255.255.255.0", "/24");
        assert_eq!(a.follow(256), None);
    }

    #[test]
    fn test_follow_carry_onto_255_stays() {
        // 254 plus the carried 1 is exactly 255, which is kept without a further carry.
        let a = address("10.0.254.0", "/24");
        assert_eq!(a.follow(256), Some(Ipv4Addr::new(10, 0, 255, 0)));
        let a = address("10.0.0.128", "/25");
        assert_eq!(a.follow(127), Some(Ipv4Addr::new(10, 0, 0, 255)));
    }

    #[test]
    fn test_follow_base_255_carry() {
        // 65536 % 255 == 1, so the carry lands in the third octet instead of the second.
        let a = address("10.0.0.0", "/16");
        assert_eq!(a.follow(65536), Some(Ipv4Addr::new(10, 0, 1, 0)));
    }

    #[test]
    fn test_follow_steps_back_to_block_boundary() {
        for k in 2..16u32 {
            let block = 1u64 << k;
            let a = address("172.16.0.0", &format!("/{}", 32 - k));
            let next = a.follow(block).unwrap();
            let back = u32::from(next) - block as u32;
            assert_eq!(Ipv4Addr::from(back), a.network(), "block of {block}");
            assert_eq!(u32::from(next) % block as u32, 0, "aligned to {block}");
        }
    }

    #[test]
    fn test_from_str_and_serde() {
        let a: Address = "10.1.2.3/20".parse().unwrap();
        assert_eq!(a.prefix_length(), 20);
        assert_eq!(a.address(), Ipv4Addr::new(10, 1, 2, 3));
        assert!("10.1.2.3".parse::<Address>().is_err());
        assert!("10.1.2.3/33".parse::<Address>().is_err());

        let json = serde_json::to_string(&a).unwrap();
        assert_eq!(json, "\"10.1.2.3/20\"");
        let back: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(back, a);
    }

    #[test]
    fn test_clone_is_deep() {
        let parent = address("192.168.1.0", "/24");
        let mut child = parent.clone();
        child.set_prefix_length(26);
        child.set_octets(Ipv4Addr::new(192, 168, 1, 64));
        assert_eq!(parent.to_string(), "192.168.1.0/24");
        assert_eq!(child.to_string(), "192.168.1.64/26");
    }
}
