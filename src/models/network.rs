//! IPv4 network prefixes in canonical form.
//!
//! Provides [`Network`], an IPv4 prefix whose base address never carries bits
//! beyond its prefix length, along with the mask helpers used by the
//! aggregation engine.

use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::error::Error;
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use cidr_merge::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, Box<dyn Error>> {
    if len > MAX_LENGTH {
        Err("Network length is too long".into())
    } else {
        Ok(mask_bits(len))
    }
}

/// Number of addresses covered by a prefix of length `len` (`2^(32-len)`).
pub fn block_size(len: u8) -> Result<u64, Box<dyn Error>> {
    if len > MAX_LENGTH {
        Err("Network length is too long".into())
    } else {
        Ok(1u64 << (MAX_LENGTH - len))
    }
}

// Caller guarantees len <= MAX_LENGTH.
fn mask_bits(len: u8) -> u32 {
    let right_len = MAX_LENGTH - len;
    let all_bits = u32::MAX as u64;
    ((all_bits >> right_len) << right_len) as u32
}

/// Why a string was rejected as an IPv4 CIDR prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseNetworkError {
    /// No `/` separating address and prefix length, or more than one.
    MissingSlash(String),
    /// The address part is not a dotted-decimal IPv4 address.
    InvalidAddress(String),
    /// The prefix length is not a number in `0..=32`.
    InvalidPrefixLength(String),
}

impl fmt::Display for ParseNetworkError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseNetworkError::MissingSlash(s) => write!(f, "invalid CIDR format: '{s}'"),
            ParseNetworkError::InvalidAddress(s) => write!(f, "invalid IPv4 address: '{s}'"),
            ParseNetworkError::InvalidPrefixLength(s) => {
                write!(f, "invalid prefix length: '{s}'")
            }
        }
    }
}

impl Error for ParseNetworkError {}

/// IPv4 prefix in canonical form: `base & !mask(prefix_len) == 0`.
///
/// Ordering is by base address first, then prefix length, so sorting a list
/// of networks sorts it ascending by address.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Network {
    base: u32,
    prefix_len: u8,
}

impl Network {
    /// Build a network from any address inside it; host bits are cleared.
    pub fn new(addr: Ipv4Addr, prefix_len: u8) -> Result<Network, Box<dyn Error>> {
        let mask = get_cidr_mask(prefix_len)?;
        Ok(Network {
            base: u32::from(addr) & mask,
            prefix_len,
        })
    }

    /// Parse `a.b.c.d/n`, trimming surrounding whitespace.
    ///
    /// The address may carry host bits: `10.0.0.5/24` parses to `10.0.0.0/24`.
    pub fn parse(text: &str) -> Result<Network, ParseNetworkError> {
        let text = text.trim();
        let (addr_part, len_part) = text
            .split_once('/')
            .ok_or_else(|| ParseNetworkError::MissingSlash(text.to_string()))?;
        if len_part.contains('/') {
            return Err(ParseNetworkError::MissingSlash(text.to_string()));
        }

        let addr = Ipv4Addr::from_str(addr_part)
            .map_err(|_| ParseNetworkError::InvalidAddress(addr_part.to_string()))?;

        // u8::from_str would accept a leading '+'
        if len_part.is_empty() || !len_part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseNetworkError::InvalidPrefixLength(len_part.to_string()));
        }
        let prefix_len = len_part
            .parse::<u8>()
            .ok()
            .filter(|len| *len <= MAX_LENGTH)
            .ok_or_else(|| ParseNetworkError::InvalidPrefixLength(len_part.to_string()))?;

        Ok(Network {
            base: u32::from(addr) & mask_bits(prefix_len),
            prefix_len,
        })
    }

    /// Base address as a 32-bit integer.
    pub fn base(&self) -> u32 {
        self.base
    }

    /// Prefix length, `0..=32`.
    pub fn prefix_len(&self) -> u8 {
        self.prefix_len
    }

    /// Subnet mask for this prefix.
    pub fn mask(&self) -> u32 {
        mask_bits(self.prefix_len)
    }

    /// Lowest (network) address.
    pub fn first(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.base)
    }

    /// Highest (broadcast) address.
    pub fn last(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.base | !self.mask())
    }

    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        u32::from(ip) & self.mask() == self.base
    }

    /// The enclosing network one bit shorter, or `None` for `/0`.
    pub fn parent(&self) -> Option<Network> {
        let prefix_len = self.prefix_len.checked_sub(1)?;
        Some(Network {
            base: self.base & mask_bits(prefix_len),
            prefix_len,
        })
    }
}

impl FromStr for Network {
    type Err = ParseNetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Network::parse(s)
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.first(), self.prefix_len)
    }
}

impl Serialize for Network {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Network {
    fn deserialize<D>(deserializer: D) -> Result<Network, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Network::parse(&s).map_err(de::Error::custom)
    }
}
