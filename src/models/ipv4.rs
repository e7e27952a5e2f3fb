//! IPv4 address and CIDR notation utilities.
//!
//! Provides [`Ipv4`] struct for representing IPv4 addresses with a prefix length,
//! along with the integer codec and mask helpers used by the subnet calculations.

use crate::error::{Result, SubnetError};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::{IpAddr, Ipv4Addr};
use std::str::FromStr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Pack an IPv4 address into a big-endian u32.
///
/// IPv4-mapped IPv6 addresses (`::ffff:a.b.c.d`) are accepted, any other IPv6
/// address is rejected.
///
/// # Examples
/// ```
/// use std::net::{IpAddr, Ipv4Addr};
/// use subnet_calc::models::ip_to_int;
/// let ip = IpAddr::V4(Ipv4Addr::new(10, 0, 1, 2));
/// assert_eq!(ip_to_int(ip).unwrap(), 0x0A000102);
/// ```
pub fn ip_to_int(ip: IpAddr) -> Result<u32> {
    match ip {
        IpAddr::V4(v4) => Ok(u32::from(v4)),
        IpAddr::V6(v6) => v6
            .to_ipv4_mapped()
            .map(u32::from)
            .ok_or_else(|| SubnetError::InvalidAddress(v6.to_string())),
    }
}

/// Parse a textual address and pack it into a u32.
pub fn parse_ip_to_int(addr: &str) -> Result<u32> {
    let ip: IpAddr = addr
        .trim()
        .parse()
        .map_err(|_| SubnetError::InvalidAddress(addr.to_string()))?;
    ip_to_int(ip)
}

/// Unpack a u32 into an IPv4 address.
pub fn int_to_ip(bits: u32) -> Ipv4Addr {
    Ipv4Addr::from(bits)
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use subnet_calc::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32> {
    if len > MAX_LENGTH {
        Err(SubnetError::PrefixLengthOutOfRange(len))
    } else {
        Ok(prefix_bits(len))
    }
}

fn prefix_bits(len: u8) -> u32 {
    u32::MAX
        .checked_shl(u32::from(MAX_LENGTH.saturating_sub(len)))
        .unwrap_or(0)
}

/// The host portion of a mask: all bits right of the prefix set.
pub fn host_mask(len: u8) -> Result<u32> {
    Ok(!get_cidr_mask(len)?)
}

/// Number of addresses in a block with the given prefix length.
pub fn block_size(len: u8) -> Result<u64> {
    if len > MAX_LENGTH {
        Err(SubnetError::PrefixLengthOutOfRange(len))
    } else {
        Ok(1u64 << (MAX_LENGTH - len))
    }
}

/// IPv4 address with CIDR notation support.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    /// The IPv4 address.
    pub addr: Ipv4Addr,
    /// The prefix length (0-32).
    pub mask: u8,
}

impl Serialize for Ipv4 {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Ipv4 {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Ipv4, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ipv4::new(&s).map_err(de::Error::custom)
    }
}

impl Ipv4 {
    /// Create a new [`Ipv4`] from a CIDR string (e.g., "10.0.0.0/24").
    ///
    /// The address is kept as given, use [`Ipv4::network`] for the aligned block.
    pub fn new(addr_cidr: &str) -> Result<Ipv4> {
        let trimmed = addr_cidr.trim();
        let parts: Vec<&str> = trimmed.split('/').collect();
        if parts.len() != 2 {
            return Err(SubnetError::malformed(
                addr_cidr,
                "expected <address>/<prefix length>",
            ));
        }
        let addr: Ipv4Addr = parts[0]
            .parse()
            .map_err(|_| SubnetError::malformed(addr_cidr, format!("invalid address {}", parts[0])))?;
        let bits = parts[1];
        let digits_only = !bits.is_empty() && bits.bytes().all(|b| b.is_ascii_digit());
        if !digits_only || (bits.len() > 1 && bits.starts_with('0')) {
            return Err(SubnetError::malformed(
                addr_cidr,
                format!("invalid prefix length {bits}"),
            ));
        }
        let mask: u8 = bits
            .parse()
            .map_err(|_| SubnetError::malformed(addr_cidr, format!("invalid prefix length {bits}")))?;
        if mask > MAX_LENGTH {
            return Err(SubnetError::malformed(
                addr_cidr,
                format!("prefix length {mask} is too long"),
            ));
        }
        Ok(Ipv4 { addr, mask })
    }

    /// The same block with host bits cleared.
    pub fn network(&self) -> Ipv4 {
        Ipv4 {
            addr: Ipv4Addr::from(u32::from(self.addr) & prefix_bits(self.mask)),
            mask: self.mask,
        }
    }

    /// Dotted representation of the prefix mask, e.g. 255.255.255.0 for /24.
    pub fn netmask(&self) -> Ipv4Addr {
        Ipv4Addr::from(prefix_bits(self.mask))
    }

}

impl FromStr for Ipv4 {
    type Err = SubnetError;

    fn from_str(s: &str) -> Result<Self> {
        Ipv4::new(s)
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}
