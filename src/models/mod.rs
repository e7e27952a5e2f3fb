//! Domain models for the subnet calculator.
//!
//! - [`Ipv4`] - IPv4 address with CIDR notation support, plus the u32 codec
//! - [`Subnet`] - descriptor of a CIDR block

mod ipv4;
mod subnet;

// Re-export public types
pub use ipv4::{
    block_size, get_cidr_mask, host_mask, int_to_ip, ip_to_int, parse_ip_to_int, Ipv4, MAX_LENGTH,
};
pub use subnet::Subnet;
