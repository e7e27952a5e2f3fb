//! IPv4 subnet calculator.
//!
//! Describes CIDR blocks, enumerates their usable hosts and splits them into
//! equally sized child subnets sized by prefix length, host count or subnet
//! count.
//!
//! ```
//! let subnets = subnet_calc::subnets_by_prefix("100.64.0.0/16", 22, Some(2)).unwrap();
//! assert_eq!(subnets[1].cidr, "100.64.4.0/22");
//! assert_eq!(subnets[1].total_hosts, 1024);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

pub use error::{Result, SubnetError};
pub use models::{Ipv4, Subnet};
pub use processing::{
    calculate_subnets, describe_cidr, host_ips, mask_from_address_bits, subnets_by_host_count,
    subnets_by_prefix, subnets_by_subnet_count,
};
