//! Subnet calculations.
//!
//! - [`mask`] - mask derivation from a requested address count
//! - [`describe`] - CIDR block descriptors
//! - [`partition`] - splitting a block into equal child subnets
//! - [`hosts`] - usable host enumeration

mod describe;
mod hosts;
mod mask;
mod partition;

// Re-export public functions
pub use describe::describe_cidr;
pub use hosts::host_ips;
pub use mask::mask_from_address_bits;
pub use partition::{
    calculate_subnets, subnets_by_host_count, subnets_by_prefix, subnets_by_subnet_count,
};
