//! Usable host enumeration.

use super::describe::describe_cidr;
use crate::error::Result;
use std::net::Ipv4Addr;

/// Calculates the IP addresses between the minimal and the maximal host
/// address of `cidr`. The network and broadcast addresses are stripped.
///
/// /31 and /32 blocks have no usable hosts and return an empty list.
pub fn host_ips(cidr: &str) -> Result<Vec<Ipv4Addr>> {
    let subnet = describe_cidr(cidr)?;
    log::debug!("host_ips({cidr}) -> {} hosts", subnet.usable_hosts);
    Ok(subnet.hosts().collect())
}
