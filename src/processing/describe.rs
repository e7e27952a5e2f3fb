//! Build a [`Subnet`] descriptor from CIDR text.

use crate::error::Result;
use crate::models::{host_mask, int_to_ip, ip_to_int, Ipv4, Subnet};
use std::net::IpAddr;

/// Describe a CIDR block: network, broadcast, usable host range and counts.
///
/// The address is aligned to its prefix first, so `10.0.0.5/24` describes
/// `10.0.0.0/24`. The `cidr` field keeps the text as given.
pub fn describe_cidr(cidr: &str) -> Result<Subnet> {
    let block = cidr.parse::<Ipv4>()?.network();
    describe_block(cidr, block)
}

/// Describe an already parsed and aligned block.
pub(crate) fn describe_block(cidr: &str, block: Ipv4) -> Result<Subnet> {
    let network_bits = ip_to_int(IpAddr::V4(block.addr))?;
    let broadcast_bits = network_bits | host_mask(block.mask)?;

    let host_min_bits = network_bits | 1;
    let host_max_bits = broadcast_bits & !1;

    let total_hosts = u64::from(broadcast_bits - network_bits) + 1;
    let usable_hosts = total_hosts.saturating_sub(2);

    log::trace!("describe_cidr({cidr}) -> {block} total={total_hosts}");

    Ok(Subnet {
        cidr: cidr.to_string(),
        network: block,
        netmask: block.netmask(),
        broadcast: int_to_ip(broadcast_bits),
        host_min: int_to_ip(host_min_bits),
        host_max: int_to_ip(host_max_bits),
        usable_hosts,
        total_hosts,
    })
}
