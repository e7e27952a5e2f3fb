//! Subnet descriptor model.

use super::Ipv4;
use serde::Serialize;
use std::net::Ipv4Addr;

/// A fully described CIDR block.
///
/// Built by [`crate::describe_cidr`] and by the partition functions, never
/// modified afterwards. Serialize only.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Subnet {
    /// CIDR text the descriptor was built from, as given by the caller.
    pub cidr: String,
    /// Network address and prefix length.
    pub network: Ipv4,
    /// Dotted netmask for the prefix length.
    pub netmask: Ipv4Addr,
    /// Last address of the block.
    pub broadcast: Ipv4Addr,
    /// First usable host.
    pub host_min: Ipv4Addr,
    /// Last usable host.
    pub host_max: Ipv4Addr,
    /// Usable hosts, network and broadcast excluded. Zero for /31 and /32.
    pub usable_hosts: u64,
    /// Size of the address space, 2^(32 - prefix).
    pub total_hosts: u64,
}

impl Subnet {
    /// Prefix length of the block.
    pub fn prefix(&self) -> u8 {
        self.network.mask
    }

    /// Iterate the usable host addresses from `host_min` to `host_max`.
    ///
    /// Yields nothing for /31 and /32 blocks where `host_min > host_max`.
    pub fn hosts(&self) -> impl DoubleEndedIterator<Item = Ipv4Addr> + Clone {
        let start = u32::from(self.host_min);
        let end = u32::from(self.host_max);
        (start..=end).map(Ipv4Addr::from)
    }

    /// Whether `addr` falls inside the block, network and broadcast included.
    pub fn contains(&self, addr: Ipv4Addr) -> bool {
        self.network.addr <= addr && addr <= self.broadcast
    }
}

impl std::fmt::Display for Subnet {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "{}/{}", self.network.addr, self.netmask)?;
        writeln!(f, "HostMin:     {}", self.host_min)?;
        writeln!(f, "HostMax:     {}", self.host_max)?;
        writeln!(f, "Broadcast:   {}", self.broadcast)?;
        writeln!(f, "Hosts:       {}", self.usable_hosts)?;
        writeln!(f, "Hosts total: {}", self.total_hosts)
    }
}
