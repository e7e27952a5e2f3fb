//! Partition a CIDR block into equally sized child subnets.

use super::describe::{describe_block, describe_cidr};
use super::mask::mask_from_address_bits;
use crate::error::{Result, SubnetError};
use crate::models::{block_size, Ipv4, Subnet, MAX_LENGTH};
use std::net::Ipv4Addr;

/// Split `cidr` into child subnets with the given prefix length.
///
/// Without `requested_count` the whole block is tiled.
pub fn subnets_by_prefix(
    cidr: &str,
    prefix: u8,
    requested_count: Option<usize>,
) -> Result<Vec<Subnet>> {
    let source = describe_cidr(cidr)?;
    calculate_subnets(&source, prefix, requested_count)
}

/// Split `cidr` into child subnets large enough for `host_count` addresses.
pub fn subnets_by_host_count(
    cidr: &str,
    host_count: u32,
    requested_count: Option<usize>,
) -> Result<Vec<Subnet>> {
    let source = describe_cidr(cidr)?;
    let (prefix, _) = mask_from_address_bits(host_count);
    calculate_subnets(&source, prefix, requested_count)
}

/// Split `cidr` by dividing its address space by `subnet_count`.
///
/// The child size is derived from `floor(total_hosts / subnet_count)` through
/// [`mask_from_address_bits`], so the block is rounded up past that size.
pub fn subnets_by_subnet_count(
    cidr: &str,
    subnet_count: usize,
    requested_count: Option<usize>,
) -> Result<Vec<Subnet>> {
    if subnet_count == 0 {
        return Err(SubnetError::ZeroSubnetCount);
    }
    let source = describe_cidr(cidr)?;
    let target_size = source.total_hosts / subnet_count as u64;
    let target_size = u32::try_from(target_size).unwrap_or(u32::MAX);
    let (prefix, _) = mask_from_address_bits(target_size);
    calculate_subnets(&source, prefix, requested_count)
}

/// Divide `source` into children of `prefix` length, starting at the source
/// network address.
///
/// Fails with [`SubnetError::SubnetCountExceeded`] when `requested_count` is
/// more than the source block can hold.
pub fn calculate_subnets(
    source: &Subnet,
    prefix: u8,
    requested_count: Option<usize>,
) -> Result<Vec<Subnet>> {
    let child_total = block_size(prefix)?;
    let max_count = usize::try_from(source.total_hosts / child_total).unwrap_or(usize::MAX);
    let count = match requested_count {
        Some(requested) if requested > max_count => {
            return Err(SubnetError::SubnetCountExceeded {
                requested,
                max: max_count,
            });
        }
        Some(requested) => requested,
        None => max_count,
    };
    if max_count == 0 {
        log::warn!(
            "/{prefix} children do not fit in {}, no subnets generated",
            source.network
        );
    }
    log::debug!(
        "calculate_subnets({}) -> {count} x /{prefix} (max {max_count})",
        source.network
    );

    let address_bits = u32::from(MAX_LENGTH - prefix);
    let source_bits = u64::from(u32::from(source.network.addr));

    let mut subnets = Vec::with_capacity(count);
    for i in 0..count {
        let child_bits = source_bits | ((i as u64) << address_bits);
        let block = Ipv4 {
            addr: Ipv4Addr::from(child_bits as u32),
            mask: prefix,
        };
        subnets.push(describe_block(&block.to_string(), block)?);
    }
    Ok(subnets)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_contiguous(source: &str, subnets: &[Subnet]) {
        let source = describe_cidr(source).unwrap();
        let mut next = u64::from(u32::from(source.network.addr));
        for s in subnets {
            assert_eq!(u64::from(u32::from(s.network.addr)), next, "gap before {}", s.cidr);
            assert_eq!(s.network, s.network.network(), "{} is not aligned", s.cidr);
            next += s.total_hosts;
        }
        assert!(next <= u64::from(u32::from(source.broadcast)) + 1);
    }

    #[test]
    fn test_subnets_by_prefix() {
        for (prefix, expected_count, expected_hosts) in [(22, 64, 1024), (23, 128, 512), (24, 256, 256)] {
            let subnets = subnets_by_prefix("100.64.0.0/16", prefix, None).unwrap();
            assert_eq!(subnets.len(), expected_count, "/{prefix}");
            assert!(subnets.iter().all(|s| s.total_hosts == expected_hosts));
            assert_contiguous("100.64.0.0/16", &subnets);
        }
    }

    #[test]
    fn test_subnets_by_prefix_children() {
        let subnets = subnets_by_prefix("10.0.0.0/24", 26, None).unwrap();
        let cidrs: Vec<&str> = subnets.iter().map(|s| s.cidr.as_str()).collect();
        assert_eq!(
            cidrs,
            vec!["10.0.0.0/26", "10.0.0.64/26", "10.0.0.128/26", "10.0.0.192/26"]
        );
        assert_eq!(subnets[3].broadcast, Ipv4Addr::new(10, 0, 0, 255));
        assert_eq!(subnets[1].host_min, Ipv4Addr::new(10, 0, 0, 65));
    }

    #[test]
    fn test_subnets_by_prefix_with_count() {
        for (prefix, expected_hosts) in [(22, 1024), (23, 512), (24, 256)] {
            let subnets = subnets_by_prefix("100.64.0.0/16", prefix, Some(50)).unwrap();
            assert_eq!(subnets.len(), 50);
            assert!(subnets.iter().all(|s| s.total_hosts == expected_hosts));
            assert_contiguous("100.64.0.0/16", &subnets);
        }
    }

    #[test]
    fn test_subnets_by_prefix_count_exceeded() {
        assert_eq!(
            subnets_by_prefix("100.64.0.0/16", 22, Some(65)).unwrap_err(),
            SubnetError::SubnetCountExceeded {
                requested: 65,
                max: 64
            }
        );
        assert_eq!(subnets_by_prefix("100.64.0.0/16", 22, Some(64)).unwrap().len(), 64);
        assert!(subnets_by_prefix("100.64.0.0/16", 22, Some(0)).unwrap().is_empty());
    }

    #[test]
    fn test_subnets_by_prefix_out_of_range() {
        assert_eq!(
            subnets_by_prefix("100.64.0.0/16", 33, None).unwrap_err(),
            SubnetError::PrefixLengthOutOfRange(33)
        );
        assert!(matches!(
            subnets_by_prefix("100.64.0/16", 24, None),
            Err(SubnetError::MalformedCidr { .. })
        ));
    }

    #[test]
    fn test_subnets_by_prefix_larger_child() {
        assert!(subnets_by_prefix("10.0.0.0/24", 16, None).unwrap().is_empty());
        assert_eq!(
            subnets_by_prefix("10.0.0.0/24", 16, Some(1)).unwrap_err(),
            SubnetError::SubnetCountExceeded {
                requested: 1,
                max: 0
            }
        );
    }

    #[test]
    fn test_subnets_by_prefix_edges() {
        let same = subnets_by_prefix("10.1.2.0/24", 24, None).unwrap();
        assert_eq!(same.len(), 1);
        assert_eq!(same[0].cidr, "10.1.2.0/24");

        let singles = subnets_by_prefix("10.1.2.0/30", 32, None).unwrap();
        assert_eq!(singles.len(), 4);
        assert_eq!(singles[3].network.addr, Ipv4Addr::new(10, 1, 2, 3));

        let whole = subnets_by_prefix("0.0.0.0/0", 0, None).unwrap();
        assert_eq!(whole.len(), 1);
        assert_eq!(whole[0].total_hosts, 1u64 << 32);

        let halves = subnets_by_prefix("0.0.0.0/0", 1, None).unwrap();
        assert_eq!(halves[1].cidr, "128.0.0.0/1");
    }

    #[test]
    fn test_subnets_unaligned_source() {
        let subnets = subnets_by_prefix("10.0.0.77/24", 25, None).unwrap();
        assert_eq!(subnets[0].cidr, "10.0.0.0/25");
        assert_eq!(subnets[1].cidr, "10.0.0.128/25");
    }

    #[test]
    fn test_calculate_subnets_stays_in_source() {
        let source = describe_cidr("10.0.0.0/24").unwrap();
        let subnets = calculate_subnets(&source, 26, None).unwrap();
        assert_eq!(subnets.len(), 4);
        assert!(subnets.iter().all(|s| s.total_hosts == 64));
        assert_eq!(subnets[3].broadcast, source.broadcast);
        assert!(subnets
            .iter()
            .all(|s| source.contains(s.network.addr) && source.contains(s.broadcast)));
        assert_contiguous("10.0.0.0/24", &subnets);

        assert_eq!(
            calculate_subnets(&source, 33, None).unwrap_err(),
            SubnetError::PrefixLengthOutOfRange(33)
        );
    }

    #[test]
    fn test_subnets_by_host_count() {
        let subnets = subnets_by_host_count("100.64.0.0/16", 1023, None).unwrap();
        assert_eq!(subnets.len(), 64);
        assert!(subnets.iter().all(|s| s.total_hosts == 1024));
        assert_contiguous("100.64.0.0/16", &subnets);

        // An exact power of two needs the next block up.
        let subnets = subnets_by_host_count("100.64.0.0/16", 1024, None).unwrap();
        assert_eq!(subnets.len(), 32);
        assert_eq!(subnets[0].cidr, "100.64.0.0/21");

        assert_eq!(
            subnets_by_host_count("10.0.0.0/24", 100, Some(3)).unwrap_err(),
            SubnetError::SubnetCountExceeded {
                requested: 3,
                max: 2
            }
        );
    }

    #[test]
    fn test_subnets_by_subnet_count() {
        // 65536 / 3 = 21845 addresses, rounded up to a /17.
        let subnets = subnets_by_subnet_count("100.64.0.0/16", 3, None).unwrap();
        assert_eq!(subnets.len(), 2);
        assert_eq!(subnets[1].cidr, "100.64.128.0/17");

        // 65536 / 100 = 655 addresses, a /22 of 1024.
        let subnets = subnets_by_subnet_count("100.64.0.0/16", 100, Some(10)).unwrap();
        assert_eq!(subnets.len(), 10);
        assert!(subnets.iter().all(|s| s.total_hosts == 1024));
        assert_contiguous("100.64.0.0/16", &subnets);
    }

    #[test]
    fn test_subnets_by_subnet_count_zero() {
        assert_eq!(
            subnets_by_subnet_count("100.64.0.0/16", 0, None).unwrap_err(),
            SubnetError::ZeroSubnetCount
        );
    }
}
