//! Mask derivation from a requested address count.

use crate::models::MAX_LENGTH;

/// Delivers the prefix length and the total host count of the smallest block
/// able to hold `address_bits` addresses.
///
/// The prefix length is the number of leading zero bits of `address_bits`, so
/// the resulting block size is the smallest power of two strictly greater than
/// the request. Zero gives a /32 with a single address.
///
/// # Examples
/// ```
/// use subnet_calc::mask_from_address_bits;
/// assert_eq!(mask_from_address_bits(1023), (22, 1024));
/// assert_eq!(mask_from_address_bits(1024), (21, 2048));
/// ```
pub fn mask_from_address_bits(address_bits: u32) -> (u8, u64) {
    let prefix = address_bits.leading_zeros() as u8;
    let total_hosts = 1u64 << (MAX_LENGTH - prefix);
    log::trace!("mask_from_address_bits({address_bits}) -> /{prefix} ({total_hosts})");
    (prefix, total_hosts)
}
