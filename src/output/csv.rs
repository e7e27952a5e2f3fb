//! CSV output formatting for subnet data.

use crate::models::Subnet;
use itertools::Itertools;

use super::terminal::format_field;

const CSV_HEADER: &str = r#" "cnt",        "subnet_cidr",         "netmask",       "host_min",       "host_max",      "broadcast", "hosts", "hosts_total""#;

/// Format a single subnet as a quoted, aligned CSV row.
pub fn csv_row(j: usize, subnet: &Subnet) -> String {
    [
        format_field(j, 6),
        format_field(subnet.network, 20),
        format_field(subnet.netmask, 17),
        format_field(subnet.host_min, 17),
        format_field(subnet.host_max, 17),
        format_field(subnet.broadcast, 17),
        format_field(subnet.usable_hosts, 8),
        format_field(subnet.total_hosts, 13),
    ]
    .iter()
    .join(",")
}

/// Render subnets as CSV, header first, rows numbered from 1.
pub fn subnets_csv(subnets: &[Subnet]) -> String {
    std::iter::once(CSV_HEADER.to_string())
        .chain(
            subnets
                .iter()
                .enumerate()
                .map(|(i, subnet)| csv_row(i + 1, subnet)),
        )
        .join("\n")
}

/// Print subnet data as CSV to stdout.
pub fn subnet_print(subnets: &[Subnet]) {
    log::info!("#Start subnet_print() subnet count = {}", subnets.len());
    println!("{}", subnets_csv(subnets));
}
