//! Terminal output utilities.
//!
//! Provides formatting helpers for terminal output.

use crate::models::Subnet;
use colored::Colorize;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// Render a subnet as a labelled block, labels coloured for the terminal.
pub fn render_subnet(subnet: &Subnet) -> String {
    let rows = [
        ("HostMin:", subnet.host_min.to_string()),
        ("HostMax:", subnet.host_max.to_string()),
        ("Broadcast:", subnet.broadcast.to_string()),
        ("Hosts:", subnet.usable_hosts.to_string()),
        ("Hosts total:", subnet.total_hosts.to_string()),
    ];
    let mut out = format!(
        "{}/{} ({})\n",
        subnet.network.addr.to_string().bold(),
        subnet.netmask,
        subnet.network
    );
    for (label, value) in rows {
        out.push_str(&format!("{:<13}{value}\n", label.cyan()));
    }
    out
}

/// Print subnets to stdout, separated by blank lines.
pub fn print_subnets(subnets: &[Subnet]) {
    for (i, subnet) in subnets.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print!("{}", render_subnet(subnet));
    }
}
