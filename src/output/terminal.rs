//! Terminal output utilities.
//!
//! Renders a hosts page for the demo CLI.

use colored::Colorize;
use itertools::Itertools;

use crate::models::Subnet;
use crate::pagination::HostsPage;

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

/// Print one page of hosts for a subnet.
pub fn print_page(subnet: &Subnet, page: &HostsPage) {
    println!(
        "# {name} {cidr} ({shown} hosts on this page)",
        name = subnet.name.bold(),
        cidr = subnet.cidr,
        shown = page.results.len()
    );
    println!(r#" "address",                 "state""#);

    for entry in &page.results {
        let state = if entry.used {
            "used".red()
        } else {
            "free".green()
        };
        println!(
            "{address},{state}",
            address = format_field(entry.address, 24),
            state = format_field(state, 8),
        );
    }

    let links = [("previous", &page.previous), ("next", &page.next)]
        .iter()
        .filter_map(|(name, link)| link.as_ref().map(|l| format!("{name}: {l}")))
        .join("  ");
    if !links.is_empty() {
        println!("# {links}");
    }
}
