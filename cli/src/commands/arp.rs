use maclens_common::config::Config;
use maclens_common::{info, warn};
use maclens_core::arp::{self, ArpEntry};
use maclens_core::{VendorRegistry, system};

use crate::mprint;
use crate::terminal::{format, print};

pub fn arp(registry: Option<&VendorRegistry>, cfg: &Config) -> anyhow::Result<()> {
    info!("Running ARP scan...");
    let output: String = system::read_arp_table()?;
    let entries: Vec<ArpEntry> = arp::parse_arp_table(&output);

    if entries.is_empty() {
        warn!("No MAC addresses found in the ARP table");
        return Ok(());
    }

    print::header("Found MACs", cfg.quiet);
    for (idx, entry) in entries.iter().enumerate() {
        let report = match maclens_core::inspect(&entry.mac, registry) {
            Ok(report) => report,
            Err(e) => {
                warn!("Skipping ARP entry: {e}");
                continue;
            }
        };

        if cfg.quiet >= 2 {
            print::print(&format::report_to_line(&report));
            continue;
        }

        let mut details = format::report_to_details(&report);
        details.extend(entry.devices.iter().map(format::device_to_detail));
        print::tree_head(idx, &report.normalized);
        print::as_tree_one_level(details);

        if idx + 1 != entries.len() {
            mprint!();
        }
    }

    print::end_of_program(cfg.quiet);
    Ok(())
}
