use anyhow::Context;
use colored::*;

use maclens_common::config::Config;
use maclens_common::network::mac;
use maclens_common::warn;
use maclens_core::VendorRegistry;

use crate::terminal::{colors, print};

/// Accepts either a bare OUI (`BC2411`) or any MAC the codec understands.
pub fn oui(query: &str, registry: Option<&VendorRegistry>, cfg: &Config) -> anyhow::Result<()> {
    let registry: &VendorRegistry = registry
        .context("no OUI registry loaded, pass --oui-file or set MACLENS_OUI_FILE")?;

    let key: String = if query.len() == 6 && query.bytes().all(|b| b.is_ascii_hexdigit()) {
        query.to_ascii_uppercase()
    } else {
        mac::get_oui(query)?
    };

    let Some(vendor) = registry.get(&key) else {
        warn!("{key} is not in the registry");
        return Ok(());
    };

    if cfg.quiet >= 2 {
        print::print(&format!("{key} {}", vendor.name));
        return Ok(());
    }

    print::tree_head(0, &key);
    let mut details = vec![("Vendor".to_string(), vendor.name.color(colors::VENDOR))];
    let lines = [
        ("Address", &vendor.address),
        ("Region", &vendor.region),
        ("Country", &vendor.country),
    ];
    for (label, line) in lines {
        if let Some(line) = line {
            details.push((label.to_string(), line.trim().color(colors::TEXT_DEFAULT)));
        }
    }
    print::as_tree_one_level(details);
    Ok(())
}
