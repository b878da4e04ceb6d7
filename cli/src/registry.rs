use std::fs;

use anyhow::Context;

use maclens_common::config::Config;
use maclens_common::success;
use maclens_core::VendorRegistry;

/// Reads and parses the configured `oui.txt`, if any.
pub fn load(cfg: &Config) -> anyhow::Result<Option<VendorRegistry>> {
    let Some(path) = &cfg.oui_file else {
        return Ok(None);
    };

    let raw: String = fs::read_to_string(path)
        .with_context(|| format!("failed to read OUI registry {}", path.display()))?;

    let registry: VendorRegistry = VendorRegistry::build(&raw);
    success!("Read {} OUIs from the database", registry.len());

    Ok(Some(registry))
}
