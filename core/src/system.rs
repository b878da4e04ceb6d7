use std::process::Command;

use anyhow::{Context, bail};
use tracing::debug;

/// Runs `arp -a` and returns its stdout.
pub fn read_arp_table() -> anyhow::Result<String> {
    debug!("running arp -a");
    let output = Command::new("arp")
        .arg("-a")
        .output()
        .context("failed to run `arp -a`")?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!("`arp -a` exited with {}: {}", output.status, stderr.trim());
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
