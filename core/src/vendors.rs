//! # OUI Vendor Registry
//!
//! Builds an in-memory OUI -> vendor map from the IEEE `oui.txt` bulk export
//! (<https://standards-oui.ieee.org/oui/oui.txt>). Reading the file is up to
//! the caller, the registry only ever sees the text.
//!
//! A block in the export looks like this (tab separated):
//!
//! ```text
//! BC-24-11   (hex)		Proxmox Server Solutions GmbH
//! BC2411     (base 16)		Proxmox Server Solutions GmbH
//! 				Bahnhofstrasse 3
//! 				Wien    1060
//! 				AT
//! ```

use std::collections::BTreeMap;

use pnet::util::MacAddr;
use tracing::debug;

use maclens_common::error::MacError;
use maclens_common::network::mac::{self, MacInput};
use maclens_common::vendors::{VendorRecord, VendorRepository};

/// Lines of preamble at the top of the export.
const HEADER_LINES: usize = 4;
const FIELD_SEPARATOR: &str = "\t\t";

/// Read-only OUI -> vendor mapping.
///
/// Keys are the 6 hex digits of the OUI without separators (`BC2411`).
#[derive(Clone, Debug, Default)]
pub struct VendorRegistry {
    vendors: BTreeMap<String, VendorRecord>,
}

impl VendorRegistry {
    /// Parses the full text of an `oui.txt` export.
    ///
    /// Never fails: blocks with fewer than two lines, or without a vendor
    /// name, are skipped. When the same OUI appears twice, the first block
    /// wins. A trailing block that is not followed by a blank line is not
    /// stored.
    pub fn build(raw: &str) -> Self {
        // Some rows in the export are indented with four tabs instead of two
        let normalized: String = raw.replace("\r\n", "\n").replace("\t\t\t\t", FIELD_SEPARATOR);

        let mut vendors: BTreeMap<String, VendorRecord> = BTreeMap::new();
        let mut block: Vec<Vec<&str>> = Vec::new();
        let mut skipped: usize = 0;

        for line in normalized.split('\n').skip(HEADER_LINES) {
            if !line.is_empty() {
                block.push(line.split(FIELD_SEPARATOR).collect());
                continue;
            }

            if block.len() < 2 {
                if !block.is_empty() {
                    skipped += 1;
                }
                block.clear();
                continue;
            }

            match parse_block(&block) {
                Some((oui, record)) => {
                    vendors.entry(oui).or_insert(record);
                }
                None => skipped += 1,
            }
            block.clear();
        }

        debug!(ouis = vendors.len(), skipped, "OUI registry built");
        Self { vendors }
    }

    pub fn len(&self) -> usize {
        self.vendors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vendors.is_empty()
    }

    /// Looks up a vendor by its OUI key (`BC2411`).
    pub fn get(&self, oui: &str) -> Option<&VendorRecord> {
        self.vendors.get(oui)
    }

    pub fn contains(&self, oui: &str) -> bool {
        self.vendors.contains_key(oui)
    }

    /// Entries ordered by OUI.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &VendorRecord)> {
        self.vendors.iter().map(|(oui, record)| (oui.as_str(), record))
    }
}

impl VendorRepository for VendorRegistry {
    fn get_vendor(&self, mac_addr: MacAddr) -> Option<&VendorRecord> {
        lookup(mac_addr, self).ok().flatten()
    }
}

/// Resolves the vendor of a MAC address.
///
/// Only a malformed address is an error; an unknown OUI is `Ok(None)`.
pub fn lookup<'a, 'r>(
    input: impl Into<MacInput<'a>>,
    registry: &'r VendorRegistry,
) -> Result<Option<&'r VendorRecord>, MacError> {
    let oui: String = mac::get_oui(input)?;
    Ok(registry.get(&oui))
}

/// Extracts the key and record from one blank-line delimited block.
///
/// Line 1 carries the dashed OUI and the vendor name, lines 3 to 5 the
/// address, region and country.
fn parse_block(block: &[Vec<&str>]) -> Option<(String, VendorRecord)> {
    let first: &Vec<&str> = block.first()?;
    let label: &str = first.first()?;
    // No name column: dropped, so a later named block for the OUI can still win
    let name: &str = first.get(1)?;

    let oui: String = label
        .split(' ')
        .next()
        .unwrap_or_default()
        .replace('-', "");

    let column = |idx: usize| -> Option<String> {
        block
            .get(idx)
            .and_then(|fields| fields.get(1))
            .map(|value| value.to_string())
    };

    let record = VendorRecord {
        name: name.to_string(),
        address: column(2),
        region: column(3),
        country: column(4),
    };

    Some((oui, record))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
