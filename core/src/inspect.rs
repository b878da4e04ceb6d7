use std::net::Ipv4Addr;

use maclens_common::error::MacError;
use maclens_common::network::mac::{self, MacInput};
use maclens_common::vendors::VendorRecord;

use crate::vendors::{self, VendorRegistry};

/// Everything derivable about one MAC address.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MacReport {
    /// `XX:XX:XX:XX:XX:XX`
    pub normalized: String,
    pub oui: String,
    pub multicast: bool,
    pub laa: bool,
    pub docker: bool,
    /// Computed for every address; only meaningful when `docker` is set.
    pub docker_ip: Ipv4Addr,
    pub vendor: Option<VendorRecord>,
}

/// Parses `input` once and derives the full report from the integer.
pub fn inspect<'a>(
    input: impl Into<MacInput<'a>>,
    registry: Option<&VendorRegistry>,
) -> Result<MacReport, MacError> {
    let value: u64 = mac::parse(input)?;

    let vendor: Option<VendorRecord> = match registry {
        Some(registry) => vendors::lookup(value, registry)?.cloned(),
        None => None,
    };

    Ok(MacReport {
        normalized: mac::to_string(value)?,
        oui: mac::get_oui(value)?,
        multicast: mac::is_multicast(value)?,
        laa: mac::is_laa(value)?,
        docker: mac::is_docker(value)?,
        docker_ip: mac::docker_ip(value)?,
        vendor,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inspect_without_registry() {
        let report = inspect("02-42-ac-11-00-02", None).unwrap();

        assert_eq!(report.normalized, "02:42:AC:11:00:02");
        assert_eq!(report.oui, "0242AC");
        assert!(!report.multicast);
        assert!(report.laa);
        assert!(report.docker);
        assert_eq!(report.docker_ip, Ipv4Addr::new(172, 17, 0, 2));
        assert_eq!(report.vendor, None);
    }

    #[test]
    fn test_inspect_with_registry() {
        let raw = "h1\nh2\nh3\n\n\
                   BC-24-11   (hex)\t\tProxmox Server Solutions GmbH\n\
                   BC2411     (base 16)\t\tProxmox Server Solutions GmbH\n\
                   \n";
        let registry = VendorRegistry::build(raw);

        let report = inspect("bc2411.cf9a4b", Some(&registry)).unwrap();
        assert_eq!(report.vendor.map(|v| v.name), Some("Proxmox Server Solutions GmbH".to_string()));
        assert!(!report.docker);

        let unknown = inspect("00:11:22:33:44:55", Some(&registry)).unwrap();
        assert_eq!(unknown.vendor, None);
    }

    #[test]
    fn test_inspect_invalid() {
        assert!(matches!(inspect("", None), Err(MacError::InvalidMacAddress(_))));
    }
}
