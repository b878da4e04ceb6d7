#![cfg(test)]
use maclens_common::vendors::VendorRepository;
use maclens_core::arp;
use maclens_core::{VendorRegistry, inspect, lookup};
use pnet::util::MacAddr;

const OUI_SAMPLE: &str = include_str!("../fixtures/oui.sample");

fn sample_registry() -> VendorRegistry {
    VendorRegistry::build(OUI_SAMPLE)
}

#[test]
fn sample_registry_loads_well_formed_blocks() {
    let registry = sample_registry();

    let ouis: Vec<&str> = registry.iter().map(|(oui, _)| oui).collect();
    assert_eq!(ouis, vec!["00005E", "005056", "080027", "BC2411"]);
    assert!(!registry.contains("FFFFFE"));
}

#[test]
fn duplicate_oui_keeps_first_block() {
    let registry = sample_registry();
    let proxmox = registry.get("BC2411").unwrap();

    assert_eq!(proxmox.name, "Proxmox Server Solutions GmbH");
    assert_eq!(proxmox.address.as_deref(), Some("Bahnhofstrasse 3"));
    assert_eq!(proxmox.region.as_deref(), Some("Wien    1060"));
    assert_eq!(proxmox.country.as_deref(), Some("AT"));
}

#[test]
fn lookup_by_any_notation() {
    let registry = sample_registry();

    for notation in ["bc:24:11:cf:9a:4b", "bc24.11cf.9a4b", "BC2411CF9A4B"] {
        let vendor = lookup(notation, &registry).unwrap().unwrap();
        assert_eq!(vendor.name, "Proxmox Server Solutions GmbH");
    }

    let vmware = registry.get_vendor(MacAddr::new(0x00, 0x50, 0x56, 0xaa, 0xbb, 0xcc));
    assert_eq!(vmware.map(|v| v.name.as_str()), Some("VMware, Inc."));
}

#[test]
fn lookup_miss_is_absent() {
    let registry = sample_registry();
    assert_eq!(lookup("02:42:ac:11:00:02", &registry), Ok(None));
    assert!(VendorRegistry::default().get_vendor(MacAddr::zero()).is_none());
}

#[test]
fn arp_table_to_reports() {
    let registry = sample_registry();
    let output = "\
? (10.0.0.1) at 0:50:56:c0:0:8 [ether] on vmnet8
pve.lan (10.0.0.2) at bc:24:11:cf:9a:4b [ether] on eth0
web.lan (10.0.0.3) at bc:24:11:cf:9a:4b [ether] on eth0
";

    let entries = arp::parse_arp_table(output);
    assert_eq!(entries.len(), 2);

    let vmware = inspect(&entries[0].mac, Some(&registry)).unwrap();
    assert_eq!(vmware.normalized, "00:50:56:C0:00:08");
    assert_eq!(vmware.vendor.map(|v| v.name), Some("VMware, Inc.".to_string()));

    let proxmox = inspect(&entries[1].mac, Some(&registry)).unwrap();
    assert_eq!(entries[1].devices.len(), 2);
    assert_eq!(proxmox.oui, "BC2411");
}
