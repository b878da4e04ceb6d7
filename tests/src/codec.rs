#![cfg(test)]
use maclens_common::error::MacError;
use maclens_common::network::mac;
use pnet::util::MacAddr;

const PROXMOX: u64 = 0xBC2411CF9A4B;

/// Every notation found in the wild for the same address must agree.
#[test]
fn notations_agree() {
    let notations = [
        "bc:24:11:cf:9a:4b",
        "bc2411cf9a4b",
        "bc-24-11-cf-9a-4b",
        "bc24.11cf.9a4b",
        "bc2411.cf9a4b",
        "bc2:411:cf9:a4b",
        "bc\u{2013}24\u{2013}11\u{2013}cf\u{2013}9a\u{2013}4b",
    ];

    for notation in notations {
        assert_eq!(mac::parse(notation), Ok(PROXMOX), "notation {notation}");
    }
}

#[test]
fn canonical_form_is_stable() {
    for text in ["bc2411cf9a4b", "0:0:10:2:0:0", "01-00-5E-00-00-16", "ffff.ffff.ffff"] {
        let canonical = mac::to_string(text).unwrap();
        assert_eq!(canonical.len(), 17);
        assert_eq!(mac::to_string(&canonical).unwrap(), canonical);

        let compact = canonical.replace(':', "");
        assert_eq!(mac::parse(compact.as_str()), mac::parse(text));
    }
}

#[test]
fn classification_bits() {
    let proxmox = mac::parse("bc:24:11:cf:9a:4b").unwrap();

    assert_eq!(mac::get_oui(proxmox).unwrap(), "BC2411");
    assert!(!mac::is_multicast(proxmox).unwrap());
    assert!(!mac::is_laa(proxmox).unwrap());
    assert!(!mac::is_docker(proxmox).unwrap());

    assert!(mac::is_multicast("01:00:5e:00:00:16").unwrap());
    assert!(mac::is_laa("02:00:00:00:00:00").unwrap());
    assert!(mac::is_docker("02:42:ac:11:00:02").unwrap());
    assert_eq!(mac::docker_ip("02:42:ac:11:00:02").unwrap().to_string(), "172.17.0.2");
}

#[test]
fn link_layer_type_round_trip() {
    let mac_addr: MacAddr = mac::to_mac_addr("02:42:ac:11:00:02").unwrap();
    assert_eq!(mac_addr, MacAddr::new(0x02, 0x42, 0xac, 0x11, 0x00, 0x02));
    assert_eq!(mac::to_string(mac_addr).unwrap(), "02:42:AC:11:00:02");
}

#[test]
fn invalid_input_is_one_error_kind() {
    for text in ["", "bc:24:11:cf:9a:4b:ff:ee", "hello world", "::"] {
        match mac::parse(text) {
            Err(MacError::InvalidMacAddress(input)) => assert_eq!(input, text),
            other => panic!("expected InvalidMacAddress for {text:?}, got {other:?}"),
        }
    }
}
