//! Groups the output of `arp -a` by hardware address.
//!
//! Expected line shape (BSD, macOS and net-tools on Linux):
//!
//! ```text
//! router.lan (192.168.1.1) at bc:24:11:cf:9a:4b [ether] on eth0
//! ```

/// One host that answered with a given MAC.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArpDevice {
    pub name: String,
    pub ip: String,
}

/// All devices seen behind one MAC address.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArpEntry {
    /// MAC exactly as printed by `arp`, not normalized.
    pub mac: String,
    pub devices: Vec<ArpDevice>,
}

/// Parses an ARP table dump, grouping devices by MAC in first-seen order.
///
/// Lines with fewer than four fields, or whose MAC column has no `:`
/// (`(incomplete)` entries), are ignored.
pub fn parse_arp_table(output: &str) -> Vec<ArpEntry> {
    let mut entries: Vec<ArpEntry> = Vec::new();

    for line in output.lines() {
        let Some((mac, device)) = parse_arp_line(line) else {
            continue;
        };

        match entries.iter_mut().find(|entry| entry.mac == mac) {
            Some(entry) => entry.devices.push(device),
            None => entries.push(ArpEntry {
                mac: mac.to_string(),
                devices: vec![device],
            }),
        }
    }

    entries
}

fn parse_arp_line(line: &str) -> Option<(&str, ArpDevice)> {
    let parts: Vec<&str> = line.trim().split(' ').collect();
    if parts.len() < 4 {
        return None;
    }

    let mac: &str = parts[3];
    if !mac.contains(':') {
        return None;
    }

    let ip: &str = parts[1].trim_start_matches('(').trim_end_matches(')');
    let device = ArpDevice {
        name: parts[0].to_string(),
        ip: ip.to_string(),
    };
    Some((mac, device))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARP_OUTPUT: &str = "\
router.lan (192.168.1.1) at bc:24:11:cf:9a:4b [ether] on eth0
? (192.168.1.50) at 02:42:ac:11:00:02 [ether] on docker0
nas.lan (192.168.1.20) at bc:24:11:cf:9a:4b [ether] on eth0
? (192.168.1.77) at <incomplete> on eth0
short line
";

    #[test]
    fn test_parse_arp_table_groups_by_mac() {
        let entries = parse_arp_table(ARP_OUTPUT);
        assert_eq!(entries.len(), 2);

        assert_eq!(entries[0].mac, "bc:24:11:cf:9a:4b");
        assert_eq!(
            entries[0].devices,
            vec![
                ArpDevice { name: "router.lan".into(), ip: "192.168.1.1".into() },
                ArpDevice { name: "nas.lan".into(), ip: "192.168.1.20".into() },
            ]
        );

        assert_eq!(entries[1].mac, "02:42:ac:11:00:02");
        assert_eq!(entries[1].devices[0].name, "?");
        assert_eq!(entries[1].devices[0].ip, "192.168.1.50");
    }

    #[test]
    fn test_parse_arp_table_empty() {
        assert!(parse_arp_table("").is_empty());
        assert!(parse_arp_table("\n\n").is_empty());
    }
}
