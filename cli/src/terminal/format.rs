use colored::*;

use maclens_core::MacReport;
use maclens_core::arp::ArpDevice;

use crate::terminal::colors;

pub type Detail = (String, ColoredString);

fn flag(set: bool) -> ColoredString {
    if set {
        "yes".color(colors::FLAG_SET)
    } else {
        "no".color(colors::FLAG_UNSET)
    }
}

pub fn report_to_details(report: &MacReport) -> Vec<Detail> {
    let docker: ColoredString = if report.docker {
        format!("likely ({})", report.docker_ip).color(colors::IPV4_ADDR)
    } else {
        format!("unlikely ({})", report.docker_ip).color(colors::FLAG_UNSET)
    };

    let mut details: Vec<Detail> = vec![
        ("OUI".to_string(), report.oui.color(colors::MAC_ADDR)),
        ("Multicast".to_string(), flag(report.multicast)),
        ("LAA".to_string(), flag(report.laa)),
        ("Docker".to_string(), docker),
    ];

    if let Some(vendor) = &report.vendor {
        details.push(("Vendor".to_string(), vendor.name.color(colors::VENDOR)));
        let lines = [
            ("Address", &vendor.address),
            ("Region", &vendor.region),
            ("Country", &vendor.country),
        ];
        for (key, line) in lines {
            if let Some(line) = line {
                details.push((key.to_string(), line.trim().color(colors::TEXT_DEFAULT)));
            }
        }
    }

    details
}

pub fn device_to_detail(device: &ArpDevice) -> Detail {
    let value: String = format!("{} ({})", device.name, device.ip.color(colors::IPV4_ADDR));
    ("Device".to_string(), value.color(colors::TEXT_DEFAULT))
}

/// Single line used with `-qq`.
pub fn report_to_line(report: &MacReport) -> String {
    let vendor: &str = report
        .vendor
        .as_ref()
        .map(|vendor| vendor.name.as_str())
        .unwrap_or("unknown vendor");
    format!(
        "{} {}",
        report.normalized.color(colors::MAC_ADDR),
        vendor.color(colors::TEXT_DEFAULT)
    )
}
