use colored::*;

use maclens_common::config::Config;
use maclens_common::error;
use maclens_core::{MacReport, VendorRegistry};

use crate::mprint;
use crate::terminal::{colors, format, print};

pub fn inspect(macs: &[String], registry: Option<&VendorRegistry>, cfg: &Config) -> anyhow::Result<()> {
    let mut failed: usize = 0;

    for (idx, mac) in macs.iter().enumerate() {
        match maclens_core::inspect(mac, registry) {
            Ok(report) => print_report(idx, mac, &report, cfg),
            Err(e) => {
                error!("{e}");
                failed += 1;
            }
        }
        if cfg.quiet < 2 && idx + 1 != macs.len() {
            mprint!();
        }
    }

    print_summary(macs.len() - failed, failed, cfg);

    if failed > 0 {
        anyhow::bail!("{failed} of {} addresses could not be parsed", macs.len());
    }
    Ok(())
}

pub fn print_report(idx: usize, input: &str, report: &MacReport, cfg: &Config) {
    if cfg.quiet >= 2 {
        print::print(&format::report_to_line(report));
        return;
    }

    let title: String = if input == report.normalized {
        report.normalized.clone()
    } else {
        format!("{} ({})", report.normalized, input)
    };
    print::tree_head(idx, &title);
    print::as_tree_one_level(format::report_to_details(report));
}

fn print_summary(parsed: usize, failed: usize, cfg: &Config) {
    if cfg.quiet > 0 {
        return;
    }

    let parsed: ColoredString = format!("{parsed} parsed").bold().green();
    let failed: ColoredString = if failed > 0 {
        format!("{failed} invalid").bold().red()
    } else {
        format!("{failed} invalid").normal()
    };
    let output: String = format!("Inspection Complete: {parsed}, {failed}");

    print::fat_separator();
    print::centerln(&format!("{}", output.color(colors::TEXT_DEFAULT)));
}
