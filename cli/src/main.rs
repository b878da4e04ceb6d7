mod commands;
mod registry;
mod terminal;

use commands::{CommandLine, Commands, arp, inspect, oui};
use maclens_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging();

    let cfg = Config {
        oui_file: commands.oui_file,
        quiet: commands.quiet,
    };

    let registry = registry::load(&cfg)?;

    match commands.command {
        Commands::Inspect { macs } => {
            print::header("inspecting addresses", cfg.quiet);
            inspect::inspect(&macs, registry.as_ref(), &cfg)
        }
        Commands::Arp => {
            print::header("reading arp table", cfg.quiet);
            arp::arp(registry.as_ref(), &cfg)
        }
        Commands::Oui { query } => {
            print::header("registry lookup", cfg.quiet);
            oui::oui(&query, registry.as_ref(), &cfg)
        }
    }
}
