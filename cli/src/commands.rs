pub mod arp;
pub mod inspect;
pub mod oui;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "maclens")]
#[command(about = "Normalize MAC addresses and look up their vendors.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// IEEE oui.txt export used for vendor lookups
    #[arg(long, global = true, env = "MACLENS_OUI_FILE")]
    pub oui_file: Option<PathBuf>,

    /// Reduce output (-q drops headers, -qq prints one line per address)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show everything known about one or more MAC addresses
    #[command(alias = "i")]
    Inspect {
        #[arg(required = true)]
        macs: Vec<String>,
    },
    /// Read the local ARP table and inspect every MAC in it
    #[command(alias = "a")]
    Arp,
    /// Print the registry entry for an OUI or for the OUI of a MAC address
    #[command(alias = "o")]
    Oui { query: String },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
