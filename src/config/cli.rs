use crate::app::Command;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "lead-finder")]
#[command(about = "Handyman Lead Finder - Find customers needing repairs")]
#[command(
    after_help = "Examples:\n  lead-finder --scrape\n  lead-finder --export\n  lead-finder --stats"
)]
pub struct CliArgs {
    #[arg(long, help = "Scrape leads from Craigslist and Google Maps, then export them")]
    pub scrape: bool,

    #[arg(long, help = "Export leads to CSV")]
    pub export: bool,

    #[arg(long, help = "Show lead statistics")]
    pub stats: bool,

    #[arg(long, help = "Clear all leads held by this run")]
    pub reset: bool,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

impl CliArgs {
    /// First set flag wins, checked in the order scrape, export, stats, reset.
    pub fn command(&self) -> Command {
        if self.scrape {
            Command::Scrape
        } else if self.export {
            Command::Export
        } else if self.stats {
            Command::Stats
        } else if self.reset {
            Command::Reset
        } else {
            Command::Usage
        }
    }
}
