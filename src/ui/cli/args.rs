// Fri Oct 16 2026 - Alex

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pci-ids")]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Resolve PCI vendor and device ids to names", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    #[arg(long, global = true)]
    pub json: bool,

    /// Use this pci.ids file instead of the built-in database
    #[arg(long, global = true)]
    pub ids_file: Option<PathBuf>,

    /// Reject malformed lines in --ids-file
    #[arg(long, global = true)]
    pub strict: bool,

    #[arg(long, global = true)]
    pub no_color: bool,

    /// JSON config file; flags given here override it
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Look up a vendor, or a vendor/device pair
    Lookup(LookupArgs),
    /// List a vendor's devices
    Vendor(VendorArgs),
    /// Search vendor and device names
    Search(SearchArgs),
    /// Show database statistics
    Stats,
}

#[derive(Parser, Debug)]
pub struct LookupArgs {
    pub vendor: String,

    pub device: Option<String>,
}

#[derive(Parser, Debug)]
pub struct VendorArgs {
    pub vendor: String,
}

#[derive(Parser, Debug)]
pub struct SearchArgs {
    pub pattern: String,

    #[arg(long)]
    pub limit: Option<usize>,
}

impl SearchArgs {
    pub fn validate(&self) -> Result<(), String> {
        if self.pattern.trim().is_empty() {
            return Err("Search pattern must not be empty".to_string());
        }
        if self.limit == Some(0) {
            return Err("--limit must be greater than 0".to_string());
        }
        Ok(())
    }
}
