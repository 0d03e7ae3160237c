//! CLI argument parsing for planguard

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pg")]
#[command(
    author,
    version,
    about = "Fail infrastructure plans that delete or replace protected data disks",
    long_about = None,
    after_help = "Exit codes: 0 = no violations, 1 = violations found, 2 = plan missing or unparseable"
)]
pub struct Cli {
    /// Path to the JSON plan (e.g. output of `terraform show -json plan.out`)
    #[arg(required = true)]
    pub plan: PathBuf,

    /// Address prefix marking protected resources (default: google_compute_disk.data_)
    #[arg(short = 'p', long)]
    pub address_prefix: Option<String>,

    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format (text or json)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Never colorize output
    #[arg(long)]
    pub no_color: bool,
}

/// Output format for the verdict report
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown format: {}. Use: text or json", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}
