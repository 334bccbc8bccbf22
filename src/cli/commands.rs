//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// MoPub Publisher Management API CLI
#[derive(Parser, Debug)]
#[command(name = "mopub-pm")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// API key sent as x-api-key
    #[arg(long, global = true, env = "MOPUB_PM_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// API base URL
    #[arg(long, global = true, env = "MOPUB_PM_BASE_URL")]
    pub base_url: Option<String>,

    /// Configuration file (YAML or JSON)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Delay between page launches, in milliseconds
    #[arg(long, global = true)]
    pub pacing_ms: Option<u64>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List every line item
    LineItems {
        /// Raw query-string filter, e.g. "status=running"
        #[arg(long)]
        filter: Option<String>,
    },

    /// List every ad unit
    AdUnits {
        /// Raw query-string filter
        #[arg(long)]
        filter: Option<String>,
    },

    /// List every raw record of any resource
    Fetch {
        /// Resource path, e.g. "orders"
        resource: String,

        /// Raw query-string filter
        #[arg(long)]
        filter: Option<String>,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one record per line)
    Json,
    /// Pretty-printed JSON array
    Pretty,
    /// Number of records only
    Count,
}
