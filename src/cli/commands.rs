//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Grist catalog connector CLI
#[derive(Parser, Debug)]
#[command(name = "grist-connector")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (JSON with "url" and "apiKey")
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Inline config JSON
    #[arg(long, global = true)]
    pub config_json: Option<String>,

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
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the connector specification
    Spec,

    /// Validate configuration and probe connectivity
    Check,

    /// List one level of the resource tree
    List {
        /// Folder id to list under (omit for the organization listing)
        #[arg(long)]
        folder: Option<String>,
    },

    /// Download a table as CSV
    Fetch {
        /// Resource id of the form domain|docId|tableId
        resource_id: String,

        /// Scratch directory for the downloaded file
        #[arg(short, long, default_value = ".")]
        output: PathBuf,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON
    Json,
    /// Pretty-printed JSON
    Pretty,
}
