//! CLI module
//!
//! Command-line interface for exercising the connector outside a host.
//!
//! # Commands
//!
//! - `spec` - Show the connector specification
//! - `check` - Validate configuration and probe connectivity
//! - `list` - List one level of the resource tree
//! - `fetch` - Download a table as CSV

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
