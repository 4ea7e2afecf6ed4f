//! Command execution

use super::commands::{Cli, Commands, OutputFormat};
use crate::connector::{CheckResult, GristConnector};
use crate::error::{Error, Result};
use serde::Serialize;
use serde_json::Value;

/// Executes a parsed CLI invocation
pub struct Runner {
    cli: Cli,
    connector: GristConnector,
}

impl Runner {
    /// Create a runner for the parsed arguments
    pub fn new(cli: Cli) -> Self {
        Self {
            cli,
            connector: GristConnector::new(),
        }
    }

    /// Run the selected command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Spec => {
                self.print(&self.connector.spec());
                Ok(())
            }

            Commands::Check => {
                let config = self.load_config()?;
                let result = match self.connector.prepare(&config, &config).await {
                    Ok(_) => CheckResult::success(),
                    Err(e) => CheckResult::failure(e.to_string()),
                };
                self.print(&result);
                Ok(())
            }

            Commands::List { folder } => {
                let config = self.load_config()?;
                let listing = self
                    .connector
                    .list_resources(&config, &config, folder.as_deref())
                    .await?;
                self.print(&listing);
                Ok(())
            }

            Commands::Fetch {
                resource_id,
                output,
            } => {
                let config = self.load_config()?;
                let descriptor = self
                    .connector
                    .get_resource(&config, &config, resource_id, output)
                    .await?;
                self.print(&descriptor);
                Ok(())
            }
        }
    }

    /// Load the `{url, apiKey}` config from --config-json or --config.
    /// On the CLI the same value doubles as the secrets object.
    fn load_config(&self) -> Result<Value> {
        if let Some(inline) = &self.cli.config_json {
            return Ok(serde_json::from_str(inline)?);
        }
        if let Some(path) = &self.cli.config {
            let content = std::fs::read_to_string(path)?;
            return Ok(serde_json::from_str(&content)?);
        }
        Err(Error::config(
            "no configuration provided; use --config or --config-json",
        ))
    }

    fn print<T: Serialize>(&self, value: &T) {
        let rendered = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(value),
            OutputFormat::Pretty => serde_json::to_string_pretty(value),
        };
        match rendered {
            Ok(text) => println!("{text}"),
            Err(e) => eprintln!("Failed to render output: {e}"),
        }
    }
}
