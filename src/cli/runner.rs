//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::client::Client;
use crate::config::{ClientConfig, ConfigFile};
use crate::error::Result;
use crate::models::{AdUnit, LineItem};
use serde::Serialize;
use std::io::Write;
use std::time::Duration;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command, writing results to stdout
    pub async fn run(&self) -> Result<()> {
        let mut buf = Vec::new();
        self.run_to(&mut buf).await?;
        std::io::stdout().lock().write_all(&buf)?;
        Ok(())
    }

    /// Run the CLI command, writing results to `out`
    pub async fn run_to<W: Write>(&self, out: &mut W) -> Result<()> {
        let client = Client::with_config(self.client_config()?)?;

        match &self.cli.command {
            Commands::LineItems { filter } => {
                let items: Vec<LineItem> = client.get_all_filtered(filter.as_deref()).await?;
                self.emit(out, &items)
            }
            Commands::AdUnits { filter } => {
                let units: Vec<AdUnit> = client.get_all_filtered(filter.as_deref()).await?;
                self.emit(out, &units)
            }
            Commands::Fetch { resource, filter } => {
                let records = client.fetch_all_raw(resource, filter.as_deref()).await?;
                self.emit(out, &records)
            }
        }
    }

    /// Build the client config: file first, then flags and environment on top
    pub fn client_config(&self) -> Result<ClientConfig> {
        let mut builder = match &self.cli.config {
            Some(path) => ConfigFile::load(path)?.into_builder()?,
            None => ClientConfig::builder(),
        };

        if let Some(key) = &self.cli.api_key {
            builder = builder.api_key(key);
        }
        if let Some(url) = &self.cli.base_url {
            builder = builder.base_url(url);
        }
        if let Some(ms) = self.cli.pacing_ms {
            builder = builder.pacing(Duration::from_millis(ms));
        }

        builder.build()
    }

    fn emit<T: Serialize, W: Write>(&self, out: &mut W, items: &[T]) -> Result<()> {
        match self.cli.format {
            OutputFormat::Json => {
                for item in items {
                    serde_json::to_writer(&mut *out, item)?;
                    writeln!(out)?;
                }
            }
            OutputFormat::Pretty => {
                serde_json::to_writer_pretty(&mut *out, items)?;
                writeln!(out)?;
            }
            OutputFormat::Count => writeln!(out, "{}", items.len())?,
        }
        Ok(())
    }
}
