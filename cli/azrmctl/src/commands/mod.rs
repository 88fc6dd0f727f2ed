//! CLI commands.

mod check;
mod parse;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::error::CliError;
use crate::output::OutputFormat;

/// azrm - Parse and validate Azure Resource Manager resource IDs.
#[derive(Debug, Parser)]
#[command(name = "azrm")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (table or json).
    #[arg(long, global = true, env = "AZRM_FORMAT", default_value = "table")]
    format: String,

    /// Log level (trace, debug, info, warn, error, off). RUST_LOG takes precedence.
    #[arg(long, global = true, env = "AZRM_LOG_LEVEL", default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Parse resource IDs and show their components.
    Parse(parse::ParseCommand),

    /// Check that resource IDs are well-formed.
    Check(check::CheckCommand),

    /// Show CLI version.
    Version,
}

impl Cli {
    /// Resolve configuration from flags and environment.
    pub fn config(&self) -> Result<Config> {
        Config::resolve(&self.format, &self.log_level)
    }

    /// Run the CLI command.
    pub fn run(self, config: Config) -> Result<()> {
        let ctx = CommandContext {
            format: config.format,
        };

        match self.command {
            Commands::Parse(cmd) => cmd.run(ctx),
            Commands::Check(cmd) => cmd.run(ctx),
            Commands::Version => {
                println!("azrm {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

/// Shared command context.
pub struct CommandContext {
    pub format: OutputFormat,
}

/// Turns a rejection count into the command result.
fn finish(rejected: usize, total: usize) -> Result<()> {
    tracing::info!(total, rejected, "Resource IDs processed");
    if rejected > 0 {
        return Err(CliError::Rejected { rejected, total }.into());
    }
    Ok(())
}
