//! azrmctl (azrm) - CLI for Azure Resource Manager resource IDs
//!
//! Parses and validates resource IDs given as arguments or on stdin.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod input;
mod output;

use commands::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match cli.config() {
        Ok(config) => config,
        Err(e) => {
            error::print_error(&e);
            std::process::exit(2);
        }
    };

    // Logs go to stderr so stdout stays machine-readable (prefer RUST_LOG)
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| config.log_level.clone().into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = cli.run(config) {
        error::print_error(&e);
        std::process::exit(1);
    }

    Ok(())
}
