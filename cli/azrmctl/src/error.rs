//! Error handling and display for the CLI.

use colored::Colorize;
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("No resource IDs given. Pass them as arguments or on stdin.")]
    NoInput,

    #[error("{rejected} of {total} resource IDs are malformed")]
    Rejected { rejected: usize, total: usize },
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);

    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        match cli_err {
            CliError::Rejected { .. } => {
                eprintln!(
                    "\n{}",
                    "Hint: Resource IDs look like \
                     /subscriptions/{id}/resourceGroups/{name}[/providers/{namespace}[/{type}/{name}]...]"
                        .yellow()
                );
            }
            CliError::NoInput => {
                eprintln!("\n{}", "Hint: Try `azrm parse --help`.".yellow());
            }
            CliError::InvalidConfig(_) => {
                eprintln!(
                    "\n{}",
                    "Hint: Check --format/AZRM_FORMAT and --log-level/AZRM_LOG_LEVEL.".yellow()
                );
            }
        }
    }
}
