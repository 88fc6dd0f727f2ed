//! CLI configuration.
//!
//! Values come from flags, which clap also fills from `AZRM_FORMAT` and
//! `AZRM_LOG_LEVEL`. `RUST_LOG` overrides the log level when set.

use anyhow::Result;

use crate::error::CliError;
use crate::output::OutputFormat;

/// Log levels accepted by `--log-level`.
const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// Resolved CLI configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Output format for command results.
    pub format: OutputFormat,

    /// Default log filter (trace, debug, info, warn, error, off).
    pub log_level: String,
}

impl Config {
    /// Validate raw flag values.
    pub fn resolve(format: &str, log_level: &str) -> Result<Self> {
        let format = match format.to_ascii_lowercase().as_str() {
            "table" => OutputFormat::Table,
            "json" => OutputFormat::Json,
            other => {
                return Err(CliError::InvalidConfig(format!(
                    "unknown output format '{other}' (expected 'table' or 'json')"
                ))
                .into())
            }
        };

        let log_level = log_level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&log_level.as_str()) {
            return Err(CliError::InvalidConfig(format!(
                "unknown log level '{log_level}' (expected one of: {})",
                LOG_LEVELS.join(", ")
            ))
            .into());
        }

        Ok(Self { format, log_level })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_defaults() {
        let config = Config::resolve("table", "warn").unwrap();
        assert!(matches!(config.format, OutputFormat::Table));
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn resolve_is_case_insensitive() {
        let config = Config::resolve("JSON", "Debug").unwrap();
        assert!(matches!(config.format, OutputFormat::Json));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn resolve_rejects_unknown_format() {
        let err = Config::resolve("yaml", "warn").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::InvalidConfig(_))
        ));
        assert!(err.to_string().contains("yaml"));
    }

    #[test]
    fn resolve_rejects_unknown_log_level() {
        let err = Config::resolve("table", "loud").unwrap_err();
        assert!(err.to_string().contains("loud"));
    }
}
