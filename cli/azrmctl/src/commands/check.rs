//! Check command.

use anyhow::Result;
use azrm_id::parse;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use tracing::warn;

use crate::input::collect_ids;
use crate::output::{print_output, print_rejection, print_success, OutputFormat};

use super::{finish, CommandContext};

/// Check resource IDs.
#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Resource IDs to check. Reads one per line from stdin when omitted.
    ids: Vec<String>,
}

impl CheckCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let ids = collect_ids(self.ids)?;
        let results: Vec<CheckResult> = ids.iter().map(|raw| check(raw)).collect();
        let rejected = results.iter().filter(|result| !result.valid).count();

        match ctx.format {
            OutputFormat::Table => {
                for result in &results {
                    match &result.error {
                        None => print_success(&result.id),
                        Some(error) => print_rejection(error),
                    }
                }
            }
            OutputFormat::Json => print_output(&results, ctx.format),
        }

        finish(rejected, results.len())
    }
}

/// Validation outcome for one input.
#[derive(Debug, Clone, Serialize, Tabled)]
struct CheckResult {
    #[tabled(rename = "ID")]
    id: String,

    #[tabled(rename = "Valid")]
    valid: bool,

    #[tabled(rename = "Error", display = "display_option")]
    error: Option<String>,
}

fn check(raw: &str) -> CheckResult {
    match parse(raw) {
        Ok(_) => CheckResult {
            id: raw.to_string(),
            valid: true,
            error: None,
        },
        Err(e) => {
            warn!(error = %e, position = ?e.position(), "Rejected resource ID");
            CheckResult {
                id: raw.to_string(),
                valid: false,
                error: Some(e.to_string()),
            }
        }
    }
}

fn display_option(opt: &Option<String>) -> String {
    opt.as_deref().unwrap_or("-").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_accepts_query_suffix() {
        let result = check(
            "/subscriptions/a/resourceGroups/b/providers/Microsoft.Network/virtualNetworks/v?api-version=2006-01-02-preview",
        );
        assert!(result.valid);
        assert!(result.error.is_none());
    }

    #[test]
    fn check_reports_cause() {
        let result = check("/subscriptions/a/resourceGroups/b/providers/Microsoft.Network/virtualNetworks");
        assert!(!result.valid);
        let error = result.error.unwrap();
        assert!(error.contains("'virtualNetworks' has no value"), "{error}");
    }

    #[test]
    fn check_keeps_raw_input() {
        let result = check("random");
        assert_eq!(result.id, "random");
        assert!(!result.valid);
    }
}
