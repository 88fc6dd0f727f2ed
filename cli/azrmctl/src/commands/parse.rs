//! Parse command.

use anyhow::Result;
use azrm_id::ResourceId;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use tracing::{debug, warn};

use crate::input::collect_ids;
use crate::output::{print_output, print_rejection};

use super::{finish, CommandContext};

/// Parse resource IDs.
#[derive(Debug, Args)]
pub struct ParseCommand {
    /// Resource IDs to parse. Reads one per line from stdin when omitted.
    ids: Vec<String>,
}

impl ParseCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let ids = collect_ids(self.ids)?;
        let total = ids.len();

        let mut parsed = Vec::with_capacity(total);
        let mut rejected = 0;
        for raw in &ids {
            match ResourceId::parse(raw) {
                Ok(id) => {
                    debug!(resource_id = %id, nested = id.path().len(), "Parsed resource ID");
                    parsed.push(ParsedResource::from(&id));
                }
                Err(e) => {
                    warn!(error = %e, "Rejected resource ID");
                    print_rejection(&e.to_string());
                    rejected += 1;
                }
            }
        }

        print_output(&parsed, ctx.format);
        finish(rejected, total)
    }
}

/// Components of a parsed resource ID.
#[derive(Debug, Clone, Serialize, Tabled)]
struct ParsedResource {
    #[tabled(rename = "Subscription")]
    subscription_id: String,

    #[tabled(rename = "Resource Group")]
    resource_group: String,

    #[tabled(rename = "Provider", display = "display_option")]
    provider: Option<String>,

    #[tabled(rename = "Path", display = "display_path")]
    path: Vec<PathEntry>,

    #[tabled(skip)]
    resource_type: Option<String>,

    #[tabled(skip)]
    name: Option<String>,

    #[tabled(skip)]
    id: String,
}

/// One nested (type, name) pair.
#[derive(Debug, Clone, Serialize)]
struct PathEntry {
    #[serde(rename = "type")]
    resource_type: String,
    name: String,
}

impl From<&ResourceId> for ParsedResource {
    fn from(id: &ResourceId) -> Self {
        Self {
            subscription_id: id.subscription_id().to_string(),
            resource_group: id.resource_group().to_string(),
            provider: id.provider_namespace().map(str::to_string),
            path: id
                .path()
                .iter()
                .map(|(resource_type, name)| PathEntry {
                    resource_type: resource_type.to_string(),
                    name: name.to_string(),
                })
                .collect(),
            resource_type: id.resource_type(),
            name: id.name().map(str::to_string),
            id: id.to_string(),
        }
    }
}

fn display_option(opt: &Option<String>) -> String {
    opt.as_deref().unwrap_or("-").to_string()
}

fn display_path(path: &[PathEntry]) -> String {
    if path.is_empty() {
        return "-".to_string();
    }
    path.iter()
        .map(|entry| format!("{}={}", entry.resource_type, entry.name))
        .collect::<Vec<_>>()
        .join(", ")
}
