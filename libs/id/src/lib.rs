//! # azrm-id
//!
//! Parsing for Azure Resource Manager resource IDs.
//!
//! ## ID Format
//!
//! A resource ID is an absolute, `/`-separated path:
//!
//! ```text
//! /subscriptions/{subscription}/resourceGroups/{group}[/providers/{namespace}][/{type}/{name}]*
//! ```
//!
//! Examples:
//! - `/subscriptions/6d74bdd2-9f84-11e5-9bd9-7831c1c4c038/resourceGroups/testGroup1`
//! - `/subscriptions/6d74bdd2-9f84-11e5-9bd9-7831c1c4c038/resourceGroups/testGroup1/providers/Microsoft.Network/virtualNetworks/virtualNetwork1`
//!
//! ## Design Principles
//!
//! - Parsing is strict: any deviation from the grammar is a
//!   [`MalformedResourceId`] and never a partial result
//! - Marker segments are case-sensitive; values are kept verbatim
//! - A trailing query string (`?api-version=...`) is ignored
//! - Parsed IDs format back to the same canonical string

mod error;
mod parse;
mod path;
mod types;

pub use error::{MalformedCause, MalformedResourceId};
pub use parse::parse;
pub use path::ResourcePath;
pub use types::ResourceId;
