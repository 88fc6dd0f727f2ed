//! Resource ID parser.
//!
//! The grammar is walked in four phases over the `/`-separated segments:
//!
//! 1. `subscriptions/{subscription}` (required)
//! 2. `resourceGroups/{group}` (required)
//! 3. `providers/{namespace}` (optional)
//! 4. `{type}/{name}` pairs (zero or more)
//!
//! Marker segments match case-sensitively. Anything after the first `?` is
//! a query string and is ignored.

use std::iter::Peekable;
use std::str::Split;

use crate::error::{MalformedCause, MalformedResourceId};
use crate::path::ResourcePath;
use crate::types::ResourceId;

pub(crate) const SUBSCRIPTIONS: &str = "subscriptions";
pub(crate) const RESOURCE_GROUPS: &str = "resourceGroups";
pub(crate) const PROVIDERS: &str = "providers";

/// Parses a resource ID string.
///
/// The input must start with `/`. A trailing query string is discarded
/// before parsing. On failure no partial record is produced.
///
/// # Example
///
/// ```
/// let id = azrm_id::parse(
///     "/subscriptions/6d74bdd2-9f84-11e5-9bd9-7831c1c4c038/resourceGroups/testGroup1",
/// )?;
/// assert_eq!(id.resource_group(), "testGroup1");
/// assert_eq!(id.provider(), "");
/// assert!(id.path().is_empty());
/// # Ok::<(), azrm_id::MalformedResourceId>(())
/// ```
pub fn parse(id: &str) -> Result<ResourceId, MalformedResourceId> {
    let id = strip_query(id);
    parse_segments(id).map_err(|cause| MalformedResourceId::new(id, cause))
}

fn strip_query(id: &str) -> &str {
    id.split_once('?').map_or(id, |(head, _query)| head)
}

fn parse_segments(id: &str) -> Result<ResourceId, MalformedCause> {
    if id.is_empty() {
        return Err(MalformedCause::Empty);
    }
    let rest = id.strip_prefix('/').ok_or(MalformedCause::NotAbsolute)?;

    let mut segments = Segments::new(rest);

    let subscription_id = segments.marked_value(SUBSCRIPTIONS)?;
    let resource_group = segments.marked_value(RESOURCE_GROUPS)?;

    let provider = if segments.peek() == Some(PROVIDERS) {
        segments.marked_value(PROVIDERS)?
    } else {
        String::new()
    };

    let mut path = ResourcePath::new();
    while let Some((position, resource_type)) = segments.advance() {
        if resource_type.is_empty() {
            return Err(MalformedCause::EmptyType { position });
        }
        let name = segments.value_for(position, resource_type)?;
        path.try_insert(resource_type.to_string(), name)
            .map_err(|(key, _)| MalformedCause::DuplicateType { position, key })?;
    }

    Ok(ResourceId::from_parts(
        subscription_id,
        resource_group,
        provider,
        path,
    ))
}

/// Segment cursor that tracks 1-based positions.
struct Segments<'a> {
    inner: Peekable<Split<'a, char>>,
    position: usize,
}

impl<'a> Segments<'a> {
    fn new(rest: &'a str) -> Self {
        Self {
            inner: rest.split('/').peekable(),
            position: 0,
        }
    }

    fn peek(&mut self) -> Option<&'a str> {
        self.inner.peek().copied()
    }

    fn advance(&mut self) -> Option<(usize, &'a str)> {
        let segment = self.inner.next()?;
        self.position += 1;
        Some((self.position, segment))
    }

    /// Consumes `marker` followed by its non-empty value.
    fn marked_value(&mut self, marker: &'static str) -> Result<String, MalformedCause> {
        let expected_at = self.position + 1;
        match self.advance() {
            None => Err(MalformedCause::MissingSegment {
                position: expected_at,
                expected: marker,
            }),
            Some((position, found)) if found != marker => Err(MalformedCause::UnexpectedSegment {
                position,
                expected: marker,
                found: found.to_string(),
            }),
            Some((position, _)) => self.value_for(position, marker),
        }
    }

    /// Consumes the non-empty value that follows the key at `key_position`.
    fn value_for(&mut self, key_position: usize, key: &str) -> Result<String, MalformedCause> {
        match self.advance() {
            Some((_, value)) if !value.is_empty() => Ok(value.to_string()),
            _ => Err(MalformedCause::MissingValue {
                position: key_position,
                key: key.to_string(),
            }),
        }
    }
}
