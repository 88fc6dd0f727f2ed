//! Error types for resource ID parsing.

use thiserror::Error;

/// A resource ID that does not follow the expected grammar.
///
/// Every parse failure is reported as this one error kind. The [`cause`]
/// says which structural expectation failed and where.
///
/// [`cause`]: MalformedResourceId::cause
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("malformed resource ID {id:?}: {cause}")]
pub struct MalformedResourceId {
    id: String,
    cause: MalformedCause,
}

/// The structural expectation a malformed resource ID failed.
///
/// Positions are 1-based indexes of `/`-separated segments, counted after
/// the leading slash.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MalformedCause {
    /// The ID string is empty.
    #[error("resource ID cannot be empty")]
    Empty,

    /// The ID does not start with `/`.
    #[error("resource ID must start with '/'")]
    NotAbsolute,

    /// A fixed marker segment did not match.
    #[error("segment {position}: expected '{expected}', got '{found}'")]
    UnexpectedSegment {
        position: usize,
        expected: &'static str,
        found: String,
    },

    /// The ID ended where a fixed marker segment was required.
    #[error("segment {position}: expected '{expected}', but the ID ends here")]
    MissingSegment {
        position: usize,
        expected: &'static str,
    },

    /// A marker or resource type has no value following it.
    #[error("segment {position}: '{key}' has no value")]
    MissingValue { position: usize, key: String },

    /// A resource type segment is empty.
    #[error("segment {position}: resource type cannot be empty")]
    EmptyType { position: usize },

    /// A resource type appears more than once.
    #[error("segment {position}: resource type '{key}' appears more than once")]
    DuplicateType { position: usize, key: String },
}

impl MalformedResourceId {
    pub(crate) fn new(id: impl Into<String>, cause: MalformedCause) -> Self {
        Self {
            id: id.into(),
            cause,
        }
    }

    /// Returns the rejected input, without any query string.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns what went wrong.
    pub fn cause(&self) -> &MalformedCause {
        &self.cause
    }

    /// Returns true if the input was empty.
    pub fn is_empty(&self) -> bool {
        matches!(self.cause, MalformedCause::Empty)
    }

    /// Returns true if the failure happened while walking segments, as
    /// opposed to rejecting the input as a whole.
    pub fn is_structural(&self) -> bool {
        self.cause.position().is_some()
    }

    /// Returns the 1-based position of the offending segment, if any.
    pub fn position(&self) -> Option<usize> {
        self.cause.position()
    }
}

impl MalformedCause {
    /// Returns the 1-based position of the offending segment, if any.
    pub fn position(&self) -> Option<usize> {
        match self {
            MalformedCause::Empty | MalformedCause::NotAbsolute => None,
            MalformedCause::UnexpectedSegment { position, .. }
            | MalformedCause::MissingSegment { position, .. }
            | MalformedCause::MissingValue { position, .. }
            | MalformedCause::EmptyType { position }
            | MalformedCause::DuplicateType { position, .. } => Some(*position),
        }
    }
}
