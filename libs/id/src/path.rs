//! The nested resource path of a resource ID.

use std::fmt;

/// Resource type to resource name pairs, in the order they appear in the ID.
///
/// Keys are unique. A parsed path is read-only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ResourcePath {
    pairs: Vec<(String, String)>,
}

impl ResourcePath {
    /// Creates an empty path.
    #[must_use]
    pub const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Returns the number of (type, name) pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns true if the ID has no nested resources.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Returns the resource name recorded for a resource type.
    #[must_use]
    pub fn get(&self, resource_type: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(key, _)| key == resource_type)
            .map(|(_, name)| name.as_str())
    }

    /// Returns true if the resource type is present.
    #[must_use]
    pub fn contains_key(&self, resource_type: &str) -> bool {
        self.get(resource_type).is_some()
    }

    /// Iterates (type, name) pairs in the order they appear in the ID.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.pairs
            .iter()
            .map(|(key, name)| (key.as_str(), name.as_str()))
    }

    /// Iterates resource types in the order they appear in the ID.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.pairs.iter().map(|(key, _)| key.as_str())
    }

    /// Returns the innermost (type, name) pair.
    #[must_use]
    pub fn last(&self) -> Option<(&str, &str)> {
        self.pairs
            .last()
            .map(|(key, name)| (key.as_str(), name.as_str()))
    }

    /// Appends a pair. Returns the pair back if the type is already present.
    pub(crate) fn try_insert(
        &mut self,
        resource_type: String,
        name: String,
    ) -> Result<(), (String, String)> {
        if self.contains_key(&resource_type) {
            return Err((resource_type, name));
        }
        self.pairs.push((resource_type, name));
        Ok(())
    }
}

/// Formats as `type/name` pairs joined by `/`, without a leading slash.
impl fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (key, name)) in self.pairs.iter().enumerate() {
            if index > 0 {
                f.write_str("/")?;
            }
            write!(f, "{key}/{name}")?;
        }
        Ok(())
    }
}
