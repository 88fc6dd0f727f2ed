//! The parsed resource ID record.

use std::fmt;
use std::str::FromStr;

use crate::error::MalformedResourceId;
use crate::parse::{parse, PROVIDERS, RESOURCE_GROUPS, SUBSCRIPTIONS};
use crate::path::ResourcePath;

// =============================================================================
// Resource ID
// =============================================================================

/// A parsed Azure Resource Manager resource ID.
///
/// Produced only by a successful parse, so the subscription and resource
/// group are always non-empty. The record is immutable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceId {
    subscription_id: String,
    resource_group: String,
    provider: String,
    path: ResourcePath,
}

impl ResourceId {
    pub(crate) fn from_parts(
        subscription_id: String,
        resource_group: String,
        provider: String,
        path: ResourcePath,
    ) -> Self {
        Self {
            subscription_id,
            resource_group,
            provider,
            path,
        }
    }

    /// Parses a resource ID from a string.
    ///
    /// See [`crate::parse`] for the accepted grammar.
    pub fn parse(s: &str) -> Result<Self, MalformedResourceId> {
        parse(s)
    }

    /// Returns the owning subscription.
    #[must_use]
    pub fn subscription_id(&self) -> &str {
        &self.subscription_id
    }

    /// Returns the containing resource group.
    #[must_use]
    pub fn resource_group(&self) -> &str {
        &self.resource_group
    }

    /// Returns the provider namespace, or `""` when the ID has none.
    #[must_use]
    pub fn provider(&self) -> &str {
        &self.provider
    }

    /// Returns the provider namespace if the ID has one.
    #[must_use]
    pub fn provider_namespace(&self) -> Option<&str> {
        (!self.provider.is_empty()).then_some(self.provider.as_str())
    }

    /// Returns the nested (type, name) pairs.
    #[must_use]
    pub fn path(&self) -> &ResourcePath {
        &self.path
    }

    /// Returns the name of the innermost nested resource.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.path.last().map(|(_, name)| name)
    }

    /// Returns the fully qualified resource type, for example
    /// `Microsoft.Network/virtualNetworks/subnets`.
    ///
    /// Requires a provider namespace and at least one nested resource.
    #[must_use]
    pub fn resource_type(&self) -> Option<String> {
        let provider = self.provider_namespace()?;
        if self.path.is_empty() {
            return None;
        }
        let mut qualified = provider.to_string();
        for key in self.path.keys() {
            qualified.push('/');
            qualified.push_str(key);
        }
        Some(qualified)
    }
}

/// Formats the canonical form, without any query string.
impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "/{SUBSCRIPTIONS}/{}/{RESOURCE_GROUPS}/{}",
            self.subscription_id, self.resource_group
        )?;
        if !self.provider.is_empty() {
            write!(f, "/{PROVIDERS}/{}", self.provider)?;
        }
        if !self.path.is_empty() {
            write!(f, "/{}", self.path)?;
        }
        Ok(())
    }
}

impl FromStr for ResourceId {
    type Err = MalformedResourceId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for ResourceId {
    type Error = MalformedResourceId;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl serde::Serialize for ResourceId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for ResourceId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Tests
// =============================================================================
