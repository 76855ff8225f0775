//! A validated resource name.

use crate::error::{NameError, Result};
use crate::extract::{
    extract_geo, extract_organization_id, extract_organization_or_project_id,
    extract_project_id, Scope,
};
use crate::grammar::{split_root, ParseOptions};
use crate::parse::{parse_with, validate};
use crate::part::Part;
use crate::pattern::validate_pattern;
use crate::stack::{pop, push};

/// A resource name that has passed [`validate`].
///
/// Holds either the canonical form or a root form. Operations that return a
/// new name hand back another validated `ResourceName`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResourceName(String);

impl ResourceName {
    /// Validates and wraps a resource name.
    pub fn parse(s: &str) -> Result<Self> {
        validate(s)?;
        Ok(Self(s.to_string()))
    }

    /// Builds a canonical name from a namespace and parts.
    pub fn generate(namespace: &str, parts: &[Part]) -> Result<Self> {
        crate::generate(namespace, parts).map(Self)
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true for `organization/ID` and `project/ID`.
    #[must_use]
    pub fn is_root(&self) -> bool {
        split_root(&self.0).is_some()
    }

    /// Returns the namespace and parts of a canonical name.
    ///
    /// Root forms have no namespace and yield [`NameError::Structural`].
    pub fn components(&self) -> Result<(String, Vec<Part>)> {
        parse_with(&self.0, ParseOptions::TRUSTED)
    }

    pub fn push(&self, part: Part) -> Result<Self> {
        push(&self.0, part).map(Self)
    }

    pub fn pop(&self, num_parts: usize) -> Result<Self> {
        pop(&self.0, num_parts).map(Self)
    }

    pub fn organization_id(&self) -> Result<String> {
        extract_organization_id(&self.0)
    }

    pub fn project_id(&self) -> Result<String> {
        extract_project_id(&self.0)
    }

    pub fn scope(&self) -> Result<Scope> {
        extract_organization_or_project_id(&self.0)
    }

    pub fn geo(&self) -> Result<String> {
        extract_geo(&self.0)
    }

    /// Checks this name against a wildcard pattern.
    pub fn matches(&self, pattern: &str) -> Result<()> {
        validate_pattern(&self.0, pattern)
    }

    /// Consumes the wrapper and returns the inner string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for ResourceName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for ResourceName {
    type Err = NameError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ResourceName {
    type Error = NameError;

    fn try_from(s: String) -> std::result::Result<Self, Self::Error> {
        validate(&s)?;
        Ok(Self(s))
    }
}

impl AsRef<str> for ResourceName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<ResourceName> for String {
    fn from(name: ResourceName) -> Self {
        name.0
    }
}

impl serde::Serialize for ResourceName {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for ResourceName {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::try_from(s).map_err(serde::de::Error::custom)
    }
}
