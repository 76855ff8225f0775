//! Accessors for the hierarchy markers of a resource name.
//!
//! Existing names are assumed to have been validated when they were
//! created, so name segments are not re-checked here.

use serde::{Deserialize, Serialize};

use crate::error::{NameError, Result};
use crate::grammar::{split_root, ParseOptions, GEO, ORGANIZATION, PROJECT};
use crate::parse::parse_with;

/// The organization or project that owns a resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "id", rename_all = "snake_case")]
pub enum Scope {
    Organization(String),
    Project(String),
}

impl Scope {
    /// Returns the organization ID, if this is an organization scope.
    pub fn organization_id(&self) -> Option<&str> {
        match self {
            Self::Organization(id) => Some(id),
            Self::Project(_) => None,
        }
    }

    /// Returns the project ID, if this is a project scope.
    pub fn project_id(&self) -> Option<&str> {
        match self {
            Self::Organization(_) => None,
            Self::Project(id) => Some(id),
        }
    }

    /// Returns the reserved type string of the scope.
    pub fn type_(&self) -> &'static str {
        match self {
            Self::Organization(_) => ORGANIZATION,
            Self::Project(_) => PROJECT,
        }
    }

    /// Returns the ID regardless of scope type.
    pub fn id(&self) -> &str {
        match self {
            Self::Organization(id) | Self::Project(id) => id,
        }
    }
}

/// Extracts the organization ID from `organization/ID` or from a canonical
/// name whose first part is an organization.
pub fn extract_organization_id(name: &str) -> Result<String> {
    if let Some((ORGANIZATION, id)) = split_root(name) {
        return Ok(id.to_string());
    }
    let (_, parts) = parse_with(name, ParseOptions::TRUSTED)?;
    match parts.into_iter().next() {
        Some(part) if part.type_ == ORGANIZATION => Ok(part.name),
        _ => Err(NameError::MissingOrganization),
    }
}

/// Extracts the project ID from `project/ID` or from a canonical name whose
/// first part is a project.
pub fn extract_project_id(name: &str) -> Result<String> {
    if let Some((PROJECT, id)) = split_root(name) {
        return Ok(id.to_string());
    }
    let (_, parts) = parse_with(name, ParseOptions::TRUSTED)?;
    match parts.into_iter().next() {
        Some(part) if part.type_ == PROJECT => Ok(part.name),
        _ => Err(NameError::MissingProject),
    }
}

/// Extracts whichever of organization or project owns the resource.
pub fn extract_organization_or_project_id(name: &str) -> Result<Scope> {
    match split_root(name) {
        Some((ORGANIZATION, id)) => return Ok(Scope::Organization(id.to_string())),
        Some((_, id)) => return Ok(Scope::Project(id.to_string())),
        None => {}
    }
    let (_, parts) = parse_with(name, ParseOptions::TRUSTED)?;
    match parts.into_iter().next() {
        Some(part) if part.type_ == ORGANIZATION => Ok(Scope::Organization(part.name)),
        Some(part) if part.type_ == PROJECT => Ok(Scope::Project(part.name)),
        _ => Err(NameError::MissingOrganizationOrProject),
    }
}

/// Extracts the geography, which must be the second part.
///
/// There is no root form for geographies.
pub fn extract_geo(name: &str) -> Result<String> {
    let (_, parts) = parse_with(name, ParseOptions::TRUSTED)?;
    match parts.into_iter().nth(1) {
        Some(part) if part.type_ == GEO => Ok(part.name),
        _ => Err(NameError::MissingGeo),
    }
}
