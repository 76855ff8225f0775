//! Error types for resource name parsing and validation.

use thiserror::Error;

/// Broad classification of a [`NameError`].
///
/// Callers that surface errors to users usually only need to know which
/// rule was broken, not the exact variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Wrong segment count or parity.
    Structural,
    /// Invalid characters in the namespace, or a reserved namespace.
    Namespace,
    /// Invalid characters in a type segment.
    TypeSegment,
    /// Invalid characters in a name segment, or a missing wildcard.
    NameSegment,
    /// A required hierarchy marker is absent at its expected position.
    Semantic,
    /// `pop` asked for zero parts, or for all of them.
    StackBounds,
    /// A valid name that does not satisfy a pattern.
    PatternMismatch,
}

/// Errors that can occur when working with resource names.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NameError {
    /// The segment count is below three or even.
    #[error("resource name must consist of a namespace, and a list of type and name parts")]
    Structural,

    /// The namespace is one of the reserved hierarchy markers.
    #[error("namespace '{0}' is reserved")]
    ReservedNamespace(String),

    /// The namespace does not match `^[a-z][a-z-]*$`.
    #[error("invalid namespace '{0}': must start with a lowercase letter and contain only lowercase letters and '-'")]
    InvalidNamespace(String),

    /// A type segment does not match `^[a-z][a-z-]*$`.
    #[error("invalid type part '{0}': must start with a lowercase letter and contain only lowercase letters and '-'")]
    InvalidType(String),

    /// A name segment does not match `^[A-Za-z0-9][A-Za-z0-9_.-]*$`.
    #[error("invalid name part '{0}': must start with a letter or digit and contain only letters, digits, '_', '.' and '-'")]
    InvalidName(String),

    /// A name segment was not the literal wildcard.
    #[error("invalid name part '{0}': expected the wildcard '*'")]
    WildcardRequired(String),

    #[error("resource name doesn't specify an organization ID")]
    MissingOrganization,

    #[error("resource name doesn't specify a project ID")]
    MissingProject,

    #[error("resource name doesn't specify an organization or project ID")]
    MissingOrganizationOrProject,

    #[error("resource name doesn't specify a geography")]
    MissingGeo,

    /// A root form was requested for a part that is not an organization or
    /// project.
    #[error("part type '{0}' has no root form; expected 'organization' or 'project'")]
    NotARoot(String),

    /// A canonical name needs at least one part.
    #[error("resource name must contain at least one type and name part")]
    EmptyParts,

    #[error("num_parts must be greater than zero")]
    PopZero,

    #[error("num_parts can not be equal to or greater than the parts the resource name contains")]
    PopOutOfBounds { num_parts: usize, available: usize },

    #[error("expected a resource name matching the pattern {pattern:?}; got {name:?}")]
    PatternMismatch { name: String, pattern: String },
}

impl NameError {
    /// Returns the broad classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Structural | Self::EmptyParts => ErrorKind::Structural,
            Self::ReservedNamespace(_) | Self::InvalidNamespace(_) => ErrorKind::Namespace,
            Self::InvalidType(_) => ErrorKind::TypeSegment,
            Self::InvalidName(_) | Self::WildcardRequired(_) => ErrorKind::NameSegment,
            Self::MissingOrganization
            | Self::MissingProject
            | Self::MissingOrganizationOrProject
            | Self::MissingGeo
            | Self::NotARoot(_) => ErrorKind::Semantic,
            Self::PopZero | Self::PopOutOfBounds { .. } => ErrorKind::StackBounds,
            Self::PatternMismatch { .. } => ErrorKind::PatternMismatch,
        }
    }

    /// Returns true if a single segment failed its character-class rule.
    pub fn is_segment_error(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::Namespace | ErrorKind::TypeSegment | ErrorKind::NameSegment
        )
    }

    pub(crate) fn pattern_mismatch(name: &str, pattern: &str) -> Self {
        Self::PatternMismatch {
            name: name.to_string(),
            pattern: pattern.to_string(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, NameError>;
