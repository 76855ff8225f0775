//! Matching resource names against wildcard patterns.
//!
//! A pattern is a resource name whose name segments are all `*`, e.g.
//! `iam/project/*/service-principal/*`. Namespace and types must match
//! literally. `organization/*` and `project/*` match the root forms.

use crate::error::{NameError, Result};
use crate::grammar::{split_root, validate_name_part, ParseOptions, WILDCARD};
use crate::parse::{parse, parse_with};

/// Checks that `name` satisfies `pattern`.
///
/// Errors from parsing either argument are returned as-is; a well-formed
/// name that does not fit yields [`NameError::PatternMismatch`].
pub fn validate_pattern(name: &str, pattern: &str) -> Result<()> {
    if let Some((root, WILDCARD)) = split_root(pattern) {
        return match split_root(name) {
            Some((kind, id)) if kind == root => validate_name_part(id, ParseOptions::STRICT),
            _ => Err(mismatch(name, pattern)),
        };
    }

    let (pattern_namespace, pattern_parts) = parse_with(pattern, ParseOptions::WILDCARD)?;
    let (namespace, parts) = parse(name)?;

    if namespace != pattern_namespace || parts.len() != pattern_parts.len() {
        return Err(mismatch(name, pattern));
    }
    let types_match = parts
        .iter()
        .zip(&pattern_parts)
        .all(|(part, expected)| part.type_ == expected.type_);
    if !types_match {
        return Err(mismatch(name, pattern));
    }
    Ok(())
}

fn mismatch(name: &str, pattern: &str) -> NameError {
    tracing::debug!(name, pattern, "resource name does not match pattern");
    NameError::pattern_mismatch(name, pattern)
}
