//! Splitting resource names into a namespace and parts.

use crate::error::{NameError, Result};
use crate::grammar::{
    split_root, validate_name_part, validate_namespace, validate_type_part, ParseOptions,
    SEPARATOR,
};
use crate::part::Part;

/// Parses a canonical resource name with full validation.
///
/// Root forms (`organization/ID`, `project/ID`) are not canonical and are
/// rejected with [`NameError::Structural`]; use [`validate`] to accept them.
pub fn parse(name: &str) -> Result<(String, Vec<Part>)> {
    parse_with(name, ParseOptions::STRICT)
}

/// Parses a canonical resource name, checking name segments per `options`.
///
/// Segments are classified left to right; the first invalid one aborts.
pub fn parse_with(name: &str, options: ParseOptions) -> Result<(String, Vec<Part>)> {
    let segments: Vec<&str> = name.split(SEPARATOR).collect();
    if segments.len() < 3 || segments.len() % 2 == 0 {
        return Err(NameError::Structural);
    }

    let namespace = segments[0];
    validate_namespace(namespace)?;

    let mut parts = Vec::with_capacity(segments.len() / 2);
    for pair in segments[1..].chunks_exact(2) {
        let (type_, part_name) = (pair[0], pair[1]);
        validate_type_part(type_)?;
        validate_name_part(part_name, options)?;
        parts.push(Part::new(type_, part_name));
    }

    Ok((namespace.to_string(), parts))
}

/// Validates a resource name in either canonical or root form.
pub fn validate(name: &str) -> Result<()> {
    if let Some((_, id)) = split_root(name) {
        return validate_name_part(id, ParseOptions::STRICT);
    }
    parse(name).map(|_| ())
}
