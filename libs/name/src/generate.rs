//! Composing resource names from a namespace and parts.

use crate::error::{NameError, Result};
use crate::grammar::{
    is_root_type, validate_name_part, validate_namespace, validate_type_part, ParseOptions,
    SEPARATOR,
};
use crate::part::Part;

/// Generates the canonical `namespace/type/name/...` form.
///
/// Every segment is validated. At least one part is required, since a bare
/// namespace would not parse back.
pub fn generate(namespace: &str, parts: &[Part]) -> Result<String> {
    validate_namespace(namespace)?;
    if parts.is_empty() {
        return Err(NameError::EmptyParts);
    }
    for part in parts {
        validate_type_part(&part.type_)?;
        validate_name_part(&part.name, ParseOptions::STRICT)?;
    }
    Ok(join(namespace, parts))
}

/// Generates the 2-segment root form (`organization/ID` or `project/ID`).
pub fn generate_root(part: &Part) -> Result<String> {
    if !is_root_type(&part.type_) {
        return Err(NameError::NotARoot(part.type_.clone()));
    }
    validate_name_part(&part.name, ParseOptions::STRICT)?;
    Ok(part.to_string())
}

/// Joins segments without validation.
pub(crate) fn join(namespace: &str, parts: &[Part]) -> String {
    let len = parts
        .iter()
        .fold(namespace.len(), |acc, p| acc + p.type_.len() + p.name.len() + 2);
    let mut out = String::with_capacity(len);
    out.push_str(namespace);
    for part in parts {
        out.push(SEPARATOR);
        out.push_str(&part.type_);
        out.push(SEPARATOR);
        out.push_str(&part.name);
    }
    out
}
