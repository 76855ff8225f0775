//! Character-class rules for resource name segments.
//!
//! | Segment   | Accepted                          |
//! |-----------|-----------------------------------|
//! | namespace | `^[a-z][a-z-]*$`, not reserved    |
//! | type      | `^[a-z][a-z-]*$`                  |
//! | name      | `^[A-Za-z0-9][A-Za-z0-9_.-]*$`    |
//!
//! The rules are implemented as byte scanners rather than regexes; the
//! accepted sets are identical.

use crate::error::{NameError, Result};

/// Segment separator.
pub const SEPARATOR: char = '/';

/// Reserved type (and root-form prefix) for organizations.
pub const ORGANIZATION: &str = "organization";

/// Reserved type (and root-form prefix) for projects.
pub const PROJECT: &str = "project";

/// Reserved type for geographies.
pub const GEO: &str = "geo";

/// Name segment accepted in wildcard mode.
pub const WILDCARD: &str = "*";

/// Namespaces that would be confused with a root form.
const RESERVED_NAMESPACES: [&str; 2] = [ORGANIZATION, PROJECT];

/// Controls how name segments are checked.
///
/// Namespace and type segments are always validated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Accept any name segment. Used when re-reading a value that was
    /// validated when it was created, or a legacy value.
    pub skip_name_validation: bool,

    /// Name segments must be the literal `*`. Used for patterns.
    pub allow_wildcard_name: bool,
}

impl ParseOptions {
    /// Full validation of every segment.
    pub const STRICT: Self = Self {
        skip_name_validation: false,
        allow_wildcard_name: false,
    };

    /// Name segments are accepted as-is.
    pub const TRUSTED: Self = Self {
        skip_name_validation: true,
        allow_wildcard_name: false,
    };

    /// Name segments must be `*`.
    pub const WILDCARD: Self = Self {
        skip_name_validation: false,
        allow_wildcard_name: true,
    };
}

fn is_lower_kebab(s: &str) -> bool {
    let mut bytes = s.bytes();
    match bytes.next() {
        Some(b) if b.is_ascii_lowercase() => {}
        _ => return false,
    }
    bytes.all(|b| b.is_ascii_lowercase() || b == b'-')
}

fn is_name(s: &str) -> bool {
    let mut bytes = s.bytes();
    match bytes.next() {
        Some(b) if b.is_ascii_alphanumeric() => {}
        _ => return false,
    }
    bytes.all(|b| b.is_ascii_alphanumeric() || matches!(b, b'_' | b'.' | b'-'))
}

/// Returns true if `s` is `organization` or `project`.
pub fn is_root_type(s: &str) -> bool {
    s == ORGANIZATION || s == PROJECT
}

/// Validates the leading namespace segment of a canonical name.
pub fn validate_namespace(namespace: &str) -> Result<()> {
    if RESERVED_NAMESPACES.contains(&namespace) {
        tracing::debug!(namespace, "rejected reserved namespace");
        return Err(NameError::ReservedNamespace(namespace.to_string()));
    }
    if !is_lower_kebab(namespace) {
        tracing::debug!(namespace, "rejected namespace");
        return Err(NameError::InvalidNamespace(namespace.to_string()));
    }
    Ok(())
}

/// Validates a type segment.
pub fn validate_type_part(type_: &str) -> Result<()> {
    if !is_lower_kebab(type_) {
        tracing::debug!(type_, "rejected type part");
        return Err(NameError::InvalidType(type_.to_string()));
    }
    Ok(())
}

/// Validates a name segment under the given options.
///
/// `skip_name_validation` wins over `allow_wildcard_name`.
pub fn validate_name_part(name: &str, options: ParseOptions) -> Result<()> {
    if options.skip_name_validation {
        return Ok(());
    }
    if options.allow_wildcard_name {
        if name != WILDCARD {
            tracing::debug!(name, "rejected non-wildcard name part");
            return Err(NameError::WildcardRequired(name.to_string()));
        }
        return Ok(());
    }
    if !is_name(name) {
        tracing::debug!(name, "rejected name part");
        return Err(NameError::InvalidName(name.to_string()));
    }
    Ok(())
}

/// If `name` is a 2-segment root form (`organization/ID` or `project/ID`),
/// returns the root type and the ID without validating the ID.
pub(crate) fn split_root(name: &str) -> Option<(&'static str, &str)> {
    let (head, id) = name.split_once(SEPARATOR)?;
    if id.contains(SEPARATOR) {
        return None;
    }
    match head {
        ORGANIZATION => Some((ORGANIZATION, id)),
        PROJECT => Some((PROJECT, id)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("ns")]
    #[case("iam")]
    #[case("a")]
    #[case("service-principal")]
    #[case("a-")]
    #[case("a--b")]
    fn test_valid_namespace(#[case] value: &str) {
        assert!(validate_namespace(value).is_ok());
    }

    #[rstest]
    #[case("")]
    #[case("-ns")]
    #[case("Ns")]
    #[case("ns1")]
    #[case("n_s")]
    #[case("n.s")]
    #[case("ns ")]
    #[case("ns\n")]
    #[case("é")]
    fn test_invalid_namespace(#[case] value: &str) {
        assert!(matches!(
            validate_namespace(value),
            Err(NameError::InvalidNamespace(_))
        ));
    }

    #[test]
    fn test_reserved_namespace() {
        assert_eq!(
            validate_namespace("organization"),
            Err(NameError::ReservedNamespace("organization".to_string()))
        );
        assert_eq!(
            validate_namespace("project"),
            Err(NameError::ReservedNamespace("project".to_string()))
        );
        // Only the two root markers are reserved.
        assert!(validate_namespace("geo").is_ok());
    }

    #[test]
    fn test_type_part_allows_reserved_words() {
        assert!(validate_type_part("organization").is_ok());
        assert!(validate_type_part("project").is_ok());
        assert!(validate_type_part("type-one").is_ok());
        assert!(matches!(
            validate_type_part("type1"),
            Err(NameError::InvalidType(_))
        ));
        assert!(matches!(validate_type_part(""), Err(NameError::InvalidType(_))));
    }

    #[rstest]
    #[case("name1")]
    #[case("123")]
    #[case("X")]
    #[case("863063b6-c485-4cf4-8df3-6991a2ffd4b4")]
    #[case("a_b.c-d")]
    #[case("0.")]
    fn test_valid_name(#[case] value: &str) {
        assert!(validate_name_part(value, ParseOptions::STRICT).is_ok());
    }

    #[rstest]
    #[case("")]
    #[case("_a")]
    #[case(".a")]
    #[case("-a")]
    #[case("*")]
    #[case("a b")]
    #[case("a:b")]
    #[case("ä")]
    fn test_invalid_name(#[case] value: &str) {
        assert_eq!(
            validate_name_part(value, ParseOptions::STRICT),
            Err(NameError::InvalidName(value.to_string()))
        );
    }

    #[test]
    fn test_wildcard_name() {
        assert!(validate_name_part("*", ParseOptions::WILDCARD).is_ok());
        assert_eq!(
            validate_name_part("name1", ParseOptions::WILDCARD),
            Err(NameError::WildcardRequired("name1".to_string()))
        );
        assert!(validate_name_part("**", ParseOptions::WILDCARD).is_err());
    }

    #[test]
    fn test_skip_validation_accepts_anything() {
        assert!(validate_name_part("", ParseOptions::TRUSTED).is_ok());
        assert!(validate_name_part("legacy name!", ParseOptions::TRUSTED).is_ok());

        let both = ParseOptions {
            skip_name_validation: true,
            allow_wildcard_name: true,
        };
        assert!(validate_name_part("anything", both).is_ok());
    }

    #[test]
    fn test_split_root() {
        assert_eq!(split_root("organization/123"), Some((ORGANIZATION, "123")));
        assert_eq!(split_root("project/p1"), Some((PROJECT, "p1")));
        assert_eq!(split_root("project/p1/x"), None);
        assert_eq!(split_root("geo/eu"), None);
        assert_eq!(split_root("project"), None);
    }
}
