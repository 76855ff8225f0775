//! Appending and stripping trailing parts.

use crate::error::{NameError, Result};
use crate::generate::{generate, join};
use crate::grammar::{is_root_type, ParseOptions};
use crate::parse::{parse, parse_with};
use crate::part::Part;

/// Strips the last `num_parts` parts from `name`.
///
/// When exactly one `organization` or `project` part remains, the result
/// collapses to its root form and the namespace is dropped. A single part of
/// any other type keeps the full `namespace/type/name` form.
pub fn pop(name: &str, num_parts: usize) -> Result<String> {
    if num_parts == 0 {
        return Err(NameError::PopZero);
    }

    let (namespace, mut parts) = parse_with(name, ParseOptions::TRUSTED)?;
    let available = parts.len();
    if num_parts >= available {
        return Err(NameError::PopOutOfBounds {
            num_parts,
            available,
        });
    }
    parts.truncate(available - num_parts);

    if let [root] = parts.as_slice() {
        if is_root_type(&root.type_) {
            tracing::trace!(name, root = %root, "collapsed to root form");
            return Ok(root.to_string());
        }
    }
    Ok(join(&namespace, &parts))
}

/// Appends `part` to `name`. Both are fully validated.
pub fn push(name: &str, part: Part) -> Result<String> {
    let (namespace, mut parts) = parse(name)?;
    parts.push(part);
    generate(&namespace, &parts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::part::{geo_part, project_part};

    #[test]
    fn test_pop_collapses_project() {
        assert_eq!(
            pop("namespace/project/p1/type-two/name2/type-three/name3", 2).unwrap(),
            "project/p1"
        );
    }

    #[test]
    fn test_pop_collapses_organization() {
        assert_eq!(
            pop("namespace/organization/o1/type-two/name2", 1).unwrap(),
            "organization/o1"
        );
    }

    #[test]
    fn test_pop_keeps_other_single_part() {
        assert_eq!(
            pop("namespace/type-one/name1/type-two/name2", 1).unwrap(),
            "namespace/type-one/name1"
        );
        assert_eq!(
            pop("namespace/geo/eu/type-two/name2", 1).unwrap(),
            "namespace/geo/eu"
        );
    }

    #[test]
    fn test_pop_multiple_remaining() {
        assert_eq!(
            pop("ns/project/p1/type-two/name2/type-three/name3", 1).unwrap(),
            "ns/project/p1/type-two/name2"
        );
    }

    #[test]
    fn test_pop_bounds() {
        assert_eq!(pop("ns/type/a/type/b", 0), Err(NameError::PopZero));
        assert_eq!(
            pop("ns/type/a/type/b", 2),
            Err(NameError::PopOutOfBounds {
                num_parts: 2,
                available: 2
            })
        );
        assert!(matches!(
            pop("ns/type/a", 5),
            Err(NameError::PopOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_pop_root_form_is_structural() {
        assert_eq!(pop("project/p1", 1), Err(NameError::Structural));
    }

    #[test]
    fn test_pop_trusts_existing_names() {
        assert_eq!(
            pop("ns/type/legacy name/type/x", 1).unwrap(),
            "ns/type/legacy name"
        );
    }

    #[test]
    fn test_push() {
        assert_eq!(
            push("namespace/type-one/name1", Part::new("type-two", "name2")).unwrap(),
            "namespace/type-one/name1/type-two/name2"
        );
        assert_eq!(
            push("ns/project/p1", geo_part("eu")).unwrap(),
            "ns/project/p1/geo/eu"
        );
    }

    #[test]
    fn test_push_validates() {
        assert_eq!(
            push("ns/type/legacy name", project_part("p1")),
            Err(NameError::InvalidName("legacy name".to_string()))
        );
        assert_eq!(
            push("ns/type/a", Part::new("type", "bad/name")),
            Err(NameError::InvalidName("bad/name".to_string()))
        );
        assert_eq!(push("project/p1", geo_part("eu")), Err(NameError::Structural));
    }
}
