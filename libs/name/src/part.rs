//! A single `(type, name)` level of a resource name hierarchy.

use serde::{Deserialize, Serialize};

use crate::error::{NameError, Result};
use crate::grammar::{GEO, ORGANIZATION, PROJECT, SEPARATOR};

/// One hierarchy level, e.g. `project/p1`.
///
/// Constructing a `Part` performs no validation; segments are checked when
/// the part is passed through [`generate`](crate::generate) or
/// [`push`](crate::push).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Part {
    #[serde(rename = "type")]
    pub type_: String,
    pub name: String,
}

impl Part {
    pub fn new(type_: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            type_: type_.into(),
            name: name.into(),
        }
    }

    /// Returns the type segment.
    pub fn type_(&self) -> &str {
        &self.type_
    }

    /// Returns the name segment.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Part with type `organization`.
pub fn organization_part(id: impl Into<String>) -> Part {
    Part::new(ORGANIZATION, id)
}

/// Part with type `project`.
pub fn project_part(id: impl Into<String>) -> Part {
    Part::new(PROJECT, id)
}

/// Part with type `geo`.
pub fn geo_part(geo: impl Into<String>) -> Part {
    Part::new(GEO, geo)
}

impl std::fmt::Display for Part {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.type_, SEPARATOR, self.name)
    }
}

impl std::str::FromStr for Part {
    type Err = NameError;

    /// Splits `type/name`. Segments are not validated here.
    fn from_str(s: &str) -> Result<Self> {
        match s.split_once(SEPARATOR) {
            Some((type_, name)) if !name.contains(SEPARATOR) => Ok(Self::new(type_, name)),
            _ => Err(NameError::Structural),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_helpers_set_reserved_types() {
        assert_eq!(organization_part("123"), Part::new("organization", "123"));
        assert_eq!(project_part("p1"), Part::new("project", "p1"));
        assert_eq!(geo_part("eu"), Part::new("geo", "eu"));
    }

    #[test]
    fn test_helpers_do_not_validate() {
        let part = organization_part("not valid!");
        assert_eq!(part.name(), "not valid!");
    }

    #[test]
    fn test_display_and_from_str() {
        let part: Part = "type-one/name1".parse().unwrap();
        assert_eq!(part, Part::new("type-one", "name1"));
        assert_eq!(part.to_string(), "type-one/name1");

        assert!("type-one".parse::<Part>().is_err());
        assert!("a/b/c".parse::<Part>().is_err());
    }

    #[test]
    fn test_json_uses_type_field() {
        let part = project_part("p1");
        let json = serde_json::to_string(&part).unwrap();
        assert_eq!(json, r#"{"type":"project","name":"p1"}"#);
        let parsed: Part = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, part);
    }
}
