//! Proptest strategies producing valid resource name components.

use hrn_name::{Part, ORGANIZATION, PROJECT};
use proptest::prelude::*;

/// Any string matching `^[a-z][a-z-]*$`.
pub fn type_segment() -> impl Strategy<Value = String> {
    "[a-z][a-z-]{0,15}"
}

/// A type segment that is also a legal namespace.
pub fn namespace() -> impl Strategy<Value = String> {
    type_segment().prop_filter("reserved namespace", |ns| ns != ORGANIZATION && ns != PROJECT)
}

/// Any string matching `^[A-Za-z0-9][A-Za-z0-9_.-]*$`.
pub fn name_segment() -> impl Strategy<Value = String> {
    "[A-Za-z0-9][A-Za-z0-9_.-]{0,23}"
}

pub fn part() -> impl Strategy<Value = Part> {
    (type_segment(), name_segment()).prop_map(|(type_, name)| Part::new(type_, name))
}

/// Between one and `max` parts.
pub fn parts(max: usize) -> impl Strategy<Value = Vec<Part>> {
    prop::collection::vec(part(), 1..=max)
}
