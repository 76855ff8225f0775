//! Test support for hrn.
//!
//! The `must_*` helpers panic on error and exist for tests and fixtures
//! only; production code uses the fallible functions in `hrn_name`.
//! [`strategies`] generates valid inputs for property tests.

use hrn_name::{Part, Scope};

pub mod strategies;

#[track_caller]
pub fn must_parse(name: &str) -> (String, Vec<Part>) {
    hrn_name::parse(name).unwrap_or_else(|e| panic!("parse({name:?}): {e}"))
}

#[track_caller]
pub fn must_generate(namespace: &str, parts: &[Part]) -> String {
    hrn_name::generate(namespace, parts)
        .unwrap_or_else(|e| panic!("generate({namespace:?}, {parts:?}): {e}"))
}

#[track_caller]
pub fn must_push(name: &str, part: Part) -> String {
    hrn_name::push(name, part).unwrap_or_else(|e| panic!("push({name:?}): {e}"))
}

#[track_caller]
pub fn must_pop(name: &str, num_parts: usize) -> String {
    hrn_name::pop(name, num_parts).unwrap_or_else(|e| panic!("pop({name:?}, {num_parts}): {e}"))
}

#[track_caller]
pub fn must_extract_organization_id(name: &str) -> String {
    hrn_name::extract_organization_id(name)
        .unwrap_or_else(|e| panic!("extract_organization_id({name:?}): {e}"))
}

#[track_caller]
pub fn must_extract_project_id(name: &str) -> String {
    hrn_name::extract_project_id(name)
        .unwrap_or_else(|e| panic!("extract_project_id({name:?}): {e}"))
}

#[track_caller]
pub fn must_extract_organization_or_project_id(name: &str) -> Scope {
    hrn_name::extract_organization_or_project_id(name)
        .unwrap_or_else(|e| panic!("extract_organization_or_project_id({name:?}): {e}"))
}

#[track_caller]
pub fn must_extract_geo(name: &str) -> String {
    hrn_name::extract_geo(name).unwrap_or_else(|e| panic!("extract_geo({name:?}): {e}"))
}
