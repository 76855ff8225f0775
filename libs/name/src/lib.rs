//! # hrn-name
//!
//! Grammar engine for hierarchical resource names.
//!
//! ## Name Format
//!
//! A resource name is either canonical:
//!
//! ```text
//! namespace/type/name[/type/name...]
//! ```
//!
//! or one of two root forms:
//!
//! ```text
//! organization/ID
//! project/ID
//! ```
//!
//! Examples:
//! - `iam/project/p1/service-principal/prod`
//! - `ns/organization/123/geo/eu/bucket/logs`
//! - `organization/863063b6-c485-4cf4-8df3-6991a2ffd4b4`
//!
//! ## Design Principles
//!
//! - Every operation is pure and returns a [`Result`]; nothing is cached
//! - `parse(generate(ns, parts)) == (ns, parts)` and
//!   `generate(parse(s)) == s`
//! - Stored names are trusted on re-read: extractors and [`pop`] do not
//!   re-check name segments, [`push`] and [`generate`] always do
//!
//! ```
//! use hrn_name::{parse, pop, project_part, push, Part};
//!
//! let name = push("iam/project/p1", Part::new("service-principal", "prod")).unwrap();
//! assert_eq!(name, "iam/project/p1/service-principal/prod");
//!
//! let (namespace, parts) = parse(&name).unwrap();
//! assert_eq!(namespace, "iam");
//! assert_eq!(parts[0], project_part("p1"));
//!
//! assert_eq!(pop(&name, 1).unwrap(), "project/p1");
//! ```

mod error;
mod extract;
mod generate;
mod grammar;
mod name;
mod parse;
mod part;
mod pattern;
mod stack;

pub use error::{ErrorKind, NameError, Result};
pub use extract::{
    extract_geo, extract_organization_id, extract_organization_or_project_id,
    extract_project_id, Scope,
};
pub use generate::{generate, generate_root};
pub use grammar::{
    is_root_type, validate_name_part, validate_namespace, validate_type_part, ParseOptions, GEO,
    ORGANIZATION, PROJECT, SEPARATOR, WILDCARD,
};
pub use name::ResourceName;
pub use parse::{parse, parse_with, validate};
pub use part::{geo_part, organization_part, project_part, Part};
pub use pattern::validate_pattern;
pub use stack::{pop, push};
