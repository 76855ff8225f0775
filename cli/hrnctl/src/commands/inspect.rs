//! Read-only commands: parse, validate, extract.

use anyhow::Result;
use clap::{Args, ValueEnum};
use hrn_name::{ParseOptions, Part, Scope};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{print_info, print_output, print_single, print_success, OutputFormat};

use super::CommandContext;

#[derive(Debug, Args)]
pub struct ParseArgs {
    /// Resource name in canonical form.
    name: String,

    /// Do not validate name segments (for stored or legacy values).
    #[arg(long)]
    trusted: bool,
}

#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Resource name.
    name: String,

    /// Pattern whose name segments are `*`, e.g. `iam/project/*/service-principal/*`.
    #[arg(long)]
    pattern: Option<String>,
}

#[derive(Debug, Args)]
pub struct ExtractArgs {
    /// What to extract.
    #[arg(value_enum)]
    target: ExtractTarget,

    /// Resource name.
    name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ExtractTarget {
    Organization,
    Project,
    /// Whichever of organization or project owns the name.
    Scope,
    Geo,
}

#[derive(Debug, Serialize)]
struct ParsedName {
    namespace: String,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Tabled)]
struct PartRow {
    #[tabled(rename = "#")]
    index: usize,

    #[tabled(rename = "Type")]
    #[serde(rename = "type")]
    type_: String,

    #[tabled(rename = "Name")]
    name: String,
}

fn part_rows(parts: &[Part]) -> Vec<PartRow> {
    parts
        .iter()
        .enumerate()
        .map(|(index, part)| PartRow {
            index,
            type_: part.type_.clone(),
            name: part.name.clone(),
        })
        .collect()
}

pub fn parse(ctx: &CommandContext, args: ParseArgs) -> Result<()> {
    let options = if args.trusted {
        ParseOptions::TRUSTED
    } else {
        ParseOptions::STRICT
    };
    let (namespace, parts) = hrn_name::parse_with(&args.name, options)?;

    match ctx.format {
        OutputFormat::Json => print_single(&ParsedName { namespace, parts }),
        OutputFormat::Table => {
            print_info(&format!("namespace: {namespace}"));
            print_output(&part_rows(&parts), ctx.format);
        }
    }
    Ok(())
}

pub fn validate(ctx: &CommandContext, args: ValidateArgs) -> Result<()> {
    match args.pattern.as_deref() {
        Some(pattern) => hrn_name::validate_pattern(&args.name, pattern)?,
        None => hrn_name::validate(&args.name)?,
    }

    match ctx.format {
        OutputFormat::Json => print_single(&serde_json::json!({ "valid": true })),
        OutputFormat::Table => match args.pattern {
            Some(pattern) => print_success(&format!("{} matches {}", args.name, pattern)),
            None => print_success(&format!("{} is valid", args.name)),
        },
    }
    Ok(())
}

pub fn extract(ctx: &CommandContext, args: ExtractArgs) -> Result<()> {
    let name = args.name.as_str();
    let scope = match args.target {
        ExtractTarget::Organization => {
            Scope::Organization(hrn_name::extract_organization_id(name)?)
        }
        ExtractTarget::Project => Scope::Project(hrn_name::extract_project_id(name)?),
        ExtractTarget::Scope => hrn_name::extract_organization_or_project_id(name)?,
        ExtractTarget::Geo => {
            let geo = hrn_name::extract_geo(name)?;
            match ctx.format {
                OutputFormat::Json => print_single(&serde_json::json!({ "geo": geo })),
                OutputFormat::Table => println!("{geo}"),
            }
            return Ok(());
        }
    };

    match ctx.format {
        OutputFormat::Json => print_single(&scope),
        OutputFormat::Table => println!("{}", scope.id()),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_rows() {
        let rows = part_rows(&[hrn_name::project_part("p1"), Part::new("type", "x")]);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].index, 1);
        assert_eq!(rows[0].type_, "project");
        assert_eq!(rows[1].name, "x");
    }
}
