//! Commands that build new names.

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use hrn_name::{NameError, Part, Scope, SEPARATOR};

use crate::output::{print_single, OutputFormat};

use super::CommandContext;

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Namespace, e.g. `iam`.
    namespace: String,

    /// Parts as `type/name`, root to leaf.
    #[arg(required = true)]
    parts: Vec<Part>,
}

#[derive(Debug, Args)]
pub struct RootArgs {
    /// `organization/ID` or `project/ID`.
    part: Part,
}

#[derive(Debug, Args)]
pub struct PushArgs {
    /// Resource name in canonical form.
    name: String,

    /// Part to append, as `type/name`.
    part: Part,
}

#[derive(Debug, Args)]
pub struct PopArgs {
    /// Resource name in canonical form.
    name: String,

    /// Number of trailing parts to remove.
    #[arg(short = 'n', long = "num-parts", default_value_t = 1)]
    num_parts: usize,
}

#[derive(Debug, Args)]
pub struct ScopedArgs {
    /// Namespace, e.g. `iam`.
    namespace: String,

    /// Trailing `type/name[/type/name...]` parts. May be empty.
    #[arg(default_value = "")]
    suffix: String,

    /// Scope the name under the organization or the project. Defaults to
    /// the project when one is set.
    #[arg(long = "in", value_enum)]
    scope: Option<ScopeKind>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ScopeKind {
    Organization,
    Project,
}

fn print_name(ctx: &CommandContext, name: &str) {
    match ctx.format {
        OutputFormat::Json => print_single(&serde_json::json!({ "name": name })),
        OutputFormat::Table => println!("{name}"),
    }
}

pub fn generate(ctx: &CommandContext, args: GenerateArgs) -> Result<()> {
    let name = hrn_name::generate(&args.namespace, &args.parts)?;
    print_name(ctx, &name);
    Ok(())
}

pub fn root(ctx: &CommandContext, args: RootArgs) -> Result<()> {
    let name = hrn_name::generate_root(&args.part)?;
    print_name(ctx, &name);
    Ok(())
}

pub fn push(ctx: &CommandContext, args: PushArgs) -> Result<()> {
    let name = hrn_name::push(&args.name, args.part)?;
    print_name(ctx, &name);
    Ok(())
}

pub fn pop(ctx: &CommandContext, args: PopArgs) -> Result<()> {
    let name = hrn_name::pop(&args.name, args.num_parts)?;
    print_name(ctx, &name);
    Ok(())
}

pub fn scoped(ctx: &CommandContext, args: ScopedArgs) -> Result<()> {
    let scope = resolve_scope(ctx, args.scope)?;
    tracing::debug!(scope_type = scope.type_(), id = scope.id(), "resolved scope");
    let name = scoped_name(&args.namespace, scope, &args.suffix)
        .with_context(|| format!("Failed to build a name in namespace '{}'", args.namespace))?;
    print_name(ctx, &name);
    Ok(())
}

fn resolve_scope(ctx: &CommandContext, kind: Option<ScopeKind>) -> Result<Scope> {
    let organization = ctx.resolve_organization();
    let project = ctx.resolve_project();

    let scope = match (kind, organization, project) {
        (Some(ScopeKind::Organization), Some(id), _) => Scope::Organization(id.to_string()),
        (Some(ScopeKind::Organization), None, _) => anyhow::bail!(
            "No organization specified. Use --organization or `hrn context set organization <ID>`."
        ),
        (Some(ScopeKind::Project), _, Some(id)) | (None, _, Some(id)) => {
            Scope::Project(id.to_string())
        }
        (Some(ScopeKind::Project), _, None) => anyhow::bail!(
            "No project specified. Use --project or `hrn context set project <ID>`."
        ),
        (None, Some(id), None) => Scope::Organization(id.to_string()),
        (None, None, None) => anyhow::bail!(
            "No organization or project specified. Use --organization/--project or set a default context."
        ),
    };
    Ok(scope)
}

/// Builds `namespace/<scope type>/<scope id>/<suffix>` and validates it.
fn scoped_name(namespace: &str, scope: Scope, suffix: &str) -> Result<String, NameError> {
    let mut parts = vec![Part::new(scope.type_(), scope.id())];
    if !suffix.is_empty() {
        let segments: Vec<&str> = suffix.split(SEPARATOR).collect();
        if segments.len() % 2 != 0 {
            return Err(NameError::Structural);
        }
        parts.extend(
            segments
                .chunks_exact(2)
                .map(|pair| Part::new(pair[0], pair[1])),
        );
    }
    hrn_name::generate(namespace, &parts)
}
