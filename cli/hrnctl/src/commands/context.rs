//! Context commands (saved default organization and project).

use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use hrn_name::{validate_name_part, ParseOptions};
use serde::Serialize;

use crate::config::Config;
use crate::output::{print_single, print_success, OutputFormat};

use super::CommandContext;

/// Manage saved CLI context.
#[derive(Debug, Args)]
pub struct ContextCommand {
    #[command(subcommand)]
    command: ContextSubcommand,
}

#[derive(Debug, Subcommand)]
enum ContextSubcommand {
    /// Show the saved context.
    Show,

    /// Save a default organization or project ID.
    Set(SetArgs),

    /// Clear the saved context.
    Clear,
}

#[derive(Debug, Args)]
struct SetArgs {
    #[arg(value_enum)]
    key: ContextKey,

    /// Organization or project ID.
    id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ContextKey {
    Organization,
    Project,
}

#[derive(Debug, Serialize)]
struct ContextView<'a> {
    organization: Option<&'a str>,
    project: Option<&'a str>,
}

impl ContextCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        match self.command {
            ContextSubcommand::Show => show(&ctx),
            ContextSubcommand::Set(args) => set(ctx, args),
            ContextSubcommand::Clear => clear(ctx),
        }
    }
}

fn show(ctx: &CommandContext) -> Result<()> {
    let view = ContextView {
        organization: ctx.resolve_organization(),
        project: ctx.resolve_project(),
    };

    match ctx.format {
        OutputFormat::Json => print_single(&view),
        OutputFormat::Table => {
            println!("organization: {}", view.organization.unwrap_or("-"));
            println!("project: {}", view.project.unwrap_or("-"));
        }
    }
    Ok(())
}

fn apply(config: &mut Config, key: ContextKey, id: String) -> Result<()> {
    validate_name_part(&id, ParseOptions::STRICT)
        .with_context(|| format!("'{id}' is not a valid ID"))?;
    match key {
        ContextKey::Organization => config.context.organization = Some(id),
        ContextKey::Project => config.context.project = Some(id),
    }
    Ok(())
}

fn set(mut ctx: CommandContext, args: SetArgs) -> Result<()> {
    let key = args.key;
    apply(&mut ctx.config, key, args.id)?;
    ctx.config.save()?;

    match ctx.format {
        OutputFormat::Json => print_single(&serde_json::json!({ "ok": true })),
        OutputFormat::Table => print_success(match key {
            ContextKey::Organization => "Saved default organization",
            ContextKey::Project => "Saved default project",
        }),
    }
    Ok(())
}

fn clear(mut ctx: CommandContext) -> Result<()> {
    ctx.config.context.organization = None;
    ctx.config.context.project = None;
    ctx.config.save()?;

    match ctx.format {
        OutputFormat::Json => print_single(&serde_json::json!({ "ok": true })),
        OutputFormat::Table => print_success("Cleared saved context"),
    }
    Ok(())
}
