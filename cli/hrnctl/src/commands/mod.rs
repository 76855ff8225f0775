//! CLI commands.

mod compose;
mod context;
mod inspect;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::output::OutputFormat;

/// hrn - Inspect and compose hierarchical resource names.
#[derive(Debug, Parser)]
#[command(name = "hrn")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (table or json). Defaults to the configured format.
    #[arg(long, global = true)]
    format: Option<String>,

    /// Organization ID.
    #[arg(long, global = true, env = "HRN_ORGANIZATION")]
    organization: Option<String>,

    /// Project ID.
    #[arg(long, global = true, env = "HRN_PROJECT")]
    project: Option<String>,

    /// Log filter, e.g. `debug` or `hrn_name=trace`. Overrides HRN_LOG.
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Emit logs as JSON.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Split a resource name into its namespace and parts.
    Parse(inspect::ParseArgs),

    /// Validate a resource name, optionally against a pattern.
    Validate(inspect::ValidateArgs),

    /// Extract the organization, project, scope or geography of a name.
    Extract(inspect::ExtractArgs),

    /// Build a resource name from a namespace and parts.
    Generate(compose::GenerateArgs),

    /// Build the `organization/ID` or `project/ID` root form.
    Root(compose::RootArgs),

    /// Append a part to a resource name.
    Push(compose::PushArgs),

    /// Remove trailing parts from a resource name.
    Pop(compose::PopArgs),

    /// Build a name under the current organization or project.
    Scoped(compose::ScopedArgs),

    /// Show or change the saved context.
    Context(context::ContextCommand),

    /// Show CLI version.
    Version,
}

impl Cli {
    pub fn log_level(&self) -> Option<&str> {
        self.log_level.as_deref()
    }

    pub fn log_json(&self) -> bool {
        self.log_json
    }

    /// Run the CLI command.
    pub fn run(self) -> Result<()> {
        let config = Config::load()?;
        let format = self
            .format
            .as_deref()
            .or(config.format.as_deref())
            .map(OutputFormat::from_name)
            .unwrap_or_default();

        let ctx = CommandContext {
            config,
            format,
            organization: self.organization,
            project: self.project,
        };

        match self.command {
            Commands::Parse(args) => inspect::parse(&ctx, args),
            Commands::Validate(args) => inspect::validate(&ctx, args),
            Commands::Extract(args) => inspect::extract(&ctx, args),
            Commands::Generate(args) => compose::generate(&ctx, args),
            Commands::Root(args) => compose::root(&ctx, args),
            Commands::Push(args) => compose::push(&ctx, args),
            Commands::Pop(args) => compose::pop(&ctx, args),
            Commands::Scoped(args) => compose::scoped(&ctx, args),
            Commands::Context(cmd) => cmd.run(ctx),
            Commands::Version => {
                println!("hrn {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

/// Shared command context.
pub struct CommandContext {
    pub config: Config,
    pub format: OutputFormat,
    pub organization: Option<String>,
    pub project: Option<String>,
}

impl CommandContext {
    /// Resolve the current organization, preferring flag over context.
    pub fn resolve_organization(&self) -> Option<&str> {
        self.organization
            .as_deref()
            .or(self.config.context.organization.as_deref())
    }

    /// Resolve the current project, preferring flag over context.
    pub fn resolve_project(&self) -> Option<&str> {
        self.project
            .as_deref()
            .or(self.config.context.project.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CliContext;

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "hrn",
            "pop",
            "ns/project/p1/type/x",
            "--format",
            "json",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(cli.format.as_deref(), Some("json"));
        assert_eq!(cli.log_level(), Some("debug"));
        assert!(matches!(cli.command, Commands::Pop(_)));
    }

    #[test]
    fn test_generate_parses_parts() {
        let cli =
            Cli::try_parse_from(["hrn", "generate", "iam", "project/p1", "service-principal/prod"])
                .unwrap();
        assert!(matches!(cli.command, Commands::Generate(_)));

        assert!(Cli::try_parse_from(["hrn", "generate", "iam"]).is_err());
        assert!(Cli::try_parse_from(["hrn", "generate", "iam", "no-separator"]).is_err());
    }

    #[test]
    fn test_requires_subcommand() {
        assert!(Cli::try_parse_from(["hrn"]).is_err());
    }

    #[test]
    fn test_flag_overrides_context() {
        let ctx = CommandContext {
            config: Config {
                format: None,
                context: CliContext {
                    organization: Some("saved-org".to_string()),
                    project: Some("saved-project".to_string()),
                },
            },
            format: OutputFormat::Table,
            organization: Some("flag-org".to_string()),
            project: None,
        };
        assert_eq!(ctx.resolve_organization(), Some("flag-org"));
        assert_eq!(ctx.resolve_project(), Some("saved-project"));
    }
}
