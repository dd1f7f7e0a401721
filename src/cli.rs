//! CLI argument parsing with clap derive

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;
use crate::manifest::Manifest;
use crate::output::OutputContext;

/// Wire Supabase authentication into Open Agent Platform agent repositories
#[derive(Parser)]
#[command(name = "oap-setup", version, propagate_version = true)]
pub struct Cli {
    /// Output the summary in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR", value_parser = clap::builder::FalseyValueParser::new())]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Verify configured agents, provision the rest, print a summary (default)
    Setup,

    /// Check agents that should already carry an auth handler
    Verify,

    /// Provision agents that are missing an auth handler
    Provision,

    /// Show version
    Version,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error only for the fatal preflight failure (missing auth
    /// template) or when the base repositories directory cannot be resolved.
    /// Per-repository failures are reported and reflected in the summary
    /// counts, never in the exit status.
    pub fn run(self) -> Result<()> {
        let Cli { json, quiet, no_color, command } = self;
        // JSON mode keeps stdout machine-readable; progress goes quiet and
        // errors still reach stderr.
        let ctx = OutputContext::new(no_color, quiet || json);
        match command.unwrap_or(Command::Setup) {
            Command::Setup => {
                let manifest = Manifest::from_env()?;
                commands::setup::run(&ctx, &manifest, json)
            }
            Command::Verify => {
                let manifest = Manifest::from_env()?;
                commands::verify::run(&ctx, &manifest, json)
            }
            Command::Provision => {
                let manifest = Manifest::from_env()?;
                commands::provision::run(&ctx, &manifest, json)
            }
            Command::Version => {
                commands::version::run(json);
                Ok(())
            }
        }
    }
}
