//! CLI commands.

mod build;
mod eq;
mod parse;
mod scopes;

use std::path::PathBuf;

use anyhow::Result;
use catalog_did::{Did, DidError};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tabled::Tabled;
use tracing::debug;

use crate::config::Config;
use crate::logging;
use crate::output::OutputFormat;

/// did - Build and check catalog data identifiers.
#[derive(Debug, Parser)]
#[command(name = "did")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (table or json).
    #[arg(long, global = true, default_value = "table")]
    format: String,

    /// Path to a TOML config file.
    #[arg(long, global = true, env = "DID_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (RUST_LOG takes precedence).
    #[arg(long, global = true, env = "DID_LOG_LEVEL")]
    log_level: Option<String>,

    /// Emit logs as JSON.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Parse `scope:name` strings.
    Parse(parse::ParseCommand),

    /// Build an identifier from positional values and keyword flags.
    Build(build::BuildCommand),

    /// Compare an identifier with a raw string.
    Eq(eq::EqCommand),

    /// Show the implicit scope table in effect.
    Scopes(scopes::ScopesCommand),
}

impl Cli {
    /// Run the CLI command.
    pub fn run(self) -> Result<()> {
        let format = OutputFormat::from_flag(&self.format);

        let config = Config::load(self.config.as_deref())?;
        let level = self
            .log_level
            .clone()
            .unwrap_or_else(|| config.log_level.clone());
        logging::init(&level, self.log_json);

        debug!(
            source = ?config.source,
            kinds = config.implicit_scopes.kinds().count(),
            "configuration loaded"
        );

        let ctx = CommandContext { config, format };

        match self.command {
            Commands::Parse(cmd) => cmd.run(&ctx),
            Commands::Build(cmd) => cmd.run(&ctx),
            Commands::Eq(cmd) => cmd.run(&ctx),
            Commands::Scopes(cmd) => cmd.run(&ctx),
        }
    }
}

/// Shared command context.
pub struct CommandContext {
    pub config: Config,
    pub format: OutputFormat,
}

/// One constructed (or rejected) identifier.
#[derive(Debug, Serialize, Tabled)]
pub struct DidRow {
    pub input: String,
    pub scope: String,
    pub name: String,
    pub did: String,
    pub error: String,
}

impl DidRow {
    pub fn from_result(input: impl Into<String>, result: &Result<Did, DidError>) -> Self {
        let input = input.into();
        match result {
            Ok(did) => Self {
                input,
                scope: did.scope().to_string(),
                name: did.name().to_string(),
                did: did.to_string(),
                error: String::new(),
            },
            Err(err) => Self {
                input,
                scope: String::new(),
                name: String::new(),
                did: String::new(),
                error: err.to_string(),
            },
        }
    }
}
