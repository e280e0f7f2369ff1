//! Build command: route loose arguments through the argument normalizer.

use anyhow::{Context, Result};
use catalog_did::{DidArgs, DidValue, DID_KEYWORD, NAME_KEY, SCOPE_KEY};
use clap::Args;
use tracing::debug;

use crate::output::{print_output, print_success, OutputFormat};

use super::{CommandContext, DidRow};

/// Build an identifier from positional values and keyword flags.
///
/// Examples:
///   did build data17 file.root
///   did build file.root --scope data17
///   did build --did '{"scope": "data17", "name": "file.root"}'
#[derive(Debug, Args)]
pub struct BuildCommand {
    /// Positional values (at most two, fewer when flags are given).
    values: Vec<String>,

    /// Scope keyword.
    #[arg(long)]
    scope: Option<String>,

    /// Name keyword.
    #[arg(long)]
    name: Option<String>,

    /// Complete identifier in any shape: JSON string, [scope, name] array,
    /// {"scope", "name"} object, or plain text.
    #[arg(long)]
    did: Option<String>,
}

impl BuildCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let args = self.to_args();
        let description = self.describe();
        debug!(arguments = args.len(), "building identifier");

        let result = args.build_with(&ctx.config.implicit_scopes);
        let row = DidRow::from_result(description.clone(), &result);
        let did = result.with_context(|| format!("Cannot build identifier from {description}"))?;

        match ctx.format {
            OutputFormat::Json => print_output(&[row], ctx.format),
            OutputFormat::Table => print_success(&did.to_string()),
        }
        Ok(())
    }

    fn describe(&self) -> String {
        let mut parts: Vec<String> = self.values.iter().map(|v| format!("'{v}'")).collect();
        if let Some(scope) = &self.scope {
            parts.push(format!("--scope '{scope}'"));
        }
        if let Some(name) = &self.name {
            parts.push(format!("--name '{name}'"));
        }
        if let Some(did) = &self.did {
            parts.push(format!("--did '{did}'"));
        }
        if parts.is_empty() {
            "no arguments".to_string()
        } else {
            parts.join(" ")
        }
    }

    fn to_args(&self) -> DidArgs {
        let mut args = DidArgs::new();
        for value in &self.values {
            args = args.arg(value.as_str());
        }
        if let Some(scope) = &self.scope {
            args = args.kwarg(SCOPE_KEY, scope.as_str());
        }
        if let Some(name) = &self.name {
            args = args.kwarg(NAME_KEY, name.as_str());
        }
        if let Some(did) = &self.did {
            args = args.kwarg(DID_KEYWORD, did_value(did));
        }
        args
    }
}

/// Reads `--did` as JSON, falling back to plain text.
fn did_value(raw: &str) -> DidValue {
    serde_json::from_str(raw).unwrap_or_else(|_| DidValue::Text(raw.to_string()))
}
