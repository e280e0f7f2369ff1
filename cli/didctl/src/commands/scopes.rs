//! Scopes command: show the implicit scope table.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::output::{print_info, print_output, OutputFormat};

use super::CommandContext;

/// Show which name prefixes carry an implicit scope.
#[derive(Debug, Args)]
pub struct ScopesCommand {}

#[derive(Debug, Serialize, Tabled)]
struct ScopeRow {
    kind: String,
    segments: usize,
    example: String,
}

impl ScopesCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let rows: Vec<ScopeRow> = ctx
            .config
            .implicit_scopes
            .kinds()
            .filter(|(_, segments)| *segments > 0)
            .map(|(kind, segments)| ScopeRow {
                kind: kind.to_string(),
                segments,
                example: example_name(kind, segments),
            })
            .collect();

        if ctx.format == OutputFormat::Table {
            let source = match &ctx.config.source {
                Some(path) => path.display().to_string(),
                None => "built-in defaults".to_string(),
            };
            print_info(&format!("implicit scopes from {source}"));
        }
        print_output(&rows, ctx.format);
        Ok(())
    }
}

/// `user.x.name` style example for a kind with `segments` scope segments.
fn example_name(kind: &str, segments: usize) -> String {
    let mut parts = vec![kind.to_string()];
    parts.extend((1..segments).map(|i| format!("s{i}")));
    parts.push("name".to_string());
    parts.join(".")
}
