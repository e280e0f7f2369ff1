//! Parse command: construct identifiers from `scope:name` strings.

use anyhow::Result;
use catalog_did::Did;
use clap::Args;
use tracing::info;

use crate::error::CliError;
use crate::output::print_output;

use super::{CommandContext, DidRow};

/// Parse one or more identifier strings.
#[derive(Debug, Args)]
pub struct ParseCommand {
    /// Identifiers, e.g. `data17:file.root` or `user.jdoe.dataset`.
    #[arg(required = true)]
    dids: Vec<String>,
}

impl ParseCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let scopes = &ctx.config.implicit_scopes;
        let rows: Vec<DidRow> = self
            .dids
            .iter()
            .map(|input| DidRow::from_result(input.as_str(), &Did::parse_with(input, scopes)))
            .collect();

        let failed = rows.iter().filter(|row| !row.error.is_empty()).count();
        info!(total = rows.len(), failed, "parsed identifiers");

        print_output(&rows, ctx.format);

        if failed > 0 {
            return Err(CliError::Rejected {
                failed,
                total: rows.len(),
            }
            .into());
        }
        Ok(())
    }
}
