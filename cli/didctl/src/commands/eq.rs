//! Eq command: compare an identifier against a raw string.

use anyhow::{Context, Result};
use catalog_did::Did;
use clap::Args;
use serde::Serialize;

use crate::output::{print_single, OutputFormat};

use super::CommandContext;

/// Compare LEFT, built as an identifier, with RIGHT.
///
/// RIGHT is compared as a raw string against LEFT's canonical form unless
/// `--coerce` is given, in which case RIGHT is built as an identifier too
/// and the comparison is false if that fails.
#[derive(Debug, Args)]
pub struct EqCommand {
    left: String,
    right: String,

    /// Build RIGHT as an identifier before comparing.
    #[arg(long)]
    coerce: bool,
}

#[derive(Debug, Serialize)]
struct EqView {
    left: String,
    right: String,
    equal: bool,
}

impl EqCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let scopes = &ctx.config.implicit_scopes;
        let left = Did::parse_with(&self.left, scopes)
            .with_context(|| format!("Cannot parse '{}'", self.left))?;

        let equal = if self.coerce {
            Did::parse_with(&self.right, scopes).is_ok_and(|right| right == left)
        } else {
            left == self.right
        };

        let view = EqView {
            left: left.to_string(),
            right: self.right,
            equal,
        };
        match ctx.format {
            OutputFormat::Json => print_single(&view),
            OutputFormat::Table => println!("{}", view.equal),
        }
        Ok(())
    }
}
