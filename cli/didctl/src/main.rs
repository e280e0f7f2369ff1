//! didctl (did) - CLI for catalog data identifiers
//!
//! Builds identifiers from command-line input the same way catalog services
//! do, so that parsing questions can be answered without a running server.

use anyhow::Result;
use clap::Parser;

mod commands;
mod config;
mod error;
mod logging;
mod output;

use commands::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = cli.run() {
        error::print_error(&e);
        std::process::exit(1);
    }

    Ok(())
}
