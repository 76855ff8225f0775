//! hrnctl (hrn) - CLI for hierarchical resource names
//!
//! Parses, validates and composes resource names locally. Nothing here
//! talks to a remote API.

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

    logging::init(cli.log_level(), cli.log_json());

    if let Err(e) = cli.run() {
        error::print_error(&e);
        std::process::exit(1);
    }

    Ok(())
}
