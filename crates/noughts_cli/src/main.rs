//! Noughts - first-to-N tic-tac-toe against the computer.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use noughts_cli::cli::Cli;

fn main() -> Result<()> {
    // Load .env file (RUST_LOG)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    noughts_cli::run(&cli)
}
