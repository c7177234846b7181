//! Terminal front end for noughts.
//!
//! Parses flags, loads settings, sets up tracing and wires the terminal
//! input and renderer into [`noughts_core::MatchController`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod settings;
pub mod terminal;

use anyhow::{Context, Result};
use cli::Cli;
use noughts_core::{InputProvider, MatchController, MatchError, MatchSummary, Renderer, RngSource};
use settings::Settings;
use std::path::Path;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

/// Sends trace output to `path` so it never mixes with the game screen.
pub fn init_tracing(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("Failed to install tracing subscriber")
}

/// Plays matches until the player declines or input ends.
///
/// Closing the input is a normal way to leave and is not an error.
#[instrument(skip_all, fields(seed = ?seed))]
pub fn play<I, S>(
    settings: &Settings,
    seed: Option<u64>,
    input: &mut I,
    renderer: &mut S,
) -> Result<Vec<MatchSummary>>
where
    I: InputProvider,
    S: Renderer,
{
    let random = seed.map_or_else(RngSource::from_entropy, RngSource::seeded);
    let mut controller = MatchController::new(settings.game, random)?;
    info!(config = ?controller.config(), "Controller ready");

    match controller.run(input, renderer) {
        Ok(summaries) => Ok(summaries),
        Err(MatchError::Input(_)) => {
            info!("Input closed, leaving");
            Ok(Vec::new())
        }
        Err(e) => Err(e).context("Match aborted"),
    }
}

/// Entry point shared by the binary: settings, tracing, then play on the
/// process terminal.
pub fn run(cli: &Cli) -> Result<()> {
    use std::io::{IsTerminal, Write};

    let settings = Settings::load(&cli.config)?.with_overrides(cli)?;
    init_tracing(&settings.log_path())?;
    info!(config = ?settings.game, "Starting noughts");

    let stdout = std::io::stdout();
    let clear = !cli.no_clear && stdout.is_terminal();
    let mut input = terminal::TerminalInput::new(std::io::stdin().lock(), stdout.lock(), clear);
    let mut renderer = terminal::TerminalRenderer::new(std::io::stdout(), clear);

    let summaries = play(&settings, cli.seed, &mut input, &mut renderer)?;
    info!(matches = summaries.len(), "Finished");

    let mut out = std::io::stdout();
    writeln!(out, "=> Thanks for playing Tic Tac Toe. Good bye!")?;
    Ok(())
}
