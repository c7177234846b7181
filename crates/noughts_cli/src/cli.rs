//! Command-line interface for noughts.

use clap::Parser;
use noughts_core::FirstMoverPolicy;
use std::path::PathBuf;
use std::str::FromStr;

/// Noughts - first to five tic-tac-toe against the computer
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "noughts")]
#[command(about = "Play first-to-N tic-tac-toe against the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file (ignored if it does not exist)
    #[arg(short, long, default_value = "noughts.toml")]
    pub config: PathBuf,

    /// Round wins needed to take the match
    #[arg(short, long)]
    pub winning_score: Option<u32>,

    /// Who opens each match: human, computer or ask
    #[arg(short, long, value_parser = parse_policy)]
    pub first_mover: Option<FirstMoverPolicy>,

    /// Seed for the computer's random moves (reproducible games)
    #[arg(long)]
    pub seed: Option<u64>,

    /// File receiving trace output
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Never clear the terminal between screens
    #[arg(long)]
    pub no_clear: bool,
}

fn parse_policy(s: &str) -> Result<FirstMoverPolicy, String> {
    FirstMoverPolicy::from_str(s.trim())
        .map_err(|_| format!("unknown first mover '{}' (expected human, computer or ask)", s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["noughts"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("noughts.toml"));
        assert_eq!(cli.winning_score, None);
        assert_eq!(cli.first_mover, None);
        assert!(!cli.no_clear);
    }

    #[test]
    fn test_overrides_parse() {
        let cli = Cli::try_parse_from([
            "noughts",
            "--winning-score",
            "3",
            "--first-mover",
            "computer",
            "--seed",
            "42",
        ])
        .unwrap();
        assert_eq!(cli.winning_score, Some(3));
        assert_eq!(cli.first_mover, Some(FirstMoverPolicy::AlwaysComputer));
        assert_eq!(cli.seed, Some(42));
    }

    #[test]
    fn test_bad_policy_rejected() {
        assert!(Cli::try_parse_from(["noughts", "--first-mover", "coin"]).is_err());
    }
}
