//! Command-line interface for strictly_console.

use clap::Parser;
use std::path::PathBuf;

/// Strictly Console - tic-tac-toe against a scripted or random computer
#[derive(Parser, Debug)]
#[command(name = "strictly_console")]
#[command(about = "Play tic-tac-toe against the computer in your terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Game configuration (JSON, or TOML with a .toml extension).
    /// Without one, a blank 3x3 board with the player as X is used.
    pub config: Option<PathBuf>,

    /// Seed for the computer's random moves, for reproducible games
    #[arg(long)]
    pub seed: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments() {
        let cli = Cli::try_parse_from(["strictly_console"]).unwrap();
        assert!(cli.config.is_none());
        assert!(cli.seed.is_none());
    }

    #[test]
    fn test_config_and_seed() {
        let cli = Cli::try_parse_from(["strictly_console", "game.json", "--seed", "9"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("game.json")));
        assert_eq!(cli.seed, Some(9));
    }

    #[test]
    fn test_extra_positional_rejected() {
        assert!(Cli::try_parse_from(["strictly_console", "a.json", "b.json"]).is_err());
    }
}
