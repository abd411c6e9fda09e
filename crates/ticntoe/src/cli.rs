//! Command-line interface for ticntoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// TicnToe - two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "ticntoe")]
#[command(about = "Hot-seat tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (optional; defaults apply if missing)
    #[arg(short, long, default_value = "ticntoe.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game, both players at the same keyboard
    Play,

    /// Apply a list of moves to a fresh game and print the result
    Replay {
        /// Moves as `row,col` pairs, X first
        #[arg(required = true, allow_hyphen_values = true)]
        moves: Vec<String>,

        /// Print the final engine snapshot as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_play_with_default_config() {
        let cli = Cli::try_parse_from(["ticntoe", "play"]).expect("valid args");
        assert!(matches!(cli.command, Command::Play));
        assert_eq!(cli.config, PathBuf::from("ticntoe.toml"));
    }

    #[test]
    fn test_parse_replay() {
        let cli = Cli::try_parse_from([
            "ticntoe", "--config", "custom.toml", "replay", "--json", "0,0", "-1,2",
        ])
        .expect("valid args");
        assert_eq!(cli.config, PathBuf::from("custom.toml"));
        match cli.command {
            Command::Replay { moves, json } => {
                assert_eq!(moves, vec!["0,0".to_string(), "-1,2".to_string()]);
                assert!(json);
            }
            Command::Play => panic!("expected replay"),
        }
    }

    #[test]
    fn test_replay_requires_moves() {
        assert!(Cli::try_parse_from(["ticntoe", "replay"]).is_err());
    }
}
