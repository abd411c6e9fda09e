//! Parsing of typed player input.

use tracing::instrument;

/// One line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Place a mark. Coordinates are unchecked; the engine rejects bad ones.
    Move {
        /// Row, 0-based.
        row: i32,
        /// Column, 0-based.
        col: i32,
    },
    /// Start a new game.
    Reset,
    /// Show the help text.
    Help,
    /// Leave the session.
    Quit,
    /// Anything else.
    Unrecognized(String),
}

/// Parses `row,col` or `row col` into a coordinate pair.
#[instrument]
pub fn parse_coordinates(s: &str) -> Option<(i32, i32)> {
    let mut parts = s
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty());
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((row, col))
}

/// Parses one line of input.
#[instrument]
pub fn parse_command(line: &str) -> Command {
    let trimmed = line.trim();
    match trimmed.to_lowercase().as_str() {
        "r" | "reset" => Command::Reset,
        "h" | "help" | "?" => Command::Help,
        "q" | "quit" | "exit" => Command::Quit,
        _ => match parse_coordinates(trimmed) {
            Some((row, col)) => Command::Move { row, col },
            None => Command::Unrecognized(trimmed.to_string()),
        },
    }
}
