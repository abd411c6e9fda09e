//! Core domain types for tic-tac-toe.

use super::phases::Outcome;
use super::position::Position;
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// The player who moves first in every game.
    pub const FIRST: Player = Player::X;

    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the player occupying this square, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }

    /// Returns true if nobody has played here.
    pub fn is_empty(self) -> bool {
        matches!(self, Square::Empty)
    }
}

/// 3x3 tic-tac-toe board.
///
/// Callers outside this crate only ever see a shared reference or an owned
/// copy; writing a cell goes through [`GameEngine`](crate::GameEngine).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Gets the square at `(row, col)`, or `None` when out of range.
    pub fn at(&self, row: i32, col: i32) -> Option<Square> {
        Position::from_row_col(row, col).map(|pos| self.get(pos))
    }

    /// Sets the square at the given position.
    pub(crate) fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Returns an owned row-by-row snapshot of the board.
    pub fn rows(&self) -> [[Square; 3]; 3] {
        let mut rows = [[Square::Empty; 3]; 3];
        for pos in Position::ALL {
            rows[pos.row()][pos.col()] = self.get(pos);
        }
        rows
    }

    /// Number of occupied squares.
    pub fn occupied(&self) -> usize {
        self.squares.iter().filter(|s| !s.is_empty()).count()
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their 1-based cell number.
    pub fn display(&self) -> String {
        self.display_with(|pos| (pos.to_index() + 1).to_string())
    }

    /// Formats the board, rendering empty squares with `empty`.
    pub fn display_with(&self, empty: impl Fn(Position) -> String) -> String {
        let mut result = String::new();
        for pos in Position::ALL {
            let symbol = match self.get(pos) {
                Square::Empty => empty(pos),
                Square::Occupied(player) => player.to_string(),
            };
            result.push_str(&symbol);
            if pos.col() < 2 {
                result.push('|');
            } else if pos.row() < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameState {
    /// Game is ongoing.
    #[default]
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameState {
    /// Returns true for `Won` and `Draw`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameState::InProgress)
    }

    /// Returns the winner, if the game was won.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameState::Won(player) => Some(player),
            _ => None,
        }
    }

    /// Returns the outcome of a finished game.
    pub fn outcome(self) -> Option<Outcome> {
        match self {
            GameState::InProgress => None,
            GameState::Won(player) => Some(Outcome::Winner(player)),
            GameState::Draw => Some(Outcome::Draw),
        }
    }
}
