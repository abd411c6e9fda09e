//! First-class move types for tic-tac-toe.
//!
//! An accepted move is recorded as a [`Move`] in the engine history. A
//! rejected one is described by a [`MoveError`].

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Why a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The coordinates do not name a cell.
    #[display("({row}, {col}) is off the board")]
    OutOfBounds {
        /// Requested row.
        row: i32,
        /// Requested column.
        col: i32,
    },

    /// The square at the position is already occupied.
    #[display("{_0} is already occupied")]
    SquareOccupied(#[error(not(source))] Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

/// Why a serialized engine snapshot was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum SnapshotError {
    /// A recorded move could not be replayed.
    #[display("Illegal move in history: {_0}")]
    IllegalMove(MoveError),

    /// A recorded move was made by the wrong player.
    #[display("Out-of-turn move in history: {_0}")]
    #[from(skip)]
    OutOfTurn(#[error(not(source))] Move),

    /// The recorded board, player, or state disagrees with the history.
    #[display("Snapshot {_0} does not match its move history")]
    #[from(skip)]
    Mismatch(#[error(not(source))] &'static str),
}
