//! The game-state engine.
//!
//! [`GameEngine`] is the only stateful piece of the crate. It is a plain
//! owned value; the presentation layer holds one and drives it through
//! `&mut self` methods.

use super::action::{Move, MoveError, SnapshotError};
use super::invariants::{EngineInvariants, InvariantSet};
use super::phases::Outcome;
use super::rules;
use super::{Board, GameState, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// What an accepted move did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Game continues; `next` is now to move.
    Continue {
        /// The player whose turn it is now.
        next: Player,
    },
    /// The move ended the game.
    Finished(Outcome),
}

/// Authoritative board and turn state for a single game.
///
/// Deserializing replays the recorded history, so a snapshot whose board,
/// player, or state disagrees with its moves is refused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EngineSnapshot")]
pub struct GameEngine {
    pub(crate) board: Board,
    pub(crate) current_player: Player,
    pub(crate) state: GameState,
    pub(crate) history: Vec<Move>,
}

impl GameEngine {
    /// Creates a new game: empty board, `X` to move, in progress.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::FIRST,
            state: GameState::InProgress,
            history: Vec::new(),
        }
    }

    /// Rebuilds a game by applying `moves` in order to a fresh engine.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::OutOfTurn`] if a move names the wrong player
    /// and [`SnapshotError::IllegalMove`] if the engine rejects one.
    #[instrument(skip(moves), fields(count = moves.len()))]
    pub fn replay(moves: &[Move]) -> Result<Self, SnapshotError> {
        let mut engine = Self::new();
        for mov in moves {
            if mov.player() != engine.current_player {
                return Err(SnapshotError::OutOfTurn(*mov));
            }
            let pos = mov.position();
            engine.try_move(pos.row() as i32, pos.col() as i32)?;
        }
        Ok(engine)
    }

    /// Places the active player's mark at `(row, col)`.
    ///
    /// Returns `false` and leaves the engine untouched when the coordinates
    /// are off the board, the square is taken, or the game is over.
    pub fn apply_move(&mut self, row: i32, col: i32) -> bool {
        self.try_move(row, col).is_ok()
    }

    /// Places the active player's mark at `(row, col)`, reporting why a
    /// rejected move was rejected.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] once the game is won or drawn.
    /// - [`MoveError::OutOfBounds`] if either coordinate is outside `0..3`.
    /// - [`MoveError::SquareOccupied`] if the square is already taken.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn try_move(&mut self, row: i32, col: i32) -> Result<Transition, MoveError> {
        let pos = self.check_move(row, col).inspect_err(|error| {
            debug!(%error, "Move rejected");
        })?;

        let player = self.current_player;
        self.board.set(pos, Square::Occupied(player));
        self.history.push(Move::new(player, pos));

        // Win is checked before draw: a full board with a line is a win.
        let transition = if rules::has_line(&self.board, player) {
            self.state = GameState::Won(player);
            info!(%player, "Game won");
            Transition::Finished(Outcome::Winner(player))
        } else if rules::is_full(&self.board) {
            self.state = GameState::Draw;
            info!("Game drawn");
            Transition::Finished(Outcome::Draw)
        } else {
            self.current_player = player.opponent();
            debug!(position = %pos, next = %self.current_player, "Move applied");
            Transition::Continue {
                next: self.current_player,
            }
        };

        debug_assert!(
            EngineInvariants::check_all(&*self).is_ok(),
            "Engine invariants violated after {:?}",
            self.history.last()
        );

        Ok(transition)
    }

    fn check_move(&self, row: i32, col: i32) -> Result<Position, MoveError> {
        if self.state.is_terminal() {
            return Err(MoveError::GameOver);
        }
        let pos = Position::from_row_col(row, col).ok_or(MoveError::OutOfBounds { row, col })?;
        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }
        Ok(pos)
    }

    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is (or who just won).
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game state.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Returns the accepted moves of the current game, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the empty squares still available to play.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.state.is_terminal() {
            return Vec::new();
        }
        Position::valid_moves(&self.board)
    }

    /// One-line description of the game for a status label.
    pub fn status_line(&self) -> String {
        match self.state.outcome() {
            Some(outcome) => outcome.to_string(),
            None => format!("Player {}'s Turn", self.current_player),
        }
    }

    /// Returns the engine to its freshly constructed state.
    #[instrument(skip(self), fields(state = ?self.state, moves = self.history.len()))]
    pub fn reset(&mut self) {
        *self = Self::new();
        info!("Game reset");
    }
}

/// Wire form of [`GameEngine`], checked before it becomes one.
#[derive(Deserialize)]
struct EngineSnapshot {
    board: Board,
    current_player: Player,
    state: GameState,
    history: Vec<Move>,
}

impl TryFrom<EngineSnapshot> for GameEngine {
    type Error = SnapshotError;

    fn try_from(snapshot: EngineSnapshot) -> Result<Self, Self::Error> {
        let engine = Self::replay(&snapshot.history)?;
        if engine.board != snapshot.board {
            return Err(SnapshotError::Mismatch("board"));
        }
        if engine.current_player != snapshot.current_player {
            return Err(SnapshotError::Mismatch("current player"));
        }
        if engine.state != snapshot.state {
            return Err(SnapshotError::Mismatch("state"));
        }
        Ok(engine)
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
