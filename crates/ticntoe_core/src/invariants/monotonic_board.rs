//! Monotonic board invariant: squares never change once set.

use super::Invariant;
use crate::{Board, GameEngine, Square};

/// Invariant: Board squares are monotonic (never overwritten).
///
/// Replaying the move history onto an empty board must never land on an
/// occupied square, and must reproduce the engine's board exactly.
pub struct MonotonicBoardInvariant;

impl Invariant<GameEngine> for MonotonicBoardInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let mut reconstructed = Board::new();

        for mov in engine.history() {
            if !reconstructed.is_empty(mov.position) {
                return false;
            }
            reconstructed.set(mov.position, Square::Occupied(mov.player));
        }

        reconstructed == *engine.board()
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}
