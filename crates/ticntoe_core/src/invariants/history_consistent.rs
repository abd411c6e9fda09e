//! History consistency invariant: every mark on the board has a move.

use super::Invariant;
use crate::{GameEngine, Square};

/// Invariant: the move history and the board describe the same game.
///
/// The number of occupied squares equals the number of recorded moves and
/// each recorded move's square holds that move's mark.
pub struct HistoryConsistentInvariant;

impl Invariant<GameEngine> for HistoryConsistentInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let board = engine.board();
        board.occupied() == engine.history().len()
            && engine
                .history()
                .iter()
                .all(|mov| board.get(mov.position) == Square::Occupied(mov.player))
    }

    fn description() -> &'static str {
        "Move history matches board contents"
    }
}
