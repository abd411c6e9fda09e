//! Alternating turn invariant: players take turns, X first.

use super::Invariant;
use crate::{GameEngine, GameState, Player};

/// Invariant: moves alternate between players, starting with X.
///
/// While the game is in progress the player to move is the one after the
/// last mover. Once it has ended, the active player is the last mover, and
/// for a won game that is also the winner.
pub struct AlternatingTurnInvariant;

impl Invariant<GameEngine> for AlternatingTurnInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let mut expected = Player::FIRST;
        for mov in engine.history() {
            if mov.player() != expected {
                return false;
            }
            expected = expected.opponent();
        }

        let last_mover = engine.history().last().map(|mov| mov.player());
        match engine.state() {
            GameState::InProgress => engine.current_player() == expected,
            GameState::Won(winner) => {
                last_mover == Some(winner) && engine.current_player() == winner
            }
            GameState::Draw => last_mover == Some(engine.current_player()),
        }
    }

    fn description() -> &'static str {
        "Players alternate turns starting with X"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alternation_holds_through_a_win() {
        let mut engine = GameEngine::new();
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            assert!(engine.apply_move(row, col));
            assert!(AlternatingTurnInvariant::holds(&engine));
        }
        assert_eq!(engine.state(), GameState::Won(Player::X));
    }

    #[test]
    fn test_wrong_active_player_violates() {
        let mut engine = GameEngine::new();
        assert!(engine.apply_move(0, 0));

        engine.current_player = Player::X;
        assert!(!AlternatingTurnInvariant::holds(&engine));
    }

    #[test]
    fn test_winner_without_moves_violates() {
        let mut engine = GameEngine::new();
        engine.state = GameState::Won(Player::X);
        assert!(!AlternatingTurnInvariant::holds(&engine));
    }
}
