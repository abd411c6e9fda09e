//! Pure tic-tac-toe game logic.
//!
//! The crate is built around a single stateful component, [`GameEngine`],
//! which owns the board, the active player, and the game state. Everything
//! else is plain data ([`Board`], [`Player`], [`Position`], [`GameState`])
//! or pure rule evaluation ([`rules`]).
//!
//! # Example
//!
//! ```
//! use ticntoe_core::{GameEngine, GameState, Player};
//!
//! let mut engine = GameEngine::new();
//! assert!(engine.apply_move(1, 1));
//! assert!(!engine.apply_move(1, 1));
//! assert_eq!(engine.current_player(), Player::O);
//! assert_eq!(engine.state(), GameState::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
pub mod invariants;
mod phases;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError, SnapshotError};
pub use engine::{GameEngine, Transition};
pub use invariants::{
    AlternatingTurnInvariant, EngineInvariants, HistoryConsistentInvariant, Invariant,
    InvariantSet, InvariantViolation, MonotonicBoardInvariant,
};
pub use phases::Outcome;
pub use position::Position;
pub use types::{Board, GameState, Player, Square};
