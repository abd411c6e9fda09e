//! Tests for the game engine's public call surface.

use ticntoe_core::{
    Board, EngineInvariants, GameEngine, GameState, InvariantSet, Player, Position, SnapshotError,
    Square, rules,
};

fn play(engine: &mut GameEngine, moves: &[(i32, i32)]) {
    for &(row, col) in moves {
        assert!(engine.apply_move(row, col), "move ({row}, {col}) rejected");
    }
}

#[test]
fn test_initial_state() {
    let engine = GameEngine::new();
    assert_eq!(engine.board(), &Board::new());
    assert!(engine.board().squares().iter().all(|s| *s == Square::Empty));
    assert_eq!(engine.current_player(), Player::X);
    assert_eq!(engine.state(), GameState::InProgress);
    assert_eq!(GameEngine::default(), engine);
}

#[test]
fn test_out_of_range_moves_rejected() {
    let mut engine = GameEngine::new();
    let before = engine.clone();

    for (row, col) in [(-1, 0), (3, 0), (0, -1), (0, 3)] {
        assert!(!engine.apply_move(row, col), "({row}, {col}) accepted");
    }

    assert_eq!(engine, before);
}

#[test]
fn test_occupied_square_rejected() {
    let mut engine = GameEngine::new();
    assert!(engine.apply_move(0, 0));
    assert!(!engine.apply_move(0, 0));

    assert_eq!(engine.board().at(0, 0), Some(Square::Occupied(Player::X)));
    assert_eq!(engine.current_player(), Player::O);
    assert_eq!(engine.history().len(), 1);
}

#[test]
fn test_turn_alternation() {
    let mut engine = GameEngine::new();
    let first = engine.current_player();

    assert!(engine.apply_move(1, 1));
    assert_eq!(engine.current_player(), first.opponent());

    assert!(engine.apply_move(0, 0));
    assert_eq!(engine.current_player(), first);
}

#[test]
fn test_row_win() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[(0, 0), (1, 0), (0, 1), (1, 1)]);
    assert_eq!(engine.state(), GameState::InProgress);

    assert!(engine.apply_move(0, 2));
    assert_eq!(engine.state(), GameState::Won(Player::X));
    // The winner stays the active player.
    assert_eq!(engine.current_player(), Player::X);

    assert!(!engine.apply_move(2, 2));
    assert_eq!(engine.board().get(Position::BottomRight), Square::Empty);
}

#[test]
fn test_diagonal_win() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[(0, 0), (0, 1), (1, 1), (0, 2), (2, 2)]);
    assert_eq!(engine.state(), GameState::Won(Player::X));
}

#[test]
fn test_second_player_can_win() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[(0, 0), (0, 2), (1, 0), (1, 1), (2, 1), (2, 0)]);
    assert_eq!(engine.state(), GameState::Won(Player::O));
    assert_eq!(engine.current_player(), Player::O);
}

#[test]
fn test_draw() {
    let mut engine = GameEngine::new();
    play(
        &mut engine,
        &[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (1, 2),
            (2, 1),
            (2, 0),
            (2, 2),
        ],
    );

    assert_eq!(engine.state(), GameState::Draw);
    assert!(rules::is_full(engine.board()));
    assert_eq!(rules::check_winner(engine.board()), None);
    assert!(!rules::has_line(engine.board(), Player::X));
    assert!(!rules::has_line(engine.board(), Player::O));
    assert_eq!(engine.status_line(), "It's a Draw!");
}

#[test]
fn test_reset_restores_initial_state() {
    let fresh = GameEngine::new();

    let mut engine = GameEngine::new();
    engine.reset();
    assert_eq!(engine, fresh);

    play(&mut engine, &[(1, 1), (0, 0)]);
    engine.reset();
    assert_eq!(engine, fresh);

    play(&mut engine, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
    assert!(engine.state().is_terminal());
    engine.reset();
    assert_eq!(engine, fresh);

    // Behaves like a fresh engine afterwards.
    assert!(engine.apply_move(0, 2));
    assert_eq!(engine.current_player(), Player::O);
    assert_eq!(engine.board().at(0, 2), Some(Square::Occupied(Player::X)));
}

#[test]
fn test_no_mutation_after_terminal_state() {
    let mut engine = GameEngine::new();
    play(
        &mut engine,
        &[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (1, 2),
            (2, 1),
            (2, 0),
            (2, 2),
        ],
    );
    let drawn = engine.clone();

    for row in -1..=3 {
        for col in -1..=3 {
            assert!(!engine.apply_move(row, col));
        }
    }
    assert_eq!(engine, drawn);

    let mut engine = GameEngine::new();
    play(&mut engine, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
    let won = engine.clone();
    for row in 0..3 {
        for col in 0..3 {
            assert!(!engine.apply_move(row, col));
        }
    }
    assert_eq!(engine, won);
    assert!(engine.valid_moves().is_empty());
}

#[test]
fn test_invariants_hold_through_a_full_game() {
    let mut engine = GameEngine::new();
    for (row, col) in [(1, 1), (0, 0), (2, 2), (0, 2), (0, 1), (2, 1), (1, 0), (1, 2), (2, 0)] {
        assert!(engine.apply_move(row, col));
        assert!(EngineInvariants::check_all(&engine).is_ok());
    }
    assert_eq!(engine.state(), GameState::Draw);
}

#[test]
fn test_snapshot_serializes() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[(1, 1)]);

    let json = serde_json::to_value(&engine).expect("serialize engine");
    assert_eq!(json["current_player"], "O");
    assert_eq!(json["state"], "InProgress");
    assert_eq!(json["history"][0]["position"], "Center");

    let restored: GameEngine = serde_json::from_value(json).expect("deserialize engine");
    assert_eq!(restored, engine);
}

#[test]
fn test_snapshot_with_erased_history_is_refused() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[(1, 1)]);

    let mut json = serde_json::to_value(&engine).expect("serialize engine");
    json["history"] = serde_json::json!([]);

    let err = serde_json::from_value::<GameEngine>(json).unwrap_err();
    assert!(
        err.to_string()
            .contains(&SnapshotError::Mismatch("board").to_string())
    );
}

#[test]
fn test_snapshot_with_full_board_in_progress_is_refused() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[(1, 1)]);

    let mut json = serde_json::to_value(&engine).expect("serialize engine");
    json["board"]["squares"] = serde_json::Value::Array(vec![serde_json::json!({ "Occupied": "X" }); 9]);
    assert_eq!(json["state"], "InProgress");

    assert!(serde_json::from_value::<GameEngine>(json).is_err());
}

#[test]
fn test_snapshot_with_wrong_state_is_refused() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);

    let mut json = serde_json::to_value(&engine).expect("serialize engine");
    assert_eq!(json["state"], serde_json::json!({ "Won": "X" }));
    json["state"] = serde_json::json!("InProgress");

    let err = serde_json::from_value::<GameEngine>(json).unwrap_err();
    assert!(err.to_string().contains("state does not match"));
}

#[test]
fn test_snapshot_with_out_of_turn_history_is_refused() {
    let json = serde_json::json!({
        "board": { "squares": [
            { "Occupied": "X" }, { "Occupied": "X" }, "Empty",
            "Empty", "Empty", "Empty",
            "Empty", "Empty", "Empty"
        ] },
        "current_player": "O",
        "state": "InProgress",
        "history": [
            { "player": "X", "position": "TopLeft" },
            { "player": "X", "position": "TopCenter" }
        ]
    });

    let err = serde_json::from_value::<GameEngine>(json).unwrap_err();
    assert!(err.to_string().contains("Out-of-turn move in history"));
}

#[test]
fn test_accepted_snapshot_keeps_playing() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[(1, 1), (0, 0)]);

    let json = serde_json::to_value(&engine).expect("serialize engine");
    let mut restored: GameEngine = serde_json::from_value(json).expect("consistent snapshot");

    assert!(restored.apply_move(2, 2));
    assert!(EngineInvariants::check_all(&restored).is_ok());
    assert_eq!(restored.current_player(), Player::O);
}
