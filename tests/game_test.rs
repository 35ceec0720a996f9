//! Tests for turn orchestration: alternation, win and draw transitions,
//! and terminal-state behavior.

use strictly_connect_four::{
    Color, Column, Game, GameConfig, GameStatus, Name, Player, TurnResult,
};

/// Opt-in log output while running tests: `RUST_LOG=debug cargo test`.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}

fn players() -> (Player, Player) {
    (
        Player::new(Name::new("Alice").unwrap(), Color::Red),
        Player::new(Name::new("Bob").unwrap(), Color::Yellow),
    )
}

fn col(game: &Game, index: usize) -> Column {
    Column::new(index, game.board().columns()).unwrap()
}

#[test]
fn test_turn_index_strictly_alternates() {
    init_tracing();
    let (first, second) = players();
    let mut game = Game::new(first, second, GameConfig::default()).unwrap();

    assert_eq!(game.current_index(), 0);
    game.play_turn(col(&game, 0)).unwrap();
    assert_eq!(game.current_index(), 1);
    game.play_turn(col(&game, 1)).unwrap();
    assert_eq!(game.current_index(), 0);
    game.play_turn(col(&game, 2)).unwrap();
    assert_eq!(game.current_index(), 1);
}

#[test]
fn test_turn_index_unchanged_on_failed_move() {
    let (first, second) = players();
    let mut game = Game::new(first, second, GameConfig::new(2, 3).with_run_length(4)).unwrap();

    game.play_turn(col(&game, 0)).unwrap();
    game.play_turn(col(&game, 0)).unwrap();
    assert_eq!(game.current_index(), 0);

    // Column 0 is now full.
    assert!(game.play_turn(col(&game, 0)).is_err());
    assert_eq!(game.current_index(), 0);

    // A legal retry proceeds normally.
    game.play_turn(col(&game, 1)).unwrap();
    assert_eq!(game.current_index(), 1);
}

#[test]
fn test_vertical_stack_wins_on_a_small_board() {
    init_tracing();
    let (first, second) = players();
    let config = GameConfig::new(3, 3).with_run_length(3);
    let mut game = Game::new(first, second, config).unwrap();

    // Alice stacks column 0 while Bob stacks column 1.
    assert!(matches!(
        game.play_turn(col(&game, 0)).unwrap(),
        TurnResult::Continued(_)
    ));
    game.play_turn(col(&game, 1)).unwrap();
    game.play_turn(col(&game, 0)).unwrap();
    game.play_turn(col(&game, 1)).unwrap();
    assert_eq!(game.status(), GameStatus::InProgress);

    let result = game.play_turn(col(&game, 0)).unwrap();
    match result {
        TurnResult::Won(position) => {
            assert_eq!(position.row().index(), 2);
            assert_eq!(position.column().index(), 0);
        }
        other => panic!("expected a win, got {other:?}"),
    }
    assert_eq!(game.status(), GameStatus::Won(0));
    assert_eq!(game.winner().unwrap().name().as_str(), "Alice");
}

#[test]
fn test_unreachable_run_length_ends_in_a_draw() {
    let (first, second) = players();
    // No line on a 2x2 board can reach three discs.
    let config = GameConfig::new(2, 2).with_run_length(3);
    let mut game = Game::new(first, second, config).unwrap();

    game.play_turn(col(&game, 0)).unwrap();
    game.play_turn(col(&game, 1)).unwrap();
    game.play_turn(col(&game, 0)).unwrap();
    assert_eq!(game.status(), GameStatus::InProgress);

    // The draw lands exactly when the last legal cell fills.
    let result = game.play_turn(col(&game, 1)).unwrap();
    assert!(matches!(result, TurnResult::Drawn(_)));
    assert_eq!(game.status(), GameStatus::Draw);
    assert!(game.winner().is_none());
}

#[test]
fn test_terminal_state_never_changes_again() {
    let (first, second) = players();
    let config = GameConfig::new(2, 2).with_run_length(3);
    let mut game = Game::new(first, second, config).unwrap();
    for index in [0, 1, 0, 1] {
        game.play_turn(col(&game, index)).unwrap();
    }
    assert_eq!(game.status(), GameStatus::Draw);

    for _ in 0..3 {
        assert!(game.play_turn(col(&game, 0)).is_err());
        assert_eq!(game.status(), GameStatus::Draw);
    }
}

#[test]
fn test_legal_columns_track_the_board() {
    let (first, second) = players();
    let mut game = Game::new(first, second, GameConfig::new(2, 3).with_run_length(4)).unwrap();
    assert_eq!(game.legal_columns().len(), 3);

    game.play_turn(col(&game, 1)).unwrap();
    game.play_turn(col(&game, 1)).unwrap();
    let legal = game.legal_columns();
    assert_eq!(legal.len(), 2);
    assert!(legal.iter().all(|c| c.index() != 1));
}

#[test]
fn test_won_match_survives_serialization() {
    let (first, second) = players();
    let config = GameConfig::new(3, 3).with_run_length(3);
    let mut game = Game::new(first, second, config).unwrap();
    for index in [0, 1, 0, 1, 0] {
        game.play_turn(col(&game, index)).unwrap();
    }

    let encoded = serde_json::to_string(&game).unwrap();
    let decoded: Game = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded.status(), GameStatus::Won(0));
    assert_eq!(decoded.winner().unwrap().name().as_str(), "Alice");
    assert_eq!(decoded.board().disc_count(), 5);
}
