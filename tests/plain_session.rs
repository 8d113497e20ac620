use connect_n::config::AppConfig;
use connect_n::ui::plain::run_plain;

fn session(script: &str, config: &AppConfig) -> String {
    let mut out = Vec::new();
    run_plain(script.as_bytes(), &mut out, config).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_vertical_win_session() {
    let out = session("1\n2\n1\n2\n1\n2\n1\n", &AppConfig::default());
    assert!(out.contains("Red wins!"));
    // No prompt for a player once the game is over
    assert!(out.trim_end().ends_with('>'));
    assert!(!out.trim_end().ends_with("(1-7)>"));
}

#[test]
fn test_moves_after_win_are_ignored() {
    let out = session("1\n2\n1\n2\n1\n2\n1\n3\n", &AppConfig::default());
    assert!(out.contains("Game is over! Start a new game."));
    // The ignored move never reaches the board
    let last_board = out.rsplit("  1  2  3").next().unwrap();
    assert!(!last_board.contains("  .  .  R  .  .  .  .\n"));
}

#[test]
fn test_full_column_keeps_turn() {
    let out = session("1\n1\n1\n1\n1\n1\n1\n", &AppConfig::default());
    assert!(out.contains("Column is full! Try another column."));
    assert!(out.trim_end().ends_with("Red to move (1-7)>"));
}

#[test]
fn test_invalid_new_game_keeps_current_one() {
    let out = session("4\nnew 3\nnew abc\n", &AppConfig::default());
    assert!(out.contains("invalid connect length '3'"));
    assert!(out.contains("invalid connect length 'abc'"));
    // Still Yellow's turn in the first game
    assert!(out.trim_end().ends_with("Yellow to move (1-7)>"));
}

#[test]
fn test_new_game_with_longer_connect() {
    let out = session("new 5\n9\n", &AppConfig::default());
    assert!(out.contains("Connect 5 on a 8x9 board."));
    assert!(out.contains("  .  .  .  .  .  .  .  .  R\n"));
}

#[test]
fn test_new_without_length_restarts_same_size() {
    let mut config = AppConfig::default();
    config.game.connect_length = 6;
    let out = session("1\nnew\n", &config);
    assert_eq!(out.matches("Connect 6 on a 9x11 board.").count(), 2);
    assert!(out.trim_end().ends_with("Red to move (1-11)>"));
}

#[test]
fn test_invalid_configured_length_waits_for_new() {
    let mut config = AppConfig::default();
    config.game.connect_length = 2;
    let out = session("1\nnew 4\n", &config);
    assert!(out.contains("invalid connect length '2'"));
    assert!(out.contains("No game yet. Type 'new <n>' to start one."));
    assert!(out.contains("Connect 4 on a 6x7 board."));
}
