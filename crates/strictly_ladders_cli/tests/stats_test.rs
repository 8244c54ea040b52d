//! Statistics rendering and the stats submenu.

use std::io::Cursor;
use strictly_ladders::{Board, Dice, GameRecord, GameSession, ScriptedRolls};
use strictly_ladders_cli::{Prompter, render_histogram, render_positions, render_summary, stats_menu};

/// P1: 5 (ladder to 34), P2: 6 then 1, P1: 3.
fn record() -> GameRecord {
    let mut board = Board::new(2, 10, 10).expect("Valid board");
    board.default_setup().expect("Default layout fits");
    let mut game = GameSession::new(board, Dice::default());
    let mut rolls = ScriptedRolls::new([5, 6, 1, 3]);
    for _ in 0..4 {
        game.roll(&mut rolls).expect("Game running");
    }
    game.record()
}

#[test]
fn test_positions_table() {
    let text = render_positions(&record());
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "\t\tPlayers' position data");
    assert_eq!(lines[1], "Move  Player 1  Player 2");
    assert_eq!(lines[2], "   0         0         0");
    assert_eq!(lines[3], "   1        34         6");
    assert_eq!(lines[4], "   2        37         7");
    assert!(text.contains("Players' dice roll data"));
    assert!(text.contains("   1         5         6"));
}

#[test]
fn test_histogram_counts_faces() {
    let text = render_histogram(&record());
    assert!(text.contains("\t\tPlayer 1 (2 rolls)"));
    assert!(text.contains("5 | # 1"));
    assert!(text.contains("6 |  0"));
    assert!(text.contains("\t\tPlayer 2 (2 rolls)"));
}

#[test]
fn test_summary_names_setup() {
    let board = Board::new(3, 4, 5).expect("Valid board");
    let record = GameRecord::from_board(&board, &Dice::new(2, 8).expect("Dice"), None);
    let text = render_summary(&record);
    assert!(text.starts_with("Board 4x5, dice 2-8, 0 ladders, 0 snakes, won by nobody"));
}

#[test]
fn test_stats_menu_shows_then_returns() {
    let input = Cursor::new(b"2\n7\n1\n3\n".to_vec());
    let mut prompter = Prompter::new(input, Vec::new());
    stats_menu(&mut prompter, &record()).expect("Returns on 3");

    let out = String::from_utf8(prompter.into_output()).expect("UTF-8");
    assert!(out.contains("1. Show players' positions"));
    assert!(out.contains("Player 1 (2 rolls)"));
    assert!(out.contains("Select an available choice between 1 and 3"));
    assert!(out.contains("Players' position data"));
}
