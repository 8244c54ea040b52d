//! JSON archive tests against real files.

use strictly_ladders::{
    Board, Dice, GameArchive, GameRecord, PersistenceError, PlayerId, ScriptedRolls, GameSession,
    replay,
};
use strictly_ladders_cli::JsonArchive;

fn finished_record() -> GameRecord {
    let mut board = Board::new(2, 10, 10).expect("Valid board");
    board.default_setup().expect("Default layout fits");
    let mut game = GameSession::new(board, Dice::default());
    let mut rolls = ScriptedRolls::new([5, 2, 3, 4]);
    for _ in 0..4 {
        game.roll(&mut rolls).expect("Game running");
    }
    game.record()
}

#[test]
fn test_save_then_load_round_trip() {
    let dir = tempfile::tempdir().expect("Temp dir");
    let path = dir.path().join("data").join("last_game.json");
    let mut archive = JsonArchive::new(&path);

    let record = finished_record();
    archive.save(&record).expect("Saved");
    assert!(path.exists(), "Parent directory should be created");

    let loaded = archive.load().expect("Loaded");
    assert_eq!(loaded, record);
    assert_eq!(loaded.moves_of(PlayerId::FIRST), Some(&[0, 34, 37][..]));
    assert!(replay(&loaded).is_ok());
}

#[test]
fn test_save_overwrites_previous_game() {
    let dir = tempfile::tempdir().expect("Temp dir");
    let mut archive = JsonArchive::new(dir.path().join("last.json"));

    archive.save(&finished_record()).expect("First save");
    let board = Board::new(3, 4, 4).expect("Valid board");
    let second = GameRecord::from_board(&board, &Dice::default(), None);
    archive.save(&second).expect("Second save");

    assert_eq!(archive.load().expect("Loaded"), second);
}

#[test]
fn test_missing_file_is_not_found() {
    let dir = tempfile::tempdir().expect("Temp dir");
    let archive = JsonArchive::new(dir.path().join("nothing.json"));
    let err = archive.load().expect_err("Nothing saved");
    assert!(matches!(err, PersistenceError::NotFound { .. }));
    assert!(err.to_string().contains("Please play a game to save a new one"));
}

#[test]
fn test_garbage_file_is_malformed() {
    let dir = tempfile::tempdir().expect("Temp dir");
    let path = dir.path().join("last.json");
    std::fs::write(&path, "{ not json").expect("Write");
    let err = JsonArchive::new(&path).load().expect_err("Garbage");
    assert!(matches!(err, PersistenceError::Malformed { .. }));
}

#[test]
fn test_inconsistent_record_is_malformed() {
    let dir = tempfile::tempdir().expect("Temp dir");
    let path = dir.path().join("last.json");
    let mut json: serde_json::Value =
        serde_json::to_value(finished_record()).expect("Serializable");
    json["rolls"][0]["values"] = serde_json::json!([5]);
    std::fs::write(&path, json.to_string()).expect("Write");

    let err = JsonArchive::new(&path).load().expect_err("Lengths disagree");
    assert!(matches!(err, PersistenceError::Malformed { .. }));
}

#[test]
fn test_seat_zero_is_malformed() {
    let dir = tempfile::tempdir().expect("Temp dir");
    let path = dir.path().join("last.json");
    let mut json: serde_json::Value =
        serde_json::to_value(finished_record()).expect("Serializable");
    json["moves"][0]["player"] = serde_json::json!(0);
    json["rolls"][0]["player"] = serde_json::json!(0);
    std::fs::write(&path, json.to_string()).expect("Write");

    let err = JsonArchive::new(&path).load().expect_err("No seat 0");
    assert!(matches!(err, PersistenceError::Malformed { .. }));
}

#[test]
fn test_directory_path_is_io_error() {
    let dir = tempfile::tempdir().expect("Temp dir");
    let err = JsonArchive::new(dir.path()).load().expect_err("A directory");
    assert!(matches!(err, PersistenceError::Io { .. }));
}
