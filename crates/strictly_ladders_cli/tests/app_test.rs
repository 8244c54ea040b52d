//! End-to-end console sessions with scripted input.

use std::io::Cursor;
use strictly_ladders::{GameArchive, SessionEnd};
use strictly_ladders_cli::{App, AppConfig, JsonArchive, verify_last_game};

type TestApp = App<Cursor<Vec<u8>>, Vec<u8>, Vec<u8>>;

fn app(config: AppConfig, input: String) -> TestApp {
    App::new(config, Cursor::new(input.into_bytes()), Vec::new(), Vec::new())
}

fn outputs(app: TestApp) -> (String, String) {
    let (prompts, events) = app.into_outputs();
    (
        String::from_utf8(prompts).expect("UTF-8 prompts"),
        String::from_utf8(events).expect("UTF-8 events"),
    )
}

fn enters(n: usize) -> String {
    "\n".repeat(n)
}

#[test]
fn test_exit_from_menu() {
    let dir = tempfile::tempdir().expect("Temp dir");
    let config = AppConfig::default().with_data_file(dir.path().join("last.json"));
    let mut app = app(config, "9\n4\n".to_string());

    app.run_menu().expect("Menu exits");
    let (prompts, _) = outputs(app);
    assert!(prompts.contains("SNAKES AND LADDERS"));
    assert!(prompts.contains("3. Load last game statistics"));
    assert!(prompts.contains("Select an available choice between 1 and 4"));
}

#[test]
fn test_stats_without_saved_game_returns_to_menu() {
    let dir = tempfile::tempdir().expect("Temp dir");
    let config = AppConfig::default().with_data_file(dir.path().join("last.json"));
    let mut app = app(config, "3\n4\n".to_string());

    app.run_menu().expect("Menu exits");
    let (prompts, _) = outputs(app);
    assert!(prompts.contains("No game data file found"));
}

#[test]
fn test_default_game_plays_to_victory_and_saves() {
    let dir = tempfile::tempdir().expect("Temp dir");
    let path = dir.path().join("data").join("last_game.json");
    let config = AppConfig::default()
        .with_data_file(&path)
        .with_seed(Some(42));
    let mut app = app(config, format!("1\n2\n{}", enters(5000)));

    app.run_menu().expect("Menu exits after declining another game");
    let (_, events) = outputs(app);
    assert!(events.contains(">>>> Player 1's turn"));
    assert!(events.contains("won the game"));
    assert!(events.contains(">>>> Game saved"));

    let archive = JsonArchive::new(&path);
    let record = archive.load().expect("Game saved");
    assert!(record.winner().is_some());
    assert!(verify_last_game(&archive).is_ok());
}

#[test]
fn test_configured_game_retries_placements() {
    let dir = tempfile::tempdir().expect("Temp dir");
    let path = dir.path().join("last.json");
    let config = AppConfig::default()
        .with_data_file(&path)
        .with_seed(Some(3));
    let script = [
        "2",    // players
        "3",    // rows
        "3",    // columns
        "1",    // one ladder
        "abc",  // not a pair
        "4,4",  // self loop
        "2,5",  // accepted
        "1",    // one snake
        "9,1",  // mouth on the winning square
        "8,4",  // accepted
        "",     // dice min default
        "",     // dice max default
    ]
    .join("\n");
    let mut app = app(config, format!("{}\n{}", script, enters(2000)));

    let end = app.play_configured().expect("Game runs");
    assert_eq!(end.map(|e| matches!(e, SessionEnd::Won(_))), Some(true));

    let (prompts, events) = outputs(app);
    assert!(prompts.contains("Provide correct inputs for ladder 1"));
    assert!(prompts.contains("Manually configuring the board with 3 rows and 3 columns"));
    assert!(events.contains("A ladder cannot start and end on the same square - 4"));

    let record = JsonArchive::new(&path).load().expect("Game saved");
    assert_eq!(*record.rows(), 3);
    assert_eq!(record.ladders().len(), 1);
    assert_eq!(record.snakes().len(), 1);
}

#[test]
fn test_configured_layout_from_file() {
    let dir = tempfile::tempdir().expect("Temp dir");
    let config = AppConfig::from_toml(
        r#"
        rows = 5
        columns = 5
        seed = 11
        ladders = [[3, 22], [22, 24]]
        snakes = [[20, 2]]
        "#,
    )
    .expect("Valid TOML")
    .with_data_file(dir.path().join("last.json"));
    let mut app = app(config, enters(2000));

    let end = app.play_default(Some(2)).expect("Game runs");
    assert!(matches!(end, Some(SessionEnd::Won(_))));

    let (prompts, events) = outputs(app);
    assert!(prompts.contains("Loading the board layout from the configuration file"));
    assert!(events.contains(">>>> Placed ladder 3 -> 22"));
    assert!(events.contains(">>>> Placed snake 20 -> 2"));
    assert!(events.contains("A ladder top already exists at the specified bottom location - 22"));
}

#[test]
fn test_default_layout_on_small_configured_board_is_reported() {
    let dir = tempfile::tempdir().expect("Temp dir");
    let config = AppConfig::from_toml("rows = 5\ncolumns = 5\n")
        .expect("Valid TOML")
        .with_data_file(dir.path().join("last.json"));
    let mut app = app(config, String::new());

    assert_eq!(app.play_default(Some(2)).expect("Reported, not failed"), None);
    let (prompts, _) = outputs(app);
    assert!(prompts.contains("The default layout needs at least 100 squares, the board has 25"));
}

#[test]
fn test_quit_mid_game_saves_nothing() {
    let dir = tempfile::tempdir().expect("Temp dir");
    let path = dir.path().join("last.json");
    let config = AppConfig::default().with_data_file(&path);
    let mut app = app(config, "\n\nq\n".to_string());

    let end = app.play_default(Some(2)).expect("Game runs");
    assert_eq!(end, Some(SessionEnd::Cancelled));
    assert!(!path.exists());
}
