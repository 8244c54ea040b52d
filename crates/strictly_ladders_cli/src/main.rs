//! Strictly Ladders - console snakes and ladders.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use strictly_ladders_cli::{App, AppConfig, Cli, Command, PromptError, verify_last_game};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    let mut config = AppConfig::load_or_default(&cli.config)?;
    if let Some(path) = cli.data_file {
        config = config.with_data_file(path);
    }
    if cli.seed.is_some() {
        config = config.with_seed(cli.seed);
    }

    let command = cli.command.unwrap_or(Command::Menu);
    info!(?command, "Starting strictly_ladders");

    match command {
        Command::Replay => run_replay(config),
        command => run_interactive(config, command),
    }
}

/// Logs go to stderr so they never mix with the game on stdout.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[instrument(skip(config))]
fn run_interactive(config: AppConfig, command: Command) -> Result<()> {
    let mut app = App::stdio(config);
    let outcome = match command {
        Command::Play { players } => app.play_default(players).map(|_| ()),
        Command::Configure => app.play_configured().map(|_| ()),
        Command::Stats => app.show_stats(),
        Command::Menu | Command::Replay => app.run_menu(),
    };

    match outcome {
        Ok(()) | Err(PromptError::Closed) => {
            debug!("Leaving");
            Ok(())
        }
        Err(e) => Err(e).context("Console interaction failed"),
    }
}

#[instrument(skip(config), fields(data_file = %config.data_file().display()))]
fn run_replay(config: AppConfig) -> Result<()> {
    let archive = strictly_ladders_cli::JsonArchive::new(config.data_file());
    let summary = verify_last_game(&archive).context("The last saved game does not replay")?;
    let winner = match summary.winner() {
        Some(player) => player.to_string(),
        None => "nobody".to_string(),
    };
    println!(
        ">>>> Replayed {} accepted moves on a {}x{} board with {} dice: won by {}, matching the saved record",
        summary.accepted_moves(),
        summary.board().rows(),
        summary.board().columns(),
        summary.dice(),
        winner
    );
    Ok(())
}
