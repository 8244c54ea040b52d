//! Command-line interface for strictly_ladders.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Ladders - console snakes and ladders
#[derive(Parser, Debug)]
#[command(name = "strictly_ladders")]
#[command(about = "Console snakes and ladders with saved game statistics", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file (optional)
    #[arg(long, global = true, default_value = "strictly_ladders.toml")]
    pub config: PathBuf,

    /// Override the JSON file holding the last finished game
    #[arg(long, global = true)]
    pub data_file: Option<PathBuf>,

    /// Fix the dice RNG seed for a reproducible game
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Subcommand to run (defaults to the interactive menu)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Show the interactive menu
    Menu,

    /// Start a game on the default board
    Play {
        /// Number of players (asked interactively if omitted)
        #[arg(short, long)]
        players: Option<u32>,
    },

    /// Configure board and dice interactively, then play
    Configure,

    /// Show statistics of the last saved game
    Stats,

    /// Verify the last saved game by replaying its rolls
    Replay,
}
