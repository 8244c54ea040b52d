//! Strictly Ladders console application.
//!
//! Wires the [`strictly_ladders`] engine to a terminal: a numbered menu,
//! re-asking prompts, a console event reporter, a JSON archive for the last
//! finished game and a statistics viewer for it.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod console;
mod prompt;
mod stats;
mod store;

pub use app::{App, MenuChoice, verify_last_game};
pub use cli::{Cli, Command};
pub use config::{AppConfig, AppConfigError, DEFAULT_DATA_FILE};
pub use console::{ConsoleInput, ConsoleReporter};
pub use prompt::{
    NumberOrDefault, ParsedNumber, PromptError, Prompter, parse_number, parse_pair,
};
pub use stats::{StatsChoice, render_histogram, render_positions, render_summary, stats_menu};
pub use store::JsonArchive;
