//! Interactive application: main menu, game setup and the statistics entry point.

use std::io::{BufRead, Stdout, StdinLock, Write};
use strictly_ladders::{
    Board, ConfigurationError, DEFAULT_COLUMNS, DEFAULT_DICE_MAX, DEFAULT_DICE_MIN, DEFAULT_ROWS,
    Dice, EventSink, FeatureKind, FeatureSpec, GameArchive, GameEvent, GameSession, ReplayError,
    ReplaySummary, SessionEnd, replay, win_position,
};
use strum::{EnumIter, IntoEnumIterator};
use tracing::{debug, info, instrument, warn};

use crate::config::AppConfig;
use crate::console::{ConsoleInput, ConsoleReporter};
use crate::prompt::{PromptError, Prompter, parse_pair};
use crate::stats::stats_menu;
use crate::store::JsonArchive;

const RULE: &str = "___________________________________________________________________________";

/// Entries of the main menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum MenuChoice {
    /// Quick-start game on the configured board.
    StartGame,
    /// Interactive board and dice setup, then play.
    ConfigureAndPlay,
    /// Statistics of the last saved game.
    LastGameStats,
    /// Leave the program.
    Exit,
}

impl MenuChoice {
    /// Menu label.
    pub fn label(self) -> &'static str {
        match self {
            Self::StartGame => "Start a game",
            Self::ConfigureAndPlay => "Configure and Play",
            Self::LastGameStats => "Load last game statistics",
            Self::Exit => "Exit",
        }
    }

    /// Choice for a one-based menu number.
    pub fn from_number(n: u32) -> Option<Self> {
        let index = usize::try_from(n.checked_sub(1)?).ok()?;
        Self::iter().nth(index)
    }
}

/// Console application state.
///
/// Questions and answers go through the prompter; game events go to a
/// separate reporter writer so the session can hold both at once.
#[derive(Debug)]
pub struct App<R, W, E> {
    config: AppConfig,
    prompter: Prompter<R, W>,
    reporter: ConsoleReporter<E>,
    archive: JsonArchive,
}

impl App<StdinLock<'static>, Stdout, Stdout> {
    /// Application on the process's stdin and stdout.
    pub fn stdio(config: AppConfig) -> Self {
        Self::new(config, std::io::stdin().lock(), std::io::stdout(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write, E: Write> App<R, W, E> {
    /// Application over explicit streams.
    #[instrument(skip_all, fields(data_file = %config.data_file().display()))]
    pub fn new(config: AppConfig, input: R, output: W, events: E) -> Self {
        let archive = JsonArchive::new(config.data_file());
        Self {
            config,
            prompter: Prompter::new(input, output),
            reporter: ConsoleReporter::new(events),
            archive,
        }
    }

    /// The archive games are saved to.
    pub fn archive(&self) -> &JsonArchive {
        &self.archive
    }

    /// Consumes the application, returning the prompt and event writers.
    pub fn into_outputs(self) -> (W, E) {
        (self.prompter.into_output(), self.reporter.into_inner())
    }

    /// Shows the main menu until the user exits or declines another game.
    ///
    /// # Errors
    ///
    /// Returns [`PromptError`] if the console fails or input ends.
    #[instrument(skip(self))]
    pub fn run_menu(&mut self) -> Result<(), PromptError> {
        self.prompter.say(RULE)?;
        self.prompter.say("\t\t\t SNAKES AND LADDERS")?;
        self.prompter.say(RULE)?;
        loop {
            self.prompter.say("\n\t\t\t   ++++ Menu ++++")?;
            for (n, choice) in MenuChoice::iter().enumerate() {
                self.prompter.say(format!("\t{}. {}", n + 1, choice.label()))?;
            }
            let picked = self.prompter.choice("\nEnter your choice (1-4): ", 4)?;
            debug!(picked, "Main menu choice");

            match MenuChoice::from_number(picked) {
                Some(MenuChoice::StartGame) => {
                    self.prompter.say(">>>> Starting a new game")?;
                    self.play_default(None)?;
                    if !self.play_again()? {
                        return Ok(());
                    }
                }
                Some(MenuChoice::ConfigureAndPlay) => {
                    self.prompter.say(">>>> Configuring a new game")?;
                    self.play_configured()?;
                    if !self.play_again()? {
                        return Ok(());
                    }
                }
                Some(MenuChoice::LastGameStats) => {
                    self.prompter.say(">>>> Loading last game statistics")?;
                    self.show_stats()?;
                }
                Some(MenuChoice::Exit) | None => {
                    info!("Exiting from menu");
                    return Ok(());
                }
            }
        }
    }

    fn play_again(&mut self) -> Result<bool, PromptError> {
        let answer = self.prompter.line("\nWant to play again (y): ")?;
        Ok(answer.trim() == "y")
    }

    /// Quick-start game: configured board size and dice, default or configured layout.
    ///
    /// Asks for the number of players unless `players` is given. A setup the
    /// configuration cannot satisfy is reported and no game is played.
    ///
    /// # Errors
    ///
    /// Returns [`PromptError`] if the console fails or input ends while
    /// setting up.
    #[instrument(skip(self))]
    pub fn play_default(
        &mut self,
        players: Option<u32>,
    ) -> Result<Option<SessionEnd>, PromptError> {
        let players = match players {
            Some(n) => n,
            None => self.prompter.players()?,
        };
        self.prompter.say(if self.config.has_custom_layout() {
            ">>>> Loading the board layout from the configuration file"
        } else {
            ">>>> Loading with default board configurations"
        })?;
        match self.quick_start_session(players) {
            Ok(session) => self.play(session).map(Some),
            Err(e) => {
                warn!(error = %e, "Cannot set up game from configuration");
                self.prompter.say(format!(">>>> {}", e))?;
                Ok(None)
            }
        }
    }

    fn quick_start_session(&mut self, players: u32) -> Result<GameSession, ConfigurationError> {
        let game = self.config.game_config(Some(players))?;
        if !self.config.has_custom_layout() {
            return GameSession::with_default_layout(&game);
        }

        let mut board = Board::from_config(&game)?;
        let outcomes = board.manual_setup(self.config.ladders(), self.config.snakes());
        for outcome in outcomes {
            let event = match outcome.result {
                Ok(()) => GameEvent::PlacementAccepted { spec: outcome.spec },
                Err(error) => GameEvent::PlacementRejected {
                    spec: outcome.spec,
                    error,
                },
            };
            self.reporter.emit(&event);
        }
        let dice = Dice::new(*game.dice_min(), *game.dice_max())?;
        Ok(GameSession::new(board, dice))
    }

    /// Asks for players, board size, ladders, snakes and dice, then plays.
    ///
    /// # Errors
    ///
    /// Returns [`PromptError`] if the console fails or input ends.
    #[instrument(skip(self))]
    pub fn play_configured(&mut self) -> Result<Option<SessionEnd>, PromptError> {
        let players = self.prompter.players()?;
        let (rows, columns) = self.ask_dimensions()?;
        let mut board = match Board::new(players, rows, columns) {
            Ok(board) => board,
            Err(e) => {
                self.prompter.say(format!(">>>> {}", e))?;
                return Ok(None);
            }
        };

        self.prompter.say(format!(
            ">>>> Manually configuring the board with {} rows and {} columns",
            rows, columns
        ))?;
        if *board.win_position() > 1 {
            for kind in FeatureKind::iter() {
                self.place_features(&mut board, kind)?;
            }
        }
        self.prompter.say(">>>> Board setup completed")?;

        let dice = self.ask_dice()?;
        self.play(GameSession::new(board, dice)).map(Some)
    }

    fn ask_dimensions(&mut self) -> Result<(u32, u32), PromptError> {
        loop {
            let rows = self
                .prompter
                .number_with_default("\tQ. How many rows you want on your board? ", DEFAULT_ROWS)?;
            let columns = self.prompter.number_with_default(
                "\tQ. How many columns you want on your board? ",
                DEFAULT_COLUMNS,
            )?;
            match win_position(rows, columns) {
                Ok(_) => return Ok((rows, columns)),
                Err(e) => self.prompter.say(format!("\t>>>> {}", e))?,
            }
        }
    }

    fn ask_dice(&mut self) -> Result<Dice, PromptError> {
        let min = self.prompter.number_with_default(
            "\tQ. What should be the minimum number on dice? ",
            DEFAULT_DICE_MIN,
        )?;
        loop {
            let max = self.prompter.number_with_default(
                "\tQ. What should be the maximum number on dice? ",
                DEFAULT_DICE_MAX,
            )?;
            match Dice::new(min, max) {
                Ok(dice) => return Ok(dice),
                Err(_) => self
                    .prompter
                    .say("\t>>>> Maximum value should be greater than minimum value")?,
            }
        }
    }

    /// Asks how many features of `kind` to place, then fills each slot until it is accepted.
    #[instrument(skip(self, board))]
    fn place_features(&mut self, board: &mut Board, kind: FeatureKind) -> Result<(), PromptError> {
        let (entry, exit) = (kind.entry().location(), kind.exit().location());
        let count = self
            .prompter
            .number(&format!("\tHow many {}s do you want on board? ", kind))?;
        self.prompter.say(format!(
            "\tFor {}s, {} and {} positions will be provided as comma separated with no space, e.g. {}",
            kind,
            entry,
            exit,
            match kind {
                FeatureKind::Ladder => "2,98",
                FeatureKind::Snake => "98,2",
            }
        ))?;

        let mut placed = 0;
        while placed < count {
            let slot = placed + 1;
            let answer = self
                .prompter
                .line(&format!("\tEnter {} and {} for {} {}: ", entry, exit, kind, slot))?;
            let Some((first, second)) = parse_pair(&answer) else {
                self.prompter
                    .say(format!("\t>>>> Provide correct inputs for {} {}", kind, slot))?;
                continue;
            };
            let spec = match kind {
                FeatureKind::Ladder => FeatureSpec::ladder(first, second),
                FeatureKind::Snake => FeatureSpec::snake(first, second),
            };
            match board.place(spec) {
                Ok(()) => placed += 1,
                Err(error) => self
                    .reporter
                    .emit(&GameEvent::PlacementRejected { spec, error }),
            }
        }
        debug!(placed, "Features placed");
        Ok(())
    }

    fn play(&mut self, mut session: GameSession) -> Result<SessionEnd, PromptError> {
        let mut rolls = self.config.roll_source();
        let mut input = ConsoleInput::new(&mut self.prompter);
        match session.play(&mut rolls, &mut input, &mut self.reporter, &mut self.archive) {
            Ok(end) => {
                info!(?end, rolls = session.rolls(), "Game ended");
                Ok(end)
            }
            Err(e) => {
                warn!(error = %e, "Game stopped");
                self.prompter.say(format!(">>>> {}", e))?;
                Ok(SessionEnd::Cancelled)
            }
        }
    }

    /// Loads the last saved game and opens the statistics submenu.
    ///
    /// A missing or unreadable save file is reported, not returned.
    ///
    /// # Errors
    ///
    /// Returns [`PromptError`] if the console fails or input ends.
    #[instrument(skip(self))]
    pub fn show_stats(&mut self) -> Result<(), PromptError> {
        match self.archive.load() {
            Ok(record) => stats_menu(&mut self.prompter, &record),
            Err(e) => {
                warn!(error = %e, "Cannot load last game");
                self.prompter.say(e)
            }
        }
    }
}

/// Replays the last game saved in `archive` and checks it matches its record.
///
/// # Errors
///
/// Returns [`ReplayError`] if nothing can be loaded or the replay diverges.
#[instrument(skip(archive))]
pub fn verify_last_game(archive: &impl GameArchive) -> Result<ReplaySummary, ReplayError> {
    let record = archive.load()?;
    replay(&record)
}
