//! One playthrough: whose turn it is, bonus rolls, and the end of the game.
//!
//! The session owns the [`Board`] and [`Dice`] for the length of a game.
//! Each roll goes through a small state machine:
//!
//! - overshoot ends the turn (no bonus possible)
//! - an accepted roll of the dice maximum keeps the same player in turn
//! - any other accepted roll passes the turn on
//! - landing on the winning square finishes the game

use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::board::Board;
use crate::config::{ConfigurationError, GameConfig};
use crate::dice::{Dice, RollSource};
use crate::events::{EventSink, GameEvent};
use crate::moves::{MoveError, MoveResult};
use crate::player::PlayerId;
use crate::record::{GameArchive, GameRecord};

/// Where the session stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for this player to roll.
    AwaitRoll(PlayerId),
    /// The game is over.
    Finished(PlayerId),
}

/// What a caller asks for when a player is in turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnSignal {
    /// Roll the dice for the player in turn.
    Roll,
    /// Abandon the game.
    Quit,
}

/// Blocking source of roll requests, usually a person at a console.
pub trait TurnInput {
    /// Waits until the player in turn asks to roll or to quit.
    fn next_signal(&mut self, player: PlayerId) -> TurnSignal;
}

/// How [`GameSession::play`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// A player reached the winning square.
    Won(PlayerId),
    /// The input asked to quit.
    Cancelled,
}

/// Error from driving a session.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum SessionError {
    /// Rolling after the game finished.
    #[display("The game is already over, {} won", winner)]
    GameOver {
        /// Winner of the finished game.
        winner: PlayerId,
    },
    /// The board refused the move.
    #[display("{}", _0)]
    #[from]
    Move(MoveError),
}

/// Everything that happened on one roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    /// Player who rolled.
    pub player: PlayerId,
    /// Face shown.
    pub roll: u32,
    /// What the board did with it.
    pub result: MoveResult,
    /// The same player rolls again.
    pub bonus: bool,
    /// The player won with this roll.
    pub victory: bool,
}

impl TurnReport {
    /// The events describing this roll, in the order they happened.
    pub fn events(&self) -> Vec<GameEvent> {
        let player = self.player;
        let mut events = vec![GameEvent::Rolled {
            player,
            value: self.roll,
        }];
        match self.result {
            MoveResult::Accepted(step) => events.push(GameEvent::MoveAccepted {
                player,
                from: step.from,
                target: step.target,
                resolved: step.resolved,
                feature: step.feature,
            }),
            MoveResult::Rejected { from, target, .. } => {
                events.push(GameEvent::MoveRejected {
                    player,
                    from,
                    target,
                })
            }
        }
        if self.victory {
            events.push(GameEvent::Victory { player });
        } else if self.bonus {
            events.push(GameEvent::BonusTurn { player });
        }
        events
    }
}

/// A single game in progress (or just finished).
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    dice: Dice,
    phase: Phase,
    rolls: u64,
}

impl GameSession {
    /// Starts a game on a populated board; player 1 rolls first.
    #[instrument(skip(board, dice), fields(players = board.num_players(), win = *board.win_position(), dice = %dice))]
    pub fn new(board: Board, dice: Dice) -> Self {
        info!("Game session started");
        Self {
            board,
            dice,
            phase: Phase::AwaitRoll(PlayerId::FIRST),
            rolls: 0,
        }
    }

    /// Starts a game on the default layout sized and seated by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] if the configuration is invalid or the
    /// board has fewer than 100 squares.
    #[instrument]
    pub fn with_default_layout(config: &GameConfig) -> Result<Self, ConfigurationError> {
        config.validate()?;
        let mut board = Board::from_config(config)?;
        board
            .default_setup()
            .map_err(|_| ConfigurationError::LayoutDoesNotFit {
                win_position: config.win_position(),
            })?;
        let dice = Dice::new(*config.dice_min(), *config.dice_max())?;
        Ok(Self::new(board, dice))
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The dice.
    pub fn dice(&self) -> &Dice {
        &self.dice
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Player in turn, or `None` once finished.
    pub fn current_player(&self) -> Option<PlayerId> {
        match self.phase {
            Phase::AwaitRoll(player) => Some(player),
            Phase::Finished(_) => None,
        }
    }

    /// Winner, once finished.
    pub fn winner(&self) -> Option<PlayerId> {
        match self.phase {
            Phase::AwaitRoll(_) => None,
            Phase::Finished(player) => Some(player),
        }
    }

    /// Number of rolls made so far, rejected ones included.
    pub fn rolls(&self) -> u64 {
        self.rolls
    }

    /// Rolls for the player in turn and advances the state machine.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::GameOver`] once a player has won.
    #[instrument(skip(self, source))]
    pub fn roll(&mut self, source: &mut impl RollSource) -> Result<TurnReport, SessionError> {
        let player = match self.phase {
            Phase::AwaitRoll(player) => player,
            Phase::Finished(winner) => return Err(SessionError::GameOver { winner }),
        };
        let value = source.next_roll(&self.dice);
        self.apply(player, value)
    }

    fn apply(&mut self, player: PlayerId, roll: u32) -> Result<TurnReport, SessionError> {
        let result = self.board.move_player(player, roll)?;
        self.rolls += 1;

        let accepted = result.is_accepted();
        let victory = accepted && self.board.check_victory(player);
        let bonus = accepted && !victory && self.dice.got_one_more_roll(roll);

        self.phase = if victory {
            info!(%player, rolls = self.rolls, "Player won");
            Phase::Finished(player)
        } else if bonus {
            debug!(%player, "Bonus turn");
            Phase::AwaitRoll(player)
        } else {
            Phase::AwaitRoll(player.next(self.board.num_players()))
        };

        Ok(TurnReport {
            player,
            roll,
            result,
            bonus,
            victory,
        })
    }

    /// Snapshot of the game so far.
    pub fn record(&self) -> GameRecord {
        GameRecord::from_board(&self.board, &self.dice, self.winner())
    }

    /// Runs the turn loop until someone wins or `input` quits.
    ///
    /// Every step is reported to `sink`. On victory the finished record goes
    /// to `archive`; a failed save is reported as [`GameEvent::SaveFailed`]
    /// and does not fail the game.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] only if the board refuses a move, which
    /// cannot happen for the seats the session itself hands out.
    #[instrument(skip_all)]
    pub fn play(
        &mut self,
        source: &mut impl RollSource,
        input: &mut impl TurnInput,
        sink: &mut impl EventSink,
        archive: &mut impl GameArchive,
    ) -> Result<SessionEnd, SessionError> {
        let mut announce = true;
        loop {
            let player = match self.phase {
                Phase::AwaitRoll(player) => player,
                Phase::Finished(winner) => return Ok(SessionEnd::Won(winner)),
            };
            if announce {
                sink.emit(&GameEvent::TurnStarted { player });
            }

            if input.next_signal(player) == TurnSignal::Quit {
                info!(%player, "Game abandoned");
                return Ok(SessionEnd::Cancelled);
            }

            let report = self.roll(source)?;
            for event in report.events() {
                sink.emit(&event);
            }
            announce = !report.bonus;

            if report.victory {
                match archive.save(&self.record()) {
                    Ok(()) => sink.emit(&GameEvent::GameSaved),
                    Err(e) => {
                        warn!(error = %e, "Failed to save finished game");
                        sink.emit(&GameEvent::SaveFailed {
                            reason: e.to_string(),
                        });
                    }
                }
                return Ok(SessionEnd::Won(player));
            }
        }
    }
}
