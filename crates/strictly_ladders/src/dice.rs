//! Dice and the sources that roll them.

use std::collections::VecDeque;

use derive_getters::Getters;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::config::{ConfigurationError, DEFAULT_DICE_MAX, DEFAULT_DICE_MIN, validate_dice};

/// A dice with faces `min..=max`. Rolling `max` earns one more roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct Dice {
    /// Lowest face.
    min: u32,
    /// Highest face.
    max: u32,
}

impl Dice {
    /// Creates a dice.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidDice`] unless `min < max`.
    #[instrument]
    pub fn new(min: u32, max: u32) -> Result<Self, ConfigurationError> {
        validate_dice(min, max)?;
        Ok(Self { min, max })
    }

    /// Rolls uniformly in `min..=max`.
    pub fn roll<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        rng.gen_range(self.min..=self.max)
    }

    /// Whether `rolled` grants a bonus turn.
    pub fn got_one_more_roll(&self, rolled: u32) -> bool {
        rolled == self.max
    }

    /// Whether `value` is a face of this dice.
    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

impl Default for Dice {
    fn default() -> Self {
        Self {
            min: DEFAULT_DICE_MIN,
            max: DEFAULT_DICE_MAX,
        }
    }
}

impl std::fmt::Display for Dice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// Supplies dice values to a [`GameSession`](crate::GameSession).
pub trait RollSource {
    /// Produces the next value for `dice`.
    fn next_roll(&mut self, dice: &Dice) -> u32;
}

/// Uniform random rolls from a ChaCha8 generator.
#[derive(Debug, Clone)]
pub struct RandomRolls {
    rng: ChaCha8Rng,
}

impl RandomRolls {
    /// Seeds from the operating system.
    #[instrument]
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Reproducible rolls from a fixed seed.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl RollSource for RandomRolls {
    fn next_roll(&mut self, dice: &Dice) -> u32 {
        let value = dice.roll(&mut self.rng);
        debug!(value, "Rolled");
        value
    }
}

/// Rolls taken from a fixed list, for replays and tests.
///
/// Once the list runs out every roll is the dice minimum.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRolls {
    queue: VecDeque<u32>,
}

impl ScriptedRolls {
    /// Creates a source that yields `rolls` in order.
    pub fn new(rolls: impl IntoIterator<Item = u32>) -> Self {
        Self {
            queue: rolls.into_iter().collect(),
        }
    }

    /// Rolls not yet consumed.
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl RollSource for ScriptedRolls {
    fn next_roll(&mut self, dice: &Dice) -> u32 {
        self.queue.pop_front().unwrap_or(*dice.min())
    }
}
