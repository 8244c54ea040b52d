//! Console statistics for the last saved game.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::io::{BufRead, Write};
use strictly_ladders::{GameRecord, PlayerSeries};
use strum::{EnumIter, IntoEnumIterator};
use tracing::{debug, instrument};

use crate::prompt::{PromptError, Prompter};

/// Histograms list every face up to this many; wider dice list rolled faces only.
const MAX_LISTED_FACES: u32 = 20;

/// Entries of the statistics submenu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum StatsChoice {
    /// Table of positions per turn.
    Positions,
    /// Dice face counts per player.
    RollHistogram,
    /// Back to the main menu.
    Return,
}

impl StatsChoice {
    /// Menu label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Positions => "Show players' positions",
            Self::RollHistogram => "Show dice roll histogram",
            Self::Return => "Return",
        }
    }

    /// Choice for a one-based menu number.
    pub fn from_number(n: u32) -> Option<Self> {
        let index = usize::try_from(n.checked_sub(1)?).ok()?;
        Self::iter().nth(index)
    }
}

/// One line describing the game setup and result.
pub fn render_summary(record: &GameRecord) -> String {
    let winner = match record.winner() {
        Some(player) => player.to_string(),
        None => "nobody".to_string(),
    };
    format!(
        "Board {}x{}, dice {}-{}, {} ladders, {} snakes, won by {} ({})",
        record.rows(),
        record.columns(),
        record.dice_min(),
        record.dice_max(),
        record.ladders().len(),
        record.snakes().len(),
        winner,
        record.played_at().format("%Y-%m-%d %H:%M UTC"),
    )
}

fn render_table(
    title: &str,
    first_column: &str,
    series: &[PlayerSeries],
    first_index: usize,
) -> String {
    let headers: Vec<String> = series.iter().map(|s| s.player().to_string()).collect();
    let widths: Vec<usize> = headers.iter().map(|h| h.len().max(4)).collect();
    let rows = series.iter().map(|s| s.values().len()).max().unwrap_or(0);
    let index_width = first_column.len().max((rows + first_index).to_string().len());

    let mut out = String::new();
    let _ = writeln!(out, "\t\t{}", title);
    let _ = write!(out, "{:>w$}", first_column, w = index_width);
    for (header, width) in headers.iter().zip(&widths) {
        let _ = write!(out, "  {:>w$}", header, w = width);
    }
    out.push('\n');

    for row in 0..rows {
        let _ = write!(out, "{:>w$}", row + first_index, w = index_width);
        for (s, width) in series.iter().zip(&widths) {
            match s.values().get(row) {
                Some(v) => {
                    let _ = write!(out, "  {:>w$}", v, w = width);
                }
                None => {
                    let _ = write!(out, "  {:>w$}", "", w = width);
                }
            }
        }
        out.push('\n');
    }
    out
}

/// Positions of every player after each of their moves. Row 0 is the start.
pub fn render_positions(record: &GameRecord) -> String {
    let mut out = render_table("Players' position data", "Move", record.moves(), 0);
    out.push('\n');
    out.push_str(&render_table(
        "Players' dice roll data",
        "Roll",
        record.rolls(),
        1,
    ));
    out
}

/// Counts of each dice face per player, drawn as bars.
pub fn render_histogram(record: &GameRecord) -> String {
    let (min, max) = (*record.dice_min(), *record.dice_max());
    let face_width = max.to_string().len();
    let mut out = String::new();

    for series in record.rolls() {
        let mut counts: BTreeMap<u32, usize> = BTreeMap::new();
        if max.saturating_sub(min) < MAX_LISTED_FACES {
            counts.extend((min..=max).map(|face| (face, 0)));
        }
        for value in series.values() {
            *counts.entry(*value).or_default() += 1;
        }

        let _ = writeln!(out, "\t\t{} ({} rolls)", series.player(), series.values().len());
        for (face, count) in counts {
            let _ = writeln!(
                out,
                "{:>w$} | {} {}",
                face,
                "#".repeat(count),
                count,
                w = face_width
            );
        }
        out.push('\n');
    }
    out
}

/// Runs the statistics submenu until the user returns.
///
/// # Errors
///
/// Returns [`PromptError`] if the console fails or input ends.
#[instrument(skip_all)]
pub fn stats_menu<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    record: &GameRecord,
) -> Result<(), PromptError> {
    prompter.say(render_summary(record))?;
    loop {
        for (n, choice) in StatsChoice::iter().enumerate() {
            prompter.say(format!("\t{}. {}", n + 1, choice.label()))?;
        }
        let picked = prompter.choice("\nEnter your choice (1-3): ", 3)?;
        debug!(picked, "Stats menu choice");
        match StatsChoice::from_number(picked) {
            Some(StatsChoice::Positions) => prompter.say(render_positions(record))?,
            Some(StatsChoice::RollHistogram) => prompter.say(render_histogram(record))?,
            Some(StatsChoice::Return) | None => return Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choice_numbers() {
        assert_eq!(StatsChoice::from_number(1), Some(StatsChoice::Positions));
        assert_eq!(StatsChoice::from_number(3), Some(StatsChoice::Return));
        assert_eq!(StatsChoice::from_number(0), None);
        assert_eq!(StatsChoice::from_number(4), None);
    }
}
