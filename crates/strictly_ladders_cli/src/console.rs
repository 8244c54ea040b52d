//! Console adapters for the game engine's input and output traits.

use std::io::{BufRead, Write};
use strictly_ladders::{EventSink, GameEvent, PlayerId, TurnInput, TurnSignal};
use tracing::{debug, instrument, warn};

use crate::prompt::{PromptError, Prompter};

/// Reads roll requests from the console.
///
/// Enter rolls, `q` quits, anything else asks again. End of input quits.
#[derive(Debug)]
pub struct ConsoleInput<'a, R, W> {
    prompter: &'a mut Prompter<R, W>,
}

impl<'a, R: BufRead, W: Write> ConsoleInput<'a, R, W> {
    /// Borrows the prompter for the length of a game.
    pub fn new(prompter: &'a mut Prompter<R, W>) -> Self {
        Self { prompter }
    }

    fn read_signal(&mut self) -> Result<TurnSignal, PromptError> {
        loop {
            let answer = self
                .prompter
                .line("\tPress enter to roll a dice (q to quit) ")?;
            match answer.trim() {
                "" => return Ok(TurnSignal::Roll),
                "q" | "Q" => return Ok(TurnSignal::Quit),
                _ => self.prompter.say(">>>> Please roll a dice to move forward")?,
            }
        }
    }
}

impl<R: BufRead, W: Write> TurnInput for ConsoleInput<'_, R, W> {
    #[instrument(skip(self), fields(player = %player))]
    fn next_signal(&mut self, player: PlayerId) -> TurnSignal {
        match self.read_signal() {
            Ok(signal) => signal,
            Err(PromptError::Closed) => {
                debug!("Input closed during game");
                TurnSignal::Quit
            }
            Err(e) => {
                warn!(error = %e, "Console input failed, quitting game");
                TurnSignal::Quit
            }
        }
    }
}

/// Prints game events as `>>>> ` prefixed console lines.
#[derive(Debug)]
pub struct ConsoleReporter<W> {
    out: W,
}

impl<W: Write> ConsoleReporter<W> {
    /// Reports to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consumes the reporter, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_event(&mut self, event: &GameEvent) -> std::io::Result<()> {
        match event {
            GameEvent::TurnStarted { .. } => writeln!(self.out)?,
            GameEvent::PlacementRejected { .. } => {
                return writeln!(self.out, "\t>>>> {}", event);
            }
            _ => {}
        }
        for line in event.to_string().lines() {
            writeln!(self.out, ">>>> {}", line)?;
        }
        self.out.flush()
    }
}

impl<W: Write> EventSink for ConsoleReporter<W> {
    fn emit(&mut self, event: &GameEvent) {
        if let Err(e) = self.write_event(event) {
            warn!(error = %e, "Failed to print game event");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use strictly_ladders::FeatureKind;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_enter_rolls_and_q_quits() {
        let mut p = prompter("\nq\n");
        let mut input = ConsoleInput::new(&mut p);
        assert_eq!(input.next_signal(PlayerId::FIRST), TurnSignal::Roll);
        assert_eq!(input.next_signal(PlayerId::FIRST), TurnSignal::Quit);
        assert_eq!(input.next_signal(PlayerId::FIRST), TurnSignal::Quit);
    }

    #[test]
    fn test_other_text_reprompts() {
        let mut p = prompter("roll\n\n");
        assert_eq!(
            ConsoleInput::new(&mut p).next_signal(PlayerId::FIRST),
            TurnSignal::Roll
        );
        let out = String::from_utf8(p.into_output()).unwrap();
        assert!(out.contains(">>>> Please roll a dice to move forward"));
    }

    #[test]
    fn test_reporter_prefixes_every_line() {
        let mut reporter = ConsoleReporter::new(Vec::new());
        reporter.emit(&GameEvent::TurnStarted {
            player: PlayerId::FIRST,
        });
        reporter.emit(&GameEvent::MoveAccepted {
            player: PlayerId::FIRST,
            from: 0,
            target: 5,
            resolved: 34,
            feature: Some(FeatureKind::Ladder),
        });
        let out = String::from_utf8(reporter.into_inner()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "");
        assert_eq!(lines[1], ">>>> Player 1's turn");
        assert!(lines[2].starts_with(">>>> Moving Player 1 from 0"));
        assert!(lines[3].starts_with(">>>> WOW! Found a ladder"));
    }
}
