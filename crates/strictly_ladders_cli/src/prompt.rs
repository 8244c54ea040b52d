//! Line-oriented prompts that re-ask until the answer is usable.
//!
//! Every prompt writes its question, reads one line and either returns a
//! value or prints a short reason and asks again. End of input is reported
//! as [`PromptError::Closed`] so callers can leave cleanly.

use derive_more::{Display, Error, From};
use std::io::{BufRead, Write};
use strictly_ladders::{ConfigurationError, validate_players};
use tracing::{debug, instrument};

/// Failure to get an answer from the user.
#[derive(Debug, Display, Error, From)]
pub enum PromptError {
    /// The input stream ended.
    #[display("Input closed")]
    Closed,
    /// Reading or writing the console failed.
    #[display("Console I/O failed: {}", _0)]
    #[from]
    Io(std::io::Error),
}

/// Answer to a number-or-default question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberOrDefault {
    /// The user typed a positive number.
    Number(u32),
    /// The user pressed Enter.
    Default,
}

/// Outcome of parsing one line as a whole number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedNumber {
    /// A number that fits in `u32`.
    Value(u32),
    /// A number below zero.
    Negative,
    /// Anything else.
    Invalid,
}

/// Parses a line as a whole number, telling negatives apart from garbage.
pub fn parse_number(text: &str) -> ParsedNumber {
    match text.trim().parse::<i64>() {
        Ok(n) if n < 0 => ParsedNumber::Negative,
        Ok(n) => u32::try_from(n).map_or(ParsedNumber::Invalid, ParsedNumber::Value),
        Err(_) => ParsedNumber::Invalid,
    }
}

/// Parses `a,b` into a pair of squares. Spaces around either number are allowed.
pub fn parse_pair(text: &str) -> Option<(u32, u32)> {
    let (a, b) = text.trim().split_once(',')?;
    let a = a.trim().parse().ok()?;
    let b = b.trim().parse().ok()?;
    Some((a, b))
}

/// Console question-and-answer over any reader and writer.
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Wraps a reader and writer.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the prompter, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes a line of text.
    ///
    /// # Errors
    ///
    /// Returns [`PromptError::Io`] if writing fails.
    pub fn say(&mut self, text: impl std::fmt::Display) -> Result<(), PromptError> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Shows `message` and reads one line without its line ending.
    ///
    /// # Errors
    ///
    /// Returns [`PromptError::Closed`] at end of input.
    #[instrument(skip(self))]
    pub fn line(&mut self, message: &str) -> Result<String, PromptError> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            debug!("Input closed");
            return Err(PromptError::Closed);
        }
        Ok(buf.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Asks until the answer is a whole number (zero allowed).
    ///
    /// # Errors
    ///
    /// Returns [`PromptError::Closed`] at end of input.
    #[instrument(skip(self))]
    pub fn number(&mut self, message: &str) -> Result<u32, PromptError> {
        loop {
            match parse_number(&self.line(message)?) {
                ParsedNumber::Value(n) => return Ok(n),
                ParsedNumber::Negative => self.say("\t>>>> Enter a positive integer")?,
                ParsedNumber::Invalid => self.say("\t>>>> Enter a valid number")?,
            }
        }
    }

    /// Asks until the answer is a number of at least 1, or blank for the default.
    ///
    /// # Errors
    ///
    /// Returns [`PromptError::Closed`] at end of input.
    #[instrument(skip(self))]
    pub fn number_or_default(&mut self, message: &str) -> Result<NumberOrDefault, PromptError> {
        let message = format!("{}(press Enter for choosing default value) ", message);
        loop {
            let answer = self.line(&message)?;
            if answer.trim().is_empty() {
                return Ok(NumberOrDefault::Default);
            }
            match parse_number(&answer) {
                ParsedNumber::Value(n) if n >= 1 => return Ok(NumberOrDefault::Number(n)),
                ParsedNumber::Value(_) | ParsedNumber::Negative => {
                    self.say("\t>>>> Enter a positive non zero integer")?
                }
                ParsedNumber::Invalid => self.say("\t>>>> Enter a valid number")?,
            }
        }
    }

    /// Like [`Prompter::number_or_default`], substituting `default` for blank input.
    ///
    /// # Errors
    ///
    /// Returns [`PromptError::Closed`] at end of input.
    pub fn number_with_default(&mut self, message: &str, default: u32) -> Result<u32, PromptError> {
        Ok(match self.number_or_default(message)? {
            NumberOrDefault::Number(n) => n,
            NumberOrDefault::Default => default,
        })
    }

    /// Asks until the answer is a valid number of players.
    ///
    /// # Errors
    ///
    /// Returns [`PromptError::Closed`] at end of input.
    #[instrument(skip(self))]
    pub fn players(&mut self) -> Result<u32, PromptError> {
        loop {
            let answer = self.line("\tQ. How many players want to play: ")?;
            match parse_number(&answer) {
                ParsedNumber::Value(n) => match validate_players(n) {
                    Ok(()) => return Ok(n),
                    Err(ConfigurationError::TooManyPlayers { .. }) => self.say(format!(
                        ">>>> At most {} players can share a board",
                        strictly_ladders::MAX_PLAYERS
                    ))?,
                    Err(_) => self.say(">>>> You need at least 2 players to play a game")?,
                },
                ParsedNumber::Negative => {
                    self.say(">>>> You need at least 2 players to play a game")?
                }
                ParsedNumber::Invalid => self.say("\t>>>> Enter a valid number of players")?,
            }
        }
    }

    /// Asks until the answer is one of `1..=max`.
    ///
    /// # Errors
    ///
    /// Returns [`PromptError::Closed`] at end of input.
    pub fn choice(&mut self, message: &str, max: u32) -> Result<u32, PromptError> {
        loop {
            let answer = self.line(message)?;
            self.say("")?;
            match parse_number(&answer) {
                ParsedNumber::Value(n) if (1..=max).contains(&n) => return Ok(n),
                _ => self.say(format!(
                    ">>>> Select an available choice between 1 and {}",
                    max
                ))?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn printed(p: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(p.into_output()).unwrap()
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number(" 12 "), ParsedNumber::Value(12));
        assert_eq!(parse_number("-3"), ParsedNumber::Negative);
        assert_eq!(parse_number("ten"), ParsedNumber::Invalid);
        assert_eq!(parse_number(""), ParsedNumber::Invalid);
    }

    #[test]
    fn test_parse_pair() {
        assert_eq!(parse_pair("2,98"), Some((2, 98)));
        assert_eq!(parse_pair(" 98 , 2 "), Some((98, 2)));
        assert_eq!(parse_pair("98"), None);
        assert_eq!(parse_pair("a,2"), None);
        assert_eq!(parse_pair("1,2,3"), None);
    }

    #[test]
    fn test_number_reprompts() {
        let mut p = prompter("abc\n-4\n7\n");
        assert_eq!(p.number("n? ").unwrap(), 7);
        let out = printed(p);
        assert!(out.contains("Enter a valid number"));
        assert!(out.contains("Enter a positive integer"));
    }

    #[test]
    fn test_number_or_default() {
        let mut p = prompter("\n0\n12\n");
        assert_eq!(p.number_or_default("rows? ").unwrap(), NumberOrDefault::Default);
        assert_eq!(p.number_with_default("rows? ", 10).unwrap(), 12);
        assert!(printed(p).contains("Enter a positive non zero integer"));
    }

    #[test]
    fn test_players_needs_two() {
        let mut p = prompter("1\nmany\n4000000000\n3\n");
        assert_eq!(p.players().unwrap(), 3);
        let out = printed(p);
        assert!(out.contains("You need at least 2 players"));
        assert!(out.contains("At most 100 players can share a board"));
        assert!(out.contains("Enter a valid number of players"));
    }

    #[test]
    fn test_end_of_input_is_closed() {
        let mut p = prompter("");
        assert!(matches!(p.line("? "), Err(PromptError::Closed)));
        let mut p = prompter("x\n");
        assert!(matches!(p.number("? "), Err(PromptError::Closed)));
    }

    #[test]
    fn test_choice_range() {
        let mut p = prompter("5\n0\n2\n");
        assert_eq!(p.choice("pick: ", 4).unwrap(), 2);
        assert!(printed(p).contains("Select an available choice between 1 and 4"));
    }
}
