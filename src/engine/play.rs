use super::{Command, Outcome, Transition};
use crate::error::{MazeError, MazeResult};
use crate::maze::MazeGame;
use std::collections::VecDeque;
use std::io::{BufRead, Write};
use tracing::instrument;

pub const PROMPT: &str = "Enter your move (up, down, left, right, or q to quit): ";
pub const WIN_MESSAGE: &str = "You Won!\n";
pub const GOODBYE_MESSAGE: &str = "Goodbye!\n";

/// Splits a reader into whitespace-delimited tokens, reading a line at a time.
pub struct TokenReader<R: BufRead> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// The next token, or `None` once the reader is exhausted.
    pub fn next_token(&mut self) -> MazeResult<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }

            self.pending
                .extend(line.split_whitespace().map(String::from));
        }
    }
}

impl MazeGame {
    /// Plays until the game is won or the player quits.
    ///
    /// Before every command the board and prompt are written to `output`.
    /// Running out of commands is an error rather than a quit.
    #[instrument(skip(self, input, output))]
    pub fn play<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> MazeResult<Outcome> {
        let mut tokens = TokenReader::new(input);

        let outcome = loop {
            if let Some(outcome) = self.outcome() {
                break outcome;
            }

            write!(output, "{}{}", self, PROMPT)?;
            output.flush()?;

            let token = tokens.next_token()?.ok_or(MazeError::InputExhausted)?;

            if let Transition::Unrecognized(token) = self.apply(Command::parse(&token)) {
                writeln!(output, "Unrecognized command: {}", token)?;
            }
        };

        output.write_all(match outcome {
            Outcome::Won => WIN_MESSAGE.as_bytes(),
            Outcome::Quit => GOODBYE_MESSAGE.as_bytes(),
        })?;
        output.flush()?;

        Ok(outcome)
    }
}
