mod play;

use crate::maze::{MazeGame, Position};
pub use play::{TokenReader, GOODBYE_MESSAGE, PROMPT, WIN_MESSAGE};
use std::fmt;
use std::fmt::{Display, Formatter};
use tracing::{debug, info};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn all() -> std::slice::Iter<'static, Direction> {
        static DIRECTIONS: [Direction; 4] = [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ];
        DIRECTIONS.iter()
    }

    /// The `(row, col)` change of a single step.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// The cell one step away from `position`, which may lie off the board.
    pub fn step_from(self, position: Position) -> (isize, isize) {
        let (d_row, d_col) = self.offset();

        (position.row as isize + d_row, position.col as isize + d_col)
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A player command. Only the first character of a token is significant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Quit,
    Unrecognized(String),
}

impl Command {
    pub fn parse(token: &str) -> Command {
        let first = token.chars().next().map(|c| c.to_ascii_lowercase());

        match first {
            Some('u') => Command::Move(Direction::Up),
            Some('d') => Command::Move(Direction::Down),
            Some('l') => Command::Move(Direction::Left),
            Some('r') => Command::Move(Direction::Right),
            Some('q') => Command::Quit,
            _ => Command::Unrecognized(String::from(token)),
        }
    }
}

impl Display for Command {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Command::Move(direction) => Display::fmt(direction, f),
            Command::Quit => f.write_str("quit"),
            Command::Unrecognized(token) => f.write_str(token),
        }
    }
}

impl From<Direction> for Command {
    fn from(direction: Direction) -> Self {
        Command::Move(direction)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Quit,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameState {
    InProgress,
    Finished(Outcome),
}

/// What applying a single command did to the game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    /// The player stepped onto this cell.
    Moved(Position),
    /// The step was off the board or into a blocked cell.
    Rejected,
    /// The command was not understood.
    Unrecognized(String),
    /// The game is over.
    Finished(Outcome),
}

impl MazeGame {
    pub fn outcome(&self) -> Option<Outcome> {
        match self.state {
            GameState::InProgress => None,
            GameState::Finished(outcome) => Some(outcome),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.outcome().is_some()
    }

    /// Applies one command token and returns the resulting outcome, if the
    /// game has ended.
    pub fn make_move(&mut self, token: &str) -> Option<Outcome> {
        self.apply(Command::parse(token));
        self.outcome()
    }

    pub fn apply(&mut self, command: Command) -> Transition {
        if let GameState::Finished(outcome) = self.state {
            return Transition::Finished(outcome);
        }

        match command {
            Command::Quit => self.finish(Outcome::Quit),
            Command::Unrecognized(token) => {
                debug!(%token, "unrecognized command");
                Transition::Unrecognized(token)
            }
            Command::Move(direction) => {
                let (row, col) = direction.step_from(self.player());

                if !self.is_open(row, col) {
                    debug!(%direction, row, col, "move rejected");
                    return Transition::Rejected;
                }

                let target = self.visit(row, col);
                self.move_player(target);

                if self.player_at_goal() {
                    self.finish(Outcome::Won)
                } else {
                    Transition::Moved(target)
                }
            }
        }
    }

    /// Whether `(row, col)` is on the board and not blocked.
    pub fn is_open(&self, row: isize, col: isize) -> bool {
        match self.dimensions().position(row, col) {
            Some(position) => !self.is_blocked(position),
            None => false,
        }
    }

    pub fn player_at_goal(&self) -> bool {
        self.player() == self.goal()
    }

    fn visit(&mut self, row: isize, col: isize) -> Position {
        let position = Position::new(row as usize, col as usize);
        self.mark_visited(position);
        position
    }

    fn finish(&mut self, outcome: Outcome) -> Transition {
        info!(?outcome, player = %self.player(), "game finished");
        self.state = GameState::Finished(outcome);
        Transition::Finished(outcome)
    }
}
