use super::grid::{Dimensions, Grid, Position};
use crate::error::{MazeError, MazeResult};
use pest::{iterators::Pair, Parser};
use pest_derive::Parser;
use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Parser)]
#[grammar = "maze/grammar.pest"]
struct MazeFileParser;

/// One token of the maze file format.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Symbol {
    Open,
    Blocked,
    Start,
    Goal,
}

impl Symbol {
    pub fn from_token(token: &str) -> Option<Symbol> {
        match token {
            "0" => Some(Symbol::Open),
            "1" => Some(Symbol::Blocked),
            "S" => Some(Symbol::Start),
            "G" => Some(Symbol::Goal),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Symbol::Open => "0",
            Symbol::Blocked => "1",
            Symbol::Start => "S",
            Symbol::Goal => "G",
        }
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The immutable topology described by a maze file.
#[derive(Clone, Debug, PartialEq)]
pub struct MazeLayout {
    pub blocked: Grid,
    pub start: Position,
    pub goal: Position,
}

fn malformed<T>(message: String) -> MazeResult<T> {
    Err(MazeError::MalformedMaze(message))
}

fn place(slot: &mut Option<Position>, position: Position, name: &str) -> MazeResult<()> {
    match slot {
        Some(existing) => malformed(format!(
            "more than one {} cell, at {} and {}",
            name, existing, position
        )),
        None => {
            *slot = Some(position);
            Ok(())
        }
    }
}

fn read_row(
    pair: Pair<Rule>,
    row: usize,
    dimensions: Dimensions,
    blocked: &mut Grid,
    start: &mut Option<Position>,
    goal: &mut Option<Position>,
) -> MazeResult<()> {
    let cells: Vec<_> = pair.into_inner().map(|cell| cell.as_str()).collect();

    if cells.len() != dimensions.width {
        return malformed(format!(
            "row {} has {} cells, expected {}",
            row,
            cells.len(),
            dimensions.width
        ));
    }

    for (col, token) in cells.into_iter().enumerate() {
        let position = Position::new(row, col);

        match Symbol::from_token(token) {
            Some(Symbol::Open) => {}
            Some(Symbol::Blocked) => blocked.set(position, true),
            Some(Symbol::Start) => place(start, position, "start")?,
            Some(Symbol::Goal) => place(goal, position, "goal")?,
            None => {
                return malformed(format!(
                    "unrecognized token {:?} at {}",
                    token, position
                ))
            }
        }
    }

    Ok(())
}

/// Parses the text of a maze file laid out on a board of `dimensions`.
pub fn parse(contents: &str, dimensions: Dimensions) -> MazeResult<MazeLayout> {
    let file = MazeFileParser::parse(Rule::file, contents)
        .map_err(|error| MazeError::MalformedMaze(error.to_string()))?
        .next()
        .ok_or_else(|| MazeError::MalformedMaze(String::from("empty maze description")))?;

    let rows: Vec<_> = file
        .into_inner()
        .filter(|pair| pair.as_rule() == Rule::row)
        .collect();

    if rows.len() != dimensions.height {
        return malformed(format!(
            "found {} rows, expected {}",
            rows.len(),
            dimensions.height
        ));
    }

    let mut blocked = Grid::empty(dimensions);
    let mut start = None;
    let mut goal = None;

    for (row, pair) in rows.into_iter().enumerate() {
        read_row(pair, row, dimensions, &mut blocked, &mut start, &mut goal)?;
    }

    match (start, goal) {
        (Some(start), Some(goal)) => Ok(MazeLayout {
            blocked,
            start,
            goal,
        }),
        (None, _) => malformed(String::from("no start cell")),
        (_, None) => malformed(String::from("no goal cell")),
    }
}
