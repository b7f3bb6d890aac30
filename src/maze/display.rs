use super::{MazeGame, Position};
use std::fmt;
use std::fmt::{Display, Formatter};

impl MazeGame {
    fn cell_char(&self, position: Position) -> char {
        if position == self.player {
            '@'
        } else if position == self.start {
            'S'
        } else if position == self.goal {
            'G'
        } else if self.visited.is_set(position) {
            '.'
        } else if self.blocked.is_set(position) {
            'X'
        } else {
            ' '
        }
    }
}

fn write_edge(f: &mut Formatter, width: usize) -> fmt::Result {
    f.write_str("*")?;
    for _ in 0..width {
        f.write_str("-")?;
    }
    f.write_str("*\n")
}

/// Draws the board inside a border, one line per row.
impl Display for MazeGame {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let width = self.dimensions.width;

        write_edge(f, width)?;

        for row in 0..self.dimensions.height {
            f.write_str("|")?;
            for col in 0..width {
                write!(f, "{}", self.cell_char(Position::new(row, col)))?;
            }
            f.write_str("|\n")?;
        }

        write_edge(f, width)
    }
}
