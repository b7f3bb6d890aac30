use std::fmt;
use std::fmt::{Debug, Display, Formatter};
use std::ops::Index;

/// Number of rows on a standard board.
pub const HEIGHT: usize = 19;

/// Number of columns on a standard board.
pub const WIDTH: usize = 39;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Position {
        Position { row, col }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The shape of a board, in cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Dimensions {
    pub height: usize,
    pub width: usize,
}

impl Dimensions {
    pub const STANDARD: Dimensions = Dimensions::new(HEIGHT, WIDTH);

    pub const fn new(height: usize, width: usize) -> Dimensions {
        Dimensions { height, width }
    }

    pub fn cell_count(self) -> usize {
        self.height * self.width
    }

    pub fn contains_row(self, row: isize) -> bool {
        row >= 0 && (row as usize) < self.height
    }

    pub fn contains_col(self, col: isize) -> bool {
        col >= 0 && (col as usize) < self.width
    }

    /// The position at `(row, col)`, if it lies on the board.
    pub fn position(self, row: isize, col: isize) -> Option<Position> {
        if self.contains_row(row) && self.contains_col(col) {
            Some(Position::new(row as usize, col as usize))
        } else {
            None
        }
    }

    /// Every position on the board in row-major order.
    pub fn positions(self) -> impl Iterator<Item = Position> {
        let width = self.width;
        (0..self.cell_count()).map(move |index| Position::new(index / width, index % width))
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Dimensions::STANDARD
    }
}

impl Display for Dimensions {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}x{}", self.height, self.width)
    }
}

/// A boolean value for every cell of a board, stored row-major.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    dimensions: Dimensions,
    cells: Vec<bool>,
}

impl Grid {
    pub fn empty(dimensions: Dimensions) -> Grid {
        Grid {
            dimensions,
            cells: vec![false; dimensions.cell_count()],
        }
    }

    /// Builds a grid from nested rows. Every row must have the same length.
    pub fn from_rows(rows: &[Vec<bool>]) -> Grid {
        let width = rows.first().map_or(0, Vec::len);
        debug_assert!(rows.iter().all(|row| row.len() == width));

        Grid {
            dimensions: Dimensions::new(rows.len(), width),
            cells: rows.iter().flatten().copied().collect(),
        }
    }

    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        if self.dimensions.width == 0 {
            return vec![Vec::new(); self.dimensions.height];
        }

        self.cells
            .chunks(self.dimensions.width)
            .map(<[bool]>::to_vec)
            .collect()
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn is_set(&self, position: Position) -> bool {
        self.cells[self.index_of(position)]
    }

    pub fn set(&mut self, position: Position, value: bool) {
        let index = self.index_of(position);
        self.cells[index] = value;
    }

    /// Positions of the set cells in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.dimensions
            .positions()
            .zip(self.cells.iter())
            .filter(|(_, set)| **set)
            .map(|(position, _)| position)
    }

    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&set| set).count()
    }

    fn index_of(&self, position: Position) -> usize {
        debug_assert!(position.row < self.dimensions.height);
        debug_assert!(position.col < self.dimensions.width);

        position.row * self.dimensions.width + position.col
    }
}

impl Index<Position> for Grid {
    type Output = bool;

    fn index(&self, position: Position) -> &bool {
        &self.cells[self.index_of(position)]
    }
}

impl Debug for Grid {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        for row in self.to_rows() {
            for cell in row {
                f.write_str(if cell { "1" } else { "0" })?;
            }
            f.write_str("\n")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn positions_are_row_major() {
        let positions: Vec<_> = Dimensions::new(2, 3).positions().collect();

        assert_eq!(
            positions,
            vec![
                Position::new(0, 0),
                Position::new(0, 1),
                Position::new(0, 2),
                Position::new(1, 0),
                Position::new(1, 1),
                Position::new(1, 2),
            ]
        );
    }

    #[test]
    fn position_rejects_off_board_coordinates() {
        let dimensions = Dimensions::new(3, 4);

        assert_eq!(dimensions.position(2, 3), Some(Position::new(2, 3)));
        assert_eq!(dimensions.position(-1, 0), None);
        assert_eq!(dimensions.position(0, -1), None);
        assert_eq!(dimensions.position(3, 0), None);
        assert_eq!(dimensions.position(0, 4), None);
    }

    #[test]
    fn set_cells_are_reported() {
        let mut grid = Grid::empty(Dimensions::new(3, 3));
        grid.set(Position::new(0, 2), true);
        grid.set(Position::new(2, 1), true);

        assert!(grid.is_set(Position::new(0, 2)));
        assert!(grid[Position::new(2, 1)]);
        assert!(!grid.is_set(Position::new(1, 1)));
        assert_eq!(grid.count(), 2);
        assert_eq!(
            grid.positions().collect::<Vec<_>>(),
            vec![Position::new(0, 2), Position::new(2, 1)]
        );
    }

    #[test]
    fn rows_survive_conversion() {
        let rows = vec![vec![true, false, false], vec![false, true, true]];
        let grid = Grid::from_rows(&rows);

        assert_eq!(grid.dimensions(), Dimensions::new(2, 3));
        assert_eq!(grid.to_rows(), rows);
        assert_eq!(format!("{:?}", grid), "100\n011\n");
    }

    #[test]
    fn clones_are_independent() {
        let original = Grid::empty(Dimensions::new(2, 2));
        let mut copy = original.clone();
        copy.set(Position::new(1, 1), true);

        assert!(!original.is_set(Position::new(1, 1)));
        assert_ne!(original, copy);
    }
}
