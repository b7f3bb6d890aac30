use crate::engine::Direction;
use crate::maze::{Dimensions, Grid, Position, Symbol};
use rand::prelude::*;
use std::cmp::Ordering;

/// A partially filled symbolic board. Unset cells become walls at the end.
pub struct Sketch {
    dimensions: Dimensions,
    cells: Vec<Option<Symbol>>,
}

impl Sketch {
    pub fn new(dimensions: Dimensions) -> Sketch {
        Sketch {
            dimensions,
            cells: vec![None; dimensions.cell_count()],
        }
    }

    pub fn get(&self, position: Position) -> Option<Symbol> {
        self.cells[self.index_of(position)]
    }

    pub fn mark(&mut self, position: Position, symbol: Symbol) {
        let index = self.index_of(position);
        self.cells[index] = Some(symbol);
    }

    /// A uniformly chosen unset cell accepted by `allowed`.
    pub fn unused_cell<G: Rng, F: Fn(Position) -> bool>(
        &self,
        rng: &mut G,
        allowed: F,
    ) -> Option<Position> {
        self.dimensions
            .positions()
            .filter(|&position| self.get(position).is_none() && allowed(position))
            .choose(rng)
    }

    /// Turns every unset cell into a wall, returning the finished symbols
    /// and the matching blocked grid.
    pub fn fill_blocked(self) -> (Vec<Symbol>, Grid) {
        let mut blocked = Grid::empty(self.dimensions);

        let symbols: Vec<Symbol> = self
            .dimensions
            .positions()
            .zip(self.cells)
            .map(|(position, cell)| {
                cell.unwrap_or_else(|| {
                    blocked.set(position, true);
                    Symbol::Blocked
                })
            })
            .collect();

        (symbols, blocked)
    }

    fn index_of(&self, position: Position) -> usize {
        position.row * self.dimensions.width + position.col
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Axis {
    Row,
    Column,
}

/// The moves along a carved path and every cell they pass through.
pub struct CarvedPath {
    pub moves: Vec<Direction>,
    pub visited: Grid,
}

fn advance(position: Position, direction: Direction) -> Position {
    match direction {
        Direction::Up => Position::new(position.row - 1, position.col),
        Direction::Down => Position::new(position.row + 1, position.col),
        Direction::Left => Position::new(position.row, position.col - 1),
        Direction::Right => Position::new(position.row, position.col + 1),
    }
}

fn direction_towards(current: Position, goal: Position, axis: Axis) -> Option<Direction> {
    let (ordering, less, greater) = match axis {
        Axis::Row => (current.row.cmp(&goal.row), Direction::Down, Direction::Up),
        Axis::Column => (current.col.cmp(&goal.col), Direction::Right, Direction::Left),
    };

    match ordering {
        Ordering::Less => Some(less),
        Ordering::Greater => Some(greater),
        Ordering::Equal => None,
    }
}

/// Opens a straight leg towards the goal's row, then one towards its column
/// (or the other way round when `row_first` is false).
pub fn carve_path(sketch: &mut Sketch, start: Position, goal: Position, row_first: bool) -> CarvedPath {
    let legs = if row_first {
        [Axis::Row, Axis::Column]
    } else {
        [Axis::Column, Axis::Row]
    };

    let mut visited = Grid::empty(sketch.dimensions);
    visited.set(start, true);

    let mut moves = Vec::new();
    let mut current = start;

    for &axis in legs.iter() {
        while let Some(direction) = direction_towards(current, goal, axis) {
            current = advance(current, direction);
            moves.push(direction);
            visited.set(current, true);

            if sketch.get(current) != Some(Symbol::Goal) {
                sketch.mark(current, Symbol::Open);
            }
        }
    }

    CarvedPath { moves, visited }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_display_snapshot;

    fn describe(moves: &[Direction]) -> String {
        moves
            .iter()
            .map(|direction| direction.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn sketch_with(dimensions: Dimensions, start: Position, goal: Position) -> Sketch {
        let mut sketch = Sketch::new(dimensions);
        sketch.mark(start, Symbol::Start);
        sketch.mark(goal, Symbol::Goal);
        sketch
    }

    #[test]
    fn row_leg_first() {
        let (start, goal) = (Position::new(0, 0), Position::new(2, 3));
        let mut sketch = sketch_with(Dimensions::new(3, 4), start, goal);

        let path = carve_path(&mut sketch, start, goal, true);

        assert_display_snapshot!(describe(&path.moves), @"down down right right right");
        assert_eq!(format!("{:?}", path.visited), "1000\n1000\n1111\n");
    }

    #[test]
    fn column_leg_first() {
        let (start, goal) = (Position::new(2, 3), Position::new(0, 1));
        let mut sketch = sketch_with(Dimensions::new(3, 4), start, goal);

        let path = carve_path(&mut sketch, start, goal, false);

        assert_display_snapshot!(describe(&path.moves), @"left left up up");
        assert_eq!(format!("{:?}", path.visited), "0100\n0100\n0111\n");
    }

    #[test]
    fn goal_and_start_are_kept() {
        let (start, goal) = (Position::new(1, 0), Position::new(1, 3));
        let mut sketch = sketch_with(Dimensions::new(3, 4), start, goal);

        carve_path(&mut sketch, start, goal, true);
        let (symbols, blocked) = sketch.fill_blocked();

        assert_eq!(
            symbols[4..8].to_vec(),
            vec![Symbol::Start, Symbol::Open, Symbol::Open, Symbol::Goal]
        );
        assert_eq!(format!("{:?}", blocked), "1111\n0000\n1111\n");
    }

    #[test]
    fn unused_cell_respects_filter() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut sketch = Sketch::new(Dimensions::new(2, 2));
        sketch.mark(Position::new(0, 0), Symbol::Start);

        for _ in 0..20 {
            let cell = sketch
                .unused_cell(&mut rng, |position| position.row != 0 && position.col != 0)
                .unwrap();
            assert_eq!(cell, Position::new(1, 1));
        }

        sketch.mark(Position::new(1, 1), Symbol::Goal);
        assert_eq!(
            sketch.unused_cell(&mut rng, |position| position.row == 1),
            Some(Position::new(1, 0))
        );
        assert_eq!(
            sketch.unused_cell(&mut rng, |position| position == Position::new(1, 1)),
            None
        );
    }
}
