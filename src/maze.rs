mod display;
mod grid;
mod parser;

use crate::engine::GameState;
use crate::error::{MazeError, MazeResult};
pub use grid::{Dimensions, Grid, Position, HEIGHT, WIDTH};
pub use parser::{parse, MazeLayout, Symbol};
use std::fs;
use std::path::Path;
use tracing::{debug, instrument};

/// A loaded maze together with the player's progress through it.
///
/// `blocked`, `start` and `goal` come from the maze source and are only
/// replaced through the explicit setters. `player` and `visited` change as
/// moves are applied.
#[derive(Clone, Debug, PartialEq)]
pub struct MazeGame {
    dimensions: Dimensions,
    blocked: Grid,
    visited: Grid,
    player: Position,
    start: Position,
    goal: Position,
    pub(crate) state: GameState,
}

impl MazeGame {
    /// Loads a maze file laid out on a standard `HEIGHT` x `WIDTH` board.
    pub fn load<P: AsRef<Path>>(path: P) -> MazeResult<MazeGame> {
        Self::load_with_dimensions(path, Dimensions::STANDARD)
    }

    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_with_dimensions<P: AsRef<Path>>(
        path: P,
        dimensions: Dimensions,
    ) -> MazeResult<MazeGame> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| MazeError::SourceNotFound {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_text(&contents, dimensions)
    }

    pub fn from_text(contents: &str, dimensions: Dimensions) -> MazeResult<MazeGame> {
        let layout = parse(contents, dimensions)?;

        debug!(start = %layout.start, goal = %layout.goal, "loaded maze");

        Ok(Self::from_layout(layout))
    }

    /// Starts a new game on `layout`, with the player standing on the start cell.
    pub fn from_layout(layout: MazeLayout) -> MazeGame {
        let dimensions = layout.blocked.dimensions();
        let mut visited = Grid::empty(dimensions);
        visited.set(layout.start, true);

        MazeGame {
            dimensions,
            blocked: layout.blocked,
            visited,
            player: layout.start,
            start: layout.start,
            goal: layout.goal,
            state: GameState::InProgress,
        }
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn player(&self) -> Position {
        self.player
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn goal(&self) -> Position {
        self.goal
    }

    pub fn player_row(&self) -> usize {
        self.player.row
    }

    pub fn player_col(&self) -> usize {
        self.player.col
    }

    pub fn start_row(&self) -> usize {
        self.start.row
    }

    pub fn start_col(&self) -> usize {
        self.start.col
    }

    pub fn goal_row(&self) -> usize {
        self.goal.row
    }

    pub fn goal_col(&self) -> usize {
        self.goal.col
    }

    /// A copy of the blocked cells.
    pub fn blocked(&self) -> Grid {
        self.blocked.clone()
    }

    /// A copy of the visited cells.
    pub fn visited(&self) -> Grid {
        self.visited.clone()
    }

    pub fn is_blocked(&self, position: Position) -> bool {
        self.blocked.is_set(position)
    }

    pub fn is_visited(&self, position: Position) -> bool {
        self.visited.is_set(position)
    }

    // Coordinates outside the board are ignored.

    pub fn set_player_row(&mut self, row: isize) {
        set_row(&mut self.player, row, self.dimensions);
    }

    pub fn set_player_col(&mut self, col: isize) {
        set_col(&mut self.player, col, self.dimensions);
    }

    pub fn set_start_row(&mut self, row: isize) {
        set_row(&mut self.start, row, self.dimensions);
    }

    pub fn set_start_col(&mut self, col: isize) {
        set_col(&mut self.start, col, self.dimensions);
    }

    pub fn set_goal_row(&mut self, row: isize) {
        set_row(&mut self.goal, row, self.dimensions);
    }

    pub fn set_goal_col(&mut self, col: isize) {
        set_col(&mut self.goal, col, self.dimensions);
    }

    /// Replaces the blocked cells. `blocked` must have this game's dimensions.
    pub fn set_blocked(&mut self, blocked: Grid) {
        debug_assert_eq!(blocked.dimensions(), self.dimensions);
        self.blocked = blocked;
    }

    /// Replaces the visited cells. `visited` must have this game's dimensions.
    pub fn set_visited(&mut self, visited: Grid) {
        debug_assert_eq!(visited.dimensions(), self.dimensions);
        self.visited = visited;
    }

    pub(crate) fn move_player(&mut self, position: Position) {
        self.player = position;
    }

    pub(crate) fn mark_visited(&mut self, position: Position) {
        self.visited.set(position, true);
    }
}

fn set_row(position: &mut Position, row: isize, dimensions: Dimensions) {
    if dimensions.contains_row(row) {
        position.row = row as usize;
    }
}

fn set_col(position: &mut Position, col: isize, dimensions: Dimensions) {
    if dimensions.contains_col(col) {
        position.col = col as usize;
    }
}
