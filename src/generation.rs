mod carve;
mod transcript;

use crate::engine::Direction;
use crate::error::{MazeError, MazeResult};
use crate::maze::{Dimensions, Grid, MazeGame, MazeLayout, Position, Symbol};
use carve::{carve_path, Sketch};
use rand::prelude::*;
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub dimensions: Dimensions,
    /// Only place the goal on a row and column that both differ from the start's.
    pub goal_off_start_axes: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            dimensions: Dimensions::STANDARD,
            goal_off_start_axes: false,
        }
    }
}

/// A random maze together with the results a correct game must reproduce
/// when it is played with `winning_moves`.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratedMaze {
    pub layout: MazeLayout,
    pub correct_visited: Grid,
    pub winning_moves: Vec<Direction>,
    symbols: Vec<Symbol>,
}

impl GeneratedMaze {
    pub fn dimensions(&self) -> Dimensions {
        self.layout.blocked.dimensions()
    }

    pub fn start(&self) -> Position {
        self.layout.start
    }

    pub fn goal(&self) -> Position {
        self.layout.goal
    }

    pub fn blocked(&self) -> &Grid {
        &self.layout.blocked
    }

    /// A fresh game on this maze, without a round trip through text.
    pub fn start_game(&self) -> MazeGame {
        MazeGame::from_layout(self.layout.clone())
    }

    /// The maze in the file format: one line per row, tokens separated by spaces.
    pub fn to_maze_text(&self) -> String {
        let width = self.dimensions().width;
        let mut text = String::with_capacity(self.symbols.len() * 2);

        for row in self.symbols.chunks(width.max(1)) {
            let tokens: Vec<_> = row.iter().map(|symbol| symbol.as_str()).collect();
            text.push_str(&tokens.join(" "));
            text.push('\n');
        }

        text
    }

    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> MazeResult<()> {
        fs::write(path, self.to_maze_text())?;
        Ok(())
    }
}

pub fn generate_maze<G: Rng>(rng: &mut G, config: GeneratorConfig) -> MazeResult<GeneratedMaze> {
    let dimensions = config.dimensions;
    let mut sketch = Sketch::new(dimensions);

    let start = sketch
        .unused_cell(rng, |_| true)
        .ok_or(MazeError::NoRoomForGoal(dimensions))?;
    sketch.mark(start, Symbol::Start);

    let goal = sketch
        .unused_cell(rng, |cell| {
            !config.goal_off_start_axes || (cell.row != start.row && cell.col != start.col)
        })
        .ok_or(MazeError::NoRoomForGoal(dimensions))?;
    sketch.mark(goal, Symbol::Goal);

    let path = carve_path(&mut sketch, start, goal, rng.gen());
    let (symbols, blocked) = sketch.fill_blocked();

    debug!(%start, %goal, moves = path.moves.len(), "generated maze");

    Ok(GeneratedMaze {
        layout: MazeLayout {
            blocked,
            start,
            goal,
        },
        correct_visited: path.visited,
        winning_moves: path.moves,
        symbols,
    })
}

/// Generates a maze and writes it to `path`.
pub fn generate_maze_file<P: AsRef<Path>>(
    path: P,
    config: GeneratorConfig,
) -> MazeResult<GeneratedMaze> {
    let mut rng = rand::thread_rng();
    let maze = generate_maze(&mut rng, config)?;

    maze.write_to(path)?;

    Ok(maze)
}
