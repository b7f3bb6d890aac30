pub mod engine;
pub mod error;
pub mod generation;
pub mod maze;

pub use engine::{Command, Direction, GameState, Outcome, Transition};
pub use error::{MazeError, MazeResult};
pub use maze::MazeGame;
