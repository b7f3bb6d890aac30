//! Error types for loading and playing mazes

use crate::maze::Dimensions;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the maze library.
///
/// Illegal moves, unrecognized commands and out-of-range coordinates are not
/// errors; they leave the game unchanged.
#[derive(Debug, Error)]
pub enum MazeError {
    /// The maze file could not be opened or read
    #[error("could not read maze file {path}: {source}")]
    SourceNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The maze description is not a valid maze
    #[error("malformed maze: {0}")]
    MalformedMaze(String),

    /// The command source ended before the game finished
    #[error("ran out of input before the game finished")]
    InputExhausted,

    /// Reading commands or writing output failed
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    /// The generator could not find a cell for the goal
    #[error("no room for a goal on a {0} board")]
    NoRoomForGoal(Dimensions),
}

/// Result type for maze operations
pub type MazeResult<T> = Result<T, MazeError>;
