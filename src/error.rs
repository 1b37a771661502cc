//! Error types for maze generation and pathfinding.

use thiserror::Error;

/// Failure taxonomy for every fallible operation in the crate.
///
/// Each variant carries a human-readable message intended for direct
/// display by a caller; none of these are retried or swallowed internally.
#[derive(Error, Debug)]
pub enum MazeError {
    /// A caller-supplied value is unusable: a non-positive or non-numeric
    /// dimension, or an endpoint on a blocked or out-of-bounds cell.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An operation was invoked before its inputs exist: no generated grid,
    /// or a missing start/end point.
    #[error("data not provided: {0}")]
    DataNotProvided(String),

    /// A search exhausted its frontier without reaching the end point.
    #[error("calculation failed: {0}")]
    CalculationFailed(String),
}

impl MazeError {
    /// The shared "no grid yet" failure used by every operation that needs
    /// a generated maze.
    pub(crate) fn no_grid() -> MazeError {
        MazeError::DataNotProvided("the maze has not been generated".to_string())
    }
}

pub type Result<T> = std::result::Result<T, MazeError>;
