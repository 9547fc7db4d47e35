//! Grid-subsystem error type.

use thiserror::Error;

use mapf_core::Position;

/// Errors produced by `mapf-grid`.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("position {pos} outside {width}x{height} grid")]
    OutOfBounds { pos: Position, width: u32, height: u32 },

    #[error("map parse error on line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("map contains no rows")]
    EmptyMap,

    #[error("scenario needs {requested} free cells, grid has {available}")]
    NotEnoughFreeCells { requested: usize, available: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type GridResult<T> = Result<T, GridError>;
