use thiserror::Error;

use crate::grid::Phase;

pub type GridResult<T> = Result<T, GridError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("Grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("Expected {expected} cell states, got {got}")]
    StateCount { expected: usize, got: usize },

    #[error("Generation is {}x{}, but the grid is {}x{}", .got.0, .got.1, .expected.0, .expected.1)]
    DimensionMismatch {
        expected: (usize, usize),
        got: (usize, usize),
    },

    #[error("Generation {index} has not been populated, only {len} exist")]
    GenerationOutOfRange { index: usize, len: usize },

    #[error("Grid has no generations yet")]
    NotSeeded,

    #[error("Grid already has a first generation")]
    AlreadySeeded,

    #[error("Run is over ({phase:?}), no more generations can be added")]
    RunFinished { phase: Phase },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("No rows found")]
    Empty,

    #[error("Invalid glyph '{glyph}' at ({x}, {y}), expected '0' or '1'")]
    InvalidGlyph { glyph: char, x: usize, y: usize },

    #[error("Row {y} has {got} cells, expected {expected}")]
    RaggedRow { y: usize, expected: usize, got: usize },
}
