//! Engine error types.

use thiserror::Error;

/// Errors raised by grid and engine operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LifeError {
    /// A board needs at least one row and one column.
    #[error("invalid dimension: {rows}x{cols} (rows and cols must be positive)")]
    InvalidDimension { rows: usize, cols: usize },

    /// Alive probability must be a finite value in `[0.0, 1.0]`.
    #[error("invalid alive probability {0} (expected a value in [0, 1])")]
    InvalidProbability(f64),

    /// Coordinate outside `[0, rows) x [0, cols)`.
    #[error("cell ({row}, {col}) is out of bounds for a {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Text pattern contained something other than a live or dead glyph.
    #[error("invalid glyph {glyph:?} at line {line}, column {column}")]
    InvalidGlyph {
        line: usize,
        column: usize,
        glyph: char,
    },

    /// Text pattern rows differ in width.
    #[error("line {line} has {found} cells, expected {expected}")]
    RaggedPattern {
        line: usize,
        expected: usize,
        found: usize,
    },
}

/// Result type for engine operations.
pub type LifeResult<T> = Result<T, LifeError>;
