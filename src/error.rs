//! Error types for matrix_steps

use thiserror::Error;

/// Result type alias using the crate's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Structural failures: the input can't be handed to an elimination at all.
///
/// A singular matrix or a system without a unique solution is *not* an error;
/// those come back as `None` results next to the step trace.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The matrix has no rows or no columns
    #[error("Empty matrix")]
    Empty,

    /// Rows of different lengths
    #[error("Ragged matrix: row {row} has {got} cells, expected {expected}")]
    Ragged {
        /// Offending row
        row: usize,
        /// Expected number of cells
        expected: usize,
        /// Actual number of cells
        got: usize,
    },

    /// Wrong dimensions for the requested mode
    #[error("Shape mismatch for {op}: expected {expected_rows}x{expected_cols}, got {rows}x{cols}")]
    ShapeMismatch {
        /// The operation name
        op: &'static str,
        /// Rows required
        expected_rows: usize,
        /// Columns required
        expected_cols: usize,
        /// Rows given
        rows: usize,
        /// Columns given
        cols: usize,
    },

    /// Dimension above what the engine accepts
    #[error("Matrix too large: {size} rows, at most {max} supported")]
    TooLarge {
        /// Requested number of rows
        size: usize,
        /// Upper bound
        max: usize,
    },

    /// NaN or infinity in the input
    #[error("Non-finite value {value} at ({row}, {col})")]
    NonFinite {
        /// Row of the cell
        row: usize,
        /// Column of the cell
        col: usize,
        /// The value itself
        value: f64,
    },

    /// Text that is not a number
    #[error("Invalid number '{0}'")]
    InvalidNumber(String),

    /// A fraction written with a zero denominator
    #[error("Zero denominator in '{0}'")]
    ZeroDenominator(String),
}
