use crate::error::{Error, Result};
use crate::matrix::matrix::Matrix;

/// Largest number of rows any engine accepts.
pub const MAX_DIMENSION: usize = 20;

/// Checks size, shape and finiteness before any elimination starts.
/// `extra_cols` is the number of columns beyond the square part
/// (1 for an augmented system, 0 otherwise).
pub fn check_input(op: &'static str, matrix: &Matrix<f64>, extra_cols: usize) -> Result<()> {
    let n = matrix.rows();
    if n > MAX_DIMENSION {
        return Err(Error::TooLarge {
            size: n,
            max: MAX_DIMENSION,
        });
    }

    if matrix.cols() != n + extra_cols {
        return Err(Error::ShapeMismatch {
            op,
            expected_rows: n,
            expected_cols: n + extra_cols,
            rows: n,
            cols: matrix.cols(),
        });
    }

    for row in 0..n {
        for col in 0..matrix.cols() {
            let value = matrix[(row, col)];
            if !value.is_finite() {
                return Err(Error::NonFinite { row, col, value });
            }
        }
    }

    Ok(())
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
