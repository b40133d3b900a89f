//! Step-tracing linear algebra for small dense matrices: Gaussian
//! elimination, exact Gauss-Jordan inversion and determinants, each
//! returning every intermediate matrix next to the result.

pub mod error;
pub mod input;

pub mod matrix {
    pub mod matrix;
    pub mod trace;
}
pub mod rings {
    pub mod fraction;
}
pub mod solvers {
    pub mod determinant;
    pub mod gaussian;
    pub mod inverse;
    pub mod preconditions;
}

#[cfg(feature = "python")]
pub mod python;

pub use error::{Error, Result};
pub use matrix::matrix::Matrix;
pub use matrix::trace::Traced;
pub use rings::fraction::Fraction;
pub use solvers::determinant::{determinant_with_steps, Determinant};
pub use solvers::gaussian::{gaussian_elimination, Elimination};
pub use solvers::inverse::{inverse_with_steps, Inversion};

/// A Python module implemented in Rust.
#[cfg(feature = "python")]
#[pyo3::pymodule]
fn matrix_steps(m: &pyo3::Bound<'_, pyo3::types::PyModule>) -> pyo3::PyResult<()> {
    use pyo3::prelude::*;

    m.add_function(wrap_pyfunction!(python::gaussian_elimination, m)?)?;
    m.add_function(wrap_pyfunction!(python::inverse_with_steps, m)?)?;
    m.add_function(wrap_pyfunction!(python::determinant_with_steps, m)?)?;
    m.add_function(wrap_pyfunction!(python::parse_matrix, m)?)?;
    Ok(())
}
