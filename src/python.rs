use crate::error::Error;
use crate::input;
use crate::matrix::matrix::Matrix;
use crate::rings::fraction::Fraction;
use crate::solvers::{determinant, gaussian, inverse};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

type Steps<T> = Vec<Vec<Vec<T>>>;

impl From<Error> for PyErr {
    fn from(error: Error) -> PyErr {
        PyValueError::new_err(error.to_string())
    }
}

fn fraction_list(m: &Matrix<Fraction>) -> Vec<Vec<String>> {
    m.to_list()
        .iter()
        .map(|row| row.iter().map(|f| f.to_string()).collect())
        .collect()
}

/// `(steps, solution)`; `solution` is `None` without a unique solution.
#[pyfunction]
pub fn gaussian_elimination(matrix: Vec<Vec<f64>>) -> PyResult<(Steps<f64>, Option<Vec<f64>>)> {
    let res = gaussian::gaussian_elimination(&Matrix::from_list(matrix)?)?;
    Ok((res.steps.iter().map(Matrix::to_list).collect(), res.result))
}

/// `(steps, inverse)` with every cell rendered as `"n/d"`; `inverse` is
/// `None` for a singular matrix.
#[pyfunction]
pub fn inverse_with_steps(
    matrix: Vec<Vec<f64>>,
) -> PyResult<(Steps<String>, Option<Vec<Vec<String>>>)> {
    let res = inverse::inverse_with_steps(&Matrix::from_list(matrix)?)?;
    Ok((
        res.steps.iter().map(fraction_list).collect(),
        res.result.as_ref().map(fraction_list),
    ))
}

#[pyfunction]
pub fn determinant_with_steps(matrix: Vec<Vec<f64>>) -> PyResult<(Steps<f64>, f64)> {
    let res = determinant::determinant_with_steps(&Matrix::from_list(matrix)?)?;
    Ok((res.steps.iter().map(Matrix::to_list).collect(), res.result))
}

/// Coerces form text into a matrix of floats (invalid cells become 0).
#[pyfunction]
pub fn parse_matrix(cells: Vec<Vec<String>>) -> Vec<Vec<f64>> {
    cells
        .iter()
        .map(|row| row.iter().map(|c| input::parse_cell(c)).collect())
        .collect()
}
