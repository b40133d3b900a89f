use crate::error::Result;
use crate::matrix::matrix::Matrix;
use crate::matrix::trace::{StepLog, Traced};
use crate::rings::fraction::Fraction;
use crate::solvers::preconditions::check_input;
use num_traits::{One, Zero};

/// Snapshots of the augmented `[A | I]` matrix and the exact inverse,
/// `None` when `A` is singular.
pub type Inversion = Traced<Fraction, Option<Matrix<Fraction>>>;

fn augment_with_identity(a: &Matrix<Fraction>) -> Result<Matrix<Fraction>> {
    let n = a.rows();
    let identity = Matrix::<Fraction>::identity(n);
    Matrix::from_list(
        (0..n)
            .map(|i| a.row(i).iter().chain(identity.row(i)).cloned().collect())
            .collect(),
    )
}

/// Gauss-Jordan inversion over exact rationals.
///
/// Every input cell is converted to the fraction of its shortest decimal
/// form (`0.1` is `1/10`), then each column `k` is cleared with
/// fraction-free (Bareiss) cross-elimination,
/// `row_i := (pivot * row_i - a[i][k] * row_k) / previous_pivot` for every
/// `i != k`, recording a step after each row update. Dividing by the
/// previous pivot keeps every cell a minor of the input, so cell sizes stay
/// bounded instead of doubling per column. Once all columns are done the
/// state is recorded again and each row is divided by its diagonal entry,
/// one step per row. The inverse is the right half of the last step.
///
/// Unlike a plain "zero diagonal means singular" rule, a zero diagonal
/// entry is replaced by the first row below it with a non-zero entry in
/// that column (the swap is a step of its own), so invertible matrices such
/// as `[[0, 1], [1, 0]]` still invert. Only when no such row exists is the
/// matrix singular; the trace so far is then returned with a `None` result.
pub fn inverse_with_steps(matrix: &Matrix<f64>) -> Result<Inversion> {
    check_input("inverse", matrix, 0)?;

    let n = matrix.rows();
    let mut a = augment_with_identity(&matrix.to_fractions()?)?;
    let mut steps = StepLog::start(&a);
    let mut previous_pivot = Fraction::one();

    for k in 0..n {
        if a[(k, k)].is_zero() {
            match (k + 1..n).find(|&r| !a[(r, k)].is_zero()) {
                Some(r) => {
                    log::debug!("zero pivot in column {k}: swapping rows {k} and {r}");
                    a.swap_rows(k, r);
                    steps.record(&a);
                }
                None => {
                    log::debug!("column {k} has no pivot, the matrix is singular");
                    return Ok(steps.finish(None));
                }
            }
        }

        let pivot = a[(k, k)].clone();
        let pivot_row = a.row(k).to_vec();
        for i in (0..n).filter(|&i| i != k) {
            let alpha = a[(i, k)].clone();
            for (j, pivot_cell) in pivot_row.iter().enumerate() {
                let cross = pivot.clone() * a[(i, j)].clone() - alpha.clone() * pivot_cell.clone();
                a[(i, j)] = cross / previous_pivot.clone();
            }
            steps.record(&a);
        }
        previous_pivot = pivot;
    }

    steps.record(&a);

    for i in 0..n {
        let diag = a[(i, i)].clone();
        for j in 0..2 * n {
            a[(i, j)] = a[(i, j)].clone() / diag.clone();
        }
        steps.record(&a);
    }

    let inverse = a.columns(n..2 * n);
    Ok(steps.finish(Some(inverse)))
}

/// Whether `original * inverse` is exactly the identity.
pub fn is_inverse_of(inverse: &Matrix<Fraction>, original: &Matrix<f64>) -> Result<bool> {
    let product = (&original.to_fractions()? * inverse)?;
    Ok(product == Matrix::identity(original.rows()))
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
