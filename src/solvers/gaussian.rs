use crate::error::Result;
use crate::matrix::matrix::Matrix;
use crate::matrix::trace::{StepLog, Traced};
use crate::solvers::preconditions::check_input;

/// Steps of the forward elimination and the solution vector, `None` when
/// the system has no unique solution.
pub type Elimination = Traced<f64, Option<Vec<f64>>>;

/// Solves the augmented system `[A | b]` (n rows, n + 1 columns) with
/// partial pivoting, then back-substitution.
///
/// One step is recorded per processed column after the initial state. A
/// zero pivot ends the elimination right away: the current state is
/// recorded and the result is `None`. Zero is tested exactly.
pub fn gaussian_elimination(matrix: &Matrix<f64>) -> Result<Elimination> {
    check_input("gaussian", matrix, 1)?;

    let n = matrix.rows();
    let mut a = matrix.snapshot();
    let mut steps = StepLog::start(&a);

    for k in 0..n {
        let r = a.pivot_row(k, k);
        if a[(r, k)] == 0.0 {
            log::debug!("no pivot in column {k}, the system has no unique solution");
            steps.record(&a);
            return Ok(steps.finish(None));
        }

        if r != k {
            log::debug!("column {k}: swapping rows {k} and {r}");
            a.swap_rows(k, r);
        }

        let pivot = a.row(k).to_vec();
        for i in k + 1..n {
            let factor = a[(i, k)] / pivot[k];
            for j in k..=n {
                a[(i, j)] -= factor * pivot[j];
            }
        }

        steps.record(&a);
    }

    let mut x = vec![0.0; n];
    for i in (0..n).rev() {
        let diag = a[(i, i)];
        if diag == 0.0 {
            log::debug!("zero diagonal at row {i} during back-substitution");
            return Ok(steps.finish(None));
        }

        let sum = a[(i, n)] - (i + 1..n).map(|j| a[(i, j)] * x[j]).sum::<f64>();
        x[i] = sum / diag;
    }

    Ok(steps.finish(Some(x)))
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use rand::Rng;

    fn augmented(lines: Vec<Vec<f64>>) -> Matrix<f64> {
        Matrix::from_list(lines).unwrap()
    }

    fn assert_close(a: &[f64], b: &[f64]) {
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(b) {
            assert!((x - y).abs() < 1e-9, "{a:?} != {b:?}");
        }
    }

    #[test]
    fn test_gaussian_classic_system() {
        let m = augmented(vec![
            vec![2.0, 1.0, -1.0, 8.0],
            vec![-3.0, -1.0, 2.0, -11.0],
            vec![-2.0, 1.0, 2.0, -3.0],
        ]);
        let res = gaussian_elimination(&m).unwrap();

        assert_close(&res.result.clone().unwrap(), &[2.0, 3.0, -1.0]);
        assert_eq!(res.steps.len(), 4);
        assert_eq!(res.step(0).unwrap(), &m);

        // -3 is the largest pivot of the first column
        assert_eq!(res.step(1).unwrap().row(0), &[-3.0, -1.0, 2.0, -11.0]);

        let last = res.final_state();
        for i in 0..3 {
            for j in 0..i {
                assert!(last[(i, j)].abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_gaussian_identity_returns_rhs() {
        for n in 1..6 {
            let m = augmented(
                (0..n)
                    .map(|i| {
                        let mut row = vec![0.0; n + 1];
                        row[i] = 1.0;
                        row[n] = i as f64 * 1.5 - 2.0;
                        row
                    })
                    .collect(),
            );
            let res = gaussian_elimination(&m).unwrap();
            let expected: Vec<f64> = (0..n).map(|i| i as f64 * 1.5 - 2.0).collect();
            assert_eq!(res.result, Some(expected));
            assert_eq!(res.steps.len(), n + 1);
        }
    }

    #[test]
    fn test_gaussian_no_unique_solution() {
        let m = augmented(vec![
            vec![1.0, 2.0, 3.0],
            vec![2.0, 4.0, 6.0],
        ]);
        let res = gaussian_elimination(&m).unwrap();
        assert_eq!(res.result, None);
        // initial, column 0, halted column 1
        assert_eq!(res.steps.len(), 3);
        assert_eq!(res.final_state().row(1), &[0.0, 0.0, 0.0]);

        let m = augmented(vec![vec![0.0, 5.0]]);
        let res = gaussian_elimination(&m).unwrap();
        assert_eq!(res.result, None);
        assert_eq!(res.steps.len(), 2);
    }

    #[test]
    fn test_gaussian_ties_keep_lowest_row() {
        let m = augmented(vec![vec![2.0, 1.0, 3.0], vec![-2.0, 1.0, 1.0]]);
        let res = gaussian_elimination(&m).unwrap();
        assert_eq!(res.step(1).unwrap().row(0), &[2.0, 1.0, 3.0]);
        assert_close(&res.result.unwrap(), &[0.5, 2.0]);
    }

    #[test]
    fn test_gaussian_rejects_bad_shapes() {
        let square = Matrix::<f64>::identity(3);
        assert!(matches!(
            gaussian_elimination(&square),
            Err(Error::ShapeMismatch { op: "gaussian", .. })
        ));
    }

    #[test]
    fn test_gaussian_random_systems_satisfy_ax_eq_b() {
        let mut rng = rand::thread_rng();
        for _ in 0..50 {
            let n = rng.gen_range(1..7);
            let lines: Vec<Vec<f64>> = (0..n)
                .map(|_| (0..=n).map(|_| rng.gen_range(-10..=10) as f64).collect())
                .collect();
            let m = augmented(lines.clone());
            let res = gaussian_elimination(&m).unwrap();
            assert!(res.steps.len() >= 2 && res.steps.len() <= n + 1);

            if let Some(x) = res.result {
                assert_eq!(res.steps.len(), n + 1);
                for row in &lines {
                    let ax: f64 = (0..n).map(|j| row[j] * x[j]).sum();
                    let scale: f64 = (0..n).map(|j| (row[j] * x[j]).abs()).sum::<f64>() + row[n].abs();
                    assert!((ax - row[n]).abs() <= 1e-8 * (1.0 + scale));
                }
            }
        }
    }
}
