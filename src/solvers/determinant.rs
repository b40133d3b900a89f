use crate::error::Result;
use crate::matrix::matrix::Matrix;
use crate::matrix::trace::{StepLog, Traced};
use crate::solvers::preconditions::check_input;

/// Snapshots of the triangularization and the determinant.
pub type Determinant = Traced<f64, f64>;

/// Determinant by partial-pivoting elimination.
///
/// Each row swap flips the sign and each pivot is multiplied into the
/// running product. A zero pivot means the determinant is 0: the state is
/// recorded and the computation stops there. One step per column otherwise.
pub fn determinant_with_steps(matrix: &Matrix<f64>) -> Result<Determinant> {
    check_input("determinant", matrix, 0)?;

    let n = matrix.rows();
    let mut a = matrix.snapshot();
    let mut steps = StepLog::start(&a);
    let mut det = 1.0;

    for k in 0..n {
        let r = a.pivot_row(k, k);
        if r != k {
            a.swap_rows(k, r);
            det = -det;
        }

        let pivot = a[(k, k)];
        if pivot == 0.0 {
            log::debug!("zero pivot in column {k}, determinant is 0");
            steps.record(&a);
            return Ok(steps.finish(0.0));
        }
        det *= pivot;

        let pivot_cells = a.row(k).to_vec();
        for i in k + 1..n {
            let factor = a[(i, k)] / pivot;
            for j in k..n {
                a[(i, j)] -= factor * pivot_cells[j];
            }
        }

        steps.record(&a);
    }

    Ok(steps.finish(det))
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use rand::Rng;

    fn square(lines: Vec<Vec<f64>>) -> Matrix<f64> {
        Matrix::from_list(lines).unwrap()
    }

    #[test]
    fn test_determinant_two_by_two() {
        let res = determinant_with_steps(&square(vec![vec![1.0, 2.0], vec![3.0, 4.0]])).unwrap();
        assert!((res.result + 2.0).abs() < 1e-12);
        assert_eq!(res.steps.len(), 3);
        assert_eq!(res.step(1).unwrap().row(0), &[3.0, 4.0]);
        assert_eq!(res.final_state()[(1, 0)], 0.0);
    }

    #[test]
    fn test_determinant_identity() {
        for n in 1..8 {
            let res = determinant_with_steps(&Matrix::identity(n)).unwrap();
            assert_eq!(res.result, 1.0);
            assert_eq!(res.steps.len(), n + 1);
        }
    }

    #[test]
    fn test_determinant_singular() {
        let res = determinant_with_steps(&square(vec![vec![1.0, 2.0], vec![2.0, 4.0]])).unwrap();
        assert_eq!(res.result, 0.0);

        let zero_row = square(vec![
            vec![1.0, 2.0, 3.0],
            vec![0.0, 0.0, 0.0],
            vec![4.0, 5.0, 6.0],
        ]);
        assert_eq!(determinant_with_steps(&zero_row).unwrap().result, 0.0);

        let twin_rows = square(vec![
            vec![1.0, 2.0, 3.0],
            vec![1.0, 2.0, 3.0],
            vec![4.0, 5.0, 6.0],
        ]);
        let res = determinant_with_steps(&twin_rows).unwrap();
        assert_eq!(res.result, 0.0);
        // halted on the last column
        assert_eq!(res.steps.len(), 4);

        let zero_column = square(vec![vec![0.0, 1.0], vec![0.0, 2.0]]);
        let res = determinant_with_steps(&zero_column).unwrap();
        assert_eq!(res.result, 0.0);
        assert_eq!(res.steps.len(), 2);
    }

    #[test]
    fn test_determinant_triangular_and_scaled() {
        let m = square(vec![
            vec![2.0, 7.0, -1.0],
            vec![0.0, 0.5, 4.0],
            vec![0.0, 0.0, -3.0],
        ]);
        assert_eq!(determinant_with_steps(&m).unwrap().result, -3.0);

        let m = square(vec![vec![0.0, 2.0], vec![3.0, 0.0]]);
        assert_eq!(determinant_with_steps(&m).unwrap().result, -6.0);
    }

    #[test]
    fn test_determinant_rejects_bad_shapes() {
        let m = square(vec![vec![1.0, 2.0, 3.0]]);
        assert!(matches!(
            determinant_with_steps(&m),
            Err(Error::ShapeMismatch { op: "determinant", .. })
        ));
    }

    #[test]
    fn test_determinant_row_swap_negates() {
        let mut rng = rand::thread_rng();
        for _ in 0..50 {
            let n = rng.gen_range(2..7);
            let lines: Vec<Vec<f64>> = (0..n)
                .map(|_| (0..n).map(|_| rng.gen_range(-10.0..10.0)).collect())
                .collect();
            let (a, b) = (rng.gen_range(0..n), rng.gen_range(0..n));
            if a == b {
                continue;
            }

            let m = square(lines);
            let mut swapped = m.clone();
            swapped.swap_rows(a, b);

            let det = determinant_with_steps(&m).unwrap().result;
            let det_swapped = determinant_with_steps(&swapped).unwrap().result;
            assert!((det + det_swapped).abs() <= 1e-9 * (1.0 + det.abs()));

            swapped.swap_rows(a, b);
            assert_eq!(determinant_with_steps(&swapped).unwrap().result, det);
        }
    }
}
