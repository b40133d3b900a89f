use crate::error::{Error, Result};
use crate::rings::fraction::Fraction;
use num_traits::{One, Zero};
use std::ops;
use std::ops::{Add, Div, Mul, Range, Sub};

pub trait Element:  // Avoid repeating all the traits
    Clone
    + Zero
    + One
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + std::iter::Sum<Self>
    + std::fmt::Display
    + std::fmt::Debug
{
}

impl<T> Element for T where
    T: Clone
        + Zero
        + One
        + PartialEq
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + Div<Output = T>
        + std::iter::Sum<T>
        + std::fmt::Display
        + std::fmt::Debug
{
}

/// Dense row-major matrix. Never empty: `from_list` refuses zero rows or
/// zero columns, and every constructor keeps `cells.len() == rows * cols`.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T: Element> Matrix<T> {
    pub fn from_list(lines: Vec<Vec<T>>) -> Result<Self> {
        let rows = lines.len();
        let cols = lines.first().map(|l| l.len()).unwrap_or(0);
        if rows == 0 || cols == 0 {
            return Err(Error::Empty);
        }

        if let Some((row, line)) = lines.iter().enumerate().find(|(_, l)| l.len() != cols) {
            return Err(Error::Ragged {
                row,
                expected: cols,
                got: line.len(),
            });
        }

        Ok(Matrix {
            rows,
            cols,
            cells: lines.into_iter().flatten().collect(),
        })
    }

    pub fn to_list(&self) -> Vec<Vec<T>> {
        self.cells
            .chunks(self.cols)
            .map(|line| line.into())
            .collect()
    }

    pub fn identity(n: usize) -> Matrix<T> {
        Matrix {
            rows: n,
            cols: n,
            cells: (0..n)
                .flat_map(|i| (0..n).map(move |j| if i == j { T::one() } else { T::zero() }))
                .collect(),
        }
    }

    #[inline(always)]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline(always)]
    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn row(&self, row: usize) -> &[T] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let (low, high) = (a.min(b), a.max(b));
        let (head, tail) = self.cells.split_at_mut(high * self.cols);
        head[low * self.cols..(low + 1) * self.cols].swap_with_slice(&mut tail[..self.cols]);
    }

    /// Copy of the columns in `range`, all rows kept.
    pub fn columns(&self, range: Range<usize>) -> Matrix<T> {
        assert!(range.start < range.end && range.end <= self.cols);
        Matrix {
            rows: self.rows,
            cols: range.len(),
            cells: (0..self.rows)
                .flat_map(|r| self.row(r)[range.clone()].iter().cloned())
                .collect(),
        }
    }

    pub fn map<U, F: FnMut(&T) -> U>(&self, f: F) -> Matrix<U> {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            cells: self.cells.iter().map(f).collect(),
        }
    }

    /// Independent deep copy, used for the step trace.
    pub fn snapshot(&self) -> Matrix<T> {
        self.clone()
    }
}

impl Matrix<f64> {
    /// Row with the largest `|a[r][col]|` among rows `from..`, lowest index
    /// on ties. Used for partial pivoting.
    pub fn pivot_row(&self, col: usize, from: usize) -> usize {
        let mut best = from;
        for r in from + 1..self.rows {
            if self[(r, col)].abs() > self[(best, col)].abs() {
                best = r;
            }
        }
        best
    }

    /// Exact rational image of every cell.
    pub fn to_fractions(&self) -> Result<Matrix<Fraction>> {
        let mut cells = Vec::with_capacity(self.cells.len());
        for (i, value) in self.cells.iter().enumerate() {
            cells.push(
                Fraction::try_from(*value).map_err(|_| Error::NonFinite {
                    row: i / self.cols,
                    col: i % self.cols,
                    value: *value,
                })?,
            );
        }

        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            cells,
        })
    }
}

impl<T> ops::Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline(always)]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.cells[row * self.cols + col]
    }
}

impl<T> ops::IndexMut<(usize, usize)> for Matrix<T> {
    #[inline(always)]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.cells[row * self.cols + col]
    }
}

impl<T: Element> ops::Mul<&Matrix<T>> for &Matrix<T> {
    type Output = Result<Matrix<T>>;

    fn mul(self, rhs: &Matrix<T>) -> Result<Matrix<T>> {
        if self.cols != rhs.rows {
            return Err(Error::ShapeMismatch {
                op: "mul",
                expected_rows: self.cols,
                expected_cols: rhs.cols,
                rows: rhs.rows,
                cols: rhs.cols,
            });
        }

        Ok(Matrix {
            rows: self.rows,
            cols: rhs.cols,
            cells: (0..self.rows)
                .flat_map(|i| {
                    (0..rhs.cols).map(move |j| {
                        (0..self.cols)
                            .map(|k| self[(i, k)].clone() * rhs[(k, j)].clone())
                            .sum()
                    })
                })
                .collect(),
        })
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
