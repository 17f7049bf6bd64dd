//! Dense generic matrices.
//!
//! [`Matrix`] is a rectangular row-major container over any [`Scalar`].
//! Shape operations (transpose, slicing, augmenting, dropping the last row)
//! and multiplication live in `ops`; Gaussian elimination, echelon form and
//! inversion live in `elimination`.
//!
//! Every operation except the in-place elimination primitives returns a new
//! matrix. Shape violations are reported as [`KirchhoffError`] values rather
//! than panics.
//!
//! ```text
//! [A_T | A_L]  --invert/multiply-->  A_T^-1 * A_L
//! ```

mod elimination;
mod ops;
mod scalar;

use std::fmt;
use std::ops::{Index, IndexMut};

use num_traits::{NumCast, ToPrimitive};

use crate::error::{KirchhoffError, Result};

pub use elimination::{Echelon, PivotPolicy};
pub use scalar::{Scalar, EPSILON};

/// A rectangular, dense, row-major matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Scalar> Matrix<T> {
    /// Create a `rows x cols` matrix filled with zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![T::zero(); rows * cols],
        }
    }

    /// Create the `n x n` identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = T::one();
        }
        m
    }

    /// Build a matrix from nested rows.
    ///
    /// Every row must have the length of the first one.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(rows.len() * cols);

        for (row, values) in rows.iter().enumerate() {
            if values.len() != cols {
                return Err(KirchhoffError::RaggedRows {
                    row,
                    expected: cols,
                    found: values.len(),
                });
            }
            data.extend_from_slice(values);
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            data,
        })
    }

    pub(crate) fn from_raw(rows: usize, cols: usize, data: Vec<T>) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self { rows, cols, data }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Borrow one row.
    pub fn row(&self, row: usize) -> &[T] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Mutably borrow one row.
    pub fn row_mut(&mut self, row: usize) -> &mut [T] {
        let start = row * self.cols;
        &mut self.data[start..start + self.cols]
    }

    /// Iterate over the rows in order.
    pub fn row_iter(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.rows).map(move |r| self.row(r))
    }

    /// Read-only view of one column.
    pub fn column(&self, col: usize) -> Column<'_, T> {
        assert!(col < self.cols, "column {col} out of bounds ({} columns)", self.cols);
        Column { matrix: self, col }
    }

    /// Swap two rows in place.
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let cols = self.cols;
        let (head, tail) = self.data.split_at_mut(hi * cols);
        head[lo * cols..(lo + 1) * cols].swap_with_slice(&mut tail[..cols]);
    }

    /// Borrow `target` mutably and `source` immutably at the same time.
    ///
    /// The two rows never alias, so a row is never written while it is read.
    fn row_pair_mut(&mut self, target: usize, source: usize) -> (&mut [T], &[T]) {
        assert_ne!(target, source, "row pair must reference two distinct rows");
        let cols = self.cols;
        if target < source {
            let (head, tail) = self.data.split_at_mut(source * cols);
            (&mut head[target * cols..(target + 1) * cols], &tail[..cols])
        } else {
            let (head, tail) = self.data.split_at_mut(target * cols);
            (&mut tail[..cols], &head[source * cols..(source + 1) * cols])
        }
    }

    /// Copy out as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.row_iter().map(<[T]>::to_vec).collect()
    }

    /// Apply `f` to every element.
    pub fn map<U: Scalar>(&self, f: impl Fn(T) -> U) -> Matrix<U> {
        Matrix::from_raw(self.rows, self.cols, self.data.iter().map(|&x| f(x)).collect())
    }

    /// Convert to another element type, rounding to the nearest value.
    ///
    /// Used to bring the fundamental matrices, which are integral, back from
    /// a floating elimination into `i32`.
    pub fn round_to<U: Scalar>(&self) -> Result<Matrix<U>> {
        let data = self
            .data
            .iter()
            .map(|x| {
                x.to_f64()
                    .and_then(|v| <U as NumCast>::from(v.round()))
                    .ok_or_else(|| KirchhoffError::ScalarConversion {
                        value: x.to_string(),
                    })
            })
            .collect::<Result<Vec<U>>>()?;

        Ok(Matrix::from_raw(self.rows, self.cols, data))
    }

    /// Element-wise comparison with [`Scalar::approx_eq`].
    ///
    /// Matrices of different shapes are never equal.
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(&a, &b)| a.approx_eq(b))
    }

    /// True if every element is (near-)zero.
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|x| x.is_approx_zero())
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(row < self.rows && col < self.cols, "index ({row}, {col}) out of bounds");
        &self.data[row * self.cols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(row < self.rows && col < self.cols, "index ({row}, {col}) out of bounds");
        &mut self.data[row * self.cols + col]
    }
}

impl<T: Scalar> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[")?;
        for row in self.row_iter() {
            write!(f, "\t")?;
            for value in row {
                write!(f, "{value}\t")?;
            }
            writeln!(f)?;
        }
        write!(f, "]")
    }
}

/// A read-only view of one matrix column.
#[derive(Debug, Clone, Copy)]
pub struct Column<'a, T> {
    matrix: &'a Matrix<T>,
    col: usize,
}

impl<'a, T: Scalar> Column<'a, T> {
    /// Number of entries (rows of the parent matrix).
    pub fn len(&self) -> usize {
        self.matrix.rows
    }

    pub fn is_empty(&self) -> bool {
        self.matrix.rows == 0
    }

    /// Entry at `row`.
    pub fn get(&self, row: usize) -> T {
        self.matrix[(row, self.col)]
    }

    pub fn iter(&self) -> impl Iterator<Item = T> + 'a {
        let matrix = self.matrix;
        let col = self.col;
        (0..matrix.rows).map(move |r| matrix[(r, col)])
    }

    /// Index of the first (near-)non-zero entry at or below `start`.
    pub fn first_non_zero_from(&self, start: usize) -> Option<usize> {
        (start..self.len()).find(|&r| !self.get(r).is_approx_zero())
    }

    /// Sum of all entries.
    pub fn sum(&self) -> T {
        self.iter().fold(T::zero(), |acc, x| acc + x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_rejects_ragged_input() {
        let err = Matrix::from_rows(vec![vec![1, 2], vec![3]]).unwrap_err();
        assert!(matches!(
            err,
            KirchhoffError::RaggedRows {
                row: 1,
                expected: 2,
                found: 1
            }
        ));
    }

    #[test]
    fn test_identity() {
        let i = Matrix::<i32>::identity(3);
        assert_eq!(i.to_rows(), vec![vec![1, 0, 0], vec![0, 1, 0], vec![0, 0, 1]]);
    }

    #[test]
    fn test_swap_rows_both_orders() {
        let mut m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4], vec![5, 6]]).unwrap();
        m.swap_rows(2, 0);
        assert_eq!(m.to_rows(), vec![vec![5, 6], vec![3, 4], vec![1, 2]]);
        m.swap_rows(1, 1);
        assert_eq!(m.row(1), &[3, 4]);
    }

    #[test]
    fn test_row_pair_mut_borrows_distinct_rows() {
        let mut m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        {
            let (target, source) = m.row_pair_mut(1, 0);
            target[0] += source[0];
        }
        {
            let (target, source) = m.row_pair_mut(0, 1);
            target[1] += source[1];
        }
        assert_eq!(m.to_rows(), vec![vec![1, 6], vec![4, 4]]);
    }

    #[test]
    fn test_column_view() {
        let m = Matrix::from_rows(vec![vec![0, 1], vec![0, -1], vec![2, 0]]).unwrap();
        let c = m.column(0);
        assert_eq!(c.len(), 3);
        assert_eq!(c.first_non_zero_from(0), Some(2));
        assert_eq!(m.column(1).first_non_zero_from(2), None);
        assert_eq!(m.column(1).sum(), 0);
    }

    #[test]
    fn test_round_to_integer() {
        let m = Matrix::from_rows(vec![vec![0.9999999f64, -1.0000002], vec![1e-9, 2.0]]).unwrap();
        let r: Matrix<i32> = m.round_to().unwrap();
        assert_eq!(r.to_rows(), vec![vec![1, -1], vec![0, 2]]);
    }

    #[test]
    fn test_approx_eq_checks_shape() {
        let a = Matrix::<f64>::identity(2);
        let b = Matrix::<f64>::zeros(2, 3);
        assert!(!a.approx_eq(&b));
        assert!(a.approx_eq(&a.map(|x| x + 1e-9)));
    }

    #[test]
    fn test_display() {
        let m = Matrix::from_rows(vec![vec![1, -1]]).unwrap();
        assert_eq!(m.to_string(), "[\n\t1\t-1\t\n]");
    }
}
