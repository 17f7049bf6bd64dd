//! Shape operations and multiplication.

use std::ops::Neg;

use super::{Matrix, Scalar};
use crate::error::{KirchhoffError, Result};

impl<T: Scalar> Matrix<T> {
    /// Swap rows and columns.
    pub fn transpose(&self) -> Self {
        let mut result = Self::zeros(self.cols, self.rows);
        for (i, row) in self.row_iter().enumerate() {
            for (j, &value) in row.iter().enumerate() {
                result[(j, i)] = value;
            }
        }
        result
    }

    /// Element-wise sign flip.
    pub fn negate(&self) -> Self {
        self.map(|x| -x)
    }

    /// Copy out the `rows x cols` window whose top-left corner is at
    /// `(row_start, col_start)`.
    pub fn slice(&self, rows: usize, cols: usize, row_start: usize, col_start: usize) -> Result<Self> {
        if row_start + rows > self.rows || col_start + cols > self.cols {
            return Err(KirchhoffError::SliceOutOfBounds {
                rows,
                cols,
                row_start,
                col_start,
                matrix_rows: self.rows,
                matrix_cols: self.cols,
            });
        }

        let mut data = Vec::with_capacity(rows * cols);
        for r in row_start..row_start + rows {
            data.extend_from_slice(&self.row(r)[col_start..col_start + cols]);
        }

        Ok(Self::from_raw(rows, cols, data))
    }

    /// Concatenate matrices left to right.
    ///
    /// All operands must share a row count. The result's storage is reserved
    /// once for the total column count.
    pub fn augment(parts: &[&Matrix<T>]) -> Result<Self> {
        let first = parts
            .first()
            .ok_or_else(|| KirchhoffError::dimension("augment", "no matrices to augment"))?;
        let rows = first.rows;

        if let Some((idx, bad)) = parts.iter().enumerate().find(|(_, m)| m.rows != rows) {
            return Err(KirchhoffError::dimension(
                "augment",
                format!("operand {idx} has {} rows, expected {rows}", bad.rows),
            ));
        }

        let cols: usize = parts.iter().map(|m| m.cols).sum();
        let mut data = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for part in parts {
                data.extend_from_slice(part.row(r));
            }
        }

        Ok(Self::from_raw(rows, cols, data))
    }

    /// Drop the final row.
    pub fn reduce_last_row(&self) -> Result<Self> {
        if self.rows < 2 {
            return Err(KirchhoffError::TooFewRows {
                operation: "reduce_last_row",
                rows: self.rows,
                required: 2,
            });
        }

        let rows = self.rows - 1;
        Ok(Self::from_raw(rows, self.cols, self.data[..rows * self.cols].to_vec()))
    }

    /// Matrix product `self * rhs`.
    pub fn multiply(&self, rhs: &Matrix<T>) -> Result<Self> {
        if self.cols != rhs.rows {
            return Err(KirchhoffError::dimension(
                "multiply",
                format!(
                    "inner dimensions do not match: {}x{} * {}x{}",
                    self.rows, self.cols, rhs.rows, rhs.cols
                ),
            ));
        }

        let mut result = Self::zeros(self.rows, rhs.cols);
        for i in 0..self.rows {
            for k in 0..self.cols {
                let a = self[(i, k)];
                if a.is_approx_zero() {
                    continue;
                }
                for j in 0..rhs.cols {
                    result[(i, j)] = result[(i, j)] + a * rhs[(k, j)];
                }
            }
        }

        Ok(result)
    }
}

impl<T: Scalar> Neg for Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl<T: Scalar> Neg for &Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}
