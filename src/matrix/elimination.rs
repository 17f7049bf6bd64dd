//! Gaussian elimination, echelon form and inversion.
//!
//! Forward elimination walks pivot columns left to right. When the entry on
//! the current pivot row is (near-)zero the first row below with a non-zero
//! entry in that column is swapped in. The pivot row is normalized so the
//! pivot becomes one, and the column is cleared from every row below it.
//!
//! A column with no usable entry at or below the pivot row is handled
//! according to [`PivotPolicy`]. For integer element types the pivot row
//! must divide exactly; otherwise elimination fails with
//! [`KirchhoffError::InexactDivision`].

use super::{Matrix, Scalar};
use crate::error::{KirchhoffError, Result};

/// What forward elimination does with a column that has no pivot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PivotPolicy {
    /// Fail. The matrix is expected to have full row rank.
    Strict,
    /// Skip the column and keep going (rank-revealing).
    Permissive,
}

/// A forward-eliminated matrix together with its pivot columns.
#[derive(Debug, Clone)]
pub struct Echelon<T> {
    /// The row echelon form, pivots normalized to one.
    pub matrix: Matrix<T>,
    /// `pivots[r]` is the pivot column of row `r`.
    pub pivots: Vec<usize>,
}

impl<T: Scalar> Echelon<T> {
    /// Number of independent rows.
    pub fn rank(&self) -> usize {
        self.pivots.len()
    }

    pub fn is_pivot_column(&self, col: usize) -> bool {
        self.pivots.contains(&col)
    }
}

impl<T: Scalar> Matrix<T> {
    /// Single forward pass.
    ///
    /// Returns the pivot columns found and, when `stop_on_missing` is set,
    /// the first column that had no pivot.
    fn forward_pass(&mut self, stop_on_missing: bool) -> Result<(Vec<usize>, Option<usize>)> {
        let mut pivots = Vec::with_capacity(self.rows.min(self.cols));
        let mut row = 0;

        for col in 0..self.cols {
            if row == self.rows {
                break;
            }

            let Some(pivot_row) = self.column(col).first_non_zero_from(row) else {
                if stop_on_missing {
                    return Ok((pivots, Some(col)));
                }
                continue;
            };

            self.swap_rows(row, pivot_row);

            let pivot = self[(row, col)];
            for value in &mut self.row_mut(row)[col..] {
                *value = value
                    .exact_div(pivot)
                    .ok_or_else(|| KirchhoffError::InexactDivision {
                        value: value.to_string(),
                        pivot: pivot.to_string(),
                    })?;
            }

            for below in row + 1..self.rows {
                let factor = self[(below, col)];
                if factor.is_approx_zero() {
                    continue;
                }
                let (target, source) = self.row_pair_mut(below, row);
                for (t, &s) in target[col..].iter_mut().zip(&source[col..]) {
                    *t = *t - factor * s;
                }
            }

            pivots.push(col);
            row += 1;
        }

        Ok((pivots, None))
    }

    /// Forward Gaussian elimination in place.
    ///
    /// Returns the pivot column of each leading row. With
    /// [`PivotPolicy::Strict`] every row must receive a pivot: an all-zero
    /// pivot column fails with [`KirchhoffError::SingularMatrix`], and running
    /// out of columns first fails with [`KirchhoffError::RankDeficient`].
    pub fn forward_eliminate(&mut self, policy: PivotPolicy) -> Result<Vec<usize>> {
        let strict = policy == PivotPolicy::Strict;
        let (pivots, missing) = self.forward_pass(strict)?;

        if strict {
            if let Some(column) = missing {
                return Err(KirchhoffError::SingularMatrix { column });
            }
            if pivots.len() < self.rows {
                return Err(KirchhoffError::RankDeficient {
                    rows: self.rows,
                    pivots: pivots.len(),
                });
            }
        }

        Ok(pivots)
    }

    /// Clear each pivot column from the rows above its pivot, bottom to top.
    ///
    /// `pivots` must come from [`Matrix::forward_eliminate`] on this matrix.
    /// The result is in reduced row echelon form.
    pub fn backward_eliminate(&mut self, pivots: &[usize]) {
        for (row, &col) in pivots.iter().enumerate().rev() {
            for above in (0..row).rev() {
                let factor = self[(above, col)];
                if factor.is_approx_zero() {
                    continue;
                }
                let (target, source) = self.row_pair_mut(above, row);
                for (t, &s) in target[col..].iter_mut().zip(&source[col..]) {
                    *t = *t - factor * s;
                }
            }
        }
    }

    /// Full Gauss-Jordan elimination: strict forward pass plus back substitution.
    pub fn gauss_jordan(&mut self) -> Result<Vec<usize>> {
        let pivots = self.forward_eliminate(PivotPolicy::Strict)?;
        self.backward_eliminate(&pivots);
        Ok(pivots)
    }

    /// Row echelon form with a permissive forward pass.
    ///
    /// Reveals which columns are linearly independent without requiring
    /// full rank.
    pub fn echelon(&self) -> Result<Echelon<T>> {
        let mut matrix = self.clone();
        let (pivots, _) = matrix.forward_pass(false)?;
        Ok(Echelon { matrix, pivots })
    }

    /// Inverse by reducing `[M | I]` to `[I | M^-1]`.
    pub fn invert(&self) -> Result<Self> {
        if !self.is_square() {
            return Err(KirchhoffError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }

        let n = self.rows;
        let mut augmented = Matrix::augment(&[self, &Matrix::identity(n)])?;
        augmented.gauss_jordan()?;
        augmented.slice(n, n, 0, n)
    }
}
