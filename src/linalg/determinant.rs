//! Determinants via recursive cofactor expansion.
//!
//! Orders 2 and 3 use closed forms; larger orders expand along the first
//! row. Cost is O(n!), which is fine for the small dense matrices this
//! engine targets.

use crate::error::{MatrizError, Result};
use crate::primitives::Matrix;

impl Matrix<f64> {
    /// Deletes row `row` and column `col`, producing the (m-1)x(n-1) minor.
    ///
    /// Internal helper: callers are responsible for passing in-bounds
    /// indices on a matrix of order at least 2.
    pub(crate) fn minor(&self, row: usize, col: usize) -> Matrix<f64> {
        let mut data = Vec::with_capacity((self.n_rows() - 1) * (self.n_cols() - 1));
        for i in 0..self.n_rows() {
            if i == row {
                continue;
            }
            for j in 0..self.n_cols() {
                if j == col {
                    continue;
                }
                data.push(self.get(i, j));
            }
        }
        Matrix::from_vec(self.n_rows() - 1, self.n_cols() - 1, data)
            .expect("minor dimensions follow from the source matrix")
    }

    /// Computes the determinant.
    ///
    /// # Errors
    ///
    /// Returns `NotSquare` for rectangular input and `OrderOneDeterminant`
    /// for a 1x1 matrix (treated as undefined by this engine).
    ///
    /// # Examples
    ///
    /// ```
    /// use matriz::primitives::Matrix;
    ///
    /// let a = Matrix::from_rows(vec![vec![4.0, 3.0], vec![3.0, 2.0]]).unwrap();
    /// assert_eq!(a.det().unwrap(), -1.0);
    /// ```
    pub fn det(&self) -> Result<f64> {
        if !self.is_square() {
            return Err(MatrizError::NotSquare {
                rows: self.n_rows(),
                cols: self.n_cols(),
            });
        }
        match self.n_rows() {
            1 => Err(MatrizError::OrderOneDeterminant),
            2 => Ok(self.get(0, 0) * self.get(1, 1) - self.get(0, 1) * self.get(1, 0)),
            3 => {
                let [a, b, c] = [self.get(0, 0), self.get(0, 1), self.get(0, 2)];
                let [d, e, f] = [self.get(1, 0), self.get(1, 1), self.get(1, 2)];
                let [g, h, i] = [self.get(2, 0), self.get(2, 1), self.get(2, 2)];
                Ok(a * (e * i - f * h) - b * (d * i - f * g) + c * (d * h - e * g))
            }
            _ => {
                // First-row Laplace expansion, alternating sign from +1.
                let mut total = 0.0;
                let mut sign = 1.0;
                for j in 0..self.n_cols() {
                    total += sign * self.get(0, j) * self.minor(0, j).det()?;
                    sign = -sign;
                }
                Ok(total)
            }
        }
    }
}
