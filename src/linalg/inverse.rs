//! Matrix inversion via Gauss-Jordan elimination.
//!
//! This routine does not interchange rows: an exactly-zero diagonal entry
//! fails with `ZeroPivot` even when the matrix is invertible. The
//! homogeneous solver in `solve.rs` is the pivoting counterpart; the two
//! strategies are kept separate on purpose, since unifying them would
//! change which inputs succeed.

use crate::error::{MatrizError, Result};
use crate::primitives::Matrix;

impl Matrix<f64> {
    /// Returns true if the matrix is square with a nonzero determinant.
    ///
    /// A 1x1 matrix reports false: its determinant is undefined here, so
    /// the invertibility pre-check cannot pass.
    #[must_use]
    pub fn has_inverse(&self) -> bool {
        self.is_square() && self.det().map_or(false, |d| d != 0.0)
    }

    /// Computes the inverse via Gauss-Jordan elimination on a private
    /// working copy augmented with the identity.
    ///
    /// # Errors
    ///
    /// Returns `NotInvertible` when the matrix is non-square or its
    /// determinant is zero, and `ZeroPivot` when elimination meets a zero
    /// diagonal entry (no row interchange is attempted).
    ///
    /// # Examples
    ///
    /// ```
    /// use matriz::primitives::Matrix;
    ///
    /// let a = Matrix::from_rows(vec![vec![4.0, 3.0], vec![3.0, 2.0]]).unwrap();
    /// let inv = a.inverse().unwrap();
    /// assert_eq!(a.matmul(&inv).unwrap(), Matrix::eye(2));
    /// ```
    pub fn inverse(&self) -> Result<Matrix<f64>> {
        if !self.has_inverse() {
            return Err(MatrizError::NotInvertible {
                rows: self.n_rows(),
                cols: self.n_cols(),
                det: self.det().unwrap_or(0.0),
            });
        }

        let n = self.n_rows();
        let mut work = self.clone();
        let mut inv = Matrix::eye(n);

        for i in 0..n {
            let pivot = work.get(i, i);
            if pivot == 0.0 {
                return Err(MatrizError::ZeroPivot { row: i });
            }
            for j in 0..n {
                work.set(i, j, work.get(i, j) / pivot);
                inv.set(i, j, inv.get(i, j) / pivot);
            }
            for r in 0..n {
                if r == i {
                    continue;
                }
                let factor = work.get(r, i);
                if factor == 0.0 {
                    continue;
                }
                for j in 0..n {
                    work.set(r, j, work.get(r, j) - factor * work.get(i, j));
                    inv.set(r, j, inv.get(r, j) - factor * inv.get(i, j));
                }
            }
        }
        Ok(inv)
    }
}
