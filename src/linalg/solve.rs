//! Homogeneous linear systems via Gauss-Jordan with partial pivoting.

use crate::error::Result;
use crate::primitives::Matrix;

impl Matrix<f64> {
    /// Solves `self * x = 0` by full Gauss-Jordan reduction of the
    /// augmented system and returns the last augmented column as an m x 1
    /// matrix.
    ///
    /// Unlike [`Matrix::inverse`], a zero diagonal entry is handled by
    /// searching downward for a row with a nonzero entry in the pivot
    /// column and swapping it in. When no such row exists the pivot
    /// position is skipped: rank deficiency is expected here, since the
    /// main caller feeds in `A - lambda*I` for an approximate eigenvalue.
    /// The result is a candidate vector whose quality is bounded by that
    /// approximation, not a guaranteed nontrivial null-space vector.
    ///
    /// # Errors
    ///
    /// Returns `InvalidShape` only if the result column cannot be formed,
    /// which does not happen for a validated matrix.
    pub fn solve_homogeneous(&self) -> Result<Matrix<f64>> {
        let m = self.n_rows();
        let n = self.n_cols();

        // Private augmented copy with a zero right-hand side.
        let mut aug = Matrix::zeros(m, n + 1);
        for i in 0..m {
            for j in 0..n {
                aug.set(i, j, self.get(i, j));
            }
        }

        for i in 0..m.min(n) {
            if aug.get(i, i) == 0.0 {
                if let Some(swap) = (i + 1..m).find(|&r| aug.get(r, i) != 0.0) {
                    for j in 0..=n {
                        let tmp = aug.get(i, j);
                        aug.set(i, j, aug.get(swap, j));
                        aug.set(swap, j, tmp);
                    }
                }
            }
            let pivot = aug.get(i, i);
            if pivot == 0.0 {
                continue;
            }
            for j in 0..=n {
                aug.set(i, j, aug.get(i, j) / pivot);
            }
            for r in 0..m {
                if r == i {
                    continue;
                }
                let factor = aug.get(r, i);
                if factor == 0.0 {
                    continue;
                }
                for j in 0..=n {
                    aug.set(r, j, aug.get(r, j) - factor * aug.get(i, j));
                }
            }
        }

        let solution: Vec<f64> = (0..m).map(|i| aug.get(i, n)).collect();
        Matrix::from_vec(m, 1, solution)
    }
}
