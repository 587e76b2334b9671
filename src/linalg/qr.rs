//! QR decomposition via modified Gram-Schmidt orthogonalization.

use crate::primitives::Matrix;

impl Matrix<f64> {
    /// Decomposes an m x n matrix into `Q` (m x n, orthonormal columns)
    /// and `R` (n x n, upper-triangular) with `Q * R ~= self`.
    ///
    /// Each column of `self` has its projections onto the previously
    /// orthonormalized columns subtracted off, the residual is normalized
    /// into `Q`, and row `j` of `R` is filled with dot products of `Q`'s
    /// column `j` against the remaining source columns. Entries below the
    /// diagonal of `R` are never written and stay exactly zero.
    ///
    /// A column that is linearly dependent on its predecessors leaves a
    /// near-zero residual norm; the division then produces non-finite
    /// entries in `Q`. That limitation is deliberate and not masked.
    #[must_use]
    pub fn qr(&self) -> (Matrix<f64>, Matrix<f64>) {
        let m = self.n_rows();
        let n = self.n_cols();
        let mut q = Matrix::zeros(m, n);
        let mut r = Matrix::zeros(n, n);

        for j in 0..n {
            let mut residual: Vec<f64> = (0..m).map(|k| self.get(k, j)).collect();
            for i in 0..j {
                let qi = q.column(i);
                let proj: f64 = qi
                    .as_slice()
                    .iter()
                    .zip(residual.iter())
                    .map(|(a, b)| a * b)
                    .sum();
                r.set(i, j, proj);
                for k in 0..m {
                    residual[k] -= proj * qi[k];
                }
            }

            let norm = residual.iter().map(|x| x * x).sum::<f64>().sqrt();
            for k in 0..m {
                q.set(k, j, residual[k] / norm);
            }

            let qj = q.column(j);
            for k in j..n {
                r.set(j, k, qj.dot(&self.column(k)));
            }
        }
        (q, r)
    }
}
