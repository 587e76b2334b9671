//! Eigenvalue estimation via the iterative QR algorithm.
//!
//! The working matrix is repeatedly replaced by `R * Q` for a fixed number
//! of iterations; for well-separated real spectra the diagonal converges to
//! the eigenvalues. There is no convergence tolerance or early exit, so
//! precision is whatever the iteration count buys. Repeated, complex, or
//! defective eigenvalues are outside what this method can resolve.

use crate::error::{MatrizError, Result};
use crate::primitives::{Matrix, Vector};

/// Iteration count used by [`Matrix::eigenvalues`] and
/// [`Matrix::eigenvectors`].
pub const DEFAULT_QR_ITERATIONS: usize = 100;

impl Matrix<f64> {
    /// Estimates the eigenvalues with [`DEFAULT_QR_ITERATIONS`] rounds.
    ///
    /// # Errors
    ///
    /// Returns `NotSquare` for rectangular input.
    pub fn eigenvalues(&self) -> Result<Vector<f64>> {
        self.eigenvalues_with(DEFAULT_QR_ITERATIONS)
    }

    /// Estimates the eigenvalues with an explicit iteration count.
    ///
    /// Returns the diagonal of the final working matrix, in the order the
    /// converged quasi-triangular form leaves it.
    ///
    /// # Errors
    ///
    /// Returns `NotSquare` for rectangular input, or a propagated error
    /// from the `R * Q` recombination.
    pub fn eigenvalues_with(&self, iterations: usize) -> Result<Vector<f64>> {
        if !self.is_square() {
            return Err(MatrizError::NotSquare {
                rows: self.n_rows(),
                cols: self.n_cols(),
            });
        }
        let mut work = self.clone();
        for _ in 0..iterations {
            let (q, r) = work.qr();
            work = r.matmul(&q)?;
        }
        let diagonal: Vec<f64> = (0..self.n_rows()).map(|i| work.get(i, i)).collect();
        Ok(Vector::from_vec(diagonal))
    }

    /// Recovers a candidate eigenvector for every estimated eigenvalue
    /// using [`DEFAULT_QR_ITERATIONS`] rounds.
    ///
    /// # Errors
    ///
    /// Propagates failures from eigenvalue estimation and the homogeneous
    /// solver.
    pub fn eigenvectors(&self) -> Result<Vec<Matrix<f64>>> {
        self.eigenvectors_with(DEFAULT_QR_ITERATIONS)
    }

    /// Recovers candidate eigenvectors with an explicit iteration count.
    ///
    /// For each eigenvalue estimate `lambda`, forms `self - lambda * I`
    /// and solves the homogeneous system. The candidates inherit the
    /// imprecision of the eigenvalue estimates.
    ///
    /// # Errors
    ///
    /// Propagates failures from eigenvalue estimation and the homogeneous
    /// solver.
    pub fn eigenvectors_with(&self, iterations: usize) -> Result<Vec<Matrix<f64>>> {
        let eigenvalues = self.eigenvalues_with(iterations)?;
        let n = self.n_rows();
        let mut vectors = Vec::with_capacity(eigenvalues.len());
        for i in 0..eigenvalues.len() {
            let shifted = self.sub(&Matrix::eye(n).scale(eigenvalues[i]))?;
            vectors.push(shifted.solve_homogeneous()?);
        }
        Ok(vectors)
    }
}

#[cfg(test)]
mod tests {
    use super::DEFAULT_QR_ITERATIONS;
    use crate::error::MatrizError;
    use crate::primitives::Matrix;

    fn symmetric() -> Matrix<f64> {
        Matrix::from_rows(vec![vec![2.0, 1.0], vec![1.0, 2.0]]).expect("valid grid")
    }

    #[test]
    fn test_eigenvalues_symmetric_2x2() {
        // Eigenvalues of [[2,1],[1,2]] are 3 and 1.
        let values = symmetric().eigenvalues().expect("square input");
        let mut sorted: Vec<f64> = values.as_slice().to_vec();
        sorted.sort_by(|a, b| b.partial_cmp(a).expect("finite estimates"));
        assert!((sorted[0] - 3.0).abs() < 1e-3);
        assert!((sorted[1] - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_eigenvalue_sum_matches_trace() {
        let a = Matrix::from_rows(vec![
            vec![4.0, 1.0, 0.0],
            vec![1.0, 3.0, 1.0],
            vec![0.0, 1.0, 2.0],
        ])
        .expect("valid grid");
        let values = a.eigenvalues().expect("square input");
        let sum: f64 = values.iter().sum();
        let trace = 4.0 + 3.0 + 2.0;
        assert!((sum - trace).abs() < 1e-6, "sum = {sum}");
    }

    #[test]
    fn test_eigenvalues_zero_iterations_returns_diagonal() {
        let a = Matrix::from_rows(vec![vec![5.0, 1.0], vec![0.0, 7.0]]).expect("valid grid");
        let values = a.eigenvalues_with(0).expect("square input");
        assert_eq!(values.as_slice(), &[5.0, 7.0]);
    }

    #[test]
    fn test_eigenvalues_not_square() {
        assert!(matches!(
            Matrix::zeros(2, 3).eigenvalues(),
            Err(MatrizError::NotSquare { rows: 2, cols: 3 })
        ));
    }

    #[test]
    fn test_default_iteration_count() {
        assert_eq!(DEFAULT_QR_ITERATIONS, 100);
    }

    #[test]
    fn test_eigenvectors_shapes_and_residuals() {
        let a = symmetric();
        let values = a.eigenvalues().expect("square input");
        let vectors = a.eigenvectors().expect("solver tolerates rank deficiency");
        assert_eq!(vectors.len(), 2);
        for (i, v) in vectors.iter().enumerate() {
            assert_eq!(v.shape(), (2, 1));
            assert!(v.as_slice().iter().all(|x| x.is_finite()));
            // Candidate quality is bounded by the eigenvalue estimate, so
            // only the residual A*v - lambda*v is checked, loosely.
            let av = a.matmul(v).expect("inner dimensions match");
            let lv = v.scale(values[i]);
            for k in 0..2 {
                assert!((av.get(k, 0) - lv.get(k, 0)).abs() < 1e-3);
            }
        }
    }
}
