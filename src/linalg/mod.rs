//! Dense linear-algebra routines over `Matrix<f64>`.
//!
//! Everything here follows one ownership rule: routines that need scratch
//! space (the elimination passes, the eigenvalue loop) clone the source
//! matrix and mutate only the private copy.
//!
//! The two elimination routines deliberately differ in robustness:
//! [`inverse`](crate::primitives::Matrix::inverse) never interchanges rows,
//! while [`solve_homogeneous`](crate::primitives::Matrix::solve_homogeneous)
//! performs partial pivoting.

mod determinant;
mod eigen;
mod inverse;
mod qr;
mod solve;

pub use eigen::DEFAULT_QR_ITERATIONS;
