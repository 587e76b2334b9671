//! Matriz: dense, real-valued linear algebra in pure Rust.
//!
//! Matriz provides validated matrix construction, elementwise arithmetic,
//! matrix multiplication with a floating-point cleanup pass, cofactor
//! determinants, Gauss-Jordan inversion, a partial-pivoting homogeneous
//! solver, Gram-Schmidt QR decomposition, iterative QR eigenvalue
//! estimation, and a depth-indexed tensor container with a pairwise
//! matrix product.
//!
//! # Quick Start
//!
//! ```
//! use matriz::prelude::*;
//!
//! let a = Matrix::from_rows(vec![
//!     vec![4.0, 3.0],
//!     vec![3.0, 2.0],
//! ]).unwrap();
//!
//! assert_eq!(a.det().unwrap(), -1.0);
//!
//! let inv = a.inverse().unwrap();
//! assert_eq!(a.matmul(&inv).unwrap(), Matrix::eye(2));
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Core Vector, Matrix, and Tensor types
//! - [`linalg`]: Determinants, inversion, homogeneous solving, QR, eigen
//! - [`error`]: The [`MatrizError`] taxonomy and crate [`Result`] alias
//!
//! # Design
//!
//! Published values are immutable: every operation returns a fresh matrix,
//! and elimination routines work on private copies. The engine performs no
//! I/O and holds no shared state, so concurrent callers are safe as long
//! as they don't mutate a matrix's backing storage after construction.

pub mod error;
pub mod linalg;
pub mod prelude;
pub mod primitives;

pub use error::{MatrizError, Result};
pub use linalg::DEFAULT_QR_ITERATIONS;
pub use primitives::{Matrix, Tensor, Vector};
