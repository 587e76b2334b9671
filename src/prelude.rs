//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use matriz::prelude::*;
//! ```

pub use crate::error::{MatrizError, Result};
pub use crate::linalg::DEFAULT_QR_ITERATIONS;
pub use crate::primitives::{Matrix, Tensor, Vector};
