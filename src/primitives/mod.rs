//! Core compute primitives (Vector, Matrix, Tensor).
//!
//! These types provide the foundation for all linear-algebra routines.
//! Values are immutable once published: every operation returns a fresh
//! result instead of mutating its inputs.

mod matrix;
mod tensor;
mod vector;

pub use matrix::Matrix;
pub use tensor::Tensor;
pub use vector::Vector;
