//! Depth-indexed collections of matrices.

use super::Matrix;
use crate::error::{MatrizError, Result};
use serde::{Deserialize, Serialize};

/// A depth-indexed collection of layers, each holding a sequence of
/// matrices. Not a general n-dimensional array.
///
/// # Examples
///
/// ```
/// use matriz::primitives::{Matrix, Tensor};
///
/// let t = Tensor::from_layers(vec![vec![Matrix::eye(2)], vec![Matrix::eye(2)]])
///     .expect("first layer holds a usable matrix");
/// assert_eq!(t.depth(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tensor {
    layers: Vec<Vec<Matrix<f64>>>,
}

impl Tensor {
    /// Creates a tensor from a grid of matrices, validating depth and the
    /// first layer.
    ///
    /// Only the first layer and its first matrix are checked; later layers
    /// are taken as-is. Matrix construction already guarantees every matrix
    /// has at least one row and one column.
    ///
    /// # Errors
    ///
    /// Returns `EmptyTensor` if there are no layers, or `EmptyComponent` if
    /// the first layer is empty or starts with a degenerate matrix.
    pub fn from_layers(layers: Vec<Vec<Matrix<f64>>>) -> Result<Self> {
        if layers.is_empty() {
            return Err(MatrizError::EmptyTensor);
        }
        match layers[0].first() {
            None => return Err(MatrizError::EmptyComponent),
            Some(first) => {
                if first.n_rows() == 0 || first.n_cols() == 0 {
                    return Err(MatrizError::EmptyComponent);
                }
            }
        }
        Ok(Self { layers })
    }

    /// Returns the depth (number of layers).
    #[must_use]
    pub fn depth(&self) -> usize {
        self.layers.len()
    }

    /// Returns the layers as a slice.
    #[must_use]
    pub fn layers(&self) -> &[Vec<Matrix<f64>>] {
        &self.layers
    }

    /// Returns the total number of matrices across all layers.
    #[must_use]
    pub fn matrix_count(&self) -> usize {
        self.layers.iter().map(Vec::len).sum()
    }

    /// Pairwise product with another tensor of the same depth.
    ///
    /// For each layer of `self`, the output layer holds `m1 * m2` for every
    /// matrix `m1` in that layer and every matrix `m2` across all of
    /// `other`'s layers in flattened order. Each entry goes through
    /// [`Matrix::matmul`]; the first incompatible pair aborts the whole
    /// product. This pairing rule is the contract — it is not a Kronecker
    /// product.
    ///
    /// # Errors
    ///
    /// Returns `EmptyTensor` if either operand holds no matrices,
    /// `DepthMismatch` if depths differ, or `DimensionMismatch` from a
    /// failed multiplication.
    pub fn product(&self, other: &Tensor) -> Result<Tensor> {
        if self.matrix_count() == 0 || other.matrix_count() == 0 {
            return Err(MatrizError::EmptyTensor);
        }
        if self.depth() != other.depth() {
            return Err(MatrizError::DepthMismatch {
                left: self.depth(),
                right: other.depth(),
            });
        }
        let mut layers = Vec::with_capacity(self.depth());
        for layer in &self.layers {
            let mut out_layer = Vec::with_capacity(layer.len() * other.matrix_count());
            for m1 in layer {
                for m2 in other.layers.iter().flatten() {
                    out_layer.push(m1.matmul(m2)?);
                }
            }
            layers.push(out_layer);
        }
        Ok(Tensor { layers })
    }
}

#[cfg(test)]
#[path = "tensor_tests.rs"]
mod tests;
