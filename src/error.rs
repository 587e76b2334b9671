//! Error types for matriz operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for matriz operations.
///
/// Provides detailed context about failures including malformed input
/// grids, dimension mismatches, singular matrices, and degenerate tensors.
///
/// # Examples
///
/// ```
/// use matriz::error::MatrizError;
///
/// let err = MatrizError::DimensionMismatch {
///     expected: "2x3".to_string(),
///     actual: "3x2".to_string(),
/// };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug)]
pub enum MatrizError {
    /// Input grid cannot form a matrix (no rows, an empty row, or ragged rows).
    InvalidShape {
        /// Description of the shape violation
        message: String,
    },

    /// Matrix dimensions don't match for the operation.
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// Operation requires a square matrix.
    NotSquare {
        /// Row count found
        rows: usize,
        /// Column count found
        cols: usize,
    },

    /// Determinant of a 1x1 matrix is undefined in this engine.
    OrderOneDeterminant,

    /// Matrix cannot be inverted (non-square or zero determinant).
    NotInvertible {
        /// Row count found
        rows: usize,
        /// Column count found
        cols: usize,
        /// Determinant value when the matrix is square, 0 otherwise
        det: f64,
    },

    /// Elimination hit a zero diagonal entry and cannot proceed without
    /// row interchange.
    ZeroPivot {
        /// Pivot row index
        row: usize,
    },

    /// Tensor has no layers.
    EmptyTensor,

    /// Tensor's first layer has no usable matrix.
    EmptyComponent,

    /// Tensor depths don't match for the product.
    DepthMismatch {
        /// Depth of the left operand
        left: usize,
        /// Depth of the right operand
        right: usize,
    },

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for MatrizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrizError::InvalidShape { message } => {
                write!(f, "Invalid matrix shape: {message}")
            }
            MatrizError::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "Matrix dimension mismatch: expected {expected}, got {actual}"
                )
            }
            MatrizError::NotSquare { rows, cols } => {
                write!(f, "Matrix must be square, got {rows}x{cols}")
            }
            MatrizError::OrderOneDeterminant => {
                write!(f, "Determinant is undefined for a 1x1 matrix")
            }
            MatrizError::NotInvertible { rows, cols, det } => {
                write!(
                    f,
                    "Matrix is not invertible: shape {rows}x{cols}, determinant = {det}"
                )
            }
            MatrizError::ZeroPivot { row } => {
                write!(
                    f,
                    "Zero pivot at row {row}: elimination cannot proceed without row interchange"
                )
            }
            MatrizError::EmptyTensor => {
                write!(f, "Tensor must contain at least one layer of matrices")
            }
            MatrizError::EmptyComponent => {
                write!(
                    f,
                    "Tensor's first layer must contain at least one matrix with rows and columns"
                )
            }
            MatrizError::DepthMismatch { left, right } => {
                write!(f, "Tensor depth mismatch: {left} vs {right}")
            }
            MatrizError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for MatrizError {}

impl From<&str> for MatrizError {
    fn from(msg: &str) -> Self {
        MatrizError::Other(msg.to_string())
    }
}

impl From<String> for MatrizError {
    fn from(msg: String) -> Self {
        MatrizError::Other(msg)
    }
}

impl MatrizError {
    /// Create a shape error with a descriptive message.
    #[must_use]
    pub fn invalid_shape(message: &str) -> Self {
        Self::InvalidShape {
            message: message.to_string(),
        }
    }

    /// Create a dimension mismatch error from two (rows, cols) shapes.
    #[must_use]
    pub fn dimension_mismatch(expected: (usize, usize), actual: (usize, usize)) -> Self {
        Self::DimensionMismatch {
            expected: format!("{}x{}", expected.0, expected.1),
            actual: format!("{}x{}", actual.0, actual.1),
        }
    }
}

#[allow(clippy::cmp_owned)]
impl PartialEq<&str> for MatrizError {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}

#[allow(clippy::cmp_owned)]
impl PartialEq<MatrizError> for &str {
    fn eq(&self, other: &MatrizError) -> bool {
        *self == other.to_string()
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, MatrizError>;
