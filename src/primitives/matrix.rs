//! Matrix type for 2D numeric data.

use super::Vector;
use crate::error::{MatrizError, Result};
use serde::{Deserialize, Serialize};

/// Threshold below which a cleaned product entry is flushed to exact zero.
const CLEANUP_EPSILON: f64 = 1e-11;

/// Rounds a product entry to 10 decimal places and flushes near-zero
/// magnitudes to exact zero. Keeps results of chained products (inverse
/// checks, the eigenvalue loop) free of floating-point noise.
fn clean(value: f64) -> f64 {
    let rounded = (value * 1e10).round() / 1e10;
    if rounded.abs() < CLEANUP_EPSILON {
        0.0
    } else {
        rounded
    }
}

/// A 2D matrix of numeric values (row-major storage).
///
/// Matrices are only created through validating constructors and are never
/// mutated by the algebra operations: everything that "changes" a matrix
/// returns a new value, and elimination routines work on private copies.
///
/// # Examples
///
/// ```
/// use matriz::primitives::Matrix;
///
/// let m = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]])
///     .expect("rows are non-empty and uniform");
/// assert_eq!(m.shape(), (2, 3));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Copy> Matrix<T> {
    /// Creates a matrix from a grid of rows, validating rectangularity.
    ///
    /// # Errors
    ///
    /// Returns `InvalidShape` if the grid has no rows, if any row is empty,
    /// or if row lengths are not uniform.
    pub fn from_rows(grid: Vec<Vec<T>>) -> Result<Self> {
        if grid.is_empty() {
            return Err(MatrizError::invalid_shape(
                "matrix must have at least one row",
            ));
        }
        let cols = grid[0].len();
        if cols == 0 {
            return Err(MatrizError::invalid_shape(
                "every row must have at least one element",
            ));
        }
        for (i, row) in grid.iter().enumerate() {
            if row.is_empty() {
                return Err(MatrizError::InvalidShape {
                    message: format!("row {i} is empty"),
                });
            }
            if row.len() != cols {
                return Err(MatrizError::InvalidShape {
                    message: format!(
                        "row {i} has length {}, expected {cols}",
                        row.len()
                    ),
                });
            }
        }
        let rows = grid.len();
        let data: Vec<T> = grid.into_iter().flatten().collect();
        Ok(Self { data, rows, cols })
    }

    /// Creates a matrix from a flat vector of row-major data.
    ///
    /// # Errors
    ///
    /// Returns `InvalidShape` if either dimension is zero or data length
    /// doesn't match `rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(MatrizError::invalid_shape(
                "matrix dimensions must be at least 1x1",
            ));
        }
        if data.len() != rows * cols {
            return Err(MatrizError::invalid_shape(
                "data length must equal rows * cols",
            ));
        }
        Ok(Self { data, rows, cols })
    }

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.cols
    }

    /// Returns true if the matrix is square.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Gets element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.data[row * self.cols + col]
    }

    /// Sets element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.data[row * self.cols + col] = value;
    }

    /// Returns a row as a Vector.
    #[must_use]
    pub fn row(&self, row_idx: usize) -> Vector<T> {
        let start = row_idx * self.cols;
        let end = start + self.cols;
        Vector::from_slice(&self.data[start..end])
    }

    /// Returns a column as a Vector.
    #[must_use]
    pub fn column(&self, col_idx: usize) -> Vector<T> {
        let data: Vec<T> = (0..self.rows)
            .map(|row| self.data[row * self.cols + col_idx])
            .collect();
        Vector::from_vec(data)
    }

    /// Returns the underlying data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl Matrix<f64> {
    /// Creates a matrix of zeros.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        }
    }

    /// Creates a matrix of ones.
    #[must_use]
    pub fn ones(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![1.0; rows * cols],
            rows,
            cols,
        }
    }

    /// Creates an identity matrix.
    #[must_use]
    pub fn eye(n: usize) -> Self {
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            data[i * n + i] = 1.0;
        }
        Self {
            data,
            rows: n,
            cols: n,
        }
    }

    /// Transposes the matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut data = vec![0.0; self.rows * self.cols];
        for i in 0..self.rows {
            for j in 0..self.cols {
                data[j * self.rows + i] = self.data[i * self.cols + j];
            }
        }
        Self {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }

    /// Adds another matrix element-wise.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if shapes differ.
    pub fn add(&self, other: &Self) -> Result<Self> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(MatrizError::dimension_mismatch(
                self.shape(),
                other.shape(),
            ));
        }
        let data: Vec<f64> = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a + b)
            .collect();
        Ok(Self {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Subtracts another matrix element-wise.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if shapes differ.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(MatrizError::dimension_mismatch(
                self.shape(),
                other.shape(),
            ));
        }
        let data: Vec<f64> = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a - b)
            .collect();
        Ok(Self {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Multiplies each element by a scalar.
    #[must_use]
    pub fn scale(&self, scalar: f64) -> Self {
        Self {
            data: self.data.iter().map(|x| x * scalar).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Matrix-matrix multiplication with a floating-point cleanup pass.
    ///
    /// Every result entry is rounded to 10 decimal places, and magnitudes
    /// below `1e-11` are flushed to exact zero. Use [`Matrix::dot_product`]
    /// when the raw values are needed.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if `self.cols != other.rows`.
    pub fn matmul(&self, other: &Self) -> Result<Self> {
        let mut result = self.dot_product(other)?;
        for value in &mut result.data {
            *value = clean(*value);
        }
        Ok(result)
    }

    /// Matrix-matrix multiplication without the cleanup pass.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if `self.cols != other.rows`.
    pub fn dot_product(&self, other: &Self) -> Result<Self> {
        if self.cols != other.rows {
            return Err(MatrizError::DimensionMismatch {
                expected: format!("{} rows on the right operand", self.cols),
                actual: format!("{}x{}", other.rows, other.cols),
            });
        }
        let mut result = vec![0.0; self.rows * other.cols];
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut sum = 0.0;
                for k in 0..self.cols {
                    sum += self.get(i, k) * other.get(k, j);
                }
                result[i * other.cols + j] = sum;
            }
        }
        Ok(Self {
            data: result,
            rows: self.rows,
            cols: other.cols,
        })
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;
