//! Dense row-major matrix of `f64` with bounds-checked access.
//!
//! Every operation returns a new value; the only in-place mutation is
//! explicit element assignment through [`Matrix::get_mut`] or [`Matrix::set`].

use crate::error::{MlError, Result};
use crate::{Array2, Vector};

#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    data: Array2<f64>,
}

impl Matrix {
    /// Zero-filled matrix of the given shape.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: Array2::zeros((rows, cols)),
        }
    }

    pub fn identity(n: usize) -> Self {
        Self {
            data: Array2::eye(n),
        }
    }

    /// Builds a matrix by copying a sequence of rows.
    ///
    /// The column count is taken from the first row (0 when there are no
    /// rows). Ragged input is rejected with [`MlError::InvalidShape`].
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, |r| r.len());

        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != n_cols) {
            return Err(MlError::InvalidShape(format!(
                "row {} has {} columns, expected {}",
                i,
                row.len(),
                n_cols
            )));
        }

        let flat: Vec<f64> = rows.iter().flatten().copied().collect();
        Self::from_shape_vec(n_rows, n_cols, flat)
    }

    pub fn from_shape_vec(rows: usize, cols: usize, values: Vec<f64>) -> Result<Self> {
        let len = values.len();
        let data = Array2::from_shape_vec((rows, cols), values).map_err(|_| {
            MlError::InvalidShape(format!(
                "{} values cannot fill a {}x{} matrix",
                len, rows, cols
            ))
        })?;
        Ok(Self { data })
    }

    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows(), self.cols())
    }

    pub fn as_array(&self) -> &Array2<f64> {
        &self.data
    }

    fn check_index(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.rows() || col >= self.cols() {
            return Err(MlError::IndexOutOfRange {
                row,
                col,
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        Ok(())
    }

    pub fn get(&self, row: usize, col: usize) -> Result<f64> {
        self.check_index(row, col)?;
        Ok(self.data[[row, col]])
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut f64> {
        self.check_index(row, col)?;
        Ok(&mut self.data[[row, col]])
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        *self.get_mut(row, col)? = value;
        Ok(())
    }

    /// Copy of row `i`.
    pub fn row(&self, i: usize) -> Result<Vector> {
        if i >= self.rows() {
            return Err(MlError::IndexOutOfRange {
                row: i,
                col: 0,
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        Ok(self.data.row(i).to_owned())
    }

    /// Matrix-vector product; `vector.len()` must equal the column count.
    pub fn multiply_vector(&self, vector: &Vector) -> Result<Vector> {
        if vector.len() != self.cols() {
            return Err(MlError::DimensionMismatch(format!(
                "cannot multiply {}x{} matrix by vector of length {}",
                self.rows(),
                self.cols(),
                vector.len()
            )));
        }

        let mut result = Vector::zeros(self.rows());
        for i in 0..self.rows() {
            for j in 0..self.cols() {
                result[i] += self.data[[i, j]] * vector[j];
            }
        }
        Ok(result)
    }

    /// Matrix-matrix product by plain triple-loop accumulation.
    pub fn matmul(&self, other: &Matrix) -> Result<Matrix> {
        if self.cols() != other.rows() {
            return Err(MlError::DimensionMismatch(format!(
                "cannot multiply {}x{} matrix by {}x{} matrix",
                self.rows(),
                self.cols(),
                other.rows(),
                other.cols()
            )));
        }

        let mut result = Array2::zeros((self.rows(), other.cols()));
        for i in 0..self.rows() {
            for j in 0..other.cols() {
                for k in 0..self.cols() {
                    result[[i, j]] += self.data[[i, k]] * other.data[[k, j]];
                }
            }
        }
        Ok(Matrix { data: result })
    }

    pub fn transpose(&self) -> Matrix {
        Matrix {
            data: self.data.t().to_owned(),
        }
    }

    /// Inverse by Gauss-Jordan elimination on `[A | I]`.
    ///
    /// No row exchanges are performed: a pivot that is exactly `0.0` fails
    /// with [`MlError::SingularMatrix`] even when a lower row could supply a
    /// non-zero entry in that column. Callers relying on pivoting need to
    /// reorder rows themselves.
    pub fn inverse(&self) -> Result<Matrix> {
        let n = self.rows();
        if n == 0 {
            return Err(MlError::InvalidShape("matrix is empty".to_string()));
        }
        if n != self.cols() {
            return Err(MlError::InvalidShape(format!(
                "inverse is only defined for square matrices, got {}x{}",
                n,
                self.cols()
            )));
        }

        let mut aug = Array2::<f64>::zeros((n, 2 * n));
        for i in 0..n {
            for j in 0..n {
                aug[[i, j]] = self.data[[i, j]];
            }
            aug[[i, n + i]] = 1.0;
        }

        for i in 0..n {
            let pivot = aug[[i, i]];
            if pivot == 0.0 {
                log::debug!("zero pivot at row {} of {}x{} matrix", i, n, n);
                return Err(MlError::SingularMatrix { row: i });
            }

            for j in 0..2 * n {
                aug[[i, j]] /= pivot;
            }

            for k in 0..n {
                if k == i {
                    continue;
                }
                let factor = aug[[k, i]];
                for j in 0..2 * n {
                    aug[[k, j]] -= factor * aug[[i, j]];
                }
            }
        }

        let inverse = aug.slice(ndarray::s![.., n..]).to_owned();
        Ok(Matrix { data: inverse })
    }

    /// Design matrix: a column of 1.0 followed by the columns of `self`.
    pub fn with_intercept_column(&self) -> Matrix {
        let mut design = Array2::ones((self.rows(), self.cols() + 1));
        design.slice_mut(ndarray::s![.., 1..]).assign(&self.data);
        Matrix { data: design }
    }
}

impl From<Array2<f64>> for Matrix {
    fn from(data: Array2<f64>) -> Self {
        Self { data }
    }
}
