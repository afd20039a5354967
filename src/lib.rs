pub use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

pub mod cluster;
pub mod dataset;
pub mod error;
pub mod linear_model;
pub mod matrix;
pub mod metrics;
pub mod vector;

pub use cluster::{IndexSampler, KMeans};
pub use error::{MlError, Result};
pub use linear_model::{LinearRegression, LogisticModel, LogisticRegression, sigmoid, sigmoid_vector};
pub use matrix::Matrix;

pub type Vector = Array1<f64>;

/// A single sample in a clustering run.
pub type Point = Vector;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_types_work() {
        let vec = Vector::zeros(5);
        let mat = Matrix::zeros(3, 4);
        assert_eq!(vec.len(), 5);
        assert_eq!(mat.shape(), (3, 4));
    }
}
