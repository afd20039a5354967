//! Linear models for regression and classification.
//!
//! This module provides:
//! - `LinearRegression`: simple (closed-form) and multiple (normal equations) least squares
//! - `LogisticRegression`: binary classification trained by batch gradient descent
//!
//! # Examples
//!
//! ## Linear Regression
//! ```rust
//! use simple_ml::{LinearRegression, Matrix};
//! use ndarray::array;
//!
//! let simple = LinearRegression::simple(&array![1.0, 2.0, 3.0], &array![3.0, 5.0, 7.0]).unwrap();
//! assert!((simple.predict(4.0).unwrap() - 9.0).abs() < 1e-10);
//!
//! let x = Matrix::from(array![[1.0, 0.0], [0.0, 1.0], [1.0, 1.0], [2.0, 1.0]]);
//! let y = array![3.0, 4.0, 6.0, 8.0];
//! let multiple = LinearRegression::multiple(&x, &y).unwrap();
//! let prediction = multiple.predict_vector(&array![3.0, 2.0]).unwrap();
//! ```
//!
//! ## Logistic Regression
//! ```rust
//! use simple_ml::{LogisticRegression, Matrix};
//! use ndarray::array;
//!
//! let x = Matrix::from(array![[1.0], [2.0], [3.0], [4.0]]);
//! let y = array![0.0, 0.0, 1.0, 1.0];
//!
//! let model = LogisticRegression::new().learning_rate(0.1).fit(&x, &y).unwrap();
//! let label = model.predict(&array![4.0]).unwrap();
//! let probability = model.predict_proba(&array![4.0]).unwrap();
//! ```

mod linear_regression;
mod logistic_regression;

pub use linear_regression::LinearRegression;
pub use logistic_regression::{LogisticModel, LogisticRegression, sigmoid, sigmoid_vector};
