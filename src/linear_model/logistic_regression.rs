use crate::error::{MlError, Result};
use crate::matrix::Matrix;
use crate::vector;
use crate::Vector;

/// Logistic function `1 / (1 + e^-z)`.
///
/// Extreme inputs rely on `exp` saturating: large negative `z` gives
/// `exp(-z) = inf` and therefore `0.0`.
pub fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

pub fn sigmoid_vector(z: &Vector) -> Vector {
    z.mapv(sigmoid)
}

/// Hyperparameters for binary logistic regression trained by full-batch
/// gradient descent on the log-loss.
#[derive(Clone, Debug)]
pub struct LogisticRegression {
    learning_rate: f64,
    iterations: usize,
}

impl LogisticRegression {
    pub fn new() -> Self {
        Self {
            learning_rate: 0.01,
            iterations: 1000,
        }
    }

    pub fn with_params(learning_rate: f64, iterations: usize) -> Self {
        Self {
            learning_rate,
            iterations,
        }
    }

    pub fn learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Trains from zero weights for exactly `iterations` steps.
    ///
    /// There is no early exit and no shuffling, so the result depends only
    /// on the inputs. Each call starts over and returns a fresh model.
    pub fn fit(&self, x: &Matrix, y: &Vector) -> Result<LogisticModel> {
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(MlError::InvalidParameter(format!(
                "learning_rate must be a positive finite number, got {}",
                self.learning_rate
            )));
        }
        if x.rows() != y.len() {
            return Err(MlError::DimensionMismatch(format!(
                "number of observations in X ({}) and y ({}) must match",
                x.rows(),
                y.len()
            )));
        }
        if x.rows() == 0 {
            return Err(MlError::EmptyInput("X has no observations".to_string()));
        }

        let n_samples = x.rows() as f64;
        let design = x.with_intercept_column();
        let design_t = design.transpose();
        let mut weights = Vector::zeros(design.cols());

        for iteration in 0..self.iterations {
            let predictions = sigmoid_vector(&design.multiply_vector(&weights)?);
            let errors = vector::subtract(&predictions, y)?;
            let gradients = vector::divide(&design_t.multiply_vector(&errors)?, n_samples)?;
            weights = vector::subtract(&weights, &vector::scale(&gradients, self.learning_rate)?)?;

            log::trace!(
                "iteration {}: gradient norm {:.6e}",
                iteration,
                gradients.dot(&gradients).sqrt()
            );
        }

        log::debug!(
            "logistic regression trained on {} samples for {} iterations: weights={}",
            x.rows(),
            self.iterations,
            weights
        );

        Ok(LogisticModel { weights })
    }
}

impl Default for LogisticRegression {
    fn default() -> Self {
        Self::new()
    }
}

/// Trained logistic regression weights; index 0 is the bias.
#[derive(Clone, Debug, PartialEq)]
pub struct LogisticModel {
    weights: Vector,
}

impl LogisticModel {
    pub fn weights(&self) -> &Vector {
        &self.weights
    }

    pub fn bias(&self) -> f64 {
        self.weights[0]
    }

    pub fn predict_proba(&self, x: &Vector) -> Result<f64> {
        let n_features = self.weights.len() - 1;
        if x.len() != n_features {
            return Err(MlError::DimensionMismatch(format!(
                "feature vector has {} values, model expects {}",
                x.len(),
                n_features
            )));
        }

        let mut z = self.weights[0];
        for (i, &value) in x.iter().enumerate() {
            z += self.weights[i + 1] * value;
        }
        Ok(sigmoid(z))
    }

    /// Class label: 1 when the probability is strictly above 0.5.
    pub fn predict(&self, x: &Vector) -> Result<u8> {
        let probability = self.predict_proba(x)?;
        Ok(if probability > 0.5 { 1 } else { 0 })
    }

    pub fn predict_matrix(&self, x: &Matrix) -> Result<Vector> {
        let mut labels = Vector::zeros(x.rows());
        for i in 0..x.rows() {
            labels[i] = f64::from(self.predict(&x.row(i)?)?);
        }
        Ok(labels)
    }

    /// Fraction of rows classified correctly.
    pub fn score(&self, x: &Matrix, y: &Vector) -> Result<f64> {
        let predictions = self.predict_matrix(x)?;
        crate::metrics::accuracy(y, &predictions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_sigmoid_function() {
        assert_eq!(sigmoid(0.0), 0.5);
        assert!((sigmoid(100.0) - 1.0).abs() < 1e-6);
        assert!(sigmoid(-100.0).abs() < 1e-6);
        assert_eq!(sigmoid(-1000.0), 0.0);

        let v = sigmoid_vector(&array![0.0, 0.0]);
        assert_eq!(v, array![0.5, 0.5]);
    }

    #[test]
    fn test_logistic_regression_1d() {
        let x = Matrix::from(array![[-2.0], [-1.0], [0.0], [1.0], [2.0]]);
        let y = array![0.0, 0.0, 0.0, 1.0, 1.0];

        let model = LogisticRegression::new().fit(&x, &y).unwrap();

        assert_eq!(model.weights().len(), 2);
        assert_eq!(model.predict(&array![-1.0]).unwrap(), 0);
        assert_eq!(model.predict(&array![1.0]).unwrap(), 1);
        assert!(model.predict_proba(&array![-2.0]).unwrap() < 0.5);
    }

    #[test]
    fn test_logistic_regression_2d() {
        // Class 1 when the second feature exceeds the first.
        let x = Matrix::from(array![
            [1.0, 2.0],
            [2.0, 3.0],
            [3.0, 4.0],
            [2.0, 1.0],
            [3.0, 2.0],
            [4.0, 3.0]
        ]);
        let y = array![1.0, 1.0, 1.0, 0.0, 0.0, 0.0];

        let model = LogisticRegression::with_params(0.1, 2000).fit(&x, &y).unwrap();

        assert_eq!(model.predict(&array![1.0, 3.0]).unwrap(), 1);
        assert_eq!(model.predict(&array![3.0, 1.0]).unwrap(), 0);
        assert!((model.score(&x, &y).unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_iterations_predicts_zero() {
        let x = Matrix::from(array![[1.0], [2.0]]);
        let y = array![0.0, 1.0];

        let model = LogisticRegression::new().iterations(0).fit(&x, &y).unwrap();

        // Untrained weights give exactly 0.5, which is class 0.
        assert_eq!(model.bias(), 0.0);
        assert_eq!(model.predict_proba(&array![5.0]).unwrap(), 0.5);
        assert_eq!(model.predict(&array![5.0]).unwrap(), 0);
    }

    #[test]
    fn test_refit_starts_from_scratch() {
        let x = Matrix::from(array![[-1.0], [1.0]]);
        let y = array![0.0, 1.0];
        let config = LogisticRegression::new().iterations(50);

        let first = config.fit(&x, &y).unwrap();
        let second = config.fit(&x, &y).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_logistic_regression_errors() {
        let x = Matrix::from(array![[1.0], [2.0]]);

        assert!(matches!(
            LogisticRegression::new().fit(&x, &array![0.0, 1.0, 1.0]),
            Err(MlError::DimensionMismatch(_))
        ));
        assert!(matches!(
            LogisticRegression::new().fit(&Matrix::zeros(0, 1), &Vector::zeros(0)),
            Err(MlError::EmptyInput(_))
        ));
        assert!(matches!(
            LogisticRegression::new().learning_rate(-1.0).fit(&x, &array![0.0, 1.0]),
            Err(MlError::InvalidParameter(_))
        ));

        let model = LogisticRegression::new().fit(&x, &array![0.0, 1.0]).unwrap();
        assert!(matches!(
            model.predict(&array![1.0, 2.0]),
            Err(MlError::DimensionMismatch(_))
        ));
    }
}
