use crate::error::{MlError, Result};
use crate::matrix::Matrix;
use crate::vector;
use crate::Vector;

#[derive(Clone, Debug, PartialEq)]
enum Fitted {
    Simple { intercept: f64, slope: f64 },
    Multiple { coefficients: Vector },
}

/// Ordinary least squares, fitted once at construction.
///
/// [`LinearRegression::simple`] fits `y = intercept + slope * x` in closed
/// form; [`LinearRegression::multiple`] solves the normal equations
/// `β = (XᵗX)⁻¹ Xᵗy` on the design matrix. Each model answers only the
/// predict variant matching how it was fitted.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearRegression {
    fitted: Fitted,
}

impl LinearRegression {
    pub fn simple(x: &Vector, y: &Vector) -> Result<Self> {
        if x.len() != y.len() {
            return Err(MlError::DimensionMismatch(format!(
                "x and y must have the same size, got {} and {}",
                x.len(),
                y.len()
            )));
        }

        let x_mean = vector::mean(x)?;
        let y_mean = vector::mean(y)?;

        let mut numerator = 0.0;
        let mut denominator = 0.0;
        for (&xi, &yi) in x.iter().zip(y.iter()) {
            numerator += (xi - x_mean) * (yi - y_mean);
            denominator += (xi - x_mean) * (xi - x_mean);
        }

        if denominator == 0.0 {
            return Err(MlError::DegenerateInput(
                "all x values are the same".to_string(),
            ));
        }

        let slope = numerator / denominator;
        let intercept = y_mean - slope * x_mean;
        log::debug!(
            "simple linear regression on {} samples: intercept={}, slope={}",
            x.len(),
            intercept,
            slope
        );

        Ok(Self {
            fitted: Fitted::Simple { intercept, slope },
        })
    }

    pub fn multiple(x: &Matrix, y: &Vector) -> Result<Self> {
        if x.rows() != y.len() {
            return Err(MlError::DimensionMismatch(format!(
                "number of observations in X ({}) and y ({}) must match",
                x.rows(),
                y.len()
            )));
        }
        if x.cols() == 0 {
            return Err(MlError::EmptyInput("X has no feature columns".to_string()));
        }

        let design = x.with_intercept_column();
        let design_t = design.transpose();
        let xtx = design_t.matmul(&design)?;
        let xtx_inv = xtx.inverse()?;
        let xty = design_t.multiply_vector(y)?;
        let coefficients = xtx_inv.multiply_vector(&xty)?;

        log::debug!(
            "multiple linear regression on {}x{} design: coefficients={}",
            design.rows(),
            design.cols(),
            coefficients
        );

        Ok(Self {
            fitted: Fitted::Multiple { coefficients },
        })
    }

    pub fn is_simple(&self) -> bool {
        matches!(self.fitted, Fitted::Simple { .. })
    }

    pub fn intercept(&self) -> f64 {
        match &self.fitted {
            Fitted::Simple { intercept, .. } => *intercept,
            Fitted::Multiple { coefficients } => coefficients[0],
        }
    }

    pub fn slope(&self) -> Result<f64> {
        match &self.fitted {
            Fitted::Simple { slope, .. } => Ok(*slope),
            Fitted::Multiple { .. } => Err(MlError::InvalidOperation(
                "slope is only defined for simple linear regression".to_string(),
            )),
        }
    }

    /// Intercept first, then one coefficient per feature.
    pub fn coefficients(&self) -> Vector {
        match &self.fitted {
            Fitted::Simple { intercept, slope } => Vector::from(vec![*intercept, *slope]),
            Fitted::Multiple { coefficients } => coefficients.clone(),
        }
    }

    pub fn predict(&self, x: f64) -> Result<f64> {
        match &self.fitted {
            Fitted::Simple { intercept, slope } => Ok(intercept + slope * x),
            Fitted::Multiple { .. } => Err(MlError::InvalidOperation(
                "use vector predict for multiple linear regression".to_string(),
            )),
        }
    }

    pub fn predict_vector(&self, x: &Vector) -> Result<f64> {
        let coefficients = match &self.fitted {
            Fitted::Multiple { coefficients } => coefficients,
            Fitted::Simple { .. } => {
                return Err(MlError::InvalidOperation(
                    "use scalar predict for simple linear regression".to_string(),
                ));
            }
        };

        if x.len() != coefficients.len() - 1 {
            return Err(MlError::DimensionMismatch(format!(
                "feature vector has {} values, model expects {}",
                x.len(),
                coefficients.len() - 1
            )));
        }

        let mut prediction = coefficients[0];
        for (i, &value) in x.iter().enumerate() {
            prediction += coefficients[i + 1] * value;
        }
        Ok(prediction)
    }

    /// Predicts every row of `x`. A simple model needs exactly one column.
    pub fn predict_matrix(&self, x: &Matrix) -> Result<Vector> {
        if self.is_simple() && x.cols() != 1 {
            return Err(MlError::DimensionMismatch(format!(
                "simple linear regression expects 1 column, got {}",
                x.cols()
            )));
        }

        let mut predictions = Vector::zeros(x.rows());
        for i in 0..x.rows() {
            let row = x.row(i)?;
            predictions[i] = if self.is_simple() {
                self.predict(row[0])?
            } else {
                self.predict_vector(&row)?
            };
        }
        Ok(predictions)
    }

    /// Coefficient of determination on `(x, y)`.
    pub fn score(&self, x: &Matrix, y: &Vector) -> Result<f64> {
        let y_pred = self.predict_matrix(x)?;
        crate::metrics::r2_score(y, &y_pred)
    }
}
