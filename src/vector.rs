//! Element-wise helpers on [`Vector`] with explicit size checks.
//!
//! ndarray's arithmetic operators panic on shape mismatch; these return
//! [`MlError`] instead so estimators can propagate failures with `?`.

use crate::error::{MlError, Result};
use crate::Vector;

fn check_same_len(a: &Vector, b: &Vector) -> Result<()> {
    if a.len() != b.len() {
        return Err(MlError::DimensionMismatch(format!(
            "vectors must be of the same size, got {} and {}",
            a.len(),
            b.len()
        )));
    }
    Ok(())
}

pub fn add(a: &Vector, b: &Vector) -> Result<Vector> {
    check_same_len(a, b)?;
    Ok(a + b)
}

pub fn subtract(a: &Vector, b: &Vector) -> Result<Vector> {
    check_same_len(a, b)?;
    Ok(a - b)
}

pub fn scale(v: &Vector, factor: f64) -> Result<Vector> {
    if v.is_empty() {
        return Err(MlError::EmptyInput("cannot scale an empty vector".to_string()));
    }
    Ok(v.mapv(|x| x * factor))
}

pub fn divide(v: &Vector, divisor: f64) -> Result<Vector> {
    if v.is_empty() {
        return Err(MlError::EmptyInput("cannot divide an empty vector".to_string()));
    }
    if divisor == 0.0 {
        return Err(MlError::DivisionByZero);
    }
    Ok(v.mapv(|x| x / divisor))
}

pub fn mean(v: &Vector) -> Result<f64> {
    v.mean()
        .ok_or_else(|| MlError::EmptyInput("cannot take the mean of an empty vector".to_string()))
}

/// Euclidean distance summed over every coordinate.
pub fn euclidean_distance(a: &Vector, b: &Vector) -> Result<f64> {
    check_same_len(a, b)?;
    Ok(a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_add_and_subtract() {
        let a = array![1.0, 2.0, 3.0];
        let b = array![0.5, 0.5, 1.0];

        assert_eq!(add(&a, &b).unwrap(), array![1.5, 2.5, 4.0]);
        assert_eq!(subtract(&a, &b).unwrap(), array![0.5, 1.5, 2.0]);
    }

    #[test]
    fn test_size_mismatch() {
        let a = array![1.0, 2.0];
        let b = array![1.0, 2.0, 3.0];

        assert!(matches!(add(&a, &b), Err(MlError::DimensionMismatch(_))));
        assert!(matches!(subtract(&a, &b), Err(MlError::DimensionMismatch(_))));
        assert!(matches!(euclidean_distance(&a, &b), Err(MlError::DimensionMismatch(_))));
    }

    #[test]
    fn test_scale_and_divide() {
        let v = array![2.0, -4.0];

        assert_eq!(scale(&v, 0.5).unwrap(), array![1.0, -2.0]);
        assert_eq!(divide(&v, 2.0).unwrap(), array![1.0, -2.0]);
        assert!(matches!(divide(&v, 0.0), Err(MlError::DivisionByZero)));
    }

    #[test]
    fn test_empty_input() {
        let empty = Vector::zeros(0);

        assert!(matches!(scale(&empty, 2.0), Err(MlError::EmptyInput(_))));
        assert!(matches!(divide(&empty, 2.0), Err(MlError::EmptyInput(_))));
        assert!(matches!(mean(&empty), Err(MlError::EmptyInput(_))));
    }

    #[test]
    fn test_distance_uses_every_dimension() {
        let a = array![0.0, 0.0, 0.0];
        let b = array![0.0, 0.0, 2.0];

        let d = euclidean_distance(&a, &b).unwrap();
        assert!((d - 2.0).abs() < 1e-12);
    }
}
