//! Error type shared by every estimator and the matrix core.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MlError {
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),
    #[error("invalid shape: {0}")]
    InvalidShape(String),
    #[error("matrix is singular: zero pivot at row {row}")]
    SingularMatrix { row: usize },
    #[error("degenerate input: {0}")]
    DegenerateInput(String),
    #[error("empty input: {0}")]
    EmptyInput(String),
    #[error("index ({row}, {col}) out of range for {rows}x{cols} matrix")]
    IndexOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    #[error("invalid operation: {0}")]
    InvalidOperation(String),
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("division by zero")]
    DivisionByZero,
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("parse error: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, MlError>;
