use crate::tensor::TensorKind;
use thiserror::Error;

/// Custom error type for the Neuralite framework.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum NeuraliteError {
    #[error("Dimension mismatch: expected {expected}, got {actual} during operation {operation}")]
    DimensionMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Shape mismatch: expected {expected:?}, got {actual:?} during operation {operation}")]
    ShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
        operation: String,
    },

    #[error("Type mismatch in {operation}: expected {expected:?}, got {actual:?}")]
    TypeMismatch {
        expected: TensorKind,
        actual: TensorKind,
        operation: String,
    },

    #[error("{operation} called without a matching forward pass")]
    MissingForwardCache { operation: String },

    #[error("Value {value} at index {index} is outside the domain of {operation}")]
    NumericDomain {
        operation: String,
        index: usize,
        value: f64,
    },

    #[error("Index out of bounds: index {index} for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<std::io::Error> for NeuraliteError {
    fn from(err: std::io::Error) -> Self {
        NeuraliteError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for NeuraliteError {
    fn from(err: serde_json::Error) -> Self {
        NeuraliteError::Serialization(err.to_string())
    }
}
