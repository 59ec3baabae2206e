// src/nn/losses/mod.rs

use std::fmt;

use crate::error::NeuraliteError;

pub mod bce;
pub mod mse;

pub use bce::{binary_cross_entropy, binary_cross_entropy_prime};
pub use mse::{mse, mse_prime};

/// Signature of an aggregate loss `(y_true, y_pred) -> error`.
pub type LossFn = fn(&[f64], &[f64]) -> Result<f64, NeuraliteError>;

/// Signature of a loss gradient with respect to `y_pred`.
pub type LossDerivativeFn = fn(&[f64], &[f64]) -> Result<Vec<f64>, NeuraliteError>;

/// A loss paired with its analytic derivative.
#[derive(Clone, Copy)]
pub struct LossFunction {
    name: &'static str,
    func: LossFn,
    derivative: LossDerivativeFn,
}

impl LossFunction {
    /// Mean squared error.
    pub const MSE: LossFunction = LossFunction {
        name: "mse",
        func: mse::<f64>,
        derivative: mse_prime::<f64>,
    };

    /// Binary cross-entropy. Predictions must lie in `(0, 1)`.
    pub const BINARY_CROSS_ENTROPY: LossFunction = LossFunction {
        name: "binary_cross_entropy",
        func: binary_cross_entropy::<f64>,
        derivative: binary_cross_entropy_prime::<f64>,
    };

    pub fn new(name: &'static str, func: LossFn, derivative: LossDerivativeFn) -> Self {
        LossFunction {
            name,
            func,
            derivative,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Aggregate error of `y_pred` against `y_true`.
    pub fn loss(&self, y_true: &[f64], y_pred: &[f64]) -> Result<f64, NeuraliteError> {
        (self.func)(y_true, y_pred)
    }

    /// Gradient of the loss with respect to each element of `y_pred`.
    pub fn gradient(&self, y_true: &[f64], y_pred: &[f64]) -> Result<Vec<f64>, NeuraliteError> {
        (self.derivative)(y_true, y_pred)
    }
}

impl fmt::Debug for LossFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LossFunction").field("name", &self.name).finish()
    }
}

impl PartialEq for LossFunction {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

/// Shared precondition of every loss: equal, non-zero lengths.
pub(crate) fn check_pair<F>(y_true: &[F], y_pred: &[F], operation: &str) -> Result<(), NeuraliteError> {
    if y_true.len() != y_pred.len() {
        return Err(NeuraliteError::DimensionMismatch {
            expected: y_true.len(),
            actual: y_pred.len(),
            operation: operation.to_string(),
        });
    }
    if y_true.is_empty() {
        return Err(NeuraliteError::DimensionMismatch {
            expected: 1,
            actual: 0,
            operation: format!("{} (empty input)", operation),
        });
    }
    Ok(())
}
