// neuralite-core/src/ops/arithmetic/add.rs

use crate::error::NeuraliteError;
use crate::ops::apply_binary_op;
use crate::tensor::Tensor;

/// Element-wise addition of two tensors of identical variant and shape.
///
/// # Errors
/// * [`NeuraliteError::TypeMismatch`] if the variants differ.
/// * [`NeuraliteError::DimensionMismatch`] / [`NeuraliteError::ShapeMismatch`]
///   if the shapes differ.
pub fn add_op(a: &Tensor, b: &Tensor) -> Result<Tensor, NeuraliteError> {
    apply_binary_op(a, b, |x, y| x + y, "add_op")
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
