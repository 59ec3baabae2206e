// neuralite-core/src/ops/arithmetic/sub.rs

use crate::error::NeuraliteError;
use crate::ops::apply_binary_op;
use crate::tensor::Tensor;

/// Element-wise subtraction `a - b` of two tensors of identical variant and shape.
pub fn sub_op(a: &Tensor, b: &Tensor) -> Result<Tensor, NeuraliteError> {
    apply_binary_op(a, b, |x, y| x - y, "sub_op")
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
