// neuralite-core/src/ops/arithmetic/mul.rs

use crate::error::NeuraliteError;
use crate::ops::apply_binary_op;
use crate::tensor::{Tensor, TensorKind};

/// Multiplies every element of `a` by `k`. Never fails.
pub fn scalar_mul_op(a: &Tensor, k: f64) -> Tensor {
    match a {
        Tensor::Scalar(x) => Tensor::Scalar(x * k),
        Tensor::Vector(v) => Tensor::Vector(v.scalar_multiply(k)),
        Tensor::Matrix(m) => Tensor::Matrix(m.scalar_multiply(k)),
    }
}

/// Element-wise (Hadamard) product of two tensors of identical variant and shape.
pub fn mul_elementwise_op(a: &Tensor, b: &Tensor) -> Result<Tensor, NeuraliteError> {
    apply_binary_op(a, b, |x, y| x * y, "mul_elementwise_op")
}

/// Polymorphic product, dispatching on the variants of both operands:
///
/// | `a`     | `b`     | result                          |
/// |---------|---------|---------------------------------|
/// | any     | scalar  | `a` scaled by `b`               |
/// | scalar  | any     | `b` scaled by `a`               |
/// | vector  | vector  | scalar dot product              |
/// | matrix  | vector  | matrix-vector product (vector)  |
/// | matrix  | matrix  | matrix-matrix product (matrix)  |
///
/// A vector on the left of a matrix is a type violation.
pub fn mul_op(a: &Tensor, b: &Tensor) -> Result<Tensor, NeuraliteError> {
    match (a, b) {
        (_, Tensor::Scalar(k)) => Ok(scalar_mul_op(a, *k)),
        (Tensor::Scalar(k), _) => Ok(scalar_mul_op(b, *k)),
        (Tensor::Vector(u), Tensor::Vector(v)) => Ok(Tensor::Scalar(u.dot(v)?)),
        (Tensor::Matrix(m), Tensor::Vector(v)) => Ok(Tensor::Vector(m.mul_vector(v)?)),
        (Tensor::Matrix(x), Tensor::Matrix(y)) => Ok(Tensor::Matrix(x.mul_matrix(y)?)),
        (Tensor::Vector(_), Tensor::Matrix(_)) => Err(NeuraliteError::TypeMismatch {
            expected: TensorKind::Vector,
            actual: TensorKind::Matrix,
            operation: "mul_op (vector * matrix)".to_string(),
        }),
    }
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
