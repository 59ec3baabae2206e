//! # Tensor Operations Module (`ops`)
//!
//! Dynamically typed entry points over [`Tensor`]. Each operation is a plain
//! function named `xxx_op` that checks the variant and shape of its arguments and
//! then delegates to the typed kernels on [`Vector`](crate::tensor::Vector) and
//! [`Matrix`](crate::tensor::Matrix).
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: element-wise add/sub/mul, scalar multiply and the
//!   polymorphic product `mul_op`.
//! - [`linalg`]: dot product, matrix-vector and matrix-matrix products, transpose.
//! - [`map`]: element-wise application of a scalar function.
//!
//! Mixed variants (e.g. a vector added to a matrix) are a
//! [`NeuraliteError::TypeMismatch`]; there is no broadcasting.

use crate::error::NeuraliteError;
use crate::tensor::Tensor;

pub mod arithmetic;
pub mod linalg;
pub mod map;

pub use arithmetic::{add_op, mul_elementwise_op, mul_op, scalar_mul_op, sub_op};
pub use linalg::{dot_op, matmul_op, matvec_op, transpose_op};
pub use map::map_op;

/// Applies a binary element-wise operation to two tensors of the same variant
/// and shape.
///
/// # Arguments
/// * `a`, `b`: The operands.
/// * `op`: Scalar kernel `Fn(f64, f64) -> f64`.
/// * `op_name`: Name of the operation for error messages.
pub(crate) fn apply_binary_op<F>(
    a: &Tensor,
    b: &Tensor,
    op: F,
    op_name: &str,
) -> Result<Tensor, NeuraliteError>
where
    F: Fn(f64, f64) -> f64,
{
    match (a, b) {
        (Tensor::Scalar(x), Tensor::Scalar(y)) => Ok(Tensor::Scalar(op(*x, *y))),
        (Tensor::Vector(x), Tensor::Vector(y)) => Ok(Tensor::Vector(x.zip_with(y, op_name, op)?)),
        (Tensor::Matrix(x), Tensor::Matrix(y)) => Ok(Tensor::Matrix(x.zip_with(y, op_name, op)?)),
        _ => Err(NeuraliteError::TypeMismatch {
            expected: a.kind(),
            actual: b.kind(),
            operation: op_name.to_string(),
        }),
    }
}
