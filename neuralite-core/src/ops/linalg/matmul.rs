// Matrix products.

use crate::error::NeuraliteError;
use crate::tensor::Tensor;

/// Matrix-vector product `M * v`.
///
/// Returns a vector of length `rows(M)` whose element `i` is `dot(row_i(M), v)`.
///
/// # Errors
/// * [`NeuraliteError::TypeMismatch`] if `m` is not a matrix or `v` not a vector.
/// * [`NeuraliteError::DimensionMismatch`] if `cols(M) != len(v)`.
pub fn matvec_op(m: &Tensor, v: &Tensor) -> Result<Tensor, NeuraliteError> {
    let m = m.require_matrix("matvec_op")?;
    let v = v.require_vector("matvec_op")?;
    Ok(Tensor::Vector(m.mul_vector(v)?))
}

/// Performs matrix multiplication C = A @ B.
/// A: [M, K], B: [K, N] -> C: [M, N]
///
/// # Errors
/// * [`NeuraliteError::TypeMismatch`] if either operand is not a matrix.
/// * [`NeuraliteError::ShapeMismatch`] if `cols(A) != rows(B)`.
pub fn matmul_op(a: &Tensor, b: &Tensor) -> Result<Tensor, NeuraliteError> {
    let a = a.require_matrix("matmul_op")?;
    let b = b.require_matrix("matmul_op")?;
    Ok(Tensor::Matrix(a.mul_matrix(b)?))
}

#[cfg(test)]
#[path = "matmul_test.rs"]
mod tests;
