use crate::error::NeuraliteError;
use crate::tensor::Tensor;

/// Dot product of two vectors of equal length.
///
/// Accumulation is a strict left-to-right reduction starting at `0.0`, so the
/// result rounds exactly like a sequential sum.
///
/// # Errors
/// * [`NeuraliteError::TypeMismatch`] if either operand is not a vector.
/// * [`NeuraliteError::DimensionMismatch`] if the lengths differ.
pub fn dot_op(u: &Tensor, v: &Tensor) -> Result<f64, NeuraliteError> {
    let u = u.require_vector("dot_op")?;
    let v = v.require_vector("dot_op")?;
    u.dot(v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tensor::{Matrix, TensorKind, Vector};

    #[test]
    fn test_dot_ok() -> Result<(), NeuraliteError> {
        let u = Tensor::from(Vector::from([1.0, 2.0, 3.0]));
        let v = Tensor::from(Vector::from([4.0, 5.0, 6.0]));
        assert_eq!(dot_op(&u, &v)?, 32.0);
        Ok(())
    }

    #[test]
    fn test_dot_rejects_non_vectors() {
        let u = Tensor::from(Vector::from([1.0]));
        let err = dot_op(&u, &Tensor::Scalar(1.0)).unwrap_err();
        assert!(matches!(
            err,
            NeuraliteError::TypeMismatch { expected: TensorKind::Vector, actual: TensorKind::Scalar, .. }
        ));
        assert!(dot_op(&Tensor::from(Matrix::zeros(1, 1)), &u).is_err());
    }

    #[test]
    fn test_dot_length_mismatch() {
        let u = Tensor::from(Vector::from([1.0, 2.0]));
        let v = Tensor::from(Vector::from([1.0, 2.0, 3.0]));
        assert!(matches!(dot_op(&u, &v), Err(NeuraliteError::DimensionMismatch { .. })));
    }
}
