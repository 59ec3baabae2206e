use crate::error::NeuraliteError;
use crate::tensor::{Tensor, TensorKind};

/// Transposes a matrix (rows and columns swapped).
///
/// A vector is treated as a row and becomes a `(len, 1)` column matrix.
/// A scalar has no axes to swap and is a type violation.
pub fn transpose_op(t: &Tensor) -> Result<Tensor, NeuraliteError> {
    match t {
        Tensor::Matrix(m) => Ok(Tensor::Matrix(m.transpose())),
        Tensor::Vector(v) => Ok(Tensor::Matrix(v.transpose())),
        Tensor::Scalar(_) => Err(NeuraliteError::TypeMismatch {
            expected: TensorKind::Matrix,
            actual: TensorKind::Scalar,
            operation: "transpose_op".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tensor::{Matrix, Vector};

    #[test]
    fn test_transpose_row_to_column() -> Result<(), NeuraliteError> {
        let row = Tensor::from(Matrix::from_vecs(vec![vec![1.0, 2.0, 3.0]])?);
        let expected = Tensor::from(Matrix::from_vecs(vec![vec![1.0], vec![2.0], vec![3.0]])?);
        assert_eq!(transpose_op(&row)?, expected);
        Ok(())
    }

    #[test]
    fn test_transpose_is_involutive() -> Result<(), NeuraliteError> {
        let m = Tensor::from(Matrix::from_vecs(vec![
            vec![1.0, 2.0, 3.0],
            vec![4.0, 5.0, 6.0],
        ])?);
        assert_eq!(transpose_op(&transpose_op(&m)?)?, m);
        Ok(())
    }

    #[test]
    fn test_transpose_vector() -> Result<(), NeuraliteError> {
        let v = Tensor::from(Vector::from([1.0, 2.0]));
        assert_eq!(transpose_op(&v)?.shape(), vec![2, 1]);
        Ok(())
    }

    #[test]
    fn test_transpose_scalar_is_type_error() {
        assert!(matches!(
            transpose_op(&Tensor::Scalar(1.0)),
            Err(NeuraliteError::TypeMismatch { .. })
        ));
    }
}
