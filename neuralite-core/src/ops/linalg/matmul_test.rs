#[cfg(test)]
mod tests {
    use crate::error::NeuraliteError;
    use crate::ops::linalg::matmul::{matmul_op, matvec_op};
    use crate::tensor::{Matrix, Tensor, TensorKind, Vector};

    fn mt(rows: Vec<Vec<f64>>) -> Tensor {
        Tensor::from(Matrix::from_vecs(rows).expect("rectangular test matrix"))
    }

    #[test]
    fn test_matmul_forward() -> Result<(), NeuraliteError> {
        let a = mt(vec![vec![3.0, -2.0], vec![5.0, -4.0]]);
        let b = mt(vec![vec![3.0, 4.0], vec![2.0, 5.0]]);
        assert_eq!(matmul_op(&a, &b)?, mt(vec![vec![5.0, 2.0], vec![7.0, 0.0]]));
        Ok(())
    }

    #[test]
    fn test_matmul_forward_non_square() -> Result<(), NeuraliteError> {
        let a = mt(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        let b = mt(vec![vec![7.0, 8.0], vec![9.0, 10.0], vec![11.0, 12.0]]);
        let output = matmul_op(&a, &b)?;
        assert_eq!(output.shape(), vec![2, 2]);
        assert_eq!(output, mt(vec![vec![58.0, 64.0], vec![139.0, 154.0]]));
        Ok(())
    }

    #[test]
    fn test_matmul_shape_mismatch_inner() {
        let a = mt(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        let b = mt(vec![vec![1.0, 2.0, 3.0]]);
        assert!(matches!(matmul_op(&a, &b), Err(NeuraliteError::ShapeMismatch { .. })));
    }

    #[test]
    fn test_matmul_requires_matrices() {
        let a = mt(vec![vec![1.0]]);
        let v = Tensor::from(Vector::from([1.0]));
        assert!(matches!(
            matmul_op(&a, &v),
            Err(NeuraliteError::TypeMismatch { expected: TensorKind::Matrix, actual: TensorKind::Vector, .. })
        ));
    }

    #[test]
    fn test_matvec_forward() -> Result<(), NeuraliteError> {
        let m = mt(vec![vec![0.2, 0.8], vec![0.5, 0.1]]);
        let v = Tensor::from(Vector::from([1.0, 2.0]));
        let out = matvec_op(&m, &v)?;
        let out = out.require_vector("test")?;
        assert_eq!(out.len(), 2);
        approx::assert_relative_eq!(out[0], 1.8, epsilon = 1e-12);
        approx::assert_relative_eq!(out[1], 0.7, epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn test_matvec_errors() {
        let m = mt(vec![vec![1.0, 2.0, 3.0]]);
        let short = Tensor::from(Vector::from([1.0, 2.0]));
        assert!(matches!(
            matvec_op(&m, &short),
            Err(NeuraliteError::DimensionMismatch { expected: 3, actual: 2, .. })
        ));
        assert!(matches!(matvec_op(&m, &m), Err(NeuraliteError::TypeMismatch { .. })));
        assert!(matches!(matvec_op(&short, &short), Err(NeuraliteError::TypeMismatch { .. })));
    }
}
