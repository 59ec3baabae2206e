use crate::error::NeuraliteError;
use crate::ops::arithmetic::add_op;
use crate::tensor::{Matrix, Tensor, TensorKind, Vector};

fn vt(data: &[f64]) -> Tensor {
    Tensor::from(Vector::from(data))
}

#[test]
fn test_add_vectors_ok() -> Result<(), NeuraliteError> {
    let result = add_op(&vt(&[1.0, 2.0, 3.0]), &vt(&[10.0, 20.0, 30.0]))?;
    assert_eq!(result, vt(&[11.0, 22.0, 33.0]));
    Ok(())
}

#[test]
fn test_add_matrices_ok() -> Result<(), NeuraliteError> {
    let a = Matrix::from_vecs(vec![vec![3.0, -2.0], vec![5.0, -4.0]])?;
    let b = Matrix::from_vecs(vec![vec![3.0, 4.0], vec![2.0, 5.0]])?;
    let result = add_op(&a.into(), &b.into())?;
    assert_eq!(result, Matrix::from_vecs(vec![vec![6.0, 2.0], vec![7.0, 1.0]])?.into());
    Ok(())
}

#[test]
fn test_add_scalars_ok() -> Result<(), NeuraliteError> {
    assert_eq!(add_op(&Tensor::Scalar(1.5), &Tensor::Scalar(2.0))?, Tensor::Scalar(3.5));
    Ok(())
}

#[test]
fn test_add_is_commutative() -> Result<(), NeuraliteError> {
    let a = vt(&[0.3, -1.25, 7.0]);
    let b = vt(&[2.0, 0.125, -7.5]);
    assert_eq!(add_op(&a, &b)?, add_op(&b, &a)?);
    Ok(())
}

#[test]
fn test_add_length_mismatch() {
    let result = add_op(&vt(&[1.0, 2.0]), &vt(&[1.0, 2.0, 3.0]));
    assert!(matches!(
        result,
        Err(NeuraliteError::DimensionMismatch { expected: 2, actual: 3, .. })
    ));
}

#[test]
fn test_add_matrix_shape_mismatch() {
    let a = Tensor::from(Matrix::zeros(2, 2));
    let b = Tensor::from(Matrix::zeros(2, 3));
    assert!(matches!(add_op(&a, &b), Err(NeuraliteError::ShapeMismatch { .. })));
}

#[test]
fn test_add_does_not_broadcast_across_variants() {
    let result = add_op(&vt(&[1.0, 2.0]), &Tensor::Scalar(1.0));
    assert_eq!(
        result,
        Err(NeuraliteError::TypeMismatch {
            expected: TensorKind::Vector,
            actual: TensorKind::Scalar,
            operation: "add_op".to_string(),
        })
    );
    let result = add_op(&Tensor::from(Matrix::zeros(1, 2)), &vt(&[1.0, 2.0]));
    assert!(matches!(result, Err(NeuraliteError::TypeMismatch { .. })));
}
