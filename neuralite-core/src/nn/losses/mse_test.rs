use super::*;
use approx::assert_relative_eq;

#[test]
fn test_mse_zero_for_identical() -> Result<(), NeuraliteError> {
    assert_eq!(mse(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0])?, 0.0);
    Ok(())
}

#[test]
fn test_mse_known_values() -> Result<(), NeuraliteError> {
    assert_relative_eq!(mse(&[0.0, 0.0], &[1.0, 1.0])?, 1.0);
    assert_relative_eq!(mse(&[1.0, 0.0, 0.0, 1.0], &[0.5, 0.5, 0.5, 0.5])?, 0.25);
    // Works for f32 as well.
    assert_relative_eq!(mse(&[2.0f32], &[0.0f32])?, 4.0f32);
    Ok(())
}

#[test]
fn test_mse_prime_values() -> Result<(), NeuraliteError> {
    let grad = mse_prime(&[1.0, 0.0], &[0.5, 0.5])?;
    assert_eq!(grad.len(), 2);
    assert_relative_eq!(grad[0], -0.5);
    assert_relative_eq!(grad[1], 0.5);
    Ok(())
}

#[test]
fn test_mse_prime_matches_finite_difference() -> Result<(), NeuraliteError> {
    let y_true = [0.3, -1.2, 2.0];
    let y_pred = [0.1, -1.0, 2.5];
    let analytic = mse_prime(&y_true, &y_pred)?;
    let h = 1e-6;
    for i in 0..y_pred.len() {
        let mut plus = y_pred;
        let mut minus = y_pred;
        plus[i] += h;
        minus[i] -= h;
        let numeric = (mse(&y_true, &plus)? - mse(&y_true, &minus)?) / (2.0 * h);
        assert_relative_eq!(analytic[i], numeric, epsilon = 1e-6);
    }
    Ok(())
}

#[test]
fn test_mse_length_errors() {
    assert!(matches!(
        mse(&[1.0, 2.0], &[1.0]),
        Err(NeuraliteError::DimensionMismatch { expected: 2, actual: 1, .. })
    ));
    assert!(matches!(
        mse_prime::<f64>(&[], &[]),
        Err(NeuraliteError::DimensionMismatch { .. })
    ));
}
