use super::*;
use approx::{assert_abs_diff_eq, assert_relative_eq};

#[test]
fn test_bce_known_value() -> Result<(), NeuraliteError> {
    // -ln(0.5) for each sample.
    let loss = binary_cross_entropy(&[1.0, 0.0], &[0.5, 0.5])?;
    assert_relative_eq!(loss, std::f64::consts::LN_2, epsilon = 1e-12);

    let loss = binary_cross_entropy(&[1.0], &[0.9])?;
    assert_relative_eq!(loss, -(0.9f64.ln()), epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_bce_small_for_confident_correct_predictions() -> Result<(), NeuraliteError> {
    let loss = binary_cross_entropy(&[1.0, 0.0, 1.0], &[0.999, 0.001, 0.999])?;
    assert!(loss < 0.01);
    Ok(())
}

#[test]
fn test_bce_prime_values() -> Result<(), NeuraliteError> {
    let grad = binary_cross_entropy_prime(&[1.0, 0.0], &[0.8, 0.2])?;
    // ((1-1)/(0.2) - 1/0.8)/2 and ((1-0)/(0.8) - 0)/2
    assert_abs_diff_eq!(grad[0], -0.625, epsilon = 1e-12);
    assert_abs_diff_eq!(grad[1], 0.625, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_bce_prime_matches_finite_difference() -> Result<(), NeuraliteError> {
    let y_true = [1.0, 0.0, 0.3];
    let y_pred = [0.7, 0.4, 0.55];
    let analytic = binary_cross_entropy_prime(&y_true, &y_pred)?;
    let h = 1e-7;
    for i in 0..y_pred.len() {
        let mut plus = y_pred;
        let mut minus = y_pred;
        plus[i] += h;
        minus[i] -= h;
        let numeric = (binary_cross_entropy(&y_true, &plus)?
            - binary_cross_entropy(&y_true, &minus)?)
            / (2.0 * h);
        assert_relative_eq!(analytic[i], numeric, epsilon = 1e-6);
    }
    Ok(())
}

#[test]
fn test_bce_rejects_out_of_domain_predictions() {
    for bad in [0.0, 1.0, -0.2, 1.5, f64::NAN] {
        let result = binary_cross_entropy(&[1.0, 0.0], &[0.5, bad]);
        assert!(
            matches!(result, Err(NeuraliteError::NumericDomain { index: 1, .. })),
            "prediction {} should be rejected",
            bad
        );
    }
    assert!(matches!(
        binary_cross_entropy_prime(&[1.0], &[1.0]),
        Err(NeuraliteError::NumericDomain { index: 0, .. })
    ));
}

#[test]
fn test_bce_length_errors() {
    assert!(matches!(
        binary_cross_entropy(&[1.0], &[0.5, 0.5]),
        Err(NeuraliteError::DimensionMismatch { .. })
    ));
    assert!(matches!(
        binary_cross_entropy::<f64>(&[], &[]),
        Err(NeuraliteError::DimensionMismatch { .. })
    ));
}
