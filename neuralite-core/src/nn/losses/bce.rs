// neuralite-core/src/nn/losses/bce.rs

use num_traits::Float;

use crate::error::NeuraliteError;
use crate::nn::losses::check_pair;

/// Rejects predictions outside the open interval `(0, 1)`, where the
/// logarithms and quotients of the cross-entropy are undefined.
fn check_probabilities<F: Float>(y_pred: &[F], operation: &str) -> Result<(), NeuraliteError> {
    for (index, &p) in y_pred.iter().enumerate() {
        if !(p > F::zero() && p < F::one()) {
            return Err(NeuraliteError::NumericDomain {
                operation: operation.to_string(),
                index,
                value: p.to_f64().unwrap_or(f64::NAN),
            });
        }
    }
    Ok(())
}

/// Binary cross-entropy `(1/n) * sum [-t ln p - (1 - t) ln(1 - p)]`.
///
/// # Errors
/// * [`NeuraliteError::DimensionMismatch`] on unequal or empty inputs.
/// * [`NeuraliteError::NumericDomain`] if a prediction is not in `(0, 1)`.
pub fn binary_cross_entropy<F: Float>(y_true: &[F], y_pred: &[F]) -> Result<F, NeuraliteError> {
    check_pair(y_true, y_pred, "binary_cross_entropy")?;
    check_probabilities(y_pred, "binary_cross_entropy")?;
    let n = F::from(y_true.len()).unwrap_or_else(F::one);
    let sum = y_true.iter().zip(y_pred).fold(F::zero(), |acc, (&t, &p)| {
        acc - t * p.ln() - (F::one() - t) * (F::one() - p).ln()
    });
    Ok(sum / n)
}

/// Gradient of [`binary_cross_entropy`]: `((1 - t) / (1 - p) - t / p) / n`.
pub fn binary_cross_entropy_prime<F: Float>(
    y_true: &[F],
    y_pred: &[F],
) -> Result<Vec<F>, NeuraliteError> {
    check_pair(y_true, y_pred, "binary_cross_entropy_prime")?;
    check_probabilities(y_pred, "binary_cross_entropy_prime")?;
    let n = F::from(y_true.len()).unwrap_or_else(F::one);
    Ok(y_true
        .iter()
        .zip(y_pred)
        .map(|(&t, &p)| ((F::one() - t) / (F::one() - p) - t / p) / n)
        .collect())
}

#[cfg(test)]
#[path = "bce_test.rs"]
mod tests;
