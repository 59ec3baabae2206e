// neuralite-core/src/nn/losses/mse.rs

use num_traits::Float;

use crate::error::NeuraliteError;
use crate::nn::losses::check_pair;

/// Mean squared error `(1/n) * sum (y_true[i] - y_pred[i])^2`.
///
/// # Errors
/// [`NeuraliteError::DimensionMismatch`] if the slices differ in length or are
/// empty.
pub fn mse<F: Float>(y_true: &[F], y_pred: &[F]) -> Result<F, NeuraliteError> {
    check_pair(y_true, y_pred, "mse")?;
    let n = F::from(y_true.len()).unwrap_or_else(F::one);
    let sum = y_true
        .iter()
        .zip(y_pred)
        .fold(F::zero(), |acc, (&t, &p)| acc + (t - p) * (t - p));
    Ok(sum / n)
}

/// Gradient of [`mse`] with respect to `y_pred`: `2 * (y_pred[i] - y_true[i]) / n`.
pub fn mse_prime<F: Float>(y_true: &[F], y_pred: &[F]) -> Result<Vec<F>, NeuraliteError> {
    check_pair(y_true, y_pred, "mse_prime")?;
    let n = F::from(y_true.len()).unwrap_or_else(F::one);
    let two = F::one() + F::one();
    Ok(y_true
        .iter()
        .zip(y_pred)
        .map(|(&t, &p)| two * (p - t) / n)
        .collect())
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
