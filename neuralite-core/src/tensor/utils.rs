use crate::error::NeuraliteError;

/// Fails with [`NeuraliteError::DimensionMismatch`] unless both lengths agree.
pub(crate) fn ensure_len(
    expected: usize,
    actual: usize,
    operation: &str,
) -> Result<(), NeuraliteError> {
    if expected != actual {
        return Err(NeuraliteError::DimensionMismatch {
            expected,
            actual,
            operation: operation.to_string(),
        });
    }
    Ok(())
}

/// Fails with [`NeuraliteError::ShapeMismatch`] unless both `(rows, cols)`
/// shapes agree.
pub(crate) fn ensure_shape(
    expected: (usize, usize),
    actual: (usize, usize),
    operation: &str,
) -> Result<(), NeuraliteError> {
    if expected != actual {
        return Err(NeuraliteError::ShapeMismatch {
            expected: vec![expected.0, expected.1],
            actual: vec![actual.0, actual.1],
            operation: operation.to_string(),
        });
    }
    Ok(())
}
