// neuralite-data/src/split.rs

use neuralite_core::NeuraliteError;

use crate::datasets::{Dataset, LabeledDataset};

/// Splits `dataset` into `(train, test)` without shuffling: the first
/// `round(train_fraction * len)` samples go to `train`, the rest to `test`.
/// Reorder the dataset first (see [`LabeledDataset::reordered`]) for a random
/// split.
///
/// # Errors
/// `NeuraliteError::InvalidConfiguration` if `train_fraction` is not in `[0, 1]`.
pub fn train_test_split(
    dataset: &LabeledDataset,
    train_fraction: f64,
) -> Result<(LabeledDataset, LabeledDataset), NeuraliteError> {
    if !(0.0..=1.0).contains(&train_fraction) {
        return Err(NeuraliteError::InvalidConfiguration(format!(
            "train fraction must be within [0, 1], got {}",
            train_fraction
        )));
    }
    let len = dataset.len();
    let train_len = ((len as f64) * train_fraction).round() as usize;
    let train_len = train_len.min(len);

    let train_indices: Vec<usize> = (0..train_len).collect();
    let test_indices: Vec<usize> = (train_len..len).collect();
    Ok((dataset.select(&train_indices)?, dataset.select(&test_indices)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use neuralite_core::Matrix;

    fn numbered(n: usize) -> Result<LabeledDataset, NeuraliteError> {
        let features = Matrix::from_vecs((0..n).map(|i| vec![i as f64]).collect())?;
        let labels = Matrix::from_vecs((0..n).map(|i| vec![(i * 10) as f64]).collect())?;
        LabeledDataset::new(features, labels)
    }

    #[test]
    fn test_split_sizes_and_order() -> Result<(), NeuraliteError> {
        let dataset = numbered(10)?;
        let (train, test) = train_test_split(&dataset, 0.8)?;
        assert_eq!(train.len(), 8);
        assert_eq!(test.len(), 2);
        assert_eq!(train.get(0)?, dataset.get(0)?);
        assert_eq!(test.get(0)?, dataset.get(8)?);
        assert_eq!(test.get(1)?.1[0], 90.0);
        Ok(())
    }

    #[test]
    fn test_split_edges() -> Result<(), NeuraliteError> {
        let dataset = numbered(3)?;
        let (train, test) = dataset.split(0.0)?;
        assert!(train.is_empty());
        assert_eq!(test.len(), 3);
        assert_eq!(train.feature_size(), 1);

        let (train, test) = dataset.split(1.0)?;
        assert_eq!(train.len(), 3);
        assert!(test.is_empty());

        let (train, _) = dataset.split(0.5)?;
        assert_eq!(train.len(), 2);
        Ok(())
    }

    #[test]
    fn test_split_rejects_bad_fraction() -> Result<(), NeuraliteError> {
        let dataset = numbered(3)?;
        for fraction in [-0.1, 1.5, f64::NAN] {
            assert!(matches!(
                train_test_split(&dataset, fraction),
                Err(NeuraliteError::InvalidConfiguration(_))
            ));
        }
        Ok(())
    }
}
