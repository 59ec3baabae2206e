// neuralite-data/src/datasets/labeled_dataset.rs

use neuralite_core::{Matrix, NeuraliteError, Vector};

use super::traits::Dataset;
use crate::samplers::Sampler;

/// Samples stored as two matrices with one row per sample: the network inputs
/// in `features` and the expected outputs in `labels`.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledDataset {
    features: Matrix,
    labels: Matrix,
}

impl LabeledDataset {
    /// # Errors
    /// `NeuraliteError::DimensionMismatch` if the two matrices have different
    /// row counts.
    pub fn new(features: Matrix, labels: Matrix) -> Result<Self, NeuraliteError> {
        if features.row_count() != labels.row_count() {
            return Err(NeuraliteError::DimensionMismatch {
                expected: features.row_count(),
                actual: labels.row_count(),
                operation: "LabeledDataset::new".to_string(),
            });
        }
        Ok(LabeledDataset { features, labels })
    }

    pub fn features(&self) -> &Matrix {
        &self.features
    }

    pub fn labels(&self) -> &Matrix {
        &self.labels
    }

    pub fn feature_size(&self) -> usize {
        self.features.column_count()
    }

    pub fn label_size(&self) -> usize {
        self.labels.column_count()
    }

    /// Builds a new dataset from the samples at `indices`, in that order.
    /// Indices may repeat.
    pub fn select(&self, indices: &[usize]) -> Result<Self, NeuraliteError> {
        let features = pick_rows(&self.features, indices)?;
        let labels = pick_rows(&self.labels, indices)?;
        Ok(LabeledDataset { features, labels })
    }

    /// Reorders the samples in the order produced by `sampler`.
    pub fn reordered(&self, sampler: &dyn Sampler) -> Result<Self, NeuraliteError> {
        let indices: Vec<usize> = sampler.iter(self.len()).collect();
        self.select(&indices)
    }

    /// Splits into `(train, test)`; see [`train_test_split`](crate::split::train_test_split).
    pub fn split(&self, train_fraction: f64) -> Result<(Self, Self), NeuraliteError> {
        crate::split::train_test_split(self, train_fraction)
    }

    pub fn into_parts(self) -> (Matrix, Matrix) {
        (self.features, self.labels)
    }
}

fn pick_rows(matrix: &Matrix, indices: &[usize]) -> Result<Matrix, NeuraliteError> {
    if indices.is_empty() {
        return Ok(Matrix::zeros(0, matrix.column_count()));
    }
    let rows = indices
        .iter()
        .map(|&index| {
            matrix.row(index).cloned().ok_or(NeuraliteError::IndexOutOfBounds {
                index,
                len: matrix.row_count(),
            })
        })
        .collect::<Result<Vec<Vector>, NeuraliteError>>()?;
    Matrix::from_rows(rows)
}

impl Dataset for LabeledDataset {
    type Item = (Vector, Vector);

    fn get(&self, index: usize) -> Result<Self::Item, NeuraliteError> {
        let out_of_bounds = || NeuraliteError::IndexOutOfBounds {
            index,
            len: self.len(),
        };
        let features = self.features.row(index).ok_or_else(out_of_bounds)?;
        let label = self.labels.row(index).ok_or_else(out_of_bounds)?;
        Ok((features.clone(), label.clone()))
    }

    fn len(&self) -> usize {
        self.features.row_count()
    }
}

#[cfg(test)]
#[path = "labeled_dataset_test.rs"]
mod tests;
