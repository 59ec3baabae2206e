// neuralite-data/src/datasets/traits.rs

use neuralite_core::NeuraliteError;

/// Indexed access to a collection of samples.
pub trait Dataset {
    /// The type of a single sample, e.g. a `(features, label)` pair.
    type Item;

    /// Returns the sample at `index`.
    ///
    /// # Errors
    /// Returns `NeuraliteError::IndexOutOfBounds` if `index >= len()`.
    fn get(&self, index: usize) -> Result<Self::Item, NeuraliteError>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
