// neuralite-data/src/samplers/traits.rs

use std::fmt::Debug;

/// Decides the order in which the samples of a dataset are visited.
pub trait Sampler: Debug + Send + Sync {
    /// Returns an iterator over sample indices for a dataset of `dataset_len`
    /// samples. Every index is below `dataset_len`.
    fn iter(&self, dataset_len: usize) -> Box<dyn Iterator<Item = usize> + Send + Sync>;

    /// Number of indices [`iter`](Sampler::iter) yields for `dataset_len`.
    fn len(&self, dataset_len: usize) -> usize;
}
