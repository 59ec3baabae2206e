//! Labeled datasets, index samplers and train/test splits for `neuralite-core`.
//!
//! The core network trains on the rows of a features matrix in row order; this
//! crate decides what that order is.

pub mod datasets;
pub mod samplers;
pub mod split;

pub use datasets::{Dataset, LabeledDataset};
pub use samplers::{RandomSampler, Sampler, SequentialSampler};
pub use split::train_test_split;
