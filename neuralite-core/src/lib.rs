//! Dense feed-forward neural networks trained with per-sample gradient descent.
//!
//! - [`tensor`]: `Vector`, `Matrix` and the tagged `Tensor` container.
//! - [`ops`]: `Tensor`-level algebra entry points.
//! - [`nn`]: activations, losses, the `Dense` layer and the `Network`.

pub mod error;
pub mod nn;
pub mod ops;
pub mod tensor;
pub mod utils;

pub use error::NeuraliteError;
pub use nn::{Activation, Dense, LayerKind, LayerRecord, LossFunction, Network, TrainConfig};
pub use tensor::{Matrix, Tensor, TensorKind, Vector};

// Re-export traits required by public functions
pub use num_traits;
