// src/nn/init.rs

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::NeuraliteError;
use crate::tensor::create::{rand_matrix, rand_vector, randn_matrix, randn_vector};
use crate::tensor::{Matrix, Vector};

/// Selects how a [`Dense`](crate::nn::layers::Dense) layer draws its initial
/// weights and bias.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DenseInit {
    /// Independent samples from `U[low, high)`.
    Uniform { low: f64, high: f64 },
    /// Independent samples from `N(0, 1)`.
    StandardNormal,
}

impl Default for DenseInit {
    fn default() -> Self {
        DenseInit::Uniform {
            low: -1.0,
            high: 1.0,
        }
    }
}

impl DenseInit {
    /// Draws a `(output_size, input_size)` weight matrix and an `output_size`
    /// bias vector, weights first.
    ///
    /// # Errors
    /// [`NeuraliteError::InvalidConfiguration`] for an empty or non-finite
    /// uniform range.
    pub fn initialize<R: Rng + ?Sized>(
        &self,
        input_size: usize,
        output_size: usize,
        rng: &mut R,
    ) -> Result<(Matrix, Vector), NeuraliteError> {
        debug!(
            "Initializing dense parameters ({} x {}) with {:?}",
            output_size, input_size, self
        );
        match *self {
            DenseInit::Uniform { low, high } => {
                let weights = rand_matrix(output_size, input_size, low, high, rng)?;
                let bias = rand_vector(output_size, low, high, rng)?;
                Ok((weights, bias))
            }
            DenseInit::StandardNormal => {
                let weights = randn_matrix(output_size, input_size, rng);
                let bias = randn_vector(output_size, rng);
                Ok((weights, bias))
            }
        }
    }
}

/// Fills `matrix` with `value` in place.
pub fn fill_matrix_(matrix: &mut Matrix, value: f64) {
    for row in matrix.rows_mut() {
        row.as_mut_slice().fill(value);
    }
}

/// Fills `vector` with `value` in place.
pub fn fill_vector_(vector: &mut Vector, value: f64) {
    vector.as_mut_slice().fill(value);
}

#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
