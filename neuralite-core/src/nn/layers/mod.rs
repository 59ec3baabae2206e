// src/nn/layers/mod.rs

pub mod dense;

pub use dense::Dense;

use crate::error::NeuraliteError;
use crate::nn::module::Layer;
use crate::tensor::Vector;

/// The closed set of layer variants a [`Network`](crate::nn::Network) can hold.
#[derive(Debug, Clone, PartialEq)]
pub enum LayerKind {
    Dense(Dense),
}

impl LayerKind {
    pub fn as_dense(&self) -> Option<&Dense> {
        match self {
            LayerKind::Dense(dense) => Some(dense),
        }
    }

    pub fn as_dense_mut(&mut self) -> Option<&mut Dense> {
        match self {
            LayerKind::Dense(dense) => Some(dense),
        }
    }
}

impl From<Dense> for LayerKind {
    fn from(dense: Dense) -> Self {
        LayerKind::Dense(dense)
    }
}

impl Layer for LayerKind {
    fn forward(&mut self, input: &Vector) -> Result<Vector, NeuraliteError> {
        match self {
            LayerKind::Dense(dense) => dense.forward(input),
        }
    }

    fn backward(
        &mut self,
        output_gradient: &Vector,
        learning_rate: f64,
    ) -> Result<Vector, NeuraliteError> {
        match self {
            LayerKind::Dense(dense) => dense.backward(output_gradient, learning_rate),
        }
    }

    fn input_size(&self) -> usize {
        match self {
            LayerKind::Dense(dense) => dense.input_size(),
        }
    }

    fn output_size(&self) -> usize {
        match self {
            LayerKind::Dense(dense) => dense.output_size(),
        }
    }

    fn name(&self) -> &str {
        match self {
            LayerKind::Dense(dense) => Layer::name(dense),
        }
    }

    fn parameter_count(&self) -> usize {
        match self {
            LayerKind::Dense(dense) => dense.parameter_count(),
        }
    }
}
