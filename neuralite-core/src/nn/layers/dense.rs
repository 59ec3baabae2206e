// neuralite-core/src/nn/layers/dense.rs

use log::debug;
use rand::Rng;

use crate::error::NeuraliteError;
use crate::nn::init::DenseInit;
use crate::nn::module::Layer;
use crate::tensor::utils::{ensure_len, ensure_shape};
use crate::tensor::{Matrix, Tensor, Vector};

/// Fully-connected affine layer: `output = weights . input + bias`.
///
/// `weights` has shape `(output_size, input_size)` and `bias` has
/// `output_size` elements. The layer is the sole owner of its parameters; only
/// [`backward`](Dense::backward) and the shape-checked setters change them.
///
/// `forward` caches its input, and the next `backward` consumes that cache.
/// Calling `backward` twice for one forward pass is an error.
#[derive(Debug, Clone, PartialEq)]
pub struct Dense {
    weights: Matrix,
    bias: Vector,
    cached_input: Option<Vector>,
}

impl Dense {
    /// Creates a layer with parameters drawn from `U[-1, 1)`.
    pub fn new<R: Rng + ?Sized>(
        input_size: usize,
        output_size: usize,
        rng: &mut R,
    ) -> Result<Self, NeuraliteError> {
        Self::with_init(input_size, output_size, DenseInit::default(), rng)
    }

    /// Creates a layer with parameters drawn according to `init`.
    ///
    /// # Errors
    /// * [`NeuraliteError::InvalidConfiguration`] if either size is zero or the
    ///   initializer is invalid.
    pub fn with_init<R: Rng + ?Sized>(
        input_size: usize,
        output_size: usize,
        init: DenseInit,
        rng: &mut R,
    ) -> Result<Self, NeuraliteError> {
        if input_size == 0 || output_size == 0 {
            return Err(NeuraliteError::InvalidConfiguration(format!(
                "Dense layer sizes must be non-zero, got {} -> {}",
                input_size, output_size
            )));
        }
        let (weights, bias) = init.initialize(input_size, output_size, rng)?;
        debug!("Created Dense layer {} -> {}", input_size, output_size);
        Ok(Dense {
            weights,
            bias,
            cached_input: None,
        })
    }

    /// Wraps explicit parameters. `bias` must have one entry per weight row.
    pub fn from_parameters(weights: Matrix, bias: Vector) -> Result<Self, NeuraliteError> {
        ensure_len(weights.row_count(), bias.len(), "Dense::from_parameters (bias)")?;
        Ok(Dense {
            weights,
            bias,
            cached_input: None,
        })
    }

    pub fn weights(&self) -> &Matrix {
        &self.weights
    }

    pub fn bias(&self) -> &Vector {
        &self.bias
    }

    pub fn input_size(&self) -> usize {
        self.weights.column_count()
    }

    pub fn output_size(&self) -> usize {
        self.weights.row_count()
    }

    pub fn parameter_count(&self) -> usize {
        self.output_size() * self.input_size() + self.bias.len()
    }

    /// Whether a forward pass is waiting for its backward pass.
    pub fn has_cached_input(&self) -> bool {
        self.cached_input.is_some()
    }

    /// Replaces the weights. The new matrix must have the current shape.
    pub fn set_weights(&mut self, weights: Matrix) -> Result<(), NeuraliteError> {
        ensure_shape(self.weights.shape(), weights.shape(), "Dense::set_weights")?;
        self.weights = weights;
        Ok(())
    }

    /// Replaces the bias. The new vector must have `output_size` elements.
    pub fn set_bias(&mut self, bias: Vector) -> Result<(), NeuraliteError> {
        ensure_len(self.bias.len(), bias.len(), "Dense::set_bias")?;
        self.bias = bias;
        Ok(())
    }

    /// Computes `weights . input + bias` and caches `input`.
    ///
    /// # Errors
    /// [`NeuraliteError::DimensionMismatch`] if `input.len() != input_size`.
    pub fn forward(&mut self, input: &Vector) -> Result<Vector, NeuraliteError> {
        ensure_len(self.input_size(), input.len(), "Dense::forward")?;
        let output = self.weights.mul_vector(input)?.add(&self.bias)?;
        self.cached_input = Some(input.clone());
        Ok(output)
    }

    /// [`forward`](Dense::forward) on the tagged container. Only vectors are
    /// accepted.
    pub fn forward_tensor(&mut self, input: &Tensor) -> Result<Tensor, NeuraliteError> {
        let input = input.require_vector("Dense::forward_tensor")?;
        self.forward(input).map(Tensor::Vector)
    }

    /// Applies one gradient-descent step and returns the gradient with respect
    /// to the cached input.
    ///
    /// The input gradient is computed with the weights as they were before the
    /// update. The cached input is consumed.
    ///
    /// # Errors
    /// * [`NeuraliteError::MissingForwardCache`] without a preceding `forward`.
    /// * [`NeuraliteError::DimensionMismatch`] if `output_gradient.len() != output_size`.
    ///   The cache is kept in that case.
    pub fn backward(
        &mut self,
        output_gradient: &Vector,
        learning_rate: f64,
    ) -> Result<Vector, NeuraliteError> {
        let input = self
            .cached_input
            .as_ref()
            .ok_or_else(|| NeuraliteError::MissingForwardCache {
                operation: "Dense::backward".to_string(),
            })?;
        ensure_len(self.weights.row_count(), output_gradient.len(), "Dense::backward")?;

        let input_gradient = self.weights.transpose().mul_vector(output_gradient)?;

        for (row, &g) in self.weights.rows_mut().iter_mut().zip(output_gradient.iter()) {
            for (w, &x) in row.as_mut_slice().iter_mut().zip(input.iter()) {
                *w -= learning_rate * (g * x);
            }
        }
        for (b, &g) in self.bias.as_mut_slice().iter_mut().zip(output_gradient.iter()) {
            *b -= learning_rate * g;
        }
        self.cached_input = None;

        Ok(input_gradient)
    }

    /// [`backward`](Dense::backward) on the tagged container.
    pub fn backward_tensor(
        &mut self,
        output_gradient: &Tensor,
        learning_rate: f64,
    ) -> Result<Tensor, NeuraliteError> {
        let output_gradient = output_gradient.require_vector("Dense::backward_tensor")?;
        self.backward(output_gradient, learning_rate).map(Tensor::Vector)
    }
}

impl Layer for Dense {
    fn forward(&mut self, input: &Vector) -> Result<Vector, NeuraliteError> {
        Dense::forward(self, input)
    }

    fn backward(
        &mut self,
        output_gradient: &Vector,
        learning_rate: f64,
    ) -> Result<Vector, NeuraliteError> {
        Dense::backward(self, output_gradient, learning_rate)
    }

    fn input_size(&self) -> usize {
        Dense::input_size(self)
    }

    fn output_size(&self) -> usize {
        Dense::output_size(self)
    }

    fn name(&self) -> &str {
        "dense"
    }

    fn parameter_count(&self) -> usize {
        Dense::parameter_count(self)
    }
}

#[cfg(test)]
#[path = "dense_test.rs"]
mod tests;
