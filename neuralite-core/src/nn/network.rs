// neuralite-core/src/nn/network.rs

use std::ops::ControlFlow;

use log::{debug, info, warn};

use crate::error::NeuraliteError;
use crate::nn::activation::Activation;
use crate::nn::config::TrainConfig;
use crate::nn::layers::LayerKind;
use crate::nn::losses::LossFunction;
use crate::nn::module::Layer;
use crate::tensor::utils::ensure_len;
use crate::tensor::{Matrix, Vector};

/// An ordered stack of layers trained with per-sample gradient descent.
///
/// Activation `i` is applied to the output of layer `i`; layers past the end
/// of the activation list pass their affine output through unchanged.
///
/// The network keeps the input of the last forward pass followed by every
/// layer's pre-activation output. [`backward`](Network::backward) consumes
/// that cache, so each backward step must follow its own forward step.
#[derive(Debug, Clone)]
pub struct Network {
    layers: Vec<LayerKind>,
    activations: Vec<Activation>,
    loss: LossFunction,
    cache: Option<Vec<Vector>>,
}

impl Network {
    /// Assembles a network.
    ///
    /// # Errors
    /// * [`NeuraliteError::InvalidConfiguration`] if `layers` is empty or there
    ///   are more activations than layers.
    /// * [`NeuraliteError::ShapeMismatch`] if the output size of a layer differs
    ///   from the input size of the next one.
    pub fn new(
        layers: Vec<LayerKind>,
        activations: Vec<Activation>,
        loss: LossFunction,
    ) -> Result<Self, NeuraliteError> {
        if layers.is_empty() {
            return Err(NeuraliteError::InvalidConfiguration(
                "a network needs at least one layer".to_string(),
            ));
        }
        if activations.len() > layers.len() {
            return Err(NeuraliteError::InvalidConfiguration(format!(
                "{} activations given for {} layers",
                activations.len(),
                layers.len()
            )));
        }
        for (i, pair) in layers.windows(2).enumerate() {
            if pair[0].output_size() != pair[1].input_size() {
                return Err(NeuraliteError::ShapeMismatch {
                    expected: vec![pair[0].output_size()],
                    actual: vec![pair[1].input_size()],
                    operation: format!("Network::new (layer {} -> {})", i, i + 1),
                });
            }
        }
        for (i, layer) in layers.iter().enumerate() {
            debug!(
                "Layer {}: {} {} -> {}, activation {}",
                i,
                layer.name(),
                layer.input_size(),
                layer.output_size(),
                activations.get(i).map_or("none", |a| a.name())
            );
        }
        Ok(Network {
            layers,
            activations,
            loss,
            cache: None,
        })
    }

    pub fn layers(&self) -> &[LayerKind] {
        &self.layers
    }

    pub(crate) fn layers_mut(&mut self) -> &mut [LayerKind] {
        &mut self.layers
    }

    pub fn activations(&self) -> &[Activation] {
        &self.activations
    }

    pub fn loss(&self) -> LossFunction {
        self.loss
    }

    pub fn depth(&self) -> usize {
        self.layers.len()
    }

    pub fn input_size(&self) -> usize {
        self.layers.first().map_or(0, |l| l.input_size())
    }

    pub fn output_size(&self) -> usize {
        self.layers.last().map_or(0, |l| l.output_size())
    }

    pub fn parameter_count(&self) -> usize {
        self.layers.iter().map(|l| l.parameter_count()).sum()
    }

    /// Runs `input` through every layer and returns the final activation.
    ///
    /// Replaces the forward cache. On error the cache is left empty.
    pub fn forward(&mut self, input: &Vector) -> Result<Vector, NeuraliteError> {
        self.cache = None;
        let mut cache = Vec::with_capacity(self.layers.len() + 1);
        cache.push(input.clone());

        let mut current = input.clone();
        for (i, layer) in self.layers.iter_mut().enumerate() {
            let z = layer.forward(&current)?;
            current = match self.activations.get(i) {
                Some(activation) => z.map(activation.func()),
                None => z.clone(),
            };
            cache.push(z);
        }

        self.cache = Some(cache);
        Ok(current)
    }

    /// Backpropagates the loss gradient of `output` against `target`, updating
    /// every layer in place, and returns the gradient with respect to the
    /// network input.
    ///
    /// # Errors
    /// [`NeuraliteError::MissingForwardCache`] unless a successful `forward`
    /// happened since the last `backward`. Loss and layer errors propagate.
    pub fn backward(
        &mut self,
        target: &Vector,
        output: &Vector,
        learning_rate: f64,
    ) -> Result<Vector, NeuraliteError> {
        let cache = match self.cache.take() {
            Some(cache) if cache.len() == self.layers.len() + 1 => cache,
            _ => {
                return Err(NeuraliteError::MissingForwardCache {
                    operation: "Network::backward".to_string(),
                })
            }
        };

        let mut gradient = Vector::from(self.loss.gradient(target.as_slice(), output.as_slice())?);
        for i in (0..self.layers.len()).rev() {
            if let Some(activation) = self.activations.get(i) {
                let slope = cache[i + 1].map(activation.derivative_fn());
                gradient = gradient.elementwise_multiply(&slope)?;
            }
            gradient = self.layers[i].backward(&gradient, learning_rate)?;
        }
        Ok(gradient)
    }

    /// Trains on the rows of `inputs` against the rows of `targets` for
    /// `epochs` epochs and returns the accumulated error of every epoch.
    pub fn train(
        &mut self,
        inputs: &Matrix,
        targets: &Matrix,
        learning_rate: f64,
        epochs: usize,
    ) -> Result<Vec<f64>, NeuraliteError> {
        let config = TrainConfig::default()
            .with_learning_rate(learning_rate)
            .with_epochs(epochs);
        self.train_with_config(inputs, targets, &config)
    }

    pub fn train_with_config(
        &mut self,
        inputs: &Matrix,
        targets: &Matrix,
        config: &TrainConfig,
    ) -> Result<Vec<f64>, NeuraliteError> {
        self.train_with_callback(inputs, targets, config, |_, _| ControlFlow::Continue(()))
    }

    /// Like [`train_with_config`](Network::train_with_config), calling
    /// `callback(epoch, epoch_error)` after every epoch. Returning
    /// `ControlFlow::Break(())` ends training before the next epoch.
    ///
    /// Samples are visited in row order and each one updates the parameters
    /// immediately. The first failing sample aborts the run; updates made by
    /// earlier samples are kept.
    ///
    /// # Errors
    /// * [`NeuraliteError::DimensionMismatch`] if `inputs` and `targets` have
    ///   different row counts. Nothing is updated in that case.
    /// * [`NeuraliteError::InvalidConfiguration`] for an invalid `config`.
    pub fn train_with_callback<C>(
        &mut self,
        inputs: &Matrix,
        targets: &Matrix,
        config: &TrainConfig,
        mut callback: C,
    ) -> Result<Vec<f64>, NeuraliteError>
    where
        C: FnMut(usize, f64) -> ControlFlow<()>,
    {
        ensure_len(inputs.row_count(), targets.row_count(), "Network::train (sample count)")?;
        config.validate()?;

        let mut history = Vec::with_capacity(config.epochs);
        for epoch in 0..config.epochs {
            let mut epoch_error = 0.0;
            for (input, target) in inputs.rows().iter().zip(targets.rows()) {
                let output = self.forward(input)?;
                epoch_error += self.loss.loss(target.as_slice(), output.as_slice())?;
                self.backward(target, &output, config.learning_rate)?;
            }
            history.push(epoch_error);

            if config.should_report(epoch) {
                info!("Epoch {}, Error: {}", epoch, epoch_error);
            }
            if callback(epoch, epoch_error).is_break() {
                warn!(
                    "Training stopped by callback after epoch {} of {}",
                    epoch + 1,
                    config.epochs
                );
                break;
            }
        }
        Ok(history)
    }

    /// Inference. Same as [`forward`](Network::forward).
    pub fn predict(&mut self, input: &Vector) -> Result<Vector, NeuraliteError> {
        self.forward(input)
    }

    /// Mean loss over all samples, without touching the parameters.
    ///
    /// # Errors
    /// [`NeuraliteError::DimensionMismatch`] for mismatched or empty sample sets.
    pub fn evaluate(&mut self, inputs: &Matrix, targets: &Matrix) -> Result<f64, NeuraliteError> {
        ensure_len(inputs.row_count(), targets.row_count(), "Network::evaluate (sample count)")?;
        if inputs.row_count() == 0 {
            return Err(NeuraliteError::DimensionMismatch {
                expected: 1,
                actual: 0,
                operation: "Network::evaluate (empty input)".to_string(),
            });
        }
        let mut total = 0.0;
        for (input, target) in inputs.rows().iter().zip(targets.rows()) {
            let output = self.forward(input)?;
            total += self.loss.loss(target.as_slice(), output.as_slice())?;
        }
        self.cache = None;
        Ok(total / inputs.row_count() as f64)
    }
}

#[cfg(test)]
#[path = "network_test.rs"]
mod tests;
