use crate::error::NeuraliteError;
use crate::tensor::Vector;

/// The capability interface shared by every layer variant.
///
/// A layer maps an input vector of length [`input_size`](Layer::input_size) to an
/// output vector of length [`output_size`](Layer::output_size). Trainable layers
/// override [`backward`](Layer::backward), which applies a gradient step to the
/// layer's own parameters and returns the gradient with respect to the input
/// of the matching forward pass.
pub trait Layer: std::fmt::Debug {
    /// Performs a forward pass and remembers whatever the backward pass needs.
    ///
    /// # Errors
    /// Returns a `NeuraliteError` if `input` does not have `input_size` elements.
    fn forward(&mut self, input: &Vector) -> Result<Vector, NeuraliteError>;

    /// Propagates `output_gradient` through the layer, updating parameters in
    /// place with plain gradient descent at `learning_rate`.
    ///
    /// The default implementation reports the layer as inference-only.
    fn backward(
        &mut self,
        _output_gradient: &Vector,
        _learning_rate: f64,
    ) -> Result<Vector, NeuraliteError> {
        Err(NeuraliteError::UnsupportedOperation(format!(
            "backward is not implemented for layer '{}'",
            self.name()
        )))
    }

    fn input_size(&self) -> usize;

    fn output_size(&self) -> usize;

    /// Short human-readable name of the layer variant.
    fn name(&self) -> &str;

    /// Number of trainable scalars held by the layer.
    fn parameter_count(&self) -> usize {
        0
    }
}
