// src/nn/config.rs

use serde::{Deserialize, Serialize};

use crate::error::NeuraliteError;

/// Hyper-parameters of a training run.
///
/// `report_every` is the interval, in epochs, between progress reports on the
/// `log` facade; epoch 0 is always reported. A value of 0 disables reporting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    pub learning_rate: f64,
    pub epochs: usize,
    pub report_every: usize,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            learning_rate: 0.1,
            epochs: 1000,
            report_every: 1000,
        }
    }
}

impl TrainConfig {
    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn with_epochs(mut self, epochs: usize) -> Self {
        self.epochs = epochs;
        self
    }

    pub fn with_report_every(mut self, report_every: usize) -> Self {
        self.report_every = report_every;
        self
    }

    /// Fails with [`NeuraliteError::InvalidConfiguration`] for a negative or
    /// non-finite learning rate.
    pub fn validate(&self) -> Result<(), NeuraliteError> {
        if !self.learning_rate.is_finite() || self.learning_rate < 0.0 {
            return Err(NeuraliteError::InvalidConfiguration(format!(
                "learning rate must be finite and non-negative, got {}",
                self.learning_rate
            )));
        }
        Ok(())
    }

    pub(crate) fn should_report(&self, epoch: usize) -> bool {
        self.report_every > 0 && epoch % self.report_every == 0
    }
}
