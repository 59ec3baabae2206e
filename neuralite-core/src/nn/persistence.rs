// neuralite-core/src/nn/persistence.rs

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::NeuraliteError;
use crate::nn::layers::{Dense, LayerKind};
use crate::nn::network::Network;
use crate::tensor::utils::{ensure_len, ensure_shape};
use crate::tensor::{Matrix, Vector};

/// Saved parameters of one dense layer. Weights are row-major with shape
/// `(output_size, input_size)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerRecord {
    pub weights: Vec<Vec<f64>>,
    pub biases: Vec<f64>,
}

impl From<&Dense> for LayerRecord {
    fn from(dense: &Dense) -> Self {
        LayerRecord {
            weights: dense.weights().to_vecs(),
            biases: dense.bias().as_slice().to_vec(),
        }
    }
}

impl From<&LayerKind> for LayerRecord {
    fn from(layer: &LayerKind) -> Self {
        match layer {
            LayerKind::Dense(dense) => LayerRecord::from(dense),
        }
    }
}

impl LayerRecord {
    /// Converts the record into parameters matching `dense`'s shapes.
    fn parameters_for(&self, dense: &Dense, index: usize) -> Result<(Matrix, Vector), NeuraliteError> {
        let operation = format!("Network::load_records (layer {})", index);
        let weights = Matrix::from_vecs(self.weights.clone())?;
        ensure_shape(dense.weights().shape(), weights.shape(), &operation)?;
        ensure_len(dense.output_size(), self.biases.len(), &operation)?;
        Ok((weights, Vector::from(self.biases.as_slice())))
    }
}

impl Network {
    /// One record per layer, in network order.
    pub fn to_records(&self) -> Vec<LayerRecord> {
        self.layers().iter().map(LayerRecord::from).collect()
    }

    /// Overwrites every layer's parameters from `records`.
    ///
    /// Every record is checked against its layer before anything is written,
    /// so on error the network is unchanged.
    ///
    /// # Errors
    /// [`NeuraliteError::ShapeMismatch`] or
    /// [`NeuraliteError::DimensionMismatch`] if the record count or any record
    /// shape disagrees with the network.
    pub fn load_records(&mut self, records: &[LayerRecord]) -> Result<(), NeuraliteError> {
        if records.len() != self.depth() {
            return Err(NeuraliteError::ShapeMismatch {
                expected: vec![self.depth()],
                actual: vec![records.len()],
                operation: "Network::load_records (layer count)".to_string(),
            });
        }

        let mut staged = Vec::with_capacity(records.len());
        for (index, (layer, record)) in self.layers().iter().zip(records).enumerate() {
            match layer {
                LayerKind::Dense(dense) => staged.push(record.parameters_for(dense, index)?),
            }
        }

        for (index, (layer, (weights, bias))) in self.layers_mut().iter_mut().zip(staged).enumerate() {
            match layer {
                LayerKind::Dense(dense) => {
                    dense.set_weights(weights)?;
                    dense.set_bias(bias)?;
                }
            }
            debug!("Loaded parameters of layer {}", index);
        }
        Ok(())
    }

    /// Writes the records of every layer to `path` as a JSON array.
    pub fn save_weights<P: AsRef<Path>>(&self, path: P) -> Result<(), NeuraliteError> {
        let path = path.as_ref();
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, &self.to_records())?;
        writer.flush()?;
        info!("Weights saved to {}", path.display());
        Ok(())
    }

    /// Reads records written by [`save_weights`](Network::save_weights) and
    /// loads them with [`load_records`](Network::load_records).
    pub fn load_weights<P: AsRef<Path>>(&mut self, path: P) -> Result<(), NeuraliteError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let records: Vec<LayerRecord> = serde_json::from_reader(BufReader::new(file))?;
        self.load_records(&records)?;
        info!("Weights loaded from {}", path.display());
        Ok(())
    }
}
