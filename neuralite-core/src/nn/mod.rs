// src/nn/mod.rs
// Layers, activations, losses and the network that ties them together.

pub mod activation;
pub mod config;
pub mod init;
pub mod layers;
pub mod losses;
pub mod module;
pub mod network;
pub mod persistence;

pub use activation::Activation;
pub use config::TrainConfig;
pub use init::DenseInit;
pub use layers::{Dense, LayerKind};
pub use losses::LossFunction;
pub use module::Layer;
pub use network::Network;
pub use persistence::LayerRecord;
