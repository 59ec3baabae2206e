// Learns a 3-input majority vote, reshuffling the training set every epoch
// and holding out part of the data for evaluation.
//
// Run with `RUST_LOG=info cargo run --example shuffled_training`.

use log::info;
use neuralite_core::nn::{Activation, Dense, LossFunction, Network, TrainConfig};
use neuralite_core::{Matrix, NeuraliteError, Vector};
use neuralite_data::{Dataset, LabeledDataset, RandomSampler};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn majority_dataset() -> Result<LabeledDataset, NeuraliteError> {
    let mut features = Vec::new();
    let mut labels = Vec::new();
    for _repeat in 0..4 {
        for bits in 0..8u32 {
            let x: Vec<f64> = (0..3).map(|b| f64::from((bits >> b) & 1)).collect();
            let ones: f64 = x.iter().sum();
            labels.push(vec![if ones >= 2.0 { 1.0 } else { 0.0 }]);
            features.push(x);
        }
    }
    LabeledDataset::new(Matrix::from_vecs(features)?, Matrix::from_vecs(labels)?)
}

fn main() -> Result<(), NeuraliteError> {
    env_logger::init();

    let (train, test) = majority_dataset()?
        .reordered(&RandomSampler::seeded(0))?
        .split(0.75)?;
    info!("{} training samples, {} held out", train.len(), test.len());

    let mut rng = StdRng::seed_from_u64(7);
    let mut net = Network::new(
        vec![
            Dense::new(3, 4, &mut rng)?.into(),
            Dense::new(4, 1, &mut rng)?.into(),
        ],
        vec![Activation::TANH, Activation::SIGMOID],
        LossFunction::BINARY_CROSS_ENTROPY,
    )?;

    let config = TrainConfig::default()
        .with_learning_rate(0.2)
        .with_epochs(1)
        .with_report_every(0);
    for epoch in 0..300u64 {
        let shuffled = train.reordered(&RandomSampler::seeded(epoch + 1))?;
        let history = net.train_with_config(shuffled.features(), shuffled.labels(), &config)?;
        if epoch % 50 == 0 {
            info!("Epoch {}, Error: {:?}", epoch, history.first());
        }
    }

    println!("Held-out loss: {:.4}", net.evaluate(test.features(), test.labels())?);
    for i in 0..test.len().min(4) {
        let (x, y): (Vector, Vector) = test.get(i)?;
        println!("{} -> {} (expected {})", x, net.predict(&x)?, y);
    }
    Ok(())
}
