// Trains a 2-2-1 sigmoid network on XOR and saves its weights.
//
// Run with `RUST_LOG=info cargo run --example xor_sigmoid` to see progress.

use neuralite_core::nn::{Activation, Dense, LossFunction, Network, TrainConfig};
use neuralite_core::{Matrix, NeuraliteError};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<(), NeuraliteError> {
    env_logger::init();

    let mut rng = StdRng::seed_from_u64(42);
    let mut net = Network::new(
        vec![
            Dense::new(2, 2, &mut rng)?.into(),
            Dense::new(2, 1, &mut rng)?.into(),
        ],
        vec![Activation::SIGMOID, Activation::SIGMOID],
        LossFunction::MSE,
    )?;

    let inputs = Matrix::from_vecs(vec![
        vec![0.0, 0.0],
        vec![0.0, 1.0],
        vec![1.0, 0.0],
        vec![1.0, 1.0],
    ])?;
    let targets = Matrix::from_vecs(vec![vec![0.0], vec![1.0], vec![1.0], vec![0.0]])?;

    let config = TrainConfig::default()
        .with_learning_rate(0.1)
        .with_epochs(10_000);
    let history = net.train_with_config(&inputs, &targets, &config)?;
    println!(
        "Trained {} parameters for {} epochs, final error {:.6}",
        net.parameter_count(),
        history.len(),
        history.last().copied().unwrap_or(f64::NAN)
    );

    for input in inputs.rows() {
        let output = net.predict(input)?;
        println!("{} -> {}", input, output);
    }

    let path = std::env::temp_dir().join("neuralite_xor_weights.json");
    net.save_weights(&path)?;
    println!("Weights written to {}", path.display());
    Ok(())
}
