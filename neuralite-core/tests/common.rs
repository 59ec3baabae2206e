use neuralite_core::nn::{Activation, Dense, LossFunction, Network};
use neuralite_core::{Matrix, NeuraliteError};
use rand::rngs::StdRng;
use rand::SeedableRng;

// Shared by several test binaries; not every binary uses every helper.
#[allow(dead_code)]
pub fn xor_data() -> Result<(Matrix, Matrix), NeuraliteError> {
    let inputs = Matrix::from_vecs(vec![
        vec![0.0, 0.0],
        vec![0.0, 1.0],
        vec![1.0, 0.0],
        vec![1.0, 1.0],
    ])?;
    let targets = Matrix::from_vecs(vec![vec![0.0], vec![1.0], vec![1.0], vec![0.0]])?;
    Ok((inputs, targets))
}

/// 2-2-1 network with sigmoid on both layers, seeded for reproducibility.
#[allow(dead_code)]
pub fn xor_network(seed: u64) -> Result<Network, NeuraliteError> {
    let mut rng = StdRng::seed_from_u64(seed);
    Network::new(
        vec![
            Dense::new(2, 2, &mut rng)?.into(),
            Dense::new(2, 1, &mut rng)?.into(),
        ],
        vec![Activation::SIGMOID, Activation::SIGMOID],
        LossFunction::MSE,
    )
}
