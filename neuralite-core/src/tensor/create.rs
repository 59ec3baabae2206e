// src/tensor/create.rs
//
// Creation helpers. Random ones take the generator explicitly so callers can
// seed them (`rand::rngs::StdRng::seed_from_u64`) and get reproducible values.

use crate::error::NeuraliteError;
use crate::tensor::{Matrix, Vector};
use rand::Rng;
use rand_distr::{Distribution, StandardNormal, Uniform};

pub fn full_vector(len: usize, value: f64) -> Vector {
    Vector::new(vec![value; len])
}

pub fn full_matrix(rows: usize, cols: usize, value: f64) -> Matrix {
    Matrix::from_rows_unchecked(vec![full_vector(cols, value); rows], cols)
}

/// Identity matrix of size `n`.
pub fn eye(n: usize) -> Matrix {
    let rows = (0..n)
        .map(|i| (0..n).map(|j| if i == j { 1.0 } else { 0.0 }).collect())
        .collect();
    Matrix::from_rows_unchecked(rows, n)
}

fn uniform(low: f64, high: f64) -> Result<Uniform<f64>, NeuraliteError> {
    if !(low < high) || !low.is_finite() || !high.is_finite() {
        return Err(NeuraliteError::InvalidConfiguration(format!(
            "uniform range [{}, {}) is empty or not finite",
            low, high
        )));
    }
    Ok(Uniform::new(low, high))
}

/// Vector of `len` samples drawn from `U[low, high)`.
pub fn rand_vector<R: Rng + ?Sized>(
    len: usize,
    low: f64,
    high: f64,
    rng: &mut R,
) -> Result<Vector, NeuraliteError> {
    let dist = uniform(low, high)?;
    Ok((0..len).map(|_| dist.sample(rng)).collect())
}

/// `(rows, cols)` matrix of samples drawn from `U[low, high)`, filled row by row.
pub fn rand_matrix<R: Rng + ?Sized>(
    rows: usize,
    cols: usize,
    low: f64,
    high: f64,
    rng: &mut R,
) -> Result<Matrix, NeuraliteError> {
    let dist = uniform(low, high)?;
    let data = (0..rows)
        .map(|_| (0..cols).map(|_| dist.sample(rng)).collect())
        .collect();
    Ok(Matrix::from_rows_unchecked(data, cols))
}

/// Vector of `len` standard normal samples.
pub fn randn_vector<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Vector {
    (0..len).map(|_| StandardNormal.sample(rng)).collect()
}

/// `(rows, cols)` matrix of standard normal samples.
pub fn randn_matrix<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Matrix {
    let data = (0..rows).map(|_| randn_vector(cols, rng)).collect();
    Matrix::from_rows_unchecked(data, cols)
}
