use crate::error::NeuraliteError;
use crate::tensor::utils::ensure_len;
use crate::tensor::Matrix;
use std::ops::Index;

/// An ordered, fixed-length sequence of `f64`.
///
/// Every operation returns a fresh `Vector`; the length chosen at construction
/// never changes. Binary operations require equal lengths and never broadcast.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Vector {
    data: Vec<f64>,
}

impl Vector {
    /// Wraps `data` without copying.
    pub fn new(data: Vec<f64>) -> Self {
        Vector { data }
    }

    /// A vector of `len` zeros.
    pub fn zeros(len: usize) -> Self {
        Vector {
            data: vec![0.0; len],
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.data.get(index).copied()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.data.iter()
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    /// Mutable access for the owning layer's in-place parameter update.
    pub(crate) fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Combines two equal-length vectors element by element.
    pub fn zip_with<F>(&self, other: &Vector, operation: &str, f: F) -> Result<Vector, NeuraliteError>
    where
        F: Fn(f64, f64) -> f64,
    {
        ensure_len(self.len(), other.len(), operation)?;
        Ok(self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| f(a, b))
            .collect())
    }

    /// Element-wise sum.
    pub fn add(&self, other: &Vector) -> Result<Vector, NeuraliteError> {
        self.zip_with(other, "Vector::add", |a, b| a + b)
    }

    /// Element-wise difference `self - other`.
    pub fn subtract(&self, other: &Vector) -> Result<Vector, NeuraliteError> {
        self.zip_with(other, "Vector::subtract", |a, b| a - b)
    }

    /// Element-wise (Hadamard) product.
    pub fn elementwise_multiply(&self, other: &Vector) -> Result<Vector, NeuraliteError> {
        self.zip_with(other, "Vector::elementwise_multiply", |a, b| a * b)
    }

    pub fn scalar_multiply(&self, k: f64) -> Vector {
        self.map(|x| x * k)
    }

    /// Sum of pairwise products, accumulated left to right from `0.0`.
    pub fn dot(&self, other: &Vector) -> Result<f64, NeuraliteError> {
        ensure_len(self.len(), other.len(), "Vector::dot")?;
        Ok(self
            .data
            .iter()
            .zip(other.data.iter())
            .fold(0.0, |acc, (&a, &b)| acc + a * b))
    }

    pub fn map<F>(&self, f: F) -> Vector
    where
        F: Fn(f64) -> f64,
    {
        self.data.iter().map(|&x| f(x)).collect()
    }

    /// The column matrix `(len, 1)` holding this vector.
    pub fn transpose(&self) -> Matrix {
        Matrix::from_rows_unchecked(self.data.iter().map(|&x| Vector::new(vec![x])).collect(), 1)
    }

    /// Outer product: entry `(i, j)` is `self[i] * other[j]`.
    pub fn outer(&self, other: &Vector) -> Matrix {
        let rows = self.data.iter().map(|&a| other.scalar_multiply(a)).collect();
        Matrix::from_rows_unchecked(rows, other.len())
    }
}

impl From<Vec<f64>> for Vector {
    fn from(data: Vec<f64>) -> Self {
        Vector::new(data)
    }
}

impl From<&[f64]> for Vector {
    fn from(data: &[f64]) -> Self {
        Vector::new(data.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for Vector {
    fn from(data: [f64; N]) -> Self {
        Vector::new(data.to_vec())
    }
}

impl FromIterator<f64> for Vector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Vector::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.data[index]
    }
}
