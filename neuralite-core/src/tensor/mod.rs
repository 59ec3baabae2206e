// src/tensor/mod.rs

use crate::error::NeuraliteError;

pub mod create;
mod debug;
pub mod matrix;
pub mod utils;
pub mod vector;

pub use matrix::Matrix;
pub use vector::Vector;

/// Names the variant held by a [`Tensor`]. Used for type-violation reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TensorKind {
    /// A plain `f64`.
    Scalar,
    /// A one-dimensional [`Vector`].
    Vector,
    /// A rectangular [`Matrix`].
    Matrix,
}

/// Tagged container over the three value kinds the algebra understands.
///
/// The typed kernels live on [`Vector`] and [`Matrix`]; `Tensor` is the
/// dynamically typed entry point used by the `ops` functions, which check the
/// variant of every argument and report a [`NeuraliteError::TypeMismatch`]
/// instead of broadcasting.
#[derive(Debug, Clone, PartialEq)]
pub enum Tensor {
    Scalar(f64),
    Vector(Vector),
    Matrix(Matrix),
}

impl Tensor {
    /// Returns the variant of this tensor.
    pub fn kind(&self) -> TensorKind {
        match self {
            Tensor::Scalar(_) => TensorKind::Scalar,
            Tensor::Vector(_) => TensorKind::Vector,
            Tensor::Matrix(_) => TensorKind::Matrix,
        }
    }

    /// Returns the shape: `[]` for a scalar, `[len]` for a vector and
    /// `[rows, cols]` for a matrix.
    pub fn shape(&self) -> Vec<usize> {
        match self {
            Tensor::Scalar(_) => vec![],
            Tensor::Vector(v) => vec![v.len()],
            Tensor::Matrix(m) => {
                let (rows, cols) = m.shape();
                vec![rows, cols]
            }
        }
    }

    /// Total number of elements.
    pub fn numel(&self) -> usize {
        self.shape().iter().product()
    }

    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Tensor::Scalar(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_vector(&self) -> Option<&Vector> {
        match self {
            Tensor::Vector(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_matrix(&self) -> Option<&Matrix> {
        match self {
            Tensor::Matrix(m) => Some(m),
            _ => None,
        }
    }

    /// Borrows the inner [`Vector`], or fails with a type violation naming
    /// `operation`.
    pub fn require_vector(&self, operation: &str) -> Result<&Vector, NeuraliteError> {
        self.as_vector().ok_or_else(|| NeuraliteError::TypeMismatch {
            expected: TensorKind::Vector,
            actual: self.kind(),
            operation: operation.to_string(),
        })
    }

    /// Borrows the inner [`Matrix`], or fails with a type violation naming
    /// `operation`.
    pub fn require_matrix(&self, operation: &str) -> Result<&Matrix, NeuraliteError> {
        self.as_matrix().ok_or_else(|| NeuraliteError::TypeMismatch {
            expected: TensorKind::Matrix,
            actual: self.kind(),
            operation: operation.to_string(),
        })
    }

    /// Reads the scalar value, or fails with a type violation naming `operation`.
    pub fn require_scalar(&self, operation: &str) -> Result<f64, NeuraliteError> {
        self.as_scalar().ok_or_else(|| NeuraliteError::TypeMismatch {
            expected: TensorKind::Scalar,
            actual: self.kind(),
            operation: operation.to_string(),
        })
    }
}

impl From<f64> for Tensor {
    fn from(value: f64) -> Self {
        Tensor::Scalar(value)
    }
}

impl From<Vector> for Tensor {
    fn from(value: Vector) -> Self {
        Tensor::Vector(value)
    }
}

impl From<Matrix> for Tensor {
    fn from(value: Matrix) -> Self {
        Tensor::Matrix(value)
    }
}
