// src/tensor/debug.rs
use crate::tensor::{Matrix, Tensor, Vector};
use std::fmt;

// Rendered as nested bracketed lists, e.g. `[[1, 2], [3, 4]]`.

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, x) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", x)?;
        }
        write!(f, "]")
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, row) in self.rows().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", row)?;
        }
        write!(f, "]")
    }
}

impl fmt::Display for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tensor::Scalar(x) => write!(f, "{}", x),
            Tensor::Vector(v) => write!(f, "{}", v),
            Tensor::Matrix(m) => write!(f, "{}", m),
        }
    }
}
