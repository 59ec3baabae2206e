// src/ops/linalg/mod.rs

pub mod dot;
pub mod matmul;
pub mod transpose;

pub use dot::dot_op;
pub use matmul::{matmul_op, matvec_op};
pub use transpose::transpose_op;
