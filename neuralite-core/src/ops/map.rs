use crate::tensor::Tensor;

/// Applies `f` to every element, preserving variant and shape.
pub fn map_op<F>(t: &Tensor, f: F) -> Tensor
where
    F: Fn(f64) -> f64,
{
    match t {
        Tensor::Scalar(x) => Tensor::Scalar(f(*x)),
        Tensor::Vector(v) => Tensor::Vector(v.map(f)),
        Tensor::Matrix(m) => Tensor::Matrix(m.map(f)),
    }
}
