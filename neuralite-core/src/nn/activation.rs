// src/nn/activation.rs

use std::fmt;

/// An element-wise nonlinearity paired with its derivative.
///
/// Both members are plain function pointers, so an `Activation` is `Copy` and
/// can be shared between networks freely. The derivative is evaluated at the
/// pre-activation value (the layer's affine output), not at the activated one.
#[derive(Clone, Copy)]
pub struct Activation {
    name: &'static str,
    func: fn(f64) -> f64,
    derivative: fn(f64) -> f64,
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

fn sigmoid_prime(x: f64) -> f64 {
    let s = sigmoid(x);
    s * (1.0 - s)
}

fn tanh_prime(x: f64) -> f64 {
    let t = x.tanh();
    1.0 - t * t
}

fn identity(x: f64) -> f64 {
    x
}

fn one(_: f64) -> f64 {
    1.0
}

fn relu(x: f64) -> f64 {
    if x > 0.0 {
        x
    } else {
        0.0
    }
}

fn relu_prime(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else {
        0.0
    }
}

impl Activation {
    /// Logistic sigmoid `1 / (1 + e^-x)`.
    pub const SIGMOID: Activation = Activation {
        name: "sigmoid",
        func: sigmoid,
        derivative: sigmoid_prime,
    };

    /// Hyperbolic tangent.
    pub const TANH: Activation = Activation {
        name: "tanh",
        func: f64::tanh,
        derivative: tanh_prime,
    };

    /// Rectified linear unit. The derivative at `x <= 0` is taken as 0.
    pub const RELU: Activation = Activation {
        name: "relu",
        func: relu,
        derivative: relu_prime,
    };

    pub const IDENTITY: Activation = Activation {
        name: "identity",
        func: identity,
        derivative: one,
    };

    /// Builds a custom activation from a function and its derivative.
    pub fn new(name: &'static str, func: fn(f64) -> f64, derivative: fn(f64) -> f64) -> Self {
        Activation {
            name,
            func,
            derivative,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Evaluates the activation at `x`.
    pub fn apply(&self, x: f64) -> f64 {
        (self.func)(x)
    }

    /// Evaluates the derivative at the pre-activation value `x`.
    pub fn derivative(&self, x: f64) -> f64 {
        (self.derivative)(x)
    }

    pub fn func(&self) -> fn(f64) -> f64 {
        self.func
    }

    pub fn derivative_fn(&self) -> fn(f64) -> f64 {
        self.derivative
    }
}

impl fmt::Debug for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Activation").field("name", &self.name).finish()
    }
}

impl PartialEq for Activation {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}
