use crate::matrix::{self, Matrix};
use std::fmt;

/// Trait for activation functions.
pub trait Activation: fmt::Debug + Send + Sync {
    fn apply(&self, x: f64) -> f64;
    fn derivative(&self, x: f64) -> f64;
    fn apply_vec(&self, x: &[f64]) -> Vec<f64> {
        x.iter().map(|&xi| self.apply(xi)).collect()
    }
    fn apply_matrix(&self, m: &[Vec<f64>]) -> Matrix {
        matrix::map(m, |v| self.apply(v))
    }
}

/// ReLU: max(0, x)
#[derive(Debug, Clone, Copy, Default)]
pub struct ReLU;

impl Activation for ReLU {
    fn apply(&self, x: f64) -> f64 {
        x.max(0.0)
    }
    fn derivative(&self, x: f64) -> f64 {
        (x > 0.0) as u8 as f64
    }
}

/// Sigmoid: 1 / (1 + exp(-x))
#[derive(Debug, Clone, Copy, Default)]
pub struct Sigmoid;

impl Activation for Sigmoid {
    fn apply(&self, x: f64) -> f64 {
        1.0 / (1.0 + (-x).exp())
    }
    fn derivative(&self, x: f64) -> f64 {
        let s = self.apply(x);
        s * (1.0 - s)
    }
}

/// Elementwise sigmoid of a matrix.
pub fn sigmoid(m: &[Vec<f64>]) -> Matrix {
    Sigmoid.apply_matrix(m)
}

/// Elementwise relu of a matrix.
pub fn relu(m: &[Vec<f64>]) -> Matrix {
    ReLU.apply_matrix(m)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn sigmoid_values() {
        assert_relative_eq!(Sigmoid.apply(0.0), 0.5);
        assert_relative_eq!(Sigmoid.apply(2.0), 0.8807970779778823, epsilon = 1e-12);
        assert_relative_eq!(Sigmoid.derivative(0.0), 0.25);
        let m = sigmoid(&[vec![-1.0, 1.0]]);
        assert_relative_eq!(m[0][0] + m[0][1], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn relu_clamps_negatives() {
        assert_eq!(relu(&[vec![-3.0, 0.0, 2.5]]), vec![vec![0.0, 0.0, 2.5]]);
        assert_eq!(ReLU.apply_vec(&[-1.0, 1.0]), vec![0.0, 1.0]);
        assert_eq!(ReLU.derivative(0.0), 0.0);
        assert_eq!(ReLU.derivative(0.1), 1.0);
    }
}
