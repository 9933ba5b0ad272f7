//! Layer parameters and the He-style (`1/sqrt(fan_in)`) initializer.
use crate::matrix::{self, Matrix};
use crate::rng;
use anyhow::{anyhow, Result};
use log::debug;
use std::fmt;

/// Seed used by [`initialize_parameters`].
pub const INIT_SEED: u64 = 3;

/// Weights `(n_l, n_{l-1})` and bias `(n_l, 1)` of one layer.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerParams {
    pub weights: Matrix,
    pub bias: Vec<f64>,
}

impl LayerParams {
    /// Build from literal values, checking that the bias matches the weight rows.
    pub fn new(weights: Matrix, bias: Vec<f64>) -> Result<Self> {
        if weights.len() != bias.len() {
            return Err(anyhow!(
                "bias length {} does not match {} weight rows",
                bias.len(),
                weights.len()
            ));
        }
        Ok(Self { weights, bias })
    }

    pub fn input_size(&self) -> usize {
        matrix::shape(&self.weights).1
    }

    pub fn output_size(&self) -> usize {
        self.bias.len()
    }
}

/// Parameters `W1, b1, ..., WL, bL` of a fully-connected network.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    layers: Vec<LayerParams>,
}

impl Parameters {
    /// Chain literal layers; consecutive layers must agree on their sizes.
    pub fn from_layers(layers: Vec<LayerParams>) -> Result<Self> {
        if layers.is_empty() {
            return Err(anyhow!("at least one layer is required"));
        }
        for (l, pair) in layers.windows(2).enumerate() {
            if pair[1].input_size() != pair[0].output_size() {
                return Err(anyhow!(
                    "W{} expects {} inputs but layer {} has {} units",
                    l + 2,
                    pair[1].input_size(),
                    l + 1,
                    pair[0].output_size()
                ));
            }
        }
        Ok(Self { layers })
    }

    pub fn num_layers(&self) -> usize {
        self.layers.len()
    }

    /// `W_l`, 1-indexed. Panics if `l` is out of range.
    pub fn w(&self, l: usize) -> &Matrix {
        &self.layers[l - 1].weights
    }

    /// `b_l`, 1-indexed. Panics if `l` is out of range.
    pub fn b(&self, l: usize) -> &[f64] {
        &self.layers[l - 1].bias
    }

    pub fn layers(&self) -> &[LayerParams] {
        &self.layers
    }

    pub fn layers_mut(&mut self) -> &mut [LayerParams] {
        &mut self.layers
    }

    /// `[n_x, n_1, ..., n_L]`
    pub fn layer_dims(&self) -> Vec<usize> {
        let mut dims = vec![self.layers[0].input_size()];
        dims.extend(self.layers.iter().map(LayerParams::output_size));
        dims
    }
}

impl fmt::Display for Parameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Parameters: {:?}", self.layer_dims())
    }
}

/// Initialize `W_l = randn(n_l, n_{l-1}) / sqrt(n_{l-1})` and `b_l = 0` with the fixed seed 3.
pub fn initialize_parameters(layer_dims: &[usize]) -> Result<Parameters> {
    initialize_parameters_with_seed(layer_dims, INIT_SEED)
}

pub fn initialize_parameters_with_seed(layer_dims: &[usize], seed: u64) -> Result<Parameters> {
    if layer_dims.len() < 2 {
        return Err(anyhow!(
            "layer_dims needs an input and at least one layer, got {:?}",
            layer_dims
        ));
    }
    if layer_dims.contains(&0) {
        return Err(anyhow!("layer_dims may not contain zero: {:?}", layer_dims));
    }
    let mut rng = rng::seeded(seed);
    let layers = layer_dims
        .windows(2)
        .map(|pair| {
            let (fan_in, units) = (pair[0], pair[1]);
            let limit = (fan_in as f64).sqrt();
            let weights = matrix::map(&rng::randn(&mut rng, units, fan_in), |w| w / limit);
            LayerParams {
                weights,
                bias: vec![0.0; units],
            }
        })
        .collect();
    debug!("initialized parameters for {:?} (seed {})", layer_dims, seed);
    Ok(Parameters { layers })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shapes_follow_layer_dims() {
        let p = initialize_parameters(&[2, 20, 3, 1]).unwrap();
        assert_eq!(p.num_layers(), 3);
        assert_eq!(matrix::shape(p.w(1)), (20, 2));
        assert_eq!(matrix::shape(p.w(2)), (3, 20));
        assert_eq!(matrix::shape(p.w(3)), (1, 3));
        assert_eq!(p.b(2), &[0.0; 3]);
        assert_eq!(p.layer_dims(), vec![2, 20, 3, 1]);
    }

    #[test]
    fn fixed_seed_is_reproducible() {
        let a = initialize_parameters(&[3, 4, 1]).unwrap();
        let b = initialize_parameters(&[3, 4, 1]).unwrap();
        assert_eq!(a, b);
        let c = initialize_parameters_with_seed(&[3, 4, 1], 4).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn weights_are_scaled_by_fan_in() {
        let p = initialize_parameters(&[400, 50]).unwrap();
        let n = 400.0 * 50.0;
        let var = matrix::squared_sum(p.w(1)) / n;
        // randn / sqrt(400) has variance 1/400
        assert!((var * 400.0 - 1.0).abs() < 0.1, "var = {}", var);
    }

    #[test]
    fn rejects_degenerate_dims() {
        assert!(initialize_parameters(&[]).is_err());
        assert!(initialize_parameters(&[5]).is_err());
        assert!(initialize_parameters(&[2, 0, 1]).is_err());
    }

    #[test]
    fn from_layers_checks_chaining() {
        let l1 = LayerParams::new(matrix::zeros(2, 3), vec![0.0; 2]).unwrap();
        let bad = LayerParams::new(matrix::zeros(1, 3), vec![0.0]).unwrap();
        assert!(Parameters::from_layers(vec![l1.clone(), bad]).is_err());
        let good = LayerParams::new(matrix::zeros(1, 2), vec![0.0]).unwrap();
        assert!(Parameters::from_layers(vec![l1, good]).is_ok());
        assert!(LayerParams::new(matrix::zeros(2, 2), vec![0.0]).is_err());
    }
}
