//! The fixed 3-layer classifier: LINEAR -> RELU -> LINEAR -> RELU -> LINEAR -> SIGMOID.
//!
//! Inputs are column-major: `X` has shape `(n_x, m)` and `Y` has shape `(1, m)`.
use crate::activations::{relu, sigmoid, Activation, ReLU};
use crate::config::TrainConfig;
use crate::cost::{compute_cost, compute_cost_with_regularization};
use crate::matrix::{self, Matrix};
use crate::params::{initialize_parameters_with_seed, Parameters};
use anyhow::{anyhow, Result};
use log::{debug, info};

/// Intermediate values of [`forward_propagation`], consumed by the backward pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Cache {
    pub z1: Matrix,
    pub a1: Matrix,
    pub w1: Matrix,
    pub b1: Vec<f64>,
    pub z2: Matrix,
    pub a2: Matrix,
    pub w2: Matrix,
    pub b2: Vec<f64>,
    pub z3: Matrix,
    pub a3: Matrix,
    pub w3: Matrix,
    pub b3: Vec<f64>,
}

/// Gradients with respect to every parameter, activation and pre-activation.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradients {
    pub dz3: Matrix,
    pub dw3: Matrix,
    pub db3: Vec<f64>,
    pub da2: Matrix,
    pub dz2: Matrix,
    pub dw2: Matrix,
    pub db2: Vec<f64>,
    pub da1: Matrix,
    pub dz1: Matrix,
    pub dw1: Matrix,
    pub db1: Vec<f64>,
}

impl Gradients {
    /// `(dW_l, db_l)` in layer order.
    pub fn layers(&self) -> [(&Matrix, &[f64]); 3] {
        [
            (&self.dw1, self.db1.as_slice()),
            (&self.dw2, self.db2.as_slice()),
            (&self.dw3, self.db3.as_slice()),
        ]
    }
}

fn linear(w: &[Vec<f64>], a_prev: &[Vec<f64>], b: &[f64]) -> Result<Matrix> {
    matrix::add_column(&matrix::dot(w, a_prev)?, b)
}

/// Forward pass; returns `A3` of shape `(1, m)` and the cache.
pub fn forward_propagation(x: &[Vec<f64>], params: &Parameters) -> Result<(Matrix, Cache)> {
    if params.num_layers() != 3 {
        return Err(anyhow!(
            "forward_propagation expects 3 layers, got {}",
            params.num_layers()
        ));
    }
    let (w1, b1) = (params.w(1), params.b(1));
    let (w2, b2) = (params.w(2), params.b(2));
    let (w3, b3) = (params.w(3), params.b(3));
    if w3.len() != 1 {
        return Err(anyhow!(
            "the output layer must have a single unit, got {}",
            w3.len()
        ));
    }

    let z1 = linear(w1, x, b1)?;
    let a1 = relu(&z1);
    let z2 = linear(w2, &a1, b2)?;
    let a2 = relu(&z2);
    let z3 = linear(w3, &a2, b3)?;
    let a3 = sigmoid(&z3);

    let cache = Cache {
        z1,
        a1,
        w1: w1.clone(),
        b1: b1.to_vec(),
        z2,
        a2,
        w2: w2.clone(),
        b2: b2.to_vec(),
        z3,
        a3: a3.clone(),
        w3: w3.clone(),
        b3: b3.to_vec(),
    };
    Ok((a3, cache))
}

/// `dA * 1[A > 0]`
fn relu_backward(da: &[Vec<f64>], a: &[Vec<f64>]) -> Result<Matrix> {
    matrix::zip_with(da, a, "relu_backward", |d, v| d * ReLU.derivative(v))
}

/// `1/m dZ A_prev^T + lambd/m W` and `1/m rowsum(dZ)`.
fn linear_grads(
    dz: &[Vec<f64>],
    a_prev: &[Vec<f64>],
    w: &[Vec<f64>],
    m: f64,
    lambd: f64,
) -> Result<(Matrix, Vec<f64>)> {
    let dw = matrix::scale(&matrix::dot(dz, &matrix::transpose(a_prev))?, 1.0 / m);
    let dw = if lambd != 0.0 {
        matrix::zip_with(&dw, w, "l2", |g, wv| g + lambd / m * wv)?
    } else {
        dw
    };
    let db = matrix::row_sums(dz).into_iter().map(|s| s / m).collect();
    Ok((dw, db))
}

/// Backward pass of the unregularized cross-entropy cost.
pub fn backward_propagation(x: &[Vec<f64>], y: &[Vec<f64>], cache: &Cache) -> Result<Gradients> {
    backward_propagation_with_regularization(x, y, cache, 0.0)
}

/// Backward pass of the L2-regularized cost: each `dW_l` gains `lambd/m * W_l`.
pub fn backward_propagation_with_regularization(
    x: &[Vec<f64>],
    y: &[Vec<f64>],
    cache: &Cache,
    lambd: f64,
) -> Result<Gradients> {
    let (_, m) = matrix::shape(x);
    if m == 0 {
        return Err(anyhow!("backward_propagation needs at least one example"));
    }
    if matrix::shape(y) != (1, m) {
        return Err(anyhow!(
            "Y has shape {:?}, expected (1, {})",
            matrix::shape(y),
            m
        ));
    }
    let m = m as f64;

    let dz3 = matrix::sub(&cache.a3, y)?;
    let (dw3, db3) = linear_grads(&dz3, &cache.a2, &cache.w3, m, lambd)?;

    let da2 = matrix::dot(&matrix::transpose(&cache.w3), &dz3)?;
    let dz2 = relu_backward(&da2, &cache.a2)?;
    let (dw2, db2) = linear_grads(&dz2, &cache.a1, &cache.w2, m, lambd)?;

    let da1 = matrix::dot(&matrix::transpose(&cache.w2), &dz2)?;
    let dz1 = relu_backward(&da1, &cache.a1)?;
    let (dw1, db1) = linear_grads(&dz1, x, &cache.w1, m, lambd)?;

    Ok(Gradients {
        dz3,
        dw3,
        db3,
        da2,
        dz2,
        dw2,
        db2,
        da1,
        dz1,
        dw1,
        db1,
    })
}

/// Gradient descent step: `W_l -= lr * dW_l`, `b_l -= lr * db_l`.
pub fn update_parameters(
    params: &mut Parameters,
    grads: &Gradients,
    learning_rate: f64,
) -> Result<()> {
    if params.num_layers() != 3 {
        return Err(anyhow!(
            "update_parameters expects 3 layers, got {}",
            params.num_layers()
        ));
    }
    for (l, (layer, (dw, db))) in params.layers().iter().zip(grads.layers()).enumerate() {
        if matrix::shape(&layer.weights) != matrix::shape(dw) || layer.bias.len() != db.len() {
            return Err(anyhow!("gradient shapes do not match layer {}", l + 1));
        }
    }
    for (layer, (dw, db)) in params.layers_mut().iter_mut().zip(grads.layers()) {
        // bias
        for (b, &g) in layer.bias.iter_mut().zip(db.iter()) {
            *b -= learning_rate * g;
        }
        // weights
        for (row, grad_row) in layer.weights.iter_mut().zip(dw) {
            for (w, &g) in row.iter_mut().zip(grad_row) {
                *w -= learning_rate * g;
            }
        }
    }
    Ok(())
}

/// Trained parameters and the cost recorded every 1000 iterations.
#[derive(Debug, Clone)]
pub struct TrainingReport {
    pub parameters: Parameters,
    pub costs: Vec<f64>,
}

impl TrainingReport {
    pub fn final_cost(&self) -> Option<f64> {
        self.costs.last().copied()
    }
}

/// Train `[n_x, hidden.., 1]` with full-batch gradient descent, optionally L2-regularized.
pub fn model(x: &[Vec<f64>], y: &[Vec<f64>], config: &TrainConfig) -> Result<TrainingReport> {
    config.validate()?;
    let (n_x, m) = matrix::shape(x);
    if n_x == 0 || m == 0 {
        return Err(anyhow!("Dataset is empty"));
    }
    let [h1, h2] = config.hidden_dims;
    let mut parameters = initialize_parameters_with_seed(&[n_x, h1, h2, 1], config.seed)?;
    info!(
        "training {} on {} examples (lr={}, lambd={}, iterations={})",
        parameters, m, config.learning_rate, config.lambd, config.num_iterations
    );

    let mut costs = Vec::new();
    for i in 0..config.num_iterations {
        let (a3, cache) = forward_propagation(x, &parameters)?;
        let cost = if config.lambd == 0.0 {
            compute_cost(&a3, y)?
        } else {
            compute_cost_with_regularization(&a3, y, &parameters, config.lambd)?
        };
        let grads = backward_propagation_with_regularization(x, y, &cache, config.lambd)?;
        update_parameters(&mut parameters, &grads, config.learning_rate)?;

        if i % 1000 == 0 {
            costs.push(cost);
            if config.print_cost && i % 10_000 == 0 {
                info!("Cost after iteration {}: {}", i, cost);
            } else {
                debug!("Cost after iteration {}: {}", i, cost);
            }
        }
    }
    Ok(TrainingReport { parameters, costs })
}
