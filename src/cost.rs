//! Cross-entropy cost, with and without L2 regularization.
use crate::matrix;
use crate::params::Parameters;
use anyhow::{anyhow, Result};

fn check_labels(a3: &[Vec<f64>], y: &[Vec<f64>]) -> Result<usize> {
    if matrix::shape(a3) != matrix::shape(y) {
        return Err(anyhow!(
            "A3 {:?} and Y {:?} differ in shape",
            matrix::shape(a3),
            matrix::shape(y)
        ));
    }
    match matrix::shape(y) {
        (1, m) if m > 0 => Ok(m),
        s => Err(anyhow!("labels must have shape (1, m) with m > 0, got {:?}", s)),
    }
}

/// Mean binary cross-entropy `-1/m Σ [y ln a + (1-y) ln(1-a)]`.
///
/// Terms that evaluate to NaN (e.g. `0 * ln 0`) are skipped.
pub fn compute_cost(a3: &[Vec<f64>], y: &[Vec<f64>]) -> Result<f64> {
    let m = check_labels(a3, y)?;
    let total: f64 = a3[0]
        .iter()
        .zip(&y[0])
        .map(|(&a, &t)| -t * a.ln() - (1.0 - t) * (1.0 - a).ln())
        .filter(|l| !l.is_nan())
        .sum();
    Ok(total / m as f64)
}

/// L2 penalty `lambd / (2m) * Σ_l ||W_l||²`.
pub fn l2_penalty(params: &Parameters, lambd: f64, m: usize) -> f64 {
    let sum: f64 = params
        .layers()
        .iter()
        .map(|layer| matrix::squared_sum(&layer.weights))
        .sum();
    lambd / (2.0 * m as f64) * sum
}

/// Cross-entropy cost plus the L2 penalty over every weight matrix.
pub fn compute_cost_with_regularization(
    a3: &[Vec<f64>],
    y: &[Vec<f64>],
    params: &Parameters,
    lambd: f64,
) -> Result<f64> {
    let m = check_labels(a3, y)?;
    let cross_entropy = compute_cost(a3, y)?;
    Ok(cross_entropy + l2_penalty(params, lambd, m))
}
