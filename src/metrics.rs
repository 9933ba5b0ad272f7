//! Thresholded predictions and accuracy for the 3-layer classifier.
use crate::matrix;
use crate::network::forward_propagation;
use crate::params::Parameters;
use anyhow::{anyhow, Result};
use log::info;

/// Probability above which an example is labelled 1.
pub const THRESHOLD: f64 = 0.5;

/// Fraction of positions where `predictions` agree with `labels`.
pub fn accuracy(predictions: &[u8], labels: &[f64]) -> Result<f64> {
    if predictions.len() != labels.len() {
        return Err(anyhow!(
            "{} predictions for {} labels",
            predictions.len(),
            labels.len()
        ));
    }
    if labels.is_empty() {
        return Err(anyhow!("cannot score an empty dataset"));
    }
    let correct = predictions
        .iter()
        .zip(labels)
        .filter(|&(&p, &y)| p as f64 == y)
        .count();
    Ok(correct as f64 / labels.len() as f64)
}

/// Predict 0/1 labels for `x` and report accuracy against `y`.
///
/// Returns the `(1, m)` predictions and the accuracy.
pub fn predict(x: &[Vec<f64>], y: &[Vec<f64>], params: &Parameters) -> Result<(Vec<Vec<u8>>, f64)> {
    let (a3, _) = forward_propagation(x, params)?;
    let p: Vec<u8> = a3[0].iter().map(|&a| (a > THRESHOLD) as u8).collect();
    if matrix::shape(y).0 != 1 {
        return Err(anyhow!("labels must be a single row, got {:?}", matrix::shape(y)));
    }
    let acc = accuracy(&p, &y[0])?;
    info!("Accuracy: {}", acc);
    Ok((vec![p], acc))
}

/// Boolean predictions `A3 > 0.5`, as used for decision-boundary plots.
pub fn predict_dec(params: &Parameters, x: &[Vec<f64>]) -> Result<Vec<bool>> {
    let (a3, _) = forward_propagation(x, params)?;
    Ok(a3[0].iter().map(|&a| a > THRESHOLD).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::LayerParams;
    use test_log::test;

    /// Outputs sigmoid(x0) through two identity-like ReLU layers.
    fn sign_of_first_feature() -> Parameters {
        Parameters::from_layers(vec![
            LayerParams::new(vec![vec![1.0, 0.0], vec![-1.0, 0.0]], vec![0.0, 0.0]).unwrap(),
            LayerParams::new(vec![vec![1.0, 0.0], vec![0.0, 1.0]], vec![0.0, 0.0]).unwrap(),
            LayerParams::new(vec![vec![1.0, -1.0]], vec![0.0]).unwrap(),
        ])
        .unwrap()
    }

    #[test]
    fn predict_thresholds_and_scores() {
        let x = vec![vec![2.0, -1.0, 0.5, -3.0], vec![0.0; 4]];
        let y = vec![vec![1.0, 0.0, 0.0, 0.0]];
        let (p, acc) = predict(&x, &y, &sign_of_first_feature()).unwrap();
        assert_eq!(p, vec![vec![1, 0, 1, 0]]);
        assert_eq!(acc, 0.75);
    }

    #[test]
    fn exactly_half_is_negative() {
        let x = vec![vec![0.0], vec![0.0]];
        assert_eq!(predict_dec(&sign_of_first_feature(), &x).unwrap(), vec![false]);
    }

    #[test]
    fn accuracy_errors() {
        assert!(accuracy(&[], &[]).is_err());
        assert!(accuracy(&[1], &[1.0, 0.0]).is_err());
        assert_eq!(accuracy(&[1, 0], &[1.0, 0.0]).unwrap(), 1.0);
    }
}
