//! Hyperparameters for training and options for plotting, loadable from JSON.
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Hyperparameters of [`crate::network::model`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    pub learning_rate: f64,
    pub num_iterations: usize,
    /// L2 regularization strength; `0.0` disables it.
    pub lambd: f64,
    pub print_cost: bool,
    /// Hidden layer sizes between the input and the single sigmoid unit.
    pub hidden_dims: [usize; 2],
    pub seed: u64,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.3,
            num_iterations: 30_000,
            lambd: 0.0,
            print_cost: true,
            hidden_dims: [20, 3],
            seed: crate::params::INIT_SEED,
        }
    }
}

impl TrainConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(anyhow!("learning_rate must be positive, got {}", self.learning_rate));
        }
        if !(self.lambd.is_finite() && self.lambd >= 0.0) {
            return Err(anyhow!("lambd must be non-negative, got {}", self.lambd));
        }
        if self.hidden_dims.contains(&0) {
            return Err(anyhow!("hidden layers need at least one unit"));
        }
        Ok(())
    }
}

/// Labels and grid resolution for [`crate::plot::plot_decision_boundary`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotOptions {
    /// Grid spacing in data units.
    pub step: f64,
    /// Output pixels per grid cell.
    pub cell_pixels: u32,
    /// Radius of the scatter markers in pixels.
    pub marker_radius: u32,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            step: 0.01,
            cell_pixels: 1,
            marker_radius: 4,
            title: "Model without regularization".to_string(),
            x_label: "Other Player".to_string(),
            y_label: "French Player".to_string(),
        }
    }
}

/// Any config section read from a JSON file; missing fields fall back to defaults.
pub fn load_json<T: for<'de> Deserialize<'de>>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let text =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Invalid config in {}", path.display()))
}
