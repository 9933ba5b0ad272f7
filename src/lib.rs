//! Helpers for a small planar-classification course exercise: synthetic 2-D
//! datasets, parameter initialization, a fixed 3-layer network with manual
//! backprop, L2 regularization, prediction and decision-boundary plots.
//!
//! - Flower / spiral generators and a CSV loader for the goalkeeper dataset
//! - LINEAR -> RELU -> LINEAR -> RELU -> LINEAR -> SIGMOID forward and backward passes
//! - Gradient descent driver with optional L2 penalty
//! - Literal fixtures for the regularization checks

pub mod activations;
pub mod config;
pub mod cost;
pub mod datasets;
pub mod fixtures;
pub mod matrix;
pub mod metrics;
pub mod network;
pub mod params;
pub mod plot;
pub mod rng;

pub use activations::{relu, sigmoid, Activation, ReLU, Sigmoid};
pub use config::{PlotOptions, TrainConfig};
pub use cost::{compute_cost, compute_cost_with_regularization};
pub use datasets::{load_2d_dataset, load_planar_dataset, load_spiral_dataset, Dataset};
pub use matrix::Matrix;
pub use metrics::{accuracy, predict, predict_dec};
pub use network::{
    backward_propagation, backward_propagation_with_regularization, forward_propagation, model,
    update_parameters, Cache, Gradients, TrainingReport,
};
pub use params::{initialize_parameters, LayerParams, Parameters};
pub use plot::{decision_grid, plot_decision_boundary, DecisionGrid};
