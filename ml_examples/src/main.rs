// ml_examples/src/main.rs
use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use log::info;
use planar_nn::config::load_json;
use planar_nn::{
    load_2d_dataset, load_planar_dataset, load_spiral_dataset, model, plot_decision_boundary,
    predict, Dataset, PlotOptions, TrainConfig,
};
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Source {
    Flower,
    Spiral,
    Csv,
}

/// Train the 3-layer planar classifier and plot its decision boundary
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Which dataset to train on
    #[arg(long, value_enum, default_value = "flower")]
    dataset: Source,

    /// Train/test CSV files (x1,x2,label) for `--dataset csv`
    #[arg(long, num_args = 2, value_names = ["TRAIN", "TEST"])]
    csv: Vec<PathBuf>,

    /// Seed for the synthetic generators
    #[arg(long, default_value = "1")]
    seed: u64,

    /// Radial noise of the spiral dataset
    #[arg(long, default_value = "0.3")]
    randomness: f64,

    /// JSON file with training hyperparameters
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the L2 regularization strength
    #[arg(long)]
    lambd: Option<f64>,

    /// Override the number of iterations
    #[arg(long)]
    iterations: Option<usize>,

    /// Write the decision boundary PNG here
    #[arg(long)]
    plot: Option<PathBuf>,

    /// Grid spacing for the plot
    #[arg(long, default_value = "0.01")]
    step: f64,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut config: TrainConfig = match &args.config {
        Some(path) => load_json(path)?,
        None => TrainConfig::default(),
    };
    if let Some(lambd) = args.lambd {
        config.lambd = lambd;
    }
    if let Some(iterations) = args.iterations {
        config.num_iterations = iterations;
    }

    let (train, test): (Dataset, Option<Dataset>) = match args.dataset {
        Source::Flower => (load_planar_dataset(args.seed), None),
        Source::Spiral => (load_spiral_dataset(args.randomness, args.seed), None),
        Source::Csv => {
            if args.csv.len() != 2 {
                bail!("--dataset csv needs --csv TRAIN TEST");
            }
            let (train, test) = load_2d_dataset(&args.csv[0], &args.csv[1])?;
            (train, Some(test))
        }
    };
    info!("=== {:?} dataset: {} examples ===", args.dataset, train.num_examples());

    let report = model(&train.x, &train.y, &config)?;
    if let Some(cost) = report.final_cost() {
        info!("Final recorded cost: {:.6}", cost);
    }

    info!("On the training set:");
    predict(&train.x, &train.y, &report.parameters)?;
    if let Some(test) = &test {
        info!("On the test set:");
        predict(&test.x, &test.y, &report.parameters)?;
    }

    if let Some(path) = &args.plot {
        let title = if config.lambd > 0.0 {
            "Model with L2-regularization"
        } else {
            "Model without regularization"
        };
        let options = PlotOptions {
            step: args.step,
            title: title.to_string(),
            ..PlotOptions::default()
        };
        plot_decision_boundary(&report.parameters, &train.x, &train.y, path, &options)?;
    }

    Ok(())
}
