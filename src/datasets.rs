//! Synthetic 2-D datasets and the CSV loader for the goalkeeper dataset.
//!
//! Every dataset is column-major: `x` is `(2, m)` and `y` is `(1, m)` with 0/1 labels.
use crate::matrix::{self, Matrix};
use crate::rng;
use anyhow::{anyhow, Context, Result};
use csv::ReaderBuilder;
use log::debug;
use std::fs::File;
use std::path::Path;

/// Features and labels of one split.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub x: Matrix,
    pub y: Matrix,
}

impl Dataset {
    pub fn num_examples(&self) -> usize {
        matrix::shape(&self.x).1
    }

    pub fn labels(&self) -> &[f64] {
        self.y.first().map_or(&[][..], Vec::as_slice)
    }
}

/// `n` evenly spaced values from `start` to `end` inclusive.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut values: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            values[n - 1] = end;
            values
        }
    }
}

/// Assemble class-ordered polar samples into a column-major dataset.
fn from_polar(classes: Vec<(Vec<f64>, Vec<f64>)>, to_xy: impl Fn(f64, f64) -> (f64, f64)) -> Dataset {
    let mut x = vec![Vec::new(), Vec::new()];
    let mut y = vec![Vec::new()];
    for (label, (t, r)) in classes.into_iter().enumerate() {
        for (&ti, &ri) in t.iter().zip(&r) {
            let (px, py) = to_xy(ti, ri);
            x[0].push(px);
            x[1].push(py);
            y[0].push(label as f64);
        }
    }
    Dataset { x, y }
}

/// The "flower": 400 points, 200 per class, petals of radius up to 4.
pub fn load_planar_dataset(seed: u64) -> Dataset {
    const M: usize = 400;
    const N: usize = M / 2;
    const A: f64 = 4.0;
    let mut rng = rng::seeded(seed);
    let classes = (0..2)
        .map(|j| {
            let j = j as f64;
            let t: Vec<f64> = linspace(j * 3.12, (j + 1.0) * 3.12, N)
                .into_iter()
                .zip(rng::randn_vec(&mut rng, N))
                .map(|(t, noise)| t + noise * 0.2)
                .collect();
            let r: Vec<f64> = t
                .iter()
                .zip(rng::randn_vec(&mut rng, N))
                .map(|(&t, noise)| A * (4.0 * t).sin() + noise * 0.2)
                .collect();
            (t, r)
        })
        .collect();
    debug!("generated flower dataset (seed {})", seed);
    from_polar(classes, |t, r| (r * t.sin(), r * t.cos()))
}

/// Two interleaved spirals of 25 points each; `randomness` is the radial noise scale.
pub fn load_spiral_dataset(randomness: f64, seed: u64) -> Dataset {
    const M: usize = 50;
    const N: usize = M / 2;
    let mut rng = rng::seeded(seed);
    // (t start, t end, radius coefficient) per class
    let arms = [(0.0, 4.0 * 3.1415, 0.3), (1.0, 2.0 * 3.1415 * 2.0, 0.2)];
    let classes = arms
        .iter()
        .map(|&(start, end, coeff)| {
            let t = linspace(start, end, N);
            let r: Vec<f64> = t
                .iter()
                .zip(rng::randn_vec(&mut rng, N))
                .map(|(&t, noise)| coeff * t * t + noise * randomness)
                .collect();
            (t, r)
        })
        .collect();
    debug!("generated spiral dataset (randomness {}, seed {})", randomness, seed);
    from_polar(classes, |t, r| (r * t.cos(), r * t.sin()))
}

/// Load `x1,x2,label` rows (with header) from a CSV file.
pub fn load_csv_dataset(path: impl AsRef<Path>) -> Result<Dataset> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(file);
    let mut x = vec![Vec::new(), Vec::new()];
    let mut y = vec![Vec::new()];
    for (line, result) in rdr.records().enumerate() {
        let record =
            result.with_context(|| format!("CSV parse error in {}", path.display()))?;
        if record.len() != 3 {
            return Err(anyhow!(
                "{} row {}: expected 3 fields, got {}",
                path.display(),
                line + 1,
                record.len()
            ));
        }
        let field = |i: usize| -> Result<f64> {
            record[i].trim().parse::<f64>().map_err(|e| {
                anyhow!("{} row {}: bad value {:?}: {}", path.display(), line + 1, &record[i], e)
            })
        };
        let label = field(2)?;
        if label != 0.0 && label != 1.0 {
            return Err(anyhow!("Unknown label {} in {}", label, path.display()));
        }
        x[0].push(field(0)?);
        x[1].push(field(1)?);
        y[0].push(label);
    }
    if y[0].is_empty() {
        return Err(anyhow!("No data loaded from {}", path.display()));
    }
    Ok(Dataset { x, y })
}

/// The goalkeeper dataset: `(train, test)` splits from two CSV files.
pub fn load_2d_dataset(
    train_path: impl AsRef<Path>,
    test_path: impl AsRef<Path>,
) -> Result<(Dataset, Dataset)> {
    let train = load_csv_dataset(train_path)?;
    let test = load_csv_dataset(test_path)?;
    debug!(
        "loaded 2D dataset: {} train / {} test examples",
        train.num_examples(),
        test.num_examples()
    );
    Ok((train, test))
}
