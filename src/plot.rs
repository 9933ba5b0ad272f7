//! Decision-boundary rendering: the classifier evaluated on a grid around the data,
//! filled with a two-colour Spectral-style palette, with the examples scattered on top.
use crate::config::PlotOptions;
use crate::matrix;
use crate::metrics::predict_dec;
use crate::params::Parameters;
use anyhow::{anyhow, Context, Result};
use image::{Rgb, RgbImage};
use log::info;
use std::path::Path;

/// Largest grid side, in cells, that will be evaluated.
pub const MAX_GRID_SIDE: usize = 4096;

const FILL: [Rgb<u8>; 2] = [Rgb([244, 109, 67]), Rgb([50, 136, 189])];
const MARKER: [Rgb<u8>; 2] = [Rgb([158, 1, 66]), Rgb([94, 79, 162])];
const OUTLINE: Rgb<u8> = Rgb([20, 20, 20]);

/// Predictions over a regular grid. `cells[row * cols + col]` is the class at
/// `(x_min + col * step, y_min + row * step)`.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionGrid {
    pub x_min: f64,
    pub y_min: f64,
    pub step: f64,
    pub cols: usize,
    pub rows: usize,
    pub cells: Vec<bool>,
}

impl DecisionGrid {
    pub fn at(&self, row: usize, col: usize) -> bool {
        self.cells[row * self.cols + col]
    }

    /// Fraction of grid points predicted as class 1.
    pub fn positive_fraction(&self) -> f64 {
        self.cells.iter().filter(|&&c| c).count() as f64 / self.cells.len() as f64
    }
}

/// `np.arange(start, stop, step)` length.
fn arange_len(start: f64, stop: f64, step: f64) -> usize {
    ((stop - start) / step).ceil().max(0.0) as usize
}

fn bounds(values: &[f64]) -> Result<(f64, f64)> {
    if values.is_empty() {
        return Err(anyhow!("cannot plot an empty dataset"));
    }
    let lo = values.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if !(lo.is_finite() && hi.is_finite()) {
        return Err(anyhow!("dataset contains non-finite coordinates"));
    }
    Ok((lo - 1.0, hi + 1.0))
}

/// Evaluate the classifier on a grid spanning the data with a margin of 1 on each side.
pub fn decision_grid(params: &Parameters, x: &[Vec<f64>], step: f64) -> Result<DecisionGrid> {
    if !(step.is_finite() && step > 0.0) {
        return Err(anyhow!("grid step must be positive, got {}", step));
    }
    if matrix::shape(x).0 != 2 {
        return Err(anyhow!("decision boundaries need 2 features, got {:?}", matrix::shape(x)));
    }
    let (x_min, x_max) = bounds(&x[0])?;
    let (y_min, y_max) = bounds(&x[1])?;
    let cols = arange_len(x_min, x_max, step);
    let rows = arange_len(y_min, y_max, step);
    if cols > MAX_GRID_SIDE || rows > MAX_GRID_SIDE {
        return Err(anyhow!(
            "grid of {}x{} cells is too large; increase the step",
            cols,
            rows
        ));
    }

    let xs: Vec<f64> = (0..cols).map(|c| x_min + c as f64 * step).collect();
    let mut cells = Vec::with_capacity(rows * cols);
    // one forward pass per grid row
    for r in 0..rows {
        let yv = y_min + r as f64 * step;
        let batch = vec![xs.clone(), vec![yv; cols]];
        cells.extend(predict_dec(params, &batch)?);
    }
    Ok(DecisionGrid {
        x_min,
        y_min,
        step,
        cols,
        rows,
        cells,
    })
}

/// Rasterize the grid and the labelled examples into an image.
pub fn render(grid: &DecisionGrid, x: &[Vec<f64>], y: &[Vec<f64>], options: &PlotOptions) -> Result<RgbImage> {
    let scale = options.cell_pixels.max(1);
    let (width, height) = match (
        u32::try_from(grid.cols).ok().and_then(|c| c.checked_mul(scale)),
        u32::try_from(grid.rows).ok().and_then(|r| r.checked_mul(scale)),
    ) {
        (Some(w), Some(h)) => (w, h),
        _ => {
            return Err(anyhow!(
                "{}x{} cells at {} pixels each overflows the image size",
                grid.cols,
                grid.rows,
                scale
            ))
        }
    };
    if width == 0 || height == 0 {
        return Err(anyhow!("empty decision grid"));
    }
    if matrix::shape(y) != (1, matrix::shape(x).1) {
        return Err(anyhow!("labels {:?} do not match examples", matrix::shape(y)));
    }
    let mut img = RgbImage::from_fn(width, height, |px, py| {
        let col = (px / scale) as usize;
        let row = grid.rows - 1 - (py / scale) as usize;
        FILL[grid.at(row, col) as usize]
    });

    let radius = options.marker_radius as i64;
    for ((&vx, &vy), &label) in x[0].iter().zip(&x[1]).zip(&y[0]) {
        let cx = ((vx - grid.x_min) / grid.step * scale as f64) as i64;
        let cy = height as i64 - 1 - ((vy - grid.y_min) / grid.step * scale as f64) as i64;
        let color = MARKER[(label > 0.5) as usize];
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                let d2 = dx * dx + dy * dy;
                if d2 > radius * radius {
                    continue;
                }
                let (px, py) = (cx + dx, cy + dy);
                if px < 0 || py < 0 || px >= width as i64 || py >= height as i64 {
                    continue;
                }
                let on_edge = d2 > (radius - 1).max(0).pow(2);
                img.put_pixel(px as u32, py as u32, if on_edge { OUTLINE } else { color });
            }
        }
    }
    Ok(img)
}

/// Plot the decision boundary of `params` over `x` with the examples coloured by `y`, as a PNG.
pub fn plot_decision_boundary(
    params: &Parameters,
    x: &[Vec<f64>],
    y: &[Vec<f64>],
    path: impl AsRef<Path>,
    options: &PlotOptions,
) -> Result<DecisionGrid> {
    let path = path.as_ref();
    let grid = decision_grid(params, x, options.step)?;
    let img = render(&grid, x, y, options)?;
    img.save(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!(
        "{} ({} vs {}): wrote {}x{} plot to {}",
        options.title,
        options.x_label,
        options.y_label,
        img.width(),
        img.height(),
        path.display()
    );
    Ok(grid)
}
