//! Dense matrix helpers over `Vec<Vec<f64>>` (row-major, `m[row][col]`).
use anyhow::{anyhow, Result};

/// Matrix type
pub type Matrix = Vec<Vec<f64>>;

/// `rows x cols` matrix of zeros.
pub fn zeros(rows: usize, cols: usize) -> Matrix {
    vec![vec![0.0; cols]; rows]
}

/// (rows, cols). An empty matrix is (0, 0).
pub fn shape(m: &[Vec<f64>]) -> (usize, usize) {
    (m.len(), m.first().map_or(0, |r| r.len()))
}

fn check_rectangular(m: &[Vec<f64>], name: &str) -> Result<()> {
    let (_, cols) = shape(m);
    if m.iter().any(|r| r.len() != cols) {
        return Err(anyhow!("{} is ragged", name));
    }
    Ok(())
}

fn check_same_shape(a: &[Vec<f64>], b: &[Vec<f64>], op: &str) -> Result<()> {
    if shape(a) != shape(b) {
        return Err(anyhow!(
            "{}: shape mismatch {:?} vs {:?}",
            op,
            shape(a),
            shape(b)
        ));
    }
    Ok(())
}

/// Matrix product `a · b`.
pub fn dot(a: &[Vec<f64>], b: &[Vec<f64>]) -> Result<Matrix> {
    check_rectangular(a, "lhs")?;
    check_rectangular(b, "rhs")?;
    let (n, k) = shape(a);
    let (k2, p) = shape(b);
    if k != k2 {
        return Err(anyhow!(
            "dot: inner dimensions differ ({}, {}) · ({}, {})",
            n,
            k,
            k2,
            p
        ));
    }
    let mut out = zeros(n, p);
    for (i, row) in a.iter().enumerate() {
        for (l, &a_il) in row.iter().enumerate() {
            for (j, &b_lj) in b[l].iter().enumerate() {
                out[i][j] += a_il * b_lj;
            }
        }
    }
    Ok(out)
}

pub fn transpose(m: &[Vec<f64>]) -> Matrix {
    let (rows, cols) = shape(m);
    let mut out = zeros(cols, rows);
    for (i, row) in m.iter().enumerate() {
        for (j, &v) in row.iter().enumerate() {
            out[j][i] = v;
        }
    }
    out
}

/// Broadcast a column vector across every column: `m[i][j] + col[i]`.
pub fn add_column(m: &[Vec<f64>], col: &[f64]) -> Result<Matrix> {
    if m.len() != col.len() {
        return Err(anyhow!(
            "bias has {} rows, matrix has {}",
            col.len(),
            m.len()
        ));
    }
    Ok(m.iter()
        .zip(col)
        .map(|(row, &c)| row.iter().map(|&v| v + c).collect())
        .collect())
}

pub fn map(m: &[Vec<f64>], f: impl Fn(f64) -> f64) -> Matrix {
    m.iter().map(|row| row.iter().map(|&v| f(v)).collect()).collect()
}

/// Elementwise combination of two same-shaped matrices.
pub fn zip_with(
    a: &[Vec<f64>],
    b: &[Vec<f64>],
    op: &str,
    f: impl Fn(f64, f64) -> f64,
) -> Result<Matrix> {
    check_same_shape(a, b, op)?;
    Ok(a.iter()
        .zip(b)
        .map(|(ra, rb)| ra.iter().zip(rb).map(|(&x, &y)| f(x, y)).collect())
        .collect())
}

/// `a - b`
pub fn sub(a: &[Vec<f64>], b: &[Vec<f64>]) -> Result<Matrix> {
    zip_with(a, b, "sub", |x, y| x - y)
}

pub fn scale(m: &[Vec<f64>], k: f64) -> Matrix {
    map(m, |v| v * k)
}

/// Sum over each row, i.e. `np.sum(m, axis=1, keepdims=True)` as a column.
pub fn row_sums(m: &[Vec<f64>]) -> Vec<f64> {
    m.iter().map(|row| row.iter().sum()).collect()
}

/// Sum of squared entries (squared Frobenius norm).
pub fn squared_sum(m: &[Vec<f64>]) -> f64 {
    m.iter().flatten().map(|v| v * v).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_multiplies_compatible_shapes() {
        let a = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
        let b = vec![vec![5.0], vec![6.0]];
        assert_eq!(dot(&a, &b).unwrap(), vec![vec![17.0], vec![39.0]]);
    }

    #[test]
    fn dot_rejects_inner_mismatch() {
        let a = zeros(2, 3);
        let b = zeros(2, 3);
        assert!(dot(&a, &b).is_err());
    }

    #[test]
    fn transpose_swaps_axes() {
        let m = vec![vec![1.0, 2.0, 3.0]];
        assert_eq!(transpose(&m), vec![vec![1.0], vec![2.0], vec![3.0]]);
        assert_eq!(shape(&transpose(&zeros(0, 0))), (0, 0));
    }

    #[test]
    fn bias_broadcasts_over_columns() {
        let m = zeros(2, 3);
        let out = add_column(&m, &[1.0, -1.0]).unwrap();
        assert_eq!(out, vec![vec![1.0; 3], vec![-1.0; 3]]);
        assert!(add_column(&m, &[1.0]).is_err());
    }

    #[test]
    fn elementwise_ops_check_shapes() {
        let a = vec![vec![1.0, 2.0]];
        let b = vec![vec![3.0, 4.0]];
        assert_eq!(sub(&b, &a).unwrap(), vec![vec![2.0, 2.0]]);
        assert_eq!(zip_with(&a, &b, "mul", |x, y| x * y).unwrap(), vec![vec![3.0, 8.0]]);
        assert!(sub(&a, &zeros(2, 2)).is_err());
    }

    #[test]
    fn reductions() {
        let m = vec![vec![1.0, -2.0], vec![3.0, 0.5]];
        assert_eq!(row_sums(&m), vec![-1.0, 3.5]);
        assert_eq!(squared_sum(&m), 1.0 + 4.0 + 9.0 + 0.25);
    }
}
