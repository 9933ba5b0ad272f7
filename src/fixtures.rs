//! Hard-coded inputs for checking the regularized cost and backward pass.
use crate::matrix::Matrix;
use crate::network::Cache;
use crate::params::{LayerParams, Parameters};
use anyhow::Result;

fn labels() -> Matrix {
    vec![vec![1.0, 1.0, 0.0, 1.0, 0.0]]
}

fn a3() -> Matrix {
    vec![vec![0.40682402, 0.01629284, 0.16722898, 0.10118111, 0.40682402]]
}

/// `(a3, Y, parameters)`; parameters shaped `[3, 2, 3, 1]`.
pub fn compute_cost_with_regularization_test_case() -> Result<(Matrix, Matrix, Parameters)> {
    let parameters = Parameters::from_layers(vec![
        LayerParams::new(
            vec![
                vec![1.62434536, -0.61175641, -0.52817175],
                vec![-1.07296862, 0.86540763, -2.3015387],
            ],
            vec![1.74481176, -0.7612069],
        )?,
        LayerParams::new(
            vec![
                vec![0.3190391, -0.24937038],
                vec![1.46210794, -2.06014071],
                vec![-0.3224172, -0.38405435],
            ],
            vec![1.13376944, -1.09989127, -0.17242821],
        )?,
        LayerParams::new(
            vec![vec![-0.87785842, 0.04221375, 0.58281521]],
            vec![-1.10061918],
        )?,
    ])?;
    Ok((a3(), labels(), parameters))
}

/// `(X, Y, cache)` with `X` of shape `(3, 5)`.
pub fn backward_propagation_with_regularization_test_case() -> (Matrix, Matrix, Cache) {
    let x = vec![
        vec![1.62434536, -0.61175641, -0.52817175, -1.07296862, 0.86540763],
        vec![-2.3015387, 1.74481176, -0.7612069, 0.3190391, -0.24937038],
        vec![1.46210794, -2.06014071, -0.3224172, -0.38405435, 1.13376944],
    ];
    let cache = Cache {
        z1: vec![
            vec![-1.52855314, 3.32524635, 2.13994541, 2.60700654, -0.75942115],
            vec![-1.98043538, 4.1600994, 0.79051021, 1.46493512, -0.45506242],
        ],
        a1: vec![
            vec![0.0, 3.32524635, 2.13994541, 2.60700654, 0.0],
            vec![0.0, 4.1600994, 0.79051021, 1.46493512, 0.0],
        ],
        w1: vec![
            vec![-1.09989127, -0.17242821, -0.87785842],
            vec![0.04221375, 0.58281521, -1.10061918],
        ],
        b1: vec![1.14472371, 0.90159072],
        z2: vec![
            vec![0.53035547, 5.94892323, 2.31780174, 3.16005701, 0.53035547],
            vec![-0.69166075, -3.47645987, -2.25194702, -2.65416996, -0.69166075],
            vec![-0.39675353, -4.62285846, -2.61101729, -3.22874921, -0.39675353],
        ],
        a2: vec![
            vec![0.53035547, 5.94892323, 2.31780174, 3.16005701, 0.53035547],
            vec![0.0; 5],
            vec![0.0; 5],
        ],
        w2: vec![
            vec![0.50249434, 0.90085595],
            vec![-0.68372786, -0.12289023],
            vec![-0.93576943, -0.26788808],
        ],
        b2: vec![0.53035547, -0.69166075, -0.39675353],
        z3: vec![vec![-0.3771104, -4.10060224, -1.60539468, -2.18416951, -0.3771104]],
        a3: a3(),
        w3: vec![vec![-0.6871727, -0.84520564, -0.67124613]],
        b3: vec![-0.0126646],
    };
    (x, labels(), cache)
}
