use approx::assert_relative_eq;
use planar_nn::fixtures::{
    backward_propagation_with_regularization_test_case, compute_cost_with_regularization_test_case,
};
use planar_nn::matrix;
use planar_nn::{
    backward_propagation, backward_propagation_with_regularization, compute_cost,
    compute_cost_with_regularization,
};

#[test_log::test]
fn regularized_cost_adds_penalty_to_cross_entropy() {
    let (a3, y, params) = compute_cost_with_regularization_test_case().unwrap();
    assert_eq!(params.layer_dims(), vec![3, 2, 3, 1]);
    let base = compute_cost(&a3, &y).unwrap();
    assert_relative_eq!(base, 1.6025016047573224, epsilon = 1e-8);

    let lambd = 0.1;
    let squares: f64 = (1..=3).map(|l| matrix::squared_sum(params.w(l))).sum();
    let reg = compute_cost_with_regularization(&a3, &y, &params, lambd).unwrap();
    assert_relative_eq!(reg, base + lambd / 10.0 * squares, epsilon = 1e-12);
    assert_relative_eq!(reg, 1.78648594516, epsilon = 1e-8);
}

#[test_log::test]
fn regularized_gradients_match_reference_values() {
    let (x, y, cache) = backward_propagation_with_regularization_test_case();
    assert_eq!(matrix::shape(&x), (3, 5));
    let grads = backward_propagation_with_regularization(&x, &y, &cache, 0.7).unwrap();

    let expected_dw3 = [-1.77691347, -0.11832879, -0.09397446];
    for (got, want) in grads.dw3[0].iter().zip(expected_dw3) {
        assert_relative_eq!(*got, want, epsilon = 1e-7);
    }
    let expected_dw2 = [
        [0.79276486, 0.85133918],
        [-0.0957219, -0.01720463],
        [-0.13100772, -0.03750433],
    ];
    for (row, want_row) in grads.dw2.iter().zip(expected_dw2) {
        for (got, want) in row.iter().zip(want_row) {
            assert_relative_eq!(*got, want, epsilon = 1e-7);
        }
    }
    let expected_dw1 = [
        [-0.25604646, 0.12298827, -0.28297129],
        [-0.17706303, 0.34536094, -0.4410571],
    ];
    for (row, want_row) in grads.dw1.iter().zip(expected_dw1) {
        for (got, want) in row.iter().zip(want_row) {
            assert_relative_eq!(*got, want, epsilon = 1e-7);
        }
    }
    assert_relative_eq!(grads.db3[0], -0.380329806, epsilon = 1e-9);
}

#[test_log::test]
fn penalty_only_changes_weight_gradients() {
    let (x, y, cache) = backward_propagation_with_regularization_test_case();
    let plain = backward_propagation(&x, &y, &cache).unwrap();
    let reg = backward_propagation_with_regularization(&x, &y, &cache, 0.7).unwrap();
    assert_eq!(plain.db1, reg.db1);
    assert_eq!(plain.dz2, reg.dz2);
    assert_relative_eq!(reg.dw1[1][2] - plain.dw1[1][2], 0.7 / 5.0 * cache.w1[1][2], epsilon = 1e-12);
}
