use planar_nn::{
    load_planar_dataset, load_spiral_dataset, model, plot_decision_boundary, predict, PlotOptions,
    TrainConfig,
};

#[test_log::test]
fn flower_is_learned_beyond_chance() {
    let data = load_planar_dataset(2);
    let config = TrainConfig {
        num_iterations: 5_000,
        learning_rate: 0.1,
        print_cost: false,
        ..TrainConfig::default()
    };
    let report = model(&data.x, &data.y, &config).unwrap();
    assert_eq!(report.costs.len(), 5);
    assert!(report.final_cost().unwrap() < report.costs[0]);
    let (preds, acc) = predict(&data.x, &data.y, &report.parameters).unwrap();
    assert_eq!(preds[0].len(), 400);
    assert!(acc > 0.6, "accuracy {}", acc);
}

#[test_log::test]
fn regularized_training_writes_boundary_png() {
    let data = load_spiral_dataset(0.2, 3);
    let config = TrainConfig {
        num_iterations: 2_000,
        learning_rate: 0.01,
        lambd: 0.7,
        print_cost: false,
        ..TrainConfig::default()
    };
    let report = model(&data.x, &data.y, &config).unwrap();
    assert_eq!(report.costs.len(), 2);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("boundary.png");
    let options = PlotOptions {
        step: 0.1,
        title: "Model with L2-regularization".to_string(),
        ..PlotOptions::default()
    };
    let grid = plot_decision_boundary(&report.parameters, &data.x, &data.y, &path, &options).unwrap();
    assert!(path.exists());
    assert_eq!(grid.cells.len(), grid.rows * grid.cols);
}
