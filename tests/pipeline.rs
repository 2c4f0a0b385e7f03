//! End-to-end regression tests: dataset → training → metrics, with the
//! default hyperparameters used by the `train` binary.

use rand::rngs::StdRng;
use rand::SeedableRng;

use boxcar_nn::loss::rmse;
use boxcar_nn::{dataset, train_loop, Adam, DatasetConfig, Network, TrainConfig, TRUE_WEIGHTS};

#[test]
fn training_with_defaults_converges_below_the_rmse_ceiling() {
    let ds = dataset::generate(&TRUE_WEIGHTS, &DatasetConfig::default());
    let config = TrainConfig::default();

    let mut network = Network::boxcar(&mut StdRng::seed_from_u64(42));
    let mut optimizer = Adam::new(config.learning_rate, &network);

    let losses = train_loop(
        &mut network,
        &ds.x_train,
        &ds.y_train,
        &mut optimizer,
        &config,
    )
    .expect("training must not diverge at the default learning rate");

    assert_eq!(losses.len(), 2000);
    assert!(losses.iter().all(|l| l.is_finite()));

    // Loss decreases on average: the tail of the trace sits well below the head.
    let head: f64 = losses[..100].iter().sum::<f64>() / 100.0;
    let tail: f64 = losses[1900..].iter().sum::<f64>() / 100.0;
    assert!(tail < head, "loss did not decrease: head {head}, tail {tail}");

    // With noise_std = 0.3 the achievable train RMSE is around 0.3; the 0.5
    // ceiling catches optimizer regressions without being seed-sensitive.
    let pred_train: Vec<f64> = ds.x_train.iter().map(|&x| network.predict(x)).collect();
    let train_rmse = rmse(&pred_train, &ds.y_train);
    assert!(train_rmse < 0.5, "train RMSE {train_rmse} above ceiling");
}

#[test]
fn learned_weights_export_under_the_shared_naming_scheme() {
    let ds = dataset::generate(&TRUE_WEIGHTS, &DatasetConfig::default());

    let mut network = Network::boxcar(&mut StdRng::seed_from_u64(7));
    let mut optimizer = Adam::new(0.05, &network);
    train_loop(
        &mut network,
        &ds.x_train,
        &ds.y_train,
        &mut optimizer,
        &TrainConfig::new(50, 0.05),
    )
    .unwrap();

    let learned = network.export_weights();
    let names: Vec<&str> = learned.named().iter().map(|(n, _)| *n).collect();
    let true_names: Vec<&str> = TRUE_WEIGHTS.named().iter().map(|(n, _)| *n).collect();
    assert_eq!(names, true_names);
    assert!(learned.named().iter().all(|(_, v)| v.is_finite()));
}
