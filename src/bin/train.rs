//! Trains the 1→2→3→1 boxcar network on a synthetic noisy dataset and
//! reports the learned weights next to the hand-specified true set.
//!
//! Usage:
//!   cargo run --bin train
//!
//! Artifacts: `boxcar_loss.png`, `boxcar_fit.png`, `boxcar_model.json`,
//! `boxcar_weights.json`.

use anyhow::Context;
use rand::rngs::StdRng;
use rand::SeedableRng;

use boxcar_nn::loss::rmse;
use boxcar_nn::math::matrix::linspace;
use boxcar_nn::{
    dataset, plot, train_loop, Adam, DatasetConfig, Network, TrainConfig, TRUE_WEIGHTS,
};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let data_config = DatasetConfig::default();
    let train_config = TrainConfig::default();

    println!("Generating train/test data with alternating split...");
    let ds = dataset::generate(&TRUE_WEIGHTS, &data_config);
    println!(
        "Training points: {}, Test points: {}",
        ds.x_train.len(),
        ds.x_test.len()
    );

    println!("\nTraining Neural Network...");
    println!("Architecture: Input(1) -> Hidden1(2) -> Hidden2(3) -> Output(1)");
    println!("{}", "=".repeat(50));

    let mut network = Network::boxcar(&mut StdRng::seed_from_u64(data_config.seed));
    let mut optimizer = Adam::new(train_config.learning_rate, &network);
    let losses = train_loop(
        &mut network,
        &ds.x_train,
        &ds.y_train,
        &mut optimizer,
        &train_config,
    )
    .context("training run aborted")?;

    let learned = network.export_weights();

    println!("\n{}", "=".repeat(50));
    println!("Learned vs True Weights:");
    println!("{}", "=".repeat(50));
    for ((name, value), (_, truth)) in learned.named().iter().zip(TRUE_WEIGHTS.named().iter()) {
        println!("  {name:<6} {value:>8.4} | {truth:>6.2}");
    }

    // Report metrics on both splits.
    let pred_train: Vec<f64> = ds.x_train.iter().map(|&x| network.predict(x)).collect();
    let pred_test: Vec<f64> = ds.x_test.iter().map(|&x| network.predict(x)).collect();
    let train_rmse = rmse(&pred_train, &ds.y_train);
    let test_rmse = rmse(&pred_test, &ds.y_test);
    println!("\nTrain RMSE: {train_rmse:.6}, Test RMSE: {test_rmse:.6}");
    if let Some(final_loss) = losses.last() {
        println!("Final training loss: {final_loss:.6}");
    }

    // Prediction overlay over a wider sweep than the training domain.
    let curve_x = linspace(-6.0, 6.0, 400);
    let predicted: Vec<f64> = curve_x.iter().map(|&x| network.predict(x)).collect();
    let truth = TRUE_WEIGHTS.forward_slice(&curve_x);

    plot::save_loss_curve(&losses, "boxcar_loss.png").context("saving loss plot")?;
    println!("Loss plot saved to 'boxcar_loss.png'");
    plot::save_fit_plot(&ds, &curve_x, &predicted, &truth, "boxcar_fit.png")
        .context("saving fit plot")?;
    println!("Fit plot saved to 'boxcar_fit.png'");

    network
        .save_json("boxcar_model.json")
        .context("saving model")?;
    learned
        .save_json("boxcar_weights.json")
        .context("saving learned weights")?;
    println!("Model saved to 'boxcar_model.json', weights to 'boxcar_weights.json'");

    Ok(())
}
