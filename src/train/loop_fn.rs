use std::fmt;

use crate::loss::mse::MseLoss;
use crate::math::matrix::Matrix;
use crate::network::network::Network;
use crate::optim::adam::Adam;
use crate::train::train_config::TrainConfig;

#[derive(Debug)]
pub enum TrainError {
    /// The epoch loss stopped being a finite number; the run is aborted
    /// immediately instead of recording NaN/Inf into the loss trace.
    NonFiniteLoss { epoch: usize, loss: f64 },
}

impl fmt::Display for TrainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteLoss { epoch, loss } => {
                write!(f, "training diverged at epoch {epoch}: loss = {loss}")
            }
        }
    }
}

impl std::error::Error for TrainError {}

/// Trains `network` on scalar (x, y) samples for `config.epochs` full-batch
/// Adam updates and returns the per-epoch loss trace.
///
/// Each epoch forwards every sample, accumulates backpropagated gradients,
/// averages them over the batch, and applies one optimizer step per layer.
/// The dataset is small, so there is no mini-batching and no shuffling.
///
/// # Errors
/// [`TrainError::NonFiniteLoss`] if an epoch's mean loss is NaN or infinite.
///
/// # Panics
/// Panics if `x_train` is empty or the lengths mismatch.
pub fn train_loop(
    network: &mut Network,
    x_train: &[f64],
    y_train: &[f64],
    optimizer: &mut Adam,
    config: &TrainConfig,
) -> Result<Vec<f64>, TrainError> {
    assert!(!x_train.is_empty(), "x_train must not be empty");
    assert_eq!(
        x_train.len(),
        y_train.len(),
        "x_train and y_train must have equal length"
    );

    let n = x_train.len();
    let mut losses = Vec::with_capacity(config.epochs);

    for epoch in 1..=config.epochs {
        let mut total_loss = 0.0;

        // Zero-initialize accumulated gradient storage.
        let mut acc_grads: Vec<(Matrix, Matrix)> = network
            .layers
            .iter()
            .map(|layer| {
                (
                    Matrix::zeros(layer.weights.rows, layer.weights.cols),
                    Matrix::zeros(layer.biases.rows, layer.biases.cols),
                )
            })
            .collect();

        // Accumulate gradients over the full batch.
        for (&x, &y) in x_train.iter().zip(y_train.iter()) {
            let input = vec![x];
            let expected = vec![y];

            let output = network.forward(input.clone());
            total_loss += MseLoss::loss(&output, &expected);

            let error = MseLoss::derivative(&output, &expected);
            let mut delta = Matrix::from_data(vec![error]);

            // Backward pass.
            for i in (0..network.layers.len()).rev() {
                let input_for_layer = if i == 0 {
                    Matrix::from_data(vec![input.clone()])
                } else {
                    network.layers[i - 1].neurons.clone()
                };

                let (w_grad, b_grad) =
                    network.layers[i].compute_gradients(delta.clone(), &input_for_layer);

                if i > 0 {
                    // Propagate δ_i through weights to get ∂L/∂a_{i-1}
                    delta = b_grad.clone() * network.layers[i].weights.transpose();
                }

                acc_grads[i].0 = acc_grads[i].0.clone() + w_grad;
                acc_grads[i].1 = acc_grads[i].1.clone() + b_grad;
            }
        }

        let epoch_loss = total_loss / n as f64;
        if !epoch_loss.is_finite() {
            return Err(TrainError::NonFiniteLoss {
                epoch,
                loss: epoch_loss,
            });
        }
        losses.push(epoch_loss);

        // Average and apply one Adam step per layer.
        let inv_n = 1.0 / n as f64;
        optimizer.begin_step();
        for (i, (w_acc, b_acc)) in acc_grads.into_iter().enumerate() {
            let w_avg = w_acc.map(|g| g * inv_n);
            let b_avg = b_acc.map(|g| g * inv_n);
            optimizer.step(i, &mut network.layers[i], w_avg, b_avg);
        }

        if epoch % 200 == 0 {
            log::info!(
                "epoch {epoch}/{}: loss = {epoch_loss:.6}",
                config.epochs
            );
        }
    }

    Ok(losses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn loss_trace_has_one_entry_per_epoch_and_decreases() {
        // Fit a short linear relation; 200 epochs is plenty for Adam here.
        let x: Vec<f64> = (0..10).map(|i| i as f64 / 10.0).collect();
        let y: Vec<f64> = x.iter().map(|&x| 0.5 * x - 0.2).collect();

        let mut net = Network::boxcar(&mut StdRng::seed_from_u64(3));
        let mut adam = Adam::new(0.05, &net);
        let config = TrainConfig::new(200, 0.05);

        let losses = train_loop(&mut net, &x, &y, &mut adam, &config).unwrap();
        assert_eq!(losses.len(), 200);
        assert!(losses[199] < losses[0]);
        assert!(losses.iter().all(|l| l.is_finite()));
    }
}
