/// Hyperparameters for a `train_loop` run.
///
/// - `epochs`        — total number of full-batch updates
/// - `learning_rate` — Adam step size
///
/// There is no early stopping and no validation-driven model selection: the
/// loop always runs the full epoch budget, and test metrics are computed
/// afterwards for reporting only.
#[derive(Debug, Clone)]
pub struct TrainConfig {
    pub epochs: usize,
    pub learning_rate: f64,
}

impl TrainConfig {
    pub fn new(epochs: usize, learning_rate: f64) -> Self {
        TrainConfig {
            epochs,
            learning_rate,
        }
    }
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            epochs: 2000,
            learning_rate: 0.05,
        }
    }
}
