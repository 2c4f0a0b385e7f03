use crate::math::matrix::{linspace, standard_normal};
use crate::reference::WeightSet;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Parameters for the synthetic noisy sweep.
///
/// Defaults mirror the boxcar training setup: 100 points over [-3, 3] with
/// N(0, 0.3) noise, seed 42.
#[derive(Debug, Clone)]
pub struct DatasetConfig {
    pub n_points: usize,
    pub noise_std: f64,
    pub domain: (f64, f64),
    pub seed: u64,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        DatasetConfig {
            n_points: 100,
            noise_std: 0.3,
            domain: (-3.0, 3.0),
            seed: 42,
        }
    }
}

/// Interleaved train/test split of one dense sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub x_train: Vec<f64>,
    pub y_train: Vec<f64>,
    pub x_test: Vec<f64>,
    pub y_test: Vec<f64>,
}

/// Dense uniform sampling with an alternating train/test split.
///
/// Even-indexed sweep points go to the training set, odd-indexed points to
/// the test set, so both splits span the same input range and the test error
/// measures interpolation rather than extrapolation. Targets are the
/// reference model's outputs plus independent Gaussian noise; the whole
/// dataset is a deterministic function of the config (training targets are
/// drawn from the seeded rng before test targets).
pub fn generate(weights: &WeightSet, config: &DatasetConfig) -> Dataset {
    let mut rng = StdRng::seed_from_u64(config.seed);

    let x_all = linspace(config.domain.0, config.domain.1, config.n_points);
    let x_train: Vec<f64> = x_all.iter().copied().step_by(2).collect();
    let x_test: Vec<f64> = x_all.iter().copied().skip(1).step_by(2).collect();

    let y_train = x_train
        .iter()
        .map(|&x| weights.forward(x) + standard_normal(&mut rng) * config.noise_std)
        .collect();
    let y_test = x_test
        .iter()
        .map(|&x| weights.forward(x) + standard_normal(&mut rng) * config.noise_std)
        .collect();

    Dataset {
        x_train,
        y_train,
        x_test,
        y_test,
    }
}
