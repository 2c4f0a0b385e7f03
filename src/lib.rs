pub mod math;
pub mod activation;
pub mod layers;
pub mod network;
pub mod reference;
pub mod dataset;
pub mod loss;
pub mod optim;
pub mod train;
pub mod sim;
pub mod verify;
pub mod plot;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use activation::activation::ActivationFunction;
pub use layers::dense::Layer;
pub use network::network::Network;
pub use reference::{WeightSet, TRUE_WEIGHTS};
pub use dataset::{Dataset, DatasetConfig};
pub use loss::mse::MseLoss;
pub use optim::adam::Adam;
pub use train::{train_loop, TrainConfig, TrainError};
pub use sim::{run_simulation, SimConfig, SimError};
pub use verify::{compare, parse_simulation_output, Comparison, Verdict, DEFAULT_TOLERANCE};
