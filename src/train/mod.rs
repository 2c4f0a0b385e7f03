pub mod loop_fn;
pub mod train_config;

pub use loop_fn::{train_loop, TrainError};
pub use train_config::TrainConfig;
