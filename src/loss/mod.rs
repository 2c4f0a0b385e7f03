pub mod mse;

pub use mse::{rmse, MseLoss};
