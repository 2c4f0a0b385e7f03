pub mod weights;

pub use weights::{WeightSet, TRUE_WEIGHTS};
