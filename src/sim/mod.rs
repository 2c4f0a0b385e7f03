pub mod harness;
pub mod vectors;

pub use harness::{run_simulation, SimConfig, SimError};
pub use vectors::write_test_vectors;
