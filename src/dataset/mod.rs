pub mod csv;
pub mod generate;

pub use csv::{load_pairs, DataError};
pub use generate::{generate, Dataset, DatasetConfig};
