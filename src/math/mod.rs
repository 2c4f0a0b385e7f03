pub mod matrix;

pub use matrix::{linspace, standard_normal, Matrix};
