pub mod compare;
pub mod parse;

pub use compare::{compare, Comparison, PointCheck, Verdict, DEFAULT_TOLERANCE};
pub use parse::parse_simulation_output;
