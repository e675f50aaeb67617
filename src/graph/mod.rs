pub mod generators;
pub mod weight;
pub mod weighted;

pub use generators::GeneratorConfig;
pub use weight::{NonNegativeF64, Weight};
pub use weighted::{Edge, WeightedGraph};
