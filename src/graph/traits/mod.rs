pub mod shortest_path;
pub mod types;

pub use shortest_path::DenseShortestPathAlgorithms;
pub use types::*;
