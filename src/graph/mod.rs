//! Dense graph shortest paths.
//!
//! This module provides:
//! - Single-source shortest paths (scan-based Dijkstra, O(V^2))
//! - `ShortestPathEngine`, a fixed-size front end over row-slice matrices
//! - Plain-text reporting of distances and paths

mod cpu;
pub mod engine;
pub mod impl_generic;
pub mod report;
pub mod traits;

pub use engine::ShortestPathEngine;
pub use report::{format_all_paths, format_distance_table, format_path};
pub use traits::*;
