//! densepath - single-source shortest paths over dense adjacency matrices
//!
//! densepath computes Dijkstra shortest paths on graphs given as a full V×V
//! weight matrix. The selection step is a linear scan rather than a heap,
//! which is the right trade for dense graphs where E ≈ V².
//!
//! # Entry points
//!
//! - [`ShortestPathEngine`] - vertex count fixed at construction, graphs
//!   passed as row slices
//! - [`DenseShortestPathAlgorithms`] - the same algorithm on a numr
//!   [`Tensor`] held in a [`DenseGraph`], implemented for numr's CPU client
//!
//! # No-edge convention
//!
//! By default a weight of `0.0` means "no edge". Use
//! [`NoEdge::Infinity`] to mark absent edges with `f64::INFINITY` instead,
//! which makes zero-weight edges expressible.
//!
//! # Example
//!
//! ```
//! use densepath::{format_path, ShortestPathEngine};
//!
//! let engine = ShortestPathEngine::new(5).unwrap();
//! let mut graph = vec![vec![0.0; 5]; 5];
//! graph[0][1] = 10.0;
//! graph[0][2] = 5.0;
//! graph[2][1] = 3.0;
//! graph[1][3] = 1.0;
//! graph[3][4] = 2.0;
//!
//! let result = engine.compute_shortest_paths(&graph, 0).unwrap();
//! assert_eq!(result.distances(), &[0.0, 8.0, 5.0, 9.0, 11.0]);
//! assert_eq!(format_path(&result, 4), "0 -> 2(5) -> 1(8) -> 3(9) -> 4(11)");
//! ```

pub mod graph;

// Re-export main types for convenience
pub use graph::{
    DenseGraph, DenseShortestPathAlgorithms, DijkstraOptions, DistanceVector, NoEdge,
    ShortestPathEngine, format_all_paths, format_distance_table, format_path,
};

// Re-export numr types that users will commonly need
pub use numr::error::{Error, Result};
pub use numr::runtime::{Runtime, RuntimeClient};
pub use numr::tensor::Tensor;
