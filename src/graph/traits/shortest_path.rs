//! Dense shortest path algorithm traits.

use numr::error::Result;
use numr::runtime::Runtime;

use super::types::{DenseGraph, DijkstraOptions, DistanceVector};

/// Shortest path algorithms over dense adjacency matrices.
///
/// Single-source only. Weights must be non-negative.
pub trait DenseShortestPathAlgorithms<R: Runtime> {
    /// Dijkstra's algorithm with default [`DijkstraOptions`].
    ///
    /// Selects the closest unvisited vertex with a linear scan each round
    /// (lowest index wins ties), then relaxes its row of the matrix.
    ///
    /// # Complexity
    /// O(V^2) time, O(V) extra memory.
    ///
    /// # Errors
    /// `InvalidArgument` if `source` is out of range, the matrix is not
    /// `[V, V]`, or a weight is negative or NaN.
    fn dense_dijkstra(&self, graph: &DenseGraph<R>, source: usize) -> Result<DistanceVector> {
        self.dense_dijkstra_with_options(graph, source, &DijkstraOptions::default())
    }

    /// Dijkstra's algorithm with explicit options.
    fn dense_dijkstra_with_options(
        &self,
        graph: &DenseGraph<R>,
        source: usize,
        options: &DijkstraOptions,
    ) -> Result<DistanceVector>;
}
