//! Shortest path engine over row-slice adjacency matrices.
//!
//! The engine fixes the vertex count once and checks every graph against it.
//! Each call allocates its own working state, so one engine can serve
//! concurrent callers.

use numr::error::Result;
use tracing::debug;

use super::impl_generic::dijkstra::dijkstra_checked;
use super::impl_generic::helpers::validate_vertex_count;
use super::traits::types::{DijkstraOptions, DistanceVector};

/// Single-source shortest paths for graphs of a fixed size.
///
/// # Example
///
/// ```
/// use densepath::ShortestPathEngine;
///
/// let engine = ShortestPathEngine::new(3).unwrap();
/// let graph = vec![
///     vec![0.0, 4.0, 1.0],
///     vec![0.0, 0.0, 0.0],
///     vec![0.0, 2.0, 0.0],
/// ];
/// let result = engine.compute_shortest_paths(&graph, 0).unwrap();
/// assert_eq!(result.distances(), &[0.0, 3.0, 1.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortestPathEngine {
    vertex_count: usize,
    options: DijkstraOptions,
}

impl ShortestPathEngine {
    /// Create an engine with default [`DijkstraOptions`].
    ///
    /// # Errors
    /// `InvalidArgument` if `vertex_count` is zero.
    pub fn new(vertex_count: usize) -> Result<Self> {
        Self::with_options(vertex_count, DijkstraOptions::default())
    }

    pub fn with_options(vertex_count: usize, options: DijkstraOptions) -> Result<Self> {
        validate_vertex_count(vertex_count)?;
        Ok(Self {
            vertex_count,
            options,
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn options(&self) -> &DijkstraOptions {
        &self.options
    }

    /// Shortest distances from `source` to every vertex of `graph`.
    ///
    /// `graph[u][v]` is the weight of the edge `u -> v`. Unreachable vertices
    /// keep `f64::INFINITY`. The rows are read in place, never copied.
    ///
    /// # Errors
    /// `InvalidArgument`, before any computation, if `source` is not in
    /// `[0, vertex_count)`, the graph is not `vertex_count` rows of
    /// `vertex_count` entries, or (with weight validation on) a weight is
    /// negative or NaN.
    pub fn compute_shortest_paths<Row: AsRef<[f64]>>(
        &self,
        graph: &[Row],
        source: usize,
    ) -> Result<DistanceVector> {
        dijkstra_checked(graph, self.vertex_count, source, &self.options).inspect_err(|err| {
            debug!(%err, source, "rejected input");
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::traits::types::NoEdge;
    use numr::error::Error;

    const INF: f64 = f64::INFINITY;

    fn scenario_graph() -> Vec<Vec<f64>> {
        let mut g = vec![vec![0.0; 5]; 5];
        g[0][1] = 10.0;
        g[0][2] = 5.0;
        g[2][1] = 3.0;
        g[1][3] = 1.0;
        g[3][4] = 2.0;
        g
    }

    fn invalid_reason(err: Error) -> String {
        match err {
            Error::InvalidArgument { reason, .. } => reason,
            other => panic!("expected InvalidArgument, got {other:?}"),
        }
    }

    #[test]
    fn test_shortest_paths_through_cheaper_detour() {
        let engine = ShortestPathEngine::new(5).unwrap();
        let result = engine.compute_shortest_paths(&scenario_graph(), 0).unwrap();

        assert_eq!(result.distances(), &[0.0, 8.0, 5.0, 9.0, 11.0]);
        assert_eq!(result.path_to(4), Some(vec![0, 2, 1, 3, 4]));
        assert_eq!(result.source(), 0);
    }

    #[test]
    fn test_no_edges() {
        let engine = ShortestPathEngine::new(5).unwrap();
        let graph = vec![vec![0.0; 5]; 5];
        let result = engine.compute_shortest_paths(&graph, 0).unwrap();

        assert_eq!(result.distances(), &[0.0, INF, INF, INF, INF]);
        assert_eq!(result.visit_order(), &[0]);
        assert_eq!(result.path_to(3), None);
    }

    #[test]
    fn test_directed_edge_from_other_source() {
        let engine = ShortestPathEngine::new(5).unwrap();
        let mut graph = vec![vec![0.0; 5]; 5];
        graph[0][1] = 7.0;
        let result = engine.compute_shortest_paths(&graph, 1).unwrap();

        assert_eq!(result.distances(), &[INF, 0.0, INF, INF, INF]);
        assert!(!result.is_reachable(0));
        assert_eq!(result.path_to(1), Some(vec![1]));
    }

    #[test]
    fn test_source_out_of_range() {
        let engine = ShortestPathEngine::new(5).unwrap();
        let reason = invalid_reason(
            engine
                .compute_shortest_paths(&scenario_graph(), 5)
                .unwrap_err(),
        );
        assert!(reason.contains("source vertex out of range"));
    }

    #[test]
    fn test_malformed_matrix() {
        let engine = ShortestPathEngine::new(5).unwrap();
        let graph = vec![vec![0.0; 5]; 4];
        let reason = invalid_reason(engine.compute_shortest_paths(&graph, 0).unwrap_err());
        assert!(reason.contains("graph must be a square matrix of size vertexCount"));
    }

    #[test]
    fn test_malformed_matrix_checked_before_source() {
        let engine = ShortestPathEngine::new(2).unwrap();
        let graph = vec![vec![0.0; 3]; 2];
        let reason = invalid_reason(engine.compute_shortest_paths(&graph, 9).unwrap_err());
        assert!(reason.contains("square matrix"));
    }

    #[test]
    fn test_zero_vertex_count_rejected() {
        assert!(ShortestPathEngine::new(0).is_err());
    }

    #[test]
    fn test_negative_weight_rejected() {
        let engine = ShortestPathEngine::new(2).unwrap();
        let graph = [[0.0, -1.0], [0.0, 0.0]];
        assert!(engine.compute_shortest_paths(&graph, 0).is_err());
    }

    #[test]
    fn test_negative_weight_allowed_without_validation() {
        let options = DijkstraOptions::default().with_validate_weights(false);
        let engine = ShortestPathEngine::with_options(2, options).unwrap();
        let graph = [[0.0, -1.0], [0.0, 0.0]];
        let result = engine.compute_shortest_paths(&graph, 0).unwrap();
        assert_eq!(result.distance(1), Some(-1.0));
    }

    #[test]
    fn test_infinity_sentinel_allows_zero_weight_edges() {
        let options = DijkstraOptions::default().with_no_edge(NoEdge::Infinity);
        let engine = ShortestPathEngine::with_options(3, options).unwrap();
        let graph = [[INF, 0.0, INF], [INF, INF, 2.0], [INF, INF, INF]];
        let result = engine.compute_shortest_paths(&graph, 0).unwrap();

        assert_eq!(result.distances(), &[0.0, 0.0, 2.0]);
        assert_eq!(result.path_to(2), Some(vec![0, 1, 2]));
    }

    #[test]
    fn test_ties_finalize_lowest_index_first() {
        let engine = ShortestPathEngine::new(4).unwrap();
        let graph = [
            [0.0, 0.0, 1.0, 1.0],
            [0.0; 4],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
        ];
        let result = engine.compute_shortest_paths(&graph, 0).unwrap();

        assert_eq!(result.visit_order(), &[0, 2, 3, 1]);
        assert_eq!(result.predecessor(1), Some(2));
    }

    #[test]
    fn test_borrowed_rows_of_flat_buffer() {
        let flat: Vec<f64> = scenario_graph().concat();
        let rows: Vec<&[f64]> = flat.chunks(5).collect();
        let engine = ShortestPathEngine::new(5).unwrap();
        let result = engine.compute_shortest_paths(&rows, 0).unwrap();

        assert_eq!(result.distances(), &[0.0, 8.0, 5.0, 9.0, 11.0]);
    }

    #[test]
    fn test_engine_is_reusable_across_calls() {
        let engine = ShortestPathEngine::new(5).unwrap();
        let graph = scenario_graph();
        let first = engine.compute_shortest_paths(&graph, 0).unwrap();
        let second = engine.compute_shortest_paths(&graph, 0).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_concurrent_calls_share_engine() {
        let engine = ShortestPathEngine::new(5).unwrap();
        let graph = scenario_graph();
        let (engine, graph) = (&engine, &graph);
        std::thread::scope(|s| {
            let handles: Vec<_> = (0..5)
                .map(|source| s.spawn(move || engine.compute_shortest_paths(graph, source)))
                .collect();
            for (source, handle) in handles.into_iter().enumerate() {
                let result = handle.join().unwrap().unwrap();
                assert_eq!(result.distance(source), Some(0.0));
            }
        });
    }
}
