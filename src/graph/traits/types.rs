//! Dense graph data types, shortest path results and options.

use numr::error::{Error, Result};
use numr::runtime::Runtime;
use numr::tensor::Tensor;
use serde::{Deserialize, Serialize};

use crate::graph::impl_generic::helpers::flatten_rows;

/// Graph representation using a dense adjacency matrix.
///
/// Wraps a `[n, n]` F64 tensor where entry `[u, v]` is the weight of the edge
/// `u -> v`. Which value means "no edge" is decided per run by
/// [`DijkstraOptions::no_edge`].
///
/// # Construction
///
/// ```ignore
/// use densepath::graph::DenseGraph;
///
/// // From edge list
/// let graph = DenseGraph::from_edge_list(&rows, &cols, Some(&weights), num_nodes, directed, &device)?;
///
/// // From row slices
/// let graph = DenseGraph::from_rows(&[vec![0.0, 1.0], vec![0.0, 0.0]], true, &device)?;
/// ```
#[derive(Debug, Clone)]
pub struct DenseGraph<R: Runtime> {
    /// Dense weight matrix [n, n]
    pub weights: Tensor<R>,
    /// Number of nodes in the graph
    pub num_nodes: usize,
    /// Whether the graph is directed
    pub directed: bool,
}

impl<R: Runtime> DenseGraph<R> {
    /// Create a graph from a dense weight matrix.
    ///
    /// The shape is not checked here; algorithms validate it at their API
    /// boundary.
    pub fn new(weights: Tensor<R>, directed: bool) -> Self {
        let num_nodes = weights.shape().first().copied().unwrap_or(0);
        Self {
            weights,
            num_nodes,
            directed,
        }
    }

    /// Create a graph from row slices.
    ///
    /// Every row must have exactly `rows.len()` entries. For an undirected
    /// graph the matrix is symmetrized, treating `0.0` as "no edge".
    pub fn from_rows<Row: AsRef<[f64]>>(
        rows: &[Row],
        directed: bool,
        device: &R::Device,
    ) -> Result<Self> {
        Self::from_rows_with(rows, directed, NoEdge::Zero, device)
    }

    /// Like [`DenseGraph::from_rows`], with an explicit no-edge sentinel.
    ///
    /// When undirected, cell `[u, v]` and `[v, u]` both receive the edge
    /// present in either direction; if both directions carry an edge the
    /// smaller weight wins.
    pub fn from_rows_with<Row: AsRef<[f64]>>(
        rows: &[Row],
        directed: bool,
        no_edge: NoEdge,
        device: &R::Device,
    ) -> Result<Self> {
        let n = rows.len();
        let mut flat = flatten_rows(rows, n)?;
        if !directed {
            symmetrize(&mut flat, n, no_edge);
        }

        let weights = Tensor::<R>::from_slice(&flat, &[n, n], device);
        Ok(Self {
            weights,
            num_nodes: n,
            directed,
        })
    }

    /// Create a graph from an edge list.
    ///
    /// # Arguments
    ///
    /// * `sources` - Source node indices
    /// * `targets` - Target node indices
    /// * `weights` - Optional edge weights. If None, uses 1.0 for all edges.
    /// * `num_nodes` - Number of nodes in the graph
    /// * `directed` - Whether the graph is directed
    /// * `device` - Device to create the tensor on
    ///
    /// Cells without an edge are filled with `0.0`, the default [`NoEdge`]
    /// sentinel. A repeated edge overwrites the earlier weight.
    pub fn from_edge_list(
        sources: &[usize],
        targets: &[usize],
        weights: Option<&[f64]>,
        num_nodes: usize,
        directed: bool,
        device: &R::Device,
    ) -> Result<Self> {
        Self::from_edge_list_with(
            sources,
            targets,
            weights,
            num_nodes,
            directed,
            NoEdge::Zero,
            device,
        )
    }

    /// Like [`DenseGraph::from_edge_list`], filling absent cells with the
    /// sentinel of `no_edge`.
    pub fn from_edge_list_with(
        sources: &[usize],
        targets: &[usize],
        weights: Option<&[f64]>,
        num_nodes: usize,
        directed: bool,
        no_edge: NoEdge,
        device: &R::Device,
    ) -> Result<Self> {
        let num_edges = sources.len();
        if targets.len() != num_edges {
            return Err(Error::InvalidArgument {
                arg: "targets",
                reason: format!(
                    "edge list has {num_edges} sources but {} targets",
                    targets.len()
                ),
            });
        }
        if let Some(w) = weights {
            if w.len() != num_edges {
                return Err(Error::InvalidArgument {
                    arg: "weights",
                    reason: format!("edge list has {num_edges} edges but {} weights", w.len()),
                });
            }
        }

        let mut dense = vec![no_edge.sentinel(); num_nodes * num_nodes];
        for i in 0..num_edges {
            let (u, v) = (sources[i], targets[i]);
            if u >= num_nodes || v >= num_nodes {
                return Err(Error::InvalidArgument {
                    arg: "node",
                    reason: format!("edge {u} -> {v} references a node >= num_nodes {num_nodes}"),
                });
            }
            let w = weights.map_or(1.0, |ws| ws[i]);
            dense[u * num_nodes + v] = w;
            if !directed {
                // Reverse edge
                dense[v * num_nodes + u] = w;
            }
        }

        let weights = Tensor::<R>::from_slice(&dense, &[num_nodes, num_nodes], device);
        Ok(Self {
            weights,
            num_nodes,
            directed,
        })
    }
}

/// Mirror every edge of a row-major `n * n` matrix onto its reverse cell.
fn symmetrize(weights: &mut [f64], n: usize, no_edge: NoEdge) {
    for u in 0..n {
        for v in (u + 1)..n {
            let (a, b) = (weights[u * n + v], weights[v * n + u]);
            let w = match (no_edge.is_edge(a), no_edge.is_edge(b)) {
                (true, true) => a.min(b),
                (true, false) => a,
                (false, true) => b,
                (false, false) => continue,
            };
            weights[u * n + v] = w;
            weights[v * n + u] = w;
        }
    }
}

/// Which weight value marks the absence of an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoEdge {
    /// `0.0` means "no edge". Zero-weight edges cannot be expressed.
    #[default]
    Zero,
    /// `f64::INFINITY` means "no edge"; `0.0` is a real zero-weight edge.
    Infinity,
}

impl NoEdge {
    /// The weight value stored in cells without an edge.
    pub fn sentinel(self) -> f64 {
        match self {
            NoEdge::Zero => 0.0,
            NoEdge::Infinity => f64::INFINITY,
        }
    }

    /// Whether `weight` denotes an existing edge under this convention.
    #[inline]
    pub fn is_edge(self, weight: f64) -> bool {
        match self {
            NoEdge::Zero => weight != 0.0,
            NoEdge::Infinity => weight != f64::INFINITY,
        }
    }
}

/// Options for dense Dijkstra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DijkstraOptions {
    /// Weight value that means "no edge".
    pub no_edge: NoEdge,
    /// Reject negative and NaN weights before running.
    pub validate_weights: bool,
    /// Stop the selection loop once every unvisited vertex is unreachable.
    pub stop_when_unreachable: bool,
}

impl Default for DijkstraOptions {
    fn default() -> Self {
        Self {
            no_edge: NoEdge::Zero,
            validate_weights: true,
            stop_when_unreachable: true,
        }
    }
}

impl DijkstraOptions {
    pub fn with_no_edge(mut self, no_edge: NoEdge) -> Self {
        self.no_edge = no_edge;
        self
    }

    pub fn with_validate_weights(mut self, validate: bool) -> Self {
        self.validate_weights = validate;
        self
    }

    pub fn with_stop_when_unreachable(mut self, stop: bool) -> Self {
        self.stop_when_unreachable = stop;
        self
    }
}

/// Result of a single-source shortest path run.
///
/// `distances[i]` is the shortest distance from the source to `i`, or
/// `f64::INFINITY` when no path exists.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceVector {
    pub(crate) source: usize,
    pub(crate) distances: Vec<f64>,
    pub(crate) predecessors: Vec<Option<usize>>,
    pub(crate) visit_order: Vec<usize>,
}

impl DistanceVector {
    /// Number of vertices covered.
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Source vertex of the run.
    pub fn source(&self) -> usize {
        self.source
    }

    /// Raw distances, `f64::INFINITY` for unreachable vertices.
    pub fn distances(&self) -> &[f64] {
        &self.distances
    }

    /// Distance to `vertex`, or `None` if it is unreachable or out of range.
    pub fn distance(&self, vertex: usize) -> Option<f64> {
        self.distances
            .get(vertex)
            .copied()
            .filter(|d| d.is_finite())
    }

    pub fn is_reachable(&self, vertex: usize) -> bool {
        self.distance(vertex).is_some()
    }

    /// Vertex whose relaxation produced the final distance of `vertex`.
    ///
    /// `None` for the source, unreachable vertices and out-of-range indices.
    pub fn predecessor(&self, vertex: usize) -> Option<usize> {
        self.predecessors.get(vertex).copied().flatten()
    }

    /// Vertices in the order their distances were finalized.
    pub fn visit_order(&self) -> &[usize] {
        &self.visit_order
    }

    /// Vertices along the shortest path from the source to `target`, inclusive.
    ///
    /// Returns `None` if `target` is unreachable or out of range.
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        if !self.is_reachable(target) {
            return None;
        }

        let mut path = vec![target];
        let mut current = target;
        while let Some(prev) = self.predecessor(current) {
            path.push(prev);
            current = prev;
        }
        path.reverse();
        Some(path)
    }

    pub fn into_distances(self) -> Vec<f64> {
        self.distances
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DistanceVector {
        DistanceVector {
            source: 0,
            distances: vec![0.0, 3.0, f64::INFINITY],
            predecessors: vec![None, Some(0), None],
            visit_order: vec![0, 1],
        }
    }

    #[test]
    fn test_distance_accessors() {
        let result = sample();
        assert_eq!(result.len(), 3);
        assert_eq!(result.distance(1), Some(3.0));
        assert_eq!(result.distance(2), None);
        assert_eq!(result.distance(9), None);
        assert!(!result.is_reachable(2));
        assert_eq!(result.predecessor(0), None);
        assert_eq!(result.path_to(1), Some(vec![0, 1]));
        assert_eq!(result.path_to(2), None);
    }

    #[test]
    fn test_options_from_partial_config() {
        let options: DijkstraOptions = serde_json::from_str(r#"{"no_edge": "infinity"}"#).unwrap();
        assert_eq!(options.no_edge, NoEdge::Infinity);
        assert!(options.validate_weights);
        assert!(options.stop_when_unreachable);
    }

    #[test]
    fn test_options_roundtrip_defaults() {
        let json = serde_json::to_string(&DijkstraOptions::default()).unwrap();
        let back: DijkstraOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(back, DijkstraOptions::default());
    }

    #[test]
    fn test_symmetrize_mirrors_one_way_edges() {
        let inf = f64::INFINITY;
        let mut zero = vec![0.0, 7.0, 4.0, 0.0];
        symmetrize(&mut zero, 2, NoEdge::Zero);
        assert_eq!(zero, vec![0.0, 4.0, 4.0, 0.0]);

        let mut sparse = vec![inf, 0.0, inf, inf];
        symmetrize(&mut sparse, 2, NoEdge::Infinity);
        assert_eq!(sparse, vec![inf, 0.0, 0.0, inf]);
    }

    #[test]
    fn test_no_edge_sentinels() {
        assert!(!NoEdge::Zero.is_edge(NoEdge::Zero.sentinel()));
        assert!(!NoEdge::Infinity.is_edge(NoEdge::Infinity.sentinel()));
        assert!(NoEdge::Infinity.is_edge(0.0));
        assert!(NoEdge::Zero.is_edge(f64::INFINITY));
    }
}
