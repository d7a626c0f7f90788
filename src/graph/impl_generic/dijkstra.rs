//! Dijkstra's algorithm for single-source shortest paths on a dense matrix.
//!
//! Uses a linear scan over unvisited vertices instead of a heap, which is
//! O(V) per selection and O(V^2) overall. Requires non-negative edge weights.
//! Implemented sequentially at API boundary (inherently sequential algorithm).

use numr::error::Result;
use numr::runtime::{Runtime, RuntimeClient};
use tracing::{debug, trace};

use crate::graph::traits::types::{DenseGraph, DijkstraOptions, DistanceVector};

use super::helpers::{extract_dense_weights, validate_node, validate_square, validate_weights};

/// Dense Dijkstra over a [`DenseGraph`].
///
/// Time: O(V^2)
pub fn dense_dijkstra_impl<R, C>(
    _client: &C,
    graph: &DenseGraph<R>,
    source: usize,
    options: &DijkstraOptions,
) -> Result<DistanceVector>
where
    R: Runtime,
    C: RuntimeClient<R>,
{
    validate_node(source, graph.num_nodes, "source vertex")?;

    // Extract the matrix at API boundary (one time, not in loop)
    let (weights, n) = extract_dense_weights(graph)?;
    let rows: Vec<&[f64]> = weights.chunks_exact(n).collect();

    dijkstra_checked(&rows, n, source, options)
}

/// Validate `n` rows of `n` weights and run the scan over them in place.
///
/// Every check happens before the first distance is written. The rows are
/// read directly; extra memory is O(V).
pub(crate) fn dijkstra_checked<Row: AsRef<[f64]>>(
    rows: &[Row],
    n: usize,
    source: usize,
    options: &DijkstraOptions,
) -> Result<DistanceVector> {
    validate_square(rows, n)?;
    validate_node(source, n, "source vertex")?;
    if options.validate_weights {
        validate_weights(rows, options.no_edge)?;
    }
    Ok(dijkstra_scan(rows, n, source, options))
}

/// Find the unvisited vertex with the smallest finite distance.
///
/// Strict `<` keeps the first minimum, so the lowest index wins ties.
fn select_min(distances: &[f64], visited: &[bool]) -> Option<usize> {
    let mut best: Option<usize> = None;
    let mut best_dist = f64::INFINITY;
    for (v, (&d, &seen)) in distances.iter().zip(visited).enumerate() {
        if !seen && d < best_dist {
            best_dist = d;
            best = Some(v);
        }
    }
    best
}

/// Core label-setting loop. Inputs must already be validated.
fn dijkstra_scan<Row: AsRef<[f64]>>(
    rows: &[Row],
    n: usize,
    source: usize,
    options: &DijkstraOptions,
) -> DistanceVector {
    debug!(vertex_count = n, source, "dense dijkstra start");

    let mut distances = vec![f64::INFINITY; n];
    let mut predecessors: Vec<Option<usize>> = vec![None; n];
    let mut visited = vec![false; n];
    let mut visit_order = Vec::with_capacity(n);
    distances[source] = 0.0;

    let mut stopped_early = false;
    for _ in 0..n.saturating_sub(1) {
        let u = match select_min(&distances, &visited) {
            Some(u) => u,
            None if options.stop_when_unreachable => {
                stopped_early = true;
                break;
            }
            // Every remaining vertex is at infinity; relaxing changes nothing.
            None => continue,
        };

        visited[u] = true;
        visit_order.push(u);
        trace!(vertex = u, distance = distances[u], "finalized");

        // Relax the row of u
        let row = rows[u].as_ref();
        let dist_u = distances[u];
        for (v, &w) in row.iter().enumerate() {
            if visited[v] || !options.no_edge.is_edge(w) {
                continue;
            }
            let new_dist = dist_u + w;
            if new_dist < distances[v] {
                distances[v] = new_dist;
                predecessors[v] = Some(u);
            }
        }
    }

    // The last vertex needs no relaxation, but it is finalized all the same.
    if !stopped_early {
        if let Some(last) = select_min(&distances, &visited) {
            visit_order.push(last);
            trace!(vertex = last, distance = distances[last], "finalized");
        }
    }

    let reachable = distances.iter().filter(|d| d.is_finite()).count();
    debug!(reachable, stopped_early, "dense dijkstra done");

    DistanceVector {
        source,
        distances,
        predecessors,
        visit_order,
    }
}
