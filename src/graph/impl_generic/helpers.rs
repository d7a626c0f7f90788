//! Shared validation and extraction helpers for dense graph algorithms.

use numr::dtype::DType;
use numr::error::{Error, Result};
use numr::runtime::Runtime;

use crate::graph::traits::types::{DenseGraph, NoEdge};

/// Validate that a vertex count can back a graph.
pub fn validate_vertex_count(vertex_count: usize) -> Result<()> {
    if vertex_count == 0 {
        return Err(Error::InvalidArgument {
            arg: "vertex_count",
            reason: "vertexCount must be positive".to_string(),
        });
    }
    Ok(())
}

/// Validate that a node index is within bounds.
pub fn validate_node(node: usize, num_nodes: usize, name: &str) -> Result<()> {
    if node >= num_nodes {
        return Err(Error::InvalidArgument {
            arg: "node",
            reason: format!("{name} out of range: {node} >= vertexCount {num_nodes}"),
        });
    }
    Ok(())
}

fn not_square(detail: String) -> Error {
    Error::InvalidArgument {
        arg: "graph",
        reason: format!("graph must be a square matrix of size vertexCount: {detail}"),
    }
}

/// Check that `rows` holds exactly `n` rows of exactly `n` entries each.
pub fn validate_square<Row: AsRef<[f64]>>(rows: &[Row], n: usize) -> Result<()> {
    if rows.len() != n {
        return Err(not_square(format!("got {} rows, expected {n}", rows.len())));
    }
    for (i, row) in rows.iter().enumerate() {
        let len = row.as_ref().len();
        if len != n {
            return Err(not_square(format!("row {i} has {len} entries, expected {n}")));
        }
    }
    Ok(())
}

/// Flatten row slices into a row-major `n * n` buffer.
///
/// Fails unless there are exactly `n` rows of exactly `n` entries each.
pub fn flatten_rows<Row: AsRef<[f64]>>(rows: &[Row], n: usize) -> Result<Vec<f64>> {
    validate_square(rows, n)?;
    let mut flat = Vec::with_capacity(n * n);
    for row in rows {
        flat.extend_from_slice(row.as_ref());
    }
    Ok(flat)
}

/// Extract the weight matrix of a [`DenseGraph`] as a row-major CPU vec.
///
/// Only used at the API boundary; the scan itself is sequential.
/// Returns (weights, num_nodes).
pub fn extract_dense_weights<R: Runtime>(graph: &DenseGraph<R>) -> Result<(Vec<f64>, usize)> {
    let shape = graph.weights.shape();
    let n = graph.num_nodes;
    if shape.len() != 2 || shape[0] != n || shape[1] != n {
        return Err(not_square(format!("tensor shape {shape:?}, expected [{n}, {n}]")));
    }

    let dtype = graph.weights.dtype();
    if dtype != DType::F64 {
        return Err(Error::UnsupportedDType {
            dtype,
            op: "dense_dijkstra (only F64 supported)",
        });
    }

    let weights: Vec<f64> = graph.weights.contiguous().to_vec();
    Ok((weights, n))
}

/// Reject weights the label-setting scan cannot handle.
///
/// Negative and NaN weights are always rejected. `+inf` is only legal as the
/// [`NoEdge::Infinity`] sentinel.
pub fn validate_weights<Row: AsRef<[f64]>>(rows: &[Row], no_edge: NoEdge) -> Result<()> {
    for (u, row) in rows.iter().enumerate() {
        for (v, &w) in row.as_ref().iter().enumerate() {
            let bad = w.is_nan()
                || w < 0.0
                || (w == f64::INFINITY && no_edge != NoEdge::Infinity);
            if bad {
                return Err(Error::InvalidArgument {
                    arg: "weight",
                    reason: format!(
                        "weight({u}, {v}) = {w} is not a valid non-negative edge weight"
                    ),
                });
            }
        }
    }
    Ok(())
}
