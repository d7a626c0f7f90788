//! Plain-text rendering of shortest path results.

use super::traits::types::DistanceVector;

/// Render a `vertex -> distance` table, one vertex per line.
///
/// Unreachable vertices show as `INF`.
pub fn format_distance_table(result: &DistanceVector) -> String {
    let mut out = String::from("Vertex\tDistance from source\n");
    for (v, d) in result.distances().iter().enumerate() {
        let line = if d.is_finite() {
            format!("{v}\t{d}\n")
        } else {
            format!("{v}\tINF\n")
        };
        out.push_str(&line);
    }
    out
}

/// Render the path from the source to `target` as `0 -> 2(5) -> 1(8)`.
///
/// Each hop after the source carries its cumulative distance. An unreachable
/// target renders as `3(unreached)` and an out-of-range one as `9(unknown)`.
pub fn format_path(result: &DistanceVector, target: usize) -> String {
    if target >= result.len() {
        return format!("{target}(unknown)");
    }

    let Some(path) = result.path_to(target) else {
        return format!("{target}(unreached)");
    };

    path.iter()
        .enumerate()
        .map(|(i, &v)| {
            if i == 0 {
                v.to_string()
            } else {
                format!("{v}({})", result.distances()[v])
            }
        })
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Render the path to every vertex, one [`format_path`] line per vertex in
/// index order.
pub fn format_all_paths(result: &DistanceVector) -> String {
    (0..result.len())
        .map(|v| format_path(result, v) + "\n")
        .collect()
}
