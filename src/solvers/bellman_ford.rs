use crate::graph::{GraphError, RouteGraph};
use crate::models::PathResult;

/// Bellman-Ford: `n - 1` relaxation passes over every stored edge, no
/// frontier bookkeeping. Edge weights here are never negative, so this
/// serves as a cross-check on the two informed searches.
pub fn solve(graph: &RouteGraph, start: usize, end: usize) -> Result<PathResult, GraphError> {
    super::check_endpoints(graph, start, end)?;

    let n = graph.node_count();
    let mut dist = vec![f64::INFINITY; n];
    let mut prev: Vec<Option<usize>> = vec![None; n];
    dist[start] = 0.0;

    for _ in 1..n {
        for u in 0..n {
            for (to, weight) in graph.edges_from(u) {
                if dist[u] + weight < dist[to] {
                    dist[to] = dist[u] + weight;
                    prev[to] = Some(u);
                }
            }
        }
    }

    Ok(super::reconstruct(&prev, end, dist[end]))
}
