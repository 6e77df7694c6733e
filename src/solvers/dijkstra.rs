use crate::graph::{GraphError, RouteGraph};
use crate::models::PathResult;

/// Dijkstra with a linear-scan frontier.
///
/// The graph is a short chain, so an O(n^2) scan does fine without a heap.
/// Ties on the tentative distance resolve to the lowest node index, which
/// keeps the visit order deterministic.
pub fn solve(graph: &RouteGraph, start: usize, end: usize) -> Result<PathResult, GraphError> {
    super::check_endpoints(graph, start, end)?;

    let n = graph.node_count();
    let mut dist = vec![f64::INFINITY; n];
    let mut prev: Vec<Option<usize>> = vec![None; n];
    let mut visited = vec![false; n];
    dist[start] = 0.0;

    for _ in 0..n {
        // Stop once every remaining node is unreachable.
        let Some(u) = next_unvisited(&dist, &visited) else {
            break;
        };
        visited[u] = true;

        for (to, weight) in graph.edges_from(u) {
            if dist[u] + weight < dist[to] {
                dist[to] = dist[u] + weight;
                prev[to] = Some(u);
            }
        }
    }

    Ok(super::reconstruct(&prev, end, dist[end]))
}

/// Unvisited node with the smallest tentative distance; the ascending scan
/// with a strict comparison makes the lowest index win ties.
fn next_unvisited(dist: &[f64], visited: &[bool]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for j in 0..dist.len() {
        if visited[j] {
            continue;
        }
        match best {
            Some(u) if dist[j] < dist[u] => best = Some(j),
            None => best = Some(j),
            _ => {}
        }
    }
    best.filter(|&u| dist[u].is_finite())
}
