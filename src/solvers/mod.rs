pub mod astar;
pub mod bellman_ford;
pub mod dijkstra;

use crate::graph::{GraphError, RouteGraph};
use crate::models::{Algorithm, PathResult};

impl Algorithm {
    pub fn solve(
        self,
        graph: &RouteGraph,
        start: usize,
        end: usize,
    ) -> Result<PathResult, GraphError> {
        match self {
            Algorithm::Dijkstra => dijkstra::solve(graph, start, end),
            Algorithm::AStar => astar::solve(graph, start, end),
            Algorithm::BellmanFord => bellman_ford::solve(graph, start, end),
        }
    }
}

fn check_endpoints(graph: &RouteGraph, start: usize, end: usize) -> Result<(), GraphError> {
    graph.check_node(start)?;
    graph.check_node(end)
}

/// Walk predecessor links back from `end` and reverse into a forward path.
/// A destination with an infinite tentative distance was never reached and
/// reports as unreachable.
fn reconstruct(prev: &[Option<usize>], end: usize, total_distance_m: f64) -> PathResult {
    if !total_distance_m.is_finite() {
        return PathResult::unreachable();
    }

    let mut path = vec![end];
    let mut current = end;
    while let Some(parent) = prev[current] {
        path.push(parent);
        current = parent;
    }
    path.reverse();

    PathResult {
        path,
        total_distance_m,
    }
}
