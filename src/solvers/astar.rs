use crate::geo::haversine_m;
use crate::graph::{GraphError, RouteGraph};
use crate::models::PathResult;

/// A* over the same relaxation loop as Dijkstra, with the frontier ranked
/// by `tentative distance + great-circle distance to the goal`.
///
/// The heuristic is admissible on a chain: the direct great-circle distance
/// never exceeds the along-chain distance, so the result stays optimal.
pub fn solve(graph: &RouteGraph, start: usize, end: usize) -> Result<PathResult, GraphError> {
    super::check_endpoints(graph, start, end)?;

    let n = graph.node_count();
    let goal = graph.coordinate(end);
    let heuristic: Vec<f64> = (0..n)
        .map(|i| haversine_m(graph.coordinate(i), goal))
        .collect();

    let mut dist = vec![f64::INFINITY; n];
    let mut prev: Vec<Option<usize>> = vec![None; n];
    let mut visited = vec![false; n];
    dist[start] = 0.0;

    for _ in 0..n {
        let Some(u) = next_unvisited(&dist, &heuristic, &visited) else {
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

/// Unvisited node minimizing `dist + heuristic`; lowest index wins ties,
/// same rule as the Dijkstra frontier.
fn next_unvisited(dist: &[f64], heuristic: &[f64], visited: &[bool]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for j in 0..dist.len() {
        if visited[j] {
            continue;
        }
        match best {
            Some(u) if dist[j] + heuristic[j] < dist[u] + heuristic[u] => best = Some(j),
            None => best = Some(j),
            _ => {}
        }
    }
    best.filter(|&u| dist[u].is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Coordinate;
    use crate::solvers::dijkstra;

    fn delhi_chain() -> Vec<Coordinate> {
        vec![
            Coordinate {
                lat: 28.70,
                lon: 77.10,
            },
            Coordinate {
                lat: 28.71,
                lon: 77.11,
            },
            Coordinate {
                lat: 28.72,
                lon: 77.12,
            },
        ]
    }

    #[test]
    fn walks_the_chain_forward() {
        let graph = RouteGraph::from_coordinates(&delhi_chain()).unwrap();
        let result = solve(&graph, 0, 2).unwrap();
        assert_eq!(result.path, vec![0, 1, 2]);
    }

    #[test]
    fn matches_dijkstra_total() {
        let graph = RouteGraph::from_coordinates(&delhi_chain()).unwrap();
        let astar = solve(&graph, 0, 2).unwrap();
        let reference = dijkstra::solve(&graph, 0, 2).unwrap();
        assert!((astar.total_distance_m - reference.total_distance_m).abs() < 1e-9);
    }

    #[test]
    fn heuristic_never_overestimates_on_a_chain() {
        let coordinates = delhi_chain();
        let graph = RouteGraph::from_coordinates(&coordinates).unwrap();
        let goal = graph.coordinate(2);

        for i in 0..graph.node_count() {
            let direct = haversine_m(graph.coordinate(i), goal);
            let along_chain = dijkstra::solve(&graph, i, 2).unwrap().total_distance_m;
            assert!(direct <= along_chain + 1e-9);
        }
    }
}
