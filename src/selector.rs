use crate::graph::{GraphError, RouteGraph};
use crate::models::{Algorithm, AlgorithmResult};

/// Relative tolerance under which two solver totals count as the same
/// distance. The algorithms accumulate edge weights in different orders,
/// so the last few bits of the totals may disagree on identical paths.
const DISTANCE_EPSILON: f64 = 1e-6;

/// Run the three solvers over one immutable graph.
///
/// The solvers share no mutable state, so they fan out on the rayon pool;
/// results come back in preference order.
pub fn run_all(
    graph: &RouteGraph,
    start: usize,
    end: usize,
) -> Result<[AlgorithmResult; 3], GraphError> {
    graph.check_node(start)?;
    graph.check_node(end)?;

    let (dijkstra, (astar, bellman_ford)) = rayon::join(
        || Algorithm::Dijkstra.solve(graph, start, end),
        || {
            rayon::join(
                || Algorithm::AStar.solve(graph, start, end),
                || Algorithm::BellmanFord.solve(graph, start, end),
            )
        },
    );

    Ok([
        AlgorithmResult {
            algorithm: Algorithm::Dijkstra,
            result: dijkstra?,
        },
        AlgorithmResult {
            algorithm: Algorithm::AStar,
            result: astar?,
        },
        AlgorithmResult {
            algorithm: Algorithm::BellmanFord,
            result: bellman_ford?,
        },
    ])
}

/// Pick the minimum-cost result. Totals within [`DISTANCE_EPSILON`]
/// (relative) of the minimum count as tied and fall back to the fixed
/// preference order: Dijkstra, then A*, then Bellman-Ford.
pub fn select(results: &[AlgorithmResult; 3]) -> &AlgorithmResult {
    let min_distance = results
        .iter()
        .map(|r| r.result.total_distance_m)
        .fold(f64::INFINITY, f64::min);

    results
        .iter()
        .filter(|r| within_epsilon(r.result.total_distance_m, min_distance))
        .min_by_key(|r| preference_rank(r.algorithm))
        .unwrap_or(&results[0])
}

fn preference_rank(algorithm: Algorithm) -> usize {
    Algorithm::PREFERENCE
        .iter()
        .position(|&candidate| candidate == algorithm)
        .unwrap_or(Algorithm::PREFERENCE.len())
}

fn within_epsilon(a: f64, b: f64) -> bool {
    a == b || (a - b).abs() <= DISTANCE_EPSILON * a.abs().max(b.abs()).max(1.0)
}
