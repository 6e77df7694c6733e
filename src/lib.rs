pub mod alternate;
pub mod error;
pub mod geo;
pub mod graph;
pub mod models;
pub mod presentation;
pub mod selector;
pub mod solvers;

use crate::error::CompareError;
use crate::graph::RouteGraph;
use crate::models::{Coordinate, RouteComparison};

/// Run the three shortest-path solvers over one waypoint polyline, pick
/// the winner and assemble the displayable route list.
///
/// The route always runs from the first waypoint to the last, matching the
/// orientation of the upstream provider's polyline. Polyline decoding and
/// the provider call itself stay outside this crate; callers hand in
/// already-decoded coordinates.
pub fn compare(coordinates: &[Coordinate]) -> Result<RouteComparison, CompareError> {
    let graph = RouteGraph::from_coordinates(coordinates)?;
    let start = 0;
    let end = graph.node_count() - 1;

    let results = selector::run_all(&graph, start, end)?;
    for tagged in &results {
        tracing::debug!(
            "{} finished: {:.1} m over {} nodes",
            tagged.algorithm,
            tagged.result.total_distance_m,
            tagged.result.path.len()
        );
    }

    let best = selector::select(&results);
    if !best.result.is_reachable() {
        return Err(CompareError::NoRoute);
    }
    tracing::info!(
        "selected {} route: {:.1} m over {} nodes",
        best.algorithm,
        best.result.total_distance_m,
        best.result.path.len()
    );

    Ok(presentation::assemble(best, coordinates))
}
