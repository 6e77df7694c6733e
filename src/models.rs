use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

/// Identity of a shortest-path solver.
///
/// Declaration order is the selector's preference order when totals tie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Algorithm {
    Dijkstra,
    AStar,
    BellmanFord,
}

impl Algorithm {
    /// Tie-break ranking: trust order, not performance order.
    pub const PREFERENCE: [Algorithm; 3] =
        [Algorithm::Dijkstra, Algorithm::AStar, Algorithm::BellmanFord];

    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Dijkstra => "Dijkstra",
            Algorithm::AStar => "A*",
            Algorithm::BellmanFord => "Bellman-Ford",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of one solve: node indices from start to end plus the summed
/// edge weight. Unreachable destinations report an empty path and an
/// infinite distance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathResult {
    pub path: Vec<usize>,
    pub total_distance_m: f64,
}

impl PathResult {
    pub fn unreachable() -> Self {
        Self {
            path: Vec::new(),
            total_distance_m: f64::INFINITY,
        }
    }

    pub fn is_reachable(&self) -> bool {
        self.total_distance_m.is_finite()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmResult {
    pub algorithm: Algorithm,
    #[serde(flatten)]
    pub result: PathResult,
}

/// One displayable route. `distance`, `time` and `fuel` are pre-formatted
/// strings (km to 2 decimals, minutes to 1, liters to 2) because they are
/// advisory estimates, not data the consumer should compute with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutePresentation {
    pub label: String,
    pub color: String,
    pub coordinates: Vec<Coordinate>,
    pub distance: String,
    pub time: String,
    pub fuel: String,
    pub algorithm: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteComparison {
    pub center: Coordinate,
    pub paths: Vec<RoutePresentation>,
}
