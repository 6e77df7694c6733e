use crate::alternate;
use crate::models::{AlgorithmResult, Coordinate, RouteComparison, RoutePresentation};

/// Advisory modeling constants, not measured physics.
const AVG_SPEED_KMH: f64 = 40.0;
const KM_PER_LITER: f64 = 15.0;

const BEST_ROUTE_COLOR: &str = "#00f";
const ALTERNATE_ROUTE_COLOR: &str = "#FFA500";
const ALTERNATE_ALGORITHM_TAG: &str = "Fake Alternate";

/// Convert the winning result into the externally visible route list.
///
/// When selection leaves a single real route, a perpendicular-offset decoy
/// is appended so the display always offers two options; it reuses the
/// winner's metrics verbatim and carries a synthetic algorithm tag so no
/// consumer mistakes it for a second real route.
pub fn assemble(best: &AlgorithmResult, coordinates: &[Coordinate]) -> RouteComparison {
    let route: Vec<Coordinate> = best
        .result
        .path
        .iter()
        .map(|&idx| coordinates[idx])
        .collect();

    let meters = best.result.total_distance_m;
    let distance = format!("{:.2}", meters / 1000.0);
    let minutes = meters / (AVG_SPEED_KMH * 1000.0 / 3600.0) / 60.0;
    let time = format!("{minutes:.1}");
    let fuel = format!("{:.2}", meters / (KM_PER_LITER * 1000.0));

    let center = route
        .first()
        .copied()
        .unwrap_or(Coordinate { lat: 0.0, lon: 0.0 });

    let mut paths = vec![RoutePresentation {
        label: format!("Best Path ({})", best.algorithm),
        color: BEST_ROUTE_COLOR.to_string(),
        coordinates: route,
        distance: distance.clone(),
        time: time.clone(),
        fuel: fuel.clone(),
        algorithm: best.algorithm.to_string(),
    }];

    if paths.len() == 1 {
        let offset_coordinates = alternate::synthesize(&paths[0].coordinates);
        paths.push(RoutePresentation {
            label: "Alternate Route".to_string(),
            color: ALTERNATE_ROUTE_COLOR.to_string(),
            coordinates: offset_coordinates,
            distance,
            time,
            fuel,
            algorithm: ALTERNATE_ALGORITHM_TAG.to_string(),
        });
    }

    RouteComparison { center, paths }
}
