use crate::models::Coordinate;

/// Lateral displacement of the decoy route in coordinate degrees, roughly
/// 100 m of latitude.
pub const OFFSET_DEG: f64 = 0.001;

/// Shift a route sideways so a single real route still renders as two
/// visually distinct options.
///
/// Endpoints have no two-sided neighbor to take a direction from, so they
/// move straight north by [`OFFSET_DEG`]. Interior points move along the
/// unit perpendicular of the chord between their immediate neighbors. A
/// zero-length chord leaves the point unshifted rather than dividing by
/// zero.
pub fn synthesize(coordinates: &[Coordinate]) -> Vec<Coordinate> {
    coordinates
        .iter()
        .enumerate()
        .map(|(idx, &coordinate)| {
            if idx == 0 || idx == coordinates.len() - 1 {
                return Coordinate {
                    lat: coordinate.lat + OFFSET_DEG,
                    lon: coordinate.lon,
                };
            }

            let prev = coordinates[idx - 1];
            let next = coordinates[idx + 1];
            let dx = next.lon - prev.lon;
            let dy = next.lat - prev.lat;
            let perp_lat = -dx;
            let perp_lon = dy;
            let length = (perp_lat * perp_lat + perp_lon * perp_lon).sqrt();
            if length == 0.0 {
                tracing::debug!("zero-length chord around waypoint {idx}, leaving it in place");
                return coordinate;
            }

            Coordinate {
                lat: coordinate.lat + OFFSET_DEG * perp_lat / length,
                lon: coordinate.lon + OFFSET_DEG * perp_lon / length,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_shift_north_by_offset() {
        let route = vec![
            Coordinate { lat: 0.0, lon: 0.0 },
            Coordinate { lat: 0.0, lon: 1.0 },
            Coordinate { lat: 0.0, lon: 2.0 },
        ];
        let shifted = synthesize(&route);

        assert_eq!(shifted[0], Coordinate { lat: OFFSET_DEG, lon: 0.0 });
        assert_eq!(shifted[2], Coordinate { lat: OFFSET_DEG, lon: 2.0 });
    }

    #[test]
    fn interior_point_shifts_perpendicular_to_the_chord() {
        let route = vec![
            Coordinate { lat: 0.0, lon: 0.0 },
            Coordinate { lat: 0.0, lon: 1.0 },
            Coordinate { lat: 0.0, lon: 2.0 },
        ];
        let shifted = synthesize(&route);

        // Chord (0,0) -> (0,2) runs due east; the perpendicular is pure
        // latitude with magnitude OFFSET_DEG.
        let dlat = shifted[1].lat - route[1].lat;
        let dlon = shifted[1].lon - route[1].lon;
        assert!((dlat.abs() - OFFSET_DEG).abs() < 1e-12);
        assert_eq!(dlon, 0.0);

        let magnitude = (dlat * dlat + dlon * dlon).sqrt();
        assert!((magnitude - OFFSET_DEG).abs() < 1e-12);
    }

    #[test]
    fn two_point_route_shifts_both_endpoints() {
        let route = vec![
            Coordinate { lat: 45.0, lon: 5.0 },
            Coordinate { lat: 45.1, lon: 5.1 },
        ];
        let shifted = synthesize(&route);

        assert_eq!(shifted.len(), 2);
        for (before, after) in route.iter().zip(&shifted) {
            assert_eq!(after.lat, before.lat + OFFSET_DEG);
            assert_eq!(after.lon, before.lon);
        }
    }

    #[test]
    fn zero_length_chord_leaves_point_unshifted() {
        // prev == next around the middle point.
        let route = vec![
            Coordinate { lat: 1.0, lon: 1.0 },
            Coordinate { lat: 2.0, lon: 2.0 },
            Coordinate { lat: 1.0, lon: 1.0 },
        ];
        let shifted = synthesize(&route);
        assert_eq!(shifted[1], route[1]);
    }

    #[test]
    fn shifted_route_never_coincides_with_the_original() {
        let route = vec![
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
        ];
        let shifted = synthesize(&route);
        for (before, after) in route.iter().zip(&shifted) {
            assert_ne!(before, after);
        }
    }
}
