use serde::{Deserialize, Serialize};

/// A point on the map in decimal degrees: `lat` in `[-90, 90]`, `lng` in
/// `[-180, 180]`. Plain value type with no identity beyond its fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Straight-line distance in degree space, ignoring the curvature of the
/// earth. List sorting and the nearest-dealer threshold are calibrated in
/// these units, so this must stay planar.
pub fn cartesian_distance(a: Coordinate, b: Coordinate) -> f64 {
    ((a.lat - b.lat).powi(2) + (a.lng - b.lng).powi(2)).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_to_self_is_zero() {
        let here = Coordinate::new(-34.6, -58.4);
        assert_eq!(cartesian_distance(here, here), 0.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = Coordinate::new(36.95, -122.05);
        let b = Coordinate::new(37.33, -121.88);
        assert_eq!(cartesian_distance(a, b), cartesian_distance(b, a));
    }

    #[test]
    fn test_distance_matches_pythagoras() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(3.0, 4.0);
        assert!((cartesian_distance(a, b) - 5.0).abs() < 1e-12);
    }
}
