use serde::{Deserialize, Serialize};

use crate::{Coordinate, GeoBoundary};

/// Edge-form map bounds whose edges are individually optional.
///
/// `create_map_bounds` cannot place a corner when the target point shares a
/// latitude or a longitude with the center, and leaves the affected edges
/// `None` instead of inventing a zero. Callers that need a full rectangle
/// go through [`LatLngBounds::to_boundary`] and decide what a partial
/// result means for them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LatLngBounds {
    pub north: Option<f64>,
    pub south: Option<f64>,
    pub east: Option<f64>,
    pub west: Option<f64>,
}

impl LatLngBounds {
    pub fn is_complete(&self) -> bool {
        self.north.is_some() && self.south.is_some() && self.east.is_some() && self.west.is_some()
    }

    /// Corner form of the rectangle, if every edge is set.
    pub fn to_boundary(&self) -> Option<GeoBoundary> {
        match (self.north, self.south, self.east, self.west) {
            (Some(north), Some(south), Some(east), Some(west)) => {
                Some(GeoBoundary::from_edges(north, south, east, west))
            }
            _ => None,
        }
    }

    /// Midpoint of the rectangle, if complete.
    pub fn center(&self) -> Option<Coordinate> {
        match (self.north, self.south, self.east, self.west) {
            (Some(north), Some(south), Some(east), Some(west)) => Some(Coordinate::new(
                (north + south) / 2.0,
                (east + west) / 2.0,
            )),
            _ => None,
        }
    }

    /// `(latitude span, longitude span)`, if complete.
    pub fn span(&self) -> Option<(f64, f64)> {
        match (self.north, self.south, self.east, self.west) {
            (Some(north), Some(south), Some(east), Some(west)) => {
                Some((north - south, east - west))
            }
            _ => None,
        }
    }
}

/// Smallest rectangle centered on `center` that still shows
/// `point_to_include`: the point pins the corner of its quadrant and the
/// opposite corner is its reflection through the center.
///
/// Quadrant comparisons are strict, so a point sharing an axis with the
/// center yields a partial result. Longitudes are not wrapped or clamped; a
/// reflected edge may leave [-180, 180] and the map surface normalizes it
/// when fitting.
pub fn create_map_bounds(center: Coordinate, point_to_include: Coordinate) -> LatLngBounds {
    let point_is_east_of_center = point_to_include.lng > center.lng;
    let point_is_west_of_center = point_to_include.lng < center.lng;
    let point_is_north_of_center = point_to_include.lat > center.lat;
    let point_is_south_of_center = point_to_include.lat < center.lat;

    let mut bounds = LatLngBounds::default();

    if point_is_east_of_center && point_is_north_of_center {
        // Point sits near the NORTHEAST corner of the map.
        let north = point_to_include.lat;
        let east = point_to_include.lng;

        bounds.north = Some(north);
        bounds.east = Some(east);
        bounds.south = Some(center.lat - (north - center.lat));
        bounds.west = Some(center.lng - (east - center.lng));
    }

    if point_is_west_of_center && point_is_south_of_center {
        // Point sits near the SOUTHWEST corner of the map.
        let west = point_to_include.lng;
        let south = point_to_include.lat;

        bounds.west = Some(west);
        bounds.south = Some(south);
        bounds.north = Some(center.lat + (center.lat - south));
        bounds.east = Some(center.lng + (center.lng - west));
    }

    if point_is_west_of_center && point_is_north_of_center {
        // Point sits near the NORTHWEST corner of the map.
        let west = point_to_include.lng;
        let north = point_to_include.lat;

        bounds.west = Some(west);
        bounds.north = Some(north);
        bounds.south = Some(center.lat - (north - center.lat));
        bounds.east = Some(center.lng - (west - center.lng));
    }

    if point_is_south_of_center && point_is_east_of_center {
        // Point sits near the SOUTHEAST corner of the map.
        let east = point_to_include.lng;
        let south = point_to_include.lat;

        bounds.east = Some(east);
        bounds.south = Some(south);
        bounds.west = Some(center.lng - (east - center.lng));
        bounds.north = Some(center.lat - (south - center.lat));
    }

    bounds
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete(bounds: LatLngBounds) -> (f64, f64, f64, f64) {
        (
            bounds.north.unwrap(),
            bounds.south.unwrap(),
            bounds.east.unwrap(),
            bounds.west.unwrap(),
        )
    }

    #[test]
    fn test_northeast_point() {
        let bounds = create_map_bounds(Coordinate::new(0.0, 0.0), Coordinate::new(10.0, 10.0));
        assert_eq!(complete(bounds), (10.0, -10.0, 10.0, -10.0));
    }

    #[test]
    fn test_southwest_point() {
        let bounds = create_map_bounds(Coordinate::new(0.0, 0.0), Coordinate::new(-5.0, -5.0));
        assert_eq!(complete(bounds), (5.0, -5.0, 5.0, -5.0));
    }

    #[test]
    fn test_northwest_point() {
        let bounds = create_map_bounds(Coordinate::new(2.0, 3.0), Coordinate::new(6.0, -1.0));
        assert_eq!(complete(bounds), (6.0, -2.0, 7.0, -1.0));
    }

    #[test]
    fn test_southeast_point() {
        let bounds = create_map_bounds(Coordinate::new(2.0, 3.0), Coordinate::new(-2.0, 9.0));
        assert_eq!(complete(bounds), (6.0, -2.0, 9.0, -3.0));
    }

    #[test]
    fn test_result_is_centered_on_the_center() {
        let center = Coordinate::new(36.9596054, -122.0564889);
        let points = [
            Coordinate::new(37.2, -121.8),
            Coordinate::new(36.1, -123.0),
            Coordinate::new(37.5, -122.5),
            Coordinate::new(36.2, -121.5),
        ];

        for point in points {
            let bounds = create_map_bounds(center, point);
            let midpoint = bounds.center().expect("bounds should be complete");
            assert!((midpoint.lat - center.lat).abs() < 1e-9);
            assert!((midpoint.lng - center.lng).abs() < 1e-9);

            // The target point sits exactly on the pinned corner, so the
            // closed rectangle contains it.
            let (north, south, east, west) = complete(bounds);
            assert!(south <= point.lat && point.lat <= north);
            assert!(west <= point.lng && point.lng <= east);
        }
    }

    #[test]
    fn test_point_on_center_latitude_leaves_bounds_unset() {
        let bounds = create_map_bounds(Coordinate::new(5.0, 5.0), Coordinate::new(5.0, 9.0));
        assert!(!bounds.is_complete());
        assert_eq!(bounds.north, None);
        assert_eq!(bounds.south, None);
        assert_eq!(bounds.east, None);
        assert_eq!(bounds.west, None);
        assert_eq!(bounds.to_boundary(), None);
        assert_eq!(bounds.span(), None);
    }

    #[test]
    fn test_point_equal_to_center_leaves_everything_unset() {
        let center = Coordinate::new(5.0, 5.0);
        let bounds = create_map_bounds(center, center);
        assert_eq!(bounds, LatLngBounds::default());
    }

    #[test]
    fn test_reflected_longitude_is_not_clamped() {
        // Reflecting a point through a center near the antimeridian may
        // push an edge beyond 180; that is left to the map surface.
        let bounds = create_map_bounds(Coordinate::new(0.0, 170.0), Coordinate::new(-3.0, 150.0));
        assert_eq!(complete(bounds), (3.0, -3.0, 190.0, 150.0));
    }
}
