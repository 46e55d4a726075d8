use serde::{Deserialize, Serialize};

use crate::Coordinate;

/// A rectangular map viewport described by two opposite corners.
///
/// The same rectangle can be read in edge form through the accessors
/// (`north` is the north-east corner's latitude, and so on). A boundary
/// whose east edge is numerically smaller than its west edge wraps around
/// the ±180° antimeridian.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoBoundary {
    pub north_east_corner: Coordinate,
    pub south_west_corner: Coordinate,
}

impl GeoBoundary {
    pub fn new(north_east_corner: Coordinate, south_west_corner: Coordinate) -> Self {
        Self {
            north_east_corner,
            south_west_corner,
        }
    }

    /// Builds the same rectangle from its four edges.
    pub fn from_edges(north: f64, south: f64, east: f64, west: f64) -> Self {
        Self {
            north_east_corner: Coordinate::new(north, east),
            south_west_corner: Coordinate::new(south, west),
        }
    }

    pub fn north(&self) -> f64 {
        self.north_east_corner.lat
    }

    pub fn south(&self) -> f64 {
        self.south_west_corner.lat
    }

    pub fn east(&self) -> f64 {
        self.north_east_corner.lng
    }

    pub fn west(&self) -> f64 {
        self.south_west_corner.lng
    }

    pub fn crosses_dateline(&self) -> bool {
        self.east() < self.west()
    }

    /// Whether a point lies strictly inside the boundary. Points exactly on
    /// an edge are outside.
    ///
    /// When the boundary wraps the antimeridian the point is compared
    /// against the half of the rectangle matching its own longitude sign,
    /// with ±180 standing in for the far edge so the plain comparisons keep
    /// working. The longitude-sign test is a known approximation (it splits
    /// at the prime meridian, not the dateline) and is kept as is for
    /// compatibility.
    pub fn contains(&self, location: Coordinate) -> bool {
        let crosses_dateline = self.crosses_dateline();
        let location_in_western_hemisphere = location.lng < 0.0;

        let east_edge = if crosses_dateline && !location_in_western_hemisphere {
            180.0
        } else {
            self.east()
        };
        let west_edge = if crosses_dateline && location_in_western_hemisphere {
            -180.0
        } else {
            self.west()
        };

        location.lng < east_edge
            && location.lat < self.north()
            && location.lng > west_edge
            && location.lat > self.south()
    }
}

/// Containment with an optional boundary: no boundary means nothing is
/// contained. Degenerate rectangles are not rejected, they just contain
/// nothing.
pub fn is_location_within_boundary(location: Coordinate, boundary: Option<&GeoBoundary>) -> bool {
    match boundary {
        Some(boundary) => boundary.contains(location),
        None => false,
    }
}
