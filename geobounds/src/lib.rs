mod boundary;
mod bounds;
mod coordinate;

pub use boundary::{is_location_within_boundary, GeoBoundary};
pub use bounds::{create_map_bounds, LatLngBounds};
pub use coordinate::{cartesian_distance, Coordinate};
