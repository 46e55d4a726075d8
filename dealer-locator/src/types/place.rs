use geobounds::Coordinate;

/// A geocoder hit: a place name with its map location.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub name: String,
    pub location: Coordinate,
}

impl Place {
    pub fn new(name: String, location: Coordinate) -> Self {
        Self { name, location }
    }
}
