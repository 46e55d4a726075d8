use dealer_locator::{Geocoder, Place};
use geobounds::Coordinate;

/// Offline stand-in for a places service: a fixed table of city centers
/// on the US west coast.
pub struct StaticGeocoder {
    places: Vec<(&'static str, f64, f64)>,
}

impl StaticGeocoder {
    pub fn new() -> Self {
        Self {
            places: city_centers(),
        }
    }
}

impl Geocoder for StaticGeocoder {
    fn find_place(&mut self, query: &str) -> Option<Place> {
        let query = query.to_lowercase();
        self.places
            .iter()
            .find(|(name, _, _)| name.to_lowercase().contains(&query))
            .map(|(name, lat, lng)| Place::new(name.to_string(), Coordinate::new(*lat, *lng)))
    }

    fn suggest(&mut self, partial: &str) -> Vec<Place> {
        let partial = partial.to_lowercase();
        self.places
            .iter()
            .filter(|(name, _, _)| name.to_lowercase().starts_with(&partial))
            .take(5)
            .map(|(name, lat, lng)| Place::new(name.to_string(), Coordinate::new(*lat, *lng)))
            .collect()
    }
}

fn city_centers() -> Vec<(&'static str, f64, f64)> {
    vec![
        ("Santa Cruz, CA", 36.974117, -122.030792),
        ("Capitola, CA", 36.975210, -121.953294),
        ("Watsonville, CA", 36.910231, -121.756895),
        ("San Jose, CA", 37.338208, -121.886329),
        ("San Francisco, CA", 37.774929, -122.419416),
        ("Monterey, CA", 36.600238, -121.894676),
        ("Oakland, CA", 37.804364, -122.271114),
        ("Sacramento, CA", 38.581572, -121.494400),
        ("Los Angeles, CA", 34.052234, -118.243685),
        ("San Diego, CA", 32.715738, -117.161084),
        ("Portland, OR", 45.515232, -122.678385),
        ("Seattle, WA", 47.606209, -122.332071),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_place_is_case_insensitive() {
        let mut geocoder = StaticGeocoder::new();
        let place = geocoder.find_place("santa cruz").expect("city is listed");
        assert_eq!(place.name, "Santa Cruz, CA");
    }

    #[test]
    fn test_unknown_place_finds_nothing() {
        let mut geocoder = StaticGeocoder::new();
        assert!(geocoder.find_place("atlantis").is_none());
    }

    #[test]
    fn test_suggestions_complete_a_prefix() {
        let mut geocoder = StaticGeocoder::new();
        let suggestions = geocoder.suggest("San");
        let names: Vec<_> = suggestions.iter().map(|place| place.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Santa Cruz, CA", "San Jose, CA", "San Francisco, CA", "San Diego, CA"]
        );
    }
}
