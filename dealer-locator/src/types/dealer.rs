use geobounds::Coordinate;

/// Represents a point of sale with its address, contact details, and map
/// location.
#[derive(Debug, Clone, PartialEq)]
pub struct Dealer {
    pub id: String,
    pub name: String,
    pub addr1: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub online: bool,
    pub location: Coordinate,
}

impl Dealer {
    /// Google Maps directions link built from the dealer's address fields.
    pub fn directions_url(&self) -> String {
        let query = [
            self.addr1.as_str(),
            self.name.as_str(),
            self.city.as_str(),
            self.state.as_str(),
            self.country.as_str(),
        ]
        .join(" ");

        format!(
            "https://www.google.com/maps/dir/?api=1&destination={}",
            urlencoding::encode(query.trim())
        )
    }

    /// One-line street address for list cards, with the comma only when
    /// both halves are present.
    pub fn short_address(&self) -> String {
        let street = format!("{} {}", self.addr1, self.city);
        let street = street.trim();
        let region = format!("{} {}", self.state, self.zip);
        let region = region.trim();

        if !street.is_empty() && !region.is_empty() {
            format!("{}, {}", street, region)
        } else {
            format!("{}{}", street, region)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dealer() -> Dealer {
        Dealer {
            id: "SC-01".to_string(),
            name: "Surf City Cycles".to_string(),
            addr1: "131 Center St".to_string(),
            city: "Santa Cruz".to_string(),
            state: "CA".to_string(),
            zip: "95060".to_string(),
            country: "USA".to_string(),
            phone: Some("831-555-0131".to_string()),
            website: Some("https://surfcitycycles.example.com".to_string()),
            online: true,
            location: Coordinate::new(36.9722, -122.0264),
        }
    }

    #[test]
    fn test_directions_url_encodes_the_address() {
        let url = dealer().directions_url();
        assert!(url.starts_with("https://www.google.com/maps/dir/?api=1&destination="));
        assert!(url.contains("131%20Center%20St%20Surf%20City%20Cycles"));
        assert!(!url.contains(' '));
    }

    #[test]
    fn test_short_address_with_all_fields() {
        assert_eq!(
            dealer().short_address(),
            "131 Center St Santa Cruz, CA 95060"
        );
    }

    #[test]
    fn test_short_address_without_region() {
        let mut dealer = dealer();
        dealer.state = String::new();
        dealer.zip = String::new();
        assert_eq!(dealer.short_address(), "131 Center St Santa Cruz");
    }

    #[test]
    fn test_short_address_without_street() {
        let mut dealer = dealer();
        dealer.addr1 = String::new();
        dealer.city = String::new();
        assert_eq!(dealer.short_address(), "CA 95060");
    }
}
