use super::Dealer;

/// A labeled dealer predicate rendered as a checkbox in the filter panel.
/// Inactive filters do not constrain the list.
pub struct DealerFilter {
    pub label: String,
    pub active: bool,
    predicate: Box<dyn Fn(&Dealer) -> bool + Send>,
}

impl DealerFilter {
    pub fn new(
        label: impl Into<String>,
        predicate: impl Fn(&Dealer) -> bool + Send + 'static,
    ) -> Self {
        Self {
            label: label.into(),
            active: false,
            predicate: Box::new(predicate),
        }
    }

    /// The built-in filter every locator starts with.
    pub fn online_dealers() -> Self {
        Self::new("Online dealers", |dealer: &Dealer| dealer.online)
    }

    pub fn matches(&self, dealer: &Dealer) -> bool {
        (self.predicate)(dealer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geobounds::Coordinate;

    fn dealer(online: bool) -> Dealer {
        Dealer {
            id: "D-1".to_string(),
            name: "Dealer".to_string(),
            addr1: String::new(),
            city: String::new(),
            state: String::new(),
            zip: String::new(),
            country: String::new(),
            phone: None,
            website: None,
            online,
            location: Coordinate::new(0.0, 0.0),
        }
    }

    #[test]
    fn test_online_filter_matches_online_dealers_only() {
        let filter = DealerFilter::online_dealers();
        assert!(filter.matches(&dealer(true)));
        assert!(!filter.matches(&dealer(false)));
    }

    #[test]
    fn test_filters_start_inactive() {
        assert!(!DealerFilter::online_dealers().active);
    }
}
