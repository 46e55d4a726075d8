use crate::data::DealerProvider;
use crate::types::{Dealer, DealerFilter};

/// Tracks the state for the selection of a dealer.
pub struct SelectionState {
    pub dealer: Option<Dealer>,
}

impl SelectionState {
    pub fn new() -> SelectionState {
        Self { dealer: None }
    }

    /// If the provided dealer is already selected, it will be deselected.
    /// Otherwise, it will be selected.
    pub fn toggle_dealer_selection(&mut self, dealer: &Dealer) {
        if let Some(selected_dealer) = &self.dealer {
            if *selected_dealer == *dealer {
                self.dealer = None;
            } else {
                self.dealer = Some(dealer.clone());
            }
        } else {
            self.dealer = Some(dealer.clone());
        }
    }
}

/// Tracks the dealers to display and the active list filters.
pub struct ViewState {
    pub dealers: Vec<Dealer>,
    pub filters: Vec<DealerFilter>,
}

impl ViewState {
    pub fn new(dealers: Vec<Dealer>, filters: Vec<DealerFilter>) -> Self {
        Self { dealers, filters }
    }

    /// Refreshes the dealer list, keeping the previous one when the
    /// provider fails.
    pub fn update_dealers(&mut self, provider: &mut dyn DealerProvider) {
        if let Ok(new_dealers) = provider.get_dealers() {
            self.dealers = new_dealers;
        }
    }

    /// Dealers passing every active filter.
    pub fn visible_dealers(&self) -> Vec<Dealer> {
        self.dealers
            .iter()
            .filter(|dealer| {
                self.filters
                    .iter()
                    .filter(|filter| filter.active)
                    .all(|filter| filter.matches(dealer))
            })
            .cloned()
            .collect()
    }
}
