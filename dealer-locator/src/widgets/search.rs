use egui::{RichText, Ui};

use crate::data::Geocoder;
use crate::types::Place;

/// What the search box asks the orchestrator to do.
pub enum SearchAction {
    /// Jump straight to a suggested place.
    GoTo(Place),
    /// Geocode the typed query, then jump to the first hit.
    Search(String),
}

/// The search box with its button and live place suggestions.
pub struct WidgetDealerSearch {
    search_value: String,
    suggestions: Vec<Place>,
}

impl WidgetDealerSearch {
    pub fn new() -> Self {
        Self {
            search_value: String::new(),
            suggestions: Vec::new(),
        }
    }

    pub fn ui(
        &mut self,
        ui: &mut Ui,
        geocoder: &mut dyn Geocoder,
        placeholder: &str,
    ) -> Option<SearchAction> {
        let mut action = None;

        ui.horizontal(|ui| {
            let input = ui.add(
                egui::TextEdit::singleline(&mut self.search_value)
                    .hint_text(placeholder)
                    .desired_width(ui.available_width() - 40.0),
            );

            if input.changed() {
                let partial = self.search_value.trim();
                self.suggestions = if partial.len() >= 2 {
                    geocoder.suggest(partial)
                } else {
                    Vec::new()
                };
            }

            let submitted =
                input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if (ui.button("🔍").clicked() || submitted)
                && !self.search_value.trim().is_empty()
            {
                action = Some(SearchAction::Search(self.search_value.trim().to_string()));
            }
        });

        for place in &self.suggestions {
            if ui.link(RichText::new(&place.name).size(13.0)).clicked() {
                self.search_value = place.name.clone();
                action = Some(SearchAction::GoTo(place.clone()));
            }
        }

        if action.is_some() {
            self.suggestions.clear();
        }

        action
    }
}
