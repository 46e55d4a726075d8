use egui::{Color32, RichText, Ui};

use geobounds::{cartesian_distance, is_location_within_boundary, Coordinate, GeoBoundary};

use crate::{state::SelectionState, theme::Theme, types::Dealer};

/// The scrollable dealer list: dealers inside the current viewport first,
/// each group sorted by distance to the map center.
pub struct WidgetDealerList {
    scroll_to_top: bool,
}

impl WidgetDealerList {
    pub fn new() -> Self {
        Self {
            scroll_to_top: false,
        }
    }

    /// Scrolls the list back to the top on the next frame.
    pub fn scroll_to_top(&mut self) {
        self.scroll_to_top = true;
    }

    /// Renders the list; returns the dealer whose card was clicked, if any.
    pub fn ui(
        &mut self,
        ui: &mut Ui,
        dealers: &[Dealer],
        map_center: Coordinate,
        map_boundary: Option<&GeoBoundary>,
        selection_state: &SelectionState,
        theme: &Theme,
    ) -> Option<Dealer> {
        let mut dealers_on_map: Vec<&Dealer> = dealers
            .iter()
            .filter(|dealer| is_location_within_boundary(dealer.location, map_boundary))
            .collect();
        let mut dealers_off_map: Vec<&Dealer> = dealers
            .iter()
            .filter(|dealer| !is_location_within_boundary(dealer.location, map_boundary))
            .collect();

        dealers_on_map.sort_by(|a, b| {
            cartesian_distance(a.location, map_center)
                .total_cmp(&cartesian_distance(b.location, map_center))
        });
        dealers_off_map.sort_by(|a, b| {
            cartesian_distance(a.location, map_center)
                .total_cmp(&cartesian_distance(b.location, map_center))
        });

        let mut clicked = None;

        let mut scroll_area = egui::ScrollArea::vertical();
        if self.scroll_to_top {
            scroll_area = scroll_area.vertical_scroll_offset(0.0);
            self.scroll_to_top = false;
        }

        scroll_area.show(ui, |ui| {
            for dealer in &dealers_on_map {
                if dealer_card(ui, dealer, theme.emphasized_text_color, selection_state) {
                    clicked = Some((*dealer).clone());
                }
            }

            if !dealers_on_map.is_empty() {
                ui.separator();
            }

            for dealer in &dealers_off_map {
                if dealer_card(ui, dealer, theme.muted_text_color, selection_state) {
                    clicked = Some((*dealer).clone());
                }
            }
        });

        clicked
    }
}

fn dealer_card(
    ui: &mut Ui,
    dealer: &Dealer,
    text_color: Color32,
    selection_state: &SelectionState,
) -> bool {
    let selected = selection_state.dealer.as_ref() == Some(dealer);

    let response = ui
        .scope(|ui| {
            ui.add_space(6.0);

            let name = RichText::new(&dealer.name)
                .strong()
                .size(16.0)
                .color(text_color);
            ui.label(if selected { name.underline() } else { name });

            ui.label(
                RichText::new(dealer.short_address())
                    .size(12.0)
                    .color(text_color),
            );
            ui.add_space(6.0);
        })
        .response
        .interact(egui::Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand);

    response.clicked()
}
