use std::{cell::RefCell, rc::Rc};

use egui::{include_image, Image, Rect, Response, Vec2};
use walkers::{Plugin, Position, Projector};

use crate::{state::SelectionState, theme::Theme, types::Dealer};

pub struct Dealers<'a> {
    dealers: &'a Vec<Dealer>,
    selection_state: Rc<RefCell<SelectionState>>,
    theme: &'a Theme,
}

impl<'a> Dealers<'a> {
    pub fn new(
        dealers: &'a Vec<Dealer>,
        selection_state: Rc<RefCell<SelectionState>>,
        theme: &'a Theme,
    ) -> Self {
        Self {
            dealers,
            selection_state,
            theme,
        }
    }
}

impl Plugin for Dealers<'_> {
    fn run(self: Box<Self>, ui: &mut egui::Ui, _response: &Response, projector: &Projector) {
        for dealer in self.dealers {
            dealer.draw(
                ui,
                projector,
                self.theme,
                &mut self.selection_state.borrow_mut(),
            );
        }
    }
}

impl Dealer {
    fn draw(
        &self,
        ui: &mut egui::Ui,
        projector: &Projector,
        theme: &Theme,
        selection_state: &mut SelectionState,
    ) {
        let position = Position::from_lat_lon(self.location.lat, self.location.lng);
        let screen_position = projector.project(position);

        let selected = selection_state.dealer.as_ref() == Some(self);

        let symbol_size = if selected {
            Vec2::splat(theme.selected_pin_size)
        } else {
            Vec2::splat(theme.pin_size)
        };

        let clickable_area = Rect::from_center_size(screen_position.to_pos2(), symbol_size);
        let response = ui.allocate_rect(clickable_area, egui::Sense::click());

        // Keep the tip of the pin on the dealer's location.
        let rect = {
            let min_pos =
                screen_position.to_pos2() - Vec2::new(symbol_size.x / 2.0, symbol_size.y);
            Rect::from_min_size(min_pos, symbol_size)
        };

        let image = if selected || response.hovered() {
            Image::new(include_image!(r"../../location-pin-selected.svg"))
        } else {
            Image::new(include_image!(r"../../location-pin-solid.svg"))
        }
        .fit_to_exact_size(symbol_size);

        ui.put(rect, image);

        if response.clicked() {
            selection_state.toggle_dealer_selection(self);
        }
    }
}
