use egui::Ui;

use crate::types::DealerFilter;

/// Checkbox list for the dealer filters; returns `true` when any filter
/// changed this frame.
pub fn show_dealer_filters(ui: &mut Ui, filters: &mut [DealerFilter]) -> bool {
    let mut changed = false;

    egui::CollapsingHeader::new("Dealer Filters")
        .default_open(false)
        .show(ui, |ui| {
            for filter in filters.iter_mut() {
                if ui.checkbox(&mut filter.active, filter.label.as_str()).changed() {
                    changed = true;
                }
            }
        });

    changed
}
