use egui::{Align2, RichText, Ui};
use walkers::MapMemory;

/// Zoom controls drawn over the map surface.
pub fn zoom(ui: &Ui, map_memory: &mut MapMemory) {
    egui::Area::new("zoom_controls".into())
        .anchor(Align2::LEFT_BOTTOM, [16., -16.])
        .show(ui.ctx(), |ui| {
            ui.horizontal(|ui| {
                if ui.button(RichText::new("➕").heading()).clicked() {
                    let _ = map_memory.zoom_in();
                }
                if ui.button(RichText::new("➖").heading()).clicked() {
                    let _ = map_memory.zoom_out();
                }
            });
        });
}
