use egui::{Align2, RichText};

use crate::types::Dealer;

/// A modal window listing partner dealers with a link to each website.
/// Dealers without a website are skipped.
pub struct DealerModal {
    pub text: String,
    open: bool,
}

impl DealerModal {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            open: false,
        }
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn show(&mut self, ctx: &egui::Context, dealers: &[Dealer]) {
        if !self.open {
            return;
        }

        egui::Window::new(self.text.as_str())
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .resizable(false)
            .collapsible(false)
            .open(&mut self.open)
            .show(ctx, |ui| {
                ui.add_space(10.0);

                for dealer in dealers {
                    if let Some(website) = &dealer.website {
                        ui.hyperlink_to(RichText::new(&dealer.name).size(16.0), website);
                        ui.add_space(8.0);
                    }
                }
            });
    }
}
