use analytics::{Analytics, Event};
use egui::RichText;

use crate::types::Dealer;

/// A window with the selected dealer's address and contact actions.
pub struct WidgetDealer {
    pub selected_dealer: Dealer,
}

impl WidgetDealer {
    pub fn new(selected_dealer: Dealer) -> Self {
        Self { selected_dealer }
    }

    /// Shows the detail window; returns `false` once the user closes it.
    pub fn show(&mut self, ctx: &egui::Context, analytics: Option<&Analytics>) -> bool {
        let mut open = true;
        let screen_width = ctx.screen_rect().width();

        egui::Window::new(format!("Dealer: {}", self.selected_dealer.name))
            .resizable(false)
            .collapsible(true)
            .open(&mut open)
            .fixed_pos([screen_width - 385., 20.])
            .show(ctx, |ui| {
                ui.add_space(10.0);
                ui.visuals_mut().override_text_color = Some(egui::Color32::WHITE);

                ui.label(
                    RichText::new(&self.selected_dealer.name)
                        .strong()
                        .size(24.0),
                );

                ui.add_space(10.0);
                if !self.selected_dealer.addr1.is_empty() {
                    ui.label(RichText::new(&self.selected_dealer.addr1).size(16.0));
                }
                ui.label(
                    RichText::new(format!(
                        "{}{} {} {} {}",
                        self.selected_dealer.city,
                        if self.selected_dealer.city.is_empty() {
                            ""
                        } else {
                            ","
                        },
                        self.selected_dealer.state,
                        self.selected_dealer.zip,
                        self.selected_dealer.country
                    ))
                    .size(16.0),
                );

                ui.add_space(15.0);

                ui.horizontal(|ui| {
                    if let Some(phone) = &self.selected_dealer.phone {
                        if ui
                            .hyperlink_to(format!("📞 {}", phone), format!("tel:{}", phone))
                            .clicked()
                        {
                            record(analytics, Event::PhoneClicked, &self.selected_dealer.name);
                        }
                    }

                    if ui
                        .hyperlink_to("🧭 Get Directions", self.selected_dealer.directions_url())
                        .clicked()
                    {
                        record(
                            analytics,
                            Event::DirectionsClicked,
                            &self.selected_dealer.name,
                        );
                    }
                });

                if let Some(website) = &self.selected_dealer.website {
                    ui.add_space(15.0);
                    if ui.hyperlink_to("Visit Website", website).clicked() {
                        record(analytics, Event::WebsiteClicked, &self.selected_dealer.name);
                    }
                }

                ui.add_space(10.0);
            });

        open
    }
}

fn record(analytics: Option<&Analytics>, event: Event, label: &str) {
    if let Some(analytics) = analytics {
        if let Err(e) = analytics.record(event, label, true) {
            eprintln!("Failed to record {} event: {}", event.as_str(), e);
        }
    }
}
