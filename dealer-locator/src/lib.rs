pub mod data;
mod map;
mod plugins;
mod state;
mod theme;
mod types;
mod widgets;
mod windows;

pub use data::{CsvDealerSource, DataError, DealerProvider, Geocoder};
pub use map::{DealerLocator, LocatorConfig};
pub use theme::Theme;
pub use types::{Dealer, DealerFilter, Place};

pub fn run(
    config: LocatorConfig,
    provider: Box<dyn DealerProvider>,
    geocoder: Box<dyn Geocoder>,
) -> Result<(), eframe::Error> {
    let title = config.window_title.clone();
    eframe::run_native(
        &title,
        Default::default(),
        Box::new(|cc| {
            Ok(Box::new(DealerLocator::new(
                cc.egui_ctx.clone(),
                config,
                provider,
                geocoder,
            )))
        }),
    )
}
