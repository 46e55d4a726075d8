use dealer_locator::{CsvDealerSource, LocatorConfig};

mod geocoder;
use geocoder::StaticGeocoder;

const DEALERS_CSV: &str = include_str!("../dealers.csv");

fn main() {
    let provider = match CsvDealerSource::from_reader(DEALERS_CSV.as_bytes()) {
        Ok(provider) => provider,
        Err(_) => {
            eprintln!("Could not parse the bundled dealer table");
            return;
        }
    };

    let config = LocatorConfig {
        analytics_dir: Some(std::env::temp_dir()),
        ..Default::default()
    };

    if let Err(e) = dealer_locator::run(
        config,
        Box::new(provider),
        Box::new(StaticGeocoder::new()),
    ) {
        eprintln!("Failed to start the dealer locator: {}", e);
    }
}
