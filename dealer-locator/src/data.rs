use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use geobounds::Coordinate;

use crate::types::{Dealer, Place};

/// Opaque error for dealer-data failures.
#[derive(Debug, Clone)]
pub struct DataError;

/// The seam through which the host application supplies dealers. The
/// locator re-polls it on a fixed tick, so implementations may serve data
/// that changes over time.
pub trait DealerProvider {
    fn get_dealers(&mut self) -> Result<Vec<Dealer>, DataError>;
}

/// Place search supplied by the host application; backs the search box and
/// its autocomplete suggestions.
pub trait Geocoder {
    /// Best match for a submitted query, if any.
    fn find_place(&mut self, query: &str) -> Option<Place>;

    /// Completions for a partially typed query.
    fn suggest(&mut self, partial: &str) -> Vec<Place>;
}

/// One CSV row; `lat`/`lng` are folded into the dealer's location.
#[derive(Debug, Deserialize)]
struct DealerRecord {
    id: String,
    name: String,
    addr1: String,
    city: String,
    state: String,
    zip: String,
    country: String,
    phone: Option<String>,
    website: Option<String>,
    online: bool,
    lat: f64,
    lng: f64,
}

impl From<DealerRecord> for Dealer {
    fn from(record: DealerRecord) -> Self {
        Dealer {
            id: record.id,
            name: record.name,
            addr1: record.addr1,
            city: record.city,
            state: record.state,
            zip: record.zip,
            country: record.country,
            phone: record.phone,
            website: record.website,
            online: record.online,
            location: Coordinate::new(record.lat, record.lng),
        }
    }
}

/// A `DealerProvider` over a CSV dealer table.
pub struct CsvDealerSource {
    dealers: Vec<Dealer>,
}

impl CsvDealerSource {
    pub fn from_path(path: &Path) -> Result<Self, DataError> {
        let mut reader = csv::Reader::from_path(path).map_err(|_| DataError)?;
        Self::read(&mut reader)
    }

    pub fn from_reader<R: Read>(input: R) -> Result<Self, DataError> {
        let mut reader = csv::Reader::from_reader(input);
        Self::read(&mut reader)
    }

    fn read<R: Read>(reader: &mut csv::Reader<R>) -> Result<Self, DataError> {
        let mut dealers = Vec::new();
        for record in reader.deserialize::<DealerRecord>() {
            let record = record.map_err(|_| DataError)?;
            dealers.push(Dealer::from(record));
        }
        Ok(Self { dealers })
    }
}

impl DealerProvider for CsvDealerSource {
    fn get_dealers(&mut self) -> Result<Vec<Dealer>, DataError> {
        Ok(self.dealers.clone())
    }
}
