//! Station feed loading.
//!
//! Reads a local JSON or CSV snapshot of a bike-share feed into
//! [`Station`] records. Both formats use the same field names:
//! `name, address, latitude, longitude, capacity, free_docks, available_bikes`.
//!
//! Counts are taken as reported. Rows where bikes plus free docks exceed
//! capacity are logged but still loaded.

mod error;
mod record;

use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use crate::domain::Station;

pub use error::FeedError;
pub use record::{RecordRejected, StationRecord};

/// A JSON feed is either a bare array or an object wrapping one.
#[derive(Deserialize)]
#[serde(untagged)]
enum JsonFeed {
    Wrapped { stations: Vec<StationRecord> },
    Bare(Vec<StationRecord>),
}

/// Load stations from a feed file, choosing the parser by extension.
///
/// `.json` and `.csv` are accepted (case-insensitive); anything else is
/// rejected before the file is read.
pub fn load_stations(path: impl AsRef<Path>) -> Result<Vec<Station>, FeedError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    let stations = match extension.as_deref() {
        Some("json") => parse_json(&std::fs::read_to_string(path)?)?,
        Some("csv") => parse_csv(&std::fs::read_to_string(path)?)?,
        _ => {
            return Err(FeedError::UnsupportedFormat {
                path: path.to_path_buf(),
            });
        }
    };

    info!(
        path = %path.display(),
        stations = stations.len(),
        "Loaded station feed"
    );

    Ok(stations)
}

/// Parse a JSON feed.
///
/// # Examples
///
/// ```
/// use bike_stations::feed::parse_json;
///
/// let json = r#"{"stations": [{
///     "name": "Triana", "address": "Calle Betis", "latitude": 37.38,
///     "longitude": -6.0, "capacity": 15, "free_docks": 5, "available_bikes": 10
/// }]}"#;
/// let stations = parse_json(json).unwrap();
/// assert_eq!(stations[0].name(), "Triana");
/// ```
pub fn parse_json(content: &str) -> Result<Vec<Station>, FeedError> {
    let records = match serde_json::from_str(content)? {
        JsonFeed::Wrapped { stations } => stations,
        JsonFeed::Bare(stations) => stations,
    };
    convert_records(records)
}

/// Parse a CSV feed with a header row.
///
/// Columns are matched by header name, so their order does not matter.
/// Surrounding whitespace in fields is trimmed.
pub fn parse_csv(content: &str) -> Result<Vec<Station>, FeedError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let records = reader
        .deserialize::<StationRecord>()
        .collect::<Result<Vec<_>, _>>()?;
    convert_records(records)
}

fn convert_records(records: Vec<StationRecord>) -> Result<Vec<Station>, FeedError> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            let station = Station::try_from(record)
                .map_err(|rejected| FeedError::InvalidRecord {
                    index,
                    reason: rejected.0,
                })?;

            if station.is_overfilled() {
                warn!(
                    index,
                    station = %station.name(),
                    capacity = station.capacity(),
                    free_docks = station.free_docks(),
                    available_bikes = station.available_bikes(),
                    "Station reports more bikes and docks than capacity"
                );
            }

            Ok(station)
        })
        .collect()
}
