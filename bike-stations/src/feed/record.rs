//! Wire representation of a station row.

use serde::Deserialize;

use crate::domain::Station;

/// One station as it appears in a JSON object or CSV row.
#[derive(Debug, Clone, Deserialize)]
pub struct StationRecord {
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub capacity: u32,
    pub free_docks: u32,
    pub available_bikes: u32,
}

/// Reason a record was rejected during conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordRejected(pub &'static str);

impl TryFrom<StationRecord> for Station {
    type Error = RecordRejected;

    fn try_from(record: StationRecord) -> Result<Self, Self::Error> {
        if !record.latitude.is_finite() {
            return Err(RecordRejected("latitude is not finite"));
        }
        if !record.longitude.is_finite() {
            return Err(RecordRejected("longitude is not finite"));
        }

        Ok(Station::new(
            record.name,
            record.address,
            record.latitude,
            record.longitude,
            record.capacity,
            record.free_docks,
            record.available_bikes,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> StationRecord {
        StationRecord {
            name: "Puerta de Jerez".to_string(),
            address: "Avenida de la Constitución".to_string(),
            latitude: 37.382,
            longitude: -5.994,
            capacity: 20,
            free_docks: 6,
            available_bikes: 14,
        }
    }

    #[test]
    fn converts_valid_record() {
        let station = Station::try_from(record()).unwrap();
        assert_eq!(station.name(), "Puerta de Jerez");
        assert_eq!(station.address(), "Avenida de la Constitución");
        assert_eq!(station.latitude(), 37.382);
        assert_eq!(station.longitude(), -5.994);
        assert_eq!(station.capacity(), 20);
        assert_eq!(station.free_docks(), 6);
        assert_eq!(station.available_bikes(), 14);
    }

    #[test]
    fn rejects_non_finite_coordinates() {
        let mut bad = record();
        bad.latitude = f64::NAN;
        assert_eq!(
            Station::try_from(bad),
            Err(RecordRejected("latitude is not finite"))
        );

        let mut bad = record();
        bad.longitude = f64::INFINITY;
        assert_eq!(
            Station::try_from(bad),
            Err(RecordRejected("longitude is not finite"))
        );
    }

    #[test]
    fn keeps_inconsistent_counts() {
        let mut odd = record();
        odd.free_docks = 50;
        let station = Station::try_from(odd).unwrap();
        assert!(station.is_overfilled());
    }
}
