//! Fleet-wide occupancy statistics.

use tracing::debug;

use super::error::StatisticsError;
use crate::domain::Station;

/// Aggregate counts over a set of stations.
#[derive(Debug, Clone, PartialEq)]
pub struct FleetStatistics {
    /// Sum of available bikes.
    pub total_available_bikes: u64,
    /// Sum of dock capacity.
    pub total_capacity: u64,
    /// Share of capacity not holding an available bike, in percent.
    pub occupancy_percent: f64,
    /// Number of stations counted.
    pub station_count: usize,
}

/// Sum bikes and capacity across all stations and derive the occupancy.
///
/// Occupancy is `(1 - bikes / capacity) * 100`. When total capacity is zero
/// (no stations, or only stations without docks) the ratio is undefined and
/// an error is returned instead of a NaN or infinite percentage.
///
/// # Examples
///
/// ```
/// use bike_stations::domain::Station;
/// use bike_stations::query::compute_statistics;
///
/// let stations = vec![
///     Station::new("A", "Calle A", 0.0, 0.0, 10, 5, 5),
///     Station::new("B", "Calle B", 0.0, 0.0, 30, 25, 5),
/// ];
/// let stats = compute_statistics(&stations).unwrap();
/// assert_eq!(stats.total_available_bikes, 10);
/// assert_eq!(stats.total_capacity, 40);
/// assert_eq!(stats.occupancy_percent, 75.0);
/// assert_eq!(stats.station_count, 2);
///
/// assert!(compute_statistics(&[]).is_err());
/// ```
pub fn compute_statistics(stations: &[Station]) -> Result<FleetStatistics, StatisticsError> {
    let (total_available_bikes, total_capacity) =
        stations.iter().fold((0u64, 0u64), |(bikes, capacity), s| {
            (
                bikes + u64::from(s.available_bikes()),
                capacity + u64::from(s.capacity()),
            )
        });
    let station_count = stations.len();

    if total_capacity == 0 {
        return Err(StatisticsError::ZeroTotalCapacity { station_count });
    }

    let occupancy_percent = (1.0 - total_available_bikes as f64 / total_capacity as f64) * 100.0;

    debug!(
        stations = station_count,
        bikes = total_available_bikes,
        capacity = total_capacity,
        occupancy = occupancy_percent,
        "Computed fleet statistics"
    );

    Ok(FleetStatistics {
        total_available_bikes,
        total_capacity,
        occupancy_percent,
        station_count,
    })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn stations_strategy() -> impl Strategy<Value = Vec<Station>> {
        prop::collection::vec((0u32..100, 0u32..100), 0..30).prop_map(|pairs| {
            pairs
                .into_iter()
                .map(|(capacity, bikes)| {
                    Station::new("S", "Calle S", 0.0, 0.0, capacity, 0, bikes.min(capacity))
                })
                .collect()
        })
    }

    proptest! {
        /// Totals are the plain sums of the fields and the count is the length
        #[test]
        fn totals_match_sums(stations in stations_strategy()) {
            let bikes: u64 = stations.iter().map(|s| u64::from(s.available_bikes())).sum();
            let capacity: u64 = stations.iter().map(|s| u64::from(s.capacity())).sum();

            match compute_statistics(&stations) {
                Ok(stats) => {
                    prop_assert_eq!(stats.total_available_bikes, bikes);
                    prop_assert_eq!(stats.total_capacity, capacity);
                    prop_assert_eq!(stats.station_count, stations.len());
                }
                Err(StatisticsError::ZeroTotalCapacity { station_count }) => {
                    prop_assert_eq!(capacity, 0);
                    prop_assert_eq!(station_count, stations.len());
                }
            }
        }

        /// Consistent feeds always land in 0..=100 percent
        #[test]
        fn occupancy_in_range(stations in stations_strategy()) {
            if let Ok(stats) = compute_statistics(&stations) {
                prop_assert!(stats.occupancy_percent.is_finite());
                prop_assert!((0.0..=100.0).contains(&stats.occupancy_percent));
            }
        }
    }
}
