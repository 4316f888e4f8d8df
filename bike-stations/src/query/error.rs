//! Query error types.

/// Errors from fleet-wide statistics.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StatisticsError {
    /// Occupancy divides by total capacity, which is zero here.
    #[error("total capacity is zero across {station_count} stations: occupancy is undefined")]
    ZeroTotalCapacity { station_count: usize },
}
