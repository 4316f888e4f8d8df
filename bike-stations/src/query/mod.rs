//! Queries over a slice of stations.
//!
//! Every function here is pure: it reads the stations it is given and
//! returns borrowed selections or derived values.

mod config;
mod error;
mod nearest;
mod search;
mod stats;

pub use config::{MIN_AVAILABILITY_RATIO_VAR, QueryConfig};
pub use error::StatisticsError;
pub use nearest::{Route, euclidean_distance, find_nearest_station, plan_route};
pub use search::{filter_by_availability, filter_with_config, search_by_address};
pub use stats::{FleetStatistics, compute_statistics};
