//! Nearest-station and route lookup.
//!
//! Distances are planar: latitude and longitude are treated as Cartesian
//! axes. This is only meaningful over short ranges (within one city) and
//! distorts east-west distances away from the equator.

use tracing::trace;

use crate::domain::{Coordinates, Station};

/// Straight-line distance between two points in raw degrees.
///
/// # Examples
///
/// ```
/// use bike_stations::domain::Coordinates;
/// use bike_stations::query::euclidean_distance;
///
/// let d = euclidean_distance(Coordinates::new(0.0, 0.0), Coordinates::new(3.0, 4.0));
/// assert_eq!(d, 5.0);
/// ```
pub fn euclidean_distance(p1: Coordinates, p2: Coordinates) -> f64 {
    let d_lat = p1.latitude - p2.latitude;
    let d_lon = p1.longitude - p2.longitude;
    (d_lat * d_lat + d_lon * d_lon).sqrt()
}

/// Find the closest station to `point` that has a bike to rent.
///
/// Stations without available bikes are ignored. When two stations are
/// equally close the one appearing first in `stations` wins. Returns `None`
/// if no station has bikes.
pub fn find_nearest_station(stations: &[Station], point: Coordinates) -> Option<&Station> {
    let mut nearest: Option<(&Station, f64)> = None;

    for station in stations.iter().filter(|s| s.has_available_bikes()) {
        let distance = euclidean_distance(station.coordinates(), point);
        if distance.is_nan() {
            continue;
        }

        let closer = match nearest {
            Some((_, best)) => distance < best,
            None => true,
        };
        if closer {
            nearest = Some((station, distance));
        }
    }

    trace!(
        %point,
        found = nearest.map(|(s, _)| s.name()),
        "Nearest station lookup"
    );

    nearest.map(|(station, _)| station)
}

/// Pick-up and drop-off stations for a trip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Route<'a> {
    /// Nearest station with bikes to the trip origin.
    pub origin: Option<&'a Station>,
    /// Nearest station with bikes to the trip destination.
    pub destination: Option<&'a Station>,
}

impl<'a> Route<'a> {
    /// Returns true if both ends of the trip have a station.
    pub fn is_complete(&self) -> bool {
        self.origin.is_some() && self.destination.is_some()
    }

    pub fn into_tuple(self) -> (Option<&'a Station>, Option<&'a Station>) {
        (self.origin, self.destination)
    }
}

/// Look up the nearest available station to each end of a trip.
///
/// The two lookups are independent, so both ends may resolve to the same
/// station.
///
/// # Examples
///
/// ```
/// use bike_stations::domain::{Coordinates, Station};
/// use bike_stations::query::plan_route;
///
/// let stations = vec![
///     Station::new("West", "Calle Oeste", 0.0, 0.0, 10, 5, 5),
///     Station::new("East", "Calle Este", 0.0, 10.0, 10, 5, 5),
/// ];
/// let route = plan_route(&stations, Coordinates::new(0.0, 1.0), Coordinates::new(0.0, 9.0));
/// assert_eq!(route.origin.map(|s| s.name()), Some("West"));
/// assert_eq!(route.destination.map(|s| s.name()), Some("East"));
/// ```
pub fn plan_route(stations: &[Station], origin: Coordinates, destination: Coordinates) -> Route<'_> {
    Route {
        origin: find_nearest_station(stations, origin),
        destination: find_nearest_station(stations, destination),
    }
}
