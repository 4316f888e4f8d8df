//! Station records and coordinates.

use std::fmt;

/// A (latitude, longitude) pair in raw degrees.
///
/// No range checks are applied; distances computed from these values are
/// planar approximations (see [`crate::query::euclidean_distance`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Create a coordinate pair.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl From<(f64, f64)> for Coordinates {
    /// Converts a `(latitude, longitude)` tuple.
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

/// A bike-share docking station as reported by a feed.
///
/// Stations are immutable once built. The counts are trusted as supplied:
/// `available_bikes + free_docks <= capacity` is expected of well-formed
/// feeds but is not checked here.
///
/// # Examples
///
/// ```
/// use bike_stations::domain::Station;
///
/// let station = Station::new("Plaza Nueva", "Plaza Nueva 1", 37.389, -5.996, 20, 5, 15);
/// assert_eq!(station.availability_ratio(), Some(0.75));
/// assert!(station.has_available_bikes());
///
/// let closed = Station::new("Closed", "Calle Sin Anclajes", 37.0, -5.0, 0, 0, 0);
/// assert_eq!(closed.availability_ratio(), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    name: String,
    address: String,
    location: Coordinates,
    capacity: u32,
    free_docks: u32,
    available_bikes: u32,
}

impl Station {
    /// Build a station record.
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        latitude: f64,
        longitude: f64,
        capacity: u32,
        free_docks: u32,
        available_bikes: u32,
    ) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            location: Coordinates::new(latitude, longitude),
            capacity,
            free_docks,
            available_bikes,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn latitude(&self) -> f64 {
        self.location.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.location.longitude
    }

    /// The station's position as a coordinate pair.
    pub fn coordinates(&self) -> Coordinates {
        self.location
    }

    /// Total number of docks.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Number of empty docks.
    pub fn free_docks(&self) -> u32 {
        self.free_docks
    }

    /// Number of bikes ready for rental.
    pub fn available_bikes(&self) -> u32 {
        self.available_bikes
    }

    /// Returns true if at least one bike can be rented here.
    pub fn has_available_bikes(&self) -> bool {
        self.available_bikes > 0
    }

    /// Fraction of capacity holding an available bike.
    ///
    /// Returns `None` for a station with no docks, where the ratio is undefined.
    pub fn availability_ratio(&self) -> Option<f64> {
        if self.capacity == 0 {
            return None;
        }
        Some(f64::from(self.available_bikes) / f64::from(self.capacity))
    }

    /// Returns true if the reported counts exceed the station's capacity.
    pub fn is_overfilled(&self) -> bool {
        u64::from(self.available_bikes) + u64::from(self.free_docks) > u64::from(self.capacity)
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) {}/{} bikes",
            self.name, self.address, self.available_bikes, self.capacity
        )
    }
}
