//! Availability colour coding for map markers.

use std::fmt;

use super::Station;

/// Marker colour for a station, derived from its availability ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorTag {
    /// At least two thirds of the docks hold an available bike.
    Green,
    /// At least one third, but under two thirds.
    Orange,
    /// Some bikes, but under one third.
    Red,
    /// Capacity is zero, so availability is undefined.
    Gray,
    /// The station has docks but no bikes.
    Empty,
}

impl ColorTag {
    /// The colour name used when painting the marker.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorTag::Green => "green",
            ColorTag::Orange => "orange",
            ColorTag::Red => "red",
            ColorTag::Gray => "gray",
            ColorTag::Empty => "black",
        }
    }
}

impl fmt::Display for ColorTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pick the marker colour for a station.
///
/// Thresholds are inclusive lower bounds: a ratio of exactly 2/3 is green and
/// exactly 1/3 is orange. The comparison is done on integers
/// (`3 * bikes` against `capacity`) so the boundaries are exact.
///
/// # Examples
///
/// ```
/// use bike_stations::domain::{ColorTag, Station, classify_color};
///
/// let s = Station::new("A", "Calle A", 0.0, 0.0, 3, 1, 2);
/// assert_eq!(classify_color(&s), ColorTag::Green);
///
/// let empty = Station::new("B", "Calle B", 0.0, 0.0, 3, 3, 0);
/// assert_eq!(classify_color(&empty), ColorTag::Empty);
/// ```
pub fn classify_color(station: &Station) -> ColorTag {
    let capacity = u64::from(station.capacity());
    if capacity == 0 {
        return ColorTag::Gray;
    }

    let bikes = u64::from(station.available_bikes());
    if bikes == 0 {
        return ColorTag::Empty;
    }

    if 3 * bikes >= 2 * capacity {
        ColorTag::Green
    } else if 3 * bikes >= capacity {
        ColorTag::Orange
    } else {
        ColorTag::Red
    }
}
