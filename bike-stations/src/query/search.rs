//! Selection of stations by address and by availability.
//!
//! Both selections borrow from the input slice and keep its order.

use super::config::QueryConfig;
use crate::domain::Station;

/// Find stations whose address contains `partial`, ignoring case.
///
/// Matching uses Unicode lowercasing on both sides, so accented capitals
/// match their lowercase forms. An empty `partial` matches every station.
///
/// # Examples
///
/// ```
/// use bike_stations::domain::Station;
/// use bike_stations::query::search_by_address;
///
/// let stations = vec![
///     Station::new("A", "12 Main St", 0.0, 0.0, 10, 5, 5),
///     Station::new("B", "4 High Rd", 0.0, 0.0, 10, 5, 5),
/// ];
/// let found = search_by_address(&stations, "MAIN");
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].name(), "A");
/// ```
pub fn search_by_address<'a>(stations: &'a [Station], partial: &str) -> Vec<&'a Station> {
    let needle = partial.to_lowercase();
    stations
        .iter()
        .filter(|s| s.address().to_lowercase().contains(&needle))
        .collect()
}

/// Keep stations whose availability ratio is strictly above `min_ratio`.
///
/// Stations without docks have no ratio and are left out.
pub fn filter_by_availability(stations: &[Station], min_ratio: f64) -> Vec<&Station> {
    stations
        .iter()
        .filter(|s| s.availability_ratio().is_some_and(|ratio| ratio > min_ratio))
        .collect()
}

/// [`filter_by_availability`] using the threshold from `config`.
pub fn filter_with_config<'a>(stations: &'a [Station], config: &QueryConfig) -> Vec<&'a Station> {
    filter_by_availability(stations, config.min_availability_ratio)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(name: &str, address: &str) -> Station {
        Station::new(name, address, 0.0, 0.0, 10, 5, 5)
    }

    fn stocked(name: &str, capacity: u32, bikes: u32) -> Station {
        Station::new(name, "Calle", 0.0, 0.0, capacity, capacity.saturating_sub(bikes), bikes)
    }

    fn names(selected: &[&Station]) -> Vec<String> {
        selected.iter().map(|s| s.name().to_string()).collect()
    }

    #[test]
    fn search_is_case_insensitive() {
        let stations = vec![at("A", "10 Main St"), at("B", "Elm Avenue")];

        assert_eq!(names(&search_by_address(&stations, "MAIN")), ["A"]);
        assert_eq!(names(&search_by_address(&stations, "main st")), ["A"]);
        assert_eq!(names(&search_by_address(&stations, "eLm")), ["B"]);
    }

    #[test]
    fn search_handles_accents() {
        let stations = vec![at("A", "Avenida de Ávila"), at("B", "Calle Sierpes")];
        assert_eq!(names(&search_by_address(&stations, "ÁVILA")), ["A"]);
    }

    #[test]
    fn search_preserves_order_and_duplicates() {
        let stations = vec![
            at("C", "Calle Feria 3"),
            at("A", "Plaza"),
            at("B", "calle feria 9"),
            at("C", "Calle Feria 3"),
        ];

        assert_eq!(
            names(&search_by_address(&stations, "feria")),
            ["C", "B", "C"]
        );
    }

    #[test]
    fn search_no_match() {
        let stations = vec![at("A", "Main St")];
        assert!(search_by_address(&stations, "Broadway").is_empty());
        assert!(search_by_address(&[], "Main").is_empty());
    }

    #[test]
    fn search_empty_needle_matches_all() {
        let stations = vec![at("A", "Main St"), at("B", "")];
        assert_eq!(search_by_address(&stations, "").len(), 2);
    }

    #[test]
    fn filter_boundary_is_excluded() {
        let stations = vec![stocked("half", 10, 5), stocked("six", 10, 6)];
        assert_eq!(names(&filter_by_availability(&stations, 0.5)), ["six"]);
    }

    #[test]
    fn filter_skips_zero_capacity() {
        let stations = vec![stocked("none", 0, 0), stocked("full", 4, 4)];
        assert_eq!(names(&filter_by_availability(&stations, 0.0)), ["full"]);
        // Even a negative threshold never admits an undefined ratio
        assert_eq!(names(&filter_by_availability(&stations, -1.0)), ["full"]);
    }

    #[test]
    fn filter_preserves_order() {
        let stations = vec![
            stocked("a", 10, 9),
            stocked("b", 10, 1),
            stocked("c", 10, 8),
            stocked("d", 10, 7),
        ];
        assert_eq!(
            names(&filter_by_availability(&stations, 0.5)),
            ["a", "c", "d"]
        );
    }

    #[test]
    fn filter_zero_threshold_excludes_empty() {
        let stations = vec![stocked("empty", 10, 0), stocked("one", 10, 1)];
        assert_eq!(names(&filter_by_availability(&stations, 0.0)), ["one"]);
    }

    #[test]
    fn filter_with_default_config() {
        let stations = vec![stocked("half", 10, 5), stocked("six", 10, 6)];
        let config = QueryConfig::default();
        assert_eq!(names(&filter_with_config(&stations, &config)), ["six"]);

        let lenient = QueryConfig::new(0.4);
        assert_eq!(
            names(&filter_with_config(&stations, &lenient)),
            ["half", "six"]
        );
    }
}
