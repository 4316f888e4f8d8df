use std::process::ExitCode;

use tracing::error;
use tracing_subscriber::EnvFilter;

use bike_stations::domain::{Coordinates, Station, classify_color};
use bike_stations::feed::load_stations;
use bike_stations::query::{
    QueryConfig, compute_statistics, filter_with_config, plan_route, search_by_address,
};

/// Environment variable naming the feed file when no argument is given.
const STATIONS_FILE_VAR: &str = "STATIONS_FILE";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let Some(path) = args.next().or_else(|| std::env::var(STATIONS_FILE_VAR).ok()) else {
        eprintln!("Usage: bike-stations <FEED_FILE> [ADDRESS_FILTER]");
        eprintln!("       (or set {STATIONS_FILE_VAR})");
        return ExitCode::FAILURE;
    };
    let address_filter = args.next();

    let stations = match load_stations(&path) {
        Ok(stations) => stations,
        Err(e) => {
            error!(path = %path, error = %e, "Failed to load station feed");
            return ExitCode::FAILURE;
        }
    };

    let config = QueryConfig::from_env();

    match compute_statistics(&stations) {
        Ok(stats) => {
            println!("Stations:        {}", stats.station_count);
            println!("Available bikes: {}", stats.total_available_bikes);
            println!("Total capacity:  {}", stats.total_capacity);
            println!("Occupancy:       {:.1}%", stats.occupancy_percent);
        }
        Err(e) => println!("Statistics unavailable: {e}"),
    }

    println!();
    for station in &stations {
        println!("  [{:<6}] {station}", classify_color(station).as_str());
    }

    println!();
    println!(
        "Stations above {:.0}% availability:",
        config.min_availability_ratio * 100.0
    );
    print_list(&filter_with_config(&stations, &config));

    if let Some(partial) = address_filter {
        println!();
        println!("Stations matching \"{partial}\":");
        print_list(&search_by_address(&stations, &partial));
    }

    if let (Some(origin), Some(destination)) =
        (coordinates_from_env("ORIGIN"), coordinates_from_env("DEST"))
    {
        let route = plan_route(&stations, origin, destination);
        println!();
        println!("Route {origin} -> {destination}:");
        println!("  pick up at:  {}", describe(route.origin));
        println!("  drop off at: {}", describe(route.destination));
    }

    ExitCode::SUCCESS
}

fn print_list(stations: &[&Station]) {
    if stations.is_empty() {
        println!("  (none)");
    }
    for station in stations {
        println!("  {station}");
    }
}

fn describe(station: Option<&Station>) -> String {
    station.map_or_else(|| "no station with bikes".to_string(), Station::to_string)
}

/// Read `{PREFIX}_LAT` and `{PREFIX}_LON` as a coordinate pair.
fn coordinates_from_env(prefix: &str) -> Option<Coordinates> {
    let lat = std::env::var(format!("{prefix}_LAT")).ok()?.trim().parse().ok()?;
    let lon = std::env::var(format!("{prefix}_LON")).ok()?.trim().parse().ok()?;
    Some(Coordinates::new(lat, lon))
}
