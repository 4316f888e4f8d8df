//! Bike-share station queries.
//!
//! Answers questions about a snapshot of docking stations: how full is
//! the fleet, which stations match an address, which are well stocked, and
//! where is the nearest bike to a point.

pub mod domain;
pub mod feed;
pub mod query;
