//! Domain types for bike-share stations.
//!
//! Stations are plain immutable records built by a feed reader or the
//! caller. Nothing in this crate mutates them once built.

mod color;
mod station;

pub use color::{ColorTag, classify_color};
pub use station::{Coordinates, Station};
