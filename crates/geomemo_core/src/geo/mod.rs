//! Great-circle math and distance display helpers.
//!
//! # Responsibility
//! - Compute spherical-Earth distances between coordinates.
//! - Render distances and coordinates for status/list display.
//!
//! # Invariants
//! - All functions are pure and perform no input validation.

pub mod distance;

pub use distance::{distance_meters, format_coordinate, format_distance, EARTH_RADIUS_METERS};
