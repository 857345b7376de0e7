//! Text-derived projections: hashtags and relative timestamps.
//!
//! # Responsibility
//! - Extract display-form hashtags from note text.
//! - Render note ages for list display.

pub mod tags;
pub mod time;
