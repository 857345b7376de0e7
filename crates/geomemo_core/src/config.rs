//! Engine tunables.
//!
//! # Responsibility
//! - Hold radius/limit/default-location settings in one serde-friendly shape.
//! - Reject settings that would make proximity or trending views meaningless.
//!
//! # Invariants
//! - Every field has a default, so partial JSON documents are accepted.
//! - `max_note_chars` never exceeds the hard model limit.

use crate::model::coordinate::{Coordinate, CoordinateError};
use crate::model::note::MAX_NOTE_CHARS;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Default proximity radius in meters.
pub const DEFAULT_NEARBY_RADIUS_METERS: f64 = 10.0;
/// Default number of trending tags returned.
pub const DEFAULT_TRENDING_LIMIT: usize = 6;
/// Simulation seed used when no live fix has been received yet.
pub const DEFAULT_SIM_LOCATION: Coordinate = Coordinate::new(51.505, -0.09);

/// Configuration load/validation failure.
#[derive(Debug)]
pub enum ConfigError {
    Parse(serde_json::Error),
    InvalidRadius(f64),
    InvalidTrendingLimit,
    InvalidMaxNoteChars(usize),
    InvalidDefaultLocation(CoordinateError),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "invalid engine config: {err}"),
            Self::InvalidRadius(value) => {
                write!(f, "nearby_radius_meters must be positive and finite, got {value}")
            }
            Self::InvalidTrendingLimit => write!(f, "trending_limit must be greater than 0"),
            Self::InvalidMaxNoteChars(value) => write!(
                f,
                "max_note_chars must be within 1..={MAX_NOTE_CHARS}, got {value}"
            ),
            Self::InvalidDefaultLocation(err) => write!(f, "invalid default_location: {err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::InvalidDefaultLocation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Settings consumed by the tracker and note service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub nearby_radius_meters: f64,
    pub trending_limit: usize,
    pub max_note_chars: usize,
    pub default_location: Coordinate,
    /// While simulating without a manual pick, let live fixes move the
    /// simulated position. When `false`, live reports are dropped entirely.
    pub follow_live_while_simulating: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            nearby_radius_meters: DEFAULT_NEARBY_RADIUS_METERS,
            trending_limit: DEFAULT_TRENDING_LIMIT,
            max_note_chars: MAX_NOTE_CHARS,
            default_location: DEFAULT_SIM_LOCATION,
            follow_live_while_simulating: true,
        }
    }
}

impl EngineConfig {
    /// Parses and validates a JSON document. Missing fields take defaults.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks every field against engine invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.nearby_radius_meters.is_finite() || self.nearby_radius_meters <= 0.0 {
            return Err(ConfigError::InvalidRadius(self.nearby_radius_meters));
        }
        if self.trending_limit == 0 {
            return Err(ConfigError::InvalidTrendingLimit);
        }
        if self.max_note_chars == 0 || self.max_note_chars > MAX_NOTE_CHARS {
            return Err(ConfigError::InvalidMaxNoteChars(self.max_note_chars));
        }
        self.default_location
            .validate()
            .map_err(ConfigError::InvalidDefaultLocation)?;
        Ok(())
    }
}
