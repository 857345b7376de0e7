//! Geographic coordinate value type.
//!
//! # Invariants
//! - `lat` lies in `[-90, 90]` and `lng` in `[-180, 180]` when built through
//!   [`Coordinate::try_new`].
//! - Equality is exact on both components; no tolerance is applied.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Rejection reasons for out-of-range coordinate input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CoordinateError {
    /// Latitude is NaN/infinite or outside `[-90, 90]`.
    LatitudeOutOfRange(f64),
    /// Longitude is NaN/infinite or outside `[-180, 180]`.
    LongitudeOutOfRange(f64),
}

impl Display for CoordinateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LatitudeOutOfRange(value) => {
                write!(f, "latitude {value} must be within [-90, 90]")
            }
            Self::LongitudeOutOfRange(value) => {
                write!(f, "longitude {value} must be within [-180, 180]")
            }
        }
    }
}

impl Error for CoordinateError {}

/// A point on the Earth's surface in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    /// Builds a coordinate without range checks.
    ///
    /// Position sources are trusted to deliver sane values; use
    /// [`Coordinate::try_new`] for user or persisted input.
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Builds a coordinate, rejecting non-finite or out-of-range components.
    pub fn try_new(lat: f64, lng: f64) -> Result<Self, CoordinateError> {
        let coordinate = Self { lat, lng };
        coordinate.validate()?;
        Ok(coordinate)
    }

    /// Checks component ranges.
    pub fn validate(&self) -> Result<(), CoordinateError> {
        if !self.lat.is_finite() || !(-90.0..=90.0).contains(&self.lat) {
            return Err(CoordinateError::LatitudeOutOfRange(self.lat));
        }
        if !self.lng.is_finite() || !(-180.0..=180.0).contains(&self.lng) {
            return Err(CoordinateError::LongitudeOutOfRange(self.lng));
        }
        Ok(())
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.5}, {:.5}", self.lat, self.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::{Coordinate, CoordinateError};

    #[test]
    fn try_new_rejects_out_of_range_components() {
        assert_eq!(
            Coordinate::try_new(91.0, 0.0).unwrap_err(),
            CoordinateError::LatitudeOutOfRange(91.0)
        );
        assert_eq!(
            Coordinate::try_new(0.0, -180.5).unwrap_err(),
            CoordinateError::LongitudeOutOfRange(-180.5)
        );
        assert!(Coordinate::try_new(f64::NAN, 0.0).is_err());
        assert!(Coordinate::try_new(-90.0, 180.0).is_ok());
    }

    #[test]
    fn display_uses_five_decimals() {
        assert_eq!(
            Coordinate::new(51.505, -0.09).to_string(),
            "51.50500, -0.09000"
        );
    }
}
