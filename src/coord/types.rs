//! Geographic coordinate types

use std::fmt;

use serde::Serialize;

/// Valid latitude range in degrees
pub const MIN_LAT: f64 = -90.0;
pub const MAX_LAT: f64 = 90.0;

/// Valid longitude range in degrees
pub const MIN_LON: f64 = -180.0;
pub const MAX_LON: f64 = 180.0;

/// A validated geographic position in degrees.
///
/// Construction checks the latitude range and normalizes the longitude into
/// [-180, 180), so a `Coordinate` always holds values every codec operation
/// accepts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Creates a coordinate, validating the latitude and normalizing the
    /// longitude.
    ///
    /// # Errors
    ///
    /// Returns [`CoordError::InvalidLatitude`] when the latitude is not
    /// finite or lies outside [-90, 90], and [`CoordError::InvalidLongitude`]
    /// when the longitude is not finite.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordError> {
        if !super::is_valid_latitude(latitude) {
            return Err(CoordError::InvalidLatitude(latitude));
        }
        if !longitude.is_finite() {
            return Err(CoordError::InvalidLongitude(longitude));
        }
        Ok(Self {
            latitude,
            longitude: super::normalize_longitude(longitude),
        })
    }

    /// Latitude in degrees, within [-90, 90].
    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees, within [-180, 180).
    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}

/// Errors that can occur validating geographic coordinates.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum CoordError {
    /// Latitude is not finite or outside the valid range (-90 to 90)
    #[error("Invalid latitude: {0} (must be finite and between -90 and 90)")]
    InvalidLatitude(f64),
    /// Longitude is not a finite angle
    #[error("Invalid longitude: {0} (must be finite)")]
    InvalidLongitude(f64),
}
