//! Geographic coordinate handling.
//!
//! Provides the validated [`Coordinate`] value type plus the clipping,
//! normalization, and range predicates the codec is built on. All angles are
//! degrees on the plain latitude/longitude grid the codes address.

mod types;

pub use types::{Coordinate, CoordError, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};

/// Returns true when `lat` is a finite latitude within [-90, 90].
#[inline]
pub fn is_valid_latitude(lat: f64) -> bool {
    lat.is_finite() && (MIN_LAT..=MAX_LAT).contains(&lat)
}

/// Returns true when `lon` is a finite longitude within [-180, 180].
#[inline]
pub fn is_valid_longitude(lon: f64) -> bool {
    lon.is_finite() && (MIN_LON..=MAX_LON).contains(&lon)
}

/// Clamps a latitude into [-90, 90].
#[inline]
pub fn clip_latitude(lat: f64) -> f64 {
    lat.clamp(MIN_LAT, MAX_LAT)
}

/// Normalizes a longitude into [-180, 180) by whole revolutions.
///
/// Values already in range pass through unchanged.
#[inline]
pub fn normalize_longitude(lon: f64) -> f64 {
    if (MIN_LON..MAX_LON).contains(&lon) {
        lon
    } else {
        (lon - MIN_LON).rem_euclid(360.0) + MIN_LON
    }
}
