//! Short-code recovery and shortening.
//!
//! A short code omits up to six leading digits; the bearer supplies a
//! reference location instead, and recovery picks the cell matching the
//! remaining digits that lies nearest that reference. Shortening is the
//! inverse: trim as many leading digits as a nearby reference can restore.

use super::alphabet::{
    ENCODING_BASE, MIN_TRIMMABLE_CODE_LEN, PADDING_CHARACTER, PAIR_CODE_LENGTH, PAIR_RESOLUTIONS,
    SEPARATOR, SEPARATOR_POSITION,
};
use super::decode::decode;
use super::encode::encode;
use super::error::CodeError;
use super::validate::{is_full, is_short, is_valid};
use crate::coord::{self, CoordError, MAX_LAT, MIN_LAT};

/// Recovers the nearest full code matching a short code, using the
/// reference position to supply the omitted leading digits.
///
/// A full code passes through unchanged apart from upper-casing. Otherwise
/// the result is the cell matching the short digits nearest the reference:
/// the cell under the reference itself, or a one-cell neighbor when the
/// reference sits just across a boundary. East-west distance is measured
/// around the globe, so a reference beside the antimeridian recovers codes
/// on the far side of the seam; north-south shifts stop at the poles.
///
/// # Errors
///
/// [`CodeError::InvalidFormat`] when the string is not a valid code, and
/// [`CodeError::Coordinate`] for a reference latitude outside [-90, 90] or
/// a non-finite reference angle.
///
/// # Examples
///
/// ```
/// use gridcode::code::recover_nearest;
///
/// let full = recover_nearest("8988+3C", 33.3152, 44.3661)?;
/// assert_eq!(full, "8H568988+3C");
/// # Ok::<(), gridcode::code::CodeError>(())
/// ```
pub fn recover_nearest(
    short_code: &str,
    reference_latitude: f64,
    reference_longitude: f64,
) -> Result<String, CodeError> {
    if !is_short(short_code) {
        if is_full(short_code) {
            return Ok(short_code.to_ascii_uppercase());
        }
        return Err(CodeError::InvalidFormat(short_code.to_string()));
    }

    if !coord::is_valid_latitude(reference_latitude) {
        return Err(CoordError::InvalidLatitude(reference_latitude).into());
    }
    if !reference_longitude.is_finite() {
        return Err(CoordError::InvalidLongitude(reference_longitude).into());
    }
    let reference_longitude = coord::normalize_longitude(reference_longitude);

    let short_code = short_code.to_ascii_uppercase();
    let sep = short_code
        .find(SEPARATOR)
        .ok_or_else(|| CodeError::InvalidFormat(short_code.clone()))?;
    let omitted = SEPARATOR_POSITION - sep;

    // Height and width in degrees of the area the omitted digits span.
    let resolution = (ENCODING_BASE as f64).powi(2 - (omitted as i32) / 2);
    let half_resolution = resolution / 2.0;

    // Complete the short code with digits taken from the reference and
    // decode the result.
    let prefix = encode(reference_latitude, reference_longitude, PAIR_CODE_LENGTH)?;
    let candidate = format!("{}{}", &prefix[..omitted], short_code);
    let area = decode(&candidate)?;

    let mut latitude = area.latitude_center();
    if reference_latitude + half_resolution < latitude && latitude - resolution >= MIN_LAT {
        latitude -= resolution;
    } else if reference_latitude - half_resolution > latitude && latitude + resolution <= MAX_LAT
    {
        latitude += resolution;
    }

    let longitude =
        nearest_longitude(area.longitude_center(), reference_longitude, resolution);

    encode(latitude, longitude, area.code_length)
}

/// Shortens a full code against a nearby reference position, removing as
/// many leading digits as recovery from that reference would restore.
///
/// Returns the code unchanged (upper-cased) when the reference is too far
/// away for any prefix to be implied.
///
/// # Errors
///
/// [`CodeError::InvalidFormat`] and [`CodeError::NotFull`] for strings that
/// are not full codes, [`CodeError::Padded`] for padded codes (their pad
/// run stands in for the digits shortening would remove),
/// [`CodeError::NotTrimmable`] for codes below 6 digits, and
/// [`CodeError::Coordinate`] for a bad reference.
pub fn shorten(code: &str, latitude: f64, longitude: f64) -> Result<String, CodeError> {
    if !is_valid(code) {
        return Err(CodeError::InvalidFormat(code.to_string()));
    }
    if !is_full(code) {
        return Err(CodeError::NotFull(code.to_string()));
    }
    if code.contains(PADDING_CHARACTER) {
        return Err(CodeError::Padded(code.to_string()));
    }
    let code = code.to_ascii_uppercase();
    let area = decode(&code)?;
    if area.code_length < MIN_TRIMMABLE_CODE_LEN {
        return Err(CodeError::NotTrimmable(code));
    }

    if !coord::is_valid_latitude(latitude) {
        return Err(CoordError::InvalidLatitude(latitude).into());
    }
    if !longitude.is_finite() {
        return Err(CoordError::InvalidLongitude(longitude).into());
    }
    let longitude = coord::normalize_longitude(longitude);

    // How far the reference sits from the cell center, on the worse axis.
    let range = (area.latitude_center() - latitude)
        .abs()
        .max((area.longitude_center() - longitude).abs());

    // Trim the longest prefix the reference still implies, with the
    // standard 0.3 safety factor against references near a cell boundary.
    for i in (1..PAIR_RESOLUTIONS.len() - 1).rev() {
        if range < PAIR_RESOLUTIONS[i] * 0.3 {
            return Ok(code[(i + 1) * 2..].to_string());
        }
    }
    Ok(code)
}

/// Returns whichever of `center` and its one-cell east/west neighbors lies
/// closest to `reference`, by angular distance around the globe.
fn nearest_longitude(center: f64, reference: f64, resolution: f64) -> f64 {
    let mut best = center;
    let mut best_distance = wrap_distance(center, reference);
    for candidate in [center - resolution, center + resolution] {
        let distance = wrap_distance(candidate, reference);
        if distance < best_distance {
            best = candidate;
            best_distance = distance;
        }
    }
    best
}

/// Angular distance between two longitudes, measured the short way around.
fn wrap_distance(a: f64, b: f64) -> f64 {
    let diff = (a - b).abs() % 360.0;
    diff.min(360.0 - diff)
}
