//! Encoding coordinates into grid codes.

use super::alphabet::{
    CODE_ALPHABET, ENCODING_BASE, FINAL_LAT_PRECISION, FINAL_LNG_PRECISION, GRID_CODE_LENGTH,
    GRID_COLUMNS, GRID_ROWS, MAX_DIGIT_COUNT, MIN_DIGIT_COUNT, PADDING_CHARACTER,
    PAIR_CODE_LENGTH, SEPARATOR, SEPARATOR_POSITION,
};
use super::error::CodeError;
use crate::coord::{self, CoordError, MAX_LAT, MAX_LON};

/// Encodes a position into a code of `code_length` significant digits.
///
/// Lengths above 15 are clamped to 15. Latitude 90 is nudged south by one
/// cell height so the emitted code decodes to a real cell. Digit arithmetic
/// runs in integer units, so nearby positions never straddle a cell
/// boundary through float drift.
///
/// # Errors
///
/// [`CodeError::InvalidLength`] for lengths below 2 or odd lengths below
/// 10, and [`CodeError::Coordinate`] when the latitude lies outside
/// [-90, 90] or either angle is not finite. Out-of-range input is never
/// silently clipped; longitudes are normalized into [-180, 180) first.
///
/// # Examples
///
/// ```
/// use gridcode::code::encode;
///
/// let code = encode(33.3152, 44.3661, 10)?;
/// assert_eq!(code, "8H568988+3C");
/// # Ok::<(), gridcode::code::CodeError>(())
/// ```
pub fn encode(latitude: f64, longitude: f64, code_length: usize) -> Result<String, CodeError> {
    if code_length < MIN_DIGIT_COUNT || (code_length < PAIR_CODE_LENGTH && code_length % 2 == 1)
    {
        return Err(CodeError::InvalidLength(code_length));
    }
    let code_length = code_length.min(MAX_DIGIT_COUNT);

    if !coord::is_valid_latitude(latitude) {
        return Err(CoordError::InvalidLatitude(latitude).into());
    }
    if !longitude.is_finite() {
        return Err(CoordError::InvalidLongitude(longitude).into());
    }
    let longitude = coord::normalize_longitude(longitude);

    // The north pole belongs to the top row of cells.
    let latitude = if latitude == MAX_LAT {
        latitude - latitude_precision(code_length)
    } else {
        latitude
    };

    // Scale to integer units. Rounding at the sixth decimal first keeps
    // values that are a hair under a cell boundary from landing in the
    // cell below.
    let mut lat_val =
        (((latitude + MAX_LAT) * FINAL_LAT_PRECISION as f64 * 1e6).round() / 1e6).floor() as i64;
    let mut lng_val =
        (((longitude + MAX_LON) * FINAL_LNG_PRECISION as f64 * 1e6).round() / 1e6).floor() as i64;

    // Peel digits off least significant first, then flip.
    let mut digits: Vec<u8> = Vec::with_capacity(MAX_DIGIT_COUNT);
    if code_length > PAIR_CODE_LENGTH {
        for _ in 0..GRID_CODE_LENGTH {
            let ndx = (lat_val % GRID_ROWS) * GRID_COLUMNS + lng_val % GRID_COLUMNS;
            digits.push(CODE_ALPHABET[ndx as usize]);
            lat_val /= GRID_ROWS;
            lng_val /= GRID_COLUMNS;
        }
    } else {
        lat_val /= GRID_ROWS.pow(GRID_CODE_LENGTH as u32);
        lng_val /= GRID_COLUMNS.pow(GRID_CODE_LENGTH as u32);
    }
    for _ in 0..PAIR_CODE_LENGTH / 2 {
        digits.push(CODE_ALPHABET[(lng_val % ENCODING_BASE) as usize]);
        digits.push(CODE_ALPHABET[(lat_val % ENCODING_BASE) as usize]);
        lat_val /= ENCODING_BASE;
        lng_val /= ENCODING_BASE;
    }
    digits.reverse();

    let mut code = String::with_capacity(MAX_DIGIT_COUNT + 1);
    if code_length >= SEPARATOR_POSITION {
        for &b in &digits[..SEPARATOR_POSITION] {
            code.push(b as char);
        }
        code.push(SEPARATOR);
        for &b in &digits[SEPARATOR_POSITION..code_length] {
            code.push(b as char);
        }
    } else {
        for &b in &digits[..code_length] {
            code.push(b as char);
        }
        for _ in code_length..SEPARATOR_POSITION {
            code.push(PADDING_CHARACTER);
        }
        code.push(SEPARATOR);
    }
    Ok(code)
}

/// Height in degrees of a cell with `code_length` digits.
fn latitude_precision(code_length: usize) -> f64 {
    if code_length <= PAIR_CODE_LENGTH {
        (ENCODING_BASE as f64).powi(2 - (code_length as i32) / 2)
    } else {
        (ENCODING_BASE as f64).powi(-3)
            / (GRID_ROWS as f64).powi(code_length as i32 - PAIR_CODE_LENGTH as i32)
    }
}
