//! Decoding full codes into geographic cells.

use super::alphabet::{
    digit_value, ENCODING_BASE, FINAL_LAT_PRECISION, FINAL_LNG_PRECISION, GRID_COLUMNS,
    GRID_LAT_FIRST_PLACE_VALUE, GRID_LNG_FIRST_PLACE_VALUE, GRID_ROWS, MAX_DIGIT_COUNT,
    PADDING_CHARACTER, PAIR_CODE_LENGTH, PAIR_FIRST_PLACE_VALUE, PAIR_PRECISION, SEPARATOR,
};
use super::area::CodeArea;
use super::error::CodeError;
use super::validate::{is_full, is_valid};
use crate::coord::{MIN_LAT, MIN_LON};

/// Decodes a full code into the cell it denotes.
///
/// Digit arithmetic runs in integer units so cell boundaries come out
/// exact; the results are converted to degrees once at the end. Digits
/// beyond the fifteenth are ignored.
///
/// # Errors
///
/// [`CodeError::InvalidFormat`] when the string is not a code at all, and
/// [`CodeError::NotFull`] when it is a short code whose leading digits were
/// omitted. Nothing is partially decoded.
///
/// # Examples
///
/// ```
/// use gridcode::code::decode;
///
/// let area = decode("8FVC2222+22")?;
/// assert_eq!(area.latitude_low, 47.0);
/// assert_eq!(area.longitude_low, 8.0);
/// assert_eq!(area.code_length, 10);
/// # Ok::<(), gridcode::code::CodeError>(())
/// ```
pub fn decode(code: &str) -> Result<CodeArea, CodeError> {
    if !is_valid(code) {
        return Err(CodeError::InvalidFormat(code.to_string()));
    }
    if !is_full(code) {
        return Err(CodeError::NotFull(code.to_string()));
    }

    // Strip the separator and padding; what remains are significant digits.
    let digits: Vec<i64> = code
        .chars()
        .filter(|&c| c != SEPARATOR && c != PADDING_CHARACTER)
        .filter_map(digit_value)
        .collect();
    let digit_count = digits.len().min(MAX_DIGIT_COUNT);

    // Pair section: interleaved latitude/longitude digits, each pair
    // narrowing the cell by a factor of 20 per axis.
    let mut normal_lat = (MIN_LAT as i64) * PAIR_PRECISION;
    let mut normal_lng = (MIN_LON as i64) * PAIR_PRECISION;
    let mut pv = PAIR_FIRST_PLACE_VALUE;
    let pair_digits = digit_count.min(PAIR_CODE_LENGTH);
    for i in (0..pair_digits).step_by(2) {
        normal_lat += digits[i] * pv;
        normal_lng += digits[i + 1] * pv;
        if i < pair_digits - 2 {
            pv /= ENCODING_BASE;
        }
    }
    let mut lat_precision = pv as f64 / PAIR_PRECISION as f64;
    let mut lng_precision = lat_precision;

    // Grid section: single digits subdividing by 5 rows and 4 columns.
    let mut grid_lat: i64 = 0;
    let mut grid_lng: i64 = 0;
    if digit_count > PAIR_CODE_LENGTH {
        let mut rowpv = GRID_LAT_FIRST_PLACE_VALUE;
        let mut colpv = GRID_LNG_FIRST_PLACE_VALUE;
        for i in PAIR_CODE_LENGTH..digit_count {
            grid_lat += (digits[i] / GRID_COLUMNS) * rowpv;
            grid_lng += (digits[i] % GRID_COLUMNS) * colpv;
            if i < digit_count - 1 {
                rowpv /= GRID_ROWS;
                colpv /= GRID_COLUMNS;
            }
        }
        lat_precision = rowpv as f64 / FINAL_LAT_PRECISION as f64;
        lng_precision = colpv as f64 / FINAL_LNG_PRECISION as f64;
    }

    let lat = normal_lat as f64 / PAIR_PRECISION as f64
        + grid_lat as f64 / FINAL_LAT_PRECISION as f64;
    let lng = normal_lng as f64 / PAIR_PRECISION as f64
        + grid_lng as f64 / FINAL_LNG_PRECISION as f64;

    Ok(CodeArea {
        latitude_low: round14(lat),
        longitude_low: round14(lng),
        latitude_high: round14(lat + lat_precision),
        longitude_high: round14(lng + lng_precision),
        code_length: digit_count,
    })
}

/// Rounds at the 14th decimal place to absorb float artifacts from the
/// degree conversion.
#[inline]
fn round14(value: f64) -> f64 {
    (value * 1e14).round() / 1e14
}
