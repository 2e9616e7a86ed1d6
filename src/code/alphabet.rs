//! Symbol set and grammar constants for grid codes.
//!
//! The digit alphabet deliberately omits vowels and easily confused glyphs
//! (0/O, 1/I/L) so codes survive handwriting and being read aloud. Symbol
//! order fixes each digit's numeric value and is an interoperability
//! contract with every other implementation of the scheme.

/// The 20 digit symbols, in ascending value order.
pub const CODE_ALPHABET: &[u8; 20] = b"23456789CFGHJMPQRVWX";

/// Number base used by the pair digits.
pub const ENCODING_BASE: i64 = 20;

/// Separates whole-cell digits from refinement digits; sits at character
/// position 8 of a full code.
pub const SEPARATOR: char = '+';

/// Character position of the separator in a full code.
pub const SEPARATOR_POSITION: usize = 8;

/// Fills unused digit positions ahead of the separator in low-precision
/// codes.
pub const PADDING_CHARACTER: char = '0';

/// Fewest significant digits a code can carry.
pub const MIN_DIGIT_COUNT: usize = 2;

/// Most significant digits a code can carry; extra digits are ignored.
pub const MAX_DIGIT_COUNT: usize = 15;

/// Digits encoded as (latitude, longitude) pairs before the grid section.
pub const PAIR_CODE_LENGTH: usize = 10;

/// Degree resolution of each digit pair, outermost pair first.
pub const PAIR_RESOLUTIONS: [f64; 5] = [20.0, 1.0, 0.05, 0.0025, 0.000125];

/// Digits in the single-digit grid refinement section.
pub const GRID_CODE_LENGTH: usize = MAX_DIGIT_COUNT - PAIR_CODE_LENGTH;

/// East-west subdivisions per grid digit.
pub const GRID_COLUMNS: i64 = 4;

/// North-south subdivisions per grid digit.
pub const GRID_ROWS: i64 = 5;

/// Digit count of a standard-precision code (a cell of roughly 14 meters).
pub const DEFAULT_CODE_LENGTH: usize = 10;

/// Shortest full code that can be shortened against a reference.
pub const MIN_TRIMMABLE_CODE_LEN: usize = 6;

/// Integer units per degree after the pair section (20^3).
pub(crate) const PAIR_PRECISION: i64 = 8_000;

/// Place value of the first digit pair (20^4).
pub(crate) const PAIR_FIRST_PLACE_VALUE: i64 =
    ENCODING_BASE.pow((PAIR_CODE_LENGTH / 2 - 1) as u32);

/// Integer latitude units per degree at full precision (20^3 * 5^5).
pub(crate) const FINAL_LAT_PRECISION: i64 =
    PAIR_PRECISION * GRID_ROWS.pow(GRID_CODE_LENGTH as u32);

/// Integer longitude units per degree at full precision (20^3 * 4^5).
pub(crate) const FINAL_LNG_PRECISION: i64 =
    PAIR_PRECISION * GRID_COLUMNS.pow(GRID_CODE_LENGTH as u32);

/// Place value of the first grid digit's row (5^4).
pub(crate) const GRID_LAT_FIRST_PLACE_VALUE: i64 =
    GRID_ROWS.pow((GRID_CODE_LENGTH - 1) as u32);

/// Place value of the first grid digit's column (4^4).
pub(crate) const GRID_LNG_FIRST_PLACE_VALUE: i64 =
    GRID_COLUMNS.pow((GRID_CODE_LENGTH - 1) as u32);

/// Returns the numeric value of a code digit, accepting either case.
///
/// `None` for characters outside the digit alphabet, including the
/// separator and padding symbols.
#[inline]
pub(crate) fn digit_value(c: char) -> Option<i64> {
    let upper = c.to_ascii_uppercase();
    CODE_ALPHABET
        .iter()
        .position(|&b| b as char == upper)
        .map(|i| i as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_values_follow_alphabet_order() {
        assert_eq!(digit_value('2'), Some(0));
        assert_eq!(digit_value('9'), Some(7));
        assert_eq!(digit_value('C'), Some(8));
        assert_eq!(digit_value('X'), Some(19));
    }

    #[test]
    fn test_digit_value_is_case_insensitive() {
        assert_eq!(digit_value('c'), Some(8));
        assert_eq!(digit_value('x'), Some(19));
    }

    #[test]
    fn test_non_digits_have_no_value() {
        assert_eq!(digit_value('0'), None);
        assert_eq!(digit_value('1'), None);
        assert_eq!(digit_value('+'), None);
        assert_eq!(digit_value('A'), None);
        assert_eq!(digit_value('O'), None);
        assert_eq!(digit_value('É'), None);
    }

    #[test]
    fn test_derived_precisions() {
        assert_eq!(PAIR_FIRST_PLACE_VALUE, 160_000);
        assert_eq!(FINAL_LAT_PRECISION, 25_000_000);
        assert_eq!(FINAL_LNG_PRECISION, 8_192_000);
        assert_eq!(GRID_LAT_FIRST_PLACE_VALUE, 625);
        assert_eq!(GRID_LNG_FIRST_PLACE_VALUE, 256);
    }
}
