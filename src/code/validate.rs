//! Grammar validation for grid codes.

use super::alphabet::{
    digit_value, ENCODING_BASE, PADDING_CHARACTER, SEPARATOR, SEPARATOR_POSITION,
};
use crate::coord::{MAX_LAT, MAX_LON};

/// Returns true when the string satisfies the code grammar.
///
/// Case-insensitive and total: any input, including non-ASCII text, gets a
/// verdict rather than an error. This checks shape only; a valid code may
/// still be a short code that cannot be decoded on its own.
pub fn is_valid(code: &str) -> bool {
    if !code.is_ascii() || code.len() == 1 {
        return false;
    }

    // Exactly one separator, at an even position no later than 8.
    let sep = match code.find(SEPARATOR) {
        Some(i) => i,
        None => return false,
    };
    if code[sep + 1..].contains(SEPARATOR) {
        return false;
    }
    if sep > SEPARATOR_POSITION || sep % 2 == 1 {
        return false;
    }

    // Padding, when present: the code keeps its full-length prefix, carries
    // nothing beyond the separator, and the pad run is a single even-length
    // stretch ending right at the separator.
    if let Some(pad) = code.find(PADDING_CHARACTER) {
        if sep < SEPARATOR_POSITION || pad == 0 || sep + 1 != code.len() {
            return false;
        }
        let run_len = code[pad..]
            .bytes()
            .take_while(|&b| b == PADDING_CHARACTER as u8)
            .count();
        if run_len % 2 == 1 || pad + run_len != sep {
            return false;
        }
    }

    // A lone digit after the separator cannot refine the cell.
    if code.len() - sep == 2 {
        return false;
    }

    // Everything else must be a digit symbol, either case.
    code.chars()
        .filter(|&c| c != SEPARATOR && c != PADDING_CHARACTER)
        .all(|c| digit_value(c).is_some())
}

/// Returns true for valid codes whose leading digits were omitted.
///
/// Short codes position their separator before character 8 and need a
/// reference location to be recovered into full codes.
pub fn is_short(code: &str) -> bool {
    if !is_valid(code) {
        return false;
    }
    code.find(SEPARATOR)
        .map_or(false, |i| i < SEPARATOR_POSITION)
}

/// Returns true for valid codes that carry all their leading digits.
///
/// Beyond the grammar, the first digit pair must denote a cell on the
/// planet: a first digit beyond C would place the cell past the north pole,
/// and a second digit beyond V more than a full turn east.
pub fn is_full(code: &str) -> bool {
    if !is_valid(code) || is_short(code) {
        return false;
    }
    let mut digits = code.chars().filter_map(digit_value);
    let lat_ok = digits
        .next()
        .map_or(false, |v| ((v * ENCODING_BASE) as f64) < MAX_LAT * 2.0);
    let lng_ok = digits
        .next()
        .map_or(false, |v| ((v * ENCODING_BASE) as f64) < MAX_LON * 2.0);
    lat_ok && lng_ok
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_full_codes() {
        assert!(is_valid("8FWC2345+G6"));
        assert!(is_valid("8FWC2345+G6G"));
        assert!(is_valid("8fwc2345+"));
        assert!(is_valid("8FWCX400+"));
    }

    #[test]
    fn test_valid_short_codes() {
        assert!(is_valid("WC2345+G6g"));
        assert!(is_valid("2345+G6"));
        assert!(is_valid("45+G6"));
        assert!(is_valid("+G6"));
    }

    #[test]
    fn test_invalid_codes() {
        // Bad digits
        assert!(!is_valid("G+"));
        assert!(!is_valid("+"));
        assert!(!is_valid("8FWC2345+G"));
        assert!(!is_valid("8FWC2_45+G6"));
        assert!(!is_valid("8FWC2η45+G6"));
        assert!(!is_valid("8FWC2345+G6+"));
        assert!(!is_valid("8fwc2345+G6+"));
        assert!(!is_valid("8FWC2300+G6"));
        assert!(!is_valid("WC2300+G6g"));
        assert!(!is_valid("WC2345+G"));
        // Separator misplaced
        assert!(!is_valid("8FWC2345G6+"));
        assert!(!is_valid("8FWC234+5G6"));
    }

    #[test]
    fn test_empty_and_whitespace_are_invalid() {
        assert!(!is_valid(""));
        assert!(!is_valid("  "));
        assert!(!is_valid(" 8FWC2345+G6"));
    }

    #[test]
    fn test_padding_rules() {
        assert!(is_valid("8FWC0000+"));
        assert!(is_valid("8FWCX400+"));
        // Pad run must reach the separator
        assert!(!is_valid("8F00WC00+"));
        assert!(!is_valid("8FWC0045+"));
        // Odd run
        assert!(!is_valid("8FWCX000+"));
        // Nothing after the separator of a padded code
        assert!(!is_valid("8FWC0000+G6"));
        // Short codes cannot be padded
        assert!(!is_valid("WC0000+"));
        // Padding cannot start a code
        assert!(!is_valid("00WC0000+"));
    }

    #[test]
    fn test_is_short_classification() {
        assert!(is_short("WC2345+G6"));
        assert!(is_short("2345+G6"));
        assert!(is_short("+G6"));
        assert!(!is_short("8FWC2345+G6"));
        assert!(!is_short("not a code"));
    }

    #[test]
    fn test_is_full_classification() {
        assert!(is_full("8FWC2345+G6"));
        assert!(is_full("8fwc2345+g6"));
        assert!(is_full("22220000+"));
        assert!(!is_full("WC2345+G6"));
        assert!(!is_full("garbage"));
    }

    #[test]
    fn test_is_full_rejects_out_of_range_origins() {
        // First digit F or beyond puts the latitude band past the pole.
        assert!(!is_full("F2220000+"));
        assert!(!is_full("X2220000+"));
        // C is the last latitude band inside the range.
        assert!(is_full("C2220000+"));
        // Second digit past V wraps more than a full turn of longitude.
        assert!(!is_full("2W220000+"));
        assert!(!is_full("2X220000+"));
        assert!(is_full("2V220000+"));
    }
}
