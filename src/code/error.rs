//! Error type for codec operations.

use crate::coord::CoordError;

/// Errors returned by encode, decode, recovery, and shortening.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CodeError {
    /// The string does not satisfy the code grammar.
    #[error("Invalid code format: '{0}'")]
    InvalidFormat(String),
    /// The operation needs a full code but was given a short one.
    #[error("Code is not a full code: '{0}'")]
    NotFull(String),
    /// The requested digit count cannot form a code.
    #[error("Invalid code length: {0} (must be at least 2, and even when below 10)")]
    InvalidLength(usize),
    /// A caller-supplied coordinate was rejected.
    #[error(transparent)]
    Coordinate(#[from] CoordError),
    /// Padded codes cannot be shortened.
    #[error("Cannot shorten a padded code: '{0}'")]
    Padded(String),
    /// The code has too few digits to shorten.
    #[error("Code is too short to shorten: '{0}' (needs at least 6 digits)")]
    NotTrimmable(String),
}
