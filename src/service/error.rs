//! Error types for decode-request handling.

use crate::code::CodeError;

/// Errors that can occur while resolving a decode request.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ServiceError {
    /// The codec rejected the code or a coordinate.
    #[error(transparent)]
    Code(#[from] CodeError),

    /// A short code arrived with no reference, no hints and no fallback.
    #[error("Short code requires a reference location and none was available")]
    ShortCodeWithoutReference,

    /// Hints were supplied but none of them resolved to a place.
    #[error("No reference location found for hints: {hints:?}")]
    NoReferenceFound {
        /// The hints that were tried, in request order.
        hints: Vec<String>,
    },
}
