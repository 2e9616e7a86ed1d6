//! Result types returned by [`GridCodeService::decode_request`].
//!
//! [`GridCodeService::decode_request`]: super::GridCodeService::decode_request

use serde::Serialize;

use crate::code::CodeArea;
use crate::coord::Coordinate;

/// Where the reference location used for recovery came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ReferenceSource {
    /// The request carried an explicit reference coordinate.
    Explicit,
    /// A location hint resolved through the gazetteer.
    Hint {
        /// The hint text that produced the match.
        hint: String,
    },
    /// The fallback reference configured on the service.
    Fallback,
}

/// The reference location a short-code recovery actually used.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedReference {
    /// The coordinate recovery ran against.
    pub coordinate: Coordinate,
    /// How the coordinate was obtained.
    pub source: ReferenceSource,
}

/// Immutable result of a successfully handled decode request.
///
/// Carries the canonical full code, the decoded cell and enough context
/// to explain how a short code was completed. Values are read through
/// accessors and never change after construction; callers that want a
/// variation build a new request instead.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodeOutcome {
    code: String,
    area: CodeArea,
    was_short: bool,
    reference: Option<ResolvedReference>,
    longitude_in_range: bool,
}

impl DecodeOutcome {
    pub(crate) fn new(
        code: String,
        area: CodeArea,
        was_short: bool,
        reference: Option<ResolvedReference>,
    ) -> Self {
        let longitude_in_range = crate::coord::is_valid_longitude(area.longitude_center());
        Self {
            code,
            area,
            was_short,
            reference,
            longitude_in_range,
        }
    }

    /// The canonical full code, uppercased and with any short prefix restored.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The rectangular cell the code denotes.
    pub fn area(&self) -> &CodeArea {
        &self.area
    }

    /// Latitude of the cell center in degrees.
    pub fn latitude(&self) -> f64 {
        self.area.latitude_center()
    }

    /// Longitude of the cell center in degrees.
    pub fn longitude(&self) -> f64 {
        self.area.longitude_center()
    }

    /// Whether the request arrived as a short code.
    pub fn was_short(&self) -> bool {
        self.was_short
    }

    /// The reference used for recovery, if the request was short.
    pub fn reference(&self) -> Option<&ResolvedReference> {
        self.reference.as_ref()
    }

    /// Whether the center longitude sits inside [-180, 180].
    pub fn longitude_in_range(&self) -> bool {
        self.longitude_in_range
    }
}
