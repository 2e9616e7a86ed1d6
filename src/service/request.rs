//! Decode request construction and parsing.

use crate::coord::Coordinate;

/// A request to resolve a grid code into a cell.
///
/// Carries the candidate code, optional location hints for short-code
/// recovery and an optional explicit reference coordinate. Raw user
/// input of the shape `"CODE, hint, hint"` is accepted through
/// [`DecodeRequest::parse`].
///
/// # Example
///
/// ```
/// use gridcode::service::DecodeRequest;
///
/// let request = DecodeRequest::parse("8988+3C, Baghdad, Karrada");
/// assert_eq!(request.code(), "8988+3C");
/// assert_eq!(request.hints(), &["Baghdad".to_string(), "Karrada".to_string()]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DecodeRequest {
    code: String,
    hints: Vec<String>,
    reference: Option<Coordinate>,
}

impl DecodeRequest {
    /// Create a request for a bare code with no hints or reference.
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            hints: Vec::new(),
            reference: None,
        }
    }

    /// Parse raw input of the form `"CODE, hint, hint"`.
    ///
    /// The first comma-separated field is the code; the remaining
    /// non-empty fields become location hints in their written order.
    /// Whitespace around fields is trimmed.
    pub fn parse(input: &str) -> Self {
        let mut fields = input.split(',').map(str::trim);
        let code = fields.next().unwrap_or("").to_string();
        let hints = fields
            .filter(|field| !field.is_empty())
            .map(str::to_string)
            .collect();
        Self {
            code,
            hints,
            reference: None,
        }
    }

    /// Attach an explicit reference coordinate for short-code recovery.
    ///
    /// An explicit reference takes priority over hints and fallback.
    pub fn with_reference(mut self, reference: Coordinate) -> Self {
        self.reference = Some(reference);
        self
    }

    /// Append a location hint. Hints are tried in insertion order.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hints.push(hint.into());
        self
    }

    /// The candidate code as submitted.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Location hints in the order they should be tried.
    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    /// The explicit reference coordinate, if one was attached.
    pub fn reference(&self) -> Option<Coordinate> {
        self.reference
    }
}
