//! The grid-code service facade.
//!
//! [`GridCodeService`] ties the codec and the gazetteer together behind
//! one entry point: hand it a [`DecodeRequest`] and get back a
//! [`DecodeOutcome`] describing the resolved cell. Full codes decode
//! directly; short codes are completed against a reference location
//! resolved in priority order (explicit coordinate, then hints, then
//! the configured fallback).

use crate::code;
use crate::gazetteer::{AsyncGazetteer, NoGazetteer};

use super::config::ServiceConfig;
use super::error::ServiceError;
use super::outcome::{DecodeOutcome, ReferenceSource, ResolvedReference};
use super::request::DecodeRequest;

/// Facade for decoding grid codes with short-code recovery.
///
/// The gazetteer is a type parameter so deployments choose their own
/// place lookup; the default [`NoGazetteer`] resolves nothing and makes
/// hint-free operation explicit.
///
/// # Example
///
/// ```ignore
/// use gridcode::service::{DecodeRequest, GridCodeService, ServiceConfig};
///
/// let service = GridCodeService::new(ServiceConfig::default());
/// let outcome = service.decode_request(&DecodeRequest::new("8988+3C")).await?;
/// assert_eq!(outcome.code(), "8H568988+3C");
/// ```
pub struct GridCodeService<G: AsyncGazetteer = NoGazetteer> {
    config: ServiceConfig,
    gazetteer: G,
}

impl GridCodeService<NoGazetteer> {
    /// Create a service without a gazetteer.
    ///
    /// Hints are still accepted on requests but never resolve, so short
    /// codes rely on explicit references or the configured fallback.
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            config,
            gazetteer: NoGazetteer,
        }
    }
}

impl<G: AsyncGazetteer> GridCodeService<G> {
    /// Create a service that resolves hints through `gazetteer`.
    pub fn with_gazetteer(config: ServiceConfig, gazetteer: G) -> Self {
        Self { config, gazetteer }
    }

    /// The configuration this service was built with.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Parse raw `"CODE, hint, hint"` input and resolve it.
    ///
    /// Convenience wrapper over [`DecodeRequest::parse`] and
    /// [`decode_request`](Self::decode_request).
    pub async fn decode_input(&self, input: &str) -> Result<DecodeOutcome, ServiceError> {
        self.decode_request(&DecodeRequest::parse(input)).await
    }

    /// Resolve a decode request into an immutable outcome.
    ///
    /// Full codes decode directly. Short codes first obtain a reference
    /// location: an explicit coordinate on the request wins, otherwise
    /// hints are tried in order against the gazetteer, otherwise the
    /// configured fallback applies. When hints were given and all of
    /// them miss, the request fails with
    /// [`ServiceError::NoReferenceFound`] rather than silently falling
    /// back to a location the caller never mentioned.
    pub async fn decode_request(
        &self,
        request: &DecodeRequest,
    ) -> Result<DecodeOutcome, ServiceError> {
        let code = request.code();

        if !code::is_short(code) {
            // Decodes full codes and rejects everything else with the
            // codec's own error
            let area = code::decode(code)?;
            let canonical = code.to_ascii_uppercase();
            tracing::debug!(code = %canonical, "Decoded full code");
            return Ok(DecodeOutcome::new(canonical, area, false, None));
        }

        let reference = self.resolve_reference(request).await?;
        let full = code::recover_nearest(
            code,
            reference.coordinate.latitude(),
            reference.coordinate.longitude(),
        )?;
        let area = code::decode(&full)?;
        tracing::debug!(
            short = %code,
            recovered = %full,
            source = ?reference.source,
            "Recovered short code"
        );
        Ok(DecodeOutcome::new(full, area, true, Some(reference)))
    }

    async fn resolve_reference(
        &self,
        request: &DecodeRequest,
    ) -> Result<ResolvedReference, ServiceError> {
        if let Some(coordinate) = request.reference() {
            return Ok(ResolvedReference {
                coordinate,
                source: ReferenceSource::Explicit,
            });
        }

        if !request.hints().is_empty() {
            for hint in request.hints() {
                match self.gazetteer.lookup(hint).await {
                    Some(coordinate) => {
                        tracing::debug!(hint = %hint, %coordinate, "Hint resolved");
                        return Ok(ResolvedReference {
                            coordinate,
                            source: ReferenceSource::Hint { hint: hint.clone() },
                        });
                    }
                    None => tracing::debug!(hint = %hint, "Hint not found"),
                }
            }
            // Hints name where the caller means; guessing a different
            // reference would recover a plausible-looking wrong cell
            return Err(ServiceError::NoReferenceFound {
                hints: request.hints().to_vec(),
            });
        }

        if let Some(coordinate) = self.config.fallback_reference() {
            tracing::debug!(%coordinate, "Using fallback reference");
            return Ok(ResolvedReference {
                coordinate,
                source: ReferenceSource::Fallback,
            });
        }

        Err(ServiceError::ShortCodeWithoutReference)
    }
}
