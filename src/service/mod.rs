//! High-level decode-request orchestration.
//!
//! This module wraps the codec and the gazetteer behind a single
//! facade. Callers construct a [`DecodeRequest`] (or let the service
//! parse raw `"CODE, hint, hint"` input), and receive a
//! [`DecodeOutcome`] that records the canonical full code, the decoded
//! cell and how any short code was completed:
//!
//! - An explicit reference coordinate on the request always wins.
//! - Otherwise hints are resolved through the gazetteer in order and
//!   the first match is used; if every hint misses the request fails.
//! - Requests without hints fall back to the configured reference.
//!
//! # Example
//!
//! ```ignore
//! use gridcode::gazetteer::PlaceIndex;
//! use gridcode::service::{GridCodeService, ServiceConfig};
//!
//! let index = PlaceIndex::from_tsv_path("places/cities500.txt.gz")?;
//! let service = GridCodeService::with_gazetteer(ServiceConfig::default(), index);
//!
//! let outcome = service.decode_input("8988+3C, Baghdad").await?;
//! println!("{} -> {}, {}", outcome.code(), outcome.latitude(), outcome.longitude());
//! ```

mod config;
mod error;
mod facade;
mod outcome;
mod request;

pub use config::{
    ServiceConfig, ServiceConfigBuilder, DEFAULT_FALLBACK_LATITUDE, DEFAULT_FALLBACK_LONGITUDE,
};
pub use error::ServiceError;
pub use facade::GridCodeService;
pub use outcome::{DecodeOutcome, ReferenceSource, ResolvedReference};
pub use request::DecodeRequest;
