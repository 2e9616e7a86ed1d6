//! Gridcode - Grid code (plus code) encoding, decoding and recovery
//!
//! This library implements the open grid-code geocoding scheme: short
//! alphanumeric codes that name rectangular cells on the Earth's
//! surface, with configurable precision and an offline recovery path
//! for abbreviated codes.
//!
//! # High-Level API
//!
//! For most use cases, the [`service`] module provides a simplified facade:
//!
//! ```ignore
//! use gridcode::gazetteer::PlaceIndex;
//! use gridcode::service::{GridCodeService, ServiceConfig};
//!
//! let index = PlaceIndex::from_tsv_path("places/cities500.txt.gz")?;
//! let service = GridCodeService::with_gazetteer(ServiceConfig::default(), index);
//!
//! let outcome = service.decode_input("8988+3C, Baghdad").await?;
//! println!("{} is near {}, {}", outcome.code(), outcome.latitude(), outcome.longitude());
//! ```
//!
//! The [`code`] module exposes the codec directly for callers that do
//! not need hint resolution, and [`coord`] carries the validated
//! coordinate type shared across the crate.

pub mod code;
pub mod coord;
pub mod gazetteer;
pub mod logging;
pub mod service;

/// Version of the gridcode library.
///
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_codec_modules_are_wired() {
        let code = code::encode(47.366667, 8.55, 10).unwrap();
        let area = code::decode(&code).unwrap();
        assert!(area.contains(47.366667, 8.55));
    }
}
