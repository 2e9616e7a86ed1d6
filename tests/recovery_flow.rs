//! Integration tests for the decode-request service flow.
//!
//! These tests verify the complete request paths through
//! `GridCodeService`:
//! - Full codes decode without touching reference resolution
//! - Explicit references, hints and the fallback apply in priority order
//! - Hints resolve through a real `PlaceIndex` in request order
//! - Failure modes: exhausted hints, missing reference, bad codes
//! - Loading a gzipped GeoNames extract end to end
//!
//! Run with: `cargo test --test recovery_flow`

use std::io::Write;

use gridcode::code::CodeError;
use gridcode::coord::Coordinate;
use gridcode::gazetteer::PlaceIndex;
use gridcode::service::{
    DecodeRequest, GridCodeService, ReferenceSource, ServiceConfig, ServiceError,
    DEFAULT_FALLBACK_LATITUDE, DEFAULT_FALLBACK_LONGITUDE,
};

// ============================================================================
// Test Helpers
// ============================================================================

/// A small GeoNames-shaped extract with two places.
const SAMPLE_ROWS: &str = "\
291074\tZurich\tZurich\tZH,Zuerich\t47.36667\t8.55\tP\tPPLA\n\
98182\tBaghdad\tBaghdad\tBGW\t33.3152\t44.3661\tP\tPPLC\n";

/// Build a place index from the sample rows.
fn sample_index() -> PlaceIndex {
    PlaceIndex::from_reader(SAMPLE_ROWS.as_bytes()).expect("sample rows should parse")
}

/// A service with the sample gazetteer and default configuration.
fn sample_service() -> GridCodeService<PlaceIndex> {
    GridCodeService::with_gazetteer(ServiceConfig::default(), sample_index())
}

// ============================================================================
// Full-Code Requests
// ============================================================================

#[tokio::test]
async fn test_full_code_decodes_without_reference() {
    let service = sample_service();

    let outcome = service.decode_input("8fvc2222+22").await.unwrap();

    assert_eq!(outcome.code(), "8FVC2222+22");
    assert!(!outcome.was_short());
    assert!(outcome.reference().is_none());
    assert!(outcome.longitude_in_range());
    assert!((outcome.latitude() - 47.0000625).abs() < 1e-10);
    assert!((outcome.longitude() - 8.0000625).abs() < 1e-10);
}

#[tokio::test]
async fn test_outcome_serializes_to_json() {
    let service = sample_service();
    let outcome = service.decode_input("8FVC2222+22").await.unwrap();

    let json = serde_json::to_string(&outcome).unwrap();
    assert!(json.contains("\"code\":\"8FVC2222+22\""));
    assert!(json.contains("\"was_short\":false"));
}

// ============================================================================
// Reference Resolution Order
// ============================================================================

#[tokio::test]
async fn test_explicit_reference_beats_hints() {
    let service = sample_service();
    let zurich = Coordinate::new(47.36667, 8.55).unwrap();
    let request = DecodeRequest::new("2222+22")
        .with_hint("Baghdad")
        .with_reference(zurich);

    let outcome = service.decode_request(&request).await.unwrap();

    let resolved = outcome.reference().unwrap();
    assert_eq!(resolved.source, ReferenceSource::Explicit);
    assert_eq!(resolved.coordinate, zurich);
    // Nearest matching cell sits one step east of the reference cell
    assert_eq!(outcome.code(), "8FVF2222+22");
}

#[tokio::test]
async fn test_hints_resolve_in_request_order() {
    let service = sample_service();
    let request = DecodeRequest::new("8988+3C")
        .with_hint("Atlantis")
        .with_hint("Baghdad");

    let outcome = service.decode_request(&request).await.unwrap();

    assert_eq!(outcome.code(), "8H568988+3C");
    assert!(outcome.was_short());
    assert_eq!(
        outcome.reference().unwrap().source,
        ReferenceSource::Hint {
            hint: "Baghdad".to_string()
        }
    );
}

#[tokio::test]
async fn test_raw_input_with_hint_recovers() {
    let service = sample_service();

    let outcome = service.decode_input(" 8988+3c , baghdad ").await.unwrap();

    assert_eq!(outcome.code(), "8H568988+3C");
    assert_eq!(
        outcome.reference().unwrap().source,
        ReferenceSource::Hint {
            hint: "baghdad".to_string()
        }
    );
}

/// When hints are given, a total miss is terminal even though the
/// service has a fallback configured.
#[tokio::test]
async fn test_exhausted_hints_do_not_fall_back() {
    let service = sample_service();
    let request = DecodeRequest::new("8988+3C")
        .with_hint("Atlantis")
        .with_hint("Lemuria");

    let err = service.decode_request(&request).await.unwrap_err();

    assert_eq!(
        err,
        ServiceError::NoReferenceFound {
            hints: vec!["Atlantis".to_string(), "Lemuria".to_string()]
        }
    );
}

#[tokio::test]
async fn test_bare_short_code_uses_fallback() {
    let service = sample_service();

    let outcome = service.decode_input("8988+3C").await.unwrap();

    assert_eq!(outcome.code(), "8H568988+3C");
    let resolved = outcome.reference().unwrap();
    assert_eq!(resolved.source, ReferenceSource::Fallback);
    assert_eq!(resolved.coordinate.latitude(), DEFAULT_FALLBACK_LATITUDE);
    assert_eq!(resolved.coordinate.longitude(), DEFAULT_FALLBACK_LONGITUDE);
}

#[tokio::test]
async fn test_disabled_fallback_makes_bare_short_codes_fail() {
    let config = ServiceConfig::builder().without_fallback().build();
    let service = GridCodeService::with_gazetteer(config, sample_index());

    let err = service.decode_input("8988+3C").await.unwrap_err();

    assert_eq!(err, ServiceError::ShortCodeWithoutReference);
}

#[tokio::test]
async fn test_invalid_code_is_rejected_up_front() {
    let service = sample_service();

    let err = service.decode_input("not a code, Baghdad").await.unwrap_err();

    assert!(matches!(
        err,
        ServiceError::Code(CodeError::InvalidFormat(_))
    ));
}

// ============================================================================
// Gazetteer Loading
// ============================================================================

/// End to end: write a gzipped extract, load it, resolve a hint with it.
#[tokio::test]
async fn test_gzipped_extract_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("places.txt.gz");

    let file = std::fs::File::create(&path).unwrap();
    let mut encoder = flate2::write::GzEncoder::new(file, flate2::Compression::default());
    encoder.write_all(SAMPLE_ROWS.as_bytes()).unwrap();
    encoder.finish().unwrap();

    let index = PlaceIndex::from_tsv_path(&path).unwrap();
    assert_eq!(index.len(), 2);

    let service = GridCodeService::with_gazetteer(ServiceConfig::default(), index);
    let outcome = service.decode_input("2222+22, Zurich").await.unwrap();

    assert_eq!(outcome.code(), "8FVF2222+22");
    assert_eq!(
        outcome.reference().unwrap().source,
        ReferenceSource::Hint {
            hint: "Zurich".to_string()
        }
    );
}
