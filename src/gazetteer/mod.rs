//! Place-name lookup for short-code recovery.
//!
//! A gazetteer resolves a free-text location hint ("Baghdad", "Zurich") to
//! an approximate coordinate that recovery can use as its reference. The
//! service layer treats the gazetteer as an injected capability: any type
//! implementing [`Gazetteer`] or [`AsyncGazetteer`] will do. This module
//! also ships [`PlaceIndex`], an in-memory implementation loaded from a
//! GeoNames-style tab-separated table.
//!
//! Lookups are deliberately forgiving: a miss or an internal failure is
//! `None`, never an error, so callers can move on to their next hint.
//!
//! # Example
//!
//! ```ignore
//! use gridcode::gazetteer::{Gazetteer, PlaceIndex};
//!
//! let index = PlaceIndex::from_tsv_path("cities.tsv")?;
//! if let Some(coord) = index.lookup("baghdad") {
//!     println!("Baghdad is near {}", coord);
//! }
//! ```

mod index;
mod parser;

use std::future::Future;

use serde::Serialize;

use crate::coord::Coordinate;

pub use index::{GazetteerError, PlaceIndex};
pub use parser::{GeoNamesParser, ParseError};

/// A named place with its coordinate, one row of a gazetteer table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Place {
    /// Place name as it appears in the source table.
    pub name: String,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

/// Synchronous place-name lookup.
///
/// `lookup` matches the fragment against place names case-insensitively as
/// a substring and returns at most one coordinate. `None` covers both "no
/// such place" and any internal failure; lookups never raise.
pub trait Gazetteer: Send + Sync {
    /// Resolves a name fragment to an approximate coordinate.
    fn lookup(&self, fragment: &str) -> Option<Coordinate>;
}

/// Asynchronous place-name lookup.
///
/// The async counterpart of [`Gazetteer`], for implementations backed by a
/// database or a remote service. Same contract: at most one coordinate,
/// `None` on miss or failure.
pub trait AsyncGazetteer: Send + Sync {
    /// Resolves a name fragment to an approximate coordinate.
    fn lookup(&self, fragment: &str) -> impl Future<Output = Option<Coordinate>> + Send;
}

/// The gazetteer that knows no places.
///
/// Default capability for services constructed without a lookup backend;
/// every lookup misses.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoGazetteer;

impl Gazetteer for NoGazetteer {
    fn lookup(&self, _fragment: &str) -> Option<Coordinate> {
        None
    }
}

impl AsyncGazetteer for NoGazetteer {
    async fn lookup(&self, _fragment: &str) -> Option<Coordinate> {
        None
    }
}
