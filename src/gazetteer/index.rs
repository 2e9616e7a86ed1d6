//! In-memory place index with substring lookup.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use super::parser::{GeoNamesParser, ParseError};
use super::{AsyncGazetteer, Gazetteer, Place};
use crate::coord::Coordinate;

/// Error type for place index operations.
#[derive(Debug, thiserror::Error)]
pub enum GazetteerError {
    #[error("Place table not found at: {0}")]
    NotFound(PathBuf),
    #[error("Failed to parse place table: {0}")]
    ParseError(#[from] ParseError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// In-memory gazetteer backed by a GeoNames-style table.
///
/// Rows keep their file order and lookups return the first row whose name
/// contains the fragment, matching ASCII case-insensitively. That mirrors
/// an unordered `LIKE '%fragment%'` query with a limit of one: fast to
/// answer, first hit wins, no ranking.
#[derive(Debug, Default)]
pub struct PlaceIndex {
    places: Vec<Place>,
}

impl PlaceIndex {
    /// Create an empty place index.
    pub fn new() -> Self {
        Self { places: Vec::new() }
    }

    /// Build a place index from a tab-separated table file.
    ///
    /// Supports both plain text and gzip compressed `.gz` files.
    pub fn from_tsv_path<P: AsRef<Path>>(path: P) -> Result<Self, GazetteerError> {
        use flate2::read::GzDecoder;

        let path = path.as_ref();
        if !path.exists() {
            return Err(GazetteerError::NotFound(path.to_path_buf()));
        }

        let file = File::open(path)?;

        if path.extension().is_some_and(|ext| ext == "gz") {
            tracing::debug!(path = %path.display(), "Loading gzip compressed place table");
            let decoder = GzDecoder::new(file);
            Self::from_reader(BufReader::new(decoder))
        } else {
            Self::from_reader(BufReader::new(file))
        }
    }

    /// Build a place index from a reader of tab-separated rows.
    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Self, GazetteerError> {
        let places = GeoNamesParser::parse_all(reader)?;
        let index = Self { places };

        tracing::info!(count = index.len(), "Built place index");

        Ok(index)
    }

    /// Append a place to the index, after all existing rows.
    pub fn push(&mut self, place: Place) {
        self.places.push(place);
    }

    /// Returns the number of places in the index.
    pub fn len(&self) -> usize {
        self.places.len()
    }

    /// Returns true if the index holds no places.
    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    /// Returns an iterator over all places in file order.
    pub fn iter(&self) -> impl Iterator<Item = &Place> {
        self.places.iter()
    }

    fn find(&self, fragment: &str) -> Option<Coordinate> {
        let needle = fragment.to_ascii_lowercase();
        self.places.iter().find_map(|place| {
            if place.name.to_ascii_lowercase().contains(&needle) {
                Coordinate::new(place.latitude, place.longitude).ok()
            } else {
                None
            }
        })
    }
}

impl Gazetteer for PlaceIndex {
    fn lookup(&self, fragment: &str) -> Option<Coordinate> {
        self.find(fragment)
    }
}

impl AsyncGazetteer for PlaceIndex {
    async fn lookup(&self, fragment: &str) -> Option<Coordinate> {
        self.find(fragment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_index() -> PlaceIndex {
        let mut index = PlaceIndex::new();
        index.push(Place {
            name: "Zurich".to_string(),
            latitude: 47.36667,
            longitude: 8.55,
        });
        index.push(Place {
            name: "Zurich (Kreis 11)".to_string(),
            latitude: 47.41428,
            longitude: 8.54502,
        });
        index.push(Place {
            name: "Baghdad".to_string(),
            latitude: 33.3152,
            longitude: 44.3661,
        });
        index
    }

    #[test]
    fn test_empty_index() {
        let index = PlaceIndex::new();
        assert!(index.is_empty());
        assert_eq!(Gazetteer::lookup(&index, "Baghdad"), None);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let index = sample_index();
        let coord = Gazetteer::lookup(&index, "baghdad").unwrap();
        assert_eq!(coord.latitude(), 33.3152);
        assert_eq!(coord.longitude(), 44.3661);
        assert!(Gazetteer::lookup(&index, "BAGHDAD").is_some());
    }

    #[test]
    fn test_lookup_matches_substrings_first_row_wins() {
        let index = sample_index();
        // Both Zurich rows match the fragment; the earlier row wins.
        let coord = Gazetteer::lookup(&index, "zurich").unwrap();
        assert_eq!(coord.latitude(), 47.36667);
        // An interior fragment still matches.
        let kreis = Gazetteer::lookup(&index, "kreis").unwrap();
        assert_eq!(kreis.latitude(), 47.41428);
    }

    #[test]
    fn test_lookup_miss_returns_none() {
        let index = sample_index();
        assert_eq!(Gazetteer::lookup(&index, "Atlantis"), None);
    }

    #[tokio::test]
    async fn test_async_lookup_matches_sync() {
        let index = sample_index();
        let blocking = Gazetteer::lookup(&index, "baghdad");
        let awaited = AsyncGazetteer::lookup(&index, "baghdad").await;
        assert_eq!(blocking, awaited);
    }

    #[test]
    fn test_from_reader_counts_rows() {
        let data = "98182\tBaghdad\tBaghdad\t\t33.3152\t44.3661\tP\tPPLC\n";
        let index = PlaceIndex::from_reader(data.as_bytes()).unwrap();
        assert_eq!(index.len(), 1);
        assert!(Gazetteer::lookup(&index, "baghdad").is_some());
    }

    #[test]
    fn test_not_found_error() {
        let result = PlaceIndex::from_tsv_path("/nonexistent/places.tsv");
        assert!(matches!(result, Err(GazetteerError::NotFound(_))));
    }
}
