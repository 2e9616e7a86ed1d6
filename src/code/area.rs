//! Decoded code areas.

use serde::Serialize;

/// The rectangular cell of the Earth's surface a full code denotes.
///
/// Bounds are degrees. `code_length` is the number of significant digits the
/// cell was decoded from, which alone determines its height and width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CodeArea {
    /// Southern boundary in degrees.
    pub latitude_low: f64,
    /// Western boundary in degrees.
    pub longitude_low: f64,
    /// Northern boundary in degrees.
    pub latitude_high: f64,
    /// Eastern boundary in degrees.
    pub longitude_high: f64,
    /// Significant digits the cell was decoded from (2 to 15).
    pub code_length: usize,
}

impl CodeArea {
    /// Latitude of the cell center in degrees.
    #[inline]
    pub fn latitude_center(&self) -> f64 {
        self.latitude_low + (self.latitude_high - self.latitude_low) / 2.0
    }

    /// Longitude of the cell center in degrees.
    #[inline]
    pub fn longitude_center(&self) -> f64 {
        self.longitude_low + (self.longitude_high - self.longitude_low) / 2.0
    }

    /// Center point as (latitude, longitude) in degrees.
    #[inline]
    pub fn center(&self) -> (f64, f64) {
        (self.latitude_center(), self.longitude_center())
    }

    /// Returns true when the point lies within the cell, boundaries
    /// included.
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        self.latitude_low <= latitude
            && latitude <= self.latitude_high
            && self.longitude_low <= longitude
            && longitude <= self.longitude_high
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zurich_cell() -> CodeArea {
        CodeArea {
            latitude_low: 47.0,
            longitude_low: 8.0,
            latitude_high: 47.000125,
            longitude_high: 8.000125,
            code_length: 10,
        }
    }

    #[test]
    fn test_centers_are_midpoints() {
        let area = zurich_cell();
        assert!((area.latitude_center() - 47.0000625).abs() < 1e-12);
        assert!((area.longitude_center() - 8.0000625).abs() < 1e-12);
        assert_eq!(
            area.center(),
            (area.latitude_center(), area.longitude_center())
        );
    }

    #[test]
    fn test_contains_includes_boundaries() {
        let area = zurich_cell();
        assert!(area.contains(47.0, 8.0));
        assert!(area.contains(47.000125, 8.000125));
        assert!(area.contains(47.00006, 8.00006));
        assert!(!area.contains(47.001, 8.0));
        assert!(!area.contains(47.0, 7.999));
    }
}
