//! Service configuration.

use crate::coord::Coordinate;

/// Latitude of the default fallback reference (central Baghdad).
pub const DEFAULT_FALLBACK_LATITUDE: f64 = 33.3152;

/// Longitude of the default fallback reference (central Baghdad).
pub const DEFAULT_FALLBACK_LONGITUDE: f64 = 44.3661;

/// Configuration for [`GridCodeService`].
///
/// The only tunable is the fallback reference: the coordinate used to
/// recover a short code when the request carries neither an explicit
/// reference nor any usable hints. The default fallback is central
/// Baghdad; [`ServiceConfigBuilder::without_fallback`] disables it so
/// that bare short codes fail instead.
///
/// [`GridCodeService`]: super::GridCodeService
///
/// # Example
///
/// ```
/// use gridcode::coord::Coordinate;
/// use gridcode::service::ServiceConfig;
///
/// let zurich = Coordinate::new(47.37, 8.54)?;
/// let config = ServiceConfig::builder().fallback_reference(zurich).build();
/// assert_eq!(config.fallback_reference(), Some(zurich));
/// # Ok::<(), gridcode::coord::CoordError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    fallback_reference: Option<Coordinate>,
}

impl ServiceConfig {
    /// Create a builder for constructing a custom configuration.
    pub fn builder() -> ServiceConfigBuilder {
        ServiceConfigBuilder::new()
    }

    /// The coordinate used when a short code arrives with no other
    /// source of reference, or `None` when the fallback is disabled.
    pub fn fallback_reference(&self) -> Option<Coordinate> {
        self.fallback_reference
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            fallback_reference: default_fallback(),
        }
    }
}

fn default_fallback() -> Option<Coordinate> {
    // The constants are in range, so this never yields None
    Coordinate::new(DEFAULT_FALLBACK_LATITUDE, DEFAULT_FALLBACK_LONGITUDE).ok()
}

/// Builder for [`ServiceConfig`].
#[derive(Debug, Clone, Default)]
pub struct ServiceConfigBuilder {
    fallback_reference: Option<Option<Coordinate>>,
}

impl ServiceConfigBuilder {
    /// Create a new builder with all settings at their defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `reference` instead of the default fallback coordinate.
    pub fn fallback_reference(mut self, reference: Coordinate) -> Self {
        self.fallback_reference = Some(Some(reference));
        self
    }

    /// Disable the fallback entirely.
    ///
    /// Short codes without an explicit reference or a resolving hint
    /// will then fail with `ShortCodeWithoutReference`.
    pub fn without_fallback(mut self) -> Self {
        self.fallback_reference = Some(None);
        self
    }

    /// Build the configuration, filling unset values with defaults.
    pub fn build(self) -> ServiceConfig {
        ServiceConfig {
            fallback_reference: self.fallback_reference.unwrap_or_else(default_fallback),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_falls_back_to_baghdad() {
        let config = ServiceConfig::default();
        let fallback = config.fallback_reference().unwrap();
        assert_eq!(fallback.latitude(), DEFAULT_FALLBACK_LATITUDE);
        assert_eq!(fallback.longitude(), DEFAULT_FALLBACK_LONGITUDE);
    }

    #[test]
    fn test_builder_defaults_match_default() {
        assert_eq!(ServiceConfig::builder().build(), ServiceConfig::default());
    }

    #[test]
    fn test_builder_custom_fallback() {
        let zurich = Coordinate::new(47.37, 8.54).unwrap();
        let config = ServiceConfig::builder().fallback_reference(zurich).build();
        assert_eq!(config.fallback_reference(), Some(zurich));
    }

    #[test]
    fn test_builder_without_fallback() {
        let config = ServiceConfig::builder().without_fallback().build();
        assert!(config.fallback_reference().is_none());
    }
}
