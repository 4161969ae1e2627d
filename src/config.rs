//! Configuration for the normalization pipeline.

use kairos_freq::Frequency;
use serde::Deserialize;

use crate::error::KairosError;

/// How a series is brought onto the target grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// Overlap-weighted averaging of interval intensities.
    #[default]
    Weighted,
    /// Keep the sample nearest to each grid point.
    Nearest,
}

/// Normalization settings.
///
/// Loaded from TOML or built with the builder methods.
///
/// ```toml
/// freq = "6H"
/// method = "nearest"
/// keep_offset = false
/// ```
///
/// # Example
///
/// ```
/// use kairos::{Method, NormalizeConfig};
///
/// let config = NormalizeConfig::new()
///     .with_freq("12H")
///     .with_method(Method::Nearest);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NormalizeConfig {
    #[serde(default = "default_freq")]
    freq: String,
    #[serde(default)]
    method: Method,
    #[serde(default = "default_true")]
    keep_offset: bool,
}

fn default_freq() -> String {
    "D".to_string()
}
fn default_true() -> bool {
    true
}

impl NormalizeConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: `freq = "D"`, `method = Weighted`, `keep_offset = true`.
    pub fn new() -> Self {
        Self {
            freq: default_freq(),
            method: Method::default(),
            keep_offset: true,
        }
    }

    /// Parses a configuration from TOML text.
    ///
    /// Missing keys take their defaults; unknown keys are rejected. The
    /// result is not validated.
    ///
    /// # Errors
    ///
    /// Returns [`KairosError::Config`] if the text is not valid for this
    /// schema.
    pub fn from_toml_str(text: &str) -> Result<Self, KairosError> {
        Ok(toml::from_str(text)?)
    }

    /// Sets the target frequency descriptor.
    pub fn with_freq(mut self, freq: impl Into<String>) -> Self {
        self.freq = freq.into();
        self
    }

    /// Sets the normalization method.
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Sets whether the grid keeps the phase of the input series.
    pub fn with_keep_offset(mut self, keep_offset: bool) -> Self {
        self.keep_offset = keep_offset;
        self
    }

    // --- Accessors ---

    /// Returns the target frequency descriptor.
    pub fn freq(&self) -> &str {
        &self.freq
    }

    /// Returns the normalization method.
    pub fn method(&self) -> Method {
        self.method
    }

    /// Returns whether the grid keeps the phase of the input series.
    pub fn keep_offset(&self) -> bool {
        self.keep_offset
    }

    /// Checks that the frequency parses and has a fixed step.
    ///
    /// # Errors
    ///
    /// Returns [`KairosError::Freq`] for a malformed descriptor and
    /// [`KairosError::InvalidConfig`] for a calendar unit.
    pub fn validate(&self) -> Result<(), KairosError> {
        let freq = Frequency::parse(&self.freq)?;
        if !freq.is_exact() {
            return Err(KairosError::InvalidConfig {
                reason: format!("frequency {:?} has no fixed timestep", self.freq),
            });
        }
        Ok(())
    }
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = NormalizeConfig::new();
        assert_eq!(c.freq(), "D");
        assert_eq!(c.method(), Method::Weighted);
        assert!(c.keep_offset());
        assert!(c.validate().is_ok());
    }

    #[test]
    fn empty_toml_gives_defaults() {
        assert_eq!(NormalizeConfig::from_toml_str("").unwrap(), NormalizeConfig::default());
    }

    #[test]
    fn full_toml() {
        let c = NormalizeConfig::from_toml_str(
            r#"
            freq = "15min"
            method = "nearest"
            keep_offset = false
            "#,
        )
        .unwrap();
        assert_eq!(c.freq(), "15min");
        assert_eq!(c.method(), Method::Nearest);
        assert!(!c.keep_offset());
    }

    #[test]
    fn unknown_key_rejected() {
        let err = NormalizeConfig::from_toml_str("frequency = \"D\"").unwrap_err();
        assert!(matches!(err, KairosError::Config(_)));
    }

    #[test]
    fn unknown_method_rejected() {
        let err = NormalizeConfig::from_toml_str("method = \"linear\"").unwrap_err();
        assert!(matches!(err, KairosError::Config(_)));
    }

    #[test]
    fn builder_chain() {
        let c = NormalizeConfig::new()
            .with_freq("6H")
            .with_method(Method::Nearest)
            .with_keep_offset(false);
        assert_eq!(c.freq(), "6H");
        assert_eq!(c.method(), Method::Nearest);
        assert!(!c.keep_offset());
    }

    #[test]
    fn validate_rejects_calendar_unit() {
        let err = NormalizeConfig::new().with_freq("M").validate().unwrap_err();
        assert!(matches!(err, KairosError::InvalidConfig { .. }));
    }

    #[test]
    fn validate_rejects_malformed() {
        let err = NormalizeConfig::new().with_freq("1X").validate().unwrap_err();
        assert!(matches!(err, KairosError::Freq(_)));
    }
}
