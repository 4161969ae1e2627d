//! Error types for the kairos facade.

use kairos_align::AlignError;
use kairos_calendar::CalendarError;
use kairos_freq::FreqError;
use kairos_resample::ResampleError;

/// Errors returned by the facade: configuration, logging setup and the
/// normalization pipeline.
#[derive(Debug, thiserror::Error)]
pub enum KairosError {
    /// The TOML configuration could not be parsed.
    #[error("invalid configuration file: {0}")]
    Config(#[from] toml::de::Error),

    /// The configuration parsed but holds an unusable value.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// A global tracing subscriber was already installed.
    #[error("logging initialisation failed: {reason}")]
    Logging {
        /// Description of the failure.
        reason: String,
    },

    /// Calendar type error.
    #[error(transparent)]
    Calendar(#[from] CalendarError),

    /// Frequency descriptor error.
    #[error(transparent)]
    Freq(#[from] FreqError),

    /// Index alignment error.
    #[error(transparent)]
    Align(#[from] AlignError),

    /// Resampling error.
    #[error(transparent)]
    Resample(#[from] ResampleError),
}
