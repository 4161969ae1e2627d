use tracing_subscriber::EnvFilter;

use crate::error::KairosError;

/// All workspace crate targets that should receive log output.
const CRATE_TARGETS: &[&str] = &[
    "kairos",
    "kairos_align",
    "kairos_calendar",
    "kairos_freq",
    "kairos_resample",
];

/// Filter directive for the workspace crates at the given verbosity.
///
/// Mapping:
/// - 0 -> warn
/// - 1 -> info
/// - 2 -> debug
/// - 3+ -> trace
pub fn default_filter(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Install a global `fmt` subscriber filtered by [`default_filter`].
///
/// `RUST_LOG` overrides the verbosity if set.
///
/// # Errors
///
/// Returns [`KairosError::Logging`] if a global subscriber is already set.
pub fn init(verbosity: u8) -> Result<(), KairosError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| KairosError::Logging {
            reason: e.to_string(),
        })
}
