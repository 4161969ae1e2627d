//! Error types for the kairos-resample crate.

/// Error type for all fallible operations in the kairos-resample crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ResampleError {
    /// Returned when an input has too few points to derive interval edges.
    ///
    /// The first interval borrows the length of the second, so at least two
    /// timestamps are needed.
    #[error("{field}: got {len} timestamps, need at least {min} to derive intervals")]
    TooShort {
        /// Name of the input.
        field: &'static str,
        /// Number of timestamps supplied.
        len: usize,
        /// Minimum required.
        min: usize,
    },

    /// Calendar error.
    #[error(transparent)]
    Calendar(#[from] kairos_calendar::CalendarError),
}
