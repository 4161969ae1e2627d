//! Error types for the kairos-align crate.

/// Error type for all fallible operations in the kairos-align crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AlignError {
    /// Returned when the dense index to choose from is empty.
    #[error("{field} index is empty")]
    EmptyIndex {
        /// Name of the empty input.
        field: &'static str,
    },

    /// Calendar error.
    #[error(transparent)]
    Calendar(#[from] kairos_calendar::CalendarError),
}
