use thiserror::Error;

/// Errors the statistics engine reports to callers.
///
/// Only data-availability conditions are errors; short or empty input that
/// has a defined inert result is handled by the individual functions.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StatsError {
    /// Two series being compared share no timestamps, so alignment would
    /// produce zero rows and every downstream statistic would be undefined.
    #[error("no overlapping timestamps between {left} and {right}")]
    NoOverlap { left: String, right: String },
}
