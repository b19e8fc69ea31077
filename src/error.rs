//! Error types for plotdata operations.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in plotdata operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Aggregation query on a series with zero items.
    ///
    /// Raised by every extrema/range query. Coordinate access
    /// (`get_at`/`set_at`) never raises it; those use default/no-op
    /// semantics instead.
    #[error("aggregation over an empty series")]
    EmptySeries,

    /// Color parsing error.
    #[error("Invalid color: {0}")]
    InvalidColor(String),
}
