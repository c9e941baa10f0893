//! Station lookup error types.

use crate::domain::StationCode;

/// Errors resolving a station query to a code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StationError {
    /// No station has this code or name
    #[error("unknown station: {0}")]
    NotFound(String),

    /// The name matches several stations and no line narrows it down
    #[error("station name {query} is ambiguous ({} candidates)", candidates.len())]
    Ambiguous {
        query: String,
        candidates: Vec<StationCode>,
    },
}
