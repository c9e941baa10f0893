//! Domain error types.
//!
//! These errors represent validation failures in the domain layer. They are
//! distinct from IO and configuration errors.

use super::{InvalidDirection, InvalidLineId, InvalidSegment, InvalidStationCode};

/// Domain-level errors for validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    #[error(transparent)]
    StationCode(#[from] InvalidStationCode),

    #[error(transparent)]
    LineId(#[from] InvalidLineId),

    #[error(transparent)]
    Direction(#[from] InvalidDirection),

    #[error(transparent)]
    Segment(#[from] InvalidSegment),
}
