//! Domain types for the subway route topology.
//!
//! This module contains the core domain model types that represent
//! validated network data. All types enforce their invariants at construction
//! time, so code that receives these types can trust their validity.

mod direction;
mod error;
mod line;
mod route;
mod segment;
mod station;

pub use direction::{Direction, InvalidDirection};
pub use error::DomainError;
pub use line::{InvalidLineId, LineId};
pub use route::Route;
pub use segment::{DirectedEdge, InvalidSegment, Segment};
pub use station::{InvalidStationCode, StationCode};
