//! Station code ↔ display name lookup.
//!
//! Topology works on station codes only. Names come from the dataset and are
//! resolved to codes here before any path query.

mod directory;
mod error;
mod names;

pub use directory::StationDirectory;
pub use error::StationError;
pub use names::normalize_name;
