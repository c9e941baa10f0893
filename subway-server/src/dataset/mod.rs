//! Network dataset ingestion.
//!
//! Reads the published line/node JSON export and turns it into validated
//! [`Segment`](crate::domain::Segment)s plus a station directory. Malformed
//! entries are skipped with a warning rather than failing the whole load.

mod convert;
mod error;
mod types;

pub use convert::{LINE_RENAMES, Network, convert_dataset, load_network, parse_network};
pub use error::DatasetError;
pub use types::{RawDataset, RawLine, RawNode, RawStation};
