//! Conversion from raw dataset DTOs to domain types.

use std::path::Path;

use tracing::{info, warn};

use crate::domain::{DomainError, LineId, Segment, StationCode};
use crate::stations::StationDirectory;

use super::error::DatasetError;
use super::types::{RawDataset, RawLine, RawStation};

/// Published line names that differ from the names used everywhere else.
pub const LINE_RENAMES: &[(&str, &str)] = &[
    ("인천1호선", "인천선"),
    ("경의중앙선", "경의선"),
    ("김포골드라인", "김포도시철도"),
    ("용인에버라인", "용인경전철"),
    ("GTXA", "GTX-A"),
];

/// The loaded network: segments in ingestion order plus station names.
#[derive(Debug, Clone, Default)]
pub struct Network {
    pub segments: Vec<Segment>,
    pub directory: StationDirectory,
}

impl Network {
    /// Distinct lines in first-seen order.
    pub fn lines(&self) -> Vec<&LineId> {
        let mut lines: Vec<&LineId> = Vec::new();
        for segment in &self.segments {
            if !lines.contains(&&segment.line) {
                lines.push(&segment.line);
            }
        }
        lines
    }

    /// Check whether any segment belongs to a line.
    pub fn has_line(&self, line: &LineId) -> bool {
        self.segments.iter().any(|s| &s.line == line)
    }
}

fn rename_line(name: &str) -> &str {
    let name = name.trim();
    LINE_RENAMES
        .iter()
        .find(|(from, _)| *from == name)
        .map(|(_, to)| *to)
        .unwrap_or(name)
}

/// Convert a parsed dataset, skipping malformed lines and nodes.
pub fn convert_dataset(raw: &RawDataset) -> Network {
    let mut network = Network::default();

    for raw_line in &raw.data {
        let line = match LineId::new(rename_line(&raw_line.line)) {
            Ok(line) => line,
            Err(e) => {
                warn!(line = %raw_line.line, error = %e, "skipping line");
                continue;
            }
        };
        convert_line(raw_line, &line, &mut network);
    }

    network
}

fn convert_line(raw_line: &RawLine, line: &LineId, network: &mut Network) {
    for (idx, node) in raw_line.node.iter().enumerate() {
        let [front, back] = node.station.as_slice() else {
            warn!(
                line = %line,
                node = idx,
                stations = node.station.len(),
                "skipping node without exactly two stations"
            );
            continue;
        };

        match convert_node(front, back, node.is_express(), line) {
            Ok(segment) => {
                network.directory.insert(segment.a.clone(), &front.name, Some(line));
                network.directory.insert(segment.b.clone(), &back.name, Some(line));
                network.segments.push(segment);
            }
            Err(e) => warn!(line = %line, node = idx, error = %e, "skipping node"),
        }
    }
}

fn convert_node(
    front: &RawStation,
    back: &RawStation,
    express: bool,
    line: &LineId,
) -> Result<Segment, DomainError> {
    let a = StationCode::parse(&front.fr_code)?;
    let b = StationCode::parse(&back.fr_code)?;
    let segment = Segment::new(line.clone(), a, b)?;

    Ok(if express { segment.express() } else { segment })
}

/// Parse and convert a dataset document.
pub fn parse_network(json: &str) -> Result<Network, DatasetError> {
    let raw: RawDataset = serde_json::from_str(json)?;
    Ok(convert_dataset(&raw))
}

/// Read, parse and convert a dataset file.
pub fn load_network(path: impl AsRef<Path>) -> Result<Network, DatasetError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let network = parse_network(&json)?;
    info!(
        path = %path.display(),
        segments = network.segments.len(),
        stations = network.directory.len(),
        "dataset loaded"
    );
    Ok(network)
}
