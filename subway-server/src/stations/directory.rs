//! Station directory.

use std::collections::HashMap;

use crate::domain::{LineId, StationCode};

use super::error::StationError;
use super::names::normalize_name;

/// Code → name mapping, with reverse lookup by normalized name.
///
/// A transfer station has one code per line, so a name can map to several
/// codes. Lookups can be scoped to a line to pick the right one.
#[derive(Debug, Clone, Default)]
pub struct StationDirectory {
    names: HashMap<StationCode, String>,
    lines: HashMap<StationCode, Vec<LineId>>,
    by_name: HashMap<String, Vec<StationCode>>,
}

impl StationDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a station. The first name recorded for a code wins; every
    /// line it is seen on is kept.
    pub fn insert(&mut self, code: StationCode, name: &str, line: Option<&LineId>) {
        if let Some(line) = line {
            let lines = self.lines.entry(code.clone()).or_default();
            if !lines.contains(line) {
                lines.push(line.clone());
            }
        }

        if self.names.contains_key(&code) {
            return;
        }

        let key = normalize_name(name);
        self.by_name.entry(key).or_default().push(code.clone());
        self.names.insert(code, name.trim().to_string());
    }

    /// Display name for a code.
    pub fn name(&self, code: &StationCode) -> Option<&str> {
        self.names.get(code).map(String::as_str)
    }

    /// Display name for a code, falling back to the code itself.
    pub fn display(&self, code: &StationCode) -> String {
        self.name(code)
            .map(str::to_string)
            .unwrap_or_else(|| code.to_string())
    }

    /// Line a code was first seen on.
    pub fn line_of(&self, code: &StationCode) -> Option<&LineId> {
        self.lines.get(code).and_then(|lines| lines.first())
    }

    /// Check whether a code was seen on a line.
    pub fn serves(&self, code: &StationCode, line: &LineId) -> bool {
        self.lines
            .get(code)
            .is_some_and(|lines| lines.contains(line))
    }

    /// All codes sharing a (normalized) name.
    pub fn codes_named(&self, name: &str) -> &[StationCode] {
        self.by_name
            .get(&normalize_name(name))
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Resolve a query that is either a station code or a station name.
    ///
    /// Codes take precedence. When `line` is given, both codes and names
    /// only match stations on that line. A name with several codes that
    /// survive narrowing is ambiguous.
    pub fn resolve(&self, query: &str, line: Option<&LineId>) -> Result<StationCode, StationError> {
        let on_line = |code: &StationCode| line.is_none_or(|line| self.serves(code, line));

        if let Ok(code) = StationCode::parse(query) {
            if self.names.contains_key(&code) && on_line(&code) {
                return Ok(code);
            }
        }

        let candidates: Vec<&StationCode> = self
            .codes_named(query)
            .iter()
            .filter(|c| on_line(*c))
            .collect();

        match candidates.as_slice() {
            [] => Err(StationError::NotFound(query.trim().to_string())),
            [only] => Ok((*only).clone()),
            many => Err(StationError::Ambiguous {
                query: query.trim().to_string(),
                candidates: many.iter().map(|c| (*c).clone()).collect(),
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
