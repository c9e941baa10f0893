//! Server configuration from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

use crate::failures::DEFAULT_FAILURE_LOG;
use crate::topology::TopologyConfig;

pub const ENV_DATA: &str = "SUBWAY_DATA";
pub const ENV_RULES: &str = "SUBWAY_RULES";
pub const ENV_BIND: &str = "SUBWAY_BIND";
pub const ENV_FAILURE_LOG: &str = "SUBWAY_FAILURE_LOG";
pub const ENV_DEDUP_EDGES: &str = "SUBWAY_DEDUP_EDGES";

/// Errors reading configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}: invalid socket address {value:?}")]
    InvalidAddress { var: &'static str, value: String },

    #[error("{var}: expected true or false, got {value:?}")]
    InvalidBool { var: &'static str, value: String },
}

/// Everything the binary needs to start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Segment dataset (`{"DATA": [...]}` document)
    pub data_path: PathBuf,

    /// Optional JSON rule table. The built-in Seoul table is used when unset.
    pub rules_path: Option<PathBuf>,

    pub bind: SocketAddr,

    pub failure_log: PathBuf,

    pub topology: TopologyConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data.json"),
            rules_path: None,
            bind: SocketAddr::from(([127, 0, 0, 1], 3000)),
            failure_log: PathBuf::from(DEFAULT_FAILURE_LOG),
            topology: TopologyConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Read from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read using an arbitrary lookup. Unset or blank variables keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| {
            lookup(var)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut config = Self::default();

        if let Some(path) = get(ENV_DATA) {
            config.data_path = PathBuf::from(path);
        }
        config.rules_path = get(ENV_RULES).map(PathBuf::from);
        if let Some(path) = get(ENV_FAILURE_LOG) {
            config.failure_log = PathBuf::from(path);
        }

        if let Some(value) = get(ENV_BIND) {
            config.bind = value.parse().map_err(|_| ConfigError::InvalidAddress {
                var: ENV_BIND,
                value: value.clone(),
            })?;
        }

        if let Some(value) = get(ENV_DEDUP_EDGES) {
            config.topology.dedup_parallel_edges = parse_bool(ENV_DEDUP_EDGES, &value)?;
        }

        Ok(config)
    }
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            var,
            value: value.to_string(),
        }),
    }
}
