//! Dataset loading errors.

/// Errors reading the network dataset.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// File could not be read
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Document is not valid dataset JSON
    #[error("invalid dataset JSON: {0}")]
    Json(#[from] serde_json::Error),
}
