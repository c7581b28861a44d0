use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum MetriqError {
    #[error("failed to load metric definition from {path}: {reason}")]
    DefinitionLoad { path: PathBuf, reason: String },

    #[error("invalid metric definition: {0}")]
    DefinitionInvalid(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
