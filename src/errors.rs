use thiserror::Error;

/// Error type that captures dataset and preference persistence failures.
#[derive(Debug, Error)]
pub enum InsightsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Dataset error: {0}")]
    Dataset(String),
}
