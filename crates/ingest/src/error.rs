//! Error handling for feed loading.

/// Errors raised while reading raw feed files.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// A feed file could not be read.
    #[error("failed to read feed: {0}")]
    Io(#[from] std::io::Error),

    /// A feed file held malformed JSON.
    #[error("failed to parse feed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for ingestion.
pub type IngestResult<T> = Result<T, IngestError>;
