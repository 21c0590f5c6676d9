// Error types for summarization requests.
//
// Only request-level failures live here. A single failed pairwise similarity
// never becomes an error: it is replaced by a fallback weight and logged.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SummarizeError {
    /// Rejected before any processing: empty text, no model selected.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to load the {model} model: {reason}. Try another model or switch to local processing.")]
    ModelLoadFailure { model: String, reason: String },

    #[error("Error processing text with {model}: {reason}")]
    EmbeddingFailure { model: String, reason: String },

    #[error("Embedding method not implemented for model: {0}")]
    UnsupportedModel(String),
}

pub type Result<T> = std::result::Result<T, SummarizeError>;
