//! Error types for the analysis crate.

use thiserror::Error;

/// Errors that can occur while analyzing a contract.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The API credential is not available in the process environment.
    #[error("OPENAI_API_KEY is not set")]
    MissingApiKey,

    /// The completion request could not be sent or the connection failed.
    #[error("completion request failed: {0}")]
    Request(String),

    /// The completion API answered with a non-success status.
    #[error("completion API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The completion reply could not be decoded.
    #[error("malformed completion reply: {0}")]
    MalformedReply(String),
}

/// Convenience alias for analysis results.
pub type AnalysisResult<T> = Result<T, AnalysisError>;
