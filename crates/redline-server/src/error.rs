//! API error taxonomy and HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use thiserror::Error;

use redline_analysis::AnalysisError;
use redline_diff::DiffError;

/// Errors surfaced by the HTTP API.
///
/// Every variant renders as `{"error": <message>}` with the mapped status.
/// Client errors are never retried; server errors are reported to the caller
/// rather than aborting the process.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Comparison requested without both contracts.
    #[error("Both contracts are required for comparison")]
    MissingContracts,

    /// Analysis requested without contract text.
    #[error("No contract text provided")]
    MissingContractText,

    /// The request body was not valid JSON.
    #[error("Invalid JSON")]
    InvalidJson,

    /// The analysis collaborator failed upstream.
    #[error("Failed to analyze contract")]
    AnalysisFailed(#[source] AnalysisError),

    /// I/O failure while serving.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Any other failure during request handling.
    #[error("{0}")]
    Internal(String),
}

impl From<DiffError> for ApiError {
    fn from(err: DiffError) -> Self {
        match err {
            DiffError::EmptyDocument => Self::MissingContracts,
        }
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::MissingContracts | Self::MissingContractText | Self::InvalidJson => {
                StatusCode::BAD_REQUEST
            }
            Self::AnalysisFailed(_) | Self::Io(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = ?self, "request failed");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Convenience alias for handler results.
pub type ApiResult<T> = Result<T, ApiError>;
