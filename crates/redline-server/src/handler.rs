//! Request handlers for the Redline API.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::response::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use redline_analysis::{ContractAnalysis, Language};
use redline_diff::compare_contracts;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Body of `POST /api/compare-contracts/`.
#[derive(Debug, Default, Deserialize)]
pub struct CompareRequest {
    #[serde(default)]
    pub contract1: String,
    #[serde(default)]
    pub contract2: String,
}

/// Body of `POST /api/analyze-contract/`.
#[derive(Debug, Default, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub contract_text: String,
    /// Two-letter prompt language; unknown or missing codes mean English.
    #[serde(default)]
    pub language: String,
}

/// Query parameters of `GET /api/advanced-search/`.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SearchParams {
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub parties: Option<String>,
    pub clauses: Option<String>,
    pub terms: Option<String>,
}

/// Decode a JSON request body.
///
/// Bodies are taken as raw bytes and parsed here so that malformed input
/// maps to the API's `Invalid JSON` client error instead of the framework's
/// rejection shape.
fn decode_body<T: serde::de::DeserializeOwned>(body: &Bytes) -> ApiResult<T> {
    serde_json::from_slice(body).map_err(|_| ApiError::InvalidJson)
}

/// `POST /api/compare-contracts/` — line diff between two contract versions.
pub async fn compare_contracts_handler(body: Bytes) -> ApiResult<Json<Value>> {
    let request: CompareRequest = decode_body(&body)?;
    let diff = compare_contracts(&request.contract1, &request.contract2)?;
    tracing::debug!(
        unchanged = diff.unchanged(),
        removed = diff.deletions(),
        added = diff.additions(),
        "contracts compared"
    );
    Ok(Json(json!({ "diff": diff.lines })))
}

/// `POST /api/analyze-contract/` — structured analysis via the completion
/// backend.
pub async fn analyze_contract_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> ApiResult<Json<ContractAnalysis>> {
    let request: AnalyzeRequest = decode_body(&body)?;
    if request.contract_text.is_empty() {
        return Err(ApiError::MissingContractText);
    }

    let language = Language::from_code(&request.language);
    let analysis = state
        .analyzer
        .analyze(&request.contract_text, language)
        .await
        .map_err(ApiError::AnalysisFailed)?;
    Ok(Json(analysis))
}

/// `GET /api/advanced-search/` — placeholder that echoes its parameters
/// until contract indexing lands.
pub async fn advanced_search_handler(Query(params): Query<SearchParams>) -> Json<Value> {
    Json(json!({
        "message": "Advanced search is not yet implemented.",
        "search_params": params,
    }))
}

/// `GET /api/health` — liveness probe.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
