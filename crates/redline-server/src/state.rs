//! Shared request-handler state.

use redline_analysis::ContractAnalyzer;

/// State shared across requests.
///
/// The comparison endpoint is a pure function and needs none of this; only
/// the analysis endpoint reaches for the analyzer. Nothing here is mutated
/// after startup, so handlers can run concurrently without locking.
pub struct AppState {
    pub analyzer: ContractAnalyzer,
}
