//! Server assembly and lifecycle.

use std::sync::Arc;

use tokio::net::TcpListener;

use redline_analysis::client::API_KEY_ENV;
use redline_analysis::{ContractAnalyzer, OpenAiClient};

use crate::config::ServerConfig;
use crate::error::{ApiError, ApiResult};
use crate::router::build_router;
use crate::state::AppState;

/// The Redline HTTP server.
pub struct RedlineServer {
    config: ServerConfig,
    state: Arc<AppState>,
}

impl RedlineServer {
    /// Assemble a server from configuration.
    ///
    /// The completion API key is read from the environment. A missing key
    /// does not prevent startup; comparison keeps working and analysis
    /// requests fail upstream instead.
    pub fn new(config: ServerConfig) -> Self {
        let api_key = std::env::var(API_KEY_ENV).unwrap_or_else(|_| {
            tracing::warn!("{API_KEY_ENV} is not set; analysis requests will fail");
            String::new()
        });
        let backend = OpenAiClient::with_endpoint(api_key, &config.api_base, &config.model);
        let analyzer = ContractAnalyzer::new(Arc::new(backend));
        Self::with_analyzer(config, analyzer)
    }

    /// Assemble a server around an explicit analyzer.
    pub fn with_analyzer(config: ServerConfig, analyzer: ContractAnalyzer) -> Self {
        Self {
            config,
            state: Arc::new(AppState { analyzer }),
        }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(self.state.clone(), self.config.permissive_cors)
    }

    /// Start serving requests.
    pub async fn serve(self) -> ApiResult<()> {
        let app = self.router();
        let listener = TcpListener::bind(self.config.bind_addr).await?;
        tracing::info!("redline server listening on {}", self.config.bind_addr);
        axum::serve(listener, app)
            .await
            .map_err(|e| ApiError::Internal(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_construction() {
        let server = RedlineServer::new(ServerConfig::default());
        assert_eq!(
            server.config().bind_addr,
            "127.0.0.1:8000".parse().unwrap()
        );
    }

    #[test]
    fn router_builds() {
        let server = RedlineServer::new(ServerConfig::default());
        let _router = server.router();
    }
}
