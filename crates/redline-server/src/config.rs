//! Server configuration.

use std::net::SocketAddr;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use redline_analysis::client::{DEFAULT_API_BASE, DEFAULT_MODEL};

/// Configuration for the Redline server.
///
/// The completion API credential is not part of the config file; it is read
/// from the `OPENAI_API_KEY` environment variable at startup.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the HTTP listener binds.
    pub bind_addr: SocketAddr,
    /// Base URL of the completion API used for analysis.
    pub api_base: String,
    /// Completion model used for analysis.
    pub model: String,
    /// Whether to attach a permissive CORS layer. Needed only when a browser
    /// frontend on another origin calls this API directly.
    pub permissive_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8000".parse().unwrap(),
            api_base: DEFAULT_API_BASE.into(),
            model: DEFAULT_MODEL.into(),
            permissive_cors: true,
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file. Missing keys take their
    /// defaults.
    pub fn from_toml_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("parsing config file {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr, "127.0.0.1:8000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert!(config.permissive_cors);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: ServerConfig = toml::from_str("bind_addr = \"0.0.0.0:9000\"").unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:9000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.model, DEFAULT_MODEL);
    }
}
