//! HTTP server for Redline.
//!
//! Exposes contract comparison and analysis over a small JSON API. The
//! comparison endpoint wraps the pure line differ; the analysis endpoint
//! forwards to the completion backend and returns the carved-up reply.
//!
//! # Key Types
//!
//! - [`RedlineServer`] -- Server assembly and lifecycle
//! - [`ServerConfig`] -- Bind address, completion endpoint, CORS posture
//! - [`ApiError`] -- Error taxonomy and HTTP status mapping

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ApiError, ApiResult};
pub use server::RedlineServer;
pub use state::AppState;
