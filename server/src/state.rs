//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds only the forwarding client; the server keeps no per-user state.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::upstream::{UpstreamClient, UpstreamError};

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    pub upstream: Arc<UpstreamClient>,
    /// Request body cap for forwarded routes.
    pub max_upload_bytes: usize,
}

impl AppState {
    /// # Errors
    ///
    /// Returns an error if the forwarding HTTP client fails to build.
    pub fn new(config: &ServerConfig) -> Result<Self, UpstreamError> {
        let upstream = UpstreamClient::new(config)?;
        Ok(Self { upstream: Arc::new(upstream), max_upload_bytes: config.max_upload_bytes })
    }
}
