//! Forwarding client for the classifier and chat backends.
//!
//! DESIGN
//! ======
//! Requests are relayed as opaque bytes: the multipart or JSON body and its
//! `Content-Type` go out unchanged, and the backend's status, `Content-Type`
//! and body come back unchanged. Interpreting them is the browser's job, so
//! a backend error still reaches the page with its original status.
//!
//! Only a connect timeout is applied. A backend that accepts the connection
//! and never answers keeps the request open.

use std::time::Duration;

use axum::body::Bytes;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use thiserror::Error;

use crate::config::ServerConfig;

/// Errors produced while talking to a backend.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The shared HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    ClientBuild(String),

    /// The backend could not be reached or the exchange was cut short.
    #[error("upstream request failed: {0}")]
    Request(String),

    /// The backend answered but its body could not be read.
    #[error("upstream body read failed: {0}")]
    Body(String),
}

impl IntoResponse for UpstreamError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.to_string() });
        (StatusCode::BAD_GATEWAY, Json(body)).into_response()
    }
}

/// Which backend a request is bound for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upstream {
    Classifier,
    Chat,
}

impl Upstream {
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Classifier => decoder::PREDICT_PATH,
            Self::Chat => decoder::CHAT_PATH,
        }
    }
}

/// A backend response, ready to be relayed.
#[derive(Debug)]
pub struct Relayed {
    pub status: StatusCode,
    pub content_type: Option<HeaderValue>,
    pub body: Bytes,
}

impl IntoResponse for Relayed {
    fn into_response(self) -> Response {
        let mut response = (self.status, self.body).into_response();
        match self.content_type {
            Some(content_type) => {
                response.headers_mut().insert(CONTENT_TYPE, content_type);
            }
            None => {
                response.headers_mut().remove(CONTENT_TYPE);
            }
        }
        response
    }
}

/// Pooled HTTP client plus the two backend base URLs.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    classifier_url: String,
    chat_url: String,
}

impl UpstreamClient {
    /// Build the forwarding client from server config.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(config: &ServerConfig) -> Result<Self, UpstreamError> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .map_err(|e| UpstreamError::ClientBuild(e.to_string()))?;
        Ok(Self { http, classifier_url: config.classifier_url.clone(), chat_url: config.chat_url.clone() })
    }

    /// Full URL a request for `target` is sent to.
    #[must_use]
    pub fn url(&self, target: Upstream) -> String {
        let base = match target {
            Upstream::Classifier => &self.classifier_url,
            Upstream::Chat => &self.chat_url,
        };
        decoder::endpoint_url(base, target.path())
    }

    /// POST `body` to the backend and capture its answer.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be reached or its body cannot be read.
    /// Non-2xx statuses are not errors here; they are relayed.
    pub async fn forward(
        &self,
        target: Upstream,
        content_type: Option<&HeaderValue>,
        body: Bytes,
    ) -> Result<Relayed, UpstreamError> {
        let mut request = self.http.post(self.url(target)).body(body);
        if let Some(content_type) = content_type {
            request = request.header(CONTENT_TYPE, content_type.clone());
        }

        let resp = request.send().await.map_err(|e| UpstreamError::Request(e.to_string()))?;
        let status = resp.status();
        let content_type = resp.headers().get(CONTENT_TYPE).cloned();
        let body = resp.bytes().await.map_err(|e| UpstreamError::Body(e.to_string()))?;

        Ok(Relayed { status, content_type, body })
    }
}

#[cfg(test)]
#[path = "upstream_test.rs"]
mod tests;
