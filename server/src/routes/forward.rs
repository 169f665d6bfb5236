//! `POST /predict` and `POST /chat`: relay to the configured backends.

use std::time::Instant;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::header::CONTENT_TYPE;

use crate::state::AppState;
use crate::upstream::{Relayed, Upstream, UpstreamError};

/// `POST /predict` — forward the multipart upload to the classifier.
pub async fn predict(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> Result<Relayed, UpstreamError> {
    relay(&state, Upstream::Classifier, &headers, body).await
}

/// `POST /chat` — forward the JSON query to the chat backend.
pub async fn chat(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> Result<Relayed, UpstreamError> {
    relay(&state, Upstream::Chat, &headers, body).await
}

async fn relay(
    state: &AppState,
    target: Upstream,
    headers: &HeaderMap,
    body: Bytes,
) -> Result<Relayed, UpstreamError> {
    let started = Instant::now();
    let request_bytes = body.len();

    match state.upstream.forward(target, headers.get(CONTENT_TYPE), body).await {
        Ok(relayed) => {
            tracing::info!(
                upstream = ?target,
                status = relayed.status.as_u16(),
                request_bytes,
                response_bytes = relayed.body.len(),
                elapsed_ms = elapsed_ms(started),
                "relayed"
            );
            Ok(relayed)
        }
        Err(e) => {
            tracing::warn!(upstream = ?target, error = %e, elapsed_ms = elapsed_ms(started), "relay failed");
            Err(e)
        }
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
#[path = "forward_test.rs"]
mod tests;
