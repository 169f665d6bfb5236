//! HTTP calls to the classifier and chat endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! The classifier status is checked before the body is read; bodies are
//! then read as text and classified by `decoder`, so a transport failure, a
//! bad status and a malformed body each map to their own
//! `RequestFailure`/`ChatFailure` variant. No call panics.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use decoder::{ChatFailure, ChatRequest, RequestFailure, SelectedImage};

use crate::state::ImageHandle;

#[cfg(any(test, feature = "hydrate"))]
const FALLBACK_UPLOAD_NAME: &str = "upload";

/// File name sent with the multipart part. Some backends reject an empty one.
#[cfg(any(test, feature = "hydrate"))]
fn upload_file_name<F>(image: &SelectedImage<F>) -> &str {
    if image.name.trim().is_empty() { FALLBACK_UPLOAD_NAME } else { &image.name }
}

#[cfg(any(test, feature = "hydrate"))]
fn form_data_failed_message(detail: &str) -> String {
    format!("could not prepare upload: {detail}")
}

/// Upload the image as multipart field `file` to `POST /predict`.
///
/// # Errors
///
/// Returns the classified failure when the request does not yield a label.
pub async fn predict(image: &SelectedImage<ImageHandle>) -> Result<String, RequestFailure> {
    #[cfg(feature = "hydrate")]
    {
        let form = web_sys::FormData::new()
            .map_err(|e| RequestFailure::Transport(form_data_failed_message(&format!("{e:?}"))))?;
        form.append_with_blob_and_filename(decoder::UPLOAD_FIELD, &image.handle, upload_file_name(image))
            .map_err(|e| RequestFailure::Transport(form_data_failed_message(&format!("{e:?}"))))?;

        let resp = gloo_net::http::Request::post(decoder::PREDICT_PATH)
            .body(form)
            .map_err(|e| RequestFailure::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| RequestFailure::Transport(e.to_string()))?;
        let status = resp.status();
        decoder::check_status(status)?;
        let body = resp.text().await.map_err(|e| RequestFailure::Transport(e.to_string()))?;
        decoder::predict_outcome(status, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = image;
        Err(RequestFailure::Transport("not available on server".to_owned()))
    }
}

/// Send a chat query as JSON to `POST /chat`.
///
/// # Errors
///
/// Returns a [`ChatFailure`] when the request fails or the backend reports an error.
pub async fn ask(request: &ChatRequest) -> Result<String, ChatFailure> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(decoder::CHAT_PATH)
            .json(request)
            .map_err(|e| ChatFailure::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ChatFailure::Transport(e.to_string()))?;
        let body = resp.text().await.map_err(|e| ChatFailure::Transport(e.to_string()))?;
        decoder::chat_outcome(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ChatFailure::Transport("not available on server".to_owned()))
    }
}
