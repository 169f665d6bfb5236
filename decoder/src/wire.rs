//! HTTP wire schema for the classifier and chat endpoints.
//!
//! Bodies are decoded from text rather than straight from the response so
//! every shell classifies decode failures identically.

#[cfg(test)]
#[path = "wire_test.rs"]
mod wire_test;

use serde::{Deserialize, Serialize};

use crate::error::{ChatFailure, RequestFailure};

/// Path of the image classification endpoint.
pub const PREDICT_PATH: &str = "/predict";

/// Path of the chat endpoint.
pub const CHAT_PATH: &str = "/chat";

/// Multipart field carrying the image bytes.
pub const UPLOAD_FIELD: &str = "file";

/// Body of a classifier response.
///
/// The classifier answers `{"predicted_class": ...}` on success and
/// `{"error": ...}` (still with a 2xx status) when it rejects the upload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictReply {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predicted_class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Request body for `POST /chat`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub query: String,
}

/// Body of a chat response: either `response` or `error`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Join a base URL and an absolute path without doubling the slash.
#[must_use]
pub fn endpoint_url(base_url: &str, path: &str) -> String {
    format!("{}{path}", base_url.trim_end_matches('/'))
}

/// Reject a classifier status outside 2xx before its body is read.
///
/// Shells call this first so a body that cannot be read never masks a bad
/// status.
///
/// # Errors
///
/// Returns [`RequestFailure::Status`] for any non-2xx status.
pub fn check_status(status: u16) -> Result<(), RequestFailure> {
    if (200..300).contains(&status) { Ok(()) } else { Err(RequestFailure::Status(status)) }
}

/// Turn a finished classifier exchange into a label or a failure.
///
/// A non-2xx status wins over whatever the body says.
///
/// # Errors
///
/// Returns [`RequestFailure::Status`] for non-2xx statuses, a decode failure
/// for bodies that are not the expected JSON, and
/// [`RequestFailure::Service`] when the body only carries an `error`.
pub fn predict_outcome(status: u16, body: &str) -> Result<String, RequestFailure> {
    check_status(status)?;
    let reply: PredictReply = serde_json::from_str(body).map_err(|e| RequestFailure::from_decode(&e))?;
    match reply {
        PredictReply { predicted_class: Some(label), .. } => Ok(label),
        PredictReply { error: Some(message), .. } if !message.is_empty() => Err(RequestFailure::Service(message)),
        _ => Err(RequestFailure::Decode("missing field `predicted_class`".to_owned())),
    }
}

/// Turn a chat response body into reply text or a failure.
///
/// The status code is not consulted: the chat backend reports its own
/// failures in the `error` field.
///
/// # Errors
///
/// Returns [`ChatFailure::Decode`] for non-JSON bodies and
/// [`ChatFailure::Service`] when `error` is present and non-empty.
pub fn chat_outcome(body: &str) -> Result<String, ChatFailure> {
    let reply: ChatReply = serde_json::from_str(body).map_err(|e| ChatFailure::Decode(e.to_string()))?;
    match reply.error {
        Some(message) if !message.is_empty() => Err(ChatFailure::Service(message)),
        _ => Ok(reply.response.unwrap_or_default()),
    }
}
