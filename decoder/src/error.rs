//! Failure taxonomy for both flows.
//!
//! The `Display` text of [`PredictError`] is exactly what the page shows as
//! its error message, so shells never format these themselves.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Generic message for a non-success HTTP status from the classifier.
pub const STATUS_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// Message for a classifier body that ended before a complete JSON value.
pub const UNEXPECTED_RESPONSE_MESSAGE: &str = "The server response was unexpected. Please try again later.";

/// Message shown when Predict is pressed with nothing selected.
pub const NO_IMAGE_MESSAGE: &str = "Please select an image.";

/// Errors surfaced by the prediction flow.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PredictError {
    /// Submit was requested before any image was chosen. Never reaches the network.
    #[error("Please select an image.")]
    NoImageSelected,

    /// The classification request itself failed.
    #[error(transparent)]
    Request(#[from] RequestFailure),
}

/// A classification request that did not produce a label.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RequestFailure {
    /// The classifier answered with a non-2xx status. Body is ignored.
    #[error("Something went wrong. Please try again.")]
    Status(u16),

    /// The body ended before a complete JSON value (typically empty).
    #[error("The server response was unexpected. Please try again later.")]
    UnexpectedEnd,

    /// The body was not the expected JSON shape.
    #[error("{0}")]
    Decode(String),

    /// The request never completed (connection refused, aborted fetch, ...).
    #[error("{0}")]
    Transport(String),

    /// The classifier answered 2xx but reported an error in the body.
    #[error("{0}")]
    Service(String),
}

impl RequestFailure {
    /// Classify a JSON decode failure.
    #[must_use]
    pub fn from_decode(err: &serde_json::Error) -> Self {
        if err.is_eof() {
            Self::UnexpectedEnd
        } else {
            Self::Decode(err.to_string())
        }
    }
}

/// Why a chat exchange produced no reply.
///
/// Every variant ends up as the same apology on screen; the variant and its
/// text only go to the log.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ChatFailure {
    /// The chat backend returned an `error` field.
    #[error("chat service error: {0}")]
    Service(String),

    /// The request never completed.
    #[error("chat request failed: {0}")]
    Transport(String),

    /// The body was not JSON.
    #[error("chat response parse failed: {0}")]
    Decode(String),
}
