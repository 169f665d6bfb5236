//! Shared core for the food decoder: wire schema, error taxonomy, and the
//! two view-controller state records.
//!
//! This crate owns everything both shells (`client` in the browser and `cli`
//! in a terminal) agree on. It performs no I/O. Each flow is a plain state
//! record with a pure `apply(event) -> (state, effect)` transition; the shell
//! executes the returned effect and feeds the completion back in as an event.

pub mod chat;
pub mod error;
pub mod prediction;
pub mod wire;

pub use chat::{CHAT_APOLOGY, ChatEffect, ChatEvent, ChatState};
pub use error::{ChatFailure, PredictError, RequestFailure};
pub use prediction::{PredictionEffect, PredictionEvent, PredictionState, PredictionView, SelectedImage};
pub use wire::{
    CHAT_PATH, ChatReply, ChatRequest, PREDICT_PATH, PredictReply, UPLOAD_FIELD, chat_outcome, check_status,
    endpoint_url, predict_outcome,
};
