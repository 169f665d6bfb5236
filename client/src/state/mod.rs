//! Page state: reactive wrappers around the `decoder` state records.
//!
//! DESIGN
//! ======
//! The signals hold plain `decoder` records. Every change goes through a
//! `dispatch_*` helper that runs the pure transition inside a single signal
//! update and hands the resulting effect back to the caller, so components
//! never mutate fields directly.

pub mod image;

use decoder::{ChatEffect, ChatEvent, ChatState, PredictionEffect, PredictionEvent, PredictionState};
use leptos::prelude::*;

/// Browser handle for a chosen image. Only the hydrated build can hold one.
#[cfg(feature = "hydrate")]
pub type ImageHandle = web_sys::File;
#[cfg(not(feature = "hydrate"))]
pub type ImageHandle = ();

/// `web_sys::File` is not `Send`, so prediction state lives in local storage.
pub type PredictionSignal = RwSignal<PredictionState<ImageHandle>, LocalStorage>;

pub type ChatSignal = RwSignal<ChatState>;

#[must_use]
pub fn new_prediction_signal() -> PredictionSignal {
    RwSignal::new_local(PredictionState::default())
}

#[must_use]
pub fn new_chat_signal() -> ChatSignal {
    RwSignal::new(ChatState::default())
}

/// Apply a prediction event and return the effect the caller must run.
pub fn dispatch_prediction(
    state: PredictionSignal,
    event: PredictionEvent<ImageHandle>,
) -> Option<PredictionEffect<ImageHandle>> {
    state
        .try_update(|current| {
            let (next, effect) = current.apply(event);
            *current = next;
            effect
        })
        .flatten()
}

/// Apply a chat event and return the effect the caller must run.
pub fn dispatch_chat(state: ChatSignal, event: ChatEvent) -> Option<ChatEffect> {
    state
        .try_update(|current| {
            let (next, effect) = current.apply(event);
            *current = next;
            effect
        })
        .flatten()
}
