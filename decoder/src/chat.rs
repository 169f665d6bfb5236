//! Free-text chat flow, independent of the prediction state.
//!
//! There is no loading indicator and no error channel here: any failure
//! becomes [`CHAT_APOLOGY`] on screen and the cause goes to the log.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::error::ChatFailure;
use crate::wire::ChatRequest;

/// Reply shown whenever a chat exchange fails.
pub const CHAT_APOLOGY: &str = "Sorry, something went wrong.";

/// UI state for the chat box.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChatState {
    pub query: String,
    pub response: String,
}

/// Inputs to the chat flow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChatEvent {
    /// The text input changed.
    QueryEdited(String),
    /// The user pressed Ask.
    Submitted,
    /// A chat request finished.
    Settled(Result<String, ChatFailure>),
}

/// Work the shell must perform after a transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChatEffect {
    /// POST this body to the chat endpoint.
    Send(ChatRequest),
    /// Record a failure that the user only sees as the apology.
    Log(ChatFailure),
}

impl ChatState {
    /// Apply one event, returning the next state and any work to perform.
    #[must_use]
    pub fn apply(&self, event: ChatEvent) -> (Self, Option<ChatEffect>) {
        match event {
            ChatEvent::QueryEdited(query) => (Self { query, ..self.clone() }, None),
            ChatEvent::Submitted => {
                // Only an empty string is skipped; whitespace is sent as typed.
                if self.query.is_empty() {
                    return (self.clone(), None);
                }
                let request = ChatRequest { query: self.query.clone() };
                (self.clone(), Some(ChatEffect::Send(request)))
            }
            ChatEvent::Settled(Ok(response)) => (Self { response, ..self.clone() }, None),
            ChatEvent::Settled(Err(failure)) => {
                let next = Self { response: CHAT_APOLOGY.to_owned(), ..self.clone() };
                (next, Some(ChatEffect::Log(failure)))
            }
        }
    }
}
