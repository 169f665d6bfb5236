//! Free-text food questions and the latest reply.

use decoder::{ChatEffect, ChatEvent};
use leptos::prelude::*;

use crate::state::{ChatSignal, dispatch_chat};

/// Chat section bound to the page's chat state.
#[component]
pub fn ChatPanel(chat: ChatSignal) -> impl IntoView {
    let on_input = move |ev: leptos::ev::Event| {
        let _ = dispatch_chat(chat, ChatEvent::QueryEdited(event_target_value(&ev)));
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(effect) = dispatch_chat(chat, ChatEvent::Submitted) {
            run_chat_effect(chat, effect);
        }
    };

    let has_response = move || chat.with(|c| !c.response.is_empty());

    view! {
        <section class="chat-section">
            <form class="chat-container" on:submit=on_submit>
                <input
                    type="text"
                    class="chat-input"
                    placeholder="Ask me anything about food..."
                    prop:value=move || chat.with(|c| c.query.clone())
                    on:input=on_input
                />
                <button type="submit" class="chat-submit-button">
                    "Ask"
                </button>
            </form>

            <Show when=has_response>
                <div class="chat-response">
                    <h4>"Gemini's Response:"</h4>
                    <p>{move || chat.with(|c| c.response.clone())}</p>
                </div>
            </Show>
        </section>
    }
}

fn run_chat_effect(chat: ChatSignal, effect: ChatEffect) {
    match effect {
        ChatEffect::Send(request) => {
            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::ask(&request).await;
                if let Some(next) = dispatch_chat(chat, ChatEvent::Settled(outcome)) {
                    run_chat_effect(chat, next);
                }
            });
            #[cfg(not(feature = "hydrate"))]
            let _ = (chat, request);
        }
        ChatEffect::Log(failure) => {
            #[cfg(feature = "hydrate")]
            log::error!("Error: {failure}");
            #[cfg(not(feature = "hydrate"))]
            let _ = failure;
        }
    }
}
