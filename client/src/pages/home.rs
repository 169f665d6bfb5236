//! The single decoder page: header, upload section, chat section, footer.
//!
//! The page owns both state records. The two flows never read each other's
//! state.

use leptos::prelude::*;

use crate::components::{chat_panel::ChatPanel, upload_panel::UploadPanel};
use crate::state::{new_chat_signal, new_prediction_signal};

/// Served from the site root by the server.
pub const LOGO_PATH: &str = "/logo.svg";

#[component]
pub fn DecoderPage() -> impl IntoView {
    let prediction = new_prediction_signal();
    let chat = new_chat_signal();

    view! {
        <div class="app">
            <header class="app-header">
                <img src=LOGO_PATH alt="Indian Food Decoder Logo" class="app-logo"/>
                <h1>"Indian Food Decoder"</h1>
                <p>
                    "Upload an image of your food, and we will tell you what it is and how to make it!"
                </p>
            </header>

            <UploadPanel prediction/>
            <ChatPanel chat/>

            <footer class="app-footer">
                <p>"Created for food enthusiasts. Enjoy discovering new dishes!"</p>
            </footer>
        </div>
    }
}
