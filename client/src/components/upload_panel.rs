//! Image upload, Predict button, and the result area.

use decoder::{PredictionEffect, PredictionEvent, PredictionView};
use leptos::prelude::*;

use crate::state::{PredictionSignal, dispatch_prediction};
use crate::util::format::selection_caption;

const LOADING_MESSAGE: &str = "Analyzing your food... Please wait a few seconds!";

/// Upload section bound to the page's prediction state.
#[component]
pub fn UploadPanel(prediction: PredictionSignal) -> impl IntoView {
    // Object URL for the preview image; revoked whenever it is replaced.
    let preview = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    on_cleanup(move || {
        if let Some(url) = preview.get_untracked() {
            crate::state::image::revoke_preview_url(&url);
        }
    });

    let on_file_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            let file = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                .and_then(|input| input.files())
                .and_then(|files| files.get(0));
            // A cancelled picker keeps the current selection.
            let Some(file) = file else {
                return;
            };

            let next_preview = crate::state::image::create_preview_url(&file);
            if let Some(old) = preview.get_untracked() {
                crate::state::image::revoke_preview_url(&old);
            }
            preview.set(next_preview);

            let image = crate::state::image::from_file(file);
            let _ = dispatch_prediction(prediction, PredictionEvent::ImageSelected(image));
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    let on_predict = move |_: leptos::ev::MouseEvent| {
        let Some(PredictionEffect::Upload(image)) = dispatch_prediction(prediction, PredictionEvent::Submitted) else {
            return;
        };

        // Nothing blocks a second click; each request settles on its own.
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::predict(&image).await;
            let _ = dispatch_prediction(prediction, PredictionEvent::Settled(outcome));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = image;
    };

    let loading = move || prediction.with(|s| s.loading);
    let error = move || {
        prediction.with(|s| match s.view() {
            PredictionView::Failed(message) => Some(message.to_owned()),
            _ => None,
        })
    };
    let label = move || {
        prediction.with(|s| match s.view() {
            PredictionView::Predicted(label) => Some(label.to_owned()),
            _ => None,
        })
    };
    let caption = move || {
        prediction.with(|s| s.selected.as_ref().map(|image| selection_caption(&image.name, image.size)))
    };

    view! {
        <section class="upload-section">
            <div class="upload-container">
                <input
                    type="file"
                    accept="image/*"
                    class="image-upload-input"
                    on:change=on_file_change
                />
                <button class="predict-button" on:click=on_predict>
                    "Predict"
                </button>
            </div>

            <Show when=loading>
                <p class="loading-message">{LOADING_MESSAGE}</p>
            </Show>

            {move || error().map(|message| view! { <p class="error-message">{message}</p> })}

            {move || {
                label()
                    .map(|label| {
                        view! {
                            <div class="prediction-result">
                                <div class="prediction-card">
                                    <h3>"Predicted Food:"</h3>
                                    <p class="predicted-food">{label}</p>
                                </div>
                            </div>
                        }
                    })
            }}

            {move || caption().map(|text| view! { <p class="selection-caption">{text}</p> })}

            {move || {
                preview
                    .get()
                    .map(|src| {
                        view! {
                            <div class="image-preview">
                                <img alt="Uploaded preview" src=src class="preview-image"/>
                            </div>
                        }
                    })
            }}
        </section>
    }
}
