//! Image prediction flow: select an image, submit it, show a label or an error.
//!
//! DESIGN
//! ======
//! `PredictionState` is the single record the page renders from. It is
//! updated only through [`PredictionState::apply`], which never performs I/O:
//! when a request must go out it returns a [`PredictionEffect`] and the shell
//! reports the result back as [`PredictionEvent::Settled`].
//!
//! Overlapping submissions are allowed. Each one produces its own upload
//! effect, and every settlement overwrites the outcome and clears the loading
//! flag, so the last response to arrive wins.

#[cfg(test)]
#[path = "prediction_test.rs"]
mod prediction_test;

use crate::error::{PredictError, RequestFailure};

/// A user-chosen image plus the shell-specific handle needed to upload it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedImage<F> {
    pub name: String,
    pub size: u64,
    pub mime: Option<String>,
    pub handle: F,
}

/// UI state for the prediction flow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PredictionState<F> {
    pub selected: Option<SelectedImage<F>>,
    pub prediction: Option<String>,
    pub error: Option<PredictError>,
    pub loading: bool,
}

impl<F> Default for PredictionState<F> {
    fn default() -> Self {
        Self { selected: None, prediction: None, error: None, loading: false }
    }
}

/// Inputs to the prediction flow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PredictionEvent<F> {
    /// The user picked a new image.
    ImageSelected(SelectedImage<F>),
    /// The user pressed Predict.
    Submitted,
    /// A classification request finished.
    Settled(Result<String, RequestFailure>),
}

/// Work the shell must perform after a transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PredictionEffect<F> {
    /// POST this image to the classifier.
    Upload(SelectedImage<F>),
}

/// What the result area should show. Exactly one variant at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PredictionView<'a> {
    Idle,
    Loading,
    Failed(&'a str),
    Predicted(&'a str),
}

impl<F: Clone> PredictionState<F> {
    /// Apply one event, returning the next state and any request to issue.
    #[must_use]
    pub fn apply(&self, event: PredictionEvent<F>) -> (Self, Option<PredictionEffect<F>>) {
        match event {
            PredictionEvent::ImageSelected(image) => {
                let next = Self { selected: Some(image), prediction: None, error: None, loading: self.loading };
                (next, None)
            }
            PredictionEvent::Submitted => match &self.selected {
                None => {
                    let next = Self { error: Some(PredictError::NoImageSelected), ..self.clone() };
                    (next, None)
                }
                Some(image) => {
                    let next = Self { prediction: None, error: None, loading: true, ..self.clone() };
                    (next, Some(PredictionEffect::Upload(image.clone())))
                }
            },
            PredictionEvent::Settled(outcome) => {
                let (prediction, error) = match outcome {
                    Ok(label) => (Some(label), None),
                    Err(failure) => (None, Some(PredictError::Request(failure))),
                };
                let next = Self { prediction, error, loading: false, ..self.clone() };
                (next, None)
            }
        }
    }
}

impl<F> PredictionState<F> {
    /// The error text to display, if any.
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }

    /// Project the state onto the single thing the result area shows.
    ///
    /// Loading takes precedence; an error hides any label.
    #[must_use]
    pub fn view(&self) -> PredictionView<'_> {
        if self.loading {
            return PredictionView::Loading;
        }
        match (&self.error, &self.prediction) {
            (Some(PredictError::NoImageSelected), _) => PredictionView::Failed(crate::error::NO_IMAGE_MESSAGE),
            (Some(PredictError::Request(failure)), _) => PredictionView::Failed(failure_text(failure)),
            (None, Some(label)) => PredictionView::Predicted(label),
            (None, None) => PredictionView::Idle,
        }
    }
}

fn failure_text(failure: &RequestFailure) -> &str {
    match failure {
        RequestFailure::Status(_) => crate::error::STATUS_FAILURE_MESSAGE,
        RequestFailure::UnexpectedEnd => crate::error::UNEXPECTED_RESPONSE_MESSAGE,
        RequestFailure::Decode(text) | RequestFailure::Transport(text) | RequestFailure::Service(text) => text,
    }
}
