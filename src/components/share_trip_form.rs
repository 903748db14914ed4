//! Modal form for sharing a trip story to the feed.
//!
//! SYSTEM CONTEXT
//! ==============
//! The form fakes the API round-trip with a cancellable delayed task. Closing
//! or unmounting the modal cancels the task, so a late completion never
//! touches disposed signals.
//!
//! ERROR HANDLING
//! ==============
//! `on_submit` runs at the end of the delayed task and may reject the post.
//! A rejection is logged, shown inline and `is_submitting` is reset so the
//! user can retry. Nothing is retried automatically.

#[cfg(test)]
#[path = "share_trip_form_test.rs"]
mod share_trip_form_test;

use std::time::Duration;

use leptos::prelude::*;

use crate::types::ShareTripData;
use crate::util::task::{CancelToken, SubmitError, simulate_round_trip};

pub(crate) const EMPTY_CONTENT_MESSAGE: &str = "Tell us about your trip first.";
pub(crate) const REJECTED_MESSAGE: &str = "Could not share your trip. Please try again.";

/// In-flight state of the form's submit button.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct SubmitStatus {
    pub is_submitting: bool,
    pub error: Option<String>,
}

impl SubmitStatus {
    pub(crate) fn start(&mut self) {
        self.is_submitting = true;
        self.error = None;
    }

    /// Apply a finished submission. Returns `true` when the form should close.
    ///
    /// A cancelled task belongs to a form that is already gone, so it leaves
    /// the status untouched.
    pub(crate) fn settle(&mut self, result: &Result<(), SubmitError>) -> bool {
        match result {
            Ok(()) => {
                *self = Self::default();
                true
            }
            Err(SubmitError::Cancelled) => false,
            Err(SubmitError::Rejected(_)) => {
                self.is_submitting = false;
                self.error = Some(REJECTED_MESSAGE.to_owned());
                false
            }
        }
    }
}

/// Trim the inputs and build the submission payload.
pub(crate) fn validate_share_trip(
    content: &str,
    location: &str,
    images: Vec<String>,
) -> Result<ShareTripData, &'static str> {
    let content = content.trim();
    if content.is_empty() {
        return Err(EMPTY_CONTENT_MESSAGE);
    }
    let location = location.trim();
    Ok(ShareTripData {
        content: content.to_owned(),
        images,
        location: (!location.is_empty()).then(|| location.to_owned()),
    })
}

/// Placeholder photo URL standing in for a file picker upload.
pub(crate) fn mock_image_url() -> String {
    format!(
        "https://images.unsplash.com/photo-{}?w=400&h=300&fit=crop",
        uuid::Uuid::new_v4().simple()
    )
}

/// Remove the image at `index`, ignoring out-of-range indexes.
pub(crate) fn remove_image(images: &mut Vec<String>, index: usize) {
    if index < images.len() {
        images.remove(index);
    }
}

#[component]
pub fn ShareTripForm(
    on_close: Callback<()>,
    on_submit: Callback<ShareTripData, Result<(), SubmitError>>,
    #[prop(default = Duration::from_millis(1000))] delay: Duration,
) -> impl IntoView {
    let content = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let images = RwSignal::new(Vec::<String>::new());
    let status = RwSignal::new(SubmitStatus::default());

    let token = CancelToken::new();
    on_cleanup({
        let token = token.clone();
        move || token.cancel()
    });

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if status.with_untracked(|s| s.is_submitting) {
            return;
        }
        let data = match validate_share_trip(&content.get_untracked(), &location.get_untracked(), images.get_untracked()) {
            Ok(data) => data,
            Err(msg) => {
                status.update(|s| s.error = Some(msg.to_owned()));
                return;
            }
        };
        status.update(SubmitStatus::start);

        let token = token.clone();
        leptos::task::spawn_local(async move {
            let result = simulate_round_trip(&token, delay, move || on_submit.run(data)).await;
            match &result {
                Ok(()) => {}
                Err(SubmitError::Cancelled) => {
                    leptos::logging::log!("share trip cancelled before completion");
                    return;
                }
                Err(e) => leptos::logging::error!("Failed to share trip: {e}"),
            }
            let close = status.try_update(|s| s.settle(&result)).unwrap_or(false);
            if close {
                content.set(String::new());
                location.set(String::new());
                images.set(Vec::new());
                on_close.run(());
            }
        });
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div
                class="dialog dialog--share"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
                tabindex="0"
            >
                <h2>"Share a Trip"</h2>
                <form class="share-form" on:submit=submit>
                    <textarea
                        class="dialog__input share-form__content"
                        placeholder="What's your travel story? Share your experiences, tips, or ask questions..."
                        prop:value=move || content.get()
                        on:input=move |ev| content.set(event_target_value(&ev))
                    ></textarea>
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="Add location (optional)"
                        prop:value=move || location.get()
                        on:input=move |ev| location.set(event_target_value(&ev))
                    />
                    <div class="share-form__images">
                        {move || {
                            images
                                .get()
                                .into_iter()
                                .enumerate()
                                .map(|(index, src)| {
                                    view! {
                                        <div class="share-form__image">
                                            <img src=src alt=format!("Upload {}", index + 1)/>
                                            <button
                                                type="button"
                                                class="share-form__image-remove"
                                                title="Remove photo"
                                                on:click=move |_| images.update(|list| remove_image(list, index))
                                            >
                                                "✕"
                                            </button>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                    <Show when=move || status.with(|s| s.error.is_some())>
                        <p class="dialog__danger">{move || status.with(|s| s.error.clone().unwrap_or_default())}</p>
                    </Show>
                    <div class="dialog__actions">
                        <button
                            type="button"
                            class="btn btn--ghost"
                            on:click=move |_| images.update(|list| list.push(mock_image_url()))
                        >
                            "📷 Add Photo"
                        </button>
                        <button type="button" class="btn" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button
                            type="submit"
                            class="btn btn--primary"
                            disabled=move || status.with(|s| s.is_submitting) || content.get().trim().is_empty()
                        >
                            {move || if status.with(|s| s.is_submitting) { "Posting..." } else { "Post" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
