//! Top navigation bar: brand, search, share-trip entry point and user menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only component that signs users out. Sharing a trip is gated: signed-out
//! users are sent to login instead of seeing the form.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use chrono::{DateTime, Utc};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::share_trip_form::ShareTripForm;
use crate::config::AppConfig;
use crate::state::feed::FeedState;
use crate::state::session::SessionStore;
use crate::state::ui::UiState;
use crate::types::{ShareTripData, User};
use crate::util::auth::use_require_auth;
use crate::util::format::avatar_fallback;
use crate::util::task::SubmitError;

pub(crate) const NO_AUTHOR_MESSAGE: &str = "sign in to share a trip";

/// Publish a shared trip to the feed as `author`.
///
/// # Errors
///
/// Rejects the submission when nobody is signed in.
pub(crate) fn publish_shared_trip(
    feed: &mut FeedState,
    author: Option<&User>,
    data: ShareTripData,
    now: DateTime<Utc>,
) -> Result<(), SubmitError> {
    let author = author.ok_or_else(|| SubmitError::Rejected(NO_AUTHOR_MESSAGE.to_owned()))?;
    feed.publish(uuid::Uuid::new_v4().to_string(), author, data, now);
    Ok(())
}

#[component]
pub fn Navigation() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let feed = expect_context::<RwSignal<FeedState>>();
    let config = expect_context::<AppConfig>();
    let navigate = use_navigate();
    let require_auth = use_require_auth();

    let on_share_click = move |_| {
        if !require_auth() {
            return;
        }
        ui.update(|u| u.share_trip_open = true);
    };

    let on_share_close = Callback::new(move |()| ui.update(|u| u.share_trip_open = false));
    let on_share_submit = Callback::new(move |data: ShareTripData| {
        let author = session.with_untracked(|s| s.current_user().cloned());
        let result = feed
            .try_update(|f| publish_shared_trip(f, author.as_ref(), data, Utc::now()))
            .unwrap_or_else(|| Err(SubmitError::Rejected("feed disposed".to_owned())));
        if let Err(e) = &result {
            leptos::logging::warn!("shared trip not published: {e}");
        }
        result
    });

    let login_path = config.login_path.clone();
    let navigate_logout = navigate.clone();
    let on_logout = Callback::new(move |()| {
        session.update(SessionStore::logout);
        ui.update(UiState::close_user_menu);
        navigate_logout(&login_path, NavigateOptions::default());
    });

    let profile_path = config.profile_path.clone();
    let on_profile = Callback::new(move |()| {
        ui.update(UiState::close_user_menu);
        navigate(&profile_path, NavigateOptions::default());
    });

    let signed_in = move || session.with(|s| s.is_authenticated());
    let user_name = move || {
        session.with(|s| s.current_user().map(|u| u.name.clone()).unwrap_or_default())
    };
    let user_avatar = move || {
        session.with(|s| {
            s.current_user().map_or_else(String::new, |u| {
                if u.avatar.is_empty() { avatar_fallback(&u.name) } else { u.avatar.clone() }
            })
        })
    };

    let brand_href = config.home_path.clone();
    let home_path = config.home_path.clone();
    let sign_in_path = config.login_path.clone();
    let app_name = config.app_name.clone();
    let share_delay = config.share_delay;

    view! {
        <nav class="navigation">
            <a class="navigation__brand" href=brand_href>
                <span class="navigation__logo" aria-hidden="true">"🗺"</span>
                {app_name}
            </a>

            <input
                class="navigation__search"
                type="search"
                placeholder="Search destinations, trips, or people..."
            />

            <div class="navigation__links">
                <a class="navigation__link" href=home_path>"Home"</a>
                <button class="btn btn--primary btn--sm" on:click=on_share_click>
                    "+ Share Trip"
                </button>

                <Show
                    when=signed_in
                    fallback=move || {
                        view! {
                            <a class="btn btn--primary btn--sm" href=sign_in_path.clone()>
                                "Sign In"
                            </a>
                        }
                    }
                >
                    <div class="navigation__user">
                        <button
                            class="navigation__avatar-button"
                            on:click=move |_| ui.update(UiState::toggle_user_menu)
                            title="Account"
                        >
                            <img class="avatar avatar--sm" src=user_avatar alt=user_name/>
                        </button>
                        <Show when=move || ui.get().user_menu_open>
                            <div
                                class="navigation__menu-backdrop"
                                on:click=move |_| ui.update(UiState::close_user_menu)
                            ></div>
                            <div class="navigation__menu">
                                <p class="navigation__menu-name">{user_name}</p>
                                <button class="navigation__menu-item" on:click=move |_| on_profile.run(())>
                                    "Profile"
                                </button>
                                <button class="navigation__menu-item" on:click=move |_| on_logout.run(())>
                                    "Sign out"
                                </button>
                            </div>
                        </Show>
                    </div>
                </Show>
            </div>
        </nav>

        <Show when=move || ui.get().share_trip_open>
            <ShareTripForm on_close=on_share_close on_submit=on_share_submit delay=share_delay/>
        </Show>
    }
}
