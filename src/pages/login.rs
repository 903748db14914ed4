//! Login page: email + password against the demo directory.
//!
//! SYSTEM CONTEXT
//! ==============
//! The credential check runs after an artificial delay standing in for an API
//! round-trip. A signed-in visitor is sent straight home.
//!
//! ERROR HANDLING
//! ==============
//! Invalid credentials surface as an inline message and re-enable the form.
//! A check cancelled by unmounting the page is dropped silently.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::AppConfig;
use crate::data::directory::MOCK_CREDENTIALS;
use crate::state::session::SessionStore;
use crate::util::task::{CancelToken, SubmitError, simulate_round_trip};

pub(crate) const MISSING_FIELDS_MESSAGE: &str = "Please enter both email and password.";

/// Require both fields. Values are passed through untouched; the directory
/// match is exact.
pub(crate) fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS_MESSAGE);
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let config = expect_context::<AppConfig>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let token = CancelToken::new();
    on_cleanup({
        let token = token.clone();
        move || token.cancel()
    });

    let home_path = config.home_path.clone();
    let navigate_home = navigate.clone();
    Effect::new(move || {
        if session.with(SessionStore::is_authenticated) {
            navigate_home(&home_path, NavigateOptions::default());
        }
    });

    let login_delay = config.login_delay;
    let success_path = config.home_path.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let (email_value, password_value) =
            match validate_login_input(&email.get_untracked(), &password.get_untracked()) {
                Ok(pair) => pair,
                Err(msg) => {
                    error.set(Some(msg.to_owned()));
                    return;
                }
            };
        error.set(None);
        busy.set(true);

        let token = token.clone();
        let navigate = navigate.clone();
        let success_path = success_path.clone();
        leptos::task::spawn_local(async move {
            let outcome = simulate_round_trip(&token, login_delay, move || {
                session
                    .try_update(|s| s.authenticate(&email_value, &password_value))
                    .ok_or_else(|| SubmitError::Rejected("session disposed".to_owned()))?
                    .map_err(|e| SubmitError::Rejected(e.to_string()))
            })
            .await;
            match outcome {
                Ok(()) => navigate(&success_path, NavigateOptions::default()),
                Err(SubmitError::Cancelled) => {
                    leptos::logging::log!("login cancelled before completion");
                }
                Err(SubmitError::Rejected(msg)) => {
                    error.set(Some(msg));
                    busy.set(false);
                }
            }
        });
    };

    let demo_accounts = MOCK_CREDENTIALS
        .iter()
        .map(|account| {
            view! {
                <li>
                    <button
                        type="button"
                        class="login-demo__account"
                        on:click=move |_| {
                            email.set(account.email.to_owned());
                            password.set(account.password.to_owned());
                            error.set(None);
                        }
                    >
                        <span class="login-demo__name">{account.name}</span>
                        <span class="login-demo__email">{account.email}</span>
                    </button>
                </li>
            }
        })
        .collect::<Vec<_>>();

    let app_name = config.app_name.clone();

    view! {
        <div class="login-page">
            <div class="login-card card">
                <h1>{app_name}</h1>
                <p class="login-card__subtitle">"Sign in to connect with fellow travelers"</p>
                <form class="login-form" on:submit=on_submit>
                    <label class="login-form__label">
                        "Email"
                        <input
                            class="login-input"
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="login-form__label">
                        "Password"
                        <input
                            class="login-input"
                            type="password"
                            placeholder="Your password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || error.get().is_some()>
                        <p class="login-message login-message--error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="btn btn--primary login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <div class="login-divider"></div>
                <section class="login-demo">
                    <h2>"Demo accounts"</h2>
                    <p class="login-card__subtitle">"Pick one to fill in the form."</p>
                    <ul>{demo_accounts}</ul>
                </section>
            </div>
        </div>
    }
}
