//! Shared auth UI helpers: passive redirect and active gate.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical unauthenticated redirect behavior.
//! Action handlers (like, comment, share, plan trip) use the active gate
//! instead of wrapping every button in a redirect.
//!
//! These guards only shape the UX; they are not an access-control boundary.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::AppConfig;
use crate::state::auth::AuthState;
use crate::state::session::SessionStore;

/// Whether a passive guard should send the user to login now.
///
/// Never true while the session is still being restored, otherwise a signed-in
/// user would flash through the login page on reload.
#[must_use]
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && !state.is_authenticated()
}

/// Active gate for event handlers.
///
/// Returns `true` when the caller may proceed. Otherwise returns `false`, and
/// navigates to `login_path` unless the session is still loading.
pub fn gate<F>(state: &AuthState, login_path: &str, navigate: F) -> bool
where
    F: FnOnce(&str, NavigateOptions),
{
    if state.is_authenticated() {
        return true;
    }
    if !state.loading {
        navigate(login_path, NavigateOptions::default());
    }
    false
}

/// Redirect to `login_path` whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionStore>, login_path: String, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let redirect = session.with(|s| should_redirect_unauth(s.state()));
        if redirect {
            navigate(&login_path, NavigateOptions::default());
        }
    });
}

/// Passive guard hook for protected routes.
pub fn use_auth_redirect() {
    let session = expect_context::<RwSignal<SessionStore>>();
    let config = expect_context::<AppConfig>();
    install_unauth_redirect(session, config.login_path, use_navigate());
}

/// Active gate hook: call the returned closure at the top of a handler and
/// bail out when it returns `false`.
pub fn use_require_auth() -> impl Fn() -> bool + Clone + 'static {
    let session = expect_context::<RwSignal<SessionStore>>();
    let login_path = expect_context::<AppConfig>().login_path;
    let navigate = use_navigate();
    move || {
        let state = session.with_untracked(|s| s.state().clone());
        gate(&state, &login_path, |path, options| navigate(path, options))
    }
}
