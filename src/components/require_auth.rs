//! Wrapper for protected routes.

use leptos::prelude::*;

use crate::state::session::SessionStore;
use crate::util::auth::use_auth_redirect;

/// Renders `children` only for a signed-in user and redirects to login once the
/// session has loaded without one.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    use_auth_redirect();

    let loading = move || session.with(SessionStore::is_loading);

    view! {
        <Show
            when=move || session.with(SessionStore::is_authenticated)
            fallback=move || {
                view! {
                    <div class="page-status">
                        <p>{move || if loading() { "Loading..." } else { "Redirecting to login..." }}</p>
                    </div>
                }
            }
        >
            {children()}
        </Show>
    }
}
