//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every shared store is constructed here and nowhere else. The session starts
//! in its loading state and is restored from browser storage once the app is
//! running in the browser, so server-rendered HTML never claims a user.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navigation::Navigation;
use crate::config::AppConfig;
use crate::pages::{home::HomePage, login::LoginPage, profile::ProfilePage};
use crate::state::{feed::FeedState, session::SessionStore, ui::UiState};
use crate::util::storage::BrowserStorage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::default();
    let session = RwSignal::new(SessionStore::new(Arc::new(BrowserStorage)));
    let ui = RwSignal::new(UiState::default());
    let feed = RwSignal::new(FeedState::seeded());

    provide_context(config.clone());
    provide_context(session);
    provide_context(ui);
    provide_context(feed);

    // Effects only run in the browser, which is where the persisted session lives.
    Effect::new(move || session.update(SessionStore::initialize));

    view! {
        <Stylesheet id="leptos" href="/pkg/tourtribe.css"/>
        <Title text=config.app_name/>

        <Router>
            <Navigation/>
            <Routes fallback=|| view! { <p class="page-status">"Page not found."</p> }>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("profile") view=ProfilePage/>
            </Routes>
        </Router>
    }
}
