//! Home page: welcome banner, feed / trips / people tabs and sidebar.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browsing is open to everyone. Interactions (like, comment, share, plan a
//! trip) go through the active auth gate first.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::post_card::PostCard;
use crate::components::profile_card::ProfileCard;
use crate::components::trip_card::TripCard;
use crate::data::feed::{COMMUNITY_STATS, TRENDING_DESTINATIONS};
use crate::state::feed::FeedState;
use crate::state::session::SessionStore;
use crate::state::ui::{HomeTab, UiState};
use crate::util::auth::use_require_auth;

/// Banner heading for the signed-in user's name, if any.
pub(crate) fn welcome_heading(name: Option<&str>) -> String {
    match name {
        Some(name) => format!("Welcome back, {name}! 🌍"),
        None => "Welcome to TourTribe! 🌍".to_owned(),
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let feed = expect_context::<RwSignal<FeedState>>();
    let require_auth = use_require_auth();

    let gate_like = require_auth.clone();
    let on_like = Callback::new(move |post_id: String| {
        if !gate_like() {
            return;
        }
        let liked = feed.try_update(|f| f.toggle_like(&post_id)).flatten();
        leptos::logging::log!("like post={post_id} liked={liked:?}");
    });

    let gate_comment = require_auth.clone();
    let on_comment = Callback::new(move |post_id: String| {
        if !gate_comment() {
            return;
        }
        leptos::logging::log!("comment on post={post_id}");
    });

    let gate_share = require_auth.clone();
    let on_share = Callback::new(move |post_id: String| {
        if !gate_share() {
            return;
        }
        leptos::logging::log!("share post={post_id}");
    });

    let on_plan_trip = move |_| {
        if !require_auth() {
            return;
        }
        ui.update(|u| u.share_trip_open = true);
    };

    let user_name = move || session.with(|s| s.current_user().map(|u| u.name.clone()));
    let heading = move || welcome_heading(user_name().as_deref());
    let subheading = move || {
        if user_name().is_some() {
            "Ready for your next adventure? Check out what the community is sharing!"
        } else {
            "Discover amazing destinations, connect with fellow travelers, and share your adventures."
        }
    };

    let tabs = HomeTab::ALL
        .into_iter()
        .map(|tab| {
            view! {
                <button
                    class="home-page__tab"
                    class:home-page__tab--active=move || ui.get().home_tab == tab
                    on:click=move |_| ui.update(|u| u.home_tab = tab)
                >
                    {tab.label()}
                </button>
            }
        })
        .collect::<Vec<_>>();

    let content = move || match ui.get().home_tab {
        HomeTab::Feed => feed.with(|f| {
            f.posts
                .iter()
                .map(|post| {
                    view! {
                        <PostCard
                            post=post.clone()
                            liked=f.is_liked(&post.id)
                            on_like=on_like
                            on_comment=on_comment
                            on_share=on_share
                        />
                    }
                })
                .collect::<Vec<_>>()
                .into_any()
        }),
        HomeTab::Trips => feed.with(|f| {
            view! {
                <div class="home-page__grid">
                    {f.trips.iter().map(|trip| view! { <TripCard trip=trip.clone()/> }).collect::<Vec<_>>()}
                </div>
            }
            .into_any()
        }),
        HomeTab::People => feed.with(|f| {
            view! {
                <div class="home-page__grid">
                    {f.people
                        .iter()
                        .map(|profile| view! { <ProfileCard profile=profile.clone() compact=true/> })
                        .collect::<Vec<_>>()}
                </div>
            }
            .into_any()
        }),
    };

    let trending = TRENDING_DESTINATIONS
        .iter()
        .enumerate()
        .map(|(index, destination)| {
            view! {
                <li class="sidebar__row">
                    <span>{*destination}</span>
                    <span class="sidebar__rank">{format!("#{}", index + 1)}</span>
                </li>
            }
        })
        .collect::<Vec<_>>();

    let stats = COMMUNITY_STATS
        .iter()
        .map(|(label, value)| {
            view! {
                <li class="sidebar__row">
                    <span>{*label}</span>
                    <strong>{*value}</strong>
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="home-page">
            <main class="home-page__main">
                <section class="home-page__welcome">
                    <h1>{heading}</h1>
                    <p>{subheading}</p>
                </section>
                <div class="home-page__tabs">{tabs}</div>
                <div class="home-page__content">{content}</div>
            </main>

            <aside class="home-page__sidebar">
                <section class="card sidebar__card">
                    <h2>"🔥 Trending Destinations"</h2>
                    <ul>{trending}</ul>
                </section>
                <section class="card sidebar__card">
                    <h2>"📊 Community Stats"</h2>
                    <ul>{stats}</ul>
                </section>
                <section class="card sidebar__card sidebar__cta">
                    <h3>"Ready to explore?"</h3>
                    <p>"Share your next adventure with the TourTribe community."</p>
                    <button class="btn btn--primary" on:click=on_plan_trip>
                        "Plan Your Trip"
                    </button>
                </section>
            </aside>
        </div>
    }
}
