//! Card for a shared trip itinerary.
//!
//! DESIGN
//! ======
//! The description is collapsed by default and expands in place; the card
//! holds no other state.

use leptos::prelude::*;

use crate::types::Trip;
use crate::util::format::{avatar_fallback, date_range, take_with_overflow};

const MAX_TAGS: usize = 3;

#[component]
pub fn TripCard(trip: Trip, #[prop(optional)] compact: bool) -> impl IntoView {
    let expanded = RwSignal::new(false);

    let cover = trip.images.first().cloned().unwrap_or_default();
    let photo_count = trip.images.len();
    let dates = date_range(trip.start_date, trip.end_date);
    let days = trip.duration_days();
    let author_name = trip.author.user.name.clone();
    let author_alt = author_name.clone();
    let author_avatar = if trip.author.user.avatar.is_empty() {
        avatar_fallback(&author_name)
    } else {
        trip.author.user.avatar.clone()
    };
    let (tags, hidden_tags) = take_with_overflow(&trip.tags, MAX_TAGS);
    let tags = tags
        .iter()
        .map(|tag| view! { <span class="tag">{format!("#{tag}")}</span> })
        .collect::<Vec<_>>();
    let description = trip.description.clone();

    view! {
        <article class="trip-card card" class:trip-card--compact=compact>
            <div class="trip-card__cover">
                <img src=cover alt=trip.title.clone()/>
                <span class="trip-card__photos">{format!("{photo_count} photos")}</span>
            </div>
            <div class="trip-card__body">
                <h3 class="trip-card__title">{trip.title.clone()}</h3>
                <p class="trip-card__destination">"📍 " {trip.destination.clone()}</p>
                <p class="trip-card__dates">
                    "📅 " {dates} <span class="trip-card__days">{format!(" · {days} days")}</span>
                </p>
                <Show when=move || expanded.get()>
                    <p class="trip-card__description">{description.clone()}</p>
                </Show>
                <footer class="trip-card__footer">
                    <span class="trip-card__author">
                        <img class="avatar avatar--sm" src=author_avatar alt=author_alt/>
                        {author_name}
                    </span>
                    <span class="trip-card__counts">
                        {format!("♥ {} · 💬 {}", trip.likes_count, trip.comments_count)}
                    </span>
                    <button
                        class="btn btn--ghost trip-card__toggle"
                        on:click=move |_| expanded.update(|e| *e = !*e)
                        title="Toggle details"
                    >
                        {move || if expanded.get() { "▲" } else { "▼" }}
                    </button>
                </footer>
                <div class="trip-card__tags">
                    {tags}
                    {(hidden_tags > 0).then(|| view! { <span class="tag tag--more">{format!("+{hidden_tags} more")}</span> })}
                </div>
            </div>
        </article>
    }
}
