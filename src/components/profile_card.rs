//! Traveler profile card, compact (people tab) or full.

use leptos::prelude::*;

use crate::types::Profile;
use crate::util::format::{avatar_fallback, long_date};

#[component]
pub fn ProfileCard(
    profile: Profile,
    #[prop(optional)] compact: bool,
    #[prop(optional)] is_current_user: bool,
) -> impl IntoView {
    let name = profile.user.name.clone();
    let avatar = if profile.user.avatar.is_empty() {
        avatar_fallback(&name)
    } else {
        profile.user.avatar.clone()
    };
    let action = if is_current_user { "Edit" } else { "Follow" };
    let verified = profile
        .verified
        .then(|| view! { <span class="badge badge--verified" title="Verified">"✓"</span> });
    let location = profile
        .location
        .clone()
        .map(|loc| view! { <p class="profile-card__location">"📍 " {loc}</p> });

    if compact {
        return view! {
            <div class="profile-card profile-card--compact card">
                <img class="avatar avatar--md" src=avatar alt=name.clone()/>
                <div class="profile-card__summary">
                    <span class="profile-card__name">{name.clone()}</span>
                    {verified}
                    {location}
                </div>
                <button class="btn btn--outline btn--sm">{action}</button>
            </div>
        }
        .into_any();
    }

    let bio = profile.user.bio.clone().map(|bio| view! { <p class="profile-card__bio">{bio}</p> });
    let joined = format!("Joined {}", long_date(profile.joined_at));

    view! {
        <div class="profile-card card">
            <img class="avatar avatar--lg" src=avatar alt=name.clone()/>
            <h2 class="profile-card__name">{name.clone()} {verified}</h2>
            <p class="profile-card__username">{format!("@{}", profile.username)}</p>
            {bio}
            {location}
            <p class="profile-card__joined">{joined}</p>
            <dl class="profile-card__stats">
                <div><dt>"Trips"</dt><dd>{profile.trips_count}</dd></div>
                <div><dt>"Followers"</dt><dd>{profile.followers_count}</dd></div>
                <div><dt>"Following"</dt><dd>{profile.following_count}</dd></div>
            </dl>
            <button class="btn btn--primary">{action}</button>
        </div>
    }
    .into_any()
}
