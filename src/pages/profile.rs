//! Profile page for the signed-in traveler.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;

use crate::components::post_card::PostCard;
use crate::components::profile_card::ProfileCard;
use crate::components::require_auth::RequireAuth;
use crate::state::feed::FeedState;
use crate::state::session::SessionStore;
use crate::types::{Post, Profile};

/// Posts authored by `user_id`, newest first as they appear in the feed.
pub(crate) fn posts_by<'a>(posts: &'a [Post], user_id: &str) -> Vec<&'a Post> {
    posts.iter().filter(|p| p.author.user.id == user_id).collect()
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    view! {
        <RequireAuth>
            <ProfileContent/>
        </RequireAuth>
    }
}

#[component]
fn ProfileContent() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let feed = expect_context::<RwSignal<FeedState>>();

    let profile = move || {
        session.with(|s| {
            s.current_user()
                .map(|user| Profile::from_user(user, chrono::Utc::now().date_naive()))
        })
    };

    let card = move || profile().map(|p| view! { <ProfileCard profile=p is_current_user=true/> });

    let on_like = Callback::new(move |post_id: String| {
        feed.update(|f| {
            f.toggle_like(&post_id);
        });
    });
    let on_other = Callback::new(|post_id: String| leptos::logging::log!("profile post action post={post_id}"));

    let user_id = move || session.with(|s| s.current_user().map(|u| u.id.clone()));
    let has_posts = move || {
        user_id().is_some_and(|id| feed.with(|f| !posts_by(&f.posts, &id).is_empty()))
    };
    let posts = move || {
        let Some(user_id) = user_id() else {
            return Vec::new();
        };
        feed.with(|f| {
            posts_by(&f.posts, &user_id)
                .into_iter()
                .map(|post| {
                    view! {
                        <PostCard
                            post=post.clone()
                            liked=f.is_liked(&post.id)
                            on_like=on_like
                            on_comment=on_other
                            on_share=on_other
                        />
                    }
                })
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="profile-page">
            {card}
            <section class="profile-page__posts">
                <h2>"Your posts"</h2>
                <Show
                    when=has_posts
                    fallback=|| view! { <p class="page-status">"You haven't shared any trips yet."</p> }
                >
                    {posts}
                </Show>
            </section>
        </div>
    }
}
