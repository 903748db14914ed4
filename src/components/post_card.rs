//! Feed card for a single post with like / comment / share actions.

use leptos::prelude::*;

use crate::types::Post;
use crate::util::format::{avatar_fallback, relative_date, take_with_overflow};

/// Images shown before collapsing the rest into a `+N` tile.
const MAX_GRID_IMAGES: usize = 4;

/// A post in the home feed. Actions only raise callbacks with the post id.
#[component]
pub fn PostCard(
    post: Post,
    #[prop(optional)] liked: bool,
    on_like: Callback<String>,
    on_comment: Callback<String>,
    on_share: Callback<String>,
) -> impl IntoView {
    let author_name = post.author.user.name.clone();
    let author_alt = author_name.clone();
    let verified = post.author.verified;
    let avatar = if post.author.user.avatar.is_empty() {
        avatar_fallback(&author_name)
    } else {
        post.author.user.avatar.clone()
    };
    let posted = relative_date(post.created_at, chrono::Utc::now());
    let (shown, hidden) = take_with_overflow(&post.images, MAX_GRID_IMAGES);
    let single = post.images.len() == 1;
    let images = shown
        .iter()
        .enumerate()
        .map(|(index, src)| {
            let overflow = (index + 1 == MAX_GRID_IMAGES && hidden > 0).then(|| format!("+{hidden}"));
            view! {
                <div class="post-card__image">
                    <img src=src.clone() alt=format!("Post image {}", index + 1)/>
                    {overflow.map(|label| view! { <span class="post-card__image-more">{label}</span> })}
                </div>
            }
        })
        .collect::<Vec<_>>();

    let id_like = post.id.clone();
    let id_comment = post.id.clone();
    let id_share = post.id.clone();

    view! {
        <article class="post-card card">
            <header class="post-card__header">
                <img class="avatar avatar--md" src=avatar alt=author_alt/>
                <div>
                    <span class="post-card__author">{author_name}</span>
                    {verified.then(|| view! { <span class="badge badge--verified" title="Verified">"✓"</span> })}
                    <p class="post-card__time">{posted}</p>
                </div>
            </header>

            <p class="post-card__content">{post.content.clone()}</p>
            {post.location.clone().map(|loc| view! { <p class="post-card__location">"📍 " {loc}</p> })}
            {post
                .trip
                .as_ref()
                .map(|trip| view! { <p class="post-card__trip">"From trip: " {trip.title.clone()}</p> })}

            <div class="post-card__images" class:post-card__images--single=single>
                {images}
            </div>

            <footer class="post-card__actions">
                <button
                    class="btn btn--ghost"
                    class:post-card__action--liked=liked
                    on:click=move |_| on_like.run(id_like.clone())
                >
                    {if liked { "♥ " } else { "♡ " }}
                    {post.likes_count}
                </button>
                <button class="btn btn--ghost" on:click=move |_| on_comment.run(id_comment.clone())>
                    "💬 "
                    {post.comments_count}
                </button>
                <button class="btn btn--ghost" on:click=move |_| on_share.run(id_share.clone())>
                    "Share"
                </button>
            </footer>
        </article>
    }
}
