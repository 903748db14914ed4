//! Community feed state: posts, trips, people and the viewer's likes.
//!
//! DESIGN
//! ======
//! Seeded from `data::feed`. Likes and newly shared trips only live for the
//! page session; nothing here is persisted.

#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::data;
use crate::types::{Post, Profile, ShareTripData, Trip, User};

#[derive(Clone, Debug, Default)]
pub struct FeedState {
    pub posts: Vec<Post>,
    pub trips: Vec<Trip>,
    pub people: Vec<Profile>,
    liked: HashSet<String>,
}

impl FeedState {
    /// Feed populated with the demo community content.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            posts: data::feed::posts(),
            trips: data::feed::trips(),
            people: data::feed::profiles(),
            liked: HashSet::new(),
        }
    }

    #[must_use]
    pub fn is_liked(&self, post_id: &str) -> bool {
        self.liked.contains(post_id)
    }

    /// Flip the viewer's like on `post_id`, adjusting its like count.
    ///
    /// Returns the new liked state, or `None` if no such post exists.
    pub fn toggle_like(&mut self, post_id: &str) -> Option<bool> {
        let post = self.posts.iter_mut().find(|p| p.id == post_id)?;
        if self.liked.remove(post_id) {
            post.likes_count = post.likes_count.saturating_sub(1);
            Some(false)
        } else {
            self.liked.insert(post_id.to_owned());
            post.likes_count = post.likes_count.saturating_add(1);
            Some(true)
        }
    }

    /// Prepend a post built from a share-trip submission.
    pub fn publish(&mut self, id: String, author: &User, data: ShareTripData, now: DateTime<Utc>) -> &Post {
        let post = Post {
            id,
            content: data.content,
            images: data.images,
            location: data.location,
            trip: None,
            author: Profile::from_user(author, now.date_naive()),
            likes_count: 0,
            comments_count: 0,
            created_at: now,
            updated_at: now,
        };
        self.posts.insert(0, post);
        &self.posts[0]
    }
}
