//! Domain types shared by the session store, mock data and view components.
//!
//! DESIGN
//! ======
//! `User` is the one canonical identity shape. It is what the session persists
//! and what the credential directory hands out. Public traveler details live in
//! `Profile`, which wraps a `User` instead of redefining its fields.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Identity snapshot of a signed-in traveler.
///
/// Serialized as `{id, name, email, avatar, bio?}` into the `user` storage key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

/// Public traveler profile shown on cards and the people tab.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(flatten)]
    pub user: User,
    pub username: String,
    pub location: Option<String>,
    pub verified: bool,
    pub followers_count: u32,
    pub following_count: u32,
    pub trips_count: u32,
    pub joined_at: NaiveDate,
}

impl Profile {
    /// Build a fresh profile for a session user, e.g. when they publish a post.
    ///
    /// The username is the local part of the email address.
    #[must_use]
    pub fn from_user(user: &User, joined_at: NaiveDate) -> Self {
        let username = user
            .email
            .split_once('@')
            .map_or(user.email.as_str(), |(local, _)| local)
            .to_owned();
        Self {
            user: user.clone(),
            username,
            location: None,
            verified: false,
            followers_count: 0,
            following_count: 0,
            trips_count: 0,
            joined_at,
        }
    }
}

/// A shared trip itinerary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trip {
    pub id: String,
    pub title: String,
    pub description: String,
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub images: Vec<String>,
    pub tags: Vec<String>,
    pub is_public: bool,
    pub author: Profile,
    pub likes_count: u32,
    pub comments_count: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Trip {
    /// Number of calendar days covered by the trip, counting both ends.
    #[must_use]
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days().max(0) + 1
    }
}

/// A feed post, optionally attached to a trip.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub content: String,
    pub images: Vec<String>,
    pub location: Option<String>,
    pub trip: Option<Trip>,
    pub author: Profile,
    pub likes_count: u32,
    pub comments_count: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload raised by the share-trip form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareTripData {
    pub content: String,
    pub images: Vec<String>,
    pub location: Option<String>,
}
