//! Seeded community content: traveler profiles, trips and posts.

#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::types::{Post, Profile, Trip, User};

/// Destinations listed in the home sidebar, most popular first.
pub const TRENDING_DESTINATIONS: &[&str] = &[
    "Sajek Valley",
    "Sundarban",
    "Cox's Bazar",
    "Bandarban",
    "Sreemangal",
];

/// `(label, value)` rows for the community stats card.
pub const COMMUNITY_STATS: &[(&str, &str)] = &[
    ("Active Travelers", "12,543"),
    ("Shared Trips", "3,891"),
    ("Countries Visited", "167"),
    ("Photos Shared", "89,234"),
];

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN)
}

fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    day(y, m, d).and_time(NaiveTime::MIN).and_utc()
}

fn unsplash(photo: &str) -> String {
    format!("https://images.unsplash.com/photo-{photo}?w=800&h=600&fit=crop")
}

#[allow(clippy::too_many_arguments)]
fn profile(
    id: &str,
    name: &str,
    username: &str,
    bio: &str,
    location: &str,
    verified: bool,
    counts: (u32, u32, u32),
    joined_at: NaiveDate,
) -> Profile {
    let (followers_count, following_count, trips_count) = counts;
    let email = format!("{}@example.com", name.split(' ').next().unwrap_or(name).to_lowercase());
    Profile {
        user: User {
            id: id.to_owned(),
            name: name.to_owned(),
            email,
            avatar: format!(
                "https://api.dicebear.com/7.x/initials/svg?seed={}",
                name.replace(' ', "%20")
            ),
            bio: Some(bio.to_owned()),
        },
        username: username.to_owned(),
        location: Some(location.to_owned()),
        verified,
        followers_count,
        following_count,
        trips_count,
        joined_at,
    }
}

/// Featured travelers for the people tab.
#[must_use]
pub fn profiles() -> Vec<Profile> {
    vec![
        profile(
            "1",
            "Sarah Johnson",
            "sarahj_travels",
            "Travel photographer & blogger. Exploring the world one destination at a time 📸✈️",
            "San Francisco, CA",
            true,
            (2150, 890, 23),
            day(2023, 1, 15),
        ),
        profile(
            "2",
            "Alex Chen",
            "alexc_explorer",
            "Adventure seeker & digital nomad. Currently in Bali 🏝️",
            "Bali, Indonesia",
            false,
            (1350, 456, 18),
            day(2023, 3, 20),
        ),
        profile(
            "3",
            "Maria Rodriguez",
            "maria_wanderlust",
            "Food & culture enthusiast. Sharing authentic travel experiences 🍜🗺️",
            "Barcelona, Spain",
            true,
            (3420, 1200, 31),
            day(2022, 11, 10),
        ),
    ]
}

/// Public trips for the trips tab.
#[must_use]
pub fn trips() -> Vec<Trip> {
    let people = profiles();
    vec![
        Trip {
            id: "1".to_owned(),
            title: "Northern Lights Adventure in Iceland".to_owned(),
            description: "An incredible 7-day journey through Iceland, chasing the aurora borealis and exploring stunning landscapes.".to_owned(),
            destination: "Iceland".to_owned(),
            start_date: day(2024, 2, 10),
            end_date: day(2024, 2, 17),
            images: vec![
                unsplash("1506905925346-21bda4d32df4"),
                unsplash("1531168556467-80aace4d0144"),
                unsplash("1578662996442-48f60103fc96"),
            ],
            tags: ["aurora", "winter", "photography", "adventure"].map(str::to_owned).to_vec(),
            is_public: true,
            author: people[0].clone(),
            likes_count: 156,
            comments_count: 23,
            created_at: at(2024, 1, 20),
            updated_at: at(2024, 1, 20),
        },
        Trip {
            id: "2".to_owned(),
            title: "Southeast Asia Backpacking".to_owned(),
            description: "A month-long backpacking adventure through Thailand, Vietnam, and Cambodia.".to_owned(),
            destination: "Southeast Asia".to_owned(),
            start_date: day(2024, 3, 1),
            end_date: day(2024, 3, 30),
            images: vec![
                unsplash("1552465011-b4e21bf6e79a"),
                unsplash("1528181304800-259b08848526"),
            ],
            tags: ["backpacking", "culture", "temples", "street-food"].map(str::to_owned).to_vec(),
            is_public: true,
            author: people[1].clone(),
            likes_count: 89,
            comments_count: 12,
            created_at: at(2024, 2, 15),
            updated_at: at(2024, 2, 15),
        },
    ]
}

/// Posts for the feed tab, in display order.
#[must_use]
pub fn posts() -> Vec<Post> {
    let people = profiles();
    let trips = trips();
    vec![
        Post {
            id: "1".to_owned(),
            content: "Just witnessed the most incredible sunrise over the Blue Lagoon! Iceland never ceases to amaze me 🌅 The geothermal waters were perfect after a night of aurora hunting.".to_owned(),
            images: vec![unsplash("1578662996442-48f60103fc96")],
            location: Some("Blue Lagoon, Iceland".to_owned()),
            trip: Some(trips[0].clone()),
            author: people[0].clone(),
            likes_count: 42,
            comments_count: 8,
            created_at: at(2024, 2, 12),
            updated_at: at(2024, 2, 12),
        },
        Post {
            id: "2".to_owned(),
            content: "Temple hopping in Angkor Wat today! The intricate details and rich history are absolutely mesmerizing. Definitely worth waking up at 4 AM for that sunrise 🏛️".to_owned(),
            images: vec![
                unsplash("1528181304800-259b08848526"),
                unsplash("1562602833-0ac0ac7705c5"),
            ],
            location: Some("Angkor Wat, Cambodia".to_owned()),
            trip: Some(trips[1].clone()),
            author: people[1].clone(),
            likes_count: 67,
            comments_count: 15,
            created_at: at(2024, 3, 8),
            updated_at: at(2024, 3, 8),
        },
        Post {
            id: "3".to_owned(),
            content: "Found this hidden gem of a cafe in Barcelona! The locals here know how to live ☕ Sometimes the best travel experiences happen when you get lost.".to_owned(),
            images: vec![unsplash("1559116315-702b0b4774ce")],
            location: Some("Barcelona, Spain".to_owned()),
            trip: None,
            author: people[2].clone(),
            likes_count: 28,
            comments_count: 5,
            created_at: at(2024, 1, 25),
            updated_at: at(2024, 1, 25),
        },
    ]
}
