//! Hard-coded demo accounts used for credential checks.
//!
//! This is a stand-in for a user database, not a security boundary: passwords
//! are plaintext and compared by exact string match.

#[cfg(test)]
#[path = "directory_test.rs"]
mod directory_test;

use crate::types::User;

/// One demo account row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockCredential {
    pub id: &'static str,
    pub email: &'static str,
    pub password: &'static str,
    pub name: &'static str,
    pub avatar: &'static str,
    pub bio: Option<&'static str>,
}

impl MockCredential {
    /// Identity snapshot copied into the session at login time.
    #[must_use]
    pub fn to_user(&self) -> User {
        User {
            id: self.id.to_owned(),
            name: self.name.to_owned(),
            email: self.email.to_owned(),
            avatar: self.avatar.to_owned(),
            bio: self.bio.map(str::to_owned),
        }
    }
}

/// Demo accounts, keyed by email.
pub const MOCK_CREDENTIALS: &[MockCredential] = &[
    MockCredential {
        id: "1",
        email: "john@example.com",
        password: "password123",
        name: "John Traveler",
        avatar: "https://api.dicebear.com/7.x/avataaars/svg?seed=John",
        bio: Some("Adventure seeker exploring the world one destination at a time"),
    },
    MockCredential {
        id: "2",
        email: "sarah@example.com",
        password: "travel2024",
        name: "Sarah Explorer",
        avatar: "https://api.dicebear.com/7.x/avataaars/svg?seed=Sarah",
        bio: Some("Digital nomad sharing hidden gems and local experiences"),
    },
    MockCredential {
        id: "3",
        email: "mike@example.com",
        password: "wanderlust",
        name: "Mike Wanderer",
        avatar: "https://api.dicebear.com/7.x/avataaars/svg?seed=Mike",
        bio: Some("Photography enthusiast capturing moments from around the globe"),
    },
    MockCredential {
        id: "4",
        email: "emma@example.com",
        password: "adventure123",
        name: "Emma Journey",
        avatar: "https://api.dicebear.com/7.x/avataaars/svg?seed=Emma",
        bio: Some("Solo traveler inspiring others to step out of their comfort zone"),
    },
    MockCredential {
        id: "5",
        email: "alex@example.com",
        password: "explore2024",
        name: "Alex Nomad",
        avatar: "https://api.dicebear.com/7.x/avataaars/svg?seed=Alex",
        bio: Some("Cultural enthusiast diving deep into local traditions and cuisines"),
    },
];

/// Find the account matching both `email` and `password` exactly.
#[must_use]
pub fn lookup(email: &str, password: &str) -> Option<&'static MockCredential> {
    MOCK_CREDENTIALS
        .iter()
        .find(|record| record.email == email && record.password == password)
}
