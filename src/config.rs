//! Application configuration provided to every page through context.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

/// Routes and simulated latencies used across the UI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub app_name: String,
    pub home_path: String,
    pub login_path: String,
    pub profile_path: String,
    /// Artificial delay before a sign-in attempt is checked.
    pub login_delay: Duration,
    /// Artificial delay standing in for the share-trip API round-trip.
    pub share_delay: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: "TourTribe".to_owned(),
            home_path: "/".to_owned(),
            login_path: "/login".to_owned(),
            profile_path: "/profile".to_owned(),
            login_delay: Duration::from_millis(1000),
            share_delay: Duration::from_millis(1000),
        }
    }
}
