//! Local UI chrome state (tabs, menus, modals).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the session and feed state so
//! rendering controls can evolve independently of domain data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Tabs on the home page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HomeTab {
    #[default]
    Feed,
    Trips,
    People,
}

impl HomeTab {
    pub const ALL: [HomeTab; 3] = [HomeTab::Feed, HomeTab::Trips, HomeTab::People];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            HomeTab::Feed => "Feed",
            HomeTab::Trips => "Trips",
            HomeTab::People => "People",
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub home_tab: HomeTab,
    pub user_menu_open: bool,
    pub share_trip_open: bool,
}

impl UiState {
    pub fn toggle_user_menu(&mut self) {
        self.user_menu_open = !self.user_menu_open;
    }

    /// Close the user menu, e.g. on a click outside it.
    pub fn close_user_menu(&mut self) {
        self.user_menu_open = false;
    }
}
