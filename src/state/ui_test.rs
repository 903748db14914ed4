use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_tab_is_feed() {
    let state = UiState::default();
    assert_eq!(state.home_tab, HomeTab::Feed);
}

#[test]
fn ui_state_default_overlays_closed() {
    let state = UiState::default();
    assert!(!state.user_menu_open);
    assert!(!state.share_trip_open);
}

// =============================================================
// HomeTab
// =============================================================

#[test]
fn home_tab_labels() {
    let labels: Vec<_> = HomeTab::ALL.iter().map(|t| t.label()).collect();
    assert_eq!(labels, ["Feed", "Trips", "People"]);
}

#[test]
fn home_tab_variants_are_distinct() {
    assert_ne!(HomeTab::Feed, HomeTab::Trips);
    assert_ne!(HomeTab::Trips, HomeTab::People);
}

// =============================================================
// User menu
// =============================================================

#[test]
fn toggle_user_menu_opens_then_closes() {
    let mut state = UiState::default();
    state.toggle_user_menu();
    assert!(state.user_menu_open);
    state.toggle_user_menu();
    assert!(!state.user_menu_open);
}

#[test]
fn close_user_menu_from_outside_click() {
    let mut state = UiState::default();
    state.toggle_user_menu();
    state.close_user_menu();
    assert!(!state.user_menu_open);
    state.close_user_menu();
    assert!(!state.user_menu_open);
}
