use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_everything_closed() {
    let state = UiState::default();
    assert!(!state.sidebar_open);
    assert!(!state.mobile_menu_open);
    assert!(!state.header_scrolled);
    assert_eq!(state.active_section, None);
    assert_eq!(state.portfolio_filter, PortfolioFilter::All);
}

// =============================================================
// Sidebar and menu
// =============================================================

#[test]
fn sidebar_open_close_toggle() {
    let mut state = UiState::default();
    state.open_sidebar();
    assert!(state.sidebar_open);
    state.close_sidebar();
    assert!(!state.sidebar_open);
    state.toggle_sidebar();
    assert!(state.sidebar_open);
    state.toggle_sidebar();
    assert!(!state.sidebar_open);
}

#[test]
fn escape_closes_sidebar_and_menu() {
    let mut state = UiState::default();
    state.open_sidebar();
    state.toggle_mobile_menu();
    state.on_escape();
    assert!(!state.sidebar_open);
    assert!(!state.mobile_menu_open);
}

#[test]
fn nav_link_closes_menu_and_marks_section() {
    let mut state = UiState::default();
    state.toggle_mobile_menu();
    state.on_nav_link("contact");
    assert!(!state.mobile_menu_open);
    assert!(state.is_active_section("contact"));
    assert!(!state.is_active_section("about"));
}
