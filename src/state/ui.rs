//! Local UI chrome state (settings sidebar, mobile menu, header, active link).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the preference and carousel
//! models so page controls can evolve independently of persisted choices.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::state::portfolio::PortfolioFilter;

/// UI state for the sidebar, navigation and portfolio filter.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub sidebar_open: bool,
    pub mobile_menu_open: bool,
    pub header_scrolled: bool,
    pub active_section: Option<String>,
    pub portfolio_filter: PortfolioFilter,
}

impl UiState {
    pub fn open_sidebar(&mut self) {
        self.sidebar_open = true;
    }

    pub fn close_sidebar(&mut self) {
        self.sidebar_open = false;
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    /// Escape closes every overlay.
    pub fn on_escape(&mut self) {
        self.sidebar_open = false;
        self.mobile_menu_open = false;
    }

    /// A navigation link was followed.
    pub fn on_nav_link(&mut self, section: &str) {
        self.mobile_menu_open = false;
        self.active_section = Some(section.to_owned());
    }

    pub fn is_active_section(&self, section: &str) -> bool {
        self.active_section.as_deref() == Some(section)
    }
}
