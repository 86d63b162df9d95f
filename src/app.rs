//! Root application component with context providers and window listeners.
//!
//! ARCHITECTURE
//! ============
//! This is the event-dispatch boundary: window-level scroll and key events
//! are translated here into calls on `UiState`, and the preference manager
//! is created and loaded before anything renders.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::config::PageConfig;
use crate::content::NAV_SECTIONS;
use crate::pages::home::HomePage;
use crate::state::nav::{active_section, header_scrolled};
use crate::state::preferences::PreferenceManager;
use crate::state::ui::UiState;
use crate::util::dom::{self, DocumentSurface};
use crate::util::storage::LocalStorage;
use crate::util::viewport;

/// Preference manager wired to the browser.
pub type Preferences = PreferenceManager<LocalStorage, DocumentSurface>;

/// Root application component.
///
/// Provides shared state contexts and restores saved preferences.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = PageConfig::load();

    let mut manager = Preferences::new(LocalStorage, DocumentSurface);
    manager.load_preferences();
    let prefs = RwSignal::new(manager);
    let ui = RwSignal::new(UiState::default());

    provide_context(config);
    provide_context(prefs);
    provide_context(ui);

    let sync_scroll = move || {
        let scroll_y = viewport::scroll_y();
        let bounds = dom::section_bounds(NAV_SECTIONS.iter().map(|s| s.id));
        let active = active_section(&bounds, scroll_y, config.scroll.section_offset_px).map(str::to_owned);
        let scrolled = header_scrolled(scroll_y, config.scroll.header_scrolled_px);
        let changed = ui.with_untracked(|u| u.active_section != active || u.header_scrolled != scrolled);
        if changed {
            ui.update(|u| {
                u.active_section = active;
                u.header_scrolled = scrolled;
            });
        }
    };

    Effect::new(move || sync_scroll());
    let scroll_handle = window_event_listener(leptos::ev::scroll, move |_| sync_scroll());
    let key_handle = window_event_listener(leptos::ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            ui.update(UiState::on_escape);
        }
    });
    on_cleanup(move || {
        scroll_handle.remove();
        key_handle.remove();
    });

    view! {
        <Title text="Portfolio"/>
        <HomePage/>
    }
}
