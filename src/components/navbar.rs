//! Fixed header with scroll-spy navigation and the mobile menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! The active link and the compact header style come from `UiState`, which
//! the app-level scroll listener keeps current. Clicking a link scrolls to
//! its section and closes the mobile menu.

use leptos::prelude::*;

use crate::content::NAV_SECTIONS;
use crate::state::nav::section_id_from_href;
use crate::state::ui::UiState;
use crate::util::dom;

/// Top navigation bar.
#[component]
pub fn Navbar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let menu_open = move || ui.with(|u| u.mobile_menu_open);

    let links = NAV_SECTIONS
        .iter()
        .map(|section| {
            let href = section.href();
            let is_active = move || ui.with(|u| u.is_active_section(section.id));
            let target = href.clone();
            view! {
                <li>
                    <a
                        class="nav-link hover:text-primary"
                        class:active=is_active
                        href=href
                        aria-current=move || is_active().then_some("page")
                        on:click=move |ev| {
                            let Some(id) = section_id_from_href(&target) else {
                                log::debug!("nav: ignoring link {target:?}");
                                return;
                            };
                            ev.prevent_default();
                            dom::scroll_to_section(id);
                            ui.update(|u| u.on_nav_link(id));
                        }
                    >
                        {section.label}
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <header class="site-header" class=("is-scrolled", move || ui.with(|u| u.header_scrolled))>
            <nav class="site-nav">
                <a href="#home" class="site-nav__brand text-primary">"Portfolio"</a>
                <button
                    class="site-nav__menu-toggle"
                    aria-controls="site-nav-links"
                    aria-expanded=move || if menu_open() { "true" } else { "false" }
                    on:click=move |_| ui.update(UiState::toggle_mobile_menu)
                >
                    "☰"
                </button>
                <ul id="site-nav-links" class="site-nav__links" class=("is-open", menu_open)>
                    {links}
                </ul>
            </nav>
        </header>
    }
}
