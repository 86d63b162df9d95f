//! Settings sidebar: theme color grid, font options, mode toggle and reset.
//!
//! SYSTEM CONTEXT
//! ==============
//! Controls here are the only writers of visitor preferences. Each click is
//! forwarded to the shared `PreferenceManager`; highlight state is derived
//! from the manager's `AppearanceState`, so exactly one swatch and one font
//! option are ever marked.

use leptos::prelude::*;

use crate::app::Preferences;
use crate::components::notification::notify_after;
use crate::state::appearance::{FontChoice, THEME_COLORS, highlight_selected_color};
use crate::state::ui::UiState;

fn bool_attr(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

/// Floating gear button that opens the settings sidebar.
#[component]
pub fn SettingsToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <button
            class="settings-toggle bg-primary"
            title="Customize theme"
            aria-controls="settings-sidebar"
            aria-expanded=move || bool_attr(ui.with(|u| u.sidebar_open))
            on:click=move |_| ui.update(UiState::toggle_sidebar)
        >
            "⚙"
        </button>
    }
}

/// Sidebar panel with its backdrop overlay.
#[component]
pub fn SettingsSidebar() -> impl IntoView {
    let prefs = expect_context::<RwSignal<Preferences>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let is_open = move || ui.with(|u| u.sidebar_open);
    let selected_swatch = move || prefs.with(|p| highlight_selected_color(p.state().color.hex));
    let active_font = move || prefs.with(|p| p.state().font);
    let is_dark = move || prefs.with(|p| p.state().mode.is_dark());

    let on_reset = move |_| notify_after(prefs, Preferences::reset);

    let swatches = THEME_COLORS
        .iter()
        .enumerate()
        .map(|(index, color)| {
            let selected = move || selected_swatch() == Some(index);
            view! {
                <button
                    class="color-swatch"
                    class:selected=selected
                    style:background-color=color.hex
                    title=color.name
                    aria-pressed=move || bool_attr(selected())
                    on:click=move |_| {
                        prefs.update(|p| {
                            p.set_color(color.hex);
                        });
                    }
                ></button>
            }
        })
        .collect_view();

    let font_options = FontChoice::ALL
        .into_iter()
        .map(|font| {
            let active = move || active_font() == font;
            view! {
                <button
                    class=format!("font-option {}", font.class())
                    class:active=active
                    data-font=font.id()
                    aria-pressed=move || bool_attr(active())
                    on:click=move |_| prefs.update(|p| p.set_font(font))
                >
                    <span class="font-option__check">{move || if active() { "●" } else { "○" }}</span>
                    {font.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <div
            class="settings-overlay"
            class=("is-open", is_open)
            on:click=move |_| ui.update(UiState::close_sidebar)
        ></div>
        <aside id="settings-sidebar" class="settings-sidebar" class=("is-open", is_open) aria-hidden=move || bool_attr(!is_open())>
            <header class="settings-sidebar__header">
                <h2>"Customize"</h2>
                <button
                    class="settings-sidebar__close"
                    title="Close settings"
                    on:click=move |_| ui.update(UiState::close_sidebar)
                >
                    "×"
                </button>
            </header>

            <section class="settings-sidebar__section">
                <h3>"Theme color"</h3>
                <div class="color-grid">{swatches}</div>
            </section>

            <section class="settings-sidebar__section">
                <h3>"Font"</h3>
                <div class="font-options">{font_options}</div>
            </section>

            <section class="settings-sidebar__section">
                <h3>"Mode"</h3>
                <button
                    class="mode-toggle"
                    aria-pressed=move || bool_attr(is_dark())
                    on:click=move |_| {
                        prefs.update(|p| {
                            p.toggle_mode();
                        });
                    }
                >
                    {move || if is_dark() { "☀ Light mode" } else { "☾ Dark mode" }}
                </button>
            </section>

            <button class="settings-sidebar__reset border-primary text-primary" on:click=on_reset>
                "Reset to defaults"
            </button>
        </aside>
    }
}
