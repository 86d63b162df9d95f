//! Preference manager: keeps appearance state, the document and storage in sync.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every visitor choice (color, font, mode) goes through one
//! `PreferenceManager`. Each operation updates the in-memory
//! [`AppearanceState`], pushes the change to an [`AppearanceSurface`] and
//! writes the matching storage key, so the three never drift apart.
//!
//! TRADE-OFFS
//! ==========
//! Storage is best-effort. Store implementations swallow failures, and a
//! stored value that no longer parses is treated as absent.

#[cfg(test)]
#[path = "preferences_test.rs"]
mod preferences_test;

use std::collections::HashMap;

use crate::state::appearance::{
    AppearanceState, ColorStyle, FontChoice, Mode, ThemeColor, default_color, find_color, resolve_color,
};
use crate::state::notification::{NoticeId, NotificationState};

pub const STORAGE_KEY_COLOR: &str = "selectedColor";
pub const STORAGE_KEY_FONT: &str = "selectedFont";
pub const STORAGE_KEY_THEME: &str = "theme";

pub const RESET_MESSAGE: &str = "Settings have been reset to defaults";

/// Durable string key-value storage.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// The visual side of appearance: whatever paints the document.
pub trait AppearanceSurface {
    fn apply_color(&mut self, style: &ColorStyle);
    fn apply_font(&mut self, font: FontChoice);
    fn apply_mode(&mut self, mode: Mode);
}

/// In-memory store for host builds and tests.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self { entries: entries.into_iter().map(|(k, v)| (k.to_owned(), v.to_owned())).collect() }
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_owned(), value.to_owned());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// Owner of the visitor's appearance preferences.
#[derive(Clone, Debug)]
pub struct PreferenceManager<S, P> {
    state: AppearanceState,
    notifications: NotificationState,
    store: S,
    surface: P,
}

impl<S: PreferenceStore, P: AppearanceSurface> PreferenceManager<S, P> {
    /// Build a manager with default state. Nothing is applied until
    /// [`Self::load_preferences`] runs.
    pub fn new(store: S, surface: P) -> Self {
        Self { state: AppearanceState::default(), notifications: NotificationState::default(), store, surface }
    }

    pub fn state(&self) -> &AppearanceState {
        &self.state
    }

    pub fn notifications(&self) -> &NotificationState {
        &self.notifications
    }

    pub fn notifications_mut(&mut self) -> &mut NotificationState {
        &mut self.notifications
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn surface(&self) -> &P {
        &self.surface
    }

    /// Apply and persist a theme color. Unknown hex values fall back to the
    /// default catalog entry.
    pub fn set_color(&mut self, hex: &str) -> &'static ThemeColor {
        if find_color(hex).is_none() {
            log::debug!("preferences: unknown color {hex:?}, using {}", default_color().hex);
        }
        let color = resolve_color(hex);
        self.apply_color(color);
        self.store.set(STORAGE_KEY_COLOR, color.hex);
        color
    }

    /// Apply and persist a font.
    pub fn set_font(&mut self, font: FontChoice) {
        self.apply_font(font);
        self.store.set(STORAGE_KEY_FONT, font.id());
    }

    /// Parse a font id from a control and apply it. Unknown ids leave the
    /// current font in place.
    pub fn set_font_id(&mut self, id: &str) -> Option<FontChoice> {
        match id.parse::<FontChoice>() {
            Ok(font) => {
                self.set_font(font);
                Some(font)
            }
            Err(err) => {
                log::warn!("preferences: {err}");
                None
            }
        }
    }

    /// Apply and persist a display mode.
    pub fn set_mode(&mut self, mode: Mode) {
        self.apply_mode(mode);
        self.store.set(STORAGE_KEY_THEME, mode.id());
    }

    /// Flip between dark and light.
    pub fn toggle_mode(&mut self) -> Mode {
        let next = self.state.mode.toggled();
        self.set_mode(next);
        next
    }

    /// Restore saved preferences at startup.
    ///
    /// The color is always applied (saved or default) so a first visit and
    /// a later one end in the same visual state. Empty keys stay empty; a
    /// stored value that fails to resolve is overwritten with the fallback
    /// actually shown.
    pub fn load_preferences(&mut self) {
        let stored_font = self.store.get(STORAGE_KEY_FONT);
        let font = stored_font.as_deref().and_then(|raw| raw.parse::<FontChoice>().ok()).unwrap_or_default();
        self.apply_font(font);
        self.repair_stored(STORAGE_KEY_FONT, stored_font.as_deref(), font.id());

        let stored_color = self.store.get(STORAGE_KEY_COLOR);
        let color = stored_color.as_deref().map_or_else(default_color, resolve_color);
        self.apply_color(color);
        self.repair_stored(STORAGE_KEY_COLOR, stored_color.as_deref(), color.hex);

        let stored_mode = self.store.get(STORAGE_KEY_THEME);
        let mode = match stored_mode.as_deref() {
            Some("dark") => Mode::Dark,
            _ => Mode::Light,
        };
        self.apply_mode(mode);
        self.repair_stored(STORAGE_KEY_THEME, stored_mode.as_deref(), mode.id());

        log::debug!("preferences: loaded font={font} color={} mode={mode}", color.hex);
    }

    /// Overwrite a stored value that did not resolve to what is displayed.
    fn repair_stored(&mut self, key: &str, stored: Option<&str>, applied: &str) {
        if let Some(raw) = stored {
            if raw != applied {
                log::warn!("preferences: stored {key}={raw:?} is invalid, saving {applied:?}");
                self.store.set(key, applied);
            }
        }
    }

    /// Return font and color to defaults and forget them in storage.
    ///
    /// The mode and its `theme` key are left as they are.
    pub fn reset(&mut self) -> NoticeId {
        self.apply_font(FontChoice::default());
        self.apply_color(default_color());
        self.store.remove(STORAGE_KEY_FONT);
        self.store.remove(STORAGE_KEY_COLOR);
        self.notify(RESET_MESSAGE)
    }

    /// Show a transient notification, replacing any current one.
    pub fn notify(&mut self, message: impl Into<String>) -> NoticeId {
        self.notifications.show(message)
    }

    fn apply_color(&mut self, color: &'static ThemeColor) {
        self.surface.apply_color(&ColorStyle::for_color(color));
        self.state.color = color;
    }

    fn apply_font(&mut self, font: FontChoice) {
        self.surface.apply_font(font);
        self.state.font = font;
    }

    fn apply_mode(&mut self, mode: Mode) {
        self.surface.apply_mode(mode);
        self.state.mode = mode;
    }
}
