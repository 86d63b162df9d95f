//! Page configuration.
//!
//! Every field has a default, so a page without a config block (or with a
//! partial one) still behaves. The optional block is an inline
//! `<script id="page-config" type="application/json">` element.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::state::carousel::Breakpoints;
use crate::state::nav::{HEADER_SCROLLED_PX, SECTION_OFFSET_PX};
use crate::state::notification::{DISPLAY_MS, EXIT_MS};

/// Element id of the inline JSON config block.
pub const CONFIG_ELEMENT_ID: &str = "page-config";
pub const DEFAULT_AUTOPLAY_MS: u64 = 5000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid page config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NotificationTimings {
    pub display_ms: u64,
    pub exit_ms: u64,
}

impl Default for NotificationTimings {
    fn default() -> Self {
        Self { display_ms: DISPLAY_MS, exit_ms: EXIT_MS }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    pub section_offset_px: f64,
    pub header_scrolled_px: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self { section_offset_px: SECTION_OFFSET_PX, header_scrolled_px: HEADER_SCROLLED_PX }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub breakpoints: Breakpoints,
    pub notifications: NotificationTimings,
    pub scroll: ScrollConfig,
    /// Carousel autoplay interval; `0` disables autoplay.
    pub autoplay_ms: u64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            breakpoints: Breakpoints::default(),
            notifications: NotificationTimings::default(),
            scroll: ScrollConfig::default(),
            autoplay_ms: DEFAULT_AUTOPLAY_MS,
        }
    }
}

impl PageConfig {
    /// Parse a config block. Missing fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Load the page's config block, falling back to defaults when it is
    /// absent or malformed.
    pub fn load() -> Self {
        let Some(raw) = crate::util::dom::element_text(CONFIG_ELEMENT_ID) else {
            return Self::default();
        };
        Self::from_json(&raw).unwrap_or_else(|err| {
            log::warn!("config: {err}; using defaults");
            Self::default()
        })
    }

    pub fn autoplay_enabled(&self) -> bool {
        self.autoplay_ms > 0
    }
}
