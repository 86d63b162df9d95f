//! Testimonials carousel index and layout.
//!
//! DESIGN
//! ======
//! The index wraps at both ends instead of clamping. Resizing recomputes how
//! many cards fit but keeps the index, so it can sit past the new maximum
//! until the next `next`/`prev`.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

use serde::Deserialize;

/// Viewport width at which three cards fit.
pub const BREAKPOINT_LG: f64 = 1024.0;
/// Viewport width at which two cards fit.
pub const BREAKPOINT_MD: f64 = 640.0;

/// Viewport breakpoints controlling cards per view.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Breakpoints {
    pub lg: f64,
    pub md: f64,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self { lg: BREAKPOINT_LG, md: BREAKPOINT_MD }
    }
}

impl Breakpoints {
    pub fn cards_per_view(&self, viewport_width: f64) -> usize {
        if viewport_width >= self.lg {
            3
        } else if viewport_width >= self.md {
            2
        } else {
            1
        }
    }
}

/// Cards per view for `viewport_width` using the default breakpoints.
pub fn cards_per_view_for_width(viewport_width: f64) -> usize {
    Breakpoints::default().cards_per_view(viewport_width)
}

/// What the track should show after a state change.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarouselFrame {
    pub offset_px: f64,
    pub active_indicator: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CarouselState {
    pub current_index: usize,
    pub cards_per_view: usize,
    pub card_count: usize,
    pub track_width: f64,
    pub breakpoints: Breakpoints,
}

impl CarouselState {
    pub fn new(card_count: usize) -> Self {
        Self { current_index: 0, cards_per_view: 1, card_count, track_width: 0.0, breakpoints: Breakpoints::default() }
    }

    #[must_use]
    pub fn with_breakpoints(mut self, breakpoints: Breakpoints) -> Self {
        self.breakpoints = breakpoints;
        self
    }

    pub fn max_index(&self) -> usize {
        self.card_count.saturating_sub(self.cards_per_view)
    }

    pub fn next(&mut self) {
        if self.current_index >= self.max_index() {
            self.current_index = 0;
        } else {
            self.current_index += 1;
        }
    }

    pub fn prev(&mut self) {
        if self.current_index == 0 {
            self.current_index = self.max_index();
        } else {
            self.current_index -= 1;
        }
    }

    /// Jump to an indicator's index. Not clamped.
    pub fn go_to(&mut self, index: usize) {
        self.current_index = index;
    }

    /// Refit the track after the viewport changed size.
    pub fn on_resize(&mut self, viewport_width: f64, track_width: f64) {
        self.cards_per_view = self.breakpoints.cards_per_view(viewport_width);
        self.track_width = track_width.max(0.0);
    }

    /// Width of a single card.
    #[allow(clippy::cast_precision_loss)]
    pub fn card_width(&self) -> f64 {
        self.track_width / self.cards_per_view.max(1) as f64
    }

    /// Flex basis of one card as a percentage of the viewport.
    #[allow(clippy::cast_precision_loss)]
    pub fn card_basis_percent(&self) -> f64 {
        100.0 / self.cards_per_view.max(1) as f64
    }

    /// Indicator dots, one per card.
    pub fn indicator_count(&self) -> usize {
        self.card_count
    }

    /// Offset and active indicator for the current index; `None` when there
    /// is nothing to show.
    #[allow(clippy::cast_precision_loss)]
    pub fn render(&self) -> Option<CarouselFrame> {
        if self.card_count == 0 {
            return None;
        }
        Some(CarouselFrame {
            offset_px: self.current_index as f64 * self.card_width(),
            active_indicator: self.current_index % self.indicator_count(),
        })
    }
}
