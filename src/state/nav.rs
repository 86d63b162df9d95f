//! Navigation scroll-spy.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Distance above a section's top at which its link becomes active.
pub const SECTION_OFFSET_PX: f64 = 100.0;
/// Scroll depth after which the header switches to its compact style.
pub const HEADER_SCROLLED_PX: f64 = 50.0;

/// A page section's document position.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
}

/// Extract the target section id from an in-page link.
///
/// `#about` yields `about`; anything else is not an in-page link.
pub fn section_id_from_href(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() || id.contains(char::is_whitespace) {
        return None;
    }
    Some(id)
}

/// The section whose link should be highlighted at `scroll_y`.
///
/// Sections are expected in document order.
pub fn active_section(sections: &[SectionBounds], scroll_y: f64, offset: f64) -> Option<&str> {
    sections.iter().rev().find(|s| scroll_y >= s.top - offset).map(|s| s.id.as_str())
}

pub fn header_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}
