//! Document writes for appearance and navigation.
//!
//! Applies the theme stylesheet and classes to `<head>`, `<body>` and
//! `<html>`, and reads section positions for scroll-spy. Requires a browser
//! environment; every function is a no-op (or returns nothing) otherwise.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

use crate::state::appearance::{ColorStyle, FontChoice, Mode};
#[cfg(feature = "csr")]
use crate::state::appearance::all_theme_classes;
use crate::state::nav::SectionBounds;
use crate::state::preferences::AppearanceSurface;

/// Id of the single generated theme stylesheet.
pub const THEME_STYLE_ID: &str = "theme-color-styles";
/// Root-level class marking dark mode.
pub const DARK_CLASS: &str = "dark";

#[cfg(feature = "csr")]
fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

/// `AppearanceSurface` over the live document.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentSurface;

impl AppearanceSurface for DocumentSurface {
    fn apply_color(&mut self, style: &ColorStyle) {
        #[cfg(feature = "csr")]
        {
            let Some(doc) = document() else {
                return;
            };
            write_theme_stylesheet(&doc, &style.css);
            if let Some(body) = doc.body() {
                let class_list = body.class_list();
                for class in all_theme_classes() {
                    let _ = class_list.remove_1(class);
                }
                let _ = class_list.add_1(style.theme_class);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = style;
        }
    }

    fn apply_font(&mut self, font: FontChoice) {
        #[cfg(feature = "csr")]
        {
            if let Some(body) = document().and_then(|d| d.body()) {
                let class_list = body.class_list();
                for f in FontChoice::ALL {
                    let _ = class_list.remove_1(f.class());
                }
                let _ = class_list.add_1(font.class());
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = font;
        }
    }

    fn apply_mode(&mut self, mode: Mode) {
        #[cfg(feature = "csr")]
        {
            if let Some(el) = document().and_then(|d| d.document_element()) {
                let _ = el.class_list().toggle_with_force(DARK_CLASS, mode.is_dark());
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = mode;
        }
    }
}

/// Replace the contents of the theme `<style>` element, creating it once.
#[cfg(feature = "csr")]
fn write_theme_stylesheet(doc: &web_sys::Document, css: &str) {
    if let Some(existing) = doc.get_element_by_id(THEME_STYLE_ID) {
        existing.set_text_content(Some(css));
        return;
    }
    let Ok(style) = doc.create_element("style") else {
        log::warn!("dom: could not create theme stylesheet");
        return;
    };
    style.set_id(THEME_STYLE_ID);
    style.set_text_content(Some(css));
    match doc.head() {
        Some(head) => {
            let _ = head.append_child(&style);
        }
        None => log::warn!("dom: document has no <head>"),
    }
}

/// Text content of the element with `id`, if present.
pub fn element_text(id: &str) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        document()?.get_element_by_id(id)?.text_content()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
        None
    }
}

/// Document-relative tops of the sections named by `ids`, in the given order.
/// Ids without a matching element are skipped.
pub fn section_bounds<'a>(ids: impl IntoIterator<Item = &'a str>) -> Vec<SectionBounds> {
    #[cfg(feature = "csr")]
    {
        let Some(doc) = document() else {
            return Vec::new();
        };
        let scroll_y = crate::util::viewport::scroll_y();
        ids.into_iter()
            .filter_map(|id| {
                let el = doc.get_element_by_id(id)?;
                let top = el.get_bounding_client_rect().top() + scroll_y;
                Some(SectionBounds { id: id.to_owned(), top })
            })
            .collect()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = ids.into_iter();
        Vec::new()
    }
}

/// Scroll the window so section `id` is at the top. Unknown ids are logged.
pub fn scroll_to_section(id: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(el) = document().and_then(|d| d.get_element_by_id(id)) else {
            log::warn!("dom: no section with id {id:?}");
            return;
        };
        let top = el.get_bounding_client_rect().top() + crate::util::viewport::scroll_y();
        window.scroll_to_with_x_and_y(0.0, top);
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
    }
}
