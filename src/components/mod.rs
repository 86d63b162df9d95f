//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and interactive sections while reading and
//! writing shared state from Leptos context providers.

pub mod navbar;
pub mod notification;
pub mod portfolio_grid;
pub mod settings_sidebar;
pub mod testimonials;
