//! Client-side page state.
//!
//! DESIGN
//! ======
//! State is split by concern (`preferences`, `carousel`, `ui`, etc.) so
//! components can depend on small focused models that test without a browser.

pub mod appearance;
pub mod carousel;
pub mod nav;
pub mod notification;
pub mod portfolio;
pub mod preferences;
pub mod ui;
