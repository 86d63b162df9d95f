//! Page modules.
//!
//! ARCHITECTURE
//! ============
//! The site is a single page; it owns section layout and delegates the
//! interactive parts to `components`.

pub mod home;
