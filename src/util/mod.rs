//! Utility helpers shared across page modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from component and
//! state logic to improve reuse and testability.

pub mod color;
pub mod dom;
pub mod storage;
pub mod viewport;
