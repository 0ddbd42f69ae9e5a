//! Utility helpers shared across UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from component logic
//! to improve reuse and testability: `dom` wraps `web_sys`/`js_sys`, `format`
//! is pure string shaping.

pub mod dom;
pub mod format;
