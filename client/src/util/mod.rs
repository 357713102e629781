//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules hold pure helpers so page and component logic stays easy
//! to test without a browser.

pub mod class_names;
