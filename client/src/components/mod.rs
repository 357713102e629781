//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the chrome shared by the auth screens while pages supply
//! the screen-specific content.

pub mod auth_layout;
