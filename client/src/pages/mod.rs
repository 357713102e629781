//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page renders only its own content; the surrounding shell comes from
//! the parent route (`components::auth_layout::AuthFrame`).

pub mod login;
pub mod plans;
pub mod signup;
