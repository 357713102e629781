//! Centered shell for the authentication screens.
//!
//! DESIGN
//! ======
//! The shell has two nested regions. The outer region fills the viewport and
//! centers its child; the inner region carries horizontal padding and a
//! maximum width picked from the active route. Only the plan selection screen
//! gets the wide container; every other path, including unknown or empty
//! ones, falls back to the standard width.
//!
//! The width rule is a pure function of the path (`LayoutVariant::from_path`).
//! [`AuthShell`] takes the path as an injected read-only signal so it can be
//! rendered without a router; [`AuthLayout`] wires that signal to the router
//! location.

use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_location;

use crate::util::class_names::class_names;

#[cfg(test)]
#[path = "auth_layout_test.rs"]
mod auth_layout_test;

/// Route of the plan selection screen, the only screen rendered wide.
pub const WIDE_ROUTE: &str = "/plans";

/// Outer region: full viewport height, centered on both axes, background, vertical padding.
pub const SHELL_CLASS: &str = "flex min-h-screen items-center justify-center bg-auth-gradient py-12";

/// Inner region classes applied for every variant.
pub const INNER_BASE_CLASS: &str = "w-full px-4";

/// Inner region width on the plan selection screen.
pub const WIDE_WIDTH_CLASS: &str = "max-w-5xl";

/// Inner region width on every other screen.
pub const STANDARD_WIDTH_CLASS: &str = "max-w-md";

/// Container width mode for the auth shell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LayoutVariant {
    Wide,
    #[default]
    Standard,
}

impl LayoutVariant {
    /// Pick the variant for a route path. Exact match only: `/plans/extra`
    /// and `/plans/` are standard.
    pub fn from_path(path: &str) -> Self {
        if path == WIDE_ROUTE { Self::Wide } else { Self::Standard }
    }

    pub fn width_class(self) -> &'static str {
        match self {
            Self::Wide => WIDE_WIDTH_CLASS,
            Self::Standard => STANDARD_WIDTH_CLASS,
        }
    }
}

/// Full class string for the inner region of the given variant.
pub fn inner_class(variant: LayoutVariant) -> String {
    class_names([(INNER_BASE_CLASS, true), (variant.width_class(), true)])
}

/// Auth shell driven by an explicit route path signal.
///
/// The inner class is recomputed whenever `path` changes; `children` are
/// rendered once inside the inner region.
#[component]
pub fn AuthShell(#[prop(into)] path: Signal<String>, children: Children) -> impl IntoView {
    let inner = move || path.with(|p| inner_class(LayoutVariant::from_path(p)));

    view! {
        <div class=SHELL_CLASS>
            <div class=inner>{children()}</div>
        </div>
    }
}

/// Auth shell that follows the router's current path.
#[component]
pub fn AuthLayout(children: Children) -> impl IntoView {
    let location = use_location();

    view! { <AuthShell path=location.pathname>{children()}</AuthShell> }
}

/// Parent-route view: the auth shell around the matched child screen.
#[component]
pub fn AuthFrame() -> impl IntoView {
    view! {
        <AuthLayout>
            <Outlet/>
        </AuthLayout>
    }
}
