use dioxus::prelude::*;
use tracing::debug;

use crate::Route;

/// Catch-all for unknown paths. Renders nothing and replaces the history
/// entry with [`Route::redirect`]'s target.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    let route = Route::NotFound { segments };

    use_effect(move || {
        if let Some(target) = route.redirect() {
            debug!(from = %route, to = %target, "redirecting unknown route");
            nav.replace(target);
        }
    });

    rsx! {}
}
