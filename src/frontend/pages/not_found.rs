//! Fallback page for unmatched paths.

use crate::frontend::app::Route;
use dioxus::prelude::*;
use dioxus_router::components::Link;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        main {
            class: "not-found",
            h1 { "Page not found" }
            p { "Nothing lives at {path}." }
            Link { to: Route::home(), "Back to home" }
        }
    }
}
