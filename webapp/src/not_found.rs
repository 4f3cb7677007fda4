use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div { class: "container not-found",
            h1 { class: "hero-title", "404" }
            p { style: "margin-bottom: var(--space-6);", "Nothing is flying at /{path}." }
            Link { to: Route::Home {}, class: "btn btn-primary", "Back to home" }
        }
    }
}
