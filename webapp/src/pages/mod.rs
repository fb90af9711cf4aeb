mod home;
mod tv;

pub use home::Home;
pub use tv::Tv;

use dioxus::prelude::*;

// /search is reserved for the search results page
#[component]
pub fn Search() -> Element {
    rsx! {}
}

// anything the route table does not know renders nothing
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    tracing::debug!(path = %segments.join("/"), "no page for path");
    rsx! {}
}
