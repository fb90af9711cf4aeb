use dioxus::prelude::*;

#[component]
pub fn Tv() -> Element {
    rsx! {
        main { class: "page-content",
            h2 { class: "page-title", "TV Shows" }
            div { class: "listing" }
        }
    }
}
