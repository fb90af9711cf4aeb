use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        main { class: "page-content",
            h2 { class: "page-title", "Movies" }
            div { class: "listing" }
        }
    }
}
