use dioxus::prelude::*;

mod nav;
mod state;

use nav::NavItems;
use state::{NavBackground, NavState, SearchState, SearchToggle};

use crate::animation::use_motion_value;
use crate::common::scroll::use_scroll_progress;
use crate::common::style::header_styles;
use crate::components::logo::Logo;
use crate::config::Theme;

const SEARCH_ICON_PATH: &str = "M8 4a4 4 0 100 8 4 4 0 000-8zM2 8a6 6 0 1110.89 3.476l4.817 4.817a1 1 0 01-1.414 1.414l-4.816-4.816A6 6 0 012 8z";

#[derive(Clone, PartialEq, Props)]
pub struct HeaderProps {
    theme: Theme,
}

#[component]
pub fn Header(props: HeaderProps) -> Element {
    let css = use_hook(|| header_styles(&props.theme));

    let scroll = use_scroll_progress();
    let mut nav_background = use_signal(NavBackground::default);
    let mut background = use_motion_value(NavState::default().background_alpha());

    let mut search_toggle = use_signal(SearchToggle::default);
    let mut icon_x = use_motion_value(SearchState::default().icon_offset());
    let mut field_scale = use_motion_value(SearchState::default().field_scale());

    use_effect(move || {
        let progress = scroll();
        nav_background.write().observe(progress, &mut background);
    });

    let toggle_search = move |_| {
        search_toggle.write().toggle(&mut icon_x, &mut field_scale);
    };

    let alpha = background.get();
    let offset = icon_x.get();
    let scale = field_scale.get();
    let scrolled = nav_background.read().state() == NavState::Scrolled;
    let open = search_toggle.read().state().is_open();

    rsx! {
        style { "{css}" }
        nav {
            class: if scrolled { "site-header scrolled" } else { "site-header" },
            style: "background-color: rgba(0, 0, 0, {alpha});",
            div { class: "header-col",
                Logo {}
                NavItems {}
            }
            div { class: "header-col",
                span { class: "search",
                    svg {
                        onclick: toggle_search,
                        "aria-expanded": "{open}",
                        style: "transform: translateX({offset}px);",
                        fill: "currentColor",
                        view_box: "0 0 20 20",
                        path {
                            fill_rule: "evenodd",
                            clip_rule: "evenodd",
                            d: SEARCH_ICON_PATH,
                        }
                    }
                    input {
                        class: "search-input",
                        r#type: "text",
                        style: "transform: scaleX({scale});",
                        placeholder: "Search for movie or tv show...",
                    }
                }
            }
        }
    }
}
