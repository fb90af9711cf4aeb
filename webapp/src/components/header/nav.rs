use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::Route;
use crate::common::style::header::{NAV_SLOT_GAP_PX, NAV_SLOT_WIDTH_PX, UNDERLINE_WIDTH_PX};

#[derive(Clone, Debug, PartialEq)]
pub struct NavItem {
    pub label: &'static str,
    pub target: Route,
}

pub fn nav_items() -> [NavItem; 2] {
    [
        NavItem {
            label: "Home",
            target: Route::Home {},
        },
        NavItem {
            label: "TV Shows",
            target: Route::Tv {},
        },
    ]
}

// exact match only, /tv does not light up Home
pub fn active_index(current: &Route, items: &[NavItem]) -> Option<usize> {
    items.iter().position(|item| item.target == *current)
}

// left edge of the underline, centered under the slot it belongs to
pub fn underline_offset(index: usize) -> f64 {
    index as f64 * (NAV_SLOT_WIDTH_PX + NAV_SLOT_GAP_PX) + (NAV_SLOT_WIDTH_PX - UNDERLINE_WIDTH_PX) / 2.0
}

#[component]
pub fn NavItems() -> Element {
    let current: Route = use_route();
    let items = nav_items();
    let active = active_index(&current, &items);
    let offset = active.map(underline_offset);

    rsx! {
        div { class: "nav-track",
            ul { class: "nav-items",
                for (index , item) in items.iter().enumerate() {
                    li {
                        key: "{item.label}",
                        class: if active == Some(index) { "nav-item active" } else { "nav-item" },
                        Link { to: item.target.clone(), "{item.label}" }
                    }
                }
            }
            // one marker for the whole list, it slides to whichever item matches
            if let Some(offset) = offset {
                span {
                    class: "underline",
                    style: "transform: translateX({offset}px);",
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_path_marks_only_home() {
        assert_eq!(active_index(&Route::Home {}, &nav_items()), Some(0));
    }

    #[test]
    fn tv_path_marks_only_tv() {
        assert_eq!(active_index(&Route::Tv {}, &nav_items()), Some(1));
    }

    #[test]
    fn other_paths_mark_nothing() {
        let items = nav_items();

        assert_eq!(active_index(&Route::Search {}, &items), None);
        assert_eq!(
            active_index(
                &Route::NotFound {
                    segments: vec![String::from("movies")]
                },
                &items
            ),
            None
        );
    }

    #[test]
    fn underline_centers_under_slot() {
        assert_eq!(underline_offset(0), 22.5);
        assert_eq!(underline_offset(1), 122.5);
    }
}
