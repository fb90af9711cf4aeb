#![allow(non_snake_case)]
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::error;

mod animation;
mod common;
mod config;

mod components;
use components::header::Header;

mod pages;
use pages::{Home, NotFound, Search, Tv};

use config::{AppConfig, Theme};

fn main() {
    let config = AppConfig::bundled().expect("failed to load config");
    let level = config.level().expect("failed to read log level");
    dioxus_logger::init(level).expect("failed to init logger");

    if let Err(err) = common::mount::check_mount_anchor(&config.mount_id) {
        error!("{err:#}");
        panic!("cannot start without a mount anchor: {err}");
    }

    LaunchBuilder::web()
        .with_cfg(dioxus::web::Config::new().rootname(config.mount_id.clone()))
        .with_context(config.theme)
        .launch(App);
}

#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/tv")]
        Tv {},
        #[route("/search")]
        Search {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

// the theme is provided once at launch and handed down explicitly from here
#[component]
pub fn App() -> Element {
    let theme = use_context::<Theme>();
    let css = use_hook(|| common::style::global_styles(&theme));

    rsx! {
        style { "{css}" }
        Router::<Route> { config: RouterConfig::default }
    }
}

#[component]
fn Shell() -> Element {
    let theme = use_context::<Theme>();

    rsx! {
        Header { theme }
        Outlet::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(path: &str) -> Route {
        match path.parse::<Route>() {
            Ok(route) => route,
            Err(err) => panic!("{path} did not parse: {err}"),
        }
    }

    #[test]
    fn root_dispatches_to_home() {
        assert_eq!(route("/"), Route::Home {});
    }

    #[test]
    fn tv_dispatches_to_tv() {
        assert_eq!(route("/tv"), Route::Tv {});
    }

    #[test]
    fn search_is_reserved() {
        assert_eq!(route("/search"), Route::Search {});
    }

    #[test]
    fn unknown_paths_fall_through_to_empty_page() {
        assert_eq!(
            route("/movies/42"),
            Route::NotFound {
                segments: vec![String::from("movies"), String::from("42")]
            }
        );
    }

    #[test]
    fn routes_render_back_to_their_paths() {
        assert_eq!(Route::Home {}.to_string(), "/");
        assert_eq!(Route::Tv {}.to_string(), "/tv");
    }
}
