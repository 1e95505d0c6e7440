#![allow(non_snake_case)]
use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::Level;

use ::common::SiteConfig;

mod common;

mod components;
use components::navigation::NavBar;

mod landing;
use landing::{Landing, PageNotFound};

mod state;

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

// the page is a single route; section links are in-page anchors rather than routes
#[derive(Clone, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[layout(NavBar)]
        #[route("/")]
        Landing {},
        #[route("/:..segments")]
        PageNotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    // site.toml is compiled in and covered by the config tests
    let site = use_context_provider(|| {
        Rc::new(SiteConfig::bundled().expect("failed to parse bundled site config"))
    });
    let dark_styles = common::style::dark_styles(&site.view.dark_marker);

    rsx! {
        style { "{common::style::MODERN_STYLES}" }
        style { "{dark_styles}" }
        Router::<Route> { config: RouterConfig::default }
    }
}
