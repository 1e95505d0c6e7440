use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_router::prelude::*;

use common::SiteConfig;

use crate::{
    Route,
    state::{use_view, use_view_provider},
};

#[component]
fn ThemeToggle() -> Element {
    let view = use_view();
    let dark = view.state().dark_mode;

    rsx! {
        button {
            class: "icon-button theme-toggle",
            title: if dark { "Switch to light mode" } else { "Switch to dark mode" },
            onclick: move |_| view.toggle_dark_mode(),
            if dark {
                "☀"
            } else {
                "☾"
            }
        }
    }
}

#[component]
fn DesktopLinks() -> Element {
    let site = use_context::<Rc<SiteConfig>>();

    rsx! {
        div { class: "nav-desktop",
            ul { class: "nav-links",
                for link in site.nav_links.iter() {
                    li { key: "{link}", class: "nav-link",
                        a { href: site.nav_href(link), "{link}" }
                        span { class: "nav-underline" }
                    }
                }
            }
            ThemeToggle {}
        }
    }
}

// only mounted while open; the stylesheet hides it above the breakpoint
#[component]
fn MobileMenu() -> Element {
    let site = use_context::<Rc<SiteConfig>>();
    let view = use_view();

    rsx! {
        ul { class: "nav-mobile",
            for link in site.nav_links.iter() {
                li { key: "{link}", onclick: move |_| view.close_menu(),
                    a { href: site.nav_href(link), "{link}" }
                }
            }
            li { ThemeToggle {} }
        }
    }
}

#[component]
fn NavBarInner() -> Element {
    let site = use_context::<Rc<SiteConfig>>();
    let view = use_view();
    let state = view.state();

    rsx! {
        nav { class: if state.scrolled { "site-nav scrolled" } else { "site-nav" },
            div { class: "nav-container",
                h1 { class: "brand", "{site.brand}" }
                DesktopLinks {}
                button {
                    class: "icon-button menu-toggle",
                    title: if state.menu_open { "Close menu" } else { "Open menu" },
                    onclick: move |_| view.toggle_menu(),
                    if state.menu_open {
                        "✕"
                    } else {
                        "☰"
                    }
                }
            }
            if state.menu_open {
                MobileMenu {}
            }
        }
    }
}

#[component]
pub fn NavBar() -> Element {
    let site = use_context::<Rc<SiteConfig>>();
    use_view_provider(site.view.clone());

    rsx! {
        div { class: "page",
            NavBarInner {}
            Outlet::<Route> {}
        }
    }
}
