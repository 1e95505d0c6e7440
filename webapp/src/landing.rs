use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_router::prelude::*;

use common::{
    SiteConfig,
    config::{Hero, Section, SectionExtra},
};

use crate::{Route, common::reveal::use_reveal};

#[component]
fn HeroSection(hero: Hero) -> Element {
    rsx! {
        section { id: "home", class: "hero",
            h2 { class: "hero-title", "{hero.title}" }
            p { class: "hero-subtitle", "{hero.subtitle}" }
            a { class: "cta", href: "#services", "{hero.action}" }
        }
    }
}

// one pass of the track is 200% of the strip width, so the loop restarts off-screen
#[component]
fn LogoStrip(logos: Vec<String>) -> Element {
    rsx! {
        div { class: "logo-strip",
            div { class: "logo-track",
                for (idx, src) in logos.iter().enumerate() {
                    img { key: "{idx}", src: "{src}", alt: "logo-{idx}" }
                }
            }
        }
    }
}

#[component]
fn ProjectGrid() -> Element {
    let site = use_context::<Rc<SiteConfig>>();

    rsx! {
        div { class: "project-grid",
            for project in site.projects.iter() {
                div { key: "{project.name}", class: "project-card",
                    h4 { "{project.name}" }
                    p { "{project.description}" }
                }
            }
        }
    }
}

#[component]
fn SkillRow() -> Element {
    let site = use_context::<Rc<SiteConfig>>();

    // badges come in one after another
    let badges = site
        .skills
        .iter()
        .enumerate()
        .map(|(idx, skill)| (skill.clone(), idx as f32 * 0.2))
        .collect::<Vec<_>>();

    rsx! {
        div { class: "skill-row",
            for (skill, delay) in badges {
                div {
                    key: "{skill}",
                    class: "skill-badge reveal",
                    style: "--reveal-delay: {delay}s",
                    "{skill}"
                }
            }
        }
    }
}

#[component]
fn ContentSection(section: Section) -> Element {
    rsx! {
        section { id: "{section.id}", class: "content-section",
            h3 { class: "section-title reveal", "{section.title}" }
            p { class: "section-text reveal", "{section.text}" }
            {
                match section.extra {
                    Some(SectionExtra::Projects) => rsx! {
                        ProjectGrid {}
                    },
                    Some(SectionExtra::Skills) => rsx! {
                        SkillRow {}
                    },
                    None => rsx! {},
                }
            }
        }
    }
}

#[component]
pub fn Landing() -> Element {
    let site = use_context::<Rc<SiteConfig>>();
    use_reveal();

    rsx! {
        HeroSection { hero: site.hero.clone() }
        LogoStrip { logos: site.logos.clone() }
        for section in site.sections.iter() {
            ContentSection { key: "{section.id}", section: section.clone() }
        }
        footer { class: "site-footer",
            p { "© {site.brand}" }
        }
    }
}

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        section { class: "not-found",
            h2 { class: "section-title", "Nothing at /{path}" }
            Link { to: Route::Landing {}, "Back to the home page" }
        }
    }
}
