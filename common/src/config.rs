use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{Level, debug, instrument};

// content bundled with the site
//
// the page is static, so this is compiled in rather than fetched
pub const BUNDLED_SITE: &str = include_str!("../site.toml");

// knobs for the view-state controller
//
// the defaults are the values the page has always used; site.toml may override them
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct ViewOptions {
    // scrollY strictly above this counts as scrolled
    pub scroll_threshold: f64,

    // local storage key for the theme preference
    pub storage_key: String,

    // class set on the document root while dark mode is on
    pub dark_marker: String,
}

impl Default for ViewOptions {
    fn default() -> Self {
        ViewOptions {
            scroll_threshold: 50.0,
            storage_key: String::from("theme"),
            dark_marker: String::from("dark"),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Hero {
    pub title: String,
    pub subtitle: String,
    pub action: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum SectionExtra {
    // project card grid
    Projects,
    // skill badges
    Skills,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Section {
    pub id: String,
    pub title: String,
    pub text: String,
    #[serde(default)]
    pub extra: Option<SectionExtra>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Project {
    pub name: String,
    pub description: String,
}

// static page content
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SiteConfig {
    pub brand: String,
    pub contact_email: String,
    pub nav_links: Vec<String>,
    pub hero: Hero,
    pub logos: Vec<String>,
    pub sections: Vec<Section>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub view: ViewOptions,
}

impl SiteConfig {
    #[instrument(level=Level::DEBUG, skip(doc))]
    pub fn from_toml_str(doc: &str) -> Result<Self> {
        let site: SiteConfig = toml::from_str(doc).context("failed to parse site config")?;

        debug!({sections = site.sections.len(), logos = site.logos.len()}, "parsed site config");
        Ok(site)
    }

    pub fn bundled() -> Result<Self> {
        Self::from_toml_str(BUNDLED_SITE)
    }

    // "contact" goes to email, everything else is an in-page anchor
    pub fn nav_href(&self, label: &str) -> String {
        let anchor = label.to_lowercase();

        if anchor == "contact" {
            format!("mailto:{}", self.contact_email)
        } else {
            format!("#{anchor}")
        }
    }
}
