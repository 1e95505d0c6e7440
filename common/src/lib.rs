// view-state core for the studio landing page
//
// everything here is platform-independent: the browser (local storage, the document
// root, the scroll signal) is reached only through the ports in theme.rs, which the
// webapp implements and the tests fake
pub mod config;
pub mod theme;
pub mod view;

pub use config::{SiteConfig, ViewOptions};
pub use theme::{StyleMarker, ThemePreference, ThemeStore};
pub use view::{Subscription, ViewState, ViewStateController};
