use tracing::{error, warn};

use common::StyleMarker;

// toggles a class on <html>, which the stylesheet keys its dark variables on
#[derive(Clone, Debug)]
pub struct RootClassMarker {
    class: String,
}

impl RootClassMarker {
    pub fn new(class: &str) -> Self {
        RootClassMarker {
            class: class.to_owned(),
        }
    }
}

impl StyleMarker for RootClassMarker {
    fn apply(&self, dark: bool) {
        let Some(root) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element())
        else {
            warn!("no document root, cannot apply {} marker", self.class);
            return;
        };

        if let Err(err) = root.class_list().toggle_with_force(&self.class, dark) {
            error!("failed to set {} marker: {err:?}", self.class);
        }
    }
}
