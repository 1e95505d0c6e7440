use dioxus::prelude::*;

use common::{ViewOptions, ViewState, ViewStateController};

use crate::common::{marker::RootClassMarker, scroll::use_window_scroll, storage::LocalThemeStore};

type BrowserController = ViewStateController<LocalThemeStore, RootClassMarker>;

// shared access to the page's view-state controller
//
// the controller lives in a non-reactive CopyValue; renders read the Signal, which the
// controller keeps current through its observer
#[derive(Clone, Copy)]
pub struct ViewHandle {
    controller: CopyValue<BrowserController>,
    state: Signal<ViewState>,
}

impl ViewHandle {
    pub fn state(&self) -> ViewState {
        (self.state)()
    }

    pub fn toggle_menu(&self) {
        self.controller.write_unchecked().toggle_menu();
    }

    pub fn close_menu(&self) {
        self.controller.write_unchecked().close_menu();
    }

    pub fn toggle_dark_mode(&self) {
        self.controller.write_unchecked().toggle_dark_mode();
    }

    fn on_scroll(&self, offset: f64) {
        self.controller.write_unchecked().on_scroll(offset);
    }
}

// build the controller, load the theme, start tracking scroll, and share the handle
// with every component below the caller
pub fn use_view_provider(options: ViewOptions) -> ViewHandle {
    let handle = use_hook(move || {
        let marker = RootClassMarker::new(&options.dark_marker);
        let mut controller = ViewStateController::new(LocalThemeStore, marker, options);
        controller.initialize();

        let mut state = Signal::new(controller.state());
        controller.subscribe(move |next| state.set(*next));

        ViewHandle {
            controller: CopyValue::new(controller),
            state,
        }
    });

    use_window_scroll(move |offset| handle.on_scroll(offset));
    use_context_provider(|| handle)
}

pub fn use_view() -> ViewHandle {
    use_context::<ViewHandle>()
}
