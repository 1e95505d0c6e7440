use std::{cell::RefCell, rc::Rc};

use dioxus::prelude::*;
use gloo_events::EventListener;
use tracing::{debug, warn};

type Handler = Rc<RefCell<Box<dyn FnMut(f64)>>>;

// owns the scroll handler for as long as the page is mounted
//
// the dom listener only holds a weak reference to the handler, so once the guard is
// dropped an event that is already queued finds nothing to call
pub struct ScrollGuard {
    handler: Handler,
    listener: Option<EventListener>,
}

impl ScrollGuard {
    // a guard with no dom listener; events arrive only through dispatcher()
    pub fn detached(on_scroll: impl FnMut(f64) + 'static) -> Self {
        let handler: Box<dyn FnMut(f64)> = Box::new(on_scroll);

        ScrollGuard {
            handler: Rc::new(RefCell::new(handler)),
            listener: None,
        }
    }

    pub fn attach(on_scroll: impl FnMut(f64) + 'static) -> Self {
        let mut guard = Self::detached(on_scroll);

        let Some(window) = web_sys::window() else {
            warn!("no window, scroll tracking disabled");
            return guard;
        };

        let target = window.clone();
        let mut dispatch = guard.dispatcher();
        guard.listener = Some(EventListener::new(&window, "scroll", move |_| {
            match target.scroll_y() {
                Ok(offset) => dispatch(offset),
                Err(err) => warn!("failed to read scroll offset: {err:?}"),
            }
        }));

        debug!("attached scroll listener");
        guard
    }

    pub fn is_attached(&self) -> bool {
        self.listener.is_some()
    }

    // forwards offsets to the handler while the guard is alive, and is a no-op after
    pub fn dispatcher(&self) -> impl FnMut(f64) + 'static {
        let handler = Rc::downgrade(&self.handler);

        move |offset| {
            if let Some(handler) = handler.upgrade() {
                let mut handler = handler.borrow_mut();
                (*handler)(offset);
            }
        }
    }
}

impl Drop for ScrollGuard {
    fn drop(&mut self) {
        if self.listener.take().is_some() {
            debug!("detached scroll listener");
        }
    }
}

// call on_scroll with window.scrollY for every scroll event while the calling component
// is mounted
pub fn use_window_scroll(on_scroll: impl FnMut(f64) + 'static) {
    let guard = use_hook(move || Rc::new(RefCell::new(Some(ScrollGuard::attach(on_scroll)))));

    use_drop(move || {
        guard.borrow_mut().take();
    });
}
