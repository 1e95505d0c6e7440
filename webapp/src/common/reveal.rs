use std::{cell::RefCell, rc::Rc};

use dioxus::prelude::*;
use tracing::{debug, warn};
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

pub const REVEAL_CLASS: &str = "reveal";
pub const VISIBLE_CLASS: &str = "visible";

// fraction of an element that has to be on screen before it is revealed
const THRESHOLD: f64 = 0.1;

type EntriesCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

// watches every .reveal element on the page and marks it visible the first time it
// intersects the viewport; revealed elements are unobserved, so the transition
// never runs backwards
pub struct RevealGuard {
    observer: IntersectionObserver,
    _callback: EntriesCallback,
}

impl RevealGuard {
    pub fn observe_page() -> Option<Self> {
        let Some(document) = web_sys::window().and_then(|window| window.document()) else {
            warn!("no document, section reveal disabled");
            return None;
        };

        let callback: EntriesCallback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if entry.is_intersecting() {
                        let target = entry.target();
                        mark_visible(&target);
                        observer.unobserve(&target);
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(THRESHOLD));
        init.set_root_margin("0px 0px -50px 0px");

        let observer = match IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &init,
        ) {
            Ok(observer) => observer,
            Err(err) => {
                // without an observer nothing would ever be shown
                warn!("failed to create intersection observer, revealing all: {err:?}");
                for element in pending(&document) {
                    mark_visible(&element);
                }
                return None;
            }
        };

        let elements = pending(&document);
        debug!("observing {} reveal elements", elements.len());
        for element in elements.iter() {
            observer.observe(element);
        }

        Some(RevealGuard {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealGuard {
    fn drop(&mut self) {
        self.observer.disconnect();
        debug!("disconnected reveal observer");
    }
}

fn pending(document: &Document) -> Vec<Element> {
    let selector = format!(".{REVEAL_CLASS}:not(.{VISIBLE_CLASS})");

    let Ok(nodes) = document.query_selector_all(&selector) else {
        warn!("bad reveal selector {selector}");
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|idx| nodes.item(idx))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn mark_visible(element: &Element) {
    if let Err(err) = element.class_list().add_1(VISIBLE_CLASS) {
        warn!("failed to reveal element: {err:?}");
    }
}

// start revealing once the calling component has mounted its children, and stop
// observing when it unmounts
pub fn use_reveal() {
    let guard = use_hook(|| Rc::new(RefCell::new(None::<RevealGuard>)));

    use_effect({
        let guard = guard.clone();
        move || {
            let mut slot = guard.borrow_mut();
            if slot.is_none() {
                *slot = RevealGuard::observe_page();
            }
        }
    });

    use_drop(move || {
        guard.borrow_mut().take();
    });
}
