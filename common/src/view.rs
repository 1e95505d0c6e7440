use tracing::{Level, debug, instrument};

use crate::{
    config::ViewOptions,
    theme::{StyleMarker, ThemePreference, ThemeStore},
};

// transient ui flags for a single page visit
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewState {
    pub menu_open: bool,
    pub scrolled: bool,
    pub dark_mode: bool,
}

impl ViewState {
    pub fn theme(&self) -> ThemePreference {
        ThemePreference::from_dark(self.dark_mode)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

type Observer = Box<dyn FnMut(&ViewState)>;

/// Owns the [`ViewState`] and bridges it to the scroll signal and the persisted theme.
///
/// Every mutating operation runs to completion (including any store write and marker
/// update) before registered observers are called, and observers are only called when
/// the state actually changed.
pub struct ViewStateController<S: ThemeStore, M: StyleMarker> {
    state: ViewState,
    store: S,
    marker: M,
    options: ViewOptions,
    observers: Vec<(Subscription, Observer)>,
    next_subscription: u64,
}

impl<S: ThemeStore, M: StyleMarker> ViewStateController<S, M> {
    pub fn new(store: S, marker: M, options: ViewOptions) -> Self {
        ViewStateController {
            state: ViewState::default(),
            store,
            marker,
            options,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn options(&self) -> &ViewOptions {
        &self.options
    }

    // read the stored preference and bring the marker and the store in line with it
    //
    // a malformed value is rewritten as "light" here, so the store never disagrees with
    // dark_mode once the page has loaded
    #[instrument(level=Level::DEBUG, skip(self))]
    pub fn initialize(&mut self) {
        let stored = self.store.load(&self.options.storage_key);
        let theme = ThemePreference::parse(stored.as_deref());

        debug!({stored = ?stored, theme = %theme}, "loaded theme preference");

        let before = self.state;
        self.state.dark_mode = theme.is_dark();
        self.write_theme();

        self.notify_if_changed(before);
    }

    // called for every scroll event, so this must stay a comparison and an assignment
    pub fn on_scroll(&mut self, scroll_y: f64) {
        let scrolled = scroll_y > self.options.scroll_threshold;

        if scrolled != self.state.scrolled {
            let before = self.state;
            self.state.scrolled = scrolled;

            debug!("scrolled past threshold: {scrolled}");
            self.notify_if_changed(before);
        }
    }

    pub fn toggle_menu(&mut self) {
        let before = self.state;
        self.state.menu_open = !self.state.menu_open;

        debug!("menu open: {}", self.state.menu_open);
        self.notify_if_changed(before);
    }

    pub fn close_menu(&mut self) {
        let before = self.state;
        self.state.menu_open = false;

        self.notify_if_changed(before);
    }

    pub fn toggle_dark_mode(&mut self) {
        let before = self.state;
        self.state.dark_mode = !self.state.dark_mode;
        self.write_theme();

        debug!("theme switched to {}", self.state.theme());
        self.notify_if_changed(before);
    }

    pub fn subscribe<F>(&mut self, observer: F) -> Subscription
    where
        F: FnMut(&ViewState) + 'static,
    {
        let id = Subscription(self.next_subscription);
        self.next_subscription += 1;

        self.observers.push((id, Box::new(observer)));
        id
    }

    // returns false if the subscription was already gone
    pub fn unsubscribe(&mut self, id: Subscription) -> bool {
        let len = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != len
    }

    // store and marker both follow dark_mode
    fn write_theme(&mut self) {
        let theme = self.state.theme();

        self.store.store(&self.options.storage_key, theme.as_str());
        self.marker.apply(theme.is_dark());
    }

    fn notify_if_changed(&mut self, before: ViewState) {
        if before == self.state {
            return;
        }

        let state = self.state;
        for (_, observer) in self.observers.iter_mut() {
            observer(&state);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;
    use crate::theme::fakes::{MemoryThemeStore, RecordingMarker};

    type TestController = ViewStateController<MemoryThemeStore, RecordingMarker>;

    fn controller(store: &MemoryThemeStore) -> (TestController, RecordingMarker) {
        let marker = RecordingMarker::new();
        let ctrl = ViewStateController::new(store.clone(), marker.clone(), ViewOptions::default());
        (ctrl, marker)
    }

    fn initialized(stored: Option<&str>) -> (TestController, MemoryThemeStore, RecordingMarker) {
        let store = match stored {
            Some(value) => MemoryThemeStore::with_value("theme", value),
            None => MemoryThemeStore::new(),
        };
        let (mut ctrl, marker) = controller(&store);
        ctrl.initialize();
        (ctrl, store, marker)
    }

    #[test]
    fn starts_closed_unscrolled_light() {
        let (ctrl, _) = controller(&MemoryThemeStore::new());
        assert_eq!(ctrl.state(), ViewState::default());
    }

    #[test]
    fn initialize_reads_dark() {
        let (ctrl, store, marker) = initialized(Some("dark"));

        assert!(ctrl.state().dark_mode);
        assert_eq!(marker.current(), Some(true));
        assert_eq!(store.get("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn initialize_defaults_to_light() {
        for stored in [Some("light"), None, Some("DARK"), Some(""), Some("🌙"), Some("{}")] {
            let (ctrl, store, marker) = initialized(stored);

            assert!(!ctrl.state().dark_mode, "stored value {stored:?}");
            assert_eq!(marker.current(), Some(false));
            assert_eq!(store.get("theme").as_deref(), Some("light"));
        }
    }

    #[test]
    fn scroll_threshold_is_exclusive() {
        let (mut ctrl, _, _) = initialized(None);

        for y in [0.0, 12.5, 49.9, 50.0] {
            ctrl.on_scroll(y);
            assert!(!ctrl.state().scrolled, "scroll_y {y}");
        }
        for y in [50.01, 51.0, 4000.0] {
            ctrl.on_scroll(y);
            assert!(ctrl.state().scrolled, "scroll_y {y}");
        }

        ctrl.on_scroll(50.0);
        assert!(!ctrl.state().scrolled);
    }

    #[test]
    fn scroll_threshold_follows_options() {
        let options = ViewOptions {
            scroll_threshold: 200.0,
            ..ViewOptions::default()
        };
        let mut ctrl =
            ViewStateController::new(MemoryThemeStore::new(), RecordingMarker::new(), options);

        ctrl.on_scroll(150.0);
        assert!(!ctrl.state().scrolled);
        ctrl.on_scroll(201.0);
        assert!(ctrl.state().scrolled);
    }

    #[test]
    fn toggle_menu_is_an_involution() {
        let (mut ctrl, _, _) = initialized(None);
        let start = ctrl.state().menu_open;

        ctrl.toggle_menu();
        assert_ne!(ctrl.state().menu_open, start);
        ctrl.toggle_menu();
        assert_eq!(ctrl.state().menu_open, start);
    }

    #[test]
    fn close_menu_is_idempotent() {
        let (mut ctrl, _, _) = initialized(None);

        ctrl.close_menu();
        assert!(!ctrl.state().menu_open);

        ctrl.toggle_menu();
        ctrl.close_menu();
        ctrl.close_menu();
        assert!(!ctrl.state().menu_open);
    }

    #[test]
    fn menu_does_not_touch_theme() {
        let (mut ctrl, store, marker) = initialized(Some("dark"));
        let applied = marker.applied();

        ctrl.toggle_menu();
        ctrl.close_menu();

        assert_eq!(marker.applied(), applied);
        assert_eq!(store.get("theme").as_deref(), Some("dark"));
        assert!(ctrl.state().dark_mode);
    }

    #[test]
    fn toggle_dark_mode_writes_through() {
        let (mut ctrl, store, marker) = initialized(None);

        ctrl.toggle_dark_mode();
        assert!(ctrl.state().dark_mode);
        assert_eq!(store.get("theme").as_deref(), Some("dark"));
        assert_eq!(marker.current(), Some(true));

        ctrl.toggle_dark_mode();
        assert!(!ctrl.state().dark_mode);
        assert_eq!(store.get("theme").as_deref(), Some("light"));
        assert_eq!(marker.current(), Some(false));
    }

    #[test]
    fn theme_survives_reload() {
        let store = MemoryThemeStore::new();

        let (mut first, _) = controller(&store);
        first.initialize();
        assert!(!first.state().dark_mode);

        first.toggle_dark_mode();
        assert!(first.state().dark_mode);
        assert_eq!(store.get("theme").as_deref(), Some("dark"));
        drop(first);

        let (mut second, marker) = controller(&store);
        second.initialize();
        assert!(second.state().dark_mode);
        assert_eq!(marker.current(), Some(true));
    }

    #[test]
    fn storage_key_follows_options() {
        let store = MemoryThemeStore::with_value("studio-theme", "dark");
        let options = ViewOptions {
            storage_key: "studio-theme".to_owned(),
            ..ViewOptions::default()
        };
        let mut ctrl = ViewStateController::new(store.clone(), RecordingMarker::new(), options);

        ctrl.initialize();
        assert!(ctrl.state().dark_mode);
        assert_eq!(store.get("theme"), None);
    }

    #[test]
    fn observers_see_completed_mutations() {
        let (mut ctrl, store, marker) = initialized(None);
        let seen = Rc::new(RefCell::new(Vec::new()));

        ctrl.subscribe({
            let seen = seen.clone();
            let store = store.clone();
            let marker = marker.clone();
            move |state: &ViewState| {
                // store and marker are already updated when observers run
                assert_eq!(
                    store.get("theme").as_deref(),
                    Some(state.theme().as_str())
                );
                assert_eq!(marker.current(), Some(state.dark_mode));
                seen.borrow_mut().push(*state);
            }
        });

        ctrl.toggle_dark_mode();
        ctrl.toggle_menu();
        ctrl.on_scroll(120.0);

        let seen = seen.borrow();
        assert_eq!(seen.len(), 3);
        assert_eq!(seen[2], ctrl.state());
        assert!(seen[0].dark_mode && !seen[0].menu_open);
    }

    #[test]
    fn observers_skip_no_op_events() {
        let (mut ctrl, _, _) = initialized(None);
        let calls = Rc::new(RefCell::new(0));

        ctrl.subscribe({
            let calls = calls.clone();
            move |_: &ViewState| *calls.borrow_mut() += 1
        });

        for y in 0..=50 {
            ctrl.on_scroll(f64::from(y));
        }
        ctrl.close_menu();
        assert_eq!(*calls.borrow(), 0);

        for y in 51..1000 {
            ctrl.on_scroll(f64::from(y));
        }
        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn unsubscribed_observer_is_not_called() {
        let (mut ctrl, _, _) = initialized(None);
        let calls = Rc::new(RefCell::new(0));

        let id = ctrl.subscribe({
            let calls = calls.clone();
            move |_: &ViewState| *calls.borrow_mut() += 1
        });

        ctrl.toggle_menu();
        assert!(ctrl.unsubscribe(id));
        assert!(!ctrl.unsubscribe(id));
        ctrl.toggle_menu();

        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn initialize_notifies_only_on_dark() {
        let store = MemoryThemeStore::with_value("theme", "dark");
        let (mut ctrl, _) = controller(&store);
        let seen = Rc::new(RefCell::new(Vec::new()));

        ctrl.subscribe({
            let seen = seen.clone();
            move |state: &ViewState| seen.borrow_mut().push(state.dark_mode)
        });
        ctrl.initialize();
        assert_eq!(*seen.borrow(), vec![true]);

        let (mut light, _) = controller(&MemoryThemeStore::new());
        let calls = Rc::new(RefCell::new(0));
        light.subscribe({
            let calls = calls.clone();
            move |_: &ViewState| *calls.borrow_mut() += 1
        });
        light.initialize();
        assert_eq!(*calls.borrow(), 0);
    }
}
