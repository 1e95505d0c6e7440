use gloo_console::error as console_error;
use gloo_storage::{LocalStorage, Storage};

use common::ThemeStore;

// theme preference in window.localStorage
//
// values are stored raw rather than through the json helpers on Storage, so the key
// holds the literal "dark"/"light" that the page has always written
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalThemeStore;

impl ThemeStore for LocalThemeStore {
    fn load(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).unwrap_or_else(|err| {
            console_error!(format!("Failed to fetch local storage {key}: {err:?}"));
            None
        })
    }

    fn store(&self, key: &str, value: &str) {
        LocalStorage::raw()
            .set_item(key, value)
            .unwrap_or_else(|err| console_error!(format!("Failed to set local storage {key}: {err:?}")))
    }
}
