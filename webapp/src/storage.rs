use anyhow;

use gloo_console::error as console_error;
use gloo_storage::{LocalStorage, Storage};

use serde::{Deserialize, Serialize};

use common::theme::PreferenceStore;

pub fn set_local_storage<T>(key: &str, value: T) -> ()
where
    T: Serialize,
{
    let key = format!("folio_{}", key);

    LocalStorage::set(key.clone(), value)
        .unwrap_or_else(|err| console_error!(format!("Failed to set local storage {key}: {err}")))
}

pub fn get_local_storage<T>(key: &str) -> anyhow::Result<T>
where
    T: for<'a> Deserialize<'a>,
{
    let key = format!("folio_{}", key);

    LocalStorage::get(key.clone()).map_err(|err| {
        console_error!(format!("Failed to fetch local storage {key}: {err}"));
        anyhow::Error::msg("Local storage failure, see console log")
    })
}

// backs the theme preference with localStorage; a missing or unreadable key
// surfaces as None and the caller falls back to the default theme
pub struct BrowserPrefs;

impl PreferenceStore for BrowserPrefs {
    fn read(&self, key: &str) -> Option<String> {
        get_local_storage(key).ok()
    }

    fn write(&self, key: &str, value: &str) {
        set_local_storage(key, value)
    }
}
