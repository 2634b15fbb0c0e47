use tracing::warn;

// storage key for the persisted preference, namespaced by the browser layer
pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    // class set on the site root element; the dark palette is a css variable
    // override block keyed off this
    pub fn css_class(&self) -> &'static str {
        match self {
            Theme::Light => "theme-light",
            Theme::Dark => "theme-dark",
        }
    }

    pub fn storage_value(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_storage_value(value: &str) -> Option<Theme> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    // accessible label for the toggle control, naming the mode a click
    // switches to rather than the current one
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Theme::Light => "Switch to dark mode",
            Theme::Dark => "Switch to light mode",
        }
    }
}

// persistence seam so the reducer logic stays independent of the browser;
// the webapp backs this with localStorage
pub trait PreferenceStore {
    fn read(&self, key: &str) -> Option<String>;

    fn write(&self, key: &str, value: &str);
}

pub fn load_theme(store: &impl PreferenceStore) -> Theme {
    match store.read(THEME_STORAGE_KEY) {
        Some(value) => Theme::from_storage_value(&value).unwrap_or_else(|| {
            warn!("ignoring unrecognized stored theme {value:?}");
            Theme::default()
        }),
        None => Theme::default(),
    }
}

pub fn store_theme(store: &impl PreferenceStore, theme: Theme) {
    store.write(THEME_STORAGE_KEY, theme.storage_value())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStore {
        values: RefCell<HashMap<String, String>>,
    }

    impl PreferenceStore for MemoryStore {
        fn read(&self, key: &str) -> Option<String> {
            self.values.borrow().get(key).cloned()
        }

        fn write(&self, key: &str, value: &str) {
            self.values
                .borrow_mut()
                .insert(key.to_owned(), value.to_owned());
        }
    }

    #[test]
    fn empty_store_defaults_to_light() {
        let store = MemoryStore::default();

        assert_eq!(load_theme(&store), Theme::Light);
    }

    #[test]
    fn stored_preference_round_trips() {
        let store = MemoryStore::default();

        store_theme(&store, Theme::Dark);
        assert_eq!(load_theme(&store), Theme::Dark);

        store_theme(&store, Theme::Light);
        assert_eq!(load_theme(&store), Theme::Light);
    }

    #[test]
    fn garbage_in_storage_falls_back_to_light() {
        let store = MemoryStore::default();

        store.write(THEME_STORAGE_KEY, "solarized");
        assert_eq!(load_theme(&store), Theme::Light);
    }

    #[test]
    fn toggle_alternates() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }

    #[test]
    fn css_classes_are_distinct() {
        assert_ne!(Theme::Light.css_class(), Theme::Dark.css_class());
    }
}
