//! Light/dark theme preference and its persistence.

use std::cell::RefCell;
use std::collections::HashMap;

/// Class placed on `<body>` while the dark theme is active
pub const DARK_MODE_CLASS: &str = "dark-mode";

/// Theme preference options
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything but `"dark"` means light.
    pub fn parse(s: &str) -> Self {
        match s {
            "dark" => ThemePreference::Dark,
            _ => ThemePreference::Light,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemePreference::Dark)
    }

    /// Icon shown on the toggle: the mode a click switches to
    pub fn icon(&self) -> &'static str {
        match self {
            ThemePreference::Light => "moon",
            ThemePreference::Dark => "sun",
        }
    }

    pub fn body_class(&self) -> Option<&'static str> {
        self.is_dark().then_some(DARK_MODE_CLASS)
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    #[error("Storage is unavailable")]
    Unavailable,
    #[error("Storage write rejected: {0}")]
    WriteRejected(String),
}

/// Durable string key-value storage
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory store, used where no browser storage exists
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Read the persisted preference, defaulting to light
pub fn load_preference(store: &impl PreferenceStore, key: &str) -> ThemePreference {
    store
        .get(key)
        .map(|value| ThemePreference::parse(&value))
        .unwrap_or_default()
}

/// Flip `current` and persist the result.
///
/// The new preference is returned even when the write fails; the error is
/// handed back alongside so the caller can report it.
pub fn toggle_preference(
    store: &impl PreferenceStore,
    key: &str,
    current: ThemePreference,
) -> (ThemePreference, Option<StoreError>) {
    let next = current.toggled();
    let error = store.set(key, next.as_str()).err();
    (next, error)
}
