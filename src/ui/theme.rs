//! Theme context module for the light/dark toggle
//!
//! Provides:
//! - ThemeContext for reactive theme state
//! - LocalStorage persistence through `PreferenceStore`
//! - The `dark-mode` class on `<body>`
//! - ThemeToggle button

use leptos::prelude::*;

use crate::core::RegistrationConfig;
use crate::core::theme::{PreferenceStore, StoreError, ThemePreference, toggle_preference};
#[cfg(feature = "hydrate")]
use crate::core::theme::{DARK_MODE_CLASS, load_preference};
use crate::ui::icon::Icon;

/// `PreferenceStore` over `window.localStorage`
pub struct LocalStorageStore;

#[cfg(feature = "hydrate")]
impl LocalStorageStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

#[cfg(feature = "hydrate")]
impl PreferenceStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        Self::storage()
            .ok_or(StoreError::Unavailable)?
            .set_item(key, value)
            .map_err(|e| StoreError::WriteRejected(format!("{:?}", e)))
    }
}

// No browser storage while rendering on the server
#[cfg(not(feature = "hydrate"))]
impl PreferenceStore for LocalStorageStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable)
    }
}

/// Theme context for managing theme state
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Current theme preference
    pub preference: RwSignal<ThemePreference>,
    storage_key: StoredValue<String>,
}

impl ThemeContext {
    /// Flip the theme, persist it and update `<body>`
    pub fn toggle(&self) {
        let key = self.storage_key.get_value();
        let (next, error) =
            toggle_preference(&LocalStorageStore, &key, self.preference.get_untracked());
        if let Some(error) = error {
            leptos::logging::warn!("Theme preference not saved: {}", error);
        }
        self.preference.set(next);
    }

    /// Apply the dark-mode class to the document body
    pub fn apply_theme_class(&self) {
        #[cfg(feature = "hydrate")]
        {
            let Some(body) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.body())
            else {
                return;
            };
            let class_list = body.class_list();
            let _ = match self.preference.get_untracked().body_class() {
                Some(class) => class_list.add_1(class),
                None => class_list.remove_1(DARK_MODE_CLASS),
            };
        }
    }
}

/// Provide theme context to the application
pub fn provide_theme_context(config: &RegistrationConfig) -> ThemeContext {
    // Start light on both server and client to avoid hydration mismatch
    let preference = RwSignal::new(ThemePreference::default());
    let storage_key = StoredValue::new(config.theme_storage_key.clone());

    let ctx = ThemeContext {
        preference,
        storage_key,
    };

    // Restore the saved preference after hydration
    #[cfg(feature = "hydrate")]
    {
        Effect::new(move |_| {
            let key = storage_key.get_value();
            preference.set(load_preference(&LocalStorageStore, &key));
        });
    }

    // Apply theme class initially and on changes
    #[cfg(feature = "hydrate")]
    {
        Effect::new(move |_| {
            let _ = preference.get();
            ctx.apply_theme_class();
        });
    }

    provide_context(ctx);

    ctx
}

/// Use theme context from anywhere in the component tree
pub fn use_theme_context() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext should be provided")
}

/// Theme toggle button component
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme_context();

    view! {
        <button
            id="theme-toggle"
            class="theme-toggle"
            on:click=move |_| theme.toggle()
            aria-label="Toggle theme"
        >
            {move || view! { <Icon name=theme.preference.get().icon() class="w-5 h-5" /> }}
        </button>
    }
}
