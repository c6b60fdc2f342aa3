//! Light/dark theme toggle with a persisted preference.
//!
//! The page is dark by default. A floating button flips between themes; the
//! choice is stored under a single `localStorage` key and restored on the
//! next load.
//!
//! State flows one way: [`ThemeController`] owns the current [`ThemeState`]
//! and the [`PreferenceStore`], and the browser side draws whatever state it
//! is handed. Body class and button icon are never read back from the DOM.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::consts::{DARK_ICON, LIGHT_ICON};
use crate::error::FxError;

/// Page color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Parse a stored preference. Missing or unknown values mean dark.
    #[must_use]
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            Some("light") => Self::Light,
            _ => Self::Dark,
        }
    }

    /// Storage representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other theme.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Everything the renderer needs to draw the theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemeState {
    pub theme: Theme,
}

impl ThemeState {
    /// Whether `<body>` should carry the light-mode class.
    #[must_use]
    pub fn light_class(&self) -> bool {
        self.theme == Theme::Light
    }

    /// Icon for the toggle button.
    #[must_use]
    pub fn icon(&self) -> &'static str {
        match self.theme {
            Theme::Light => LIGHT_ICON,
            Theme::Dark => DARK_ICON,
        }
    }
}

/// Key/value persistence for the theme preference.
pub trait PreferenceStore {
    /// Read the raw stored value, if any.
    fn load(&self, key: &str) -> Option<String>;

    /// Write the raw value.
    ///
    /// # Errors
    ///
    /// Returns [`FxError`] when the backing storage rejects the write.
    fn save(&mut self, key: &str, value: &str) -> Result<(), FxError>;
}

/// Owns the theme state and keeps the store in sync with it.
pub struct ThemeController<S: PreferenceStore> {
    store: S,
    key: String,
    state: ThemeState,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Restore state from `store[key]`. Nothing is written until the first toggle.
    pub fn load(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let theme = Theme::from_stored(store.load(&key).as_deref());
        log::debug!("restored theme {} from '{key}'", theme.as_str());
        Self { store, key, state: ThemeState { theme } }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> ThemeState {
        self.state
    }

    /// Flip the theme and persist it. A failed write is logged; the new state
    /// is returned either way so the page still switches.
    pub fn toggle(&mut self) -> ThemeState {
        self.state.theme = self.state.theme.flipped();
        if let Err(err) = self.store.save(&self.key, self.state.theme.as_str()) {
            log::warn!("theme preference not saved: {err}");
        }
        self.state
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(feature = "hydrate")]
pub use self::browser::{LocalStore, install, render};

#[cfg(feature = "hydrate")]
mod browser {
    use web_sys::{Document, Element, Event, HtmlElement, Storage};

    use super::{PreferenceStore, ThemeController, ThemeState};
    use crate::config::FxConfig;
    use crate::consts::{LIGHT_MODE_CLASS, TOGGLE_BUTTON_CLASS};
    use crate::dom;
    use crate::error::FxError;

    /// `window.localStorage`, or nothing when storage is blocked.
    pub struct LocalStore {
        storage: Option<Storage>,
    }

    impl LocalStore {
        #[must_use]
        pub fn new() -> Self {
            let storage = match web_sys::window().map(|w| w.local_storage()) {
                Some(Ok(storage)) => storage,
                Some(Err(err)) => {
                    log::warn!("localStorage unavailable: {err:?}");
                    None
                }
                None => None,
            };
            Self { storage }
        }
    }

    impl Default for LocalStore {
        fn default() -> Self {
            Self::new()
        }
    }

    impl PreferenceStore for LocalStore {
        fn load(&self, key: &str) -> Option<String> {
            match self.storage.as_ref()?.get_item(key) {
                Ok(value) => value,
                Err(err) => {
                    log::warn!("failed to read '{key}': {err:?}");
                    None
                }
            }
        }

        fn save(&mut self, key: &str, value: &str) -> Result<(), FxError> {
            let storage = self.storage.as_ref().ok_or(FxError::StorageUnavailable)?;
            storage.set_item(key, value)?;
            Ok(())
        }
    }

    /// Draw `state` onto the body class list and the toggle button.
    ///
    /// # Errors
    ///
    /// Returns [`FxError::Js`] if the class list rejects the update.
    pub fn render(state: &ThemeState, body: &HtmlElement, button: &Element) -> Result<(), FxError> {
        body.class_list().toggle_with_force(LIGHT_MODE_CLASS, state.light_class())?;
        button.set_text_content(Some(state.icon()));
        Ok(())
    }

    /// Append the floating toggle button and restore the saved theme.
    ///
    /// # Errors
    ///
    /// Returns [`FxError`] if the button cannot be created, styled, or wired.
    pub fn install(doc: &Document, config: &FxConfig) -> Result<(), FxError> {
        let Some(body) = doc.body() else {
            log::debug!("no body; theme toggle skipped");
            return Ok(());
        };

        let button = dom::create(doc, "button")?;
        button.set_class_name(TOGGLE_BUTTON_CLASS);
        dom::set_styles(
            &button,
            &[
                ("bottom", "25px"),
                ("right", "25px"),
                ("z-index", "999"),
                ("border-radius", "50%"),
                ("padding", "10px 13px"),
            ],
        )?;
        body.append_child(&button)?;

        let mut controller = ThemeController::load(LocalStore::new(), config.storage_key.clone());
        render(&controller.state(), &body, &button)?;

        let target = button.clone();
        dom::listen(&target, "click", move |_: Event| {
            let state = controller.toggle();
            render(&state, &body, &button)
        })
    }
}
