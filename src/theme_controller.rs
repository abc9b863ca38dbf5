//! Theme preference initialization and toggle handling.
//!
//! Reads the persisted preference, mirrors it onto the page theme attribute
//! and the toggle control, and on each toggle change writes the new value
//! back. Storage and attribute failures are logged and never abort the
//! visual update.
//!
//! INVARIANT
//! =========
//! After `init` and after every `on_change`/`set_theme`, the theme attribute
//! equals `Theme::from_checked(toggle.is_checked())`.

use crate::config::PageConfig;
use crate::consts::MISSING_TOGGLE_WARNING;
use crate::surface::{PreferenceStore, ThemeRoot, ToggleControl};
use crate::theme::Theme;

#[cfg(test)]
#[path = "theme_controller_test.rs"]
mod theme_controller_test;

pub struct ThemeController<S, R, T> {
    store: S,
    root: R,
    toggle: T,
    storage_key: String,
    theme_attribute: String,
}

impl<S, R, T> ThemeController<S, R, T>
where
    S: PreferenceStore,
    R: ThemeRoot,
    T: ToggleControl,
{
    /// Apply the persisted theme to `root` and `toggle`.
    ///
    /// Returns `None` without touching storage or the page when the toggle
    /// control is absent.
    pub fn init(config: &PageConfig, store: S, root: R, toggle: Option<T>) -> Option<Self> {
        let Some(toggle) = toggle else {
            log::warn!("{MISSING_TOGGLE_WARNING}");
            return None;
        };
        let controller = Self {
            store,
            root,
            toggle,
            storage_key: config.storage_key.clone(),
            theme_attribute: config.theme_attribute.clone(),
        };
        let theme = controller.load_preference();
        controller.apply(theme);
        controller.toggle.set_checked(theme.is_dark());
        log::debug!("theme initialized to {theme}");
        Some(controller)
    }

    /// Handle a change event on the toggle control.
    pub fn on_change(&self) -> Theme {
        let theme = self.current();
        self.apply(theme);
        self.persist(theme);
        theme
    }

    /// Drive the toggle from code, then apply and persist like a change event.
    pub fn set_theme(&self, theme: Theme) {
        self.toggle.set_checked(theme.is_dark());
        self.on_change();
    }

    /// Theme implied by the toggle control.
    pub fn current(&self) -> Theme {
        Theme::from_checked(self.toggle.is_checked())
    }

    pub fn toggle(&self) -> &T {
        &self.toggle
    }

    fn load_preference(&self) -> Theme {
        match self.store.load(&self.storage_key) {
            Ok(raw) => Theme::resolve_stored(raw.as_deref()),
            Err(e) => {
                log::warn!("theme preference unreadable, using default: {e}");
                Theme::default()
            }
        }
    }

    fn apply(&self, theme: Theme) {
        if let Err(e) = self.root.set_theme_attribute(&self.theme_attribute, theme.as_str()) {
            log::warn!("failed to apply theme {theme}: {e}");
        }
    }

    fn persist(&self, theme: Theme) {
        if let Err(e) = self.store.save(&self.storage_key, theme.as_str()) {
            log::warn!("theme {theme} applied for this session only: {e}");
        }
    }
}
