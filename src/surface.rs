//! Seams between the controllers and the page.
//!
//! DESIGN
//! ======
//! Controllers are generic over these traits so their behavior can be driven
//! by the real DOM (`browser`, feature `hydrate`) or by the headless
//! `memory` document. Every method takes `&self`: DOM handles are shared
//! references with interior mutability, and the in-memory stand-ins mirror
//! that.

use crate::error::PageError;

/// Key-value storage that outlives the page (browser `localStorage`).
pub trait PreferenceStore {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Storage`] when the store cannot be read.
    fn load(&self, key: &str) -> Result<Option<String>, PageError>;

    /// Write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Storage`] when the write is refused.
    fn save(&self, key: &str, value: &str) -> Result<(), PageError>;
}

/// Element that carries the page theme attribute.
pub trait ThemeRoot {
    /// # Errors
    ///
    /// Returns [`PageError::Dom`] when the attribute cannot be set.
    fn set_theme_attribute(&self, name: &str, value: &str) -> Result<(), PageError>;
}

/// Binary input that reflects and drives the theme.
pub trait ToggleControl {
    fn is_checked(&self) -> bool;
    fn set_checked(&self, checked: bool);
}

/// Element whose visibility is controlled by a marker class.
pub trait ClassTarget {
    /// # Errors
    ///
    /// Returns [`PageError::Dom`] when the class list rejects the token.
    fn add_class(&self, class: &str) -> Result<(), PageError>;

    /// # Errors
    ///
    /// Returns [`PageError::Dom`] when the class list rejects the token.
    fn remove_class(&self, class: &str) -> Result<(), PageError>;

    fn has_class(&self, class: &str) -> bool;
}

/// Resolves elements by id.
pub trait ElementLookup {
    type Element: ClassTarget;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;
}
