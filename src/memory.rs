//! Headless document and storage.
//!
//! Stand-ins for `localStorage` and DOM elements used by non-browser builds
//! and tests. Handles are cheap `Rc` clones sharing one underlying state, so
//! a caller can keep a handle and observe what a controller did with another.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::PageError;
use crate::surface::{ClassTarget, ElementLookup, PreferenceStore, ThemeRoot, ToggleControl};

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

/// In-memory key-value store.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
    unavailable: Rc<Cell<bool>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with one entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        storage
    }

    /// Raw entry lookup that bypasses the availability switch.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Make subsequent loads and saves fail, like a browser with storage disabled.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.set(unavailable);
    }
}

impl PreferenceStore for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>, PageError> {
        if self.unavailable.get() {
            return Err(PageError::Storage("storage unavailable".to_owned()));
        }
        Ok(self.get(key))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), PageError> {
        if self.unavailable.get() {
            return Err(PageError::Storage("storage unavailable".to_owned()));
        }
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

#[derive(Debug, Default)]
struct ElementState {
    attributes: HashMap<String, String>,
    classes: Vec<String>,
    checked: bool,
}

/// In-memory element with attributes, a class list, and a checked flag.
#[derive(Clone, Debug, Default)]
pub struct MemoryElement {
    state: Rc<RefCell<ElementState>>,
}

impl MemoryElement {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<String> {
        self.state.borrow().attributes.get(name).cloned()
    }

    #[must_use]
    pub fn classes(&self) -> Vec<String> {
        self.state.borrow().classes.clone()
    }

    /// Number of attributes set on the element.
    #[must_use]
    pub fn attribute_count(&self) -> usize {
        self.state.borrow().attributes.len()
    }
}

impl ThemeRoot for MemoryElement {
    fn set_theme_attribute(&self, name: &str, value: &str) -> Result<(), PageError> {
        self.state.borrow_mut().attributes.insert(name.to_owned(), value.to_owned());
        Ok(())
    }
}

impl ToggleControl for MemoryElement {
    fn is_checked(&self) -> bool {
        self.state.borrow().checked
    }

    fn set_checked(&self, checked: bool) {
        self.state.borrow_mut().checked = checked;
    }
}

fn check_token(class: &str) -> Result<(), PageError> {
    if class.is_empty() || class.chars().any(char::is_whitespace) {
        return Err(PageError::Dom(format!("invalid class token {class:?}")));
    }
    Ok(())
}

impl ClassTarget for MemoryElement {
    fn add_class(&self, class: &str) -> Result<(), PageError> {
        check_token(class)?;
        let mut state = self.state.borrow_mut();
        if !state.classes.iter().any(|c| c == class) {
            state.classes.push(class.to_owned());
        }
        Ok(())
    }

    fn remove_class(&self, class: &str) -> Result<(), PageError> {
        check_token(class)?;
        self.state.borrow_mut().classes.retain(|c| c != class);
        Ok(())
    }

    fn has_class(&self, class: &str) -> bool {
        self.state.borrow().classes.iter().any(|c| c == class)
    }
}

/// In-memory document: a body plus elements addressable by id.
#[derive(Clone, Debug, Default)]
pub struct MemoryDocument {
    body: MemoryElement,
    elements: Rc<RefCell<HashMap<String, MemoryElement>>>,
}

impl MemoryDocument {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn body(&self) -> MemoryElement {
        self.body.clone()
    }

    /// Add an element under `id`, replacing any previous one, and return a handle to it.
    pub fn insert(&self, id: &str) -> MemoryElement {
        let element = MemoryElement::new();
        self.elements.borrow_mut().insert(id.to_owned(), element.clone());
        element
    }

    pub fn remove(&self, id: &str) -> Option<MemoryElement> {
        self.elements.borrow_mut().remove(id)
    }
}

impl ElementLookup for MemoryDocument {
    type Element = MemoryElement;

    fn element_by_id(&self, id: &str) -> Option<MemoryElement> {
        self.elements.borrow().get(id).cloned()
    }
}
