//! Notification popup visibility.

use crate::config::PageConfig;
use crate::surface::{ClassTarget, ElementLookup};

#[cfg(test)]
#[path = "popup_test.rs"]
mod popup_test;

/// Shows and hides the popup element by toggling its marker class.
///
/// Holds no visibility state of its own; the element's class list is the
/// only source of truth, so `show`/`hide` are idempotent and a missing
/// element makes both a no-op.
pub struct PopupController<D> {
    document: D,
    popup_id: String,
    hidden_class: String,
}

impl<D: ElementLookup> PopupController<D> {
    pub fn new(config: &PageConfig, document: D) -> Self {
        Self {
            document,
            popup_id: config.popup_id.clone(),
            hidden_class: config.hidden_class.clone(),
        }
    }

    pub fn show(&self) {
        self.set_hidden(false);
    }

    pub fn hide(&self) {
        self.set_hidden(true);
    }

    /// `None` when the popup element is absent.
    pub fn is_visible(&self) -> Option<bool> {
        self.document
            .element_by_id(&self.popup_id)
            .map(|el| !el.has_class(&self.hidden_class))
    }

    fn set_hidden(&self, hidden: bool) {
        let Some(el) = self.document.element_by_id(&self.popup_id) else {
            log::debug!("popup #{} not present", self.popup_id);
            return;
        };
        let result = if hidden {
            el.add_class(&self.hidden_class)
        } else {
            el.remove_class(&self.hidden_class)
        };
        if let Err(e) = result {
            log::warn!("popup #{}: {e}", self.popup_id);
        }
    }
}
