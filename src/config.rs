//! Host page configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The controllers are bound to a specific page's markup: element ids, a
//! marker class, the theme attribute, and the storage key. Defaults match the
//! stock page; hosts with different markup embed a JSON override in a
//! `<script type="application/json" id="page-chrome-config">` element.

use serde::{Deserialize, Serialize};

use crate::consts::{HIDDEN_CLASS, POPUP_ID, STORAGE_KEY, THEME_ATTRIBUTE, TOGGLE_ID};
use crate::error::PageError;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Console verbosity for browser builds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
}

impl From<LogLevel> for log::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
        }
    }
}

/// Names the page elements, attribute, class, and storage key the controllers touch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub storage_key: String,
    pub theme_attribute: String,
    pub toggle_id: String,
    pub popup_id: String,
    pub hidden_class: String,
    pub log_level: LogLevel,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_owned(),
            theme_attribute: THEME_ATTRIBUTE.to_owned(),
            toggle_id: TOGGLE_ID.to_owned(),
            popup_id: POPUP_ID.to_owned(),
            hidden_class: HIDDEN_CLASS.to_owned(),
            log_level: LogLevel::default(),
        }
    }
}

impl PageConfig {
    /// Parse a JSON override. Omitted fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Config`] for malformed JSON and
    /// [`PageError::InvalidConfig`] when a field fails validation.
    pub fn from_json(raw: &str) -> Result<Self, PageError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the DOM APIs would choke on.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::InvalidConfig`] naming the first offending field.
    pub fn validate(&self) -> Result<(), PageError> {
        for (field, value) in [
            ("storage_key", &self.storage_key),
            ("theme_attribute", &self.theme_attribute),
            ("toggle_id", &self.toggle_id),
            ("popup_id", &self.popup_id),
            ("hidden_class", &self.hidden_class),
        ] {
            if value.trim().is_empty() {
                return Err(PageError::InvalidConfig(format!("{field} must not be empty")));
            }
        }
        // classList.add throws on tokens containing whitespace.
        if self.hidden_class.chars().any(char::is_whitespace) {
            return Err(PageError::InvalidConfig(format!(
                "hidden_class must be a single token, got {:?}",
                self.hidden_class
            )));
        }
        Ok(())
    }
}
