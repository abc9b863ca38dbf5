//! Theme preference value.
//!
//! The persisted form is the lowercase literal (`"light"` or `"dark"`), which
//! is also what gets written to the page theme attribute.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PageError;

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// User-chosen visual mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Theme implied by the toggle control's checked state.
    #[must_use]
    pub fn from_checked(checked: bool) -> Self {
        if checked { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Resolve a raw stored value into a theme.
    ///
    /// Missing values yield the default. Unrecognized values also yield the
    /// default, with a warning naming the rejected value.
    #[must_use]
    pub fn resolve_stored(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        match raw.parse() {
            Ok(theme) => theme,
            Err(e) => {
                log::warn!("ignoring stored theme preference: {e}");
                Self::default()
            }
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = PageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(PageError::InvalidTheme(other.to_owned())),
        }
    }
}
