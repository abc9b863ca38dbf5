//! Default literal values shared by the page controllers.

// ── Storage ─────────────────────────────────────────────────────

/// `localStorage` key holding the persisted theme preference.
pub const STORAGE_KEY: &str = "theme";

// ── Markup contract ─────────────────────────────────────────────

/// Attribute on `<body>` that stylesheets select a palette from.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Id of the checkbox that drives dark mode.
pub const TOGGLE_ID: &str = "darkToggle";

/// Id of the notification popup container.
pub const POPUP_ID: &str = "popup";

/// Marker class that hides the popup via the page stylesheet.
pub const HIDDEN_CLASS: &str = "hidden";

// ── Diagnostics ─────────────────────────────────────────────────

/// Warning logged when the host page has no toggle control.
pub const MISSING_TOGGLE_WARNING: &str = "Dark mode toggle not found!";

// ── Configuration ───────────────────────────────────────────────

/// Id of an optional `<script type="application/json">` holding a `PageConfig` override.
pub const CONFIG_ELEMENT_ID: &str = "page-chrome-config";
