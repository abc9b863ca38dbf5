//! Theme preference and notification popup controllers for a server-rendered page.
//!
//! Compiled to WebAssembly with the `hydrate` feature, the crate starts
//! itself: once the document has parsed it restores the saved light/dark
//! preference onto `<body data-theme>` and the `#darkToggle` checkbox, keeps
//! them in sync on every change, and exposes `showPopup()`/`hidePopup()` on
//! `window` for inline markup handlers. Without `hydrate` the controllers
//! run against the headless [`memory`] document.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | `Theme` value and stored-value resolution |
//! | [`theme_controller`] | Applies, toggles, and persists the theme |
//! | [`popup`] | Shows/hides the popup via its marker class |
//! | [`surface`] | Traits the controllers use to reach storage and elements |
//! | [`memory`] | Headless implementations of [`surface`] |
//! | [`config`] | Element ids, class, attribute, and storage key |
//! | [`consts`] | Default values for [`config`] |
//! | [`error`] | [`error::PageError`] |
//! | `browser` | web-sys glue and the wasm entry point (feature `hydrate`) |

#[cfg(feature = "hydrate")]
pub mod browser;
pub mod config;
pub mod consts;
pub mod error;
pub mod memory;
pub mod popup;
pub mod surface;
pub mod theme;
pub mod theme_controller;
