//! Error type for page controller operations.
//!
//! Nothing here is ever surfaced to the user as a hard failure. Controllers
//! log these and keep going; the variants exist so the seams between the
//! controllers and the DOM can report what went wrong.

/// Failures reported by storage, DOM, and configuration seams.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("element not found: #{id}")]
    MissingElement { id: String },
    #[error("storage error: {0}")]
    Storage(String),
    #[error("dom error: {0}")]
    Dom(String),
    #[error("invalid theme value: {0:?}")]
    InvalidTheme(String),
    #[error("config parse error: {0}")]
    Config(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
