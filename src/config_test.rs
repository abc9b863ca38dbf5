use super::*;

#[test]
fn default_matches_stock_markup() {
    let config = PageConfig::default();
    assert_eq!(config.storage_key, "theme");
    assert_eq!(config.theme_attribute, "data-theme");
    assert_eq!(config.toggle_id, "darkToggle");
    assert_eq!(config.popup_id, "popup");
    assert_eq!(config.hidden_class, "hidden");
    assert_eq!(config.log_level, LogLevel::Info);
}

#[test]
fn default_passes_validation() {
    assert!(PageConfig::default().validate().is_ok());
}

#[test]
fn from_json_fills_omitted_fields_with_defaults() {
    let config = PageConfig::from_json(r#"{"toggle_id":"themeSwitch","log_level":"debug"}"#).unwrap();
    assert_eq!(config.toggle_id, "themeSwitch");
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.popup_id, "popup");
    assert_eq!(config.storage_key, "theme");
}

#[test]
fn from_json_accepts_empty_object() {
    assert_eq!(PageConfig::from_json("{}").unwrap(), PageConfig::default());
}

#[test]
fn from_json_rejects_malformed_input() {
    let err = PageConfig::from_json("{toggle_id:").unwrap_err();
    assert!(matches!(err, PageError::Config(_)));
}

#[test]
fn from_json_rejects_unknown_log_level() {
    let err = PageConfig::from_json(r#"{"log_level":"chatty"}"#).unwrap_err();
    assert!(matches!(err, PageError::Config(_)));
}

#[test]
fn validate_rejects_blank_fields() {
    let err = PageConfig::from_json(r#"{"popup_id":"  "}"#).unwrap_err();
    assert!(matches!(err, PageError::InvalidConfig(ref msg) if msg.contains("popup_id")));
}

#[test]
fn validate_rejects_multi_token_class() {
    let config = PageConfig { hidden_class: "is hidden".to_owned(), ..PageConfig::default() };
    let err = config.validate().unwrap_err();
    assert!(matches!(err, PageError::InvalidConfig(ref msg) if msg.contains("hidden_class")));
}

#[test]
fn log_level_converts_to_log_crate_level() {
    assert_eq!(log::Level::from(LogLevel::Warn), log::Level::Warn);
    assert_eq!(log::Level::from(LogLevel::Debug), log::Level::Debug);
}
