//! Tests for configuration loading, layering and persistence

use std::fs;

use tempfile::TempDir;
use zapwiki_config::{
    ConfigError, ConfigManager, WikiConfig, DEFAULT_HOME_SLUG, SUPPORT_EMAIL_URL,
    SUPPORT_WHATSAPP_URL,
};

#[test]
fn test_wiki_config_default() {
    let config = WikiConfig::default();
    assert_eq!(config.home_slug, DEFAULT_HOME_SLUG);
    assert_eq!(config.catalog_path, None);
    assert_eq!(config.support.whatsapp_url, SUPPORT_WHATSAPP_URL);
    assert_eq!(config.support.email_url, SUPPORT_EMAIL_URL);
    assert!(config.ui.smooth_scroll);
    assert_eq!(config.ui.sidebar_width, 32);
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.tracing_level(), Some(tracing::Level::INFO));
    assert!(config.logging.file.is_none());
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let manager = ConfigManager::with_path(dir.path().join("absent.toml"))
        .with_env_prefix("ZAPWIKI_TEST_MISSING");

    let config = manager.load_config().unwrap();
    assert_eq!(config, WikiConfig::default());
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "[ui]\nsmooth_scroll = false\n\n[logging]\nlevel = \"debug\"\n",
    )
    .unwrap();

    let manager = ConfigManager::with_path(path).with_env_prefix("ZAPWIKI_TEST_PARTIAL");
    let config = manager.load_config().unwrap();

    assert!(!config.ui.smooth_scroll);
    assert_eq!(config.ui.sidebar_width, 32);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.home_slug, DEFAULT_HOME_SLUG);
    assert_eq!(config.support.email_url, SUPPORT_EMAIL_URL);
}

#[test]
fn test_environment_overrides_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "home_slug = \"primeiros-passos\"\n[ui]\nsidebar_width = 24\n").unwrap();

    std::env::set_var("ZAPWIKI_TEST_ENV_UI__SIDEBAR_WIDTH", "40");
    std::env::set_var("ZAPWIKI_TEST_ENV_HOME_SLUG", "dashboard");

    let manager = ConfigManager::with_path(path).with_env_prefix("ZAPWIKI_TEST_ENV");
    let config = manager.load_config().unwrap();

    std::env::remove_var("ZAPWIKI_TEST_ENV_UI__SIDEBAR_WIDTH");
    std::env::remove_var("ZAPWIKI_TEST_ENV_HOME_SLUG");

    assert_eq!(config.ui.sidebar_width, 40);
    assert_eq!(config.home_slug, "dashboard");
}

#[test]
fn test_save_then_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");
    let manager = ConfigManager::with_path(path.clone()).with_env_prefix("ZAPWIKI_TEST_SAVE");

    let mut config = WikiConfig::default();
    config.catalog_path = Some(dir.path().join("catalog.json"));
    config.ui.sidebar_width = 28;
    config.logging.file = Some(dir.path().join("wiki.log"));

    manager.save_config(&config).unwrap();
    assert!(path.exists());

    let loaded = manager.load_config().unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_invalid_file_values_fail_validation() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[logging]\nlevel = \"loud\"\n").unwrap();

    let manager = ConfigManager::with_path(path).with_env_prefix("ZAPWIKI_TEST_INVALID");
    assert!(matches!(
        manager.load_config(),
        Err(ConfigError::Validation(_))
    ));
}

#[test]
fn test_malformed_file_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[ui\nsidebar_width = ").unwrap();

    let manager = ConfigManager::with_path(path).with_env_prefix("ZAPWIKI_TEST_MALFORMED");
    assert!(matches!(manager.load_config(), Err(ConfigError::Parse(_))));
}
