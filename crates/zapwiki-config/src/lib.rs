//! ZAP POST Wiki configuration
//!
//! Configuration is layered: built-in defaults, then an optional TOML file,
//! then `ZAPWIKI_*` environment variables.

pub mod error;
pub mod manager;
pub mod types;

pub use error::{ConfigError, Result};
pub use manager::ConfigManager;
pub use types::{
    LoggingConfig, SupportConfig, UiConfig, WikiConfig, DEFAULT_HOME_SLUG,
    SUPPORT_EMAIL_URL, SUPPORT_WHATSAPP_URL,
};
