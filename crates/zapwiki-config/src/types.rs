//! Configuration types

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Article shown for an empty location
pub const DEFAULT_HOME_SLUG: &str = "bem-vindo";

/// WhatsApp deep link of the support channel
pub const SUPPORT_WHATSAPP_URL: &str = "https://wa.me/555496396455";

/// Email deep link of the support channel
pub const SUPPORT_EMAIL_URL: &str = "mailto:atendimento@zappost.app";

/// Main wiki configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WikiConfig {
    /// Slug shown for an empty or unknown location
    pub home_slug: String,
    /// JSON catalog to load instead of the built-in one
    pub catalog_path: Option<PathBuf>,
    pub support: SupportConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

/// Support contact channel targets
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SupportConfig {
    pub whatsapp_url: String,
    pub email_url: String,
}

/// Terminal UI configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    /// Animate scrolls; when off, every scroll is instant
    pub smooth_scroll: bool,
    /// Sidebar width in columns
    pub sidebar_width: u16,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of trace, debug, info, warn, error
    pub level: String,
    /// Log file; logs go to stderr when unset
    pub file: Option<PathBuf>,
}

impl Default for WikiConfig {
    fn default() -> Self {
        Self {
            home_slug: DEFAULT_HOME_SLUG.to_string(),
            catalog_path: None,
            support: SupportConfig::default(),
            ui: UiConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for SupportConfig {
    fn default() -> Self {
        Self {
            whatsapp_url: SUPPORT_WHATSAPP_URL.to_string(),
            email_url: SUPPORT_EMAIL_URL.to_string(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            smooth_scroll: true,
            sidebar_width: 32,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Parsed level, or `None` if the configured name is unknown
    pub fn tracing_level(&self) -> Option<tracing::Level> {
        self.level.parse().ok()
    }
}
