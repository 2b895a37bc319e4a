//! Configuration manager implementation

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};

use crate::{
    error::{ConfigError, Result},
    types::WikiConfig,
};

const MIN_SIDEBAR_WIDTH: u16 = 16;
const MAX_SIDEBAR_WIDTH: u16 = 60;

/// Configuration manager
pub struct ConfigManager {
    /// Configuration file path
    config_path: PathBuf,
    /// Environment prefix
    env_prefix: String,
}

impl ConfigManager {
    /// Create a new configuration manager
    pub fn new() -> Self {
        Self {
            config_path: Self::default_config_path(),
            env_prefix: "ZAPWIKI".to_string(),
        }
    }

    /// Create with custom config path
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            config_path: path,
            env_prefix: "ZAPWIKI".to_string(),
        }
    }

    /// Override the environment variable prefix
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Configuration file this manager reads and writes
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Get default config path
    fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("zapwiki")
            .join("config.toml")
    }

    /// Load defaults, then the file if present, then the environment
    ///
    /// Nested keys use `__` in variable names, e.g. `ZAPWIKI_UI__SIDEBAR_WIDTH`.
    pub fn load_config(&self) -> Result<WikiConfig> {
        if !self.config_path.exists() {
            tracing::debug!(
                "No config file at {}, using defaults",
                self.config_path.display()
            );
        }

        let config = Config::builder()
            .add_source(
                File::from(self.config_path.clone())
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                Environment::with_prefix(&self.env_prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let wiki_config: WikiConfig = config.try_deserialize()?;
        self.validate_config(&wiki_config)?;
        Ok(wiki_config)
    }

    /// Write a configuration as TOML
    pub fn save_config(&self, config: &WikiConfig) -> Result<()> {
        let toml = toml::to_string_pretty(config)?;
        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.config_path, toml)?;
        tracing::info!("Saved configuration to {}", self.config_path.display());
        Ok(())
    }

    /// Check values the rest of the wiki relies on
    pub fn validate_config(&self, config: &WikiConfig) -> Result<()> {
        if config.home_slug.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Home slug must not be empty".to_string(),
            ));
        }
        if !(MIN_SIDEBAR_WIDTH..=MAX_SIDEBAR_WIDTH).contains(&config.ui.sidebar_width) {
            return Err(ConfigError::Validation(format!(
                "Sidebar width must be between {} and {}",
                MIN_SIDEBAR_WIDTH, MAX_SIDEBAR_WIDTH
            )));
        }
        if config.logging.tracing_level().is_none() {
            return Err(ConfigError::Validation(format!(
                "Unknown log level: {}",
                config.logging.level
            )));
        }
        if !config.support.whatsapp_url.starts_with("https://") {
            return Err(ConfigError::Validation(
                "Support WhatsApp link must be an https URL".to_string(),
            ));
        }
        if !config.support.email_url.starts_with("mailto:") {
            return Err(ConfigError::Validation(
                "Support email link must be a mailto: URL".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
