//! Configuration loader
//!
//! Handles loading configuration from default values, a TOML file and
//! environment variables, then validates the result.

use std::env;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};

use birdsearch_domain::error::{Error, Result};

use crate::config::AppConfig;
use crate::constants::{
    CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME,
};
use crate::di::factory::{embedding_providers, record_sources};
use crate::error_ext::ErrorContext;
use crate::logging::parse_log_level;

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Explicit configuration file path
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self { config_path: None }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Load configuration from all sources
    ///
    /// Configuration sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file: the explicit path, which must exist, or
    ///    the first default location found
    /// 3. Environment variables with prefix (e.g., `BIRDSEARCH__SERVER__PORT`)
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(path) = self.resolve_config_file()? {
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(
            Env::prefixed(&format!("{CONFIG_ENV_PREFIX}{CONFIG_ENV_SEPARATOR}"))
                .split(CONFIG_ENV_SEPARATOR),
        );

        let app_config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_app_config(&app_config)?;

        Ok(app_config)
    }

    /// File that `load` reads, if any
    pub fn resolve_config_file(&self) -> Result<Option<PathBuf>> {
        match &self.config_path {
            Some(path) if path.is_file() => Ok(Some(path.clone())),
            Some(path) => Err(Error::config(format!(
                "Configuration file not found: {}",
                path.display()
            ))),
            None => Ok(Self::find_default_config_path()),
        }
    }

    /// Find the first existing default configuration file
    fn find_default_config_path() -> Option<PathBuf> {
        let mut candidates = Vec::new();
        if let Ok(current_dir) = env::current_dir() {
            candidates.push(current_dir.join(DEFAULT_CONFIG_FILENAME));
            candidates.push(
                current_dir
                    .join(DEFAULT_CONFIG_DIR)
                    .join(DEFAULT_CONFIG_FILENAME),
            );
        }
        if let Some(config_dir) = dirs::config_dir() {
            candidates.push(
                config_dir
                    .join(DEFAULT_CONFIG_DIR)
                    .join(DEFAULT_CONFIG_FILENAME),
            );
        }

        candidates.into_iter().find(|path| path.is_file())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate application configuration
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_server_config(config)?;
    validate_record_source_config(config)?;
    validate_embedding_config(config)?;
    parse_log_level(&config.logging.level)?;
    Ok(())
}

fn validate_server_config(config: &AppConfig) -> Result<()> {
    if config.server.host.trim().is_empty() {
        return Err(Error::config("Server host cannot be empty"));
    }
    if config.server.port == 0 {
        return Err(Error::config("Server port cannot be 0"));
    }
    Ok(())
}

fn validate_record_source_config(config: &AppConfig) -> Result<()> {
    let source = &config.record_source;
    match source.provider.to_lowercase().as_str() {
        record_sources::BLOB => {
            require("record_source.url", source.url.as_deref())?;
            require(
                "record_source.container_name",
                source.container_name.as_deref(),
            )?;
            require("record_source.file_name", source.file_name.as_deref())?;
        }
        record_sources::FILE => {
            let path = source.path.as_deref().and_then(Path::to_str);
            require("record_source.path", path)?;
        }
        other => {
            return Err(Error::config(format!("Unknown record source: {other}")));
        }
    }
    if source.timeout_secs == 0 {
        return Err(Error::config("record_source.timeout_secs cannot be 0"));
    }
    Ok(())
}

fn validate_embedding_config(config: &AppConfig) -> Result<()> {
    let embedding = &config.embedding;
    match embedding.provider.to_lowercase().as_str() {
        embedding_providers::AZURE_OPENAI => {
            require("embedding.endpoint", embedding.endpoint.as_deref())?;
            require("embedding.deployment", embedding.deployment.as_deref())?;
        }
        embedding_providers::OPENAI => {
            require("embedding.api_key", embedding.api_key.as_deref())?;
        }
        embedding_providers::NULL => {}
        other => {
            return Err(Error::config(format!("Unknown embedding provider: {other}")));
        }
    }
    if embedding.timeout_secs == 0 {
        return Err(Error::config("embedding.timeout_secs cannot be 0"));
    }
    if embedding.concurrency == 0 {
        return Err(Error::config("embedding.concurrency cannot be 0"));
    }
    Ok(())
}

/// Fail unless a required key holds a non-blank value
fn require(key: &str, value: Option<&str>) -> Result<()> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(()),
        _ => Err(Error::config(format!("{key} not configured"))),
    }
}
