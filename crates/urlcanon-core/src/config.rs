use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::processor::{UrlProcessor, DEFAULT_REDIRECT_HOST};
use crate::url_model;

/// Global configuration loaded from `~/.config/urlcanon/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlcanonConfig {
    /// Host forced by the `redirection` rule. Must be a bare host name (no port or path).
    #[serde(default = "default_redirect_host")]
    pub redirect_host: String,
}

fn default_redirect_host() -> String {
    DEFAULT_REDIRECT_HOST.to_string()
}

impl Default for UrlcanonConfig {
    fn default() -> Self {
        Self {
            redirect_host: default_redirect_host(),
        }
    }
}

impl UrlcanonConfig {
    /// Rejects settings the processor cannot honor.
    pub fn validate(&self) -> Result<()> {
        if self.redirect_host.is_empty() {
            anyhow::bail!("redirect_host must not be empty");
        }
        url_model::validate_host(&self.redirect_host)
            .with_context(|| format!("invalid redirect_host {:?}", self.redirect_host))?;
        Ok(())
    }

    /// Processor configured with this redirect host.
    pub fn processor(&self) -> UrlProcessor {
        UrlProcessor::new(self.redirect_host.clone())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlcanon")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<UrlcanonConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = UrlcanonConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load and validate configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<UrlcanonConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config file: {}", path.display()))?;
    let cfg: UrlcanonConfig = toml::from_str(&data)
        .with_context(|| format!("parse config TOML: {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}
