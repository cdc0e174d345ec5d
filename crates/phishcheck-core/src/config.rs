use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// HTTP listener settings (`[server]` section).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind the HTTP API to.
    pub bind: String,
    /// TCP port for the HTTP API.
    pub port: u16,
    /// Origins allowed by CORS. Empty means any origin.
    pub cors_allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".to_string(),
            port: 5000,
            cors_allowed_origins: Vec::new(),
        }
    }
}

/// Trained model artifact location (`[model]` section).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Path to the model JSON; if missing, `$XDG_DATA_HOME/phishcheck/model.json`.
    pub path: Option<PathBuf>,
    /// Expected SHA-256 of the model file. Loading fails on mismatch.
    pub sha256: Option<String>,
}

/// Global configuration loaded from `~/.config/phishcheck/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhishcheckConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub model: ModelConfig,
}

impl PhishcheckConfig {
    /// Model path from config, or the XDG data default.
    pub fn model_path(&self) -> Result<PathBuf> {
        match &self.model.path {
            Some(p) => Ok(p.clone()),
            None => default_model_path(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("phishcheck")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

pub fn default_model_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("phishcheck")?;
    Ok(xdg_dirs.get_data_home().join("model.json"))
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<PhishcheckConfig> {
    load_or_init_at(&config_path()?)
}

/// Same as [`load_or_init`] for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<PhishcheckConfig> {
    if !path.exists() {
        let default_cfg = PhishcheckConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: PhishcheckConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
