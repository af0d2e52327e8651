//! Configuration management for cleanquote
//!
//! Config stored at: ~/.config/cleanquote/config.json

use clap::ValueEnum;
use cleanquote_domain::service::ValidationPolicy;
use cleanquote_types::{ConfigError, OutputFormat, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Which pricing path answers quote requests
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EstimateSource {
    /// Regression formula evaluated in-process
    #[default]
    Local,
    /// Backend pricing endpoint
    Remote,
}

impl std::fmt::Display for EstimateSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EstimateSource::Local => write!(f, "local"),
            EstimateSource::Remote => write!(f, "remote"),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Pricing path used by `quote`
    #[serde(default)]
    pub estimate_source: EstimateSource,

    /// Base URL of the backend API
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Remote request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Default output format (json, table)
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Input validation applied before pricing
    #[serde(default)]
    pub validation: ValidationPolicy,

    /// Allowed relative price difference between local and remote quotes
    #[serde(default = "default_tolerance_pct")]
    pub contract_tolerance_pct: f64,

    /// UI state directory override
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

fn default_api_base_url() -> String {
    "http://localhost:3000/api".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_tolerance_pct() -> f64 {
    10.0
}

fn check_timeout(secs: u64) -> Result<()> {
    if secs == 0 {
        return Err(ConfigError::InvalidValue("timeout_secs must be at least 1".to_string()).into());
    }
    Ok(())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            estimate_source: EstimateSource::default(),
            api_base_url: default_api_base_url(),
            timeout_secs: default_timeout_secs(),
            output_format: OutputFormat::default(),
            validation: ValidationPolicy::default(),
            contract_tolerance_pct: default_tolerance_pct(),
            data_dir: None,
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("cleanquote");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Get the UI state directory path
    pub fn data_dir(&self) -> Result<PathBuf> {
        if let Some(ref dir) = self.data_dir {
            return Ok(dir.clone());
        }

        let data_dir = dirs::data_dir()
            .ok_or(ConfigError::NotFound)?
            .join("cleanquote");
        Ok(data_dir)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Set the remote timeout. Zero would fail every request, so it is refused.
    pub fn set_timeout_secs(&mut self, secs: u64) -> Result<()> {
        check_timeout(secs)?;
        self.timeout_secs = secs;
        Ok(())
    }

    /// Load config from the default location, or fall back to defaults
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)
            .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;
        check_timeout(config.timeout_secs)?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .map_err(|e| ConfigError::SaveError(format!("{}: {}", path.display(), e)))?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Cleanquote Configuration")?;
        writeln!(f, "========================")?;
        writeln!(f)?;
        writeln!(f, "Estimate source:  {}", self.estimate_source)?;
        writeln!(f, "API base URL:     {}", self.api_base_url)?;
        writeln!(f, "Timeout:          {}s", self.timeout_secs)?;
        writeln!(f, "Output format:    {}", self.output_format)?;
        writeln!(f, "Validation:       {}", self.validation)?;
        writeln!(f, "Tolerance:        {:.1}%", self.contract_tolerance_pct)?;
        writeln!(
            f,
            "Data dir:         {}",
            self.data_dir()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| "(error)".to_string())
        )?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:      {}", path.display())?;
        }

        Ok(())
    }
}
