// File: src/config.rs
// Purpose: Configuration parsing from innkeep.toml

use anyhow::{Context, Result};
use innkeep_pricing::{DiscountTable, Season};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub pricing: PricingConfig,

    #[serde(default)]
    pub submission: SubmissionConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Booking summary defaults
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PricingConfig {
    /// Tax rate prefilled on a new booking, in percent
    #[serde(default = "default_tax_rate")]
    pub default_tax_rate: f64,

    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Code -> percentage; each percentage must lie in 0..=100
    #[serde(default)]
    pub discount_codes: DiscountTable,

    #[serde(default)]
    pub seasons: Vec<Season>,
}

/// Timings of the submission modal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubmissionConfig {
    /// Simulated round trip before the submitter is called
    #[serde(default = "default_submit_delay_ms")]
    pub submit_delay_ms: u64,

    /// How long the success message stays up before the modal closes
    #[serde(default = "default_close_delay_ms")]
    pub close_delay_ms: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` takes precedence
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default values
fn default_tax_rate() -> f64 {
    18.0
}

fn default_currency_symbol() -> String {
    "₹".to_string()
}

fn default_submit_delay_ms() -> u64 {
    1000
}

fn default_close_delay_ms() -> u64 {
    1500
}

fn default_log_level() -> String {
    "info".to_string()
}

// Default implementations
impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            default_tax_rate: default_tax_rate(),
            currency_symbol: default_currency_symbol(),
            discount_codes: DiscountTable::default(),
            seasons: Vec::new(),
        }
    }
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: default_submit_delay_ms(),
            close_delay_ms: default_close_delay_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl SubmissionConfig {
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn close_delay(&self) -> Duration {
        Duration::from_millis(self.close_delay_ms)
    }
}

/// Where a loaded configuration came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    File,
    /// No file at the path; defaults apply
    Missing,
    /// The file holds nothing but whitespace; defaults apply
    Empty,
}

impl ConfigSource {
    /// Report a fallback to defaults; call once a subscriber is installed
    pub fn log(self, path: &Path) {
        match self {
            ConfigSource::File => tracing::debug!(path = %path.display(), "config loaded"),
            ConfigSource::Missing => {
                tracing::debug!(path = %path.display(), "no config file, using defaults")
            }
            ConfigSource::Empty => {
                tracing::warn!(path = %path.display(), "config file is empty, using defaults")
            }
        }
    }
}

impl Config {
    /// Load configuration from innkeep.toml
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let (config, source) = Self::read(path)?;
        source.log(path);
        Ok(config)
    }

    /// Load without logging, telling the caller whether defaults were used
    pub fn read(path: impl AsRef<Path>) -> Result<(Self, ConfigSource)> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok((Self::default(), ConfigSource::Missing));
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok((Self::default(), ConfigSource::Empty));
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok((config, ConfigSource::File))
    }

    /// Load configuration from default path (./innkeep.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("innkeep.toml")
    }
}
