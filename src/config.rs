//! Field configuration: scoring policy, debounce and visual theme.
//!
//! Configuration is read from a TOML file. The path comes from the
//! `PWD_FIELD_CONFIG` environment variable, or `./assets/password_field.toml`
//! when unset.
//!
//! # Example Configuration
//!
//! ```toml
//! policy = "composite"        # or "length_only"
//! debounce_ms = 300
//!
//! [theme]
//! title = "Enter Password"
//! font_size = 14.0
//!
//! [theme.labels]
//! weak = "Too weak"
//! medium = "Could be stronker"
//! strong = "Too stronk!"
//!
//! [theme.colors.weak]
//! hue = 0.0
//! saturation = 0.6
//! brightness = 0.9
//!
//! [theme.layout]
//! standard_margin = 8.0
//! indicator_width = 60.0
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::policy::ScoringPolicy;
use crate::strength::StrengthTier;

/// Environment variable holding a custom config path.
pub const CONFIG_PATH_ENV: &str = "PWD_FIELD_CONFIG";

const DEFAULT_CONFIG_PATH: &str = "./assets/password_field.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level configuration passed to [`PasswordField::new`](crate::PasswordField::new).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub policy: ScoringPolicy,
    /// Delay before an async evaluation starts, in milliseconds.
    pub debounce_ms: u64,
    pub theme: Theme,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            policy: ScoringPolicy::default(),
            debounce_ms: 300,
            theme: Theme::default(),
        }
    }
}

impl FieldConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// Visual constants of the field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub title: String,
    pub font_size: f64,
    pub labels: StrengthLabels,
    pub colors: Palette,
    pub layout: Layout,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            title: "Enter Password".to_string(),
            font_size: 14.0,
            labels: StrengthLabels::default(),
            colors: Palette::default(),
            layout: Layout::default(),
        }
    }
}

/// Description shown next to the indicator for each tier.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StrengthLabels {
    pub weak: String,
    pub medium: String,
    pub strong: String,
}

impl Default for StrengthLabels {
    fn default() -> Self {
        Self {
            weak: "Too weak".to_string(),
            medium: "Could be stronker".to_string(),
            strong: "Too stronk!".to_string(),
        }
    }
}

impl StrengthLabels {
    pub fn for_tier(&self, tier: StrengthTier) -> &str {
        match tier {
            StrengthTier::Weak => &self.weak,
            StrengthTier::Medium => &self.medium,
            StrengthTier::Strong => &self.strong,
        }
    }
}

/// Color in hue/saturation/brightness/alpha form, each in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Hsba {
    pub hue: f64,
    pub saturation: f64,
    pub brightness: f64,
    #[serde(default = "opaque")]
    pub alpha: f64,
}

fn opaque() -> f64 {
    1.0
}

impl Hsba {
    pub const fn new(hue: f64, saturation: f64, brightness: f64) -> Self {
        Self {
            hue,
            saturation,
            brightness,
            alpha: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Indicator segments that are not lit.
    pub unused: Hsba,
    pub weak: Hsba,
    pub medium: Hsba,
    pub strong: Hsba,
    pub label_text: Hsba,
    pub border: Hsba,
    pub background: Hsba,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            unused: Hsba::new(210.0 / 360.0, 0.05, 0.86),
            weak: Hsba::new(0.0, 0.60, 0.90),
            medium: Hsba::new(39.0 / 360.0, 0.60, 0.90),
            strong: Hsba::new(132.0 / 360.0, 0.60, 0.75),
            label_text: Hsba::new(233.0 / 360.0, 0.16, 0.41),
            border: Hsba::new(208.0 / 360.0, 0.80, 0.94),
            background: Hsba::new(0.0, 0.0, 0.97),
        }
    }
}

impl Palette {
    pub fn for_tier(&self, tier: StrengthTier) -> Hsba {
        match tier {
            StrengthTier::Weak => self.weak,
            StrengthTier::Medium => self.medium,
            StrengthTier::Strong => self.strong,
        }
    }
}

/// Layout constants in points.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Layout {
    pub standard_margin: f64,
    pub text_field_container_height: f64,
    pub text_field_margin: f64,
    pub indicator_width: f64,
    pub indicator_height: f64,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            standard_margin: 8.0,
            text_field_container_height: 50.0,
            text_field_margin: 15.0,
            indicator_width: 60.0,
            indicator_height: 5.0,
        }
    }
}

/// Returns the config file path.
///
/// Priority:
/// 1. Environment variable `PWD_FIELD_CONFIG`
/// 2. Default path `./assets/password_field.toml`
pub fn get_config_path() -> PathBuf {
    std::env::var(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH))
}

/// Loads the configuration from the resolved config path.
///
/// A missing file yields the default configuration. A file that exists but
/// cannot be read or parsed is an error.
pub fn load_config() -> Result<FieldConfig, ConfigError> {
    let path = get_config_path();
    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::info!("No config at {:?}, using defaults", path);
        return Ok(FieldConfig::default());
    }
    load_config_from(&path)
}

/// Loads the configuration from a specific file path.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File is not valid TOML for [`FieldConfig`]
pub fn load_config_from<P: AsRef<Path>>(path: P) -> Result<FieldConfig, ConfigError> {
    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Config loading FAILED: FileNotFound {:?}", path);
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: FieldConfig = toml::from_str(&content).map_err(|e| {
        #[cfg(feature = "tracing")]
        tracing::error!("Config loading FAILED: invalid TOML in {:?}", path);
        ConfigError::Parse(e)
    })?;

    #[cfg(feature = "tracing")]
    tracing::info!("Config loaded from {:?} (policy: {:?})", path, config.policy);

    Ok(config)
}
