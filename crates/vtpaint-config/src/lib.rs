//! vtpaint Config
//!
//! This crate loads named style definitions from TOML so that
//! applications can keep their palette out of code.
//!
//! # Overview
//!
//! Configuration is loaded from platform-specific locations:
//! - Linux: `~/.config/vtpaint/config.toml`
//! - macOS: `~/Library/Application Support/vtpaint/config.toml`
//! - Windows: `%APPDATA%\vtpaint\config.toml`
//!
//! # Example
//!
//! ```
//! use vtpaint_config::Config;
//!
//! let config = Config::default();
//! let heading = config.style("heading").unwrap();
//! assert!(heading.is_bold());
//! ```

mod style;

pub use style::StyleConfig;

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use vtpaint_ansi::Style;
use vtpaint_core::{Result, VtpaintError};

/// Default TOML configuration string.
const DEFAULT_TOML: &str = r##"[styles.heading]
fg        = "bright-magenta"
bold      = true
underline = true

[styles.success]
fg   = "green"
bold = true

[styles.warning]
fg = "#FFA500"

[styles.error]
fg   = "bright-white"
bg   = "red"
bold = true

[styles.muted]
fg    = "bright-black"
faint = true
"##;

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Named styles, keyed by name.
    #[serde(default)]
    pub styles: BTreeMap<String, StyleConfig>,
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_TOML).expect("Default TOML should be valid")
    }
}

impl Config {
    /// Returns the default TOML configuration string.
    ///
    /// # Example
    ///
    /// ```
    /// use vtpaint_config::Config;
    /// assert!(Config::default_toml().contains("[styles.heading]"));
    /// ```
    pub fn default_toml() -> &'static str {
        DEFAULT_TOML
    }

    /// Returns the platform-specific configuration file path.
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Returns the platform-specific configuration directory.
    pub fn config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "vtpaint")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Ensures the config file exists, creating it with defaults if not.
    ///
    /// # Returns
    ///
    /// The path to the config file.
    pub fn ensure_config_file() -> Result<PathBuf> {
        let config_dir = Self::config_dir()
            .ok_or_else(|| VtpaintError::Config("Could not determine config directory".into()))?;

        Self::ensure_config_file_in(&config_dir)
    }

    /// Like [`Config::ensure_config_file`], but under `config_dir`.
    ///
    /// An existing `config.toml` is left untouched.
    pub fn ensure_config_file_in(config_dir: &Path) -> Result<PathBuf> {
        std::fs::create_dir_all(config_dir)?;

        let config_path = config_dir.join("config.toml");
        if !config_path.exists() {
            std::fs::write(&config_path, DEFAULT_TOML)?;
            debug!("Wrote default config to {}", config_path.display());
        }

        Ok(config_path)
    }

    /// Load configuration from the default platform-specific path.
    ///
    /// If no config file exists, returns the default configuration.
    pub fn load() -> Result<Self> {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                debug!("Loading config from {}", config_path.display());
                return Self::load_from(&config_path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            VtpaintError::Config(format!("Parse error in {}: {}", path.display(), e))
        })
    }

    /// Load configuration with an optional override file or string.
    ///
    /// If `override_config` names an existing file it is read, otherwise it
    /// is parsed as inline TOML. The override is merged over the base config.
    ///
    /// ```no_run
    /// use vtpaint_config::Config;
    ///
    /// let config = Config::load_with_override(Some("[styles.title]\nbold = true")).unwrap();
    /// assert!(config.style("title").unwrap().is_bold());
    /// ```
    pub fn load_with_override(override_config: Option<&str>) -> Result<Self> {
        let mut config = Self::load()?;

        if let Some(override_str) = override_config {
            let override_path = Path::new(override_str);

            let override_toml = if override_path.exists() {
                debug!("Merging config from file: {}", override_path.display());
                std::fs::read_to_string(override_path)?
            } else {
                debug!("Merging inline config");
                override_str.to_string()
            };

            let override_config: Config = toml::from_str(&override_toml)
                .map_err(|e| VtpaintError::Config(format!("Override parse error: {}", e)))?;

            config.merge(&override_config);
        }

        Ok(config)
    }

    /// Merge another config into this one.
    ///
    /// Styles in `other` replace same-named styles in `self` wholesale;
    /// individual fields are not combined.
    pub fn merge(&mut self, other: &Config) {
        for (name, style) in &other.styles {
            self.styles.insert(name.clone(), style.clone());
        }
    }

    /// Save configuration to a file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| VtpaintError::Config(format!("Serialization error: {}", e)))?;
        std::fs::write(path, toml_string)?;
        Ok(())
    }

    /// Resolve a named style.
    ///
    /// # Errors
    ///
    /// `VtpaintError::UnknownStyle` if no style has that name, or
    /// `VtpaintError::Color` if its colors do not parse.
    pub fn style(&self, name: &str) -> Result<Style> {
        self.styles
            .get(name)
            .ok_or_else(|| VtpaintError::UnknownStyle(name.to_string()))?
            .to_style()
    }

    /// Resolve a named style, falling back to a plain style.
    pub fn style_or_plain(&self, name: &str) -> Style {
        self.style(name).unwrap_or_default()
    }

    /// Resolve every named style.
    pub fn styles(&self) -> Result<BTreeMap<String, Style>> {
        self.styles
            .iter()
            .map(|(name, config)| Ok((name.clone(), config.to_style()?)))
            .collect()
    }
}
