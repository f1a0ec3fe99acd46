//! Configuration System
//!
//! Handles loading configuration from TOML files and environment variables.
//! The config only seeds the initial preferences; changes made in the UI are
//! never written back.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{DashboardResult, SwatchKind};
use crate::layout::{Dashboard, Layout};
use crate::palette::ColorToken;
use crate::preferences::Preferences;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub dashboard: DashboardConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Initial dashboard state
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub layout: Layout,

    #[serde(default = "default_accent")]
    pub accent: ColorToken,

    #[serde(default = "default_background")]
    pub background: ColorToken,

    #[serde(default)]
    pub sidebar_open: bool,
}

fn default_accent() -> ColorToken {
    Preferences::default().accent
}

fn default_background() -> ColorToken {
    Preferences::default().background
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            layout: Layout::default(),
            accent: default_accent(),
            background: default_background(),
            sidebar_open: false,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

/// Accepted values for `logging.format`
pub const LOG_FORMATS: [&str; 2] = ["pretty", "json"];

fn check_log_format(format: &str) -> Result<(), ConfigError> {
    if LOG_FORMATS.contains(&format) {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!(
            "logging.format must be one of {}, got {:?}",
            LOG_FORMATS.join(", "),
            format
        )))
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML text, e.g. a file embedded at build time
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: PathBuf::from("<inline>"),
            error: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Check values serde cannot reject on its own
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_log_format(&self.logging.format)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    #[cfg(feature = "cli")]
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("vitals").join("config.toml")),
            Some(PathBuf::from("./vitals.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from a key lookup. Unparseable values are skipped.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(layout) = lookup("VITALS_LAYOUT") {
            match layout.parse() {
                Ok(l) => self.dashboard.layout = l,
                Err(e) => tracing::warn!("Ignoring VITALS_LAYOUT: {}", e),
            }
        }
        if let Some(accent) = lookup("VITALS_ACCENT") {
            match accent.parse() {
                Ok(t) => self.dashboard.accent = t,
                Err(e) => tracing::warn!("Ignoring VITALS_ACCENT: {}", e),
            }
        }
        if let Some(background) = lookup("VITALS_BACKGROUND") {
            match background.parse() {
                Ok(t) => self.dashboard.background = t,
                Err(e) => tracing::warn!("Ignoring VITALS_BACKGROUND: {}", e),
            }
        }

        if let Some(level) = lookup("VITALS_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("VITALS_LOG_FORMAT") {
            match check_log_format(&format) {
                Ok(()) => self.logging.format = format,
                Err(e) => tracing::warn!("Ignoring VITALS_LOG_FORMAT: {}", e),
            }
        }
    }

    /// Apply command-line choices. Colors are set before anything checks
    /// them against the layout, so a flag can replace a config color the
    /// new layout does not offer.
    pub fn apply_cli_overrides(
        &mut self,
        layout: Option<Layout>,
        accent: Option<&str>,
        background: Option<&str>,
    ) -> DashboardResult<()> {
        if let Some(layout) = layout {
            self.dashboard.layout = layout;
        }
        if let Some(accent) = accent {
            self.dashboard.accent = accent.parse()?;
        }
        if let Some(background) = background {
            self.dashboard.background = background.parse()?;
        }

        let dashboard = self.dashboard();
        let palette = dashboard.palette();
        palette.ensure_offered(SwatchKind::Accent, self.dashboard.accent)?;
        palette.ensure_offered(SwatchKind::Background, self.dashboard.background)?;
        Ok(())
    }

    /// Dashboard for the configured layout
    pub fn dashboard(&self) -> Dashboard {
        Dashboard::for_layout(self.dashboard.layout)
    }

    /// Starting preferences, checked against the layout's palette
    pub fn initial_preferences(&self) -> DashboardResult<Preferences> {
        let dashboard = self.dashboard();
        Preferences::new(
            dashboard.palette(),
            self.dashboard.accent,
            self.dashboard.background,
            self.dashboard.sidebar_open,
        )
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Vitals Configuration
#
# Environment variables override these settings:
# - VITALS_LAYOUT
# - VITALS_ACCENT
# - VITALS_BACKGROUND
# - VITALS_LOG_LEVEL
# - VITALS_LOG_FORMAT

[dashboard]
# Layout: charts (pie chart per tile, sidebar buttons) or compact
# (icon tiles, dropdown pickers, weight goal card)
layout = "charts"

# Initial accent color. charts: teal.600, blue.600, red.600
# compact adds orange.600 and green.600
accent = "teal.600"

# Initial background color. charts: gray.50, blue.50, orange.50
# compact: gray.50, white, blue.50, orange.50, yellow.50
background = "gray.50"

# Start with the sidebar open on small screens
sidebar_open = false

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json
format = "pretty"
"#
    .to_string()
}
