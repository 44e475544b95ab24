// SPDX-License-Identifier: LGPL-3.0-only

//! # Theme Configuration
//!
//! Chooses the palette, the icon theme and the style resources through
//! environment variables, configuration files, and programmatic configuration.
//!
//! ## Environment Variables
//!
//! - `LOOKFEEL_CONFIG`: Path to a TOML configuration file, applied first
//! - `LOOKFEEL_THEME`: The default theme (light, dark, custom:name or file:path)
//! - `LOOKFEEL_THEME_FALLBACK`: Fallback theme if the primary theme fails
//! - `LOOKFEEL_ICON_THEME`: Freedesktop icon theme name
//! - `LOOKFEEL_STYLE` / `LOOKFEEL_FALLBACK_STYLE`: Style resource selectors
//! - `LOOKFEEL_DESKTOP_SETTINGS`: `0` or `false` ignores desktop settings
//!
//! ## Configuration File Format
//!
//! ```toml
//! [theme]
//! default = "dark"
//! fallback = "light"
//! desktop_settings = true
//!
//! [icons]
//! theme = "breeze"
//!
//! [style]
//! name = "material"
//! fallback = "default"
//! paths = ["/usr/share/lookfeel/styles"]
//! ```

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ThemeError};
use crate::loader::ThemeLoader;
use crate::resolver::ThemeResolver;
use crate::Theme;

/// A source for theme configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeSource {
    /// Built-in light palette.
    Light,
    /// Built-in dark palette.
    Dark,
    /// Custom theme looked up by name in the theme directories.
    Custom(String),
    /// Theme loaded from a file.
    File(PathBuf),
}

impl ThemeSource {
    /// Parse a theme source from a string.
    ///
    /// Accepts `light`, `dark`, `custom:<name>`, `file:<path>`; any other
    /// value is treated as a custom theme name.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        match value.to_lowercase().as_str() {
            "light" => Self::Light,
            "dark" => Self::Dark,
            _ => {
                if let Some(name) = value.strip_prefix("custom:") {
                    Self::Custom(name.to_string())
                } else if let Some(path) = value.strip_prefix("file:") {
                    Self::File(PathBuf::from(path))
                } else {
                    Self::Custom(value.to_string())
                }
            },
        }
    }

    /// Load the theme this source names.
    pub fn load(&self) -> Result<Theme, ThemeError> {
        match self {
            Self::Light => ThemeResolver::get_builtin("Light"),
            Self::Dark => ThemeResolver::get_builtin("Dark"),
            Self::Custom(name) => ThemeResolver::resolve(name),
            Self::File(path) => ThemeLoader::load_from_file(path),
        }
    }
}

/// On-disk layout of the configuration file.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ConfigFile {
    /// `[theme]` section.
    #[serde(default)]
    pub theme: ThemeSection,
    /// `[icons]` section.
    #[serde(default)]
    pub icons: IconSection,
    /// `[style]` section.
    #[serde(default)]
    pub style: StyleSection,
}

/// `[theme]` section of the configuration file.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ThemeSection {
    /// Theme to use: `light`, `dark`, or a theme name or file.
    pub default: Option<String>,
    /// Theme used when the default cannot be loaded.
    pub fallback: Option<String>,
    /// Follow the desktop's settings.
    pub desktop_settings: Option<bool>,
}

/// `[icons]` section of the configuration file.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct IconSection {
    /// Icon theme name.
    pub theme: Option<String>,
}

/// `[style]` section of the configuration file.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StyleSection {
    /// Requested style.
    pub name: Option<String>,
    /// Style tried after the requested one.
    pub fallback: Option<String>,
    /// Roots searched for style resources.
    #[serde(default)]
    pub paths: Vec<PathBuf>,
}

/// A theme configuration that can be loaded from various sources.
///
/// # Examples
///
/// ```rust
/// use lookfeel_theme::config::{ThemeConfig, ThemeSource};
///
/// let config = ThemeConfig::new()
///     .with_default_theme(ThemeSource::Dark)
///     .with_fallback_theme(ThemeSource::Light);
///
/// let theme = config.resolve_theme().unwrap();
/// assert_eq!(theme.name(), "Dark");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeConfig {
    /// The default theme source.
    pub default_theme: ThemeSource,
    /// The fallback theme source.
    pub fallback_theme: Option<ThemeSource>,
    /// Freedesktop icon theme name.
    pub icon_theme: Option<String>,
    /// Whether desktop settings (palette, icon theme) are honored.
    pub desktop_settings_aware: bool,
    /// Requested style name for resource selection.
    pub style: Option<String>,
    /// Fallback style name for resource selection.
    pub fallback_style: Option<String>,
    /// Resource roots searched by the style selector.
    pub style_paths: Vec<PathBuf>,
}

impl ThemeConfig {
    /// Create a new theme configuration with default settings.
    pub fn new() -> Self {
        Self {
            default_theme: ThemeSource::Light,
            fallback_theme: Some(ThemeSource::Dark),
            icon_theme: None,
            desktop_settings_aware: true,
            style: None,
            fallback_style: None,
            style_paths: Vec::new(),
        }
    }

    /// Create a theme configuration from environment variables or use defaults.
    ///
    /// A file named by `LOOKFEEL_CONFIG` is applied first; the individual
    /// variables then override it. A broken file is logged and skipped.
    pub fn from_env_or_default() -> Self {
        let mut config = Self::new();

        if let Ok(config_path) = env::var("LOOKFEEL_CONFIG") {
            match Self::read_file(&config_path) {
                Ok(file) => config.apply_file(&file),
                Err(e) => log::warn!("Ignoring configuration {}: {}", config_path, e),
            }
        }

        config.apply_env(|key| env::var(key).ok());
        config
    }

    /// Apply environment overrides, reading variables through `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(theme) = lookup("LOOKFEEL_THEME") {
            self.default_theme = ThemeSource::parse(&theme);
        }
        if let Some(fallback) = lookup("LOOKFEEL_THEME_FALLBACK") {
            self.fallback_theme = Some(ThemeSource::parse(&fallback));
        }
        if let Some(icons) = lookup("LOOKFEEL_ICON_THEME") {
            self.icon_theme = Some(icons);
        }
        if let Some(style) = lookup("LOOKFEEL_STYLE") {
            self.style = Some(style);
        }
        if let Some(style) = lookup("LOOKFEEL_FALLBACK_STYLE") {
            self.fallback_style = Some(style);
        }
        if let Some(flag) = lookup("LOOKFEEL_DESKTOP_SETTINGS") {
            self.desktop_settings_aware = !matches!(flag.trim(), "0" | "false" | "no");
        }
    }

    /// Load theme configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut config = Self::new();
        config.apply_file(&Self::read_file(path)?);
        Ok(config)
    }

    /// Load theme configuration from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let mut config = Self::new();
        config.merge_toml(content)?;
        Ok(config)
    }

    /// Parse TOML content and apply the fields it sets on top of `self`.
    pub fn merge_toml(&mut self, content: &str) -> Result<(), ConfigError> {
        let file: ConfigFile = toml::from_str(content)?;
        self.apply_file(&file);
        Ok(())
    }

    fn read_file<P: AsRef<Path>>(path: P) -> Result<ConfigFile, ConfigError> {
        let path = path.as_ref();
        if path.extension().and_then(|s| s.to_str()) != Some("toml") {
            return Err(ConfigError::UnsupportedFormat(path.to_path_buf()));
        }
        let content =
            fs::read_to_string(path).map_err(|e| ConfigError::Read(path.to_path_buf(), e))?;
        Ok(toml::from_str(&content)?)
    }

    /// Apply only the fields a parsed file sets.
    pub fn apply_file(&mut self, file: &ConfigFile) {
        if let Some(default) = &file.theme.default {
            self.default_theme = ThemeSource::parse(default);
        }
        if let Some(fallback) = &file.theme.fallback {
            self.fallback_theme = Some(ThemeSource::parse(fallback));
        }
        if let Some(aware) = file.theme.desktop_settings {
            self.desktop_settings_aware = aware;
        }
        if let Some(icons) = &file.icons.theme {
            self.icon_theme = Some(icons.clone());
        }
        if let Some(name) = &file.style.name {
            self.style = Some(name.clone());
        }
        if let Some(fallback) = &file.style.fallback {
            self.fallback_style = Some(fallback.clone());
        }
        if !file.style.paths.is_empty() {
            self.style_paths = file.style.paths.clone();
        }
    }

    /// Set the default theme source.
    pub fn with_default_theme(mut self, theme: ThemeSource) -> Self {
        self.default_theme = theme;
        self
    }

    /// Set the fallback theme source.
    pub fn with_fallback_theme(mut self, theme: ThemeSource) -> Self {
        self.fallback_theme = Some(theme);
        self
    }

    /// Set the icon theme name.
    pub fn with_icon_theme(mut self, name: impl Into<String>) -> Self {
        self.icon_theme = Some(name.into());
        self
    }

    /// Set the requested style and its fallback.
    pub fn with_style(mut self, name: impl Into<String>, fallback: Option<String>) -> Self {
        self.style = Some(name.into());
        self.fallback_style = fallback;
        self
    }

    /// Resolve the configured theme, trying the fallback when the default fails.
    pub fn resolve_theme(&self) -> Result<Theme, ThemeError> {
        match self.default_theme.load() {
            Ok(theme) => Ok(theme),
            Err(err) => match &self.fallback_theme {
                Some(fallback) => {
                    log::warn!(
                        "Failed to load theme {:?}: {}. Using fallback {:?}",
                        self.default_theme,
                        err,
                        fallback
                    );
                    fallback.load()
                },
                None => Err(err),
            },
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn parses_theme_sources() {
        assert_eq!(ThemeSource::parse("Dark"), ThemeSource::Dark);
        assert_eq!(ThemeSource::parse("custom:Nord"), ThemeSource::Custom("Nord".into()));
        assert_eq!(
            ThemeSource::parse("file:/tmp/t.toml"),
            ThemeSource::File(PathBuf::from("/tmp/t.toml"))
        );
        assert_eq!(ThemeSource::parse("Nord"), ThemeSource::Custom("Nord".into()));
    }

    #[test]
    fn toml_fields_override_defaults() {
        let config = ThemeConfig::from_toml(
            r#"
            [theme]
            default = "dark"
            desktop_settings = false

            [style]
            name = "material"
            paths = ["/opt/styles"]
            "#,
        )
        .unwrap();

        assert_eq!(config.default_theme, ThemeSource::Dark);
        assert_eq!(config.fallback_theme, Some(ThemeSource::Dark));
        assert!(!config.desktop_settings_aware);
        assert_eq!(config.style.as_deref(), Some("material"));
        assert_eq!(config.style_paths, vec![PathBuf::from("/opt/styles")]);
    }

    #[test]
    fn env_overrides_file_values() {
        let vars: HashMap<&str, &str> = [
            ("LOOKFEEL_THEME", "light"),
            ("LOOKFEEL_ICON_THEME", "breeze"),
            ("LOOKFEEL_DESKTOP_SETTINGS", "0"),
        ]
        .into_iter()
        .collect();

        let mut config = ThemeConfig::from_toml("[theme]\ndefault = \"dark\"\n").unwrap();
        config.apply_env(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.default_theme, ThemeSource::Light);
        assert_eq!(config.icon_theme.as_deref(), Some("breeze"));
        assert!(!config.desktop_settings_aware);
    }

    #[test]
    fn fallback_is_used_when_default_fails() {
        let config = ThemeConfig::new()
            .with_default_theme(ThemeSource::File(PathBuf::from("/nonexistent/theme.toml")))
            .with_fallback_theme(ThemeSource::Dark);
        assert_eq!(config.resolve_theme().unwrap().name(), "Dark");
    }

    #[test]
    fn rejects_non_toml_files() {
        assert!(matches!(
            ThemeConfig::from_file("settings.json"),
            Err(ConfigError::UnsupportedFormat(_))
        ));
    }
}
