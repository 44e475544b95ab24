// SPDX-License-Identifier: LGPL-3.0-only

//! Layered settings read from `config.toml` in the XDG directories.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use lookfeel_theme::config::ThemeConfig;
use lookfeel_theme::ConfigError;
use serde::Deserialize;
use smol::fs;
use thiserror::Error;
use xdg::BaseDirectories;

use crate::platform::XdgPlatformTheme;
use crate::selector::StyleSelector;

/// Prefix of the XDG directories searched for `config.toml`.
pub const XDG_PREFIX: &str = "lookfeel";

/// Name of the settings file in every XDG directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Errors while loading settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The XDG base directories could not be determined.
    #[error("Cannot determine XDG base directories: {0}")]
    Xdg(#[from] xdg::BaseDirectoriesError),

    /// A settings file could not be read.
    #[error("Failed to read settings file {0}: {1}")]
    Read(PathBuf, std::io::Error),

    /// A settings file is not valid TOML.
    #[error("Failed to parse settings file {0}: {1}")]
    Parse(PathBuf, toml::de::Error),

    /// A settings file has an invalid theme section.
    #[error("Invalid theme settings in {0}: {1}")]
    Theme(PathBuf, ConfigError),
}

/// Settings outside the theme, style and icon sections.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralSettings,
    /// Sections this crate does not interpret, including the theme sections.
    #[serde(flatten)]
    pub other: HashMap<String, toml::Value>,
}

/// The `[general]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneralSettings {
    /// Enables debug output when set.
    pub debug: Option<bool>,
    /// Log filter such as `info` or `lookfeel=debug`.
    pub log_level: Option<String>,
}

/// Layered settings read from the XDG directories.
///
/// Later files override the fields they set. The environment overrides
/// every file.
pub struct SettingsRegistry {
    config: Config,
    /// Theme, icon and style settings.
    pub theme_config: ThemeConfig,
    loaded: Vec<PathBuf>,
}

impl SettingsRegistry {
    /// Create a registry and load settings from the standard locations.
    pub async fn new() -> Result<Self, SettingsError> {
        let mut registry = Self::empty();
        registry.load().await?;
        Ok(registry)
    }

    /// A registry holding only built-in defaults.
    pub fn empty() -> Self {
        Self {
            config: Config {
                general: GeneralSettings {
                    debug: Some(false),
                    log_level: None,
                },
                other: HashMap::new(),
            },
            theme_config: ThemeConfig::new(),
            loaded: Vec::new(),
        }
    }

    /// Load settings in precedence order, then apply the environment.
    ///
    /// Order (later overrides earlier):
    /// 1. System data: `$XDG_DATA_DIRS/lookfeel/config.toml`
    /// 2. System config: `$XDG_CONFIG_DIRS/lookfeel/config.toml`
    /// 3. User config: `$XDG_CONFIG_HOME/lookfeel/config.toml`
    ///
    /// Unreadable or invalid files are logged and skipped.
    pub async fn load(&mut self) -> Result<(), SettingsError> {
        let xdg_dirs = BaseDirectories::with_prefix(XDG_PREFIX)?;
        for path in candidate_files(&xdg_dirs) {
            if let Err(e) = self.load_file(&path).await {
                log::warn!("{}", e);
            }
        }
        self.theme_config.apply_env(|key| std::env::var(key).ok());
        Ok(())
    }

    /// Load explicit files in order, reporting each result.
    pub async fn load_from_paths_async(&mut self, paths: Vec<PathBuf>) -> Vec<Result<(), SettingsError>> {
        let mut results = Vec::with_capacity(paths.len());
        for path in paths {
            results.push(self.load_file(&path).await);
        }
        results
    }

    /// Reset to defaults and load the standard locations again.
    pub async fn reload_async(&mut self) -> Result<(), SettingsError> {
        *self = Self::empty();
        self.load().await
    }

    async fn load_file(&mut self, path: &Path) -> Result<(), SettingsError> {
        log::debug!("Loading settings from: {:?}", path);
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| SettingsError::Read(path.to_path_buf(), e))?;
        self.merge_str(path, &content)
    }

    /// Merge one file's content. Nothing is applied if any part is invalid.
    fn merge_str(&mut self, path: &Path, content: &str) -> Result<(), SettingsError> {
        let config: Config =
            toml::from_str(content).map_err(|e| SettingsError::Parse(path.to_path_buf(), e))?;
        let mut theme_config = self.theme_config.clone();
        theme_config
            .merge_toml(content)
            .map_err(|e| SettingsError::Theme(path.to_path_buf(), e))?;

        self.merge(config);
        self.theme_config = theme_config;
        self.loaded.push(path.to_path_buf());
        Ok(())
    }

    fn merge(&mut self, other: Config) {
        if let Some(debug) = other.general.debug {
            self.config.general.debug = Some(debug);
        }
        if other.general.log_level.is_some() {
            self.config.general.log_level = other.general.log_level;
        }
        self.config.other.extend(other.other);
    }

    /// Get the current configuration.
    pub fn get(&self) -> &Config {
        &self.config
    }

    /// Files merged so far, in merge order.
    pub fn loaded_files(&self) -> &[PathBuf] {
        &self.loaded
    }

    /// A platform bridge for the current settings.
    pub fn platform_theme(&self) -> XdgPlatformTheme {
        XdgPlatformTheme::from_config(&self.theme_config)
    }

    /// A style-resource selector for the current settings, falling back
    /// to the resources of the style plugin named `plugin_name`.
    pub fn style_selector(&self, plugin_name: &str) -> StyleSelector {
        StyleSelector::from_config(&self.theme_config, plugin_name)
    }
}

/// Settings files in merge order, without repeats.
fn candidate_files(xdg_dirs: &BaseDirectories) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = xdg_dirs.find_data_files(CONFIG_FILE).collect();
    files.reverse();
    let mut config_files: Vec<PathBuf> = xdg_dirs.find_config_files(CONFIG_FILE).collect();
    config_files.reverse();
    files.extend(config_files);

    let user = xdg_dirs.get_config_home().join(CONFIG_FILE);
    if user.is_file() {
        files.push(user);
    }

    let mut seen = Vec::new();
    for file in files.into_iter().rev() {
        if !seen.contains(&file) {
            seen.push(file);
        }
    }
    seen.reverse();
    seen
}
