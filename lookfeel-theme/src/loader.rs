// SPDX-License-Identifier: LGPL-3.0-only

//! Theme loader for TOML palette files.

use std::path::{Path, PathBuf};

use super::error::ThemeError;
use super::roles::{ColorGroup, ColorRole};
use super::util::{parse_hex_color, to_hex_color};
use super::Theme;

/// Theme loader for loading palettes from TOML files.
///
/// `[Colors]` applies to every group; `[Active]`, `[Inactive]` and
/// `[Disabled]` override single groups.
pub struct ThemeLoader;

impl ThemeLoader {
    /// Load a theme from a TOML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Theme, ThemeError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ThemeError::NotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)
            .map_err(|e| ThemeError::ReadError(path.to_path_buf(), e))?;

        Self::load_from_toml(&content, path)
    }

    /// Load a theme from TOML content.
    ///
    /// `path` is only used for error reporting and to derive a theme name.
    pub fn load_from_toml<P: AsRef<Path>>(content: &str, path: P) -> Result<Theme, ThemeError> {
        let path = path.as_ref();
        let table: toml::Value = toml::from_str(content)
            .map_err(|e| ThemeError::ParseError(path.to_path_buf(), e.to_string()))?;

        let name = table
            .get("Name")
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| Self::name_from_path(path));
        let mut theme = Theme::new(name);

        // Parse [Colors] section
        if let Some(colors) = table.get("Colors").and_then(|v| v.as_table()) {
            for (key, value) in colors.iter() {
                if let Some(role) = Self::role_for(key, value) {
                    let color = parse_hex_color(value.as_str().unwrap_or_default())?;
                    theme.set_color_all(role, color);
                }
            }
        }

        // Parse per-group sections
        for group in ColorGroup::ALL {
            if let Some(colors) = table.get(group.as_str()).and_then(|v| v.as_table()) {
                for (key, value) in colors.iter() {
                    if let Some(role) = Self::role_for(key, value) {
                        let color = parse_hex_color(value.as_str().unwrap_or_default())?;
                        theme.set_color(*group, role, color);
                    }
                }
            }
        }

        Ok(theme)
    }

    /// Serialize a theme back to the TOML layout `load_from_toml` reads.
    pub fn to_toml(theme: &Theme) -> String {
        let mut out = format!("Name = \"{}\"\n", theme.name());
        for group in ColorGroup::ALL {
            let mut section = String::new();
            for (g, role, color) in theme.colors() {
                if g == *group {
                    section.push_str(&format!("{} = \"{}\"\n", role.as_str(), to_hex_color(color)));
                }
            }
            if !section.is_empty() {
                out.push_str(&format!("\n[{}]\n{}", group.as_str(), section));
            }
        }
        out
    }

    fn role_for(key: &str, value: &toml::Value) -> Option<ColorRole> {
        let role = ColorRole::from_str(key);
        match (role, value.as_str()) {
            (Some(role), Some(_)) => Some(role),
            (None, _) => {
                log::warn!("Unknown color role '{}' in theme file", key);
                None
            },
            (Some(_), None) => {
                log::warn!("Color role '{}' must be a hex string", key);
                None
            },
        }
    }

    fn name_from_path(path: &Path) -> String {
        // <name>/lookfeel-0/theme.toml
        path.parent()
            .and_then(Path::parent)
            .and_then(Path::file_name)
            .and_then(|n| n.to_str())
            .unwrap_or("Custom")
            .to_string()
    }

    /// Get search paths for custom themes in XDG directories.
    pub fn get_theme_search_paths(theme_name: &str) -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // Search order:
        // 1. $XDG_DATA_DIRS/themes/<theme-name>/lookfeel-0/
        let data_dirs = std::env::var("XDG_DATA_DIRS")
            .unwrap_or_else(|_| "/usr/local/share:/usr/share".to_string());
        for dir in data_dirs.split(':').filter(|d| !d.is_empty()) {
            paths.push(PathBuf::from(dir).join("themes").join(theme_name).join("lookfeel-0"));
        }

        // 2. ~/.local/share/themes/<theme-name>/lookfeel-0/
        if let Ok(home) = std::env::var("HOME") {
            paths.push(
                PathBuf::from(&home)
                    .join(".local")
                    .join("share")
                    .join("themes")
                    .join(theme_name)
                    .join("lookfeel-0"),
            );
        }

        paths
    }

    /// Find a theme directory for the given theme name.
    ///
    /// Later search paths take precedence, so a user theme shadows a system one.
    pub fn find_theme_directory(theme_name: &str) -> Option<PathBuf> {
        Self::get_theme_search_paths(theme_name)
            .into_iter()
            .rev()
            .find(|path| path.join("theme.toml").exists())
    }
}
