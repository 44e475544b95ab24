// SPDX-License-Identifier: LGPL-3.0-only

//! Theme resolver for built-in vs custom themes.

use std::path::PathBuf;

use super::builtin::{create_dark_theme, create_light_theme};
use super::error::ThemeError;
use super::loader::ThemeLoader;
use super::Theme;

/// Theme resolver for resolving built-in and custom themes.
pub struct ThemeResolver;

impl ThemeResolver {
    /// Resolve a theme by name.
    ///
    /// Returns a Theme if found, or an error if not found.
    pub fn resolve(theme_name: &str) -> Result<Theme, ThemeError> {
        if theme_name.trim().is_empty() {
            return Err(ThemeError::InvalidThemeName(theme_name.to_string()));
        }

        // Check if it's a built-in theme
        if Self::is_builtin(theme_name) {
            return Self::get_builtin(theme_name);
        }

        // Try to load as custom theme
        Self::load_custom(theme_name)
    }

    /// Check if a theme name is built-in.
    pub fn is_builtin(name: &str) -> bool {
        matches!(name, "Light" | "light" | "Dark" | "dark")
    }

    /// Get a built-in theme.
    pub fn get_builtin(name: &str) -> Result<Theme, ThemeError> {
        match name {
            "Light" | "light" => Ok(create_light_theme()),
            "Dark" | "dark" => Ok(create_dark_theme()),
            _ => Err(ThemeError::InvalidThemeName(name.to_string())),
        }
    }

    /// Load a custom theme from XDG directories.
    pub fn load_custom(theme_name: &str) -> Result<Theme, ThemeError> {
        if let Some(theme_dir) = ThemeLoader::find_theme_directory(theme_name) {
            log::debug!("ThemeResolver: Loading '{}' from {:?}", theme_name, theme_dir);
            ThemeLoader::load_from_file(theme_dir.join("theme.toml"))
        } else {
            Err(ThemeError::ThemeDirectoryNotFound(PathBuf::from(theme_name)))
        }
    }

    /// List available themes: built-ins first, then every directory
    /// under the search roots that carries a `lookfeel-0/theme.toml`.
    pub fn list_themes() -> Vec<String> {
        let mut themes = vec!["Light".to_string(), "Dark".to_string()];

        // The search paths for a placeholder name give us the `themes` roots.
        let roots = ThemeLoader::get_theme_search_paths("_")
            .into_iter()
            .filter_map(|p| p.parent().and_then(|p| p.parent()).map(PathBuf::from));

        for root in roots {
            let Ok(entries) = std::fs::read_dir(&root) else {
                continue;
            };
            for entry in entries.flatten() {
                let name = entry.file_name().to_string_lossy().into_owned();
                if entry.path().join("lookfeel-0").join("theme.toml").exists()
                    && !themes.contains(&name)
                {
                    themes.push(name);
                }
            }
        }

        themes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roles::{ColorGroup, ColorRole};

    #[test]
    fn builtins_resolve() {
        let dark = ThemeResolver::resolve("dark").unwrap();
        assert_eq!(dark.name(), "Dark");
        assert!(dark.is_set(ColorGroup::Disabled, ColorRole::Text));
    }

    #[test]
    fn empty_name_is_rejected() {
        assert!(matches!(
            ThemeResolver::resolve("  "),
            Err(ThemeError::InvalidThemeName(_))
        ));
    }

    #[test]
    fn builtins_are_listed_first() {
        let themes = ThemeResolver::list_themes();
        assert_eq!(&themes[..2], &["Light".to_string(), "Dark".to_string()]);
    }
}
