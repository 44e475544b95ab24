// SPDX-License-Identifier: LGPL-3.0-only

//! Tests for loading palettes and configuration from disk

use std::fs;

use lookfeel_theme::{
    ColorGroup, ColorRole, ConfigError, DefaultPlatformTheme, PlatformTheme, ThemeConfig,
    ThemeError, ThemeLoader, ThemeSource,
};
use lookfeel_theme::util::rgb8;

#[test]
fn test_load_theme_file_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let theme_dir = dir.path().join("Ocean").join("lookfeel-0");
    fs::create_dir_all(&theme_dir).unwrap();
    let file = theme_dir.join("theme.toml");
    fs::write(
        &file,
        r##"
[Colors]
Window = "#002b36"
Text = "#fdf6e3"

[Inactive]
Highlight = "#586e75"
"##,
    )
    .unwrap();

    let theme = ThemeLoader::load_from_file(&file).unwrap();
    assert_eq!(theme.name(), "Ocean");
    assert_eq!(theme.color(ColorGroup::Disabled, ColorRole::Window), rgb8(0x00, 0x2b, 0x36));
    assert_eq!(theme.color(ColorGroup::Inactive, ColorRole::Highlight), rgb8(0x58, 0x6e, 0x75));
}

#[test]
fn test_missing_theme_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = ThemeLoader::load_from_file(dir.path().join("nope.toml"));
    assert!(matches!(result, Err(ThemeError::NotFound(_))));
}

#[test]
fn test_config_file_selects_theme_file() {
    let dir = tempfile::tempdir().unwrap();
    let palette_file = dir.path().join("palette.toml");
    fs::write(&palette_file, "[Colors]\nButton = \"#123456\"\n").unwrap();

    let config_file = dir.path().join("config.toml");
    fs::write(
        &config_file,
        format!(
            "[theme]\ndefault = \"file:{}\"\n\n[icons]\ntheme = \"Adwaita\"\n",
            palette_file.display()
        ),
    )
    .unwrap();

    let config = ThemeConfig::from_file(&config_file).unwrap();
    assert_eq!(config.default_theme, ThemeSource::File(palette_file.clone()));

    let bridge = DefaultPlatformTheme::from_config(&config);
    let palette = bridge.palette().unwrap();
    assert_eq!(palette.color(ColorRole::Button), rgb8(0x12, 0x34, 0x56));
    assert_eq!(bridge.icon_theme_name().as_deref(), Some("Adwaita"));
}

#[test]
fn test_malformed_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let config_file = dir.path().join("config.toml");
    fs::write(&config_file, "[theme\ndefault = ").unwrap();
    assert!(matches!(
        ThemeConfig::from_file(&config_file),
        Err(ConfigError::Parse(_))
    ));
}
