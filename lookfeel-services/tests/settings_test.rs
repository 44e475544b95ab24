// SPDX-License-Identifier: LGPL-3.0-only

//! Tests for layered settings

use std::fs;

use lookfeel_services::{SettingsError, SettingsRegistry};
use lookfeel_theme::ThemeSource;

#[tokio::test]
async fn test_later_files_override_earlier() {
    let dir = tempfile::tempdir().unwrap();
    let system = dir.path().join("system.toml");
    let user = dir.path().join("user.toml");
    fs::write(
        &system,
        "[theme]\ndefault = \"dark\"\n[style]\nname = \"Fancy\"\nfallback = \"Basic\"\n",
    )
    .unwrap();
    fs::write(&user, "[style]\nname = \"Plain\"\n[general]\nlog_level = \"debug\"\n").unwrap();

    let mut registry = SettingsRegistry::empty();
    let results = registry.load_from_paths_async(vec![system.clone(), user.clone()]).await;
    assert!(results.iter().all(|r| r.is_ok()));

    let config = &registry.theme_config;
    assert_eq!(config.default_theme, ThemeSource::Dark);
    assert_eq!(config.style.as_deref(), Some("Plain"));
    assert_eq!(config.fallback_style.as_deref(), Some("Basic"));
    assert_eq!(registry.get().general.log_level.as_deref(), Some("debug"));
    assert_eq!(registry.loaded_files(), [system, user]);
}

#[tokio::test]
async fn test_missing_and_invalid_files_are_reported() {
    let dir = tempfile::tempdir().unwrap();
    let bad = dir.path().join("bad.toml");
    fs::write(&bad, "[style\nname = 1").unwrap();

    let mut registry = SettingsRegistry::empty();
    let results = registry
        .load_from_paths_async(vec![dir.path().join("absent.toml"), bad])
        .await;
    assert!(matches!(results[0], Err(SettingsError::Read(_, _))));
    assert!(matches!(results[1], Err(SettingsError::Parse(_, _))));
    assert!(registry.loaded_files().is_empty());
}

#[tokio::test]
async fn test_selector_follows_settings() {
    let dir = tempfile::tempdir().unwrap();
    let resources = dir.path().join("styles");
    fs::create_dir_all(resources.join("Fancy")).unwrap();
    fs::write(resources.join("Fancy/Button.qml"), "").unwrap();
    let file = dir.path().join("config.toml");
    fs::write(
        &file,
        format!(
            "[style]\nname = \"Fancy\"\npaths = [\"{}\"]\n",
            resources.display()
        ),
    )
    .unwrap();

    let mut registry = SettingsRegistry::empty();
    registry.load_from_paths_async(vec![file]).await;
    let selector = registry.style_selector("Common");
    assert_eq!(selector.selectors(), ["Fancy".to_string(), "Common".to_string()]);
    assert!(selector.select("Button.qml").starts_with("file://"));
    assert_eq!(selector.select("Slider.qml"), "Slider.qml");

    fs::create_dir_all(resources.join("Common")).unwrap();
    fs::write(resources.join("Common/Slider.qml"), "").unwrap();
    assert!(selector.select("Slider.qml").ends_with("Common/Slider.qml"));
}
