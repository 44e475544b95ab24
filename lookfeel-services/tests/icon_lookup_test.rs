// SPDX-License-Identifier: LGPL-3.0-only

//! Tests for XDG icon theme lookup

use std::fs;
use std::path::{Path, PathBuf};

use lookfeel_core::asset::AssetImage;
use lookfeel_services::icon::{IconLookup, IconRegistry};
use lookfeel_services::XdgPlatformTheme;
use lookfeel_theme::{PlatformTheme, ThemeConfig};

fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// A search root with a "Child" theme inheriting "Parent", plus hicolor.
fn icon_root() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(
        &root.join("Child/index.theme"),
        "[Icon Theme]\nName=Child\nInherits=Parent\nDirectories=16x16/actions,48x48/actions\n\n\
         [16x16/actions]\nSize=16\nType=Fixed\n\n[48x48/actions]\nSize=48\nType=Fixed\n",
    );
    write(
        &root.join("Parent/index.theme"),
        "[Icon Theme]\nName=Parent\nInherits=Child\nDirectories=scalable/status\n\n\
         [scalable/status]\nSize=48\nMinSize=8\nMaxSize=512\nType=Scalable\n",
    );
    write(
        &root.join("hicolor/index.theme"),
        "[Icon Theme]\nName=Hicolor\nDirectories=32x32/apps\n\n[32x32/apps]\nSize=32\n",
    );
    write(&root.join("Child/16x16/actions/edit-copy.svg"), "<svg/>");
    write(&root.join("Child/48x48/actions/edit-copy.svg"), "<svg/>");
    write(&root.join("Parent/scalable/status/dialog-warning.svg"), "<svg/>");
    write(&root.join("hicolor/32x32/apps/viewer.svg"), "<svg/>");
    dir
}

fn lookup(root: &Path) -> IconLookup {
    IconLookup::with_search_paths(vec![root.to_path_buf()])
}

#[test]
fn test_exact_size_wins() {
    let dir = icon_root();
    let lookup = lookup(dir.path());
    let path = lookup.lookup_icon("edit-copy", 48, "Child").unwrap();
    assert!(path.ends_with("48x48/actions/edit-copy.svg"));
    let path = lookup.lookup_icon("edit-copy", 16, "Child").unwrap();
    assert!(path.ends_with("16x16/actions/edit-copy.svg"));
}

#[test]
fn test_closest_size_prefers_scaling_down() {
    let dir = icon_root();
    let lookup = lookup(dir.path());
    // 32 is 16 away from both; the larger directory wins.
    let path = lookup.lookup_icon("edit-copy", 32, "Child").unwrap();
    assert!(path.ends_with("48x48/actions/edit-copy.svg"));
    let path = lookup.lookup_icon("edit-copy", 20, "Child").unwrap();
    assert!(path.ends_with("16x16/actions/edit-copy.svg"));
}

#[test]
fn test_inheritance_and_hicolor_fallback() {
    let dir = icon_root();
    let lookup = lookup(dir.path());
    let warning = lookup.lookup_icon("dialog-warning", 22, "Child").unwrap();
    assert!(warning.starts_with(dir.path().join("Parent")));
    let viewer = lookup.lookup_icon("viewer", 22, "Child").unwrap();
    assert!(viewer.starts_with(dir.path().join("hicolor")));
    assert_eq!(lookup.lookup_icon("no-such-icon", 22, "Child"), None);
}

#[test]
fn test_dashed_names_shorten() {
    let dir = icon_root();
    let lookup = lookup(dir.path());
    let path = lookup.lookup_icon("edit-copy-symbolic", 16, "Child").unwrap();
    assert!(path.ends_with("16x16/actions/edit-copy.svg"));
}

#[test]
fn test_unthemed_fallback_directory() {
    let dir = icon_root();
    let pixmaps = tempfile::tempdir().unwrap();
    write(&pixmaps.path().join("legacy.svg"), "<svg/>");
    let lookup = lookup(dir.path()).with_fallback_paths(vec![pixmaps.path().to_path_buf()]);
    assert_eq!(
        lookup.lookup_icon("legacy", 48, "Child"),
        Some(pixmaps.path().join("legacy.svg"))
    );
}

#[test]
fn test_theme_spread_over_roots() {
    let first = icon_root();
    let second = tempfile::tempdir().unwrap();
    write(&second.path().join("Child/48x48/actions/go-up.svg"), "<svg/>");
    let lookup = IconLookup::with_search_paths(vec![
        first.path().to_path_buf(),
        second.path().to_path_buf(),
    ]);
    let path = lookup.lookup_icon("go-up", 48, "Child").unwrap();
    assert!(path.starts_with(second.path()));
}

#[test]
fn test_registry_requires_installed_theme() {
    let dir = icon_root();
    assert!(IconRegistry::with_lookup("Missing", lookup(dir.path())).is_err());
    let registry = IconRegistry::with_lookup("Child", lookup(dir.path())).unwrap();
    assert_eq!(registry.theme(), "Child");
    assert_eq!(
        registry.load("edit-copy", 16),
        Some(AssetImage::Path(
            registry.resolve("edit-copy", 16).unwrap()
        ))
    );
}

#[test]
fn test_registry_remembers_lookups() {
    let dir = icon_root();
    let registry = IconRegistry::with_lookup("Child", lookup(dir.path())).unwrap();
    let first: Option<PathBuf> = registry.resolve("edit-copy", 48);
    fs::remove_file(first.as_ref().unwrap()).unwrap();
    assert_eq!(registry.resolve("edit-copy", 48), first);
}

#[test]
fn test_platform_bridge_resolves_theme_icons() {
    let dir = icon_root();
    let config = ThemeConfig::new().with_icon_theme("Child");
    let bridge = XdgPlatformTheme::from_config_with_lookup(&config, lookup(dir.path()));
    assert_eq!(bridge.icon_theme_name().as_deref(), Some("Child"));
    assert!(bridge.theme_icon("dialog-warning", 16).is_some());

    let mut unaware = config.clone();
    unaware.desktop_settings_aware = false;
    let bridge = XdgPlatformTheme::from_config_with_lookup(&unaware, lookup(dir.path()));
    assert_eq!(bridge.theme_icon("dialog-warning", 16), None);
}

#[test]
fn test_platform_bridge_without_icon_theme() {
    let dir = icon_root();
    let config = ThemeConfig::new().with_icon_theme("Missing");
    let bridge = XdgPlatformTheme::from_config_with_lookup(&config, lookup(dir.path()));
    assert_eq!(bridge.icon_theme_name(), None);
    assert_eq!(bridge.theme_icon("edit-copy", 16), None);
    assert_eq!(bridge.hint_or_default(lookfeel_theme::ThemeHint::ToolBarIconSize), 24);
}
