// SPDX-License-Identifier: LGPL-3.0-only

//! A platform bridge backed by configuration and XDG icon themes.

use std::path::PathBuf;

use lookfeel_theme::{DefaultPlatformTheme, Palette, PlatformTheme, ThemeConfig, ThemeHint};

use crate::icon::{IconLookup, IconRegistry};

/// Answers palette and hints from configuration, and theme icons from the
/// configured freedesktop icon theme.
pub struct XdgPlatformTheme {
    base: DefaultPlatformTheme,
    icons: Option<IconRegistry>,
    desktop_settings_aware: bool,
}

impl XdgPlatformTheme {
    /// Build the bridge from configuration.
    ///
    /// A configured icon theme that is not installed is logged, and theme
    /// icons are then unavailable.
    pub fn from_config(config: &ThemeConfig) -> Self {
        Self::from_config_with_lookup(config, IconLookup::new())
    }

    /// Like [XdgPlatformTheme::from_config], searching icons through `lookup`.
    pub fn from_config_with_lookup(config: &ThemeConfig, lookup: IconLookup) -> Self {
        let icons = config
            .icon_theme
            .as_ref()
            .and_then(|name| match IconRegistry::with_lookup(name.clone(), lookup) {
                Ok(registry) => Some(registry),
                Err(e) => {
                    log::warn!("XdgPlatformTheme: {}", e);
                    None
                },
            });
        Self {
            base: DefaultPlatformTheme::from_config(config),
            icons,
            desktop_settings_aware: config.desktop_settings_aware,
        }
    }

    /// Override one hint.
    pub fn with_hint(mut self, hint: ThemeHint, value: i32) -> Self {
        self.base = self.base.with_hint(hint, value);
        self
    }

    /// The icon registry, if an icon theme is active.
    pub fn icons(&self) -> Option<&IconRegistry> {
        self.icons.as_ref()
    }
}

impl PlatformTheme for XdgPlatformTheme {
    fn palette(&self) -> Option<Palette> {
        self.base.palette()
    }

    fn desktop_settings_aware(&self) -> bool {
        self.desktop_settings_aware
    }

    fn icon_theme_name(&self) -> Option<String> {
        self.icons.as_ref().map(|icons| icons.theme().to_string())
    }

    fn theme_icon(&self, name: &str, size: u32) -> Option<PathBuf> {
        if !self.desktop_settings_aware {
            return None;
        }
        self.icons.as_ref()?.resolve(name, size)
    }

    fn hint(&self, hint: ThemeHint) -> Option<i32> {
        self.base.hint(hint)
    }
}
