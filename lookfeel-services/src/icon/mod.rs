// SPDX-License-Identifier: LGPL-3.0-only

//! XDG icon theme support.
//!
//! Implements the freedesktop icon theme lookup: index.theme parsing,
//! inheritance, the hicolor fallback and size-based directory choice.

mod cache;
mod error;
mod loader;
mod lookup;
mod theme;

pub use cache::IconPathCache;
pub use error::IconError;
pub use loader::IconLoader;
pub use lookup::{IconLookup, FALLBACK_THEME};
pub use theme::{DirectoryType, IconDirectory, IconTheme};

use std::path::PathBuf;

use lookfeel_core::asset::AssetImage;

/// Icon registry bound to one theme, with a memo of past lookups.
pub struct IconRegistry {
    theme: String,
    lookup: IconLookup,
    cache: IconPathCache,
    loader: IconLoader,
}

impl IconRegistry {
    /// A registry over the standard XDG icon locations.
    ///
    /// Fails if `theme` is not installed.
    pub fn with_theme(theme: impl Into<String>) -> Result<Self, IconError> {
        Self::with_lookup(theme, IconLookup::new())
    }

    /// A registry over an explicit lookup.
    pub fn with_lookup(theme: impl Into<String>, lookup: IconLookup) -> Result<Self, IconError> {
        let theme = theme.into();
        lookup.load_theme(&theme)?;
        Ok(Self {
            theme,
            lookup,
            cache: IconPathCache::default(),
            loader: IconLoader::new(),
        })
    }

    /// Switch to another installed theme.
    pub fn set_theme(&mut self, theme: impl Into<String>) -> Result<(), IconError> {
        let theme = theme.into();
        self.lookup.load_theme(&theme)?;
        self.theme = theme;
        self.cache.clear();
        Ok(())
    }

    /// Current theme name.
    pub fn theme(&self) -> &str {
        &self.theme
    }

    /// Resolve `icon_name` to a file at roughly `size` pixels.
    pub fn resolve(&self, icon_name: &str, size: u32) -> Option<PathBuf> {
        if let Some(known) = self.cache.get(&self.theme, icon_name, size) {
            return known;
        }
        let path = self.lookup.lookup_icon(icon_name, size, &self.theme);
        self.cache.put(&self.theme, icon_name, size, path.clone());
        path
    }

    /// Resolve and load an icon.
    pub fn load(&self, icon_name: &str, size: u32) -> Option<AssetImage> {
        let path = self.resolve(icon_name, size)?;
        match self.loader.load_icon(&path) {
            Ok(image) => Some(image),
            Err(e) => {
                log::warn!("IconRegistry: cannot load {:?}: {}", path, e);
                None
            },
        }
    }
}
