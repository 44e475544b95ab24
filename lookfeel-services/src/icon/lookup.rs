// SPDX-License-Identifier: LGPL-3.0-only

//! Icon lookup with search paths, inheritance and the hicolor fallback.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use crate::icon::error::IconError;
use crate::icon::theme::{IconTheme, ICON_EXTENSIONS};

/// Theme every lookup falls back to.
pub const FALLBACK_THEME: &str = "hicolor";

/// Resolves icon names to files following the freedesktop lookup rules.
pub struct IconLookup {
    /// Loaded themes, including known-missing ones.
    themes: Mutex<HashMap<String, Option<Arc<IconTheme>>>>,
    /// Roots holding theme directories.
    search_paths: Vec<PathBuf>,
    /// Directories holding unthemed icons.
    fallback_paths: Vec<PathBuf>,
}

impl IconLookup {
    /// A lookup over the standard XDG icon locations.
    pub fn new() -> Self {
        let mut search_paths = Vec::new();
        if let Some(home) = std::env::var_os("HOME") {
            search_paths.push(PathBuf::from(home).join(".icons"));
        }
        match xdg::BaseDirectories::new() {
            Ok(dirs) => {
                search_paths.push(dirs.get_data_home().join("icons"));
                search_paths.extend(dirs.get_data_dirs().into_iter().map(|d| d.join("icons")));
            },
            Err(e) => {
                log::warn!("IconLookup: no XDG base directories: {}", e);
                search_paths.push(PathBuf::from("/usr/share/icons"));
            },
        }
        Self::with_search_paths(search_paths).with_fallback_paths(vec![PathBuf::from("/usr/share/pixmaps")])
    }

    /// A lookup over explicit theme roots.
    pub fn with_search_paths(search_paths: Vec<PathBuf>) -> Self {
        Self {
            themes: Mutex::new(HashMap::new()),
            search_paths,
            fallback_paths: Vec::new(),
        }
    }

    /// Set the directories searched for unthemed icons.
    pub fn with_fallback_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.fallback_paths = paths;
        self
    }

    /// The theme roots, in search order.
    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    /// Load a theme, merging every search path that carries it.
    pub fn load_theme(&self, theme_name: &str) -> Result<Arc<IconTheme>, IconError> {
        let mut themes = self.themes.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(cached) = themes.get(theme_name) {
            return cached
                .clone()
                .ok_or_else(|| IconError::ThemeNotFound(theme_name.to_string()));
        }

        let mut found: Option<IconTheme> = None;
        for root in &self.search_paths {
            let dir = root.join(theme_name);
            if !dir.is_dir() {
                continue;
            }
            if let Some(theme) = found.as_mut() {
                theme.add_base_path(&dir);
                continue;
            }
            match IconTheme::load(theme_name, dir) {
                Ok(theme) => found = Some(theme),
                Err(IconError::ThemeNotFound(_)) => {},
                Err(e) => log::warn!("IconLookup: skipping theme '{}': {}", theme_name, e),
            }
        }

        let theme = found.map(Arc::new);
        themes.insert(theme_name.to_string(), theme.clone());
        theme.ok_or_else(|| IconError::ThemeNotFound(theme_name.to_string()))
    }

    /// Find `icon_name` at `size` in `theme_name`, its parents, then hicolor.
    ///
    /// Dash-separated names are shortened from the right when nothing
    /// matches, so `edit-copy-symbolic` can resolve to `edit-copy`.
    pub fn lookup_icon(&self, icon_name: &str, size: u32, theme_name: &str) -> Option<PathBuf> {
        let mut name = icon_name;
        loop {
            if let Some(path) = self.lookup_exact_name(name, size, theme_name) {
                log::debug!("IconLookup: '{}' resolved to {:?}", icon_name, path);
                return Some(path);
            }
            match name.rfind('-') {
                Some(cut) => name = &name[..cut],
                None => break,
            }
        }
        log::debug!("IconLookup: '{}' not found in any theme", icon_name);
        None
    }

    fn lookup_exact_name(&self, icon_name: &str, size: u32, theme_name: &str) -> Option<PathBuf> {
        let mut visited = HashSet::new();
        if let Some(path) = self.lookup_in_chain(icon_name, size, theme_name, &mut visited) {
            return Some(path);
        }
        if !visited.contains(FALLBACK_THEME) {
            if let Some(path) = self.lookup_in_chain(icon_name, size, FALLBACK_THEME, &mut visited) {
                return Some(path);
            }
        }
        self.lookup_unthemed(icon_name)
    }

    fn lookup_in_chain(
        &self,
        icon_name: &str,
        size: u32,
        theme_name: &str,
        visited: &mut HashSet<String>,
    ) -> Option<PathBuf> {
        if !visited.insert(theme_name.to_string()) {
            return None;
        }
        let theme = self.load_theme(theme_name).ok()?;
        if let Some(path) = lookup_in_theme(&theme, icon_name, size, 1) {
            return Some(path);
        }
        for parent in &theme.inherits {
            log::trace!("IconLookup: trying '{}' inherited by '{}'", parent, theme_name);
            if let Some(path) = self.lookup_in_chain(icon_name, size, parent, visited) {
                return Some(path);
            }
        }
        None
    }

    fn lookup_unthemed(&self, icon_name: &str) -> Option<PathBuf> {
        self.fallback_paths.iter().find_map(|dir| existing_icon_file(dir, icon_name))
    }
}

impl Default for IconLookup {
    fn default() -> Self {
        Self::new()
    }
}

/// Exact size matches first, then the closest directory. Ties prefer the
/// larger directory so icons are scaled down rather than up.
fn lookup_in_theme(theme: &IconTheme, icon_name: &str, size: u32, scale: u32) -> Option<PathBuf> {
    for dir in theme.directories.iter().filter(|d| d.matches_size(size, scale)) {
        if let Some(path) = theme.icon_files(dir, icon_name).find(|p| p.is_file()) {
            return Some(path);
        }
    }

    let mut best: Option<((u32, bool), PathBuf)> = None;
    for dir in &theme.directories {
        let key = (dir.size_distance(size, scale), dir.size * dir.scale < size * scale);
        if best.as_ref().is_some_and(|(k, _)| *k <= key) {
            continue;
        }
        if let Some(path) = theme.icon_files(dir, icon_name).find(|p| p.is_file()) {
            best = Some((key, path));
        }
    }
    best.map(|(_, path)| path)
}

fn existing_icon_file(dir: &Path, icon_name: &str) -> Option<PathBuf> {
    ICON_EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("{}.{}", icon_name, ext)))
        .find(|p| p.is_file())
}
