// SPDX-License-Identifier: LGPL-3.0-only

//! Picks style resources by style name.
//!
//! Resources live under `<root>/<style>/<file>`. Lookup tries the requested
//! style, then the fallback style, then the style plugin's own name, then
//! the root itself. Inside a matching
//! directory, `+<platform>` and `+<locale>` subdirectories refine the choice.

use std::path::{Path, PathBuf};

use lookfeel_theme::ThemeConfig;

/// Resolves style resource files across style selectors and roots.
#[derive(Debug, Clone)]
pub struct StyleSelector {
    selectors: Vec<String>,
    paths: Vec<PathBuf>,
    variants: Vec<String>,
}

impl StyleSelector {
    /// A selector with no styles, no roots and the host's platform variants.
    pub fn new() -> Self {
        Self {
            selectors: Vec::new(),
            paths: Vec::new(),
            variants: host_variants(),
        }
    }

    /// A selector for the configured style, its fallback, the style
    /// plugin named `plugin_name` and the configured resource roots.
    ///
    /// Empty names are skipped, as are names equal to the configured style.
    pub fn from_config(config: &ThemeConfig, plugin_name: &str) -> Self {
        let mut selector = Self::new();
        let style = config.style.as_deref().unwrap_or_default();
        if !style.is_empty() {
            selector.add_selector(style);
        }
        for name in [config.fallback_style.as_deref().unwrap_or_default(), plugin_name] {
            if !name.is_empty() && name != style {
                selector.add_selector(name);
            }
        }
        selector.set_paths(config.style_paths.clone());
        selector
    }

    /// Replace the `+variant` directory names tried inside a match.
    ///
    /// Names are given without the `+` prefix, most preferred first.
    pub fn with_variants<I, S>(mut self, variants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.variants = variants.into_iter().map(|v| format!("+{}", v.into())).collect();
        self
    }

    /// The selectors, in lookup order.
    pub fn selectors(&self) -> &[String] {
        &self.selectors
    }

    /// Append a selector unless it is already present.
    pub fn add_selector(&mut self, selector: impl Into<String>) {
        let selector = selector.into();
        if !self.selectors.contains(&selector) {
            self.selectors.push(selector);
        }
    }

    /// The resource roots.
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Replace the resource roots.
    pub fn set_paths(&mut self, paths: Vec<PathBuf>) {
        self.paths = paths;
    }

    /// Resolve `file_name` to a `file://` URL, or return it unchanged.
    pub fn select(&self, file_name: &str) -> String {
        log::debug!(
            "StyleSelector: selecting {} from {:?} with selectors {:?}",
            file_name,
            self.paths,
            self.selectors
        );
        // The empty selector comes last, unless the first selector is
        // already empty.
        let mut selectors: Vec<&str> = self.selectors.iter().map(String::as_str).collect();
        if selectors.first().map_or(true, |first| !first.is_empty()) {
            selectors.push("");
        }

        for selector in selectors {
            for root in &self.paths {
                let candidate = root.join(selector).join(file_name);
                if let Some(url) = self.select_file(&candidate) {
                    log::debug!(
                        "StyleSelector: ==> {} from {:?} with selector '{}'",
                        url,
                        root,
                        selector
                    );
                    return url;
                }
            }
        }
        file_name.to_string()
    }

    fn select_file(&self, path: &Path) -> Option<String> {
        if !path.exists() {
            return None;
        }
        let path = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        let (dir, name) = (path.parent()?, path.file_name()?);
        let chosen = select_variant(dir, Path::new(name), &self.variants)?;
        Some(format!("file://{}", chosen.display()))
    }
}

impl Default for StyleSelector {
    fn default() -> Self {
        Self::new()
    }
}

/// Depth-first search through `+variant` directories below `dir`.
///
/// A deeper match wins over this level. Each variant is used at most once
/// per branch.
fn select_variant(dir: &Path, file_name: &Path, variants: &[String]) -> Option<PathBuf> {
    for (i, variant) in variants.iter().enumerate() {
        let base = dir.join(variant);
        if !base.is_dir() {
            continue;
        }
        let rest: Vec<String> = variants
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != i)
            .map(|(_, v)| v.clone())
            .collect();
        if let Some(found) = select_variant(&base, file_name, &rest) {
            return Some(found);
        }
    }
    let here = dir.join(file_name);
    here.exists().then_some(here)
}

/// `+unix`, `+<os>` and `+<locale>` for the running host.
fn host_variants() -> Vec<String> {
    let mut variants = Vec::new();
    if cfg!(unix) {
        variants.push("+unix".to_string());
    }
    variants.push(format!("+{}", std::env::consts::OS));
    if let Some(locale) = host_locale() {
        variants.push(format!("+{}", locale));
    }
    variants
}

/// Locale name such as `en_US`, from the usual environment variables.
fn host_locale() -> Option<String> {
    ["LC_ALL", "LC_MESSAGES", "LANG"]
        .iter()
        .filter_map(|key| std::env::var(key).ok())
        .find(|value| !value.is_empty())
        .map(|value| {
            let end = value.find(['.', '@']).unwrap_or(value.len());
            value[..end].to_string()
        })
        .filter(|locale| locale != "C" && locale != "POSIX" && !locale.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    fn url(path: &Path) -> String {
        format!("file://{}", fs::canonicalize(path).unwrap().display())
    }

    #[test]
    fn test_add_selector_skips_duplicates() {
        let mut selector = StyleSelector::new();
        selector.add_selector("Material");
        selector.add_selector("Basic");
        selector.add_selector("Material");
        assert_eq!(selector.selectors(), ["Material".to_string(), "Basic".to_string()]);
    }

    #[test]
    fn test_requested_style_beats_fallback_and_default() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        touch(&root.join("Button.qml"));
        touch(&root.join("Basic/Button.qml"));
        touch(&root.join("Fancy/Button.qml"));

        let mut selector = StyleSelector::new().with_variants(Vec::<String>::new());
        selector.set_paths(vec![root.to_path_buf()]);
        selector.add_selector("Fancy");
        selector.add_selector("Basic");
        assert_eq!(selector.select("Button.qml"), url(&root.join("Fancy/Button.qml")));

        fs::remove_file(root.join("Fancy/Button.qml")).unwrap();
        assert_eq!(selector.select("Button.qml"), url(&root.join("Basic/Button.qml")));

        fs::remove_file(root.join("Basic/Button.qml")).unwrap();
        assert_eq!(selector.select("Button.qml"), url(&root.join("Button.qml")));
    }

    #[test]
    fn test_plugin_name_follows_style_and_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        touch(&root.join("Common/ScrollBar.qml"));

        let config = ThemeConfig::new().with_style("Fancy", Some("Basic".into()));
        let mut selector = StyleSelector::from_config(&config, "Common").with_variants(Vec::<String>::new());
        selector.set_paths(vec![root.to_path_buf()]);
        assert_eq!(
            selector.selectors(),
            ["Fancy".to_string(), "Basic".to_string(), "Common".to_string()]
        );
        assert_eq!(selector.select("ScrollBar.qml"), url(&root.join("Common/ScrollBar.qml")));

        let config = ThemeConfig::new().with_style("Common", None);
        let selector = StyleSelector::from_config(&config, "Common");
        assert_eq!(selector.selectors(), ["Common".to_string()]);
        let selector = StyleSelector::from_config(&ThemeConfig::new(), "");
        assert!(selector.selectors().is_empty());
    }

    #[test]
    fn test_unmatched_name_is_returned_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let mut selector = StyleSelector::new();
        selector.set_paths(vec![dir.path().to_path_buf()]);
        selector.add_selector("Fancy");
        assert_eq!(selector.select("Missing.qml"), "Missing.qml");
    }

    #[test]
    fn test_empty_first_selector_skips_default_pass() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("Slider.qml"));
        let mut selector = StyleSelector::new().with_variants(Vec::<String>::new());
        selector.set_paths(vec![dir.path().to_path_buf()]);
        selector.add_selector("");
        // The root is still reached through the empty selector itself.
        assert_eq!(selector.select("Slider.qml"), url(&dir.path().join("Slider.qml")));
        assert_eq!(selector.selectors().len(), 1);
    }

    #[test]
    fn test_platform_variant_refines_match() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        touch(&root.join("Fancy/Dial.qml"));
        touch(&root.join("Fancy/+linux/Dial.qml"));
        touch(&root.join("Fancy/+linux/+de_DE/Dial.qml"));

        let mut selector = StyleSelector::new().with_variants(["linux"]);
        selector.set_paths(vec![root.to_path_buf()]);
        selector.add_selector("Fancy");
        assert_eq!(selector.select("Dial.qml"), url(&root.join("Fancy/+linux/Dial.qml")));

        let selector = selector.with_variants(["linux", "de_DE"]);
        assert_eq!(
            selector.select("Dial.qml"),
            url(&root.join("Fancy/+linux/+de_DE/Dial.qml"))
        );
    }

    #[test]
    fn test_roots_are_searched_in_order_per_selector() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        touch(&first.path().join("Label.qml"));
        touch(&second.path().join("Fancy/Label.qml"));

        let mut selector = StyleSelector::new().with_variants(Vec::<String>::new());
        selector.set_paths(vec![first.path().to_path_buf(), second.path().to_path_buf()]);
        selector.add_selector("Fancy");
        assert_eq!(
            selector.select("Label.qml"),
            url(&second.path().join("Fancy/Label.qml"))
        );
    }
}
