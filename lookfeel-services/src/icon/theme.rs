// SPDX-License-Identifier: LGPL-3.0-only

//! XDG icon theme parsing.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::icon::error::IconError;

/// How a theme directory matches requested sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryType {
    /// Icons are exactly `size`.
    Fixed,
    /// Icons scale between `min_size` and `max_size`.
    Scalable,
    /// Icons are usable within `threshold` of `size`.
    Threshold,
}

impl DirectoryType {
    /// Parse the `Type` key. Unknown values mean `Threshold`.
    pub fn parse(s: &str) -> Self {
        match s {
            "Fixed" => Self::Fixed,
            "Scalable" => Self::Scalable,
            _ => Self::Threshold,
        }
    }
}

/// One directory listed by a theme's index.
#[derive(Debug, Clone, PartialEq)]
pub struct IconDirectory {
    /// Directory name relative to the theme root.
    pub name: String,
    /// Nominal icon size.
    pub size: u32,
    /// Target scale.
    pub scale: u32,
    /// Matching rule.
    pub directory_type: DirectoryType,
    /// Smallest size for scalable directories.
    pub min_size: u32,
    /// Largest size for scalable directories.
    pub max_size: u32,
    /// Allowed distance for threshold directories.
    pub threshold: u32,
}

impl IconDirectory {
    /// Whether icons here can be used unscaled at `size`.
    pub fn matches_size(&self, size: u32, scale: u32) -> bool {
        if self.scale != scale {
            return false;
        }
        match self.directory_type {
            DirectoryType::Fixed => self.size == size,
            DirectoryType::Scalable => (self.min_size..=self.max_size).contains(&size),
            DirectoryType::Threshold => {
                let low = self.size.saturating_sub(self.threshold);
                (low..=self.size + self.threshold).contains(&size)
            },
        }
    }

    /// Distance in device pixels between this directory and a request.
    pub fn size_distance(&self, size: u32, scale: u32) -> u32 {
        let wanted = size * scale;
        let (low, high) = match self.directory_type {
            DirectoryType::Fixed => (self.size, self.size),
            DirectoryType::Scalable => (self.min_size, self.max_size),
            DirectoryType::Threshold => (
                self.size.saturating_sub(self.threshold),
                self.size + self.threshold,
            ),
        };
        let (low, high) = (low * self.scale, high * self.scale);
        if wanted < low {
            low - wanted
        } else if wanted > high {
            wanted - high
        } else {
            0
        }
    }
}

/// A parsed freedesktop icon theme.
#[derive(Debug, Clone, PartialEq)]
pub struct IconTheme {
    /// Display name, or the directory name when the index has none.
    pub name: String,
    /// Themes searched after this one.
    pub inherits: Vec<String>,
    /// Directories in index order.
    pub directories: Vec<IconDirectory>,
    /// Theme roots. A theme may be spread over several search paths.
    pub base_paths: Vec<PathBuf>,
}

impl IconTheme {
    /// Load a theme from `base_path/index.theme`.
    pub fn load(theme_name: &str, base_path: PathBuf) -> Result<Self, IconError> {
        let index_path = base_path.join("index.theme");
        if !index_path.is_file() {
            return Err(IconError::ThemeNotFound(theme_name.to_string()));
        }
        let content = std::fs::read_to_string(&index_path)
            .map_err(|e| IconError::Read(index_path.clone(), e))?;
        Self::parse(theme_name, base_path, &content)
    }

    /// Parse index.theme content for a theme rooted at `base_path`.
    pub fn parse(theme_name: &str, base_path: PathBuf, content: &str) -> Result<Self, IconError> {
        let ini = parse_ini(content);
        let index_error = |msg: &str| IconError::IndexParse(base_path.clone(), msg.to_string());

        let section = ini
            .get("Icon Theme")
            .ok_or_else(|| index_error("missing [Icon Theme] section"))?;

        let name = section
            .get("Name")
            .cloned()
            .unwrap_or_else(|| theme_name.to_string());

        let inherits = section
            .get("Inherits")
            .map(|s| split_list(s))
            .unwrap_or_default();

        let mut names = section
            .get("Directories")
            .map(|s| split_list(s))
            .ok_or_else(|| index_error("missing Directories key"))?;
        if let Some(scaled) = section.get("ScaledDirectories") {
            names.extend(split_list(scaled));
        }

        let directories = names
            .iter()
            .filter_map(|dir| ini.get(dir.as_str()).map(|keys| directory(dir, keys)))
            .collect();

        Ok(IconTheme {
            name,
            inherits,
            directories,
            base_paths: vec![base_path],
        })
    }

    /// Candidate files for `icon_name` in `dir`, across all theme roots.
    pub fn icon_files<'a>(
        &'a self,
        dir: &'a IconDirectory,
        icon_name: &'a str,
    ) -> impl Iterator<Item = PathBuf> + 'a {
        self.base_paths.iter().flat_map(move |base| {
            ICON_EXTENSIONS
                .iter()
                .map(move |ext| base.join(&dir.name).join(format!("{}.{}", icon_name, ext)))
        })
    }

    /// Add another root holding directories of this theme.
    pub fn add_base_path(&mut self, path: &Path) {
        if !self.base_paths.iter().any(|p| p == path) {
            self.base_paths.push(path.to_path_buf());
        }
    }
}

/// Extensions tried, in order of preference.
pub const ICON_EXTENSIONS: [&str; 3] = ["png", "svg", "xpm"];

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn directory(name: &str, keys: &HashMap<String, String>) -> IconDirectory {
    let number = |key: &str| keys.get(key).and_then(|s| s.parse::<u32>().ok());
    let size = number("Size").unwrap_or(48);
    IconDirectory {
        name: name.to_string(),
        size,
        scale: number("Scale").unwrap_or(1).max(1),
        directory_type: keys
            .get("Type")
            .map(|s| DirectoryType::parse(s))
            .unwrap_or(DirectoryType::Threshold),
        min_size: number("MinSize").unwrap_or(size),
        max_size: number("MaxSize").unwrap_or(size),
        threshold: number("Threshold").unwrap_or(2),
    }
}

/// Minimal INI reader for index.theme files.
fn parse_ini(content: &str) -> HashMap<String, HashMap<String, String>> {
    let mut result = HashMap::new();
    let mut current: Option<String> = None;
    let mut map = HashMap::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some(section) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            if let Some(done) = current.replace(section.to_string()) {
                result.insert(done, std::mem::take(&mut map));
            } else {
                map.clear();
            }
            continue;
        }
        // Localized keys such as Name[de] are ignored.
        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim();
            if !key.contains('[') {
                map.insert(key.to_string(), value.trim().to_string());
            }
        }
    }
    if let Some(section) = current {
        result.insert(section, map);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    const INDEX: &str = "\
[Icon Theme]
Name=Test
Name[de]=Prüfung
Inherits=Parent, hicolor
Directories=16x16/actions,scalable/actions,32x32/status

[16x16/actions]
Size=16
Type=Fixed

[scalable/actions]
Size=48
MinSize=8
MaxSize=512
Type=Scalable

[32x32/status]
Size=32
";

    #[test]
    fn test_parse_index() {
        let theme = IconTheme::parse("test", PathBuf::from("/icons/test"), INDEX).unwrap();
        assert_eq!(theme.name, "Test");
        assert_eq!(theme.inherits, vec!["Parent".to_string(), "hicolor".to_string()]);
        assert_eq!(theme.directories.len(), 3);
        assert_eq!(theme.directories[1].directory_type, DirectoryType::Scalable);
        assert_eq!(theme.directories[2].directory_type, DirectoryType::Threshold);
        assert_eq!(theme.directories[2].threshold, 2);
    }

    #[test]
    fn test_missing_section_is_an_error() {
        let result = IconTheme::parse("x", PathBuf::from("/x"), "[Other]\nA=b\n");
        assert!(matches!(result, Err(IconError::IndexParse(_, _))));
    }

    #[test]
    fn test_size_matching() {
        let theme = IconTheme::parse("test", PathBuf::from("/t"), INDEX).unwrap();
        let [fixed, scalable, threshold] = [0, 1, 2].map(|i| &theme.directories[i]);
        assert!(fixed.matches_size(16, 1));
        assert!(!fixed.matches_size(17, 1));
        assert!(!fixed.matches_size(16, 2));
        assert!(scalable.matches_size(300, 1));
        assert!(threshold.matches_size(30, 1));
        assert!(!threshold.matches_size(29, 1));

        assert_eq!(fixed.size_distance(24, 1), 8);
        assert_eq!(scalable.size_distance(4, 1), 4);
        assert_eq!(threshold.size_distance(40, 1), 6);
    }
}
