// SPDX-License-Identifier: LGPL-3.0-only

//! Turns icon files into engine images.

use std::path::Path;

use lookfeel_core::asset::{load_pixmap, AssetImage};

use crate::icon::error::IconError;

/// Loads icon files found by the lookup.
///
/// PNG files are decoded to pixels. SVG files are handed out by path
/// since rasterizing them is up to the renderer.
#[derive(Debug, Default, Clone, Copy)]
pub struct IconLoader;

impl IconLoader {
    /// Create a new icon loader.
    pub fn new() -> Self {
        Self
    }

    /// Load an icon from a file path.
    pub fn load_icon(&self, path: &Path) -> Result<AssetImage, IconError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();

        match extension.as_str() {
            "svg" | "svgz" => Ok(AssetImage::Path(path.to_path_buf())),
            "png" => Ok(AssetImage::Pixmap(load_pixmap(path)?)),
            _ => Err(IconError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}
