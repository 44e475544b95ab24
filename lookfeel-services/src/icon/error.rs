// SPDX-License-Identifier: LGPL-3.0-only

//! Error types for icon theme lookup.

use std::path::PathBuf;

/// Errors that can occur while reading icon themes.
#[derive(Debug, thiserror::Error)]
pub enum IconError {
    /// No search path holds a theme of this name.
    #[error("Icon theme '{0}' not found")]
    ThemeNotFound(String),

    /// The index.theme file is malformed.
    #[error("Failed to parse index.theme of {0}: {1}")]
    IndexParse(PathBuf, String),

    /// The index.theme file could not be read.
    #[error("Failed to read {0}: {1}")]
    Read(PathBuf, std::io::Error),

    /// The icon file is not an image the loader understands.
    #[error("Unsupported icon file: {0}")]
    UnsupportedFormat(PathBuf),

    /// The icon file could not be decoded.
    #[error("Failed to load icon: {0}")]
    Asset(#[from] lookfeel_core::asset::AssetError),
}
