// SPDX-License-Identifier: LGPL-3.0-only

//! Theme loading, parsing and configuration errors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading or parsing themes.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// Theme file not found.
    #[error("Theme file not found: {0}")]
    NotFound(PathBuf),

    /// Failed to read theme file.
    #[error("Failed to read theme file {0}: {1}")]
    ReadError(PathBuf, std::io::Error),

    /// Failed to parse TOML theme file.
    #[error("Failed to parse theme file {0}: {1}")]
    ParseError(PathBuf, String),

    /// Invalid color format.
    #[error("Invalid color format: {0}")]
    InvalidColor(String),

    /// Theme directory not found.
    #[error("Theme directory not found: {0}")]
    ThemeDirectoryNotFound(PathBuf),

    /// Invalid theme name.
    #[error("Invalid theme name: {0}")]
    InvalidThemeName(String),
}

/// Errors that can occur when reading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("Failed to read configuration file {0}: {1}")]
    Read(PathBuf, std::io::Error),

    /// The configuration file is not valid TOML for the expected layout.
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// The file extension is not supported.
    #[error("Unsupported configuration file format: {0}. Use .toml")]
    UnsupportedFormat(PathBuf),
}
