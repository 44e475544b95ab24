// SPDX-License-Identifier: LGPL-3.0-only

//! Palettes, theme files and the platform bridge for lookfeel.
//!
//! ## Overview
//!
//! - **[Theme]**: colors per color group and role
//! - **[Palette]**: engine-facing API resolving colors in a current group
//! - **[ThemeLoader]**: loader for TOML palette files
//! - **[ThemeResolver]**: resolver for built-in vs custom themes
//! - **[ThemeConfig]**: theme, icon and style selection from env and files
//! - **[PlatformTheme]**: the desktop bridge, with documented defaults
//!
//! ## Usage
//!
//! ```rust
//! use lookfeel_theme::{ColorRole, Palette, ThemeResolver};
//!
//! let theme = ThemeResolver::resolve("Dark").unwrap();
//! let palette = Palette::new(theme);
//! let _button = palette.color(ColorRole::Button);
//! ```

mod builtin;
pub mod config;
mod error;
mod loader;
mod palette;
pub mod platform;
mod resolver;
mod roles;
pub mod util;

pub use builtin::{create_dark_theme, create_light_theme};
pub use config::{ThemeConfig, ThemeSource};
pub use error::{ConfigError, ThemeError};
pub use loader::ThemeLoader;
pub use palette::{Palette, Theme};
pub use platform::{DefaultPlatformTheme, PlatformTheme, ThemeHint};
pub use resolver::ThemeResolver;
pub use roles::{ColorGroup, ColorRole};
