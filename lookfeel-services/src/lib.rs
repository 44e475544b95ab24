// SPDX-License-Identifier: LGPL-3.0-only

//! Desktop services for lookfeel: icon themes, style resources and settings.

pub mod icon;
pub mod platform;
pub mod selector;
pub mod settings;

// Re-export commonly used types
pub use icon::{IconError, IconLookup, IconRegistry};
pub use platform::XdgPlatformTheme;
pub use selector::StyleSelector;
pub use settings::{SettingsError, SettingsRegistry};
