// SPDX-License-Identifier: LGPL-3.0-only

//! Bridge between the style engine and the desktop it runs on.
//!
//! The engine treats everything here as opaque input. Each query has a
//! documented fallback so a bridge that answers nothing still produces a
//! usable style.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::config::ThemeConfig;
use crate::palette::Palette;

/// Platform settings the engine consults for metrics and hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeHint {
    /// How far the pointer may leave a scroll bar while dragging, or -1.
    MaximumScrollBarDragDistance,
    /// Width of the text cursor.
    TextCursorWidth,
    /// Character shown for password input.
    PasswordMaskCharacter,
    /// Delay before a typed password character is masked, in milliseconds.
    PasswordMaskDelay,
    /// Platform order of dialog buttons.
    DialogButtonBoxLayout,
    /// Default tool button style.
    ToolButtonStyle,
    /// Dialog buttons show icons.
    DialogButtonBoxButtonsHaveIcons,
    /// A single click activates view items.
    ItemViewActivateItemOnSingleClick,
    /// Tool bar icon size.
    ToolBarIconSize,
}

crate::impl_role_string_conversion!(ThemeHint, {
    MaximumScrollBarDragDistance => "MaximumScrollBarDragDistance",
    TextCursorWidth => "TextCursorWidth",
    PasswordMaskCharacter => "PasswordMaskCharacter",
    PasswordMaskDelay => "PasswordMaskDelay",
    DialogButtonBoxLayout => "DialogButtonBoxLayout",
    ToolButtonStyle => "ToolButtonStyle",
    DialogButtonBoxButtonsHaveIcons => "DialogButtonBoxButtonsHaveIcons",
    ItemViewActivateItemOnSingleClick => "ItemViewActivateItemOnSingleClick",
    ToolBarIconSize => "ToolBarIconSize",
});

impl ThemeHint {
    /// The value used when the bridge has no answer.
    pub fn default_value(&self) -> i32 {
        match self {
            ThemeHint::MaximumScrollBarDragDistance => -1,
            ThemeHint::TextCursorWidth => 1,
            ThemeHint::PasswordMaskCharacter => '\u{25CF}' as i32,
            ThemeHint::PasswordMaskDelay => 0,
            ThemeHint::DialogButtonBoxLayout => 0,
            ThemeHint::ToolButtonStyle => 0,
            ThemeHint::DialogButtonBoxButtonsHaveIcons => 0,
            ThemeHint::ItemViewActivateItemOnSingleClick => 0,
            ThemeHint::ToolBarIconSize => 24,
        }
    }
}

/// The theme/platform bridge.
///
/// Every method has a default, so implementors only override what the
/// desktop actually provides.
pub trait PlatformTheme: Send + Sync {
    /// Desktop palette, if the platform has one.
    fn palette(&self) -> Option<Palette> {
        None
    }

    /// Whether desktop settings should be honored at all.
    fn desktop_settings_aware(&self) -> bool {
        true
    }

    /// Name of the active freedesktop icon theme.
    fn icon_theme_name(&self) -> Option<String> {
        None
    }

    /// Resolve a named theme icon to a file at roughly `size` pixels.
    fn theme_icon(&self, _name: &str, _size: u32) -> Option<PathBuf> {
        None
    }

    /// Raw answer for a platform hint.
    fn hint(&self, _hint: ThemeHint) -> Option<i32> {
        None
    }

    /// Answer for a platform hint, or its documented default.
    fn hint_or_default(&self, hint: ThemeHint) -> i32 {
        self.hint(hint).unwrap_or_else(|| hint.default_value())
    }
}

/// A bridge that answers from configuration and explicit overrides only.
#[derive(Debug, Clone, Default)]
pub struct DefaultPlatformTheme {
    palette: Option<Palette>,
    icon_theme: Option<String>,
    hints: HashMap<ThemeHint, i32>,
    desktop_settings_aware: bool,
}

impl DefaultPlatformTheme {
    /// A bridge with no palette and no overrides.
    pub fn new() -> Self {
        Self {
            desktop_settings_aware: true,
            ..Default::default()
        }
    }

    /// Build the bridge from configuration, resolving the configured palette.
    ///
    /// A palette that fails to load is logged and left unset.
    pub fn from_config(config: &ThemeConfig) -> Self {
        let palette = match config.resolve_theme() {
            Ok(theme) => Some(Palette::new(theme)),
            Err(e) => {
                log::warn!("No palette from configuration: {}", e);
                None
            },
        };
        Self {
            palette,
            icon_theme: config.icon_theme.clone(),
            hints: HashMap::new(),
            desktop_settings_aware: config.desktop_settings_aware,
        }
    }

    /// Override one hint.
    pub fn with_hint(mut self, hint: ThemeHint, value: i32) -> Self {
        self.hints.insert(hint, value);
        self
    }

    /// Set the palette.
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = Some(palette);
        self
    }
}

impl PlatformTheme for DefaultPlatformTheme {
    fn palette(&self) -> Option<Palette> {
        self.palette.clone()
    }

    fn desktop_settings_aware(&self) -> bool {
        self.desktop_settings_aware
    }

    fn icon_theme_name(&self) -> Option<String> {
        self.icon_theme.clone()
    }

    fn hint(&self, hint: ThemeHint) -> Option<i32> {
        self.hints.get(&hint).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ThemeSource;

    struct Silent;
    impl PlatformTheme for Silent {}

    #[test]
    fn silent_bridge_uses_defaults() {
        let bridge = Silent;
        assert_eq!(bridge.hint_or_default(ThemeHint::ToolBarIconSize), 24);
        assert_eq!(
            bridge.hint_or_default(ThemeHint::PasswordMaskCharacter),
            0x25CF
        );
        assert!(bridge.desktop_settings_aware());
        assert!(bridge.palette().is_none());
    }

    #[test]
    fn overrides_win() {
        let bridge = DefaultPlatformTheme::new().with_hint(ThemeHint::TextCursorWidth, 3);
        assert_eq!(bridge.hint_or_default(ThemeHint::TextCursorWidth), 3);
        assert_eq!(bridge.hint_or_default(ThemeHint::PasswordMaskDelay), 0);
    }

    #[test]
    fn config_supplies_palette_and_icons() {
        let config = ThemeConfig::new()
            .with_default_theme(ThemeSource::Dark)
            .with_icon_theme("breeze");
        let bridge = DefaultPlatformTheme::from_config(&config);
        assert_eq!(bridge.palette().unwrap().theme().name(), "Dark");
        assert_eq!(bridge.icon_theme_name().as_deref(), Some("breeze"));
    }
}
