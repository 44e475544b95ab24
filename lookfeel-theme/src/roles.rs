// SPDX-License-Identifier: LGPL-3.0-only

//! Color roles and color groups.

/// Macro to implement string conversion methods for role enums.
///
/// This macro generates `as_str()` and `from_str()` implementations
/// for role enums to reduce boilerplate.
#[macro_export]
macro_rules! impl_role_string_conversion {
    ($enum_name:ident, { $($variant:ident => $str:literal),* $(,)? }) => {
        impl $enum_name {
            /// Get the string representation of the role (for TOML keys).
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)*
                }
            }

            /// Parse a role from a string (for TOML parsing).
            pub fn from_str(s: &str) -> Option<Self> {
                match s {
                    $($str => Some(Self::$variant),)*
                    _ => None,
                }
            }

            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)*];
        }
    };
}

/// Color roles for palette colors.
///
/// These roles represent semantic color purposes that the style engine
/// asks the palette for when painting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ColorRole {
    /// Foreground on window backgrounds.
    WindowText,
    /// Button background.
    Button,
    /// Lighter than the button color, for bevel highlights.
    Light,
    /// Between button and light.
    Midlight,
    /// Darker than the button color, for bevel shadows.
    Dark,
    /// Between button and dark.
    Mid,
    /// Foreground on base backgrounds.
    Text,
    /// Text that must contrast with dark backgrounds.
    BrightText,
    /// Foreground on buttons.
    ButtonText,
    /// Background of text entry and item views.
    Base,
    /// General background.
    Window,
    /// Very dark shadow.
    Shadow,
    /// Selection background.
    Highlight,
    /// Foreground on the selection.
    HighlightedText,
    /// Unvisited links.
    Link,
    /// Visited links.
    LinkVisited,
    /// Background of alternating rows.
    AlternateBase,
    /// Tool tip background.
    ToolTipBase,
    /// Tool tip foreground.
    ToolTipText,
    /// Placeholder text in empty fields.
    PlaceholderText,
}

crate::impl_role_string_conversion!(ColorRole, {
    WindowText => "WindowText",
    Button => "Button",
    Light => "Light",
    Midlight => "Midlight",
    Dark => "Dark",
    Mid => "Mid",
    Text => "Text",
    BrightText => "BrightText",
    ButtonText => "ButtonText",
    Base => "Base",
    Window => "Window",
    Shadow => "Shadow",
    Highlight => "Highlight",
    HighlightedText => "HighlightedText",
    Link => "Link",
    LinkVisited => "LinkVisited",
    AlternateBase => "AlternateBase",
    ToolTipBase => "ToolTipBase",
    ToolTipText => "ToolTipText",
    PlaceholderText => "PlaceholderText",
});

/// Color groups: which state of a control a color is meant for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum ColorGroup {
    /// Focused window, enabled control.
    #[default]
    Active,
    /// Enabled control in an unfocused window.
    Inactive,
    /// Disabled control.
    Disabled,
}

crate::impl_role_string_conversion!(ColorGroup, {
    Active => "Active",
    Inactive => "Inactive",
    Disabled => "Disabled",
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_names_round_trip() {
        for role in ColorRole::ALL {
            assert_eq!(ColorRole::from_str(role.as_str()), Some(*role));
        }
        assert_eq!(ColorRole::from_str("Selection"), None);
    }

    #[test]
    fn group_names() {
        assert_eq!(ColorGroup::from_str("Disabled"), Some(ColorGroup::Disabled));
        assert_eq!(ColorGroup::default(), ColorGroup::Active);
    }
}
