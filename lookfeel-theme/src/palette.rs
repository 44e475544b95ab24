// SPDX-License-Identifier: LGPL-3.0-only

//! Theme data and the palette API used by the style engine.
//!
//! A [Theme] stores colors per (group, role) pair. The [Palette] wraps a
//! shared theme together with the color group it is currently resolving in,
//! which is how a disabled or inactive control gets its colors.

use std::sync::Arc;

use indexmap::IndexMap;
use vello::peniko::Color;

use super::roles::{ColorGroup, ColorRole};
use super::util::rgb8;

/// Main theme structure containing the colors of every group.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    name: String,
    colors: IndexMap<(ColorGroup, ColorRole), Color>,
}

impl Theme {
    /// Create a new empty theme.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            colors: IndexMap::new(),
        }
    }

    /// The theme name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set a color for one group.
    pub fn set_color(&mut self, group: ColorGroup, role: ColorRole, color: Color) {
        self.colors.insert((group, role), color);
    }

    /// Set a color for every group.
    pub fn set_color_all(&mut self, role: ColorRole, color: Color) {
        for group in ColorGroup::ALL {
            self.set_color(*group, role, color);
        }
    }

    /// Get a color, falling back to the active group and then to the default.
    pub fn color(&self, group: ColorGroup, role: ColorRole) -> Color {
        self.colors
            .get(&(group, role))
            .or_else(|| self.colors.get(&(ColorGroup::Active, role)))
            .copied()
            .unwrap_or_else(|| Self::default_color(role))
    }

    /// Whether the theme defines the exact (group, role) pair.
    pub fn is_set(&self, group: ColorGroup, role: ColorRole) -> bool {
        self.colors.contains_key(&(group, role))
    }

    /// Iterate the explicitly set colors in insertion order.
    pub fn colors(&self) -> impl Iterator<Item = (ColorGroup, ColorRole, Color)> + '_ {
        self.colors.iter().map(|(&(g, r), &c)| (g, r, c))
    }

    /// Default color for a role (used as fallback).
    fn default_color(role: ColorRole) -> Color {
        match role {
            ColorRole::Window | ColorRole::Button => rgb8(239, 239, 239),
            ColorRole::WindowText
            | ColorRole::Text
            | ColorRole::ButtonText
            | ColorRole::ToolTipText => rgb8(0, 0, 0),
            ColorRole::Base | ColorRole::Light | ColorRole::BrightText => rgb8(255, 255, 255),
            ColorRole::HighlightedText => rgb8(255, 255, 255),
            ColorRole::AlternateBase => rgb8(247, 247, 247),
            ColorRole::ToolTipBase => rgb8(255, 255, 220),
            ColorRole::Midlight => rgb8(202, 202, 202),
            ColorRole::Dark => rgb8(159, 159, 159),
            ColorRole::Mid => rgb8(184, 184, 184),
            ColorRole::Shadow => rgb8(118, 118, 118),
            ColorRole::Highlight => rgb8(48, 140, 198),
            ColorRole::Link => rgb8(0, 0, 255),
            ColorRole::LinkVisited => rgb8(255, 0, 255),
            ColorRole::PlaceholderText => Color::from_rgba8(0, 0, 0, 128),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new("Default")
    }
}

/// Palette provides the engine-facing API for theme colors.
///
/// The Palette wraps a shared Theme (via Arc) so option bags can carry it
/// by value without cloning the color table.
#[derive(Debug, Clone)]
pub struct Palette {
    theme: Arc<Theme>,
    group: ColorGroup,
}

impl Palette {
    /// Create a new Palette from a Theme.
    pub fn new(theme: Theme) -> Self {
        Self::from_arc(Arc::new(theme))
    }

    /// Create a Palette from an `Arc<Theme>`.
    pub fn from_arc(theme: Arc<Theme>) -> Self {
        Self {
            theme,
            group: ColorGroup::Active,
        }
    }

    /// Get the color for a role in the current group.
    pub fn color(&self, role: ColorRole) -> Color {
        self.theme.color(self.group, role)
    }

    /// Get the color for a role in an explicit group.
    pub fn color_in(&self, group: ColorGroup, role: ColorRole) -> Color {
        self.theme.color(group, role)
    }

    /// The group colors are currently resolved in.
    pub fn current_group(&self) -> ColorGroup {
        self.group
    }

    /// Switch the current group in place.
    pub fn set_current_group(&mut self, group: ColorGroup) {
        self.group = group;
    }

    /// A copy of this palette resolving in another group.
    pub fn with_group(&self, group: ColorGroup) -> Self {
        Self {
            theme: Arc::clone(&self.theme),
            group,
        }
    }

    /// Get the underlying theme.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(crate::builtin::create_light_theme())
    }
}

impl PartialEq for Palette {
    fn eq(&self, other: &Self) -> bool {
        self.group == other.group
            && (Arc::ptr_eq(&self.theme, &other.theme) || self.theme == other.theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_group_falls_back_to_active() {
        let mut theme = Theme::new("t");
        theme.set_color(ColorGroup::Active, ColorRole::Text, rgb8(1, 2, 3));
        theme.set_color(ColorGroup::Disabled, ColorRole::Text, rgb8(9, 9, 9));

        assert_eq!(theme.color(ColorGroup::Inactive, ColorRole::Text), rgb8(1, 2, 3));
        assert_eq!(theme.color(ColorGroup::Disabled, ColorRole::Text), rgb8(9, 9, 9));
    }

    #[test]
    fn undefined_role_uses_default() {
        let theme = Theme::new("empty");
        assert_eq!(
            theme.color(ColorGroup::Disabled, ColorRole::Highlight),
            rgb8(48, 140, 198)
        );
    }

    #[test]
    fn palette_group_switching() {
        let mut theme = Theme::new("t");
        theme.set_color_all(ColorRole::Button, rgb8(10, 10, 10));
        theme.set_color(ColorGroup::Disabled, ColorRole::Button, rgb8(20, 20, 20));

        let palette = Palette::new(theme);
        let disabled = palette.with_group(ColorGroup::Disabled);
        assert_eq!(palette.color(ColorRole::Button), rgb8(10, 10, 10));
        assert_eq!(disabled.color(ColorRole::Button), rgb8(20, 20, 20));
        assert_eq!(disabled.current_group(), ColorGroup::Disabled);
        assert_ne!(palette, disabled);
    }
}
