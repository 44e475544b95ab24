// SPDX-License-Identifier: LGPL-3.0-only

//! Built-in palettes.
//!
//! In TOML theme files, alpha colors are specified as 8-character hex strings:
//! `#rrggbbaa` where `aa` is the alpha channel.

use super::roles::{ColorGroup, ColorRole};
use super::util::{rgb8, rgba8};
use super::Theme;

/// Helper to set a color with RGB values in every group.
fn set_rgb(theme: &mut Theme, role: ColorRole, r: u8, g: u8, b: u8) {
    theme.set_color_all(role, rgb8(r, g, b));
}

/// Helper to set a color with RGB values in the disabled group.
fn set_disabled_rgb(theme: &mut Theme, role: ColorRole, r: u8, g: u8, b: u8) {
    theme.set_color(ColorGroup::Disabled, role, rgb8(r, g, b));
}

/// Create the built-in light palette.
pub fn create_light_theme() -> Theme {
    let mut theme = Theme::new("Light");

    set_rgb(&mut theme, ColorRole::Window, 239, 239, 239);
    set_rgb(&mut theme, ColorRole::WindowText, 0, 0, 0);
    set_rgb(&mut theme, ColorRole::Base, 255, 255, 255);
    set_rgb(&mut theme, ColorRole::AlternateBase, 247, 247, 247);
    set_rgb(&mut theme, ColorRole::ToolTipBase, 255, 255, 220);
    set_rgb(&mut theme, ColorRole::ToolTipText, 0, 0, 0);
    set_rgb(&mut theme, ColorRole::Text, 0, 0, 0);
    set_rgb(&mut theme, ColorRole::Button, 239, 239, 239);
    set_rgb(&mut theme, ColorRole::ButtonText, 0, 0, 0);
    set_rgb(&mut theme, ColorRole::BrightText, 255, 255, 255);
    set_rgb(&mut theme, ColorRole::Light, 255, 255, 255);
    set_rgb(&mut theme, ColorRole::Midlight, 202, 202, 202);
    set_rgb(&mut theme, ColorRole::Dark, 159, 159, 159);
    set_rgb(&mut theme, ColorRole::Mid, 184, 184, 184);
    set_rgb(&mut theme, ColorRole::Shadow, 118, 118, 118);
    set_rgb(&mut theme, ColorRole::Highlight, 48, 140, 198);
    set_rgb(&mut theme, ColorRole::HighlightedText, 255, 255, 255);
    set_rgb(&mut theme, ColorRole::Link, 0, 0, 255);
    set_rgb(&mut theme, ColorRole::LinkVisited, 255, 0, 255);
    theme.set_color_all(ColorRole::PlaceholderText, rgba8(0, 0, 0, 128));

    set_disabled_rgb(&mut theme, ColorRole::WindowText, 190, 190, 190);
    set_disabled_rgb(&mut theme, ColorRole::Text, 190, 190, 190);
    set_disabled_rgb(&mut theme, ColorRole::ButtonText, 190, 190, 190);
    set_disabled_rgb(&mut theme, ColorRole::Base, 239, 239, 239);
    set_disabled_rgb(&mut theme, ColorRole::Highlight, 145, 145, 145);
    set_disabled_rgb(&mut theme, ColorRole::Shadow, 177, 177, 177);

    theme
}

/// Create the built-in dark palette.
pub fn create_dark_theme() -> Theme {
    let mut theme = Theme::new("Dark");

    set_rgb(&mut theme, ColorRole::Window, 53, 53, 53);
    set_rgb(&mut theme, ColorRole::WindowText, 255, 255, 255);
    set_rgb(&mut theme, ColorRole::Base, 42, 42, 42);
    set_rgb(&mut theme, ColorRole::AlternateBase, 66, 66, 66);
    set_rgb(&mut theme, ColorRole::ToolTipBase, 53, 53, 53);
    set_rgb(&mut theme, ColorRole::ToolTipText, 255, 255, 255);
    set_rgb(&mut theme, ColorRole::Text, 255, 255, 255);
    set_rgb(&mut theme, ColorRole::Button, 53, 53, 53);
    set_rgb(&mut theme, ColorRole::ButtonText, 255, 255, 255);
    set_rgb(&mut theme, ColorRole::BrightText, 255, 0, 0);
    set_rgb(&mut theme, ColorRole::Light, 74, 74, 74);
    set_rgb(&mut theme, ColorRole::Midlight, 63, 63, 63);
    set_rgb(&mut theme, ColorRole::Dark, 35, 35, 35);
    set_rgb(&mut theme, ColorRole::Mid, 45, 45, 45);
    set_rgb(&mut theme, ColorRole::Shadow, 20, 20, 20);
    set_rgb(&mut theme, ColorRole::Highlight, 42, 130, 218);
    set_rgb(&mut theme, ColorRole::HighlightedText, 255, 255, 255);
    set_rgb(&mut theme, ColorRole::Link, 42, 130, 218);
    set_rgb(&mut theme, ColorRole::LinkVisited, 130, 90, 218);
    theme.set_color_all(ColorRole::PlaceholderText, rgba8(255, 255, 255, 128));

    set_disabled_rgb(&mut theme, ColorRole::WindowText, 127, 127, 127);
    set_disabled_rgb(&mut theme, ColorRole::Text, 127, 127, 127);
    set_disabled_rgb(&mut theme, ColorRole::ButtonText, 127, 127, 127);
    set_disabled_rgb(&mut theme, ColorRole::Highlight, 80, 80, 80);
    set_disabled_rgb(&mut theme, ColorRole::HighlightedText, 127, 127, 127);

    theme
}
