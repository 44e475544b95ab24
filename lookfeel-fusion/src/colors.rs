// SPDX-License-Identifier: LGPL-3.0-only

//! Colors Fusion derives from a palette.
//!
//! Fusion never paints palette roles directly for its bevels. Every fill
//! and outline is a shade of the button, window or highlight color.

use lookfeel_core::draw_util::{darker, lighter};
use lookfeel_theme::{ColorRole, Palette};
use vello::peniko::Color;

/// Highest HSV value the highlighted outline may reach.
const MAX_OUTLINE_VALUE: u8 = 160;

/// White overlay for the lit edge of raised surfaces.
pub fn light_shade() -> Color {
    Color::from_rgba8(255, 255, 255, 90)
}

/// Black overlay for the shaded edge of raised surfaces.
pub fn dark_shade() -> Color {
    Color::from_rgba8(0, 0, 0, 60)
}

/// Faint shadow along the top inside edge of sunken surfaces.
pub fn top_shadow() -> Color {
    Color::from_rgba8(0, 0, 0, 18)
}

/// Faint white line just inside the top edge of raised surfaces.
pub fn inner_contrast_line() -> Color {
    Color::from_rgba8(255, 255, 255, 30)
}

/// The highlight color.
pub fn highlight(pal: &Palette) -> Color {
    pal.color(ColorRole::Highlight)
}

/// Text drawn over [highlight].
pub fn highlighted_text(pal: &Palette) -> Color {
    pal.color(ColorRole::HighlightedText)
}

/// Outline of frames and unfocused controls.
pub fn outline(pal: &Palette) -> Color {
    darker(pal.color(ColorRole::Window), 140)
}

/// Outline of focused or default controls, never brighter than value 160.
pub fn highlighted_outline(pal: &Palette) -> Color {
    let color = darker(highlight(pal), 125);
    let c = color.to_rgba8();
    let value = c.r.max(c.g).max(c.b);
    if value <= MAX_OUTLINE_VALUE {
        return color;
    }
    let scale = |v: u8| (v as u32 * MAX_OUTLINE_VALUE as u32 / value as u32) as u8;
    Color::from_rgba8(scale(c.r), scale(c.g), scale(c.b), c.a)
}

/// Fill of the tab bar frame.
pub fn tab_frame_color(pal: &Palette) -> Color {
    lighter(button_color(pal, false, false, false), 104)
}

/// Face color of a button.
///
/// The palette's button color is lifted towards white in proportion to how
/// dark it is and loses a quarter of its saturation. Default buttons take
/// a tenth of the highlight. Pressed buttons darken, hovered ones brighten.
pub fn button_color(pal: &Palette, highlighted: bool, down: bool, hovered: bool) -> Color {
    let button = pal.color(ColorRole::Button);
    let c = button.to_rgba8();
    let gray = (c.r as i32 * 11 + c.g as i32 * 16 + c.b as i32 * 5) / 32;
    let lift = ((180 - gray) / 6).max(1) as u32;
    let mut color = desaturated(lighter(button, 100 + lift), 0.75);
    if highlighted {
        color = merged_colors(color, lighter(highlighted_outline(pal), 130), 90);
    }
    if down {
        darker(color, 110)
    } else if hovered {
        lighter(color, 104)
    } else {
        color
    }
}

/// Outline of a button.
pub fn button_outline(pal: &Palette, highlighted: bool, enabled: bool) -> Color {
    let color = if highlighted && enabled {
        highlighted_outline(pal)
    } else {
        outline(pal)
    };
    if enabled {
        color
    } else {
        lighter(color, 115)
    }
}

/// Top stop of a bevel gradient.
pub fn gradient_start(color: Color) -> Color {
    lighter(color, 124)
}

/// Bottom stop of a bevel gradient.
pub fn gradient_stop(color: Color) -> Color {
    lighter(color, 102)
}

/// `factor` percent of `a` blended with the rest of `b`, alpha included.
pub fn merged_colors(a: Color, b: Color, factor: u32) -> Color {
    let (a, b) = (a.to_rgba8(), b.to_rgba8());
    let factor = factor.min(100);
    let mix = |x: u8, y: u8| ((x as u32 * factor + y as u32 * (100 - factor)) / 100) as u8;
    Color::from_rgba8(mix(a.r, b.r), mix(a.g, b.g), mix(a.b, b.b), mix(a.a, b.a))
}

/// Fill of slider and progress grooves: the button face at 90% value.
pub fn groove_color(pal: &Palette) -> Color {
    let c = button_color(pal, false, false, false).to_rgba8();
    let scale = |v: u8| (v as u32 * 9 / 10) as u8;
    Color::from_rgba8(scale(c.r), scale(c.g), scale(c.b), c.a)
}

/// `color` with its HSV saturation multiplied by `factor`, hue and value kept.
fn desaturated(color: Color, factor: f32) -> Color {
    let c = color.to_rgba8();
    let value = c.r.max(c.g).max(c.b) as f32;
    let scale = |v: u8| (value - (value - v as f32) * factor).round() as u8;
    Color::from_rgba8(scale(c.r), scale(c.g), scale(c.b), c.a)
}
