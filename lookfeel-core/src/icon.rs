// SPDX-License-Identifier: LGPL-3.0-only

//! Derived icon pixmaps for the disabled and selected modes.

use lookfeel_theme::{ColorGroup, ColorRole, Palette};

use crate::asset::Pixmap;
use crate::kinds::IconMode;

/// Opacity of the highlight tint over selected icons.
const SELECTED_TINT: f32 = 0.3;

/// A 256 entry ramp from black through `base` to white.
fn disabled_ramp(base: [u8; 3]) -> [[u8; 3]; 256] {
    let mut ramp = [[0u8; 3]; 256];
    for i in 0..128usize {
        let mut entry = [0u8; 3];
        let mut bright = [0u8; 3];
        for c in 0..3 {
            let v = base[c] as usize;
            entry[c] = ((v * i * 2) >> 8) as u8;
            bright[c] = (v + i * 2).min(255) as u8;
        }
        ramp[i] = entry;
        ramp[i + 128] = bright;
    }
    ramp
}

/// Intensity of the base color, pushed away from mid gray so the ramp keeps contrast.
fn base_intensity(base: [u8; 3]) -> i32 {
    let [r, g, b] = base.map(i32::from);
    let mut intensity = (77 * r + 150 * g + 28 * b) / 255;
    let dominant = (r - 191 > g && r - 191 > b) || (g - 191 > r && g - 191 > b) || (b - 191 > r && b - 191 > g);
    if dominant {
        intensity += 91;
    } else if intensity <= 128 {
        intensity -= 51;
    }
    intensity
}

fn disabled_pixmap(pixmap: &Pixmap, palette: &Palette) -> Pixmap {
    let window = palette.color_in(ColorGroup::Disabled, ColorRole::Window).to_rgba8();
    let base = [window.r, window.g, window.b];
    let ramp = disabled_ramp(base);
    let shift = 130 - base_intensity(base) / 3;
    pixmap.map_pixels(|[r, g, b, a]| {
        let gray = (11 * r as i32 + 16 * g as i32 + 5 * b as i32) / 32;
        let index = (gray / 3 + shift).clamp(0, 255) as usize;
        let [r, g, b] = ramp[index];
        [r, g, b, a]
    })
}

fn selected_pixmap(pixmap: &Pixmap, palette: &Palette) -> Pixmap {
    let hl = palette.color_in(ColorGroup::Active, ColorRole::Highlight).to_rgba8();
    let tint = [hl.r, hl.g, hl.b];
    pixmap.map_pixels(|[r, g, b, a]| {
        let mix = |px: u8, t: u8| (t as f32 * SELECTED_TINT + px as f32 * (1.0 - SELECTED_TINT)).round() as u8;
        [mix(r, tint[0]), mix(g, tint[1]), mix(b, tint[2]), a]
    })
}

/// Derive the pixmap for `mode` from a normal-mode pixmap.
///
/// Disabled pixmaps map intensity onto a ramp built from the disabled
/// Window color. Selected pixmaps are tinted with the highlight. Alpha is
/// kept in both cases; Normal and Active return the input.
pub fn generated_icon_pixmap(mode: IconMode, pixmap: &Pixmap, palette: &Palette) -> Pixmap {
    match mode {
        IconMode::Disabled => disabled_pixmap(pixmap, palette),
        IconMode::Selected => selected_pixmap(pixmap, palette),
        IconMode::Normal | IconMode::Active => pixmap.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ramp_ends() {
        let ramp = disabled_ramp([200, 100, 50]);
        assert_eq!(ramp[0], [0, 0, 0]);
        assert_eq!(ramp[128], [200, 100, 50]);
        assert_eq!(ramp[255], [255, 255, 255]);
    }

    #[test]
    fn test_dominant_channel_brightens() {
        assert_eq!(base_intensity([255, 0, 0]), 77 + 91);
        assert_eq!(base_intensity([0, 0, 0]), -51);
    }

    #[test]
    fn test_disabled_keeps_alpha_and_flattens_color() {
        let pixmap = Pixmap::from_rgba8(2, 1, vec![255, 0, 0, 255, 0, 0, 255, 40]).unwrap();
        let out = generated_icon_pixmap(IconMode::Disabled, &pixmap, &Palette::default());
        assert_eq!(out.pixel(1, 0).map(|p| p[3]), Some(40));
        assert_ne!(out.pixel(0, 0), pixmap.pixel(0, 0));
    }

    #[test]
    fn test_normal_is_identity() {
        let pixmap = Pixmap::from_rgba8(1, 1, vec![1, 2, 3, 4]).unwrap();
        assert_eq!(generated_icon_pixmap(IconMode::Active, &pixmap, &Palette::default()), pixmap);
    }
}
