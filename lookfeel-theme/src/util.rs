// SPDX-License-Identifier: LGPL-3.0-only

//! Shared utility functions for theme parsing and color handling.

use vello::peniko::Color;
use super::error::ThemeError;

/// Parse a hex color string with optional alpha channel.
///
/// Supports both RGB and RGBA formats:
/// - `#rrggbb` - 6 characters, opaque (alpha = 255)
/// - `#rrggbbaa` - 8 characters, with alpha channel (0-255)
pub fn parse_hex_color(hex: &str) -> Result<Color, ThemeError> {
    let digits = hex.trim().trim_start_matches('#');
    if !digits.is_ascii() || (digits.len() != 6 && digits.len() != 8) {
        return Err(ThemeError::InvalidColor(format!(
            "Hex color must be 6 or 8 characters: {}",
            hex
        )));
    }

    let channel = |at: usize| {
        u8::from_str_radix(&digits[at..at + 2], 16)
            .map_err(|_| ThemeError::InvalidColor(hex.to_string()))
    };

    let (r, g, b) = (channel(0)?, channel(2)?, channel(4)?);
    if digits.len() == 8 {
        Ok(Color::from_rgba8(r, g, b, channel(6)?))
    } else {
        Ok(Color::from_rgb8(r, g, b))
    }
}

/// Format a color as `#rrggbb`, or `#rrggbbaa` when it is not opaque.
pub fn to_hex_color(color: Color) -> String {
    let rgba = color.to_rgba8();
    let (r, g, b, a) = (rgba.r, rgba.g, rgba.b, rgba.a);
    if a == 255 {
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    } else {
        format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
    }
}

/// Pack a color as `0xAARRGGBB`, the integer form hints use for colors.
pub fn to_argb32(color: Color) -> u32 {
    let rgba = color.to_rgba8();
    let (r, g, b, a) = (rgba.r, rgba.g, rgba.b, rgba.a);
    u32::from_be_bytes([a, r, g, b])
}

/// Create a color with RGBA components (convenience wrapper).
pub fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Color {
    Color::from_rgba8(r, g, b, a)
}

/// Create a color with RGB components, defaulting alpha to 255 (opaque).
pub fn rgb8(r: u8, g: u8, b: u8) -> Color {
    Color::from_rgb8(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rgb_and_rgba() {
        let red = parse_hex_color("#ff0000").unwrap();
        assert_eq!(red, rgb8(255, 0, 0));

        let translucent = parse_hex_color("ff000080").unwrap();
        assert_eq!(translucent, rgba8(255, 0, 0, 128));
    }

    #[test]
    fn rejects_malformed_colors() {
        assert!(parse_hex_color("#fff").is_err());
        assert!(parse_hex_color("#gg0000").is_err());
        assert!(parse_hex_color("#ééé").is_err());
    }

    #[test]
    fn hex_formatting_matches_parsing() {
        assert_eq!(to_hex_color(rgb8(0x30, 0x8c, 0xc6)), "#308cc6");
        assert_eq!(to_hex_color(rgba8(1, 2, 3, 4)), "#01020304");
        assert_eq!(to_argb32(rgba8(0x11, 0x22, 0x33, 0xff)), 0xff112233);
    }
}
