// SPDX-License-Identifier: LGPL-3.0-only

//! Beveled frame and line helpers shared by the painters.
//!
//! Every helper draws whole pixels with [Canvas::fill_rect] so the output
//! lands on the pixel grid regardless of the canvas backend. Degenerate
//! rects and negative line widths draw nothing.

use lookfeel_theme::{ColorRole, Palette};
use vello::peniko::Color;

use crate::canvas::{Brush, Canvas, Pen};
use crate::geometry::{Point, Rect};

fn frame_ring(canvas: &mut dyn Canvas, r: Rect, inset: i32, top_left: Color, bottom_right: Color) {
    let ring = r.adjusted(inset, inset, -inset, -inset);
    if ring.width <= 0 || ring.height <= 0 {
        return;
    }
    let tl = Brush::Solid(top_left);
    let br = Brush::Solid(bottom_right);
    canvas.fill_rect(Rect::new(ring.x, ring.y, ring.width, 1), &tl);
    canvas.fill_rect(Rect::new(ring.x, ring.y, 1, ring.height), &tl);
    canvas.fill_rect(Rect::new(ring.x, ring.bottom(), ring.width, 1), &br);
    canvas.fill_rect(Rect::new(ring.right(), ring.y, 1, ring.height), &br);
}

fn fill_inside(canvas: &mut dyn Canvas, r: Rect, inset: i32, fill: Option<&Brush>) {
    if let Some(fill) = fill {
        let inner = r.adjusted(inset, inset, -inset, -inset);
        if inner.is_valid() {
            canvas.fill_rect(inner, fill);
        }
    }
}

/// A panel whose `lw` edge rings look raised or sunken.
pub fn shade_panel(canvas: &mut dyn Canvas, r: Rect, pal: &Palette, sunken: bool, lw: i32, fill: Option<&Brush>) {
    if !r.is_valid() || lw < 0 {
        return;
    }
    let (tl, br) = if sunken {
        (pal.color(ColorRole::Dark), pal.color(ColorRole::Light))
    } else {
        (pal.color(ColorRole::Light), pal.color(ColorRole::Dark))
    };
    for i in 0..lw {
        frame_ring(canvas, r, i, tl, br);
    }
    fill_inside(canvas, r, lw, fill);
}

/// A shaded box: outer rings, `mid` rings in the Mid color, then inner
/// rings with the light and dark sides swapped.
pub fn shade_rect(canvas: &mut dyn Canvas, r: Rect, pal: &Palette, sunken: bool, lw: i32, mid: i32, fill: Option<&Brush>) {
    if !r.is_valid() || lw < 0 || mid < 0 {
        return;
    }
    let (tl, br) = if sunken {
        (pal.color(ColorRole::Dark), pal.color(ColorRole::Light))
    } else {
        (pal.color(ColorRole::Light), pal.color(ColorRole::Dark))
    };
    let mid_color = pal.color(ColorRole::Mid);
    for i in 0..lw {
        frame_ring(canvas, r, i, tl, br);
    }
    for i in lw..lw + mid {
        frame_ring(canvas, r, i, mid_color, mid_color);
    }
    for i in lw + mid..2 * lw + mid {
        frame_ring(canvas, r, i, br, tl);
    }
    fill_inside(canvas, r, 2 * lw + mid, fill);
}

/// A two pixel deep panel in the classic desktop look.
pub fn win_panel(canvas: &mut dyn Canvas, r: Rect, pal: &Palette, sunken: bool, fill: Option<&Brush>) {
    if !r.is_valid() {
        return;
    }
    let c = |role| pal.color(role);
    if sunken {
        frame_ring(canvas, r, 0, c(ColorRole::Dark), c(ColorRole::Light));
        frame_ring(canvas, r, 1, c(ColorRole::Shadow), c(ColorRole::Midlight));
    } else {
        frame_ring(canvas, r, 0, c(ColorRole::Light), c(ColorRole::Shadow));
        frame_ring(canvas, r, 1, c(ColorRole::Midlight), c(ColorRole::Dark));
    }
    fill_inside(canvas, r, 2, fill);
}

/// A flat outline `lw` pixels wide.
pub fn plain_rect(canvas: &mut dyn Canvas, r: Rect, color: Color, lw: i32, fill: Option<&Brush>) {
    if !r.is_valid() || lw < 0 {
        return;
    }
    for i in 0..lw {
        frame_ring(canvas, r, i, color, color);
    }
    fill_inside(canvas, r, lw, fill);
}

/// A horizontal or vertical etched line centered on the segment `p1..p2`.
///
/// Slanted segments fall back to a plain line in the Dark color.
pub fn shade_line(canvas: &mut dyn Canvas, p1: Point, p2: Point, pal: &Palette, sunken: bool, lw: i32, mid: i32) {
    if lw < 0 || mid < 0 {
        return;
    }
    let (tl, br) = if sunken {
        (pal.color(ColorRole::Dark), pal.color(ColorRole::Light))
    } else {
        (pal.color(ColorRole::Light), pal.color(ColorRole::Dark))
    };
    let thickness = 2 * lw + mid;
    let mid_brush = Brush::Solid(pal.color(ColorRole::Mid));
    if p1.y == p2.y {
        let x = p1.x.min(p2.x);
        let len = (p1.x - p2.x).abs() + 1;
        let y = p1.y - thickness / 2;
        for i in 0..lw {
            canvas.fill_rect(Rect::new(x, y + i, len, 1), &Brush::Solid(tl));
            canvas.fill_rect(Rect::new(x, y + lw + mid + i, len, 1), &Brush::Solid(br));
        }
        canvas.fill_rect(Rect::new(x, y + lw, len, mid), &mid_brush);
    } else if p1.x == p2.x {
        let y = p1.y.min(p2.y);
        let len = (p1.y - p2.y).abs() + 1;
        let x = p1.x - thickness / 2;
        for i in 0..lw {
            canvas.fill_rect(Rect::new(x + i, y, 1, len), &Brush::Solid(tl));
            canvas.fill_rect(Rect::new(x + lw + mid + i, y, 1, len), &Brush::Solid(br));
        }
        canvas.fill_rect(Rect::new(x + lw, y, mid, len), &mid_brush);
    } else {
        canvas.draw_line(p1, p2, &Pen::new(pal.color(ColorRole::Dark)));
    }
}

/// `color` darkened: each channel divided by `factor / 100`.
pub fn darker(color: Color, factor: u32) -> Color {
    let c = color.to_rgba8();
    let scale = |v: u8| ((v as u32 * 100) / factor.max(1)).min(255) as u8;
    Color::from_rgba8(scale(c.r), scale(c.g), scale(c.b), c.a)
}

/// `color` lightened: each channel multiplied by `factor / 100`, clamped.
pub fn lighter(color: Color, factor: u32) -> Color {
    let c = color.to_rgba8();
    let scale = |v: u8| ((v as u32 * factor) / 100).min(255) as u8;
    Color::from_rgba8(scale(c.r), scale(c.g), scale(c.b), c.a)
}

/// `color` with its alpha replaced.
pub fn with_alpha(color: Color, alpha: u8) -> Color {
    let c = color.to_rgba8();
    Color::from_rgba8(c.r, c.g, c.b, alpha)
}

/// Perceived lightness in `0..=255`.
pub fn lightness(color: Color) -> i32 {
    let c = color.to_rgba8();
    let max = c.r.max(c.g).max(c.b) as i32;
    let min = c.r.min(c.g).min(c.b) as i32;
    (max + min) / 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DrawCommand, Picture};

    fn filled_colors(pic: &Picture) -> Vec<(Rect, Color)> {
        pic.commands()
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::FillRect(rect, brush) => Some((*rect, brush.color())),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_shade_panel_edges_follow_sunken() {
        let pal = Palette::default();
        let mut pic = Picture::new();
        shade_panel(&mut pic, Rect::new(0, 0, 10, 8), &pal, true, 1, None);
        let fills = filled_colors(&pic);
        assert_eq!(fills.len(), 4);
        assert_eq!(fills[0], (Rect::new(0, 0, 10, 1), pal.color(ColorRole::Dark)));
        assert_eq!(fills[2], (Rect::new(0, 7, 10, 1), pal.color(ColorRole::Light)));
        assert_eq!(fills[3], (Rect::new(9, 0, 1, 8), pal.color(ColorRole::Light)));
    }

    #[test]
    fn test_shade_panel_fills_inside() {
        let pal = Palette::default();
        let mut pic = Picture::new();
        let fill = Brush::Solid(pal.color(ColorRole::Button));
        shade_panel(&mut pic, Rect::new(0, 0, 10, 8), &pal, false, 2, Some(&fill));
        assert_eq!(pic.filled_rects().last(), Some(&Rect::new(2, 2, 6, 4)));
    }

    #[test]
    fn test_degenerate_rect_draws_nothing() {
        let pal = Palette::default();
        let mut pic = Picture::new();
        shade_rect(&mut pic, Rect::new(0, 0, 0, 5), &pal, true, 1, 1, None);
        win_panel(&mut pic, Rect::new(0, 0, 5, -1), &pal, false, None);
        plain_rect(&mut pic, Rect::new(0, 0, 5, 5), Color::BLACK, -1, None);
        assert!(pic.is_empty());
    }

    #[test]
    fn test_shade_line_horizontal_is_centered() {
        let pal = Palette::default();
        let mut pic = Picture::new();
        shade_line(&mut pic, Point::new(0, 5), Point::new(9, 5), &pal, true, 1, 0);
        let rects = pic.filled_rects();
        assert_eq!(rects[0], Rect::new(0, 4, 10, 1));
        assert_eq!(rects[1], Rect::new(0, 5, 10, 1));
    }

    #[test]
    fn test_darker_and_lighter() {
        let c = Color::from_rgba8(150, 90, 30, 255);
        assert_eq!(darker(c, 150).to_rgba8().r, 100);
        assert_eq!(lighter(c, 200).to_rgba8().r, 255);
        assert_eq!(with_alpha(c, 10).to_rgba8().a, 10);
    }
}
