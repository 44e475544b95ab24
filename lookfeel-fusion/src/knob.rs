// SPDX-License-Identifier: LGPL-3.0-only

//! The Fusion dial: a shaded knob with a dot marking the value.

use lookfeel_core::canvas::{Brush, Canvas, Pen, PointF, RectF};
use lookfeel_core::draw_util::{darker, lighter, with_alpha};
use lookfeel_core::geometry::Rect;
use lookfeel_core::kinds::SubControl;
use lookfeel_core::option::{DrawOption, SliderOption};
use lookfeel_core::state::State;
use lookfeel_core::style::{dial_angle, dial_big_line, dial_notches};
use lookfeel_theme::ColorRole;
use vello::peniko::Color;

use crate::colors::{button_color, highlighted_outline};

/// Knob bounds inside a dial of `rect`, in the dial's own coordinates.
pub(crate) fn knob_rect(rect: Rect) -> RectF {
    let r = (rect.width.min(rect.height) / 2) as f64;
    let r = r - r / 50.0;
    let d = r / 6.0;
    let dx = d + (rect.width as f64 - 2.0 * r) / 2.0 + 1.0;
    let dy = d + (rect.height as f64 - 2.0 * r) / 2.0 + 1.0;
    let side = (r * 2.0 - 2.0 * d - 2.0).floor();
    RectF::new(dx + 0.5, dy + 0.5, dx + 0.5 + side, dy + 0.5 + side)
}

/// Center of the value marker, `fraction` of the way from the middle of
/// the dial towards its notches.
pub(crate) fn marker_position(slider: &SliderOption, rect: Rect, fraction: f64) -> PointF {
    let r = rect.width.min(rect.height) / 2;
    let len = (r - dial_big_line(r) - 3) as f64;
    let back = fraction * len;
    let a = dial_angle(slider);
    PointF::new(
        rect.width as f64 / 2.0 + back * a.cos(),
        rect.height as f64 / 2.0 - back * a.sin(),
    )
}

/// Paint the dial described by `opt` onto `canvas`.
pub(crate) fn draw_knob(opt: &DrawOption, slider: &SliderOption, canvas: &mut dyn Canvas) {
    let rect = opt.rect;
    if !rect.is_valid() {
        return;
    }
    let pal = opt.state_palette();
    let enabled = opt.state.contains(State::ENABLED);
    let r = (rect.width.min(rect.height) / 2) as f64;
    let pen_size = (r - r / 50.0) / 20.0;
    let face = button_color(&pal, false, false, false);
    let br = knob_rect(rect);

    canvas.save();
    canvas.translate(rect.x as f64, rect.y as f64);
    if opt.sub_controls.contains(SubControl::DialTickmarks) {
        let pen = Pen::new(pal.color(ColorRole::Dark));
        for (from, to) in dial_notches(slider, rect) {
            canvas.draw_line_f(from, to, &pen);
        }
    }

    if enabled {
        let shadow = pen_size.max(2.0) / 2.0;
        let spread = br.inflate(2.0 * shadow, 2.0 * shadow);
        let shadow_rect = RectF::new(spread.x0 + shadow, spread.y0 + shadow, spread.x1 + shadow, spread.y1 + shadow);
        canvas.draw_ellipse(shadow_rect, None, Some(&Brush::Solid(Color::from_rgba8(0, 0, 0, 40))));
    }
    let fill = enabled.then(|| Brush::LinearGradient {
        start: PointF::new(br.x0, br.y0),
        end: PointF::new(br.x1, br.y1),
        stops: vec![
            (0.0, lighter(face, 110)),
            (0.5, face),
            (0.501, darker(face, 102)),
            (1.0, darker(face, 115)),
        ],
    });
    canvas.draw_ellipse(br, Some(&Pen::new(darker(face, 280))), fill.as_ref());
    canvas.draw_ellipse(br.inflate(-1.0, -1.0), Some(&Pen::new(lighter(face, 110))), None);

    if opt.state.contains(State::HAS_FOCUS) {
        let ring = Pen::new(with_alpha(highlighted_outline(&pal), 127)).with_width(2.0);
        canvas.draw_ellipse(br.inflate(1.0, 1.0), Some(&ring), None);
    }

    let dot = marker_position(slider, rect, 0.70);
    let ds = r / 7.0;
    let marker = RectF::new(dot.x - ds, dot.y - ds, dot.x + ds, dot.y + ds);
    let tint = with_alpha(lighter(face, 104), 204);
    let marker_fill = Brush::LinearGradient {
        start: PointF::new(marker.x0, marker.y0),
        end: PointF::new(marker.x1, marker.y1),
        stops: vec![(0.0, darker(tint, 110)), (0.4, darker(tint, 120)), (1.0, darker(tint, 140))],
    };
    if pen_size > 3.0 {
        let groove = Pen::new(Color::from_rgba8(0, 0, 0, 25)).with_width(pen_size);
        canvas.draw_line_f(
            marker_position(slider, rect, 0.90),
            marker_position(slider, rect, 0.96),
            &groove,
        );
    }
    canvas.draw_ellipse(
        marker.inflate(1.0, 1.0),
        Some(&Pen::new(Color::from_rgba8(255, 255, 255, 150))),
        Some(&marker_fill),
    );
    canvas.draw_ellipse(marker, Some(&Pen::new(Color::from_rgba8(0, 0, 0, 80))), None);
    canvas.restore();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_knob_is_centered_in_a_square_dial() {
        let br = knob_rect(Rect::new(0, 0, 60, 60));
        let center = br.center();
        assert!((center.x - center.y).abs() < 1e-9);
        assert!(br.width() < 60.0);
        assert_eq!(br.width(), br.height());
    }

    #[test]
    fn test_marker_points_up_at_mid_value() {
        let slider = SliderOption {
            maximum: 100,
            slider_position: 50,
            ..Default::default()
        };
        let dot = marker_position(&slider, Rect::new(0, 0, 60, 60), 0.70);
        assert!((dot.x - 30.0).abs() < 1e-9);
        assert!(dot.y < 30.0);
    }
}
