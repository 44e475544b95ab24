// SPDX-License-Identifier: LGPL-3.0-only

#![warn(missing_docs)]

//! The Fusion look-and-feel.
//!
//! [FusionStyle] wraps a [CommonStyle] and changes the button bevel, the
//! slider groove and handle, the progress groove, the dial knob and a set
//! of metrics. Every other query falls through to the common algorithms,
//! which call back into the Fusion overrides wherever they embed them.

use lookfeel_core::canvas::{Brush, Canvas, Pen, PointF};
use lookfeel_core::geometry::{center_offset, Orientation, Rect};
use lookfeel_core::kinds::{ComplexControl, ControlElement, PrimitiveElement, SubControl};
use lookfeel_core::metric::{dpi_scaled, MetricId, REFERENCE_DPI};
use lookfeel_core::option::{ButtonFeatures, DrawOption, TickPosition};
use lookfeel_core::state::State;
use lookfeel_core::style::{CommonStyle, Style};
use lookfeel_theme::{ColorRole, Palette};
use vello::peniko::Color;

pub mod colors;
mod knob;

use colors::{
    button_color, button_outline, gradient_start, gradient_stop, groove_color, inner_contrast_line, outline,
    top_shadow,
};

/// Name the Fusion style registers under.
pub const STYLE_NAME: &str = "fusion";

/// Thickness of the slider groove strip at 96 DPI.
const GROOVE_THICKNESS: i32 = 7;

/// The Fusion style.
#[derive(Debug)]
pub struct FusionStyle {
    base: CommonStyle,
}

impl FusionStyle {
    /// A Fusion style over a default common style.
    pub fn new() -> Self {
        Self::with_base(CommonStyle::new())
    }

    /// A Fusion style over a configured common style, keeping its platform,
    /// assets and cache.
    pub fn with_base(base: CommonStyle) -> Self {
        log::debug!("FusionStyle: created over '{}'", base.name());
        Self {
            base: base.with_name(STYLE_NAME),
        }
    }

    fn draw_slider(&self, opt: &DrawOption, canvas: &mut dyn Canvas) {
        let Some(slider) = opt.slider() else {
            return;
        };
        let pal = opt.state_palette();
        if opt.sub_controls.contains(SubControl::SliderTickmarks) && slider.tick_position != TickPosition::NoTicks {
            let ticks = opt.clone().with_sub_controls(SubControl::SliderTickmarks);
            self.base()
                .draw_complex_control_via(self.front(), ComplexControl::Slider, &ticks, canvas);
        }
        if opt.sub_controls.contains(SubControl::SliderGroove) {
            let groove = self.front().sub_control_rect(ComplexControl::Slider, opt, SubControl::SliderGroove);
            if groove.is_valid() {
                let color = groove_color(&pal);
                let inner = groove.adjusted(1, 1, -1, -1);
                canvas.fill_rect(inner, &vertical_gradient(inner, gradient_stop(color), color));
                canvas.stroke_rect(groove, &Pen::new(outline(&pal)));
                canvas.draw_line(inner.top_left(), inner.top_right(), &Pen::new(top_shadow()));
            }
        }
        if opt.sub_controls.contains(SubControl::SliderHandle) {
            let handle = self.front().sub_control_rect(ComplexControl::Slider, opt, SubControl::SliderHandle);
            let mut state = opt.state;
            if opt.active_sub_controls.contains(SubControl::SliderHandle) {
                state |= State::SUNKEN;
            }
            paint_bevel(canvas, handle, &pal, state, opt.state.contains(State::HAS_FOCUS));
        }
    }
}

impl Default for FusionStyle {
    fn default() -> Self {
        Self::new()
    }
}

impl Style for FusionStyle {
    fn base(&self) -> &CommonStyle {
        &self.base
    }

    fn front(&self) -> &dyn Style {
        self
    }

    fn draw_primitive(&self, pe: PrimitiveElement, opt: &DrawOption, canvas: &mut dyn Canvas) {
        match pe {
            PrimitiveElement::PanelButtonCommand => {
                let default = opt
                    .button()
                    .is_some_and(|b| b.features.contains(ButtonFeatures::DEFAULT_BUTTON));
                let focused = opt.state.contains(State::HAS_FOCUS);
                paint_bevel(canvas, opt.rect, &opt.state_palette(), opt.state, default || focused);
            },
            _ => self.base().draw_primitive_via(self.front(), pe, opt, canvas),
        }
    }

    fn draw_control(&self, ce: ControlElement, opt: &DrawOption, canvas: &mut dyn Canvas) {
        match ce {
            ControlElement::ProgressBarGroove => {
                let r = opt.rect;
                if !r.is_valid() {
                    return;
                }
                let pal = opt.state_palette();
                let inner = r.adjusted(1, 1, -1, -1);
                canvas.fill_rect(inner, &Brush::Solid(pal.color(ColorRole::Base)));
                canvas.stroke_rect(r, &Pen::new(outline(&pal)));
                canvas.draw_line(inner.top_left(), inner.top_right(), &Pen::new(top_shadow()));
            },
            _ => self.base().draw_control_via(self.front(), ce, opt, canvas),
        }
    }

    fn draw_complex_control(&self, cc: ComplexControl, opt: &DrawOption, canvas: &mut dyn Canvas) {
        match cc {
            ComplexControl::Slider => self.draw_slider(opt, canvas),
            ComplexControl::Dial => {
                if let Some(dial) = opt.slider() {
                    knob::draw_knob(opt, dial, canvas);
                }
            },
            _ => self.base().draw_complex_control_via(self.front(), cc, opt, canvas),
        }
    }

    fn sub_control_rect(&self, cc: ComplexControl, opt: &DrawOption, sc: SubControl) -> Rect {
        let r = self.base().sub_control_rect_via(self.front(), cc, opt, sc);
        match (cc, sc, opt.slider()) {
            (ComplexControl::Slider, SubControl::SliderGroove, Some(slider)) if r.is_valid() => {
                let thickness = dpi_scaled(GROOVE_THICKNESS, opt.dpi);
                match slider.orientation {
                    Orientation::Horizontal => {
                        Rect::new(r.x, r.y + center_offset(r.height, thickness), r.width, thickness)
                    },
                    Orientation::Vertical => {
                        Rect::new(r.x + center_offset(r.width, thickness), r.y, thickness, r.height)
                    },
                }
            },
            _ => r,
        }
    }

    fn pixel_metric(&self, metric: MetricId, opt: Option<&DrawOption>) -> i32 {
        use MetricId::*;
        let dpi = opt.map_or(REFERENCE_DPI, |o| o.dpi);
        let px = |v: i32| dpi_scaled(v, dpi);
        match metric {
            SliderTickmarkOffset => px(4),
            ButtonDefaultIndicator | ButtonShiftHorizontal | ButtonShiftVertical => 0,
            ScrollBarSliderMin => px(26),
            ScrollBarExtent => px(14),
            SliderThickness | SliderLength | SliderControlThickness => px(15),
            IndicatorWidth | IndicatorHeight | ExclusiveIndicatorWidth | ExclusiveIndicatorHeight => px(14),
            SplitterWidth => px(5),
            TitleBarHeight => px(24),
            TabBarTabVSpace => px(12),
            MaximumDragDistance => -1,
            DefaultFrameWidth => 1,
            _ => self.base().pixel_metric_via(self.front(), metric, opt),
        }
    }
}

/// Top-to-bottom gradient across `r`.
fn vertical_gradient(r: Rect, top: Color, bottom: Color) -> Brush {
    Brush::LinearGradient {
        start: PointF::new(r.x as f64, r.y as f64),
        end: PointF::new(r.x as f64, (r.y + r.height) as f64),
        stops: vec![(0.0, top), (1.0, bottom)],
    }
}

/// Raised or pressed button face with its outline.
///
/// Pressed faces are flat with a shadow under the top edge. Raised faces
/// carry a gradient and a light line under the top edge.
fn paint_bevel(canvas: &mut dyn Canvas, r: Rect, pal: &Palette, state: State, highlighted: bool) {
    if !r.is_valid() {
        return;
    }
    let enabled = state.contains(State::ENABLED);
    let down = state.intersects(State::SUNKEN | State::ON);
    let hovered = enabled && state.contains(State::MOUSE_OVER);
    let face = button_color(pal, highlighted, down, hovered);
    let inner = r.adjusted(1, 1, -1, -1);
    let (fill, edge) = if down {
        (Brush::Solid(face), top_shadow())
    } else {
        (vertical_gradient(inner, gradient_start(face), gradient_stop(face)), inner_contrast_line())
    };
    canvas.fill_rect(inner, &fill);
    canvas.stroke_rect(r, &Pen::new(button_outline(pal, highlighted, enabled)));
    canvas.draw_line(inner.top_left(), inner.top_right(), &Pen::new(edge));
}

#[cfg(test)]
mod tests {
    use super::*;
    use lookfeel_core::canvas::{DrawCommand, Picture};
    use lookfeel_core::option::{ButtonOption, SliderOption};

    fn face_fills(picture: &Picture) -> Vec<&Brush> {
        picture
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillRect(_, brush) => Some(brush),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_raised_bevel_uses_a_gradient() {
        let style = FusionStyle::new();
        let opt = DrawOption::new(Rect::new(0, 0, 80, 24));
        let mut picture = Picture::new();
        style.draw_primitive(PrimitiveElement::PanelButtonCommand, &opt, &mut picture);
        let fills = face_fills(&picture);
        assert_eq!(fills.len(), 1);
        assert!(matches!(fills[0], Brush::LinearGradient { stops, .. } if stops.len() == 2));
        assert_eq!(picture.filled_rects(), vec![Rect::new(1, 1, 78, 22)]);
    }

    #[test]
    fn test_pressed_bevel_is_flat_and_darker() {
        let style = FusionStyle::new();
        let opt = DrawOption::new(Rect::new(0, 0, 80, 24)).with_state(State::ENABLED | State::SUNKEN);
        let mut picture = Picture::new();
        style.draw_primitive(PrimitiveElement::PanelButtonCommand, &opt, &mut picture);
        let pal = opt.state_palette();
        assert_eq!(face_fills(&picture), vec![&Brush::Solid(button_color(&pal, false, true, false))]);
    }

    #[test]
    fn test_default_button_takes_the_highlighted_outline() {
        let style = FusionStyle::new();
        let opt = DrawOption::new(Rect::new(0, 0, 80, 24)).with_payload(ButtonOption {
            features: ButtonFeatures::DEFAULT_BUTTON,
            ..Default::default()
        });
        let mut picture = Picture::new();
        style.draw_primitive(PrimitiveElement::PanelButtonCommand, &opt, &mut picture);
        let expected = colors::highlighted_outline(&opt.state_palette());
        assert!(picture
            .commands()
            .iter()
            .any(|c| matches!(c, DrawCommand::StrokeRect(_, pen) if pen.color == expected)));
    }

    #[test]
    fn test_groove_is_a_centered_strip() {
        let style = FusionStyle::new();
        let opt = DrawOption::new(Rect::new(0, 0, 200, 30)).with_payload(SliderOption {
            maximum: 100,
            ..Default::default()
        });
        // Base groove: y 4, height 15. The strip keeps its center.
        let groove = style.sub_control_rect(ComplexControl::Slider, &opt, SubControl::SliderGroove);
        assert_eq!(groove, Rect::new(0, 8, 200, 7));
    }

    #[test]
    fn test_metrics_override_and_fall_through() {
        let style = FusionStyle::new();
        let common = CommonStyle::new();
        assert_eq!(style.pixel_metric(MetricId::IndicatorWidth, None), 14);
        assert_eq!(style.pixel_metric(MetricId::ScrollBarExtent, None), 14);
        assert_eq!(style.pixel_metric(MetricId::DefaultFrameWidth, None), 1);
        assert_eq!(
            style.pixel_metric(MetricId::ButtonMargin, None),
            common.pixel_metric(MetricId::ButtonMargin, None)
        );
        // Derived from DefaultFrameWidth through the front style.
        assert_eq!(style.pixel_metric(MetricId::SpinBoxFrameWidth, None), 1);
    }
}
