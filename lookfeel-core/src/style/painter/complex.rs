// SPDX-License-Identifier: LGPL-3.0-only

use std::f64::consts::PI;

use lookfeel_theme::ColorRole;

use super::super::{CommonStyle, Style};
use super::{dial_angle, dial_big_line};
use crate::canvas::{Brush, Canvas, Pen, PointF};
use crate::draw_util::win_panel;
use crate::geometry::{slider_position_from_value, visual_rect, Alignment, Orientation, Point, Rect, Region, Size};
use crate::hint::{HintId, HintReturn};
use crate::kinds::{ComplexControl, ControlElement, PrimitiveElement, StandardPixmap, SubControl, SubControls};
use crate::metric::MetricId;
use crate::option::{ButtonSymbols, DrawOption, SliderOption, StepEnabled, TitleBarFlags, TitleBarState, ToolButtonFeatures};
use crate::state::State;

/// Scroll bar parts in paint order, the slider last.
const SCROLL_BAR_PARTS: [(SubControl, ControlElement); 7] = [
    (SubControl::ScrollBarSubLine, ControlElement::ScrollBarSubLine),
    (SubControl::ScrollBarAddLine, ControlElement::ScrollBarAddLine),
    (SubControl::ScrollBarSubPage, ControlElement::ScrollBarSubPage),
    (SubControl::ScrollBarAddPage, ControlElement::ScrollBarAddPage),
    (SubControl::ScrollBarFirst, ControlElement::ScrollBarFirst),
    (SubControl::ScrollBarLast, ControlElement::ScrollBarLast),
    (SubControl::ScrollBarSlider, ControlElement::ScrollBarSlider),
];

/// Edge length of title bar button glyphs.
const TITLE_BAR_GLYPH: i32 = 10;

/// The three corners of a dial needle, tip first, in the dial's own
/// coordinates.
fn dial_needle(slider: &SliderOption, rect: Rect) -> [PointF; 3] {
    let a = dial_angle(slider);
    let r = rect.width.min(rect.height) / 2;
    let (xc, yc) = ((rect.width / 2) as f64 + 0.5, (rect.height / 2) as f64 + 0.5);
    let len = (r - dial_big_line(r) - 5).max(5) as f64;
    let back = (len as i32 / 2) as f64;
    let at = |length: f64, angle: f64| PointF::new(xc + length * angle.cos(), yc - length * angle.sin());
    [at(len, a), at(back, a + PI * 5.0 / 6.0), at(back, a - PI * 5.0 / 6.0)]
}

/// Notch segments around a dial, two points per notch.
///
/// Notches that land on a page step are drawn long. Points are in the
/// dial's own coordinates.
pub fn dial_notches(slider: &SliderOption, rect: Rect) -> Vec<(PointF, PointF)> {
    let r = rect.width.min(rect.height) / 2;
    let big = dial_big_line(r);
    let small = big / 2;
    let (xc, yc) = ((rect.width / 2) as f64 + 0.5, (rect.height / 2) as f64 + 0.5);
    let ns = slider.tick_interval;
    if ns == 0 {
        return Vec::new();
    }
    let mut maximum = slider.maximum as i64;
    if slider.maximum < slider.minimum || maximum - slider.minimum as i64 > 1000 {
        maximum = slider.minimum as i64 + 1000;
    }
    let notches = (maximum + ns as i64 - 1 - slider.minimum as i64) / ns as i64;
    if notches <= 0 {
        return Vec::new();
    }
    let page = if slider.page_step != 0 { slider.page_step as i64 } else { 1 };
    let r = r as f64;
    (0..=notches)
        .map(|i| {
            let fraction = i as f64 / notches as f64;
            let angle = if slider.dial_wrapping {
                PI * 3.0 / 2.0 - fraction * 2.0 * PI
            } else {
                (PI * 8.0 - fraction * 10.0 * PI) / 6.0
            };
            let (s, c) = angle.sin_cos();
            let (inner, outer) = if i == 0 || (ns as i64 * i) % page == 0 {
                (r - big as f64, r)
            } else {
                (r - 1.0 - small as f64, r - 1.0)
            };
            (
                PointF::new(xc + inner * c, yc - inner * s),
                PointF::new(xc + outer * c, yc - outer * s),
            )
        })
        .collect()
}

/// Direction of the line from `p1` to `p2` in degrees, counter-clockwise
/// with y pointing down, in `(-90, 270]`.
fn line_angle(p1: PointF, p2: PointF) -> f64 {
    if p1.x == p2.x {
        return if p1.y < p2.y { 270.0 } else { 90.0 };
    }
    let (left, right) = if p1.x <= p2.x { (p1, p2) } else { (p2, p1) };
    let m = -(right.y - left.y) / (right.x - left.x);
    let angle = m.atan().to_degrees();
    if p1.x < p2.x {
        180.0 - angle
    } else {
        -angle
    }
}

impl CommonStyle {
    /// Default painting of complex controls.
    ///
    /// Only the sub-controls present in `opt.sub_controls` are painted, each
    /// through `front` on the rect the geometry resolver gives it.
    pub fn draw_complex_control_via(
        &self,
        front: &dyn Style,
        cc: ComplexControl,
        opt: &DrawOption,
        canvas: &mut dyn Canvas,
    ) {
        match cc {
            ComplexControl::Slider => self.draw_slider_ticks(front, opt, canvas),
            ComplexControl::ScrollBar => {
                if opt.slider().is_none() {
                    return;
                }
                for (sc, ce) in SCROLL_BAR_PARTS {
                    if !opt.sub_controls.contains(sc) {
                        continue;
                    }
                    let rect = front.sub_control_rect(cc, opt, sc);
                    if !rect.is_valid() {
                        continue;
                    }
                    let mut part = opt.clone().with_rect(rect);
                    if !opt.active_sub_controls.contains(sc) {
                        part.state -= State::SUNKEN | State::MOUSE_OVER;
                    }
                    front.draw_control(ce, &part, canvas);
                    if sc == SubControl::ScrollBarSlider && opt.state.contains(State::HAS_FOCUS) {
                        let focus = part.with_rect(Rect::new(rect.x + 2, rect.y + 2, rect.width - 5, rect.height - 5));
                        front.draw_primitive(PrimitiveElement::FrameFocusRect, &focus, canvas);
                    }
                }
            },
            ComplexControl::SpinBox => self.draw_spin_box(front, opt, canvas),
            ComplexControl::ToolButton => self.draw_tool_button(front, opt, canvas),
            ComplexControl::TitleBar => self.draw_title_bar(front, opt, canvas),
            ComplexControl::Dial => self.draw_dial(front, opt, canvas),
            ComplexControl::GroupBox => self.draw_group_box(front, opt, canvas),
            ComplexControl::MdiControls => self.draw_mdi_controls(front, opt, canvas),
            ComplexControl::ComboBox => log::warn!("draw_complex_control: control {:?} not handled", cc),
        }
    }

    /// Tick marks beside the groove, drawn only when they are the sole
    /// requested sub-control.
    fn draw_slider_ticks(&self, front: &dyn Style, opt: &DrawOption, canvas: &mut dyn Canvas) {
        let Some(slider) = opt.slider() else {
            return;
        };
        if opt.sub_controls != SubControls::from(SubControl::SliderTickmarks) {
            return;
        }
        let tick_offset = front.pixel_metric(MetricId::SliderTickmarkOffset, Some(opt));
        let thickness = front.pixel_metric(MetricId::SliderControlThickness, Some(opt));
        let len = front.pixel_metric(MetricId::SliderLength, Some(opt));
        let available = front.pixel_metric(MetricId::SliderSpaceAvailable, Some(opt));
        let (minimum, maximum) = (slider.minimum, slider.maximum);

        let mut interval = slider.tick_interval;
        if interval <= 0 {
            interval = slider.single_step;
            let step = slider_position_from_value(minimum, maximum, interval, available, false)
                - slider_position_from_value(minimum, maximum, 0, available, false);
            if step < 3 {
                interval = slider.page_step;
            }
        }
        if interval == 0 {
            interval = 1;
        }
        let fudge = len / 2;
        let r = opt.rect;
        let pen = Pen::new(opt.state_palette().color(ColorRole::WindowText));
        let horizontal = slider.orientation == Orientation::Horizontal;

        canvas.save();
        canvas.translate(r.x as f64, r.y as f64);
        let mut v = minimum;
        loop {
            if v as i64 > maximum as i64 + 1 || (v as i64 == maximum as i64 + 1 && interval == 1) {
                break;
            }
            let pos = slider_position_from_value(minimum, maximum, v.min(maximum), available, false) + fudge;
            let mut line = |a: i32, b: i32| {
                if horizontal {
                    canvas.draw_line(Point::new(pos, a), Point::new(pos, b), &pen);
                } else {
                    canvas.draw_line(Point::new(a, pos), Point::new(b, pos), &pen);
                }
            };
            let extent = if horizontal { r.height } else { r.width };
            if slider.tick_position.above() {
                line(0, tick_offset - 2);
            }
            if slider.tick_position.below() {
                line(tick_offset + thickness + 1, extent - 1);
            }
            match v.checked_add(interval) {
                Some(next) if next > v => v = next,
                _ => break,
            }
        }
        canvas.restore();
    }

    fn draw_spin_box(&self, front: &dyn Style, opt: &DrawOption, canvas: &mut dyn Canvas) {
        let Some(spin) = opt.spin_box() else {
            return;
        };
        let cc = ComplexControl::SpinBox;
        if spin.frame && opt.sub_controls.contains(SubControl::SpinBoxFrame) {
            let rect = front.sub_control_rect(cc, opt, SubControl::SpinBoxFrame);
            win_panel(canvas, rect, &opt.state_palette(), true, None);
        }
        let plus_minus = spin.button_symbols == ButtonSymbols::PlusMinus;
        let buttons = [
            (
                SubControl::SpinBoxUp,
                StepEnabled::UP,
                if plus_minus {
                    PrimitiveElement::IndicatorSpinPlus
                } else {
                    PrimitiveElement::IndicatorSpinUp
                },
            ),
            (
                SubControl::SpinBoxDown,
                StepEnabled::DOWN,
                if plus_minus {
                    PrimitiveElement::IndicatorSpinMinus
                } else {
                    PrimitiveElement::IndicatorSpinDown
                },
            ),
        ];
        for (sc, step, pe) in buttons {
            if !opt.sub_controls.contains(sc) {
                continue;
            }
            let mut state = opt.state;
            if !spin.step_enabled.contains(step) {
                state -= State::ENABLED;
            }
            if opt.active_sub_controls == SubControls::from(sc) && opt.state.contains(State::SUNKEN) {
                state |= State::ON | State::SUNKEN;
            } else {
                state = (state | State::RAISED) - State::SUNKEN;
            }
            let rect = front.sub_control_rect(cc, opt, sc);
            let button = opt.clone().with_state(state).with_sub_controls(sc).with_rect(rect);
            front.draw_primitive(PrimitiveElement::PanelButtonBevel, &button, canvas);
            let glyph = button.with_rect(rect.adjusted(3, 0, -4, 0));
            front.draw_primitive(pe, &glyph, canvas);
        }
    }

    fn draw_tool_button(&self, front: &dyn Style, opt: &DrawOption, canvas: &mut dyn Canvas) {
        let Some(tb) = opt.tool_button() else {
            return;
        };
        let cc = ComplexControl::ToolButton;
        let button = front.sub_control_rect(cc, opt, SubControl::ToolButton);
        let menu_area = front.sub_control_rect(cc, opt, SubControl::ToolButtonMenu);

        let mut bflags = opt.state - State::SUNKEN;
        if bflags.contains(State::AUTO_RAISE) && !bflags.contains(State::MOUSE_OVER | State::ENABLED) {
            bflags -= State::RAISED;
        }
        let mut mflags = bflags;
        if opt.state.contains(State::SUNKEN) {
            if opt.active_sub_controls.contains(SubControl::ToolButton) {
                bflags |= State::SUNKEN;
            }
            mflags |= State::SUNKEN;
        }
        let pressed_or_raised = State::SUNKEN | State::ON | State::RAISED;

        if opt.sub_controls.contains(SubControl::ToolButton) && bflags.intersects(pressed_or_raised) {
            let panel = opt.clone().with_rect(button).with_state(bflags);
            front.draw_primitive(PrimitiveElement::PanelButtonTool, &panel, canvas);
        }
        if opt.state.contains(State::HAS_FOCUS) {
            let mut rect = opt.rect.adjusted(3, 3, -3, -3);
            if tb.features.contains(ToolButtonFeatures::MENU) {
                rect = rect.adjusted(0, 0, -front.pixel_metric(MetricId::MenuButtonIndicator, Some(opt)), 0);
            }
            front.draw_primitive(PrimitiveElement::FrameFocusRect, &opt.clone().with_rect(rect), canvas);
        }

        let fw = front.pixel_metric(MetricId::DefaultFrameWidth, Some(opt));
        let label = opt.clone().with_state(bflags).with_rect(button.adjusted(fw, fw, -fw, -fw));
        front.draw_control(ControlElement::ToolButtonLabel, &label, canvas);

        if opt.sub_controls.contains(SubControl::ToolButtonMenu) && tb.features.contains(ToolButtonFeatures::MENU) {
            let menu = opt.clone().with_rect(menu_area).with_state(mflags);
            if mflags.intersects(pressed_or_raised) {
                front.draw_primitive(PrimitiveElement::IndicatorButtonDropDown, &menu, canvas);
            }
            front.draw_primitive(PrimitiveElement::IndicatorArrowDown, &menu, canvas);
        } else if tb.features.contains(ToolButtonFeatures::HAS_MENU) {
            let mbi = front.pixel_metric(MetricId::MenuButtonIndicator, Some(opt));
            let ir = opt.rect;
            let arrow = Rect::new(ir.right() + 5 - mbi, ir.y + ir.height - mbi + 4, mbi - 6, mbi - 6);
            let arrow = visual_rect(opt.direction, button, arrow);
            front.draw_primitive(PrimitiveElement::IndicatorArrowDown, &opt.clone().with_rect(arrow), canvas);
        }
    }

    /// Label band and window buttons.
    ///
    /// Of the minimize and restore pair, and of the shade and unshade pair,
    /// only the one matching the window state is painted.
    fn draw_title_bar(&self, front: &dyn Style, opt: &DrawOption, canvas: &mut dyn Canvas) {
        let Some(tb) = opt.title_bar() else {
            return;
        };
        let cc = ComplexControl::TitleBar;
        let pal = opt.state_palette();
        let wants = |sc| opt.sub_controls.contains(sc);

        if wants(SubControl::TitleBarLabel) {
            let left = pal.color(ColorRole::Highlight);
            let right = pal.color(ColorRole::Base);
            let r = opt.rect;
            let fill = if left == right {
                Brush::Solid(left)
            } else {
                let y = (r.top() + r.height / 2) as f64;
                Brush::LinearGradient {
                    start: PointF::new(r.x as f64, y),
                    end: PointF::new(r.right() as f64, y),
                    stops: vec![(0.0, left), (1.0, right)],
                }
            };
            canvas.fill_rect(r, &fill);
            let ir = front.sub_control_rect(cc, opt, SubControl::TitleBarLabel);
            canvas.draw_text(
                Rect::new(ir.x + 2, ir.y, ir.width - 2, ir.height),
                Alignment::LEFT | Alignment::VCENTER,
                &tb.text,
                pal.color(ColorRole::HighlightedText),
            );
        }

        let flags = tb.flags;
        let minimized = tb.title_bar_state.contains(TitleBarState::MINIMIZED);
        let maximized = tb.title_bar_state.contains(TitleBarState::MAXIMIZED);
        let close_glyph = if flags.contains(TitleBarFlags::TOOL) {
            StandardPixmap::DockWidgetCloseButton
        } else {
            StandardPixmap::TitleBarCloseButton
        };
        let buttons = [
            (SubControl::TitleBarClose, flags.contains(TitleBarFlags::SYSTEM_MENU), close_glyph),
            (
                SubControl::TitleBarMax,
                flags.contains(TitleBarFlags::MAXIMIZE) && !maximized,
                StandardPixmap::TitleBarMaxButton,
            ),
            (
                SubControl::TitleBarMin,
                flags.contains(TitleBarFlags::MINIMIZE) && !minimized,
                StandardPixmap::TitleBarMinButton,
            ),
            (
                SubControl::TitleBarNormal,
                (flags.contains(TitleBarFlags::MINIMIZE) && minimized)
                    || (flags.contains(TitleBarFlags::MAXIMIZE) && maximized),
                StandardPixmap::TitleBarNormalButton,
            ),
            (
                SubControl::TitleBarShade,
                flags.contains(TitleBarFlags::SHADE) && !minimized,
                StandardPixmap::TitleBarShadeButton,
            ),
            (
                SubControl::TitleBarUnshade,
                flags.contains(TitleBarFlags::SHADE) && minimized,
                StandardPixmap::TitleBarUnshadeButton,
            ),
            (
                SubControl::TitleBarContextHelp,
                flags.contains(TitleBarFlags::CONTEXT_HELP),
                StandardPixmap::TitleBarContextHelpButton,
            ),
        ];
        let base_state = opt.state & (State::ENABLED | State::ACTIVE);
        for (sc, visible, glyph) in buttons {
            if !visible || !wants(sc) {
                continue;
            }
            let ir = front.sub_control_rect(cc, opt, sc);
            let down = opt.active_sub_controls.contains(sc) && opt.state.contains(State::SUNKEN);
            let tool = opt
                .clone()
                .with_rect(ir)
                .with_state(base_state | if down { State::SUNKEN } else { State::RAISED });
            front.draw_primitive(PrimitiveElement::PanelButtonTool, &tool, canvas);
            let icon = front.standard_icon(glyph, Some(&tool));
            let Some((image, size)) = self.icon_image(front, &icon, Size::square(TITLE_BAR_GLYPH), &tool, None) else {
                continue;
            };
            canvas.save();
            if down {
                canvas.translate(
                    front.pixel_metric(MetricId::ButtonShiftHorizontal, Some(opt)) as f64,
                    front.pixel_metric(MetricId::ButtonShiftVertical, Some(opt)) as f64,
                );
            }
            self.draw_item_image(canvas, ir, Alignment::CENTER, opt.direction, &image, size);
            canvas.restore();
        }

        if wants(SubControl::TitleBarSysMenu) && flags.contains(TitleBarFlags::SYSTEM_MENU) {
            let ir = front.sub_control_rect(cc, opt, SubControl::TitleBarSysMenu);
            let image = match &tb.icon {
                Some(icon) if !icon.is_empty() => self.icon_image(front, icon, ir.size(), opt, None),
                _ => {
                    let extent = front.pixel_metric(MetricId::SmallIconSize, Some(opt));
                    let icon = front.standard_icon(StandardPixmap::TitleBarMenuButton, Some(opt));
                    self.icon_image(front, &icon, Size::square(extent), opt, None)
                },
            };
            if let Some((image, size)) = image {
                self.draw_item_image(canvas, ir, Alignment::CENTER, opt.direction, &image, size);
            }
        }
    }

    /// Knob with notches, a bevelled rim and a triangular needle.
    ///
    /// Everything is laid out relative to the dial's own rect.
    fn draw_dial(&self, front: &dyn Style, opt: &DrawOption, canvas: &mut dyn Canvas) {
        let Some(dial) = opt.slider() else {
            return;
        };
        let rect = opt.rect;
        let pal = opt.state_palette();
        let (width, height) = (rect.width, rect.height);
        let r = (width.min(height) / 2) as f64;
        let d = r / 6.0;
        let dx = d + (width as f64 - 2.0 * r) / 2.0 + 1.0;
        let dy = d + (height as f64 - 2.0 * r) / 2.0 + 1.0;
        let rim = (r * 2.0 - 2.0 * d - 2.0) as i32;
        let mut br = Rect::new(dx as i32, dy as i32, rim, rim);

        canvas.save();
        canvas.translate(rect.x as f64, rect.y as f64);
        let ticks = opt.sub_controls.contains(SubControl::DialTickmarks);
        if ticks {
            let pen = Pen::new(pal.color(ColorRole::WindowText));
            for (from, to) in dial_notches(dial, rect) {
                canvas.draw_line_f(from, to, &pen);
            }
        }
        if opt.state.contains(State::ENABLED) {
            let role = match front.style_hint(HintId::DialBackgroundRole, Some(opt)) {
                HintReturn::Role(role) => role,
                _ => ColorRole::Window,
            };
            canvas.draw_ellipse(br.to_kurbo(), None, Some(&Brush::Solid(pal.color(role))));
        }
        let dark = Pen::new(pal.color(ColorRole::Dark));
        let light = Pen::new(pal.color(ColorRole::Light));
        canvas.draw_arc(br.to_kurbo(), 60.0, 180.0, &dark);
        canvas.draw_arc(br.to_kurbo(), 240.0, 180.0, &light);

        let arrow = dial_needle(dial, rect);
        canvas.draw_polygon(&arrow, None, Some(&Brush::Solid(pal.color(ColorRole::Button))));
        let a = line_angle(PointF::new((width / 2) as f64, (height / 2) as f64), arrow[0]);
        let [tip, left, right] = arrow;
        let (far, back, near) = if a <= 0.0 || a > 200.0 {
            (&light, &light, &dark)
        } else if a < 45.0 {
            (&light, &dark, &dark)
        } else if a < 135.0 {
            (&dark, &dark, &light)
        } else {
            (&dark, &light, &light)
        };
        canvas.draw_line_f(right, tip, far);
        canvas.draw_line_f(left, right, back);
        canvas.draw_line_f(tip, left, near);

        if opt.state.contains(State::HAS_FOCUS) {
            br = br.adjusted(0, 0, 2, 2);
            if ticks {
                let r = width.min(height) / 2;
                br = br.translated(-r / 6, -r / 6);
                br.width += r / 3;
                br.height += r / 3;
            }
            let focus = opt.clone().with_rect(br.adjusted(-2, -2, 2, 2));
            front.draw_primitive(PrimitiveElement::FrameFocusRect, &focus, canvas);
        }
        canvas.restore();
    }

    fn draw_group_box(&self, front: &dyn Style, opt: &DrawOption, canvas: &mut dyn Canvas) {
        let Some(group) = opt.group_box() else {
            return;
        };
        let cc = ComplexControl::GroupBox;
        let text_rect = front.sub_control_rect(cc, opt, SubControl::GroupBoxLabel);
        let check_rect = front.sub_control_rect(cc, opt, SubControl::GroupBoxCheckBox);
        let with_check = opt.sub_controls.contains(SubControl::GroupBoxCheckBox);

        if opt.sub_controls.contains(SubControl::GroupBoxFrame) {
            let frame = opt.clone().with_rect(front.sub_control_rect(cc, opt, SubControl::GroupBoxFrame));
            let mut region = Region::from_rect(opt.rect);
            if !group.text.is_empty() {
                let title = if with_check {
                    let ltr = !opt.direction.is_rtl();
                    check_rect
                        .united(&text_rect)
                        .adjusted(if ltr { -4 } else { 0 }, 0, if ltr { 0 } else { 4 }, 0)
                } else {
                    text_rect
                };
                region = region.subtracted(title);
            }
            canvas.save();
            canvas.set_clip(Some(&region));
            front.draw_primitive(PrimitiveElement::FrameGroupBox, &frame, canvas);
            canvas.restore();
        }

        if opt.sub_controls.contains(SubControl::GroupBoxLabel) && !group.text.is_empty() {
            let color = group
                .text_color
                .unwrap_or_else(|| opt.state_palette().color(ColorRole::WindowText));
            self.draw_item_text(front, canvas, text_rect, Alignment::CENTER, opt, &group.text, color);
            if opt.state.contains(State::HAS_FOCUS) {
                let focus = opt.clone().with_rect(text_rect);
                front.draw_primitive(PrimitiveElement::FrameFocusRect, &focus, canvas);
            }
        }

        if with_check {
            let check = opt.clone().with_rect(check_rect);
            front.draw_primitive(PrimitiveElement::IndicatorCheckBox, &check, canvas);
        }
    }

    /// Close, restore and minimize buttons of an embedded window.
    fn draw_mdi_controls(&self, front: &dyn Style, opt: &DrawOption, canvas: &mut dyn Canvas) {
        let extent = front.pixel_metric(MetricId::TitleBarButtonIconSize, Some(opt));
        let buttons = [
            (SubControl::MdiCloseButton, StandardPixmap::TitleBarCloseButton),
            (SubControl::MdiNormalButton, StandardPixmap::TitleBarNormalButton),
            (SubControl::MdiMinButton, StandardPixmap::TitleBarMinButton),
        ];
        for (sc, glyph) in buttons {
            if !opt.sub_controls.contains(sc) {
                continue;
            }
            let mut state = opt.state - State::MOUSE_OVER;
            let (sx, sy) = if opt.active_sub_controls.contains(sc) && opt.state.contains(State::SUNKEN) {
                state = (state | State::SUNKEN) - State::RAISED;
                (
                    front.pixel_metric(MetricId::ButtonShiftHorizontal, None),
                    front.pixel_metric(MetricId::ButtonShiftVertical, None),
                )
            } else {
                state = (state | State::RAISED) - State::SUNKEN;
                (0, 0)
            };
            let rect = front.sub_control_rect(ComplexControl::MdiControls, opt, sc);
            let button = opt.clone().with_state(state).with_rect(rect);
            front.draw_primitive(PrimitiveElement::PanelButtonCommand, &button, canvas);
            let icon = front.standard_icon(glyph, None);
            if let Some((image, size)) = self.icon_image(front, &icon, Size::square(extent), &button, None) {
                self.draw_item_image(canvas, rect.translated(sx, sy), Alignment::CENTER, opt.direction, &image, size);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DrawCommand, Picture};
    use crate::option::{GroupBoxOption, TitleBarOption, ToolButtonOption};
    use std::sync::Mutex;

    struct Recorder {
        base: CommonStyle,
        calls: Mutex<Vec<String>>,
    }

    impl Recorder {
        fn new() -> Self {
            Self {
                base: CommonStyle::new(),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl Style for Recorder {
        fn base(&self) -> &CommonStyle {
            &self.base
        }
        fn front(&self) -> &dyn Style {
            self
        }
        fn draw_primitive(&self, pe: PrimitiveElement, opt: &DrawOption, canvas: &mut dyn Canvas) {
            self.calls.lock().unwrap().push(format!("{pe:?}"));
            self.base.draw_primitive_via(self, pe, opt, canvas);
        }
        fn draw_control(&self, ce: ControlElement, opt: &DrawOption, canvas: &mut dyn Canvas) {
            self.calls.lock().unwrap().push(format!("{ce:?}"));
            self.base.draw_control_via(self, ce, opt, canvas);
        }
    }

    fn title_bar(flags: TitleBarFlags, state: TitleBarState) -> DrawOption {
        DrawOption::new(Rect::new(0, 0, 300, 20)).with_payload(TitleBarOption {
            text: "Window".into(),
            flags,
            title_bar_state: state,
            ..Default::default()
        })
    }

    fn panels(style: &Recorder) -> usize {
        style.calls().iter().filter(|c| *c == "PanelButtonTool").count()
    }

    #[test]
    fn test_title_bar_shows_one_of_each_toggle_pair() {
        let flags = TitleBarFlags::SYSTEM_MENU | TitleBarFlags::MINIMIZE | TitleBarFlags::MAXIMIZE | TitleBarFlags::SHADE;
        let style = Recorder::new();
        let mut picture = Picture::new();
        style.draw_complex_control(ComplexControl::TitleBar, &title_bar(flags, TitleBarState::empty()), &mut picture);
        // close, max, min, shade
        assert_eq!(panels(&style), 4);
        assert_eq!(picture.texts(), vec!["Window"]);

        let style = Recorder::new();
        let opt = title_bar(flags, TitleBarState::MINIMIZED);
        style.draw_complex_control(ComplexControl::TitleBar, &opt, &mut Picture::new());
        // close, max, normal, unshade
        assert_eq!(panels(&style), 4);
    }

    #[test]
    fn test_title_bar_without_flags_paints_label_only() {
        let style = Recorder::new();
        let mut picture = Picture::new();
        let opt = title_bar(TitleBarFlags::empty(), TitleBarState::empty());
        style.draw_complex_control(ComplexControl::TitleBar, &opt, &mut picture);
        assert_eq!(panels(&style), 0);
        assert!(matches!(picture.commands()[0], DrawCommand::FillRect(_, Brush::LinearGradient { .. })));
    }

    #[test]
    fn test_scroll_bar_paints_present_parts_in_order() {
        let style = Recorder::new();
        let opt = DrawOption::new(Rect::new(0, 0, 200, 16)).with_payload(SliderOption {
            maximum: 100,
            page_step: 10,
            ..Default::default()
        });
        style.draw_complex_control(ComplexControl::ScrollBar, &opt, &mut Picture::new());
        let parts: Vec<String> = style.calls().into_iter().filter(|c| c.starts_with("ScrollBar")).collect();
        assert_eq!(parts.first().map(String::as_str), Some("ScrollBarSubLine"));
        assert_eq!(parts.last().map(String::as_str), Some("ScrollBarSlider"));
        assert!(parts.iter().any(|p| p == "ScrollBarAddPage"));
    }

    #[test]
    fn test_dial_draws_needle_and_rim() {
        let style = CommonStyle::new();
        let opt = DrawOption::new(Rect::new(0, 0, 60, 60)).with_payload(SliderOption {
            maximum: 100,
            slider_position: 50,
            ..Default::default()
        });
        let mut picture = Picture::new();
        style.draw_complex_control(ComplexControl::Dial, &opt, &mut picture);
        assert_eq!(picture.count(|c| matches!(c, DrawCommand::Arc(..))), 2);
        assert_eq!(picture.count(|c| matches!(c, DrawCommand::Polygon(p, None, Some(_)) if p.len() == 3)), 1);
        assert_eq!(picture.count(|c| matches!(c, DrawCommand::LineF(..))), 3);
    }

    #[test]
    fn test_dial_needle_points_up_at_mid_value() {
        let slider = SliderOption {
            maximum: 100,
            slider_position: 50,
            ..Default::default()
        };
        let [tip, ..] = dial_needle(&slider, Rect::new(0, 0, 60, 60));
        assert!((tip.x - 30.5).abs() < 1e-9);
        assert!(tip.y < 30.0);
    }

    #[test]
    fn test_dial_notches_mark_page_steps_long() {
        let slider = SliderOption {
            maximum: 100,
            tick_interval: 5,
            page_step: 10,
            ..Default::default()
        };
        let notches = dial_notches(&slider, Rect::new(0, 0, 120, 120));
        assert_eq!(notches.len(), 21);
        let length = |(a, b): (PointF, PointF)| (a - b).hypot();
        assert!(length(notches[0]) > length(notches[1]));
        assert!((length(notches[0]) - length(notches[2])).abs() < 1e-9);
    }

    #[test]
    fn test_line_angle_quadrants() {
        let c = PointF::new(0.0, 0.0);
        assert_eq!(line_angle(c, PointF::new(0.0, -5.0)), 90.0);
        assert_eq!(line_angle(c, PointF::new(0.0, 5.0)), 270.0);
        assert!((line_angle(c, PointF::new(5.0, -5.0)) - 135.0).abs() < 1e-9);
    }

    #[test]
    fn test_tool_button_without_raise_skips_panel() {
        let style = Recorder::new();
        let opt = DrawOption::new(Rect::new(0, 0, 30, 30))
            .with_state(State::ENABLED | State::ACTIVE | State::AUTO_RAISE | State::RAISED)
            .with_payload(ToolButtonOption {
                text: "T".into(),
                ..Default::default()
            });
        style.draw_complex_control(ComplexControl::ToolButton, &opt, &mut Picture::new());
        let calls = style.calls();
        assert!(!calls.iter().any(|c| c == "PanelButtonTool"));
        assert!(calls.iter().any(|c| c == "ToolButtonLabel"));
    }

    #[test]
    fn test_group_box_draws_frame_title_and_check() {
        let style = Recorder::new();
        let opt = DrawOption::new(Rect::new(0, 0, 200, 100)).with_payload(GroupBoxOption {
            text: "Options".into(),
            ..Default::default()
        });
        let mut picture = Picture::new();
        style.draw_complex_control(ComplexControl::GroupBox, &opt, &mut picture);
        let calls = style.calls();
        assert_eq!(calls.first().map(String::as_str), Some("FrameGroupBox"));
        assert_eq!(calls.last().map(String::as_str), Some("IndicatorCheckBox"));
        assert_eq!(picture.texts(), vec!["Options"]);
    }

    #[test]
    fn test_slider_ticks_only_when_requested_alone() {
        let style = CommonStyle::new();
        let slider = SliderOption {
            maximum: 100,
            tick_interval: 10,
            tick_position: crate::option::TickPosition::Below,
            ..Default::default()
        };
        let opt = DrawOption::new(Rect::new(0, 0, 200, 30)).with_payload(slider);
        let mut everything = Picture::new();
        style.draw_complex_control(ComplexControl::Slider, &opt, &mut everything);
        assert!(everything.is_empty());

        let ticks = opt.with_sub_controls(SubControl::SliderTickmarks);
        let mut picture = Picture::new();
        style.draw_complex_control(ComplexControl::Slider, &ticks, &mut picture);
        assert_eq!(picture.count(|c| matches!(c, DrawCommand::Line(..))), 11);
    }

    #[test]
    fn test_combo_box_is_not_painted() {
        let style = CommonStyle::new();
        let mut picture = Picture::new();
        style.draw_complex_control(ComplexControl::ComboBox, &DrawOption::default(), &mut picture);
        assert!(picture.is_empty());
    }
}
