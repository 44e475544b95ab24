// SPDX-License-Identifier: LGPL-3.0-only

use super::{CommonStyle, Style};
use crate::geometry::{aligned_rect, center_offset, slider_position_from_value, visual_rect, Alignment, Orientation, Rect, Size};
use crate::hint::HintId;
use crate::kinds::{ComplexControl, SubControl};
use crate::metric::{dpi_scaled, MetricId};
use crate::option::{ButtonSymbols, DrawOption, FrameFeatures, TitleBarFlags, TitleBarState, ToolButtonFeatures};
use crate::text::{strip_mnemonic, FontMetrics};

/// Margin around title bar buttons.
const TITLE_BAR_CONTROL_MARGIN: i32 = 2;

impl CommonStyle {
    /// Default sub-control geometry.
    ///
    /// Rects share the coordinate frame of `opt.rect` and are already
    /// mirrored for right-to-left options.
    pub fn sub_control_rect_via(&self, front: &dyn Style, cc: ComplexControl, opt: &DrawOption, sc: SubControl) -> Rect {
        match cc {
            ComplexControl::Slider => self.slider_rect(front, opt, sc),
            ComplexControl::ScrollBar => self.scroll_bar_rect(front, opt, sc),
            ComplexControl::SpinBox => self.spin_box_rect(front, opt, sc),
            ComplexControl::ToolButton => {
                let Some(tb) = opt.tool_button() else {
                    return Rect::default();
                };
                let mbi = front.pixel_metric(MetricId::MenuButtonIndicator, Some(opt));
                let split = tb.features & (ToolButtonFeatures::MENU_BUTTON_POPUP | ToolButtonFeatures::POPUP_DELAY)
                    == ToolButtonFeatures::MENU_BUTTON_POPUP;
                let r = opt.rect;
                let ret = match sc {
                    SubControl::ToolButton if split => r.adjusted(0, 0, -mbi, 0),
                    SubControl::ToolButtonMenu if split => r.adjusted(r.width - mbi, 0, 0, 0),
                    _ => r,
                };
                visual_rect(opt.direction, r, ret)
            },
            ComplexControl::ComboBox => {
                let Some(cb) = opt.combo_box() else {
                    return Rect::default();
                };
                let r = opt.rect;
                let margin = if cb.frame { dpi_scaled(3, opt.dpi) } else { 0 };
                let bmarg = if cb.frame { dpi_scaled(2, opt.dpi) } else { 0 };
                let arrow = dpi_scaled(16, opt.dpi);
                let ret = match sc {
                    SubControl::ComboBoxFrame | SubControl::ComboBoxListBoxPopup => r,
                    SubControl::ComboBoxArrow => Rect::new(r.x + r.width - bmarg - arrow, r.y + bmarg, arrow, r.height - 2 * bmarg),
                    SubControl::ComboBoxEditField => Rect::new(
                        r.x + margin,
                        r.y + margin,
                        r.width - 2 * margin - arrow,
                        r.height - 2 * margin,
                    ),
                    _ => Rect::default(),
                };
                visual_rect(opt.direction, r, ret)
            },
            ComplexControl::TitleBar => self.title_bar_rect(opt, sc),
            ComplexControl::GroupBox => self.group_box_rect(front, opt, sc),
            ComplexControl::MdiControls => mdi_rect(opt, sc),
            ComplexControl::Dial => {
                log::warn!("sub_control_rect: control {:?} not handled", cc);
                Rect::default()
            },
        }
    }

    fn slider_rect(&self, front: &dyn Style, opt: &DrawOption, sc: SubControl) -> Rect {
        let Some(slider) = opt.slider() else {
            return Rect::default();
        };
        let tick_offset = front.pixel_metric(MetricId::SliderTickmarkOffset, Some(opt));
        let thickness = front.pixel_metric(MetricId::SliderControlThickness, Some(opt));
        let r = opt.rect;
        let horizontal = slider.orientation == Orientation::Horizontal;
        let ret = match sc {
            SubControl::SliderHandle => {
                let len = front.pixel_metric(MetricId::SliderLength, Some(opt));
                let span = if horizontal { r.width } else { r.height } - len;
                let pos = slider_position_from_value(
                    slider.minimum,
                    slider.maximum,
                    slider.slider_position,
                    span,
                    slider.upside_down,
                );
                if horizontal {
                    Rect::new(r.x + pos, r.y + tick_offset, len, thickness)
                } else {
                    Rect::new(r.x + tick_offset, r.y + pos, thickness, len)
                }
            },
            SubControl::SliderGroove if horizontal => Rect::new(r.x, r.y + tick_offset, r.width, thickness),
            SubControl::SliderGroove => Rect::new(r.x + tick_offset, r.y, thickness, r.height),
            _ => Rect::default(),
        };
        visual_rect(opt.direction, r, ret)
    }

    fn scroll_bar_rect(&self, front: &dyn Style, opt: &DrawOption, sc: SubControl) -> Rect {
        let Some(bar) = opt.slider() else {
            return Rect::default();
        };
        let r = opt.rect;
        let horizontal = bar.orientation == Orientation::Horizontal;
        let extent = if front.style_hint(HintId::ScrollBarTransient, Some(opt)).as_bool() {
            0
        } else {
            front.pixel_metric(MetricId::ScrollBarExtent, Some(opt))
        };
        let length = if horizontal { r.width } else { r.height };
        let breadth = if horizontal { r.height } else { r.width };
        let max_len = length - extent * 2;

        let slider_len = if bar.maximum != bar.minimum {
            let range = bar.maximum as i64 - bar.minimum as i64;
            let page = bar.page_step as i64;
            let mut len = if range + page != 0 {
                (page * max_len as i64 / (range + page)) as i32
            } else {
                max_len
            };
            let slider_min = front.pixel_metric(MetricId::ScrollBarSliderMin, Some(opt));
            if len < slider_min || range > (i32::MAX / 2) as i64 {
                len = slider_min;
            }
            len.min(max_len)
        } else {
            max_len
        };
        let slider_start = extent
            + slider_position_from_value(
                bar.minimum,
                bar.maximum,
                bar.slider_position,
                max_len - slider_len,
                bar.upside_down,
            );

        // (start, length) along the bar.
        let span = match sc {
            SubControl::ScrollBarSubLine => Some((0, (length / 2).min(extent))),
            SubControl::ScrollBarAddLine => {
                let button = (length / 2).min(extent);
                Some((length - button, button))
            },
            SubControl::ScrollBarSubPage => Some((extent, slider_start - extent)),
            SubControl::ScrollBarAddPage => {
                Some((slider_start + slider_len, max_len - slider_start - slider_len + extent))
            },
            SubControl::ScrollBarGroove => Some((extent, length - extent * 2)),
            SubControl::ScrollBarSlider => Some((slider_start, slider_len)),
            _ => None,
        };
        let ret = match span {
            Some((start, len)) if horizontal => Rect::new(r.x + start, r.y, len, breadth),
            Some((start, len)) => Rect::new(r.x, r.y + start, breadth, len),
            None => Rect::default(),
        };
        visual_rect(opt.direction, r, ret)
    }

    fn spin_box_rect(&self, front: &dyn Style, opt: &DrawOption, sc: SubControl) -> Rect {
        let Some(spin) = opt.spin_box() else {
            return Rect::default();
        };
        let r = opt.rect;
        let fw = if spin.frame {
            front.pixel_metric(MetricId::SpinBoxFrameWidth, Some(opt))
        } else {
            0
        };
        let bh = (r.height / 2 - fw).max(8);
        // Width follows the golden mean, roughly 8:5.
        let bw = (bh * 8 / 5).min(r.width / 4).max(16);
        let x = r.x + r.width - fw - bw;
        let y = r.y + fw;
        let no_buttons = spin.button_symbols == ButtonSymbols::NoButtons;
        let ret = match sc {
            SubControl::SpinBoxUp if !no_buttons => Rect::new(x, y, bw, bh),
            SubControl::SpinBoxDown if !no_buttons => Rect::new(x, y + bh, bw, bh),
            SubControl::SpinBoxEditField if no_buttons => Rect::new(r.x + fw, y, r.width - 2 * fw, r.height - 2 * fw),
            SubControl::SpinBoxEditField => Rect::new(r.x + fw, y, x - fw - r.x, r.height - 2 * fw),
            SubControl::SpinBoxFrame => r,
            _ => return Rect::default(),
        };
        visual_rect(opt.direction, r, ret)
    }

    fn title_bar_rect(&self, opt: &DrawOption, sc: SubControl) -> Rect {
        let Some(tb) = opt.title_bar() else {
            return Rect::default();
        };
        let r = opt.rect;
        let control_height = r.height - TITLE_BAR_CONTROL_MARGIN * 2;
        let delta = control_height + TITLE_BAR_CONTROL_MARGIN;
        let flags = tb.flags;
        let minimized = tb.title_bar_state.contains(TitleBarState::MINIMIZED);
        let maximized = tb.title_bar_state.contains(TitleBarState::MAXIMIZED);

        let ret = match sc {
            SubControl::TitleBarLabel => {
                if !flags.intersects(TitleBarFlags::TITLE | TitleBarFlags::SYSTEM_MENU) {
                    Rect::default()
                } else {
                    let mut ret = r;
                    if flags.contains(TitleBarFlags::SYSTEM_MENU) {
                        ret = ret.adjusted(delta, 0, -delta, 0);
                    }
                    for flag in [
                        TitleBarFlags::MINIMIZE,
                        TitleBarFlags::MAXIMIZE,
                        TitleBarFlags::SHADE,
                        TitleBarFlags::CONTEXT_HELP,
                    ] {
                        if flags.contains(flag) {
                            ret = ret.adjusted(0, 0, -delta, 0);
                        }
                    }
                    ret
                }
            },
            SubControl::TitleBarSysMenu => {
                if flags.contains(TitleBarFlags::SYSTEM_MENU) {
                    Rect::new(
                        r.left() + TITLE_BAR_CONTROL_MARGIN,
                        r.top() + TITLE_BAR_CONTROL_MARGIN,
                        control_height,
                        control_height,
                    )
                } else {
                    Rect::default()
                }
            },
            button => {
                // Buttons from the left of the row to the right edge. Each
                // reserves a slot when present; a button sits left of every
                // present button after it.
                let row = [
                    (SubControl::TitleBarContextHelp, flags.contains(TitleBarFlags::CONTEXT_HELP)),
                    (SubControl::TitleBarMin, !minimized && flags.contains(TitleBarFlags::MINIMIZE)),
                    (
                        SubControl::TitleBarNormal,
                        (minimized && flags.contains(TitleBarFlags::MINIMIZE))
                            || (maximized && flags.contains(TitleBarFlags::MAXIMIZE)),
                    ),
                    (SubControl::TitleBarMax, !maximized && flags.contains(TitleBarFlags::MAXIMIZE)),
                    (SubControl::TitleBarShade, !minimized && flags.contains(TitleBarFlags::SHADE)),
                    (SubControl::TitleBarUnshade, minimized && flags.contains(TitleBarFlags::SHADE)),
                    (SubControl::TitleBarClose, flags.contains(TitleBarFlags::SYSTEM_MENU)),
                ];
                match row.iter().position(|(sc, _)| *sc == button) {
                    Some(index) if row[index].1 => {
                        let offset = row[index..].iter().filter(|(_, present)| *present).count() as i32 * delta;
                        Rect::new(
                            r.right() - offset,
                            r.top() + TITLE_BAR_CONTROL_MARGIN,
                            control_height,
                            control_height,
                        )
                    },
                    _ => Rect::default(),
                }
            },
        };
        visual_rect(opt.direction, r, ret)
    }

    fn group_box_rect(&self, front: &dyn Style, opt: &DrawOption, sc: SubControl) -> Rect {
        let Some(gb) = opt.group_box() else {
            return Rect::default();
        };
        let font: &dyn FontMetrics = opt.font.as_ref();
        let has_check_box = opt.sub_controls.contains(SubControl::GroupBoxCheckBox);
        match sc {
            SubControl::GroupBoxFrame | SubControl::GroupBoxContents => {
                let valign = Alignment::from_bits_truncate(
                    front.style_hint(HintId::GroupBoxTextLabelVerticalAlignment, Some(opt)).as_int() as u16,
                );
                let (mut top_margin, mut top_height) = (0, 0);
                if !gb.text.is_empty() || has_check_box {
                    let check_height = if has_check_box {
                        front.pixel_metric(MetricId::IndicatorHeight, Some(opt))
                    } else {
                        0
                    };
                    top_height = font.height().max(check_height);
                    if valign.contains(Alignment::VCENTER) {
                        top_margin = top_height / 2;
                    } else if valign.contains(Alignment::TOP) {
                        top_margin = top_height;
                    }
                }
                let mut frame = opt.rect;
                frame.set_top(opt.rect.top() + top_margin);
                if sc == SubControl::GroupBoxFrame {
                    return frame;
                }
                let fw = if gb.features.contains(FrameFeatures::FLAT) {
                    0
                } else {
                    front.pixel_metric(MetricId::DefaultFrameWidth, Some(opt))
                };
                frame.adjusted(fw, fw + top_height - top_margin, -fw, -fw)
            },
            SubControl::GroupBoxCheckBox | SubControl::GroupBoxLabel => {
                let th = font.height();
                let (plain, _) = strip_mnemonic(&gb.text);
                let tw = font.advance(&format!("{plain} "));
                let margin = if gb.features.contains(FrameFeatures::FLAT) { 0 } else { 8 };
                let mut row = opt.rect.adjusted(margin, 0, -margin, 0);

                let indicator_width = front.pixel_metric(MetricId::IndicatorWidth, Some(opt));
                let indicator_height = front.pixel_metric(MetricId::IndicatorHeight, Some(opt));
                let indicator_space = front.pixel_metric(MetricId::CheckBoxLabelSpacing, Some(opt)) - 1;
                let check_width = if has_check_box { indicator_width + indicator_space } else { 0 };
                let check_height = if has_check_box { indicator_height } else { 0 };
                let h = th.max(check_height);
                row.height = h;

                let total = aligned_rect(opt.direction, gb.text_alignment, Size::new(tw + check_width, h), row);
                if !has_check_box {
                    return total;
                }
                // Laid out left to right inside `total`, then mirrored within it.
                let logical = if sc == SubControl::GroupBoxCheckBox {
                    Rect::new(
                        total.left(),
                        total.top() + center_offset(h, check_height),
                        indicator_width,
                        indicator_height,
                    )
                } else {
                    Rect::new(
                        total.left() + check_width - 2,
                        total.top() + center_offset(h, th),
                        total.width - check_width,
                        th,
                    )
                };
                visual_rect(opt.direction, total, logical)
            },
            _ => Rect::default(),
        }
    }
}

fn mdi_rect(opt: &DrawOption, sc: SubControl) -> Rect {
    let requested = |sc| opt.sub_controls.contains(sc);
    let count = [SubControl::MdiCloseButton, SubControl::MdiMinButton, SubControl::MdiNormalButton]
        .into_iter()
        .filter(|sc| requested(*sc))
        .count() as i32;
    if count == 0 {
        return Rect::default();
    }
    let mut button_width = opt.rect.width / count - 1;
    let mut offset = 0;
    match sc {
        SubControl::MdiCloseButton if count > 1 => {
            offset += button_width + 2;
            if !(count == 2 && !requested(SubControl::MdiMinButton)) && requested(SubControl::MdiNormalButton) {
                offset += button_width;
            }
        },
        SubControl::MdiNormalButton => {
            if count > 1 && !(count == 2 && !requested(SubControl::MdiMinButton)) && requested(SubControl::MdiNormalButton) {
                offset += button_width;
            }
        },
        _ => {},
    }
    if count == 1 {
        button_width -= 1;
    }
    Rect::new(opt.rect.x + offset, opt.rect.y, button_width, opt.rect.height)
}
