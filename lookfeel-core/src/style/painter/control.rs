// SPDX-License-Identifier: LGPL-3.0-only

use lookfeel_theme::{ColorGroup, ColorRole, Palette};
use vello::peniko::Color;

use super::super::{CommonStyle, Style};
use super::icon_mode;
use crate::canvas::{Brush, Canvas, Pen, PenStyle, PointF};
use crate::draw_util::{plain_rect, shade_line, shade_panel, shade_rect, win_panel, with_alpha};
use crate::geometry::{aligned_rect, center_offset, visual_alignment, visual_rect, Alignment, Orientation, Point, Rect, Region, Size};
use crate::hint::HintId;
use crate::kinds::{ComplexControl, ControlElement, IconMode, PrimitiveElement, SubControl, SubElement};
use crate::metric::MetricId;
use crate::option::{
    ArrowType, ButtonFeatures, CheckState, CheckType, Corner, DrawOption, FocusRectOption, FrameShape, MenuItemType,
    RubberBandShape, SortIndicator, TabPosition, TabSide, ToolButtonFeatures, ToolButtonOption, ToolButtonStyle,
    ViewItemFeatures, ViewItemOption,
};
use crate::state::State;
use crate::text::{calculate_elided_text, elided_text, text_size, ElideMode, LINE_SEPARATOR};

/// Space between an icon and the text next to it.
const ICON_SPACING: i32 = 4;

/// The state bits that pick a palette group, nothing else.
fn group_state(state: State) -> State {
    state & (State::ENABLED | State::ACTIVE)
}

fn pointf(x: i32, y: i32) -> PointF {
    PointF::new(x as f64, y as f64)
}

/// A copy of `opt` moved to `rect`.
fn moved(opt: &DrawOption, rect: Rect) -> DrawOption {
    opt.clone().with_rect(rect)
}

/// A focus rect option over `rect`, keeping the common fields of `opt`.
fn focus_option(opt: &DrawOption, rect: Rect, background: Option<Color>) -> DrawOption {
    moved(opt, rect).with_payload(FocusRectOption {
        background_color: background,
    })
}

/// HSV value of a color, the brightest channel.
fn value(color: Color) -> u8 {
    let c = color.to_rgba8();
    c.r.max(c.g).max(c.b)
}

/// The arrow primitive pointing in `arrow`.
fn arrow_element(arrow: ArrowType) -> Option<PrimitiveElement> {
    match arrow {
        ArrowType::Up => Some(PrimitiveElement::IndicatorArrowUp),
        ArrowType::Down => Some(PrimitiveElement::IndicatorArrowDown),
        ArrowType::Left => Some(PrimitiveElement::IndicatorArrowLeft),
        ArrowType::Right => Some(PrimitiveElement::IndicatorArrowRight),
        ArrowType::NoArrow => None,
    }
}

impl CommonStyle {
    /// Default control painting.
    ///
    /// Composite controls paint their parts through `front` in a fixed
    /// order. Controls asked to paint with an option lacking their payload
    /// draw nothing.
    pub fn draw_control_via(&self, front: &dyn Style, ce: ControlElement, opt: &DrawOption, canvas: &mut dyn Canvas) {
        use ControlElement::*;
        let pal = opt.state_palette();
        let r = opt.rect;
        match ce {
            PushButton => self.draw_push_button(front, opt, canvas),
            PushButtonBevel => self.draw_push_button_bevel(front, opt, canvas),
            PushButtonLabel => self.draw_push_button_label(front, opt, &pal, canvas),
            CheckBox | RadioButton => {
                if opt.button().is_none() {
                    return;
                }
                let (indicator, contents, focus, pe, label) = if ce == CheckBox {
                    (
                        SubElement::CheckBoxIndicator,
                        SubElement::CheckBoxContents,
                        SubElement::CheckBoxFocusRect,
                        PrimitiveElement::IndicatorCheckBox,
                        CheckBoxLabel,
                    )
                } else {
                    (
                        SubElement::RadioButtonIndicator,
                        SubElement::RadioButtonContents,
                        SubElement::RadioButtonFocusRect,
                        PrimitiveElement::IndicatorRadioButton,
                        RadioButtonLabel,
                    )
                };
                front.draw_primitive(pe, &moved(opt, front.sub_element_rect(indicator, opt)), canvas);
                front.draw_control(label, &moved(opt, front.sub_element_rect(contents, opt)), canvas);
                if opt.state.contains(State::HAS_FOCUS) {
                    let rect = front.sub_element_rect(focus, opt);
                    front.draw_primitive(PrimitiveElement::FrameFocusRect, &focus_option(opt, rect, None), canvas);
                }
            },
            CheckBoxLabel | RadioButtonLabel => {
                let Some(btn) = opt.button() else {
                    return;
                };
                let alignment = visual_alignment(opt.direction, Alignment::LEFT | Alignment::VCENTER);
                let mut text_rect = r;
                if let Some(icon) = &btn.icon {
                    if let Some((image, size)) = self.icon_image(front, icon, btn.icon_size, opt, None) {
                        self.draw_item_image(canvas, r, alignment, opt.direction, &image, size);
                    }
                    if opt.direction.is_rtl() {
                        text_rect.set_right(text_rect.right() - btn.icon_size.width - ICON_SPACING);
                    } else {
                        text_rect.set_left(text_rect.left() + btn.icon_size.width + ICON_SPACING);
                    }
                }
                self.draw_item_text(front, canvas, text_rect, alignment, opt, &btn.text, pal.color(ColorRole::WindowText));
            },
            MenuScroller => {
                let pe = if opt.state.contains(State::DOWN_ARROW) {
                    PrimitiveElement::IndicatorArrowDown
                } else {
                    PrimitiveElement::IndicatorArrowUp
                };
                front.draw_primitive(pe, &opt.clone().with_state(opt.state | State::ENABLED), canvas);
            },
            MenuTearoff => {
                let fill = if opt.state.contains(State::SELECTED) {
                    ColorRole::Highlight
                } else {
                    ColorRole::Button
                };
                canvas.fill_rect(r, &Brush::Solid(pal.color(fill)));
                let y = r.y + r.height / 2 - 1;
                canvas.draw_line(
                    Point::new(r.x + 2, y),
                    Point::new(r.x + r.width - 4, y),
                    &Pen::new(pal.color(ColorRole::Dark)).with_style(PenStyle::Dash),
                );
                canvas.draw_line(
                    Point::new(r.x + 2, y + 1),
                    Point::new(r.x + r.width - 4, y + 1),
                    &Pen::new(pal.color(ColorRole::Light)).with_style(PenStyle::Dash),
                );
            },
            MenuItem => self.draw_menu_item(front, opt, &pal, canvas),
            MenuBarItem => {
                let Some(item) = opt.menu_item() else {
                    return;
                };
                let extent = front.pixel_metric(MetricId::SmallIconSize, Some(opt));
                let image = item
                    .icon
                    .as_ref()
                    .and_then(|icon| self.icon_image(front, icon, Size::square(extent), opt, None));
                match image {
                    Some((image, size)) => self.draw_item_image(canvas, r, Alignment::CENTER, opt.direction, &image, size),
                    None => self.draw_item_text(
                        front,
                        canvas,
                        r,
                        Alignment::CENTER,
                        opt,
                        &item.text,
                        pal.color(ColorRole::ButtonText),
                    ),
                }
            },
            ProgressBar => {
                let Some(pb) = opt.progress_bar() else {
                    return;
                };
                let mut sub = opt.clone();
                sub.rect = front.sub_element_rect(SubElement::ProgressBarGroove, opt);
                front.draw_control(ProgressBarGroove, &sub, canvas);
                sub.rect = front.sub_element_rect(SubElement::ProgressBarContents, opt);
                front.draw_control(ProgressBarContents, &sub, canvas);
                if pb.text_visible {
                    sub.rect = front.sub_element_rect(SubElement::ProgressBarLabel, opt);
                    front.draw_control(ProgressBarLabel, &sub, canvas);
                }
            },
            ProgressBarGroove => {
                if r.is_valid() {
                    shade_panel(canvas, r, &pal, true, 1, Some(&Brush::Solid(pal.color(ColorRole::Window))));
                }
            },
            ProgressBarLabel => {
                let Some(pb) = opt.progress_bar() else {
                    return;
                };
                let past_half = (pb.progress as i64 - pb.minimum as i64) * 2 >= pb.maximum as i64 - pb.minimum as i64;
                let role = if pb.text_alignment.intersects(Alignment::CENTER) && pb.text_visible && past_half {
                    let shadow = if value(pal.color(ColorRole::HighlightedText)) <= 128 {
                        Color::from_rgba8(255, 255, 255, 160)
                    } else {
                        Color::from_rgba8(0, 0, 0, 160)
                    };
                    self.draw_item_text(front, canvas, r.translated(1, 1), Alignment::CENTER, opt, &pb.text, shadow);
                    ColorRole::HighlightedText
                } else {
                    ColorRole::WindowText
                };
                self.draw_item_text(front, canvas, r, Alignment::CENTER, opt, &pb.text, pal.color(role));
            },
            ProgressBarContents => self.draw_progress_contents(front, opt, &pal, canvas),
            HeaderLabel => {
                let Some(header) = opt.header() else {
                    return;
                };
                let mut rect = r;
                if let Some(icon) = &header.icon {
                    let extent = front.pixel_metric(MetricId::SmallIconSize, Some(opt));
                    if let Some((image, size)) = self.icon_image(front, icon, Size::square(extent), opt, None) {
                        let aligned = aligned_rect(opt.direction, header.icon_alignment, size, rect);
                        canvas.save();
                        canvas.set_clip(Some(&Region::from_rect(rect)));
                        canvas.draw_image(aligned, &image);
                        canvas.restore();
                        let margin = front.pixel_metric(MetricId::HeaderMargin, Some(opt));
                        if opt.direction.is_rtl() {
                            rect.set_right(rect.right() - size.width - margin);
                        } else {
                            rect.set_left(rect.left() + size.width + margin);
                        }
                    }
                }
                self.draw_item_text(
                    front,
                    canvas,
                    rect,
                    header.text_alignment,
                    opt,
                    &header.text,
                    pal.color(ColorRole::ButtonText),
                );
            },
            ToolButtonLabel => self.draw_tool_button_label(front, opt, &pal, canvas),
            ToolBoxTab => {
                if opt.tool_box().is_none() {
                    return;
                }
                front.draw_control(ToolBoxTabShape, opt, canvas);
                front.draw_control(ToolBoxTabLabel, opt, canvas);
            },
            ToolBoxTabShape => draw_tool_box_tab_shape(opt, &pal, canvas),
            ToolBoxTabLabel => self.draw_tool_box_tab_label(front, opt, &pal, canvas),
            TabBarTab => {
                if opt.tab().is_none() {
                    return;
                }
                front.draw_control(TabBarTabShape, opt, canvas);
                front.draw_control(TabBarTabLabel, opt, canvas);
            },
            TabBarTabShape => self.draw_tab_shape(front, opt, &pal, canvas),
            TabBarTabLabel => self.draw_tab_label(front, opt, &pal, canvas),
            SizeGrip => draw_size_grip(opt, &pal, canvas),
            RubberBand => {
                let Some(band) = opt.rubber_band() else {
                    return;
                };
                canvas.save();
                let mask = front.style_hint(HintId::RubberBandMask, Some(opt));
                if mask.as_bool() {
                    if let Some(region) = mask.region() {
                        canvas.set_clip(Some(region));
                    }
                }
                canvas.fill_rect(r, &Brush::Solid(pal.color(ColorRole::Base)));
                canvas.fill_rect(r, &Brush::Solid(with_alpha(Color::BLACK, 128)));
                let pen = Pen::new(pal.color_in(ColorGroup::Active, ColorRole::WindowText));
                canvas.stroke_rect(r, &pen);
                if band.shape == RubberBandShape::Rectangle {
                    let inner = r.adjusted(3, 3, -3, -3);
                    if inner.is_valid() {
                        canvas.stroke_rect(inner, &pen);
                    }
                }
                canvas.restore();
            },
            DockWidgetTitle => {
                let Some(dock) = opt.dock_widget() else {
                    return;
                };
                if dock.movable {
                    canvas.stroke_rect(r, &Pen::new(pal.color(ColorRole::Dark)));
                }
                if dock.title.is_empty() {
                    return;
                }
                let mut title = r.adjusted(0, 0, -1, -1);
                if dock.vertical_title_bar {
                    title = title.transposed();
                    canvas.save();
                    canvas.translate(title.left() as f64, (title.top() + title.width) as f64);
                    canvas.rotate(-90.0);
                    canvas.translate(-title.left() as f64, -title.top() as f64);
                }
                let indent = opt.font.descent();
                self.draw_item_text(
                    front,
                    canvas,
                    title.adjusted(indent + 1, 1, -indent - 1, -1),
                    Alignment::LEFT | Alignment::VCENTER,
                    opt,
                    &dock.title,
                    pal.color(ColorRole::WindowText),
                );
                if dock.vertical_title_bar {
                    canvas.restore();
                }
            },
            Header => {
                let Some(header) = opt.header() else {
                    return;
                };
                canvas.save();
                canvas.set_clip(Some(&Region::from_rect(r)));
                front.draw_control(HeaderSection, opt, canvas);
                let label = front.sub_element_rect(SubElement::HeaderLabel, opt);
                if label.is_valid() {
                    front.draw_control(HeaderLabel, &moved(opt, label), canvas);
                }
                if header.sort_indicator != SortIndicator::None {
                    let arrow = front.sub_element_rect(SubElement::HeaderArrow, opt);
                    front.draw_primitive(PrimitiveElement::IndicatorHeaderArrow, &moved(opt, arrow), canvas);
                }
                canvas.restore();
            },
            FocusFrame => canvas.fill_rect(r, &Brush::Solid(pal.color(ColorRole::WindowText))),
            HeaderSection => shade_panel(
                canvas,
                r,
                &pal,
                opt.state.contains(State::SUNKEN),
                1,
                Some(&Brush::Solid(pal.color(ColorRole::Button))),
            ),
            HeaderEmptyArea => canvas.fill_rect(r, &Brush::Solid(pal.color(ColorRole::Window))),
            ComboBoxLabel => self.draw_combo_box_label(front, opt, &pal, canvas),
            ToolBar => {
                let Some(bar) = opt.tool_bar() else {
                    return;
                };
                front.draw_primitive(PrimitiveElement::PanelToolBar, opt, canvas);
                shade_panel(
                    canvas,
                    r,
                    &pal,
                    false,
                    bar.line_width,
                    Some(&Brush::Solid(pal.color(ColorRole::Button))),
                );
            },
            ColumnViewGrip => {
                let active = |role| pal.color_in(ColorGroup::Active, role);
                canvas.fill_rect(
                    r,
                    &Brush::LinearGradient {
                        start: pointf(r.x, r.y),
                        end: pointf(r.x + r.width, r.y),
                        stops: vec![(0.0, active(ColorRole::Mid)), (0.5, Color::WHITE)],
                    },
                );
                let pen = Pen::new(active(ColorRole::Dark)).with_width((r.width / 20).max(1) as f64);
                let first = r.x + r.width * 8 / 20;
                let second = r.x + r.width * 13 / 20;
                let inset = r.height * 20 / 75;
                let (top, bottom) = (r.y + inset, r.y + r.height - 1 - inset);
                canvas.draw_line(Point::new(first, top), Point::new(first, bottom), &pen);
                canvas.draw_line(Point::new(second, top), Point::new(second, bottom), &pen);
            },
            ItemViewItem => self.draw_view_item(front, opt, &pal, canvas),
            ShapedFrame => self.draw_shaped_frame(front, opt, &pal, canvas),
            ScrollBarAddLine | ScrollBarSubLine => {
                let Some(slider) = opt.slider() else {
                    return;
                };
                front.draw_primitive(PrimitiveElement::PanelButtonBevel, opt, canvas);
                let add = ce == ScrollBarAddLine;
                let arrow = match (slider.orientation, add ^ opt.direction.is_rtl()) {
                    (Orientation::Horizontal, true) => PrimitiveElement::IndicatorArrowRight,
                    (Orientation::Horizontal, false) => PrimitiveElement::IndicatorArrowLeft,
                    (Orientation::Vertical, _) if add => PrimitiveElement::IndicatorArrowDown,
                    (Orientation::Vertical, _) => PrimitiveElement::IndicatorArrowUp,
                };
                front.draw_primitive(arrow, opt, canvas);
            },
            ScrollBarAddPage | ScrollBarSubPage => {
                let (base, stipple) = if opt.state.contains(State::SUNKEN) {
                    (ColorRole::Dark, ColorRole::Shadow)
                } else {
                    (ColorRole::Window, ColorRole::Light)
                };
                canvas.fill_rect(r, &Brush::Solid(pal.color(base)));
                canvas.fill_rect(r, &Brush::Solid(with_alpha(pal.color(stipple), 128)));
            },
            ScrollBarSlider => {
                let state = if opt.state.contains(State::SUNKEN) {
                    opt.state
                } else {
                    opt.state | State::RAISED
                };
                front.draw_primitive(PrimitiveElement::PanelButtonBevel, &opt.clone().with_state(state), canvas);
            },
            ScrollBarFirst | ScrollBarLast => front.draw_primitive(PrimitiveElement::PanelButtonBevel, opt, canvas),
            MenuVMargin | MenuHMargin | MenuEmptyArea | MenuBarEmptyArea | Splitter => {},
        }
    }

    fn draw_push_button(&self, front: &dyn Style, opt: &DrawOption, canvas: &mut dyn Canvas) {
        if opt.button().is_none() {
            return;
        }
        front.draw_control(ControlElement::PushButtonBevel, opt, canvas);
        let contents = front.sub_element_rect(SubElement::PushButtonContents, opt);
        front.draw_control(ControlElement::PushButtonLabel, &moved(opt, contents), canvas);
        if opt.state.contains(State::HAS_FOCUS) {
            let rect = front.sub_element_rect(SubElement::PushButtonFocusRect, opt);
            front.draw_primitive(PrimitiveElement::FrameFocusRect, &focus_option(opt, rect, None), canvas);
        }
    }

    fn draw_push_button_bevel(&self, front: &dyn Style, opt: &DrawOption, canvas: &mut dyn Canvas) {
        let Some(btn) = opt.button() else {
            return;
        };
        let mut br = opt.rect;
        if btn.features.contains(ButtonFeatures::DEFAULT_BUTTON) {
            front.draw_primitive(PrimitiveElement::FrameDefaultButton, opt, canvas);
        }
        if btn.features.contains(ButtonFeatures::AUTO_DEFAULT) {
            let dbi = front.pixel_metric(MetricId::ButtonDefaultIndicator, Some(opt));
            br = br.adjusted(dbi, dbi, -dbi, -dbi);
        }
        let bare = btn.features.intersects(ButtonFeatures::FLAT | ButtonFeatures::COMMAND_LINK_BUTTON);
        let hovered_link =
            btn.features.contains(ButtonFeatures::COMMAND_LINK_BUTTON) && opt.state.contains(State::MOUSE_OVER);
        if !bare || opt.state.intersects(State::SUNKEN | State::ON) || hovered_link {
            front.draw_primitive(PrimitiveElement::PanelButtonCommand, &moved(opt, br), canvas);
        }
        if btn.features.contains(ButtonFeatures::HAS_MENU) {
            let mbi = front.pixel_metric(MetricId::MenuButtonIndicator, Some(opt));
            let ir = opt.rect;
            let arrow = Rect::new(ir.right() - mbi + 2, ir.y + ir.height / 2 - mbi / 2 + 3, mbi - 6, mbi - 6);
            let arrow = visual_rect(opt.direction, br, arrow);
            front.draw_primitive(PrimitiveElement::IndicatorArrowDown, &moved(opt, arrow), canvas);
        }
    }

    fn draw_push_button_label(&self, front: &dyn Style, opt: &DrawOption, pal: &Palette, canvas: &mut dyn Canvas) {
        let Some(btn) = opt.button() else {
            return;
        };
        let shifted = opt.state.intersects(State::ON | State::SUNKEN);
        let (sx, sy) = if shifted {
            (
                front.pixel_metric(MetricId::ButtonShiftHorizontal, Some(opt)),
                front.pixel_metric(MetricId::ButtonShiftVertical, Some(opt)),
            )
        } else {
            (0, 0)
        };
        let mut text_rect = opt.rect;
        let mut alignment = Alignment::VCENTER;
        let icon = btn
            .icon
            .as_ref()
            .and_then(|icon| self.icon_image(front, icon, btn.icon_size, opt, None));
        if let Some((image, size)) = icon {
            let mut label_width = size.width;
            if !btn.text.is_empty() {
                label_width += text_size(opt.font.as_ref(), &btn.text).width + ICON_SPACING;
            }
            let icon_rect = Rect::new(
                text_rect.x + center_offset(text_rect.width, label_width),
                text_rect.y + center_offset(text_rect.height, size.height),
                size.width,
                size.height,
            );
            let icon_rect = visual_rect(opt.direction, text_rect, icon_rect);
            if opt.direction.is_rtl() {
                alignment |= Alignment::RIGHT;
                text_rect.set_right(icon_rect.left() - ICON_SPACING);
            } else {
                alignment |= Alignment::LEFT;
                text_rect.set_left(icon_rect.left() + icon_rect.width + ICON_SPACING);
            }
            canvas.draw_image(icon_rect.translated(sx, sy), &image);
        } else {
            alignment |= Alignment::HCENTER;
        }
        text_rect = text_rect.translated(sx, sy);
        if btn.features.contains(ButtonFeatures::HAS_MENU) {
            let indicator = front.pixel_metric(MetricId::MenuButtonIndicator, Some(opt));
            text_rect = if opt.direction.is_rtl() {
                text_rect.adjusted(indicator, 0, 0, 0)
            } else {
                text_rect.adjusted(0, 0, -indicator, 0)
            };
        }
        self.draw_item_text(front, canvas, text_rect, alignment, opt, &btn.text, pal.color(ColorRole::ButtonText));
    }

    /// Chunked or busy progress fill.
    ///
    /// Vertical bars are laid out in a transposed frame and mapped back,
    /// filling from the bottom up.
    fn draw_progress_contents(&self, front: &dyn Style, opt: &DrawOption, pal: &Palette, canvas: &mut dyn Canvas) {
        let Some(pb) = opt.progress_bar() else {
            return;
        };
        let vertical = pb.orientation == Orientation::Vertical;
        let outer = opt.rect;
        let rect = if vertical {
            Rect::new(outer.y, outer.x, outer.height, outer.width)
        } else {
            outer
        };
        let span = rect.height + 2 * rect.y;
        let map = |r: Rect| {
            if vertical {
                Rect::new(span - r.y - r.height, r.x, r.height, r.width)
            } else {
                r
            }
        };

        let mut chunk_pal = pal.clone();
        if pal.color(ColorRole::Highlight) == pal.color(ColorRole::Window) {
            let mut theme = pal.theme().clone();
            theme.set_color(
                pal.current_group(),
                ColorRole::Highlight,
                pal.color_in(ColorGroup::Active, ColorRole::Highlight),
            );
            chunk_pal = Palette::new(theme).with_group(pal.current_group());
        }
        let reverse = (vertical || opt.direction.is_rtl()) ^ pb.inverted_appearance;
        let w = rect.width;
        let (minimum, maximum, progress) = (pb.minimum as i64, pb.maximum as i64, pb.progress as i64);

        if pb.minimum == 0 && pb.maximum == 0 {
            if w <= 0 {
                return;
            }
            let mut x = ((progress - minimum).rem_euclid(2 * w as i64)) as i32;
            if x > w {
                x = 2 * w - x;
            }
            let x = if reverse { rect.right() - x } else { x + rect.x };
            let pen = Pen::new(chunk_pal.color(ColorRole::Highlight)).with_width(4.0);
            let (from, to) = (Point::new(x, rect.y), Point::new(x, rect.bottom()));
            if vertical {
                let flip = |p: Point| Point::new(span - p.y, p.x);
                canvas.draw_line(flip(from), flip(to), &pen);
            } else {
                canvas.draw_line(from, to, &pen);
            }
            return;
        }

        let unit = front.pixel_metric(MetricId::ProgressBarChunkWidth, Some(opt));
        if unit <= 0 {
            return;
        }
        let u = if unit > 1 { (w + unit) / unit } else { w / unit } as i64;
        let mut p_v = progress - minimum;
        let mut t_s = if maximum - minimum != 0 { maximum - minimum } else { 1 };
        if u > 0 && p_v >= i32::MAX as i64 / u && t_s >= u {
            p_v /= u;
            t_s /= u;
        }
        let tnu = (p_v * u / t_s) as i32;
        let mut nu = tnu;
        if nu * unit > w {
            nu -= 1;
        }

        let mut chunk = opt.clone().with_state(group_state(opt.state)).with_palette(chunk_pal);
        let x0 = if reverse {
            rect.right() - if unit > 1 { unit } else { 0 }
        } else {
            rect.x
        };
        let mut x = 0;
        for _ in 0..nu {
            chunk.rect = map(Rect::new(x0 + x, rect.y, unit, rect.height));
            front.draw_primitive(PrimitiveElement::IndicatorProgressChunk, &chunk, canvas);
            x += if reverse { -unit } else { unit };
        }
        if nu < tnu {
            let pixels_left = w - nu * unit;
            let offset = if reverse {
                x0 + x + unit - pixels_left
            } else {
                x0 + x
            };
            chunk.rect = map(Rect::new(offset, rect.y, pixels_left, rect.height));
            front.draw_primitive(PrimitiveElement::IndicatorProgressChunk, &chunk, canvas);
        }
    }

    fn draw_tool_button_label(&self, front: &dyn Style, opt: &DrawOption, pal: &Palette, canvas: &mut dyn Canvas) {
        let Some(tb) = opt.tool_button() else {
            return;
        };
        let rect = opt.rect;
        let (sx, sy) = if opt.state.intersects(State::SUNKEN | State::ON) {
            (
                front.pixel_metric(MetricId::ButtonShiftHorizontal, Some(opt)),
                front.pixel_metric(MetricId::ButtonShiftVertical, Some(opt)),
            )
        } else {
            (0, 0)
        };
        let text_color = pal.color(ColorRole::ButtonText);
        let has_arrow = tb.features.contains(ToolButtonFeatures::ARROW);
        let has_icon = tb.icon.as_ref().is_some_and(|icon| !icon.is_empty());
        let style = self.resolved_tool_button_style(front, tb, opt);

        if (!has_arrow && !has_icon && !tb.text.is_empty()) || style == ToolButtonStyle::TextOnly {
            self.draw_item_text(front, canvas, rect.translated(sx, sy), Alignment::CENTER, opt, &tb.text, text_color);
            return;
        }

        let mode = if !opt.state.contains(State::ENABLED) {
            IconMode::Disabled
        } else if opt.state.contains(State::MOUSE_OVER | State::AUTO_RAISE) {
            IconMode::Active
        } else {
            IconMode::Normal
        };
        let pixmap = tb
            .icon
            .as_ref()
            .and_then(|icon| self.icon_image(front, icon, rect.size().bounded_to(tb.icon_size), opt, Some(mode)));
        let pm_size = pixmap.as_ref().map(|(_, size)| *size).unwrap_or(tb.icon_size);

        if style == ToolButtonStyle::IconOnly {
            let target = rect.translated(sx, sy);
            if has_arrow {
                self.draw_tool_button_arrow(front, tb, opt, target, canvas);
            } else if let Some((image, size)) = &pixmap {
                self.draw_item_image(canvas, target, Alignment::CENTER, opt.direction, image, *size);
            }
            return;
        }

        let mut pr = rect;
        let mut tr = rect;
        let alignment = if style == ToolButtonStyle::TextUnderIcon {
            pr.height = pm_size.height + 4;
            tr = tr.adjusted(0, pr.height - 1, 0, -1);
            let pr = pr.translated(sx, sy);
            if has_arrow {
                self.draw_tool_button_arrow(front, tb, opt, pr, canvas);
            } else if let Some((image, size)) = &pixmap {
                self.draw_item_image(canvas, pr, Alignment::CENTER, opt.direction, image, *size);
            }
            Alignment::CENTER
        } else {
            pr.width = pm_size.width + 4;
            tr = tr.adjusted(pr.width, 0, 0, 0);
            let pr = pr.translated(sx, sy);
            if has_arrow {
                self.draw_tool_button_arrow(front, tb, opt, pr, canvas);
            } else if let Some((image, size)) = &pixmap {
                let target = visual_rect(opt.direction, rect, pr);
                self.draw_item_image(canvas, target, Alignment::CENTER, opt.direction, image, *size);
            }
            Alignment::LEFT | Alignment::VCENTER
        };
        let tr = tr.translated(sx, sy);
        let text = tool_button_elided_text(opt, tb, tr);
        self.draw_item_text(
            front,
            canvas,
            visual_rect(opt.direction, rect, tr),
            alignment,
            opt,
            &text,
            text_color,
        );
    }

    /// The button style, with [ToolButtonStyle::FollowStyle] resolved
    /// through the tool button style hint.
    fn resolved_tool_button_style(&self, front: &dyn Style, tb: &ToolButtonOption, opt: &DrawOption) -> ToolButtonStyle {
        if tb.tool_button_style != ToolButtonStyle::FollowStyle {
            return tb.tool_button_style;
        }
        match front.style_hint(HintId::ToolButtonStyle, Some(opt)).as_int() {
            1 => ToolButtonStyle::TextOnly,
            2 => ToolButtonStyle::TextBesideIcon,
            3 => ToolButtonStyle::TextUnderIcon,
            _ => ToolButtonStyle::IconOnly,
        }
    }

    fn draw_tool_button_arrow(
        &self,
        front: &dyn Style,
        tb: &ToolButtonOption,
        opt: &DrawOption,
        rect: Rect,
        canvas: &mut dyn Canvas,
    ) {
        if let Some(pe) = arrow_element(tb.arrow_type) {
            front.draw_primitive(pe, &moved(opt, rect), canvas);
        }
    }

    fn draw_tool_box_tab_label(&self, front: &dyn Style, opt: &DrawOption, pal: &Palette, canvas: &mut dyn Canvas) {
        let Some(tb) = opt.tool_box() else {
            return;
        };
        let extent = front.pixel_metric(MetricId::SmallIconSize, Some(opt));
        let mode = if opt.state.contains(State::ENABLED) {
            IconMode::Normal
        } else {
            IconMode::Disabled
        };
        let pixmap = tb
            .icon
            .as_ref()
            .and_then(|icon| self.icon_image(front, icon, Size::square(extent), opt, Some(mode)));
        let cr = front.sub_element_rect(SubElement::ToolBoxTabContents, opt);
        let tr = match &pixmap {
            None => cr.adjusted(4, 0, -8, 0),
            Some((image, size)) => {
                let ir = Rect::new(cr.left() + 4, cr.top(), size.width + 4 + 2, size.height);
                let tr = Rect::new(ir.right(), cr.top(), cr.width - ir.right() - 4, cr.height);
                if size.height > 0 {
                    let y = opt.rect.y + center_offset(opt.rect.height, size.height);
                    canvas.draw_image(Rect::new(ir.left(), y, size.width, size.height), image);
                }
                tr
            },
        };
        let text = elided_text(opt.font.as_ref(), &tb.text, ElideMode::Right, tr.width);
        self.draw_item_text(
            front,
            canvas,
            tr,
            Alignment::LEFT | Alignment::VCENTER,
            opt,
            &text,
            pal.color(ColorRole::ButtonText),
        );
        if !text.is_empty() && opt.state.contains(State::HAS_FOCUS) {
            let focus = focus_option(opt, tr, None).with_state(group_state(opt.state));
            front.draw_primitive(PrimitiveElement::FrameFocusRect, &focus, canvas);
        }
    }

    /// Tab outline: a polygon chamfered by a third of the tab's thickness.
    ///
    /// The polygon is built for a north tab or a west tab and flipped for
    /// the opposite side.
    fn draw_tab_shape(&self, front: &dyn Style, opt: &DrawOption, pal: &Palette, canvas: &mut dyn Canvas) {
        let Some(tab) = opt.tab() else {
            return;
        };
        let selected = opt.state.contains(State::SELECTED);
        let overlap = if tab.position == TabPosition::OnlyOneTab {
            0
        } else {
            front.pixel_metric(MetricId::TabBarTabOverlap, Some(opt))
        };
        let side = tab.shape.side();
        let mut rect = opt.rect;
        if !selected {
            rect = match side {
                TabSide::North => rect.adjusted(0, 0, 0, -overlap).adjusted(1, 1, -1, 0),
                TabSide::South => rect.adjusted(0, overlap, 0, 0).adjusted(1, 0, -1, -1),
                TabSide::East => rect.adjusted(overlap, 0, 0, 0).adjusted(0, 1, -1, -1),
                TabSide::West => rect.adjusted(0, 0, -overlap, 0).adjusted(1, 1, 0, -1),
            };
        }
        if !rect.is_valid() {
            return;
        }

        let mut a = [(0i32, 0i32); 10];
        let (dx, dy) = match side {
            TabSide::North | TabSide::South => {
                a[0] = (0, -1);
                a[1] = (0, 0);
                let y = rect.height - 2;
                let x = y / 3;
                a[2] = (x, y - 1);
                a[3] = (x + 2, y);
                a[4] = (x + 3, y + 1);
                let right = rect.width - 1;
                for i in 0..5 {
                    a[9 - i] = (right - a[i].0, a[i].1);
                }
                if side == TabSide::North {
                    for p in a.iter_mut() {
                        p.1 = rect.height - 1 - p.1;
                    }
                }
                (0.0, 0.5)
            },
            TabSide::East | TabSide::West => {
                a[0] = (-1, 0);
                a[1] = (0, 0);
                let x = rect.width - 2;
                let y = x / 3;
                a[2] = (x - 1, y);
                a[3] = (x, y + 2);
                a[4] = (x + 1, y + 3);
                let bottom = rect.height - 1;
                for i in 0..5 {
                    a[9 - i] = (a[i].0, bottom - a[i].1);
                }
                if side == TabSide::West {
                    for p in a.iter_mut() {
                        p.0 = rect.width - 1 - p.0;
                    }
                }
                (0.5, 0.0)
            },
        };
        let points: Vec<PointF> = a
            .iter()
            .map(|&(x, y)| PointF::new((rect.left() + x) as f64 + dx, (rect.top() + y) as f64 + dy))
            .collect();
        let fill = if selected {
            ColorRole::Base
        } else {
            ColorRole::Window
        };
        canvas.draw_polygon(
            &points,
            Some(&Pen::new(pal.color(ColorRole::WindowText))),
            Some(&Brush::Solid(pal.color(fill))),
        );
    }

    fn draw_tab_label(&self, front: &dyn Style, opt: &DrawOption, pal: &Palette, canvas: &mut dyn Canvas) {
        let Some(tab) = opt.tab() else {
            return;
        };
        let r = opt.rect;
        let vertical = tab.shape.is_vertical();
        if vertical {
            canvas.save();
            if tab.shape.side() == TabSide::East {
                canvas.translate((r.x + r.width) as f64, r.y as f64);
                canvas.rotate(90.0);
            } else {
                canvas.translate(r.x as f64, (r.y + r.height) as f64);
                canvas.rotate(-90.0);
            }
        }
        let layout = self.tab_layout_via(front, opt);
        let text_rect = front.sub_element_rect(SubElement::TabBarTabText, opt);
        if let Some(icon) = &tab.icon {
            let extent = if tab.icon_size.is_empty() {
                Size::square(front.pixel_metric(MetricId::SmallIconSize, Some(opt)))
            } else {
                tab.icon_size
            };
            let mode = if opt.state.contains(State::ENABLED) {
                IconMode::Normal
            } else {
                IconMode::Disabled
            };
            if let Some((image, size)) = self.icon_image(front, icon, extent, opt, Some(mode)) {
                let at = layout.icon_rect.top_left();
                canvas.draw_image(Rect::from_origin_size(at, size), &image);
            }
        }
        self.draw_item_text(
            front,
            canvas,
            text_rect,
            Alignment::CENTER,
            opt,
            &tab.text,
            pal.color(ColorRole::WindowText),
        );
        if vertical {
            canvas.restore();
        }

        if opt.state.contains(State::HAS_FOCUS) {
            let offset = 1 + front.pixel_metric(MetricId::DefaultFrameWidth, Some(opt));
            let x1 = r.left();
            let x2 = r.right() - 1;
            let focus = Rect::new(x1 + 1 + offset, r.y + offset, x2 - x1 - 2 * offset, r.height - 2 * offset);
            front.draw_primitive(PrimitiveElement::FrameFocusRect, &focus_option(opt, focus, None), canvas);
        }
    }

    fn draw_combo_box_label(&self, front: &dyn Style, opt: &DrawOption, pal: &Palette, canvas: &mut dyn Canvas) {
        let Some(cb) = opt.combo_box() else {
            return;
        };
        let mut edit = front.sub_control_rect(ComplexControl::ComboBox, opt, SubControl::ComboBoxEditField);
        canvas.save();
        canvas.set_clip(Some(&Region::from_rect(edit)));
        if let Some(icon) = &cb.current_icon {
            if let Some((image, size)) = self.icon_image(front, icon, cb.icon_size, opt, None) {
                let icon_rect = aligned_rect(
                    opt.direction,
                    Alignment::LEFT | Alignment::VCENTER,
                    Size::new(cb.icon_size.width + ICON_SPACING, edit.height),
                    edit,
                );
                if cb.editable {
                    canvas.fill_rect(icon_rect, &Brush::Solid(pal.color(ColorRole::Base)));
                }
                self.draw_item_image(canvas, icon_rect, Alignment::CENTER, opt.direction, &image, size);
            }
            let shift = cb.icon_size.width + ICON_SPACING;
            edit = edit.translated(if opt.direction.is_rtl() { -shift } else { shift }, 0);
        }
        if !cb.current_text.is_empty() && !cb.editable {
            self.draw_item_text(
                front,
                canvas,
                edit.adjusted(1, 0, -1, 0),
                visual_alignment(opt.direction, Alignment::LEFT | Alignment::VCENTER),
                opt,
                &cb.current_text,
                pal.color(ColorRole::ButtonText),
            );
        }
        canvas.restore();
    }

    fn draw_view_item(&self, front: &dyn Style, opt: &DrawOption, pal: &Palette, canvas: &mut dyn Canvas) {
        let Some(item) = opt.view_item() else {
            return;
        };
        canvas.save();
        canvas.set_clip(Some(&Region::from_rect(opt.rect)));

        let check_rect = front.sub_element_rect(SubElement::ItemViewItemCheckIndicator, opt);
        let icon_rect = front.sub_element_rect(SubElement::ItemViewItemDecoration, opt);
        let text_rect = front.sub_element_rect(SubElement::ItemViewItemText, opt);

        front.draw_primitive(PrimitiveElement::PanelItemViewItem, opt, canvas);

        if item.features.contains(ViewItemFeatures::HAS_CHECK_INDICATOR) {
            let mut state = opt.state - State::HAS_FOCUS;
            state |= match item.check_state {
                CheckState::Unchecked => State::OFF,
                CheckState::PartiallyChecked => State::NO_CHANGE,
                CheckState::Checked => State::ON,
            };
            let check = moved(opt, check_rect).with_state(state);
            front.draw_primitive(PrimitiveElement::IndicatorItemViewItemCheck, &check, canvas);
        }

        if let Some(icon) = &item.icon {
            let mode = if !opt.state.contains(State::ENABLED) {
                IconMode::Disabled
            } else if opt.state.contains(State::SELECTED) {
                IconMode::Selected
            } else {
                IconMode::Normal
            };
            if let Some((image, size)) = self.icon_image(front, icon, icon_rect.size(), opt, Some(mode)) {
                self.draw_item_image(canvas, icon_rect, item.decoration_alignment, opt.direction, &image, size);
            }
        }

        if !item.text.is_empty() {
            let role = if opt.state.contains(State::SELECTED) {
                ColorRole::HighlightedText
            } else {
                ColorRole::Text
            };
            if opt.state.contains(State::EDITING) {
                canvas.stroke_rect(text_rect, &Pen::new(pal.color(ColorRole::Text)));
            }
            self.draw_view_item_text(front, opt, item, text_rect, pal.color(role), canvas);
        }

        if opt.state.contains(State::HAS_FOCUS) {
            let group = if opt.state.contains(State::ENABLED) {
                ColorGroup::Active
            } else {
                ColorGroup::Disabled
            };
            let background = if opt.state.contains(State::SELECTED) {
                ColorRole::Highlight
            } else {
                ColorRole::Window
            };
            let rect = front.sub_element_rect(SubElement::ItemViewItemFocusRect, opt);
            let focus = focus_option(opt, rect, Some(pal.color_in(group, background)))
                .with_state(opt.state | State::KEYBOARD_FOCUS_CHANGE | State::ITEM);
            front.draw_primitive(PrimitiveElement::FrameFocusRect, &focus, canvas);
        }
        canvas.restore();
    }

    /// Wrap, elide and draw the text of an item view entry.
    fn draw_view_item_text(
        &self,
        front: &dyn Style,
        opt: &DrawOption,
        item: &ViewItemOption,
        rect: Rect,
        color: Color,
        canvas: &mut dyn Canvas,
    ) {
        let margin = front.pixel_metric(MetricId::FocusFrameHMargin, None) + 1;
        let text_rect = rect.adjusted(margin, 0, -margin, 0);
        let font = opt.font.as_ref();
        let (text, start) = calculate_elided_text(
            font,
            &item.text,
            text_rect,
            item.display_alignment,
            item.text_elide_mode,
            item.features.contains(ViewItemFeatures::WRAP_TEXT),
            false,
            true,
        );
        let text = text.replace(LINE_SEPARATOR, "\n");
        let start = start.unwrap_or_else(|| text_rect.top_left());
        let height = text_size(font, &text).height;
        let horizontal = visual_alignment(opt.direction, item.display_alignment) & Alignment::HORIZONTAL_MASK;
        canvas.draw_text(
            Rect::new(text_rect.x, start.y, text_rect.width, height),
            horizontal | Alignment::TOP,
            &text,
            color,
        );
    }

    fn draw_shaped_frame(&self, front: &dyn Style, opt: &DrawOption, pal: &Palette, canvas: &mut dyn Canvas) {
        let Some(frame) = opt.frame() else {
            return;
        };
        let sunken = opt.state.contains(State::SUNKEN);
        let plain = !sunken && !opt.state.contains(State::RAISED);
        let (lw, mlw) = (frame.line_width, frame.mid_line_width);
        let r = opt.rect;
        let foreground = pal.color(ColorRole::WindowText);
        match frame.frame_shape {
            FrameShape::NoFrame => {},
            FrameShape::Box if plain => plain_rect(canvas, r, foreground, lw, None),
            FrameShape::Box => shade_rect(canvas, r, pal, sunken, lw, mlw, None),
            FrameShape::StyledPanel => front.draw_primitive(PrimitiveElement::Frame, opt, canvas),
            FrameShape::Panel if plain => plain_rect(canvas, r, foreground, lw, None),
            FrameShape::Panel => shade_panel(canvas, r, pal, sunken, lw, None),
            FrameShape::WinPanel if plain => plain_rect(canvas, r, foreground, lw, None),
            FrameShape::WinPanel => win_panel(canvas, r, pal, sunken, None),
            FrameShape::HLine | FrameShape::VLine => {
                let (p1, p2) = if frame.frame_shape == FrameShape::HLine {
                    let y = r.y + r.height / 2;
                    (Point::new(r.x, y), Point::new(r.x + r.width, y))
                } else {
                    let x = r.x + r.width / 2;
                    (Point::new(x, r.y), Point::new(x, r.y + r.height))
                };
                if plain {
                    canvas.draw_line(p1, p2, &Pen::new(foreground).with_width(lw as f64));
                } else {
                    shade_line(canvas, p1, p2, pal, sunken, lw, mlw);
                }
            },
        }
    }

    /// Menu entries: separator line, or check column, label, shortcut and
    /// submenu arrow over a highlight when selected.
    fn draw_menu_item(&self, front: &dyn Style, opt: &DrawOption, pal: &Palette, canvas: &mut dyn Canvas) {
        let Some(item) = opt.menu_item() else {
            return;
        };
        let r = opt.rect;
        match item.menu_item_type {
            MenuItemType::Separator => {
                let y = r.y + r.height / 2;
                shade_line(canvas, Point::new(r.x + 2, y), Point::new(r.right() - 2, y), pal, true, 1, 0);
                return;
            },
            MenuItemType::Scroller => {
                front.draw_control(ControlElement::MenuScroller, opt, canvas);
                return;
            },
            MenuItemType::TearOff => {
                front.draw_control(ControlElement::MenuTearoff, opt, canvas);
                return;
            },
            MenuItemType::Margin | MenuItemType::EmptyArea => return,
            MenuItemType::Normal | MenuItemType::DefaultItem | MenuItemType::SubMenu => {},
        }

        let selected = opt.state.contains(State::SELECTED) && opt.state.contains(State::ENABLED);
        let fill = if selected {
            ColorRole::Highlight
        } else {
            ColorRole::Button
        };
        canvas.fill_rect(r, &Brush::Solid(pal.color(fill)));
        let text_color = pal.color(if selected {
            ColorRole::HighlightedText
        } else {
            ColorRole::ButtonText
        });

        let checkable = item.check_type != CheckType::NotCheckable;
        let check_width = item.max_icon_width.max(front.pixel_metric(MetricId::IndicatorWidth, Some(opt)) + 4);
        let check_rect = visual_rect(opt.direction, r, Rect::new(r.x, r.y, check_width, r.height));
        let extent = front.pixel_metric(MetricId::SmallIconSize, Some(opt));
        let icon = item
            .icon
            .as_ref()
            .and_then(|icon| self.icon_image(front, icon, Size::square(extent), opt, Some(icon_mode(opt.state))));
        match icon {
            Some((image, size)) => {
                if checkable && item.checked {
                    shade_panel(canvas, check_rect, pal, true, 1, None);
                }
                self.draw_item_image(canvas, check_rect, Alignment::CENTER, opt.direction, &image, size);
            },
            None if checkable && item.checked => {
                let mark = aligned_rect(
                    opt.direction,
                    Alignment::CENTER,
                    Size::square(check_width - 6),
                    check_rect,
                );
                let state = opt.state | State::ON;
                front.draw_primitive(
                    PrimitiveElement::IndicatorMenuCheckMark,
                    &moved(opt, mark).with_state(state),
                    canvas,
                );
            },
            None => {},
        }

        let arrow_width = if item.menu_item_type == MenuItemType::SubMenu {
            front.pixel_metric(MetricId::MenuButtonIndicator, Some(opt))
        } else {
            0
        };
        let logical = Rect::new(
            r.x + check_width + 2,
            r.y,
            r.width - check_width - 2 - arrow_width - 2,
            r.height,
        );
        let (label, shortcut) = match item.text.split_once('\t') {
            Some((label, shortcut)) => (label, Some(shortcut)),
            None => (item.text.as_str(), None),
        };
        if let Some(shortcut) = shortcut {
            let tab_rect = Rect::new(logical.right() - item.tab_width + 1, r.y, item.tab_width, r.height);
            self.draw_item_text(
                front,
                canvas,
                visual_rect(opt.direction, r, tab_rect),
                visual_alignment(opt.direction, Alignment::RIGHT | Alignment::VCENTER),
                opt,
                shortcut,
                text_color,
            );
        }
        let label_rect = logical.adjusted(0, 0, -item.tab_width, 0);
        self.draw_item_text(
            front,
            canvas,
            visual_rect(opt.direction, r, label_rect),
            visual_alignment(opt.direction, Alignment::LEFT | Alignment::VCENTER),
            opt,
            label,
            text_color,
        );

        if arrow_width > 0 {
            let arrow = Rect::new(r.right() - arrow_width, r.y + center_offset(r.height, arrow_width), arrow_width, arrow_width);
            let pe = if opt.direction.is_rtl() {
                PrimitiveElement::IndicatorArrowLeft
            } else {
                PrimitiveElement::IndicatorArrowRight
            };
            front.draw_primitive(pe, &moved(opt, visual_rect(opt.direction, r, arrow)), canvas);
        }
    }
}

/// Elide tool button text in the middle when it does not fit its rect.
fn tool_button_elided_text(opt: &DrawOption, tb: &ToolButtonOption, rect: Rect) -> String {
    let font = opt.font.as_ref();
    if font.advance(&tb.text) <= rect.width {
        return tb.text.clone();
    }
    let text = tb.text.replace('\n', &LINE_SEPARATOR.to_string());
    let (elided, _) = calculate_elided_text(font, &text, rect, Alignment::TOP, ElideMode::Middle, false, false, false);
    elided.replace(LINE_SEPARATOR, "\n")
}

/// The slanted tab of a tool box page.
fn draw_tool_box_tab_shape(opt: &DrawOption, pal: &Palette, canvas: &mut dyn Canvas) {
    let r = opt.rect;
    let (x0, y0, w, h) = (r.x, r.y, r.width, r.height);
    if w <= 0 || h <= 0 {
        return;
    }
    let pen = Pen::new(crate::draw_util::darker(pal.color(ColorRole::Mid), 150));
    let d = 20 + h - 3;
    let at = |x: i32, y: i32| pointf(x0 + x, y0 + y);
    let outline: Vec<PointF> = if opt.direction.is_rtl() {
        vec![at(w, h + 1), at(w, 1), at(d - 1, 1), at(19, h - 2), at(0, h - 2), at(0, h + 1)]
    } else {
        vec![at(-1, h + 1), at(-1, 1), at(w - d, 1), at(w - 20, h - 2), at(w - 1, h - 2), at(w - 1, h + 1)]
    };
    canvas.draw_polygon(&outline, Some(&pen), None);

    let light = Pen::new(pal.color(ColorRole::Light));
    let line = |canvas: &mut dyn Canvas, x1: i32, y1: i32, x2: i32, y2: i32| {
        canvas.draw_line(Point::new(x0 + x1, y0 + y1), Point::new(x0 + x2, y0 + y2), &light)
    };
    if opt.direction.is_rtl() {
        line(canvas, w - 1, 2, d - 1, 2);
        line(canvas, d, 2, 20, h - 1);
        line(canvas, 19, h - 1, -1, h - 1);
    } else {
        line(canvas, 0, 2, w - d, 2);
        line(canvas, w - d - 1, 2, w - 21, h - 1);
        line(canvas, w - 20, h - 1, w, h - 1);
    }
}

/// Three ridged diagonal strokes in the grip corner.
fn draw_size_grip(opt: &DrawOption, pal: &Palette, canvas: &mut dyn Canvas) {
    let r = opt.rect;
    let (w, h) = (r.width, r.height);
    if w <= 0 || h <= 0 {
        return;
    }
    let sw = w.min(h);
    let (dx, dy) = if h > w { (0, h - w) } else { (w - h, 0) };
    let corner = match opt.size_grip() {
        Some(grip) => grip.corner,
        None if opt.direction.is_rtl() => Corner::BottomLeft,
        None => Corner::BottomRight,
    };
    canvas.save();
    canvas.translate((r.x + dx) as f64, (r.y + dy) as f64);
    let light = Pen::new(pal.color(ColorRole::Light));
    let dark = Pen::new(pal.color(ColorRole::Dark));
    let s = sw / 3;
    let mut line = |x1: i32, y1: i32, x2: i32, y2: i32, pen: &Pen| {
        canvas.draw_line(Point::new(x1, y1), Point::new(x2, y2), pen);
    };
    let (mut sx, mut sy) = match corner {
        Corner::BottomLeft => (sw, 0),
        Corner::TopRight => (0, sw),
        Corner::BottomRight | Corner::TopLeft => (0, 0),
    };
    for _ in 0..4 {
        match corner {
            Corner::BottomLeft => {
                line(0, sy - 1, sx + 1, sw, &light);
                line(0, sy, sx, sw, &dark);
                line(0, sy + 1, sx - 1, sw, &dark);
                sx -= s;
                sy += s;
            },
            Corner::BottomRight => {
                line(sx - 1, sw, sw, sy - 1, &light);
                line(sx, sw, sw, sy, &dark);
                line(sx + 1, sw, sw, sy + 1, &dark);
                sx += s;
                sy += s;
            },
            Corner::TopRight => {
                line(sx - 1, 0, sw, sy + 1, &light);
                line(sx, 0, sw, sy, &dark);
                line(sx + 1, 0, sw, sy - 1, &dark);
                sx += s;
                sy -= s;
            },
            Corner::TopLeft => {
                line(0, sy - 1, sx - 1, 0, &light);
                line(0, sy, sx, 0, &dark);
                line(0, sy + 1, sx + 1, 0, &dark);
                sx += s;
                sy += s;
            },
        }
    }
    canvas.restore();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DrawCommand, Picture};
    use crate::option::{ButtonOption, ProgressBarOption, SliderOption, TabOption, TabShape};
    use std::sync::Mutex;

    /// Records which elements the front style was asked to paint.
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
            self.calls.lock().map(|c| c.clone()).unwrap_or_default()
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
            self.calls.lock().unwrap().push(format!("{pe:?}@{:?}", opt.rect));
            self.base.draw_primitive_via(self, pe, opt, canvas);
        }
        fn draw_control(&self, ce: ControlElement, opt: &DrawOption, canvas: &mut dyn Canvas) {
            self.calls.lock().unwrap().push(format!("{ce:?}"));
            self.base.draw_control_via(self, ce, opt, canvas);
        }
    }

    fn chunk_rects(style: &Recorder) -> Vec<Rect> {
        style
            .calls()
            .iter()
            .filter_map(|c| c.strip_prefix("IndicatorProgressChunk@"))
            .map(|s| {
                let nums: Vec<i32> = s
                    .split(|c: char| !(c.is_ascii_digit() || c == '-'))
                    .filter(|p| !p.is_empty())
                    .map(|p| p.parse().unwrap())
                    .collect();
                Rect::new(nums[0], nums[1], nums[2], nums[3])
            })
            .collect()
    }

    fn progress(min: i32, max: i32, value: i32) -> DrawOption {
        DrawOption::new(Rect::new(0, 0, 100, 20)).with_payload(ProgressBarOption {
            minimum: min,
            maximum: max,
            progress: value,
            ..Default::default()
        })
    }

    #[test]
    fn test_push_button_paints_bevel_label_then_focus() {
        let style = Recorder::new();
        let opt = DrawOption::new(Rect::new(0, 0, 80, 30))
            .with_state(State::ENABLED | State::ACTIVE | State::HAS_FOCUS)
            .with_payload(ButtonOption {
                text: "&Ok".into(),
                ..Default::default()
            });
        let mut picture = Picture::new();
        style.draw_control(ControlElement::PushButton, &opt, &mut picture);
        let calls = style.calls();
        let pos = |name: &str| calls.iter().position(|c| c.starts_with(name)).unwrap();
        assert!(pos("PushButtonBevel") < pos("PanelButtonCommand"));
        assert!(pos("PanelButtonCommand") < pos("PushButtonLabel"));
        assert!(pos("PushButtonLabel") < pos("FrameFocusRect"));
        assert_eq!(picture.texts(), vec!["Ok"]);
    }

    #[test]
    fn test_unfocused_push_button_has_no_focus_rect() {
        let style = Recorder::new();
        let opt = DrawOption::new(Rect::new(0, 0, 80, 30)).with_payload(ButtonOption::default());
        style.draw_control(ControlElement::PushButton, &opt, &mut Picture::new());
        assert!(!style.calls().iter().any(|c| c.starts_with("FrameFocusRect")));
    }

    #[test]
    fn test_full_progress_covers_the_track() {
        for width in [100, 97, 13] {
            let style = Recorder::new();
            let mut opt = progress(0, 100, 100);
            opt.rect = Rect::new(0, 0, width, 20);
            style.draw_control(ControlElement::ProgressBarContents, &opt, &mut Picture::new());
            let rects = chunk_rects(&style);
            let total: i32 = rects.iter().map(|r| r.width).sum();
            assert_eq!(total, width);
            let left = rects.iter().map(|r| r.x).min().unwrap();
            let right = rects.iter().map(|r| r.x + r.width).max().unwrap();
            assert_eq!((left, right), (0, width));
        }
    }

    #[test]
    fn test_progress_overflow_guard_keeps_proportion() {
        let style = Recorder::new();
        let opt = progress(0, i32::MAX, i32::MAX / 2);
        style.draw_control(ControlElement::ProgressBarContents, &opt, &mut Picture::new());
        let covered: i32 = chunk_rects(&style).iter().map(|r| r.width).sum();
        assert!((covered - 50).abs() <= 9, "covered {covered}");
    }

    #[test]
    fn test_rtl_progress_fills_from_the_right() {
        let style = Recorder::new();
        let opt = progress(0, 100, 50).with_direction(crate::geometry::Direction::RightToLeft);
        style.draw_control(ControlElement::ProgressBarContents, &opt, &mut Picture::new());
        let rects = chunk_rects(&style);
        assert!(!rects.is_empty());
        assert!(rects.iter().all(|r| r.x >= 40));
        assert_eq!(rects.iter().map(|r| r.x + r.width).max(), Some(99));
    }

    #[test]
    fn test_busy_progress_draws_one_thick_line() {
        let style = CommonStyle::new();
        let mut picture = Picture::new();
        style.draw_control(ControlElement::ProgressBarContents, &progress(0, 0, 130), &mut picture);
        match picture.commands() {
            [DrawCommand::Line(a, b, pen)] => {
                assert_eq!(a.x, 70);
                assert_eq!(b.x, 70);
                assert_eq!(pen.width, 4.0);
            },
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_tool_button_text_only_is_centered() {
        let style = CommonStyle::new();
        let opt = DrawOption::new(Rect::new(0, 0, 60, 24)).with_payload(ToolButtonOption {
            text: "Go".into(),
            tool_button_style: ToolButtonStyle::TextBesideIcon,
            ..Default::default()
        });
        let mut picture = Picture::new();
        style.draw_control(ControlElement::ToolButtonLabel, &opt, &mut picture);
        match picture.commands() {
            [DrawCommand::Text(rect, alignment, text, _)] => {
                assert_eq!(*rect, opt.rect);
                assert_eq!(*alignment, Alignment::CENTER);
                assert_eq!(text, "Go");
            },
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_tool_button_arrow_beside_text() {
        let style = Recorder::new();
        let opt = DrawOption::new(Rect::new(0, 0, 80, 24)).with_payload(ToolButtonOption {
            text: "Back".into(),
            features: ToolButtonFeatures::ARROW,
            arrow_type: ArrowType::Left,
            icon_size: Size::square(16),
            tool_button_style: ToolButtonStyle::TextBesideIcon,
            ..Default::default()
        });
        let mut picture = Picture::new();
        style.draw_control(ControlElement::ToolButtonLabel, &opt, &mut picture);
        assert!(style.calls().contains(&format!("IndicatorArrowLeft@{:?}", Rect::new(0, 0, 20, 24))));
        assert_eq!(picture.texts(), vec!["Back"]);
    }

    #[test]
    fn test_progress_bar_label_only_when_visible() {
        let style = Recorder::new();
        let mut opt = progress(0, 100, 60);
        style.draw_control(ControlElement::ProgressBar, &opt, &mut Picture::new());
        assert!(!style.calls().iter().any(|c| c == "ProgressBarLabel"));
        opt.payload = ProgressBarOption {
            progress: 60,
            text: "60%".into(),
            text_visible: true,
            ..Default::default()
        }
        .into();
        let style = Recorder::new();
        let mut picture = Picture::new();
        style.draw_control(ControlElement::ProgressBar, &opt, &mut picture);
        assert_eq!(
            style.calls().iter().filter(|c| c.starts_with("ProgressBar")).cloned().collect::<Vec<_>>(),
            vec!["ProgressBar", "ProgressBarGroove", "ProgressBarContents", "ProgressBarLabel"]
        );
        assert_eq!(picture.texts(), vec!["60%"]);
    }

    #[test]
    fn test_scroll_bar_line_arrow_follows_direction() {
        let style = Recorder::new();
        let opt = DrawOption::new(Rect::new(0, 0, 16, 16)).with_payload(SliderOption::default());
        style.draw_control(ControlElement::ScrollBarAddLine, &opt, &mut Picture::new());
        let rtl = opt.clone().with_direction(crate::geometry::Direction::RightToLeft);
        style.draw_control(ControlElement::ScrollBarAddLine, &rtl, &mut Picture::new());
        let arrows: Vec<String> = style.calls().into_iter().filter(|c| c.starts_with("IndicatorArrow")).collect();
        assert!(arrows[0].starts_with("IndicatorArrowRight"));
        assert!(arrows[1].starts_with("IndicatorArrowLeft"));
    }

    #[test]
    fn test_tab_shape_is_a_ten_point_polygon() {
        let style = CommonStyle::new();
        let opt = DrawOption::new(Rect::new(0, 0, 60, 24))
            .with_state(State::ENABLED | State::ACTIVE | State::SELECTED)
            .with_payload(TabOption {
                shape: TabShape::TriangularNorth,
                ..Default::default()
            });
        let mut picture = Picture::new();
        style.draw_control(ControlElement::TabBarTabShape, &opt, &mut picture);
        match picture.commands() {
            [DrawCommand::Polygon(points, Some(_), Some(_))] => {
                assert_eq!(points.len(), 10);
                assert_eq!(points[0], PointF::new(0.0, 24.5));
                assert_eq!(points[9], PointF::new(59.0, 24.5));
            },
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_missing_payload_paints_nothing() {
        let style = CommonStyle::new();
        let opt = DrawOption::new(Rect::new(0, 0, 50, 20));
        for ce in [
            ControlElement::PushButton,
            ControlElement::ProgressBarContents,
            ControlElement::ToolButtonLabel,
            ControlElement::ItemViewItem,
            ControlElement::ShapedFrame,
            ControlElement::Splitter,
        ] {
            let mut picture = Picture::new();
            style.draw_control(ce, &opt, &mut picture);
            assert!(picture.is_empty(), "{ce:?}");
        }
    }

    #[test]
    fn test_overridden_check_box_indicator_is_used() {
        struct Crossed(CommonStyle);
        impl Style for Crossed {
            fn base(&self) -> &CommonStyle {
                &self.0
            }
            fn front(&self) -> &dyn Style {
                self
            }
            fn draw_primitive(&self, pe: PrimitiveElement, opt: &DrawOption, canvas: &mut dyn Canvas) {
                if pe == PrimitiveElement::IndicatorCheckBox {
                    canvas.draw_text(opt.rect, Alignment::CENTER, "x", Color::BLACK);
                } else {
                    self.base().draw_primitive_via(self, pe, opt, canvas);
                }
            }
        }
        let style = Crossed(CommonStyle::new());
        let opt = DrawOption::new(Rect::new(0, 0, 200, 20)).with_payload(ButtonOption {
            text: "Check".into(),
            ..Default::default()
        });
        let mut picture = Picture::new();
        style.draw_control(ControlElement::CheckBox, &opt, &mut picture);
        assert_eq!(picture.texts(), vec!["x", "Check"]);
    }
}
