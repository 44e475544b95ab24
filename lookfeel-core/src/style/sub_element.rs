// SPDX-License-Identifier: LGPL-3.0-only

use super::{CommonStyle, Style};
use crate::geometry::{aligned_rect, center_offset, visual_rect, Alignment, Orientation, Point, Rect, Size};
use crate::hint::HintId;
use crate::kinds::{StandardPixmap, SubElement};
use crate::metric::MetricId;
use crate::option::{ButtonFeatures, DrawOption, FrameShape, TabSide, ToolBarFeatures};
use crate::state::State;
use crate::text::item_text_rect;

/// Margins around a movable tool bar handle.
const TOOL_BAR_HANDLE_MARGIN: i32 = 2;

/// Width of a tab tear indicator.
const TEAR_INDICATOR_EXTENT: i32 = 8;

impl CommonStyle {
    /// Default sub-element geometry.
    ///
    /// Rects share the coordinate frame of `opt.rect` and are already
    /// mirrored for right-to-left options. Elements that need a payload the
    /// option does not carry resolve to an empty rect.
    pub fn sub_element_rect_via(&self, front: &dyn Style, se: SubElement, opt: &DrawOption) -> Rect {
        use SubElement::*;
        let metric = |m: MetricId| front.pixel_metric(m, Some(opt));
        let visual = |r: Rect| visual_rect(opt.direction, opt.rect, r);
        match se {
            PushButtonContents | PushButtonFocusRect => {
                let Some(button) = opt.button() else {
                    return Rect::default();
                };
                let mut inset = metric(MetricId::DefaultFrameWidth);
                if se == PushButtonFocusRect {
                    inset += 1;
                }
                if button.features.contains(ButtonFeatures::AUTO_DEFAULT) {
                    inset += metric(MetricId::ButtonDefaultIndicator);
                }
                visual(opt.rect.adjusted(inset, inset, -inset, -inset))
            },
            CheckBoxIndicator => self.indicator_rect(front, opt, MetricId::IndicatorWidth, MetricId::IndicatorHeight),
            RadioButtonIndicator => {
                self.indicator_rect(front, opt, MetricId::ExclusiveIndicatorWidth, MetricId::ExclusiveIndicatorHeight)
            },
            CheckBoxContents => self.label_contents_rect(front, opt, CheckBoxIndicator, MetricId::CheckBoxLabelSpacing),
            RadioButtonContents => {
                self.label_contents_rect(front, opt, RadioButtonIndicator, MetricId::RadioButtonLabelSpacing)
            },
            CheckBoxFocusRect => self.label_focus_rect(front, opt, CheckBoxIndicator, CheckBoxContents),
            RadioButtonFocusRect => self.label_focus_rect(front, opt, RadioButtonIndicator, RadioButtonContents),
            CheckBoxClickRect => front
                .sub_element_rect(CheckBoxFocusRect, opt)
                .united(&front.sub_element_rect(CheckBoxIndicator, opt)),
            RadioButtonClickRect => front
                .sub_element_rect(RadioButtonFocusRect, opt)
                .united(&front.sub_element_rect(RadioButtonIndicator, opt)),
            SliderFocusRect => {
                let Some(slider) = opt.slider() else {
                    return Rect::default();
                };
                let tick_offset = metric(MetricId::SliderTickmarkOffset);
                let thickness = metric(MetricId::SliderControlThickness);
                let r = opt.rect;
                let focus = match slider.orientation {
                    Orientation::Horizontal => Rect::new(r.x, r.y + tick_offset - 1, r.width, thickness + 2),
                    Orientation::Vertical => Rect::new(r.x + tick_offset - 1, r.y, thickness + 2, r.height),
                };
                visual(focus.intersected(&r))
            },
            ProgressBarGroove | ProgressBarContents | ProgressBarLabel => {
                let Some(pb) = opt.progress_bar() else {
                    return Rect::default();
                };
                let r = opt.rect;
                let text_width = if pb.text_visible {
                    opt.font.advance(&pb.text).max(opt.font.advance("100%")) + 6
                } else {
                    0
                };
                let ret = if pb.text_alignment.intersects(Alignment::CENTER) {
                    r
                } else if se == ProgressBarLabel {
                    Rect::from_corners(
                        Point::new(r.right() - text_width, r.top()),
                        Point::new(r.right(), r.bottom()),
                    )
                } else {
                    Rect::from_corners(r.top_left(), Point::new(r.right() - text_width, r.bottom()))
                };
                visual(ret)
            },
            ComboBoxFocusRect => {
                let Some(cb) = opt.combo_box() else {
                    return Rect::default();
                };
                let margin = if cb.frame { 3 } else { 0 };
                let r = opt.rect;
                visual(Rect::new(
                    r.left() + margin,
                    r.top() + margin,
                    r.width - 2 * margin - 16,
                    r.height - 2 * margin,
                ))
            },
            ToolBoxTabContents => opt.rect.adjusted(0, 0, -30, 0),
            HeaderLabel => {
                let margin = metric(MetricId::HeaderMargin);
                let r = opt.rect;
                let mut label = r.adjusted(margin, margin, -margin, -margin);
                if let Some(header) = opt.header() {
                    if header.sort_indicator != crate::option::SortIndicator::None {
                        if header_horizontal(opt) {
                            label.width -= r.height / 2 + margin * 2;
                        } else {
                            label.height -= r.width / 2 + margin * 2;
                        }
                    }
                }
                visual(label)
            },
            HeaderArrow => {
                let margin = metric(MetricId::HeaderMargin);
                let Rect { x, y, width: w, height: h } = opt.rect;
                let arrow = if header_horizontal(opt) {
                    let size = h / 2;
                    Rect::new(x + w - margin * 2 - size, y + 5, size, h - margin * 2 - 5)
                } else {
                    let size = w / 2;
                    Rect::new(x + 5, y + h - margin * 2 - size, w - margin * 2 - 5, size)
                };
                visual(arrow)
            },
            TabWidgetTabBar => self.tab_widget_tab_bar_rect(front, opt),
            TabWidgetTabPane | TabWidgetTabContents => {
                let Some(twf) = opt.tab_widget_frame() else {
                    return Rect::default();
                };
                let overlap = if twf.line_width == 0 {
                    0
                } else {
                    metric(MetricId::TabBarBaseOverlap)
                };
                let r = opt.rect;
                let bar = twf.tab_bar_size;
                let pane_height = (r.height - bar.height + overlap).min(r.height);
                let pane_width = (r.width - bar.width + overlap).min(r.width);
                let pane = match twf.shape.side() {
                    TabSide::North => Rect::new(r.x, r.y + (bar.height - overlap).max(0), r.width, pane_height),
                    TabSide::South => Rect::new(r.x, r.y, r.width, pane_height),
                    TabSide::East => Rect::new(r.x, r.y, pane_width, r.height),
                    TabSide::West => Rect::new(r.x + (bar.width - overlap).max(0), r.y, pane_width, r.height),
                };
                if se == TabWidgetTabContents && twf.line_width > 0 {
                    pane.adjusted(2, 2, -2, -2)
                } else {
                    pane
                }
            },
            TabWidgetLeftCorner | TabWidgetRightCorner => {
                let Some(twf) = opt.tab_widget_frame() else {
                    return Rect::default();
                };
                let pane = front.sub_element_rect(TabWidgetTabPane, opt);
                let size = if se == TabWidgetLeftCorner {
                    twf.left_corner_widget_size
                } else {
                    twf.right_corner_widget_size
                };
                let x = if se == TabWidgetLeftCorner {
                    pane.x
                } else {
                    pane.x + pane.width - size.width
                };
                let corner = match twf.shape.side() {
                    TabSide::North => Rect::from_origin_size(Point::new(x, pane.y - size.height), size),
                    TabSide::South => Rect::from_origin_size(Point::new(x, pane.y + pane.height), size),
                    TabSide::East | TabSide::West => Rect::default(),
                };
                visual(corner)
            },
            TabBarTabText => match opt.tab() {
                Some(_) => self.tab_layout_via(front, opt).text_rect,
                None => Rect::default(),
            },
            TabBarTabLeftButton | TabBarTabRightButton => self.tab_button_rect(front, opt, se == TabBarTabLeftButton),
            TabBarTearIndicatorLeft | TabBarTearIndicatorRight => {
                let Some(tab) = opt.tab() else {
                    return Rect::default();
                };
                let r = opt.rect;
                let leading = se == TabBarTearIndicatorLeft;
                let ret = match (tab.shape.is_vertical(), leading) {
                    (false, true) => Rect::new(r.left(), r.top(), TEAR_INDICATOR_EXTENT, r.height),
                    (false, false) => Rect::new(r.right() + 1 - TEAR_INDICATOR_EXTENT, r.top(), TEAR_INDICATOR_EXTENT, r.height),
                    (true, true) => Rect::new(r.left(), r.top(), r.width, TEAR_INDICATOR_EXTENT),
                    (true, false) => Rect::new(r.left(), r.bottom() + 1 - TEAR_INDICATOR_EXTENT, r.width, TEAR_INDICATOR_EXTENT),
                };
                visual(ret)
            },
            TabBarScrollLeftButton | TabBarScrollRightButton => {
                let r = opt.rect;
                let vertical = r.width < r.height;
                let button = front.pixel_metric(MetricId::TabBarScrollButtonWidth, None);
                let from_end = if se == TabBarScrollLeftButton {
                    button * 2 - front.pixel_metric(MetricId::TabBarScrollButtonOverlap, None)
                } else {
                    button
                };
                if vertical {
                    Rect::new(r.x, r.y + r.height - from_end, r.width, button)
                } else {
                    visual(Rect::new(r.x + r.width - from_end, r.y, button, r.height))
                }
            },
            TreeViewDisclosureItem => opt.rect,
            LineEditContents => match opt.frame() {
                Some(frame) => {
                    let lw = frame.line_width;
                    visual(opt.rect.adjusted(lw, lw, -lw, -lw))
                },
                None => Rect::default(),
            },
            FrameContents => {
                let fw = metric(MetricId::DefaultFrameWidth);
                visual(opt.rect.adjusted(fw, fw, -fw, -fw))
            },
            ShapedFrameContents => {
                let Some(frame) = opt.frame() else {
                    return Rect::default();
                };
                let plain = !opt.state.intersects(State::SUNKEN | State::RAISED);
                let width = match frame.frame_shape {
                    FrameShape::NoFrame => 0,
                    FrameShape::Box | FrameShape::HLine | FrameShape::VLine if plain => frame.line_width,
                    FrameShape::Box | FrameShape::HLine | FrameShape::VLine => {
                        frame.line_width * 2 + frame.mid_line_width
                    },
                    FrameShape::StyledPanel => return front.sub_element_rect(FrameContents, opt),
                    FrameShape::WinPanel => 2,
                    FrameShape::Panel => frame.line_width,
                };
                opt.rect.adjusted(width, width, -width, -width)
            },
            DockWidgetCloseButton | DockWidgetFloatButton | DockWidgetTitleBarText | DockWidgetIcon => {
                self.dock_title_rect(front, opt, se)
            },
            ItemViewItemCheckIndicator if opt.view_item().is_none() => front.sub_element_rect(CheckBoxIndicator, opt),
            ItemViewItemCheckIndicator | ItemViewItemDecoration | ItemViewItemText | ItemViewItemFocusRect => {
                if opt.view_item().is_none() {
                    return Rect::default();
                }
                let layout = self.cached_view_item_layout(front, opt);
                match se {
                    ItemViewItemCheckIndicator => layout.check_rect,
                    ItemViewItemDecoration => layout.decoration_rect,
                    _ => layout.display_rect,
                }
            },
            ToolBarHandle => {
                let Some(tb) = opt.tool_bar() else {
                    return Rect::default();
                };
                if !tb.features.contains(ToolBarFeatures::MOVABLE) {
                    return Rect::default();
                }
                let m = TOOL_BAR_HANDLE_MARGIN;
                let extent = metric(MetricId::ToolBarHandleExtent);
                let r = opt.rect;
                if opt.state.contains(State::HORIZONTAL) {
                    visual(Rect::new(r.x + m, r.y + m, extent, r.height - 2 * m))
                } else {
                    Rect::new(r.x + m, r.y + m, r.width - 2 * m, extent)
                }
            },
            PushButtonLayoutItem | PushButtonBevel | CheckBoxLayoutItem | RadioButtonLayoutItem | ComboBoxLayoutItem
            | SliderLayoutItem | ProgressBarLayoutItem | TabWidgetLayoutItem | FrameLayoutItem | SpinBoxLayoutItem
            | ToolButtonLayoutItem | GroupBoxLayoutItem | LabelLayoutItem | DateTimeEditLayoutItem => Rect::default(),
        }
    }

    fn indicator_rect(&self, front: &dyn Style, opt: &DrawOption, width: MetricId, height: MetricId) -> Rect {
        let size = Size::new(front.pixel_metric(width, Some(opt)), front.pixel_metric(height, Some(opt)));
        aligned_rect(opt.direction, Alignment::LEFT | Alignment::VCENTER, size, opt.rect)
    }

    fn label_contents_rect(&self, front: &dyn Style, opt: &DrawOption, indicator: SubElement, spacing: MetricId) -> Rect {
        let ir = visual_rect(opt.direction, opt.rect, front.sub_element_rect(indicator, opt));
        let spacing = front.pixel_metric(spacing, Some(opt));
        let r = Rect::new(
            ir.left() + ir.width + spacing,
            opt.rect.y,
            opt.rect.width - ir.width - spacing,
            opt.rect.height,
        );
        visual_rect(opt.direction, opt.rect, r)
    }

    fn label_focus_rect(&self, front: &dyn Style, opt: &DrawOption, indicator: SubElement, contents: SubElement) -> Rect {
        let Some(button) = opt.button() else {
            return Rect::default();
        };
        let icon = button.icon.as_ref().filter(|icon| !icon.is_empty());
        if icon.is_none() && button.text.is_empty() {
            return front.sub_element_rect(indicator, opt).adjusted(1, 1, -1, -1);
        }
        let cr = visual_rect(opt.direction, opt.rect, front.sub_element_rect(contents, opt));
        let align = Alignment::ABSOLUTE | Alignment::LEFT | Alignment::VCENTER;
        let mut text_rect = Rect::default();
        if !button.text.is_empty() {
            text_rect = item_text_rect(opt.font.as_ref(), cr, align, opt.direction, &button.text);
        }
        let mut icon_rect = Rect::default();
        if icon.is_some() {
            icon_rect = aligned_rect(opt.direction, align, button.icon_size, cr);
            if !text_rect.is_empty() {
                text_rect = text_rect.translated(icon_rect.right() + 4, 0);
            }
        }
        let focus = icon_rect.united(&text_rect).adjusted(-3, -2, 3, 2).intersected(&opt.rect);
        visual_rect(opt.direction, opt.rect, focus)
    }

    fn tab_widget_tab_bar_rect(&self, front: &dyn Style, opt: &DrawOption) -> Rect {
        let Some(twf) = opt.tab_widget_frame() else {
            return Rect::default();
        };
        let r = opt.rect;
        let left = twf.left_corner_widget_size;
        let right = twf.right_corner_widget_size;
        let mut bar = Rect::from_origin_size(Point::default(), twf.tab_bar_size);
        let align = Alignment::from_bits_truncate(front.style_hint(HintId::TabBarAlignment, Some(opt)).as_int() as u16)
            & (Alignment::LEFT | Alignment::RIGHT | Alignment::HCENTER);
        let center = r.center();
        match twf.shape.side() {
            side @ (TabSide::North | TabSide::South) => {
                bar.width = bar.width.min(r.width - left.width - right.width);
                let x = if align == Alignment::HCENTER {
                    center.x - (bar.width + 1) / 2 + left.width / 2 - right.width / 2
                } else if align == Alignment::RIGHT {
                    r.x + r.width - twf.tab_bar_size.width - right.width
                } else {
                    r.x + left.width
                };
                let y = if side == TabSide::North {
                    r.y
                } else {
                    r.y + r.height - twf.tab_bar_size.height
                };
                visual_rect(opt.direction, r, Rect::new(x, y, bar.width, bar.height))
            },
            side @ (TabSide::East | TabSide::West) => {
                bar.height = bar.height.min(r.height - left.height - right.height);
                let x = if side == TabSide::East {
                    r.x + r.width - twf.tab_bar_size.width
                } else {
                    r.x
                };
                let y = if align == Alignment::HCENTER {
                    center.y - bar.height / 2
                } else if align == Alignment::RIGHT {
                    r.y + r.height - twf.tab_bar_size.height - right.height
                } else {
                    r.y + left.height
                };
                Rect::new(x, y, bar.width, bar.height)
            },
        }
    }

    fn tab_button_rect(&self, front: &dyn Style, opt: &DrawOption, leading: bool) -> Rect {
        let Some(tab) = opt.tab() else {
            return Rect::default();
        };
        let mut vshift = front.pixel_metric(MetricId::TabBarTabShiftVertical, Some(opt));
        let mut hshift = front.pixel_metric(MetricId::TabBarTabShiftHorizontal, Some(opt));
        let hpadding = (front.pixel_metric(MetricId::TabBarTabHSpace, Some(opt)) / 2).max(4);
        let vertical = tab.shape.is_vertical();
        let side = tab.shape.side();
        if side == TabSide::South {
            vshift = -vshift;
        }
        if vertical {
            std::mem::swap(&mut hshift, &mut vshift);
            hshift = -hshift;
            vshift = -vshift;
        }
        if side == TabSide::West {
            hshift = -hshift;
        }
        let mut tr = opt.rect.adjusted(0, 0, hshift, vshift);
        if opt.state.contains(State::SELECTED) {
            tr.set_bottom(tr.bottom() - vshift);
            tr.set_right(tr.right() - hshift);
        }

        let size = if leading {
            tab.left_button_size
        } else {
            tab.right_button_size
        };
        let (w, h) = (size.width, size.height);
        let mid_height = center_offset(tr.height, h);
        let mid_width = center_offset(tr.width, w);
        let r = opt.rect;
        if !vertical {
            let x = if leading {
                r.x + hpadding
            } else {
                r.right() - w - hpadding
            };
            return visual_rect(opt.direction, r, Rect::new(x, r.y + mid_height, w, h));
        }
        let at_the_top = match side {
            TabSide::West => leading,
            _ => !leading,
        };
        if at_the_top {
            Rect::new(r.x + mid_width, tr.y + r.height - hpadding - h, w, h)
        } else {
            Rect::new(r.x + mid_width, tr.y + hpadding, w, h)
        }
    }

    fn dock_title_rect(&self, front: &dyn Style, opt: &DrawOption, se: SubElement) -> Rect {
        let icon_extent = front.pixel_metric(MetricId::SmallIconSize, Some(opt));
        let margin = front.pixel_metric(MetricId::DockWidgetTitleBarButtonMargin, Some(opt));
        let dock = opt.dock_widget();
        let can_close = dock.map_or(true, |d| d.closable);
        let can_float = dock.is_some_and(|d| d.floatable);
        let vertical = dock.is_some_and(|d| d.vertical_title_bar);
        let rect = if vertical { opt.rect.transposed() } else { opt.rect };

        let button_size = |sp: StandardPixmap| {
            let requested = Size::square(icon_extent);
            let icon = front.standard_icon(sp, Some(opt));
            let actual = icon
                .best(icon_extent)
                .and_then(|image| image.size())
                .unwrap_or(requested)
                .bounded_to(requested)
                .grown(margin, margin);
            if vertical {
                actual.transposed()
            } else {
                actual
            }
        };

        let mut right = rect.right();
        let left = rect.left();
        let mut place = |enabled: bool, sp: StandardPixmap| {
            if !enabled {
                return Rect::default();
            }
            let size = button_size(sp);
            let button = Rect::new(right - size.width, rect.center().y - size.height / 2, size.width, size.height);
            right = button.left() - 1;
            button
        };
        let close = place(can_close, StandardPixmap::TitleBarCloseButton);
        let float = if se == SubElement::DockWidgetCloseButton {
            Rect::default()
        } else {
            place(can_float, StandardPixmap::TitleBarNormalButton)
        };
        let r = match se {
            SubElement::DockWidgetCloseButton => close,
            SubElement::DockWidgetFloatButton => float,
            SubElement::DockWidgetTitleBarText => Rect::new(left, rect.top(), right - left, rect.height),
            _ => Rect::default(),
        };

        if vertical {
            Rect::new(
                rect.left() + r.top() - rect.top(),
                rect.top() + rect.right() - r.right(),
                r.height,
                r.width,
            )
        } else {
            visual_rect(opt.direction, rect, r)
        }
    }
}

fn header_horizontal(opt: &DrawOption) -> bool {
    match opt.header() {
        Some(header) => header.orientation == Orientation::Horizontal,
        None => opt.state.contains(State::HORIZONTAL),
    }
}
