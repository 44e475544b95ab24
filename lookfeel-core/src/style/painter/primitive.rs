// SPDX-License-Identifier: LGPL-3.0-only

use std::sync::Arc;

use lookfeel_theme::util::to_argb32;
use lookfeel_theme::{ColorRole, Palette};
use vello::peniko::Color;

use super::super::assets::resource_name;
use super::super::{CommonStyle, Style};
use crate::asset::AssetImage;
use crate::canvas::{Brush, Canvas, Pen, Picture, PointF};
use crate::draw_util::{plain_rect, shade_line, shade_panel, shade_rect, win_panel, with_alpha};
use crate::geometry::{center_offset, Alignment, Point, Rect, Size};
use crate::hint::HintId;
use crate::kinds::{IconMode, PrimitiveElement, SubElement};
use crate::metric::MetricId;
use crate::option::{DrawOption, FrameFeatures, TabSide};
use crate::state::State;

/// Side of the expander box of a tree branch.
const BRANCH_DECORATION: i32 = 9;

/// Line width, mid line width and features of whatever frame the option describes.
fn frame_widths(opt: &DrawOption) -> (i32, i32, FrameFeatures) {
    if let Some(frame) = opt.frame() {
        (frame.line_width, frame.mid_line_width, frame.features)
    } else if let Some(group) = opt.group_box() {
        (group.line_width, group.mid_line_width, group.features)
    } else if let Some(bar) = opt.tool_bar() {
        (bar.line_width, bar.mid_line_width, FrameFeatures::empty())
    } else {
        (1, 0, FrameFeatures::empty())
    }
}

fn pointf(x: i32, y: i32) -> PointF {
    PointF::new(x as f64, y as f64)
}

/// A 50% stipple, approximated by a translucent fill.
fn dense(color: Color) -> Brush {
    Brush::Solid(with_alpha(color, 128))
}

impl CommonStyle {
    /// Default primitive painting.
    ///
    /// Elements without a default look, and elements asked to paint with an
    /// option missing the payload they read, draw nothing.
    pub fn draw_primitive_via(&self, front: &dyn Style, pe: PrimitiveElement, opt: &DrawOption, canvas: &mut dyn Canvas) {
        use PrimitiveElement::*;
        let pal = opt.state_palette();
        let r = opt.rect;
        let down = opt.state.is_down();
        match pe {
            FrameButtonBevel | FrameButtonTool => shade_rect(canvas, r, &pal, down, 1, 0, None),
            PanelButtonCommand | PanelButtonBevel | PanelButtonTool | IndicatorButtonDropDown => {
                shade_panel(canvas, r, &pal, down, 1, Some(&Brush::Solid(pal.color(ColorRole::Button))))
            },
            IndicatorItemViewItemCheck => front.draw_primitive(IndicatorCheckBox, opt, canvas),
            IndicatorCheckBox => {
                if opt.state.contains(State::NO_CHANGE) {
                    let pen = Pen::new(pal.color(ColorRole::WindowText));
                    canvas.fill_rect(r, &Brush::Solid(pal.color(ColorRole::Button)));
                    canvas.stroke_rect(r, &pen);
                    canvas.draw_line(r.top_left(), r.bottom_right(), &pen);
                } else {
                    shade_panel(canvas, r, &pal, down, 1, Some(&Brush::Solid(pal.color(ColorRole::Button))));
                }
            },
            IndicatorRadioButton => {
                canvas.draw_arc(r.to_kurbo(), 0.0, 360.0, &Pen::new(pal.color(ColorRole::Dark)));
                if down {
                    let ir = r.adjusted(2, 2, -2, -2);
                    if ir.is_valid() {
                        canvas.draw_ellipse(ir.to_kurbo(), None, Some(&Brush::Solid(pal.color(ColorRole::WindowText))));
                    }
                }
            },
            FrameFocusRect => self.draw_focus_rect(opt, &pal, canvas),
            IndicatorMenuCheckMark => draw_check_mark(opt, &pal, canvas),
            Frame | FrameMenu => {
                let (lw, _, _) = frame_widths(opt);
                if pe == FrameMenu || opt.state.intersects(State::SUNKEN | State::RAISED) {
                    shade_panel(canvas, r, &pal, opt.state.contains(State::SUNKEN), lw, None);
                } else {
                    plain_rect(canvas, r, pal.color(ColorRole::WindowText), lw, None);
                }
            },
            PanelMenuBar => {
                let (lw, _, _) = frame_widths(opt);
                shade_panel(canvas, r, &pal, false, lw, Some(&Brush::Solid(pal.color(ColorRole::Button))));
            },
            IndicatorProgressChunk => {
                let chunk = Rect::new(r.x, r.y + 3, r.width - 2, r.height - 6);
                if chunk.is_valid() {
                    canvas.fill_rect(chunk, &Brush::Solid(pal.color(ColorRole::Highlight)));
                }
            },
            IndicatorBranch => draw_branch(opt, &pal, canvas),
            FrameStatusBarItem => shade_rect(canvas, r, &pal, true, 1, 0, None),
            IndicatorHeaderArrow => {
                let Some(header) = opt.header() else {
                    return;
                };
                let light = Pen::new(pal.color(ColorRole::Light));
                let dark = Pen::new(pal.color(ColorRole::Dark));
                let (left, top, right, bottom) = (r.x, r.y, r.x + r.width, r.y + r.height);
                let mid = r.x + r.width / 2;
                match header.sort_indicator {
                    crate::option::SortIndicator::SortUp => {
                        canvas.draw_line(Point::new(right, top), Point::new(mid, bottom), &light);
                        canvas.draw_polyline(
                            &[Point::new(mid, bottom), Point::new(left, top), Point::new(right, top)],
                            &dark,
                        );
                    },
                    crate::option::SortIndicator::SortDown => {
                        canvas.draw_polyline(
                            &[Point::new(left, bottom), Point::new(right, bottom), Point::new(mid, top)],
                            &light,
                        );
                        canvas.draw_line(Point::new(left, bottom), Point::new(mid, top), &dark);
                    },
                    crate::option::SortIndicator::None => {},
                }
            },
            FrameTabBarBase => {
                let Some(base) = opt.tab_bar_base() else {
                    return;
                };
                let pen = |role| Pen::new(pal.color(role));
                match base.shape.side() {
                    TabSide::North => canvas.draw_line(r.top_left(), r.top_right(), &pen(ColorRole::Light)),
                    TabSide::West => canvas.draw_line(r.top_left(), r.bottom_left(), &pen(ColorRole::Light)),
                    TabSide::South => {
                        canvas.draw_line(r.bottom_left(), r.bottom_right(), &pen(ColorRole::Shadow));
                        canvas.draw_line(
                            Point::new(r.left(), r.bottom() - 1),
                            Point::new(r.right() - 1, r.bottom() - 1),
                            &pen(ColorRole::Dark),
                        );
                    },
                    TabSide::East => canvas.draw_line(r.top_right(), r.bottom_right(), &pen(ColorRole::Dark)),
                }
            },
            IndicatorTabClose => self.draw_tab_close(front, opt, canvas),
            FrameTabWidget | FrameWindow => win_panel(canvas, r, &pal, false, None),
            FrameLineEdit => front.draw_primitive(Frame, opt, canvas),
            FrameGroupBox => {
                let (lw, mid, features) = frame_widths(opt);
                if features.contains(FrameFeatures::FLAT) {
                    let p1 = Point::new(r.x, r.y + 1);
                    let p2 = Point::new(r.x + r.width, p1.y);
                    shade_line(canvas, p1, p2, &pal, true, lw, mid);
                } else {
                    shade_rect(canvas, r, &pal, true, lw, mid, None);
                }
            },
            FrameDockWidget => {
                let (mut lw, _, _) = frame_widths(opt);
                if lw <= 0 {
                    lw = front.pixel_metric(MetricId::DockWidgetFrameWidth, Some(opt));
                }
                shade_panel(canvas, r, &pal, false, lw, None);
            },
            IndicatorToolBarHandle => {
                if opt.state.contains(State::HORIZONTAL) {
                    let mut x = r.x + r.width / 3;
                    if opt.direction.is_rtl() {
                        x -= 2;
                    }
                    if r.height > 4 {
                        shade_panel(canvas, Rect::new(x, r.y + 2, 3, r.height - 4), &pal, false, 1, None);
                        shade_panel(canvas, Rect::new(x + 3, r.y + 2, 3, r.height - 4), &pal, false, 1, None);
                    }
                } else if r.width > 4 {
                    let y = r.y + r.height / 3;
                    shade_panel(canvas, Rect::new(r.x + 2, y, r.width - 4, 3), &pal, false, 1, None);
                    shade_panel(canvas, Rect::new(r.x + 2, y + 3, r.width - 4, 3), &pal, false, 1, None);
                }
            },
            IndicatorToolBarSeparator => {
                let (p1, p2) = if opt.state.contains(State::HORIZONTAL) {
                    let x = r.x + r.width / 2;
                    (Point::new(x, r.y), Point::new(x, r.y + r.height))
                } else {
                    let y = r.y + r.height / 2;
                    (Point::new(r.x, y), Point::new(r.x + r.width, y))
                };
                shade_line(canvas, p1, p2, &pal, true, 1, 0);
            },
            IndicatorSpinPlus | IndicatorSpinMinus => {
                let fw = front.pixel_metric(MetricId::DefaultFrameWidth, Some(opt));
                let br = r.adjusted(fw, fw, -fw, -fw);
                if !br.is_valid() {
                    return;
                }
                let offset = i32::from(opt.state.contains(State::SUNKEN));
                let step = (br.width + 4) / 5;
                let ink = Brush::Solid(pal.color(ColorRole::ButtonText));
                canvas.fill_rect(
                    Rect::new(br.x + offset, br.y + offset + br.height / 2 - step / 2, br.width, step),
                    &ink,
                );
                if pe == IndicatorSpinPlus {
                    canvas.fill_rect(
                        Rect::new(br.x + br.width / 2 - step / 2 + offset, br.y + offset, step, br.height),
                        &ink,
                    );
                }
            },
            IndicatorSpinUp | IndicatorSpinDown => {
                let fw = front.pixel_metric(MetricId::DefaultFrameWidth, Some(opt));
                let mut sw = r.width - 4;
                if sw < 3 {
                    return;
                }
                if sw & 1 == 0 {
                    sw -= 1;
                }
                // Leave an empty border around the arrow.
                sw -= (sw / 7) * 2;
                let sh = sw / 2 + 2;
                let sx = r.x + r.width / 2 - sw / 2;
                let mut sy = r.y + r.height / 2 - sh / 2;
                if pe == IndicatorSpinUp && fw != 0 {
                    sy -= 1;
                }
                let (bsx, bsy) = self.button_shift(front, opt);
                let (ox, oy) = (sx + bsx, sy + bsy);
                let points = if pe == IndicatorSpinDown {
                    [pointf(ox, oy + 1), pointf(ox + sw - 1, oy + 1), pointf(ox + sh - 2, oy + sh - 1)]
                } else {
                    [pointf(ox, oy + sh - 1), pointf(ox + sw - 1, oy + sh - 1), pointf(ox + sh - 2, oy + 1)]
                };
                let color = pal.color(ColorRole::ButtonText);
                canvas.draw_polygon(&points, Some(&Pen::new(color)), Some(&Brush::Solid(color)));
            },
            PanelTipLabel => plain_rect(
                canvas,
                r,
                pal.color(ColorRole::ToolTipText),
                1,
                Some(&Brush::Solid(pal.color(ColorRole::ToolTipBase))),
            ),
            IndicatorTabTear | IndicatorTabTearRight => {
                if opt.tab().is_none() {
                    return;
                }
                draw_tab_tear(opt, &pal, pe == IndicatorTabTearRight, canvas);
            },
            PanelLineEdit => {
                let (lw, _, _) = frame_widths(opt);
                let inner = r.adjusted(lw, lw, -lw, -lw);
                if inner.is_valid() {
                    canvas.fill_rect(inner, &Brush::Solid(pal.color(ColorRole::Base)));
                }
                if lw > 0 {
                    front.draw_primitive(FrameLineEdit, opt, canvas);
                }
            },
            IndicatorColumnViewArrow => draw_column_view_arrow(opt, canvas),
            IndicatorItemViewItemDrop => {
                let pen = Pen::new(pal.color(ColorRole::WindowText));
                if r.height == 0 {
                    canvas.draw_line(r.top_left(), Point::new(r.x + r.width - 1, r.y), &pen);
                } else {
                    canvas.stroke_rect(r, &pen);
                }
            },
            PanelItemViewRow => {
                let Some(item) = opt.view_item() else {
                    return;
                };
                let selected = opt.state.contains(State::SELECTED)
                    && front.style_hint(HintId::ItemViewShowDecorationSelected, Some(opt)).as_bool();
                if selected {
                    canvas.fill_rect(r, &Brush::Solid(pal.color(ColorRole::Highlight)));
                } else if item.features.contains(crate::option::ViewItemFeatures::ALTERNATE) {
                    canvas.fill_rect(r, &Brush::Solid(pal.color(ColorRole::AlternateBase)));
                }
            },
            PanelItemViewItem => {
                let Some(item) = opt.view_item() else {
                    return;
                };
                let selected = opt.state.contains(State::SELECTED);
                let highlight = Brush::Solid(pal.color(ColorRole::Highlight));
                if item.show_decoration_selected && selected {
                    canvas.fill_rect(r, &highlight);
                } else {
                    if let Some(background) = &item.background_brush {
                        canvas.fill_rect(r, background);
                    }
                    if selected {
                        let text_rect = front.sub_element_rect(SubElement::ItemViewItemText, opt);
                        if text_rect.is_valid() {
                            canvas.fill_rect(text_rect, &highlight);
                        }
                    }
                }
            },
            PanelScrollAreaCorner => canvas.fill_rect(r, &Brush::Solid(pal.color(ColorRole::Window))),
            IndicatorArrowUp | IndicatorArrowDown | IndicatorArrowRight | IndicatorArrowLeft => {
                self.draw_arrow(front, pe, opt, &pal, canvas)
            },
            FrameDefaultButton | PanelToolBar | PanelMenu | PanelStatusBar | Widget | IndicatorDockWidgetResizeHandle => {},
        }
    }

    /// Pixel shift of a pressed button's contents.
    pub(crate) fn button_shift(&self, front: &dyn Style, opt: &DrawOption) -> (i32, i32) {
        if opt.state.contains(State::SUNKEN) {
            (
                front.pixel_metric(MetricId::ButtonShiftHorizontal, Some(opt)),
                front.pixel_metric(MetricId::ButtonShiftVertical, Some(opt)),
            )
        } else {
            (0, 0)
        }
    }

    fn draw_focus_rect(&self, opt: &DrawOption, pal: &Palette, canvas: &mut dyn Canvas) {
        let color = match opt.focus_rect().and_then(|f| f.background_color) {
            Some(bg) => {
                let c = bg.to_rgba8();
                if c.r.max(c.g).max(c.b) >= 128 {
                    Color::BLACK
                } else {
                    Color::WHITE
                }
            },
            None => pal.color(ColorRole::WindowText),
        };
        let focus = opt.rect.adjusted(1, 1, -1, -1);
        if focus.is_valid() {
            canvas.stroke_rect(focus, &Pen::new(color));
        }
    }

    fn draw_tab_close(&self, front: &dyn Style, opt: &DrawOption, canvas: &mut dyn Canvas) {
        let size = front.pixel_metric(MetricId::SmallIconSize, Some(opt));
        let state = opt.state;
        let mut mode = if !state.contains(State::ENABLED) {
            IconMode::Disabled
        } else if state.contains(State::RAISED) {
            IconMode::Active
        } else {
            IconMode::Normal
        };
        if !state.intersects(State::RAISED | State::SUNKEN | State::SELECTED) {
            mode = IconMode::Disabled;
        }
        let stem = if state.contains(State::SUNKEN) {
            "standardbutton-closetab-down"
        } else if mode == IconMode::Active {
            "standardbutton-closetab-hover"
        } else {
            "standardbutton-closetab"
        };
        let mut image = self.bundled_image(&resource_name(stem, 16));
        if mode == IconMode::Disabled {
            if let AssetImage::Pixmap(pixmap) = &image {
                image = AssetImage::Pixmap(front.generated_icon_pixmap(mode, pixmap, opt));
            }
        }
        self.draw_item_image(canvas, opt.rect, Alignment::CENTER, opt.direction, &image, Size::square(size));
    }

    /// Triangle arrows, rendered once per size, element, state and palette
    /// into a cached picture.
    fn draw_arrow(&self, front: &dyn Style, pe: PrimitiveElement, opt: &DrawOption, pal: &Palette, canvas: &mut dyn Canvas) {
        let r = opt.rect;
        if r.width <= 1 || r.height <= 1 {
            return;
        }
        let size = r.width.min(r.height);
        let sqsize = 2 * (size / 2);
        let (bsx, bsy) = self.button_shift(front, opt);
        let key = format!(
            "{}:arrow:{:?}:{}:{:x}:{:?}:{:08x}:{:08x}:{:08x}:{},{}",
            self.name(),
            pe,
            size,
            opt.state.bits(),
            pal.current_group(),
            to_argb32(pal.color(ColorRole::ButtonText)),
            to_argb32(pal.color(ColorRole::Light)),
            to_argb32(pal.color(ColorRole::Mid)),
            bsx,
            bsy,
        );
        let image = self.pixmap_cache().get_or_insert_with(&key, || {
            AssetImage::Picture(Arc::new(arrow_picture(pe, sqsize, size / 5, (bsx, bsy), opt.state, pal)))
        });
        let x = r.x + center_offset(r.width, size);
        let y = r.y + center_offset(r.height, size);
        canvas.draw_image(Rect::new(x, y, sqsize, sqsize), &image);
    }
}

fn arrow_picture(pe: PrimitiveElement, sqsize: i32, border: i32, shift: (i32, i32), state: State, pal: &Palette) -> Picture {
    use PrimitiveElement::*;
    let half = sqsize / 2;
    let points = match pe {
        IndicatorArrowUp => [(border, half), (half, border), (sqsize - border, half)],
        IndicatorArrowDown => [(border, half), (half, sqsize - border), (sqsize - border, half)],
        IndicatorArrowRight => [(sqsize - border, half), (half, border), (half, sqsize - border)],
        _ => [(border, half), (half, border), (half, sqsize - border)],
    };
    let min_x = points.iter().map(|p| p.0).min().unwrap_or(0);
    let max_x = points.iter().map(|p| p.0).max().unwrap_or(0);
    let min_y = points.iter().map(|p| p.1).min().unwrap_or(0);
    let max_y = points.iter().map(|p| p.1).max().unwrap_or(0);
    let sx = half - (min_x + max_x) / 2 - 1 + shift.0;
    let sy = half - (min_y + max_y) / 2 - 1 + shift.1;
    let at = |dx: i32, dy: i32| -> Vec<PointF> { points.iter().map(|&(x, y)| pointf(x + sx + dx, y + sy + dy)).collect() };

    let mut picture = Picture::with_size(Size::square(sqsize));
    let fill = |canvas: &mut Picture, poly: &[PointF], color: Color| {
        canvas.draw_polygon(poly, Some(&Pen::new(color)), Some(&Brush::Solid(color)));
    };
    if state.contains(State::ENABLED) {
        fill(&mut picture, &at(0, 0), pal.color(ColorRole::ButtonText));
    } else {
        fill(&mut picture, &at(1, 1), pal.color(ColorRole::Light));
        fill(&mut picture, &at(0, 0), pal.color(ColorRole::Mid));
    }
    picture
}

fn draw_check_mark(opt: &DrawOption, pal: &Palette, canvas: &mut dyn Canvas) {
    let r = opt.rect;
    let mark = r.width.min(7);
    let pos_x = r.x + center_offset(r.width, mark) + 1;
    let pos_y = r.y + center_offset(r.height, mark);
    let mut strokes = Vec::with_capacity(mark.max(0) as usize);
    let (mut xx, mut yy) = (pos_x, pos_y + 3);
    let mut i = 0;
    while i < mark / 2 {
        strokes.push(Rect::new(xx, yy, 1, 3));
        xx += 1;
        yy += 1;
        i += 1;
    }
    yy -= 2;
    while i < mark {
        strokes.push(Rect::new(xx, yy, 1, 3));
        xx += 1;
        yy -= 1;
        i += 1;
    }
    let on = opt.state.contains(State::ON);
    if !opt.state.contains(State::ENABLED) && !on {
        let light = Brush::Solid(pal.color(ColorRole::Light));
        for s in &strokes {
            canvas.fill_rect(s.translated(1, 1), &light);
        }
    }
    let ink = Brush::Solid(pal.color(if on { ColorRole::HighlightedText } else { ColorRole::Text }));
    for s in &strokes {
        canvas.fill_rect(*s, &ink);
    }
}

fn draw_branch(opt: &DrawOption, pal: &Palette, canvas: &mut dyn Canvas) {
    let r = opt.rect;
    let state = opt.state;
    let mid_h = r.x + r.width / 2;
    let mid_v = r.y + r.height / 2;
    let (mut bef_h, mut bef_v, mut aft_h, mut aft_v) = (mid_h, mid_v, mid_h, mid_v);
    if state.contains(State::CHILDREN) {
        let delta = BRANCH_DECORATION / 2;
        bef_h -= delta;
        bef_v -= delta;
        aft_h += delta;
        aft_v += delta;
        let ink = Brush::Solid(pal.color(ColorRole::WindowText));
        canvas.fill_rect(Rect::new(bef_h + 2, bef_v + 4, 5, 1), &ink);
        if !state.contains(State::OPEN) {
            canvas.fill_rect(Rect::new(bef_h + 4, bef_v + 2, 1, 5), &ink);
        }
        canvas.stroke_rect(
            Rect::new(bef_h, bef_v, BRANCH_DECORATION, BRANCH_DECORATION),
            &Pen::new(pal.color(ColorRole::Dark)),
        );
    }
    let dotted = dense(pal.color(ColorRole::Dark));
    let mut line = |rect: Rect| {
        if rect.is_valid() {
            canvas.fill_rect(rect, &dotted);
        }
    };
    if state.contains(State::ITEM) {
        if opt.direction.is_rtl() {
            line(Rect::new(r.left(), mid_v, bef_h - r.left(), 1));
        } else {
            line(Rect::new(aft_h, mid_v, r.right() - aft_h + 1, 1));
        }
    }
    if state.contains(State::SIBLING) {
        line(Rect::new(mid_h, aft_v, 1, r.bottom() - aft_v + 1));
    }
    if state.intersects(State::OPEN | State::CHILDREN | State::ITEM | State::SIBLING) {
        line(Rect::new(mid_h, r.y, 1, bef_v - r.y));
    }
}

fn draw_tab_tear(opt: &DrawOption, pal: &Palette, right: bool, canvas: &mut dyn Canvas) {
    const MARGIN: i32 = 4;
    const JAGS: i32 = 4;
    let mut rtl = opt.direction.is_rtl() != right;
    let selected = opt.state.contains(State::SELECTED);
    let r = opt.rect;
    let mut points = Vec::with_capacity(JAGS as usize + 1);
    if r.height > r.width {
        let mut rect = r.adjusted(if rtl { MARGIN } else { 0 }, 0, if rtl { 1 } else { -MARGIN }, 0);
        rect.set_top(rect.top() + if selected { 1 } else { 3 });
        rect.set_bottom(rect.bottom() - if selected { 0 } else { 2 });
        points.push(pointf(if rtl { rect.right() } else { rect.left() }, rect.top()));
        for jag in 1..=JAGS {
            points.push(pointf(
                if rtl { rect.left() } else { rect.right() },
                rect.top() + jag * rect.height / JAGS,
            ));
            rtl = !rtl;
        }
    } else {
        let mut rect = r.adjusted(0, 0, 0, -MARGIN);
        rect.set_left(rect.left() + if selected { 1 } else { 3 });
        rect.set_right(rect.right() - if selected { 0 } else { 2 });
        points.push(pointf(rect.left(), rect.top()));
        for jag in 1..=JAGS {
            points.push(pointf(rect.left() + jag * rect.width / JAGS, if rtl { rect.top() } else { rect.bottom() }));
            rtl = !rtl;
        }
    }
    canvas.draw_polygon(&points, None, Some(&Brush::Solid(pal.color(ColorRole::Window))));
    let pen = Pen::new(pal.color(ColorRole::Dark)).with_width(0.8);
    for pair in points.windows(2) {
        canvas.draw_line_f(pair[0], pair[1], &pen);
    }
}

fn draw_column_view_arrow(opt: &DrawOption, canvas: &mut dyn Canvas) {
    let Some(item) = opt.view_item() else {
        return;
    };
    let r = opt.rect;
    let active = |role| opt.palette.color_in(lookfeel_theme::ColorGroup::Active, role);
    let offset = r.height / 3;
    let mut height = r.height - offset * 2;
    if height % 2 == 1 {
        height -= 1;
    }
    let (x, x2) = if opt.direction.is_rtl() {
        let x = r.x + r.width - 1;
        (x, x - height + 1)
    } else {
        let x = r.x + 1;
        (x, x + height - 1)
    };
    let top = pointf(x, r.y + offset);
    let triangle = [top, pointf(x, r.y + offset + height), pointf(x2, r.y + offset + height / 2)];
    let selected = opt.state.contains(State::SELECTED);
    let color = match (selected, item.show_decoration_selected) {
        (true, true) => active(ColorRole::HighlightedText),
        (true, false) => active(ColorRole::WindowText),
        (false, _) => active(ColorRole::Mid),
    };
    canvas.draw_polygon(&triangle, Some(&Pen::new(color)), Some(&Brush::Solid(color)));
    if !selected {
        let dark = Pen::new(active(ColorRole::Dark));
        canvas.draw_line_f(top, triangle[1], &dark);
        canvas.draw_line_f(top, triangle[2], &dark);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::DrawCommand;
    use crate::option::{FocusRectOption, FrameOption};

    fn paint(pe: PrimitiveElement, opt: &DrawOption) -> Picture {
        let style = CommonStyle::new();
        let mut picture = Picture::new();
        style.draw_primitive(pe, opt, &mut picture);
        picture
    }

    #[test]
    fn test_arrows_skip_degenerate_rects() {
        for rect in [Rect::new(0, 0, 1, 10), Rect::new(0, 0, 10, 1), Rect::new(0, 0, 0, 0)] {
            assert!(paint(PrimitiveElement::IndicatorArrowUp, &DrawOption::new(rect)).is_empty());
        }
    }

    #[test]
    fn test_arrow_is_cached_and_centered() {
        let style = CommonStyle::new();
        let opt = DrawOption::new(Rect::new(10, 10, 20, 12));
        let mut first = Picture::new();
        style.draw_primitive(PrimitiveElement::IndicatorArrowDown, &opt, &mut first);
        assert_eq!(style.pixmap_cache().len(), 1);
        let mut second = Picture::new();
        style.draw_primitive(PrimitiveElement::IndicatorArrowDown, &opt, &mut second);
        assert_eq!(style.pixmap_cache().len(), 1);
        assert_eq!(first, second);
        match first.commands() {
            [DrawCommand::Image(rect, AssetImage::Picture(glyph))] => {
                assert_eq!(*rect, Rect::new(14, 10, 12, 12));
                assert_eq!(glyph.count(|c| matches!(c, DrawCommand::Polygon(..))), 1);
            },
            other => panic!("unexpected commands {other:?}"),
        }
    }

    #[test]
    fn test_disabled_arrow_is_embossed() {
        let opt = DrawOption::new(Rect::new(0, 0, 16, 16)).with_state(State::ACTIVE);
        let picture = paint(PrimitiveElement::IndicatorArrowLeft, &opt);
        let Some(DrawCommand::Image(_, AssetImage::Picture(glyph))) = picture.commands().first() else {
            panic!("arrow not drawn as an image");
        };
        let polys: Vec<&Vec<PointF>> = glyph
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Polygon(points, ..) => Some(points),
                _ => None,
            })
            .collect();
        assert_eq!(polys.len(), 2);
        assert_eq!(polys[0][0].x, polys[1][0].x + 1.0);
        assert_eq!(polys[0][0].y, polys[1][0].y + 1.0);
    }

    #[test]
    fn test_spin_indicators_skip_narrow_rects() {
        assert!(paint(PrimitiveElement::IndicatorSpinUp, &DrawOption::new(Rect::new(0, 0, 6, 10))).is_empty());
        assert!(!paint(PrimitiveElement::IndicatorSpinDown, &DrawOption::new(Rect::new(0, 0, 16, 10))).is_empty());
    }

    #[test]
    fn test_focus_rect_contrasts_with_background() {
        let dark_bg = DrawOption::new(Rect::new(0, 0, 10, 10)).with_payload(FocusRectOption {
            background_color: Some(Color::from_rgba8(20, 20, 20, 255)),
        });
        assert_eq!(
            paint(PrimitiveElement::FrameFocusRect, &dark_bg).commands(),
            &[DrawCommand::StrokeRect(Rect::new(1, 1, 8, 8), Pen::new(Color::WHITE))]
        );
        let light_bg = dark_bg.with_payload(FocusRectOption {
            background_color: Some(Color::from_rgba8(200, 30, 30, 255)),
        });
        assert_eq!(
            paint(PrimitiveElement::FrameFocusRect, &light_bg).commands(),
            &[DrawCommand::StrokeRect(Rect::new(1, 1, 8, 8), Pen::new(Color::BLACK))]
        );
    }

    #[test]
    fn test_progress_chunk_insets() {
        let picture = paint(PrimitiveElement::IndicatorProgressChunk, &DrawOption::new(Rect::new(0, 0, 9, 20)));
        assert_eq!(picture.filled_rects(), vec![Rect::new(0, 3, 7, 14)]);
    }

    #[test]
    fn test_plain_frame_uses_line_width() {
        let opt = DrawOption::new(Rect::new(0, 0, 20, 20)).with_payload(FrameOption {
            line_width: 2,
            ..Default::default()
        });
        assert_eq!(paint(PrimitiveElement::Frame, &opt).filled_rects().len(), 8);
    }

    #[test]
    fn test_check_mark_has_seven_strokes() {
        let picture = paint(PrimitiveElement::IndicatorMenuCheckMark, &DrawOption::new(Rect::new(0, 0, 13, 13)));
        assert_eq!(picture.filled_rects().len(), 7);
        let disabled = DrawOption::new(Rect::new(0, 0, 13, 13)).with_state(State::empty());
        assert_eq!(paint(PrimitiveElement::IndicatorMenuCheckMark, &disabled).filled_rects().len(), 14);
    }

    #[test]
    fn test_unpainted_elements_are_noops() {
        let opt = DrawOption::new(Rect::new(0, 0, 20, 20));
        for pe in [PrimitiveElement::Widget, PrimitiveElement::PanelMenu, PrimitiveElement::FrameTabBarBase] {
            assert!(paint(pe, &opt).is_empty());
        }
    }

    #[test]
    fn test_line_edit_panel_delegates_its_frame() {
        struct Marked(CommonStyle);
        impl Style for Marked {
            fn base(&self) -> &CommonStyle {
                &self.0
            }
            fn front(&self) -> &dyn Style {
                self
            }
            fn draw_primitive(&self, pe: PrimitiveElement, opt: &DrawOption, canvas: &mut dyn Canvas) {
                if pe == PrimitiveElement::FrameLineEdit {
                    canvas.draw_text(opt.rect, Alignment::CENTER, "frame", Color::BLACK);
                } else {
                    self.base().draw_primitive_via(self, pe, opt, canvas);
                }
            }
        }
        let style = Marked(CommonStyle::new());
        let mut picture = Picture::new();
        let opt = DrawOption::new(Rect::new(0, 0, 40, 20)).with_payload(FrameOption::default());
        style.draw_primitive(PrimitiveElement::PanelLineEdit, &opt, &mut picture);
        assert_eq!(picture.filled_rects(), vec![Rect::new(1, 1, 38, 18)]);
        assert_eq!(picture.texts(), vec!["frame"]);
    }
}
