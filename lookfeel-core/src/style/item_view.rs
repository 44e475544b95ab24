// SPDX-License-Identifier: LGPL-3.0-only

//! Check, decoration and text placement for item-view cells.

use std::sync::Arc;

use super::{CommonStyle, Style};
use crate::geometry::{aligned_rect, Alignment, Direction, Rect, Size};
use crate::metric::MetricId;
use crate::option::{DecorationPosition, DrawOption, ViewItemFeatures, ViewItemOption};
use crate::text::view_item_text_layout;

/// Line width used when text is not wrapped.
const UNBOUNDED_WIDTH: i32 = 1 << 24;

/// The three parts of an item-view cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewItemLayout {
    /// Check indicator rect.
    pub check_rect: Rect,
    /// Decoration (icon) rect.
    pub decoration_rect: Rect,
    /// Text rect.
    pub display_rect: Rect,
}

/// The option fields a [ViewItemLayout] depends on.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewItemLayoutKey {
    rect: Rect,
    direction: Direction,
    dpi: f64,
    font: usize,
    item: ViewItemOption,
}

impl ViewItemLayoutKey {
    /// The key of `opt`.
    pub fn of(opt: &DrawOption) -> Self {
        Self {
            rect: opt.rect,
            direction: opt.direction,
            dpi: opt.dpi,
            font: Arc::as_ptr(&opt.font) as *const () as usize,
            item: opt.view_item().cloned().unwrap_or_default(),
        }
    }
}

#[derive(Clone, Copy)]
enum ItemPart {
    Check,
    Display,
    Decoration,
}

impl CommonStyle {
    fn view_item_size(&self, front: &dyn Style, opt: &DrawOption, item: &ViewItemOption, part: ItemPart) -> Size {
        match part {
            ItemPart::Check if item.features.contains(ViewItemFeatures::HAS_CHECK_INDICATOR) => Size::new(
                front.pixel_metric(MetricId::IndicatorWidth, Some(opt)),
                front.pixel_metric(MetricId::IndicatorHeight, Some(opt)),
            ),
            ItemPart::Display if item.features.contains(ViewItemFeatures::HAS_DISPLAY) => {
                let wrap = item.features.contains(ViewItemFeatures::WRAP_TEXT);
                let margin = front.pixel_metric(MetricId::FocusFrameHMargin, Some(opt)) + 1;
                let bounds = opt.rect;
                let mut width = match item.decoration_position {
                    DecorationPosition::Left | DecorationPosition::Right if wrap && bounds.is_valid() => {
                        let mut width = bounds.width - 2 * margin;
                        if item.features.contains(ViewItemFeatures::HAS_DECORATION) {
                            width -= item.decoration_size.width + 2 * margin;
                        }
                        width
                    },
                    DecorationPosition::Top | DecorationPosition::Bottom if wrap => {
                        if bounds.is_valid() {
                            bounds.width - 2 * margin
                        } else {
                            item.decoration_size.width
                        }
                    },
                    _ => UNBOUNDED_WIDTH,
                };
                if wrap && item.features.contains(ViewItemFeatures::HAS_CHECK_INDICATOR) {
                    width -= front.pixel_metric(MetricId::IndicatorWidth, None) + 2 * margin;
                }
                let layout = view_item_text_layout(opt.font.as_ref(), &item.text, width, None, true);
                Size::new(layout.width + 2 * margin, layout.height)
            },
            ItemPart::Decoration if item.features.contains(ViewItemFeatures::HAS_DECORATION) => item.decoration_size,
            _ => Size::default(),
        }
    }

    /// Lay out the check indicator, decoration and text of an item-view cell.
    ///
    /// With `size_hint` the outer rect is ignored: the cells are sized to
    /// their contents and returned unaligned, so their union is the size
    /// hint. Without it the cells fill `opt.rect` and each part is aligned
    /// inside its cell.
    pub fn view_item_layout_via(&self, front: &dyn Style, opt: &DrawOption, size_hint: bool) -> ViewItemLayout {
        let fallback = ViewItemOption::default();
        let item = opt.view_item().unwrap_or(&fallback);
        let pixmap_size = self.view_item_size(front, opt, item, ItemPart::Decoration);
        let mut text_size = self.view_item_size(front, opt, item, ItemPart::Display);
        let check_size = self.view_item_size(front, opt, item, ItemPart::Check);

        let has_check = !check_size.is_empty();
        let has_pixmap = !pixmap_size.is_empty();
        let has_text = !text_size.is_empty();
        let frame_margin = if has_check || has_pixmap || has_text {
            front.pixel_metric(MetricId::FocusFrameHMargin, Some(opt)) + 1
        } else {
            0
        };
        let text_margin = if has_text { frame_margin } else { 0 };
        let pixmap_margin = if has_pixmap { frame_margin } else { 0 };
        let check_margin = if has_check { frame_margin } else { 0 };
        let (x, y) = (opt.rect.x, opt.rect.y);

        if text_size.height == 0 && (!has_pixmap || !size_hint) {
            text_size.height = opt.font.height();
        }

        let mut pm = Size::default();
        if has_pixmap {
            pm = pixmap_size.grown(2 * pixmap_margin, 0);
        }
        let horizontal = matches!(item.decoration_position, DecorationPosition::Left | DecorationPosition::Right);
        let (mut w, mut h) = if size_hint {
            let h = check_size.height.max(text_size.height).max(pm.height);
            let w = if horizontal {
                text_size.width + pm.width
            } else {
                text_size.width.max(pm.width)
            };
            (w, h)
        } else {
            (opt.rect.width, opt.rect.height)
        };

        let rtl = opt.direction.is_rtl();
        let mut cw = 0;
        let mut check = Rect::default();
        if has_check {
            cw = check_size.width + 2 * check_margin;
            if size_hint {
                w += cw;
            }
            check = if rtl {
                Rect::new(x + w - cw, y, cw, h)
            } else {
                Rect::new(x, y, cw, h)
            };
        }

        let (display, decoration) = match item.decoration_position {
            DecorationPosition::Top => {
                if has_pixmap {
                    pm.height += pixmap_margin;
                }
                h = if size_hint { text_size.height } else { h - pm.height };
                let left = if rtl { x } else { x + cw };
                (
                    Rect::new(left, y + pm.height, w - cw, h),
                    Rect::new(left, y, w - cw, pm.height),
                )
            },
            DecorationPosition::Bottom => {
                if has_text {
                    text_size.height += text_margin;
                }
                h = if size_hint { text_size.height + pm.height } else { h };
                let left = if rtl { x } else { x + cw };
                (
                    Rect::new(left, y, w - cw, text_size.height),
                    Rect::new(left, y + text_size.height, w - cw, h - text_size.height),
                )
            },
            DecorationPosition::Left if !rtl => {
                let decoration = Rect::new(x + cw, y, pm.width, h);
                (Rect::new(decoration.right() + 1, y, w - pm.width - cw, h), decoration)
            },
            DecorationPosition::Right if rtl => {
                let decoration = Rect::new(x, y, pm.width, h);
                (Rect::new(decoration.right() + 1, y, w - pm.width - cw, h), decoration)
            },
            DecorationPosition::Left | DecorationPosition::Right => {
                let left = if rtl { x } else { x + cw };
                let display = Rect::new(left, y, w - pm.width - cw, h);
                (display, Rect::new(display.right() + 1, y, pm.width, h))
            },
        };

        if size_hint {
            return ViewItemLayout {
                check_rect: check,
                decoration_rect: decoration,
                display_rect: display,
            };
        }
        let display_rect = if item.show_decoration_selected {
            display
        } else {
            aligned_rect(
                opt.direction,
                item.display_alignment,
                text_size.bounded_to(display.size()),
                display,
            )
        };
        ViewItemLayout {
            check_rect: aligned_rect(opt.direction, Alignment::CENTER, check_size, check),
            decoration_rect: aligned_rect(opt.direction, item.decoration_alignment, pixmap_size, decoration),
            display_rect,
        }
    }

    /// The paint-mode layout of `opt`, served from the single-entry cache.
    pub(crate) fn cached_view_item_layout(&self, front: &dyn Style, opt: &DrawOption) -> ViewItemLayout {
        self.view_item_layouts
            .get_or_compute(ViewItemLayoutKey::of(opt), || self.view_item_layout_via(front, opt, false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(features: ViewItemFeatures, position: DecorationPosition) -> ViewItemOption {
        ViewItemOption {
            features,
            decoration_position: position,
            decoration_size: Size::square(16),
            text: "Item".into(),
            ..Default::default()
        }
    }

    const ALL: ViewItemFeatures = ViewItemFeatures::HAS_CHECK_INDICATOR
        .union(ViewItemFeatures::HAS_DECORATION)
        .union(ViewItemFeatures::HAS_DISPLAY);

    #[test]
    fn test_size_hint_cells_partition_the_hint() {
        let style = CommonStyle::new();
        for position in [DecorationPosition::Left, DecorationPosition::Right] {
            for direction in [Direction::LeftToRight, Direction::RightToLeft] {
                let opt = DrawOption::new(Rect::new(0, 0, -1, -1))
                    .with_direction(direction)
                    .with_payload(item(ALL, position));
                let layout = style.view_item_layout_via(&style, &opt, true);
                let cells = [layout.check_rect, layout.decoration_rect, layout.display_rect];
                let area: i32 = cells.iter().map(|r| r.width * r.height).sum();
                let union = cells.iter().fold(Rect::default(), |acc, r| acc.united(r));
                assert_eq!(union.width * union.height, area, "{position:?} {direction:?}");
                for (i, a) in cells.iter().enumerate() {
                    for b in &cells[i + 1..] {
                        assert!(!a.intersects(b), "{a:?} overlaps {b:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_paint_layout_fills_the_row() {
        let style = CommonStyle::new();
        let opt = DrawOption::new(Rect::new(0, 0, 200, 20)).with_payload(item(ALL, DecorationPosition::Left));
        let layout = style.view_item_layout_via(&style, &opt, false);
        assert_eq!(layout.check_rect, Rect::new(3, 4, 13, 13));
        assert_eq!(layout.decoration_rect, Rect::new(19, 0, 16, 16));
        assert_eq!(layout.display_rect.x, 41);
    }

    #[test]
    fn test_rtl_mirrors_the_check_cell() {
        let style = CommonStyle::new();
        let opt = DrawOption::new(Rect::new(0, 0, 200, 20))
            .with_direction(Direction::RightToLeft)
            .with_payload(item(ALL, DecorationPosition::Left));
        let layout = style.view_item_layout_via(&style, &opt, false);
        assert_eq!(layout.check_rect.right(), 199 - 3);
        assert!(layout.decoration_rect.x > layout.display_rect.x);
    }

    #[test]
    fn test_missing_text_keeps_a_line_height() {
        let style = CommonStyle::new();
        let opt = DrawOption::new(Rect::new(0, 0, 100, 30)).with_payload(ViewItemOption::default());
        let layout = style.view_item_layout_via(&style, &opt, true);
        assert_eq!(layout.display_rect.height, opt.font.height());
    }

    #[test]
    fn test_cache_returns_the_same_layout() {
        let style = CommonStyle::new();
        let opt = DrawOption::new(Rect::new(0, 0, 200, 20)).with_payload(item(ALL, DecorationPosition::Top));
        let first = style.cached_view_item_layout(&style, &opt);
        assert_eq!(first, style.cached_view_item_layout(&style, &opt));
        let moved = opt.clone().with_rect(Rect::new(0, 20, 200, 20));
        assert_eq!(style.cached_view_item_layout(&style, &moved).display_rect.y, first.display_rect.y + 20);
    }
}
