// SPDX-License-Identifier: LGPL-3.0-only

use super::{CommonStyle, Style};
use crate::geometry::{visual_rect, Rect, Size};
use crate::metric::MetricId;
use crate::option::{DrawOption, TabOption, TabSide};
use crate::state::State;

/// Where the label and the icon of a tab go.
///
/// For vertical shapes both rects live in a transposed frame with the
/// origin at the top-left of the tab; painters rotate into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TabLayout {
    /// Label rect.
    pub text_rect: Rect,
    /// Icon rect, empty without an icon.
    pub icon_rect: Rect,
}

impl CommonStyle {
    /// Split a tab into its label and icon rects.
    pub fn tab_layout_via(&self, front: &dyn Style, opt: &DrawOption) -> TabLayout {
        let fallback = TabOption::default();
        let tab = opt.tab().unwrap_or(&fallback);
        let vertical = tab.shape.is_vertical();
        let mut tr = if vertical {
            Rect::new(0, 0, opt.rect.height, opt.rect.width)
        } else {
            opt.rect
        };

        let mut vshift = front.pixel_metric(MetricId::TabBarTabShiftVertical, Some(opt));
        let hshift = front.pixel_metric(MetricId::TabBarTabShiftHorizontal, Some(opt));
        let hpadding = front.pixel_metric(MetricId::TabBarTabHSpace, Some(opt)) / 2;
        let vpadding = front.pixel_metric(MetricId::TabBarTabVSpace, Some(opt)) / 2;
        if tab.shape.side() == TabSide::South {
            vshift = -vshift;
        }
        tr = tr.adjusted(hpadding, vshift - vpadding, hshift - hpadding, vpadding);
        if opt.state.contains(State::SELECTED) {
            tr.set_top(tr.top() - vshift);
            tr.set_right(tr.right() - hshift);
        }

        let along = |s: Size| if vertical { s.height } else { s.width };
        if !tab.left_button_size.is_empty() {
            tr.set_left(tr.left() + 4 + along(tab.left_button_size));
        }
        if !tab.right_button_size.is_empty() {
            tr.set_right(tr.right() - 4 - along(tab.right_button_size));
        }

        let mut icon_rect = Rect::default();
        if let Some(icon) = tab.icon.as_ref().filter(|icon| !icon.is_empty()) {
            let icon_size = if !tab.icon_size.is_empty() {
                tab.icon_size
            } else {
                Size::square(front.pixel_metric(MetricId::SmallIconSize, None))
            };
            let actual = icon
                .best(icon_size.width.max(icon_size.height))
                .and_then(|image| image.size())
                .unwrap_or(icon_size)
                .bounded_to(icon_size);
            let offset_x = (icon_size.width - actual.width) / 2;
            icon_rect = Rect::new(
                tr.left() + offset_x,
                tr.center().y - actual.height / 2,
                actual.width,
                actual.height,
            );
            if !vertical {
                icon_rect = visual_rect(opt.direction, opt.rect, icon_rect);
            }
            tr.set_left(tr.left() + actual.width + 4);
        }

        if !vertical {
            tr = visual_rect(opt.direction, opt.rect, tr);
        }
        TabLayout {
            text_rect: tr,
            icon_rect,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::{AssetImage, IconSet};
    use crate::canvas::Picture;
    use crate::geometry::Direction;
    use crate::option::TabShape;
    use std::sync::Arc;

    fn tab(shape: TabShape) -> TabOption {
        TabOption {
            shape,
            text: "Tab".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_north_tab_pads_and_shifts() {
        let style = CommonStyle::new();
        let opt = DrawOption::new(Rect::new(0, 0, 100, 30)).with_payload(tab(TabShape::RoundedNorth));
        let layout = style.tab_layout_via(&style, &opt);
        assert_eq!(layout.text_rect, Rect::new(12, -2, 76, 36));
        assert!(layout.icon_rect.is_empty());

        let selected = opt.clone().with_state(State::ENABLED | State::ACTIVE | State::SELECTED);
        let layout = style.tab_layout_via(&style, &selected);
        assert_eq!(layout.text_rect.top(), -4);
    }

    #[test]
    fn test_vertical_tab_is_transposed() {
        let style = CommonStyle::new();
        let opt = DrawOption::new(Rect::new(50, 50, 30, 100)).with_payload(tab(TabShape::RoundedWest));
        let layout = style.tab_layout_via(&style, &opt);
        assert_eq!(layout.text_rect.x, 12);
        assert_eq!(layout.text_rect.width, 76);
    }

    #[test]
    fn test_icon_and_buttons_shrink_the_label() {
        let style = CommonStyle::new();
        let icon = IconSet::new().with(16, AssetImage::Picture(Arc::new(Picture::with_size(Size::square(16)))));
        let opt = DrawOption::new(Rect::new(0, 0, 120, 30))
            .with_direction(Direction::RightToLeft)
            .with_payload(TabOption {
                icon: Some(icon),
                icon_size: Size::square(16),
                right_button_size: Size::square(10),
                ..tab(TabShape::RoundedNorth)
            });
        let layout = style.tab_layout_via(&style, &opt);
        assert_eq!(layout.icon_rect.size(), Size::square(16));
        assert_eq!(layout.icon_rect.right(), 120 - 1 - 12);
        assert!(layout.text_rect.right() < layout.icon_rect.left());
        assert_eq!(layout.text_rect.left(), 12 + 14);
    }
}
