// SPDX-License-Identifier: LGPL-3.0-only

use super::{CommonStyle, Style};
use crate::geometry::{Orientation, Size};
use crate::kinds::{ComplexControl, ContentsType, SubControl};
use crate::metric::{dpi_scaled, MetricId};
use crate::option::{ButtonFeatures, ButtonSymbols, DrawOption, FrameFeatures, MenuItemType, SortIndicator};
use crate::text::text_size;

/// Smallest size of a line edit, frame or progress bar image.
const MIN_NINE_PATCH: i32 = 10;

impl CommonStyle {
    /// Outer size of a control whose contents measure `contents`.
    ///
    /// Kinds without a rule, or options without the payload a rule needs,
    /// return `contents` unchanged.
    pub fn size_from_contents_via(&self, front: &dyn Style, ct: ContentsType, opt: &DrawOption, contents: Size) -> Size {
        let metric = |m: MetricId| front.pixel_metric(m, Some(opt));
        let mut sz = contents;
        match ct {
            ContentsType::PushButton => {
                if let Some(button) = opt.button() {
                    let mut grow = metric(MetricId::ButtonMargin) + metric(MetricId::DefaultFrameWidth) * 2;
                    if button.features.contains(ButtonFeatures::AUTO_DEFAULT) {
                        grow += metric(MetricId::ButtonDefaultIndicator) * 2;
                    }
                    sz = contents.grown(grow, grow);
                }
            },
            ContentsType::CheckBox | ContentsType::RadioButton => {
                if let Some(button) = opt.button() {
                    let radio = ct == ContentsType::RadioButton;
                    let (w, h, spacing) = if radio {
                        (
                            metric(MetricId::ExclusiveIndicatorWidth),
                            metric(MetricId::ExclusiveIndicatorHeight),
                            MetricId::RadioButtonLabelSpacing,
                        )
                    } else {
                        (
                            metric(MetricId::IndicatorWidth),
                            metric(MetricId::IndicatorHeight),
                            MetricId::CheckBoxLabelSpacing,
                        )
                    };
                    let has_icon = button.icon.as_ref().is_some_and(|icon| !icon.is_empty());
                    let margins = if has_icon || !button.text.is_empty() {
                        4 + metric(spacing)
                    } else {
                        0
                    };
                    sz = contents.grown(w + margins, 4);
                    sz.height = sz.height.max(h);
                }
            },
            ContentsType::MenuItem => {
                if let Some(mi) = opt.menu_item() {
                    let mut w = contents.width;
                    let h;
                    if mi.menu_item_type == MenuItemType::Separator {
                        w = 10;
                        h = 2;
                    } else {
                        let mut height = opt.font.height() + 8;
                        if let Some(icon) = mi.icon.as_ref().filter(|icon| !icon.is_empty()) {
                            let extent = front.pixel_metric(MetricId::SmallIconSize, None);
                            let actual = icon
                                .best(extent)
                                .and_then(|image| image.size())
                                .unwrap_or(Size::square(extent))
                                .bounded_to(Size::square(extent));
                            height = height.max(actual.height + 4);
                        }
                        h = height;
                    }
                    if mi.text.contains('\t') {
                        w += 12;
                    }
                    let max_icon = mi.max_icon_width;
                    if max_icon > 0 {
                        w += max_icon + 6;
                    }
                    if mi.menu_has_checkable_items && max_icon < 20 {
                        w += 20 - max_icon;
                    }
                    if mi.menu_has_checkable_items || max_icon > 0 {
                        w += 2;
                    }
                    sz = Size::new(w + 12, h);
                }
            },
            ContentsType::ToolButton => sz = contents.grown(6, 5),
            ContentsType::ComboBox => {
                if let Some(cb) = opt.combo_box() {
                    let fw = if cb.frame {
                        metric(MetricId::ComboBoxFrameWidth) * 2
                    } else {
                        0
                    };
                    let text_margins = 2 * (front.pixel_metric(MetricId::FocusFrameHMargin, None) + 1);
                    let other = 23.max(2 * text_margins + metric(MetricId::ScrollBarExtent));
                    sz = contents.grown(fw + other, fw);
                }
            },
            ContentsType::HeaderSection => {
                if let Some(header) = opt.header() {
                    let has_icon = header.icon.as_ref().is_some_and(|icon| !icon.is_empty());
                    let margin = metric(MetricId::HeaderMargin);
                    let icon_size = if has_icon { metric(MetricId::SmallIconSize) } else { 0 };
                    let text = text_size(opt.font.as_ref(), &header.text);
                    let text_height = if header.text.is_empty() {
                        opt.font.height()
                    } else {
                        text.height
                    };
                    sz.height = margin + icon_size.max(text_height) + margin;
                    sz.width = if has_icon { margin } else { 0 }
                        + icon_size
                        + if header.text.is_empty() { 0 } else { margin }
                        + text.width
                        + margin;
                    if header.sort_indicator != SortIndicator::None {
                        match header.orientation {
                            Orientation::Horizontal => sz.width += sz.height + margin,
                            Orientation::Vertical => sz.height += sz.width + margin,
                        }
                    }
                }
            },
            ContentsType::TabWidget => sz = contents.grown(4, 4),
            ContentsType::LineEdit => {
                if let Some(frame) = opt.frame() {
                    let border = 2 * frame.line_width;
                    sz = contents.grown(border, border).expanded_to(Size::square(MIN_NINE_PATCH));
                }
            },
            ContentsType::GroupBox => {
                if let Some(gb) = opt.group_box() {
                    if sz.is_empty() {
                        sz = Size::square(20);
                    }
                    if !gb.features.contains(FrameFeatures::FLAT) {
                        sz.width += 16;
                    }
                }
            },
            ContentsType::MdiControls => {
                let button = metric(MetricId::TitleBarButtonSize);
                let shown = [
                    SubControl::MdiMinButton,
                    SubControl::MdiNormalButton,
                    SubControl::MdiCloseButton,
                ]
                .into_iter()
                .filter(|&sc| opt.sub_controls.contains(sc))
                .count() as i32;
                sz = Size::new(1 + shown * (button + 1), button);
            },
            ContentsType::ItemViewItem => {
                if opt.view_item().is_some() {
                    let layout = self.view_item_layout_via(front, opt, true);
                    sz = layout
                        .decoration_rect
                        .united(&layout.display_rect)
                        .united(&layout.check_rect)
                        .size();
                    if layout.decoration_rect.is_valid() {
                        sz.height += 1;
                    }
                }
            },
            ContentsType::SpinBox => {
                if let Some(sb) = opt.spin_box() {
                    let buttons = if sb.button_symbols == ButtonSymbols::NoButtons {
                        0
                    } else {
                        dpi_scaled(16, opt.dpi)
                    };
                    let fw = if sb.frame { metric(MetricId::SpinBoxFrameWidth) } else { 0 };
                    sz = contents.grown(buttons + 2 * fw, 2 * fw);
                }
            },
            ContentsType::Slider => {
                if opt.slider().is_some() {
                    sz = front.sub_control_rect(ComplexControl::Slider, opt, SubControl::SliderHandle).size();
                }
            },
            ContentsType::Frame => {
                if let Some(frame) = opt.frame() {
                    let w = MIN_NINE_PATCH.max(frame.line_width * 2 + 1);
                    sz = Size::square(w);
                }
            },
            ContentsType::ProgressBar => {
                if sz.width == 0 && sz.height == 0 {
                    sz = Size::square(MIN_NINE_PATCH);
                }
            },
            ContentsType::Splitter
            | ContentsType::MenuBarItem
            | ContentsType::MenuBar
            | ContentsType::Menu
            | ContentsType::TabBarTab
            | ContentsType::ScrollBar
            | ContentsType::SizeGrip
            | ContentsType::DialogButtons => {},
        }
        sz
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;
    use crate::kinds::SubControls;
    use crate::option::{
        ButtonOption, ComboBoxOption, FrameOption, GroupBoxOption, HeaderOption, MenuItemOption, SpinBoxOption,
        ViewItemFeatures, ViewItemOption,
    };

    fn size_of(ct: ContentsType, opt: &DrawOption, contents: Size) -> Size {
        CommonStyle::new().size_from_contents(ct, opt, contents)
    }

    #[test]
    fn test_push_button_adds_margin_and_frame() {
        let opt = DrawOption::default().with_payload(ButtonOption::default());
        assert_eq!(size_of(ContentsType::PushButton, &opt, Size::new(40, 16)), Size::new(50, 26));
        assert_eq!(
            size_of(ContentsType::PushButton, &DrawOption::default(), Size::new(40, 16)),
            Size::new(40, 16)
        );
    }

    #[test]
    fn test_check_box_reserves_indicator_and_spacing() {
        let labelled = DrawOption::default().with_payload(ButtonOption {
            text: "Check".into(),
            ..Default::default()
        });
        assert_eq!(size_of(ContentsType::CheckBox, &labelled, Size::new(35, 16)), Size::new(35 + 13 + 10, 20));
        let bare = DrawOption::default().with_payload(ButtonOption::default());
        assert_eq!(size_of(ContentsType::CheckBox, &bare, Size::default()), Size::new(13, 13));
        assert_eq!(size_of(ContentsType::RadioButton, &bare, Size::default()), Size::new(12, 12));
    }

    #[test]
    fn test_menu_items() {
        let separator = DrawOption::default().with_payload(MenuItemOption {
            menu_item_type: MenuItemType::Separator,
            ..Default::default()
        });
        assert_eq!(size_of(ContentsType::MenuItem, &separator, Size::new(80, 16)), Size::new(22, 2));
        let item = DrawOption::default().with_payload(MenuItemOption {
            text: "Open\tCtrl+O".into(),
            menu_has_checkable_items: true,
            ..Default::default()
        });
        assert_eq!(size_of(ContentsType::MenuItem, &item, Size::new(80, 16)), Size::new(80 + 12 + 20 + 2 + 12, 24));
    }

    #[test]
    fn test_combo_box_and_spin_box() {
        let combo = DrawOption::default().with_payload(ComboBoxOption::default());
        assert_eq!(size_of(ContentsType::ComboBox, &combo, Size::new(60, 16)), Size::new(60 + 4 + 28, 20));
        let spin = DrawOption::default().with_payload(SpinBoxOption::default());
        assert_eq!(size_of(ContentsType::SpinBox, &spin, Size::new(40, 16)), Size::new(40 + 16 + 4, 20));
        let bare = DrawOption::default().with_payload(SpinBoxOption {
            button_symbols: ButtonSymbols::NoButtons,
            frame: false,
            ..Default::default()
        });
        assert_eq!(size_of(ContentsType::SpinBox, &bare, Size::new(40, 16)), Size::new(40, 16));
    }

    #[test]
    fn test_header_section_with_sort_arrow() {
        let opt = DrawOption::default().with_payload(HeaderOption {
            text: "Name".into(),
            sort_indicator: SortIndicator::SortDown,
            ..Default::default()
        });
        let height = 4 + 16 + 4;
        let width = 4 + 28 + 4;
        assert_eq!(
            size_of(ContentsType::HeaderSection, &opt, Size::default()),
            Size::new(width + height + 4, height)
        );
    }

    #[test]
    fn test_minimum_nine_patch_sizes() {
        let frame = DrawOption::default().with_payload(FrameOption::default());
        assert_eq!(size_of(ContentsType::LineEdit, &frame, Size::new(2, 30)), Size::new(10, 32));
        assert_eq!(size_of(ContentsType::Frame, &frame, Size::new(100, 100)), Size::square(10));
        assert_eq!(size_of(ContentsType::ProgressBar, &frame, Size::default()), Size::square(10));
        assert_eq!(size_of(ContentsType::ProgressBar, &frame, Size::new(50, 8)), Size::new(50, 8));
    }

    #[test]
    fn test_group_box_grows_unless_flat() {
        let opt = DrawOption::default().with_payload(GroupBoxOption::default());
        assert_eq!(size_of(ContentsType::GroupBox, &opt, Size::default()), Size::new(36, 20));
        let flat = DrawOption::default().with_payload(GroupBoxOption {
            features: FrameFeatures::FLAT,
            ..Default::default()
        });
        assert_eq!(size_of(ContentsType::GroupBox, &flat, Size::new(50, 40)), Size::new(50, 40));
    }

    #[test]
    fn test_mdi_controls_count_requested_buttons() {
        let all = DrawOption::default();
        assert_eq!(size_of(ContentsType::MdiControls, &all, Size::default()), Size::new(52, 16));
        let close = DrawOption::default().with_sub_controls(SubControl::MdiCloseButton);
        assert_eq!(size_of(ContentsType::MdiControls, &close, Size::default()), Size::new(18, 16));
        let none = DrawOption::default().with_sub_controls(SubControls::empty());
        assert_eq!(size_of(ContentsType::MdiControls, &none, Size::default()), Size::new(1, 16));
    }

    #[test]
    fn test_item_view_adds_a_pixel_under_decorations() {
        let style = CommonStyle::new();
        let item = ViewItemOption {
            features: ViewItemFeatures::HAS_DISPLAY | ViewItemFeatures::HAS_DECORATION,
            decoration_size: Size::square(32),
            text: "Row".into(),
            ..Default::default()
        };
        let opt = DrawOption::new(Rect::new(0, 0, -1, -1)).with_payload(item);
        let layout = style.view_item_layout_via(&style, &opt, true);
        let hint = style.size_from_contents(ContentsType::ItemViewItem, &opt, Size::default());
        assert_eq!(hint.height, layout.decoration_rect.height + 1);
        assert_eq!(hint.width, layout.decoration_rect.width + layout.display_rect.width);
    }

    #[test]
    fn test_slider_uses_the_handle() {
        let style = CommonStyle::new();
        let opt = DrawOption::new(Rect::new(0, 0, 100, 20)).with_payload(crate::option::SliderOption::default());
        let handle = style.sub_control_rect(ComplexControl::Slider, &opt, SubControl::SliderHandle);
        assert_eq!(style.size_from_contents(ContentsType::Slider, &opt, Size::default()), handle.size());
    }

    #[test]
    fn test_untouched_kinds_pass_through() {
        let opt = DrawOption::default();
        for ct in [ContentsType::ScrollBar, ContentsType::TabBarTab, ContentsType::MenuBar] {
            assert_eq!(size_of(ct, &opt, Size::new(33, 44)), Size::new(33, 44));
        }
    }
}
