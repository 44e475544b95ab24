// SPDX-License-Identifier: LGPL-3.0-only

use std::sync::Arc;

use lookfeel_core::asset::{AssetImage, IconSet};
use lookfeel_core::canvas::Picture;
use lookfeel_core::geometry::{slider_value_from_position, Direction, Point, Rect, Size};
use lookfeel_core::kinds::{ComplexControl, SubControl, SubControls, SubElement};
use lookfeel_core::metric::MetricId;
use lookfeel_core::option::{
    ButtonOption, ComboBoxOption, DecorationPosition, DrawOption, GroupBoxOption, SliderOption,
    SpinBoxOption, TabOption, TabShape, ViewItemFeatures, ViewItemOption,
};
use lookfeel_core::style::{CommonStyle, Style};

fn mirror(outer: Rect, r: Rect) -> Rect {
    Rect::new(2 * outer.x + outer.width - r.x - r.width, r.y, r.width, r.height)
}

fn scroll_bar(position: i32) -> DrawOption {
    DrawOption::new(Rect::new(0, 0, 400, 16)).with_payload(SliderOption {
        minimum: 0,
        maximum: 100,
        page_step: 10,
        slider_position: position,
        slider_value: position,
        ..Default::default()
    })
}

#[test]
fn test_sub_elements_mirror_under_rtl() {
    let style = CommonStyle::new();
    let outer = Rect::new(10, 5, 240, 24);
    let check = DrawOption::new(outer).with_payload(ButtonOption {
        text: "Remember me".into(),
        ..Default::default()
    });
    for se in [
        SubElement::CheckBoxIndicator,
        SubElement::CheckBoxContents,
        SubElement::RadioButtonIndicator,
        SubElement::RadioButtonContents,
    ] {
        let ltr = style.sub_element_rect(se, &check);
        let rtl = style.sub_element_rect(se, &check.clone().with_direction(Direction::RightToLeft));
        assert_eq!(rtl, mirror(outer, ltr), "{se:?}");
    }
}

#[test]
fn test_sub_controls_mirror_under_rtl() {
    let style = CommonStyle::new();
    let outer = Rect::new(0, 0, 300, 40);
    let cases = [
        (
            ComplexControl::ComboBox,
            DrawOption::new(outer).with_payload(ComboBoxOption::default()),
            vec![SubControl::ComboBoxArrow, SubControl::ComboBoxEditField],
        ),
        (
            ComplexControl::SpinBox,
            DrawOption::new(outer).with_payload(SpinBoxOption::default()),
            vec![SubControl::SpinBoxUp, SubControl::SpinBoxDown, SubControl::SpinBoxEditField],
        ),
        (
            ComplexControl::ScrollBar,
            scroll_bar(30).with_rect(outer),
            vec![
                SubControl::ScrollBarSubLine,
                SubControl::ScrollBarAddLine,
                SubControl::ScrollBarSlider,
                SubControl::ScrollBarSubPage,
            ],
        ),
        (
            ComplexControl::GroupBox,
            DrawOption::new(outer)
                .with_sub_controls(
                    [
                        SubControl::GroupBoxCheckBox,
                        SubControl::GroupBoxLabel,
                        SubControl::GroupBoxFrame,
                        SubControl::GroupBoxContents,
                    ]
                    .into_iter()
                    .collect::<SubControls>(),
                )
                .with_payload(GroupBoxOption {
                    text: "Options".into(),
                    ..Default::default()
                }),
            vec![
                SubControl::GroupBoxCheckBox,
                SubControl::GroupBoxLabel,
                SubControl::GroupBoxContents,
            ],
        ),
    ];
    for (cc, opt, parts) in cases {
        let rtl = opt.clone().with_direction(Direction::RightToLeft);
        for sc in parts {
            let a = style.sub_control_rect(cc, &opt, sc);
            let b = style.sub_control_rect(cc, &rtl, sc);
            assert_eq!(b, mirror(outer, a), "{cc:?} {sc:?}");
        }
    }
}

#[test]
fn test_tab_layout_mirrors_under_rtl() {
    let style = CommonStyle::new();
    let outer = Rect::new(10, 0, 140, 30);
    let icon = IconSet::new().with(16, AssetImage::Picture(Arc::new(Picture::with_size(Size::square(16)))));
    let opt = DrawOption::new(outer).with_payload(TabOption {
        shape: TabShape::RoundedNorth,
        text: "Settings".into(),
        icon: Some(icon),
        icon_size: Size::square(16),
        right_button_size: Size::square(12),
        ..Default::default()
    });
    let ltr = style.tab_layout_via(&style, &opt);
    let rtl = style.tab_layout_via(&style, &opt.clone().with_direction(Direction::RightToLeft));
    assert!(!ltr.icon_rect.is_empty());
    assert_eq!(rtl.text_rect, mirror(outer, ltr.text_rect));
    assert_eq!(rtl.icon_rect, mirror(outer, ltr.icon_rect));
}

#[test]
fn test_scroll_bar_slider_round_trips_its_value() {
    let style = CommonStyle::new();
    for value in 0..=100 {
        let opt = scroll_bar(value);
        let groove = style.sub_control_rect(ComplexControl::ScrollBar, &opt, SubControl::ScrollBarGroove);
        let slider = style.sub_control_rect(ComplexControl::ScrollBar, &opt, SubControl::ScrollBarSlider);
        let span = groove.width - slider.width;
        let back = slider_value_from_position(0, 100, slider.x - groove.x, span, false);
        assert_eq!(back, value);
    }
}

#[test]
fn test_hit_test_agrees_with_geometry() {
    let style = CommonStyle::new();
    let opt = scroll_bar(42);
    let slider = style.sub_control_rect(ComplexControl::ScrollBar, &opt, SubControl::ScrollBarSlider);
    for x in 0..400 {
        let p = Point::new(x, 8);
        let hit = style.hit_test_complex_control(ComplexControl::ScrollBar, &opt, p);
        let Some(sc) = hit else {
            panic!("nothing under {p:?}");
        };
        assert!(style.sub_control_rect(ComplexControl::ScrollBar, &opt, sc).contains(p));
        if slider.contains(p) {
            assert_eq!(sc, SubControl::ScrollBarSlider);
        }
    }
    assert_eq!(style.hit_test_complex_control(ComplexControl::ScrollBar, &opt, Point::new(500, 8)), None);
}

#[test]
fn test_item_view_cells_do_not_overlap() {
    let style = CommonStyle::new();
    for direction in [Direction::LeftToRight, Direction::RightToLeft] {
        let opt = DrawOption::new(Rect::new(0, 0, 240, 22))
            .with_direction(direction)
            .with_payload(ViewItemOption {
                features: ViewItemFeatures::HAS_CHECK_INDICATOR
                    | ViewItemFeatures::HAS_DECORATION
                    | ViewItemFeatures::HAS_DISPLAY,
                decoration_position: DecorationPosition::Left,
                decoration_size: Size::square(16),
                text: "Documents".into(),
                ..Default::default()
            });
        let cells = [
            style.sub_element_rect(SubElement::ItemViewItemCheckIndicator, &opt),
            style.sub_element_rect(SubElement::ItemViewItemDecoration, &opt),
            style.sub_element_rect(SubElement::ItemViewItemText, &opt),
        ];
        for (i, a) in cells.iter().enumerate() {
            assert!(opt.rect.contains_rect(a), "{a:?} escapes the row");
            for b in &cells[i + 1..] {
                assert!(!a.intersects(b), "{a:?} overlaps {b:?}");
            }
        }
    }
}

/// A style with wider check indicators, layered over the common style.
struct WideIndicators(CommonStyle);

impl Style for WideIndicators {
    fn base(&self) -> &CommonStyle {
        &self.0
    }

    fn front(&self) -> &dyn Style {
        self
    }

    fn pixel_metric(&self, metric: MetricId, opt: Option<&DrawOption>) -> i32 {
        match metric {
            MetricId::IndicatorWidth | MetricId::IndicatorHeight => 20,
            _ => self.base().pixel_metric_via(self, metric, opt),
        }
    }
}

#[test]
fn test_overridden_metric_reaches_the_layout() {
    let plain = CommonStyle::new();
    let wide = WideIndicators(CommonStyle::new());
    let opt = DrawOption::new(Rect::new(0, 0, 200, 24)).with_payload(ButtonOption {
        text: "Wide".into(),
        ..Default::default()
    });
    let indicator = wide.sub_element_rect(SubElement::CheckBoxIndicator, &opt);
    assert_eq!(indicator.size(), Size::square(20));
    let shift = wide.sub_element_rect(SubElement::CheckBoxContents, &opt).x
        - plain.sub_element_rect(SubElement::CheckBoxContents, &opt).x;
    assert_eq!(shift, 20 - plain.pixel_metric(MetricId::IndicatorWidth, None));
}

#[test]
fn test_title_bar_buttons_take_slots_from_the_right() {
    use lookfeel_core::option::{TitleBarFlags, TitleBarOption};
    let style = CommonStyle::new();
    let title_bar = |flags| {
        DrawOption::new(Rect::new(0, 0, 300, 22)).with_payload(TitleBarOption {
            text: "Editor".into(),
            flags,
            ..Default::default()
        })
    };
    let rect = |opt: &DrawOption, sc| style.sub_control_rect(ComplexControl::TitleBar, opt, sc);
    let base = title_bar(TitleBarFlags::SYSTEM_MENU | TitleBarFlags::TITLE);
    let close = rect(&base, SubControl::TitleBarClose);
    let delta = close.width + 2;
    assert_eq!(close.x, 299 - delta);
    assert_eq!(rect(&base, SubControl::TitleBarLabel).right(), 299 - delta);

    let with_min = title_bar(TitleBarFlags::SYSTEM_MENU | TitleBarFlags::TITLE | TitleBarFlags::MINIMIZE);
    assert_eq!(rect(&with_min, SubControl::TitleBarMin).x, 299 - 2 * delta);
    assert_eq!(rect(&with_min, SubControl::TitleBarLabel).right(), 299 - 2 * delta);
}
