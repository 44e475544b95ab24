// SPDX-License-Identifier: LGPL-3.0-only

use lookfeel_core::canvas::{Brush, DrawCommand, Picture};
use lookfeel_core::geometry::Rect;
use lookfeel_core::kinds::{ComplexControl, ControlElement, PrimitiveElement, SubControl, SubElement};
use lookfeel_core::option::{ButtonOption, DrawOption, SliderOption, TickPosition};
use lookfeel_core::state::State;
use lookfeel_core::style::{CommonStyle, Style};
use lookfeel_fusion::{FusionStyle, STYLE_NAME};

fn slider(rect: Rect) -> DrawOption {
    DrawOption::new(rect).with_payload(SliderOption {
        maximum: 100,
        tick_interval: 10,
        tick_position: TickPosition::Below,
        ..Default::default()
    })
}

#[test]
fn test_push_button_picks_up_the_fusion_bevel() {
    let style = FusionStyle::new();
    let opt = DrawOption::new(Rect::new(0, 0, 90, 28)).with_payload(ButtonOption {
        text: "OK".into(),
        ..Default::default()
    });
    let mut picture = Picture::new();
    style.draw_control(ControlElement::PushButton, &opt, &mut picture);
    assert!(picture
        .commands()
        .iter()
        .any(|c| matches!(c, DrawCommand::FillRect(_, Brush::LinearGradient { .. }))));
    assert_eq!(picture.texts(), vec!["OK"]);
}

#[test]
fn test_indicator_metric_reaches_check_box_layout() {
    let style = FusionStyle::new();
    let opt = DrawOption::new(Rect::new(0, 0, 200, 20)).with_payload(ButtonOption {
        text: "Check me".into(),
        ..Default::default()
    });
    assert_eq!(style.sub_element_rect(SubElement::CheckBoxIndicator, &opt), Rect::new(0, 3, 14, 14));
}

#[test]
fn test_slider_metrics_reach_the_handle() {
    let style = FusionStyle::new();
    let opt = slider(Rect::new(0, 0, 200, 30));
    let handle = style.sub_control_rect(ComplexControl::Slider, &opt, SubControl::SliderHandle);
    assert_eq!(handle, Rect::new(0, 4, 15, 15));
    assert_eq!(
        style.hit_test_complex_control(ComplexControl::Slider, &opt, handle.center()),
        Some(SubControl::SliderHandle)
    );
}

#[test]
fn test_slider_paints_ticks_groove_and_handle() {
    let style = FusionStyle::new();
    let mut picture = Picture::new();
    style.draw_complex_control(ComplexControl::Slider, &slider(Rect::new(0, 0, 200, 30)), &mut picture);
    let fills = picture.filled_rects();
    assert_eq!(fills.len(), 2);
    // Groove strip inside its outline, then the handle face.
    assert_eq!(fills[0], Rect::new(1, 9, 198, 5));
    assert_eq!(fills[1], Rect::new(1, 5, 13, 13));
    assert!(picture.count(|c| matches!(c, DrawCommand::Line(..))) > 11);

    let ticks_only = slider(Rect::new(0, 0, 200, 30)).with_sub_controls(SubControl::SliderTickmarks);
    let mut ticks = Picture::new();
    style.draw_complex_control(ComplexControl::Slider, &ticks_only, &mut ticks);
    assert!(ticks.filled_rects().is_empty());
    assert_eq!(ticks.count(|c| matches!(c, DrawCommand::Line(..))), 11);
}

#[test]
fn test_dial_is_a_knob_without_a_needle() {
    let style = FusionStyle::new();
    let opt = DrawOption::new(Rect::new(10, 10, 60, 60))
        .with_state(State::ENABLED | State::HAS_FOCUS)
        .with_payload(SliderOption {
            maximum: 100,
            slider_position: 50,
            ..Default::default()
        });
    let mut picture = Picture::new();
    style.draw_complex_control(ComplexControl::Dial, &opt, &mut picture);
    // Shadow, knob, inner ring, focus ring and the two marker rings.
    assert_eq!(picture.count(|c| matches!(c, DrawCommand::Ellipse(..))), 6);
    assert_eq!(picture.count(|c| matches!(c, DrawCommand::Arc(..))), 0);
    assert_eq!(picture.count(|c| matches!(c, DrawCommand::Polygon(..))), 0);
    assert_eq!(picture.commands().first(), Some(&DrawCommand::Save));
    assert_eq!(picture.commands().last(), Some(&DrawCommand::Restore));

    let disabled = opt.clone().with_state(State::empty());
    let mut picture = Picture::new();
    style.draw_complex_control(ComplexControl::Dial, &disabled, &mut picture);
    assert_eq!(picture.count(|c| matches!(c, DrawCommand::Ellipse(..))), 4);
}

#[test]
fn test_untouched_elements_match_the_common_style() {
    let fusion = FusionStyle::new();
    let common = CommonStyle::new();
    let opt = DrawOption::new(Rect::new(0, 0, 40, 20));
    for pe in [PrimitiveElement::FrameFocusRect, PrimitiveElement::IndicatorArrowDown] {
        let (mut a, mut b) = (Picture::new(), Picture::new());
        fusion.draw_primitive(pe, &opt, &mut a);
        common.draw_primitive(pe, &opt, &mut b);
        assert_eq!(a, b, "{pe:?}");
    }
}

#[test]
fn test_style_is_named_fusion() {
    let style = FusionStyle::with_base(CommonStyle::new().with_cache_capacity(8));
    assert_eq!(style.base().name(), STYLE_NAME);
}
