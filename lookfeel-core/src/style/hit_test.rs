// SPDX-License-Identifier: LGPL-3.0-only

use super::{CommonStyle, Style};
use crate::geometry::Point;
use crate::kinds::{ComplexControl, SubControl};
use crate::option::DrawOption;

impl CommonStyle {
    /// Find the sub-control under `pt`.
    ///
    /// Candidates are tried in the declared order of the control, handles
    /// and buttons before the grooves and pages they sit on.
    pub fn hit_test_complex_control_via(
        &self,
        front: &dyn Style,
        cc: ComplexControl,
        opt: &DrawOption,
        pt: Point,
    ) -> Option<SubControl> {
        let candidates: &[SubControl] = match cc {
            ComplexControl::Slider => &[SubControl::SliderHandle, SubControl::SliderGroove],
            ComplexControl::Dial => {
                log::warn!("hit_test_complex_control: control {:?} not handled", cc);
                return None;
            },
            _ => cc.sub_controls(),
        };
        let gated = cc == ComplexControl::MdiControls;
        candidates.iter().copied().find(|&sc| {
            if gated && !opt.sub_controls.contains(sc) {
                return false;
            }
            let r = front.sub_control_rect(cc, opt, sc);
            r.is_valid() && r.contains(pt)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;
    use crate::kinds::SubControls;
    use crate::option::{SliderOption, SpinBoxOption, TitleBarFlags, TitleBarOption};

    #[test]
    fn test_scroll_bar_hits() {
        let style = CommonStyle::new();
        let opt = DrawOption::new(Rect::new(0, 0, 200, 16)).with_payload(SliderOption {
            maximum: 100,
            page_step: 20,
            ..Default::default()
        });
        let hit = |x| style.hit_test_complex_control(ComplexControl::ScrollBar, &opt, Point::new(x, 8));
        assert_eq!(hit(3), Some(SubControl::ScrollBarSubLine));
        assert_eq!(hit(20), Some(SubControl::ScrollBarSlider));
        assert_eq!(hit(150), Some(SubControl::ScrollBarAddPage));
        assert_eq!(hit(199), Some(SubControl::ScrollBarAddLine));
        assert_eq!(style.hit_test_complex_control(ComplexControl::ScrollBar, &opt, Point::new(300, 8)), None);
    }

    #[test]
    fn test_spin_box_edit_field_before_frame() {
        let style = CommonStyle::new();
        let opt = DrawOption::new(Rect::new(0, 0, 100, 30)).with_payload(SpinBoxOption::default());
        let hit = |x, y| style.hit_test_complex_control(ComplexControl::SpinBox, &opt, Point::new(x, y));
        assert_eq!(hit(10, 10), Some(SubControl::SpinBoxEditField));
        assert_eq!(hit(90, 5), Some(SubControl::SpinBoxUp));
        assert_eq!(hit(90, 20), Some(SubControl::SpinBoxDown));
        assert_eq!(hit(0, 0), Some(SubControl::SpinBoxFrame));
    }

    #[test]
    fn test_hits_agree_with_rects() {
        let style = CommonStyle::new();
        let opt = DrawOption::new(Rect::new(0, 0, 200, 20)).with_payload(TitleBarOption {
            flags: TitleBarFlags::SYSTEM_MENU | TitleBarFlags::TITLE | TitleBarFlags::MINIMIZE,
            ..Default::default()
        });
        for sc in ComplexControl::TitleBar.sub_controls() {
            let r = style.sub_control_rect(ComplexControl::TitleBar, &opt, *sc);
            if r.is_valid() {
                assert_eq!(
                    style.hit_test_complex_control(ComplexControl::TitleBar, &opt, r.center()),
                    Some(*sc)
                );
            }
        }
    }

    #[test]
    fn test_mdi_hits_respect_the_request_mask() {
        let style = CommonStyle::new();
        let all = DrawOption::new(Rect::new(0, 0, 60, 16));
        assert_eq!(
            style.hit_test_complex_control(ComplexControl::MdiControls, &all, Point::new(5, 5)),
            Some(SubControl::MdiMinButton)
        );
        let close_only = all.clone().with_sub_controls(SubControls::from(SubControl::MdiCloseButton));
        assert_eq!(
            style.hit_test_complex_control(ComplexControl::MdiControls, &close_only, Point::new(5, 5)),
            Some(SubControl::MdiCloseButton)
        );
        let none = all.with_sub_controls(SubControls::empty());
        assert_eq!(style.hit_test_complex_control(ComplexControl::MdiControls, &none, Point::new(5, 5)), None);
    }

    #[test]
    fn test_dial_hit_test_is_a_warned_miss() {
        let style = CommonStyle::new();
        let opt = DrawOption::new(Rect::new(0, 0, 50, 50)).with_payload(SliderOption::default());
        assert_eq!(style.hit_test_complex_control(ComplexControl::Dial, &opt, Point::new(25, 25)), None);
    }
}
