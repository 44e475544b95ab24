// SPDX-License-Identifier: LGPL-3.0-only

use lookfeel_theme::util::to_argb32;
use lookfeel_theme::{ColorRole, ThemeHint};

use super::{CommonStyle, Style};
use crate::canvas::{Pen, PenStyle};
use crate::geometry::{Alignment, Direction, Region};
use crate::hint::*;
use crate::metric::MetricId;
use crate::option::{DrawOption, RubberBandShape};

impl CommonStyle {
    /// Default style hints.
    pub fn style_hint_via(&self, front: &dyn Style, hint: HintId, opt: Option<&DrawOption>) -> HintReturn {
        use HintId::*;
        let platform = |h: ThemeHint| self.platform().hint_or_default(h);
        let value: i32 = match hint {
            MenuKeyboardSearch => 0,
            SliderAbsoluteSetButtons => MIDDLE_BUTTON,
            SliderPageSetButtons => LEFT_BUTTON,
            ScrollBarContextMenu => 1,
            GroupBoxTextLabelVerticalAlignment => Alignment::VCENTER.bits() as i32,
            GroupBoxTextLabelColor => opt.map_or(0, |o| to_argb32(o.palette.color(ColorRole::Text)) as i32),
            ListViewExpandSelectMouseType | TabBarSelectMouseType => MOUSE_BUTTON_PRESS,
            TabBarAlignment => Alignment::LEFT.bits() as i32,
            HeaderArrowAlignment => (Alignment::RIGHT | Alignment::VCENTER).bits() as i32,
            TitleBarAutoRaise => 0,
            MenuSubMenuPopupDelay => 256,
            MenuSloppySubMenus => 1,
            MenuSubMenuUniDirection => 0,
            MenuSubMenuUniDirectionFailCount => 1,
            MenuSubMenuSloppySelectOtherActions => 1,
            MenuSubMenuSloppyCloseTimeout => 1000,
            MenuSubMenuResetWhenReenteringParent | MenuSubMenuDontStartSloppyOnLeave => 0,
            ProgressDialogCenterCancelButton => Alignment::CENTER.bits() as i32,
            BlinkCursorWhenTextSelected => 1,
            TableGridLineColor => opt.map_or(-1, |o| to_argb32(o.palette.color(ColorRole::Mid)) as i32),
            LineEditPasswordCharacter => platform(ThemeHint::PasswordMaskCharacter),
            LineEditPasswordMaskDelay => platform(ThemeHint::PasswordMaskDelay),
            ToolBoxSelectedPageTitleBold => 1,
            UnderlineShortcut => 1,
            SpinBoxClickAutoRepeatRate => 150,
            SpinBoxClickAutoRepeatThreshold => 500,
            SpinBoxKeyPressAutoRepeatRate => 75,
            MenuSelectionWrap | MenuFillScreenWithScroll => 1,
            ToolTipLabelOpacity => 255,
            ButtonFocusPolicy => STRONG_FOCUS,
            MessageBoxUseBorderForButtonSpacing => 0,
            ToolButtonPopupDelay => 600,
            FocusFrameMask => 1,
            RubberBandMask => return self.rubber_band_mask(front, opt),
            SpinControlsDisableOnBounds => 1,
            DialBackgroundRole => return HintReturn::Role(ColorRole::Window),
            ComboBoxLayoutDirection => match opt.map_or(Direction::LeftToRight, |o| o.direction) {
                Direction::LeftToRight => 0,
                Direction::RightToLeft => 1,
            },
            ItemViewEllipsisLocation => Alignment::RIGHT.bits() as i32,
            ItemViewShowDecorationSelected => 0,
            ItemViewActivateItemOnSingleClick => (platform(ThemeHint::ItemViewActivateItemOnSingleClick) != 0) as i32,
            TitleBarModifyNotification => 1,
            ScrollBarRollBetweenButtons => 0,
            TabBarElideMode => ELIDE_NONE,
            DialogButtonLayout => platform(ThemeHint::DialogButtonBoxLayout),
            MessageBoxTextInteractionFlags => 4,
            DialogButtonBoxButtonsHaveIcons => (platform(ThemeHint::DialogButtonBoxButtonsHaveIcons) != 0) as i32,
            MessageBoxCenterButtons => 1,
            ItemViewMovementWithoutUpdatingSelection => 1,
            FocusFrameAboveWidget => 0,
            ToolBarMovable => 1,
            TextControlFocusIndicatorTextCharFormat => {
                let color = opt.map_or_else(
                    || self.standard_palette().color(ColorRole::Text),
                    |o| o.palette.color(ColorRole::Text),
                );
                return HintReturn::TextFormat {
                    value: 1,
                    outline: Pen::new(color).with_style(PenStyle::Dot),
                };
            },
            FormLayoutWrapPolicy | FormLayoutFieldGrowthPolicy => 0,
            FormLayoutFormAlignment => (Alignment::LEFT | Alignment::TOP).bits() as i32,
            FormLayoutLabelAlignment => Alignment::LEFT.bits() as i32,
            ItemViewArrowKeysNavigateIntoChildren | ItemViewDrawDelegateFrame => 0,
            TabBarCloseButtonPosition => CLOSE_BUTTON_RIGHT,
            TabBarChangeCurrentDelay => 500,
            DockWidgetButtonsHaveFrame => 1,
            ToolButtonStyle => platform(ThemeHint::ToolButtonStyle),
            ScrollBarTransient => 0,
            ToolTipWakeUpDelay => 700,
            ToolTipFallAsleepDelay => 2000,
            WidgetAnimate => 1,
            SplitterOpaqueResize => 1,
            ItemViewScrollMode => 0,
            TitleBarShowToolTipsOnButtons => 1,
            WidgetAnimationDuration => {
                if front.style_hint(WidgetAnimate, opt).as_bool() {
                    200
                } else {
                    0
                }
            },
            ComboBoxAllowWheelScrolling => 1,
            SpinBoxButtonsInsideFrame => 1,
            SpinBoxStepModifier => CONTROL_MODIFIER,
            _ => 0,
        };
        HintReturn::Int(value)
    }

    fn rubber_band_mask(&self, front: &dyn Style, opt: Option<&DrawOption>) -> HintReturn {
        let Some((o, band)) = opt.and_then(|o| o.rubber_band().map(|b| (o, b))) else {
            return HintReturn::Int(0);
        };
        if band.shape != RubberBandShape::Rectangle {
            return HintReturn::Int(0);
        }
        let margin = front.pixel_metric(MetricId::DefaultFrameWidth, None) * 2;
        let region = Region::from_rect(o.rect).subtracted(o.rect.adjusted(margin, margin, -margin, -margin));
        HintReturn::Mask { value: 1, region }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Point, Rect};
    use crate::option::RubberBandOption;

    #[test]
    fn test_constant_hints() {
        let style = CommonStyle::new();
        assert_eq!(style.style_hint(HintId::SpinBoxStepModifier, None).as_int(), 0x0400_0000);
        assert_eq!(style.style_hint(HintId::HeaderArrowAlignment, None).as_int(), 0x82);
        assert_eq!(style.style_hint(HintId::FormLayoutFormAlignment, None).as_int(), 0x21);
        assert_eq!(style.style_hint(HintId::TableGridLineColor, None).as_int(), -1);
        assert_eq!(style.style_hint(HintId::LineEditPasswordCharacter, None).as_int(), 0x25CF);
        assert_eq!(style.style_hint(HintId::DialBackgroundRole, None), HintReturn::Role(ColorRole::Window));
        assert_eq!(style.style_hint(HintId::WindowFrameMaskRegion, None).as_int(), 0);
    }

    struct NoAnimation(CommonStyle);

    impl Style for NoAnimation {
        fn base(&self) -> &CommonStyle {
            &self.0
        }

        fn front(&self) -> &dyn Style {
            self
        }

        fn style_hint(&self, hint: HintId, opt: Option<&DrawOption>) -> HintReturn {
            match hint {
                HintId::WidgetAnimate => HintReturn::Int(0),
                _ => self.base().style_hint_via(self, hint, opt),
            }
        }
    }

    #[test]
    fn test_animation_duration_follows_animate_hint() {
        assert_eq!(CommonStyle::new().style_hint(HintId::WidgetAnimationDuration, None).as_int(), 200);
        let style = NoAnimation(CommonStyle::new());
        assert_eq!(style.style_hint(HintId::WidgetAnimationDuration, None).as_int(), 0);
    }

    #[test]
    fn test_rubber_band_mask_is_a_ring() {
        let style = CommonStyle::new();
        let opt = DrawOption::new(Rect::new(0, 0, 20, 20)).with_payload(RubberBandOption::default());
        let answer = style.style_hint(HintId::RubberBandMask, Some(&opt));
        let region = answer.region().cloned().unwrap();
        assert!(region.contains(Point::new(1, 1)));
        assert!(!region.contains(Point::new(10, 10)));
        assert_eq!(region.area(), 400 - 144);

        let line = opt.with_payload(RubberBandOption {
            shape: RubberBandShape::Line,
            ..Default::default()
        });
        assert_eq!(style.style_hint(HintId::RubberBandMask, Some(&line)), HintReturn::Int(0));
    }

    #[test]
    fn test_focus_indicator_format_is_dotted() {
        let style = CommonStyle::new();
        let opt = DrawOption::default();
        match style.style_hint(HintId::TextControlFocusIndicatorTextCharFormat, Some(&opt)) {
            HintReturn::TextFormat { value, outline } => {
                assert_eq!(value, 1);
                assert_eq!(outline.style, PenStyle::Dot);
                assert_eq!(outline.color, opt.palette.color(ColorRole::Text));
            },
            other => panic!("unexpected {:?}", other),
        }
    }
}
