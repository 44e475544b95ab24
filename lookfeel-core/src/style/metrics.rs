// SPDX-License-Identifier: LGPL-3.0-only

use lookfeel_theme::ThemeHint;

use super::{CommonStyle, Style};
use crate::geometry::Orientation;
use crate::metric::{dpi_scaled, MetricId, REFERENCE_DPI};
use crate::option::{DrawOption, TabShape, TickPosition, TitleBarFlags};
use crate::state::State;

impl CommonStyle {
    /// Default pixel metrics.
    ///
    /// Absolute sizes are defined at 96 DPI and scaled to `opt.dpi`. Metrics
    /// derived from other metrics ask `front` so overrides propagate.
    pub fn pixel_metric_via(&self, front: &dyn Style, metric: MetricId, opt: Option<&DrawOption>) -> i32 {
        use MetricId::*;
        let dpi = opt.map_or(REFERENCE_DPI, |o| o.dpi);
        let px = |v: i32| dpi_scaled(v, dpi);
        match metric {
            FocusFrameVMargin | FocusFrameHMargin => 2,
            MenuBarVMargin | MenuBarHMargin => 0,
            DialogButtonsSeparator => px(5),
            DialogButtonsButtonWidth => px(70),
            DialogButtonsButtonHeight => px(30),
            TitleBarHeight => match opt {
                Some(o) => {
                    let floor = match o.title_bar() {
                        Some(tb) if tb.flags.contains(TitleBarFlags::TOOL) => 16,
                        _ => 18,
                    };
                    o.font.height().max(floor)
                },
                None => px(18),
            },
            TitleBarButtonSize | TitleBarButtonIconSize => px(16),
            ScrollBarSliderMin => px(9),
            ButtonMargin => px(6),
            DockWidgetTitleBarButtonMargin => px(2),
            ButtonDefaultIndicator => 0,
            MenuButtonIndicator => px(12),
            ButtonShiftHorizontal | ButtonShiftVertical | DefaultFrameWidth => 2,
            ComboBoxFrameWidth | SpinBoxFrameWidth | MenuPanelWidth | TabBarBaseOverlap | TabBarBaseHeight => {
                front.pixel_metric(DefaultFrameWidth, opt)
            },
            MdiSubWindowFrameWidth => px(4),
            MdiSubWindowMinimizedWidth => px(196),
            ScrollBarExtent => px(16),
            MaximumDragDistance => self.platform().hint_or_default(ThemeHint::MaximumScrollBarDragDistance),
            SliderThickness => px(16),
            SliderTickmarkOffset => match opt.and_then(|o| o.slider().map(|s| (o, s))) {
                Some((o, sl)) => {
                    let space = match sl.orientation {
                        Orientation::Horizontal => o.rect.height,
                        Orientation::Vertical => o.rect.width,
                    };
                    let thickness = front.pixel_metric(SliderControlThickness, opt);
                    match sl.tick_position {
                        TickPosition::BothSides => (space - thickness) / 2,
                        TickPosition::Above => space - thickness,
                        _ => 0,
                    }
                },
                None => 0,
            },
            SliderSpaceAvailable => match opt.and_then(|o| o.slider().map(|s| (o, s))) {
                Some((o, sl)) => {
                    let len = front.pixel_metric(SliderLength, opt);
                    match sl.orientation {
                        Orientation::Horizontal => o.rect.width - len,
                        Orientation::Vertical => o.rect.height - len,
                    }
                },
                None => 0,
            },
            DockWidgetSeparatorExtent => px(6),
            DockWidgetHandleExtent => px(8),
            DockWidgetTitleMargin => 0,
            DockWidgetFrameWidth => 1,
            SpinBoxSliderHeight | MenuBarPanelWidth => 2,
            MenuBarItemSpacing => 0,
            ToolBarFrameWidth => 1,
            ToolBarItemMargin => 0,
            ToolBarItemSpacing => px(4),
            ToolBarHandleExtent => px(8),
            ToolBarSeparatorExtent => px(6),
            ToolBarExtensionExtent => px(12),
            TabBarTabOverlap => 3,
            TabBarTabHSpace => px(24),
            TabBarTabShiftHorizontal => 0,
            TabBarTabShiftVertical => 2,
            TabBarTabVSpace => match opt.and_then(DrawOption::tab).map(|t| t.shape) {
                Some(shape) if !shape.is_triangular() => 8,
                Some(TabShape::TriangularWest | TabShape::TriangularEast) => 3,
                _ => 2,
            },
            ProgressBarChunkWidth => 9,
            SplitterWidth => px(6),
            IndicatorWidth | IndicatorHeight => px(13),
            ExclusiveIndicatorWidth | ExclusiveIndicatorHeight => px(12),
            MenuTearoffHeight | MenuScrollerHeight => px(10),
            MenuDesktopFrameWidth | MenuHMargin | MenuVMargin => 0,
            HeaderMargin => px(4),
            HeaderMarkSize => px(16),
            HeaderGripMargin => px(4),
            HeaderDefaultSectionSizeHorizontal => px(100),
            HeaderDefaultSectionSizeVertical => px(30),
            TabBarScrollButtonWidth => px(16),
            LayoutLeftMargin | LayoutTopMargin | LayoutRightMargin | LayoutBottomMargin => {
                let is_window = opt.is_some_and(|o| o.state.contains(State::WINDOW));
                front.pixel_metric(if is_window { DefaultTopLevelMargin } else { DefaultChildMargin }, None)
            },
            LayoutHorizontalSpacing | LayoutVerticalSpacing => front.pixel_metric(DefaultLayoutSpacing, None),
            DefaultTopLevelMargin => px(11),
            DefaultChildMargin => px(9),
            DefaultLayoutSpacing => px(6),
            ToolBarIconSize => match self.platform().hint(ThemeHint::ToolBarIconSize) {
                Some(size) if size > 0 => size,
                _ => px(24),
            },
            TabBarIconSize | ListViewIconSize => front.pixel_metric(SmallIconSize, opt),
            ButtonIconSize | SmallIconSize => px(16),
            IconViewIconSize => front.pixel_metric(LargeIconSize, opt),
            LargeIconSize | MessageBoxIconSize => px(32),
            ToolTipLabelFrameWidth => 1,
            CheckBoxLabelSpacing | RadioButtonLabelSpacing => px(6),
            SizeGripSize => px(13),
            TextCursorWidth => self.platform().hint_or_default(ThemeHint::TextCursorWidth),
            TabBarScrollButtonOverlap => 1,
            TabCloseIndicatorWidth | TabCloseIndicatorHeight => px(16),
            ScrollViewScrollBarSpacing => 2 * front.pixel_metric(DefaultFrameWidth, opt),
            ScrollViewScrollBarOverlap => 0,
            SubMenuOverlap => -front.pixel_metric(MenuPanelWidth, opt),
            TreeViewIndentation => px(20),
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;
    use crate::option::{SliderOption, TabOption};
    use crate::style::Style;

    #[test]
    fn test_absolute_metrics_scale_with_dpi() {
        let style = CommonStyle::new();
        let opt = DrawOption::default().with_dpi(192.0);
        assert_eq!(style.pixel_metric(MetricId::IndicatorWidth, None), 13);
        assert_eq!(style.pixel_metric(MetricId::IndicatorWidth, Some(&opt)), 26);
        assert_eq!(style.pixel_metric(MetricId::ScrollBarExtent, Some(&opt)), 32);
        assert_eq!(style.pixel_metric(MetricId::DefaultFrameWidth, Some(&opt)), 2);
    }

    #[test]
    fn test_derived_metrics() {
        let style = CommonStyle::new();
        assert_eq!(style.pixel_metric(MetricId::SpinBoxFrameWidth, None), 2);
        assert_eq!(style.pixel_metric(MetricId::SubMenuOverlap, None), -2);
        assert_eq!(style.pixel_metric(MetricId::ScrollViewScrollBarSpacing, None), 4);
        assert_eq!(style.pixel_metric(MetricId::IconViewIconSize, None), 32);
        assert_eq!(style.pixel_metric(MetricId::MaximumDragDistance, None), -1);
        assert_eq!(style.pixel_metric(MetricId::ToolBarIconSize, None), 24);
        assert_eq!(style.pixel_metric(MetricId::SliderLength, None), 0);
    }

    #[test]
    fn test_layout_margins_depend_on_window_state() {
        let style = CommonStyle::new();
        let window = DrawOption::default().with_state(State::ENABLED | State::WINDOW);
        assert_eq!(style.pixel_metric(MetricId::LayoutLeftMargin, Some(&window)), 11);
        assert_eq!(style.pixel_metric(MetricId::LayoutLeftMargin, Some(&DrawOption::default())), 9);
    }

    #[test]
    fn test_tab_vspace_by_shape() {
        let style = CommonStyle::new();
        let tab = |shape| {
            DrawOption::default().with_payload(TabOption {
                shape,
                ..Default::default()
            })
        };
        assert_eq!(style.pixel_metric(MetricId::TabBarTabVSpace, Some(&tab(TabShape::RoundedWest))), 8);
        assert_eq!(style.pixel_metric(MetricId::TabBarTabVSpace, Some(&tab(TabShape::TriangularEast))), 3);
        assert_eq!(style.pixel_metric(MetricId::TabBarTabVSpace, Some(&tab(TabShape::TriangularNorth))), 2);
        assert_eq!(style.pixel_metric(MetricId::TabBarTabVSpace, None), 2);
    }

    #[test]
    fn test_slider_tickmark_offset() {
        let style = CommonStyle::new();
        let opt = DrawOption::new(Rect::new(0, 0, 100, 30)).with_payload(SliderOption {
            tick_position: TickPosition::BothSides,
            ..Default::default()
        });
        assert_eq!(style.pixel_metric(MetricId::SliderTickmarkOffset, Some(&opt)), 15);
        assert_eq!(style.pixel_metric(MetricId::SliderSpaceAvailable, Some(&opt)), 100);
    }
}
