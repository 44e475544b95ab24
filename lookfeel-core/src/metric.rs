// SPDX-License-Identifier: LGPL-3.0-only

/// The DPI at which every absolute metric is defined.
pub const REFERENCE_DPI: f64 = 96.0;

/// Scale a reference-DPI pixel value to `dpi`, rounding half up.
pub fn dpi_scaled(value: i32, dpi: f64) -> i32 {
    if dpi <= 0.0 || dpi == REFERENCE_DPI {
        return value;
    }
    (value as f64 * dpi / REFERENCE_DPI + 0.5).floor() as i32
}

/// Tunable pixel dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricId {
    /// Space between a push button's label and its frame.
    ButtonMargin,
    /// Width of the default-button indicator.
    ButtonDefaultIndicator,
    /// Width of the menu indicator of a button.
    MenuButtonIndicator,
    /// Horizontal label shift while a button is pressed.
    ButtonShiftHorizontal,
    /// Vertical label shift while a button is pressed.
    ButtonShiftVertical,
    /// Default frame width.
    DefaultFrameWidth,
    /// Frame width of a spin box.
    SpinBoxFrameWidth,
    /// Frame width of a combo box.
    ComboBoxFrameWidth,
    /// Distance the pointer may leave a scroll bar before the slider snaps back, or -1.
    MaximumDragDistance,
    /// Thickness of a scroll bar.
    ScrollBarExtent,
    /// Minimum length of a scroll bar slider.
    ScrollBarSliderMin,
    /// Total slider thickness.
    SliderThickness,
    /// Thickness of the slider handle.
    SliderControlThickness,
    /// Length of the slider handle.
    SliderLength,
    /// Offset between the slider edge and its groove, room for tick marks.
    SliderTickmarkOffset,
    /// Space the handle can travel along the groove.
    SliderSpaceAvailable,
    /// Width of the separator between dock widgets.
    DockWidgetSeparatorExtent,
    /// Width of the dock widget resize handle.
    DockWidgetHandleExtent,
    /// Frame width of a dock widget.
    DockWidgetFrameWidth,
    /// Margin around the dock widget title.
    DockWidgetTitleMargin,
    /// Margin around dock widget title bar buttons.
    DockWidgetTitleBarButtonMargin,
    /// Overlap between neighbouring tabs.
    TabBarTabOverlap,
    /// Extra horizontal space added to a tab.
    TabBarTabHSpace,
    /// Extra vertical space added to a tab.
    TabBarTabVSpace,
    /// Height of the tab bar base line.
    TabBarBaseHeight,
    /// Overlap between the tab bar base and the tabs.
    TabBarBaseOverlap,
    /// Horizontal label shift of a selected tab.
    TabBarTabShiftHorizontal,
    /// Vertical label shift of a selected tab.
    TabBarTabShiftVertical,
    /// Width of a tab bar scroll button.
    TabBarScrollButtonWidth,
    /// Overlap between the two tab bar scroll buttons.
    TabBarScrollButtonOverlap,
    /// Default tab icon size.
    TabBarIconSize,
    /// Width of a tab close button.
    TabCloseIndicatorWidth,
    /// Height of a tab close button.
    TabCloseIndicatorHeight,
    /// Width of one progress bar chunk.
    ProgressBarChunkWidth,
    /// Width of a splitter handle.
    SplitterWidth,
    /// Height of a window title bar.
    TitleBarHeight,
    /// Size of a title bar button.
    TitleBarButtonSize,
    /// Icon size inside a title bar button.
    TitleBarButtonIconSize,
    /// Height of the scroller in a scrolling menu.
    MenuScrollerHeight,
    /// Horizontal margin inside a menu.
    MenuHMargin,
    /// Vertical margin inside a menu.
    MenuVMargin,
    /// Frame width of a menu.
    MenuPanelWidth,
    /// Height of a menu tear-off item.
    MenuTearoffHeight,
    /// Frame width of a menu shown on the desktop.
    MenuDesktopFrameWidth,
    /// Frame width of a menu bar.
    MenuBarPanelWidth,
    /// Spacing between menu bar items.
    MenuBarItemSpacing,
    /// Vertical margin inside a menu bar.
    MenuBarVMargin,
    /// Horizontal margin inside a menu bar.
    MenuBarHMargin,
    /// Width of a check box indicator.
    IndicatorWidth,
    /// Height of a check box indicator.
    IndicatorHeight,
    /// Width of a radio button indicator.
    ExclusiveIndicatorWidth,
    /// Height of a radio button indicator.
    ExclusiveIndicatorHeight,
    /// Space between dialog buttons.
    DialogButtonsSeparator,
    /// Minimum width of a dialog button.
    DialogButtonsButtonWidth,
    /// Minimum height of a dialog button.
    DialogButtonsButtonHeight,
    /// Frame width of an MDI sub-window.
    MdiSubWindowFrameWidth,
    /// Width of a minimized MDI sub-window.
    MdiSubWindowMinimizedWidth,
    /// Margin inside a header section.
    HeaderMargin,
    /// Size of the header sort indicator.
    HeaderMarkSize,
    /// Size of the header resize grip.
    HeaderGripMargin,
    /// Default width of a horizontal header section.
    HeaderDefaultSectionSizeHorizontal,
    /// Default height of a vertical header section.
    HeaderDefaultSectionSizeVertical,
    /// Frame width of a tool tip.
    ToolTipLabelFrameWidth,
    /// Space between a check box indicator and its label.
    CheckBoxLabelSpacing,
    /// Space between a radio button indicator and its label.
    RadioButtonLabelSpacing,
    /// Frame width of a tool bar.
    ToolBarFrameWidth,
    /// Width of the tool bar drag handle.
    ToolBarHandleExtent,
    /// Spacing between tool bar items.
    ToolBarItemSpacing,
    /// Margin around tool bar items.
    ToolBarItemMargin,
    /// Width of a tool bar separator.
    ToolBarSeparatorExtent,
    /// Width of the tool bar extension button.
    ToolBarExtensionExtent,
    /// Default tool bar icon size.
    ToolBarIconSize,
    /// Height of the slider drawn in a spin box.
    SpinBoxSliderHeight,
    /// Legacy margin of top-level layouts.
    DefaultTopLevelMargin,
    /// Legacy margin of child layouts.
    DefaultChildMargin,
    /// Legacy layout spacing.
    DefaultLayoutSpacing,
    /// Icon size in list views.
    ListViewIconSize,
    /// Icon size in icon views.
    IconViewIconSize,
    /// Small icon size.
    SmallIconSize,
    /// Large icon size.
    LargeIconSize,
    /// Icon size inside buttons.
    ButtonIconSize,
    /// Icon size in message boxes.
    MessageBoxIconSize,
    /// Vertical distance between a widget and its focus frame.
    FocusFrameVMargin,
    /// Horizontal distance between a widget and its focus frame.
    FocusFrameHMargin,
    /// Size of a size grip.
    SizeGripSize,
    /// Left layout margin.
    LayoutLeftMargin,
    /// Top layout margin.
    LayoutTopMargin,
    /// Right layout margin.
    LayoutRightMargin,
    /// Bottom layout margin.
    LayoutBottomMargin,
    /// Horizontal spacing between layout items.
    LayoutHorizontalSpacing,
    /// Vertical spacing between layout items.
    LayoutVerticalSpacing,
    /// Width of the text cursor.
    TextCursorWidth,
    /// Space between a scroll view and its scroll bars.
    ScrollViewScrollBarSpacing,
    /// Overlap between a scroll view and its scroll bars.
    ScrollViewScrollBarOverlap,
    /// Horizontal overlap between a menu and its submenu.
    SubMenuOverlap,
    /// Indentation per tree level.
    TreeViewIndentation,
    /// Default header section size in either orientation.
    HeaderDefaultSectionSize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dpi_scaled() {
        assert_eq!(dpi_scaled(16, 96.0), 16);
        assert_eq!(dpi_scaled(16, 192.0), 32);
        assert_eq!(dpi_scaled(13, 144.0), 20);
        assert_eq!(dpi_scaled(9, 120.0), 11);
        assert_eq!(dpi_scaled(7, 0.0), 7);
    }
}
