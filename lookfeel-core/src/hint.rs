// SPDX-License-Identifier: LGPL-3.0-only

//! Behavioral hint identifiers and their answers.

use lookfeel_theme::ColorRole;

use crate::canvas::Pen;
use crate::geometry::Region;

/// Mouse button bit for the left button.
pub const LEFT_BUTTON: i32 = 0x1;
/// Mouse button bit for the middle button.
pub const MIDDLE_BUTTON: i32 = 0x4;
/// Tab selection happens on press.
pub const MOUSE_BUTTON_PRESS: i32 = 2;
/// Focus by tab and click.
pub const STRONG_FOCUS: i32 = 11;
/// Close button on the trailing side of a tab.
pub const CLOSE_BUTTON_RIGHT: i32 = 1;
/// The control keyboard modifier.
pub const CONTROL_MODIFIER: i32 = 0x0400_0000;
/// Do not elide tab text.
pub const ELIDE_NONE: i32 = 3;

/// Named behavioral policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HintId {
    /// Disabled text is drawn etched.
    EtchDisabledText,
    /// Disabled text is dithered.
    DitherDisabledText,
    /// A middle click jumps the slider to the pointer.
    ScrollBarMiddleClickAbsolutePosition,
    /// Auto-repeat continues after the pointer leaves the control.
    ScrollBarScrollWhenPointerLeavesControl,
    /// Mouse event that selects a tab.
    TabBarSelectMouseType,
    /// Mouse event that expands a list view item.
    ListViewExpandSelectMouseType,
    /// Alignment of the tabs in a tab widget.
    TabBarAlignment,
    /// Alignment of the header sort arrow.
    HeaderArrowAlignment,
    /// The title of the current tool box page is bold.
    ToolBoxSelectedPageTitleBold,
    /// Title bars have no border.
    TitleBarNoBorder,
    /// Title bar buttons raise under the pointer.
    TitleBarAutoRaise,
    /// A modified window shows a marker in its title.
    TitleBarModifyNotification,
    /// Mouse buttons that set a slider to the clicked value.
    SliderAbsoluteSetButtons,
    /// Mouse buttons that page a slider.
    SliderPageSetButtons,
    /// The slider handle snaps to values.
    SliderSnapToValue,
    /// Scroll bars have a context menu.
    ScrollBarContextMenu,
    /// Pressing rolls between the two arrow buttons.
    ScrollBarRollBetweenButtons,
    /// Scroll bars hide while idle.
    ScrollBarTransient,
    /// Vertical alignment of the group box title.
    GroupBoxTextLabelVerticalAlignment,
    /// Color of the group box title.
    GroupBoxTextLabelColor,
    /// Disabled menu items can be highlighted.
    MenuAllowActiveAndDisabled,
    /// Space activates the highlighted menu item.
    MenuSpaceActivatesItem,
    /// Delay before a submenu opens, in milliseconds.
    MenuSubMenuPopupDelay,
    /// Menus scroll instead of growing past the screen.
    MenuScrollable,
    /// Submenus stay open while the pointer moves toward them.
    MenuSloppySubMenus,
    /// Sloppy submenus only track movement toward the submenu.
    MenuSubMenuUniDirection,
    /// Wrong-direction moves tolerated before closing a submenu.
    MenuSubMenuUniDirectionFailCount,
    /// Other items can be selected during sloppy tracking.
    MenuSubMenuSloppySelectOtherActions,
    /// Delay before a sloppy submenu closes, in milliseconds.
    MenuSubMenuSloppyCloseTimeout,
    /// Sloppy tracking resets when the pointer re-enters the parent.
    MenuSubMenuResetWhenReenteringParent,
    /// Sloppy tracking does not start when the pointer leaves a menu.
    MenuSubMenuDontStartSloppyOnLeave,
    /// Typing searches menu items.
    MenuKeyboardSearch,
    /// Keyboard selection wraps around in menus.
    MenuSelectionWrap,
    /// Scrolling menus fill the screen.
    MenuFillScreenWithScroll,
    /// A triggered menu item flashes.
    MenuFlashTriggeredItem,
    /// Menus fade out when hidden.
    MenuFadeOutOnHide,
    /// Alt focuses the menu bar.
    MenuBarAltKeyNavigation,
    /// Menu bars track the pointer.
    MenuBarMouseTracking,
    /// Menus track the pointer.
    MenuMouseTracking,
    /// Combo box popups track the pointer.
    ComboBoxListMouseTracking,
    /// Combo boxes open a popup menu instead of a list.
    ComboBoxPopup,
    /// Layout direction of combo box popups.
    ComboBoxLayoutDirection,
    /// The wheel changes a combo box's current item.
    ComboBoxAllowWheelScrolling,
    /// The progress dialog cancel button is centered.
    ProgressDialogCenterCancelButton,
    /// The text cursor blinks over a selection.
    BlinkCursorWhenTextSelected,
    /// Rich text wraps at word boundaries.
    RichTextWordWrap,
    /// Color of table grid lines.
    TableGridLineColor,
    /// Character shown for password input.
    LineEditPasswordCharacter,
    /// Delay before a typed password character is masked.
    LineEditPasswordMaskDelay,
    /// Mnemonics are underlined.
    UnderlineShortcut,
    /// Spin box buttons animate when pressed.
    SpinBoxAnimateButton,
    /// Key auto-repeat interval of spin boxes, in milliseconds.
    SpinBoxKeyPressAutoRepeatRate,
    /// Click auto-repeat interval of spin boxes, in milliseconds.
    SpinBoxClickAutoRepeatRate,
    /// Delay before click auto-repeat starts, in milliseconds.
    SpinBoxClickAutoRepeatThreshold,
    /// Spin buttons are disabled at the range limits.
    SpinControlsDisableOnBounds,
    /// Spin box buttons sit inside the frame.
    SpinBoxButtonsInsideFrame,
    /// Modifier that speeds up spin box steps.
    SpinBoxStepModifier,
    /// Tool tip opacity, 0 to 255.
    ToolTipLabelOpacity,
    /// Delay before a tool tip shows, in milliseconds.
    ToolTipWakeUpDelay,
    /// Delay before tool tips need to wake up again, in milliseconds.
    ToolTipFallAsleepDelay,
    /// A separator is drawn below the menu bar.
    DrawMenuBarSeparator,
    /// Focus policy of buttons.
    ButtonFocusPolicy,
    /// Delay before a tool button menu pops up, in milliseconds.
    ToolButtonPopupDelay,
    /// Default tool button style.
    ToolButtonStyle,
    /// Mask of the focus frame.
    FocusFrameMask,
    /// The focus frame stacks above its widget.
    FocusFrameAboveWidget,
    /// Mask of a rubber band.
    RubberBandMask,
    /// Palette role of the dial background.
    DialBackgroundRole,
    /// Where item view text is elided.
    ItemViewEllipsisLocation,
    /// The selection covers the item decoration.
    ItemViewShowDecorationSelected,
    /// A single click activates an item.
    ItemViewActivateItemOnSingleClick,
    /// Highlight colors follow the view's focus.
    ItemViewChangeHighlightOnFocus,
    /// Right arrow moves into a tree item's children.
    ItemViewArrowKeysNavigateIntoChildren,
    /// The current item can move without changing the selection.
    ItemViewMovementWithoutUpdatingSelection,
    /// Editors in item views draw a frame.
    ItemViewDrawDelegateFrame,
    /// Default scroll mode of item views.
    ItemViewScrollMode,
    /// Where tab text is elided.
    TabBarElideMode,
    /// Side of a tab that holds its close button.
    TabBarCloseButtonPosition,
    /// Delay before a drag-over changes the current tab, in milliseconds.
    TabBarChangeCurrentDelay,
    /// Platform order of dialog buttons.
    DialogButtonLayout,
    /// Dialog buttons show icons.
    DialogButtonBoxButtonsHaveIcons,
    /// Text format marking the focused anchor.
    TextControlFocusIndicatorTextCharFormat,
    /// Row wrap policy of form layouts.
    FormLayoutWrapPolicy,
    /// Field growth policy of form layouts.
    FormLayoutFieldGrowthPolicy,
    /// Alignment of the form inside a form layout.
    FormLayoutFormAlignment,
    /// Alignment of form layout labels.
    FormLayoutLabelAlignment,
    /// Dock widget title buttons have a frame.
    DockWidgetButtonsHaveFrame,
    /// Message box buttons are centered.
    MessageBoxCenterButtons,
    /// Message boxes space buttons with the border width.
    MessageBoxUseBorderForButtonSpacing,
    /// Text interaction flags of message box labels.
    MessageBoxTextInteractionFlags,
    /// Tool bars can be moved.
    ToolBarMovable,
    /// Splitters resize live while dragging.
    SplitterOpaqueResize,
    /// Title bar buttons show tool tips.
    TitleBarShowToolTipsOnButtons,
    /// Controls animate.
    WidgetAnimate,
    /// Animation duration in milliseconds, 0 when animations are off.
    WidgetAnimationDuration,
    /// Frames are drawn with a 3D bevel.
    Widget3DFrame,
    /// Mask of the window frame.
    WindowFrameMaskRegion,
}

/// Answer of a style hint.
///
/// Most hints are plain integers. A few carry a rich value that the
/// caller needs alongside the integer.
#[derive(Debug, Clone, PartialEq)]
pub enum HintReturn {
    /// Plain integer, flag set or enum value.
    Int(i32),
    /// A palette role.
    Role(ColorRole),
    /// A clip mask.
    Mask {
        /// Integer answer.
        value: i32,
        /// Region to clip to.
        region: Region,
    },
    /// Decoration of text that shows focus.
    TextFormat {
        /// Integer answer.
        value: i32,
        /// Outline drawn around the focused text.
        outline: Pen,
    },
}

impl HintReturn {
    /// The integer part of the answer.
    ///
    /// Roles answer their discriminant so integer callers keep working.
    pub fn as_int(&self) -> i32 {
        match self {
            HintReturn::Int(v) => *v,
            HintReturn::Role(role) => *role as i32,
            HintReturn::Mask { value, .. } | HintReturn::TextFormat { value, .. } => *value,
        }
    }

    /// The integer as a flag.
    pub fn as_bool(&self) -> bool {
        self.as_int() != 0
    }

    /// The mask region, if this is a mask answer.
    pub fn region(&self) -> Option<&Region> {
        match self {
            HintReturn::Mask { region, .. } => Some(region),
            _ => None,
        }
    }
}

impl From<i32> for HintReturn {
    fn from(value: i32) -> Self {
        HintReturn::Int(value)
    }
}

impl From<bool> for HintReturn {
    fn from(value: bool) -> Self {
        HintReturn::Int(value as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;

    #[test]
    fn test_hint_return_int_views() {
        assert_eq!(HintReturn::from(true).as_int(), 1);
        let mask = HintReturn::Mask {
            value: 1,
            region: Region::from_rect(Rect::new(0, 0, 4, 4)),
        };
        assert!(mask.as_bool());
        assert!(mask.region().is_some());
        assert!(HintReturn::Int(0).region().is_none());
    }
}
