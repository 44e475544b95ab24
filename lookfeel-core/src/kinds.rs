// SPDX-License-Identifier: LGPL-3.0-only

//! Closed enumerations naming everything the style engine can draw or measure.

/// Primitive drawable elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveElement {
    /// Generic frame.
    Frame,
    /// Frame around a default button.
    FrameDefaultButton,
    /// Frame of a floating dock widget.
    FrameDockWidget,
    /// Focus rectangle.
    FrameFocusRect,
    /// Group box frame.
    FrameGroupBox,
    /// Line edit frame.
    FrameLineEdit,
    /// Menu frame.
    FrameMenu,
    /// Frame of a status bar item.
    FrameStatusBarItem,
    /// Tab widget pane frame.
    FrameTabWidget,
    /// Window frame.
    FrameWindow,
    /// Bevel frame of a button.
    FrameButtonBevel,
    /// Tool button frame.
    FrameButtonTool,
    /// Base line under a tab bar.
    FrameTabBarBase,
    /// Push button panel.
    PanelButtonCommand,
    /// Generic bevel button panel.
    PanelButtonBevel,
    /// Tool button panel.
    PanelButtonTool,
    /// Menu bar panel.
    PanelMenuBar,
    /// Tool bar panel.
    PanelToolBar,
    /// Line edit panel.
    PanelLineEdit,
    /// Down arrow.
    IndicatorArrowDown,
    /// Left arrow.
    IndicatorArrowLeft,
    /// Right arrow.
    IndicatorArrowRight,
    /// Up arrow.
    IndicatorArrowUp,
    /// Tree branch lines and the expand marker.
    IndicatorBranch,
    /// Drop-down part of a tool button.
    IndicatorButtonDropDown,
    /// Check indicator of a view item.
    IndicatorItemViewItemCheck,
    /// Check box indicator.
    IndicatorCheckBox,
    /// Resize handle of a dock widget.
    IndicatorDockWidgetResizeHandle,
    /// Header sort arrow.
    IndicatorHeaderArrow,
    /// Check mark of a checkable menu item.
    IndicatorMenuCheckMark,
    /// One progress bar chunk.
    IndicatorProgressChunk,
    /// Radio button indicator.
    IndicatorRadioButton,
    /// Spin box down symbol.
    IndicatorSpinDown,
    /// Spin box minus symbol.
    IndicatorSpinMinus,
    /// Spin box plus symbol.
    IndicatorSpinPlus,
    /// Spin box up symbol.
    IndicatorSpinUp,
    /// Tool bar drag handle.
    IndicatorToolBarHandle,
    /// Tool bar separator.
    IndicatorToolBarSeparator,
    /// Tool tip panel.
    PanelTipLabel,
    /// Tear indicator at the leading edge of a scrolled tab bar.
    IndicatorTabTear,
    /// Tear indicator at the trailing edge of a scrolled tab bar.
    IndicatorTabTearRight,
    /// Corner between two scroll bars.
    PanelScrollAreaCorner,
    /// Plain widget background.
    Widget,
    /// Column view arrow.
    IndicatorColumnViewArrow,
    /// Drop position indicator in item views.
    IndicatorItemViewItemDrop,
    /// Background of a view item.
    PanelItemViewItem,
    /// Background of a view row.
    PanelItemViewRow,
    /// Status bar panel.
    PanelStatusBar,
    /// Tab close button.
    IndicatorTabClose,
    /// Menu panel.
    PanelMenu,
}

/// Composite controls made of several primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlElement {
    /// Push button: bevel, label and focus rect.
    PushButton,
    /// Push button bevel and default indicator.
    PushButtonBevel,
    /// Push button text and icon.
    PushButtonLabel,
    /// Check box: indicator, label and focus rect.
    CheckBox,
    /// Check box text and icon.
    CheckBoxLabel,
    /// Radio button: indicator, label and focus rect.
    RadioButton,
    /// Radio button text and icon.
    RadioButtonLabel,
    /// Tab: shape and label.
    TabBarTab,
    /// Tab shape.
    TabBarTabShape,
    /// Tab text and icon.
    TabBarTabLabel,
    /// Progress bar: groove, contents and label.
    ProgressBar,
    /// Progress bar groove.
    ProgressBarGroove,
    /// Progress bar fill.
    ProgressBarContents,
    /// Progress bar text.
    ProgressBarLabel,
    /// Menu item.
    MenuItem,
    /// Menu scroll area.
    MenuScroller,
    /// Vertical menu margin.
    MenuVMargin,
    /// Horizontal menu margin.
    MenuHMargin,
    /// Menu tear-off line.
    MenuTearoff,
    /// Empty area of a menu.
    MenuEmptyArea,
    /// Menu bar item.
    MenuBarItem,
    /// Empty area of a menu bar.
    MenuBarEmptyArea,
    /// Tool button text, icon or arrow.
    ToolButtonLabel,
    /// Header: section and label.
    Header,
    /// Header section background.
    HeaderSection,
    /// Header text and icon.
    HeaderLabel,
    /// Tool box tab.
    ToolBoxTab,
    /// Window size grip.
    SizeGrip,
    /// Splitter handle.
    Splitter,
    /// Rubber band selection.
    RubberBand,
    /// Dock widget title bar.
    DockWidgetTitle,
    /// Scroll bar button that steps forward.
    ScrollBarAddLine,
    /// Scroll bar button that steps back.
    ScrollBarSubLine,
    /// Scroll bar groove after the slider.
    ScrollBarAddPage,
    /// Scroll bar groove before the slider.
    ScrollBarSubPage,
    /// Scroll bar slider.
    ScrollBarSlider,
    /// Scroll bar button that jumps to the start.
    ScrollBarFirst,
    /// Scroll bar button that jumps to the end.
    ScrollBarLast,
    /// Focus frame.
    FocusFrame,
    /// Combo box current text and icon.
    ComboBoxLabel,
    /// Tool bar.
    ToolBar,
    /// Tool box tab shape.
    ToolBoxTabShape,
    /// Tool box tab text and icon.
    ToolBoxTabLabel,
    /// Header area past the last section.
    HeaderEmptyArea,
    /// Column view resize grip.
    ColumnViewGrip,
    /// View item.
    ItemViewItem,
    /// Frame with a shape and a shadow.
    ShapedFrame,
}

/// Controls with independently addressable interactive parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComplexControl {
    /// Spin box.
    SpinBox,
    /// Combo box.
    ComboBox,
    /// Scroll bar.
    ScrollBar,
    /// Slider.
    Slider,
    /// Tool button.
    ToolButton,
    /// Window title bar.
    TitleBar,
    /// Dial.
    Dial,
    /// Group box.
    GroupBox,
    /// MDI window buttons in a menu bar.
    MdiControls,
}

impl ComplexControl {
    /// The sub-controls of this control, in hit-test priority order.
    pub fn sub_controls(&self) -> &'static [SubControl] {
        use SubControl::*;
        match self {
            ComplexControl::SpinBox => &[SpinBoxUp, SpinBoxDown, SpinBoxEditField, SpinBoxFrame],
            ComplexControl::ComboBox => &[ComboBoxArrow, ComboBoxEditField, ComboBoxFrame, ComboBoxListBoxPopup],
            ComplexControl::ScrollBar => &[
                ScrollBarSlider,
                ScrollBarAddLine,
                ScrollBarSubLine,
                ScrollBarFirst,
                ScrollBarLast,
                ScrollBarAddPage,
                ScrollBarSubPage,
                ScrollBarGroove,
            ],
            ComplexControl::Slider => &[SliderHandle, SliderGroove, SliderTickmarks],
            ComplexControl::ToolButton => &[ToolButton, ToolButtonMenu],
            ComplexControl::TitleBar => &[
                TitleBarSysMenu,
                TitleBarMin,
                TitleBarMax,
                TitleBarClose,
                TitleBarNormal,
                TitleBarShade,
                TitleBarUnshade,
                TitleBarContextHelp,
                TitleBarLabel,
            ],
            ComplexControl::Dial => &[DialHandle, DialGroove, DialTickmarks],
            ComplexControl::GroupBox => &[GroupBoxCheckBox, GroupBoxLabel, GroupBoxContents, GroupBoxFrame],
            ComplexControl::MdiControls => &[MdiMinButton, MdiNormalButton, MdiCloseButton],
        }
    }
}

/// One addressable part of a [ComplexControl].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum SubControl {
    /// Spin box up button.
    SpinBoxUp,
    /// Spin box down button.
    SpinBoxDown,
    /// Spin box frame.
    SpinBoxFrame,
    /// Spin box text field.
    SpinBoxEditField,
    /// Combo box frame.
    ComboBoxFrame,
    /// Combo box text field.
    ComboBoxEditField,
    /// Combo box arrow button.
    ComboBoxArrow,
    /// Combo box popup.
    ComboBoxListBoxPopup,
    /// Scroll bar forward button.
    ScrollBarAddLine,
    /// Scroll bar back button.
    ScrollBarSubLine,
    /// Scroll bar groove after the slider.
    ScrollBarAddPage,
    /// Scroll bar groove before the slider.
    ScrollBarSubPage,
    /// Scroll bar start button.
    ScrollBarFirst,
    /// Scroll bar end button.
    ScrollBarLast,
    /// Scroll bar slider.
    ScrollBarSlider,
    /// Scroll bar groove.
    ScrollBarGroove,
    /// Slider groove.
    SliderGroove,
    /// Slider handle.
    SliderHandle,
    /// Slider tick marks.
    SliderTickmarks,
    /// Tool button body.
    ToolButton,
    /// Tool button menu arrow.
    ToolButtonMenu,
    /// Title bar system menu button.
    TitleBarSysMenu,
    /// Title bar minimize button.
    TitleBarMin,
    /// Title bar maximize button.
    TitleBarMax,
    /// Title bar close button.
    TitleBarClose,
    /// Title bar restore button.
    TitleBarNormal,
    /// Title bar shade button.
    TitleBarShade,
    /// Title bar unshade button.
    TitleBarUnshade,
    /// Title bar help button.
    TitleBarContextHelp,
    /// Title bar caption.
    TitleBarLabel,
    /// Dial groove.
    DialGroove,
    /// Dial handle.
    DialHandle,
    /// Dial notches.
    DialTickmarks,
    /// Group box check box.
    GroupBoxCheckBox,
    /// Group box title.
    GroupBoxLabel,
    /// Group box contents area.
    GroupBoxContents,
    /// Group box frame.
    GroupBoxFrame,
    /// MDI minimize button.
    MdiMinButton,
    /// MDI restore button.
    MdiNormalButton,
    /// MDI close button.
    MdiCloseButton,
}

impl SubControl {
    /// The complex control owning this sub-control.
    pub fn owner(&self) -> ComplexControl {
        use SubControl::*;
        match self {
            SpinBoxUp | SpinBoxDown | SpinBoxFrame | SpinBoxEditField => ComplexControl::SpinBox,
            ComboBoxFrame | ComboBoxEditField | ComboBoxArrow | ComboBoxListBoxPopup => ComplexControl::ComboBox,
            ScrollBarAddLine | ScrollBarSubLine | ScrollBarAddPage | ScrollBarSubPage | ScrollBarFirst
            | ScrollBarLast | ScrollBarSlider | ScrollBarGroove => ComplexControl::ScrollBar,
            SliderGroove | SliderHandle | SliderTickmarks => ComplexControl::Slider,
            ToolButton | ToolButtonMenu => ComplexControl::ToolButton,
            TitleBarSysMenu | TitleBarMin | TitleBarMax | TitleBarClose | TitleBarNormal | TitleBarShade
            | TitleBarUnshade | TitleBarContextHelp | TitleBarLabel => ComplexControl::TitleBar,
            DialGroove | DialHandle | DialTickmarks => ComplexControl::Dial,
            GroupBoxCheckBox | GroupBoxLabel | GroupBoxContents | GroupBoxFrame => ComplexControl::GroupBox,
            MdiMinButton | MdiNormalButton | MdiCloseButton => ComplexControl::MdiControls,
        }
    }

    fn bit(&self) -> u64 {
        1u64 << (*self as u8)
    }
}

/// A set of sub-controls, used for the requested and active part masks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubControls(u64);

impl SubControls {
    /// Every sub-control.
    pub const ALL: SubControls = SubControls(u64::MAX);

    /// No sub-control.
    pub const fn empty() -> Self {
        SubControls(0)
    }

    /// True if `sc` is in the set.
    pub fn contains(&self, sc: SubControl) -> bool {
        self.0 & sc.bit() != 0
    }

    /// True if the set holds nothing.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Add a sub-control.
    pub fn insert(&mut self, sc: SubControl) {
        self.0 |= sc.bit();
    }

    /// Remove a sub-control.
    pub fn remove(&mut self, sc: SubControl) {
        self.0 &= !sc.bit();
    }

    /// Builder form of [SubControls::insert].
    pub fn with(mut self, sc: SubControl) -> Self {
        self.insert(sc);
        self
    }
}

impl Default for SubControls {
    fn default() -> Self {
        SubControls::ALL
    }
}

impl From<SubControl> for SubControls {
    fn from(sc: SubControl) -> Self {
        SubControls(sc.bit())
    }
}

impl FromIterator<SubControl> for SubControls {
    fn from_iter<T: IntoIterator<Item = SubControl>>(iter: T) -> Self {
        iter.into_iter().fold(SubControls::empty(), SubControls::with)
    }
}

/// Named rectangles inside simple controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubElement {
    /// Area for a push button's label.
    PushButtonContents,
    /// Push button focus rect.
    PushButtonFocusRect,
    /// Push button rect for layouts.
    PushButtonLayoutItem,
    /// Push button bevel.
    PushButtonBevel,
    /// Check box indicator.
    CheckBoxIndicator,
    /// Check box label area.
    CheckBoxContents,
    /// Check box focus rect.
    CheckBoxFocusRect,
    /// Clickable area of a check box.
    CheckBoxClickRect,
    /// Check box rect for layouts.
    CheckBoxLayoutItem,
    /// Radio button indicator.
    RadioButtonIndicator,
    /// Radio button label area.
    RadioButtonContents,
    /// Radio button focus rect.
    RadioButtonFocusRect,
    /// Clickable area of a radio button.
    RadioButtonClickRect,
    /// Radio button rect for layouts.
    RadioButtonLayoutItem,
    /// Combo box focus rect.
    ComboBoxFocusRect,
    /// Combo box rect for layouts.
    ComboBoxLayoutItem,
    /// Slider focus rect.
    SliderFocusRect,
    /// Slider rect for layouts.
    SliderLayoutItem,
    /// Progress bar groove.
    ProgressBarGroove,
    /// Progress bar fill area.
    ProgressBarContents,
    /// Progress bar text area.
    ProgressBarLabel,
    /// Progress bar rect for layouts.
    ProgressBarLayoutItem,
    /// Tool box tab label area.
    ToolBoxTabContents,
    /// Header label area.
    HeaderLabel,
    /// Header sort arrow.
    HeaderArrow,
    /// Tab bar inside a tab widget.
    TabWidgetTabBar,
    /// Tab widget pane.
    TabWidgetTabPane,
    /// Tab widget contents inside the pane frame.
    TabWidgetTabContents,
    /// Leading corner widget of a tab widget.
    TabWidgetLeftCorner,
    /// Trailing corner widget of a tab widget.
    TabWidgetRightCorner,
    /// Tab widget rect for layouts.
    TabWidgetLayoutItem,
    /// View item check indicator.
    ItemViewItemCheckIndicator,
    /// View item icon.
    ItemViewItemDecoration,
    /// View item text.
    ItemViewItemText,
    /// View item focus rect.
    ItemViewItemFocusRect,
    /// Leading tear indicator of a scrolled tab bar.
    TabBarTearIndicatorLeft,
    /// Trailing tear indicator of a scrolled tab bar.
    TabBarTearIndicatorRight,
    /// Tab bar scroll-back button.
    TabBarScrollLeftButton,
    /// Tab bar scroll-forward button.
    TabBarScrollRightButton,
    /// Widget on the leading side of a tab.
    TabBarTabLeftButton,
    /// Widget on the trailing side of a tab.
    TabBarTabRightButton,
    /// Tab text area.
    TabBarTabText,
    /// Tree view expand marker.
    TreeViewDisclosureItem,
    /// Line edit text area.
    LineEditContents,
    /// Frame contents.
    FrameContents,
    /// Frame rect for layouts.
    FrameLayoutItem,
    /// Shaped frame contents.
    ShapedFrameContents,
    /// Dock widget close button.
    DockWidgetCloseButton,
    /// Dock widget float button.
    DockWidgetFloatButton,
    /// Dock widget title text.
    DockWidgetTitleBarText,
    /// Dock widget icon.
    DockWidgetIcon,
    /// Spin box rect for layouts.
    SpinBoxLayoutItem,
    /// Tool button rect for layouts.
    ToolButtonLayoutItem,
    /// Group box rect for layouts.
    GroupBoxLayoutItem,
    /// Label rect for layouts.
    LabelLayoutItem,
    /// Date-time edit rect for layouts.
    DateTimeEditLayoutItem,
    /// Tool bar drag handle.
    ToolBarHandle,
}

/// Content kinds for size computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentsType {
    /// Push button.
    PushButton,
    /// Check box.
    CheckBox,
    /// Radio button.
    RadioButton,
    /// Tool button.
    ToolButton,
    /// Combo box.
    ComboBox,
    /// Splitter handle.
    Splitter,
    /// Progress bar.
    ProgressBar,
    /// Menu item.
    MenuItem,
    /// Menu bar item.
    MenuBarItem,
    /// Menu bar.
    MenuBar,
    /// Menu.
    Menu,
    /// Tab.
    TabBarTab,
    /// Slider.
    Slider,
    /// Scroll bar.
    ScrollBar,
    /// Line edit.
    LineEdit,
    /// Spin box.
    SpinBox,
    /// Size grip.
    SizeGrip,
    /// Tab widget.
    TabWidget,
    /// Dialog button box.
    DialogButtons,
    /// Header section.
    HeaderSection,
    /// Group box.
    GroupBox,
    /// MDI window buttons.
    MdiControls,
    /// View item.
    ItemViewItem,
    /// Frame.
    Frame,
}

/// Conceptual icons and pixmaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StandardPixmap {
    /// Title bar menu icon.
    TitleBarMenuButton,
    /// Title bar minimize icon.
    TitleBarMinButton,
    /// Title bar maximize icon.
    TitleBarMaxButton,
    /// Title bar close icon.
    TitleBarCloseButton,
    /// Title bar restore icon.
    TitleBarNormalButton,
    /// Title bar shade icon.
    TitleBarShadeButton,
    /// Title bar unshade icon.
    TitleBarUnshadeButton,
    /// Title bar help icon.
    TitleBarContextHelpButton,
    /// Dock widget close icon.
    DockWidgetCloseButton,
    /// Information message icon.
    MessageBoxInformation,
    /// Warning message icon.
    MessageBoxWarning,
    /// Critical message icon.
    MessageBoxCritical,
    /// Question message icon.
    MessageBoxQuestion,
    /// Desktop.
    DesktopIcon,
    /// Trash.
    TrashIcon,
    /// Computer.
    ComputerIcon,
    /// Floppy drive.
    DriveFDIcon,
    /// Hard drive.
    DriveHDIcon,
    /// CD drive.
    DriveCDIcon,
    /// DVD drive.
    DriveDVDIcon,
    /// Network drive.
    DriveNetIcon,
    /// Open folder.
    DirOpenIcon,
    /// Closed folder.
    DirClosedIcon,
    /// Link to a folder.
    DirLinkIcon,
    /// Link to an open folder.
    DirLinkOpenIcon,
    /// File.
    FileIcon,
    /// Link to a file.
    FileLinkIcon,
    /// Extension button of a horizontal tool bar.
    ToolBarHorizontalExtensionButton,
    /// Extension button of a vertical tool bar.
    ToolBarVerticalExtensionButton,
    /// File dialog start location.
    FileDialogStart,
    /// File dialog end location.
    FileDialogEnd,
    /// File dialog parent folder.
    FileDialogToParent,
    /// File dialog new folder.
    FileDialogNewFolder,
    /// File dialog detail view.
    FileDialogDetailedView,
    /// File dialog info view.
    FileDialogInfoView,
    /// File dialog contents view.
    FileDialogContentsView,
    /// File dialog list view.
    FileDialogListView,
    /// File dialog back.
    FileDialogBack,
    /// Folder.
    DirIcon,
    /// OK button.
    DialogOkButton,
    /// Cancel button.
    DialogCancelButton,
    /// Help button.
    DialogHelpButton,
    /// Open button.
    DialogOpenButton,
    /// Save button.
    DialogSaveButton,
    /// Close button.
    DialogCloseButton,
    /// Apply button.
    DialogApplyButton,
    /// Reset button.
    DialogResetButton,
    /// Discard button.
    DialogDiscardButton,
    /// Yes button.
    DialogYesButton,
    /// No button.
    DialogNoButton,
    /// Up arrow.
    ArrowUp,
    /// Down arrow.
    ArrowDown,
    /// Left arrow.
    ArrowLeft,
    /// Right arrow.
    ArrowRight,
    /// Back arrow, mirrored for right-to-left.
    ArrowBack,
    /// Forward arrow, mirrored for right-to-left.
    ArrowForward,
    /// Home folder.
    DirHomeIcon,
    /// Command link arrow.
    CommandLink,
    /// Elevation shield.
    VistaShield,
    /// Reload.
    BrowserReload,
    /// Stop loading.
    BrowserStop,
    /// Play.
    MediaPlay,
    /// Stop.
    MediaStop,
    /// Pause.
    MediaPause,
    /// Skip forward.
    MediaSkipForward,
    /// Skip backward.
    MediaSkipBackward,
    /// Seek forward.
    MediaSeekForward,
    /// Seek backward.
    MediaSeekBackward,
    /// Volume.
    MediaVolume,
    /// Muted volume.
    MediaVolumeMuted,
    /// Line edit clear button.
    LineEditClearButton,
    /// Yes to all button.
    DialogYesToAllButton,
    /// No to all button.
    DialogNoToAllButton,
    /// Save all button.
    DialogSaveAllButton,
    /// Abort button.
    DialogAbortButton,
    /// Retry button.
    DialogRetryButton,
    /// Ignore button.
    DialogIgnoreButton,
    /// Restore defaults button.
    RestoreDefaultsButton,
}

/// Icon rendering modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IconMode {
    /// Default look.
    #[default]
    Normal,
    /// Greyed out.
    Disabled,
    /// Hovered or otherwise highlighted.
    Active,
    /// Part of a selection.
    Selected,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_sub_control_belongs_to_its_owner() {
        for cc in [
            ComplexControl::SpinBox,
            ComplexControl::ComboBox,
            ComplexControl::ScrollBar,
            ComplexControl::Slider,
            ComplexControl::ToolButton,
            ComplexControl::TitleBar,
            ComplexControl::Dial,
            ComplexControl::GroupBox,
            ComplexControl::MdiControls,
        ] {
            for sc in cc.sub_controls() {
                assert_eq!(sc.owner(), cc);
            }
        }
    }

    #[test]
    fn test_sub_control_mask() {
        let mut mask: SubControls = [SubControl::TitleBarClose, SubControl::TitleBarSysMenu].into_iter().collect();
        assert!(mask.contains(SubControl::TitleBarClose));
        assert!(!mask.contains(SubControl::TitleBarMin));
        mask.remove(SubControl::TitleBarClose);
        assert!(!mask.contains(SubControl::TitleBarClose));
        assert!(SubControls::default().contains(SubControl::MdiCloseButton));
    }
}
