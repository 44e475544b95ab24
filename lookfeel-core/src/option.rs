// SPDX-License-Identifier: LGPL-3.0-only

//! Option bags: the per-call context handed to every style operation.
//!
//! A [DrawOption] carries what every element needs (state, rect, palette,
//! direction and font) plus a [Payload] with the fields of one control
//! family. Routines asked to handle an option without the payload they
//! expect skip their customization and fall back to the generic path.

use std::fmt;
use std::sync::Arc;

use bitflags::bitflags;
use lookfeel_theme::Palette;
use vello::peniko::Color;

use crate::asset::IconSet;
use crate::canvas::Brush;
use crate::geometry::{Alignment, Direction, Orientation, Rect, Size};
use crate::kinds::SubControls;
use crate::metric::REFERENCE_DPI;
use crate::state::State;
use crate::text::{ElideMode, FixedFontMetrics, FontMetrics};

/// Per-call context for paint, measure and hit-test calls.
///
/// Built fresh by the caller for every call and never mutated by the
/// engine. Painters that need a modified copy for a sub-element clone it.
#[derive(Clone)]
pub struct DrawOption {
    /// Interaction and presentation state.
    pub state: State,
    /// Bounds of the element in canvas coordinates.
    pub rect: Rect,
    /// Colors to paint with.
    pub palette: Palette,
    /// Layout direction.
    pub direction: Direction,
    /// Metrics of the font text is drawn in.
    pub font: Arc<dyn FontMetrics>,
    /// Resolution the absolute metrics are scaled to.
    pub dpi: f64,
    /// Parts of a complex control the caller wants drawn.
    pub sub_controls: SubControls,
    /// Parts of a complex control that are pressed or hovered.
    pub active_sub_controls: SubControls,
    /// Control specific fields.
    pub payload: Payload,
}

impl DrawOption {
    /// An option for `rect` with default state, palette and font.
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            ..Default::default()
        }
    }

    /// Set the state flags.
    pub fn with_state(mut self, state: State) -> Self {
        self.state = state;
        self
    }

    /// Set the rect.
    pub fn with_rect(mut self, rect: Rect) -> Self {
        self.rect = rect;
        self
    }

    /// Set the palette.
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Set the direction.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Set the font metrics.
    pub fn with_font(mut self, font: Arc<dyn FontMetrics>) -> Self {
        self.font = font;
        self
    }

    /// Set the resolution.
    pub fn with_dpi(mut self, dpi: f64) -> Self {
        self.dpi = dpi;
        self
    }

    /// Set the requested sub-controls.
    pub fn with_sub_controls(mut self, sub_controls: impl Into<SubControls>) -> Self {
        self.sub_controls = sub_controls.into();
        self
    }

    /// Set the active sub-controls.
    pub fn with_active_sub_controls(mut self, active: impl Into<SubControls>) -> Self {
        self.active_sub_controls = active.into();
        self
    }

    /// Set the payload.
    pub fn with_payload(mut self, payload: impl Into<Payload>) -> Self {
        self.payload = payload.into();
        self
    }

    /// The palette switched to the color group of the current state.
    pub fn state_palette(&self) -> Palette {
        self.palette.with_group(self.state.color_group())
    }

    /// Button fields, if present.
    pub fn button(&self) -> Option<&ButtonOption> {
        match &self.payload {
            Payload::Button(b) => Some(b),
            _ => None,
        }
    }

    /// Tool button fields, if present.
    pub fn tool_button(&self) -> Option<&ToolButtonOption> {
        match &self.payload {
            Payload::ToolButton(b) => Some(b),
            _ => None,
        }
    }

    /// Slider, scroll bar or dial fields, if present.
    pub fn slider(&self) -> Option<&SliderOption> {
        match &self.payload {
            Payload::Slider(s) => Some(s),
            _ => None,
        }
    }

    /// Spin box fields, if present.
    pub fn spin_box(&self) -> Option<&SpinBoxOption> {
        match &self.payload {
            Payload::SpinBox(s) => Some(s),
            _ => None,
        }
    }

    /// Combo box fields, if present.
    pub fn combo_box(&self) -> Option<&ComboBoxOption> {
        match &self.payload {
            Payload::ComboBox(c) => Some(c),
            _ => None,
        }
    }

    /// Title bar fields, if present.
    pub fn title_bar(&self) -> Option<&TitleBarOption> {
        match &self.payload {
            Payload::TitleBar(t) => Some(t),
            _ => None,
        }
    }

    /// Group box fields, if present.
    pub fn group_box(&self) -> Option<&GroupBoxOption> {
        match &self.payload {
            Payload::GroupBox(g) => Some(g),
            _ => None,
        }
    }

    /// Tab fields, if present.
    pub fn tab(&self) -> Option<&TabOption> {
        match &self.payload {
            Payload::Tab(t) => Some(t),
            _ => None,
        }
    }

    /// Tab bar base fields, if present.
    pub fn tab_bar_base(&self) -> Option<&TabBarBaseOption> {
        match &self.payload {
            Payload::TabBarBase(t) => Some(t),
            _ => None,
        }
    }

    /// Tab widget frame fields, if present.
    pub fn tab_widget_frame(&self) -> Option<&TabWidgetFrameOption> {
        match &self.payload {
            Payload::TabWidgetFrame(t) => Some(t),
            _ => None,
        }
    }

    /// Header section fields, if present.
    pub fn header(&self) -> Option<&HeaderOption> {
        match &self.payload {
            Payload::Header(h) => Some(h),
            _ => None,
        }
    }

    /// Progress bar fields, if present.
    pub fn progress_bar(&self) -> Option<&ProgressBarOption> {
        match &self.payload {
            Payload::ProgressBar(p) => Some(p),
            _ => None,
        }
    }

    /// Menu item fields, if present.
    pub fn menu_item(&self) -> Option<&MenuItemOption> {
        match &self.payload {
            Payload::MenuItem(m) => Some(m),
            _ => None,
        }
    }

    /// Frame fields, if present.
    pub fn frame(&self) -> Option<&FrameOption> {
        match &self.payload {
            Payload::Frame(f) => Some(f),
            _ => None,
        }
    }

    /// Dock widget title fields, if present.
    pub fn dock_widget(&self) -> Option<&DockWidgetOption> {
        match &self.payload {
            Payload::DockWidget(d) => Some(d),
            _ => None,
        }
    }

    /// Item view fields, if present.
    pub fn view_item(&self) -> Option<&ViewItemOption> {
        match &self.payload {
            Payload::ViewItem(v) => Some(v),
            _ => None,
        }
    }

    /// Tool box tab fields, if present.
    pub fn tool_box(&self) -> Option<&ToolBoxOption> {
        match &self.payload {
            Payload::ToolBox(t) => Some(t),
            _ => None,
        }
    }

    /// Tool bar fields, if present.
    pub fn tool_bar(&self) -> Option<&ToolBarOption> {
        match &self.payload {
            Payload::ToolBar(t) => Some(t),
            _ => None,
        }
    }

    /// Rubber band fields, if present.
    pub fn rubber_band(&self) -> Option<&RubberBandOption> {
        match &self.payload {
            Payload::RubberBand(r) => Some(r),
            _ => None,
        }
    }

    /// Focus rect fields, if present.
    pub fn focus_rect(&self) -> Option<&FocusRectOption> {
        match &self.payload {
            Payload::FocusRect(f) => Some(f),
            _ => None,
        }
    }

    /// Size grip fields, if present.
    pub fn size_grip(&self) -> Option<&SizeGripOption> {
        match &self.payload {
            Payload::SizeGrip(s) => Some(s),
            _ => None,
        }
    }
}

impl Default for DrawOption {
    fn default() -> Self {
        Self {
            state: State::ENABLED | State::ACTIVE,
            rect: Rect::default(),
            palette: Palette::default(),
            direction: Direction::LeftToRight,
            font: Arc::new(FixedFontMetrics::default()),
            dpi: REFERENCE_DPI,
            sub_controls: SubControls::ALL,
            active_sub_controls: SubControls::empty(),
            payload: Payload::None,
        }
    }
}

impl fmt::Debug for DrawOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DrawOption")
            .field("state", &self.state)
            .field("rect", &self.rect)
            .field("direction", &self.direction)
            .field("dpi", &self.dpi)
            .field("payload", &self.payload)
            .finish_non_exhaustive()
    }
}

/// Control family specific fields of a [DrawOption].
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Payload {
    /// Only the common fields.
    #[default]
    None,
    /// Push buttons, check boxes and radio buttons.
    Button(ButtonOption),
    /// Tool buttons.
    ToolButton(ToolButtonOption),
    /// Shared by sliders, scroll bars and dials.
    Slider(SliderOption),
    /// Spin boxes.
    SpinBox(SpinBoxOption),
    /// Combo boxes.
    ComboBox(ComboBoxOption),
    /// Title bars.
    TitleBar(TitleBarOption),
    /// Group boxes.
    GroupBox(GroupBoxOption),
    /// Tabs.
    Tab(TabOption),
    /// Tab bar base lines.
    TabBarBase(TabBarBaseOption),
    /// Tab widget panes.
    TabWidgetFrame(TabWidgetFrameOption),
    /// Header sections.
    Header(HeaderOption),
    /// Progress bars.
    ProgressBar(ProgressBarOption),
    /// Menu and menu bar items.
    MenuItem(MenuItemOption),
    /// Frames.
    Frame(FrameOption),
    /// Dock widget title bars.
    DockWidget(DockWidgetOption),
    /// Item view entries.
    ViewItem(ViewItemOption),
    /// Tool box tabs.
    ToolBox(ToolBoxOption),
    /// Tool bars.
    ToolBar(ToolBarOption),
    /// Rubber bands.
    RubberBand(RubberBandOption),
    /// Focus rects.
    FocusRect(FocusRectOption),
    /// Size grips.
    SizeGrip(SizeGripOption),
}

macro_rules! payload_from {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Payload {
                fn from(value: $ty) -> Self {
                    Payload::$variant(value)
                }
            }
        )*
    };
}

payload_from! {
    Button => ButtonOption,
    ToolButton => ToolButtonOption,
    Slider => SliderOption,
    SpinBox => SpinBoxOption,
    ComboBox => ComboBoxOption,
    TitleBar => TitleBarOption,
    GroupBox => GroupBoxOption,
    Tab => TabOption,
    TabBarBase => TabBarBaseOption,
    TabWidgetFrame => TabWidgetFrameOption,
    Header => HeaderOption,
    ProgressBar => ProgressBarOption,
    MenuItem => MenuItemOption,
    Frame => FrameOption,
    DockWidget => DockWidgetOption,
    ViewItem => ViewItemOption,
    ToolBox => ToolBoxOption,
    ToolBar => ToolBarOption,
    RubberBand => RubberBandOption,
    FocusRect => FocusRectOption,
    SizeGrip => SizeGripOption,
}

bitflags! {
    /// Push button variants.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct ButtonFeatures: u8 {
        /// No bevel unless pressed.
        const FLAT = 1 << 0;
        /// A menu indicator is shown.
        const HAS_MENU = 1 << 1;
        /// The button is the dialog default.
        const DEFAULT_BUTTON = 1 << 2;
        /// The button becomes default when focused.
        const AUTO_DEFAULT = 1 << 3;
        /// A command link button.
        const COMMAND_LINK_BUTTON = 1 << 4;
    }
}

/// Push buttons, check boxes and radio buttons.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ButtonOption {
    /// Button variants.
    pub features: ButtonFeatures,
    /// Label, with `&` mnemonics.
    pub text: String,
    /// Icon shown before the label.
    pub icon: Option<IconSet>,
    /// Icon size; an invalid size means the button icon size.
    pub icon_size: Size,
}

bitflags! {
    /// Tool button variants.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct ToolButtonFeatures: u8 {
        /// An arrow replaces the icon.
        const ARROW = 1 << 0;
        /// A separate menu button is shown.
        const MENU = 1 << 1;
        /// Same bit as [ToolButtonFeatures::MENU].
        const MENU_BUTTON_POPUP = 1 << 1;
        /// The menu pops up after a delay instead of on its own button.
        const POPUP_DELAY = 1 << 2;
        /// A menu is attached.
        const HAS_MENU = 1 << 3;
    }
}

/// Direction of an arrow glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ArrowType {
    /// No arrow.
    #[default]
    NoArrow,
    /// Pointing up.
    Up,
    /// Pointing down.
    Down,
    /// Pointing left.
    Left,
    /// Pointing right.
    Right,
}

/// How a tool button arranges icon and text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ToolButtonStyle {
    /// Icon only.
    #[default]
    IconOnly,
    /// Text only.
    TextOnly,
    /// Text next to the icon.
    TextBesideIcon,
    /// Text below the icon.
    TextUnderIcon,
    /// Defer to the platform setting.
    FollowStyle,
}

/// Tool buttons.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToolButtonOption {
    /// Tool button variants.
    pub features: ToolButtonFeatures,
    /// Arrow drawn instead of the icon.
    pub arrow_type: ArrowType,
    /// Arrangement of icon and text.
    pub tool_button_style: ToolButtonStyle,
    /// Label.
    pub text: String,
    /// Icon.
    pub icon: Option<IconSet>,
    /// Icon size.
    pub icon_size: Size,
}

/// Where slider tick marks are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TickPosition {
    /// No tick marks.
    #[default]
    NoTicks,
    /// Above a horizontal slider, left of a vertical one.
    Above,
    /// Below a horizontal slider, right of a vertical one.
    Below,
    /// On both sides.
    BothSides,
}

impl TickPosition {
    /// True if ticks are drawn on the top or left side.
    pub fn above(&self) -> bool {
        matches!(self, TickPosition::Above | TickPosition::BothSides)
    }

    /// True if ticks are drawn on the bottom or right side.
    pub fn below(&self) -> bool {
        matches!(self, TickPosition::Below | TickPosition::BothSides)
    }
}

/// Sliders, scroll bars and dials.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderOption {
    /// Orientation of the groove.
    pub orientation: Orientation,
    /// Lowest value.
    pub minimum: i32,
    /// Highest value.
    pub maximum: i32,
    /// Where tick marks go.
    pub tick_position: TickPosition,
    /// Value distance between ticks; 0 means the page step.
    pub tick_interval: i32,
    /// Maximum at the top or left instead of the bottom or right.
    pub upside_down: bool,
    /// Position of the handle, in value units.
    pub slider_position: i32,
    /// Current value; differs from the position while dragging without tracking.
    pub slider_value: i32,
    /// Step of arrow keys and line buttons.
    pub single_step: i32,
    /// Step of page keys and groove clicks.
    pub page_step: i32,
    /// Target pixel distance between dial notches.
    pub notch_target: f64,
    /// Dial wraps around from maximum to minimum.
    pub dial_wrapping: bool,
}

impl Default for SliderOption {
    fn default() -> Self {
        Self {
            orientation: Orientation::Horizontal,
            minimum: 0,
            maximum: 99,
            tick_position: TickPosition::NoTicks,
            tick_interval: 0,
            upside_down: false,
            slider_position: 0,
            slider_value: 0,
            single_step: 1,
            page_step: 10,
            notch_target: 3.7,
            dial_wrapping: false,
        }
    }
}

/// What a spin box shows on its buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ButtonSymbols {
    /// Arrows.
    #[default]
    UpDownArrows,
    /// Plus and minus signs.
    PlusMinus,
    /// No buttons.
    NoButtons,
}

bitflags! {
    /// Which spin box steps are possible.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct StepEnabled: u8 {
        /// Stepping up is possible.
        const UP = 1 << 0;
        /// Stepping down is possible.
        const DOWN = 1 << 1;
    }
}

/// Spin boxes.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinBoxOption {
    /// Symbols on the buttons.
    pub button_symbols: ButtonSymbols,
    /// Which steps are possible.
    pub step_enabled: StepEnabled,
    /// Draw a frame.
    pub frame: bool,
}

impl Default for SpinBoxOption {
    fn default() -> Self {
        Self {
            button_symbols: ButtonSymbols::UpDownArrows,
            step_enabled: StepEnabled::all(),
            frame: true,
        }
    }
}

/// Combo boxes.
#[derive(Debug, Clone, PartialEq)]
pub struct ComboBoxOption {
    /// The text can be edited.
    pub editable: bool,
    /// Draw a frame.
    pub frame: bool,
    /// Text of the current item.
    pub current_text: String,
    /// Icon of the current item.
    pub current_icon: Option<IconSet>,
    /// Icon size.
    pub icon_size: Size,
}

impl Default for ComboBoxOption {
    fn default() -> Self {
        Self {
            editable: false,
            frame: true,
            current_text: String::new(),
            current_icon: None,
            icon_size: Size::square(16),
        }
    }
}

bitflags! {
    /// Window state shown by a title bar.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct TitleBarState: u8 {
        /// The window is minimized.
        const MINIMIZED = 1 << 0;
        /// The window is maximized.
        const MAXIMIZED = 1 << 1;
    }
}

bitflags! {
    /// Capabilities of the window a title bar belongs to.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct TitleBarFlags: u16 {
        /// A system menu and close button.
        const SYSTEM_MENU = 1 << 0;
        /// A minimize button.
        const MINIMIZE = 1 << 1;
        /// A maximize button.
        const MAXIMIZE = 1 << 2;
        /// A help button.
        const CONTEXT_HELP = 1 << 3;
        /// A shade button.
        const SHADE = 1 << 4;
        /// A caption.
        const TITLE = 1 << 5;
        /// A tool window with a reduced title bar.
        const TOOL = 1 << 6;
    }
}

/// Title bars of sub windows.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TitleBarOption {
    /// Caption.
    pub text: String,
    /// Window icon.
    pub icon: Option<IconSet>,
    /// Window state.
    pub title_bar_state: TitleBarState,
    /// Window capabilities.
    pub flags: TitleBarFlags,
}

bitflags! {
    /// Frame variants.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct FrameFeatures: u8 {
        /// No frame lines.
        const FLAT = 1 << 0;
        /// Rounded corners.
        const ROUNDED = 1 << 1;
    }
}

/// Group boxes.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupBoxOption {
    /// Title, with `&` mnemonics.
    pub text: String,
    /// Alignment of the title.
    pub text_alignment: Alignment,
    /// Overrides the label color.
    pub text_color: Option<Color>,
    /// Frame line width.
    pub line_width: i32,
    /// Width of the middle frame line.
    pub mid_line_width: i32,
    /// Frame variants.
    pub features: FrameFeatures,
}

impl Default for GroupBoxOption {
    fn default() -> Self {
        Self {
            text: String::new(),
            text_alignment: Alignment::LEFT,
            text_color: None,
            line_width: 1,
            mid_line_width: 0,
            features: FrameFeatures::empty(),
        }
    }
}

/// Shape and side of a tab bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TabShape {
    /// Rounded tabs above the pane.
    #[default]
    RoundedNorth,
    /// Rounded tabs below the pane.
    RoundedSouth,
    /// Rounded tabs left of the pane.
    RoundedWest,
    /// Rounded tabs right of the pane.
    RoundedEast,
    /// Triangular tabs above the pane.
    TriangularNorth,
    /// Triangular tabs below the pane.
    TriangularSouth,
    /// Triangular tabs left of the pane.
    TriangularWest,
    /// Triangular tabs right of the pane.
    TriangularEast,
}

/// The side of the tab widget the tab bar sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabSide {
    /// Above.
    North,
    /// Below.
    South,
    /// Left.
    West,
    /// Right.
    East,
}

impl TabShape {
    /// The side the shape belongs to.
    pub fn side(&self) -> TabSide {
        match self {
            TabShape::RoundedNorth | TabShape::TriangularNorth => TabSide::North,
            TabShape::RoundedSouth | TabShape::TriangularSouth => TabSide::South,
            TabShape::RoundedWest | TabShape::TriangularWest => TabSide::West,
            TabShape::RoundedEast | TabShape::TriangularEast => TabSide::East,
        }
    }

    /// True for tabs running top to bottom.
    pub fn is_vertical(&self) -> bool {
        matches!(self.side(), TabSide::West | TabSide::East)
    }

    /// True for the triangular family.
    pub fn is_triangular(&self) -> bool {
        matches!(
            self,
            TabShape::TriangularNorth | TabShape::TriangularSouth | TabShape::TriangularWest | TabShape::TriangularEast
        )
    }
}

/// Position of a tab in its row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TabPosition {
    /// First tab.
    #[default]
    Beginning,
    /// Neither first nor last.
    Middle,
    /// Last tab.
    End,
    /// The only tab.
    OnlyOneTab,
}

/// Relation of a tab to the selected tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SelectedPosition {
    /// The selected tab is not a neighbour.
    #[default]
    NotAdjacent,
    /// The next tab is selected.
    NextIsSelected,
    /// The previous tab is selected.
    PreviousIsSelected,
}

bitflags! {
    /// Corner widgets next to a tab bar.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct CornerWidgets: u8 {
        /// A widget at the leading corner.
        const LEFT = 1 << 0;
        /// A widget at the trailing corner.
        const RIGHT = 1 << 1;
    }
}

/// One tab of a tab bar.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TabOption {
    /// Shape and side.
    pub shape: TabShape,
    /// Label, with `&` mnemonics.
    pub text: String,
    /// Icon.
    pub icon: Option<IconSet>,
    /// Requested icon size; an invalid size means the small icon size.
    pub icon_size: Size,
    /// Position in the row.
    pub position: TabPosition,
    /// Relation to the selected tab.
    pub selected_position: SelectedPosition,
    /// Corner widgets next to the bar.
    pub corner_widgets: CornerWidgets,
    /// Size of the leading button, empty if none.
    pub left_button_size: Size,
    /// Size of the trailing button, empty if none.
    pub right_button_size: Size,
    /// Tabs are drawn in document mode.
    pub document_mode: bool,
}

/// The base line under a tab bar.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TabBarBaseOption {
    /// Shape of the tabs.
    pub shape: TabShape,
    /// Rect of the tab bar.
    pub tab_bar_rect: Rect,
    /// Rect of the selected tab.
    pub selected_tab_rect: Rect,
}

/// The pane of a tab widget.
#[derive(Debug, Clone, PartialEq)]
pub struct TabWidgetFrameOption {
    /// Shape of the tabs.
    pub shape: TabShape,
    /// Frame line width.
    pub line_width: i32,
    /// Width of the middle frame line.
    pub mid_line_width: i32,
    /// Size of the tab bar.
    pub tab_bar_size: Size,
    /// Size of the leading corner widget.
    pub left_corner_widget_size: Size,
    /// Size of the trailing corner widget.
    pub right_corner_widget_size: Size,
}

impl Default for TabWidgetFrameOption {
    fn default() -> Self {
        Self {
            shape: TabShape::RoundedNorth,
            line_width: 2,
            mid_line_width: 0,
            tab_bar_size: Size::default(),
            left_corner_widget_size: Size::default(),
            right_corner_widget_size: Size::default(),
        }
    }
}

/// Sort marker of a header section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortIndicator {
    /// No marker.
    #[default]
    None,
    /// Ascending.
    SortUp,
    /// Descending.
    SortDown,
}

/// Position of a header section among its siblings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SectionPosition {
    /// First section.
    #[default]
    Beginning,
    /// Neither first nor last.
    Middle,
    /// Last section.
    End,
    /// The only section.
    OnlyOneSection,
}

/// Header sections of item views.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderOption {
    /// Logical section index.
    pub section: i32,
    /// Label.
    pub text: String,
    /// Alignment of the label.
    pub text_alignment: Alignment,
    /// Icon.
    pub icon: Option<IconSet>,
    /// Alignment of the icon.
    pub icon_alignment: Alignment,
    /// Position among the sections.
    pub position: SectionPosition,
    /// Sort marker.
    pub sort_indicator: SortIndicator,
    /// Orientation of the header.
    pub orientation: Orientation,
}

impl Default for HeaderOption {
    fn default() -> Self {
        Self {
            section: 0,
            text: String::new(),
            text_alignment: Alignment::LEFT,
            icon: None,
            icon_alignment: Alignment::LEFT,
            position: SectionPosition::Beginning,
            sort_indicator: SortIndicator::None,
            orientation: Orientation::Horizontal,
        }
    }
}

/// Progress bars.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressBarOption {
    /// Lowest value.
    pub minimum: i32,
    /// Highest value; equal to the minimum for a busy bar.
    pub maximum: i32,
    /// Current value.
    pub progress: i32,
    /// Label.
    pub text: String,
    /// Alignment of the label.
    pub text_alignment: Alignment,
    /// Draw the label.
    pub text_visible: bool,
    /// Orientation of the bar.
    pub orientation: Orientation,
    /// Fill from the trailing end.
    pub inverted_appearance: bool,
    /// Vertical text reads bottom to top.
    pub bottom_to_top: bool,
}

impl Default for ProgressBarOption {
    fn default() -> Self {
        Self {
            minimum: 0,
            maximum: 100,
            progress: 0,
            text: String::new(),
            text_alignment: Alignment::LEFT,
            text_visible: false,
            orientation: Orientation::Horizontal,
            inverted_appearance: false,
            bottom_to_top: false,
        }
    }
}

/// Kind of a menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MenuItemType {
    /// Plain item.
    #[default]
    Normal,
    /// Default item, drawn bold.
    DefaultItem,
    /// Separator line.
    Separator,
    /// Item opening a submenu.
    SubMenu,
    /// Scroll area of a long menu.
    Scroller,
    /// Tear-off line.
    TearOff,
    /// Menu margin.
    Margin,
    /// Area past the last item.
    EmptyArea,
}

/// Checkability of a menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CheckType {
    /// Not checkable.
    #[default]
    NotCheckable,
    /// Checkable as part of a group.
    Exclusive,
    /// Independently checkable.
    NonExclusive,
}

/// Menu and menu bar items.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MenuItemOption {
    /// Kind of entry.
    pub menu_item_type: MenuItemType,
    /// Checkability.
    pub check_type: CheckType,
    /// Checked state.
    pub checked: bool,
    /// Some entry of the menu is checkable.
    pub menu_has_checkable_items: bool,
    /// Label; a tab separates the shortcut text.
    pub text: String,
    /// Icon.
    pub icon: Option<IconSet>,
    /// Widest icon in the menu.
    pub max_icon_width: i32,
    /// Width reserved for shortcut text.
    pub tab_width: i32,
}

/// Shape of a generic frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FrameShape {
    /// No frame.
    #[default]
    NoFrame,
    /// A box around the contents.
    Box,
    /// A raised or sunken panel.
    Panel,
    /// A panel in the style's look.
    StyledPanel,
    /// A horizontal line.
    HLine,
    /// A vertical line.
    VLine,
    /// A two-pixel bevel panel.
    WinPanel,
}

/// Frames, line edits and panels.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameOption {
    /// Frame line width.
    pub line_width: i32,
    /// Width of the middle frame line.
    pub mid_line_width: i32,
    /// Frame variants.
    pub features: FrameFeatures,
    /// Shape of the frame.
    pub frame_shape: FrameShape,
}

impl Default for FrameOption {
    fn default() -> Self {
        Self {
            line_width: 1,
            mid_line_width: 0,
            features: FrameFeatures::empty(),
            frame_shape: FrameShape::NoFrame,
        }
    }
}

/// Dock widget title bars.
#[derive(Debug, Clone, PartialEq)]
pub struct DockWidgetOption {
    /// Title.
    pub title: String,
    /// Has a close button.
    pub closable: bool,
    /// Can be moved.
    pub movable: bool,
    /// Can float.
    pub floatable: bool,
    /// Title bar runs vertically.
    pub vertical_title_bar: bool,
}

impl Default for DockWidgetOption {
    fn default() -> Self {
        Self {
            title: String::new(),
            closable: true,
            movable: false,
            floatable: false,
            vertical_title_bar: false,
        }
    }
}

bitflags! {
    /// What an item view entry shows.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct ViewItemFeatures: u8 {
        /// Text wraps.
        const WRAP_TEXT = 1 << 0;
        /// Row uses the alternate base color.
        const ALTERNATE = 1 << 1;
        /// Shows a check indicator.
        const HAS_CHECK_INDICATOR = 1 << 2;
        /// Shows text.
        const HAS_DISPLAY = 1 << 3;
        /// Shows an icon.
        const HAS_DECORATION = 1 << 4;
    }
}

/// Check state of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CheckState {
    /// Not checked.
    #[default]
    Unchecked,
    /// Some children checked.
    PartiallyChecked,
    /// Checked.
    Checked,
}

/// Where the decoration sits relative to the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DecorationPosition {
    /// Before the text.
    #[default]
    Left,
    /// After the text.
    Right,
    /// Above the text.
    Top,
    /// Below the text.
    Bottom,
}

/// Entries of list, tree and table views.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewItemOption {
    /// What the entry shows.
    pub features: ViewItemFeatures,
    /// Check state.
    pub check_state: CheckState,
    /// Alignment of the text.
    pub display_alignment: Alignment,
    /// Alignment of the icon.
    pub decoration_alignment: Alignment,
    /// Where the text is elided.
    pub text_elide_mode: ElideMode,
    /// Where the icon sits.
    pub decoration_position: DecorationPosition,
    /// Icon size.
    pub decoration_size: Size,
    /// Selection highlight covers the decoration too.
    pub show_decoration_selected: bool,
    /// Text.
    pub text: String,
    /// Icon.
    pub icon: Option<IconSet>,
    /// Background drawn under the entry.
    pub background_brush: Option<Brush>,
}

impl Default for ViewItemOption {
    fn default() -> Self {
        Self {
            features: ViewItemFeatures::empty(),
            check_state: CheckState::Unchecked,
            display_alignment: Alignment::LEFT | Alignment::VCENTER,
            decoration_alignment: Alignment::LEFT,
            text_elide_mode: ElideMode::Right,
            decoration_position: DecorationPosition::Left,
            decoration_size: Size::default(),
            show_decoration_selected: false,
            text: String::new(),
            icon: None,
            background_brush: None,
        }
    }
}

/// Tool box tabs.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToolBoxOption {
    /// Label.
    pub text: String,
    /// Icon.
    pub icon: Option<IconSet>,
    /// Position among the tabs.
    pub position: TabPosition,
    /// Relation to the selected tab.
    pub selected_position: SelectedPosition,
}

bitflags! {
    /// Tool bar variants.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct ToolBarFeatures: u8 {
        /// The tool bar can be moved.
        const MOVABLE = 1 << 0;
    }
}

/// Tool bars.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolBarOption {
    /// Tool bar variants.
    pub features: ToolBarFeatures,
    /// Frame line width.
    pub line_width: i32,
    /// Width of the middle frame line.
    pub mid_line_width: i32,
}

impl Default for ToolBarOption {
    fn default() -> Self {
        Self {
            features: ToolBarFeatures::empty(),
            line_width: 1,
            mid_line_width: 0,
        }
    }
}

/// Shape of a rubber band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RubberBandShape {
    /// A line.
    Line,
    /// A rectangle.
    #[default]
    Rectangle,
}

/// Rubber band selections.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RubberBandOption {
    /// Shape.
    pub shape: RubberBandShape,
    /// Drawn opaque.
    pub opaque: bool,
}

/// Focus rectangles.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FocusRectOption {
    /// Color the focus rect is drawn over; picks a contrasting pen.
    pub background_color: Option<Color>,
}

/// A corner of a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Corner {
    /// Top left.
    TopLeft,
    /// Top right.
    TopRight,
    /// Bottom left.
    BottomLeft,
    /// Bottom right.
    #[default]
    BottomRight,
}

/// Size grips.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SizeGripOption {
    /// Corner the grip sits in.
    pub corner: Corner,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_accessors_match_variant() {
        let opt = DrawOption::new(Rect::new(0, 0, 10, 10)).with_payload(SliderOption::default());
        assert!(opt.slider().is_some());
        assert!(opt.button().is_none());
        assert!(opt.tab().is_none());
    }

    #[test]
    fn test_defaults() {
        let opt = DrawOption::default();
        assert!(opt.state.contains(State::ENABLED | State::ACTIVE));
        assert_eq!(opt.dpi, REFERENCE_DPI);
        assert!(opt.active_sub_controls.is_empty());
        assert!(SpinBoxOption::default().step_enabled.contains(StepEnabled::UP | StepEnabled::DOWN));
    }

    #[test]
    fn test_tab_shape_sides() {
        assert!(TabShape::TriangularEast.is_vertical());
        assert!(TabShape::TriangularEast.is_triangular());
        assert!(!TabShape::RoundedSouth.is_vertical());
        assert_eq!(TabShape::RoundedWest.side(), TabSide::West);
        assert!(TickPosition::BothSides.above() && TickPosition::BothSides.below());
    }
}
