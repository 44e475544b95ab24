// SPDX-License-Identifier: LGPL-3.0-only

use bitflags::bitflags;
use lookfeel_theme::ColorGroup;

bitflags! {
    /// Interaction and presentation state of the element being styled.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct State: u32 {
        /// The element accepts input.
        const ENABLED = 1 << 0;
        /// The element is drawn raised.
        const RAISED = 1 << 1;
        /// The element is pressed.
        const SUNKEN = 1 << 2;
        /// The element is unchecked.
        const OFF = 1 << 3;
        /// The element is partially checked.
        const NO_CHANGE = 1 << 4;
        /// The element is checked.
        const ON = 1 << 5;
        /// A drop-down arrow is pressed.
        const DOWN_ARROW = 1 << 6;
        /// The element is laid out horizontally.
        const HORIZONTAL = 1 << 7;
        /// The element has keyboard focus.
        const HAS_FOCUS = 1 << 8;
        /// Top edge marker.
        const TOP = 1 << 9;
        /// Bottom edge marker.
        const BOTTOM = 1 << 10;
        /// The focus is drawn at the border.
        const FOCUS_AT_BORDER = 1 << 11;
        /// The element raises on hover only.
        const AUTO_RAISE = 1 << 12;
        /// The pointer is over the element.
        const MOUSE_OVER = 1 << 13;
        /// An up arrow is pressed.
        const UP_ARROW = 1 << 14;
        /// The element is selected.
        const SELECTED = 1 << 15;
        /// The window holding the element is active.
        const ACTIVE = 1 << 16;
        /// The element is a window.
        const WINDOW = 1 << 17;
        /// A tree branch is expanded.
        const OPEN = 1 << 18;
        /// A tree branch has children.
        const CHILDREN = 1 << 19;
        /// A tree branch connects to an item.
        const ITEM = 1 << 20;
        /// A tree branch continues to a sibling.
        const SIBLING = 1 << 21;
        /// The element is being edited.
        const EDITING = 1 << 22;
        /// Focus arrived from the keyboard.
        const KEYBOARD_FOCUS_CHANGE = 1 << 23;
        /// The element is read only.
        const READ_ONLY = 1 << 25;
        /// Small size variant.
        const SMALL = 1 << 26;
        /// Mini size variant.
        const MINI = 1 << 27;
    }
}

impl State {
    /// The palette group this state renders with.
    ///
    /// Disabled wins over inactive, so a disabled element in an inactive
    /// window still uses the disabled colors.
    pub fn color_group(&self) -> ColorGroup {
        if !self.contains(State::ENABLED) {
            ColorGroup::Disabled
        } else if !self.contains(State::ACTIVE) {
            ColorGroup::Inactive
        } else {
            ColorGroup::Active
        }
    }

    /// True if the element is pressed or checked.
    pub fn is_down(&self) -> bool {
        self.intersects(State::SUNKEN | State::ON)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_group() {
        assert_eq!(State::empty().color_group(), ColorGroup::Disabled);
        assert_eq!(State::ENABLED.color_group(), ColorGroup::Inactive);
        assert_eq!((State::ENABLED | State::ACTIVE).color_group(), ColorGroup::Active);
        assert_eq!(State::ACTIVE.color_group(), ColorGroup::Disabled);
    }
}
