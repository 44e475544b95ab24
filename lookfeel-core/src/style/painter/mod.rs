// SPDX-License-Identifier: LGPL-3.0-only

//! Painting of primitives, controls and complex controls.
//!
//! Painters emit calls against a [Canvas] only. Whenever an element is made
//! of other elements (a push button of its bevel, label and focus rect) the
//! parts are drawn through the front style in a fixed order, later parts on
//! top of earlier ones.

use std::f64::consts::PI;

use vello::peniko::Color;

use super::{CommonStyle, Style};
use crate::asset::{AssetImage, IconSet};
use crate::canvas::{Brush, Canvas};
use crate::geometry::{aligned_rect, Alignment, Direction, Rect, Size};
use crate::hint::HintId;
use crate::kinds::IconMode;
use crate::option::{DrawOption, SliderOption};
use crate::state::State;
use crate::text::{item_text_rect, strip_mnemonic};

mod complex;
mod control;
mod primitive;

pub use complex::dial_notches;

/// Needle angle of a dial in radians, counter-clockwise from three o'clock.
///
/// Wrapping dials sweep a full turn starting at the bottom. Other dials
/// sweep 300 degrees, from 240 at the minimum to -60 at the maximum, with
/// the gap at the bottom. `upside_down` reverses the direction of travel.
pub fn dial_angle(slider: &SliderOption) -> f64 {
    let range = slider.maximum as f64 - slider.minimum as f64;
    if range == 0.0 {
        return PI / 2.0;
    }
    let position = if slider.upside_down {
        slider.slider_position
    } else {
        slider.maximum - slider.slider_position
    };
    let travelled = (position as f64 - slider.minimum as f64) / range;
    if slider.dial_wrapping {
        PI * 3.0 / 2.0 - travelled * 2.0 * PI
    } else {
        (PI * 8.0 - travelled * 10.0 * PI) / 6.0
    }
}

/// Length of the long dial notches for a dial of `radius`.
pub fn dial_big_line(radius: i32) -> i32 {
    (radius / 6).max(4).min(radius / 2)
}

/// The icon mode a state paints in.
fn icon_mode(state: State) -> IconMode {
    if !state.contains(State::ENABLED) {
        IconMode::Disabled
    } else if state.contains(State::HAS_FOCUS) {
        IconMode::Active
    } else {
        IconMode::Normal
    }
}

impl CommonStyle {
    /// Draw `text` aligned in `rect`, underlining the mnemonic when the
    /// style asks for it.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn draw_item_text(
        &self,
        front: &dyn Style,
        canvas: &mut dyn Canvas,
        rect: Rect,
        alignment: Alignment,
        opt: &DrawOption,
        text: &str,
        color: Color,
    ) {
        if text.is_empty() || !rect.is_valid() {
            return;
        }
        let (plain, mnemonic) = strip_mnemonic(text);
        canvas.draw_text(rect, alignment, &plain, color);
        let Some(index) = mnemonic else {
            return;
        };
        if plain.contains('\n') || !front.style_hint(HintId::UnderlineShortcut, Some(opt)).as_bool() {
            return;
        }
        let font = opt.font.as_ref();
        let bounds = item_text_rect(font, rect, alignment, opt.direction, text);
        let prefix: String = plain.chars().take(index).collect();
        let Some(underlined) = plain.chars().nth(index) else {
            return;
        };
        let x = bounds.x + font.advance(&prefix);
        let width = font.advance(&underlined.to_string());
        canvas.fill_rect(Rect::new(x, bounds.y + font.ascent() + 1, width, 1), &Brush::Solid(color));
    }

    /// Draw `image` of `size` aligned inside `rect`.
    pub(crate) fn draw_item_image(
        &self,
        canvas: &mut dyn Canvas,
        rect: Rect,
        alignment: Alignment,
        direction: Direction,
        image: &AssetImage,
        size: Size,
    ) {
        if size.is_empty() {
            return;
        }
        canvas.draw_image(aligned_rect(direction, alignment, size, rect), image);
    }

    /// The image of `icon` closest to `extent` in the mode of `state`, and
    /// the size it paints at.
    pub(crate) fn icon_image(
        &self,
        front: &dyn Style,
        icon: &IconSet,
        extent: Size,
        opt: &DrawOption,
        mode: Option<IconMode>,
    ) -> Option<(AssetImage, Size)> {
        let image = icon.best(extent.width.max(extent.height))?;
        let size = image.size().unwrap_or(extent).bounded_to(extent);
        let mode = mode.unwrap_or_else(|| icon_mode(opt.state));
        let image = match (mode, image) {
            (IconMode::Disabled | IconMode::Selected, AssetImage::Pixmap(pixmap)) => {
                AssetImage::Pixmap(front.generated_icon_pixmap(mode, pixmap, opt))
            },
            (_, image) => image.clone(),
        };
        Some((image, size))
    }
}
