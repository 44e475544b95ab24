// SPDX-License-Identifier: LGPL-3.0-only

#![warn(missing_docs)]

//! A pluggable look-and-feel engine for Rust UI toolkits.
//!
//! The [CommonStyle](core::style::CommonStyle) answers every metric, hint,
//! sub-element and sub-control query, and paints every element onto any
//! [Canvas](core::canvas::Canvas). Concrete styles wrap it and override only
//! what they change; [FusionStyle](fusion::FusionStyle) is one.

pub use vello::peniko as color;

pub use lookfeel_core as core;
pub use lookfeel_fusion as fusion;
#[cfg(feature = "services")]
pub use lookfeel_services as services;
pub use lookfeel_theme as theme;

/// A "prelude" for users of the lookfeel engine.
///
/// Importing this module brings into scope the types needed to query and
/// paint with a style.
///
/// ```rust
/// use lookfeel::prelude::*;
///
/// let style = CommonStyle::new();
/// let opt = DrawOption::new(Rect::new(0, 0, 80, 24));
/// assert!(style.pixel_metric(MetricId::ButtonMargin, Some(&opt)) > 0);
/// ```
pub mod prelude {
    pub use crate::core::canvas::{Canvas, Picture};
    pub use crate::core::geometry::{Direction, Orientation, Point, Rect, Size};
    pub use crate::core::hint::{HintId, HintReturn};
    pub use crate::core::kinds::{
        ComplexControl, ContentsType, ControlElement, PrimitiveElement, StandardPixmap, SubControl,
        SubControls, SubElement,
    };
    pub use crate::core::metric::MetricId;
    pub use crate::core::option::DrawOption;
    pub use crate::core::scene::SceneCanvas;
    pub use crate::core::state::State;
    pub use crate::core::style::{CommonStyle, Style};
    pub use crate::fusion::FusionStyle;

    // Theme
    pub use crate::theme::{ColorGroup, ColorRole, Palette, PlatformTheme, ThemeResolver};

    // Services
    #[cfg(feature = "services")]
    pub use crate::services::{SettingsRegistry, StyleSelector, XdgPlatformTheme};

    // Color
    pub use crate::core::vg::peniko::Color;
}
