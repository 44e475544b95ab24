// SPDX-License-Identifier: LGPL-3.0-only

//! The common style and the override seam in front of it.
//!
//! Every operation of [Style] has a default that forwards to the matching
//! `*_via` routine of [CommonStyle], passing [Style::front] along. The base
//! routines never call themselves directly: each cross call (a button
//! painting its bevel, a layout asking for a metric) goes through that
//! front. A derived style therefore overrides one method and every other
//! element, including the ones that embed the overridden one, picks the
//! override up.
//!
//! ```ignore
//! struct Wide(CommonStyle);
//!
//! impl Style for Wide {
//!     fn base(&self) -> &CommonStyle { &self.0 }
//!     fn front(&self) -> &dyn Style { self }
//!
//!     fn pixel_metric(&self, metric: MetricId, opt: Option<&DrawOption>) -> i32 {
//!         match metric {
//!             MetricId::ScrollBarExtent => 24,
//!             _ => self.base().pixel_metric_via(self, metric, opt),
//!         }
//!     }
//! }
//! ```

use std::fmt;
use std::sync::Arc;

use lookfeel_theme::{DefaultPlatformTheme, Palette, PlatformTheme};

use crate::asset::{AssetImage, AssetSource, IconSet, Pixmap};
use crate::cache::{LastLayoutCache, PixmapCache, DEFAULT_PIXMAP_CACHE_CAPACITY};
use crate::canvas::Canvas;
use crate::geometry::{Point, Rect, Size};
use crate::hint::{HintId, HintReturn};
use crate::kinds::{ComplexControl, ContentsType, ControlElement, IconMode, PrimitiveElement, StandardPixmap, SubControl, SubElement};
use crate::metric::MetricId;
use crate::option::DrawOption;

mod assets;
mod hints;
mod hit_test;
mod item_view;
mod metrics;
mod painter;
mod size;
mod sub_control;
mod sub_element;
mod tab_layout;

pub use item_view::{ViewItemLayout, ViewItemLayoutKey};
pub use painter::{dial_angle, dial_big_line, dial_notches};
pub use tab_layout::TabLayout;

/// The operations of a style.
///
/// Implementors provide [Style::base] and [Style::front]; everything else
/// defaults to the common algorithms.
pub trait Style: Send + Sync {
    /// The common style holding the default algorithms and the caches.
    fn base(&self) -> &CommonStyle;

    /// The style every internal cross call is routed through, normally `self`.
    fn front(&self) -> &dyn Style;

    /// Paint a primitive element.
    fn draw_primitive(&self, pe: PrimitiveElement, opt: &DrawOption, canvas: &mut dyn Canvas) {
        self.base().draw_primitive_via(self.front(), pe, opt, canvas)
    }

    /// Paint a control element.
    fn draw_control(&self, ce: ControlElement, opt: &DrawOption, canvas: &mut dyn Canvas) {
        self.base().draw_control_via(self.front(), ce, opt, canvas)
    }

    /// Paint a complex control and its requested sub-controls.
    fn draw_complex_control(&self, cc: ComplexControl, opt: &DrawOption, canvas: &mut dyn Canvas) {
        self.base().draw_complex_control_via(self.front(), cc, opt, canvas)
    }

    /// Rect of a sub-element, in the coordinates of `opt.rect`.
    fn sub_element_rect(&self, se: SubElement, opt: &DrawOption) -> Rect {
        self.base().sub_element_rect_via(self.front(), se, opt)
    }

    /// Rect of a sub-control, in the coordinates of `opt.rect`.
    fn sub_control_rect(&self, cc: ComplexControl, opt: &DrawOption, sc: SubControl) -> Rect {
        self.base().sub_control_rect_via(self.front(), cc, opt, sc)
    }

    /// The sub-control under `pt`, if any.
    fn hit_test_complex_control(&self, cc: ComplexControl, opt: &DrawOption, pt: Point) -> Option<SubControl> {
        self.base().hit_test_complex_control_via(self.front(), cc, opt, pt)
    }

    /// Outer size for the given contents size.
    fn size_from_contents(&self, ct: ContentsType, opt: &DrawOption, contents: Size) -> Size {
        self.base().size_from_contents_via(self.front(), ct, opt, contents)
    }

    /// A pixel metric, scaled to the option's resolution.
    fn pixel_metric(&self, metric: MetricId, opt: Option<&DrawOption>) -> i32 {
        self.base().pixel_metric_via(self.front(), metric, opt)
    }

    /// A behavioral hint.
    fn style_hint(&self, hint: HintId, opt: Option<&DrawOption>) -> HintReturn {
        self.base().style_hint_via(self.front(), hint, opt)
    }

    /// A single-size standard image.
    fn standard_pixmap(&self, sp: StandardPixmap, opt: Option<&DrawOption>) -> AssetImage {
        self.base().standard_pixmap_via(self.front(), sp, opt)
    }

    /// A multi-size standard icon.
    fn standard_icon(&self, sp: StandardPixmap, opt: Option<&DrawOption>) -> IconSet {
        self.base().standard_icon_via(self.front(), sp, opt)
    }

    /// Derive a disabled or selected variant of a pixmap.
    fn generated_icon_pixmap(&self, mode: IconMode, pixmap: &Pixmap, opt: &DrawOption) -> Pixmap {
        crate::icon::generated_icon_pixmap(mode, pixmap, &opt.palette)
    }

    /// The palette this style prefers.
    fn standard_palette(&self) -> Palette {
        self.base().standard_palette()
    }
}

/// The shared default algorithms, plus the caches they use.
pub struct CommonStyle {
    name: String,
    platform: Arc<dyn PlatformTheme>,
    assets: Option<Arc<dyn AssetSource>>,
    pixmaps: PixmapCache,
    view_item_layouts: LastLayoutCache<ViewItemLayoutKey, ViewItemLayout>,
}

impl CommonStyle {
    /// A common style on the default platform bridge.
    pub fn new() -> Self {
        Self {
            name: "common".to_string(),
            platform: Arc::new(DefaultPlatformTheme::new()),
            assets: None,
            pixmaps: PixmapCache::new(DEFAULT_PIXMAP_CACHE_CAPACITY),
            view_item_layouts: LastLayoutCache::new(),
        }
    }

    /// Rename the style. The name is part of every pixmap cache key.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Use another platform bridge.
    pub fn with_platform(mut self, platform: Arc<dyn PlatformTheme>) -> Self {
        self.platform = platform;
        self
    }

    /// Resolve bundled resources through `assets` when building images.
    pub fn with_assets(mut self, assets: Arc<dyn AssetSource>) -> Self {
        self.assets = Some(assets);
        self
    }

    /// Replace the pixmap cache with one of another capacity.
    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.pixmaps = PixmapCache::new(capacity);
        self
    }

    /// The style name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The platform bridge.
    pub fn platform(&self) -> &dyn PlatformTheme {
        self.platform.as_ref()
    }

    /// The bundled resource source, if any.
    pub fn assets(&self) -> Option<&dyn AssetSource> {
        self.assets.as_deref()
    }

    /// The cache of generated images.
    pub fn pixmap_cache(&self) -> &PixmapCache {
        &self.pixmaps
    }

    /// The platform palette, or the built-in light palette.
    pub fn standard_palette(&self) -> Palette {
        self.platform.palette().unwrap_or_default()
    }
}

impl Default for CommonStyle {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CommonStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommonStyle")
            .field("name", &self.name)
            .field("cached_pixmaps", &self.pixmaps.len())
            .finish_non_exhaustive()
    }
}

impl Style for CommonStyle {
    fn base(&self) -> &CommonStyle {
        self
    }

    fn front(&self) -> &dyn Style {
        self
    }
}
