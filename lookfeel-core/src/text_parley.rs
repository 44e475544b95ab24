// SPDX-License-Identifier: LGPL-3.0-only

//! Font metrics and text drawing backed by parley.

use std::fmt;
use std::sync::{Mutex, PoisonError};

use parley::fontique::{Collection, CollectionOptions};
use parley::{FontContext, Layout, LayoutContext, StyleProperty};
use vello::kurbo::Affine;
use vello::peniko::{Brush, Color, Fill};
use vello::Scene;

use crate::geometry::{Alignment, Rect};
use crate::scene::TextSink;
use crate::text::FontMetrics;

struct Contexts {
    font_cx: FontContext,
    layout_cx: LayoutContext<[u8; 4]>,
}

impl Contexts {
    fn new() -> Self {
        Self {
            font_cx: FontContext {
                collection: Collection::new(CollectionOptions {
                    system_fonts: true,
                    ..Default::default()
                }),
                source_cache: Default::default(),
            },
            layout_cx: LayoutContext::new(),
        }
    }

    fn layout(&mut self, text: &str, font_size: f32) -> Layout<[u8; 4]> {
        let mut builder = self.layout_cx.ranged_builder(&mut self.font_cx, text, 1.0, true);
        builder.push_default(StyleProperty::FontSize(font_size));
        let mut layout = builder.build(text);
        layout.break_all_lines(None);
        layout
    }
}

/// [FontMetrics] measured with the system fonts at one size.
pub struct ParleyFontMetrics {
    font_size: f32,
    ascent: i32,
    descent: i32,
    leading: i32,
    contexts: Mutex<Contexts>,
}

impl ParleyFontMetrics {
    /// Measure the default system font at `font_size` pixels.
    pub fn new(font_size: f32) -> Self {
        let mut contexts = Contexts::new();
        let sample = contexts.layout("Xg", font_size);
        let (ascent, descent, leading) = sample
            .lines()
            .next()
            .map(|line| {
                let m = line.metrics();
                (m.ascent.ceil() as i32, m.descent.ceil() as i32, m.leading.round() as i32)
            })
            .unwrap_or_else(|| {
                // No fonts found; approximate from the size.
                let size = font_size.ceil() as i32;
                (size * 4 / 5, size / 5 + 1, 0)
            });
        Self {
            font_size,
            ascent,
            descent,
            leading,
            contexts: Mutex::new(contexts),
        }
    }

    /// The font size in pixels.
    pub fn font_size(&self) -> f32 {
        self.font_size
    }
}

impl fmt::Debug for ParleyFontMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParleyFontMetrics")
            .field("font_size", &self.font_size)
            .field("ascent", &self.ascent)
            .field("descent", &self.descent)
            .finish()
    }
}

impl FontMetrics for ParleyFontMetrics {
    fn ascent(&self) -> i32 {
        self.ascent
    }

    fn descent(&self) -> i32 {
        self.descent
    }

    fn leading(&self) -> i32 {
        self.leading
    }

    fn advance(&self, text: &str) -> i32 {
        if text.is_empty() {
            return 0;
        }
        let mut contexts = self.contexts.lock().unwrap_or_else(PoisonError::into_inner);
        contexts.layout(text, self.font_size).full_width().ceil() as i32
    }
}

/// A [TextSink] that shapes with parley and emits vello glyph runs.
pub struct ParleyText {
    font_size: f32,
    hint: bool,
    contexts: Contexts,
}

impl ParleyText {
    /// Draw text at `font_size` pixels.
    pub fn new(font_size: f32) -> Self {
        Self {
            font_size,
            hint: true,
            contexts: Contexts::new(),
        }
    }
}

impl TextSink for ParleyText {
    fn draw_text(&mut self, scene: &mut Scene, transform: Affine, rect: Rect, alignment: Alignment, text: &str, color: Color) {
        if text.is_empty() {
            return;
        }
        let layout = self.contexts.layout(text, self.font_size);
        let width = layout.full_width() as f64;
        let height = layout.height() as f64;

        let x = if alignment.contains(Alignment::RIGHT) {
            rect.x as f64 + rect.width as f64 - width
        } else if alignment.contains(Alignment::HCENTER) {
            rect.x as f64 + (rect.width as f64 - width) / 2.0
        } else {
            rect.x as f64
        };
        let y = if alignment.contains(Alignment::BOTTOM) {
            rect.y as f64 + rect.height as f64 - height
        } else if alignment.contains(Alignment::VCENTER) {
            rect.y as f64 + (rect.height as f64 - height) / 2.0
        } else {
            rect.y as f64
        };
        let transform = transform * Affine::translate((x.round(), y.round()));
        let brush = Brush::Solid(color);

        for line in layout.lines() {
            for item in line.items() {
                let parley::PositionedLayoutItem::GlyphRun(glyph_run) = item else {
                    continue;
                };
                let mut gx = glyph_run.offset();
                let gy = glyph_run.baseline();
                let run = glyph_run.run();
                let synthesis = run.synthesis();
                let glyph_xform = synthesis
                    .skew()
                    .map(|angle| Affine::skew(angle.to_radians().tan() as f64, 0.0));
                scene
                    .draw_glyphs(run.font())
                    .brush(&brush)
                    .hint(self.hint)
                    .transform(transform)
                    .glyph_transform(glyph_xform)
                    .font_size(run.font_size())
                    .normalized_coords(run.normalized_coords())
                    .draw(
                        Fill::NonZero,
                        glyph_run.glyphs().map(|glyph| {
                            let x = gx + glyph.x;
                            let y = gy - glyph.y;
                            gx += glyph.advance;
                            vello::Glyph {
                                id: glyph.id as _,
                                x,
                                y,
                            }
                        }),
                    );
            }
        }
    }
}
