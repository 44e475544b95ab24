// SPDX-License-Identifier: LGPL-3.0-only

//! [Canvas] implementation over a vello [Scene].

use vello::kurbo::{self, Affine, BezPath, Cap, Ellipse, Shape, Stroke};
use vello::peniko::{self, Blob, Color, Fill, ImageAlphaType, ImageBrush, ImageData, ImageFormat, Mix};
use vello::Scene;

use crate::asset::{load_pixmap, AssetImage, AssetSource, Pixmap};
use crate::canvas::{Brush, Canvas, Pen, PenStyle, PointF, RectF};
use crate::geometry::{Alignment, Point, Rect, Region};

/// Draws text runs for a [SceneCanvas].
///
/// Glyph shaping is not part of the engine; see `ParleyText` for the
/// parley-backed implementation.
pub trait TextSink {
    /// Draw `text` aligned inside `rect`.
    fn draw_text(&mut self, scene: &mut Scene, transform: Affine, rect: Rect, alignment: Alignment, text: &str, color: Color);
}

#[derive(Clone, Copy)]
struct SavedState {
    transform: Affine,
    layers: usize,
}

/// A [Canvas] writing into a vello scene.
pub struct SceneCanvas<'a> {
    scene: &'a mut Scene,
    text: Option<&'a mut dyn TextSink>,
    assets: Option<&'a dyn AssetSource>,
    transform: Affine,
    layers: usize,
    stack: Vec<SavedState>,
}

impl<'a> SceneCanvas<'a> {
    /// Wrap a scene. Text is dropped until a sink is attached.
    pub fn new(scene: &'a mut Scene) -> Self {
        Self {
            scene,
            text: None,
            assets: None,
            transform: Affine::IDENTITY,
            layers: 0,
            stack: Vec::new(),
        }
    }

    /// Attach a text sink.
    pub fn with_text(mut self, text: &'a mut dyn TextSink) -> Self {
        self.text = Some(text);
        self
    }

    /// Attach a source for bundled resources.
    pub fn with_assets(mut self, assets: &'a dyn AssetSource) -> Self {
        self.assets = Some(assets);
        self
    }

    /// Start from a base transform, for instance the widget position.
    pub fn with_transform(mut self, transform: Affine) -> Self {
        self.transform = transform;
        self
    }

    fn peniko_brush(brush: &Brush) -> peniko::Brush {
        match brush {
            Brush::Solid(color) => peniko::Brush::Solid(*color),
            Brush::LinearGradient { start, end, stops } => {
                let stops: Vec<peniko::ColorStop> = stops
                    .iter()
                    .map(|(offset, color)| peniko::ColorStop::from((*offset, *color)))
                    .collect();
                peniko::Brush::Gradient(peniko::Gradient::new_linear(*start, *end).with_stops(stops.as_slice()))
            },
        }
    }

    fn stroke_shape(&mut self, shape: &impl Shape, pen: &Pen, stroke: Stroke) {
        if pen.style == PenStyle::None {
            return;
        }
        self.scene
            .stroke(&stroke, self.transform, &peniko::Brush::Solid(pen.color), None, shape);
    }

    fn draw_pixmap(&mut self, rect: Rect, pixmap: &Pixmap) {
        if pixmap.width() == 0 || pixmap.height() == 0 {
            return;
        }
        let image = ImageBrush::new(ImageData {
            data: Blob::from(pixmap.data().to_vec()),
            format: ImageFormat::Rgba8,
            alpha_type: ImageAlphaType::Alpha,
            width: pixmap.width(),
            height: pixmap.height(),
        });
        let sx = rect.width as f64 / pixmap.width() as f64;
        let sy = rect.height as f64 / pixmap.height() as f64;
        let placement = Affine::scale_non_uniform(sx, sy).then_translate(kurbo::Vec2::new(rect.x as f64, rect.y as f64));
        self.scene.draw_image(&image, self.transform * placement);
    }

    fn pixel_center(p: Point) -> kurbo::Point {
        kurbo::Point::new(p.x as f64 + 0.5, p.y as f64 + 0.5)
    }
}

impl Canvas for SceneCanvas<'_> {
    fn fill_rect(&mut self, rect: Rect, brush: &Brush) {
        if rect.is_empty() {
            return;
        }
        self.scene
            .fill(Fill::NonZero, self.transform, &Self::peniko_brush(brush), None, &rect.to_kurbo());
    }

    fn stroke_rect(&mut self, rect: Rect, pen: &Pen) {
        if rect.is_empty() {
            return;
        }
        let inset = pen.width / 2.0;
        let outline = kurbo::Rect::new(
            rect.x as f64 + inset,
            rect.y as f64 + inset,
            (rect.x + rect.width) as f64 - inset,
            (rect.y + rect.height) as f64 - inset,
        );
        self.stroke_shape(&outline, pen, pen.to_stroke());
    }

    fn draw_line(&mut self, from: Point, to: Point, pen: &Pen) {
        let line = kurbo::Line::new(Self::pixel_center(from), Self::pixel_center(to));
        // Square caps so both end pixels are covered.
        let stroke = pen.to_stroke().with_caps(Cap::Square);
        self.stroke_shape(&line, pen, stroke);
    }

    fn draw_polyline(&mut self, points: &[Point], pen: &Pen) {
        let mut path = BezPath::new();
        for (i, p) in points.iter().enumerate() {
            if i == 0 {
                path.move_to(Self::pixel_center(*p));
            } else {
                path.line_to(Self::pixel_center(*p));
            }
        }
        let stroke = pen.to_stroke().with_caps(Cap::Square);
        self.stroke_shape(&path, pen, stroke);
    }

    fn draw_line_f(&mut self, from: PointF, to: PointF, pen: &Pen) {
        self.stroke_shape(&kurbo::Line::new(from, to), pen, pen.to_stroke());
    }

    fn draw_polygon(&mut self, points: &[PointF], pen: Option<&Pen>, brush: Option<&Brush>) {
        if points.len() < 3 {
            return;
        }
        let mut path = BezPath::new();
        path.move_to(points[0]);
        for p in &points[1..] {
            path.line_to(*p);
        }
        path.close_path();
        if let Some(brush) = brush {
            self.scene
                .fill(Fill::NonZero, self.transform, &Self::peniko_brush(brush), None, &path);
        }
        if let Some(pen) = pen {
            self.stroke_shape(&path, pen, pen.to_stroke());
        }
    }

    fn draw_ellipse(&mut self, rect: RectF, pen: Option<&Pen>, brush: Option<&Brush>) {
        let ellipse = Ellipse::from_rect(rect);
        if let Some(brush) = brush {
            self.scene
                .fill(Fill::NonZero, self.transform, &Self::peniko_brush(brush), None, &ellipse);
        }
        if let Some(pen) = pen {
            self.stroke_shape(&ellipse, pen, pen.to_stroke());
        }
    }

    fn draw_arc(&mut self, rect: RectF, start_deg: f64, span_deg: f64, pen: &Pen) {
        // Counter-clockwise degrees in a y-down space become negative radians.
        let arc = kurbo::Arc::new(
            rect.center(),
            (rect.width() / 2.0, rect.height() / 2.0),
            -start_deg.to_radians(),
            -span_deg.to_radians(),
            0.0,
        );
        self.stroke_shape(&arc, pen, pen.to_stroke());
    }

    fn draw_text(&mut self, rect: Rect, alignment: Alignment, text: &str, color: Color) {
        let transform = self.transform;
        match self.text.as_deref_mut() {
            Some(sink) => sink.draw_text(self.scene, transform, rect, alignment, text, color),
            None => log::trace!("SceneCanvas: no text sink, dropping {:?}", text),
        }
    }

    fn draw_image(&mut self, rect: Rect, image: &AssetImage) {
        match image {
            AssetImage::Pixmap(pixmap) => self.draw_pixmap(rect, pixmap),
            AssetImage::Picture(picture) => picture.replay_into(self, rect),
            AssetImage::Resource(name) => {
                let loaded = self.assets.and_then(|assets| assets.load(name));
                match loaded {
                    Some(pixmap) => self.draw_pixmap(rect, &pixmap),
                    None => log::debug!("SceneCanvas: resource {} unavailable", name),
                }
            },
            AssetImage::Path(path) => match load_pixmap(path) {
                Ok(pixmap) => self.draw_pixmap(rect, &pixmap),
                Err(e) => log::warn!("SceneCanvas: {}", e),
            },
        }
    }

    fn save(&mut self) {
        self.stack.push(SavedState {
            transform: self.transform,
            layers: self.layers,
        });
        self.layers = 0;
    }

    fn restore(&mut self) {
        for _ in 0..self.layers {
            self.scene.pop_layer();
        }
        match self.stack.pop() {
            Some(saved) => {
                self.transform = saved.transform;
                self.layers = saved.layers;
            },
            None => {
                self.transform = Affine::IDENTITY;
                self.layers = 0;
            },
        }
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.transform *= Affine::translate((dx, dy));
    }

    fn rotate(&mut self, degrees: f64) {
        self.transform *= Affine::rotate(degrees.to_radians());
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        self.transform *= Affine::scale_non_uniform(sx, sy);
    }

    fn set_clip(&mut self, clip: Option<&Region>) {
        let Some(region) = clip else {
            return;
        };
        let mut path = BezPath::new();
        for rect in region.rects() {
            path.extend(rect.to_kurbo().path_elements(0.1));
        }
        self.scene.push_layer(Mix::Normal, 1.0, self.transform, &path);
        self.layers += 1;
    }
}

impl Drop for SceneCanvas<'_> {
    fn drop(&mut self) {
        while !self.stack.is_empty() || self.layers > 0 {
            self.restore();
        }
    }
}
