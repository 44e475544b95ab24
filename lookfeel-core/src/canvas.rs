// SPDX-License-Identifier: LGPL-3.0-only

//! The drawing surface the style engine paints on.
//!
//! [Canvas] is the narrow set of operations the painters need. Integer
//! operations address whole pixels, the way widgets are laid out, while the
//! float operations take [PointF] coordinates for anti-aliased shapes such as
//! arrows, dial needles and chamfered tabs.
//!
//! [Picture] records the calls and can replay them later. It doubles as the
//! vector image type for generated glyphs and is the canvas the tests use.

use vello::kurbo;
use vello::peniko::Color;

use crate::asset::AssetImage;
use crate::geometry::{Alignment, Point, Rect, Region, Size};

/// Floating point position.
pub type PointF = kurbo::Point;

/// Floating point rectangle.
pub type RectF = kurbo::Rect;

/// How an area is filled.
#[derive(Debug, Clone, PartialEq)]
pub enum Brush {
    /// One color.
    Solid(Color),
    /// Linear gradient between two points with `(offset, color)` stops.
    LinearGradient {
        /// Gradient start.
        start: PointF,
        /// Gradient end.
        end: PointF,
        /// Color stops in `0.0..=1.0`.
        stops: Vec<(f32, Color)>,
    },
}

impl Brush {
    /// The first color of the brush.
    pub fn color(&self) -> Color {
        match self {
            Brush::Solid(c) => *c,
            Brush::LinearGradient { stops, .. } => stops.first().map(|(_, c)| *c).unwrap_or(Color::TRANSPARENT),
        }
    }
}

impl From<Color> for Brush {
    fn from(color: Color) -> Self {
        Brush::Solid(color)
    }
}

/// Dash pattern of a pen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PenStyle {
    /// Continuous line.
    #[default]
    Solid,
    /// One pixel on, one off.
    Dot,
    /// Four pixels on, two off.
    Dash,
    /// Draws nothing.
    None,
}

/// How an outline is stroked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pen {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in pixels.
    pub width: f64,
    /// Dash pattern.
    pub style: PenStyle,
}

impl Pen {
    /// A solid one pixel pen.
    pub fn new(color: Color) -> Self {
        Self {
            color,
            width: 1.0,
            style: PenStyle::Solid,
        }
    }

    /// Set the width.
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    /// Set the dash pattern.
    pub fn with_style(mut self, style: PenStyle) -> Self {
        self.style = style;
        self
    }

    /// The kurbo stroke matching this pen.
    pub fn to_stroke(&self) -> kurbo::Stroke {
        let stroke = kurbo::Stroke::new(self.width);
        match self.style {
            PenStyle::Dot => stroke.with_dashes(0.0, [self.width, self.width]),
            PenStyle::Dash => stroke.with_dashes(0.0, [4.0 * self.width, 2.0 * self.width]),
            PenStyle::Solid | PenStyle::None => stroke,
        }
    }
}

/// A surface accepting paint commands.
///
/// Implementations keep a transform stack: [Canvas::save] pushes the current
/// transform and clip, [Canvas::restore] pops them.
pub trait Canvas {
    /// Fill the pixels of `rect`.
    fn fill_rect(&mut self, rect: Rect, brush: &Brush);

    /// Outline the border pixels of `rect`. The outline stays inside the rect.
    fn stroke_rect(&mut self, rect: Rect, pen: &Pen);

    /// Draw a line through the pixel centers of both end points.
    fn draw_line(&mut self, from: Point, to: Point, pen: &Pen);

    /// Draw connected line segments through pixel centers.
    fn draw_polyline(&mut self, points: &[Point], pen: &Pen);

    /// Draw a line between two float points.
    fn draw_line_f(&mut self, from: PointF, to: PointF, pen: &Pen);

    /// Draw a closed polygon.
    fn draw_polygon(&mut self, points: &[PointF], pen: Option<&Pen>, brush: Option<&Brush>);

    /// Draw the ellipse inscribed in `rect`.
    fn draw_ellipse(&mut self, rect: RectF, pen: Option<&Pen>, brush: Option<&Brush>);

    /// Stroke an arc of the ellipse inscribed in `rect`.
    ///
    /// Angles are in degrees, counter-clockwise from three o'clock.
    fn draw_arc(&mut self, rect: RectF, start_deg: f64, span_deg: f64, pen: &Pen);

    /// Draw a single run of text aligned within `rect`.
    fn draw_text(&mut self, rect: Rect, alignment: Alignment, text: &str, color: Color);

    /// Draw an image scaled into `rect`.
    fn draw_image(&mut self, rect: Rect, image: &AssetImage);

    /// Push the transform and clip.
    fn save(&mut self);

    /// Pop the transform and clip.
    fn restore(&mut self);

    /// Translate subsequent drawing.
    fn translate(&mut self, dx: f64, dy: f64);

    /// Rotate subsequent drawing clockwise around the origin.
    fn rotate(&mut self, degrees: f64);

    /// Scale subsequent drawing.
    fn scale(&mut self, sx: f64, sy: f64);

    /// Restrict drawing to `clip` until the next [Canvas::restore].
    fn set_clip(&mut self, clip: Option<&Region>);
}

/// One recorded canvas call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// [Canvas::fill_rect].
    FillRect(Rect, Brush),
    /// [Canvas::stroke_rect].
    StrokeRect(Rect, Pen),
    /// [Canvas::draw_line].
    Line(Point, Point, Pen),
    /// [Canvas::draw_polyline].
    Polyline(Vec<Point>, Pen),
    /// [Canvas::draw_line_f].
    LineF(PointF, PointF, Pen),
    /// [Canvas::draw_polygon].
    Polygon(Vec<PointF>, Option<Pen>, Option<Brush>),
    /// [Canvas::draw_ellipse].
    Ellipse(RectF, Option<Pen>, Option<Brush>),
    /// [Canvas::draw_arc]: bounds, start and sweep in degrees.
    Arc(RectF, f64, f64, Pen),
    /// [Canvas::draw_text] with the resolved color.
    Text(Rect, Alignment, String, Color),
    /// [Canvas::draw_image].
    Image(Rect, AssetImage),
    /// [Canvas::save].
    Save,
    /// [Canvas::restore].
    Restore,
    /// [Canvas::translate].
    Translate(f64, f64),
    /// [Canvas::rotate], in degrees.
    Rotate(f64),
    /// [Canvas::scale].
    Scale(f64, f64),
    /// [Canvas::set_clip].
    Clip(Option<Region>),
}

/// A recorded sequence of canvas calls with an intrinsic size.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Picture {
    size: Size,
    commands: Vec<DrawCommand>,
}

impl Picture {
    /// An empty picture.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty picture with an intrinsic size, used for vector glyphs.
    pub fn with_size(size: Size) -> Self {
        Self {
            size,
            commands: Vec::new(),
        }
    }

    /// Intrinsic size.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Recorded commands in call order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// True if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Forget every command.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Replay into another canvas.
    pub fn replay(&self, canvas: &mut dyn Canvas) {
        for cmd in &self.commands {
            match cmd {
                DrawCommand::FillRect(r, b) => canvas.fill_rect(*r, b),
                DrawCommand::StrokeRect(r, p) => canvas.stroke_rect(*r, p),
                DrawCommand::Line(a, b, p) => canvas.draw_line(*a, *b, p),
                DrawCommand::Polyline(pts, p) => canvas.draw_polyline(pts, p),
                DrawCommand::LineF(a, b, p) => canvas.draw_line_f(*a, *b, p),
                DrawCommand::Polygon(pts, p, b) => canvas.draw_polygon(pts, p.as_ref(), b.as_ref()),
                DrawCommand::Ellipse(r, p, b) => canvas.draw_ellipse(*r, p.as_ref(), b.as_ref()),
                DrawCommand::Arc(r, s, sp, p) => canvas.draw_arc(*r, *s, *sp, p),
                DrawCommand::Text(r, a, t, c) => canvas.draw_text(*r, *a, t, *c),
                DrawCommand::Image(r, i) => canvas.draw_image(*r, i),
                DrawCommand::Save => canvas.save(),
                DrawCommand::Restore => canvas.restore(),
                DrawCommand::Translate(x, y) => canvas.translate(*x, *y),
                DrawCommand::Rotate(d) => canvas.rotate(*d),
                DrawCommand::Scale(x, y) => canvas.scale(*x, *y),
                DrawCommand::Clip(r) => canvas.set_clip(r.as_ref()),
            }
        }
    }

    /// Replay scaled from the intrinsic size into `target`.
    pub fn replay_into(&self, canvas: &mut dyn Canvas, target: Rect) {
        canvas.save();
        canvas.translate(target.x as f64, target.y as f64);
        if !self.size.is_empty() {
            canvas.scale(
                target.width as f64 / self.size.width as f64,
                target.height as f64 / self.size.height as f64,
            );
        }
        self.replay(canvas);
        canvas.restore();
    }

    /// Rects filled, in order.
    pub fn filled_rects(&self) -> Vec<Rect> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillRect(r, _) => Some(*r),
                _ => None,
            })
            .collect()
    }

    /// Text runs drawn, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text(_, _, t, _) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Number of commands matching `pred`.
    pub fn count(&self, pred: impl Fn(&DrawCommand) -> bool) -> usize {
        self.commands.iter().filter(|c| pred(c)).count()
    }

    fn push(&mut self, cmd: DrawCommand) {
        self.commands.push(cmd);
    }
}

impl Canvas for Picture {
    fn fill_rect(&mut self, rect: Rect, brush: &Brush) {
        if rect.is_valid() {
            self.push(DrawCommand::FillRect(rect, brush.clone()));
        }
    }

    fn stroke_rect(&mut self, rect: Rect, pen: &Pen) {
        if rect.is_valid() && pen.style != PenStyle::None {
            self.push(DrawCommand::StrokeRect(rect, *pen));
        }
    }

    fn draw_line(&mut self, from: Point, to: Point, pen: &Pen) {
        self.push(DrawCommand::Line(from, to, *pen));
    }

    fn draw_polyline(&mut self, points: &[Point], pen: &Pen) {
        if points.len() > 1 {
            self.push(DrawCommand::Polyline(points.to_vec(), *pen));
        }
    }

    fn draw_line_f(&mut self, from: PointF, to: PointF, pen: &Pen) {
        self.push(DrawCommand::LineF(from, to, *pen));
    }

    fn draw_polygon(&mut self, points: &[PointF], pen: Option<&Pen>, brush: Option<&Brush>) {
        if points.len() > 2 {
            self.push(DrawCommand::Polygon(points.to_vec(), pen.copied(), brush.cloned()));
        }
    }

    fn draw_ellipse(&mut self, rect: RectF, pen: Option<&Pen>, brush: Option<&Brush>) {
        self.push(DrawCommand::Ellipse(rect, pen.copied(), brush.cloned()));
    }

    fn draw_arc(&mut self, rect: RectF, start_deg: f64, span_deg: f64, pen: &Pen) {
        self.push(DrawCommand::Arc(rect, start_deg, span_deg, *pen));
    }

    fn draw_text(&mut self, rect: Rect, alignment: Alignment, text: &str, color: Color) {
        if !text.is_empty() {
            self.push(DrawCommand::Text(rect, alignment, text.to_string(), color));
        }
    }

    fn draw_image(&mut self, rect: Rect, image: &AssetImage) {
        if rect.is_valid() {
            self.push(DrawCommand::Image(rect, image.clone()));
        }
    }

    fn save(&mut self) {
        self.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        self.push(DrawCommand::Restore);
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.push(DrawCommand::Translate(dx, dy));
    }

    fn rotate(&mut self, degrees: f64) {
        self.push(DrawCommand::Rotate(degrees));
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        self.push(DrawCommand::Scale(sx, sy));
    }

    fn set_clip(&mut self, clip: Option<&Region>) {
        self.push(DrawCommand::Clip(clip.cloned()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_picture_skips_degenerate_rects() {
        let mut pic = Picture::new();
        pic.fill_rect(Rect::new(0, 0, 0, 10), &Brush::Solid(Color::BLACK));
        pic.fill_rect(Rect::new(0, 0, 5, 5), &Brush::Solid(Color::BLACK));
        assert_eq!(pic.filled_rects(), vec![Rect::new(0, 0, 5, 5)]);
    }

    #[test]
    fn test_replay_into_scales() {
        let mut glyph = Picture::with_size(Size::new(10, 10));
        glyph.fill_rect(Rect::new(0, 0, 10, 10), &Brush::Solid(Color::WHITE));
        let mut out = Picture::new();
        glyph.replay_into(&mut out, Rect::new(5, 5, 20, 20));
        assert_eq!(out.commands()[0], DrawCommand::Save);
        assert_eq!(out.commands()[2], DrawCommand::Scale(2.0, 2.0));
        assert_eq!(out.filled_rects().len(), 1);
    }
}
