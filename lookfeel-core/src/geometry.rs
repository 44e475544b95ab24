// SPDX-License-Identifier: LGPL-3.0-only

//! Integer geometry used by the style engine.
//!
//! Rectangles follow the inclusive pixel convention: a rect at `x` with
//! width `w` covers the columns `x..=x + w - 1`, and [Rect::right] returns
//! that last column. All helpers in this module keep that convention so
//! that painting and hit testing line up on whole pixels.

use bitflags::bitflags;
use vello::kurbo;

/// A point in device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

impl Point {
    /// Create a new point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Convert into a floating point kurbo point.
    pub fn to_kurbo(self) -> kurbo::Point {
        kurbo::Point::new(self.x as f64, self.y as f64)
    }
}

impl std::ops::Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// A size in device pixels. Negative sizes are invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    /// Width.
    pub width: i32,
    /// Height.
    pub height: i32,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// A size with equal sides.
    pub const fn square(extent: i32) -> Self {
        Self::new(extent, extent)
    }

    /// True if either side is zero or negative.
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// True if both sides are zero or positive.
    pub fn is_valid(&self) -> bool {
        self.width >= 0 && self.height >= 0
    }

    /// Component-wise maximum.
    pub fn expanded_to(&self, other: Size) -> Size {
        Size::new(self.width.max(other.width), self.height.max(other.height))
    }

    /// Component-wise minimum.
    pub fn bounded_to(&self, other: Size) -> Size {
        Size::new(self.width.min(other.width), self.height.min(other.height))
    }

    /// Swap width and height.
    pub fn transposed(&self) -> Size {
        Size::new(self.height, self.width)
    }

    /// Grow both sides.
    pub fn grown(&self, dw: i32, dh: i32) -> Size {
        Size::new(self.width + dw, self.height + dh)
    }
}

/// An axis aligned integer rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

impl Rect {
    /// Create a rect from position and size.
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rect from a top-left point and a size.
    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    /// Create a rect from two inclusive corners.
    pub fn from_corners(top_left: Point, bottom_right: Point) -> Self {
        Self::new(
            top_left.x,
            top_left.y,
            bottom_right.x - top_left.x + 1,
            bottom_right.y - top_left.y + 1,
        )
    }

    /// Left column.
    pub fn left(&self) -> i32 {
        self.x
    }

    /// Top row.
    pub fn top(&self) -> i32 {
        self.y
    }

    /// Last column covered by the rect.
    pub fn right(&self) -> i32 {
        self.x + self.width - 1
    }

    /// Last row covered by the rect.
    pub fn bottom(&self) -> i32 {
        self.y + self.height - 1
    }

    /// Top-left corner.
    pub fn top_left(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Top-right corner.
    pub fn top_right(&self) -> Point {
        Point::new(self.right(), self.y)
    }

    /// Bottom-left corner.
    pub fn bottom_left(&self) -> Point {
        Point::new(self.x, self.bottom())
    }

    /// Bottom-right corner.
    pub fn bottom_right(&self) -> Point {
        Point::new(self.right(), self.bottom())
    }

    /// Size of the rect.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Center pixel, rounding toward the top-left.
    pub fn center(&self) -> Point {
        Point::new(
            ((self.x as i64 + self.right() as i64) / 2) as i32,
            ((self.y as i64 + self.bottom() as i64) / 2) as i32,
        )
    }

    /// True if the rect has a positive area.
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// True if the rect covers no pixels.
    pub fn is_empty(&self) -> bool {
        !self.is_valid()
    }

    /// True if `p` is one of the covered pixels.
    pub fn contains(&self, p: Point) -> bool {
        self.is_valid() && p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }

    /// True if `other` lies entirely within this rect.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.is_valid()
            && self.is_valid()
            && other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Move the edges by the given deltas.
    pub fn adjusted(&self, dx1: i32, dy1: i32, dx2: i32, dy2: i32) -> Rect {
        Rect::new(
            self.x + dx1,
            self.y + dy1,
            self.width + dx2 - dx1,
            self.height + dy2 - dy1,
        )
    }

    /// Move the rect without resizing it.
    pub fn translated(&self, dx: i32, dy: i32) -> Rect {
        Rect::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// The overlapping part, or an empty rect.
    pub fn intersected(&self, other: &Rect) -> Rect {
        if self.is_empty() || other.is_empty() {
            return Rect::default();
        }
        let l = self.x.max(other.x);
        let t = self.y.max(other.y);
        let r = self.right().min(other.right());
        let b = self.bottom().min(other.bottom());
        if r < l || b < t {
            return Rect::default();
        }
        Rect::from_corners(Point::new(l, t), Point::new(r, b))
    }

    /// True if both rects share at least one pixel.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.intersected(other).is_valid()
    }

    /// The bounding rect of both. Empty rects are ignored.
    pub fn united(&self, other: &Rect) -> Rect {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        let l = self.x.min(other.x);
        let t = self.y.min(other.y);
        let r = self.right().max(other.right());
        let b = self.bottom().max(other.bottom());
        Rect::from_corners(Point::new(l, t), Point::new(r, b))
    }

    /// Move the left edge, keeping the right edge fixed.
    pub fn set_left(&mut self, left: i32) {
        self.width += self.x - left;
        self.x = left;
    }

    /// Move the top edge, keeping the bottom edge fixed.
    pub fn set_top(&mut self, top: i32) {
        self.height += self.y - top;
        self.y = top;
    }

    /// Move the right edge, keeping the left edge fixed.
    pub fn set_right(&mut self, right: i32) {
        self.width = right - self.x + 1;
    }

    /// Move the bottom edge, keeping the top edge fixed.
    pub fn set_bottom(&mut self, bottom: i32) {
        self.height = bottom - self.y + 1;
    }

    /// Move the rect so its center lands on `p`.
    pub fn moved_center(&self, p: Point) -> Rect {
        let c = self.center();
        self.translated(p.x - c.x, p.y - c.y)
    }

    /// Swap width and height, keeping the top-left corner.
    pub fn transposed(&self) -> Rect {
        Rect::new(self.x, self.y, self.height, self.width)
    }

    /// Convert to a kurbo rect covering the same pixels.
    pub fn to_kurbo(&self) -> kurbo::Rect {
        kurbo::Rect::new(
            self.x as f64,
            self.y as f64,
            (self.x + self.width) as f64,
            (self.y + self.height) as f64,
        )
    }
}

/// A set of rectangles, used for clip masks.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Region {
    rects: Vec<Rect>,
}

impl Region {
    /// An empty region.
    pub fn new() -> Self {
        Self::default()
    }

    /// A region covering one rect.
    pub fn from_rect(rect: Rect) -> Self {
        let mut region = Self::new();
        if rect.is_valid() {
            region.rects.push(rect);
        }
        region
    }

    /// The disjoint rects making up the region.
    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    /// True if the region covers no pixels.
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// True if `p` is covered by the region.
    pub fn contains(&self, p: Point) -> bool {
        self.rects.iter().any(|r| r.contains(p))
    }

    /// Bounding rect of every part.
    pub fn bounding_rect(&self) -> Rect {
        self.rects
            .iter()
            .fold(Rect::default(), |acc, r| acc.united(r))
    }

    /// Remove `cut` from the region.
    pub fn subtracted(&self, cut: Rect) -> Region {
        let mut out = Vec::with_capacity(self.rects.len() * 4);
        for r in &self.rects {
            let hole = r.intersected(&cut);
            if hole.is_empty() {
                out.push(*r);
                continue;
            }
            // Band above, band below, then the left and right strips of the middle band.
            let above = Rect::new(r.x, r.y, r.width, hole.y - r.y);
            let below = Rect::new(r.x, hole.bottom() + 1, r.width, r.bottom() - hole.bottom());
            let left = Rect::new(r.x, hole.y, hole.x - r.x, hole.height);
            let right = Rect::new(hole.right() + 1, hole.y, r.right() - hole.right(), hole.height);
            out.extend([above, below, left, right].into_iter().filter(Rect::is_valid));
        }
        Region { rects: out }
    }

    /// Add a rect. Overlap is removed so the parts stay disjoint.
    pub fn united(&self, rect: Rect) -> Region {
        let mut region = self.subtracted(rect);
        if rect.is_valid() {
            region.rects.push(rect);
        }
        region
    }

    /// Number of pixels covered.
    pub fn area(&self) -> i64 {
        self.rects
            .iter()
            .map(|r| r.width as i64 * r.height as i64)
            .sum()
    }
}

/// Horizontal layout direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Left to right.
    #[default]
    LeftToRight,
    /// Right to left, mirrored.
    RightToLeft,
}

impl Direction {
    /// True for the mirrored direction.
    pub fn is_rtl(&self) -> bool {
        matches!(self, Direction::RightToLeft)
    }

    /// The other direction.
    pub fn flipped(&self) -> Direction {
        match self {
            Direction::LeftToRight => Direction::RightToLeft,
            Direction::RightToLeft => Direction::LeftToRight,
        }
    }
}

/// Orientation of sliders, scroll bars, toolbars and separators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    /// Along the x axis.
    #[default]
    Horizontal,
    /// Along the y axis.
    Vertical,
}

bitflags! {
    /// Alignment of content within a rect.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct Alignment: u16 {
        /// Align with the leading edge, mirrored under RTL.
        const LEFT = 0x0001;
        /// Align with the trailing edge, mirrored under RTL.
        const RIGHT = 0x0002;
        /// Center horizontally.
        const HCENTER = 0x0004;
        /// Justify text.
        const JUSTIFY = 0x0008;
        /// Left and right are screen edges and never mirrored.
        const ABSOLUTE = 0x0010;
        /// Align with the top.
        const TOP = 0x0020;
        /// Align with the bottom.
        const BOTTOM = 0x0040;
        /// Center vertically.
        const VCENTER = 0x0080;
        /// Align on the text baseline.
        const BASELINE = 0x0100;
        /// Center in both directions.
        const CENTER = Self::HCENTER.bits() | Self::VCENTER.bits();
        /// Every horizontal flag.
        const HORIZONTAL_MASK = Self::LEFT.bits() | Self::RIGHT.bits() | Self::HCENTER.bits()
            | Self::JUSTIFY.bits() | Self::ABSOLUTE.bits();
        /// Every vertical flag.
        const VERTICAL_MASK = Self::TOP.bits() | Self::BOTTOM.bits() | Self::VCENTER.bits()
            | Self::BASELINE.bits();
    }
}

/// Map a logical rect inside `bounding` to screen coordinates.
///
/// Under RTL the rect is mirrored around the vertical axis of `bounding`.
/// Applying it twice gives back the logical rect.
pub fn visual_rect(direction: Direction, bounding: Rect, logical: Rect) -> Rect {
    if !direction.is_rtl() {
        return logical;
    }
    let x = bounding.x + (bounding.x + bounding.width) - logical.x - logical.width;
    Rect::new(x, logical.y, logical.width, logical.height)
}

/// Map a logical point inside `bounding` to screen coordinates.
pub fn visual_pos(direction: Direction, bounding: Rect, logical: Point) -> Point {
    if !direction.is_rtl() {
        return logical;
    }
    Point::new(bounding.right() - logical.x + bounding.x, logical.y)
}

/// Resolve leading/trailing alignment into absolute screen alignment.
pub fn visual_alignment(direction: Direction, alignment: Alignment) -> Alignment {
    let mut alignment = alignment;
    if (alignment & Alignment::HORIZONTAL_MASK).is_empty() {
        alignment |= Alignment::LEFT;
    }
    if !alignment.contains(Alignment::ABSOLUTE) && alignment.intersects(Alignment::LEFT | Alignment::RIGHT) {
        if direction.is_rtl() {
            alignment ^= Alignment::LEFT | Alignment::RIGHT;
        }
        alignment |= Alignment::ABSOLUTE;
    }
    alignment
}

/// Offset that centers `inner` inside `outer`.
///
/// Each half is floored separately, so 13 inside 20 lands at 4.
pub fn center_offset(outer: i32, inner: i32) -> i32 {
    outer / 2 - inner / 2
}

/// Place `size` inside `rect` according to `alignment`.
///
/// Centering uses `outer / 2 - inner / 2` on both axes. The result is not
/// clipped to `rect`.
pub fn aligned_rect(direction: Direction, alignment: Alignment, size: Size, rect: Rect) -> Rect {
    let alignment = visual_alignment(direction, alignment);
    let mut x = rect.x;
    let mut y = rect.y;
    if alignment.contains(Alignment::VCENTER) {
        y += center_offset(rect.height, size.height);
    } else if alignment.contains(Alignment::BOTTOM) {
        y += rect.height - size.height;
    }
    if alignment.contains(Alignment::RIGHT) {
        x += rect.width - size.width;
    } else if alignment.contains(Alignment::HCENTER) {
        x += center_offset(rect.width, size.width);
    }
    Rect::new(x, y, size.width, size.height)
}

/// Map a value in `min..=max` to a pixel offset in `0..=span`.
pub fn slider_position_from_value(min: i32, max: i32, value: i32, span: i32, upside_down: bool) -> i32 {
    if span <= 0 || value < min || max <= min {
        return 0;
    }
    if value > max {
        return if upside_down { 0 } else { span };
    }
    let range = max as i64 - min as i64;
    let p = if upside_down {
        max as i64 - value as i64
    } else {
        value as i64 - min as i64
    };
    let span = span as i64;
    let pos = if range > (i32::MAX as i64) / 4096 {
        (p as f64 * (span as f64 / range as f64)) as i64
    } else if range > span {
        (2 * p * span + range) / (2 * range)
    } else {
        let div = span / range;
        let rem = span % range;
        p * div + (2 * p * rem + range) / (2 * range)
    };
    pos as i32
}

/// Map a pixel offset in `0..=span` back to a value in `min..=max`.
pub fn slider_value_from_position(min: i32, max: i32, pos: i32, span: i32, upside_down: bool) -> i32 {
    if span <= 0 || pos <= 0 {
        return if upside_down { max } else { min };
    }
    if pos >= span {
        return if upside_down { min } else { max };
    }
    let range = max as i64 - min as i64;
    let (pos, span) = (pos as i64, span as i64);
    let tmp = if span > range {
        (2 * pos * range + span) / (2 * span)
    } else {
        let div = range / span;
        let rem = range % span;
        pos * div + (2 * pos * rem + span) / (2 * span)
    };
    if upside_down {
        (max as i64 - tmp) as i32
    } else {
        (min as i64 + tmp) as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inclusive_edges() {
        let r = Rect::new(10, 20, 5, 4);
        assert_eq!(r.right(), 14);
        assert_eq!(r.bottom(), 23);
        assert!(r.contains(Point::new(14, 23)));
        assert!(!r.contains(Point::new(15, 23)));
    }

    #[test]
    fn test_set_edges_keep_opposite_edge() {
        let mut r = Rect::new(10, 10, 20, 20);
        r.set_left(15);
        assert_eq!(r, Rect::new(15, 10, 15, 20));
        r.set_right(24);
        assert_eq!(r.width, 10);
        r.set_top(5);
        assert_eq!(r.bottom(), 29);
    }

    #[test]
    fn test_visual_rect_mirrors_within_bounds() {
        let bounds = Rect::new(10, 0, 100, 20);
        let logical = Rect::new(12, 0, 30, 20);
        let mirrored = visual_rect(Direction::RightToLeft, bounds, logical);
        assert_eq!(mirrored.x, 10 + 110 - 12 - 30);
        assert_eq!(visual_rect(Direction::RightToLeft, bounds, mirrored), logical);
        assert_eq!(visual_rect(Direction::LeftToRight, bounds, logical), logical);
    }

    #[test]
    fn test_aligned_rect_centering_rounds_per_axis() {
        let r = aligned_rect(
            Direction::LeftToRight,
            Alignment::LEFT | Alignment::VCENTER,
            Size::new(13, 13),
            Rect::new(0, 0, 200, 20),
        );
        assert_eq!(r, Rect::new(0, 4, 13, 13));
        assert_eq!(center_offset(20, 13), 4);
        assert_eq!(center_offset(16, 13), 2);
        assert_eq!(center_offset(7, 7), 0);
    }

    #[test]
    fn test_visual_alignment_swaps_unless_absolute() {
        let a = visual_alignment(Direction::RightToLeft, Alignment::LEFT);
        assert!(a.contains(Alignment::RIGHT));
        let b = visual_alignment(Direction::RightToLeft, Alignment::LEFT | Alignment::ABSOLUTE);
        assert!(b.contains(Alignment::LEFT));
    }

    #[test]
    fn test_region_subtract_keeps_area() {
        let region = Region::from_rect(Rect::new(0, 0, 10, 10));
        let cut = region.subtracted(Rect::new(2, 2, 6, 6));
        assert_eq!(cut.area(), 100 - 36);
        assert!(!cut.contains(Point::new(4, 4)));
        assert!(cut.contains(Point::new(0, 0)));
        assert!(cut.contains(Point::new(9, 9)));
    }

    #[test]
    fn test_slider_mapping_round_trip() {
        for value in 0..=1000 {
            let pos = slider_position_from_value(0, 1000, value, 300, false);
            let back = slider_value_from_position(0, 1000, pos, 300, false);
            let again = slider_position_from_value(0, 1000, back, 300, false);
            assert!((again - pos).abs() <= 1, "value {value} came back as {back}");
        }
        assert_eq!(slider_position_from_value(0, 10, 0, 100, true), 100);
        assert_eq!(slider_value_from_position(0, 10, 0, 100, true), 10);
    }

    #[test]
    fn test_slider_mapping_huge_range() {
        let pos = slider_position_from_value(i32::MIN / 2, i32::MAX / 2, 0, 1000, false);
        assert!((pos - 500).abs() <= 1);
    }
}
