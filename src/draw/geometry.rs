//! Geometry primitives and hit-testing math.
//!
//! Everything here is pure: values in, values out. Callers are expected to
//! reject non-finite coordinates before building geometry from them.

use serde::{Deserialize, Serialize};

/// A position on the canvas, in world units unless stated otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns this point moved by `(dx, dy)`.
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Returns the `(dx, dy)` vector leading from `self` to `other`.
    pub fn delta_to(self, other: Point) -> (f64, f64) {
        (other.x - self.x, other.y - self.y)
    }

    /// Euclidean distance between two points.
    pub fn distance_to(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Axis-aligned box anchored at its top-left corner.
///
/// Boxes produced by [`normalize`] or [`BoundingBox::from_corners`] always
/// have non-negative width and height. A zero-size box is valid.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Zero-size box sitting on `point`.
    pub const fn at(point: Point) -> Self {
        Self::new(point.x, point.y, 0.0, 0.0)
    }

    /// Box spanned by two opposite corners, dragged in any direction.
    pub fn from_corners(anchor: Point, current: Point) -> Self {
        normalize(Self::new(
            anchor.x,
            anchor.y,
            current.x - anchor.x,
            current.y - anchor.y,
        ))
    }

    /// Builds a box from min/max bounds.
    pub fn from_min_max(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        normalize(Self::new(min_x, min_y, max_x - min_x, max_y - min_y))
    }

    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Inclusive containment test (points on an edge are inside).
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x <= self.max_x() && point.y >= self.y && point.y <= self.max_y()
    }

    /// Grows the box by `amount` on every side.
    pub fn inflate(self, amount: f64) -> Self {
        Self::new(
            self.x - amount,
            self.y - amount,
            self.width + amount * 2.0,
            self.height + amount * 2.0,
        )
    }

    pub fn translate(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Smallest box covering both inputs.
    pub fn union(self, other: BoundingBox) -> Self {
        Self::from_min_max(
            self.x.min(other.x),
            self.y.min(other.y),
            self.max_x().max(other.max_x()),
            self.max_y().max(other.max_y()),
        )
    }

    /// Returns true when the boxes overlap or touch.
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.x <= other.max_x()
            && other.x <= self.max_x()
            && self.y <= other.max_y()
            && other.y <= self.max_y()
    }

    /// Returns true when the box has no area.
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Canonicalizes a box so width and height are non-negative.
///
/// A drag up or to the left produces negative extents; the origin moves to
/// the true top-left corner instead.
pub fn normalize(bounds: BoundingBox) -> BoundingBox {
    let (x, width) = if bounds.width >= 0.0 {
        (bounds.x, bounds.width)
    } else {
        (bounds.x + bounds.width, -bounds.width)
    };
    let (y, height) = if bounds.height >= 0.0 {
        (bounds.y, bounds.height)
    } else {
        (bounds.y + bounds.height, -bounds.height)
    };
    BoundingBox::new(x, y, width, height)
}

/// Shortest distance from `point` to the segment `a`–`b`.
pub fn distance_to_segment(point: Point, a: Point, b: Point) -> f64 {
    let (dx, dy) = a.delta_to(b);
    let length_sq = dx * dx + dy * dy;
    if length_sq == 0.0 {
        return point.distance_to(a);
    }

    let t = (((point.x - a.x) * dx + (point.y - a.y) * dy) / length_sq).clamp(0.0, 1.0);
    point.distance_to(Point::new(a.x + t * dx, a.y + t * dy))
}

/// Vertices of the triangle inscribed in `bounds`: apex at top-center, base
/// along the bottom edge.
pub fn triangle_vertices(bounds: &BoundingBox) -> [Point; 3] {
    [
        Point::new(bounds.x + bounds.width / 2.0, bounds.y),
        Point::new(bounds.x, bounds.max_y()),
        Point::new(bounds.max_x(), bounds.max_y()),
    ]
}

/// Barycentric sign test. Zero-area triangles contain nothing.
pub fn point_in_triangle(point: Point, [a, b, c]: [Point; 3]) -> bool {
    if edge_sign(a, b, c) == 0.0 {
        return false;
    }

    let d1 = edge_sign(point, a, b);
    let d2 = edge_sign(point, b, c);
    let d3 = edge_sign(point, c, a);

    let has_negative = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_positive = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
    !(has_negative && has_positive)
}

fn edge_sign(p1: Point, p2: Point, p3: Point) -> f64 {
    (p1.x - p3.x) * (p2.y - p3.y) - (p2.x - p3.x) * (p1.y - p3.y)
}

/// Smallest box enclosing every point, or `None` for an empty slice.
pub fn bounding_box_for_points(points: &[Point]) -> Option<BoundingBox> {
    let (first, rest) = points.split_first()?;
    let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);

    for point in rest {
        min_x = min_x.min(point.x);
        min_y = min_y.min(point.y);
        max_x = max_x.max(point.x);
        max_y = max_y.max(point.y);
    }

    Some(BoundingBox::from_min_max(min_x, min_y, max_x, max_y))
}
