//! Element definitions: identity, geometry, and style of placed drawables.

use super::color::Color;
use super::geometry::{
    BoundingBox, Point, bounding_box_for_points, distance_to_segment, point_in_triangle,
    triangle_vertices,
};
use crate::input::ShapeKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Average glyph advance as a fraction of the font size.
const TEXT_ADVANCE_RATIO: f64 = 0.6;
/// Line height as a fraction of the font size.
const TEXT_LINE_HEIGHT_RATIO: f64 = 1.2;

/// Opaque element identifier, unique within a store for the element's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(u64);

impl ElementId {
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Discriminant of an element's geometry.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ElementKind {
    Rect,
    Circle,
    Triangle,
    Path,
    Text,
}

impl From<ShapeKind> for ElementKind {
    fn from(kind: ShapeKind) -> Self {
        match kind {
            ShapeKind::Rect => ElementKind::Rect,
            ShapeKind::Circle => ElementKind::Circle,
            ShapeKind::Triangle => ElementKind::Triangle,
        }
    }
}

/// Geometry of an element; the variant determines the element's kind.
///
/// Circles and triangles are inscribed in their bounding box.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Geometry {
    Rect {
        bounds: BoundingBox,
    },
    Circle {
        bounds: BoundingBox,
    },
    Triangle {
        bounds: BoundingBox,
    },
    /// Freehand stroke through an ordered list of points
    Path {
        points: Vec<Point>,
    },
    /// Text block; `anchor` is the top-left corner of the first line
    Text {
        anchor: Point,
        content: String,
    },
}

impl Geometry {
    /// Geometry for a shape tool primitive.
    pub fn shape(kind: ShapeKind, bounds: BoundingBox) -> Self {
        match kind {
            ShapeKind::Rect => Geometry::Rect { bounds },
            ShapeKind::Circle => Geometry::Circle { bounds },
            ShapeKind::Triangle => Geometry::Triangle { bounds },
        }
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            Geometry::Rect { .. } => ElementKind::Rect,
            Geometry::Circle { .. } => ElementKind::Circle,
            Geometry::Triangle { .. } => ElementKind::Triangle,
            Geometry::Path { .. } => ElementKind::Path,
            Geometry::Text { .. } => ElementKind::Text,
        }
    }

    /// Mutable access to the box of shape primitives; `None` for paths and text.
    pub fn bounds_mut(&mut self) -> Option<&mut BoundingBox> {
        match self {
            Geometry::Rect { bounds } | Geometry::Circle { bounds } | Geometry::Triangle { bounds } => {
                Some(bounds)
            }
            Geometry::Path { .. } | Geometry::Text { .. } => None,
        }
    }

    /// Returns a copy moved by `(dx, dy)`.
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        match self {
            Geometry::Rect { bounds } => Geometry::Rect {
                bounds: bounds.translate(dx, dy),
            },
            Geometry::Circle { bounds } => Geometry::Circle {
                bounds: bounds.translate(dx, dy),
            },
            Geometry::Triangle { bounds } => Geometry::Triangle {
                bounds: bounds.translate(dx, dy),
            },
            Geometry::Path { points } => Geometry::Path {
                points: points.iter().map(|p| p.offset(dx, dy)).collect(),
            },
            Geometry::Text { anchor, content } => Geometry::Text {
                anchor: anchor.offset(dx, dy),
                content: content.clone(),
            },
        }
    }
}

/// Visual parameters carried by every element.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Style {
    pub color: Color,
    /// Stroke width in world units
    pub thickness: f64,
    /// Font size for text elements
    pub font_size: f64,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            color: Color::default(),
            thickness: 3.0,
            font_size: 32.0,
        }
    }
}

/// A placed drawable.
///
/// `z_index` is assigned by the store on insertion; the value on a draft
/// element is meaningless until it has been committed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub id: ElementId,
    #[serde(flatten)]
    pub geometry: Geometry,
    pub style: Style,
    pub z_index: u64,
}

impl Element {
    pub fn new(id: ElementId, geometry: Geometry, style: Style) -> Self {
        Self {
            id,
            geometry,
            style,
            z_index: 0,
        }
    }

    pub fn kind(&self) -> ElementKind {
        self.geometry.kind()
    }

    /// Smallest axis-aligned box enclosing the element's geometry.
    ///
    /// Stroke width is not included; see [`Element::damage_bounds`].
    pub fn bounding_box(&self) -> BoundingBox {
        match &self.geometry {
            Geometry::Rect { bounds } | Geometry::Circle { bounds } | Geometry::Triangle { bounds } => {
                *bounds
            }
            Geometry::Path { points } => bounding_box_for_points(points).unwrap_or_default(),
            Geometry::Text { anchor, content } => text_bounds(*anchor, content, self.style.font_size),
        }
    }

    /// Region a renderer has to repaint when this element changes.
    pub fn damage_bounds(&self) -> BoundingBox {
        let padding = (self.style.thickness / 2.0).ceil().max(1.0);
        self.bounding_box().inflate(padding)
    }

    /// Hit test against the element's geometry, allowing `tolerance` slack.
    pub fn contains_point(&self, point: Point, tolerance: f64) -> bool {
        match &self.geometry {
            Geometry::Rect { bounds } => bounds.inflate(tolerance).contains(point),
            Geometry::Circle { bounds } => {
                let radius = bounds.width.min(bounds.height) / 2.0;
                bounds.center().distance_to(point) <= radius + tolerance
            }
            Geometry::Triangle { bounds } => {
                let [a, b, c] = triangle_vertices(bounds);
                point_in_triangle(point, [a, b, c])
                    || [(a, b), (b, c), (c, a)]
                        .iter()
                        .any(|(start, end)| distance_to_segment(point, *start, *end) <= tolerance)
            }
            Geometry::Path { points } => match points.as_slice() {
                [] => false,
                [only] => only.distance_to(point) <= tolerance,
                _ => points
                    .windows(2)
                    .any(|pair| distance_to_segment(point, pair[0], pair[1]) <= tolerance),
            },
            Geometry::Text { .. } => self.bounding_box().inflate(tolerance).contains(point),
        }
    }

    /// Moves the element by `(dx, dy)` in place.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.geometry = self.geometry.translated(dx, dy);
    }
}

/// Replacement values applied by [`ElementStore::update`](super::ElementStore::update).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ElementPatch {
    pub geometry: Option<Geometry>,
    pub style: Option<Style>,
}

impl ElementPatch {
    pub fn geometry(geometry: Geometry) -> Self {
        Self {
            geometry: Some(geometry),
            style: None,
        }
    }

    pub fn style(style: Style) -> Self {
        Self {
            geometry: None,
            style: Some(style),
        }
    }
}

/// Estimated box of rendered text, from the longest line and the line count.
pub(crate) fn text_bounds(anchor: Point, content: &str, font_size: f64) -> BoundingBox {
    let lines = content.split('\n').count().max(1);
    let widest = content
        .split('\n')
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);

    BoundingBox::new(
        anchor.x,
        anchor.y,
        widest as f64 * font_size * TEXT_ADVANCE_RATIO,
        lines as f64 * font_size * TEXT_LINE_HEIGHT_RATIO,
    )
}
