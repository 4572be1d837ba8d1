//! Geometry model and element storage.
//!
//! This module defines the drawing data the tool state machine manipulates:
//! - [`Point`] / [`BoundingBox`]: geometry values and hit-testing math
//! - [`Element`]: a placed drawable with identity, geometry, style and z-order
//! - [`ElementStore`]: the ordered collection of committed elements
//! - [`DirtyTracker`]: damage regions a renderer repaints after mutations
//! - [`Viewport`]: the pan offset moved by the hand tool

pub mod color;
pub mod dirty;
pub mod element;
pub mod geometry;
pub mod store;
pub mod viewport;

pub use color::Color;
pub use dirty::DirtyTracker;
pub use element::{Element, ElementId, ElementKind, ElementPatch, Geometry, Style};
pub use geometry::{BoundingBox, Point, normalize};
pub use store::{ElementStore, Query};
pub use viewport::Viewport;
