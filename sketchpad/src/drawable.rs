//! Document model: the units of recorded visual content.
//!
//! A [`Drawable`] is either a freehand [`Stroke`] or a stamped [`Sticker`].
//! Both capture everything they need to be redrawn at creation time: a stroke
//! records its thickness and every point of its gesture, a sticker records
//! its anchor, glyph, and size. The renderer reads these types; nothing else
//! is required to reproduce the pixels.
//!
//! Drawables flow from the input engine (creation and, for strokes, gesture
//! extension) into the [`crate::history::History`], whose insertion order is
//! the draw order.

#[cfg(test)]
#[path = "drawable_test.rs"]
mod drawable_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a drawable.
pub type DrawableId = Uuid;

/// A point on the drawing surface, in CSS pixels. Immutable once recorded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A freehand marker stroke.
///
/// Starts with a single point at pointer-down and grows by one point per
/// pointer-move for the duration of its gesture. The point sequence is never
/// empty and never shrinks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stroke {
    /// Unique identifier, assigned at pointer-down.
    pub id: DrawableId,
    /// Recorded gesture path, in order. At least one point.
    pub points: Vec<Point>,
    /// Line width captured from the tool at creation.
    pub thickness: f64,
}

impl Stroke {
    /// Begin a stroke at `at` with the given line width.
    #[must_use]
    pub fn start(at: Point, thickness: f64) -> Self {
        Self { id: Uuid::new_v4(), points: vec![at], thickness }
    }

    /// Append the next gesture point. Only legal while the stroke's gesture
    /// is active; the engine's state machine enforces that window.
    pub fn extend(&mut self, point: Point) {
        self.points.push(point);
    }
}

/// A stamped glyph.
///
/// Fully determined at pointer-down; never mutated afterward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sticker {
    /// Unique identifier, assigned at pointer-down.
    pub id: DrawableId,
    /// Placement anchor on the surface.
    pub anchor: Point,
    /// The stamped glyph.
    pub glyph: String,
    /// Nominal size; the rendered font scales with this.
    pub size: f64,
}

impl Sticker {
    /// Stamp `glyph` at `anchor` with the given nominal size.
    #[must_use]
    pub fn place(anchor: Point, glyph: &str, size: f64) -> Self {
        Self { id: Uuid::new_v4(), anchor, glyph: glyph.to_owned(), size }
    }
}

/// A committed unit of visual content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Drawable {
    Stroke(Stroke),
    Sticker(Sticker),
}

impl Drawable {
    /// The inner drawable's identifier.
    #[must_use]
    pub fn id(&self) -> DrawableId {
        match self {
            Self::Stroke(stroke) => stroke.id,
            Self::Sticker(sticker) => sticker.id,
        }
    }

    /// The stroke variant, if this is one.
    #[must_use]
    pub fn as_stroke(&self) -> Option<&Stroke> {
        match self {
            Self::Stroke(stroke) => Some(stroke),
            Self::Sticker(_) => None,
        }
    }

    /// The sticker variant, if this is one.
    #[must_use]
    pub fn as_sticker(&self) -> Option<&Sticker> {
        match self {
            Self::Sticker(sticker) => Some(sticker),
            Self::Stroke(_) => None,
        }
    }
}
