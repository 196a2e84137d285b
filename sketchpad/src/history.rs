//! Linear command history: everything visible, plus the redo buffer.
//!
//! The committed sequence holds every drawable currently on the surface in
//! insertion order, which is also the draw order (later entries on top). The
//! undone sequence holds drawables removed by undo, most recent last, until
//! either a redo restores them or a new commit discards them — branching
//! invalidates redo.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use crate::drawable::{Drawable, DrawableId, Point};

/// The committed drawables and the redo buffer.
#[derive(Debug)]
pub struct History {
    committed: Vec<Drawable>,
    undone: Vec<Drawable>,
}

impl History {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self { committed: Vec::new(), undone: Vec::new() }
    }

    /// Append a drawable. Discards the redo buffer: once the history
    /// diverges, previously undone drawables are no longer reachable.
    pub fn commit(&mut self, drawable: Drawable) {
        self.committed.push(drawable);
        self.undone.clear();
    }

    /// Move the most recent drawable to the redo buffer. Returns `false`
    /// (a no-op, not an error) when the history is empty.
    pub fn undo(&mut self) -> bool {
        match self.committed.pop() {
            Some(drawable) => {
                self.undone.push(drawable);
                true
            }
            None => false,
        }
    }

    /// Restore the most recently undone drawable. Returns `false` when the
    /// redo buffer is empty.
    pub fn redo(&mut self) -> bool {
        match self.undone.pop() {
            Some(drawable) => {
                self.committed.push(drawable);
                true
            }
            None => false,
        }
    }

    /// Discard both the committed drawables and the redo buffer. Returns
    /// whether anything was discarded.
    pub fn clear_all(&mut self) -> bool {
        let had_content = !self.committed.is_empty() || !self.undone.is_empty();
        self.committed.clear();
        self.undone.clear();
        had_content
    }

    /// Append a point to the in-progress stroke. Applies only when the most
    /// recent committed drawable is the stroke with `id`; returns `false`
    /// otherwise.
    pub fn extend(&mut self, id: DrawableId, point: Point) -> bool {
        match self.committed.last_mut() {
            Some(Drawable::Stroke(stroke)) if stroke.id == id => {
                stroke.extend(point);
                true
            }
            _ => false,
        }
    }

    /// The committed drawables in draw order (bottom first).
    #[must_use]
    pub fn drawables(&self) -> &[Drawable] {
        &self.committed
    }

    /// The redo buffer, most recently undone last.
    #[must_use]
    pub fn undone(&self) -> &[Drawable] {
        &self.undone
    }

    /// Whether there is anything to undo.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.committed.is_empty()
    }

    /// Whether there is anything to redo.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.undone.is_empty()
    }

    /// Number of committed drawables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.committed.len()
    }

    /// Returns `true` if nothing is committed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.committed.is_empty()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
