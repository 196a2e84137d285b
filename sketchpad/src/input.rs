//! Input model: tools, the cursor preview, and the gesture state machine.
//!
//! This module defines the types consumed by the input engine. [`Tool`]
//! captures the user's intent at the time of a pointer event; selecting a
//! tool replaces the whole value, so thickness, preview glyph, and mode
//! always change together. [`InputState`] is the active gesture being
//! tracked between pointer-down and pointer-up, carrying the id of the
//! drawable committed when the gesture began.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::consts::{STICKER_SIZE, THICK_PREVIEW, THICK_THICKNESS, THIN_PREVIEW, THIN_THICKNESS};
use crate::drawable::{DrawableId, Point};

/// Which tool is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    /// Thin marker (default).
    #[default]
    ThinMarker,
    /// Thick marker.
    ThickMarker,
    /// Sticker stamp with the given glyph.
    Sticker(&'static str),
}

impl Tool {
    /// Line width for markers, nominal glyph size for stickers.
    #[must_use]
    pub fn size(self) -> f64 {
        match self {
            Self::ThinMarker => THIN_THICKNESS,
            Self::ThickMarker => THICK_THICKNESS,
            Self::Sticker(_) => STICKER_SIZE,
        }
    }

    /// Glyph shown in the cursor preview; in sticker mode, also the glyph
    /// that gets stamped.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Self::ThinMarker => THIN_PREVIEW,
            Self::ThickMarker => THICK_PREVIEW,
            Self::Sticker(glyph) => glyph,
        }
    }

    /// Whether pointer-down stamps a sticker rather than starting a stroke.
    #[must_use]
    pub fn is_sticker(self) -> bool {
        matches!(self, Self::Sticker(_))
    }
}

/// The ephemeral tool glyph drawn at the pointer position.
///
/// Recomputed on every pointer move and never stored in the history; the
/// native cursor is hidden over the surface, so this is what the user
/// steers by.
#[derive(Debug, Clone, PartialEq)]
pub struct CursorPreview {
    /// Current pointer position on the surface.
    pub pos: Point,
    /// Nominal glyph size, from the tool.
    pub size: f64,
    /// Preview glyph, from the tool.
    pub glyph: &'static str,
}

impl CursorPreview {
    /// The preview `tool` shows at `pos`.
    #[must_use]
    pub fn for_tool(tool: Tool, pos: Point) -> Self {
        Self { pos, size: tool.size(), glyph: tool.glyph() }
    }
}

/// Persistent UI state visible to the renderer.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Currently active tool.
    pub tool: Tool,
    /// Live cursor preview, present while the pointer is over the surface.
    pub cursor: Option<CursorPreview>,
}

/// Internal state for the input state machine.
///
/// Each active variant carries the id of the drawable committed at
/// pointer-down, so gesture extension can be checked against the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    Idle,
    /// A stroke committed at pointer-down is being extended by each
    /// pointer-move until pointer-up or pointer-leave.
    DrawingStroke {
        /// Id of the in-progress stroke.
        id: DrawableId,
    },
    /// A sticker was stamped at pointer-down. Pointer-moves during this
    /// gesture only track the cursor preview; repositioning the stamped
    /// sticker is out of scope.
    StampingSticker {
        /// Id of the stamped sticker.
        id: DrawableId,
    },
}

impl Default for InputState {
    fn default() -> Self {
        Self::Idle
    }
}
