//! Top-level engine: the testable core and the canvas-owning wrapper.
//!
//! [`EngineCore`] holds all sketchpad state and implements every operation
//! the UI can trigger — pointer events, tool selection, undo/redo/clear.
//! Mutating operations return [`Action`]s for the host to process, so the
//! host decides when pixels and button states are refreshed. [`Engine`]
//! wraps the core together with the browser canvas element and adds the one
//! operation that needs it: [`Engine::render`].

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::drawable::{Drawable, Point, Sticker, Stroke};
use crate::history::History;
use crate::input::{CursorPreview, InputState, Tool, UiState};
use crate::render;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Effects returned from engine operations for the host to process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Pixels are stale; the host should call [`Engine::render`].
    RenderNeeded,
    /// Undo/redo availability may have changed; refresh control state.
    HistoryChanged,
}

/// Core engine state — all logic that doesn't depend on the canvas element.
///
/// Separated from [`Engine`] so it can be tested without WASM/browser
/// dependencies.
#[derive(Debug, Default)]
pub struct EngineCore {
    pub history: History,
    pub ui: UiState,
    pub input: InputState,
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Tool ---

    /// Set the active tool. Thickness, preview glyph, and mode change
    /// together; a visible cursor preview is restyled in place.
    pub fn set_tool(&mut self, tool: Tool) -> Vec<Action> {
        self.ui.tool = tool;
        match &mut self.ui.cursor {
            Some(preview) => {
                let restyled = CursorPreview::for_tool(tool, preview.pos);
                if *preview == restyled {
                    vec![]
                } else {
                    *preview = restyled;
                    vec![Action::RenderNeeded]
                }
            }
            None => vec![],
        }
    }

    // --- History operations ---

    /// Undo the most recent commit. A no-op on an empty history. Cancels an
    /// active gesture first, so undo only ever sees committed drawables.
    pub fn undo(&mut self) -> Vec<Action> {
        self.input = InputState::Idle;
        if self.history.undo() {
            vec![Action::RenderNeeded, Action::HistoryChanged]
        } else {
            vec![]
        }
    }

    /// Restore the most recently undone drawable. A no-op on an empty redo
    /// buffer.
    pub fn redo(&mut self) -> Vec<Action> {
        self.input = InputState::Idle;
        if self.history.redo() {
            vec![Action::RenderNeeded, Action::HistoryChanged]
        } else {
            vec![]
        }
    }

    /// Discard the whole sketch, redo buffer included. A no-op when there is
    /// nothing to discard.
    pub fn clear(&mut self) -> Vec<Action> {
        self.input = InputState::Idle;
        if self.history.clear_all() {
            vec![Action::RenderNeeded, Action::HistoryChanged]
        } else {
            vec![]
        }
    }

    // --- Pointer events ---

    /// Begin a gesture: commit a one-point stroke (marker mode) or stamp a
    /// sticker (sticker mode) at `pt`. Either commit discards the redo
    /// buffer. Ignored while another gesture is active.
    pub fn on_pointer_down(&mut self, pt: Point) -> Vec<Action> {
        if !matches!(self.input, InputState::Idle) {
            return vec![];
        }
        let tool = self.ui.tool;
        if tool.is_sticker() {
            let sticker = Sticker::place(pt, tool.glyph(), tool.size());
            let id = sticker.id;
            self.history.commit(Drawable::Sticker(sticker));
            self.input = InputState::StampingSticker { id };
        } else {
            let stroke = Stroke::start(pt, tool.size());
            let id = stroke.id;
            self.history.commit(Drawable::Stroke(stroke));
            self.input = InputState::DrawingStroke { id };
        }
        vec![Action::RenderNeeded, Action::HistoryChanged]
    }

    /// Track the pointer: refresh the cursor preview and, in a stroke
    /// gesture, extend the in-progress stroke.
    pub fn on_pointer_move(&mut self, pt: Point) -> Vec<Action> {
        self.ui.cursor = Some(CursorPreview::for_tool(self.ui.tool, pt));
        if let InputState::DrawingStroke { id } = self.input {
            // A stale id means the gesture's stroke is gone; drop to idle.
            if !self.history.extend(id, pt) {
                self.input = InputState::Idle;
            }
        }
        vec![Action::RenderNeeded]
    }

    /// End any active gesture. No further extension is permitted.
    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        if matches!(self.input, InputState::Idle) {
            return vec![];
        }
        self.input = InputState::Idle;
        vec![Action::RenderNeeded]
    }

    /// The pointer left the surface: end any active gesture and hide the
    /// cursor preview.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        let gesture_ended = !matches!(self.input, InputState::Idle);
        let preview_hidden = self.ui.cursor.is_some();
        self.input = InputState::Idle;
        self.ui.cursor = None;
        if gesture_ended || preview_hidden {
            vec![Action::RenderNeeded]
        } else {
            vec![]
        }
    }

    /// The pointer entered the surface: show the cursor preview.
    pub fn on_pointer_enter(&mut self, pt: Point) -> Vec<Action> {
        self.ui.cursor = Some(CursorPreview::for_tool(self.ui.tool, pt));
        vec![Action::RenderNeeded]
    }

    // --- Queries ---

    /// The currently active tool.
    #[must_use]
    pub fn tool(&self) -> Tool {
        self.ui.tool
    }

    /// Whether there is anything to undo.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether there is anything to redo.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Number of committed drawables.
    #[must_use]
    pub fn drawable_count(&self) -> usize {
        self.history.len()
    }
}

/// The full sketchpad engine. Wraps [`EngineCore`] and owns the browser
/// canvas element and its 2D context.
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the element does not provide a 2D rendering context.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx, core: EngineCore::new() })
    }

    // --- Delegated operations ---

    pub fn set_tool(&mut self, tool: Tool) -> Vec<Action> {
        self.core.set_tool(tool)
    }

    pub fn undo(&mut self) -> Vec<Action> {
        self.core.undo()
    }

    pub fn redo(&mut self) -> Vec<Action> {
        self.core.redo()
    }

    pub fn clear(&mut self) -> Vec<Action> {
        self.core.clear()
    }

    pub fn on_pointer_down(&mut self, pt: Point) -> Vec<Action> {
        self.core.on_pointer_down(pt)
    }

    pub fn on_pointer_move(&mut self, pt: Point) -> Vec<Action> {
        self.core.on_pointer_move(pt)
    }

    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        self.core.on_pointer_up()
    }

    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.core.on_pointer_leave()
    }

    pub fn on_pointer_enter(&mut self, pt: Point) -> Vec<Action> {
        self.core.on_pointer_enter(pt)
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a `Canvas2D` call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        render::draw(
            &self.ctx,
            &self.core.history,
            self.core.ui.cursor.as_ref(),
            f64::from(self.canvas.width()),
            f64::from(self.canvas.height()),
        )
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn tool(&self) -> Tool {
        self.core.tool()
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.core.can_undo()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.core.can_redo()
    }

    #[must_use]
    pub fn drawable_count(&self) -> usize {
        self.core.drawable_count()
    }
}
