//! Rendering: draws the full sketchpad scene to a 2D context.
//!
//! This module is the only place that touches
//! [`web_sys::CanvasRenderingContext2d`]. It receives read-only views of the
//! history and cursor preview and produces pixels — it does not mutate any
//! application state. Every piece of context state the drawing depends on
//! (stroke style, line width, font, fill style) is set explicitly per
//! drawable, so two consecutive draws of unchanged state produce identical
//! pixels.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the
//! result.

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::drawable::{Drawable, Point, Sticker, Stroke};
use crate::history::History;
use crate::input::CursorPreview;

/// Ink color for strokes and glyphs.
const INK: &str = "#000";

/// Glyphs render at four times their nominal size.
const GLYPH_FONT_SCALE: f64 = 4.0;

/// Draw the full scene: committed drawables in insertion order (bottom
/// first), then the cursor preview on top.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    history: &History,
    cursor: Option<&CursorPreview>,
    surface_w: f64,
    surface_h: f64,
) -> Result<(), JsValue> {
    // Layer 1: clear, so replaying the history never doubles up.
    ctx.clear_rect(0.0, 0.0, surface_w, surface_h);

    // Layer 2: committed drawables in z-order.
    for drawable in history.drawables() {
        match drawable {
            Drawable::Stroke(stroke) => draw_stroke(ctx, stroke),
            Drawable::Sticker(sticker) => draw_sticker(ctx, sticker)?,
        }
    }

    // Layer 3: cursor preview.
    if let Some(preview) = cursor {
        draw_glyph(ctx, preview.glyph, preview.pos, preview.size)?;
    }

    Ok(())
}

/// One path, one stroke operation: `move_to` the first point, `line_to`
/// every recorded point in order. Keeps the joins smooth and avoids
/// per-segment artifacts.
fn draw_stroke(ctx: &CanvasRenderingContext2d, stroke: &Stroke) {
    let Some(first) = stroke.points.first() else {
        return;
    };
    ctx.set_stroke_style_str(INK);
    ctx.set_line_width(stroke.thickness);
    ctx.begin_path();
    ctx.move_to(first.x, first.y);
    for point in &stroke.points {
        ctx.line_to(point.x, point.y);
    }
    ctx.stroke();
}

fn draw_sticker(ctx: &CanvasRenderingContext2d, sticker: &Sticker) -> Result<(), JsValue> {
    draw_glyph(ctx, &sticker.glyph, sticker.anchor, sticker.size)
}

/// Place a glyph near `pos`: offset `(-size, +size)` with a font
/// proportional to `size`. A simple placement heuristic, not true centering.
fn draw_glyph(
    ctx: &CanvasRenderingContext2d,
    glyph: &str,
    pos: Point,
    size: f64,
) -> Result<(), JsValue> {
    ctx.set_fill_style_str(INK);
    ctx.set_font(&format!("{}px monospace", size * GLYPH_FONT_SCALE));
    ctx.fill_text(glyph, pos.x - size, pos.y + size)
}
