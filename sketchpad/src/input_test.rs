#![allow(clippy::float_cmp)]

use super::*;

use crate::consts::{STICKER_SIZE, THICK_THICKNESS, THIN_THICKNESS};

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

// =============================================================
// Tool
// =============================================================

#[test]
fn tool_default_is_thin_marker() {
    assert_eq!(Tool::default(), Tool::ThinMarker);
}

#[test]
fn tool_sizes_match_presets() {
    assert_eq!(Tool::ThinMarker.size(), THIN_THICKNESS);
    assert_eq!(Tool::ThickMarker.size(), THICK_THICKNESS);
    assert_eq!(Tool::Sticker("★").size(), STICKER_SIZE);
}

#[test]
fn tool_glyphs_match_presets() {
    assert_eq!(Tool::ThinMarker.glyph(), "*");
    assert_eq!(Tool::ThickMarker.glyph(), "o");
    assert_eq!(Tool::Sticker("★").glyph(), "★");
}

#[test]
fn tool_is_sticker_only_for_stickers() {
    assert!(!Tool::ThinMarker.is_sticker());
    assert!(!Tool::ThickMarker.is_sticker());
    assert!(Tool::Sticker("★").is_sticker());
}

#[test]
fn tool_selection_is_atomic() {
    // A tool value carries size, glyph, and mode together; replacing it
    // can never leave the three out of sync.
    let before = Tool::ThinMarker;
    let after = Tool::Sticker("🎃");
    assert_ne!(before.size(), after.size());
    assert_ne!(before.glyph(), after.glyph());
    assert_ne!(before.is_sticker(), after.is_sticker());
}

// =============================================================
// CursorPreview
// =============================================================

#[test]
fn cursor_preview_for_marker_tool() {
    let preview = CursorPreview::for_tool(Tool::ThickMarker, pt(40.0, 50.0));
    assert_eq!(preview.pos, pt(40.0, 50.0));
    assert_eq!(preview.size, THICK_THICKNESS);
    assert_eq!(preview.glyph, "o");
}

#[test]
fn cursor_preview_for_sticker_tool() {
    let preview = CursorPreview::for_tool(Tool::Sticker("🎃"), pt(1.0, 2.0));
    assert_eq!(preview.size, STICKER_SIZE);
    assert_eq!(preview.glyph, "🎃");
}

// =============================================================
// UiState / InputState
// =============================================================

#[test]
fn ui_state_default_has_no_preview() {
    let ui = UiState::default();
    assert_eq!(ui.tool, Tool::ThinMarker);
    assert!(ui.cursor.is_none());
}

#[test]
fn input_state_default_is_idle() {
    assert_eq!(InputState::default(), InputState::Idle);
}
