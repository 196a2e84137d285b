//! Shared constants for the sketchpad crate.

// ── Surface ─────────────────────────────────────────────────────

/// Edge length of the square drawing surface, in CSS pixels.
pub const SURFACE_SIZE: u32 = 256;

// ── Markers ─────────────────────────────────────────────────────

/// Line width of the thin marker, in pixels.
pub const THIN_THICKNESS: f64 = 3.0;

/// Line width of the thick marker, in pixels.
pub const THICK_THICKNESS: f64 = 10.0;

/// Cursor preview glyph for the thin marker.
pub const THIN_PREVIEW: &str = "*";

/// Cursor preview glyph for the thick marker.
pub const THICK_PREVIEW: &str = "o";

// ── Stickers ────────────────────────────────────────────────────

/// Nominal sticker size; the rendered glyph font scales with this.
pub const STICKER_SIZE: f64 = 10.0;

/// Glyphs offered as sticker tools by the stock client.
pub const STICKERS: [&str; 3] = ["⭐", "🎃", "😺"];
