//! Drawing engine for the sticker sketchpad.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! full lifecycle of the sketch: translating pointer input into history
//! mutations, tracking the active tool and its cursor preview, maintaining
//! the undo/redo stacks, and rendering the scene. The host layer is
//! responsible only for wiring DOM events to the engine and processing the
//! resulting [`engine::Action`]s.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`drawable`] | Strokes, stickers, and the drawable variant type |
//! | [`history`] | Undo/redo stacks over committed drawables |
//! | [`input`] | Tools, cursor preview, and the gesture state machine |
//! | [`render`] | Scene rendering to the 2D context |
//! | [`consts`] | Shared constants (surface size, marker presets, stickers) |

pub mod consts;
pub mod drawable;
pub mod engine;
pub mod history;
pub mod input;
pub mod render;
