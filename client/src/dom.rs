//! DOM construction helpers for the sketchpad page.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlButtonElement, HtmlCanvasElement, HtmlElement, PointerEvent};

use sketchpad::drawable::Point;

/// Create a `<button>` with the given label.
pub fn create_button(document: &Document, label: &str) -> Result<HtmlButtonElement, JsValue> {
    let button = document.create_element("button")?.dyn_into::<HtmlButtonElement>()?;
    button.set_text_content(Some(label));
    Ok(button)
}

/// Create the drawing canvas: fixed size, native cursor hidden — the engine
/// draws the tool preview in its place.
pub fn create_canvas(
    document: &Document,
    width: u32,
    height: u32,
) -> Result<HtmlCanvasElement, JsValue> {
    let canvas = document.create_element("canvas")?.dyn_into::<HtmlCanvasElement>()?;
    canvas.set_width(width);
    canvas.set_height(height);
    canvas.style().set_property("cursor", "none")?;
    Ok(canvas)
}

/// Append a `<br>` to `parent`.
pub fn line_break(document: &Document, parent: &HtmlElement) -> Result<(), JsValue> {
    let br = document.create_element("br")?;
    parent.append_child(&br)?;
    Ok(())
}

/// Convert a pointer event's client coordinates to surface coordinates.
#[must_use]
pub fn event_to_point(canvas: &HtmlCanvasElement, event: &PointerEvent) -> Point {
    let rect = canvas.get_bounding_client_rect();
    Point::new(
        f64::from(event.client_x()) - rect.left(),
        f64::from(event.client_y()) - rect.top(),
    )
}

/// Mark a tool button as the active selection.
pub fn set_tool_button(button: &HtmlButtonElement, active: bool) -> Result<(), JsValue> {
    let pressed = if active { "true" } else { "false" };
    button.set_attribute("aria-pressed", pressed)
}
