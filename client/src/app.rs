//! Application bootstrap: builds the page and wires DOM events to the engine.
//!
//! Engine state is owned by an `Rc<RefCell<Engine>>` shared among the event
//! closures. Each closure borrows the engine only for the duration of its
//! own callback, computes the resulting actions, and then processes them —
//! no borrow is ever held across a callback boundary.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event, HtmlButtonElement, HtmlCanvasElement, PointerEvent};

use sketchpad::consts::{STICKERS, SURFACE_SIZE};
use sketchpad::engine::{Action, Engine};
use sketchpad::input::Tool;

use crate::dom::{create_button, create_canvas, event_to_point, line_break, set_tool_button};

/// The page's interactive elements.
struct Ui {
    canvas: HtmlCanvasElement,
    clear_button: HtmlButtonElement,
    undo_button: HtmlButtonElement,
    redo_button: HtmlButtonElement,
    tool_buttons: Vec<(HtmlButtonElement, Tool)>,
}

/// Build the page imperatively: title, canvas, then the control buttons.
fn build_page(document: &Document) -> Result<Ui, JsValue> {
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?;

    let title = document.create_element("h1")?;
    title.set_text_content(Some("Sticker Sketchpad"));
    body.append_child(&title)?;

    let canvas = create_canvas(document, SURFACE_SIZE, SURFACE_SIZE)?;
    body.append_child(&canvas)?;

    line_break(document, &body)?;
    line_break(document, &body)?;

    let clear_button = create_button(document, "CLEAR")?;
    let undo_button = create_button(document, "UNDO")?;
    let redo_button = create_button(document, "REDO")?;
    body.append_child(&clear_button)?;
    body.append_child(&undo_button)?;
    body.append_child(&redo_button)?;

    line_break(document, &body)?;

    let mut tool_buttons = Vec::new();
    for (label, tool) in [("THIN", Tool::ThinMarker), ("THICK", Tool::ThickMarker)] {
        let button = create_button(document, label)?;
        body.append_child(&button)?;
        tool_buttons.push((button, tool));
    }
    for glyph in STICKERS {
        let button = create_button(document, glyph)?;
        body.append_child(&button)?;
        tool_buttons.push((button, Tool::Sticker(glyph)));
    }

    Ok(Ui { canvas, clear_button, undo_button, redo_button, tool_buttons })
}

/// Apply the engine's requested effects: redraw and control state.
fn process_actions(
    actions: &[Action],
    engine: &Engine,
    undo_button: &HtmlButtonElement,
    redo_button: &HtmlButtonElement,
) {
    for action in actions {
        match action {
            Action::RenderNeeded => {
                if let Err(err) = engine.render() {
                    log::error!("render failed: {err:?}");
                }
            }
            Action::HistoryChanged => {
                undo_button.set_disabled(!engine.can_undo());
                redo_button.set_disabled(!engine.can_redo());
            }
        }
    }
}

/// Reflect the active tool on the tool buttons via `aria-pressed`.
fn sync_tool_buttons(buttons: &[(HtmlButtonElement, Tool)], active: Tool) {
    for (button, tool) in buttons {
        if let Err(err) = set_tool_button(button, *tool == active) {
            log::error!("tool button update failed: {err:?}");
        }
    }
}

fn attach_pointer_listener<F>(
    canvas: &HtmlCanvasElement,
    event: &str,
    handler: F,
) -> Result<(), JsValue>
where
    F: FnMut(PointerEvent) + 'static,
{
    let closure = Closure::<dyn FnMut(PointerEvent)>::new(handler);
    canvas.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn attach_click_listener<F>(button: &HtmlButtonElement, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Build the page, create the engine, and wire every listener.
///
/// # Errors
///
/// Returns `Err` if the DOM is unavailable or page construction fails.
#[wasm_bindgen(start)]
pub fn run() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info)
        .map_err(|err| JsValue::from_str(&err.to_string()))?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let ui = build_page(&document)?;
    let engine = Rc::new(RefCell::new(Engine::new(ui.canvas.clone())?));
    let tool_buttons = Rc::new(ui.tool_buttons);

    // Initial paint and control state.
    engine.borrow().render()?;
    ui.undo_button.set_disabled(true);
    ui.redo_button.set_disabled(true);
    sync_tool_buttons(&tool_buttons, Tool::default());

    // Pointer events on the canvas.
    {
        let engine = Rc::clone(&engine);
        let canvas = ui.canvas.clone();
        let undo = ui.undo_button.clone();
        let redo = ui.redo_button.clone();
        attach_pointer_listener(&ui.canvas, "pointerdown", move |event| {
            let pt = event_to_point(&canvas, &event);
            let actions = engine.borrow_mut().on_pointer_down(pt);
            process_actions(&actions, &engine.borrow(), &undo, &redo);
        })?;
    }
    {
        let engine = Rc::clone(&engine);
        let canvas = ui.canvas.clone();
        let undo = ui.undo_button.clone();
        let redo = ui.redo_button.clone();
        attach_pointer_listener(&ui.canvas, "pointermove", move |event| {
            let pt = event_to_point(&canvas, &event);
            let actions = engine.borrow_mut().on_pointer_move(pt);
            process_actions(&actions, &engine.borrow(), &undo, &redo);
        })?;
    }
    {
        let engine = Rc::clone(&engine);
        let undo = ui.undo_button.clone();
        let redo = ui.redo_button.clone();
        attach_pointer_listener(&ui.canvas, "pointerup", move |_event| {
            let actions = engine.borrow_mut().on_pointer_up();
            process_actions(&actions, &engine.borrow(), &undo, &redo);
        })?;
    }
    {
        let engine = Rc::clone(&engine);
        let undo = ui.undo_button.clone();
        let redo = ui.redo_button.clone();
        attach_pointer_listener(&ui.canvas, "pointerleave", move |_event| {
            let actions = engine.borrow_mut().on_pointer_leave();
            process_actions(&actions, &engine.borrow(), &undo, &redo);
        })?;
    }
    {
        let engine = Rc::clone(&engine);
        let canvas = ui.canvas.clone();
        let undo = ui.undo_button.clone();
        let redo = ui.redo_button.clone();
        attach_pointer_listener(&ui.canvas, "pointerenter", move |event| {
            let pt = event_to_point(&canvas, &event);
            let actions = engine.borrow_mut().on_pointer_enter(pt);
            process_actions(&actions, &engine.borrow(), &undo, &redo);
        })?;
    }

    // History controls.
    {
        let engine = Rc::clone(&engine);
        let undo = ui.undo_button.clone();
        let redo = ui.redo_button.clone();
        attach_click_listener(&ui.clear_button, move |_| {
            let actions = engine.borrow_mut().clear();
            process_actions(&actions, &engine.borrow(), &undo, &redo);
        })?;
    }
    {
        let engine = Rc::clone(&engine);
        let undo = ui.undo_button.clone();
        let redo = ui.redo_button.clone();
        attach_click_listener(&ui.undo_button, move |_| {
            let actions = engine.borrow_mut().undo();
            process_actions(&actions, &engine.borrow(), &undo, &redo);
        })?;
    }
    {
        let engine = Rc::clone(&engine);
        let undo = ui.undo_button.clone();
        let redo = ui.redo_button.clone();
        attach_click_listener(&ui.redo_button, move |_| {
            let actions = engine.borrow_mut().redo();
            process_actions(&actions, &engine.borrow(), &undo, &redo);
        })?;
    }

    // Tool selection.
    for (button, tool) in &*tool_buttons {
        let engine = Rc::clone(&engine);
        let buttons = Rc::clone(&tool_buttons);
        let undo = ui.undo_button.clone();
        let redo = ui.redo_button.clone();
        let tool = *tool;
        attach_click_listener(button, move |_| {
            let actions = engine.borrow_mut().set_tool(tool);
            sync_tool_buttons(&buttons, tool);
            process_actions(&actions, &engine.borrow(), &undo, &redo);
        })?;
    }

    log::info!("sticker sketchpad ready");
    Ok(())
}
