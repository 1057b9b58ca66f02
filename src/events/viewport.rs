use super::InputWiring;
use crate::dom;
use crate::layout::wheel_delta_px;
use viewer_core::InputEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_viewport_handlers(w: &InputWiring) {
    wire_wheel(w);
    wire_resize(w);
    wire_cancel(w);
    wire_reset(w);
}

/// Match the renderer to the canvas' current CSS size.
pub fn sync_size(w: &InputWiring) {
    let (width, height) = dom::sync_canvas_backing_size(&w.canvas);
    w.dispatch(InputEvent::Resize { width, height });
}

fn wire_wheel(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        let delta_y = wheel_delta_px(ev.delta_y(), ev.delta_mode());
        if w.dispatch(InputEvent::Wheel { delta_y }).consumed {
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);

    // non-passive so the page does not scroll under the zoom
    let options = web::AddEventListenerOptions::new();
    options.set_passive(false);
    _ = canvas_for_listener.add_event_listener_with_callback_and_add_event_listener_options(
        "wheel",
        closure.as_ref().unchecked_ref(),
        &options,
    );
    closure.forget();
}

fn wire_resize(w: &InputWiring) {
    sync_size(w);
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move || {
        sync_size(&w);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

// Leaving the page, losing focus or a cancelled pointer all end the drag.
fn wire_cancel(w: &InputWiring) {
    let cancel_w = w.clone();
    let closure = Closure::wrap(Box::new(move || {
        cancel_w.dispatch(InputEvent::Cancel);
    }) as Box<dyn FnMut()>);
    let callback: &js_sys::Function = closure.as_ref().unchecked_ref();

    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("blur", callback);
        _ = window.add_event_listener_with_callback("pointercancel", callback);
    }
    if let Some(root) = w.document.document_element() {
        _ = root.add_event_listener_with_callback("pointerleave", callback);
    }
    closure.forget();
}

fn wire_reset(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        w.dispatch(InputEvent::Reset);
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("dblclick", closure.as_ref().unchecked_ref());
    closure.forget();
}
