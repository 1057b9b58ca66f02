use super::InputWiring;
use crate::input;
use viewer_core::{HitTarget, InputEvent, WidgetId};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_input_handlers(w: &InputWiring, widget_ids: &[WidgetId]) {
    for id in widget_ids {
        wire_widget_pointerdown(w, id);
    }
    wire_pointerdown(w);
    wire_pointermove(w);
    wire_pointerup(w);
}

// A press on a slider must never also reach the canvas handler.
fn wire_widget_pointerdown(w: &InputWiring, id: &WidgetId) {
    let Some(el) = w.document.get_element_by_id(id.as_str()) else {
        return;
    };
    let w = w.clone();
    let id = id.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        w.dispatch(InputEvent::PointerDown {
            sample: input::pointer_sample(&ev),
            target: HitTarget::Widget(id.clone()),
            modifiers: input::modifiers(&ev),
        });
    }) as Box<dyn FnMut(_)>);
    _ = el.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let outcome = w.dispatch(InputEvent::PointerDown {
            sample: input::pointer_sample(&ev),
            target: HitTarget::Viewport,
            modifiers: input::modifiers(&ev),
        });
        if outcome.consumed {
            _ = w.canvas.set_pointer_capture(ev.pointer_id());
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let outcome = w.dispatch(InputEvent::PointerMove {
            sample: input::pointer_sample(&ev),
            modifiers: input::modifiers(&ev),
        });
        if outcome.consumed {
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if w.dispatch(InputEvent::PointerUp).consumed {
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
