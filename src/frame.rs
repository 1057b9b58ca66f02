use crate::viewer::PageSink;
use std::cell::RefCell;
use std::rc::Rc;
use viewer_core::InputController;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Per-frame state. The tick only re-reads committed controller state; all
/// input mapping happens in the event handlers.
pub struct FrameContext {
    pub controller: Rc<RefCell<InputController>>,
    pub sink: Rc<RefCell<PageSink>>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let mut sink = self.sink.borrow_mut();
        self.controller.borrow_mut().frame(&mut *sink);
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}
