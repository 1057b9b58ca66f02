pub mod pointer;
pub mod viewport;

use crate::viewer::PageSink;
use std::cell::RefCell;
use std::rc::Rc;
use viewer_core::{EventOutcome, InputController, InputEvent};
use web_sys as web;

pub use pointer::wire_input_handlers;
pub use viewport::wire_viewport_handlers;

#[derive(Clone)]
pub struct InputWiring {
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub controller: Rc<RefCell<InputController>>,
    pub sink: Rc<RefCell<PageSink>>,
}

impl InputWiring {
    /// Feed one event through the controller. Listeners never nest, so the
    /// borrows cannot overlap.
    pub fn dispatch(&self, event: InputEvent) -> EventOutcome {
        let mut sink = self.sink.borrow_mut();
        self.controller.borrow_mut().handle(event, &mut *sink)
    }
}
