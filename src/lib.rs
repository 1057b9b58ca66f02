#![cfg(target_arch = "wasm32")]
//! Browser front end: binds page pointer events and the slider widgets to
//! the `viewer-core` input controller and pushes its output to the renderer.
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use viewer_core::{InputController, WidgetRegistry};
use wasm_bindgen::prelude::*;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod layout;
mod viewer;

pub use viewer::Viewer;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("layer-viewer starting");
    Ok(())
}

/// Take over pointer input for `viewer`. Called by the page once the model
/// has loaded; later calls are ignored.
#[wasm_bindgen]
pub fn attach(viewer: Viewer) -> Result<(), JsValue> {
    static ATTACHED: AtomicBool = AtomicBool::new(false);
    if ATTACHED.swap(true, Ordering::SeqCst) {
        log::warn!("attach called twice; ignoring");
        return Ok(());
    }
    init(viewer).map_err(|e| {
        log::error!("init error: {:?}", e);
        JsValue::from_str(&format!("{:#}", e))
    })
}

fn init(viewer: Viewer) -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = viewer.canvas();

    let config = dom::read_config(&canvas);
    let decls = dom::discover_widgets(&document, config.slider.default_domain);
    let declared = decls.len();
    let (registry, errors) =
        WidgetRegistry::build_with(decls, |target| document.get_element_by_id(target).is_some());
    log::info!(
        "[setup] sliders={} excluded={} rotate={} pan={} zoom={} pitch={:?}",
        registry.len(),
        errors.len(),
        config.orbit.rotate_speed,
        config.orbit.pan_speed,
        config.orbit.zoom_speed,
        config.orbit.pitch_policy
    );
    if declared > 0 && registry.is_empty() {
        log::warn!("[setup] none of {} sliders usable; orbit only", declared);
    }

    let mut sink = viewer::PageSink::new(viewer, &document, &registry);
    let controller = InputController::new(&registry, config);
    controller.sync(&mut sink);

    let controller = Rc::new(RefCell::new(controller));
    let sink = Rc::new(RefCell::new(sink));
    let widget_ids: Vec<_> = registry.iter().map(|w| w.id.clone()).collect();

    let wiring = events::InputWiring {
        document,
        canvas,
        controller: controller.clone(),
        sink: sink.clone(),
    };
    events::wire_input_handlers(&wiring, &widget_ids);
    events::wire_viewport_handlers(&wiring);

    frame::start_loop(Rc::new(RefCell::new(frame::FrameContext { controller, sink })));
    Ok(())
}
