use crate::constants::{ACTIVE_CLASS, ATTR_SRC_ACTIVE, ATTR_SRC_IDLE};
use crate::dom;
use crate::layout::{container_left_px, css_opacity, css_px};
use fnv::FnvHashMap;
use viewer_core::{ObjectTransform, SceneSink, TargetId, WidgetId, WidgetRegistry};
use wasm_bindgen::prelude::*;
use web_sys as web;

#[wasm_bindgen]
extern "C" {
    /// Renderer handle supplied by the page. It owns the scene, the loaded
    /// model and the canvas; this crate only feeds it transforms and sizes.
    pub type Viewer;

    #[wasm_bindgen(method, getter)]
    pub fn canvas(this: &Viewer) -> web::HtmlCanvasElement;

    #[wasm_bindgen(method, js_name = applyTransform)]
    pub fn apply_transform(
        this: &Viewer,
        rotation_x: f32,
        rotation_y: f32,
        x: f32,
        y: f32,
        z: f32,
    );

    #[wasm_bindgen(method)]
    pub fn resize(this: &Viewer, width: u32, height: u32);
}

/// Writes controller output to the renderer and the page.
pub struct PageSink {
    viewer: Viewer,
    widgets: FnvHashMap<WidgetId, web::HtmlElement>,
    targets: FnvHashMap<TargetId, web::HtmlElement>,
}

impl PageSink {
    /// Elements are looked up once; ids that fail to resolve are just not written to.
    pub fn new(viewer: Viewer, document: &web::Document, registry: &WidgetRegistry) -> Self {
        let mut widgets = FnvHashMap::default();
        let mut targets = FnvHashMap::default();
        for w in registry.iter() {
            if let Some(el) = dom::html_element(document, w.id.as_str()) {
                widgets.insert(w.id.clone(), el);
            }
            if let Some(el) = dom::html_element(document, w.target_id.as_str()) {
                targets.insert(w.target_id.clone(), el);
            }
        }
        Self {
            viewer,
            widgets,
            targets,
        }
    }
}

impl SceneSink for PageSink {
    fn apply_transform(&mut self, t: &ObjectTransform) {
        self.viewer.apply_transform(
            t.rotation_x,
            t.rotation_y,
            t.position.x,
            t.position.y,
            t.position.z,
        );
    }

    fn set_target_opacity(&mut self, target: &TargetId, opacity: f32) {
        if let Some(el) = self.targets.get(target) {
            _ = el.style().set_property("opacity", &css_opacity(opacity));
        }
    }

    fn set_widget_position(&mut self, widget: &WidgetId, position: f32) {
        if let Some(el) = self.widgets.get(widget) {
            _ = el
                .style()
                .set_property("left", &css_px(container_left_px(position)));
        }
    }

    fn set_widget_active(&mut self, widget: &WidgetId, active: bool) {
        let Some(el) = self.widgets.get(widget) else {
            return;
        };
        _ = el.class_list().toggle_with_force(ACTIVE_CLASS, active);
        let attr = if active { ATTR_SRC_ACTIVE } else { ATTR_SRC_IDLE };
        if let Some(src) = el.get_attribute(attr) {
            _ = el.set_attribute("src", &src);
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.viewer.resize(width, height);
    }
}
