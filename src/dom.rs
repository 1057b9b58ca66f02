use crate::constants::*;
use crate::layout::parse_px;
use viewer_core::config::OVERRIDE_KEYS;
use viewer_core::{ViewerConfig, WidgetDecl};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> (u32, u32) {
    let (mut w_px, mut h_px) = (canvas.width(), canvas.height());
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        w_px = ((rect.width() * dpr) as u32).max(1);
        h_px = ((rect.height() * dpr) as u32).max(1);
        canvas.set_width(w_px);
        canvas.set_height(h_px);
    }
    (w_px, h_px)
}

#[inline]
pub fn html_element(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// Build the viewer config from `data-*` overrides on the renderer canvas.
pub fn read_config(canvas: &web::HtmlCanvasElement) -> ViewerConfig {
    let mut config = ViewerConfig::default();
    let attrs: Vec<(&str, String)> = OVERRIDE_KEYS
        .iter()
        .filter_map(|&key| {
            canvas
                .get_attribute(&format!("{}{}", CONFIG_ATTR_PREFIX, key))
                .map(|v| (key, v))
        })
        .collect();
    for err in config.apply_overrides(attrs.iter().map(|(k, v)| (*k, v.as_str()))) {
        log::warn!("[config] ignored: {}", err);
    }
    config
}

/// Declare every slider on the page. Widgets without an id get one so the
/// page and the registry agree on naming.
pub fn discover_widgets(document: &web::Document, default_domain: (f32, f32)) -> Vec<WidgetDecl> {
    let Ok(nodes) = document.query_selector_all(WIDGET_SELECTOR) else {
        return Vec::new();
    };
    let mut decls = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
            continue;
        };
        if el.id().is_empty() {
            el.set_id(&format!("{}{}", WIDGET_ID_PREFIX, i));
        }
        let attr_px = |name: &str| el.get_attribute(name).as_deref().and_then(parse_px);
        decls.push(WidgetDecl {
            id: el.id(),
            domain_min: attr_px(ATTR_DOMAIN_MIN).unwrap_or(default_domain.0),
            domain_max: attr_px(ATTR_DOMAIN_MAX).unwrap_or(default_domain.1),
            target_id: el.get_attribute(ATTR_TARGET).unwrap_or_default(),
            initial_position: attr_px(ATTR_INITIAL),
        });
    }
    decls
}
