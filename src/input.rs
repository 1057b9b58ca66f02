use viewer_core::{Modifiers, PointerSample};
use web_sys as web;

// Samples stay in viewport CSS px; that is the canonical origin for sliders.
#[inline]
pub fn pointer_sample(ev: &web::MouseEvent) -> PointerSample {
    PointerSample::new(ev.client_x() as f32, ev.client_y() as f32)
}

#[inline]
pub fn modifiers(ev: &web::MouseEvent) -> Modifiers {
    Modifiers {
        shift: ev.shift_key(),
        ctrl: ev.ctrl_key(),
        alt: ev.alt_key(),
        meta: ev.meta_key(),
    }
}
