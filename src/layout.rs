use crate::constants::{CONTAINER_LEFT_PX, WHEEL_LINE_PX, WHEEL_PAGE_PX};

// DOM WheelEvent.deltaMode values
const DELTA_LINE: u32 = 1;
const DELTA_PAGE: u32 = 2;

/// Container-relative CSS `left` for a slider at absolute position `x`.
#[inline]
pub fn container_left_px(x: f32) -> f32 {
    x - CONTAINER_LEFT_PX
}

#[inline]
pub fn css_px(v: f32) -> String {
    format!("{:.1}px", v)
}

#[inline]
pub fn css_opacity(o: f32) -> String {
    format!("{:.3}", o)
}

/// Parse a px attribute such as `"24"` or `" 140px "`. Non-finite values are rejected.
pub fn parse_px(raw: &str) -> Option<f32> {
    let s = raw.trim();
    let s = s.strip_suffix("px").unwrap_or(s).trim_end();
    s.parse::<f32>().ok().filter(|v| v.is_finite())
}

/// Wheel delta in px regardless of the event's delta mode.
#[inline]
pub fn wheel_delta_px(delta: f64, delta_mode: u32) -> f32 {
    let d = delta as f32;
    match delta_mode {
        DELTA_LINE => d * WHEEL_LINE_PX,
        DELTA_PAGE => d * WHEEL_PAGE_PX,
        _ => d,
    }
}
