//! Small numeric helpers shared by the slider and orbit mappings.

/// Clamp `value` into `[lo, hi]`.
///
/// Unlike `f32::clamp` this never panics: the lower bound is checked first,
/// so an inverted interval yields `lo` for values below it and `hi` above.
#[inline]
pub fn clamp(value: f32, lo: f32, hi: f32) -> f32 {
    if value < lo {
        lo
    } else if value > hi {
        hi
    } else {
        value
    }
}

/// Linearly re-map `value` from `[src_lo, src_hi]` onto `[dst_lo, dst_hi]`.
///
/// No saturation is applied; callers clamp first when they need it. A
/// zero-width source interval maps everything to `dst_lo`.
#[inline]
pub fn remap(value: f32, src_lo: f32, src_hi: f32, dst_lo: f32, dst_hi: f32) -> f32 {
    let span = src_hi - src_lo;
    if span == 0.0 {
        return dst_lo;
    }
    let ratio = (value - src_lo) / span;
    // Weighted form so both endpoints come back bit-exact.
    dst_lo * (1.0 - ratio) + dst_hi * ratio
}

/// Position of `value` inside `[lo, hi]` as a ratio saturated to `[0, 1]`.
#[inline]
pub fn ratio_in(value: f32, lo: f32, hi: f32) -> f32 {
    clamp(remap(clamp(value, lo, hi), lo, hi, 0.0, 1.0), 0.0, 1.0)
}
