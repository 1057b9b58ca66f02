/// Page layout and DOM naming constants for the viewer front end.
///
/// Slider positions are kept in absolute viewport px (`clientX` space). The
/// track sits inside a container whose left edge is `CONTAINER_LEFT_PX` from
/// the viewport, so the CSS `left` written to a widget is the absolute
/// position minus that offset.
// Left edge of the slider container in viewport px
pub const CONTAINER_LEFT_PX: f32 = 32.0;

// Slider widgets and the attributes they carry
pub const WIDGET_SELECTOR: &str = ".scroll-bar";
pub const WIDGET_ID_PREFIX: &str = "scroll-bar-";
pub const ATTR_TARGET: &str = "data-logo";
pub const ATTR_DOMAIN_MIN: &str = "data-min";
pub const ATTR_DOMAIN_MAX: &str = "data-max";
pub const ATTR_INITIAL: &str = "data-initial";
pub const ATTR_SRC_ACTIVE: &str = "data-src-active";
pub const ATTR_SRC_IDLE: &str = "data-src-idle";
pub const ACTIVE_CLASS: &str = "is-active";

// Config overrides are read from `data-<key>` on the renderer canvas
pub const CONFIG_ATTR_PREFIX: &str = "data-";

// Wheel deltas reported in lines or pages are converted to px
pub const WHEEL_LINE_PX: f32 = 16.0;
pub const WHEEL_PAGE_PX: f32 = 800.0;
