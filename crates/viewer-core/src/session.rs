//! Drag session state: which mode currently owns pointer-move interpretation.

use crate::{TargetId, WidgetId};
use glam::Vec2;

/// Screen-space pointer coordinates (CSS px, viewport origin) at the last event.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
}

impl PointerSample {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

impl From<Vec2> for PointerSample {
    fn from(v: Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl std::ops::Sub for PointerSample {
    type Output = Vec2;

    fn sub(self, rhs: Self) -> Vec2 {
        self.to_vec2() - rhs.to_vec2()
    }
}

/// Modifier keys observed on the event that produced a sample.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    pub const SHIFT: Self = Self {
        shift: true,
        ctrl: false,
        alt: false,
        meta: false,
    };

    /// Object drags pan instead of rotate while shift or ctrl is held.
    #[inline]
    pub fn pans(&self) -> bool {
        self.shift || self.ctrl
    }
}

/// What a pointer-down landed on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HitTarget {
    /// A slider's hit region. The id may not be registered.
    Widget(WidgetId),
    /// Anything else: the canvas or the page around it.
    Viewport,
}

/// An open slider drag. Carries everything a move needs so the registry is
/// only consulted when the session opens.
#[derive(Clone, Debug, PartialEq)]
pub struct SliderDrag {
    pub widget_id: WidgetId,
    pub range_min: f32,
    pub range_max: f32,
    pub target_id: TargetId,
}

/// An open object drag; deltas are measured from `last_sample`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObjectDrag {
    pub last_sample: PointerSample,
}

/// The single drag session slot. At most one mode is live at a time.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum DragSession {
    #[default]
    None,
    SliderDrag(SliderDrag),
    ObjectDrag(ObjectDrag),
}

impl DragSession {
    #[inline]
    pub fn is_active(&self) -> bool {
        !matches!(self, DragSession::None)
    }

    #[inline]
    pub fn is_slider(&self) -> bool {
        matches!(self, DragSession::SliderDrag(_))
    }

    #[inline]
    pub fn is_object(&self) -> bool {
        matches!(self, DragSession::ObjectDrag(_))
    }

    /// Short label for log lines.
    pub fn label(&self) -> &'static str {
        match self {
            DragSession::None => "none",
            DragSession::SliderDrag(_) => "slider",
            DragSession::ObjectDrag(_) => "object",
        }
    }
}
