//! Mode arbiter: the one gate every pointer-down passes through.

use crate::session::{DragSession, HitTarget};
use crate::WidgetId;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    StartSlider(WidgetId),
    StartObjectDrag,
    Ignore,
}

/// Decide what a pointer-down starts.
///
/// In priority order: a registered slider's hit region starts a slider drag;
/// otherwise an idle session starts an object drag; otherwise the event is
/// ignored so a stray press can never open a second session.
pub fn decide(
    target: &HitTarget,
    session: &DragSession,
    is_registered: impl Fn(&WidgetId) -> bool,
) -> Decision {
    match target {
        HitTarget::Widget(id) if is_registered(id) => Decision::StartSlider(id.clone()),
        _ if !session.is_active() => Decision::StartObjectDrag,
        _ => Decision::Ignore,
    }
}
