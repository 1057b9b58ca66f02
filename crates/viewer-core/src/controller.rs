//! The input controller owns the drag session slot and both controllers.
//!
//! Events are handled strictly in arrival order on one thread. Only the
//! controller the arbiter selected ever writes to the session.

use crate::arbiter::{decide, Decision};
use crate::config::ViewerConfig;
use crate::orbit::{ObjectTransform, OrbitController};
use crate::registry::WidgetRegistry;
use crate::session::{DragSession, HitTarget, Modifiers, PointerSample};
use crate::sink::SceneSink;
use crate::slider::SliderController;

/// Abstract pointer/viewport event stream delivered by the page.
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    PointerDown {
        sample: PointerSample,
        target: HitTarget,
        modifiers: Modifiers,
    },
    PointerMove {
        sample: PointerSample,
        modifiers: Modifiers,
    },
    PointerUp,
    /// Pointer left the viewport or the window lost focus.
    Cancel,
    Wheel {
        delta_y: f32,
    },
    Resize {
        width: u32,
        height: u32,
    },
    /// Restore the object's initial transform.
    Reset,
}

/// Whether the event was used; the page suppresses default handling if so.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventOutcome {
    pub consumed: bool,
}

impl EventOutcome {
    const CONSUMED: Self = Self { consumed: true };
    const IGNORED: Self = Self { consumed: false };
}

#[derive(Debug)]
pub struct InputController {
    session: DragSession,
    sliders: SliderController,
    orbit: OrbitController,
    last_applied: Option<ObjectTransform>,
}

impl InputController {
    pub fn new(registry: &WidgetRegistry, config: ViewerConfig) -> Self {
        Self {
            session: DragSession::None,
            sliders: SliderController::new(registry, config.slider),
            orbit: OrbitController::new(config.orbit),
            last_applied: None,
        }
    }

    #[inline]
    pub fn session(&self) -> &DragSession {
        &self.session
    }

    #[inline]
    pub fn transform(&self) -> &ObjectTransform {
        self.orbit.transform()
    }

    #[inline]
    pub fn sliders(&self) -> &SliderController {
        &self.sliders
    }

    /// Push the initial slider state to the page.
    pub fn sync(&self, sink: &mut impl SceneSink) {
        self.sliders.sync_all(sink);
    }

    pub fn handle(&mut self, event: InputEvent, sink: &mut impl SceneSink) -> EventOutcome {
        match event {
            InputEvent::PointerDown {
                sample,
                target,
                modifiers: _,
            } => self.pointer_down(sample, &target, sink),
            InputEvent::PointerMove { sample, modifiers } => {
                self.pointer_move(sample, modifiers, sink)
            }
            InputEvent::PointerUp | InputEvent::Cancel => self.pointer_up(sink),
            InputEvent::Wheel { delta_y } => {
                self.orbit.wheel(delta_y);
                EventOutcome::CONSUMED
            }
            InputEvent::Resize { width, height } => {
                sink.resize(width, height);
                EventOutcome::IGNORED
            }
            InputEvent::Reset => {
                self.orbit.reset();
                log::info!("[orbit] reset");
                EventOutcome::CONSUMED
            }
        }
    }

    /// Render tick: hand the latest transform to the renderer if it changed.
    pub fn frame(&mut self, sink: &mut impl SceneSink) {
        let current = *self.orbit.transform();
        if self.last_applied != Some(current) {
            sink.apply_transform(&current);
            self.last_applied = Some(current);
        }
    }

    fn pointer_down(
        &mut self,
        sample: PointerSample,
        target: &HitTarget,
        sink: &mut impl SceneSink,
    ) -> EventOutcome {
        let sliders = &self.sliders;
        match decide(target, &self.session, |id| sliders.contains(id)) {
            Decision::StartSlider(id) => {
                if self.session.is_active() {
                    log::debug!("[session] {} handed over to slider", self.session.label());
                    self.close_session(sink);
                }
                debug_assert!(!self.session.is_active(), "slider drag over an open session");
                if let Some(drag) = self.sliders.begin(&id, sink) {
                    log::debug!("[session] slider drag on {}", id);
                    self.session = DragSession::SliderDrag(drag);
                }
                EventOutcome::CONSUMED
            }
            Decision::StartObjectDrag => {
                debug_assert!(!self.session.is_active(), "object drag over an open session");
                self.session = DragSession::ObjectDrag(self.orbit.begin(sample));
                log::debug!("[session] object drag at ({:.1},{:.1})", sample.x, sample.y);
                EventOutcome::CONSUMED
            }
            Decision::Ignore => EventOutcome::IGNORED,
        }
    }

    fn pointer_move(
        &mut self,
        sample: PointerSample,
        modifiers: Modifiers,
        sink: &mut impl SceneSink,
    ) -> EventOutcome {
        match &mut self.session {
            DragSession::SliderDrag(drag) => {
                self.sliders.drag(drag, sample, sink);
                EventOutcome::CONSUMED
            }
            DragSession::ObjectDrag(drag) => {
                self.orbit.drag(drag, sample, modifiers);
                EventOutcome::CONSUMED
            }
            DragSession::None => EventOutcome::IGNORED,
        }
    }

    fn pointer_up(&mut self, sink: &mut impl SceneSink) -> EventOutcome {
        if !self.session.is_active() {
            return EventOutcome::IGNORED;
        }
        log::debug!("[session] {} closed", self.session.label());
        self.close_session(sink);
        EventOutcome::CONSUMED
    }

    fn close_session(&mut self, sink: &mut impl SceneSink) {
        if let DragSession::SliderDrag(drag) = std::mem::take(&mut self.session) {
            self.sliders.end(&drag, sink);
        }
    }
}
