//! Pointer-input mapping for the layer viewer.
//!
//! Raw pointer and wheel events go in through [`InputController::handle`];
//! orbit/pan/zoom transforms for the displayed object and position/opacity
//! updates for the layer sliders come out through a [`SceneSink`]. Nothing in
//! this crate touches the DOM or a GPU, so everything here runs on the host.

pub mod arbiter;
pub mod config;
pub mod controller;
pub mod math;
pub mod orbit;
pub mod registry;
pub mod session;
pub mod sink;
pub mod slider;

pub use arbiter::{decide, Decision};
pub use config::{ConfigError, SliderParams, ViewerConfig};
pub use controller::{EventOutcome, InputController, InputEvent};
pub use orbit::{ObjectTransform, OrbitController, OrbitParams, PitchPolicy};
pub use registry::{RegistryError, WidgetDecl, WidgetRegistry};
pub use session::{DragSession, HitTarget, Modifiers, ObjectDrag, PointerSample, SliderDrag};
pub use sink::SceneSink;
pub use slider::{opacity_for_position, OpacityTarget, SliderController, SliderWidget};

/// Identifier of a slider widget (the DOM element id on the web front end).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(pub String);

/// Identifier of the visual element whose opacity a slider drives.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TargetId(pub String);

impl WidgetId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TargetId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for WidgetId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<&str> for TargetId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl std::fmt::Display for WidgetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Display for TargetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
