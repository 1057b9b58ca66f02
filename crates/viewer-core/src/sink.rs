use crate::orbit::ObjectTransform;
use crate::{TargetId, WidgetId};

/// Output side of the controller: the renderer and the page.
///
/// Slider updates are pushed as soon as an event produces them. The object
/// transform is pulled by the render tick and handed over through
/// [`SceneSink::apply_transform`].
pub trait SceneSink {
    fn apply_transform(&mut self, transform: &ObjectTransform);

    fn set_target_opacity(&mut self, target: &TargetId, opacity: f32);

    /// `position` is in the canonical absolute screen space; converting it to
    /// whatever the page layout wants is the sink's business.
    fn set_widget_position(&mut self, widget: &WidgetId, position: f32);

    /// Visual "grabbed" state of a slider, e.g. to swap its icon.
    fn set_widget_active(&mut self, widget: &WidgetId, active: bool);

    fn resize(&mut self, width: u32, height: u32);
}
