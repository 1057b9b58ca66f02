//! Slider controller: maps pointer X to widget position and layer opacity.

use crate::config::SliderParams;
use crate::math::{clamp, ratio_in, remap};
use crate::registry::WidgetRegistry;
use crate::session::{PointerSample, SliderDrag};
use crate::sink::SceneSink;
use crate::{TargetId, WidgetId};
use fnv::FnvHashMap;

// A layer driven by a slider never becomes fully invisible.
pub const OPACITY_FLOOR: f32 = 0.2;
pub const OPACITY_SPAN: f32 = 0.8;

/// Opacity for a slider at `position` within `[domain_min, domain_max]`.
///
/// The position is saturated first, so the result is always in
/// `[OPACITY_FLOOR, OPACITY_FLOOR + OPACITY_SPAN]`.
#[inline]
pub fn opacity_for_position(position: f32, domain_min: f32, domain_max: f32) -> f32 {
    let ratio = ratio_in(position, domain_min, domain_max);
    remap(ratio, 0.0, 1.0, OPACITY_FLOOR, OPACITY_FLOOR + OPACITY_SPAN)
}

#[derive(Clone, Debug, PartialEq)]
pub struct SliderWidget {
    pub id: WidgetId,
    pub domain_min: f32,
    pub domain_max: f32,
    pub bound_target_id: TargetId,
    pub current_position: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct OpacityTarget {
    pub id: TargetId,
    pub opacity: f32,
}

#[derive(Clone, Debug)]
struct Entry {
    widget: SliderWidget,
    target: OpacityTarget,
}

/// Owns every widget/target pair. Which one a drag moves is decided by the
/// [`SliderDrag`] handed in, never by anything stored here.
#[derive(Clone, Debug)]
pub struct SliderController {
    params: SliderParams,
    entries: FnvHashMap<WidgetId, Entry>,
    order: Vec<WidgetId>,
}

impl SliderController {
    pub fn new(registry: &WidgetRegistry, params: SliderParams) -> Self {
        let mut entries = FnvHashMap::default();
        let mut order = Vec::with_capacity(registry.len());
        for w in registry.iter() {
            let widget = SliderWidget {
                id: w.id.clone(),
                domain_min: w.domain_min,
                domain_max: w.domain_max,
                bound_target_id: w.target_id.clone(),
                current_position: w.initial_position,
            };
            let target = OpacityTarget {
                id: w.target_id.clone(),
                opacity: opacity_for_position(w.initial_position, w.domain_min, w.domain_max),
            };
            order.push(w.id.clone());
            entries.insert(w.id.clone(), Entry { widget, target });
        }
        Self {
            params,
            entries,
            order,
        }
    }

    pub fn widget(&self, id: &WidgetId) -> Option<&SliderWidget> {
        self.entries.get(id).map(|e| &e.widget)
    }

    pub fn target(&self, id: &WidgetId) -> Option<&OpacityTarget> {
        self.entries.get(id).map(|e| &e.target)
    }

    pub fn contains(&self, id: &WidgetId) -> bool {
        self.entries.contains_key(id)
    }

    /// Widgets in declaration order.
    pub fn widgets(&self) -> impl Iterator<Item = &SliderWidget> {
        self.order.iter().filter_map(|id| self.widget(id))
    }

    /// Push every widget's current position and opacity once.
    pub fn sync_all(&self, sink: &mut impl SceneSink) {
        for id in &self.order {
            if let Some(e) = self.entries.get(id) {
                sink.set_widget_position(&e.widget.id, e.widget.current_position);
                sink.set_target_opacity(&e.target.id, e.target.opacity);
            }
        }
    }

    /// Open a drag on `id`. Returns `None` for an unregistered widget.
    pub fn begin(&self, id: &WidgetId, sink: &mut impl SceneSink) -> Option<SliderDrag> {
        let e = self.entries.get(id)?;
        sink.set_widget_active(id, true);
        Some(SliderDrag {
            widget_id: e.widget.id.clone(),
            range_min: e.widget.domain_min,
            range_max: e.widget.domain_max,
            target_id: e.widget.bound_target_id.clone(),
        })
    }

    /// Move the dragged widget to the pointer and push position and opacity.
    pub fn drag(&mut self, drag: &SliderDrag, pointer: PointerSample, sink: &mut impl SceneSink) {
        let Some(e) = self.entries.get_mut(&drag.widget_id) else {
            return;
        };
        let position = clamp(
            pointer.x - self.params.origin_offset,
            drag.range_min,
            drag.range_max,
        );
        let opacity = opacity_for_position(position, drag.range_min, drag.range_max);
        e.widget.current_position = position;
        e.target.opacity = opacity;
        sink.set_widget_position(&drag.widget_id, position);
        sink.set_target_opacity(&drag.target_id, opacity);
    }

    /// Close a drag. The widget keeps its last position.
    pub fn end(&self, drag: &SliderDrag, sink: &mut impl SceneSink) {
        sink.set_widget_active(&drag.widget_id, false);
    }
}
