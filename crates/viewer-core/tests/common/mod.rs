// Shared test sink that records everything pushed to it.

#![allow(dead_code)]

use viewer_core::{ObjectTransform, SceneSink, TargetId, WidgetId};

#[derive(Debug, Clone, PartialEq)]
pub enum Push {
    Transform(ObjectTransform),
    Opacity(String, f32),
    Position(String, f32),
    Active(String, bool),
    Resize(u32, u32),
}

#[derive(Default, Debug)]
pub struct RecordingSink {
    pub pushes: Vec<Push>,
}

impl RecordingSink {
    pub fn last_opacity(&self, target: &str) -> Option<f32> {
        self.pushes.iter().rev().find_map(|p| match p {
            Push::Opacity(t, o) if t == target => Some(*o),
            _ => None,
        })
    }

    pub fn last_position(&self, widget: &str) -> Option<f32> {
        self.pushes.iter().rev().find_map(|p| match p {
            Push::Position(w, x) if w == widget => Some(*x),
            _ => None,
        })
    }

    pub fn active_flags(&self, widget: &str) -> Vec<bool> {
        self.pushes
            .iter()
            .filter_map(|p| match p {
                Push::Active(w, a) if w == widget => Some(*a),
                _ => None,
            })
            .collect()
    }

    pub fn transforms(&self) -> usize {
        self.pushes
            .iter()
            .filter(|p| matches!(p, Push::Transform(_)))
            .count()
    }
}

impl SceneSink for RecordingSink {
    fn apply_transform(&mut self, transform: &ObjectTransform) {
        self.pushes.push(Push::Transform(*transform));
    }

    fn set_target_opacity(&mut self, target: &TargetId, opacity: f32) {
        self.pushes.push(Push::Opacity(target.0.clone(), opacity));
    }

    fn set_widget_position(&mut self, widget: &WidgetId, position: f32) {
        self.pushes.push(Push::Position(widget.0.clone(), position));
    }

    fn set_widget_active(&mut self, widget: &WidgetId, active: bool) {
        self.pushes.push(Push::Active(widget.0.clone(), active));
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.pushes.push(Push::Resize(width, height));
    }
}
