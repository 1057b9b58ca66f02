//! Orbit controller: rotate, pan and zoom of the displayed object.

use crate::config::{DEFAULT_PAN_SPEED, DEFAULT_ROTATE_SPEED, DEFAULT_ZOOM_SPEED};
use crate::session::{Modifiers, ObjectDrag, PointerSample};
use glam::{Mat4, Vec3};
use std::f32::consts::FRAC_PI_2;

/// What to do with a pitch update that would reach or pass vertical.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PitchPolicy {
    /// Drop the pitch part of the update; rotation stalls short of the limit.
    #[default]
    Reject,
    /// Accumulate without limit; the object may flip over.
    Unbounded,
}

#[derive(Clone, Debug, PartialEq)]
pub struct OrbitParams {
    pub rotate_speed: f32,
    pub pan_speed: f32,
    pub zoom_speed: f32,
    pub pitch_policy: PitchPolicy,
}

impl Default for OrbitParams {
    fn default() -> Self {
        Self {
            rotate_speed: DEFAULT_ROTATE_SPEED,
            pan_speed: DEFAULT_PAN_SPEED,
            zoom_speed: DEFAULT_ZOOM_SPEED,
            pitch_policy: PitchPolicy::Reject,
        }
    }
}

/// Pose of the displayed object as seen by the renderer.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ObjectTransform {
    pub rotation_x: f32,
    pub rotation_y: f32,
    pub position: Vec3,
}

impl ObjectTransform {
    /// Translation, then yaw, then pitch (pitch is applied to the object first).
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position)
            * Mat4::from_rotation_y(self.rotation_y)
            * Mat4::from_rotation_x(self.rotation_x)
    }
}

#[derive(Clone, Debug)]
pub struct OrbitController {
    params: OrbitParams,
    initial: ObjectTransform,
    transform: ObjectTransform,
}

impl OrbitController {
    pub fn new(params: OrbitParams) -> Self {
        Self::with_transform(params, ObjectTransform::default())
    }

    pub fn with_transform(params: OrbitParams, initial: ObjectTransform) -> Self {
        Self {
            params,
            initial,
            transform: initial,
        }
    }

    #[inline]
    pub fn transform(&self) -> &ObjectTransform {
        &self.transform
    }

    /// Open an object drag anchored at `pointer`.
    pub fn begin(&self, pointer: PointerSample) -> ObjectDrag {
        ObjectDrag {
            last_sample: pointer,
        }
    }

    /// Apply the delta since the session's last sample, then advance the sample.
    pub fn drag(&mut self, drag: &mut ObjectDrag, pointer: PointerSample, modifiers: Modifiers) {
        let delta = pointer - drag.last_sample;
        if modifiers.pans() {
            let speed = self.params.pan_speed;
            self.transform.position.x += delta.x * speed;
            // screen Y grows downward, world Y upward
            self.transform.position.y -= delta.y * speed;
        } else {
            let speed = self.params.rotate_speed;
            self.transform.rotation_y += delta.x * speed;
            let pitch = self.transform.rotation_x + delta.y * speed;
            match self.params.pitch_policy {
                PitchPolicy::Reject => {
                    if pitch > -FRAC_PI_2 && pitch < FRAC_PI_2 {
                        self.transform.rotation_x = pitch;
                    }
                }
                PitchPolicy::Unbounded => self.transform.rotation_x = pitch,
            }
        }
        drag.last_sample = pointer;
    }

    /// Wheel zoom. Independent of any drag session and unbounded.
    pub fn wheel(&mut self, delta_y: f32) {
        self.transform.position.z -= delta_y * self.params.zoom_speed;
    }

    pub fn reset(&mut self) {
        self.transform = self.initial;
    }
}
