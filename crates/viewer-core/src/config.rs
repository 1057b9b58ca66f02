//! Tunable parameters for the viewer input mapping.
//!
//! Defaults live here as constants; the web front end overrides them from
//! `data-*` attributes on the canvas through [`ViewerConfig::apply_override`].

use crate::orbit::{OrbitParams, PitchPolicy};
use thiserror::Error;

// Canonical slider domain in absolute viewport px (clientX space)
pub const SLIDER_DOMAIN_MIN: f32 = 24.0;
pub const SLIDER_DOMAIN_MAX: f32 = 140.0;

// Pointer X is already in the canonical origin, so no correction by default
pub const SLIDER_ORIGIN_OFFSET: f32 = 0.0;

// Orbit speeds: transform units per pixel (or per wheel delta unit)
pub const DEFAULT_ROTATE_SPEED: f32 = 0.005;
pub const DEFAULT_PAN_SPEED: f32 = 0.01;
pub const DEFAULT_ZOOM_SPEED: f32 = 0.001;

/// Keys accepted by [`ViewerConfig::apply_override`].
pub const OVERRIDE_KEYS: [&str; 4] = ["rotate-speed", "pan-speed", "zoom-speed", "pitch-policy"];

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("unknown config key `{0}`")]
    UnknownKey(String),
    #[error("invalid number `{value}` for `{key}`")]
    InvalidNumber { key: String, value: String },
    #[error("`{key}` must be finite and positive, got {value}")]
    OutOfRange { key: String, value: f32 },
    #[error("unknown pitch policy `{0}` (expected `reject` or `unbounded`)")]
    UnknownPitchPolicy(String),
}

/// Slider mapping parameters shared by every widget.
#[derive(Clone, Debug, PartialEq)]
pub struct SliderParams {
    /// Subtracted from pointer X before clamping. Fixed per coordinate origin.
    pub origin_offset: f32,
    /// Domain used for widgets that do not declare their own.
    pub default_domain: (f32, f32),
}

impl Default for SliderParams {
    fn default() -> Self {
        Self {
            origin_offset: SLIDER_ORIGIN_OFFSET,
            default_domain: (SLIDER_DOMAIN_MIN, SLIDER_DOMAIN_MAX),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewerConfig {
    pub orbit: OrbitParams,
    pub slider: SliderParams,
}

impl ViewerConfig {
    /// Apply one `key = value` override. Keys use the attribute spelling
    /// without the `data-` prefix, e.g. `rotate-speed`.
    pub fn apply_override(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "rotate-speed" => self.orbit.rotate_speed = parse_speed(key, value)?,
            "pan-speed" => self.orbit.pan_speed = parse_speed(key, value)?,
            "zoom-speed" => self.orbit.zoom_speed = parse_speed(key, value)?,
            "pitch-policy" => self.orbit.pitch_policy = parse_pitch_policy(value)?,
            _ => return Err(ConfigError::UnknownKey(key.to_owned())),
        }
        log::info!("[config] {} = {}", key, value.trim());
        Ok(())
    }

    /// Apply every override, skipping (and collecting) the ones that fail.
    pub fn apply_overrides<'a>(
        &mut self,
        pairs: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Vec<ConfigError> {
        pairs
            .into_iter()
            .filter_map(|(k, v)| self.apply_override(k, v).err())
            .collect()
    }
}

fn parse_speed(key: &str, value: &str) -> Result<f32, ConfigError> {
    let v: f32 = value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidNumber {
            key: key.to_owned(),
            value: value.to_owned(),
        })?;
    if !v.is_finite() || v <= 0.0 {
        return Err(ConfigError::OutOfRange {
            key: key.to_owned(),
            value: v,
        });
    }
    Ok(v)
}

fn parse_pitch_policy(value: &str) -> Result<PitchPolicy, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "reject" | "clamped" => Ok(PitchPolicy::Reject),
        "unbounded" | "free" => Ok(PitchPolicy::Unbounded),
        other => Err(ConfigError::UnknownPitchPolicy(other.to_owned())),
    }
}
