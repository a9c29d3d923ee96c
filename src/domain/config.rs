//! Physics configuration
//!
//! Values are set once when a body is created. The JS side ships them as a
//! JSON bundle; angles may be given in radians (`max_climb_angle`) or degrees
//! (`max_climb_angle_deg`, wins when both are present).

use serde::{Deserialize, Serialize};

use crate::core::math::Vec2;

/// Ray counts below this are raised to it (spacing divides by `count - 1`)
pub const MIN_RAY_COUNT: u32 = 2;

pub const DEFAULT_SKIN_WIDTH: f32 = 1.0;
pub const DEFAULT_RAY_COUNT: u32 = 4;
/// 80 degrees
pub const DEFAULT_MAX_SLOPE_ANGLE: f32 = 80.0 * std::f32::consts::PI / 180.0;
/// How far below the body the descend probe searches for a slope
pub const DEFAULT_DESCEND_PROBE: f32 = 100.0;

#[inline]
pub fn clamp_ray_count(count: u32) -> u32 {
    count.max(MIN_RAY_COUNT)
}

/// Per-body ray-fan configuration
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Inset applied to the collider before rays are cast
    pub skin_width: f32,
    /// Rays along the left/right edges
    pub horizontal_ray_count: u32,
    /// Rays along the top/bottom edges
    pub vertical_ray_count: u32,
    /// Steepest slope that can be walked up (radians)
    pub max_climb_angle: f32,
    /// Steepest slope that can be walked down (radians)
    pub max_descend_angle: f32,
    /// Length of the downward descend probe (not scaled by velocity)
    pub descend_probe_distance: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            skin_width: DEFAULT_SKIN_WIDTH,
            horizontal_ray_count: DEFAULT_RAY_COUNT,
            vertical_ray_count: DEFAULT_RAY_COUNT,
            max_climb_angle: DEFAULT_MAX_SLOPE_ANGLE,
            max_descend_angle: DEFAULT_MAX_SLOPE_ANGLE,
            descend_probe_distance: DEFAULT_DESCEND_PROBE,
        }
    }
}

impl PhysicsConfig {
    /// Parse a JSON config; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, String> {
        let bundle: ConfigBundle = serde_json::from_str(json).map_err(|e| e.to_string())?;
        Ok(bundle.into_parts()?.0)
    }

    pub fn to_json(&self) -> String {
        // Plain numeric struct, serialization cannot fail
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Ray counts raised to the minimum. Everything else is left untouched.
    pub fn clamped(mut self) -> Self {
        self.horizontal_ray_count = clamp_ray_count(self.horizontal_ray_count);
        self.vertical_ray_count = clamp_ray_count(self.vertical_ray_count);
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.skin_width.is_finite() || self.skin_width < 0.0 {
            return Err(format!("skin_width must be finite and >= 0, got {}", self.skin_width));
        }
        check_angle("max_climb_angle", self.max_climb_angle)?;
        check_angle("max_descend_angle", self.max_descend_angle)?;
        if !self.descend_probe_distance.is_finite() || self.descend_probe_distance <= 0.0 {
            return Err(format!(
                "descend_probe_distance must be finite and > 0, got {}",
                self.descend_probe_distance
            ));
        }
        Ok(())
    }
}

fn check_angle(name: &str, angle: f32) -> Result<(), String> {
    if !angle.is_finite() || angle <= 0.0 || angle >= std::f32::consts::FRAC_PI_2 {
        return Err(format!("{} must be within (0, 90) degrees, got {} rad", name, angle));
    }
    Ok(())
}

/// Jump shaping: derive gravity and take-off speed from a height and time to apex
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct JumpTuning {
    /// Apex height (units)
    pub jump_height: f32,
    /// Seconds from take-off to apex
    pub time_to_apex: f32,
}

impl Default for JumpTuning {
    fn default() -> Self {
        Self {
            // 100px at 60fps
            jump_height: 100.0 / 60.0,
            time_to_apex: 0.4,
        }
    }
}

impl JumpTuning {
    /// Downward gravity that makes the jump peak at `jump_height`
    pub fn gravity(&self) -> Vec2 {
        Vec2::new(0.0, (2.0 * self.jump_height) / self.time_to_apex.powi(2))
    }

    /// Upward take-off speed (positive number, applied as -Y)
    pub fn jump_velocity(&self) -> f32 {
        (2.0 * self.jump_height) / self.time_to_apex
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.jump_height.is_finite() || self.jump_height <= 0.0 {
            return Err(format!("jump_height must be > 0, got {}", self.jump_height));
        }
        if !self.time_to_apex.is_finite() || self.time_to_apex <= 0.0 {
            return Err(format!("time_to_apex must be > 0, got {}", self.time_to_apex));
        }
        Ok(())
    }
}

// === JSON bundle (raw) ===

#[derive(Deserialize, Default)]
pub(crate) struct ConfigBundle {
    #[serde(default)]
    skin_width: Option<f32>,
    #[serde(default)]
    horizontal_ray_count: Option<u32>,
    #[serde(default)]
    vertical_ray_count: Option<u32>,
    #[serde(default)]
    max_climb_angle: Option<f32>,
    #[serde(default)]
    max_climb_angle_deg: Option<f32>,
    #[serde(default)]
    max_descend_angle: Option<f32>,
    #[serde(default)]
    max_descend_angle_deg: Option<f32>,
    #[serde(default)]
    descend_probe_distance: Option<f32>,
    #[serde(default)]
    jump: Option<JumpTuning>,
}

impl ConfigBundle {
    pub(crate) fn parse(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| e.to_string())
    }

    pub(crate) fn into_parts(self) -> Result<(PhysicsConfig, Option<JumpTuning>), String> {
        let defaults = PhysicsConfig::default();

        let max_climb_angle = match (self.max_climb_angle_deg, self.max_climb_angle) {
            (Some(deg), _) => deg.to_radians(),
            (None, Some(rad)) => rad,
            (None, None) => defaults.max_climb_angle,
        };
        let max_descend_angle = match (self.max_descend_angle_deg, self.max_descend_angle) {
            (Some(deg), _) => deg.to_radians(),
            (None, Some(rad)) => rad,
            (None, None) => defaults.max_descend_angle,
        };

        let config = PhysicsConfig {
            skin_width: self.skin_width.unwrap_or(defaults.skin_width),
            horizontal_ray_count: self.horizontal_ray_count.unwrap_or(defaults.horizontal_ray_count),
            vertical_ray_count: self.vertical_ray_count.unwrap_or(defaults.vertical_ray_count),
            max_climb_angle,
            max_descend_angle,
            descend_probe_distance: self
                .descend_probe_distance
                .unwrap_or(defaults.descend_probe_distance),
        }
        .clamped();
        config.validate()?;

        if let Some(jump) = self.jump.as_ref() {
            jump.validate()?;
        }

        Ok((config, self.jump))
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
