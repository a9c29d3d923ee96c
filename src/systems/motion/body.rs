use serde::{Deserialize, Serialize};

use crate::core::math::{Rect, Vec2};
use crate::domain::config::JumpTuning;
use crate::systems::physics::{CollisionState, Controller};

/// How a body takes part in the simulation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollisionType {
    /// Receives gravity
    Active,
    /// Ignores gravity; still integrates its own velocity
    Fixed,
}

/// Kinematic body - moves by a per-frame displacement
#[derive(Clone, Debug)]
pub struct Body {
    // === Motion State ===
    /// World position (center of the rect)
    pub pos: Vec2,
    /// Position before the last integration
    pub prev_pos: Vec2,
    /// Displacement per frame
    pub velocity: Vec2,
    /// Added to the velocity per second
    pub acceleration: Vec2,

    // === Shape ===
    pub half_width: f32,
    pub half_height: f32,

    pub collision_type: CollisionType,
    /// Sleeping bodies are skipped by the integrator
    pub sleeping: bool,
    /// Per-body gravity (only applied to `Active` bodies)
    pub gravity: Option<Vec2>,

    /// Ray-fan resolver; without one the body moves freely
    pub controller: Option<Controller>,
}

impl Body {
    /// Create a body centered at `pos` with the given size
    pub fn new(pos: Vec2, width: f32, height: f32, collision_type: CollisionType) -> Self {
        Self {
            pos,
            prev_pos: pos,
            velocity: Vec2::zero(),
            acceleration: Vec2::zero(),
            half_width: width.abs() * 0.5,
            half_height: height.abs() * 0.5,
            collision_type,
            sleeping: false,
            gravity: None,
            controller: None,
        }
    }

    pub fn with_controller(mut self, controller: Controller) -> Self {
        self.controller = Some(controller);
        self
    }

    pub fn with_gravity(mut self, gravity: Vec2) -> Self {
        self.gravity = Some(gravity);
        self
    }

    pub fn width(&self) -> f32 {
        self.half_width * 2.0
    }

    pub fn height(&self) -> f32 {
        self.half_height * 2.0
    }

    /// Collider rect at the current position
    pub fn rect(&self) -> Rect {
        Rect::from_center_size(self.pos, self.width(), self.height())
    }

    pub fn collisions(&self) -> Option<&CollisionState> {
        self.controller.as_ref().map(|c| c.collisions())
    }

    /// Bottom contact reported by the last move
    pub fn is_grounded(&self) -> bool {
        self.collisions().is_some_and(|s| s.bottom)
    }

    /// Start a jump when standing on something. Returns whether it jumped.
    pub fn try_jump(&mut self, tuning: &JumpTuning) -> bool {
        if !self.is_grounded() {
            return false;
        }
        self.velocity.y = -tuning.jump_velocity();
        true
    }

    /// Move without resolving; contact history is dropped
    pub fn teleport(&mut self, pos: Vec2) {
        self.pos = pos;
        self.prev_pos = pos;
        if let Some(controller) = self.controller.as_mut() {
            controller.clear_contacts();
        }
    }
}
