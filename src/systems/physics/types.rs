use serde::{Deserialize, Serialize};

use crate::core::math::Vec2;

/// Identifier of a collider in the world (bodies own one too)
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColliderId(pub u32);

/// Result of a single ray query against one collider
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    /// Distance from the ray origin to the contact point
    pub distance: f32,
    /// Contact point in world space
    pub point: Vec2,
    /// Outward surface normal at the contact point (unit length)
    pub normal: Vec2,
    /// Collider that was struck
    pub collider: ColliderId,
}
