use std::collections::BTreeSet;

use serde::Serialize;

use super::types::ColliderId;

/// Per-body collision flags and contact generations.
///
/// Flags describe the current frame only. The two contact generations exist
/// to detect start/end transitions by set difference.
#[derive(Clone, Debug, Default, Serialize)]
pub struct CollisionState {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,

    /// Angle of the slope being walked this frame (radians)
    pub slope_angle: f32,
    /// `slope_angle` of the previous completed frame
    pub slope_angle_old: f32,
    pub climbing_slope: bool,
    pub descending_slope: bool,

    #[serde(skip)]
    contacts: BTreeSet<ColliderId>,
    #[serde(skip)]
    previous_contacts: BTreeSet<ColliderId>,
}

impl CollisionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new frame: keep last frame's slope angle, rotate the contact
    /// generations, then clear every per-frame field.
    pub fn reset(&mut self) {
        self.slope_angle_old = self.slope_angle;
        self.previous_contacts = std::mem::take(&mut self.contacts);

        self.slope_angle = 0.0;
        self.top = false;
        self.bottom = false;
        self.left = false;
        self.right = false;
        self.climbing_slope = false;
        self.descending_slope = false;
    }

    /// Register a contact for this frame. Returns true the first time the
    /// collider is added to the current generation.
    pub fn add_contact(&mut self, collider: ColliderId) -> bool {
        self.contacts.insert(collider)
    }

    /// True when the collider was not in contact last frame
    pub fn is_new_episode(&self, collider: ColliderId) -> bool {
        !self.previous_contacts.contains(&collider)
    }

    /// Colliders touched last frame but not this frame, in id order
    pub fn ended_contacts(&self) -> Vec<ColliderId> {
        self.previous_contacts.difference(&self.contacts).copied().collect()
    }

    pub fn contacts(&self) -> impl Iterator<Item = ColliderId> + '_ {
        self.contacts.iter().copied()
    }

    pub fn is_touching(&self, collider: ColliderId) -> bool {
        self.contacts.contains(&collider)
    }

    pub fn is_grounded(&self) -> bool {
        self.bottom
    }

    /// Forget all contact history (body teleported or removed)
    pub fn clear_contacts(&mut self) {
        self.contacts.clear();
        self.previous_contacts.clear();
    }
}
